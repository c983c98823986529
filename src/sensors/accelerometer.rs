//! Accelerometer sensor types
//!
//! Provides the range and filter settings and the raw data type for the
//! LSM6DSOX's 3-axis accelerometer.

use super::MILLI_G_TO_ACCEL;
use crate::Error;

/// Conversion factors in mg/LSB, indexed by the `FS_XL` code
const CONVERSION_FACTORS: [f32; 4] = [0.061, 0.488, 0.122, 0.244];

/// Accelerometer full-scale range
///
/// Discriminants are the `FS_XL` codes with `FS_MODE` = 0, which is why
/// ±16g sits between ±2g and ±4g.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    /// ±2g range (most sensitive, least range)
    G2 = 0b00,
    /// ±16g range (least sensitive, most range)
    G16 = 0b01,
    /// ±4g range
    G4 = 0b10,
    /// ±8g range
    G8 = 0b11,
}

impl AccelRange {
    /// All ranges, in register code order
    pub const ALL: [Self; 4] = [Self::G2, Self::G16, Self::G4, Self::G8];

    /// Look up a range by its register code
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0b00 => Some(Self::G2),
            0b01 => Some(Self::G16),
            0b10 => Some(Self::G4),
            0b11 => Some(Self::G8),
            _ => None,
        }
    }

    /// Register code
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Conversion factor in mg/LSB
    #[must_use]
    pub const fn conversion_factor(self) -> f32 {
        CONVERSION_FACTORS[self as usize]
    }

    /// Get the maximum value in g
    #[must_use]
    pub const fn max_value(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }
}

impl TryFrom<u8> for AccelRange {
    type Error = Error<()>;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or(Error::InvalidSetting)
    }
}

/// Accelerometer high-pass / slope filter cutoff (`HPCF_XL`)
///
/// The cutoff is expressed as a divider of the accelerometer output data rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HighPassFilter {
    /// Slope filter (ODR/4)
    Slope = 0b000,
    /// ODR/10
    Div10 = 0b001,
    /// ODR/20
    Div20 = 0b010,
    /// ODR/45
    Div45 = 0b011,
    /// ODR/100
    Div100 = 0b100,
    /// ODR/200
    Div200 = 0b101,
    /// ODR/400
    Div400 = 0b110,
    /// ODR/800
    Div800 = 0b111,
}

impl HighPassFilter {
    /// All cutoffs, in register code order
    pub const ALL: [Self; 8] = [
        Self::Slope,
        Self::Div10,
        Self::Div20,
        Self::Div45,
        Self::Div100,
        Self::Div200,
        Self::Div400,
        Self::Div800,
    ];

    /// Look up a cutoff by its register code
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if (bits as usize) < Self::ALL.len() {
            Some(Self::ALL[bits as usize])
        } else {
            None
        }
    }

    /// Register code
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// ODR divider giving the cutoff frequency
    #[must_use]
    pub const fn divider(self) -> u16 {
        match self {
            Self::Slope => 4,
            Self::Div10 => 10,
            Self::Div20 => 20,
            Self::Div45 => 45,
            Self::Div100 => 100,
            Self::Div200 => 200,
            Self::Div400 => 400,
            Self::Div800 => 800,
        }
    }
}

impl TryFrom<u8> for HighPassFilter {
    type Error = Error<()>;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or(Error::InvalidSetting)
    }
}

/// Accelerometer data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelData {
    /// X-axis acceleration (raw)
    pub x: i16,
    /// Y-axis acceleration (raw)
    pub y: i16,
    /// Z-axis acceleration (raw)
    pub z: i16,
}

impl AccelData {
    /// Convert to m/s² using a conversion factor in mg/LSB
    /// (from [`AccelRange::conversion_factor()`])
    #[must_use]
    pub fn to_meters_per_second_squared(self, factor: f32) -> (f32, f32, f32) {
        let scale = |raw: i16| f32::from(raw) * factor * MILLI_G_TO_ACCEL;
        (scale(self.x), scale(self.y), scale(self.z))
    }
}

impl From<[i16; 3]> for AccelData {
    fn from([x, y, z]: [i16; 3]) -> Self {
        Self { x, y, z }
    }
}
