//! Gyroscope sensor types
//!
//! Provides the range setting and the raw data type for the LSM6DSOX's
//! 3-axis gyroscope.

use crate::Error;

/// Conversion factors in mdps/LSB, indexed by the `FS_G` code
const CONVERSION_FACTORS: [f32; 4] = [8.75, 17.5, 35.0, 70.0];

/// Gyroscope full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroRange {
    /// ±250°/s range
    Dps250 = 0b00,
    /// ±500°/s range
    Dps500 = 0b01,
    /// ±1000°/s range
    Dps1000 = 0b10,
    /// ±2000°/s range
    Dps2000 = 0b11,
}

impl GyroRange {
    /// All ranges, in register code order
    pub const ALL: [Self; 4] = [Self::Dps250, Self::Dps500, Self::Dps1000, Self::Dps2000];

    /// Look up a range by its register code
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0b00 => Some(Self::Dps250),
            0b01 => Some(Self::Dps500),
            0b10 => Some(Self::Dps1000),
            0b11 => Some(Self::Dps2000),
            _ => None,
        }
    }

    /// Register code
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Conversion factor in mdps/LSB
    #[must_use]
    pub const fn conversion_factor(self) -> f32 {
        CONVERSION_FACTORS[self as usize]
    }

    /// Get the maximum value in °/s
    #[must_use]
    pub const fn max_value(self) -> u16 {
        match self {
            Self::Dps250 => 250,
            Self::Dps500 => 500,
            Self::Dps1000 => 1000,
            Self::Dps2000 => 2000,
        }
    }
}

impl TryFrom<u8> for GyroRange {
    type Error = Error<()>;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or(Error::InvalidSetting)
    }
}

/// Gyroscope data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroData {
    /// X-axis rotation (raw)
    pub x: i16,
    /// Y-axis rotation (raw)
    pub y: i16,
    /// Z-axis rotation (raw)
    pub z: i16,
}

impl GyroData {
    /// Convert to rad/s using a conversion factor in mdps/LSB
    /// (from [`GyroRange::conversion_factor()`])
    #[must_use]
    pub fn to_radians_per_second(self, factor: f32) -> (f32, f32, f32) {
        let scale = |raw: i16| (f32::from(raw) * factor / 1000.0).to_radians();
        (scale(self.x), scale(self.y), scale(self.z))
    }
}

impl From<[i16; 3]> for GyroData {
    fn from([x, y, z]: [i16; 3]) -> Self {
        Self { x, y, z }
    }
}
