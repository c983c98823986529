//! Output data rate shared by the accelerometer (`ODR_XL`) and
//! gyroscope (`ODR_G`)

use crate::Error;

/// Output data rate
///
/// 1.6 Hz is only honoured by the accelerometer in low-power mode; the
/// gyroscope treats it as 12.5 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataRate {
    /// Power-down
    Shutdown = 0b0000,
    /// 12.5 Hz
    Hz12_5 = 0b0001,
    /// 26 Hz
    Hz26 = 0b0010,
    /// 52 Hz
    Hz52 = 0b0011,
    /// 104 Hz
    Hz104 = 0b0100,
    /// 208 Hz
    Hz208 = 0b0101,
    /// 416 Hz
    Hz416 = 0b0110,
    /// 833 Hz
    Hz833 = 0b0111,
    /// 1.66 kHz
    Hz1660 = 0b1000,
    /// 3.33 kHz
    Hz3330 = 0b1001,
    /// 6.66 kHz
    Hz6660 = 0b1010,
    /// 1.6 Hz
    Hz1_6 = 0b1011,
}

impl DataRate {
    /// All rates, in register code order
    pub const ALL: [Self; 12] = [
        Self::Shutdown,
        Self::Hz12_5,
        Self::Hz26,
        Self::Hz52,
        Self::Hz104,
        Self::Hz208,
        Self::Hz416,
        Self::Hz833,
        Self::Hz1660,
        Self::Hz3330,
        Self::Hz6660,
        Self::Hz1_6,
    ];

    /// Look up a rate by its register code
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

    /// Nominal rate in Hz (0 for power-down)
    #[must_use]
    pub const fn hz(self) -> f32 {
        match self {
            Self::Shutdown => 0.0,
            Self::Hz12_5 => 12.5,
            Self::Hz26 => 26.0,
            Self::Hz52 => 52.0,
            Self::Hz104 => 104.0,
            Self::Hz208 => 208.0,
            Self::Hz416 => 416.0,
            Self::Hz833 => 833.0,
            Self::Hz1660 => 1660.0,
            Self::Hz3330 => 3330.0,
            Self::Hz6660 => 6660.0,
            Self::Hz1_6 => 1.6,
        }
    }
}

impl TryFrom<u8> for DataRate {
    type Error = Error<()>;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or(Error::InvalidSetting)
    }
}
