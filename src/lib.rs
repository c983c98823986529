#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod access;
pub mod device;
pub mod interface;
pub mod registers;
pub mod sensors;

// Re-export main types
pub use device::Lsm6dsox;
pub use interface::{I2cInterface, SpiInterface};
pub use sensors::{AccelData, AccelRange, DataRate, GyroData, GyroRange, HighPassFilter};

/// LSM6DSOX I2C address when the SA0 pin is low (default: 0x6A)
///
/// Use [`I2cInterface::default()`] for this configuration.
pub const I2C_ADDRESS_SA0_LOW: u8 = 0x6A;

/// LSM6DSOX I2C address when the SA0 pin is high (alternative: 0x6B)
///
/// Use [`I2cInterface::alternative()`] for this configuration.
pub const I2C_ADDRESS_SA0_HIGH: u8 = 0x6B;

/// Expected value of the `WHO_AM_I` register
pub const WHO_AM_I_VALUE: u8 = 0x6C;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// `WHO_AM_I` did not match [`WHO_AM_I_VALUE`] (contains the actual value read)
    DeviceNotFound(u8),
    /// Setting is not one of the allowed values, or a register holds a code
    /// with no known meaning
    InvalidSetting,
    /// Software reset bit did not clear within the polling budget
    ResetTimeout,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
