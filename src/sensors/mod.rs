//! Sensor modules for the LSM6DSOX
//!
//! This module provides the typed settings and raw data types for each sensor
//! in the LSM6DSOX:
//! - Accelerometer (3-axis)
//! - Gyroscope (3-axis)
//! - Temperature sensor
//!
//! Output data rates are shared between accelerometer and gyroscope. All
//! sensor operations are performed through methods on `Lsm6dsox`.

pub mod accelerometer;
pub mod data_rate;
pub mod gyroscope;

// Re-export main types
pub use accelerometer::{AccelData, AccelRange, HighPassFilter};
pub use data_rate::DataRate;
pub use gyroscope::{GyroData, GyroRange};

/// Standard gravity in m/s² per milli-g
pub const MILLI_G_TO_ACCEL: f32 = 0.009_806_65;

/// Temperature sensitivity in LSB/°C
pub const TEMPERATURE_SENSITIVITY: f32 = 256.0;

/// Temperature reading at raw value 0, in °C
pub const TEMPERATURE_OFFSET: f32 = 25.0;

/// Convert a raw `OUT_TEMP` value to degrees Celsius
#[must_use]
pub fn temperature_celsius(raw: i16) -> f32 {
    f32::from(raw) / TEMPERATURE_SENSITIVITY + TEMPERATURE_OFFSET
}
