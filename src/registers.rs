//! Register definitions for the LSM6DSOX
//!
//! Addresses are in the primary (user) register page. Every logical setting the
//! driver touches is described once here, either as a bit field inside a
//! single control register or as a block of little-endian integers over the
//! output registers.
//!
//! ## Control registers
//! - `CTRL1_XL`: accelerometer data rate (bits 7:4) and range (bits 3:2)
//! - `CTRL2_G`: gyroscope data rate (bits 7:4) and range (bits 3:2)
//! - `CTRL3_C`: block data update (bit 6) and software reset (bit 0)
//! - `CTRL8_XL`: high-pass filter cutoff (bits 7:5) and full-scale mode (bit 1)

use crate::access::{Bitfield, RegisterStruct};

/// `WHO_AM_I` - Device identification (reads [`crate::WHO_AM_I_VALUE`])
pub const WHO_AM_I: u8 = 0x0F;
/// `CTRL1_XL` - Accelerometer control 1
pub const CTRL1_XL: u8 = 0x10;
/// `CTRL2_G` - Gyroscope control 2
pub const CTRL2_G: u8 = 0x11;
/// `CTRL3_C` - Control 3
pub const CTRL3_C: u8 = 0x12;
/// `CTRL8_XL` - Accelerometer control 8
pub const CTRL8_XL: u8 = 0x17;
/// `OUT_TEMP_L` - Temperature output, low byte first (2 bytes)
pub const OUT_TEMP_L: u8 = 0x20;
/// `OUTX_L_G` - Gyroscope X/Y/Z output, low byte first (6 bytes)
pub const OUTX_L_G: u8 = 0x22;
/// `OUTX_L_A` - Accelerometer X/Y/Z output, low byte first (6 bytes)
pub const OUTX_L_A: u8 = 0x28;

// ==================== BLOCKS ====================

pub(crate) const DEVICE_ID: RegisterStruct<u8, 1> = RegisterStruct::new(WHO_AM_I);
pub(crate) const RAW_ACCEL: RegisterStruct<i16, 3> = RegisterStruct::new(OUTX_L_A);
pub(crate) const RAW_GYRO: RegisterStruct<i16, 3> = RegisterStruct::new(OUTX_L_G);
pub(crate) const RAW_TEMP: RegisterStruct<i16, 1> = RegisterStruct::new(OUT_TEMP_L);

// ==================== FIELDS ====================

/// `FS_XL` - accelerometer full-scale selection
pub(crate) const ACCEL_RANGE: Bitfield = Bitfield::new(CTRL1_XL, 2, 2);
/// `ODR_XL` - accelerometer output data rate
pub(crate) const ACCEL_DATA_RATE: Bitfield = Bitfield::new(CTRL1_XL, 4, 4);

/// `FS_G` - gyroscope full-scale selection
pub(crate) const GYRO_RANGE: Bitfield = Bitfield::new(CTRL2_G, 2, 2);
/// `ODR_G` - gyroscope output data rate
pub(crate) const GYRO_DATA_RATE: Bitfield = Bitfield::new(CTRL2_G, 4, 4);

/// `SW_RESET` - self-clearing software reset
pub(crate) const SW_RESET: Bitfield = Bitfield::new(CTRL3_C, 1, 0);
/// `BDU` - output registers not updated until both bytes have been read
pub(crate) const BLOCK_DATA_UPDATE: Bitfield = Bitfield::new(CTRL3_C, 1, 6);

/// `FS_MODE` - selects the old (±2/4/8/16 g) full-scale encoding when 0
pub(crate) const ACCEL_FULL_SCALE_MODE: Bitfield = Bitfield::new(CTRL8_XL, 1, 1);
/// `HPCF_XL` - accelerometer high-pass / slope filter cutoff
pub(crate) const HIGH_PASS_FILTER: Bitfield = Bitfield::new(CTRL8_XL, 3, 5);
