//! Unit tests for the I2C bus adapter

use crate::common::MockDelay;
use crate::common::mock_i2c::{MockI2c, Transfer};
use lsm6dsox::registers::{CTRL1_XL, OUTX_L_A, WHO_AM_I};
use lsm6dsox::{Error, I2C_ADDRESS_SA0_HIGH, I2C_ADDRESS_SA0_LOW, I2cInterface, Lsm6dsox};

#[test]
fn test_default_and_alternative_addresses() {
    assert_eq!(I2cInterface::default(()).address(), I2C_ADDRESS_SA0_LOW);
    assert_eq!(I2cInterface::alternative(()).address(), I2C_ADDRESS_SA0_HIGH);
    assert_eq!(I2cInterface::new((), 0x42).address(), 0x42);
}

#[test]
fn test_driver_over_i2c() {
    let i2c = MockI2c::new(I2C_ADDRESS_SA0_LOW);
    let mut driver = Lsm6dsox::new(I2cInterface::default(i2c), &mut MockDelay::default()).unwrap();

    assert_eq!(driver.read_who_am_i().unwrap(), 0x6C);

    let i2c = driver.release().release();
    assert_eq!(i2c.register(CTRL1_XL), 0b0100_1000);
}

#[test]
fn test_block_read_is_one_transaction() {
    let mut i2c = MockI2c::new(I2C_ADDRESS_SA0_LOW);
    i2c.set_register(OUTX_L_A, 0xE8);
    i2c.set_register(OUTX_L_A + 1, 0x03);
    let mut driver = Lsm6dsox::new(I2cInterface::default(i2c), &mut MockDelay::default()).unwrap();

    let raw = driver.read_accel_raw().unwrap();
    assert_eq!(raw.x, 1000);

    let i2c = driver.release().release();
    let transfers = i2c.transfers();
    let tail = &transfers[transfers.len() - 2..];
    assert_eq!(tail, &[Transfer::Write(vec![OUTX_L_A]), Transfer::Read(6)]);
}

#[test]
fn test_register_write_frame() {
    let i2c = MockI2c::new(I2C_ADDRESS_SA0_LOW);
    let driver = Lsm6dsox::new(I2cInterface::default(i2c), &mut MockDelay::default()).unwrap();

    let i2c = driver.release().release();
    let expected = Transfer::Write(vec![CTRL1_XL, 0b0100_1000]);
    assert!(i2c.transfers().contains(&expected));
}

#[test]
fn test_wrong_address_is_bus_error() {
    let i2c = MockI2c::new(I2C_ADDRESS_SA0_HIGH);

    let result = Lsm6dsox::new(I2cInterface::default(i2c), &mut MockDelay::default());

    assert!(matches!(result, Err(Error::Bus(_))));
}

#[test]
fn test_identity_over_i2c() {
    let mut i2c = MockI2c::new(I2C_ADDRESS_SA0_LOW);
    i2c.set_register(WHO_AM_I, 0x6A);

    let result = Lsm6dsox::new(I2cInterface::default(i2c), &mut MockDelay::default());

    assert!(matches!(result, Err(Error::DeviceNotFound(0x6A))));
}
