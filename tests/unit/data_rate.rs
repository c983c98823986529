//! Unit tests for output data rate selection

use crate::common::{MockDelay, create_mock_driver};
use lsm6dsox::registers::{CTRL1_XL, CTRL2_G};
use lsm6dsox::{AccelRange, DataRate, Error, GyroRange};

#[test]
fn test_default_rates() {
    let (mut driver, _interface) = create_mock_driver();

    assert_eq!(driver.acceleration_data_rate().unwrap(), DataRate::Hz104);
    assert_eq!(driver.gyro_data_rate().unwrap(), DataRate::Hz104);
}

#[test]
fn test_accel_rate_round_trip() {
    let (mut driver, interface) = create_mock_driver();
    let mut delay = MockDelay::default();

    for rate in DataRate::ALL {
        driver.set_acceleration_data_rate(rate, &mut delay).unwrap();

        assert_eq!(driver.acceleration_data_rate().unwrap(), rate);
        assert_eq!(interface.get_register(CTRL1_XL) >> 4, rate.bits());
    }
}

#[test]
fn test_gyro_rate_round_trip() {
    let (mut driver, interface) = create_mock_driver();

    for rate in DataRate::ALL {
        driver.set_gyro_data_rate(rate).unwrap();

        assert_eq!(driver.gyro_data_rate().unwrap(), rate);
        assert_eq!(interface.get_register(CTRL2_G) >> 4, rate.bits());
    }
}

#[test]
fn test_rate_from_raw_code() {
    let (mut driver, _interface) = create_mock_driver();

    driver.set_gyro_data_rate(0b1011u8).unwrap();

    assert_eq!(driver.gyro_data_rate().unwrap(), DataRate::Hz1_6);
}

#[test]
fn test_rate_keeps_range_bits() {
    let (mut driver, interface) = create_mock_driver();
    let mut delay = MockDelay::default();
    driver.set_acceleration_range(AccelRange::G16, &mut delay).unwrap();
    driver.set_gyro_range(GyroRange::Dps2000, &mut delay).unwrap();

    driver.set_acceleration_data_rate(DataRate::Hz6660, &mut delay).unwrap();
    driver.set_gyro_data_rate(DataRate::Hz12_5).unwrap();

    assert_eq!(interface.get_register(CTRL1_XL), 0b1010_0100);
    assert_eq!(interface.get_register(CTRL2_G), 0b0001_1100);
}

#[test]
fn test_invalid_rates_rejected() {
    let (mut driver, interface) = create_mock_driver();
    let mut delay = MockDelay::default();

    for code in [12u8, 13, 14, 15, 0x40, 0xFF] {
        assert!(matches!(
            driver.set_acceleration_data_rate(code, &mut delay),
            Err(Error::InvalidSetting)
        ));
        assert!(matches!(
            driver.set_gyro_data_rate(code),
            Err(Error::InvalidSetting)
        ));
    }

    assert_eq!(interface.write_count(), 0);
    assert_eq!(delay.elapsed_ms(), 0);
    assert_eq!(driver.acceleration_data_rate().unwrap(), DataRate::Hz104);
    assert_eq!(driver.gyro_data_rate().unwrap(), DataRate::Hz104);
}

#[test]
fn test_only_accel_rate_waits() {
    let (mut driver, _interface) = create_mock_driver();
    let mut delay = MockDelay::default();

    driver.set_acceleration_data_rate(DataRate::Hz52, &mut delay).unwrap();
    assert_eq!(delay.elapsed_ms(), 200);

    delay.clear();
    driver.set_gyro_data_rate(DataRate::Hz52).unwrap();
    assert_eq!(delay.elapsed_ms(), 0);
}

#[test]
fn test_undefined_rate_in_register() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(CTRL1_XL, 0b1100_1000);
    interface.set_register(CTRL2_G, 0b1111_0000);

    assert!(matches!(
        driver.acceleration_data_rate(),
        Err(Error::InvalidSetting)
    ));
    assert!(matches!(driver.gyro_data_rate(), Err(Error::InvalidSetting)));
}

#[test]
fn test_rate_frequencies() {
    assert_eq!(DataRate::Hz1660.hz(), 1660.0);
    assert_eq!(DataRate::Hz12_5.hz(), 12.5);
}
