//! Unit tests for the accelerometer high-pass filter setting

use crate::common::create_mock_driver;
use lsm6dsox::registers::CTRL8_XL;
use lsm6dsox::{Error, HighPassFilter};

#[test]
fn test_filter_round_trip() {
    let (mut driver, interface) = create_mock_driver();

    for filter in HighPassFilter::ALL {
        driver.set_high_pass_filter(filter).unwrap();

        assert_eq!(driver.high_pass_filter().unwrap(), filter);
        assert_eq!(interface.get_register(CTRL8_XL) >> 5, filter.bits());
    }
}

#[test]
fn test_filter_keeps_other_bits() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(CTRL8_XL, 0b0001_1011);

    driver.set_high_pass_filter(HighPassFilter::Div400).unwrap();
    assert_eq!(interface.get_register(CTRL8_XL), 0b1101_1011);

    driver.set_high_pass_filter(HighPassFilter::Slope).unwrap();
    assert_eq!(interface.get_register(CTRL8_XL), 0b0001_1011);
}

#[test]
fn test_filter_from_raw_code() {
    let (mut driver, _interface) = create_mock_driver();

    driver.set_high_pass_filter(0b011u8).unwrap();

    assert_eq!(driver.high_pass_filter().unwrap(), HighPassFilter::Div45);
}

#[test]
fn test_invalid_filter_rejected() {
    let (mut driver, interface) = create_mock_driver();
    driver.set_high_pass_filter(HighPassFilter::Div20).unwrap();
    interface.clear_operations();

    for code in [8u8, 9, 0x20, 0xFF] {
        assert!(matches!(
            driver.set_high_pass_filter(code),
            Err(Error::InvalidSetting)
        ));
    }

    assert_eq!(interface.write_count(), 0);
    assert_eq!(driver.high_pass_filter().unwrap(), HighPassFilter::Div20);
}

#[test]
fn test_filter_write_is_single_read_modify_write() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_high_pass_filter(HighPassFilter::Div100).unwrap();

    assert_eq!(interface.read_count(CTRL8_XL), 1);
    assert_eq!(interface.writes_to(CTRL8_XL), vec![0b1000_0000]);
}

#[test]
fn test_filter_does_not_touch_full_scale_mode() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(CTRL8_XL, 0b0000_0010);

    driver.set_high_pass_filter(HighPassFilter::Div800).unwrap();

    assert_eq!(interface.get_register(CTRL8_XL), 0b1110_0010);
}
