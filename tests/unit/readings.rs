//! Unit tests for acceleration and angular rate readings

use crate::common::{MockDelay, Operation, assert_float_eq, create_mock_driver};
use lsm6dsox::registers::{OUTX_L_A, OUTX_L_G};
use lsm6dsox::sensors::MILLI_G_TO_ACCEL;
use lsm6dsox::{AccelData, AccelRange, GyroData, GyroRange};

const EPSILON: f32 = 1e-4;

#[test]
fn test_acceleration_at_4g() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_accel_data(1000, 0, 0);

    let (x, y, z) = driver.acceleration().unwrap();

    assert_float_eq(x, 1000.0 * 0.122 * 0.009_806_65, EPSILON);
    assert_float_eq(x, 1.196_411, EPSILON);
    assert_eq!(y, 0.0);
    assert_eq!(z, 0.0);
}

#[test]
fn test_acceleration_follows_range() {
    let (mut driver, interface) = create_mock_driver();
    let mut delay = MockDelay::default();
    interface.set_accel_data(2049, -2049, 16384);

    for range in AccelRange::ALL {
        driver.set_acceleration_range(range, &mut delay).unwrap();
        let (x, y, z) = driver.acceleration().unwrap();

        let factor = range.conversion_factor() * MILLI_G_TO_ACCEL;
        assert_float_eq(x, 2049.0 * factor, EPSILON);
        assert_float_eq(y, -2049.0 * factor, EPSILON);
        assert_float_eq(z, 16384.0 * factor, EPSILON);
    }
}

#[test]
fn test_one_g_at_2g_range() {
    let (mut driver, interface) = create_mock_driver();
    driver
        .set_acceleration_range(AccelRange::G2, &mut MockDelay::default())
        .unwrap();
    // 1 g = 1000 mg / 0.061 mg/LSB
    interface.set_accel_data(0, 0, 16393);

    let (_, _, z) = driver.acceleration().unwrap();

    assert_float_eq(z, 9.806_65, 1e-2);
}

#[test]
fn test_acceleration_rereads_hardware() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_accel_data(100, 0, 0);
    let (first, _, _) = driver.acceleration().unwrap();
    interface.set_accel_data(200, 0, 0);
    let (second, _, _) = driver.acceleration().unwrap();

    assert_float_eq(second, 2.0 * first, EPSILON);
}

#[test]
fn test_accel_raw_is_little_endian_block() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_accel_data(0x0010, 0x0020, 0x0030);

    let raw = driver.read_accel_raw().unwrap();

    assert_eq!(raw, AccelData { x: 16, y: 32, z: 48 });
    let addresses: Vec<u8> = interface
        .operations()
        .iter()
        .filter_map(|op| match op {
            Operation::ReadRegister { address, .. } => Some(*address),
            Operation::WriteRegister { .. } => None,
        })
        .collect();
    assert_eq!(addresses, (OUTX_L_A..OUTX_L_A + 6).collect::<Vec<_>>());
}

#[test]
fn test_gyro_at_250_dps() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_gyro_data(1000, 0, -1000);

    let (x, y, z) = driver.gyro().unwrap();

    // 1000 LSB * 8.75 mdps/LSB = 8.75 °/s
    assert_float_eq(x, 8.75_f32.to_radians(), EPSILON);
    assert_eq!(y, 0.0);
    assert_float_eq(z, -(8.75_f32.to_radians()), EPSILON);
}

#[test]
fn test_gyro_follows_range() {
    let (mut driver, interface) = create_mock_driver();
    driver
        .set_gyro_range(GyroRange::Dps2000, &mut MockDelay::default())
        .unwrap();
    interface.set_gyro_data(1000, 2000, 0);

    let (x, y, _) = driver.gyro().unwrap();

    assert_float_eq(x, 70.0_f32.to_radians(), EPSILON);
    assert_float_eq(y, 140.0_f32.to_radians(), EPSILON);
}

#[test]
fn test_gyro_raw() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_gyro_data(i16::MIN, -1, i16::MAX);

    let raw = driver.read_gyro_raw().unwrap();

    assert_eq!(
        raw,
        GyroData {
            x: i16::MIN,
            y: -1,
            z: i16::MAX
        }
    );
    assert_eq!(interface.read_count(OUTX_L_G), 1);
}
