//! Test utilities and helper functions

use crate::common::mock_interface::MockInterface;
use lsm6dsox::Lsm6dsox;

/// Mock delay implementation for testing
///
/// Returns immediately but keeps a tally of the time requested, so tests can
/// check that settling delays were honoured.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDelay {
    elapsed_ns: u64,
}

impl MockDelay {
    /// Total delay requested, in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }

    /// Forget previously requested delays
    pub fn clear(&mut self) {
        self.elapsed_ns = 0;
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }

    fn delay_us(&mut self, us: u32) {
        self.elapsed_ns += u64::from(us) * 1_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ns += u64::from(ms) * 1_000_000;
    }
}

/// Create a mock driver for testing
/// Returns (driver, interface) where interface is a clone that shares state with the driver
pub fn create_mock_driver() -> (Lsm6dsox<MockInterface>, MockInterface) {
    let interface = MockInterface::new();
    let interface_clone = interface.clone();
    let driver =
        Lsm6dsox::new(interface, &mut MockDelay::default()).expect("Failed to create mock driver");
    interface_clone.clear_operations();
    (driver, interface_clone)
}

/// Assert that two floating point values are approximately equal
pub fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
    let diff = (a - b).abs();
    assert!(
        diff < epsilon,
        "Values not equal within epsilon: {} vs {} (diff: {}, epsilon: {})",
        a,
        b,
        diff,
        epsilon
    );
}
