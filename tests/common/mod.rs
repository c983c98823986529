//! Common test utilities and mock implementations

pub mod test_utils;

pub use mock_interface::{MockError, Operation};
pub use test_utils::{MockDelay, assert_float_eq, create_mock_driver};
