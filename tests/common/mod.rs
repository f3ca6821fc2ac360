//! Common test utilities for SNS push testing.

pub mod fixtures;
pub mod mock_client;

pub use mock_client::{MockServiceError, RecordingClient};

/// Route library logs through `env_logger` in test mode.
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
