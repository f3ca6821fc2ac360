//! Integration tests for the push facade
//!
//! Every test drives [`sns_push::SnsPush`] against the recording client
//! from `common` and asserts on the exact requests it issued.
//!
//! ## Test Organization
//!
//! - `device_lifecycle` - Register a device, subscribe it to a topic, remove it
//! - `publishing` - Publish requests for endpoints, topics and built identifiers

pub mod publishing;

use crate::common::{RecordingClient, fixtures, init_test_logging};
use sns_push::SnsPush;

/// A facade over a fresh recording client using the shared configuration.
pub fn create_push() -> SnsPush<RecordingClient> {
    create_push_with(RecordingClient::new())
}

pub fn create_push_with(client: RecordingClient) -> SnsPush<RecordingClient> {
    init_test_logging();
    SnsPush::new(fixtures::config(), client).unwrap()
}
