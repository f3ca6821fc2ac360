//! Amazon SNS mobile push library for Rust.
//!
//! Provides validated resource identifiers (ARNs) for topics, platform
//! applications, device endpoints and subscriptions, a platform-neutral
//! notification [`Message`] that renders APNS and GCM payloads, and an
//! async [`SnsPush`] facade that drives a user-supplied delivery client.
//!
//! # Core Components
//!
//! - [`SnsPush`] - Facade for registering devices and publishing notifications
//! - [`NotificationClient`] - Trait for plugging in the actual service client
//! - [`ArnBuilder`] - Identifier factory for one region and account
//! - [`Message`] - Fluent notification builder with per-platform rendering
//!
//! # Quick Start
//!
//! ```rust
//! use sns_push::{ArnKind, Message, SnsPushConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let builder = SnsPushConfig::new("01234567890")
//!         .with_platform_application("ios", "APNS/application-ios")
//!         .arn_builder()?;
//!
//!     let topic = builder.create(ArnKind::Topic, "test-topic")?;
//!     assert_eq!(topic.to_string(), "arn:aws:sns:eu-west-1:01234567890:test-topic");
//!
//!     let message = Message::new().with_body("Hello").with_badge(1);
//!     assert!(message.ios_data().contains_key("aps"));
//!     Ok(())
//! }
//! ```

pub mod arn;
pub mod client;
pub mod config;
pub mod error;
pub mod message;
pub mod platform;
pub mod push;

// Re-export commonly used types for convenience
pub use arn::{
    AccountId, ApplicationArn, ArnBuilder, ArnKind, EndpointArn, Region, RegionName, ResourceArn,
    SnsArn, SubscriptionArn, TopicArn,
};
pub use client::{NotificationClient, Params};
pub use config::SnsPushConfig;
pub use error::{
    BuildError, BuildResult, SnsPushError, SnsPushResult, ValidationError, ValidationResult,
};
pub use message::Message;
pub use platform::{Platform, PlatformApplication};
pub use push::{MessageStructure, SnsPush};
