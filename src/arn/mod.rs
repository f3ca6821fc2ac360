//! SNS resource identifiers.
//!
//! This module contains the immutable value objects used to address the
//! notification service: [`Region`], [`AccountId`], the identifier variants
//! ([`TopicArn`], [`ApplicationArn`], [`EndpointArn`], [`SubscriptionArn`])
//! and their union [`ResourceArn`], plus the [`ArnBuilder`] factory.
//!
//! Every value validates at construction, so a parsed identifier always
//! formats back to the string it came from.
//!
//! ```rust
//! use sns_push::arn::{SnsArn, TopicArn};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let topic = TopicArn::parse("arn:aws:sns:eu-west-1:01234567890:test-topic")?;
//!     assert_eq!(topic.key_name(), "TopicArn");
//!     assert_eq!(topic.target(), "test-topic");
//!     Ok(())
//! }
//! ```

mod account_id;
mod builder;
mod identifier;
mod kind;
mod region;

pub use account_id::AccountId;
pub use builder::ArnBuilder;
pub use identifier::{
    ApplicationArn, ArnParts, EndpointArn, ResourceArn, SnsArn, SubscriptionArn, TopicArn,
};
pub use kind::ArnKind;
pub use region::{Region, RegionName};
