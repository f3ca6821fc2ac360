//! Resource kinds addressable through the notification service.

use crate::error::{ValidationError, ValidationResult};
use std::fmt;
use std::str::FromStr;

/// The closed set of SNS resource kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArnKind {
    /// A single device endpoint registered under a platform application
    Endpoint,
    /// A topic that fans out to its subscribers
    Topic,
    /// A platform application (APNS, GCM, ...)
    Application,
    /// A subscription of an endpoint to a topic
    Subscription,
}

impl ArnKind {
    /// Key used to label an identifier of this kind in a request.
    pub fn key_name(&self) -> &'static str {
        match self {
            ArnKind::Endpoint => "TargetArn",
            ArnKind::Topic => "TopicArn",
            ArnKind::Application => "PlatformApplicationArn",
            ArnKind::Subscription => "SubscriptionArn",
        }
    }

    /// Number of `:`-separated parts in an identifier of this kind.
    ///
    /// Subscription targets embed one `:` of their own.
    pub fn part_count(&self) -> usize {
        match self {
            ArnKind::Subscription => 7,
            ArnKind::Endpoint | ArnKind::Topic | ArnKind::Application => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArnKind::Endpoint => "endpoint",
            ArnKind::Topic => "topic",
            ArnKind::Application => "application",
            ArnKind::Subscription => "subscription",
        }
    }
}

impl fmt::Display for ArnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArnKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "endpoint" => Ok(ArnKind::Endpoint),
            "topic" => Ok(ArnKind::Topic),
            "application" => Ok(ArnKind::Application),
            "subscription" => Ok(ArnKind::Subscription),
            _ => Err(ValidationError::invalid_argument(format!(
                "Invalid type '{}'",
                s
            ))),
        }
    }
}

/// Numeric type codes used by older callers.
impl TryFrom<u8> for ArnKind {
    type Error = ValidationError;

    fn try_from(code: u8) -> ValidationResult<Self> {
        match code {
            1 => Ok(ArnKind::Endpoint),
            2 => Ok(ArnKind::Topic),
            3 => Ok(ArnKind::Application),
            4 => Ok(ArnKind::Subscription),
            other => Err(ValidationError::invalid_argument(format!(
                "Invalid type code {}",
                other
            ))),
        }
    }
}
