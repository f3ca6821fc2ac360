//! Platform applications and the per-platform payload fan-out.
//!
//! Each configured platform alias (`ios`, `android`) is resolved once, when
//! the configuration is loaded, into a [`PlatformApplication`]: the payload
//! formatter to use, the application ARN target, and the delivery platform
//! code (`APNS`, `GCM`, ...) under which the rendered payload is published.
//! An alias without a formatter is rejected at that point rather than while
//! a notification is being sent.

use crate::arn::{ApplicationArn, SnsArn};
use crate::error::{ValidationError, ValidationResult};
use crate::message::Message;
use log::trace;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

const APPLICATION_PREFIX: &str = "app/";

/// Payload formatters known to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    /// Resolve a configured alias (case-insensitive) to its formatter.
    pub fn from_alias(alias: &str) -> ValidationResult<Self> {
        match alias.to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            _ => Err(ValidationError::unknown_platform(alias)),
        }
    }

    pub fn alias(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }

    /// Render a message into this platform's payload structure.
    pub fn render(&self, message: &Message) -> Map<String, Value> {
        match self {
            Platform::Ios => message.ios_data(),
            Platform::Android => message.android_data(),
        }
    }
}

impl FromStr for Platform {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        Self::from_alias(s)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}

/// A configured platform application.
///
/// ```rust
/// use sns_push::platform::{Platform, PlatformApplication};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let ios = PlatformApplication::new("ios", "APNS/application-ios")?;
///     assert_eq!(ios.platform(), Platform::Ios);
///     assert_eq!(ios.target(), "app/APNS/application-ios");
///     assert_eq!(ios.code(), "APNS");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformApplication {
    alias: String,
    platform: Platform,
    target: String,
    code: String,
}

impl PlatformApplication {
    /// Resolve an alias and its configured application.
    ///
    /// The application may be written as `APNS/application-ios`,
    /// `app/APNS/application-ios`, or as a full application ARN; all three
    /// resolve to the target `app/APNS/application-ios`.
    pub fn new(alias: impl Into<String>, application: &str) -> ValidationResult<Self> {
        let alias = alias.into();
        let platform = Platform::from_alias(&alias)?;
        let target = Self::application_target(application)?;

        let code = target[APPLICATION_PREFIX.len()..]
            .split('/')
            .next()
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            alias,
            platform,
            target,
            code,
        })
    }

    fn application_target(application: &str) -> ValidationResult<String> {
        let target = if application.starts_with("arn:") {
            ApplicationArn::parse(application)?.target().to_string()
        } else {
            application.to_string()
        };

        let name = target.strip_prefix(APPLICATION_PREFIX).unwrap_or(&target);

        match name.split_once('/') {
            Some((code, rest)) if !code.is_empty() && !rest.is_empty() && !name.contains(':') => {
                Ok(format!("{}{}", APPLICATION_PREFIX, name))
            }
            _ => Err(ValidationError::invalid_arn(
                application,
                "expected an application written as {PLATFORM}/{application-name}",
            )),
        }
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Application ARN target, always `app/{code}/{name}`.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Delivery platform code, e.g. `APNS` or `GCM`.
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Encode a message as the structured JSON envelope the delivery service expects.
///
/// The envelope holds the generic text under `default` (the message body)
/// and one JSON-encoded payload string per platform code, in configuration
/// order.
pub fn structured_message(
    message: &Message,
    applications: &[PlatformApplication],
) -> serde_json::Result<String> {
    let mut envelope = Map::new();
    envelope.insert(
        "default".to_string(),
        Value::String(message.body().unwrap_or_default().to_string()),
    );

    for application in applications {
        let payload = application.platform().render(message);
        trace!(
            "Rendered {} payload for '{}': {:?}",
            application.code(),
            application.alias(),
            payload
        );
        envelope.insert(
            application.code().to_string(),
            Value::String(serde_json::to_string(&payload)?),
        );
    }

    serde_json::to_string(&envelope)
}
