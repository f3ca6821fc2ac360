//! Error types for SNS push operations.
//!
//! Errors are layered the same way the crate is: [`ValidationError`] covers
//! the local parse/construct failures of identifiers and platforms,
//! [`BuildError`] covers configuration problems detected while setting up a
//! [`SnsPush`](crate::SnsPush) instance, and [`SnsPushError`] wraps both plus
//! anything reported by the delivery collaborator.

/// Main error type for SNS push operations.
#[derive(Debug, thiserror::Error)]
pub enum SnsPushError {
    /// An identifier, region or platform failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The configuration could not be turned into a working setup
    #[error("Configuration error: {0}")]
    Build(#[from] BuildError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors from the user-provided notification client
    #[error("Notification service error: {0}")]
    Client(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Validation errors for identifiers, regions and platform aliases.
///
/// All of these are detected synchronously while parsing or constructing a
/// value; none of them is retryable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Input does not split into the expected parts
    #[error("Malformed input '{input}': {reason}")]
    MalformedInput { input: String, reason: String },

    /// Region name outside the supported set
    #[error("Region '{name}' is not supported, expected one of: us, eu, ap, ca, sa")]
    UnsupportedRegion { name: String },

    /// Account id contains something other than digits
    #[error("Invalid account id '{account_id}': the account id may only contain numbers")]
    InvalidAccountId { account_id: String },

    /// Resource identifier is missing a literal segment or has the wrong shape
    #[error("Invalid ARN '{arn}': {reason}")]
    InvalidResourceIdentifier { arn: String, reason: String },

    /// Platform alias is not configured or has no formatter
    #[error("Platform '{platform}' is not supported")]
    UnknownPlatform { platform: String },

    /// Unrecognised argument, such as an unknown resource kind
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Errors that can occur while building an [`SnsPush`](crate::SnsPush)
/// setup from configuration.
///
/// These are typically deployment mistakes and surface before any
/// notification is rendered.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// No account id was configured
    #[error("Please supply your Amazon \"account_id\" in the config")]
    MissingAccountId,

    /// No platform applications were configured
    #[error("Please supply your Amazon SNS \"platform_applications\" in the config")]
    MissingPlatformApplications,

    /// A configured alias has no payload formatter
    #[error("Platform application '{alias}' is not supported")]
    UnsupportedPlatform { alias: String },

    /// A configured application value cannot be turned into an application ARN target
    #[error("Platform application '{alias}' has an invalid target '{value}': {reason}")]
    InvalidPlatformApplication {
        alias: String,
        value: String,
        reason: String,
    },

    /// A configured region or account id failed validation
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),
}

impl SnsPushError {
    /// Wrap a notification client error
    pub fn client_error<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Client(Box::new(error))
    }
}

impl ValidationError {
    /// Create a malformed input error
    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid resource identifier error
    pub fn invalid_arn(arn: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResourceIdentifier {
            arn: arn.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown platform error
    pub fn unknown_platform(platform: impl Into<String>) -> Self {
        Self::UnknownPlatform {
            platform: platform.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Result type aliases for convenience
pub type SnsPushResult<T> = Result<T, SnsPushError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type BuildResult<T> = Result<T, BuildError>;
