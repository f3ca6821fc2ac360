//! SNS resource identifiers (ARNs).
//!
//! Every identifier shares the canonical layout
//! `arn:aws:sns:{region}:{account_id}:{target}`. The four variant types
//! differ only in their key name and in the shape of the target: a
//! subscription target carries one embedded `:` (`{topic}:{subscription-id}`),
//! so subscription ARNs have seven `:`-separated parts instead of six.
//!
//! The variants are closed: [`SnsArn`] is sealed, and [`ResourceArn`] is the
//! union used wherever the kind is only known at runtime.

use super::{AccountId, ArnKind, Region};
use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const PREFIX: [&str; 3] = ["arn", "aws", "sns"];

/// The components shared by every identifier variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArnParts {
    region: Region,
    account_id: AccountId,
    target: String,
}

impl ArnParts {
    fn new(
        kind: ArnKind,
        region: Region,
        account_id: AccountId,
        target: String,
    ) -> ValidationResult<Self> {
        Self::validate_target(kind, &region, &account_id, &target)?;
        Ok(Self {
            region,
            account_id,
            target,
        })
    }

    /// Parse an identifier string for the given kind.
    fn parse(kind: ArnKind, value: &str) -> ValidationResult<Self> {
        let parts: Vec<&str> = value.split(':').collect();

        if parts.len() != kind.part_count() {
            return Err(ValidationError::invalid_arn(
                value,
                format!(
                    "This ARN is invalid. Expects {} parts, found {}",
                    kind.part_count(),
                    parts.len()
                ),
            ));
        }

        for (part, expected) in parts.iter().zip(PREFIX) {
            if *part != expected {
                return Err(ValidationError::invalid_arn(
                    value,
                    format!("Required part of arn ({}) is missing", expected),
                ));
            }
        }

        let region = Region::parse(parts[3])?;
        let account_id = AccountId::new(parts[4])?;
        let target = parts[5..].join(":");

        Self::new(kind, region, account_id, target)
    }

    /// Errors carry the full candidate identifier; the reason names the target.
    fn validate_target(
        kind: ArnKind,
        region: &Region,
        account_id: &AccountId,
        target: &str,
    ) -> ValidationResult<()> {
        let separators = kind.part_count() - 6;
        let candidate = || format!("{}:{}:{}:{}", PREFIX.join(":"), region, account_id, target);

        if target.split(':').any(str::is_empty) {
            return Err(ValidationError::invalid_arn(
                candidate(),
                format!("The {} target '{}' cannot have empty segments", kind, target),
            ));
        }

        if target.matches(':').count() != separators {
            return Err(ValidationError::invalid_arn(
                candidate(),
                format!(
                    "The {} target '{}' must contain exactly {} ':' separator(s)",
                    kind, target, separators
                ),
            ));
        }

        Ok(())
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for ArnParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:aws:sns:{}:{}:{}",
            self.region, self.account_id, self.target
        )
    }
}

mod sealed {
    pub trait Sealed {
        fn from_parts(parts: super::ArnParts) -> Self;
    }
}

/// Behaviour shared by the identifier variants.
pub trait SnsArn: sealed::Sealed + Sized + Clone + fmt::Display {
    /// The kind this variant represents
    const KIND: ArnKind;

    /// The validated components of the identifier
    fn parts(&self) -> &ArnParts;

    /// Key used to label this identifier in a request
    fn key_name(&self) -> &'static str {
        Self::KIND.key_name()
    }

    fn region(&self) -> &Region {
        self.parts().region()
    }

    fn account_id(&self) -> &AccountId {
        self.parts().account_id()
    }

    fn target(&self) -> &str {
        self.parts().target()
    }

    /// Parse an identifier string, rejecting strings with the wrong number of parts
    fn parse(value: &str) -> ValidationResult<Self> {
        ArnParts::parse(Self::KIND, value).map(Self::from_parts)
    }
}

macro_rules! sns_arn_variant {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $variant:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(ArnParts);

        impl $name {
            /// Create the identifier, validating the target shape.
            pub fn new(
                region: Region,
                account_id: AccountId,
                target: impl Into<String>,
            ) -> ValidationResult<Self> {
                ArnParts::new($kind, region, account_id, target.into()).map(Self)
            }

            pub fn parse(value: &str) -> ValidationResult<Self> {
                <Self as SnsArn>::parse(value)
            }
        }

        impl sealed::Sealed for $name {
            fn from_parts(parts: ArnParts) -> Self {
                Self(parts)
            }
        }

        impl SnsArn for $name {
            const KIND: ArnKind = $kind;

            fn parts(&self) -> &ArnParts {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> ValidationResult<Self> {
                Self::parse(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ValidationError;

            fn try_from(value: &str) -> ValidationResult<Self> {
                Self::parse(value)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> ValidationResult<Self> {
                Self::parse(&value)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let value = String::deserialize(deserializer)?;
                Self::parse(&value).map_err(serde::de::Error::custom)
            }
        }

        impl From<$name> for ResourceArn {
            fn from(value: $name) -> Self {
                ResourceArn::$variant(value)
            }
        }
    };
}

sns_arn_variant!(
    /// Identifier of a topic, e.g. `arn:aws:sns:eu-west-1:01234567890:test-topic`.
    TopicArn,
    ArnKind::Topic,
    Topic
);

sns_arn_variant!(
    /// Identifier of a platform application, e.g.
    /// `arn:aws:sns:eu-west-1:01234567890:app/APNS/application-ios`.
    ApplicationArn,
    ArnKind::Application,
    Application
);

sns_arn_variant!(
    /// Identifier of a device endpoint, e.g.
    /// `arn:aws:sns:eu-west-1:01234567890:endpoint/APNS/application-ios/<uuid>`.
    ///
    /// Endpoints are published to under `TargetArn` but deleted under
    /// `EndpointArn`; see [`EndpointArn::removal_key_name`].
    EndpointArn,
    ArnKind::Endpoint,
    Endpoint
);

sns_arn_variant!(
    /// Identifier of a topic subscription, e.g.
    /// `arn:aws:sns:eu-west-1:01234567890:test-topic:<uuid>`.
    SubscriptionArn,
    ArnKind::Subscription,
    Subscription
);

impl EndpointArn {
    /// Key used when removing the device endpoint.
    pub const REMOVAL_KEY: &'static str = "EndpointArn";

    pub fn removal_key_name(&self) -> &'static str {
        Self::REMOVAL_KEY
    }
}

impl SubscriptionArn {
    /// Name of the topic this subscription belongs to.
    pub fn topic_name(&self) -> &str {
        self.target()
            .split_once(':')
            .map(|(topic, _)| topic)
            .unwrap_or_default()
    }

    /// Service-assigned id of the subscription.
    pub fn subscription_id(&self) -> &str {
        self.target()
            .split_once(':')
            .map(|(_, id)| id)
            .unwrap_or_default()
    }
}

/// Any SNS resource identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceArn {
    Topic(TopicArn),
    Application(ApplicationArn),
    Endpoint(EndpointArn),
    Subscription(SubscriptionArn),
}

impl ResourceArn {
    /// Parse a string as the given kind.
    pub fn parse(kind: ArnKind, value: &str) -> ValidationResult<Self> {
        Ok(match kind {
            ArnKind::Topic => TopicArn::parse(value)?.into(),
            ArnKind::Application => ApplicationArn::parse(value)?.into(),
            ArnKind::Endpoint => EndpointArn::parse(value)?.into(),
            ArnKind::Subscription => SubscriptionArn::parse(value)?.into(),
        })
    }

    /// Classify and parse a string by its shape.
    ///
    /// Seven parts make a subscription. Otherwise the target prefix decides:
    /// `endpoint/` is an endpoint, `app/` an application, anything else a topic.
    pub fn detect(value: &str) -> ValidationResult<Self> {
        if value.split(':').count() == ArnKind::Subscription.part_count() {
            return Ok(SubscriptionArn::parse(value)?.into());
        }

        let parts = ArnParts::parse(ArnKind::Topic, value)?;
        let target = parts.target();

        Ok(if target.starts_with("endpoint/") {
            ResourceArn::Endpoint(EndpointArn(parts))
        } else if target.starts_with("app/") {
            ResourceArn::Application(ApplicationArn(parts))
        } else {
            ResourceArn::Topic(TopicArn(parts))
        })
    }

    pub fn kind(&self) -> ArnKind {
        match self {
            ResourceArn::Topic(_) => ArnKind::Topic,
            ResourceArn::Application(_) => ArnKind::Application,
            ResourceArn::Endpoint(_) => ArnKind::Endpoint,
            ResourceArn::Subscription(_) => ArnKind::Subscription,
        }
    }

    pub fn parts(&self) -> &ArnParts {
        match self {
            ResourceArn::Topic(arn) => arn.parts(),
            ResourceArn::Application(arn) => arn.parts(),
            ResourceArn::Endpoint(arn) => arn.parts(),
            ResourceArn::Subscription(arn) => arn.parts(),
        }
    }

    /// Key used to label this identifier in a request.
    pub fn key_name(&self) -> &'static str {
        self.kind().key_name()
    }

    pub fn region(&self) -> &Region {
        self.parts().region()
    }

    pub fn account_id(&self) -> &AccountId {
        self.parts().account_id()
    }

    pub fn target(&self) -> &str {
        self.parts().target()
    }
}

impl fmt::Display for ResourceArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.parts(), f)
    }
}

impl Serialize for ResourceArn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResourceArn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::detect(&value).map_err(serde::de::Error::custom)
    }
}
