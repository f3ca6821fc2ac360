//! Configuration for SNS push setups.
//!
//! The configuration mirrors the service settings an application keeps in
//! its own config files: account id, region, and the platform applications
//! devices register against. It is plain serde data; [`SnsPushConfig::arn_builder`]
//! validates it and resolves every platform alias up front.
//!
//! ```rust
//! use sns_push::SnsPushConfig;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SnsPushConfig::from_json_str(r#"{
//!         "account_id": "01234567890",
//!         "platform_applications": {
//!             "ios": "APNS/application-ios",
//!             "android": "GCM/application-android"
//!         }
//!     }"#)?;
//!
//!     assert_eq!(config.region, "eu-west-1");
//!     let builder = config.arn_builder()?;
//!     assert_eq!(builder.platform_applications()[0].code(), "APNS");
//!     Ok(())
//! }
//! ```

use crate::arn::{AccountId, ArnBuilder, Region};
use crate::error::{BuildError, BuildResult, SnsPushResult, ValidationError};
use crate::platform::PlatformApplication;
use log::debug;
use serde::{Deserialize, Serialize};

/// Default service region.
pub const DEFAULT_REGION: &str = "eu-west-1";
/// Default SNS API version passed to the delivery client.
pub const DEFAULT_API_VERSION: &str = "2010-03-31";
/// Default URL scheme passed to the delivery client.
pub const DEFAULT_SCHEME: &str = "https";

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}

/// Settings for an [`SnsPush`](crate::SnsPush) instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnsPushConfig {
    /// Service region, e.g. `eu-west-1`
    #[serde(default = "default_region")]
    pub region: String,

    /// Service API version, available to the client factory of
    /// [`SnsPush::from_config`](crate::SnsPush::from_config)
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Endpoint URL scheme, available to the client factory of
    /// [`SnsPush::from_config`](crate::SnsPush::from_config)
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// AWS account id owning the topics and applications
    #[serde(default)]
    pub account_id: String,

    /// Platform alias to application, in the order they were configured
    #[serde(default, with = "ordered_pairs")]
    pub platform_applications: Vec<(String, String)>,
}

impl Default for SnsPushConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            api_version: default_api_version(),
            scheme: default_scheme(),
            account_id: String::new(),
            platform_applications: Vec::new(),
        }
    }
}

impl SnsPushConfig {
    /// Create a configuration for the given account with default settings.
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            ..Self::default()
        }
    }

    /// Load a configuration from JSON.
    pub fn from_json_str(json: &str) -> SnsPushResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Add or replace a platform application.
    pub fn with_platform_application(
        mut self,
        alias: impl Into<String>,
        application: impl Into<String>,
    ) -> Self {
        ordered_pairs::upsert(
            &mut self.platform_applications,
            alias.into(),
            application.into(),
        );
        self
    }

    /// Check that the required settings are present.
    pub fn validate(&self) -> BuildResult<()> {
        if self.account_id.is_empty() {
            return Err(BuildError::MissingAccountId);
        }

        if self.platform_applications.is_empty() {
            return Err(BuildError::MissingPlatformApplications);
        }

        Ok(())
    }

    /// Validate the configuration and build the identifier factory.
    pub fn arn_builder(&self) -> BuildResult<ArnBuilder> {
        self.validate()?;

        let region = Region::parse(&self.region)?;
        let account_id = AccountId::new(self.account_id.as_str())?;

        let applications = self
            .platform_applications
            .iter()
            .map(|(alias, application)| {
                PlatformApplication::new(alias.as_str(), application).map_err(|e| match e {
                    ValidationError::UnknownPlatform { .. } => BuildError::UnsupportedPlatform {
                        alias: alias.clone(),
                    },
                    other => BuildError::InvalidPlatformApplication {
                        alias: alias.clone(),
                        value: application.clone(),
                        reason: other.to_string(),
                    },
                })
            })
            .collect::<BuildResult<Vec<_>>>()?;

        debug!(
            "Configured {} platform application(s) for account {} in {}",
            applications.len(),
            account_id,
            region
        );

        Ok(ArnBuilder::new(region, account_id, applications))
    }
}

/// (De)serializes `Vec<(String, String)>` as a JSON object, keeping key order.
mod ordered_pairs {
    use serde::de::{MapAccess, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn upsert(pairs: &mut Vec<(String, String)>, key: String, value: String) {
        match pairs.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => pairs.push((key, value)),
        }
    }

    pub fn serialize<S>(pairs: &[(String, String)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(pairs.iter().map(|(k, v)| (k, v)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = Vec<(String, String)>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of platform alias to application")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    upsert(&mut pairs, key, value);
                }
                Ok(pairs)
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}
