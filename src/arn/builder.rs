//! Factory for resource identifiers.
//!
//! The builder is created once from configuration and then produces
//! identifiers for the configured region and account, resolving platform
//! aliases to their application targets.

use super::{AccountId, ApplicationArn, ArnKind, EndpointArn, Region, ResourceArn, TopicArn};
use crate::error::{ValidationError, ValidationResult};
use crate::platform::PlatformApplication;
use log::debug;

/// Builds identifiers for a fixed region and account.
///
/// ```rust
/// use sns_push::arn::{AccountId, ArnBuilder, ArnKind, Region};
/// use sns_push::platform::PlatformApplication;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let builder = ArnBuilder::new(
///         Region::parse("eu-west-1")?,
///         AccountId::new("01234567890")?,
///         vec![PlatformApplication::new("ios", "APNS/application-ios")?],
///     );
///
///     let topic = builder.create(ArnKind::Topic, "test-topic")?;
///     assert_eq!(topic.to_string(), "arn:aws:sns:eu-west-1:01234567890:test-topic");
///
///     let app = builder.create(ArnKind::Application, "ios")?;
///     assert_eq!(app.target(), "app/APNS/application-ios");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ArnBuilder {
    region: Region,
    account_id: AccountId,
    platform_applications: Vec<PlatformApplication>,
}

impl ArnBuilder {
    pub fn new(
        region: Region,
        account_id: AccountId,
        platform_applications: Vec<PlatformApplication>,
    ) -> Self {
        Self {
            region,
            account_id,
            platform_applications,
        }
    }

    /// Create the identifier of the given kind.
    ///
    /// For [`ArnKind::Application`] the target is a platform alias and is
    /// resolved through the configured applications. Subscriptions are only
    /// obtained by parsing what the service returns, so they are rejected here.
    pub fn create(&self, kind: ArnKind, target: &str) -> ValidationResult<ResourceArn> {
        debug!("Building {} ARN for '{}'", kind, target);

        match kind {
            ArnKind::Endpoint => self.endpoint_arn(target).map(ResourceArn::from),
            ArnKind::Topic => self.topic_arn(target).map(ResourceArn::from),
            ArnKind::Application => self.application_arn(target).map(ResourceArn::from),
            ArnKind::Subscription => Err(ValidationError::invalid_argument(
                "Subscription ARNs cannot be created, parse the ARN returned by subscribe instead",
            )),
        }
    }

    pub fn topic_arn(&self, name: &str) -> ValidationResult<TopicArn> {
        TopicArn::new(self.region.clone(), self.account_id.clone(), name)
    }

    pub fn endpoint_arn(&self, target: &str) -> ValidationResult<EndpointArn> {
        EndpointArn::new(self.region.clone(), self.account_id.clone(), target)
    }

    /// Build the application identifier for a configured platform alias.
    pub fn application_arn(&self, alias: &str) -> ValidationResult<ApplicationArn> {
        let application = self.platform_application(alias)?;
        ApplicationArn::new(
            self.region.clone(),
            self.account_id.clone(),
            application.target(),
        )
    }

    /// Look up a configured platform application by alias, ignoring ASCII case.
    pub fn platform_application(&self, alias: &str) -> ValidationResult<&PlatformApplication> {
        self.platform_applications
            .iter()
            .find(|application| application.alias().eq_ignore_ascii_case(alias))
            .ok_or_else(|| ValidationError::unknown_platform(alias))
    }

    pub fn platform_applications(&self) -> &[PlatformApplication] {
        &self.platform_applications
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }
}
