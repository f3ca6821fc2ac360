//! The push notification facade.
//!
//! [`SnsPush`] ties the pieces together: it turns configuration into an
//! [`ArnBuilder`], renders [`Message`]s into the structured envelope, and
//! hands each request to the user's [`NotificationClient`].

use crate::arn::{
    ArnBuilder, ArnKind, EndpointArn, ResourceArn, SnsArn, SubscriptionArn, TopicArn,
};
use crate::client::{NotificationClient, Params};
use crate::config::SnsPushConfig;
use crate::error::{SnsPushError, SnsPushResult};
use crate::message::Message;
use crate::platform::structured_message;
use log::{info, warn};
use serde_json::Value;

/// Protocol used when subscribing a device endpoint to a topic.
pub const DEFAULT_SUBSCRIPTION_PROTOCOL: &str = "application";

/// How a published `Message` parameter is interpreted by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageStructure {
    /// Per-platform envelope rendered by [`structured_message`]
    #[default]
    Json,
    /// The message body sent as plain text to every protocol
    Raw,
}

impl MessageStructure {
    /// Value of the `MessageStructure` request field, if one is sent.
    pub fn wire_value(self) -> Option<&'static str> {
        match self {
            MessageStructure::Json => Some("json"),
            MessageStructure::Raw => None,
        }
    }
}

/// Push notification facade over a [`NotificationClient`].
///
/// # Type Parameters
///
/// * `C` - The delivery client type that implements [`NotificationClient`]
///
/// # Examples
///
/// ```rust,no_run
/// use sns_push::{Message, SnsPush, SnsPushConfig};
/// # use sns_push::client::{NotificationClient, Params};
/// # use std::future::Future;
/// # struct MyClient;
/// # #[derive(Debug, thiserror::Error)] #[error("unreachable")] struct MyError;
/// # impl NotificationClient for MyClient {
/// #     type Error = MyError;
/// #     fn create_platform_endpoint(&self, p: Params) -> impl Future<Output = Result<Params, MyError>> + Send { async move { Ok(p) } }
/// #     fn subscribe(&self, p: Params) -> impl Future<Output = Result<Params, MyError>> + Send { async move { Ok(p) } }
/// #     fn unsubscribe(&self, p: Params) -> impl Future<Output = Result<Params, MyError>> + Send { async move { Ok(p) } }
/// #     fn delete_endpoint(&self, p: Params) -> impl Future<Output = Result<Params, MyError>> + Send { async move { Ok(p) } }
/// #     fn list_platform_applications(&self) -> impl Future<Output = Result<Params, MyError>> + Send { async move { Ok(Params::new()) } }
/// #     fn publish(&self, p: Params) -> impl Future<Output = Result<Params, MyError>> + Send { async move { Ok(p) } }
/// # }
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SnsPushConfig::new("01234567890")
///     .with_platform_application("ios", "APNS/application-ios")
///     .with_platform_application("android", "GCM/application-android");
/// let push = SnsPush::new(config, MyClient)?;
///
/// if let Some(endpoint) = push.add_device("device-token", "ios").await? {
///     let message = Message::new().with_title("Hello").with_body("World");
///     push.send_push_notification_to_endpoint(&endpoint, &message).await?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct SnsPush<C> {
    config: SnsPushConfig,
    arn_builder: ArnBuilder,
    client: C,
}

impl<C: NotificationClient> SnsPush<C> {
    /// Create a facade from configuration and a delivery client.
    ///
    /// # Errors
    ///
    /// Returns [`SnsPushError::Build`] if the account id or platform
    /// applications are missing, or a platform alias has no payload formatter.
    pub fn new(config: SnsPushConfig, client: C) -> SnsPushResult<Self> {
        let arn_builder = config.arn_builder()?;

        Ok(Self {
            config,
            arn_builder,
            client,
        })
    }

    /// Create a facade whose client is built from the validated configuration.
    ///
    /// `connect` receives the configuration after validation, so region,
    /// `api_version` and `scheme` can be used to set up the delivery client.
    pub fn from_config<F>(config: SnsPushConfig, connect: F) -> SnsPushResult<Self>
    where
        F: FnOnce(&SnsPushConfig) -> C,
    {
        let arn_builder = config.arn_builder()?;
        let client = connect(&config);

        Ok(Self {
            config,
            arn_builder,
            client,
        })
    }

    /// The configuration this facade was created with.
    pub fn config(&self) -> &SnsPushConfig {
        &self.config
    }

    /// The identifier factory for the configured region and account.
    pub fn arn_builder(&self) -> &ArnBuilder {
        &self.arn_builder
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Register a device token with the platform application behind `alias`.
    ///
    /// Returns the new endpoint, or `None` when the service did not report one.
    pub async fn add_device(
        &self,
        token: &str,
        alias: &str,
    ) -> SnsPushResult<Option<EndpointArn>> {
        let application = self.arn_builder.application_arn(alias)?;

        let mut params = Params::new();
        params.insert(
            application.key_name().to_string(),
            Value::String(application.to_string()),
        );
        params.insert("Token".to_string(), Value::String(token.to_string()));

        info!("Adding '{}' device to {}", alias, application);
        let response = self
            .client
            .create_platform_endpoint(params)
            .await
            .map_err(|e| client_failure("create_platform_endpoint", e))?;

        response_arn(&response, EndpointArn::REMOVAL_KEY)
    }

    /// Subscribe a device endpoint to a topic.
    ///
    /// `protocol` defaults to [`DEFAULT_SUBSCRIPTION_PROTOCOL`].
    pub async fn subscribe_device_to_topic(
        &self,
        endpoint: &EndpointArn,
        topic: &TopicArn,
        protocol: Option<&str>,
    ) -> SnsPushResult<Option<SubscriptionArn>> {
        let mut params = Params::new();
        params.insert("Endpoint".to_string(), Value::String(endpoint.to_string()));
        params.insert(
            "Protocol".to_string(),
            Value::String(protocol.unwrap_or(DEFAULT_SUBSCRIPTION_PROTOCOL).to_string()),
        );
        params.insert(topic.key_name().to_string(), Value::String(topic.to_string()));

        info!("Subscribing {} to {}", endpoint, topic);
        let response = self
            .client
            .subscribe(params)
            .await
            .map_err(|e| client_failure("subscribe", e))?;

        response_arn(&response, ArnKind::Subscription.key_name())
    }

    /// Remove a topic subscription.
    pub async fn remove_device_from_topic(
        &self,
        subscription: &SubscriptionArn,
    ) -> SnsPushResult<Params> {
        let mut params = Params::new();
        params.insert(
            subscription.key_name().to_string(),
            Value::String(subscription.to_string()),
        );

        info!("Removing subscription {}", subscription);
        self.client
            .unsubscribe(params)
            .await
            .map_err(|e| client_failure("unsubscribe", e))
    }

    /// Delete a device endpoint.
    pub async fn remove_device(&self, endpoint: &EndpointArn) -> SnsPushResult<Params> {
        let mut params = Params::new();
        params.insert(
            endpoint.removal_key_name().to_string(),
            Value::String(endpoint.to_string()),
        );

        info!("Removing device {}", endpoint);
        self.client
            .delete_endpoint(params)
            .await
            .map_err(|e| client_failure("delete_endpoint", e))
    }

    /// List the platform applications known to the service.
    pub async fn platform_applications(&self) -> SnsPushResult<Params> {
        self.client
            .list_platform_applications()
            .await
            .map_err(|e| client_failure("list_platform_applications", e))
    }

    /// Build the identifier for `kind`/`target` and publish `message` to it.
    pub async fn send_push_notification(
        &self,
        kind: ArnKind,
        target: &str,
        message: &Message,
    ) -> SnsPushResult<Params> {
        let arn = self.arn_builder.create(kind, target)?;
        self.send_push_notification_with_arn(&arn, message).await
    }

    pub async fn send_push_notification_to_endpoint(
        &self,
        endpoint: &EndpointArn,
        message: &Message,
    ) -> SnsPushResult<Params> {
        self.send_push_notification_with_arn(&ResourceArn::from(endpoint.clone()), message)
            .await
    }

    pub async fn send_push_notification_to_topic(
        &self,
        topic: &TopicArn,
        message: &Message,
    ) -> SnsPushResult<Params> {
        self.send_push_notification_with_arn(&ResourceArn::from(topic.clone()), message)
            .await
    }

    /// Publish `message` to an already built identifier as a structured
    /// JSON envelope.
    pub async fn send_push_notification_with_arn(
        &self,
        arn: &ResourceArn,
        message: &Message,
    ) -> SnsPushResult<Params> {
        self.send_push_notification_with_structure(arn, message, MessageStructure::Json)
            .await
    }

    /// Publish `message` to an already built identifier.
    ///
    /// The identifier is sent under its key name. With
    /// [`MessageStructure::Json`] the envelope follows as `Message` together
    /// with `MessageStructure = "json"`; with [`MessageStructure::Raw`] only
    /// the body text is sent. An empty message sends the identifier alone.
    pub async fn send_push_notification_with_structure(
        &self,
        arn: &ResourceArn,
        message: &Message,
        structure: MessageStructure,
    ) -> SnsPushResult<Params> {
        let mut params = Params::new();
        params.insert(arn.key_name().to_string(), Value::String(arn.to_string()));

        let text = match structure {
            MessageStructure::Json if !message.is_empty() => {
                Some(self.format_message_as_json(message)?)
            }
            MessageStructure::Raw => message
                .body()
                .filter(|body| !body.is_empty())
                .map(str::to_string),
            MessageStructure::Json => None,
        };
        match text {
            Some(text) => {
                params.insert("Message".to_string(), Value::String(text));
                if let Some(value) = structure.wire_value() {
                    params.insert(
                        "MessageStructure".to_string(),
                        Value::String(value.to_string()),
                    );
                }
            }
            None => warn!("Publishing to {} without a message", arn),
        }

        info!("Publishing to {} {}", arn.kind(), arn);
        self.client
            .publish(params)
            .await
            .map_err(|e| client_failure("publish", e))
    }

    /// Render `message` into the structured envelope sent as `Message`.
    pub fn format_message_as_json(&self, message: &Message) -> SnsPushResult<String> {
        Ok(structured_message(
            message,
            self.arn_builder.platform_applications(),
        )?)
    }
}

fn client_failure<E>(call: &str, error: E) -> SnsPushError
where
    E: std::error::Error + Send + Sync + 'static,
{
    warn!("Notification client failed on {}: {}", call, error);
    SnsPushError::client_error(error)
}

/// Pull an identifier out of a service response.
///
/// A missing field yields `None`; a present but malformed one is an error.
fn response_arn<T: SnsArn>(response: &Params, field: &str) -> SnsPushResult<Option<T>> {
    let Some(value) = response.get(field).and_then(Value::as_str) else {
        warn!("Service response has no '{}' field", field);
        return Ok(None);
    };

    match T::parse(value) {
        Ok(arn) => Ok(Some(arn)),
        Err(e) => {
            warn!("Service returned an unusable {}: {}", field, e);
            Err(e.into())
        }
    }
}
