//! Delivery collaborator trait.
//!
//! This crate never talks to the notification service itself. Applications
//! plug in their own client (an SDK wrapper, an HTTP client, a recording
//! test double) by implementing [`NotificationClient`]. Every call takes the
//! request parameters as a JSON object and resolves to the service response
//! in the same shape.

use serde_json::{Map, Value};
use std::future::Future;

/// Request or response parameters of a single delivery call.
pub type Params = Map<String, Value>;

/// Calls the notification service exposes to [`SnsPush`](crate::SnsPush).
///
/// # Example Implementation
///
/// ```rust
/// use sns_push::client::{NotificationClient, Params};
/// use serde_json::json;
/// use std::future::Future;
///
/// struct EchoClient;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("echo client error")]
/// struct EchoError;
///
/// impl NotificationClient for EchoClient {
///     type Error = EchoError;
///
///     fn create_platform_endpoint(
///         &self,
///         params: Params,
///     ) -> impl Future<Output = Result<Params, Self::Error>> + Send {
///         async move {
///             let mut response = Params::new();
///             response.insert(
///                 "EndpointArn".to_string(),
///                 json!(format!("{}-endpoint", params["PlatformApplicationArn"])),
///             );
///             Ok(response)
///         }
///     }
///
///     fn subscribe(&self, params: Params) -> impl Future<Output = Result<Params, Self::Error>> + Send {
///         async move { Ok(params) }
///     }
///
///     fn unsubscribe(&self, params: Params) -> impl Future<Output = Result<Params, Self::Error>> + Send {
///         async move { Ok(params) }
///     }
///
///     fn delete_endpoint(&self, params: Params) -> impl Future<Output = Result<Params, Self::Error>> + Send {
///         async move { Ok(params) }
///     }
///
///     fn list_platform_applications(&self) -> impl Future<Output = Result<Params, Self::Error>> + Send {
///         async move { Ok(Params::new()) }
///     }
///
///     fn publish(&self, params: Params) -> impl Future<Output = Result<Params, Self::Error>> + Send {
///         async move { Ok(params) }
///     }
/// }
/// ```
pub trait NotificationClient {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Register a device token with a platform application.
    ///
    /// Expects `PlatformApplicationArn` and `Token`; the response carries the
    /// new `EndpointArn`.
    fn create_platform_endpoint(
        &self,
        params: Params,
    ) -> impl Future<Output = Result<Params, Self::Error>> + Send;

    /// Subscribe an endpoint to a topic.
    ///
    /// Expects `Endpoint`, `Protocol` and `TopicArn`; the response carries the
    /// `SubscriptionArn`.
    fn subscribe(&self, params: Params) -> impl Future<Output = Result<Params, Self::Error>> + Send;

    /// Remove a subscription, keyed by `SubscriptionArn`.
    fn unsubscribe(
        &self,
        params: Params,
    ) -> impl Future<Output = Result<Params, Self::Error>> + Send;

    /// Remove a device endpoint, keyed by `EndpointArn`.
    fn delete_endpoint(
        &self,
        params: Params,
    ) -> impl Future<Output = Result<Params, Self::Error>> + Send;

    /// List the platform applications of the account.
    fn list_platform_applications(
        &self,
    ) -> impl Future<Output = Result<Params, Self::Error>> + Send;

    /// Publish a message to an endpoint or topic.
    fn publish(&self, params: Params) -> impl Future<Output = Result<Params, Self::Error>> + Send;
}
