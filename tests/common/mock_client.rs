//! Recording delivery client.
//!
//! Every request is stored in call order so tests can assert on the exact
//! parameters the facade sends. Responses imitate the service: new endpoints
//! and subscriptions get generated ids, publishes get a message id.

use serde_json::{Value, json};
use sns_push::client::{NotificationClient, Params};
use std::future::Future;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("mock service error: {0}")]
pub struct MockServiceError(pub String);

/// A single recorded call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub operation: &'static str,
    pub params: Params,
}

#[derive(Debug, Default)]
pub struct RecordingClient {
    calls: Mutex<Vec<RecordedCall>>,
    failure: Option<String>,
    omit_arns: bool,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client whose every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// A client that answers without the ARN fields.
    pub fn without_arns() -> Self {
        Self {
            omit_arns: true,
            ..Self::default()
        }
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    pub async fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().await.last().cloned()
    }

    async fn record(
        &self,
        operation: &'static str,
        params: Params,
    ) -> Result<(), MockServiceError> {
        self.calls.lock().await.push(RecordedCall { operation, params });
        match &self.failure {
            Some(message) => Err(MockServiceError(message.clone())),
            None => Ok(()),
        }
    }

    fn response(&self) -> Params {
        let mut response = Params::new();
        response.insert(
            "ResponseMetadata".to_string(),
            json!({"RequestId": Uuid::new_v4().to_string()}),
        );
        response
    }

    fn response_with_arn(&self, field: &str, arn: String) -> Params {
        let mut response = self.response();
        if !self.omit_arns {
            response.insert(field.to_string(), Value::String(arn));
        }
        response
    }
}

fn param(params: &Params, key: &str) -> String {
    params
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

impl NotificationClient for RecordingClient {
    type Error = MockServiceError;

    fn create_platform_endpoint(
        &self,
        params: Params,
    ) -> impl Future<Output = Result<Params, Self::Error>> + Send {
        async move {
            let application = param(&params, "PlatformApplicationArn");
            self.record("create_platform_endpoint", params).await?;

            let endpoint = format!(
                "{}/{}",
                application.replacen(":app/", ":endpoint/", 1),
                Uuid::new_v4()
            );
            Ok(self.response_with_arn("EndpointArn", endpoint))
        }
    }

    fn subscribe(
        &self,
        params: Params,
    ) -> impl Future<Output = Result<Params, Self::Error>> + Send {
        async move {
            let topic = param(&params, "TopicArn");
            self.record("subscribe", params).await?;

            let subscription = format!("{}:{}", topic, Uuid::new_v4());
            Ok(self.response_with_arn("SubscriptionArn", subscription))
        }
    }

    fn unsubscribe(
        &self,
        params: Params,
    ) -> impl Future<Output = Result<Params, Self::Error>> + Send {
        async move {
            self.record("unsubscribe", params).await?;
            Ok(self.response())
        }
    }

    fn delete_endpoint(
        &self,
        params: Params,
    ) -> impl Future<Output = Result<Params, Self::Error>> + Send {
        async move {
            self.record("delete_endpoint", params).await?;
            Ok(self.response())
        }
    }

    fn list_platform_applications(
        &self,
    ) -> impl Future<Output = Result<Params, Self::Error>> + Send {
        async move {
            self.record("list_platform_applications", Params::new()).await?;

            let mut response = self.response();
            response.insert(
                "PlatformApplications".to_string(),
                json!([
                    {"PlatformApplicationArn": "arn:aws:sns:eu-west-1:01234567890:app/APNS/application-ios"},
                    {"PlatformApplicationArn": "arn:aws:sns:eu-west-1:01234567890:app/GCM/application-android"}
                ]),
            );
            Ok(response)
        }
    }

    fn publish(&self, params: Params) -> impl Future<Output = Result<Params, Self::Error>> + Send {
        async move {
            self.record("publish", params).await?;

            let mut response = self.response();
            response.insert(
                "MessageId".to_string(),
                Value::String(Uuid::new_v4().to_string()),
            );
            Ok(response)
        }
    }
}
