//! Publish requests for endpoints, topics and built identifiers.

use super::{create_push, create_push_with};
use crate::common::{RecordingClient, fixtures};
use serde_json::{Value, json};
use sns_push::{
    ArnKind, EndpointArn, Message, MessageStructure, ResourceArn, SnsPush, SnsPushError, TopicArn,
};

#[tokio::test]
async fn test_send_message_to_endpoint() {
    let push = create_push();
    let endpoint = EndpointArn::parse(fixtures::IOS_ENDPOINT).unwrap();

    let response = push
        .send_push_notification_to_endpoint(&endpoint, &fixtures::message())
        .await
        .unwrap();
    assert!(response["MessageId"].is_string());

    let call = push.client().last_call().await.unwrap();
    assert_eq!(call.operation, "publish");
    assert_eq!(
        serde_json::to_string(&call.params).unwrap(),
        serde_json::to_string(&json!({
            "TargetArn": fixtures::IOS_ENDPOINT,
            "Message": fixtures::EXPECTED_MESSAGE,
            "MessageStructure": "json"
        }))
        .unwrap()
    );
}

#[tokio::test]
async fn test_send_message_to_topic() {
    let push = create_push();
    let topic = TopicArn::parse(fixtures::TOPIC).unwrap();

    push.send_push_notification_to_topic(&topic, &fixtures::message())
        .await
        .unwrap();

    let call = push.client().last_call().await.unwrap();
    assert_eq!(
        Value::Object(call.params),
        json!({
            "TopicArn": fixtures::TOPIC,
            "Message": fixtures::EXPECTED_MESSAGE,
            "MessageStructure": "json"
        })
    );
}

#[tokio::test]
async fn test_send_by_kind_and_target() {
    let push = create_push();

    push.send_push_notification(ArnKind::Topic, "test-topic", &fixtures::message())
        .await
        .unwrap();

    let call = push.client().last_call().await.unwrap();
    assert_eq!(call.params["TopicArn"], json!(fixtures::TOPIC));
    assert_eq!(call.params["Message"], json!(fixtures::EXPECTED_MESSAGE));
}

#[tokio::test]
async fn test_send_by_kind_endpoint_target() {
    let push = create_push();
    let target = "endpoint/APNS/application-ios/a5825a90-d4fc-3116-8c9f-821d81f745a0";

    push.send_push_notification(ArnKind::Endpoint, target, &fixtures::message())
        .await
        .unwrap();

    let call = push.client().last_call().await.unwrap();
    assert_eq!(call.params["TargetArn"], json!(fixtures::IOS_ENDPOINT));
}

#[tokio::test]
async fn test_send_with_detected_arn() {
    let push = create_push();
    let arn = ResourceArn::detect(fixtures::IOS_ENDPOINT).unwrap();

    push.send_push_notification_with_arn(&arn, &fixtures::message())
        .await
        .unwrap();

    let call = push.client().last_call().await.unwrap();
    assert_eq!(call.params["TargetArn"], json!(fixtures::IOS_ENDPOINT));
}

#[tokio::test]
async fn test_send_to_subscription_kind_is_rejected() {
    let push = create_push();

    let result = push
        .send_push_notification(ArnKind::Subscription, "test-topic:id", &fixtures::message())
        .await;
    assert!(matches!(result, Err(SnsPushError::Validation(_))));
    assert!(push.client().calls().await.is_empty());
}

#[tokio::test]
async fn test_format_message_as_json() {
    let push = create_push();
    assert_eq!(
        push.format_message_as_json(&fixtures::message()).unwrap(),
        fixtures::EXPECTED_MESSAGE
    );
}

#[tokio::test]
async fn test_envelope_payloads_decode() {
    let push = create_push();
    let message = Message::new()
        .with_body("Ping")
        .with_badge(0)
        .with_payload_entry("thread", json!("t-1"));

    let envelope: Value =
        serde_json::from_str(&push.format_message_as_json(&message).unwrap()).unwrap();
    let apns: Value = serde_json::from_str(envelope["APNS"].as_str().unwrap()).unwrap();
    let gcm: Value = serde_json::from_str(envelope["GCM"].as_str().unwrap()).unwrap();

    assert_eq!(envelope["default"], json!("Ping"));
    assert_eq!(apns, json!({"aps": {"alert": {"body": "Ping"}, "badge": 0}, "thread": "t-1"}));
    assert_eq!(gcm, json!({"data": {"message": "Ping", "badge": 0, "thread": "t-1"}}));
}

#[tokio::test]
async fn test_publish_failure_is_wrapped() {
    let push = create_push_with(RecordingClient::failing("Throttled"));
    let topic = TopicArn::parse(fixtures::TOPIC).unwrap();

    let result = push
        .send_push_notification_to_topic(&topic, &fixtures::message())
        .await;
    assert!(matches!(result, Err(SnsPushError::Client(_))));
}

#[tokio::test]
async fn test_concurrent_publishes() {
    let push = create_push();
    let topic = TopicArn::parse(fixtures::TOPIC).unwrap();
    let message = fixtures::message();

    let (first, second) = tokio::join!(
        push.send_push_notification_to_topic(&topic, &message),
        push.send_push_notification_to_topic(&topic, &message),
    );
    assert_ne!(first.unwrap()["MessageId"], second.unwrap()["MessageId"]);
    assert_eq!(push.client().calls().await.len(), 2);
}

#[tokio::test]
async fn test_send_raw_text_to_topic() {
    let push = create_push();
    let arn = ResourceArn::detect(fixtures::TOPIC).unwrap();

    push.send_push_notification_with_structure(&arn, &fixtures::message(), MessageStructure::Raw)
        .await
        .unwrap();

    let call = push.client().last_call().await.unwrap();
    assert_eq!(
        Value::Object(call.params),
        json!({"TopicArn": fixtures::TOPIC, "Message": "Message body"})
    );
}

#[tokio::test]
async fn test_send_empty_message_sends_target_only() {
    let push = create_push();
    let topic = TopicArn::parse(fixtures::TOPIC).unwrap();

    push.send_push_notification_to_topic(&topic, &Message::new().with_title(""))
        .await
        .unwrap();

    let call = push.client().last_call().await.unwrap();
    assert_eq!(Value::Object(call.params), json!({"TopicArn": fixtures::TOPIC}));
}

#[tokio::test]
async fn test_client_built_from_configuration() {
    let config = fixtures::config().with_scheme("http");
    let push = SnsPush::from_config(config, |config| {
        assert_eq!(config.scheme, "http");
        assert_eq!(config.api_version, "2010-03-31");
        RecordingClient::new()
    })
    .unwrap();

    push.send_push_notification(ArnKind::Topic, "test-topic", &fixtures::message())
        .await
        .unwrap();
    assert_eq!(push.client().calls().await.len(), 1);
}
