//! Shared configuration, identifiers and messages.

use sns_push::{Message, SnsPushConfig};

pub const ACCOUNT_ID: &str = "01234567890";

pub const IOS_APPLICATION: &str = "APNS/application-ios";
pub const ANDROID_APPLICATION: &str = "GCM/application-android";

pub const IOS_ENDPOINT: &str = "arn:aws:sns:eu-west-1:01234567890:endpoint/APNS/application-ios/a5825a90-d4fc-3116-8c9f-821d81f745a0";
pub const TOPIC: &str = "arn:aws:sns:eu-west-1:01234567890:test-topic";
pub const SUBSCRIPTION: &str =
    "arn:aws:sns:eu-west-1:01234567890:test-topic:2bcfbf39-05c3-41de-beaa-fcfcc21c8f55";

/// Structured message published for [`message`].
pub const EXPECTED_MESSAGE: &str = r#"{"default":"Message body","APNS":"{\"aps\":{\"alert\":{\"title\":\"Message Title\",\"body\":\"Message body\"},\"sound\":\"Sound.caf\",\"badge\":5}}","GCM":"{\"data\":{\"title\":\"Message Title\",\"message\":\"Message body\",\"sound\":\"Sound\",\"badge\":5}}"}"#;

/// Configuration with one iOS and one Android application, in that order.
pub fn config() -> SnsPushConfig {
    SnsPushConfig::new(ACCOUNT_ID)
        .with_platform_application("ios", IOS_APPLICATION)
        .with_platform_application("android", ANDROID_APPLICATION)
}

/// The same configuration as [`config`], as an application would store it.
pub fn config_json() -> &'static str {
    r#"{
        "region": "eu-west-1",
        "api_version": "2010-03-31",
        "scheme": "https",
        "account_id": "01234567890",
        "platform_applications": {
            "ios": "APNS/application-ios",
            "android": "GCM/application-android"
        }
    }"#
}

pub fn message() -> Message {
    Message::new()
        .with_title("Message Title")
        .with_body("Message body")
        .with_badge(5)
        .with_ios_sound("Sound.caf")
        .with_android_sound("Sound")
}
