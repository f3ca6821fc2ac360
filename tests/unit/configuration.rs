//! Configuration loading and validation.

use crate::common::fixtures;
use sns_push::{ArnKind, BuildError, Platform, SnsPushConfig, SnsPushError};

#[test]
fn test_json_configuration_matches_builder() {
    let loaded = SnsPushConfig::from_json_str(fixtures::config_json()).unwrap();
    assert_eq!(loaded, fixtures::config());
}

#[test]
fn test_builder_from_configuration() {
    let builder = fixtures::config().arn_builder().unwrap();

    let platforms: Vec<(&str, Platform, &str)> = builder
        .platform_applications()
        .iter()
        .map(|app| (app.alias(), app.platform(), app.target()))
        .collect();
    assert_eq!(
        platforms,
        vec![
            ("ios", Platform::Ios, "app/APNS/application-ios"),
            ("android", Platform::Android, "app/GCM/application-android"),
        ]
    );

    let application = builder.create(ArnKind::Application, "android").unwrap();
    assert_eq!(
        application.to_string(),
        "arn:aws:sns:eu-west-1:01234567890:app/GCM/application-android"
    );
    assert_eq!(application.key_name(), "PlatformApplicationArn");
}

#[test]
fn test_full_application_arn_accepted() {
    let config = SnsPushConfig::new(fixtures::ACCOUNT_ID).with_platform_application(
        "ios",
        "arn:aws:sns:eu-west-1:01234567890:app/APNS_SANDBOX/application-ios",
    );

    let builder = config.arn_builder().unwrap();
    assert_eq!(builder.platform_applications()[0].code(), "APNS_SANDBOX");
}

#[test]
fn test_other_region() {
    let builder = fixtures::config()
        .with_region("us-east-1")
        .arn_builder()
        .unwrap();
    let topic = builder.create(ArnKind::Topic, "alerts").unwrap();
    assert_eq!(topic.to_string(), "arn:aws:sns:us-east-1:01234567890:alerts");
}

#[test]
fn test_malformed_json_is_json_error() {
    assert!(matches!(
        SnsPushConfig::from_json_str("{\"account_id\": 42"),
        Err(SnsPushError::Json(_))
    ));
}

#[test]
fn test_build_errors_name_the_setting() {
    let missing_account = SnsPushConfig::default()
        .with_platform_application("ios", fixtures::IOS_APPLICATION)
        .arn_builder()
        .unwrap_err();
    assert!(matches!(missing_account, BuildError::MissingAccountId));
    assert!(missing_account.to_string().contains("account_id"));

    let missing_apps = SnsPushConfig::new(fixtures::ACCOUNT_ID)
        .arn_builder()
        .unwrap_err();
    assert!(missing_apps.to_string().contains("platform_applications"));
}
