//! # ARN Inspector
//!
//! A command-line utility that parses SNS resource identifiers and reports
//! what the library makes of them.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin arn-inspector arn:aws:sns:eu-west-1:01234567890:test-topic
//! ```
//!
//! ## Output Examples
//!
//! ```text
//! Inspecting: arn:aws:sns:eu-west-1:01234567890:endpoint/APNS/application-ios/a5825a90
//! ✓ endpoint ARN
//!   Request key: TargetArn
//!   Region: eu-west-1
//!   Account: 01234567890
//!   Target: endpoint/APNS/application-ios/a5825a90
//!   Removal key: EndpointArn
//! ```
//!
//! ```text
//! Inspecting: arn:aws:sqs:eu-west-1:01234567890:queue
//! ❌ Invalid ARN 'arn:aws:sqs:eu-west-1:01234567890:queue': Required part of arn (sns) is missing
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: All identifiers parsed
//! - `1`: One or more identifiers are invalid

use sns_push::arn::{ResourceArn, SnsArn};
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <arn> [<arn>...]", args[0]);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} arn:aws:sns:eu-west-1:01234567890:test-topic", args[0]);
        eprintln!(
            "  {} arn:aws:sns:eu-west-1:01234567890:test-topic:2bcfbf39-05c3-41de-beaa-fcfcc21c8f55",
            args[0]
        );
        process::exit(1);
    }

    let mut error_count = 0;
    for value in &args[1..] {
        if !inspect(value) {
            error_count += 1;
        }
    }

    if args.len() > 2 {
        println!("\nInspection Summary:");
        println!("  Valid: {}", args.len() - 1 - error_count);
        println!("  Invalid: {}", error_count);
    }

    if error_count > 0 {
        process::exit(1);
    }
}

fn inspect(value: &str) -> bool {
    println!("Inspecting: {}", value);

    match ResourceArn::detect(value) {
        Ok(arn) => {
            println!("✓ {} ARN", arn.kind());
            print_summary(&arn);
            true
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            false
        }
    }
}

fn print_summary(arn: &ResourceArn) {
    println!("  Request key: {}", arn.key_name());
    println!("  Region: {}", arn.region());
    println!("  Account: {}", arn.account_id());
    println!("  Target: {}", arn.target());

    match arn {
        ResourceArn::Endpoint(endpoint) => {
            println!("  Removal key: {}", endpoint.removal_key_name());
        }
        ResourceArn::Subscription(subscription) => {
            println!("  Topic: {}", subscription.topic_name());
            println!("  Subscription id: {}", subscription.subscription_id());
        }
        ResourceArn::Topic(topic) => {
            println!("  Topic: {}", topic.target());
        }
        ResourceArn::Application(_) => {}
    }
}
