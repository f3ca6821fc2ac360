//! Notification messages and their platform payloads.
//!
//! A [`Message`] describes one notification independently of the device
//! platform. It renders into the APNS structure (`ios_data`) and the GCM
//! structure (`android_data`); both renderings pass through
//! [`strip_blank`] so that unset fields never reach the wire.

mod blank;
#[allow(clippy::module_inception)]
mod message;

pub use blank::{is_blank, strip_blank};
pub use message::{DEFAULT_ANDROID_INBOX_GROUP_MESSAGE, Message};
