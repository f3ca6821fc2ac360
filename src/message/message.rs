//! The logical notification message and its platform renderings.

use super::blank::strip_blank;
use log::trace;
use serde_json::{Map, Value, json};

/// Default summary shown for grouped Android notifications.
///
/// `%n%` is replaced with the number of notifications by the receiving app.
pub const DEFAULT_ANDROID_INBOX_GROUP_MESSAGE: &str = "%n% messages";

/// A single notification, built fluently and rendered per platform.
///
/// Unset fields are left out of the rendered payloads, while a badge of `0`
/// or `content_available = false` is sent as is.
///
/// # Example
/// ```rust
/// use serde_json::{Value, json};
/// use sns_push::Message;
///
/// let message = Message::new()
///     .with_title("Message Title")
///     .with_body("Message body")
///     .with_badge(5)
///     .with_ios_sound("Sound.caf")
///     .with_android_sound("Sound");
///
/// assert_eq!(
///     Value::Object(message.ios_data()),
///     json!({"aps": {"alert": {"title": "Message Title", "body": "Message body"},
///                    "sound": "Sound.caf", "badge": 5}})
/// );
/// assert_eq!(
///     Value::Object(message.android_data()),
///     json!({"data": {"title": "Message Title", "message": "Message body",
///                     "sound": "Sound", "badge": 5}})
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    title: Option<String>,
    body: Option<String>,
    badge: Option<u32>,
    ios_sound: Option<String>,
    android_sound: Option<String>,
    content_available: Option<bool>,
    use_android_inbox_mode: bool,
    android_inbox_group_message: String,
    payload: Map<String, Value>,
}

impl Default for Message {
    fn default() -> Self {
        Self {
            title: None,
            body: None,
            badge: None,
            ios_sound: None,
            android_sound: None,
            content_available: None,
            use_android_inbox_mode: false,
            android_inbox_group_message: DEFAULT_ANDROID_INBOX_GROUP_MESSAGE.to_string(),
            payload: Map::new(),
        }
    }
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the notification title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the notification body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the badge count. Zero clears the badge on the device.
    pub fn with_badge(mut self, badge: u32) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_ios_sound(mut self, sound: impl Into<String>) -> Self {
        self.ios_sound = Some(sound.into());
        self
    }

    pub fn with_android_sound(mut self, sound: impl Into<String>) -> Self {
        self.android_sound = Some(sound.into());
        self
    }

    /// Mark the notification as a (silent) content update.
    pub fn with_content_available(mut self, content_available: bool) -> Self {
        self.content_available = Some(content_available);
        self
    }

    /// Group Android notifications into an inbox-style summary.
    pub fn with_android_inbox_mode(mut self, enabled: bool) -> Self {
        self.use_android_inbox_mode = enabled;
        self
    }

    /// Set the inbox summary template; `%n%` is substituted on the device.
    pub fn with_android_inbox_group_message(mut self, message: impl Into<String>) -> Self {
        self.android_inbox_group_message = message.into();
        self
    }

    /// Replace the extra payload merged into every rendering.
    pub fn with_payload(mut self, payload: Map<String, Value>) -> Self {
        self.payload = payload;
        self
    }

    /// Add a single extra payload entry.
    pub fn with_payload_entry<S: Into<String>>(mut self, key: S, value: Value) -> Self {
        self.payload.insert(key.into(), value);
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn badge(&self) -> Option<u32> {
        self.badge
    }

    pub fn ios_sound(&self) -> Option<&str> {
        self.ios_sound.as_deref()
    }

    pub fn android_sound(&self) -> Option<&str> {
        self.android_sound.as_deref()
    }

    pub fn content_available(&self) -> Option<bool> {
        self.content_available
    }

    pub fn use_android_inbox_mode(&self) -> bool {
        self.use_android_inbox_mode
    }

    pub fn android_inbox_group_message(&self) -> &str {
        &self.android_inbox_group_message
    }

    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Whether neither platform would receive any content.
    pub fn is_empty(&self) -> bool {
        self.ios_data().is_empty() && self.android_data().is_empty()
    }

    /// Render the APNS payload.
    ///
    /// The extra payload is merged at the top level, next to `aps`.
    pub fn ios_data(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert(
            "aps".to_string(),
            json!({
                "alert": {
                    "title": self.title,
                    "body": self.body,
                },
                "sound": self.ios_sound,
                "badge": self.badge,
                "content-available": self.content_available,
            }),
        );
        merge(&mut data, &self.payload);

        let data = strip_blank(data);
        trace!("Rendered iOS data: {:?}", data);
        data
    }

    /// Render the GCM payload.
    ///
    /// The extra payload is merged inside `data`. In inbox mode the `style`
    /// and `summaryText` keys are merged last, so they win over the payload.
    pub fn android_data(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert("title".to_string(), json!(self.title));
        data.insert("message".to_string(), json!(self.body));
        data.insert("sound".to_string(), json!(self.android_sound));
        data.insert("badge".to_string(), json!(self.badge));
        data.insert(
            "content-available".to_string(),
            json!(self.content_available),
        );
        merge(&mut data, &self.payload);

        if self.use_android_inbox_mode {
            data.insert("style".to_string(), json!("inbox"));
            data.insert(
                "summaryText".to_string(),
                json!(self.android_inbox_group_message),
            );
        }

        let mut wrapped = Map::new();
        wrapped.insert("data".to_string(), Value::Object(data));

        let wrapped = strip_blank(wrapped);
        trace!("Rendered Android data: {:?}", wrapped);
        wrapped
    }
}

/// Shallow merge; existing keys keep their position and take the new value.
fn merge(target: &mut Map<String, Value>, extra: &Map<String, Value>) {
    for (key, value) in extra {
        target.insert(key.clone(), value.clone());
    }
}
