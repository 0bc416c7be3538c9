//! Push payload value object

use std::fmt;

/// Why a delivered message could not produce a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The envelope is not a JSON object
    NotAnObject,
    /// The envelope carries no `notification` section
    MissingNotification,
    /// The `notification` section is not a JSON object
    NotificationNotAnObject,
    /// The notification carries no usable `title`
    MissingTitle,
}

impl MalformedReason {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotAnObject => "payload is not a JSON object",
            Self::MissingNotification => "payload has no notification section",
            Self::NotificationNotAnObject => "notification section is not an object",
            Self::MissingTitle => "notification has no title",
        }
    }
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One push message as seen by the bridge.
///
/// The vendor envelope may carry arbitrary extra sections; only
/// `notification.title` and `notification.body` are consumed. A message
/// that cannot produce a notification parses to `Malformed` instead of
/// failing at field access, so one bad message never affects its
/// neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushPayload {
    /// The message carries enough to show a notification
    WellFormed {
        /// Notification heading (always present)
        title: String,
        /// Supporting detail text (may be absent)
        body: Option<String>,
    },
    /// The message cannot produce a notification
    Malformed(MalformedReason),
}

impl PushPayload {
    /// Parse a raw vendor envelope into a payload.
    ///
    /// A `title` that is absent, not a string, or empty makes the payload
    /// malformed. A `body` that is absent or not a string is treated as
    /// no body.
    pub fn from_envelope(envelope: &serde_json::Value) -> Self {
        let Some(object) = envelope.as_object() else {
            return Self::Malformed(MalformedReason::NotAnObject);
        };

        let Some(notification) = object.get("notification") else {
            return Self::Malformed(MalformedReason::MissingNotification);
        };

        let Some(notification) = notification.as_object() else {
            return Self::Malformed(MalformedReason::NotificationNotAnObject);
        };

        let title = match notification.get("title").and_then(|t| t.as_str()) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => return Self::Malformed(MalformedReason::MissingTitle),
        };

        let body = notification
            .get("body")
            .and_then(|b| b.as_str())
            .map(str::to_string);

        Self::WellFormed { title, body }
    }

    /// Check if this payload can produce a notification
    pub fn is_well_formed(&self) -> bool {
        matches!(self, Self::WellFormed { .. })
    }
}
