use serde::Serialize;

/// Label of the dismiss button on every notification
pub const DISMISS_LABEL: &str = "Close";

/// Time in milliseconds a notification stays on screen
pub const NOTIFY_DURATION_MS: u32 = 3000;

/// Visual style of a notification
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyStyle {
    /// Confirmation of a successful operation
    Success,
    /// A rejected operation
    Error,
}

/// Display options attached to a notification
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct NotifyOptions {
    /// Time in milliseconds before the notification auto-dismisses
    pub duration_ms: u32,
    /// Visual style
    pub style: NotifyStyle,
}

impl NotifyOptions {
    /// Standard options for a success notification
    #[inline]
    pub fn success() -> Self {
        Self {
            duration_ms: NOTIFY_DURATION_MS,
            style: NotifyStyle::Success,
        }
    }

    /// Standard options for an error notification
    #[inline]
    pub fn error() -> Self {
        Self {
            duration_ms: NOTIFY_DURATION_MS,
            style: NotifyStyle::Error,
        }
    }
}

/// A notification as it was handed to the sink
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Notification {
    /// User-facing message text
    pub message: String,
    /// Label of the dismiss button
    pub dismiss_label: String,
    /// Display options
    pub options: NotifyOptions,
}

/// Interface for showing notifications to the user
///
/// The desk fires exactly one notification per operation. Delivery is
/// fire-and-forget; a sink that cannot display anything simply drops the
/// message.
pub trait NotificationSink {
    /// Show a notification
    fn notify(&self, message: &str, dismiss_label: &str, options: NotifyOptions);
}
