use std::sync::Arc;

use parking_lot::Mutex;
use room_booking_core::{Config, Notification, NotificationSink, NotifyOptions};
use room_booking_desk::Desk;

/// Notification sink recording everything it is asked to show
///
/// Clones share the buffer, so a test can hand one clone to the desk and
/// inspect the other.
#[derive(Clone, Default)]
pub struct RecordingSink {
    notes: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingSink {
    /// All notifications recorded so far, in firing order
    pub fn recorded(&self) -> Vec<Notification> {
        self.notes.lock().clone()
    }

    /// The most recently recorded notification
    pub fn last(&self) -> Option<Notification> {
        self.notes.lock().last().cloned()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, message: &str, dismiss_label: &str, options: NotifyOptions) {
        self.notes.lock().push(Notification {
            message: message.to_string(),
            dismiss_label: dismiss_label.to_string(),
            options,
        });
    }
}

/// The default hotel configuration with a fixed seed, so runs are
/// reproducible
pub fn seeded_config(seed: u64) -> Config {
    Config {
        seed: Some(seed),
        ..Config::default()
    }
}

/// Open a desk over the default hotel and keep a handle on its
/// notifications
pub fn recorded_desk(seed: u64) -> (Desk, RecordingSink) {
    let sink = RecordingSink::default();
    let desk = room_booking_desk::open(&seeded_config(seed), Box::new(sink.clone()));
    (desk, sink)
}
