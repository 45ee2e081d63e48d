//! Sequential request handling over one shared desk

use std::sync::Arc;

use parking_lot::Mutex;
use room_booking_core::{
    BookingError, BookingMode, Config, Notification, NotificationSink, NotifyOptions, Outcome,
};
use room_booking_desk::Desk;
use serde::Serialize;

/// Notification sink holding the latest notification until the HTTP
/// response picks it up
///
/// Clones share the slot, so the desk can own one clone while the handler
/// drains the other.
#[derive(Clone, Default)]
pub struct SnackbarSlot {
    slot: Arc<Mutex<Option<Notification>>>,
}

impl SnackbarSlot {
    fn take(&self) -> Option<Notification> {
        self.slot.lock().take()
    }
}

impl NotificationSink for SnackbarSlot {
    fn notify(&self, message: &str, dismiss_label: &str, options: NotifyOptions) {
        *self.slot.lock() = Some(Notification {
            message: message.to_string(),
            dismiss_label: dismiss_label.to_string(),
            options,
        });
    }
}

/// Response body of the action endpoints
#[derive(Debug, Serialize)]
pub struct ActionReply {
    /// Whether the operation succeeded
    pub ok: bool,
    /// Inventory version after the operation
    pub version: u64,
    /// The notification the operation fired
    pub notification: Notification,
}

/// A request handler processing requests sequentially
///
/// The desk sits behind a mutex only because requests arrive through a
/// shared reference; there is a single serving loop and no contention.
pub struct DeskHandler {
    desk: Mutex<Desk>,
    snackbar: SnackbarSlot,
}

impl DeskHandler {
    /// Open a desk over a fresh hotel and route its notifications into the
    /// snackbar slot.
    pub fn new(config: &Config) -> Self {
        let snackbar = SnackbarSlot::default();
        let desk = room_booking_desk::open(config, Box::new(snackbar.clone()));
        Self {
            desk: Mutex::new(desk),
            snackbar,
        }
    }

    /// The whole inventory as JSON, for rendering the grid.
    pub fn rooms(&self) -> String {
        let desk = self.desk.lock();
        serde_json::to_string(desk.hotel()).expect("serializing the inventory failed")
    }

    /// The booked rooms as JSON, ordered by floor and then index.
    pub fn bookings(&self) -> String {
        let desk = self.desk.lock();
        serde_json::to_string(&desk.hotel().previous_bookings())
            .expect("serializing the bookings failed")
    }

    /// Book `count` rooms in the given mode.
    pub fn book(&self, count: u32, mode: BookingMode) -> ActionReply {
        self.act(|desk| desk.book_rooms(count, mode))
    }

    /// Let the occupancy simulator take a random set of rooms.
    pub fn randomize(&self) -> ActionReply {
        self.act(Desk::randomize)
    }

    /// Clear every booking and every simulated occupancy.
    pub fn reset(&self) -> ActionReply {
        self.act(|desk| Ok(desk.reset_all()))
    }

    fn act(&self, op: impl FnOnce(&mut Desk) -> Result<Outcome, BookingError>) -> ActionReply {
        let mut desk = self.desk.lock();
        let ok = op(&mut desk).is_ok();
        let notification = self
            .snackbar
            .take()
            .expect("desk operation fired no notification");
        ActionReply {
            ok,
            version: desk.hotel().version(),
            notification,
        }
    }
}
