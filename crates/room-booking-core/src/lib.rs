//! 🏨 Shared vocabulary of the room booking system
#![warn(missing_docs)]

mod notify;
mod request;

pub use notify::{
    Notification, NotificationSink, NotifyOptions, NotifyStyle, DISMISS_LABEL, NOTIFY_DURATION_MS,
};
pub use request::{BookingError, BookingMode, BookingRequest, Outcome};

/// Configuration of the room booking system
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Number of floors in the hotel
    pub floors: u32,
    /// Number of rooms on every regular floor
    pub rooms_per_floor: u32,
    /// Number of rooms on the top floor
    pub top_floor_rooms: u32,
    /// Maximum number of rooms a single booking may request
    pub booking_limit: u32,

    /// Seed for the occupancy generator; seeded from OS entropy if absent
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            floors: 10,
            rooms_per_floor: 10,
            top_floor_rooms: 7,
            booking_limit: 5,
            seed: None,
        }
    }
}
