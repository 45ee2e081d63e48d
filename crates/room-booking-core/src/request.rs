use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the requested rooms may be distributed over the hotel
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum BookingMode {
    /// Prefer putting the whole booking on a single floor, falling back to
    /// splitting it across floors only when no floor can hold it
    Fresh,
    /// Skip the single-floor pass and book the lowest available rooms
    /// overall, so the rooms end up adjacent to earlier bookings
    Associated,
}

impl Default for BookingMode {
    fn default() -> Self {
        Self::Fresh
    }
}

/// A single booking request as entered at the desk
///
/// Requests are transient; one is built per call and dropped afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BookingRequest {
    /// Number of rooms requested
    pub count: u32,
    /// Distribution mode
    pub mode: BookingMode,
}

impl Default for BookingRequest {
    fn default() -> Self {
        Self {
            count: 1,
            mode: BookingMode::default(),
        }
    }
}

/// Successful result of a desk operation
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// The whole booking fit on one floor
    SingleFloor {
        /// Floor number the rooms were booked on
        floor: u32,
        /// Number of rooms booked
        count: u32,
    },
    /// The booking was spread across several floors
    MultiFloor {
        /// Number of rooms booked
        count: u32,
        /// Mode the request was made in; only changes the wording
        mode: BookingMode,
    },
    /// The occupancy simulator marked rooms as taken
    RandomBooked {
        /// Number of rooms marked
        count: u32,
    },
    /// Every room flag was cleared
    Reset,
}

impl Outcome {
    /// User-facing message describing this outcome
    pub fn message(&self) -> String {
        match self {
            Self::SingleFloor { floor, count } => {
                format!("Successfully booked {count} rooms on Floor {floor}.")
            }
            Self::MultiFloor {
                count,
                mode: BookingMode::Fresh,
            } => {
                format!("Successfully split {count} rooms across multiple floors.")
            }
            Self::MultiFloor {
                count,
                mode: BookingMode::Associated,
            } => {
                format!("Successfully booked {count} rooms optimally for Associated Booking.")
            }
            Self::RandomBooked { count } => {
                format!("Successfully booked {count} random rooms.")
            }
            Self::Reset => "All bookings have been reset!".to_string(),
        }
    }
}

/// Why a desk operation was rejected
///
/// The [`Display`][std::fmt::Display] strings are the exact texts shown to
/// the user; rejected operations never mutate the inventory.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum BookingError {
    /// The requested room count was zero or not a usable number
    #[error("Please enter a valid number of rooms to book!")]
    InvalidCount,

    /// The requested room count exceeds the per-booking limit
    #[error("You can only book up to {limit} rooms at a time!")]
    CountExceedsLimit {
        /// The configured per-booking limit
        limit: u32,
    },

    /// Too few available rooms to satisfy the whole request
    #[error("Not enough rooms available for the requested booking.")]
    InsufficientRooms,

    /// Every room is already booked or occupied
    #[error("No available rooms for random selection!")]
    NoAvailableRooms,
}
