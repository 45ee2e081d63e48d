//! The front desk, tying the inventory to the notification sink

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use room_booking_core::{
    BookingError, BookingMode, BookingRequest, Config, NotificationSink, NotifyOptions, Outcome,
    DISMISS_LABEL,
};

use crate::hotel::Hotel;

/// The front desk
///
/// Every operation goes through the desk: it runs the operation on the
/// inventory, fires exactly one notification at the sink, and logs the
/// outcome. Failures are expected and recoverable; they never panic and
/// never mutate the inventory.
pub struct Desk {
    hotel: Hotel,
    rng: StdRng,
    sink: Box<dyn NotificationSink + Send>,
}

impl Desk {
    pub(crate) fn new(config: &Config, sink: Box<dyn NotificationSink + Send>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            hotel: Hotel::new(config),
            rng,
            sink,
        }
    }

    /// Read access to the inventory.
    pub fn hotel(&self) -> &Hotel {
        &self.hotel
    }

    /// Book `count` rooms in the given mode.
    pub fn book_rooms(&mut self, count: u32, mode: BookingMode) -> Result<Outcome, BookingError> {
        let result = self.hotel.book_rooms(BookingRequest { count, mode });
        self.report(&result);
        result
    }

    /// Let the occupancy simulator take a random set of rooms.
    pub fn randomize(&mut self) -> Result<Outcome, BookingError> {
        let result = self.hotel.randomize(&mut self.rng);
        self.report(&result);
        result
    }

    /// Clear every booking and every simulated occupancy.
    pub fn reset_all(&mut self) -> Outcome {
        let outcome = self.hotel.reset_all();
        self.report(&Ok(outcome));
        outcome
    }

    fn report(&self, result: &Result<Outcome, BookingError>) {
        match result {
            Ok(outcome) => {
                let message = outcome.message();
                info!("{message}");
                self.sink
                    .notify(&message, DISMISS_LABEL, NotifyOptions::success());
            }
            Err(err) => {
                warn!("{err}");
                self.sink
                    .notify(&err.to_string(), DISMISS_LABEL, NotifyOptions::error());
            }
        }
    }
}
