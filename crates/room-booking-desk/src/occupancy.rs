//! The random occupancy simulator

use log::info;
use rand::Rng;
use room_booking_core::{BookingError, Outcome};

use crate::hotel::Hotel;

impl Hotel {
    /// Mark a random set of available rooms as occupied.
    ///
    /// Takes between 10% and 50% of the currently available rooms: the
    /// lower bound is rounded up, the upper bound rounded down, and the
    /// upper bound clamped to the lower one (with one available room both
    /// bounds are 1, so it is always picked). The pick count and the rooms
    /// themselves are drawn uniformly from `rng`, the rooms without
    /// replacement.
    pub fn randomize(&mut self, rng: &mut impl Rng) -> Result<Outcome, BookingError> {
        let mut candidates = self.available_coordinates();
        if candidates.is_empty() {
            return Err(BookingError::NoAvailableRooms);
        }

        let total = candidates.len();
        let min = (total as f64 * 0.1).ceil() as usize;
        let max = ((total as f64 * 0.5).floor() as usize).max(min);
        let pick = rng.gen_range(min..=max);

        info!("Booking {pick} random rooms out of {total} available rooms.");

        for _ in 0..pick {
            let chosen = rng.gen_range(0..candidates.len());
            let (f, i) = candidates.swap_remove(chosen);
            self.floors[f].rooms[i].occupy();
        }
        self.bump();
        Ok(Outcome::RandomBooked { count: pick as u32 })
    }
}
