//! The room allocation engine

use room_booking_core::{BookingError, BookingMode, BookingRequest, Outcome};

use crate::hotel::Hotel;

impl Hotel {
    /// Book rooms according to `request`.
    ///
    /// In [`BookingMode::Fresh`] the first floor with enough available
    /// rooms takes the whole booking; the rooms are split across floors,
    /// lowest first, only when no floor can hold it.
    /// [`BookingMode::Associated`] skips the single-floor pass so the
    /// booking lands next to earlier ones.
    ///
    /// All or nothing: a rejected request leaves the inventory untouched.
    pub fn book_rooms(&mut self, request: BookingRequest) -> Result<Outcome, BookingError> {
        if request.count == 0 {
            return Err(BookingError::InvalidCount);
        }
        if request.count > self.booking_limit {
            return Err(BookingError::CountExceedsLimit {
                limit: self.booking_limit,
            });
        }
        let count = request.count as usize;

        if request.mode == BookingMode::Fresh {
            for f in 0..self.floors.len() {
                let free = self.floors[f].available_indices();
                if free.len() < count {
                    continue;
                }
                for &i in free.iter().take(count) {
                    self.floors[f].rooms[i].book();
                }
                self.bump();
                return Ok(Outcome::SingleFloor {
                    floor: self.floors[f].number,
                    count: request.count,
                });
            }
        }

        let coordinates = self.available_coordinates();
        if coordinates.len() < count {
            return Err(BookingError::InsufficientRooms);
        }
        for &(f, i) in coordinates.iter().take(count) {
            self.floors[f].rooms[i].book();
        }
        self.bump();
        Ok(Outcome::MultiFloor {
            count: request.count,
            mode: request.mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use room_booking_core::Config;

    use super::*;

    fn request(count: u32, mode: BookingMode) -> BookingRequest {
        BookingRequest { count, mode }
    }

    /// Three floors of two rooms each, top floor one room.
    fn tiny() -> Hotel {
        Hotel::new(&Config {
            floors: 3,
            rooms_per_floor: 2,
            top_floor_rooms: 1,
            booking_limit: 5,
            seed: None,
        })
    }

    #[test]
    fn fresh_books_lowest_available_rooms() {
        let mut hotel = Hotel::new(&Config::default());
        hotel.floors[0].rooms[0].occupy();

        let outcome = hotel.book_rooms(request(2, BookingMode::Fresh)).unwrap();
        assert_eq!(outcome, Outcome::SingleFloor { floor: 1, count: 2 });
        assert!(hotel.floors[0].rooms[1].booked);
        assert!(hotel.floors[0].rooms[2].booked);
        assert!(!hotel.floors[0].rooms[3].booked);
    }

    #[test]
    fn associated_skips_the_single_floor_pass() {
        let mut hotel = Hotel::new(&Config::default());

        let outcome = hotel
            .book_rooms(request(2, BookingMode::Associated))
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::MultiFloor {
                count: 2,
                mode: BookingMode::Associated
            }
        );
        assert!(hotel.floors[0].rooms[0].booked);
        assert!(hotel.floors[0].rooms[1].booked);
    }

    #[test]
    fn fresh_splits_when_no_floor_has_enough() {
        let mut hotel = tiny();
        hotel.floors[0].rooms[0].book();

        // floors now hold 1, 2 and 1 available rooms
        let outcome = hotel.book_rooms(request(3, BookingMode::Fresh)).unwrap();
        assert_eq!(
            outcome,
            Outcome::MultiFloor {
                count: 3,
                mode: BookingMode::Fresh
            }
        );
        assert!(hotel.floors[0].rooms[1].booked);
        assert!(hotel.floors[1].rooms[0].booked);
        assert!(hotel.floors[1].rooms[1].booked);
        assert!(hotel.floors[2].rooms[0].is_available());
    }

    #[test]
    fn rejected_requests_leave_the_inventory_untouched() {
        let mut hotel = tiny();
        hotel.book_rooms(request(4, BookingMode::Fresh)).unwrap();
        let before = hotel.clone();

        let err = hotel
            .book_rooms(request(2, BookingMode::Fresh))
            .unwrap_err();
        assert_eq!(err, BookingError::InsufficientRooms);
        assert_eq!(hotel, before);
    }

    #[test]
    fn validation_order() {
        let mut hotel = Hotel::new(&Config::default());
        let before = hotel.clone();

        assert_eq!(
            hotel.book_rooms(request(0, BookingMode::Fresh)),
            Err(BookingError::InvalidCount)
        );
        assert_eq!(
            hotel.book_rooms(request(6, BookingMode::Associated)),
            Err(BookingError::CountExceedsLimit { limit: 5 })
        );
        assert_eq!(hotel, before);
    }
}
