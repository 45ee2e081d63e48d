//! The hotel inventory: floors, rooms, and their booking flags

use room_booking_core::{Config, Outcome};
use serde::Serialize;

/// A single room, identified by its floor and its position on that floor
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Room {
    /// Floor number, starting at 1
    pub floor: u32,
    /// Position on the floor, starting at 0
    pub index: u32,
    /// Set when the room was taken by a booking request
    pub booked: bool,
    /// Set when the occupancy simulator took the room
    pub randomly_occupied: bool,
}

impl Room {
    fn new(floor: u32, index: u32) -> Self {
        Self {
            floor,
            index,
            booked: false,
            randomly_occupied: false,
        }
    }

    /// Whether the room can still be allocated
    ///
    /// Booked and randomly occupied rooms are equally unavailable; the flags
    /// only differ in how the room got taken.
    #[inline]
    pub fn is_available(&self) -> bool {
        !self.booked && !self.randomly_occupied
    }

    /// Mark the room as booked. The room must be available.
    pub(crate) fn book(&mut self) {
        debug_assert!(self.is_available());
        self.booked = true;
    }

    /// Mark the room as randomly occupied. The room must be available.
    pub(crate) fn occupy(&mut self) {
        debug_assert!(self.is_available());
        self.randomly_occupied = true;
    }

    fn clear(&mut self) {
        self.booked = false;
        self.randomly_occupied = false;
    }
}

/// One floor of the hotel with its rooms in index order
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Floor {
    /// Floor number, starting at 1
    pub number: u32,
    /// Rooms on this floor, ordered by ascending index
    pub rooms: Vec<Room>,
}

impl Floor {
    fn new(number: u32, num_rooms: u32) -> Self {
        let rooms = (0..num_rooms)
            .map(|index| Room::new(number, index))
            .collect();
        Self { number, rooms }
    }

    /// Positions of the available rooms on this floor, ascending.
    pub(crate) fn available_indices(&self) -> Vec<usize> {
        self.rooms
            .iter()
            .enumerate()
            .filter(|(_, room)| room.is_available())
            .map(|(index, _)| index)
            .collect()
    }
}

/// The hotel inventory
///
/// Built once from the [`Config`] and never resized afterwards; every
/// operation only flips room flags in place. The `version` counter
/// increments whenever a flag actually changed, so a consumer can poll it
/// instead of diffing the whole inventory.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Hotel {
    pub(crate) floors: Vec<Floor>,
    pub(crate) version: u64,
    #[serde(skip)]
    pub(crate) booking_limit: u32,
}

impl Hotel {
    /// Create a new [`Hotel`] with all rooms available.
    ///
    /// Floors are numbered 1 up to `config.floors`; the top floor gets
    /// `config.top_floor_rooms` rooms, every other floor
    /// `config.rooms_per_floor`.
    pub fn new(config: &Config) -> Self {
        let floors = (1..=config.floors)
            .map(|number| {
                let num_rooms = if number == config.floors {
                    config.top_floor_rooms
                } else {
                    config.rooms_per_floor
                };
                Floor::new(number, num_rooms)
            })
            .collect();
        Self {
            floors,
            version: 0,
            booking_limit: config.booking_limit,
        }
    }

    /// Get the floors in ascending number order.
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Get the mutation counter.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Get the total number of rooms.
    pub fn total_rooms(&self) -> usize {
        self.floors.iter().map(|floor| floor.rooms.len()).sum()
    }

    /// Get the number of rooms that are still available.
    pub fn available_rooms(&self) -> usize {
        self.floors
            .iter()
            .flat_map(|floor| floor.rooms.iter())
            .filter(|room| room.is_available())
            .count()
    }

    /// Get every booked room, ordered by floor and then index.
    ///
    /// Randomly occupied rooms are not bookings and do not show up here.
    pub fn previous_bookings(&self) -> Vec<Room> {
        self.floors
            .iter()
            .flat_map(|floor| floor.rooms.iter())
            .filter(|room| room.booked)
            .copied()
            .collect()
    }

    /// Clear both flags on every room.
    ///
    /// Always succeeds; the version only moves if some flag was actually
    /// set, so resetting twice equals resetting once.
    pub fn reset_all(&mut self) -> Outcome {
        let mut changed = false;
        for floor in &mut self.floors {
            for room in &mut floor.rooms {
                if room.booked || room.randomly_occupied {
                    room.clear();
                    changed = true;
                }
            }
        }
        if changed {
            self.bump();
        }
        Outcome::Reset
    }

    /// Coordinates of every available room as `(floor position, room
    /// position)`, ordered by floor and then index.
    pub(crate) fn available_coordinates(&self) -> Vec<(usize, usize)> {
        let mut coordinates = Vec::new();
        for (f, floor) in self.floors.iter().enumerate() {
            for (i, room) in floor.rooms.iter().enumerate() {
                if room.is_available() {
                    coordinates.push((f, i));
                }
            }
        }
        coordinates
    }

    pub(crate) fn bump(&mut self) {
        self.version += 1;
    }
}
