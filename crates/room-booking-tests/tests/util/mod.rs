use room_booking_core::BookingMode;
use room_booking_desk::Desk;

/// Books rooms until only `remaining` are left available.
///
/// Uses associated bookings of at most the per-request limit of 5, so the
/// lowest rooms fill up first and any `remaining` is reachable.
pub fn drain_to(desk: &mut Desk, remaining: usize) {
    while desk.hotel().available_rooms() > remaining {
        let excess = desk.hotel().available_rooms() - remaining;
        let count = excess.min(5) as u32;
        desk.book_rooms(count, BookingMode::Associated)
            .expect("draining the hotel must not fail");
    }
}
