use room_booking_core::{BookingMode, NotifyStyle, Outcome, DISMISS_LABEL, NOTIFY_DURATION_MS};
use room_booking_tests::recorded_desk;

#[test]
fn a_fresh_hotel_has_the_expected_layout() {
    let (desk, _sink) = recorded_desk(1);
    let hotel = desk.hotel();

    assert_eq!(hotel.floors().len(), 10);
    assert_eq!(hotel.total_rooms(), 97);
    assert_eq!(hotel.available_rooms(), 97);
    assert_eq!(hotel.version(), 0);
    assert!(hotel.previous_bookings().is_empty());

    for floor in hotel.floors() {
        let expected = if floor.number == 10 { 7 } else { 10 };
        assert_eq!(floor.rooms.len(), expected);
    }
}

#[test]
fn every_operation_fires_exactly_one_notification() {
    let (mut desk, sink) = recorded_desk(2);

    desk.book_rooms(3, BookingMode::Fresh).unwrap();
    desk.book_rooms(0, BookingMode::Fresh).unwrap_err();
    desk.randomize().unwrap();
    desk.reset_all();

    let recorded = sink.recorded();
    assert_eq!(recorded.len(), 4);
    assert!(recorded.iter().all(|note| note.dismiss_label == DISMISS_LABEL));
    assert!(recorded
        .iter()
        .all(|note| note.options.duration_ms == NOTIFY_DURATION_MS));
}

#[test]
fn successes_and_failures_are_styled_differently() {
    let (mut desk, sink) = recorded_desk(2);

    desk.book_rooms(3, BookingMode::Fresh).unwrap();
    let note = sink.last().unwrap();
    assert_eq!(note.message, "Successfully booked 3 rooms on Floor 1.");
    assert_eq!(note.options.style, NotifyStyle::Success);

    desk.book_rooms(6, BookingMode::Fresh).unwrap_err();
    let note = sink.last().unwrap();
    assert_eq!(note.message, "You can only book up to 5 rooms at a time!");
    assert_eq!(note.options.style, NotifyStyle::Error);
}

#[test]
fn the_version_moves_exactly_when_rooms_change() {
    let (mut desk, _sink) = recorded_desk(2);
    assert_eq!(desk.hotel().version(), 0);

    desk.book_rooms(3, BookingMode::Fresh).unwrap();
    assert_eq!(desk.hotel().version(), 1);

    desk.book_rooms(6, BookingMode::Fresh).unwrap_err();
    assert_eq!(desk.hotel().version(), 1);

    desk.randomize().unwrap();
    assert_eq!(desk.hotel().version(), 2);

    desk.reset_all();
    assert_eq!(desk.hotel().version(), 3);

    // nothing left to clear, so nothing changes
    desk.reset_all();
    assert_eq!(desk.hotel().version(), 3);
}

#[test]
fn reset_clears_bookings_and_occupancies() {
    let (mut desk, sink) = recorded_desk(2);
    desk.book_rooms(4, BookingMode::Fresh).unwrap();
    desk.randomize().unwrap();

    assert_eq!(desk.reset_all(), Outcome::Reset);
    assert_eq!(desk.hotel().available_rooms(), 97);
    assert!(desk.hotel().previous_bookings().is_empty());

    let note = sink.last().unwrap();
    assert_eq!(note.message, "All bookings have been reset!");
    assert_eq!(note.options.style, NotifyStyle::Success);
}
