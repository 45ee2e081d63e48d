//! :bellhop_bell: The front desk of the room booking demo.
//!
//! The inventory lives in [hotel], the booking engine in [allocation], the
//! random occupancy simulator in [occupancy], and the [desk] facade ties
//! them to a notification sink. Open a desk with [`open()`] and drive it
//! through [`Desk`].

#![allow(rustdoc::private_intra_doc_links)]

use room_booking_core::{Config, NotificationSink};

mod allocation;
mod desk;
mod hotel;
mod occupancy;

pub use desk::Desk;
pub use hotel::{Floor, Hotel, Room};

/// Entrypoint of the booking engine
///
/// Builds the inventory from `config`, seeds the randomness source (from
/// `config.seed` if present, OS entropy otherwise), and wires up the sink
/// that receives one notification per operation.
pub fn open(config: &Config, sink: Box<dyn NotificationSink + Send>) -> Desk {
    Desk::new(config, sink)
}
