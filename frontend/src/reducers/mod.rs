//! Domain reducers.
//!
//! Each page area lives in its own module. The root `update.rs` offers every
//! message to them in turn and handles whatever none of them consumed.

pub mod reservations;
pub mod reviews;
pub mod slots;
pub mod staff;
