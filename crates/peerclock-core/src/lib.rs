//! PeerClock Core - Calendar state and primitives
//!
//! This crate defines the types the rest of PeerClock revolves around:
//! - `CalendarTime`: wall-clock date/time fields plus derived status flags
//! - days-in-month and day-name lookup tables
//! - the Gregorian leap-year rule
//! - the error taxonomy

pub mod calendar;
pub mod error;

pub use calendar::*;
pub use error::*;
