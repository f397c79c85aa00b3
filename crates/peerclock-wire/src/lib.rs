//! PeerClock Wire Protocol - Binary record format
//!
//! This crate implements the byte layout of the record a peer time server
//! hands over on a sync:
//! - mandatory date/time fields (8 bytes)
//! - trailing fractions-of-second and adjust-reason bytes (ignored)

pub mod record;

pub use record::*;
