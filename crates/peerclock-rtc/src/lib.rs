//! PeerClock RTC - Tick-driven wall clock with peer sync
//!
//! This crate implements the clock state machine:
//! - `SharedCalendar`: the shared clock record plus the pending-tick flag
//! - `TickEngine`: the once-per-second rollover cascade (producer side)
//! - `SyncReceiver`: atomic overwrite from a peer current-time record
//! - `TickConsumer`: at-most-once tick consumption and display formatting

pub mod clock;
pub mod consumer;
pub mod engine;
pub mod sync;

pub use clock::*;
pub use consumer::*;
pub use engine::*;
pub use sync::*;
