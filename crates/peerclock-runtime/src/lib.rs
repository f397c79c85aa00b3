//! PeerClock Runtime - Collaborators and orchestration
//!
//! Everything outside the clock core is a collaborator behind a trait:
//! - `TimeSource`: the wireless peer that hands over a raw time record
//! - `DisplaySink`: the console/display that receives the clock line
//! - `EmitGate`: the optional button-style gate on emission
//!
//! `TickSource` stands in for the 1 Hz hardware timer, and `ClockNode`
//! glues the consumer side to the collaborators in a poll loop.

pub mod node;
pub mod source;
pub mod tick;

pub use node::*;
pub use source::*;
pub use tick::*;
