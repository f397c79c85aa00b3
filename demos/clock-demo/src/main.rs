//! Console clock demo
//!
//! Wires the clock node to a simulated peer time source: syncs once at
//! startup, starts the 1 Hz tick driver, then polls forever printing the
//! clock line each second. Set `RUST_LOG=debug` to watch the sync path.

use peerclock_runtime::{ClockNode, FixedTimeSource, TickSource};
use peerclock_wire::CurrentTimeRecord;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Simulated peer: Sunday, June 15th 2025, 10:30:00
    let record = CurrentTimeRecord {
        year: 2025,
        month: 6,
        day: 15,
        hours: 10,
        minutes: 30,
        seconds: 0,
        day_of_week: 7,
    };
    let mut peer = FixedTimeSource::new(record.to_bytes());

    let mut node = ClockNode::new();
    let mut ticks = TickSource::new(node.engine(), node.config().tick_interval);

    if let Err(e) = node.sync_from(&mut peer) {
        tracing::warn!("initial sync failed, ticking from baseline: {}", e);
    }

    ticks.start();
    node.run().await;
}
