//! Clock node - consumer-side orchestration
//!
//! `ClockNode` owns the shared calendar and the consumer glue: each poll
//! consumes at most one pending tick and, when the gate allows, pushes the
//! formatted clock line to the display sink. Syncing never interferes with
//! ticking; a failed sync is logged and retried by the caller later.

use std::time::Duration;

use peerclock_core::ClockResult;
use peerclock_rtc::{SharedCalendar, SyncReceiver, TickConsumer, TickEngine};

use crate::{AlwaysEmit, ConsoleSink, DisplaySink, EmitGate, TimeSource};

/// Clock node configuration
#[derive(Clone, Debug)]
pub struct NodeConfig {
    /// Period of the tick source
    pub tick_interval: Duration,
    /// Main-loop poll period for pending ticks
    pub poll_interval: Duration,
}

impl Default for NodeConfig {
    fn default() -> Self {
        NodeConfig {
            tick_interval: Duration::from_secs(1),
            poll_interval: Duration::from_millis(250),
        }
    }
}

/// The clock node: shared calendar plus consumer-side collaborators
pub struct ClockNode<S = ConsoleSink, G = AlwaysEmit> {
    clock: SharedCalendar,
    consumer: TickConsumer,
    receiver: SyncReceiver,
    sink: S,
    gate: G,
    config: NodeConfig,
}

impl ClockNode {
    /// Create a node with console output and no emit gate
    pub fn new() -> Self {
        Self::with_parts(ConsoleSink, AlwaysEmit, NodeConfig::default())
    }
}

impl Default for ClockNode {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DisplaySink, G: EmitGate> ClockNode<S, G> {
    /// Create a node with custom sink, gate and configuration
    pub fn with_parts(sink: S, gate: G, config: NodeConfig) -> Self {
        let clock = SharedCalendar::new();
        ClockNode {
            consumer: TickConsumer::new(clock.clone()),
            receiver: SyncReceiver::new(clock.clone()),
            clock,
            sink,
            gate,
            config,
        }
    }

    /// Handle to the shared calendar
    pub fn clock(&self) -> SharedCalendar {
        self.clock.clone()
    }

    /// Producer handle for the tick source
    pub fn engine(&self) -> TickEngine {
        TickEngine::new(self.clock.clone())
    }

    /// Node configuration
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Consume at most one pending tick, emitting the clock line when the
    /// gate allows. Returns whether a tick was consumed.
    pub fn poll(&mut self) -> bool {
        if !self.consumer.consume_pending_tick() {
            return false;
        }

        if self.gate.should_emit() {
            let line = self.consumer.format_current_time();
            self.sink.emit(&line);
        }

        true
    }

    /// Fetch the peer's current time and overwrite the local clock.
    /// Failure leaves the clock ticking from its previous state.
    pub fn sync_from<T: TimeSource>(&mut self, source: &mut T) -> ClockResult<()> {
        let buf = match source.fetch_current_time() {
            Ok(buf) => buf,
            Err(e) => {
                tracing::warn!("time source fetch failed: {}", e);
                return Err(e);
            }
        };

        match self.receiver.apply_external_time(&buf) {
            Ok(()) => {
                tracing::info!("clock synced from peer");
                Ok(())
            }
            Err(e) => {
                tracing::warn!("peer sync rejected: {}", e);
                Err(e)
            }
        }
    }

    /// Poll loop: consume ticks until the surrounding task is cancelled
    pub async fn run(&mut self) {
        loop {
            self.poll();
            tokio::time::sleep(self.config.poll_interval).await;
        }
    }
}
