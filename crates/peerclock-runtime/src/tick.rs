//! 1 Hz tick driver
//!
//! Stands in for the hardware periodic interrupt: a background task that
//! fires the tick engine once per interval. `Burst` catch-up means a
//! stalled executor still delivers every elapsed second to the calendar;
//! only the notifications coalesce, never the seconds themselves.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use peerclock_rtc::TickEngine;

/// Drives the tick engine at a fixed 1-second period
pub struct TickSource {
    engine: TickEngine,
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl TickSource {
    pub fn new(engine: TickEngine, period: Duration) -> Self {
        TickSource {
            engine,
            period,
            task: None,
        }
    }

    /// Start firing. Calling `start` while already running is a no-op.
    pub fn start(&mut self) {
        if self.task.is_some() {
            return;
        }

        let engine = self.engine.clone();
        let period = self.period;
        self.task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);
            // The first interval tick completes immediately; skip it so the
            // engine only sees genuinely elapsed seconds.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                engine.on_second_elapsed();
            }
        }));
    }

    /// Stop firing.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Whether the driver is currently running
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for TickSource {
    fn drop(&mut self) {
        self.stop();
    }
}
