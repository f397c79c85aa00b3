//! Shared clock state
//!
//! The calendar record is shared between an interrupt-like producer (the
//! tick engine, conceptually highest priority) and a polled consumer. The
//! mutex plays the role of masking the tick interrupt: every multi-field
//! read-modify-write runs inside one lock scope and the lock is released
//! on every exit path. The pending-tick flag is a single atomic so the
//! consumer's read-and-clear is one exclusive step.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use peerclock_core::CalendarTime;

/// Cloneable handle to the clock record and the pending-tick flag
#[derive(Clone)]
pub struct SharedCalendar {
    inner: Arc<Inner>,
}

struct Inner {
    time: Mutex<CalendarTime>,
    tick_pending: AtomicBool,
}

impl SharedCalendar {
    /// Create a clock at the pre-sync baseline
    pub fn new() -> Self {
        Self::with_time(CalendarTime::baseline())
    }

    /// Create a clock at a given starting state
    pub fn with_time(time: CalendarTime) -> Self {
        SharedCalendar {
            inner: Arc::new(Inner {
                time: Mutex::new(time),
                tick_pending: AtomicBool::new(false),
            }),
        }
    }

    /// Copy of the current calendar state, taken in a single locked read.
    /// Staleness is bounded by one tick; there is no snapshot guarantee
    /// beyond the single read.
    pub fn snapshot(&self) -> CalendarTime {
        *self.inner.time.lock()
    }

    /// Exclusive access for the writers (tick engine, sync receiver)
    pub(crate) fn lock(&self) -> MutexGuard<'_, CalendarTime> {
        self.inner.time.lock()
    }

    /// Mark that a second has elapsed. Repeated marks before a consume
    /// coalesce into one.
    pub(crate) fn set_tick_pending(&self) {
        self.inner.tick_pending.store(true, Ordering::Release);
    }

    /// Read and clear the pending flag as one exclusive step
    pub(crate) fn take_tick_pending(&self) -> bool {
        self.inner.tick_pending.swap(false, Ordering::AcqRel)
    }
}

impl Default for SharedCalendar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_share_state() {
        let clock = SharedCalendar::new();
        let other = clock.clone();

        clock.lock().seconds = 42;
        assert_eq!(other.snapshot().seconds, 42);
    }

    #[test]
    fn test_pending_flag_coalesces() {
        let clock = SharedCalendar::new();
        assert!(!clock.take_tick_pending());

        clock.set_tick_pending();
        clock.set_tick_pending();

        assert!(clock.take_tick_pending());
        assert!(!clock.take_tick_pending());
    }

    #[test]
    fn test_starts_at_baseline() {
        let clock = SharedCalendar::new();
        assert_eq!(clock.snapshot(), CalendarTime::baseline());
    }
}
