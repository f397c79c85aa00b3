//! Tick consumption and display formatting
//!
//! The consumer side of the clock: polled from a main loop, it observes
//! at most one pending tick per elapsed second and renders the calendar
//! into the console line format.

use peerclock_core::CalendarTime;

use crate::SharedCalendar;

/// Consumer half of the clock
#[derive(Clone)]
pub struct TickConsumer {
    clock: SharedCalendar,
}

impl TickConsumer {
    pub fn new(clock: SharedCalendar) -> Self {
        TickConsumer { clock }
    }

    /// True at most once per elapsed second.
    ///
    /// Seconds that elapse between polls coalesce into a single pending
    /// notification; the calendar itself still reflects every one of them.
    pub fn consume_pending_tick(&self) -> bool {
        self.clock.take_tick_pending()
    }

    /// Render the current clock line, e.g. `Monday 2025\6\15\ 10:30:1`.
    /// Pure read: calling it repeatedly without an intervening tick or
    /// sync yields identical output.
    pub fn format_current_time(&self) -> String {
        format_time(&self.clock.snapshot())
    }
}

/// Format a calendar record for the console/display sink
pub fn format_time(time: &CalendarTime) -> String {
    format!(
        "{} {}\\{}\\{}\\ {}:{}:{}",
        time.day_name(),
        time.year(),
        time.month,
        time.day,
        time.hours,
        time.minutes,
        time.seconds
    )
}
