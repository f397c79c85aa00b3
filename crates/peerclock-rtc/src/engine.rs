//! The once-per-second rollover cascade
//!
//! One call advances the calendar by exactly one second and lets the
//! overflow cascade through minutes, hours, day of week, day of month,
//! month and year. The whole chain is branch-bounded constant-time
//! arithmetic with no error path: out-of-range state cannot arise because
//! the only other writer (the sync receiver) refreshes the derived flags
//! on every overwrite.

use peerclock_core::{CalendarTime, DAYS_IN_MONTH, DAYS_IN_WEEK, FEBRUARY, MONTHS_IN_YEAR};

use crate::SharedCalendar;

const LAST_SECOND: u8 = 59;
const LAST_MINUTE: u8 = 59;
const LAST_HOUR: u8 = 23;

/// Producer half of the clock: applies one elapsed second per invocation
#[derive(Clone)]
pub struct TickEngine {
    clock: SharedCalendar,
}

impl TickEngine {
    pub fn new(clock: SharedCalendar) -> Self {
        TickEngine { clock }
    }

    /// Advance the calendar by one second and mark the tick pending.
    ///
    /// Safe to invoke from a context that preempts the consumer: the
    /// cascade runs under the clock lock and completes in bounded time,
    /// and the pending flag is only raised after the record is consistent.
    pub fn on_second_elapsed(&self) {
        {
            let mut time = self.clock.lock();
            advance_one_second(&mut time);
        }
        self.clock.set_tick_pending();
    }
}

/// Apply the seconds→minutes→hours→day→month→year cascade once.
pub(crate) fn advance_one_second(time: &mut CalendarTime) {
    debug_assert!(time.seconds <= LAST_SECOND);
    debug_assert!(time.minutes <= LAST_MINUTE);
    debug_assert!(time.hours <= LAST_HOUR);
    debug_assert!((1..=MONTHS_IN_YEAR).contains(&time.month));

    time.seconds += 1;
    if time.seconds <= LAST_SECOND {
        return;
    }
    time.seconds = 0;

    time.minutes += 1;
    if time.minutes <= LAST_MINUTE {
        return;
    }
    time.minutes = 0;

    time.hours += 1;
    if time.hours > LAST_HOUR {
        time.hours = 0;

        time.day += 1;
        time.day_of_week += 1;
        if time.day_of_week > DAYS_IN_WEEK {
            time.day_of_week = 1;
        }

        // Month rollover. Leap-year February rolls past the table value
        // plus one (the table keeps 28); every other month rolls past the
        // table value itself. The three-way split must stay exactly as
        // written: folding it changes the observable rollover dates.
        let month_days = DAYS_IN_MONTH[(time.month - 1) as usize];
        let rolled = (time.is_leap_year && time.month == FEBRUARY && time.day > month_days + 1)
            || (time.is_leap_year && time.month != FEBRUARY && time.day > month_days)
            || (!time.is_leap_year && time.day > month_days);

        if rolled {
            time.month += 1;
            time.day = 1;

            if time.month > MONTHS_IN_YEAR {
                time.month = 1;

                // Carry the year increment across the two stored bytes
                if time.year_low == u8::MAX {
                    time.year_high += 1;
                }
                time.year_low = time.year_low.wrapping_add(1);

                time.recompute_leap_year();
            }
        }
    }

    // Refreshed whenever the hour changed; idempotent otherwise.
    time.recompute_period();
}
