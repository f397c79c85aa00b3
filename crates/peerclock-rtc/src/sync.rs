//! Peer time sync
//!
//! A sync replaces the whole calendar record with the peer's view of the
//! current time. The overwrite happens in one lock scope so a concurrently
//! firing tick observes either the old record or the new one, never a mix.

use peerclock_core::ClockResult;
use peerclock_wire::CurrentTimeRecord;

use crate::SharedCalendar;

/// Applies peer-supplied current-time records to the shared clock
#[derive(Clone)]
pub struct SyncReceiver {
    clock: SharedCalendar,
}

impl SyncReceiver {
    pub fn new(clock: SharedCalendar) -> Self {
        SyncReceiver { clock }
    }

    /// Overwrite the local clock from a raw current-time record.
    ///
    /// The record is parsed before the lock is taken: a malformed buffer
    /// is rejected with the calendar left untouched, and the caller can
    /// simply retry on the next sync opportunity. On success the derived
    /// flags are refreshed as part of the same overwrite.
    pub fn apply_external_time(&self, buf: &[u8]) -> ClockResult<()> {
        let record = CurrentTimeRecord::parse(buf)?;

        {
            let mut time = self.clock.lock();
            record.apply_to(&mut time);
        }

        tracing::debug!(
            year = record.year,
            month = record.month,
            day = record.day,
            hours = record.hours,
            minutes = record.minutes,
            seconds = record.seconds,
            "applied peer time"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use peerclock_core::ClockError;

    use super::*;
    use crate::TickEngine;

    #[test]
    fn test_sync_overwrites_clock() {
        let clock = SharedCalendar::new();
        let receiver = SyncReceiver::new(clock.clone());

        let record = CurrentTimeRecord {
            year: 2025,
            month: 6,
            day: 15,
            hours: 10,
            minutes: 30,
            seconds: 0,
            day_of_week: 1,
        };
        receiver.apply_external_time(&record.to_bytes()).unwrap();

        let time = clock.snapshot();
        assert_eq!(time.year(), 2025);
        assert_eq!((time.month, time.day), (6, 15));
        assert_eq!((time.hours, time.minutes, time.seconds), (10, 30, 0));
        assert_eq!(time.day_of_week, 1);
        assert!(!time.is_leap_year);
        assert!(!time.is_pm);
    }

    #[test]
    fn test_sync_then_tick() {
        let clock = SharedCalendar::new();
        let receiver = SyncReceiver::new(clock.clone());
        let engine = TickEngine::new(clock.clone());

        let record = CurrentTimeRecord {
            year: 2025,
            month: 6,
            day: 15,
            hours: 10,
            minutes: 30,
            seconds: 0,
            day_of_week: 1,
        };
        receiver.apply_external_time(&record.to_bytes()).unwrap();
        engine.on_second_elapsed();

        let time = clock.snapshot();
        assert_eq!((time.hours, time.minutes, time.seconds), (10, 30, 1));
        assert_eq!(time.day_name(), "Monday");
    }

    #[test]
    fn test_malformed_record_leaves_clock_unchanged() {
        let clock = SharedCalendar::new();
        let receiver = SyncReceiver::new(clock.clone());
        let before = clock.snapshot();

        let result = receiver.apply_external_time(&[1, 2, 3]);

        assert!(matches!(
            result,
            Err(ClockError::RecordTooShort { actual: 3, .. })
        ));
        assert_eq!(clock.snapshot(), before);
    }

    #[test]
    fn test_sync_into_leap_year_enables_feb_29() {
        let clock = SharedCalendar::new();
        let receiver = SyncReceiver::new(clock.clone());
        let engine = TickEngine::new(clock.clone());

        // One second before the leap-day boundary
        let record = CurrentTimeRecord {
            year: 2024,
            month: 2,
            day: 28,
            hours: 23,
            minutes: 59,
            seconds: 59,
            day_of_week: 3,
        };
        receiver.apply_external_time(&record.to_bytes()).unwrap();
        engine.on_second_elapsed();

        // The leap flag was refreshed by the sync, not deferred to the
        // next year rollover, so February keeps its 29th day.
        let time = clock.snapshot();
        assert_eq!((time.month, time.day), (2, 29));
    }
}
