//! Peer current-time record
//!
//! Full record is 10 bytes:
//! - Byte 0: Year low
//! - Byte 1: Year high
//! - Byte 2: Month (1-12)
//! - Byte 3: Day of month (1-based)
//! - Byte 4: Hours (0-23)
//! - Byte 5: Minutes (0-59)
//! - Byte 6: Seconds (0-59)
//! - Byte 7: Day of week (1 = Monday)
//! - Byte 8: Fractions of a second in 1/256 units (ignored, sub-second
//!   precision is out of scope)
//! - Byte 9: Adjust reason (ignored)
//!
//! Only the first 8 bytes are required; a peer that truncates the trailing
//! bytes still produces a valid record.

use peerclock_core::{CalendarTime, ClockError, ClockResult};

/// Mandatory portion of the record in bytes
pub const MIN_RECORD_SIZE: usize = 8;

/// Full record size as sent by a peer
pub const RECORD_SIZE: usize = 10;

/// Decoded peer current-time record
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CurrentTimeRecord {
    /// Full 16-bit year
    pub year: u16,
    /// Month, 1-12
    pub month: u8,
    /// Day of the month, 1-based
    pub day: u8,
    /// Hours, 0-23
    pub hours: u8,
    /// Minutes, 0-59
    pub minutes: u8,
    /// Seconds, 0-59
    pub seconds: u8,
    /// Day of the week, 1 = Monday
    pub day_of_week: u8,
}

impl CurrentTimeRecord {
    /// Parse a record from bytes.
    /// Anything past the mandatory fields is ignored, so both truncated
    /// (8-byte) and full (10-byte) peer records parse identically.
    pub fn parse(buf: &[u8]) -> ClockResult<Self> {
        if buf.len() < MIN_RECORD_SIZE {
            return Err(ClockError::RecordTooShort {
                expected: MIN_RECORD_SIZE,
                actual: buf.len(),
            });
        }

        // Bytes 0-1: Year (LE)
        let year = u16::from_le_bytes([buf[0], buf[1]]);

        Ok(CurrentTimeRecord {
            year,
            month: buf[2],
            day: buf[3],
            hours: buf[4],
            minutes: buf[5],
            seconds: buf[6],
            day_of_week: buf[7],
        })
    }

    /// Serialize the record; the trailing fractions and adjust-reason
    /// bytes are written as zero.
    pub fn serialize(&self, buf: &mut [u8]) -> ClockResult<()> {
        if buf.len() < RECORD_SIZE {
            return Err(ClockError::RecordTooShort {
                expected: RECORD_SIZE,
                actual: buf.len(),
            });
        }

        // Bytes 0-1: Year (LE)
        buf[0..2].copy_from_slice(&self.year.to_le_bytes());

        buf[2] = self.month;
        buf[3] = self.day;
        buf[4] = self.hours;
        buf[5] = self.minutes;
        buf[6] = self.seconds;
        buf[7] = self.day_of_week;

        // Bytes 8-9: Fractions + adjust reason
        buf[8] = 0;
        buf[9] = 0;

        Ok(())
    }

    /// Serialize to a new Vec
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0u8; RECORD_SIZE];
        self.serialize(&mut buf).unwrap();
        buf
    }

    /// Build a record from the current calendar state
    pub fn from_calendar(time: &CalendarTime) -> Self {
        CurrentTimeRecord {
            year: time.year(),
            month: time.month,
            day: time.day,
            hours: time.hours,
            minutes: time.minutes,
            seconds: time.seconds,
            day_of_week: time.day_of_week,
        }
    }

    /// Overwrite a calendar record with this record's fields.
    /// The derived flags are refreshed immediately so rollovers behave
    /// correctly from the very next tick, not from the next year/hour
    /// boundary.
    pub fn apply_to(&self, time: &mut CalendarTime) {
        time.set_year(self.year);
        time.month = self.month;
        time.day = self.day;
        time.hours = self.hours;
        time.minutes = self.minutes;
        time.seconds = self.seconds;
        time.day_of_week = self.day_of_week;
        time.recompute_leap_year();
        time.recompute_period();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CurrentTimeRecord {
        CurrentTimeRecord {
            year: 2025,
            month: 6,
            day: 15,
            hours: 10,
            minutes: 30,
            seconds: 0,
            day_of_week: 1,
        }
    }

    #[test]
    fn test_record_roundtrip() {
        let record = sample();

        let bytes = record.to_bytes();
        assert_eq!(bytes.len(), RECORD_SIZE);

        let parsed = CurrentTimeRecord::parse(&bytes).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_record_too_short() {
        let buf = [0u8; 3];
        let result = CurrentTimeRecord::parse(&buf);
        assert!(matches!(
            result,
            Err(ClockError::RecordTooShort {
                expected: MIN_RECORD_SIZE,
                actual: 3,
            })
        ));
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut bytes = sample().to_bytes();
        // Adjust reason set by the peer must not affect the parsed record
        bytes[8] = 0x80;
        bytes[9] = 0x04;
        assert_eq!(CurrentTimeRecord::parse(&bytes).unwrap(), sample());

        // Truncated record without the trailing bytes parses the same
        assert_eq!(
            CurrentTimeRecord::parse(&bytes[..MIN_RECORD_SIZE]).unwrap(),
            sample()
        );
    }

    #[test]
    fn test_apply_to_refreshes_flags() {
        let mut time = CalendarTime::default();
        let mut record = sample();
        record.year = 2024;
        record.month = 2;
        record.day = 29;
        record.hours = 13;

        record.apply_to(&mut time);

        assert_eq!(time.year(), 2024);
        assert_eq!((time.month, time.day), (2, 29));
        assert!(time.is_leap_year);
        assert!(time.is_pm);
    }

    #[test]
    fn test_calendar_roundtrip() {
        let mut time = CalendarTime::default();
        sample().apply_to(&mut time);
        assert_eq!(CurrentTimeRecord::from_calendar(&time), sample());
    }

    #[test]
    fn test_serialize_buffer_too_small() {
        let mut buf = [0u8; RECORD_SIZE - 1];
        assert!(matches!(
            sample().serialize(&mut buf),
            Err(ClockError::RecordTooShort { .. })
        ));
    }
}
