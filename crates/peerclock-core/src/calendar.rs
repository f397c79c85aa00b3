//! Wall-clock calendar state
//!
//! `CalendarTime` is the single mutable record of the system. Between peer
//! syncs it is advanced one second at a time by the tick engine; a sync
//! overwrites it wholesale. The derived flags (`is_leap_year`, `is_pm`) are
//! recomputed on the rollover that changes them, not on every read.

/// Months in a year
pub const MONTHS_IN_YEAR: u8 = 12;

/// Days in a week
pub const DAYS_IN_WEEK: u8 = 7;

/// February, in 1-based month numbering
pub const FEBRUARY: u8 = 2;

/// Hours below this value are AM
pub const HALF_OF_DAY: u8 = 12;

/// Days in each month, indexed by `month - 1`.
/// February stores 28 even in leap years; the tick engine adds the leap day
/// at the rollover comparison instead of keeping a second table.
pub const DAYS_IN_MONTH: [u8; MONTHS_IN_YEAR as usize] =
    [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day names, indexed by `day_of_week - 1` (1 = Monday)
pub const DAY_NAMES: [&str; DAYS_IN_WEEK as usize] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Standard Gregorian leap-year rule
#[inline]
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Wall-clock date and time plus derived status flags
///
/// The year is stored as two bytes so the record mirrors the peer wire
/// layout byte for byte; use [`year`](CalendarTime::year) and
/// [`set_year`](CalendarTime::set_year) for the combined 16-bit value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CalendarTime {
    /// Seconds, 0-59
    pub seconds: u8,
    /// Minutes, 0-59
    pub minutes: u8,
    /// Hours, 0-23
    pub hours: u8,
    /// Day of the month, 1-based
    pub day: u8,
    /// Month, 1-12
    pub month: u8,
    /// Low byte of the year
    pub year_low: u8,
    /// High byte of the year
    pub year_high: u8,
    /// Day of the week, 1 = Monday .. 7 = Sunday
    pub day_of_week: u8,
    /// Whether the current year is a leap year
    pub is_leap_year: bool,
    /// Whether the current hour is in 12:00-23:59
    pub is_pm: bool,
}

impl CalendarTime {
    /// Defined pre-sync baseline: midnight, Saturday, January 1st 2000.
    /// The clock ticks forward correctly from here even if a sync never
    /// arrives; only absolute correctness needs a successful sync.
    pub fn baseline() -> Self {
        let mut time = CalendarTime {
            day: 1,
            month: 1,
            day_of_week: 6,
            ..CalendarTime::default()
        };
        time.set_year(2000);
        time.recompute_leap_year();
        time.recompute_period();
        time
    }

    /// Full 16-bit year
    #[inline]
    pub fn year(&self) -> u16 {
        ((self.year_high as u16) << 8) | self.year_low as u16
    }

    /// Split a 16-bit year into the two stored bytes
    #[inline]
    pub fn set_year(&mut self, year: u16) {
        self.year_low = (year & 0xFF) as u8;
        self.year_high = (year >> 8) as u8;
    }

    /// Recompute the leap-year flag for the current year
    #[inline]
    pub fn recompute_leap_year(&mut self) {
        self.is_leap_year = is_leap_year(self.year());
    }

    /// Recompute the AM/PM flag for the current hour
    #[inline]
    pub fn recompute_period(&mut self) {
        self.is_pm = self.hours >= HALF_OF_DAY;
    }

    /// Name of the current day of the week.
    /// An out-of-range `day_of_week` (the zeroed pre-sync record) falls back
    /// to the first entry rather than panicking in the display path.
    pub fn day_name(&self) -> &'static str {
        let idx = self.day_of_week.wrapping_sub(1) as usize;
        DAY_NAMES.get(idx).copied().unwrap_or(DAY_NAMES[0])
    }
}
