//! This module implements the internal ISO field records.
//!
//! The three record types are:
//!   - `IsoDateTime`
//!   - `IsoDate`
//!   - `IsoTime`
//!
//! An `IsoDate` is a proleptic Gregorian year, 1-based month and day. An
//! `IsoTime` is a wall-clock time of day with millisecond precision, and an
//! `IsoDateTime` is both together.
//!
//! Every `Instant` is converted to and from these records before any
//! calendar-system specific math runs. The epoch day equations follow
//! Neri-Schneider, shifted by whole 400 year cycles so that every
//! intermediate value stays non-negative.

use crate::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

/// The maximum distance in days from the Unix epoch an `Instant` may have.
pub(crate) const MAX_EPOCH_DAYS: i64 = 100_000_000;

const EPOCH_COMPUTATIONAL_RATA_DIE: i64 = 719_468;
const DAYS_IN_A_400Y_CYCLE: i64 = 146_097;
// 400_000 years; keeps `MAX_EPOCH_DAYS` on both sides of the epoch positive.
const SHIFT_CYCLES: i64 = 1_000;

// ==== `IsoDateTime` section ====

/// `IsoDateTime` is the record of an `IsoDate` and an `IsoTime`.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub time: IsoTime,
}

impl IsoDateTime {
    /// Creates a new `IsoDateTime` without any validation.
    pub(crate) const fn new_unchecked(date: IsoDate, time: IsoTime) -> Self {
        Self { date, time }
    }

    /// Splits a wall-clock millisecond count into its date and time records.
    pub(crate) fn from_wall_milliseconds(wall_ms: i64) -> Self {
        let days = wall_ms.div_euclid(i64::from(MS_PER_DAY));
        let ms_of_day = wall_ms.rem_euclid(i64::from(MS_PER_DAY));
        Self::new_unchecked(
            IsoDate::from_epoch_days(days),
            IsoTime::from_milliseconds_of_day(ms_of_day),
        )
    }

    /// Returns the wall-clock millisecond count of this record.
    pub(crate) fn to_wall_milliseconds(self) -> i64 {
        self.date.to_epoch_days() * i64::from(MS_PER_DAY) + self.time.to_milliseconds_of_day()
    }
}

// ==== `IsoDate` section ====

/// A proleptic Gregorian date with a 1-based month.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new `IsoDate`, returning `None` when the fields do not
    /// name a real day.
    pub(crate) fn try_new(year: i32, month: i32, day: i32) -> Option<Self> {
        if !is_valid_date(year, month, day) {
            return None;
        }
        // NOTE: Values have been verified to be in a u8 range.
        Some(Self::new_unchecked(year, month as u8, day as u8))
    }

    /// Returns the number of days since 1970-01-01.
    #[inline]
    pub(crate) fn to_epoch_days(self) -> i64 {
        iso_date_to_epoch_days(self.year, i32::from(self.month), i32::from(self.day))
    }

    /// Creates the `IsoDate` that is `days` away from 1970-01-01.
    pub(crate) fn from_epoch_days(days: i64) -> Self {
        let (year, month, day) = epoch_days_to_iso_date(days);
        Self::new_unchecked(year, month, day)
    }

    /// Returns the day of the week, 0 for Sunday through 6 for Saturday.
    #[inline]
    pub(crate) fn day_of_week(self) -> u8 {
        // 1970-01-01 was a Thursday.
        (self.to_epoch_days() + 4).rem_euclid(7) as u8
    }
}

// ==== `IsoTime` section ====

/// A wall-clock time of day.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoTime {
    pub hour: u8,         // 0..=23
    pub minute: u8,       // 0..=59
    pub second: u8,       // 0..=59
    pub millisecond: u16, // 0..=999
}

impl IsoTime {
    /// Creates a new `IsoTime` without any validation.
    pub(crate) const fn new_unchecked(hour: u8, minute: u8, second: u8, millisecond: u16) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Creates a new `IsoTime`, returning `None` if any field is out of range.
    pub(crate) fn try_new(hour: i32, minute: i32, second: i32, millisecond: i32) -> Option<Self> {
        if !is_valid_time(hour, minute, second, millisecond) {
            return None;
        }
        Some(Self::new_unchecked(
            hour as u8,
            minute as u8,
            second as u8,
            millisecond as u16,
        ))
    }

    /// Midnight.
    pub(crate) const fn start_of_day() -> Self {
        Self::new_unchecked(0, 0, 0, 0)
    }

    fn from_milliseconds_of_day(ms: i64) -> Self {
        debug_assert!((0..i64::from(MS_PER_DAY)).contains(&ms));
        Self::new_unchecked(
            (ms / MS_PER_HOUR) as u8,
            ((ms / MS_PER_MINUTE) % 60) as u8,
            ((ms / MS_PER_SECOND) % 60) as u8,
            (ms % MS_PER_SECOND) as u16,
        )
    }

    fn to_milliseconds_of_day(self) -> i64 {
        i64::from(self.hour) * MS_PER_HOUR
            + i64::from(self.minute) * MS_PER_MINUTE
            + i64::from(self.second) * MS_PER_SECOND
            + i64::from(self.millisecond)
    }
}

// ==== Epoch day equations ====

/// Calculates the days since 1970-01-01 for a proleptic Gregorian date.
///
/// The month is expected to be 1-based; the day is not validated.
pub(crate) fn iso_date_to_epoch_days(year: i32, month: i32, day: i32) -> i64 {
    // March based computational calendar.
    let j = i64::from(month <= 2);
    let comp_year = i64::from(year) - j + SHIFT_CYCLES * 400;
    let comp_month = i64::from(month) + 12 * j;
    let comp_day = i64::from(day) - 1;
    let century = comp_year / 100;

    let y_star = 1461 * comp_year / 4 - century + century / 4;
    let m_star = (979 * comp_month - 2919) / 32;
    y_star + m_star + comp_day - EPOCH_COMPUTATIONAL_RATA_DIE - SHIFT_CYCLES * DAYS_IN_A_400Y_CYCLE
}

/// Calculates the proleptic Gregorian date for a day count since 1970-01-01.
pub(crate) fn epoch_days_to_iso_date(days: i64) -> (i32, u8, u8) {
    let rata_die = days + EPOCH_COMPUTATIONAL_RATA_DIE + SHIFT_CYCLES * DAYS_IN_A_400Y_CYCLE;
    debug_assert!(rata_die >= 0);

    // Century and day of century.
    let n_one = 4 * rata_die + 3;
    let century = n_one / DAYS_IN_A_400Y_CYCLE;
    let day_of_century = (n_one % DAYS_IN_A_400Y_CYCLE) / 4;

    // Year of century and day of the computational year.
    let n_two = 4 * day_of_century + 3;
    let year_of_century = n_two / 1461;
    let day_of_year = (n_two % 1461) / 4;

    // Month and day, where month runs 3..=14.
    let n_three = 5 * day_of_year + 461;
    let comp_month = n_three / 153;
    let day = (n_three % 153) / 5 + 1;

    let j = i64::from(comp_month > 12);
    let year = 100 * century + year_of_century + j - SHIFT_CYCLES * 400;
    let month = comp_month - 12 * j;
    (year as i32, month as u8, day as u8)
}

#[inline]
pub(crate) fn iso_is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[inline]
pub(crate) fn iso_days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + i32::from(iso_is_leap_year(year)),
        _ => 0,
    }
}

#[inline]
fn is_valid_date(year: i32, month: i32, day: i32) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }
    (1..=iso_days_in_month(year, month)).contains(&day)
}

#[inline]
fn is_valid_time(hour: i32, minute: i32, second: i32, ms: i32) -> bool {
    (0..=23).contains(&hour)
        && (0..=59).contains(&minute)
        && (0..=59).contains(&second)
        && (0..=999).contains(&ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_days_round_trip() {
        let cases = [
            ((1970, 1, 1), 0),
            ((1969, 12, 31), -1),
            ((2000, 2, 29), 11_016),
            ((2024, 3, 20), 19_802),
            ((1600, 3, 1), -135_080),
        ];
        for ((y, m, d), days) in cases {
            assert_eq!(iso_date_to_epoch_days(y, m, d), days, "{y}-{m}-{d}");
            assert_eq!(
                epoch_days_to_iso_date(days),
                (y, m as u8, d as u8),
                "{days}"
            );
        }
    }

    #[test]
    fn epoch_day_limits_are_representable() {
        let max = IsoDate::from_epoch_days(MAX_EPOCH_DAYS);
        assert_eq!(max, IsoDate::new_unchecked(275_760, 9, 13));
        assert_eq!(max.to_epoch_days(), MAX_EPOCH_DAYS);

        let min = IsoDate::from_epoch_days(-MAX_EPOCH_DAYS);
        assert_eq!(min, IsoDate::new_unchecked(-271_821, 4, 20));
        assert_eq!(min.to_epoch_days(), -MAX_EPOCH_DAYS);
    }

    #[test]
    fn day_of_week_is_sunday_based() {
        // 2024-03-20 was a Wednesday.
        assert_eq!(IsoDate::new_unchecked(2024, 3, 20).day_of_week(), 3);
        assert_eq!(IsoDate::new_unchecked(2024, 3, 24).day_of_week(), 0);
    }

    #[test]
    fn wall_milliseconds_split() {
        let dt = IsoDateTime::from_wall_milliseconds(-1);
        assert_eq!(dt.date, IsoDate::new_unchecked(1969, 12, 31));
        assert_eq!(dt.time, IsoTime::new_unchecked(23, 59, 59, 999));
        assert_eq!(dt.to_wall_milliseconds(), -1);
    }

    #[test]
    fn validity() {
        assert!(IsoDate::try_new(2024, 2, 29).is_some());
        assert!(IsoDate::try_new(2023, 2, 29).is_none());
        assert!(IsoDate::try_new(2023, 13, 1).is_none());
        assert!(IsoTime::try_new(24, 0, 0, 0).is_none());
    }
}
