//! Calendar systems and their field math.
//!
//! The adapter only knows two calendar systems. Gregorian field math runs on
//! the crate's own ISO records, while solar Hijri field math is delegated to
//! `icu_calendar`'s `Persian` calendar; `Instant`s always cross this module
//! as `IsoDate`s.

use core::fmt;

use icu_calendar::{cal::Persian, Date, Iso};

use crate::iso::{self, IsoDate};

/// The calendar system whose fields an operation reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarSystem {
    /// The solar Hijri (Jalali, Persian) calendar.
    SolarHijri,
    /// The proleptic Gregorian calendar.
    Gregorian,
}

impl CalendarSystem {
    /// Converts calendar fields in this system to an ISO date.
    ///
    /// Returns `None` when the fields do not name an existing day; no field
    /// is ever rolled over into the next unit.
    pub(crate) fn fields_to_iso(self, fields: CalendarFields) -> Option<IsoDate> {
        match self {
            Self::Gregorian => IsoDate::try_new(
                fields.year,
                i32::from(fields.month) + 1,
                i32::from(fields.day),
            ),
            Self::SolarHijri => {
                let date =
                    Date::try_new_persian(fields.year, fields.month.checked_add(1)?, fields.day)
                        .ok()?
                        .to_calendar(Iso);
                Some(IsoDate::new_unchecked(
                    date.year().extended_year(),
                    date.month().ordinal,
                    date.day_of_month().0,
                ))
            }
        }
    }

    /// Reads this system's calendar fields from an ISO date.
    ///
    /// Returns `None` for solar Hijri fields of dates outside the range
    /// `icu_calendar` supports.
    pub(crate) fn iso_to_fields(self, iso: IsoDate) -> Option<CalendarFields> {
        match self {
            Self::Gregorian => Some(CalendarFields::new(iso.year, iso.month - 1, iso.day)),
            Self::SolarHijri => {
                let date = Date::try_new_iso(iso.year, iso.month, iso.day)
                    .ok()?
                    .to_calendar(Persian);
                Some(CalendarFields::new(
                    date.year().extended_year(),
                    date.month().ordinal - 1,
                    date.day_of_month().0,
                ))
            }
        }
    }

    /// Returns the number of days in the given zero-based month.
    pub(crate) fn days_in_month(self, year: i32, month: u8) -> Option<u8> {
        if month > 11 {
            return None;
        }
        match self {
            Self::Gregorian => Some(iso::iso_days_in_month(year, i32::from(month) + 1) as u8),
            Self::SolarHijri => Date::try_new_persian(year, month + 1, 1)
                .ok()
                .map(|date| date.days_in_month()),
        }
    }

    /// Adds `amount` of `unit` to `iso` under this calendar system.
    ///
    /// Year and month arithmetic keeps the day of month, clamped to the
    /// length of the resulting month. Day arithmetic is identical in both
    /// systems.
    pub(crate) fn add_to_iso(
        self,
        iso: IsoDate,
        amount: i64,
        unit: CalendarUnit,
    ) -> Option<IsoDate> {
        match unit {
            CalendarUnit::Day => {
                let days = iso.to_epoch_days().checked_add(amount)?;
                if days.abs() > iso::MAX_EPOCH_DAYS {
                    return None;
                }
                Some(IsoDate::from_epoch_days(days))
            }
            CalendarUnit::Month | CalendarUnit::Year => {
                let months = if unit == CalendarUnit::Year {
                    amount.checked_mul(12)?
                } else {
                    amount
                };
                let fields = self.iso_to_fields(iso)?;
                let total = i64::from(fields.year)
                    .checked_mul(12)?
                    .checked_add(i64::from(fields.month))?
                    .checked_add(months)?;
                let year = i32::try_from(total.div_euclid(12)).ok()?;
                let month = total.rem_euclid(12) as u8;
                let day = fields.day.min(self.days_in_month(year, month)?);
                self.fields_to_iso(CalendarFields::new(year, month, day))
            }
        }
    }
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SolarHijri => "persian",
            Self::Gregorian => "gregory",
        })
    }
}

/// The calendar units the adapter can add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarUnit {
    Year,
    Month,
    Day,
}

/// A year, zero-based month and day under some calendar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarFields {
    pub year: i32,
    /// Zero-based month index, `0..=11` in both calendar systems.
    pub month: u8,
    /// One-based day of month.
    pub day: u8,
}

impl CalendarFields {
    /// Creates a new set of calendar fields.
    #[inline]
    #[must_use]
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nowruz_1403_is_march_20th() {
        let iso = CalendarSystem::SolarHijri
            .fields_to_iso(CalendarFields::new(1403, 0, 1))
            .unwrap();
        assert_eq!(iso, IsoDate::new_unchecked(2024, 3, 20));
        assert_eq!(
            CalendarSystem::SolarHijri.iso_to_fields(iso),
            Some(CalendarFields::new(1403, 0, 1))
        );
    }

    #[test]
    fn fields_round_trip() {
        for system in [CalendarSystem::SolarHijri, CalendarSystem::Gregorian] {
            for (year, month, day) in [(1397, 0, 1), (1402, 11, 29), (1403, 11, 30), (2017, 5, 15)]
            {
                let fields = CalendarFields::new(year, month, day);
                let Some(iso) = system.fields_to_iso(fields) else {
                    continue;
                };
                assert_eq!(system.iso_to_fields(iso), Some(fields), "{system} {fields:?}");
            }
        }
    }

    #[test]
    fn solar_hijri_month_lengths() {
        let system = CalendarSystem::SolarHijri;
        assert_eq!(system.days_in_month(1402, 0), Some(31));
        assert_eq!(system.days_in_month(1402, 6), Some(30));
        assert_eq!(system.days_in_month(1402, 11), Some(29));
        assert_eq!(system.days_in_month(1403, 11), Some(30));
        assert_eq!(system.days_in_month(1403, 12), None);
        assert!(system.fields_to_iso(CalendarFields::new(1402, 6, 31)).is_none());
        assert!(system.fields_to_iso(CalendarFields::new(1402, 11, 30)).is_none());
    }

    #[test]
    fn month_arithmetic_clamps_day() {
        let gregorian = CalendarSystem::Gregorian;
        let jan_31 = IsoDate::new_unchecked(2024, 1, 31);
        assert_eq!(
            gregorian.add_to_iso(jan_31, 1, CalendarUnit::Month),
            Some(IsoDate::new_unchecked(2024, 2, 29))
        );
        assert_eq!(
            gregorian.add_to_iso(jan_31, -2, CalendarUnit::Month),
            Some(IsoDate::new_unchecked(2023, 11, 30))
        );

        // 31 Shahrivar 1402 + 1 solar Hijri month is 30 Mehr 1402.
        let hijri = CalendarSystem::SolarHijri;
        let shahrivar_31 = hijri
            .fields_to_iso(CalendarFields::new(1402, 5, 31))
            .unwrap();
        let added = hijri.add_to_iso(shahrivar_31, 1, CalendarUnit::Month).unwrap();
        assert_eq!(hijri.iso_to_fields(added), Some(CalendarFields::new(1402, 6, 30)));
    }

    #[test]
    fn leap_day_year_arithmetic() {
        let hijri = CalendarSystem::SolarHijri;
        let esfand_30 = hijri
            .fields_to_iso(CalendarFields::new(1403, 11, 30))
            .unwrap();
        let added = hijri.add_to_iso(esfand_30, 1, CalendarUnit::Year).unwrap();
        assert_eq!(hijri.iso_to_fields(added), Some(CalendarFields::new(1404, 11, 29)));

        let gregorian = CalendarSystem::Gregorian;
        assert_eq!(
            gregorian.add_to_iso(IsoDate::new_unchecked(2024, 2, 29), -1, CalendarUnit::Year),
            Some(IsoDate::new_unchecked(2023, 2, 28))
        );
    }

    #[test]
    fn day_arithmetic_is_system_independent() {
        let iso = IsoDate::new_unchecked(2024, 3, 19);
        for system in [CalendarSystem::SolarHijri, CalendarSystem::Gregorian] {
            assert_eq!(
                system.add_to_iso(iso, 1, CalendarUnit::Day),
                Some(IsoDate::new_unchecked(2024, 3, 20))
            );
        }
    }
}
