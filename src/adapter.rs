//! This module implements `DateAdapter`, the dual-calendar date facade.

use alloc::{
    format,
    string::{String, ToString},
};
use core::{any::Any, cmp::Ordering};

use crate::{
    calendar::{CalendarFields, CalendarSystem, CalendarUnit},
    engine::{CalendarEngine, ParseRequest},
    instant::Instant,
    locale::{LocaleContext, LocaleData, LocaleTag, SOLAR_HIJRI_LOCALE},
    options::{AdapterOptions, NameStyle},
    AdapterError, AdapterResult,
};


/// A value handed to the adapter by a date-picker host.
///
/// Hosts pass loosely typed values; only `Null` and the empty string are
/// treated as "no value".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput<'a> {
    Null,
    Str(&'a str),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    Instant(Instant),
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl From<Instant> for DateInput<'_> {
    fn from(value: Instant) -> Self {
        Self::Instant(value)
    }
}

impl<'a, T: Into<DateInput<'a>>> From<Option<T>> for DateInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A date adapter that reads, displays and manipulates `Instant`s under
/// the calendar system selected by its active locale.
///
/// The locale `"fa"` selects the solar Hijri calendar; every other locale
/// selects the Gregorian calendar. Each operation dispatches on the locale
/// active when it is called, so switching the locale with
/// [`DateAdapter::set_locale`] immediately changes how every existing
/// `Instant` is read.
///
/// ```rust
/// use jalali_adapter::{AdapterOptions, DateAdapter, IcuCalendarEngine};
///
/// let adapter = DateAdapter::new(
///     IcuCalendarEngine::new(()),
///     None,
///     AdapterOptions::new().with_utc(true),
/// );
/// let date = adapter.create_date(1403, 11, 30).unwrap();
/// assert_eq!(adapter.format(&date, "jYYYY/jMM/jDD").unwrap(), "۱۴۰۳/۱۲/۳۰");
/// assert_eq!(adapter.to_iso8601(&date), "2025-03-20T00:00:00Z");
/// assert!(adapter.create_date(1402, 11, 30).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct DateAdapter<E: CalendarEngine> {
    engine: E,
    options: AdapterOptions,
    context: LocaleContext,
}

// ==== Locale section ====

impl<E: CalendarEngine> DateAdapter<E> {
    /// Creates a new adapter. Without a locale the adapter starts in the
    /// solar Hijri locale.
    pub fn new(engine: E, locale: Option<&str>, options: AdapterOptions) -> Self {
        let tag = LocaleTag::new(locale.unwrap_or(SOLAR_HIJRI_LOCALE));
        let context = LocaleContext::new(&engine, tag);
        Self {
            engine,
            options,
            context,
        }
    }

    /// Returns the calendar engine.
    #[inline]
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Returns the options the adapter was created with.
    #[inline]
    #[must_use]
    pub fn options(&self) -> AdapterOptions {
        self.options
    }

    /// Sets the active locale and rebuilds the locale display data.
    pub fn set_locale(&mut self, locale: &str) {
        self.context.set(&self.engine, LocaleTag::new(locale));
    }

    /// Returns the active locale tag.
    #[inline]
    #[must_use]
    pub fn locale(&self) -> &LocaleTag {
        self.context.tag()
    }

    /// Returns the calendar system the active locale selects.
    #[inline]
    #[must_use]
    pub fn active_calendar_system(&self) -> CalendarSystem {
        self.context.calendar_system()
    }

    /// Returns the display data derived for the active locale.
    #[inline]
    #[must_use]
    pub fn locale_data(&self) -> &LocaleData {
        self.context.data()
    }

    /// Returns the twelve month names of the active calendar system.
    pub fn get_month_names(&self, style: NameStyle) -> &[String] {
        self.locale_data().month_names(style)
    }

    /// Returns the labels of days 1 through 31 in the locale's digits.
    pub fn get_date_names(&self) -> &[String] {
        self.locale_data().date_names()
    }

    /// Returns the weekday names, Sunday first.
    pub fn get_day_of_week_names(&self, style: NameStyle) -> &[String] {
        self.locale_data().day_of_week_names(style)
    }

    /// Returns the first day of the week, 0 for Sunday.
    pub fn get_first_day_of_week(&self) -> u8 {
        self.locale_data().first_day_of_week()
    }

    fn localized(&self, date: &Instant) -> Instant {
        date.clone().with_locale(self.locale().clone())
    }

    fn parse_request(&self, system: CalendarSystem, strict: bool) -> ParseRequest<'_> {
        ParseRequest {
            locale: self.locale(),
            system,
            strict,
            basis: self.options.time_basis(),
        }
    }
}

// ==== Field accessor section ====

impl<E: CalendarEngine> DateAdapter<E> {
    fn fields(&self, date: &Instant) -> Option<CalendarFields> {
        let system = self.active_calendar_system();
        self.engine.instant_to_fields(&self.localized(date), system)
    }

    /// Returns the year under the active calendar system.
    pub fn get_year(&self, date: &Instant) -> Option<i32> {
        self.fields(date).map(|fields| fields.year)
    }

    /// Returns the zero-based month under the active calendar system.
    pub fn get_month(&self, date: &Instant) -> Option<u8> {
        self.fields(date).map(|fields| fields.month)
    }

    /// Returns the day of month under the active calendar system.
    pub fn get_date(&self, date: &Instant) -> Option<u8> {
        self.fields(date).map(|fields| fields.day)
    }

    /// Returns the day of the week, 0 for Sunday, which is the same in both
    /// calendar systems.
    pub fn get_day_of_week(&self, date: &Instant) -> Option<u8> {
        self.engine.day_of_week(&self.localized(date))
    }

    /// Returns the year under the active calendar system as an unpadded
    /// ASCII string.
    pub fn get_year_name(&self, date: &Instant) -> Option<String> {
        self.get_year(date).map(|year| year.to_string())
    }

    /// Returns the length of the month `date` falls in.
    pub fn get_num_days_in_month(&self, date: &Instant) -> Option<u8> {
        let system = self.active_calendar_system();
        self.engine.days_in_month(&self.localized(date), system)
    }
}

// ==== Construction and arithmetic section ====

impl<E: CalendarEngine> DateAdapter<E> {
    /// Returns a copy of `date` carrying the active locale.
    pub fn clone_date(&self, date: &Instant) -> Instant {
        self.localized(date)
    }

    /// Creates the start of the day `year`, `month`, `day` under the active
    /// calendar system. `month` is zero-based.
    ///
    /// Fails with `InvalidArgument` for a month outside `0..=11` or a day
    /// below 1, and with `InvalidDate` when the day does not exist in that
    /// month.
    pub fn create_date(&self, year: i32, month: i32, day: i32) -> AdapterResult<Instant> {
        if !(0..=11).contains(&month) {
            return Err(AdapterError::invalid_argument().with_message(format!(
                "Invalid month index \"{month}\". Month index has to be between 0 and 11."
            )));
        }
        if day < 1 {
            return Err(AdapterError::invalid_argument().with_message(format!(
                "Invalid date \"{day}\". Date has to be greater than 0."
            )));
        }

        let system = self.active_calendar_system();
        let tag = match system {
            CalendarSystem::SolarHijri => LocaleTag::solar_hijri(),
            CalendarSystem::Gregorian => self.locale().clone(),
        };
        let basis = self.options.time_basis();
        let created = u8::try_from(day).ok().and_then(|day| {
            let fields = CalendarFields::new(year, month as u8, day);
            let instant = self.engine.fields_to_instant(fields, system, basis, &tag);
            // Engines may roll an overflowing day into the next month.
            (self.engine.is_valid(&instant)
                && self.engine.instant_to_fields(&instant, system) == Some(fields))
            .then_some(instant)
        });

        created.ok_or_else(|| {
            AdapterError::invalid_date().with_message(format!(
                "Invalid date \"{day}\" for month with index \"{month}\"."
            ))
        })
    }

    /// Returns the current `Instant` in the configured time basis.
    pub fn today(&self) -> AdapterResult<Instant> {
        self.engine.now(self.options.time_basis(), self.locale())
    }

    fn add(&self, date: &Instant, amount: i64, unit: CalendarUnit) -> Instant {
        let system = self.active_calendar_system();
        self.engine.add_units(&self.localized(date), amount, unit, system)
    }

    /// Adds calendar years, clamping the day to the end of the month.
    pub fn add_calendar_years(&self, date: &Instant, years: i64) -> Instant {
        self.add(date, years, CalendarUnit::Year)
    }

    /// Adds calendar months, clamping the day to the end of the month.
    pub fn add_calendar_months(&self, date: &Instant, months: i64) -> Instant {
        self.add(date, months, CalendarUnit::Month)
    }

    /// Adds days, keeping the wall-clock time.
    pub fn add_calendar_days(&self, date: &Instant, days: i64) -> Instant {
        self.add(date, days, CalendarUnit::Day)
    }
}

// ==== Parsing, formatting and serialization section ====

impl<E: CalendarEngine> DateAdapter<E> {
    /// Parses `value` with `format`, or with the ISO 8601 formats when
    /// `format` is empty.
    ///
    /// Returns `None` for `Null` and the empty string. Unparsable strings
    /// return an invalid `Instant` rather than an error.
    pub fn parse(&self, value: DateInput<'_>, format: &str) -> Option<Instant> {
        match value {
            DateInput::Str(input) if !input.is_empty() => {
                let system = self.active_calendar_system();
                let request = self.parse_request(system, self.options.strict);
                let formats: &[&str] = if format.is_empty() { &[] } else { &[format] };
                Some(self.engine.parse(input, formats, &request))
            }
            DateInput::Null | DateInput::Str(_) => None,
            DateInput::Timestamp(epoch_ms) => Some(self.engine.from_epoch_milliseconds(
                epoch_ms,
                self.options.time_basis(),
                self.locale(),
            )),
            DateInput::Instant(instant) => Some(self.localized(&instant)),
        }
    }

    /// Renders `date` with a moment-style `display_format`.
    pub fn format(&self, date: &Instant, display_format: &str) -> AdapterResult<String> {
        let date = self.localized(date);
        if !self.engine.is_valid(&date) {
            return Err(AdapterError::format().with_message("Cannot format invalid date."));
        }
        self.engine
            .format(&date, display_format, self.active_calendar_system())
    }

    /// Renders `date` in ISO 8601. The result is always on the Gregorian
    /// calendar, whatever the active locale.
    pub fn to_iso8601(&self, date: &Instant) -> String {
        self.engine.to_iso_string(&self.localized(date))
    }

    /// Reads a timestamp or an ISO 8601 string.
    ///
    /// `Null` and the empty string are `None`. Strings are read forgivingly
    /// under the solar Hijri locale. Values that do not produce a valid
    /// `Instant` fall back to [`DateAdapter::deserialize_base`].
    pub fn deserialize(&self, value: DateInput<'_>) -> Option<Instant> {
        let read = match &value {
            DateInput::Null | DateInput::Str("") => return None,
            DateInput::Timestamp(epoch_ms) => Some(self.engine.from_epoch_milliseconds(
                *epoch_ms,
                self.options.time_basis(),
                self.locale(),
            )),
            DateInput::Str(input) => {
                let strict = match self.active_calendar_system() {
                    CalendarSystem::SolarHijri => false,
                    CalendarSystem::Gregorian => self.options.strict,
                };
                let request = self.parse_request(CalendarSystem::Gregorian, strict);
                Some(self.engine.parse(input, &[], &request))
            }
            _ => None,
        };
        match read {
            Some(instant) if self.engine.is_valid(&instant) => Some(instant),
            _ => self.deserialize_base(value),
        }
    }

    /// The host framework's default deserialization: `Null` stays `None`,
    /// a valid `Instant` is kept and anything else becomes invalid.
    pub fn deserialize_base(&self, value: DateInput<'_>) -> Option<Instant> {
        match value {
            DateInput::Null => None,
            DateInput::Instant(instant) if self.engine.is_valid(&instant) => {
                Some(self.localized(&instant))
            }
            _ => Some(self.invalid()),
        }
    }

    /// Returns whether `date` names a point in time.
    #[inline]
    pub fn is_valid(&self, date: &Instant) -> bool {
        self.engine.is_valid(date)
    }

    /// Returns an invalid `Instant`.
    #[inline]
    pub fn invalid(&self) -> Instant {
        self.engine.invalid_instant()
    }

    /// Returns whether `value` is an `Instant`.
    #[inline]
    pub fn is_date_instance(&self, value: &dyn Any) -> bool {
        self.engine.is_instance(value)
    }

    /// Returns `value` when it is a valid `Instant`.
    pub fn get_valid_date_or_null(&self, value: DateInput<'_>) -> Option<Instant> {
        match value {
            DateInput::Instant(instant) if self.is_valid(&instant) => Some(instant),
            _ => None,
        }
    }
}

// ==== Comparison section ====

impl<E: CalendarEngine> DateAdapter<E> {
    /// Compares the calendar days of `first` and `second` under the active
    /// calendar system, ignoring the time of day.
    pub fn compare_date(&self, first: &Instant, second: &Instant) -> Option<Ordering> {
        Some(self.fields(first)?.cmp(&self.fields(second)?))
    }

    /// Returns whether both values name the same calendar day. Two invalid
    /// dates are the same; two missing dates are the same.
    pub fn same_date(&self, first: Option<&Instant>, second: Option<&Instant>) -> bool {
        match (first, second) {
            (Some(first), Some(second)) => match (self.is_valid(first), self.is_valid(second)) {
                (true, true) => self.compare_date(first, second) == Some(Ordering::Equal),
                (first_valid, second_valid) => first_valid == second_valid,
            },
            (first, second) => first.is_none() && second.is_none(),
        }
    }

    /// Clamps `date` to the calendar days `min` and `max`.
    pub fn clamp_date(
        &self,
        date: &Instant,
        min: Option<&Instant>,
        max: Option<&Instant>,
    ) -> Instant {
        if let Some(min) = min {
            if self.compare_date(date, min) == Some(Ordering::Less) {
                return self.localized(min);
            }
        }
        if let Some(max) = max {
            if self.compare_date(date, max) == Some(Ordering::Greater) {
                return self.localized(max);
            }
        }
        self.localized(date)
    }
}
