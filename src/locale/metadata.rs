//! Locale metadata loaded from ICU4X compiled data.
//!
//! Month, weekday and day period names come from `icu_datetime`, the first
//! day of the week from `icu_calendar` and the native digits from
//! `icu_decimal`. Tags are maximized with likely subtags before loading,
//! so a bare `fa` reads the week conventions of Iran.

use alloc::{string::String, vec::Vec};

use icu_calendar::{cal::Persian, week::WeekInformation, Date, Gregorian};
use icu_datetime::{
    input::{DateTime, Time},
    pattern::{
        DateTimePattern, DayPeriodNameLength, FixedCalendarDateTimeNames, MonthNameLength,
        WeekdayNameLength,
    },
    DateTimeFormatterPreferences,
};
use icu_decimal::{
    input::Decimal, options::DecimalFormatterOptions, DecimalFormatter,
    DecimalFormatterPreferences,
};
use icu_locale::{LanguageIdentifier, LocaleExpander};
use writeable::{TryWriteable, Writeable};

use crate::{calendar::CalendarSystem, locale::LocaleTag, AdapterError, AdapterResult};

// Any solar Hijri and Gregorian year will do: month names do not depend on
// the year. 2017-01-01 is a Sunday.
const SOLAR_HIJRI_SAMPLE_YEAR: i32 = 1403;
const GREGORIAN_SAMPLE_YEAR: i32 = 2017;

const PERSIAN_ZERO: u32 = 0x06F0;
const ARABIC_INDIC_ZERO: u32 = 0x0660;

/// The digit set numbers are rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digits([char; 10]);

impl Digits {
    /// `0123456789`
    pub const LATIN: Self = Self(['0', '1', '2', '3', '4', '5', '6', '7', '8', '9']);

    /// Returns the character for the decimal digit `value`.
    #[inline]
    #[must_use]
    pub fn digit(self, value: u8) -> char {
        debug_assert!(value < 10);
        self.0.get(usize::from(value)).copied().unwrap_or(self.0[0])
    }

    /// Returns the value of a digit of this set, or of any Latin, Persian
    /// or Arabic-Indic digit.
    #[must_use]
    pub fn value_of(self, ch: char) -> Option<u8> {
        if let Some(value) = self.0.iter().position(|digit| *digit == ch) {
            return Some(value as u8);
        }
        let code = u32::from(ch);
        if ch.is_ascii_digit() {
            Some(ch as u8 - b'0')
        } else if (PERSIAN_ZERO..PERSIAN_ZERO + 10).contains(&code) {
            Some((code - PERSIAN_ZERO) as u8)
        } else if (ARABIC_INDIC_ZERO..ARABIC_INDIC_ZERO + 10).contains(&code) {
            Some((code - ARABIC_INDIC_ZERO) as u8)
        } else {
            None
        }
    }
}

impl Default for Digits {
    fn default() -> Self {
        Self::LATIN
    }
}

/// The names and numbering conventions of one locale under one calendar
/// system.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LocaleMetadata {
    /// First day of the week, 0 for Sunday.
    pub first_day_of_week: u8,
    pub months: Vec<String>,
    pub months_short: Vec<String>,
    /// Weekday names, Sunday first.
    pub weekdays: Vec<String>,
    pub weekdays_short: Vec<String>,
    pub weekdays_min: Vec<String>,
    /// Labels before and after noon.
    pub meridiem: [String; 2],
    pub digits: Digits,
}

impl LocaleMetadata {
    /// Loads the metadata of `tag` for `system` from compiled data.
    ///
    /// Languages without data of their own read the root locale.
    pub fn try_new(tag: &LocaleTag, system: CalendarSystem) -> AdapterResult<Self> {
        let mut langid = tag.as_language_identifier().clone();
        LocaleExpander::new_common().maximize(&mut langid);

        let week = WeekInformation::try_new((&langid).into()).map_err(data_error)?;
        let prefs = DateTimeFormatterPreferences::from(&langid);
        let (months, months_short) = match system {
            CalendarSystem::SolarHijri => (
                solar_hijri_month_names(prefs, MonthNameLength::Wide, "MMMM")?,
                solar_hijri_month_names(prefs, MonthNameLength::Abbreviated, "MMM")?,
            ),
            CalendarSystem::Gregorian => (
                gregorian_month_names(prefs, MonthNameLength::Wide, "MMMM")?,
                gregorian_month_names(prefs, MonthNameLength::Abbreviated, "MMM")?,
            ),
        };
        let meridiem = meridiem_labels(prefs)?;

        Ok(Self {
            // `Weekday` counts Monday as 1 and Sunday as 7.
            first_day_of_week: week.first_weekday as u8 % 7,
            months,
            months_short,
            weekdays: weekday_names(prefs, WeekdayNameLength::Wide, "EEEE")?,
            weekdays_short: weekday_names(prefs, WeekdayNameLength::Abbreviated, "EEE")?,
            weekdays_min: weekday_names(prefs, WeekdayNameLength::Short, "EEEEEE")?,
            meridiem,
            digits: native_digits(&langid)?,
        })
    }
}

fn data_error<E: core::fmt::Debug>(_err: E) -> AdapterError {
    #[cfg(feature = "log")]
    log::warn!("locale data failed to load: {_err:?}");
    AdapterError::general("Locale data is unavailable.")
}

fn parse_pattern(pattern: &str) -> AdapterResult<DateTimePattern> {
    DateTimePattern::try_from_pattern_str(pattern).map_err(data_error)
}

fn solar_hijri_month_names(
    prefs: DateTimeFormatterPreferences,
    length: MonthNameLength,
    pattern_str: &str,
) -> AdapterResult<Vec<String>> {
    let mut names = FixedCalendarDateTimeNames::<Persian>::try_new(prefs).map_err(data_error)?;
    names.include_month_names(length).map_err(data_error)?;
    let pattern = parse_pattern(pattern_str)?;
    let formatter = names.with_pattern_unchecked(&pattern);
    (1..=12u8)
        .map(|month| {
            let date = Date::try_new_persian(SOLAR_HIJRI_SAMPLE_YEAR, month, 1)
                .map_err(data_error)?;
            let datetime = DateTime {
                date,
                time: Time::start_of_day(),
            };
            render(formatter.format(&datetime))
        })
        .collect()
}

fn gregorian_month_names(
    prefs: DateTimeFormatterPreferences,
    length: MonthNameLength,
    pattern_str: &str,
) -> AdapterResult<Vec<String>> {
    let mut names = FixedCalendarDateTimeNames::<Gregorian>::try_new(prefs).map_err(data_error)?;
    names.include_month_names(length).map_err(data_error)?;
    let pattern = parse_pattern(pattern_str)?;
    let formatter = names.with_pattern_unchecked(&pattern);
    (1..=12u8)
        .map(|month| {
            let date = Date::try_new_gregorian(GREGORIAN_SAMPLE_YEAR, month, 1)
                .map_err(data_error)?;
            let datetime = DateTime {
                date,
                time: Time::start_of_day(),
            };
            render(formatter.format(&datetime))
        })
        .collect()
}

fn weekday_names(
    prefs: DateTimeFormatterPreferences,
    length: WeekdayNameLength,
    pattern_str: &str,
) -> AdapterResult<Vec<String>> {
    let mut names = FixedCalendarDateTimeNames::<Gregorian>::try_new(prefs).map_err(data_error)?;
    names.include_weekday_names(length).map_err(data_error)?;
    let pattern = parse_pattern(pattern_str)?;
    let formatter = names.with_pattern_unchecked(&pattern);
    (1..=7u8)
        .map(|day| {
            let date = Date::try_new_gregorian(GREGORIAN_SAMPLE_YEAR, 1, day)
                .map_err(data_error)?;
            let datetime = DateTime {
                date,
                time: Time::start_of_day(),
            };
            render(formatter.format(&datetime))
        })
        .collect()
}

fn meridiem_labels(prefs: DateTimeFormatterPreferences) -> AdapterResult<[String; 2]> {
    let mut names = FixedCalendarDateTimeNames::<Gregorian>::try_new(prefs).map_err(data_error)?;
    names
        .include_day_period_names(DayPeriodNameLength::Abbreviated)
        .map_err(data_error)?;
    let pattern = parse_pattern("a")?;
    let formatter = names.with_pattern_unchecked(&pattern);
    let date = Date::try_new_gregorian(GREGORIAN_SAMPLE_YEAR, 1, 1).map_err(data_error)?;
    let label = |hour: u8| {
        let time = Time::try_new(hour, 0, 0, 0).map_err(data_error)?;
        render(formatter.format(&DateTime { date, time }))
    };
    Ok([label(9)?, label(21)?])
}

fn native_digits(langid: &LanguageIdentifier) -> AdapterResult<Digits> {
    let formatter = DecimalFormatter::try_new(
        DecimalFormatterPreferences::from(langid),
        DecimalFormatterOptions::default(),
    )
    .map_err(data_error)?;
    let mut digits = Digits::LATIN;
    for (value, digit) in digits.0.iter_mut().enumerate() {
        let decimal = Decimal::from(value as u8);
        let formatted = formatter.format(&decimal);
        let rendered = formatted.write_to_string();
        if let Some(ch) = rendered.chars().next() {
            *digit = ch;
        }
    }
    Ok(digits)
}

fn render<T: TryWriteable>(formatted: T) -> AdapterResult<String>
where
    T::Error: core::fmt::Debug,
{
    formatted
        .try_write_to_string()
        .map(|name| name.into_owned())
        .map_err(|(err, _)| data_error(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(tag: &str, system: CalendarSystem) -> LocaleMetadata {
        LocaleMetadata::try_new(&LocaleTag::new(tag), system).unwrap()
    }

    #[test]
    fn names_follow_the_calendar_system() {
        let english = metadata("en", CalendarSystem::Gregorian);
        assert_eq!(english.months[0], "January");
        assert_eq!(english.months_short[3], "Apr");
        assert_eq!(english.weekdays[0], "Sunday");
        assert_eq!(english.weekdays_min[3], "We");
        assert_eq!(english.meridiem, [String::from("AM"), String::from("PM")]);
        assert_eq!(english.first_day_of_week, 0);
        assert_eq!(english.digits, Digits::LATIN);

        let english = metadata("en", CalendarSystem::SolarHijri);
        assert_eq!(english.months[0], "Farvardin");
        assert_eq!(english.months[11], "Esfand");
        assert_eq!(english.weekdays[0], "Sunday");
    }

    #[test]
    fn persian_locale() {
        let persian = metadata("fa", CalendarSystem::SolarHijri);
        assert_eq!(persian.months[0], "فروردین");
        assert_eq!(persian.months[11], "اسفند");
        assert_eq!(persian.first_day_of_week, 6);
        assert_eq!(persian.digits.digit(7), '۷');
    }

    #[test]
    fn every_language_reads_its_own_data() {
        let german = metadata("de", CalendarSystem::Gregorian);
        assert_eq!(german.months[2], "März");
        assert_eq!(german.first_day_of_week, 1);

        let french = metadata("fr", CalendarSystem::Gregorian);
        assert_eq!(french.months[0], "janvier");
        assert_eq!(french.weekdays[0], "dimanche");
        assert_eq!(french.first_day_of_week, 1);

        let root = metadata("und", CalendarSystem::Gregorian);
        assert_eq!(root.months.len(), 12);
        assert_eq!(root.weekdays.len(), 7);
    }

    #[test]
    fn digits() {
        let persian = metadata("fa", CalendarSystem::Gregorian).digits;
        assert_eq!(persian.digit(0), '۰');
        assert_eq!(Digits::LATIN.digit(7), '7');
        assert_eq!(persian.value_of('۷'), Some(7));
        assert_eq!(Digits::LATIN.value_of('۷'), Some(7));
        assert_eq!(Digits::LATIN.value_of('٣'), Some(3));
        assert_eq!(Digits::LATIN.value_of('x'), None);
    }
}
