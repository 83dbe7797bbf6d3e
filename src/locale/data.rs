//! The display data derived for the active locale.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use crate::{
    calendar::{CalendarFields, CalendarSystem},
    engine::CalendarEngine,
    locale::{calendar_system_for, metadata::LocaleMetadata, LocaleTag},
    options::{NameStyle, TimeBasis},
};

// A solar Hijri year and a Gregorian year whose first month both have 31 days.
const SOLAR_HIJRI_REFERENCE_YEAR: i32 = 1397;
const GREGORIAN_REFERENCE_YEAR: i32 = 2017;

/// Month, weekday and day-of-month labels for one locale.
///
/// The labels are sampled from a `CalendarEngine`, so they always agree
/// with the names and digits the engine formats with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleData {
    first_day_of_week: u8,
    long_months: Vec<String>,
    short_months: Vec<String>,
    dates: Vec<String>,
    long_weekdays: Vec<String>,
    short_weekdays: Vec<String>,
    narrow_weekdays: Vec<String>,
}

impl LocaleData {
    /// Derives the display data for `tag` from `engine`.
    pub(crate) fn derive<E: CalendarEngine>(engine: &E, tag: &LocaleTag) -> Self {
        let system = calendar_system_for(tag);
        let metadata = engine.locale_metadata(tag, system).unwrap_or_else(|_err| {
            #[cfg(feature = "log")]
            log::warn!("no locale metadata for {tag}: {_err}");
            LocaleMetadata::default()
        });

        #[cfg(feature = "log")]
        log::trace!("deriving locale data for {tag} ({system})");

        let reference_year = match system {
            CalendarSystem::SolarHijri => SOLAR_HIJRI_REFERENCE_YEAR,
            CalendarSystem::Gregorian => GREGORIAN_REFERENCE_YEAR,
        };
        let dates = (1..=31u8)
            .map(|day| {
                let fields = CalendarFields::new(reference_year, 0, day);
                let date = engine.fields_to_instant(fields, system, TimeBasis::Utc, tag);
                engine
                    .format(&date, "D", system)
                    .unwrap_or_else(|_| day.to_string())
            })
            .collect();

        Self {
            first_day_of_week: metadata.first_day_of_week,
            long_months: metadata.months,
            short_months: metadata.months_short,
            dates,
            long_weekdays: metadata.weekdays,
            short_weekdays: metadata.weekdays_short,
            narrow_weekdays: metadata.weekdays_min,
        }
    }

    /// The first day of the week, 0 for Sunday.
    #[inline]
    pub fn first_day_of_week(&self) -> u8 {
        self.first_day_of_week
    }

    /// Month names. Months have no narrow names; `Narrow` returns the
    /// short names.
    pub fn month_names(&self, style: NameStyle) -> &[String] {
        match style {
            NameStyle::Long => &self.long_months,
            NameStyle::Short | NameStyle::Narrow => &self.short_months,
        }
    }

    /// Labels for the days of the month 1 through 31.
    #[inline]
    pub fn date_names(&self) -> &[String] {
        &self.dates
    }

    /// Weekday names, Sunday first.
    pub fn day_of_week_names(&self, style: NameStyle) -> &[String] {
        match style {
            NameStyle::Long => &self.long_weekdays,
            NameStyle::Short => &self.short_weekdays,
            NameStyle::Narrow => &self.narrow_weekdays,
        }
    }
}
