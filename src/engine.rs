//! The calendar engine a `DateAdapter` delegates all field math to.

use alloc::{borrow::Cow, string::String};
use core::any::Any;

use writeable::Writeable;

use crate::{
    calendar::{CalendarFields, CalendarSystem, CalendarUnit},
    host::HostHooks,
    instant::Instant,
    iso::{IsoDateTime, IsoTime, MAX_EPOCH_DAYS},
    locale::{
        metadata::{Digits, LocaleMetadata},
        LocaleTag,
    },
    options::TimeBasis,
    parsers::{
        normalize_digits, parse_with_pattern, FormatPattern, FormattedInstant, ParseContext,
        ParsedFields,
    },
    AdapterError, AdapterResult, MS_PER_MINUTE,
};

/// The rendering of an invalid `Instant` in ISO 8601.
pub(crate) const INVALID_DATE: &str = "Invalid date";

/// The formats an input string is read with when the caller supplies none.
pub(crate) const ISO_8601_INPUT_FORMATS: &[&str] = &[
    "YYYY-MM-DDTHH:mm:ss.SSSZ",
    "YYYY-MM-DDTHH:mm:ssZ",
    "YYYY-MM-DDTHH:mm:ss.SSS",
    "YYYY-MM-DDTHH:mm:ss",
    "YYYY-MM-DDTHH:mm",
    "YYYY-MM-DD",
];

/// How a `CalendarEngine` should read an input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseRequest<'a> {
    /// The locale whose names and digits the input may use.
    pub locale: &'a LocaleTag,
    /// The calendar system unprefixed year, month and day tokens read.
    pub system: CalendarSystem,
    /// Whether formats must match the input exactly.
    pub strict: bool,
    /// The basis wall-clock input without an explicit offset is read in.
    pub basis: TimeBasis,
}

/// The calendar engine interface consumed by `DateAdapter`.
///
/// An engine owns every piece of calendar math: field conversion in both
/// calendar systems, unit arithmetic, parsing, formatting and the locale
/// metadata display names come from. The adapter itself only dispatches.
pub trait CalendarEngine {
    /// Builds the `Instant` at the start of the day `fields` names under
    /// `system`, or an invalid `Instant` when no such day exists.
    fn fields_to_instant(
        &self,
        fields: CalendarFields,
        system: CalendarSystem,
        basis: TimeBasis,
        locale: &LocaleTag,
    ) -> Instant;

    /// Reads the calendar fields of `instant` under `system`.
    fn instant_to_fields(&self, instant: &Instant, system: CalendarSystem)
        -> Option<CalendarFields>;

    /// Returns the length of the month `instant` falls in under `system`.
    fn days_in_month(&self, instant: &Instant, system: CalendarSystem) -> Option<u8>;

    /// Returns the day of the week, 0 for Sunday.
    fn day_of_week(&self, instant: &Instant) -> Option<u8>;

    /// Adds `amount` of `unit` under `system`, keeping the wall-clock time.
    fn add_units(
        &self,
        instant: &Instant,
        amount: i64,
        unit: CalendarUnit,
        system: CalendarSystem,
    ) -> Instant;

    /// Returns the names and numbering conventions of `locale`.
    fn locale_metadata(
        &self,
        locale: &LocaleTag,
        system: CalendarSystem,
    ) -> AdapterResult<LocaleMetadata>;

    /// Parses `input` with the best matching format of `formats`.
    ///
    /// Unparsable input yields an invalid `Instant`, never an error.
    fn parse(&self, input: &str, formats: &[&str], request: &ParseRequest<'_>) -> Instant;

    /// Renders `instant` with a moment-style `pattern`.
    fn format(&self, instant: &Instant, pattern: &str, system: CalendarSystem)
        -> AdapterResult<String>;

    /// Renders `instant` in ISO 8601 on the Gregorian calendar.
    fn to_iso_string(&self, instant: &Instant) -> String;

    /// Returns the current `Instant`.
    fn now(&self, basis: TimeBasis, locale: &LocaleTag) -> AdapterResult<Instant>;

    /// Wraps a Unix timestamp in milliseconds.
    fn from_epoch_milliseconds(
        &self,
        epoch_milliseconds: i64,
        basis: TimeBasis,
        locale: &LocaleTag,
    ) -> Instant;

    fn is_valid(&self, instant: &Instant) -> bool {
        instant.is_valid()
    }

    fn is_instance(&self, value: &dyn Any) -> bool {
        value.is::<Instant>()
    }

    fn invalid_instant(&self) -> Instant {
        Instant::invalid()
    }
}

/// The default `CalendarEngine`, backed by `icu_calendar` and a host for the
/// current time and the local UTC offset.
#[derive(Debug, Default, Clone)]
pub struct IcuCalendarEngine<H: HostHooks> {
    host: H,
}

impl<H: HostHooks> IcuCalendarEngine<H> {
    /// Creates an engine on `host`.
    pub const fn new(host: H) -> Self {
        Self { host }
    }

    /// Returns the host hooks.
    pub fn host(&self) -> &H {
        &self.host
    }

    fn offset_at(&self, epoch_milliseconds: i64, basis: TimeBasis) -> AdapterResult<i16> {
        match basis {
            TimeBasis::Utc => Ok(0),
            TimeBasis::Local => self.host.get_system_utc_offset(epoch_milliseconds),
        }
    }

    fn instant_at(
        &self,
        epoch_milliseconds: i64,
        basis: TimeBasis,
        locale: &LocaleTag,
    ) -> AdapterResult<Instant> {
        let offset = self.offset_at(epoch_milliseconds, basis)?;
        Ok(Instant::new(epoch_milliseconds, offset, basis, locale.clone()))
    }

    /// Resolves a wall-clock date and time read in `basis`.
    ///
    /// Local wall clocks are resolved with the offset in effect at the
    /// resulting instant, which takes one correction near offset changes.
    /// A wall clock skipped by a forward transition moves forward by the
    /// length of the gap, so a skipped midnight becomes 01:00.
    fn instant_from_wall(
        &self,
        wall: IsoDateTime,
        basis: TimeBasis,
        locale: &LocaleTag,
    ) -> AdapterResult<Instant> {
        let Some(wall_ms) = wall_milliseconds(wall) else {
            return Ok(Instant::invalid().with_locale(locale.clone()));
        };
        let epoch_ms = match basis {
            TimeBasis::Utc => wall_ms,
            TimeBasis::Local => {
                let first = self.host.get_system_utc_offset(wall_ms)?;
                let guess = wall_ms - i64::from(first) * MS_PER_MINUTE;
                let offset = self.host.get_system_utc_offset(guess)?;
                let epoch_ms = wall_ms - i64::from(offset) * MS_PER_MINUTE;
                if self.host.get_system_utc_offset(epoch_ms)? == offset {
                    epoch_ms
                } else {
                    wall_ms - i64::from(first.min(offset)) * MS_PER_MINUTE
                }
            }
        };
        self.instant_at(epoch_ms, basis, locale)
    }

    /// Turns parsed fields into an `Instant`, defaulting missing fields.
    ///
    /// Leading missing date fields take today's value and later ones take
    /// the first month or day, so `"14:30"` is today while `"2024"` is the
    /// first of January.
    fn resolve(&self, parsed: ParsedFields, request: &ParseRequest<'_>) -> AdapterResult<Instant> {
        let invalid = || Ok(Instant::invalid().with_locale(request.locale.clone()));
        let system = if parsed.solar_hijri {
            CalendarSystem::SolarHijri
        } else {
            CalendarSystem::Gregorian
        };

        let given = [parsed.year, parsed.month, parsed.day];
        let mut date = [0i32; 3];
        if given.iter().all(Option::is_some) {
            for (resolved, field) in date.iter_mut().zip(given) {
                *resolved = field.unwrap_or_default();
            }
        } else {
            let now = self.host.get_system_epoch_milliseconds()?;
            let offset = match parsed.offset_minutes {
                Some(offset) => offset,
                None => self.offset_at(now, request.basis)?,
            };
            let today_iso =
                IsoDateTime::from_wall_milliseconds(now + i64::from(offset) * MS_PER_MINUTE).date;
            let today = system.iso_to_fields(today_iso).ok_or_else(out_of_range)?;
            let current = [today.year, i32::from(today.month), i32::from(today.day)];
            let mut leading = true;
            for (index, field) in given.into_iter().enumerate() {
                date[index] = match field {
                    Some(value) => {
                        leading = false;
                        value
                    }
                    None if leading => current[index],
                    None if index == 2 => 1,
                    None => 0,
                };
            }
        }

        let mut hour = parsed.hour.unwrap_or(0);
        match parsed.post_meridiem {
            Some(true) if hour < 12 => hour += 12,
            Some(false) if hour == 12 => hour = 0,
            _ => {}
        }
        let Some(time) = IsoTime::try_new(
            hour,
            parsed.minute.unwrap_or(0),
            parsed.second.unwrap_or(0),
            parsed.millisecond.unwrap_or(0),
        ) else {
            return invalid();
        };
        let (Ok(month), Ok(day)) = (u8::try_from(date[1]), u8::try_from(date[2])) else {
            return invalid();
        };
        let Some(iso) = system.fields_to_iso(CalendarFields::new(date[0], month, day)) else {
            return invalid();
        };
        let wall = IsoDateTime::new_unchecked(iso, time);

        match parsed.offset_minutes {
            Some(offset) => {
                let Some(wall_ms) = wall_milliseconds(wall) else {
                    return invalid();
                };
                let epoch_ms = wall_ms - i64::from(offset) * MS_PER_MINUTE;
                self.instant_at(epoch_ms, request.basis, request.locale)
            }
            None => self.instant_from_wall(wall, request.basis, request.locale),
        }
    }

    /// Loads the solar Hijri metadata of `locale` unless `metadata`, loaded
    /// for `system`, already is.
    fn solar_hijri_metadata<'m>(
        &self,
        locale: &LocaleTag,
        system: CalendarSystem,
        metadata: &'m LocaleMetadata,
    ) -> AdapterResult<Cow<'m, LocaleMetadata>> {
        match system {
            CalendarSystem::SolarHijri => Ok(Cow::Borrowed(metadata)),
            CalendarSystem::Gregorian => self
                .locale_metadata(locale, CalendarSystem::SolarHijri)
                .map(Cow::Owned),
        }
    }

    fn render(
        &self,
        instant: &Instant,
        pattern: &FormatPattern<'_>,
        system: CalendarSystem,
        metadata: &LocaleMetadata,
    ) -> AdapterResult<String> {
        let wall = instant
            .wall_clock()
            .ok_or_else(|| AdapterError::format().with_message("Cannot format an invalid date."))?;
        let active = system.iso_to_fields(wall.date).ok_or_else(out_of_range)?;
        let (solar_hijri, solar_hijri_metadata) = if pattern.has_solar_hijri_tokens() {
            let fields = CalendarSystem::SolarHijri
                .iso_to_fields(wall.date)
                .ok_or_else(out_of_range)?;
            let metadata = self.solar_hijri_metadata(instant.locale(), system, metadata)?;
            (fields, metadata)
        } else {
            (active, Cow::Borrowed(metadata))
        };
        let formatted = FormattedInstant {
            pattern,
            wall,
            offset_minutes: instant.utc_offset().unwrap_or(0),
            utc: instant.basis() == Some(TimeBasis::Utc),
            active,
            active_metadata: metadata,
            solar_hijri,
            solar_hijri_metadata: &solar_hijri_metadata,
            digits: metadata.digits,
        };
        Ok(formatted.write_to_string().into_owned())
    }

    fn try_parse(
        &self,
        input: &str,
        formats: &[&str],
        request: &ParseRequest<'_>,
    ) -> AdapterResult<Instant> {
        let active_metadata = self.locale_metadata(request.locale, request.system)?;
        let solar_hijri_metadata =
            self.solar_hijri_metadata(request.locale, request.system, &active_metadata)?;
        let input = normalize_digits(input, active_metadata.digits);
        let formats = if formats.is_empty() {
            ISO_8601_INPUT_FORMATS
        } else {
            formats
        };
        let context = ParseContext {
            strict: request.strict,
            system: request.system,
            active_metadata: &active_metadata,
            solar_hijri_metadata: &solar_hijri_metadata,
        };

        let mut best: Option<(usize, Instant)> = None;
        for format in formats {
            let pattern = FormatPattern::parse(format);
            let Some(outcome) = parse_with_pattern(&input, &pattern, &context) else {
                continue;
            };
            let instant = or_invalid(self.resolve(outcome.fields, request), request.locale);
            if !instant.is_valid() {
                continue;
            }
            if best.as_ref().map_or(true, |(score, _)| outcome.score < *score) {
                best = Some((outcome.score, instant));
            }
            if outcome.score == 0 {
                break;
            }
        }

        let Some((_, instant)) = best else {
            #[cfg(feature = "log")]
            log::trace!("no format of {formats:?} matched {input:?}");
            return Ok(Instant::invalid().with_locale(request.locale.clone()));
        };
        Ok(instant)
    }
}

impl<H: HostHooks> CalendarEngine for IcuCalendarEngine<H> {
    fn fields_to_instant(
        &self,
        fields: CalendarFields,
        system: CalendarSystem,
        basis: TimeBasis,
        locale: &LocaleTag,
    ) -> Instant {
        let Some(date) = system.fields_to_iso(fields) else {
            return Instant::invalid().with_locale(locale.clone());
        };
        let wall = IsoDateTime::new_unchecked(date, IsoTime::start_of_day());
        or_invalid(self.instant_from_wall(wall, basis, locale), locale)
    }

    fn instant_to_fields(
        &self,
        instant: &Instant,
        system: CalendarSystem,
    ) -> Option<CalendarFields> {
        system.iso_to_fields(instant.wall_clock()?.date)
    }

    fn days_in_month(&self, instant: &Instant, system: CalendarSystem) -> Option<u8> {
        let fields = self.instant_to_fields(instant, system)?;
        system.days_in_month(fields.year, fields.month)
    }

    fn day_of_week(&self, instant: &Instant) -> Option<u8> {
        Some(instant.wall_clock()?.date.day_of_week())
    }

    fn add_units(
        &self,
        instant: &Instant,
        amount: i64,
        unit: CalendarUnit,
        system: CalendarSystem,
    ) -> Instant {
        let locale = instant.locale();
        let (Some(wall), Some(basis)) = (instant.wall_clock(), instant.basis()) else {
            return Instant::invalid().with_locale(locale.clone());
        };
        let Some(date) = system.add_to_iso(wall.date, amount, unit) else {
            return Instant::invalid().with_locale(locale.clone());
        };
        let wall = IsoDateTime::new_unchecked(date, wall.time);
        or_invalid(self.instant_from_wall(wall, basis, locale), locale)
    }

    fn locale_metadata(
        &self,
        locale: &LocaleTag,
        system: CalendarSystem,
    ) -> AdapterResult<LocaleMetadata> {
        LocaleMetadata::try_new(locale, system)
    }

    fn parse(&self, input: &str, formats: &[&str], request: &ParseRequest<'_>) -> Instant {
        or_invalid(self.try_parse(input, formats, request), request.locale)
    }

    fn format(
        &self,
        instant: &Instant,
        pattern: &str,
        system: CalendarSystem,
    ) -> AdapterResult<String> {
        if !instant.is_valid() {
            return Err(AdapterError::format().with_message("Cannot format an invalid date."));
        }
        let metadata = self.locale_metadata(instant.locale(), system)?;
        self.render(instant, &FormatPattern::parse(pattern), system, &metadata)
    }

    fn to_iso_string(&self, instant: &Instant) -> String {
        // ISO 8601 has no names, only ASCII digits.
        let metadata = LocaleMetadata {
            digits: Digits::LATIN,
            ..LocaleMetadata::default()
        };
        self.render(
            instant,
            &FormatPattern::iso8601(),
            CalendarSystem::Gregorian,
            &metadata,
        )
        .unwrap_or_else(|_| INVALID_DATE.into())
    }

    fn now(&self, basis: TimeBasis, locale: &LocaleTag) -> AdapterResult<Instant> {
        let epoch_ms = self.host.get_system_epoch_milliseconds()?;
        self.instant_at(epoch_ms, basis, locale)
    }

    fn from_epoch_milliseconds(
        &self,
        epoch_milliseconds: i64,
        basis: TimeBasis,
        locale: &LocaleTag,
    ) -> Instant {
        or_invalid(self.instant_at(epoch_milliseconds, basis, locale), locale)
    }
}

fn wall_milliseconds(wall: IsoDateTime) -> Option<i64> {
    // One day of slack for wall clocks east of UTC at the range limit.
    (wall.date.to_epoch_days().abs() <= MAX_EPOCH_DAYS + 1).then(|| wall.to_wall_milliseconds())
}

fn out_of_range() -> AdapterError {
    AdapterError::range().with_message("Date is outside of the calendar's supported range.")
}

fn or_invalid(result: AdapterResult<Instant>, locale: &LocaleTag) -> Instant {
    result.unwrap_or_else(|_err| {
        #[cfg(feature = "log")]
        log::warn!("could not resolve an instant: {_err}");
        Instant::invalid().with_locale(locale.clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostClock, HostTimeZone};

    /// 2024-03-20T08:30:00Z, with Tehran's +03:30.
    struct Tehran;

    const NOW: i64 = 1_710_923_400_000;

    impl HostClock for Tehran {
        fn get_host_epoch_milliseconds(&self) -> AdapterResult<i64> {
            Ok(NOW)
        }
    }

    impl HostTimeZone for Tehran {
        fn get_host_utc_offset(&self, _: i64) -> AdapterResult<i16> {
            Ok(210)
        }
    }

    impl HostHooks for Tehran {}

    /// Moves from -03:00 to -02:00 at 2018-11-04T03:00:00Z, skipping local
    /// midnight.
    struct SaoPaulo;

    const DST_START: i64 = 1_541_300_400_000;

    impl HostClock for SaoPaulo {
        fn get_host_epoch_milliseconds(&self) -> AdapterResult<i64> {
            Ok(DST_START)
        }
    }

    impl HostTimeZone for SaoPaulo {
        fn get_host_utc_offset(&self, epoch_milliseconds: i64) -> AdapterResult<i16> {
            Ok(if epoch_milliseconds < DST_START { -180 } else { -120 })
        }
    }

    impl HostHooks for SaoPaulo {}

    fn request(locale: &LocaleTag, system: CalendarSystem, strict: bool) -> ParseRequest<'_> {
        ParseRequest {
            locale,
            system,
            strict,
            basis: TimeBasis::Utc,
        }
    }

    #[test]
    fn fields_round_trip_through_instants() {
        let engine = IcuCalendarEngine::new(());
        let locale = LocaleTag::solar_hijri();
        for system in [CalendarSystem::SolarHijri, CalendarSystem::Gregorian] {
            let fields = CalendarFields::new(1403, 11, 30);
            let instant = engine.fields_to_instant(fields, system, TimeBasis::Utc, &locale);
            assert_eq!(engine.instant_to_fields(&instant, system), Some(fields), "{system}");
        }
    }

    #[test]
    fn local_basis_uses_host_offset() {
        let engine = IcuCalendarEngine::new(Tehran);
        let locale = LocaleTag::new("en");
        let instant = engine.fields_to_instant(
            CalendarFields::new(2024, 2, 20),
            CalendarSystem::Gregorian,
            TimeBasis::Local,
            &locale,
        );
        assert_eq!(instant.epoch_milliseconds(), Some(1_710_880_200_000));
        assert_eq!(instant.utc_offset(), Some(210));
        assert_eq!(engine.to_iso_string(&instant), "2024-03-20T00:00:00+03:30");
    }

    #[test]
    fn formats_with_locale_digits() {
        let engine = IcuCalendarEngine::new(());
        let locale = LocaleTag::solar_hijri();
        let instant = engine.fields_to_instant(
            CalendarFields::new(1403, 0, 1),
            CalendarSystem::SolarHijri,
            TimeBasis::Utc,
            &locale,
        );
        assert_eq!(
            engine.format(&instant, "jYYYY/jMM/jDD", CalendarSystem::SolarHijri),
            Ok(String::from("۱۴۰۳/۰۱/۰۱"))
        );
        assert_eq!(engine.to_iso_string(&instant), "2024-03-20T00:00:00Z");

        let invalid = engine.invalid_instant();
        assert_eq!(
            engine
                .format(&invalid, "YYYY", CalendarSystem::Gregorian)
                .map_err(|e| e.kind()),
            Err(crate::error::ErrorKind::Format)
        );
        assert_eq!(engine.to_iso_string(&invalid), INVALID_DATE);
    }

    #[test]
    fn parse_prefers_the_closest_format() {
        let engine = IcuCalendarEngine::new(());
        let locale = LocaleTag::new("en");
        let instant = engine.parse(
            "2024-03-20T10:00:00+03:30",
            &[],
            &request(&locale, CalendarSystem::Gregorian, false),
        );
        assert_eq!(engine.to_iso_string(&instant), "2024-03-20T06:30:00Z");
        assert_eq!(instant.locale(), &locale);
    }

    #[test]
    fn parse_defaults_missing_fields() {
        let engine = IcuCalendarEngine::new(Tehran);
        let locale = LocaleTag::new("en");
        let strict = request(&locale, CalendarSystem::Gregorian, true);
        let time_only = engine.parse("14:30", &["HH:mm"], &strict);
        assert_eq!(engine.to_iso_string(&time_only), "2024-03-20T14:30:00Z");

        let year_only = engine.parse("2023", &["YYYY"], &strict);
        assert_eq!(engine.to_iso_string(&year_only), "2023-01-01T00:00:00Z");

        let solar_hijri = engine.parse(
            "1403/12/30",
            &["jYYYY/jMM/jDD"],
            &request(&locale, CalendarSystem::Gregorian, true),
        );
        assert_eq!(engine.to_iso_string(&solar_hijri), "2025-03-20T00:00:00Z");
    }

    #[test]
    fn unparsable_and_out_of_range_input_is_invalid() {
        let engine = IcuCalendarEngine::new(());
        let locale = LocaleTag::new("en");
        for (input, format) in [
            ("not-a-date", "YYYY-MM-DD"),
            ("2024-02-30", "YYYY-MM-DD"),
            ("2024-13-01", "YYYY-MM-DD"),
            ("1402/12/30", "jYYYY/jMM/jDD"),
            ("25:00", "HH:mm"),
        ] {
            let strict = request(&locale, CalendarSystem::Gregorian, true);
            let instant = engine.parse(input, &[format], &strict);
            assert!(!engine.is_valid(&instant), "{input}");
        }
    }

    #[test]
    fn add_units_keeps_wall_time() {
        let engine = IcuCalendarEngine::new(Tehran);
        let locale = LocaleTag::new("en");
        let start = engine.from_epoch_milliseconds(NOW, TimeBasis::Local, &locale);
        let next = engine.add_units(&start, 1, CalendarUnit::Month, CalendarSystem::SolarHijri);
        assert_eq!(engine.to_iso_string(&next), "2024-04-20T12:00:00+03:30");
        assert!(!engine
            .add_units(&Instant::invalid(), 1, CalendarUnit::Day, CalendarSystem::Gregorian)
            .is_valid());
    }

    #[test]
    fn skipped_midnight_moves_forward() {
        let engine = IcuCalendarEngine::new(SaoPaulo);
        let locale = LocaleTag::new("en");
        let fields = CalendarFields::new(2018, 10, 4);
        let instant =
            engine.fields_to_instant(fields, CalendarSystem::Gregorian, TimeBasis::Local, &locale);
        assert_eq!(instant.epoch_milliseconds(), Some(DST_START));
        assert_eq!(engine.to_iso_string(&instant), "2018-11-04T01:00:00-02:00");
        assert_eq!(
            engine.instant_to_fields(&instant, CalendarSystem::Gregorian),
            Some(fields)
        );

        let eve = engine.fields_to_instant(
            CalendarFields::new(2018, 10, 3),
            CalendarSystem::Gregorian,
            TimeBasis::Local,
            &locale,
        );
        assert_eq!(engine.to_iso_string(&eve), "2018-11-03T00:00:00-03:00");
        let next = engine.add_units(&eve, 1, CalendarUnit::Day, CalendarSystem::Gregorian);
        assert_eq!(engine.to_iso_string(&next), "2018-11-04T01:00:00-02:00");
    }

    #[test]
    fn far_future_instants_format_on_the_gregorian_calendar() {
        let engine = IcuCalendarEngine::new(());
        let locale = LocaleTag::new("en");
        // About 10,140 years after the epoch.
        let instant =
            engine.from_epoch_milliseconds(320_000_000_000_000, TimeBasis::Utc, &locale);
        assert!(engine.is_valid(&instant));
        assert!(engine.to_iso_string(&instant).starts_with("12110-"));
        assert_eq!(
            engine.format(&instant, "YYYY", CalendarSystem::Gregorian),
            Ok(String::from("12110"))
        );
        assert_eq!(
            engine
                .format(&instant, "jYYYY", CalendarSystem::Gregorian)
                .map_err(|e| e.kind()),
            Err(crate::error::ErrorKind::Range)
        );
    }

    #[test]
    fn instance_check() {
        let engine = IcuCalendarEngine::new(());
        assert!(engine.is_instance(&Instant::invalid()));
        assert!(!engine.is_instance(&"2024-03-20"));
    }
}
