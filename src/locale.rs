//! Locale tags, calendar dispatch and the adapter's locale context.
//!
//! The locale tag decides both the display language and the active
//! calendar system. [`calendar_system_for`] is the single place that
//! decision is made.

use core::fmt;

use icu_locale::LanguageIdentifier;

use crate::{calendar::CalendarSystem, engine::CalendarEngine};

mod data;
pub mod metadata;

pub use data::LocaleData;

/// The one locale tag that activates the solar Hijri calendar.
pub const SOLAR_HIJRI_LOCALE: &str = "fa";

/// A parsed locale tag.
///
/// Tags that are not well-formed BCP-47 language identifiers become `und`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleTag(LanguageIdentifier);

impl LocaleTag {
    /// Parses a locale tag.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        LanguageIdentifier::try_from_str(tag).map_or_else(|_| Self::default(), Self)
    }

    /// Returns the solar Hijri locale tag.
    #[must_use]
    pub fn solar_hijri() -> Self {
        Self::new(SOLAR_HIJRI_LOCALE)
    }

    /// Returns the language subtag, e.g. `"fa"`.
    #[inline]
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.language.as_str()
    }

    /// Returns the underlying language identifier.
    #[inline]
    #[must_use]
    pub fn as_language_identifier(&self) -> &LanguageIdentifier {
        &self.0
    }

    /// Returns whether this tag is exactly the solar Hijri locale.
    #[inline]
    #[must_use]
    pub fn is_solar_hijri(&self) -> bool {
        self.0.normalizing_eq(SOLAR_HIJRI_LOCALE)
    }
}

impl Default for LocaleTag {
    fn default() -> Self {
        Self(LanguageIdentifier::UNKNOWN)
    }
}

impl From<&str> for LocaleTag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Returns the calendar system a locale tag activates.
#[inline]
#[must_use]
pub fn calendar_system_for(tag: &LocaleTag) -> CalendarSystem {
    if tag.is_solar_hijri() {
        CalendarSystem::SolarHijri
    } else {
        CalendarSystem::Gregorian
    }
}

/// The active locale tag together with the display data derived for it.
#[derive(Debug, Clone)]
pub(crate) struct LocaleContext {
    tag: LocaleTag,
    data: LocaleData,
}

impl LocaleContext {
    pub(crate) fn new<E: CalendarEngine>(engine: &E, tag: LocaleTag) -> Self {
        let data = LocaleData::derive(engine, &tag);
        Self { tag, data }
    }

    /// Replaces the active tag and rebuilds the display data in full.
    pub(crate) fn set<E: CalendarEngine>(&mut self, engine: &E, tag: LocaleTag) {
        #[cfg(feature = "log")]
        log::debug!("switching locale from {} to {}", self.tag, tag);
        *self = Self::new(engine, tag);
    }

    #[inline]
    pub(crate) fn tag(&self) -> &LocaleTag {
        &self.tag
    }

    #[inline]
    pub(crate) fn data(&self) -> &LocaleData {
        &self.data
    }

    /// Dispatches on the current tag. Never cached: the tag may change
    /// between calls.
    #[inline]
    pub(crate) fn calendar_system(&self) -> CalendarSystem {
        calendar_system_for(&self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn only_fa_selects_solar_hijri() {
        assert_eq!(calendar_system_for(&LocaleTag::new("fa")), CalendarSystem::SolarHijri);
        assert_eq!(calendar_system_for(&LocaleTag::new("FA")), CalendarSystem::SolarHijri);
        assert_eq!(calendar_system_for(&LocaleTag::new("fa-IR")), CalendarSystem::Gregorian);
        assert_eq!(calendar_system_for(&LocaleTag::new("en-US")), CalendarSystem::Gregorian);
        assert_eq!(calendar_system_for(&LocaleTag::new("")), CalendarSystem::Gregorian);
    }

    #[test]
    fn malformed_tags_become_und() {
        let tag = LocaleTag::new("not a locale!");
        assert_eq!(tag, LocaleTag::default());
        assert_eq!(tag.to_string(), "und");
        assert_eq!(LocaleTag::new("de-at").to_string(), "de-AT");
        assert_eq!(LocaleTag::new("de-AT").language(), "de");
    }
}
