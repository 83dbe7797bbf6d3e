//! An implementation of the adapter's `Instant` value.

use crate::{
    iso::{IsoDateTime, MAX_EPOCH_DAYS},
    locale::LocaleTag,
    options::TimeBasis,
    MS_PER_DAY, MS_PER_MINUTE,
};

const MAX_EPOCH_MILLISECONDS: i64 = MAX_EPOCH_DAYS * MS_PER_DAY as i64;

/// An immutable point in time with an attached locale tag.
///
/// An `Instant` is either valid, holding milliseconds since the Unix epoch
/// together with the UTC offset its wall clock is read in, or explicitly
/// invalid. Operations never mutate an `Instant`; they return new values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Instant {
    repr: Option<InstantRepr>,
    locale: LocaleTag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct InstantRepr {
    epoch_milliseconds: i64,
    offset_minutes: i16,
    basis: TimeBasis,
}

impl Instant {
    /// Creates a new `Instant`, which is invalid when `epoch_milliseconds` is
    /// outside of ±8.64e15.
    pub(crate) fn new(
        epoch_milliseconds: i64,
        offset_minutes: i16,
        basis: TimeBasis,
        locale: LocaleTag,
    ) -> Self {
        if !(-MAX_EPOCH_MILLISECONDS..=MAX_EPOCH_MILLISECONDS).contains(&epoch_milliseconds) {
            return Self::invalid().with_locale(locale);
        }
        let offset_minutes = match basis {
            TimeBasis::Utc => 0,
            TimeBasis::Local => offset_minutes,
        };
        Self {
            repr: Some(InstantRepr {
                epoch_milliseconds,
                offset_minutes,
                basis,
            }),
            locale,
        }
    }

    /// Returns an explicitly invalid `Instant`.
    #[must_use]
    pub fn invalid() -> Self {
        Self {
            repr: None,
            locale: LocaleTag::default(),
        }
    }

    /// Returns whether this `Instant` names a point in time.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.repr.is_some()
    }

    /// Returns the milliseconds since the Unix epoch.
    #[inline]
    #[must_use]
    pub fn epoch_milliseconds(&self) -> Option<i64> {
        self.repr.map(|r| r.epoch_milliseconds)
    }

    /// Returns the UTC offset in minutes the wall clock is read in.
    #[inline]
    #[must_use]
    pub fn utc_offset(&self) -> Option<i16> {
        self.repr.map(|r| r.offset_minutes)
    }

    /// Returns the basis of this `Instant`'s wall clock.
    #[inline]
    #[must_use]
    pub fn basis(&self) -> Option<TimeBasis> {
        self.repr.map(|r| r.basis)
    }

    /// Returns the attached locale tag.
    #[inline]
    #[must_use]
    pub fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    /// Returns this `Instant` with `locale` attached.
    #[must_use]
    pub fn with_locale(mut self, locale: LocaleTag) -> Self {
        self.locale = locale;
        self
    }

    /// Returns the ISO wall-clock date and time of this `Instant`.
    pub(crate) fn wall_clock(&self) -> Option<IsoDateTime> {
        let repr = self.repr?;
        let wall = repr.epoch_milliseconds + i64::from(repr.offset_minutes) * MS_PER_MINUTE;
        Some(IsoDateTime::from_wall_milliseconds(wall))
    }
}
