//! Native implementation of the adapter options.
//!
//! The options are fixed when a `DateAdapter` is constructed. They change
//! how raw strings and instants are interpreted, never which calendar
//! system is active.

use crate::{AdapterError, AdapterResult};
use core::{fmt, str::FromStr};

/// Options supplied once when a `DateAdapter` is constructed.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AdapterOptions {
    /// Read and create wall-clock values in UTC instead of the host's
    /// local offset.
    pub use_utc: bool,
    /// Require format patterns to match input strings exactly.
    pub strict: bool,
}

impl AdapterOptions {
    /// Creates the default options: local time, forgiving parsing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            use_utc: false,
            strict: false,
        }
    }

    /// Sets whether wall-clock values use UTC.
    #[must_use]
    pub const fn with_utc(mut self, use_utc: bool) -> Self {
        self.use_utc = use_utc;
        self
    }

    /// Sets whether parsing is strict.
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns the time basis these options select.
    #[inline]
    #[must_use]
    pub const fn time_basis(&self) -> TimeBasis {
        if self.use_utc {
            TimeBasis::Utc
        } else {
            TimeBasis::Local
        }
    }
}

/// The basis a wall-clock time is read in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeBasis {
    /// The host's local UTC offset.
    #[default]
    Local,
    /// UTC.
    Utc,
}

/// The width of a month or weekday name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    /// "Farvardin", "Wednesday"
    #[default]
    Long,
    /// "Jan", "Wed"
    Short,
    /// "We"
    Narrow,
}

impl FromStr for NameStyle {
    type Err = AdapterError;

    fn from_str(s: &str) -> AdapterResult<Self> {
        match s {
            "long" => Ok(Self::Long),
            "short" => Ok(Self::Short),
            "narrow" => Ok(Self::Narrow),
            _ => Err(AdapterError::invalid_argument().with_message("Invalid name style value.")),
        }
    }
}

impl fmt::Display for NameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Long => "long",
            Self::Short => "short",
            Self::Narrow => "narrow",
        })
    }
}
