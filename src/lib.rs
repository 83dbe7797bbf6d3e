//! The `jalali_adapter` crate is a dual-calendar date adapter: one date
//! value that is read, displayed and manipulated under either the solar
//! Hijri (Jalali, Persian) calendar or the Gregorian calendar, with the
//! active calendar system selected by a locale tag.
//!
//! ```rust
//! use jalali_adapter::{AdapterOptions, CalendarSystem, DateAdapter, IcuCalendarEngine};
//!
//! let engine = IcuCalendarEngine::new(());
//! let mut adapter = DateAdapter::new(engine, Some("fa"), AdapterOptions::new().with_utc(true));
//! assert_eq!(adapter.active_calendar_system(), CalendarSystem::SolarHijri);
//!
//! // 1 Farvardin 1403
//! let nowruz = adapter.create_date(1403, 0, 1).unwrap();
//! assert_eq!(adapter.to_iso8601(&nowruz), "2024-03-20T00:00:00Z");
//!
//! // The same instant read under the Gregorian calendar.
//! adapter.set_locale("en");
//! assert_eq!(adapter.get_year(&nowruz), Some(2024));
//! assert_eq!(adapter.get_month(&nowruz), Some(2));
//! assert_eq!(adapter.get_date(&nowruz), Some(20));
//! ```
//!
//! Calling code never interprets an [`Instant`] directly. Every field
//! accessor, constructor and arithmetic operation on [`DateAdapter`]
//! consults the active locale to pick the calendar system, then delegates
//! the field math to a [`CalendarEngine`].
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod calendar;
pub mod error;
pub mod host;
pub mod iso;
pub mod locale;
pub mod options;
pub mod parsers;

mod adapter;
mod engine;
mod instant;

#[cfg(feature = "sys")]
pub mod sys;

#[doc(inline)]
pub use error::AdapterError;

/// The `jalali_adapter` result type
pub type AdapterResult<T> = Result<T, AdapterError>;

pub use crate::{
    adapter::{DateAdapter, DateInput},
    calendar::{CalendarFields, CalendarSystem, CalendarUnit},
    engine::{CalendarEngine, IcuCalendarEngine, ParseRequest},
    instant::Instant,
    locale::{LocaleTag, SOLAR_HIJRI_LOCALE},
    options::{AdapterOptions, NameStyle, TimeBasis},
};

// Relevant numeric constants
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: u32 = 24 * 60 * 60 * 1000;
pub(crate) const MS_PER_HOUR: i64 = 3_600_000;
pub(crate) const MS_PER_MINUTE: i64 = 60_000;
pub(crate) const MS_PER_SECOND: i64 = 1_000;
