//! The system host, backed by the operating system's clock and time zone.

use crate::engine::IcuCalendarEngine;
use crate::host::{HostClock, HostHooks, HostTimeZone};
use crate::{AdapterError, AdapterOptions, AdapterResult, DateAdapter};

use chrono::{Local, Offset, TimeZone};
use web_time::{SystemTime, UNIX_EPOCH};

/// A host system implementation that reads the current time from
/// [`std::time::SystemTime`] and the local UTC offset from the operating
/// system's time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl HostHooks for SystemHost {}

impl HostClock for SystemHost {
    fn get_host_epoch_milliseconds(&self) -> AdapterResult<i64> {
        get_system_milliseconds()
    }
}

impl HostTimeZone for SystemHost {
    fn get_host_utc_offset(&self, epoch_milliseconds: i64) -> AdapterResult<i16> {
        let local = Local
            .timestamp_millis_opt(epoch_milliseconds)
            .earliest()
            .ok_or_else(|| AdapterError::range().with_message("Timestamp out of local range"))?;
        let seconds = local.offset().fix().local_minus_utc();
        i16::try_from(seconds / 60)
            .map_err(|_| AdapterError::general("Error fetching system time zone"))
    }
}

impl DateAdapter<IcuCalendarEngine<SystemHost>> {
    /// Creates a `DateAdapter` on the system clock and time zone.
    ///
    /// When `locale` is `None` the adapter starts with the solar Hijri
    /// locale.
    pub fn system(locale: Option<&str>, options: AdapterOptions) -> Self {
        Self::new(IcuCalendarEngine::new(SystemHost), locale, options)
    }
}

/// Returns the system time in milliseconds.
pub(crate) fn get_system_milliseconds() -> AdapterResult<i64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AdapterError::general("Error fetching system time"))
        .and_then(|d| {
            i64::try_from(d.as_millis())
                .map_err(|_| AdapterError::range().with_message("System time out of range"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_after_2020() {
        let ms = SystemHost.get_host_epoch_milliseconds().unwrap();
        assert!(ms > 1_577_836_800_000);
        let offset = SystemHost.get_host_utc_offset(ms).unwrap();
        assert!((-16 * 60..=16 * 60).contains(&offset));
    }
}
