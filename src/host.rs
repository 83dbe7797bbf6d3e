//! Trait definitions for accessing values from the host environment.
//!
//! NOTE: This is a power user API.

use crate::AdapterResult;

/// The `HostClock` trait defines an accessor to the host's clock.
pub trait HostClock {
    /// Returns the milliseconds elapsed since the Unix epoch.
    fn get_host_epoch_milliseconds(&self) -> AdapterResult<i64>;
}

/// The `HostTimeZone` trait defines the host's local UTC offset.
pub trait HostTimeZone {
    /// Returns the offset from UTC in minutes, east positive, that the
    /// host's local time zone applies at `epoch_milliseconds`.
    fn get_host_utc_offset(&self, epoch_milliseconds: i64) -> AdapterResult<i16>;
}

/// `HostHooks` marks whether a trait implements the required host hooks with some
/// system methods.
pub trait HostHooks: HostClock + HostTimeZone {
    fn get_system_epoch_milliseconds(&self) -> AdapterResult<i64> {
        self.get_host_epoch_milliseconds()
    }

    fn get_system_utc_offset(&self, epoch_milliseconds: i64) -> AdapterResult<i16> {
        self.get_host_utc_offset(epoch_milliseconds)
    }
}

// Implement empty providers

impl HostClock for () {
    fn get_host_epoch_milliseconds(&self) -> AdapterResult<i64> {
        Ok(0)
    }
}

impl HostTimeZone for () {
    fn get_host_utc_offset(&self, _: i64) -> AdapterResult<i16> {
        Ok(0)
    }
}

impl HostHooks for () {}
