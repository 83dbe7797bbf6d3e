//! This module implements `AdapterError`.

use alloc::borrow::Cow;
use core::fmt;

/// `AdapterError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// An argument was rejected before any calendar math ran.
    InvalidArgument,
    /// The calendar engine rejected the constructed date.
    InvalidDate,
    /// An invalid date was handed to the formatter.
    Format,
    /// A value left the representable range.
    Range,
    /// Unexpected internal state.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Generic => "Error",
            Self::InvalidArgument => "InvalidArgument",
            Self::InvalidDate => "InvalidDate",
            Self::Format => "FormatError",
            Self::Range => "RangeError",
            Self::Assert => "ImplementationError",
        })
    }
}

/// The error type for `jalali_adapter`.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl AdapterError {
    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create a generic error
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument() -> Self {
        Self::new(ErrorKind::InvalidArgument)
    }

    /// Create an invalid date error.
    #[must_use]
    pub fn invalid_date() -> Self {
        Self::new(ErrorKind::InvalidDate)
    }

    /// Create a format error.
    #[must_use]
    pub fn format() -> Self {
        Self::new(ErrorKind::Format)
    }

    /// Create a range error.
    #[must_use]
    pub fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create an assertion error.
    #[must_use]
    pub fn assert() -> Self {
        Self::new(ErrorKind::Assert)
            .with_message("Implementation error: this state should not be reachable.")
    }

    /// Add a message to the error.
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AdapterError {}
