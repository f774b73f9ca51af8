//! crates/logr-sink/src/level.rs
//! Severity levels understood by every sink.

use std::fmt;
use std::str::FromStr;

/// Severity attached to every record.
///
/// Variants are ordered from the most verbose to the most severe, so a record
/// passes a minimum level `min` when `record_level >= min`. [`Level::NoLevel`]
/// and [`Level::Disabled`] only make sense as minimums: setting the minimum to
/// `Disabled` silences every gated event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// Finest-grained diagnostics.
    #[default]
    Trace,
    /// Debugging output.
    Debug,
    /// Informational output.
    Info,
    /// Conditions worth attention.
    Warn,
    /// Failures.
    Error,
    /// Failures after which the process is expected to exit.
    Fatal,
    /// Failures after which the caller is expected to panic.
    Panic,
    /// Records without a level.
    #[cfg_attr(feature = "serde", serde(rename = ""))]
    NoLevel,
    /// Minimum that disables every gated record.
    Disabled,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Self; 9] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
        Self::Panic,
        Self::NoLevel,
        Self::Disabled,
    ];

    /// Returns the lowercase name written into the `level` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Panic => "panic",
            Self::NoLevel => "",
            Self::Disabled => "disabled",
        }
    }

    pub(crate) const fn to_u8(self) -> u8 {
        self as u8
    }

    pub(crate) const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Trace,
            1 => Self::Debug,
            2 => Self::Info,
            3 => Self::Warn,
            4 => Self::Error,
            5 => Self::Fatal,
            6 => Self::Panic,
            7 => Self::NoLevel,
            _ => Self::Disabled,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a level name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown level: {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            "panic" => Ok(Self::Panic),
            "" => Ok(Self::NoLevel),
            "disabled" => Ok(Self::Disabled),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}
