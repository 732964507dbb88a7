use std::{fmt, result::Result, str::FromStr};

use chrono::Duration;

pub mod error;

use error::{
    BcmPinValidationError, DebounceIntervalValidationError, ParseLevelError, ParsePullError,
    PollIntervalValidationError,
};

#[cfg(test)]
mod tests;

/// Logic level of a digital input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    High,
    Low,
}

impl Level {
    /// Returns the opposite level.
    pub const fn toggled(&self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Low => Self::High,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "HIGH"),
            Self::Low => write!(f, "LOW"),
        }
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("high") {
            Ok(Self::High)
        } else if s.eq_ignore_ascii_case("low") {
            Ok(Self::Low)
        } else {
            Err(ParseLevelError::Unrecognized(s.to_string()))
        }
    }
}

/// Built-in pull resistor setting for an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull {
    None,
    Up,
    Down,
}

impl fmt::Display for Pull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

impl FromStr for Pull {
    type Err = ParsePullError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("none") {
            Ok(Self::None)
        } else if s.eq_ignore_ascii_case("up") {
            Ok(Self::Up)
        } else if s.eq_ignore_ascii_case("down") {
            Ok(Self::Down)
        } else {
            Err(ParsePullError::Unrecognized(s.to_string()))
        }
    }
}

/// Validated BCM GPIO line number.
///
/// Covers the BCM lines exposed on the Raspberry Pi 40-pin header. Validation here only rejects
/// numbers that can never be a header line; whether the line is actually free on the running
/// board is checked when the line is acquired.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct BcmPin(u8);

impl BcmPin {
    /// Highest BCM line number on the 40-pin header: GPIO 27.
    pub const MAX: Self = Self(27);

    /// Returns the BCM line number as a `u8`.
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for BcmPin {
    type Error = BcmPinValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX.0 {
            return Err(BcmPinValidationError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl fmt::Display for BcmPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

/// Validated interval between successive raw samples.
///
/// Represents a duration with enforced bounds to prevent the poll loop from spinning or from
/// sampling so rarely the monitor is useless.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct PollInterval(Duration);

impl PollInterval {
    pub const MIN: Self = Self(Duration::milliseconds(1));

    pub const MAX: Self = Self(Duration::hours(1));

    pub fn millis(millis: u64) -> Result<Self, PollIntervalValidationError> {
        Self::try_from(Duration::milliseconds(millis as i64))
    }

    /// Returns the poll interval as a [`Duration`].
    pub fn as_duration(&self) -> Duration {
        self.0
    }

    pub(crate) fn to_std(&self) -> std::time::Duration {
        self.0.to_std().expect("validated positive")
    }
}

impl TryFrom<Duration> for PollInterval {
    type Error = PollIntervalValidationError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        if value < Self::MIN.0 {
            return Err(PollIntervalValidationError::TooShort);
        }

        if value > Self::MAX.0 {
            return Err(PollIntervalValidationError::TooLong);
        }

        Ok(Self(value))
    }
}

impl fmt::Display for PollInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated duration a differing raw value must hold before it is committed as the new stable
/// state.
///
/// Zero is valid and disables filtering: the first differing sample commits immediately.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct DebounceInterval(Duration);

impl DebounceInterval {
    pub const ZERO: Self = Self(Duration::milliseconds(0));

    pub const MAX: Self = Self(Duration::hours(1));

    pub fn millis(millis: u64) -> Result<Self, DebounceIntervalValidationError> {
        Self::try_from(Duration::milliseconds(millis as i64))
    }

    /// Returns the debounce interval as a [`Duration`].
    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl TryFrom<Duration> for DebounceInterval {
    type Error = DebounceIntervalValidationError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        if value < Self::ZERO.0 {
            return Err(DebounceIntervalValidationError::Negative);
        }

        if value > Self::MAX.0 {
            return Err(DebounceIntervalValidationError::TooLong);
        }

        Ok(Self(value))
    }
}

impl fmt::Display for DebounceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
