use thiserror::Error;

use super::{BcmPin, DebounceInterval, PollInterval};

#[derive(Error, Debug)]
pub enum BcmPinValidationError {
    #[error("Invalid BCM pin, must be at most {}", BcmPin::MAX)]
    OutOfRange,
}

#[derive(Error, Debug)]
pub enum PollIntervalValidationError {
    #[error("Invalid poll interval, must be at least {}", PollInterval::MIN)]
    TooShort,

    #[error("Invalid poll interval, must be at most {}", PollInterval::MAX)]
    TooLong,
}

#[derive(Error, Debug)]
pub enum DebounceIntervalValidationError {
    #[error("Invalid debounce interval, must not be negative")]
    Negative,

    #[error("Invalid debounce interval, must be at most {}", DebounceInterval::MAX)]
    TooLong,
}

#[derive(Error, Debug)]
pub enum ParseLevelError {
    #[error("Invalid level `{0}`, expected `high` or `low`")]
    Unrecognized(String),
}

#[derive(Error, Debug)]
pub enum ParsePullError {
    #[error("Invalid pull setting `{0}`, expected `none`, `up` or `down`")]
    Unrecognized(String),
}
