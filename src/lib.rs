#![doc = include_str!("../README.md")]

/// Exports [`MonitorEngine`] and other types related to debounced line monitoring.
///
/// [`MonitorEngine`]: crate::monitor::MonitorEngine
pub mod monitor;
/// Exports [`GpioLineReader`], the [`SignalReader`] trait and the raw sample type.
///
/// [`GpioLineReader`]: crate::reader::GpioLineReader
/// [`SignalReader`]: crate::reader::SignalReader
pub mod reader;
mod shared;
mod util;

pub use monitor::MonitorEngine;
pub use reader::GpioLineReader;

/// Error types returned by `linewatch`.
pub mod error {
    pub use super::monitor::{error::MonitorError, process::error::MonitorProcessError};
    pub use super::reader::error::ReadError;
    pub use super::shared::error::{
        BcmPinValidationError, DebounceIntervalValidationError, ParseLevelError, ParsePullError,
        PollIntervalValidationError,
    };
    pub use super::util::PanicPayload;

    /// Convenience general-purpose Result type alias.
    pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
}

/// Exports the line and configuration value types.
pub mod models {
    pub use super::shared::{BcmPin, DebounceInterval, Level, PollInterval, Pull};
}
