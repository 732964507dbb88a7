use chrono::{DateTime, Utc};

use rppal::gpio::{Gpio, InputPin};

use crate::shared::{BcmPin, Level, Pull};

pub(crate) mod error;

use error::{ReadError, Result};

/// A single timestamped reading of a digital input line.
///
/// Produced on demand by a [`SignalReader`], consumed by the debounce filter, then discarded. All
/// debounce timing derives from `sampled_at`, never from an ambient clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSample {
    level: Level,
    sampled_at: DateTime<Utc>,
}

impl RawSample {
    /// Creates a sample stamped with the current time.
    pub fn new(level: Level) -> Self {
        Self::at(level, Utc::now())
    }

    /// Creates a sample with an explicit timestamp.
    pub fn at(level: Level, sampled_at: DateTime<Utc>) -> Self {
        Self { level, sampled_at }
    }

    /// Returns the raw line level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the time the line was read.
    pub fn sampled_at(&self) -> DateTime<Utc> {
        self.sampled_at
    }
}

/// Source of raw samples from one binary hardware input line.
///
/// `sample` must not block longer than the underlying hardware access and must have no side
/// effects beyond the read. Readers are owned by the monitor process task, so dropping the
/// process releases the line on every exit path.
pub trait SignalReader: Send + 'static {
    fn sample(&mut self) -> Result<RawSample>;
}

/// [`SignalReader`] backed by a Raspberry Pi GPIO line via `rppal`.
///
/// The line is configured as an input with the requested pull resistor on open and released
/// (reset to its default state) on drop.
#[derive(Debug)]
pub struct GpioLineReader {
    line: InputPin,
}

impl GpioLineReader {
    /// Acquires the GPIO peripheral and claims `pin` as an input line.
    ///
    /// Fails with [`ReadError::HardwareUnavailable`] when the GPIO character device is missing or
    /// access is denied, and with [`ReadError::LineUnavailable`] when the line itself can't be
    /// claimed.
    pub fn open(pin: BcmPin, pull: Pull) -> Result<Self> {
        let gpio = Gpio::new().map_err(ReadError::HardwareUnavailable)?;

        let line = gpio
            .get(pin.as_u8())
            .map_err(|source| ReadError::LineUnavailable { pin, source })?;

        let line = match pull {
            Pull::None => line.into_input(),
            Pull::Up => line.into_input_pullup(),
            Pull::Down => line.into_input_pulldown(),
        };

        Ok(Self { line })
    }

    /// Returns the BCM number of the claimed line.
    pub fn pin(&self) -> u8 {
        self.line.pin()
    }
}

impl SignalReader for GpioLineReader {
    fn sample(&mut self) -> Result<RawSample> {
        Ok(RawSample::new(self.line.read().into()))
    }
}

impl From<rppal::gpio::Level> for Level {
    fn from(value: rppal::gpio::Level) -> Self {
        match value {
            rppal::gpio::Level::High => Self::High,
            rppal::gpio::Level::Low => Self::Low,
        }
    }
}
