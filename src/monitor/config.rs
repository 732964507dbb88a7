use tokio::time;

use crate::shared::{DebounceInterval, Level, PollInterval};

/// Configuration for the [`MonitorEngine`].
///
/// The polling cadence, debounce interval and active polarity are required and carry no
/// defaults. Polarity in particular is sensor-specific: the MQ-2 family pulls its digital
/// output LOW when the threshold is exceeded, while many contact sensors are active-high.
///
/// [`MonitorEngine`]: super::MonitorEngine
#[derive(Clone, Debug)]
pub struct MonitorConfig {
    poll_interval: PollInterval,
    debounce: DebounceInterval,
    active_level: Level,
    warmup: time::Duration,
    shutdown_timeout: time::Duration,
}

impl MonitorConfig {
    pub fn new(
        poll_interval: PollInterval,
        debounce: DebounceInterval,
        active_level: Level,
    ) -> Self {
        Self {
            poll_interval,
            debounce,
            active_level,
            warmup: time::Duration::ZERO,
            shutdown_timeout: time::Duration::from_secs(6),
        }
    }

    /// Returns the interval between successive raw samples.
    pub fn poll_interval(&self) -> PollInterval {
        self.poll_interval
    }

    /// Returns the duration a differing raw value must hold before it commits.
    pub fn debounce(&self) -> DebounceInterval {
        self.debounce
    }

    /// Returns the raw level interpreted as the alarm condition.
    pub fn active_level(&self) -> Level {
        self.active_level
    }

    /// Returns the settling delay observed before the first sample.
    pub fn warmup(&self) -> time::Duration {
        self.warmup
    }

    /// Returns the timeout duration for graceful shutdown operations.
    pub fn shutdown_timeout(&self) -> time::Duration {
        self.shutdown_timeout
    }

    /// Sets the settling delay observed before the first sample is taken.
    ///
    /// Threshold sensors with a heating element (the MQ series among them) need a warm-up period
    /// after power-up before their readings stabilize.
    ///
    /// Default: `0` seconds
    pub fn with_warmup(mut self, secs: u64) -> Self {
        self.warmup = time::Duration::from_secs(secs);
        self
    }

    /// Sets the timeout duration for graceful shutdown operations.
    ///
    /// Default: `6` seconds
    pub fn with_shutdown_timeout(mut self, secs: u64) -> Self {
        self.shutdown_timeout = time::Duration::from_secs(secs);
        self
    }
}

#[derive(Debug)]
pub(super) struct MonitorControllerConfig {
    shutdown_timeout: time::Duration,
}

impl MonitorControllerConfig {
    pub fn shutdown_timeout(&self) -> time::Duration {
        self.shutdown_timeout
    }
}

impl From<&MonitorConfig> for MonitorControllerConfig {
    fn from(value: &MonitorConfig) -> Self {
        Self {
            shutdown_timeout: value.shutdown_timeout,
        }
    }
}

#[derive(Clone, Debug)]
pub(super) struct MonitorProcessConfig {
    poll_interval: PollInterval,
    debounce: DebounceInterval,
    active_level: Level,
    warmup: time::Duration,
}

impl MonitorProcessConfig {
    pub fn poll_interval(&self) -> PollInterval {
        self.poll_interval
    }

    pub fn debounce(&self) -> DebounceInterval {
        self.debounce
    }

    pub fn active_level(&self) -> Level {
        self.active_level
    }

    pub fn warmup(&self) -> time::Duration {
        self.warmup
    }
}

impl From<&MonitorConfig> for MonitorProcessConfig {
    fn from(value: &MonitorConfig) -> Self {
        Self {
            poll_interval: value.poll_interval,
            debounce: value.debounce,
            active_level: value.active_level,
            warmup: value.warmup,
        }
    }
}
