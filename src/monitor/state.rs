use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard},
};

use chrono::{DateTime, Utc};
use tokio::sync::broadcast;

use crate::shared::Level;

use super::process::error::MonitorProcessError;

/// The debounced, confirmed reading of the monitored line.
///
/// Changes only after the raw signal has held a new value continuously for at least the
/// configured debounce interval; a single transient raw sample never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StableState {
    level: Level,
    active: bool,
    confirmed_at: DateTime<Utc>,
}

impl StableState {
    pub(super) fn new(level: Level, active_level: Level, confirmed_at: DateTime<Utc>) -> Self {
        Self {
            level,
            active: level == active_level,
            confirmed_at,
        }
    }

    /// Returns the confirmed line level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns `true` if the confirmed level is the configured active level, i.e. the sensor's
    /// alarm condition.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the time the level was confirmed.
    pub fn confirmed_at(&self) -> DateTime<Utc> {
        self.confirmed_at
    }
}

impl fmt::Display for StableState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let condition = if self.active { "active" } else { "clear" };
        write!(
            f,
            "{} ({condition}) since {}",
            self.level,
            self.confirmed_at.format("%Y-%m-%d %H:%M:%S%.3f")
        )
    }
}

/// Overall status of the monitor process.
#[derive(Debug, Clone)]
pub enum MonitorStatus {
    /// Monitor process has not been started yet.
    NotInitiated,
    /// Monitor process is initializing (sensor warm-up and initial sample).
    Starting,
    /// Monitor process is polling the line; carries the stable state seeded at watch start.
    Watching(StableState),
    /// Shutdown has been requested and is in progress.
    ShutdownInitiated,
    /// Monitor process has been gracefully shut down.
    Shutdown,
    /// Monitor process terminated due to an unrecoverable error. The line has been released;
    /// restarting is up to the caller.
    Terminated(Arc<MonitorProcessError>),
}

impl MonitorStatus {
    /// Returns `true` if the monitor process has stopped (either shut down or terminated).
    pub fn is_stopped(&self) -> bool {
        matches!(self, Self::Shutdown | Self::Terminated(_))
    }
}

impl fmt::Display for MonitorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitiated => write!(f, "Not initiated"),
            Self::Starting => write!(f, "Starting"),
            Self::Watching(state) => write!(f, "Watching ({state})"),
            Self::ShutdownInitiated => write!(f, "Shutdown initiated"),
            Self::Shutdown => write!(f, "Shutdown"),
            Self::Terminated(error) => write!(f, "Terminated: {error}"),
        }
    }
}

impl From<Arc<MonitorProcessError>> for MonitorStatus {
    fn from(value: Arc<MonitorProcessError>) -> Self {
        Self::Terminated(value)
    }
}

impl From<MonitorProcessError> for MonitorStatus {
    fn from(value: MonitorProcessError) -> Self {
        Arc::new(value).into()
    }
}

/// Update events broadcast by the monitor.
#[derive(Debug, Clone)]
pub enum MonitorUpdate {
    /// Monitor status has changed.
    Status(MonitorStatus),
    /// A debounced state transition was committed.
    Transition(StableState),
}

impl From<MonitorStatus> for MonitorUpdate {
    fn from(value: MonitorStatus) -> Self {
        Self::Status(value)
    }
}

impl From<StableState> for MonitorUpdate {
    fn from(value: StableState) -> Self {
        Self::Transition(value)
    }
}

pub(crate) type MonitorTransmitter = broadcast::Sender<MonitorUpdate>;

/// Receiver for subscribing to [`MonitorUpdate`]s.
pub type MonitorReceiver = broadcast::Receiver<MonitorUpdate>;

/// Read-only view of monitor health: the current status snapshot plus the update stream.
pub trait HealthReader: Send + Sync + 'static {
    fn update_receiver(&self) -> MonitorReceiver;
    fn status_snapshot(&self) -> MonitorStatus;
}

#[derive(Debug)]
pub(crate) struct MonitorStatusManager {
    status: Mutex<MonitorStatus>,
    update_tx: MonitorTransmitter,
}

impl MonitorStatusManager {
    pub fn new(update_tx: MonitorTransmitter) -> Arc<Self> {
        let status = Mutex::new(MonitorStatus::NotInitiated);

        Arc::new(Self { status, update_tx })
    }

    fn update_status_guard(
        &self,
        mut status_guard: MutexGuard<'_, MonitorStatus>,
        new_status: MonitorStatus,
    ) {
        *status_guard = new_status.clone();
        drop(status_guard);

        // Ignore no-receivers errors
        let _ = self.update_tx.send(new_status.into());
    }

    pub fn update(&self, new_status: MonitorStatus) {
        let status_guard = self
            .status
            .lock()
            .expect("`MonitorStatusManager` mutex can't be poisoned");

        self.update_status_guard(status_guard, new_status);
    }
}

impl HealthReader for MonitorStatusManager {
    fn update_receiver(&self) -> MonitorReceiver {
        self.update_tx.subscribe()
    }

    fn status_snapshot(&self) -> MonitorStatus {
        self.status
            .lock()
            .expect("`MonitorStatusManager` mutex can't be poisoned")
            .clone()
    }
}
