use std::{
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

use tokio::{
    sync::broadcast,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::{
    reader::{RawSample, SignalReader},
    util::{AbortOnDropHandle, Never},
};

use super::{
    config::{MonitorConfig, MonitorProcessConfig},
    debounce::DebounceFilter,
    state::{MonitorStatus, MonitorStatusManager, MonitorTransmitter, MonitorUpdate},
};

pub(crate) mod error;


use error::{MonitorProcessError, Result};

pub(super) struct MonitorProcess<R: SignalReader> {
    config: MonitorProcessConfig,
    reader: R,
    shutdown_tx: broadcast::Sender<()>,
    status_manager: Arc<MonitorStatusManager>,
    update_tx: MonitorTransmitter,
}

impl<R: SignalReader> MonitorProcess<R> {
    pub fn spawn(
        config: &MonitorConfig,
        reader: R,
        shutdown_tx: broadcast::Sender<()>,
        status_manager: Arc<MonitorStatusManager>,
        update_tx: MonitorTransmitter,
    ) -> AbortOnDropHandle<()> {
        let config = config.into();

        tokio::spawn(async move {
            let process = Self {
                config,
                reader,
                shutdown_tx,
                status_manager,
                update_tx,
            };

            process.watch().await
        })
        .into()
    }

    /// Runs the poll loop until shutdown or a terminal error.
    ///
    /// The reader is owned by `self`, so every return path (and an abort) releases the line.
    async fn watch(mut self) {
        self.status_manager.update(MonitorStatus::Starting);

        let mut shutdown_rx = self.shutdown_tx.subscribe();

        let process_error = tokio::select! {
            Err(process_error) = self.run() => process_error,
            shutdown_res = shutdown_rx.recv() => {
                let Err(e) = shutdown_res else {
                    // Shutdown signal received; no further transitions are emitted
                    return;
                };

                MonitorProcessError::ShutdownSignalRecv(e)
            }
        };

        self.status_manager.update(process_error.into());
    }

    async fn run(&mut self) -> Result<Never> {
        if !self.config.warmup().is_zero() {
            debug!(warmup = ?self.config.warmup(), "letting the sensor settle");
            time::sleep(self.config.warmup()).await;
        }

        let seed = self.sample()?;
        let mut filter =
            DebounceFilter::new(seed, self.config.debounce(), self.config.active_level());

        info!(initial = %filter.stable(), "watching line");
        self.status_manager
            .update(MonitorStatus::Watching(filter.stable()));

        let poll = self.config.poll_interval().to_std();
        let mut ticker = time::interval_at(time::Instant::now() + poll, poll);
        // Keep ticks spaced `poll_interval` apart even after a stall
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let sample = self.sample()?;

            if let Some(transition) = filter.update(sample) {
                info!(state = %transition, "stable state changed");

                // Ignore no-receivers errors
                let _ = self.update_tx.send(MonitorUpdate::Transition(transition));
            }
        }
    }

    /// Reads one raw sample, containing reader panics.
    fn sample(&mut self) -> Result<RawSample> {
        panic::catch_unwind(AssertUnwindSafe(|| self.reader.sample()))
            .map_err(|payload| MonitorProcessError::SamplePanicked(payload.into()))?
            .map_err(MonitorProcessError::Read)
    }
}
