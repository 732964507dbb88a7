use std::sync::{Arc, Mutex};

use tokio::{sync::broadcast, time};

use crate::{reader::SignalReader, util::AbortOnDropHandle};

use super::{
    config::{MonitorConfig, MonitorControllerConfig},
    error::{MonitorError, Result},
    process::MonitorProcess,
    state::{
        HealthReader, MonitorReceiver, MonitorStatus, MonitorStatusManager, MonitorTransmitter,
        MonitorUpdate,
    },
};

/// Debounced monitor of one digital input line.
///
/// Owns the configuration, the signal reader and the update channel. [`start`] spawns the
/// polling process and hands back a [`MonitorController`] for shutdown.
///
/// Each engine watches exactly one line; monitoring several lines means several independent
/// engine/reader pairs.
///
/// [`start`]: MonitorEngine::start
pub struct MonitorEngine<R: SignalReader> {
    config: MonitorConfig,
    reader: R,
    status_manager: Arc<MonitorStatusManager>,
    update_tx: MonitorTransmitter,
}

impl<R: SignalReader> MonitorEngine<R> {
    pub fn new(config: MonitorConfig, reader: R) -> Self {
        let (update_tx, _) = broadcast::channel::<MonitorUpdate>(100);

        let status_manager = MonitorStatusManager::new(update_tx.clone());

        Self {
            config,
            reader,
            status_manager,
            update_tx,
        }
    }

    pub fn health(&self) -> Arc<dyn HealthReader> {
        self.status_manager.clone()
    }

    pub fn update_receiver(&self) -> MonitorReceiver {
        self.status_manager.update_receiver()
    }

    pub fn status_snapshot(&self) -> MonitorStatus {
        self.status_manager.status_snapshot()
    }

    /// Starts the monitor process and returns its controller.
    pub fn start(self) -> Arc<MonitorController> {
        // Internal channel for shutdown signal
        let (shutdown_tx, _) = broadcast::channel::<()>(1);

        let handle = MonitorProcess::spawn(
            &self.config,
            self.reader,
            shutdown_tx.clone(),
            self.status_manager.clone(),
            self.update_tx,
        );

        MonitorController::new(&self.config, handle, shutdown_tx, self.status_manager)
    }
}

/// Handle to a running monitor process.
#[derive(Debug)]
pub struct MonitorController {
    config: MonitorControllerConfig,
    handle: Mutex<Option<AbortOnDropHandle<()>>>,
    shutdown_tx: broadcast::Sender<()>,
    status_manager: Arc<MonitorStatusManager>,
}

impl MonitorController {
    fn new(
        config: &MonitorConfig,
        handle: AbortOnDropHandle<()>,
        shutdown_tx: broadcast::Sender<()>,
        status_manager: Arc<MonitorStatusManager>,
    ) -> Arc<Self> {
        Arc::new(Self {
            config: config.into(),
            handle: Mutex::new(Some(handle)),
            shutdown_tx,
            status_manager,
        })
    }

    pub fn health(&self) -> Arc<dyn HealthReader> {
        self.status_manager.clone()
    }

    pub fn update_receiver(&self) -> MonitorReceiver {
        self.status_manager.update_receiver()
    }

    pub fn status_snapshot(&self) -> MonitorStatus {
        self.status_manager.status_snapshot()
    }

    fn try_consume_handle(&self) -> Option<AbortOnDropHandle<()>> {
        self.handle
            .lock()
            .expect("`MonitorController` mutex can't be poisoned")
            .take()
    }

    /// Tries to perform a clean shutdown of the monitor process and consumes the task handle. If
    /// a clean shutdown fails, the process is aborted, which still releases the line. This
    /// method can only be called once per controller instance.
    /// Returns an error if the process had to be aborted, or if the handle was already consumed.
    pub async fn shutdown(&self) -> Result<()> {
        let Some(mut handle) = self.try_consume_handle() else {
            return Err(MonitorError::MonitorAlreadyShutdown);
        };

        self.status_manager.update(MonitorStatus::ShutdownInitiated);

        let shutdown_send_res = self.shutdown_tx.send(()).map_err(|e| {
            handle.abort();
            MonitorError::SendShutdownSignalFailed(e)
        });

        let shutdown_res = match shutdown_send_res {
            Ok(_) => {
                tokio::select! {
                    join_res = &mut handle => {
                        join_res.map_err(MonitorError::TaskJoin)
                    }
                    _ = time::sleep(self.config.shutdown_timeout()) => {
                        handle.abort();
                        Err(MonitorError::ShutdownTimeout)
                    }
                }
            }
            Err(e) => Err(e),
        };

        self.status_manager.update(MonitorStatus::Shutdown);

        shutdown_res
    }
}
