use std::{result, sync::Arc};

use thiserror::Error;
use tokio::{sync::broadcast::error::SendError, task::JoinError};

use super::process::error::MonitorProcessError;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Monitor already shutdown error")]
    MonitorAlreadyShutdown,

    #[error("Failed to send monitor shutdown signal error: {0}")]
    SendShutdownSignalFailed(SendError<()>),

    #[error("[MonitorTaskJoin] {0}")]
    TaskJoin(JoinError),

    #[error("Monitor shutdown timeout error")]
    ShutdownTimeout,

    #[error("Monitor terminated: {0}")]
    Terminated(Arc<MonitorProcessError>),
}

pub(super) type Result<T> = result::Result<T, MonitorError>;
