use std::result;

use thiserror::Error;
use tokio::sync::broadcast::error::RecvError;

use crate::{reader::error::ReadError, util::PanicPayload};

/// Terminal errors of the monitor process.
///
/// The monitor is not self-healing: every variant stops the poll loop and releases the line.
/// Retry policy is the caller's decision.
#[derive(Error, Debug)]
pub enum MonitorProcessError {
    #[error("[SignalRead] {0}")]
    Read(#[from] ReadError),

    #[error("`SignalReader::sample` panicked: {0}")]
    SamplePanicked(PanicPayload),

    #[error("Shutdown signal channel recv error: {0}")]
    ShutdownSignalRecv(RecvError),
}

pub(crate) type Result<T> = result::Result<T, MonitorProcessError>;
