mod config;
mod debounce;
mod engine;
pub(crate) mod error;
pub(crate) mod process;
mod state;

pub use config::MonitorConfig;
pub use engine::{MonitorController, MonitorEngine};
pub use state::{HealthReader, MonitorReceiver, MonitorStatus, MonitorUpdate, StableState};
