use std::{env, fmt, str::FromStr};

use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use linewatch::{
    GpioLineReader, MonitorEngine,
    error::MonitorError,
    models::{BcmPin, DebounceInterval, Level, PollInterval, Pull},
    monitor::{MonitorConfig, MonitorStatus, MonitorUpdate},
};

/// Reads and parses an environment variable, falling back to `default` when unset.
fn env_or<T>(key: &str, default: T) -> Result<T, Box<dyn std::error::Error>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(value) => value.parse::<T>().map_err(|e| format!("{key}: {e}").into()),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(format!("{key}: {e}").into()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Defaults match the MQ-2 wiring this started from: DO on GPIO 17 with a pull-up, sampled
    // once per second, LOW when the gas threshold is exceeded
    let pin = BcmPin::try_from(env_or("LINEWATCH_PIN", 17u8)?)?;
    let pull: Pull = env_or("LINEWATCH_PULL", Pull::Up)?;
    let poll_interval = PollInterval::millis(env_or("LINEWATCH_POLL_MS", 1_000u64)?)?;
    let debounce = DebounceInterval::millis(env_or("LINEWATCH_DEBOUNCE_MS", 300u64)?)?;
    let active_level: Level = env_or("LINEWATCH_ACTIVE_LEVEL", Level::Low)?;
    let warmup_secs = env_or("LINEWATCH_WARMUP_SECS", 0u64)?;

    let reader = GpioLineReader::open(pin, pull)?;

    info!(%pin, %pull, %poll_interval, %debounce, active = %active_level, "monitoring line");

    let config =
        MonitorConfig::new(poll_interval, debounce, active_level).with_warmup(warmup_secs);

    let engine = MonitorEngine::new(config, reader);
    let mut update_rx = engine.update_receiver();
    let controller = engine.start();

    let ctrl_c = signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            ctrl_c_res = &mut ctrl_c => {
                ctrl_c_res?;
                info!("interrupt received, shutting down");
                controller.shutdown().await?;
                return Ok(());
            }
            update_res = update_rx.recv() => match update_res? {
                MonitorUpdate::Transition(state) => {
                    if state.is_active() {
                        warn!("Gas detected!");
                    } else {
                        info!("No gas detected.");
                    }
                }
                MonitorUpdate::Status(status) => {
                    info!(%status, "monitor status");

                    if let MonitorStatus::Terminated(e) = status {
                        error!(%e, "monitor terminated");
                        return Err(MonitorError::Terminated(e).into());
                    }
                }
            },
        }
    }
}
