use std::result;

use thiserror::Error;

use crate::shared::BcmPin;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("GPIO peripheral unavailable: {0}")]
    HardwareUnavailable(rppal::gpio::Error),

    #[error("GPIO line {pin} unavailable: {source}")]
    LineUnavailable {
        pin: BcmPin,
        source: rppal::gpio::Error,
    },
}

pub type Result<T> = result::Result<T, ReadError>;
