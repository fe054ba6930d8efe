//! Erros dos backends de plataforma

use std::path::PathBuf;
use thiserror::Error;
use crate::traits::PinId;

pub type PlatformResult<T> = Result<T, PlatformError>;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("GPIO I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid level {value:?} read from pin {pin}")]
    InvalidValue { pin: PinId, value: String },
}
