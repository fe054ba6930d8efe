//! Environment configuration loading from .env files
//!
//! Loads sensor settings from `.env` or environment variables.
//! Unparseable values fall back to the defaults.

use std::env;
use std::path::PathBuf;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use crate::platform::sysfs::DEFAULT_GPIO_ROOT;
use crate::traits::{PinId, UNSET_PIN};

// Automatically load .env when config module is accessed
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

/// Ensure environment is loaded
#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

/// Default poll interval for `watch`: 500 ms
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Load the sensor pin from `LDR_PIN`
/// Default: 255 (no pin assigned)
pub fn sensor_pin() -> PinId {
    ensure_loaded();
    env::var("LDR_PIN")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(UNSET_PIN)
}

/// Load the sysfs GPIO root from `LDR_GPIO_ROOT`
/// Default: /sys/class/gpio
pub fn gpio_root() -> PathBuf {
    ensure_loaded();
    env::var("LDR_GPIO_ROOT")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_GPIO_ROOT))
}

/// Load the poll interval from `LDR_POLL_INTERVAL_MS`
/// Default: 500 ms
pub fn poll_interval_ms() -> u64 {
    ensure_loaded();
    env::var("LDR_POLL_INTERVAL_MS")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_POLL_INTERVAL_MS)
}

/// Effective sensor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LdrConfig {
    /// Platform pin wired to the comparator output
    pub pin: PinId,
    /// sysfs GPIO root
    pub gpio_root: PathBuf,
    /// Poll interval for continuous sampling (ms)
    pub poll_interval_ms: u64,
}

impl LdrConfig {
    /// Build from `.env` / environment variables
    pub fn from_env() -> Self {
        Self {
            pin: sensor_pin(),
            gpio_root: gpio_root(),
            poll_interval_ms: poll_interval_ms(),
        }
    }

    /// A pin other than the sentinel has been assigned
    pub fn has_pin(&self) -> bool {
        self.pin != UNSET_PIN
    }
}

impl Default for LdrConfig {
    fn default() -> Self {
        Self {
            pin: UNSET_PIN,
            gpio_root: PathBuf::from(DEFAULT_GPIO_ROOT),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}
