//! Re-exports de uso comum
//!
//! ```
//! use ldr_core::prelude::*;
//! ```

pub use crate::config::LdrConfig;
pub use crate::platform::{MockIo, PlatformError, SysfsGpio};
pub use crate::traits::{Component, DigitalIo, Level, PinId, PinMode, Sensor, UNSET_PIN};
