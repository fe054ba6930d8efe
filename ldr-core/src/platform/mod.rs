//! Backends de plataforma para [`DigitalIo`](crate::traits::DigitalIo)
//!
//! - [`MockIo`]: dublê de teste com níveis roteirizados e registro de chamadas
//! - [`SysfsGpio`]: GPIO do Linux via `/sys/class/gpio`

pub mod error;
pub mod mock;
pub mod sysfs;

pub use error::{PlatformError, PlatformResult};
pub use mock::MockIo;
pub use sysfs::SysfsGpio;
