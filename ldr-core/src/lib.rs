//! # 🔌 LDR-Core
//!
//! Abstrações fundamentais para drivers de sensores digitais de luz (LDR).
//!
//! > *"Trait no core, implementação no módulo."*
//!
//! O core não conhece nenhum sensor concreto. Ele define a fronteira com a
//! plataforma ([`DigitalIo`]) e os traits que os sensores implementam; os
//! drivers vivem em crates específicos (`ldr-photonic`).
//!
//! ## Módulos
//!
//! - [`traits`]: `DigitalIo`, `Level`, `PinMode`, `Component`, `Sensor`
//! - [`platform`]: backends de plataforma (`MockIo`, `SysfsGpio`)
//! - [`config`]: configuração via `.env` / variáveis de ambiente
//!
//! ## Quick Start
//!
//! ```
//! use ldr_core::prelude::*;
//!
//! let mut io = MockIo::with_levels([Level::Low]);
//! io.set_pin_mode(4, PinMode::Input).unwrap();
//! assert_eq!(io.digital_read(4).unwrap(), Level::Low);
//! assert_eq!(io.last_mode(), Some((4, PinMode::Input)));
//! ```

pub mod config;
pub mod platform;
pub mod prelude;
pub mod traits;

pub use config::LdrConfig;
pub use platform::{MockIo, PlatformError, SysfsGpio};
pub use traits::{Component, DigitalIo, Level, PinId, PinMode, Sensor, UNSET_PIN};
