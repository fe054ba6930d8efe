//! # 📷 ldr-photonic — Percepção Fotônica Digital
//!
//! Driver para um LDR (resistor dependente de luz) ligado a um comparador
//! cuja saída chega a um único pino digital. O limiar é analógico, definido
//! pelo circuito; o software só lê o nível lógico.
//!
//! ## Polaridade
//!
//! - **LOW** → `true` (disparado)
//! - **HIGH** → `false` (repouso)
//!
//! ## Exemplo
//!
//! ```
//! use ldr_photonic::LightSensor;
//! use ldr_core::prelude::*;
//!
//! let mut sensor = LightSensor::new(5, MockIo::with_levels([Level::Low]));
//! sensor.begin().unwrap();
//! assert!(sensor.read_status().unwrap());
//! ```

pub mod error;
pub mod light;
pub mod types;

pub use error::{PhotonicError, PhotonicResult};
pub use light::LightSensor;
pub use types::{LightStatus, SensorState};

// Re-export core types
pub use ldr_core::prelude::*;

#[cfg(test)]
mod tests;
