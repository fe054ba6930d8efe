//! Tipos de dados fotônicos

use std::fmt;
use serde::{Deserialize, Serialize};
use ldr_core::Level;

/// Estado do sensor em relação à configuração do pino
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensorState {
    /// Nenhum `begin` foi chamado
    Unconfigured,
    /// O pino foi configurado como entrada ao menos uma vez
    Configured,
}

/// Leitura tipada do comparador
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightStatus {
    /// Linha em LOW: o comparador cruzou o limiar
    Triggered,
    /// Linha em HIGH (ou qualquer nível não-LOW)
    Idle,
}

impl LightStatus {
    #[inline]
    pub const fn is_triggered(self) -> bool {
        matches!(self, LightStatus::Triggered)
    }
}

impl From<Level> for LightStatus {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => LightStatus::Triggered,
            Level::High => LightStatus::Idle,
        }
    }
}

impl From<LightStatus> for bool {
    fn from(status: LightStatus) -> bool {
        status.is_triggered()
    }
}

impl fmt::Display for LightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightStatus::Triggered => f.write_str("TRIGGERED"),
            LightStatus::Idle => f.write_str("IDLE"),
        }
    }
}
