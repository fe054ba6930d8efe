//! Dublê de teste para a plataforma de I/O digital

use std::collections::VecDeque;
use std::convert::Infallible;
use crate::traits::{Component, DigitalIo, Level, PinId, PinMode};

/// Plataforma simulada.
///
/// Registra cada `set_pin_mode` e cada `digital_read`, e responde às leituras
/// com uma fila de níveis roteirizados. Quando a fila esvazia, devolve o
/// nível padrão (HIGH, linha em repouso).
#[derive(Debug, Clone)]
pub struct MockIo {
    script: VecDeque<Level>,
    default_level: Level,
    mode_calls: Vec<(PinId, PinMode)>,
    read_calls: Vec<PinId>,
}

impl MockIo {
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            default_level: Level::High,
            mode_calls: Vec::new(),
            read_calls: Vec::new(),
        }
    }

    /// Cria plataforma com níveis roteirizados, servidos em ordem
    pub fn with_levels(levels: impl IntoIterator<Item = Level>) -> Self {
        let mut io = Self::new();
        io.script.extend(levels);
        io
    }

    /// Enfileira um nível para a próxima leitura
    pub fn push_level(&mut self, level: Level) {
        self.script.push_back(level);
    }

    /// Nível devolvido quando o roteiro acaba
    pub fn set_default_level(&mut self, level: Level) {
        self.default_level = level;
    }

    /// Todas as chamadas `set_pin_mode`, em ordem
    pub fn mode_calls(&self) -> &[(PinId, PinMode)] {
        &self.mode_calls
    }

    /// Última chamada `set_pin_mode`
    pub fn last_mode(&self) -> Option<(PinId, PinMode)> {
        self.mode_calls.last().copied()
    }

    /// Último modo configurado para `pin`
    pub fn mode_of(&self, pin: PinId) -> Option<PinMode> {
        self.mode_calls
            .iter()
            .rev()
            .find(|(p, _)| *p == pin)
            .map(|(_, mode)| *mode)
    }

    /// Pinos lidos, em ordem
    pub fn read_calls(&self) -> &[PinId] {
        &self.read_calls
    }

    /// Níveis roteirizados ainda não consumidos
    pub fn pending(&self) -> usize {
        self.script.len()
    }
}

impl Default for MockIo {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for MockIo {
    fn name(&self) -> &str {
        "MockIo"
    }
}

impl DigitalIo for MockIo {
    type Error = Infallible;

    fn set_pin_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), Infallible> {
        self.mode_calls.push((pin, mode));
        Ok(())
    }

    fn digital_read(&mut self, pin: PinId) -> Result<Level, Infallible> {
        self.read_calls.push(pin);
        Ok(self.script.pop_front().unwrap_or(self.default_level))
    }
}
