//! # 🎯 Traits — Fronteira com a Plataforma
//!
//! | Trait | Papel |
//! |:------|:------|
//! | [`DigitalIo`] | Capacidade de I/O digital injetada (modo de pino + leitura) |
//! | [`Component`] | Identidade e prontidão de qualquer componente |
//! | [`Sensor`] | Leitura de um valor a partir do hardware |
//!
//! Os traits aqui são **abstrações puras**. Um sensor recebe a plataforma
//! por injeção e nunca fala diretamente com registradores.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

// ═══════════════════════════════════════════════════════════════════════════════
// TIPOS COMUNS
// ═══════════════════════════════════════════════════════════════════════════════

/// Identificador de pino digital da plataforma (numeração definida pelo host)
pub type PinId = u8;

/// Sentinela "nenhum pino atribuído"
///
/// Nunca é rejeitado: é repassado à plataforma como qualquer outro número.
pub const UNSET_PIN: PinId = PinId::MAX;

/// Nível lógico de um pino digital
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Low,
    High,
}

impl Level {
    #[inline]
    pub const fn is_low(self) -> bool {
        matches!(self, Level::Low)
    }

    #[inline]
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    /// `true` → HIGH, `false` → LOW
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => f.write_str("LOW"),
            Level::High => f.write_str("HIGH"),
        }
    }
}

/// Direção elétrica de um pino
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PinMode {
    Input,
    InputPullup,
    Output,
}

impl fmt::Display for PinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinMode::Input => f.write_str("INPUT"),
            PinMode::InputPullup => f.write_str("INPUT_PULLUP"),
            PinMode::Output => f.write_str("OUTPUT"),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PLATAFORMA — I/O digital
// ═══════════════════════════════════════════════════════════════════════════════

/// Capacidade de I/O digital fornecida pelo ambiente de hardware.
///
/// Os pinos são um recurso global do processo: implementações não oferecem
/// travas nem atomicidade. Quem compartilha um pino entre contextos de execução
/// serializa o acesso.
///
/// # Exemplo
///
/// ```
/// use core::convert::Infallible;
/// use ldr_core::traits::{DigitalIo, Level, PinId, PinMode};
///
/// struct AlwaysLow;
///
/// impl DigitalIo for AlwaysLow {
///     type Error = Infallible;
///
///     fn set_pin_mode(&mut self, _pin: PinId, _mode: PinMode) -> Result<(), Infallible> {
///         Ok(())
///     }
///
///     fn digital_read(&mut self, _pin: PinId) -> Result<Level, Infallible> {
///         Ok(Level::Low)
///     }
/// }
/// ```
pub trait DigitalIo {
    /// Falha própria da plataforma, repassada sem tradução
    type Error: Debug;

    /// Configura a direção elétrica de um pino
    fn set_pin_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), Self::Error>;

    /// Amostra o nível lógico de um pino
    fn digital_read(&mut self, pin: PinId) -> Result<Level, Self::Error>;
}

impl<T: DigitalIo + ?Sized> DigitalIo for &mut T {
    type Error = T::Error;

    #[inline]
    fn set_pin_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), Self::Error> {
        (**self).set_pin_mode(pin, mode)
    }

    #[inline]
    fn digital_read(&mut self, pin: PinId) -> Result<Level, Self::Error> {
        (**self).digital_read(pin)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TRAIT BASE — Todo componente
// ═══════════════════════════════════════════════════════════════════════════════

/// Trait base para qualquer componente (sensor, backend, etc.)
pub trait Component: Debug {
    /// Nome do componente (para logs e debug)
    fn name(&self) -> &str;

    /// Versão do componente
    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    /// Componente está pronto para uso?
    fn is_ready(&self) -> bool {
        true
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PERCEPÇÃO — Sensores
// ═══════════════════════════════════════════════════════════════════════════════

/// Trait para sensores que produzem uma leitura por chamada.
pub trait Sensor: Component {
    /// Tipo da leitura produzida
    type Reading;

    /// Erro de leitura
    type Error;

    /// Lê o sensor uma vez
    fn read(&mut self) -> Result<Self::Reading, Self::Error>;
}
