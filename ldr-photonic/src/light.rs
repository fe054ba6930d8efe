//! Sensor de luz digital (LDR + comparador)

use std::fmt::Debug;
use tracing::{debug, trace};
use ldr_core::traits::{Component, DigitalIo, PinId, PinMode, Sensor};
use crate::error::PhotonicError;
use crate::types::{LightStatus, SensorState};

/// Sensor de luz em um pino digital, ativo em LOW.
///
/// Guarda apenas o número do pino e a plataforma injetada. Nenhum número de
/// pino é validado: o sentinela [`UNSET_PIN`](ldr_core::UNSET_PIN) e valores
/// sem sentido para o host seguem direto para a plataforma.
///
/// Falhas da plataforma são devolvidas como estão, sem tradução.
#[derive(Debug)]
pub struct LightSensor<Io> {
    pin: PinId,
    io: Io,
    state: SensorState,
}

impl<Io: DigitalIo> LightSensor<Io> {
    /// Cria o sensor guardando `pin` como está. Não toca no hardware.
    pub fn new(pin: PinId, io: Io) -> Self {
        Self {
            pin,
            io,
            state: SensorState::Unconfigured,
        }
    }

    /// Troca o pino e o configura como entrada
    pub fn begin_with(&mut self, pin: PinId) -> Result<(), Io::Error> {
        self.pin = pin;
        debug!(pin, "configuring light sensor pin as input");
        self.io.set_pin_mode(self.pin, PinMode::Input)?;
        self.state = SensorState::Configured;
        Ok(())
    }

    /// Reaplica a configuração de entrada no pino atual
    pub fn begin(&mut self) -> Result<(), Io::Error> {
        self.begin_with(self.pin)
    }

    /// Uma leitura digital: `true` se e somente se a linha está em LOW
    pub fn read_status(&mut self) -> Result<bool, Io::Error> {
        self.read_light().map(bool::from)
    }

    /// Mesma leitura de [`read_status`](Self::read_status), tipada
    pub fn read_light(&mut self) -> Result<LightStatus, Io::Error> {
        let level = self.io.digital_read(self.pin)?;
        trace!(pin = self.pin, %level, "ldr_status");
        Ok(LightStatus::from(level))
    }

    /// Pino atualmente guardado
    pub fn pin(&self) -> PinId {
        self.pin
    }

    pub fn state(&self) -> SensorState {
        self.state
    }

    pub fn io(&self) -> &Io {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut Io {
        &mut self.io
    }

    /// Devolve a plataforma injetada
    pub fn release(self) -> Io {
        self.io
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// IMPLEMENTAÇÃO DOS TRAITS DO CORE
// ═══════════════════════════════════════════════════════════════════════════════

impl<Io: DigitalIo + Debug> Component for LightSensor<Io> {
    fn name(&self) -> &str {
        "LightSensor"
    }

    fn is_ready(&self) -> bool {
        self.state == SensorState::Configured
    }
}

impl<Io: DigitalIo + Debug> Sensor for LightSensor<Io> {
    type Reading = LightStatus;
    type Error = PhotonicError<Io::Error>;

    fn read(&mut self) -> Result<LightStatus, Self::Error> {
        self.read_light().map_err(PhotonicError::Platform)
    }
}
