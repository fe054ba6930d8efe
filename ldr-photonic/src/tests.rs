//! Testes do módulo ldr-photonic

use super::*;

// ═══════════════════════════════════════════════════════════════════════════════
// TESTES DE CRIAÇÃO
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_light_creation() {
    let sensor = LightSensor::new(5, MockIo::new());

    assert_eq!(sensor.pin(), 5);
    assert_eq!(sensor.name(), "LightSensor");
    assert_eq!(sensor.state(), SensorState::Unconfigured);
    assert!(!sensor.is_ready());
    assert!(sensor.io().mode_calls().is_empty());
    assert!(sensor.io().read_calls().is_empty());
}

#[test]
fn test_light_creation_stores_any_pin() {
    for pin in 0..=PinId::MAX {
        let sensor = LightSensor::new(pin, MockIo::new());
        assert_eq!(sensor.pin(), pin);
    }
}

#[test]
fn test_light_creation_accepts_sentinel() {
    let sensor = LightSensor::new(UNSET_PIN, MockIo::new());
    assert_eq!(sensor.pin(), 255);
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTES DE CONFIGURAÇÃO
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_light_begin_with_new_pin() {
    let mut sensor = LightSensor::new(5, MockIo::new());
    sensor.begin_with(7).unwrap();

    assert_eq!(sensor.pin(), 7);
    assert_eq!(sensor.io().mode_calls(), &[(7, PinMode::Input)]);
    assert_eq!(sensor.state(), SensorState::Configured);
    assert!(sensor.is_ready());
}

#[test]
fn test_light_begin_uses_constructor_pin() {
    let mut sensor = LightSensor::new(3, MockIo::new());
    sensor.begin().unwrap();

    assert_eq!(sensor.io().mode_calls(), &[(3, PinMode::Input)]);
}

#[test]
fn test_light_begin_reapplies_last_pin() {
    for pin in 0..=PinId::MAX {
        let mut sensor = LightSensor::new(0, MockIo::new());
        sensor.begin_with(pin).unwrap();
        sensor.begin().unwrap();

        assert_eq!(sensor.pin(), pin);
        assert_eq!(sensor.io().mode_calls(), &[(pin, PinMode::Input), (pin, PinMode::Input)]);
        assert_eq!(sensor.io().last_mode(), Some((pin, PinMode::Input)));
    }
}

#[test]
fn test_light_begin_sentinel_passes_through() {
    let mut sensor = LightSensor::new(UNSET_PIN, MockIo::new());
    sensor.begin().unwrap();
    assert_eq!(sensor.io().last_mode(), Some((UNSET_PIN, PinMode::Input)));
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTES DE LEITURA
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_light_read_low_is_true() {
    let mut sensor = LightSensor::new(4, MockIo::with_levels([Level::Low]));
    sensor.begin().unwrap();
    assert!(sensor.read_status().unwrap());
}

#[test]
fn test_light_read_high_is_false() {
    let mut sensor = LightSensor::new(4, MockIo::with_levels([Level::High]));
    sensor.begin().unwrap();
    assert!(!sensor.read_status().unwrap());
}

#[test]
fn test_light_read_does_not_touch_pin() {
    let mut sensor = LightSensor::new(9, MockIo::with_levels([Level::Low, Level::High]));

    assert!(sensor.read_status().unwrap());
    assert_eq!(sensor.pin(), 9);
    assert!(!sensor.read_status().unwrap());
    assert_eq!(sensor.pin(), 9);

    assert_eq!(sensor.io().read_calls(), &[9, 9]);
    assert!(sensor.io().mode_calls().is_empty());
}

#[test]
fn test_light_read_while_unconfigured() {
    let mut sensor = LightSensor::new(2, MockIo::with_levels([Level::Low]));
    assert!(sensor.read_status().unwrap());
    assert_eq!(sensor.state(), SensorState::Unconfigured);
}

#[test]
fn test_light_read_typed() {
    let mut sensor = LightSensor::new(1, MockIo::with_levels([Level::Low, Level::High]));

    assert_eq!(sensor.read_light().unwrap(), LightStatus::Triggered);
    assert_eq!(sensor.read_light().unwrap(), LightStatus::Idle);
}

#[test]
fn test_light_read_status_matches_typed_read() {
    for level in [Level::Low, Level::High] {
        let mut sensor = LightSensor::new(1, MockIo::with_levels([level, level]));

        let status = sensor.read_status().unwrap();
        let typed = sensor.read_light().unwrap();

        assert_eq!(status, typed.is_triggered());
        assert_eq!(status, level.is_low());
        assert_eq!(sensor.io().read_calls(), &[1, 1]);
    }
}

#[test]
fn test_light_sensor_trait_read() {
    let mut sensor = LightSensor::new(1, MockIo::with_levels([Level::Low]));
    sensor.begin().unwrap();

    let status = Sensor::read(&mut sensor).unwrap();
    assert!(status.is_triggered());
    assert!(bool::from(status));
}

#[test]
fn test_light_borrowed_platform() {
    let mut io = MockIo::with_levels([Level::High]);
    {
        let mut sensor = LightSensor::new(12, &mut io);
        sensor.begin_with(13).unwrap();
        assert!(!sensor.read_status().unwrap());
    }

    assert_eq!(io.mode_calls(), &[(13, PinMode::Input)]);
    assert_eq!(io.read_calls(), &[13]);
}

#[test]
fn test_light_release() {
    let mut sensor = LightSensor::new(6, MockIo::new());
    sensor.io_mut().push_level(Level::Low);
    assert!(sensor.read_status().unwrap());

    let io = sensor.release();
    assert_eq!(io.pending(), 0);
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTES DE ERROS DA PLATAFORMA
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq)]
struct Fault(PinId);

#[derive(Debug)]
struct FaultyIo;

impl DigitalIo for FaultyIo {
    type Error = Fault;

    fn set_pin_mode(&mut self, pin: PinId, _mode: PinMode) -> Result<(), Fault> {
        Err(Fault(pin))
    }

    fn digital_read(&mut self, pin: PinId) -> Result<Level, Fault> {
        Err(Fault(pin))
    }
}

#[test]
fn test_light_platform_errors_pass_through() {
    let mut sensor = LightSensor::new(8, FaultyIo);

    assert_eq!(sensor.begin_with(11).unwrap_err(), Fault(11));
    // O pino é gravado antes da chamada à plataforma
    assert_eq!(sensor.pin(), 11);
    assert_eq!(sensor.state(), SensorState::Unconfigured);

    assert_eq!(sensor.read_status().unwrap_err(), Fault(11));
}

#[test]
fn test_light_sensor_trait_wraps_platform_error() {
    let mut sensor = LightSensor::new(8, FaultyIo);
    let err = Sensor::read(&mut sensor).unwrap_err();
    assert_eq!(err.into_platform(), Fault(8));
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTES DE TIPOS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_light_status_from_level() {
    assert_eq!(LightStatus::from(Level::Low), LightStatus::Triggered);
    assert_eq!(LightStatus::from(Level::High), LightStatus::Idle);
    assert_eq!(LightStatus::Triggered.to_string(), "TRIGGERED");
    assert_eq!(LightStatus::Idle.to_string(), "IDLE");
}
