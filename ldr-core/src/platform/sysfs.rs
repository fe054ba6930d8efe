//! Backend de GPIO do Linux via sysfs (`/sys/class/gpio`)
//!
//! Layout esperado sob a raiz:
//!
//! ```text
//! <root>/export
//! <root>/gpio<N>/direction   ("in" | "out")
//! <root>/gpio<N>/value       ("0" | "1")
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use tracing::{debug, trace, warn};
use crate::platform::error::{PlatformError, PlatformResult};
use crate::traits::{Component, DigitalIo, Level, PinId, PinMode};

/// Raiz padrão do sysfs GPIO
pub const DEFAULT_GPIO_ROOT: &str = "/sys/class/gpio";

/// Tentativas de esperar o `gpio<N>` aparecer depois do export
pub const EXPORT_SETTLE_ATTEMPTS: u32 = 20;

/// Intervalo entre tentativas (udev cria o diretório de forma assíncrona)
pub const EXPORT_SETTLE_INTERVAL: Duration = Duration::from_millis(10);

/// Plataforma de I/O digital sobre o sysfs do Linux
#[derive(Debug, Clone)]
pub struct SysfsGpio {
    root: PathBuf,
}

impl SysfsGpio {
    /// Usa a raiz padrão (`/sys/class/gpio`)
    pub fn new() -> Self {
        Self::with_root(DEFAULT_GPIO_ROOT)
    }

    /// Usa uma raiz arbitrária (útil para testes e chips montados em outro lugar)
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn pin_dir(&self, pin: PinId) -> PathBuf {
        self.root.join(format!("gpio{pin}"))
    }

    /// Exporta o pino e espera o diretório aparecer.
    ///
    /// Se ele não surgir após [`EXPORT_SETTLE_ATTEMPTS`], segue adiante e a
    /// escrita de `direction` reporta `PlatformError::Io`.
    fn export(&self, pin: PinId) -> PlatformResult<()> {
        let pin_dir = self.pin_dir(pin);
        if pin_dir.exists() {
            return Ok(());
        }
        debug!(pin, root = %self.root.display(), "exporting gpio");
        write_file(&self.root.join("export"), &pin.to_string())?;

        for _ in 0..EXPORT_SETTLE_ATTEMPTS {
            if pin_dir.exists() {
                return Ok(());
            }
            thread::sleep(EXPORT_SETTLE_INTERVAL);
        }
        warn!(pin, "gpio directory did not appear after export");
        Ok(())
    }
}

impl Default for SysfsGpio {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SysfsGpio {
    fn name(&self) -> &str {
        "SysfsGpio"
    }

    fn is_ready(&self) -> bool {
        self.root.is_dir()
    }
}

impl DigitalIo for SysfsGpio {
    type Error = PlatformError;

    fn set_pin_mode(&mut self, pin: PinId, mode: PinMode) -> PlatformResult<()> {
        self.export(pin)?;

        let direction = match mode {
            PinMode::Input => "in",
            PinMode::InputPullup => {
                warn!(pin, "sysfs gpio cannot enable pull-ups, configuring as plain input");
                "in"
            }
            PinMode::Output => "out",
        };

        debug!(pin, %mode, direction, "setting gpio direction");
        write_file(&self.pin_dir(pin).join("direction"), direction)
    }

    fn digital_read(&mut self, pin: PinId) -> PlatformResult<Level> {
        let path = self.pin_dir(pin).join("value");
        let raw = fs::read_to_string(&path).map_err(|source| PlatformError::Io {
            path: path.clone(),
            source,
        })?;

        let level = match raw.trim() {
            "0" => Level::Low,
            "1" => Level::High,
            other => {
                return Err(PlatformError::InvalidValue {
                    pin,
                    value: other.to_string(),
                });
            }
        };

        trace!(pin, %level, "gpio read");
        Ok(level)
    }
}

fn write_file(path: &Path, contents: &str) -> PlatformResult<()> {
    fs::write(path, contents).map_err(|source| PlatformError::Io {
        path: path.to_path_buf(),
        source,
    })
}
