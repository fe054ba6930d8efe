//! LDR - Digital light sensor tool
//! Command-line interface for configuring and sampling an LDR comparator pin

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use ldr_core::{LdrConfig, PinId, SysfsGpio};
use ldr_photonic::{LightSensor, LightStatus};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ldr")]
#[command(author = "Silvano Neto <dev@silvanoneto.com>")]
#[command(version = "2026.1.16")]
#[command(about = "LDR - digital light sensor over sysfs GPIO", long_about = None)]
struct Cli {
    /// Platform pin wired to the comparator output [default: LDR_PIN]
    #[arg(short, long, global = true)]
    pin: Option<PinId>,

    /// sysfs GPIO root [default: LDR_GPIO_ROOT]
    #[arg(long, global = true, value_name = "DIR")]
    gpio_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure the pin and take a single reading
    Status,

    /// Configure the pin and print every status change
    Watch {
        /// Poll interval in milliseconds [default: LDR_POLL_INTERVAL_MS]
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Stop after this many samples
        #[arg(short, long)]
        count: Option<u64>,
    },

    /// Print the effective configuration as JSON
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ldr=info,ldr_photonic=info,ldr_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli);

    match cli.command {
        Commands::Status => status(&config),
        Commands::Watch { count, .. } => watch(&config, count),
        Commands::Config => {
            let json = serde_json::to_string_pretty(&config)
                .context("Failed to serialize configuration")?;
            println!("{json}");
            Ok(())
        }
    }
}

/// Flags override `.env` / environment defaults.
///
/// The environment is only read through `ldr_core::config`, so malformed
/// variables fall back to the defaults instead of failing argument parsing.
fn resolve_config(cli: &Cli) -> LdrConfig {
    let mut config = LdrConfig::from_env();
    if let Some(pin) = cli.pin {
        config.pin = pin;
    }
    if let Some(root) = &cli.gpio_root {
        config.gpio_root = root.clone();
    }
    if let Commands::Watch { interval_ms: Some(ms), .. } = cli.command {
        config.poll_interval_ms = ms;
    }
    config
}

fn open_sensor(config: &LdrConfig) -> Result<LightSensor<SysfsGpio>> {
    if !config.has_pin() {
        tracing::warn!(
            "no pin assigned (set --pin or LDR_PIN), using sentinel {}",
            config.pin
        );
    }

    let mut sensor = LightSensor::new(config.pin, SysfsGpio::with_root(&config.gpio_root));
    sensor
        .begin()
        .with_context(|| format!("Failed to configure pin {} as input", config.pin))?;
    tracing::info!(pin = config.pin, root = %config.gpio_root.display(), "light sensor ready");
    Ok(sensor)
}

fn render(status: LightStatus) -> ColoredString {
    match status {
        LightStatus::Triggered => status.to_string().yellow().bold(),
        LightStatus::Idle => status.to_string().dimmed(),
    }
}

fn status(config: &LdrConfig) -> Result<()> {
    let mut sensor = open_sensor(config)?;
    let status = sensor
        .read_light()
        .with_context(|| format!("Failed to read pin {}", config.pin))?;

    println!("{} pin {}: {}", "●".cyan(), config.pin, render(status));
    Ok(())
}

fn watch(config: &LdrConfig, count: Option<u64>) -> Result<()> {
    let mut sensor = open_sensor(config)?;
    let interval = Duration::from_millis(config.poll_interval_ms);
    let mut last = None;
    let mut samples = 0u64;

    loop {
        let status = sensor
            .read_light()
            .with_context(|| format!("Failed to read pin {}", config.pin))?;

        if last != Some(status) {
            println!("{} pin {}: {}", "●".cyan(), config.pin, render(status));
            last = Some(status);
        }

        samples += 1;
        if count.is_some_and(|n| samples >= n) {
            break;
        }
        thread::sleep(interval);
    }

    tracing::debug!(samples, "watch finished");
    Ok(())
}
