//! # LightSensor Benchmarks
//!
//! Measures the driver overhead on top of the platform calls. The platform
//! is a fixed-level stub so no hardware is touched and nothing is recorded.
//!
//! Run: `cargo bench --bench sensor_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ldr_core::prelude::*;
use ldr_photonic::LightSensor;
use std::convert::Infallible;

#[derive(Debug)]
struct FixedLevel(Level);

impl DigitalIo for FixedLevel {
    type Error = Infallible;

    fn set_pin_mode(&mut self, _pin: PinId, _mode: PinMode) -> Result<(), Infallible> {
        Ok(())
    }

    fn digital_read(&mut self, _pin: PinId) -> Result<Level, Infallible> {
        Ok(self.0)
    }
}

/// Benchmark pin configuration
fn bench_begin(c: &mut Criterion) {
    let mut group = c.benchmark_group("light_sensor_begin");

    group.bench_function("begin_with", |b| {
        let mut io = FixedLevel(Level::High);
        b.iter(|| {
            let mut sensor = LightSensor::new(black_box(5), &mut io);
            sensor.begin_with(black_box(7)).unwrap();
        })
    });

    group.finish();
}

/// Benchmark a single digital read
fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("light_sensor_read");

    group.bench_function("read_status", |b| {
        let mut sensor = LightSensor::new(4, FixedLevel(Level::Low));
        sensor.begin().unwrap();
        b.iter(|| black_box(sensor.read_status().unwrap()))
    });

    group.bench_function("read_light", |b| {
        let mut sensor = LightSensor::new(4, FixedLevel(Level::High));
        sensor.begin().unwrap();
        b.iter(|| black_box(sensor.read_light().unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_begin, bench_read);
criterion_main!(benches);
