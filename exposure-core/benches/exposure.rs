//! Benchmarks for the BCD engine and the meter conversions.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use exposure_core::{
    bcd::pow2_thousandths,
    photometry::{
        aperture_given, aperture_to_string, ev_to_lux_string, iso_to_stops, iso_to_string,
        parse_iso, shutter_speed_to_string,
    },
    sensor::{ev_at_temperature_voltage, AmpStage},
    Aperture, Digits, Ev, EvWithFracs, IsoStops, ShutterSpeed, StopScale,
};

fn bench_bcd(c: &mut Criterion) {
    let mut group = c.benchmark_group("bcd");

    for digits in [4u32, 8, 12] {
        let a = Digits::<32>::from_u64(10u64.pow(digits) - 7);
        let b = Digits::<16>::from_u64(10u64.pow(digits) / 3);

        group.bench_with_input(BenchmarkId::new("add", digits), &digits, |bench, _| {
            bench.iter(|| {
                let mut sum = black_box(a);
                sum.add(black_box(&b));
                sum
            });
        });

        group.bench_with_input(BenchmarkId::new("mul", digits), &digits, |bench, _| {
            bench.iter(|| black_box(a).mul(black_box(&b)));
        });
    }

    for exponent in [1_500u32, 15_610, 59_999] {
        group.bench_with_input(
            BenchmarkId::new("pow2", exponent),
            &exponent,
            |bench, &exponent| {
                bench.iter(|| pow2_thousandths(black_box(exponent)));
            },
        );
    }

    group.finish();
}

fn bench_photometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("photometry");

    for text in ["100", "160", "3200000"] {
        group.bench_with_input(BenchmarkId::new("iso_to_stops", text), text, |b, text| {
            b.iter(|| iso_to_stops(&parse_iso(black_box(text)).unwrap()));
        });
    }

    group.throughput(Throughput::Elements(u64::from(IsoStops::MAX) + 1));
    group.bench_function("iso_to_string/all", |b| {
        b.iter(|| {
            for i in 0..=IsoStops::MAX {
                black_box(iso_to_string(IsoStops::new(i)));
            }
        });
    });

    group.throughput(Throughput::Elements(u64::from(ShutterSpeed::MAX) + 1));
    group.bench_function("shutter_speed_to_string/all", |b| {
        b.iter(|| {
            for i in 0..=ShutterSpeed::MAX {
                black_box(shutter_speed_to_string(ShutterSpeed::new(i)));
            }
        });
    });

    group.throughput(Throughput::Elements(u64::from(Aperture::MAX) + 1));
    group.bench_function("aperture_to_string/all", |b| {
        b.iter(|| {
            for i in 0..=Aperture::MAX {
                black_box(aperture_to_string(Aperture::new(i)));
            }
        });
    });

    group.throughput(Throughput::Elements(1));
    group.bench_function("ev_to_lux_string", |b| {
        b.iter(|| ev_to_lux_string(black_box(Ev::new(200))));
    });

    group.bench_function("aperture_given", |b| {
        b.iter(|| {
            aperture_given(
                black_box(ShutterSpeed::S125TH),
                black_box(IsoStops::ISO_100),
                black_box(EvWithFracs::from_stops(14)),
            )
        });
    });

    group.finish();
}

fn bench_sensor(c: &mut Criterion) {
    let mut group = c.benchmark_group("sensor");
    group.throughput(Throughput::Elements(256));

    for stage in AmpStage::ALL {
        group.bench_with_input(
            BenchmarkId::new("lookup", format!("{stage:?}")),
            &stage,
            |b, &stage| {
                b.iter(|| {
                    for voltage in 0..=u8::MAX {
                        black_box(ev_at_temperature_voltage(black_box(227), voltage, stage));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_bcd, bench_photometry, bench_sensor);
criterion_main!(benches);
