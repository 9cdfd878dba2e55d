//! Example: Meter a few sensor snapshots and print the exposures.
//!
//! Pass a JSON configuration as the first argument to change the settings,
//! and set `RUST_LOG=exposure=trace` to see the stage selection.
//!
//! Run with: cargo run -p exposure --example meter_reading -- '{"iso": "400"}'

use exposure::{Meter, MeterConfig, SensorSnapshot};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(json) => MeterConfig::from_json(&json)?,
        None => MeterConfig::default(),
    };
    println!("Exposure Meter Example");
    println!("======================");
    println!("{}", config.to_json()?);

    let meter = Meter::new(config)?;
    let scenes = [
        ("bright daylight", [45, 255, 255, 255]),
        ("overcast", [2, 24, 240, 255]),
        ("indoors", [0, 5, 60, 230]),
        ("night", [0, 0, 0, 3]),
    ];

    for (name, voltages) in scenes {
        let reading = meter.read(&SensorSnapshot {
            temperature: 227,
            voltages,
        });
        print!(
            "{name:>16}: EV {:<8} {:>10} lux",
            reading.ev_string(),
            reading.lux_string()
        );
        if let (Some(aperture), Some(shutter_speed)) =
            (reading.aperture_string(), reading.shutter_speed_string())
        {
            print!("  f/{aperture} at {shutter_speed}");
        }
        println!();
    }

    Ok(())
}
