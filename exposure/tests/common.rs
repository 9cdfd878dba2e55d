//! Common test fixtures: sensor snapshots for known scenes and meter
//! construction with logging.

#![allow(dead_code)]

use std::sync::Once;

use exposure::{Meter, MeterConfig, Priority, SensorSnapshot};

/// Temperature byte for 40 °C, the tables' reference.
pub const ROOM_TEMPERATURE: u8 = 227;

/// Temperature byte for -51 °C.
pub const COLD_TEMPERATURE: u8 = 0;

/// Reading that is saturated on a stage.
pub const SATURATED: u8 = 255;

static TRACING: Once = Once::new();

/// Install a test subscriber once, honouring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Bright daylight: EV 14, only the least sensitive stage in range.
pub fn daylight() -> SensorSnapshot {
    SensorSnapshot {
        temperature: ROOM_TEMPERATURE,
        voltages: [45, SATURATED, SATURATED, SATURATED],
    }
}

/// Overcast: EV 10, only the X10 stage in range.
pub fn overcast() -> SensorSnapshot {
    SensorSnapshot {
        temperature: ROOM_TEMPERATURE,
        voltages: [2, 24, 240, SATURATED],
    }
}

/// Two stages in range, 1/8 stop apart.
pub fn overlapping_stages() -> SensorSnapshot {
    SensorSnapshot {
        temperature: ROOM_TEMPERATURE,
        voltages: [SATURATED, 13, 113, SATURATED],
    }
}

/// No light at all.
pub fn darkness() -> SensorSnapshot {
    SensorSnapshot {
        temperature: ROOM_TEMPERATURE,
        voltages: [0, 0, 0, 0],
    }
}

/// Every stage saturated.
pub fn blinding() -> SensorSnapshot {
    SensorSnapshot {
        temperature: ROOM_TEMPERATURE,
        voltages: [SATURATED; 4],
    }
}

/// A meter with the given priority and ISO, other settings default.
pub fn meter(priority: Priority, iso: &str) -> Meter {
    init_tracing();
    Meter::new(MeterConfig {
        priority,
        iso: iso.to_owned(),
        ..MeterConfig::default()
    })
    .unwrap()
}
