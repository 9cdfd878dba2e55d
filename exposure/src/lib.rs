//! Exposure meter front end.
//!
//! This crate turns raw light sensor samples into exposure settings. It
//! picks the amplifier stages whose readings are usable, averages their
//! EVs, applies exposure compensation and solves the reciprocity law for
//! the quantity the photographer left open.
//!
//! # Crate Structure
//!
//! - [`exposure_core`] - BCD arithmetic, photometric conversions and the
//!   sensor tables (`no_std`, no allocation)
//! - `exposure` (this crate) - configuration, stage selection and logging
//!
//! # Example
//!
//! ```ignore
//! use exposure::{Meter, MeterConfig, SensorSnapshot};
//!
//! let meter = Meter::new(MeterConfig::default())?;
//! let reading = meter.read(&SensorSnapshot {
//!     temperature: 227,
//!     voltages: [45, 255, 255, 255],
//! });
//! assert_eq!(reading.ev_string(), "14");
//! assert_eq!(reading.aperture_string().unwrap(), "11");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-export the core modules
pub use exposure_core::bcd;
pub use exposure_core::photometry;
pub use exposure_core::sensor;

// Re-export core types at crate root
pub use exposure_core::{
    limits, Aperture, AsciiBuf, Digits, Error, Ev, EvWithFracs, IsoStops, PrecisionMode,
    Priority, ShutterSpeed, StopScale,
};

mod config;
mod error;
mod meter;

pub use config::MeterConfig;
pub use error::{MeterError, MeterResult};
pub use meter::{Exposure, Meter, Reading, SensorSnapshot, StageSelection};
