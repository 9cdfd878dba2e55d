//! Core exposure arithmetic for a handheld light meter.
//!
//! This crate provides the pure computational components of the meter:
//! - A fixed-capacity BCD (decimal digit) arithmetic engine
//! - Photometric conversions: ISO ratings, the reciprocity law and the
//!   aperture/shutter/EV display strings
//! - The compressed voltage/temperature to EV lookup tables
//!
//! Everything is `no_std`, allocation free and avoids floating point, so it
//! runs unchanged on a microcontroller without hardware multiply or divide.
//! For stage selection, configuration and logging, use the `exposure` crate.
//!
//! # Example
//!
//! ```ignore
//! use exposure_core::{
//!     photometry::{aperture_given, aperture_to_string, iso_to_stops, parse_iso},
//!     sensor::{ev_at_temperature_voltage, AmpStage},
//!     ShutterSpeed, StopScale,
//! };
//!
//! let iso = iso_to_stops(&parse_iso("100")?);
//! let ev = ev_at_temperature_voltage(227, 45, AmpStage::X1);
//! let aperture = aperture_given(ShutterSpeed::S125TH, iso, ev.to_fracs());
//! assert_eq!(aperture_to_string(aperture), "11");
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(test)]
extern crate std;

pub mod bcd;
pub mod photometry;
pub mod sensor;
mod types;

// Re-export core types
pub use types::{
    Aperture, AsciiBuf, Error, Ev, EvWithFracs, IsoStops, PrecisionMode, Priority, Result,
    ShutterSpeed, StopScale,
};

pub use bcd::{Cmp, Digits, Resize};

/// Capacity and range limits.
pub mod limits {
    /// Largest aperture index (f/32).
    pub const APERTURE_MAX: u8 = 80;

    /// Largest shutter speed index (1/16000 s).
    pub const SHUTTER_SPEED_MAX: u8 = 160;

    /// Largest ISO index (ISO 1 600 000).
    pub const ISO_MAX: u8 = 144;

    /// Largest EV index (EV 26.75).
    pub const EV_MAX: u8 = 254;

    /// Maximum significant digits in an ISO rating.
    pub const MAX_ISO_DIGITS: usize = 7;

    /// Most significant figures [`crate::Digits::to_decimal_string`] can emit.
    pub const MAX_SIGNIFICANT_FIGURES: usize = 32;

    /// Shutter speed string capacity (`"1/8+1/32"`, `"1/16000"`).
    pub const SHUTTER_STRING_CAPACITY: usize = 9;

    /// Aperture string capacity (`"9.5+1/8"`).
    pub const APERTURE_STRING_CAPACITY: usize = 8;

    /// ISO string capacity (`"1600000"`).
    pub const ISO_STRING_CAPACITY: usize = 8;

    /// EV and exposure compensation string capacity (`"-4+7/8"`).
    pub const EV_STRING_CAPACITY: usize = 10;

    /// Illuminance string capacity (`"282000000"`, `"0.0781"`).
    pub const LUX_STRING_CAPACITY: usize = 12;
}
