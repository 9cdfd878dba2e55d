//! Photometric unit conversions built on the BCD engine.
//!
//! Aperture, shutter speed, film speed and EV all live on eighth-stop
//! log2 scales (see [`crate::StopScale`]), which turns the reciprocity law
//! into additions. This module converts between those scales and what a
//! photographer reads and types:
//!
//! - [`iso`]: decimal ISO ratings to and from eighth stops above ISO 6
//! - [`reciprocity`]: solve aperture, shutter speed or ISO from the other
//!   two and an EV
//! - [`format`]: display strings for apertures, shutter speeds, EVs and
//!   illuminance

pub mod format;
pub mod iso;
pub mod reciprocity;
mod tables;

pub use format::{
    aperture_to_string, ev_to_lux_string, ev_to_string, exposure_compensation_to_string,
    shutter_speed_to_string, ApertureString, EvString, LuxString, ShutterSpeedString,
};
pub use iso::{
    full_stop_iso, is_full_stop_iso, iso_to_stops, iso_to_string, parse_iso, IsoDigits,
    IsoString,
};
pub use reciprocity::{aperture_given, iso_given, shutter_speed_given, solve, Solved, Unknown};
