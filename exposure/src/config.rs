//! Meter configuration.

use serde::{Deserialize, Serialize};

use exposure_core::{Aperture, EvWithFracs, PrecisionMode, Priority, ShutterSpeed, StopScale};

use crate::error::MeterResult;

/// User settings of a meter.
///
/// Every field has a default, so a JSON document only needs the settings
/// it changes:
///
/// ```ignore
/// let config = MeterConfig::from_json(r#"{ "iso": "400", "priority": "aperture" }"#)?;
/// ```
///
/// Aperture and shutter speed are eighth-stop indices (see
/// [`Aperture`] and [`ShutterSpeed`]); indices past the end of a scale
/// clamp to its last value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MeterConfig {
    /// Which quantity is held fixed.
    pub priority: Priority,
    /// Film speed as a decimal rating, e.g. `"100"`.
    pub iso: String,
    /// Display precision of EV strings.
    pub precision: PrecisionMode,
    /// Exposure compensation in signed eighths of a stop.
    pub exposure_compensation: i16,
    /// Fixed aperture for aperture priority.
    pub aperture: u8,
    /// Fixed shutter speed for shutter priority.
    pub shutter_speed: u8,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            priority: Priority::default(),
            iso: "100".to_owned(),
            precision: PrecisionMode::default(),
            exposure_compensation: 0,
            aperture: Aperture::F8.index(),
            shutter_speed: ShutterSpeed::S125TH.index(),
        }
    }
}

impl MeterConfig {
    /// Parse a JSON configuration, filling in defaults.
    pub fn from_json(json: &str) -> MeterResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> MeterResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The fixed aperture, clamped to the scale.
    pub fn fixed_aperture(&self) -> Aperture {
        Aperture::new(self.aperture)
    }

    /// The fixed shutter speed, clamped to the scale.
    pub fn fixed_shutter_speed(&self) -> ShutterSpeed {
        ShutterSpeed::new(self.shutter_speed)
    }

    /// Exposure compensation as a fixed-point stop count.
    pub fn compensation(&self) -> EvWithFracs {
        EvWithFracs::from_eighths(i32::from(self.exposure_compensation))
    }
}
