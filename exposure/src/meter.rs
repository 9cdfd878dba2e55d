//! Stage selection, averaging and exposure solving.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use exposure_core::photometry::{
    aperture_given, aperture_to_string, ev_to_lux_string, ev_to_string,
    exposure_compensation_to_string, iso_to_stops, iso_to_string, parse_iso,
    shutter_speed_given, shutter_speed_to_string, ApertureString, EvString, IsoString, LuxString,
    ShutterSpeedString, Solved,
};
use exposure_core::sensor::{ev_at_temperature_voltage, is_valid_voltage, AmpStage, VOLTAGE_OFFSET};
use exposure_core::{
    Aperture, Ev, EvWithFracs, IsoStops, PrecisionMode, Priority, ShutterSpeed, StopScale,
};

use crate::config::MeterConfig;
use crate::error::MeterResult;

/// One consistent set of sensor samples.
///
/// `voltages` is indexed by [`AmpStage::index`], least sensitive stage
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorSnapshot {
    /// Raw temperature byte: 0 is -51 °C, each step 0.4 °C.
    pub temperature: u8,
    /// ADC reading of each amplifier stage.
    pub voltages: [u8; AmpStage::COUNT],
}

impl SensorSnapshot {
    /// Reading of one stage.
    pub fn voltage(&self, stage: AmpStage) -> u8 {
        self.voltages[stage.index()]
    }
}

/// Which stages a reading came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageSelection {
    /// Average of the stages whose readings were in range, as a bit set
    /// over [`AmpStage::index`].
    Averaged(u8),
    /// Every stage was out of range and even the most sensitive one read
    /// below its offset.
    TooDark,
    /// Every stage was out of range and the least sensitive one was
    /// saturated.
    Saturated,
}

impl StageSelection {
    /// True if `stage` contributed to the reading.
    pub fn uses(self, stage: AmpStage) -> bool {
        match self {
            StageSelection::Averaged(mask) => mask & (1 << stage.index()) != 0,
            StageSelection::TooDark => stage == AmpStage::X1000,
            StageSelection::Saturated => stage == AmpStage::X1,
        }
    }
}

/// A complete exposure: the fixed quantity from the configuration and the
/// solved one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exposure {
    /// Aperture, fixed or solved.
    pub aperture: Aperture,
    /// Shutter speed, fixed or solved.
    pub shutter_speed: ShutterSpeed,
    /// Film speed the exposure was solved for.
    pub iso: IsoStops,
    /// The quantity that was solved.
    pub solved: Solved,
}

/// Result of one metering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    /// EV at ISO 100 as measured, before compensation.
    pub ev: EvWithFracs,
    /// Compensation that was subtracted before solving.
    pub exposure_compensation: EvWithFracs,
    /// Stages the EV came from.
    pub selection: StageSelection,
    /// Solved exposure, or `None` under [`Priority::None`].
    pub exposure: Option<Exposure>,
    /// Display precision for [`ev_string`](Self::ev_string).
    pub precision: PrecisionMode,
}

impl Reading {
    /// The measured EV at the configured precision.
    pub fn ev_string(&self) -> EvString {
        ev_to_string(self.ev, self.precision)
    }

    /// The compensation, always signed.
    pub fn exposure_compensation_string(&self) -> EvString {
        exposure_compensation_to_string(self.exposure_compensation)
    }

    /// Illuminance of the measured EV.
    pub fn lux_string(&self) -> LuxString {
        ev_to_lux_string(Ev::from_fracs(self.ev))
    }

    /// The exposure's aperture.
    pub fn aperture_string(&self) -> Option<ApertureString> {
        self.exposure.map(|e| aperture_to_string(e.aperture))
    }

    /// The exposure's shutter speed.
    pub fn shutter_speed_string(&self) -> Option<ShutterSpeedString> {
        self.exposure.map(|e| shutter_speed_to_string(e.shutter_speed))
    }

    /// The film speed the exposure was solved for.
    pub fn iso_string(&self) -> Option<IsoString> {
        self.exposure.map(|e| iso_to_string(e.iso))
    }
}

/// A configured light meter.
#[derive(Debug, Clone)]
pub struct Meter {
    config: MeterConfig,
    iso: IsoStops,
}

impl Meter {
    /// Configure a meter. The ISO rating is parsed and converted once.
    pub fn new(config: MeterConfig) -> MeterResult<Self> {
        let iso = iso_to_stops(&parse_iso(&config.iso)?);
        info!(
            priority = ?config.priority,
            iso = %config.iso,
            iso_stops = iso.index(),
            precision = ?config.precision,
            exposure_compensation = config.exposure_compensation,
            "meter configured"
        );
        Ok(Self { config, iso })
    }

    /// Configure a meter from a JSON document.
    pub fn from_json(json: &str) -> MeterResult<Self> {
        Self::new(MeterConfig::from_json(json)?)
    }

    /// The configuration.
    pub fn config(&self) -> &MeterConfig {
        &self.config
    }

    /// The configured film speed.
    pub fn iso(&self) -> IsoStops {
        self.iso
    }

    /// Measured EV at ISO 100 and the stages it came from.
    ///
    /// The EVs of all stages with an in-range reading are averaged. When
    /// there are none, the most sensitive stage is used if it reads below
    /// the offset, otherwise the least sensitive one.
    pub fn measure(&self, snapshot: &SensorSnapshot) -> (EvWithFracs, StageSelection) {
        let mut evs = [EvWithFracs::ZERO; AmpStage::COUNT];
        let mut count = 0;
        let mut mask = 0u8;
        for stage in AmpStage::ALL {
            let voltage = snapshot.voltage(stage);
            let ev = ev_at_temperature_voltage(snapshot.temperature, voltage, stage);
            let valid = is_valid_voltage(voltage);
            trace!(?stage, voltage, ev = ev.index(), valid, "stage reading");
            if valid {
                evs[count] = ev.to_fracs();
                count += 1;
                mask |= 1 << stage.index();
            }
        }

        if let Some(ev) = EvWithFracs::average(&evs[..count]) {
            debug!(stages = count, ev = ev.units(), "averaged stage readings");
            return (ev, StageSelection::Averaged(mask));
        }

        let darkest = AmpStage::X1000;
        let (stage, selection) = if snapshot.voltage(darkest) < VOLTAGE_OFFSET {
            (darkest, StageSelection::TooDark)
        } else {
            (AmpStage::X1, StageSelection::Saturated)
        };
        let ev = ev_at_temperature_voltage(snapshot.temperature, snapshot.voltage(stage), stage);
        warn!(?stage, ?selection, voltages = ?snapshot.voltages, "no stage in range");
        (ev.to_fracs(), selection)
    }

    /// Meter a snapshot and solve the exposure for the configured priority.
    pub fn read(&self, snapshot: &SensorSnapshot) -> Reading {
        let (ev, selection) = self.measure(snapshot);
        let compensation = self.config.compensation();
        let exposure = self.solve(ev - compensation);
        debug!(?selection, ?exposure, "reading");
        Reading {
            ev,
            exposure_compensation: compensation,
            selection,
            exposure,
            precision: self.config.precision,
        }
    }

    fn solve(&self, ev: EvWithFracs) -> Option<Exposure> {
        let iso = self.iso;
        match self.config.priority {
            Priority::None => None,
            Priority::Shutter => {
                let shutter_speed = self.config.fixed_shutter_speed();
                let aperture = aperture_given(shutter_speed, iso, ev);
                Some(Exposure {
                    aperture,
                    shutter_speed,
                    iso,
                    solved: Solved::Aperture(aperture),
                })
            }
            Priority::Aperture => {
                let aperture = self.config.fixed_aperture();
                let shutter_speed = shutter_speed_given(aperture, iso, ev);
                Some(Exposure {
                    aperture,
                    shutter_speed,
                    iso,
                    solved: Solved::ShutterSpeed(shutter_speed),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(voltages: [u8; 4]) -> SensorSnapshot {
        SensorSnapshot {
            temperature: 227,
            voltages,
        }
    }

    #[test]
    fn test_single_valid_stage() {
        let meter = Meter::new(MeterConfig::default()).unwrap();
        let (ev, selection) = meter.measure(&snapshot([45, 255, 255, 255]));
        assert_eq!(ev, EvWithFracs::from_stops(14));
        assert_eq!(selection, StageSelection::Averaged(0b0001));
        assert!(selection.uses(AmpStage::X1));
        assert!(!selection.uses(AmpStage::X10));
    }

    #[test]
    fn test_valid_stages_are_averaged() {
        let meter = Meter::new(MeterConfig::default()).unwrap();
        // X10 reads 113 eighths, X100 reads 112.
        let (ev, selection) = meter.measure(&snapshot([255, 13, 113, 255]));
        assert_eq!(selection, StageSelection::Averaged(0b0110));
        assert_eq!(ev.units(), 1088);
    }

    #[test]
    fn test_fallback_stages() {
        let meter = Meter::new(MeterConfig::default()).unwrap();
        let (ev, selection) = meter.measure(&snapshot([0, 0, 0, 5]));
        assert_eq!(selection, StageSelection::TooDark);
        assert_eq!(ev, Ev::new(62).to_fracs());

        let (ev, selection) = meter.measure(&snapshot([255, 255, 255, 255]));
        assert_eq!(selection, StageSelection::Saturated);
        assert_eq!(ev, Ev::new(171).to_fracs());
    }

    #[test]
    fn test_priority_none_has_no_exposure() {
        let config = MeterConfig {
            priority: Priority::None,
            ..MeterConfig::default()
        };
        let reading = Meter::new(config).unwrap().read(&snapshot([45, 255, 255, 255]));
        assert!(reading.exposure.is_none());
        assert!(reading.aperture_string().is_none());
        assert_eq!(reading.ev_string(), "14");
    }

    #[test]
    fn test_bad_iso_is_rejected() {
        let config = MeterConfig {
            iso: "1OO".to_owned(),
            ..MeterConfig::default()
        };
        assert!(Meter::new(config).is_err());
    }
}
