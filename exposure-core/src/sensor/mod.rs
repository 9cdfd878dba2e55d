//! Sensor voltage and temperature to EV.
//!
//! The photodiode current is amplified by one of four feedback stages a
//! decade apart, and the ADC reads each stage's output as a byte of the
//! reference voltage. Every stage has its own table mapping readings to EV
//! in eighths at ISO 100.
//!
//! A full table would be 244 bytes per stage. EV grows by at most a couple
//! of eighths per sixteen readings, so each table keeps one absolute value
//! per block of sixteen readings plus the increments inside the block as
//! the set bits of two 8-bit patterns. Many blocks share patterns, and the
//! sixteen distinct patterns per stage fit in a nibble pair per block.

mod tables;

use crate::types::{Ev, StopScale};

/// Readings below this are the amplifier's offset and carry no light.
pub const VOLTAGE_OFFSET: u8 = 12;

/// Highest reading that is not saturated.
pub const MAX_VALID_VOLTAGE: u8 = 219;

/// Number of voltage readings per block.
const BLOCK_SIZE: u8 = 16;

/// Eighths added to the table EV per block of sixteen temperature steps.
///
/// The light current of the photodiode rises by about 0.1 % per kelvin,
/// referenced to 40 °C. Below 0 °C the sensor reads an eighth low.
const TEMP_EV_ADJUST: [i8; 16] = [1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0];

/// One stage's compressed voltage-to-EV table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvTable {
    /// EV at the first reading of each block.
    pub abs: [u8; 16],
    /// Per block, the indices of its two bit patterns (high nibble first).
    pub diffs: [u8; 16],
    /// Increment patterns. Bit `7 - k` of the first pattern, then of the
    /// second, is set when reading `k + 1` of the block is one eighth
    /// above reading `k`.
    pub bit_patterns: [u8; 16],
}

impl EvTable {
    /// EV index for an ADC reading, without temperature adjustment.
    ///
    /// Readings below [`VOLTAGE_OFFSET`] give the first table value.
    pub fn lookup(&self, voltage: u8) -> u8 {
        let reading = voltage.saturating_sub(VOLTAGE_OFFSET);
        let block = usize::from(reading / BLOCK_SIZE);
        let bits = u32::from(reading % BLOCK_SIZE) + 1;

        let pair = self.diffs[block];
        let mut first = self.bit_patterns[usize::from(pair >> 4)];
        let mut second = self.bit_patterns[usize::from(pair & 0x0F)];
        if bits < 8 {
            first &= (0xFFu32 << (8 - bits)) as u8;
        }
        if bits < 16 {
            second &= (0xFFu32 << (16 - bits)) as u8;
        }
        self.abs[block] + (first.count_ones() + second.count_ones()) as u8
    }
}

/// Amplifier feedback stage, least sensitive first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AmpStage {
    /// 0.22 kΩ feedback, for bright light.
    X1,
    /// 2.2 kΩ feedback.
    X10,
    /// 22 kΩ feedback.
    X100,
    /// 220 kΩ feedback, for dim light.
    X1000,
}

impl AmpStage {
    /// Number of stages.
    pub const COUNT: usize = 4;

    /// All stages, least sensitive first.
    pub const ALL: [AmpStage; Self::COUNT] =
        [AmpStage::X1, AmpStage::X10, AmpStage::X100, AmpStage::X1000];

    /// Position in [`ALL`](Self::ALL).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Feedback resistance in ohms.
    pub const fn resistance_ohms(self) -> u32 {
        match self {
            AmpStage::X1 => 220,
            AmpStage::X10 => 2_200,
            AmpStage::X100 => 22_000,
            AmpStage::X1000 => 220_000,
        }
    }

    /// The stage's EV table.
    pub const fn table(self) -> &'static EvTable {
        match self {
            AmpStage::X1 => &tables::EV_TABLE_X1,
            AmpStage::X10 => &tables::EV_TABLE_X10,
            AmpStage::X100 => &tables::EV_TABLE_X100,
            AmpStage::X1000 => &tables::EV_TABLE_X1000,
        }
    }
}

/// True when `voltage` is neither in the offset nor saturated.
pub fn is_valid_voltage(voltage: u8) -> bool {
    (VOLTAGE_OFFSET..=MAX_VALID_VOLTAGE).contains(&voltage)
}

/// EV at ISO 100 for a reading on `stage` at a sensor temperature.
///
/// `temperature` is the raw sensor byte: 0 is -51 °C, each step 0.4 °C.
pub fn ev_at_temperature_voltage(temperature: u8, voltage: u8, stage: AmpStage) -> Ev {
    let base = i32::from(stage.table().lookup(voltage));
    let adjust = i32::from(TEMP_EV_ADJUST[usize::from(temperature >> 4)]);
    Ev::clamped(base + adjust)
}
