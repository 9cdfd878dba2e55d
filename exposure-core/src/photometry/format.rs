//! Display strings for the meter's quantities.
//!
//! All strings are built into fixed-capacity [`AsciiBuf`]s sized for the
//! longest value each scale can produce.

use super::tables::{
    APERTURES, APERTURE_SYMBOLS, SHUTTER_SPEEDS, SHUTTER_SPEED_SYMBOLS,
    SHUTTER_SPEED_SYMBOL_COUNT,
};
use crate::bcd::{pow2_thousandths, Digits, POW2_FRACTION_DIGITS};
use crate::limits::{
    APERTURE_STRING_CAPACITY, EV_STRING_CAPACITY, LUX_STRING_CAPACITY, SHUTTER_STRING_CAPACITY,
};
use crate::types::{
    Aperture, AsciiBuf, Ev, EvWithFracs, PrecisionMode, ShutterSpeed, StopScale,
};

/// Display string of an aperture, e.g. `"5.6"` or `"11+1/8"`.
pub type ApertureString = AsciiBuf<APERTURE_STRING_CAPACITY>;

/// Display string of a shutter speed, e.g. `"1/125"` or `"8S-1/4"`.
pub type ShutterSpeedString = AsciiBuf<SHUTTER_STRING_CAPACITY>;

/// Display string of an EV or exposure compensation, e.g. `"12+3/8"`.
pub type EvString = AsciiBuf<EV_STRING_CAPACITY>;

/// Display string of an illuminance in lux, e.g. `"2560"`.
pub type LuxString = AsciiBuf<LUX_STRING_CAPACITY>;

/// Largest aperture index drawn with a decimal point (f/9.5 + 1/8).
const LAST_DECIMAL_APERTURE: u8 = 53;

/// Slowest speed drawn without a fraction that gets an `S` for seconds.
const LAST_WHOLE_SECONDS: u8 = 51;

/// 2.5 lux at EV 0 is 2^(8/8) times this, in units of 10^-7.
const LUX_FACTOR: Digits<6> = Digits::from_u64(390_625);
const LUX_FACTOR_DECIMALS: usize = 7;

fn shutter_nibble(pos: usize) -> u8 {
    let byte = SHUTTER_SPEEDS[pos >> 1];
    (byte >> ((pos & 1) * 4)) & 0x0F
}

/// Format a shutter speed.
///
/// Speeds of a second or longer end in `S` (or `M` for one minute); shorter
/// ones are fractions such as `"1/250"`. Speeds between table steps are
/// written as a nominal value plus or minus a fraction: `"8S-1/4"`,
/// `"1/4+1/8"`.
pub fn shutter_speed_to_string(speed: ShutterSpeed) -> ShutterSpeedString {
    let index = speed.index();
    let first = usize::from(index) * SHUTTER_SPEED_SYMBOL_COUNT;

    let mut out = ShutterSpeedString::new();
    let mut seen_slash = false;
    let mut previous = None;
    for pos in first..first + SHUTTER_SPEED_SYMBOL_COUNT {
        let symbol = SHUTTER_SPEED_SYMBOLS[usize::from(shutter_nibble(pos))];
        match symbol {
            0 => break,
            b'+' | b'-' => {
                if !seen_slash {
                    out.push(b'S');
                }
                out.push(symbol);
            }
            b'/' => {
                if matches!(previous, None | Some(b'+') | Some(b'-')) {
                    out.push(b'1');
                }
                out.push(b'/');
                seen_slash = true;
            }
            b'A' => out.push_str("16"),
            b'B' => out.push_str("32"),
            digit => out.push(digit),
        }
        previous = Some(symbol);
    }

    if index >= ShutterSpeed::THOUSANDTH.index() {
        out.push(b'0');
    }
    if index >= ShutterSpeed::TEN_THOUSANDTH.index() {
        out.push(b'0');
    }
    if index == ShutterSpeed::ONE_MINUTE.index() {
        out.push(b'M');
    } else if index <= LAST_WHOLE_SECONDS && !seen_slash {
        out.push(b'S');
    }
    out
}

/// Format an aperture as its f-number.
///
/// The table holds quarter stops; an odd eighth-stop index is the quarter
/// below with `+1/8` appended.
pub fn aperture_to_string(aperture: Aperture) -> ApertureString {
    let index = aperture.index();
    let packed = APERTURES[usize::from(index >> 1)];
    let first = APERTURE_SYMBOLS[usize::from(packed & 0x0F)];
    let second = APERTURE_SYMBOLS[usize::from(packed >> 4)];

    let mut out = ApertureString::new();
    out.push(first);
    if second != 0 {
        if index <= LAST_DECIMAL_APERTURE {
            out.push(b'.');
        }
        out.push(second);
    }
    if index & 1 == 1 {
        out.push_str("+1/8");
    }
    out
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Whole stops and the fraction of a non-negative unit count. A fraction
/// under one stop drops the whole part: `"3/8"`, not `"0+3/8"`.
fn push_stops<const N: usize>(out: &mut AsciiBuf<N>, units: u32, mode: PrecisionMode) {
    let per_stop = EvWithFracs::UNITS_PER_STOP as u32;
    let wholes = units / per_stop;
    let fraction = units % per_stop;
    match mode {
        _ if fraction == 0 => out.push_u32(wholes),
        PrecisionMode::Tenth => {
            out.push_u32(wholes);
            out.push(b'.');
            out.push_u32(fraction / EvWithFracs::UNITS_PER_TENTH as u32);
        }
        _ => {
            let common = gcd(fraction, per_stop);
            if wholes != 0 {
                out.push_u32(wholes);
                out.push(b'+');
            }
            out.push_u32(fraction / common);
            out.push(b'/');
            out.push_u32(per_stop / common);
        }
    }
}

/// Format an EV at the given precision.
///
/// The value is first rounded to the nearest step of `mode`. Fractions are
/// written as `whole+n/d` in lowest terms, or as one decimal in tenth mode.
/// Negative values carry the sign on the whole expression: `"-1+1/2"` is
/// EV -1.5.
pub fn ev_to_string(ev: EvWithFracs, mode: PrecisionMode) -> EvString {
    let rounded = ev.round_to(mode).units();
    let mut out = EvString::new();
    if rounded < 0 {
        out.push(b'-');
    }
    push_stops(&mut out, rounded.unsigned_abs(), mode);
    out
}

/// Format an exposure compensation in eighths: like [`ev_to_string`] but
/// always signed, so zero is `"+0"`.
pub fn exposure_compensation_to_string(compensation: EvWithFracs) -> EvString {
    let rounded = compensation.round_to(PrecisionMode::Eighth).units();
    let mut out = EvString::new();
    out.push(if rounded < 0 { b'-' } else { b'+' });
    push_stops(&mut out, rounded.unsigned_abs(), PrecisionMode::Eighth);
    out
}

/// Illuminance in lux for a table EV, to three significant figures.
///
/// Uses 2.5 lux at EV 0 and ISO 100.
pub fn ev_to_lux_string(ev: Ev) -> LuxString {
    let scale = pow2_thousandths((u32::from(ev.index()) + 8) * 125);
    scale
        .mul(&LUX_FACTOR)
        .to_decimal_string(3, POW2_FRACTION_DIGITS + LUX_FACTOR_DECIMALS)
}
