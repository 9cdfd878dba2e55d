//! ISO film speed ratings.
//!
//! Ratings are decimal integers of up to seven digits. The full stops from
//! ISO 6 to ISO 1 600 000 follow the conventional series, which is not an
//! exact doubling: 12, 25, 12500 and 25000 are nominal values. Between full
//! stops the meter works in eighths.

use crate::bcd::{pow2_thousandths, Cmp, Digits, POW2_FRACTION_DIGITS};
use crate::limits::{ISO_STRING_CAPACITY, MAX_ISO_DIGITS};
use crate::types::{AsciiBuf, IsoStops, Result, StopScale};

/// Digits of an ISO rating.
pub type IsoDigits = Digits<MAX_ISO_DIGITS>;

/// Display string of an ISO rating.
pub type IsoString = AsciiBuf<ISO_STRING_CAPACITY>;

/// Full-stop ratings as (leading digits, trailing zeros). The leading digits
/// are packed BCD with the first digit in the high nibble, zero when there
/// is only one.
const FULL_STOP_ISOS: [(u8, u8); 19] = [
    (0x06, 0),
    (0x12, 0),
    (0x25, 0),
    (0x05, 1),
    (0x01, 2),
    (0x02, 2),
    (0x04, 2),
    (0x08, 2),
    (0x16, 2),
    (0x32, 2),
    (0x64, 2),
    // Stored as 12 with three zeros; the rating is 12500.
    (0x12, 3),
    (0x25, 3),
    (0x05, 4),
    (0x01, 5),
    (0x02, 5),
    (0x04, 5),
    (0x08, 5),
    (0x16, 5),
];

const ISO_12500_INDEX: usize = 11;

const ISO_6: Digits<1> = Digits::from_u64(6);
const ISO_25: Digits<2> = Digits::from_u64(25);
const ISO_26: Digits<2> = Digits::from_u64(26);
const ISO_12500: Digits<5> = Digits::from_u64(12_500);
const ISO_12800: Digits<5> = Digits::from_u64(12_800);

/// Eighths below a full stop for zero to three steps of one third.
const THIRDS_IN_EIGHTHS: [i32; 4] = [0, 3, 5, 8];

/// Parse a decimal ISO rating such as `"400"`.
///
/// Leading zeros are ignored; more than seven significant digits is an
/// error.
pub fn parse_iso(text: &str) -> Result<IsoDigits> {
    IsoDigits::parse(text)
}

fn lead_digits(lead: &[u8; 2]) -> &[u8] {
    if lead[0] == 0 {
        &lead[1..]
    } else {
        &lead[..]
    }
}

fn full_stop_digits(index: usize) -> IsoDigits {
    if index == ISO_12500_INDEX {
        return ISO_12500.widen();
    }
    let (lead, zeros) = FULL_STOP_ISOS[index];
    let mut digits = IsoDigits::from_u64(u64::from(lead >> 4) * 10 + u64::from(lead & 0x0F));
    digits.shift_left(usize::from(zeros));
    digits
}

/// The `index`-th full-stop rating: 0 is ISO 6, 4 is ISO 100, 18 is
/// ISO 1 600 000.
pub fn full_stop_iso(index: usize) -> Option<IsoDigits> {
    (index < FULL_STOP_ISOS.len()).then(|| full_stop_digits(index))
}

/// True exactly for the ratings of the full-stop series.
pub fn is_full_stop_iso<const N: usize>(digits: &Digits<N>) -> bool {
    if digits.compare(&ISO_12500, Cmp::Eq) {
        return true;
    }
    let digits = digits.as_slice();
    FULL_STOP_ISOS
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != ISO_12500_INDEX)
        .any(|(_, &(lead, zeros))| {
            let pair = [lead >> 4, lead & 0x0F];
            let lead = lead_digits(&pair);
            digits.len() == lead.len() + usize::from(zeros)
                && digits.starts_with(lead)
                && digits[lead.len()..].iter().all(|&d| d == 0)
        })
}

/// Eighth stops above ISO 6 for a decimal rating.
///
/// Full stops are found by halving down to 6 or below. A rating between
/// full stops is placed by stepping down from the full stop above in thirds
/// of a stop (each step takes a fifth off) and choosing the nearer of the
/// two bracketing candidates, ties going to the higher one. One, two or
/// three thirds below a full stop are 3, 5 and 8 eighths.
///
/// Ratings below 6 give 0 and ratings above 1 600 000 saturate.
pub fn iso_to_stops<const N: usize>(digits: &Digits<N>) -> IsoStops {
    let mut rest = *digits;
    let mut full_stops = 0usize;
    while rest.compare(&ISO_6, Cmp::Gt) {
        // Nominal ratings halve as if they were their exact counterparts.
        if rest.compare(&ISO_25, Cmp::Eq) {
            rest = ISO_26.widen();
        } else if rest.compare(&ISO_12500, Cmp::Eq) {
            rest = ISO_12800.widen();
        }
        rest.div_small(2);
        full_stops += 1;
    }

    if full_stops >= FULL_STOP_ISOS.len() {
        return IsoStops::ISO_1600000;
    }
    let eighths = (full_stops * 8) as i32;
    if is_full_stop_iso(digits) {
        return IsoStops::clamped(eighths);
    }

    let mut candidate = full_stop_digits(full_stops);
    let mut previous = candidate;
    let mut thirds = 0;
    while thirds < 3 && candidate.compare(digits, Cmp::Gt) {
        previous = candidate;
        let mut fifth = candidate;
        fifth.div_small(5);
        candidate.sub(&fifth);
        thirds += 1;
    }
    if thirds > 0 && candidate.compare(digits, Cmp::Le) {
        let mut below: IsoDigits = digits.widen();
        below.sub(&candidate);
        let mut above = previous;
        above.sub(digits);
        if above.compare(&below, Cmp::Le) {
            thirds -= 1;
        }
    }
    IsoStops::clamped(eighths - THIRDS_IN_EIGHTHS[thirds])
}

/// Display string for an eighth-stop film speed.
///
/// Full stops print their nominal rating. Anything in between is the full
/// stop below scaled by 2^(eighths/8), shown to two significant figures.
pub fn iso_to_string(iso: IsoStops) -> IsoString {
    let index = usize::from(iso.index());
    let full = full_stop_digits(index / 8);
    let eighths = (index % 8) as u32;
    if eighths == 0 {
        return full.to_decimal_string(full.digit_count(), 0);
    }
    let scale = pow2_thousandths(eighths * 125);
    scale
        .mul(&full)
        .to_decimal_string(2, POW2_FRACTION_DIGITS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Error;

    fn stops(text: &str) -> u8 {
        iso_to_stops(&parse_iso(text).unwrap()).index()
    }

    #[test]
    fn test_parse_iso() {
        assert_eq!(parse_iso("400").unwrap().to_u64(), Some(400));
        assert_eq!(parse_iso("0100").unwrap().to_u64(), Some(100));
        assert_eq!(
            parse_iso("12345678"),
            Err(Error::TooManyDigits { len: 8, max: 7 })
        );
        assert_eq!(parse_iso("ISO"), Err(Error::InvalidDigit(b'I')));
    }

    #[test]
    fn test_full_stop_series() {
        let expected = [
            6u64, 12, 25, 50, 100, 200, 400, 800, 1600, 3200, 6400, 12_500, 25_000, 50_000,
            100_000, 200_000, 400_000, 800_000, 1_600_000,
        ];
        for (i, &value) in expected.iter().enumerate() {
            let digits = full_stop_iso(i).unwrap();
            assert_eq!(digits.to_u64(), Some(value), "full stop {i}");
            assert!(is_full_stop_iso(&digits), "{value} is a full stop");
            assert_eq!(iso_to_stops(&digits).index() as usize, i * 8);
        }
        assert!(full_stop_iso(expected.len()).is_none());
    }

    #[test]
    fn test_not_full_stops() {
        for value in [0u64, 5, 7, 26, 125, 160, 1000, 12_000, 12_800, 3_200_000] {
            let digits = Digits::<8>::from_u64(value);
            assert!(!is_full_stop_iso(&digits), "{value} is not a full stop");
        }
    }

    #[test]
    fn test_iso_to_stops() {
        let cases = [
            ("0", 0),
            ("5", 0),
            ("6", 0),
            ("8", 3),
            ("10", 5),
            ("12", 8),
            ("16", 11),
            ("20", 13),
            ("25", 16),
            ("32", 19),
            ("40", 21),
            ("50", 24),
            ("64", 27),
            ("80", 29),
            ("100", 32),
            ("125", 35),
            ("160", 37),
            ("200", 40),
            ("250", 43),
            ("320", 45),
            ("400", 48),
            ("500", 51),
            ("640", 53),
            ("800", 56),
            ("1000", 59),
            ("1250", 61),
            ("1600", 64),
            ("3200", 72),
            ("6400", 80),
            ("12500", 88),
            ("16000", 91),
            ("25000", 96),
            ("1600000", 144),
            ("3200000", 144),
        ];
        for (text, expected) in cases {
            assert_eq!(stops(text), expected, "ISO {text}");
        }
    }

    #[test]
    fn test_iso_to_stops_is_monotone() {
        let mut last = 0;
        for value in (1..=4000u64).chain((4000..2_000_000).step_by(997)) {
            let s = iso_to_stops(&Digits::<8>::from_u64(value)).index();
            assert!(s >= last, "ISO {value} gave {s} after {last}");
            last = s;
        }
    }

    #[test]
    fn test_iso_to_string() {
        let cases = [
            (0, "6"),
            (3, "7.8"),
            (5, "9.2"),
            (32, "100"),
            (35, "130"),
            (37, "150"),
            (88, "12500"),
            (91, "16000"),
            (93, "19000"),
            (143, "1500000"),
            (144, "1600000"),
        ];
        for (index, expected) in cases {
            assert_eq!(iso_to_string(IsoStops::new(index)), expected, "stops {index}");
        }
    }
}
