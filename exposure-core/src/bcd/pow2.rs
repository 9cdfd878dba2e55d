//! Fixed-point 2^x by greedy decomposition of the exponent.
//!
//! The exponent is split into a sum of menu components (30, 10, 4, 1, 0.5,
//! 0.1, 0.05, 0.01), largest first, and the result is the product of the
//! precomputed powers of two of the chosen components. Every intermediate
//! product is rounded back to [`POW2_FRACTION_DIGITS`] fractional digits,
//! so the digit count stays bounded. Exponents are given in thousandths.
//!
//! Reference values: 2^1 = 2.000, 2^1.5 = 2.828, 2^1.61 = 3.053,
//! 2^15.61 = 50017.687.

use super::{Cmp, Digits};

/// Fractional digits of [`pow2`] results.
pub const POW2_FRACTION_DIGITS: usize = 3;

/// Result buffer of [`pow2`]: wide enough for 2^60 with three fractional
/// digits and one extra multiply in flight.
pub type Pow2Digits = Digits<32>;

/// Exponent digits: thousandths below 60.
type ExponentDigits = Digits<5>;

/// Component values: digits of 2^x times 1000.
type ComponentDigits = Digits<13>;

struct Component {
    /// Exponent in thousandths.
    exponent: ExponentDigits,
    /// 2^exponent, rounded to three fractional digits.
    value: ComponentDigits,
}

const COMPONENTS: [Component; 8] = [
    Component {
        exponent: Digits::from_u64(30_000),
        value: Digits::from_u64(1_073_741_824_000),
    },
    Component {
        exponent: Digits::from_u64(10_000),
        value: Digits::from_u64(1_024_000),
    },
    Component {
        exponent: Digits::from_u64(4_000),
        value: Digits::from_u64(16_000),
    },
    Component {
        exponent: Digits::from_u64(1_000),
        value: Digits::from_u64(2_000),
    },
    Component {
        exponent: Digits::from_u64(500),
        value: Digits::from_u64(1_414),
    },
    Component {
        exponent: Digits::from_u64(100),
        value: Digits::from_u64(1_072),
    },
    Component {
        exponent: Digits::from_u64(50),
        value: Digits::from_u64(1_035),
    },
    Component {
        exponent: Digits::from_u64(10),
        value: Digits::from_u64(1_007),
    },
];

/// Exclusive upper bound on the exponent (60.000).
const EXPONENT_LIMIT: ExponentDigits = Digits::from_u64(60_000);

/// Half of one unit in the last fractional place of a product.
const ROUNDING_HALF: Digits<4> = Digits::from_u64(500);

/// Approximate 2^x for `x` given in thousandths.
///
/// The result carries [`POW2_FRACTION_DIGITS`] implied fractional digits.
/// Whatever is left of the exponent below 0.010 is ignored, so exponents
/// under 0.010 give zero.
///
/// # Panics
///
/// If the exponent is 60.000 or more.
pub fn pow2<const E: usize>(exponent: &Digits<E>) -> Pow2Digits {
    assert!(
        exponent.compare(&EXPONENT_LIMIT, Cmp::Lt),
        "exponent {exponent} thousandths is too large"
    );

    let mut remaining: ExponentDigits = exponent.widen();
    let mut result: Option<Pow2Digits> = None;
    for component in &COMPONENTS {
        while remaining.compare(&component.exponent, Cmp::Ge) {
            remaining.sub(&component.exponent);
            result = Some(match result {
                // First pick initializes instead of multiplying by one.
                None => component.value.widen(),
                Some(acc) => {
                    let mut product = acc.mul(&component.value);
                    product.add(&ROUNDING_HALF);
                    product.shift_right(POW2_FRACTION_DIGITS);
                    product
                }
            });
        }
    }
    result.unwrap_or_default()
}

/// [`pow2`] for a binary exponent in thousandths.
pub fn pow2_thousandths(exponent: u32) -> Pow2Digits {
    pow2(&Digits::<10>::from_u64(u64::from(exponent)))
}
