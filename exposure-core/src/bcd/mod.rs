//! Fixed-capacity BCD (binary-coded decimal) numbers.
//!
//! A [`Digits<N>`] keeps up to `N` decimal digits right-aligned in a
//! `[u8; N]`, one digit value (`0..=9`) per byte, most significant first.
//! The logical number starts at an index into the buffer; the unused bytes
//! in front of it are slack that in-place operations grow into when they
//! carry out. Leading zeros are always stripped, so zero is the single digit
//! `0`.
//!
//! Buffers are sized at the call site for the largest possible result.
//! Running out of slack is a sizing bug, not a data condition, and panics.
//!
//! - [`arith`]: compare, add, subtract, multiply, divide by a digit
//! - [`pow2`]: greedy fixed-point 2^x
//! - [`render`]: rounding to significant figures and ASCII output

use core::cmp::Ordering;
use core::fmt;

use crate::types::{Error, Result};

pub mod arith;
pub mod pow2;
pub mod render;

pub use arith::{Cmp, Resize};
pub use pow2::{pow2, pow2_thousandths, Pow2Digits, POW2_FRACTION_DIGITS};

/// A non-negative decimal integer of at most `N` digits.
#[derive(Clone, Copy)]
pub struct Digits<const N: usize> {
    buf: [u8; N],
    start: usize,
}

impl<const N: usize> Digits<N> {
    const NON_EMPTY: () = assert!(N > 0, "a digit buffer needs at least one digit");

    /// Total capacity, slack included.
    pub const CAPACITY: usize = N;

    /// The number zero.
    pub const fn zero() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self {
            buf: [0; N],
            start: N - 1,
        }
    }

    /// Convert a binary integer.
    ///
    /// # Panics
    ///
    /// If `value` has more than `N` digits.
    pub const fn from_u64(value: u64) -> Self {
        let mut digits = Self::zero();
        let mut rest = value;
        let mut i = N;
        loop {
            assert!(i > 0, "value does not fit in the digit buffer");
            i -= 1;
            digits.buf[i] = (rest % 10) as u8;
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        digits.start = i;
        digits
    }

    /// Build from digit values (`0..=9`), most significant first.
    ///
    /// Leading zeros are dropped before the capacity check.
    pub fn from_digits(digits: &[u8]) -> Result<Self> {
        if digits.is_empty() {
            return Err(Error::Empty);
        }
        if let Some(&bad) = digits.iter().find(|&&d| d > 9) {
            return Err(Error::InvalidDigit(bad));
        }
        let first = digits
            .iter()
            .position(|&d| d != 0)
            .unwrap_or(digits.len() - 1);
        let significant = &digits[first..];
        if significant.len() > N {
            return Err(Error::TooManyDigits {
                len: significant.len(),
                max: N,
            });
        }

        let mut out = Self::zero();
        out.start = N - significant.len();
        out.buf[out.start..].copy_from_slice(significant);
        Ok(out)
    }

    /// Parse ASCII decimal text such as `"1600"`.
    pub fn parse(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        if bytes.is_empty() {
            return Err(Error::Empty);
        }
        if let Some(&bad) = bytes.iter().find(|b| !b.is_ascii_digit()) {
            return Err(Error::InvalidDigit(bad));
        }
        let first = bytes
            .iter()
            .position(|&b| b != b'0')
            .unwrap_or(bytes.len() - 1);
        let significant = &bytes[first..];
        if significant.len() > N {
            return Err(Error::TooManyDigits {
                len: significant.len(),
                max: N,
            });
        }

        let mut out = Self::zero();
        out.start = N - significant.len();
        for (slot, &b) in out.buf[out.start..].iter_mut().zip(significant) {
            *slot = b - b'0';
        }
        Ok(out)
    }

    /// Copy into a buffer of a different capacity.
    ///
    /// # Panics
    ///
    /// If the number has more than `M` digits.
    pub fn widen<const M: usize>(&self) -> Digits<M> {
        let digits = self.as_slice();
        assert!(
            digits.len() <= M,
            "{} digits do not fit in a {M}-digit buffer",
            digits.len()
        );
        let mut out = Digits::<M>::zero();
        out.start = M - digits.len();
        out.buf[out.start..].copy_from_slice(digits);
        out
    }

    /// Significant digits, most significant first.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[self.start..]
    }

    /// Number of significant digits (1 for zero).
    pub fn digit_count(&self) -> usize {
        N - self.start
    }

    /// Free digits in front of the number.
    pub fn slack(&self) -> usize {
        self.start
    }

    /// True for zero.
    pub fn is_zero(&self) -> bool {
        self.digit_count() == 1 && self.buf[N - 1] == 0
    }

    /// Convert back to binary, or `None` if the value exceeds `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        self.as_slice().iter().try_fold(0u64, |acc, &d| {
            acc.checked_mul(10)?.checked_add(u64::from(d))
        })
    }

    /// Digit `i` places from the right, zero beyond the most significant.
    fn digit_from_right(&self, i: usize) -> u8 {
        if i < self.digit_count() {
            self.buf[N - 1 - i]
        } else {
            0
        }
    }

    /// Advance the start past leading zeros, keeping at least one digit.
    fn strip_leading_zeros(&mut self) {
        while self.start < N - 1 && self.buf[self.start] == 0 {
            self.start += 1;
        }
    }
}

impl<const N: usize> Default for Digits<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> PartialEq for Digits<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> Eq for Digits<N> {}

impl<const N: usize> PartialOrd for Digits<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Ord for Digits<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        arith::compare_digits(self.as_slice(), other.as_slice())
    }
}

impl<const N: usize> fmt::Display for Digits<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in self.as_slice() {
            fmt::Write::write_char(f, char::from(b'0' + d))?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Digits<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digits({self})")
    }
}
