//! In-place decimal arithmetic on [`Digits`].
//!
//! All routines work digit by digit. Apart from the single-digit partial
//! products in [`Digits::mul_digit`], nothing needs a hardware multiplier or
//! divider: division by a digit is repeated subtraction and the
//! remainder-times-ten step is a table lookup.

use core::cmp::Ordering;

use super::Digits;

/// Comparison performed by [`Digits::compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmp {
    /// `a == b`
    Eq,
    /// `a < b`
    Lt,
    /// `a <= b`
    Le,
    /// `a > b`
    Gt,
    /// `a >= b`
    Ge,
}

impl Cmp {
    fn holds(self, ordering: Ordering) -> bool {
        match self {
            Cmp::Eq => ordering.is_eq(),
            Cmp::Lt => ordering.is_lt(),
            Cmp::Le => ordering.is_le(),
            Cmp::Gt => ordering.is_gt(),
            Cmp::Ge => ordering.is_ge(),
        }
    }
}

/// How an in-place operation changed the number of significant digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resize {
    /// The result has more digits than the left operand had.
    Grew,
    /// Same digit count.
    Unchanged,
    /// Leading zeros were stripped.
    Shrank,
}

impl Resize {
    fn between(before: usize, after: usize) -> Self {
        match after.cmp(&before) {
            Ordering::Greater => Resize::Grew,
            Ordering::Equal => Resize::Unchanged,
            Ordering::Less => Resize::Shrank,
        }
    }
}

/// Compare two digit slices, treating the shorter as left-padded with zeros.
pub(crate) fn compare_digits(a: &[u8], b: &[u8]) -> Ordering {
    let width = a.len().max(b.len());
    let pad_a = width - a.len();
    let pad_b = width - b.len();
    for i in 0..width {
        let da = if i < pad_a { 0 } else { a[i - pad_a] };
        let db = if i < pad_b { 0 } else { b[i - pad_b] };
        if da != db {
            return da.cmp(&db);
        }
    }
    Ordering::Equal
}

/// Add and subtract share one carry loop; subtraction feeds in the nines'
/// complement of the right operand with an initial carry of one.
#[derive(Debug, Clone, Copy)]
enum Operation {
    Add,
    Subtract,
}

impl Operation {
    fn adjust(self, digit: u8) -> u8 {
        match self {
            Operation::Add => digit,
            Operation::Subtract => 9 - digit,
        }
    }

    fn carry_in(self) -> u8 {
        match self {
            Operation::Add => 0,
            Operation::Subtract => 1,
        }
    }
}

/// `TIMES_TEN[r] == 10 * r` for every remainder of a single-digit division.
const TIMES_TEN: [u8; 9] = [0, 10, 20, 30, 40, 50, 60, 70, 80];

impl<const N: usize> Digits<N> {
    /// Compare against a number of any capacity.
    pub fn compare<const M: usize>(&self, other: &Digits<M>, cmp: Cmp) -> bool {
        cmp.holds(compare_digits(self.as_slice(), other.as_slice()))
    }

    /// `self += rhs`.
    ///
    /// # Panics
    ///
    /// If `rhs` has more than `N` digits, or the sum carries out of a
    /// buffer with no slack left.
    pub fn add<const M: usize>(&mut self, rhs: &Digits<M>) -> Resize {
        self.add_or_subtract(rhs, Operation::Add)
    }

    /// `self -= rhs`.
    ///
    /// # Panics
    ///
    /// If `rhs > self`.
    pub fn sub<const M: usize>(&mut self, rhs: &Digits<M>) -> Resize {
        self.add_or_subtract(rhs, Operation::Subtract)
    }

    fn add_or_subtract<const M: usize>(&mut self, rhs: &Digits<M>, op: Operation) -> Resize {
        let before = self.digit_count();
        let width = before.max(rhs.digit_count());
        assert!(
            width <= N,
            "{}-digit operand does not fit in a {N}-digit buffer",
            rhs.digit_count()
        );

        // Zero-extend so both operands span `width` digits.
        let start = N - width;
        self.buf[start..self.start].fill(0);
        self.start = start;

        let mut carry = op.carry_in();
        for i in 0..width {
            let pos = N - 1 - i;
            let mut sum = self.buf[pos] + op.adjust(rhs.digit_from_right(i)) + carry;
            carry = 0;
            if sum >= 10 {
                sum -= 10;
                carry = 1;
            }
            self.buf[pos] = sum;
        }

        match op {
            Operation::Add => {
                if carry == 1 {
                    assert!(self.start > 0, "sum carries out of a full {N}-digit buffer");
                    self.start -= 1;
                    self.buf[self.start] = 1;
                }
            }
            // Without the final carry the complement sum wrapped: rhs > self.
            Operation::Subtract => assert!(carry == 1, "subtrahend is greater than minuend"),
        }

        self.strip_leading_zeros();
        Resize::between(before, self.digit_count())
    }

    /// `self *= digit` for a single digit.
    ///
    /// # Panics
    ///
    /// If `digit > 9`, or the product carries out of a full buffer.
    pub fn mul_digit(&mut self, digit: u8) -> Resize {
        assert!(digit <= 9, "multiplier {digit} is not a single digit");
        let before = self.digit_count();
        if digit == 0 {
            *self = Self::zero();
            return Resize::between(before, 1);
        }

        let mut carry = 0u8;
        for pos in (self.start..N).rev() {
            let product = self.buf[pos] * digit + carry;
            self.buf[pos] = product % 10;
            carry = product / 10;
        }
        if carry > 0 {
            assert!(self.start > 0, "product carries out of a full {N}-digit buffer");
            self.start -= 1;
            self.buf[self.start] = carry;
        }
        self.strip_leading_zeros();
        Resize::between(before, self.digit_count())
    }

    /// Schoolbook long multiplication.
    ///
    /// Each digit of `rhs`, least significant first, yields a single-digit
    /// partial product of `self`, which is shifted into place and added to
    /// the running total.
    ///
    /// # Panics
    ///
    /// If the digit counts of the operands add up to more than `N`.
    pub fn mul<const M: usize>(&self, rhs: &Digits<M>) -> Self {
        assert!(
            self.digit_count() + rhs.digit_count() <= N,
            "{}x{} digit product may not fit in a {N}-digit buffer",
            self.digit_count(),
            rhs.digit_count()
        );

        let mut total = Self::zero();
        for (place, &digit) in rhs.as_slice().iter().rev().enumerate() {
            if digit == 0 {
                continue;
            }
            let mut partial = *self;
            partial.mul_digit(digit);
            partial.shift_left(place);
            total.add(&partial);
        }
        total
    }

    /// Divide in place by a single non-zero digit, returning the remainder.
    ///
    /// # Panics
    ///
    /// If `divisor` is not in `1..=9`.
    pub fn div_small(&mut self, divisor: u8) -> u8 {
        assert!(
            (1..=9).contains(&divisor),
            "divisor {divisor} is not a single non-zero digit"
        );

        let mut remainder = 0u8;
        for pos in self.start..N {
            let mut current = TIMES_TEN[usize::from(remainder)] + self.buf[pos];
            let mut quotient = 0u8;
            while current >= divisor {
                current -= divisor;
                quotient += 1;
            }
            self.buf[pos] = quotient;
            remainder = current;
        }
        self.strip_leading_zeros();
        remainder
    }

    /// Multiply by `10^places` by appending zeros.
    ///
    /// # Panics
    ///
    /// If there is less than `places` digits of slack.
    pub fn shift_left(&mut self, places: usize) {
        if places == 0 || self.is_zero() {
            return;
        }
        assert!(
            places <= self.start,
            "shifting by {places} needs more slack than the {} available",
            self.start
        );
        let new_start = self.start - places;
        self.buf.copy_within(self.start..N, new_start);
        self.buf[N - places..].fill(0);
        self.start = new_start;
    }

    /// Divide by `10^places`, discarding the dropped digits.
    pub fn shift_right(&mut self, places: usize) {
        if places == 0 {
            return;
        }
        if places >= self.digit_count() {
            *self = Self::zero();
            return;
        }
        self.buf.copy_within(self.start..N - places, self.start + places);
        self.start += places;
    }
}
