//! Decimal rendering with significant-figure rounding.

use super::Digits;
use crate::limits::MAX_SIGNIFICANT_FIGURES;
use crate::types::AsciiBuf;

impl<const N: usize> Digits<N> {
    /// Render as ASCII with `significant` figures, the last
    /// `decimal_places` digits of the number being the fraction.
    ///
    /// Digits past the cutoff round half up, carrying back through the kept
    /// figures. A number with fewer digits than `significant` is padded with
    /// zeros on the right. Integers longer than `significant` keep their
    /// magnitude with trailing zeros, and pure fractions get a `0.` prefix.
    /// Zero renders as `"0"`.
    ///
    /// ```
    /// use exposure_core::Digits;
    ///
    /// let x = Digits::<8>::from_u64(2_828_427);
    /// assert_eq!(x.to_decimal_string::<8>(4, 6), "2.828");
    /// assert_eq!(x.to_decimal_string::<8>(2, 3), "2800");
    /// assert_eq!(x.to_decimal_string::<8>(3, 9), "0.00283");
    /// ```
    ///
    /// # Panics
    ///
    /// If `significant` is zero or above
    /// [`MAX_SIGNIFICANT_FIGURES`](crate::limits::MAX_SIGNIFICANT_FIGURES),
    /// or the text does not fit in `S` bytes.
    pub fn to_decimal_string<const S: usize>(
        &self,
        significant: usize,
        decimal_places: usize,
    ) -> AsciiBuf<S> {
        assert!(
            (1..=MAX_SIGNIFICANT_FIGURES).contains(&significant),
            "cannot render {significant} significant figures"
        );

        let mut out = AsciiBuf::new();
        if self.is_zero() {
            out.push(b'0');
            return out;
        }

        let digits = self.as_slice();
        let mut kept = [0u8; MAX_SIGNIFICANT_FIGURES];
        let kept = &mut kept[..significant];
        for (i, slot) in kept.iter_mut().enumerate() {
            *slot = digits.get(i).copied().unwrap_or(0);
        }

        // Position of the decimal point relative to the first kept figure.
        let mut int_len = digits.len() as isize - decimal_places as isize;

        if digits.get(significant).is_some_and(|&d| d >= 5) {
            let mut carry = true;
            for slot in kept.iter_mut().rev() {
                if *slot == 9 {
                    *slot = 0;
                } else {
                    *slot += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                // 99..9 rounded up to 100..0: one more integer digit.
                kept[0] = 1;
                int_len += 1;
            }
        }

        if int_len <= 0 {
            out.push_str("0.");
            for _ in 0..-int_len {
                out.push(b'0');
            }
            for &d in kept.iter() {
                out.push_digit(d);
            }
        } else if int_len as usize >= significant {
            for &d in kept.iter() {
                out.push_digit(d);
            }
            for _ in significant..int_len as usize {
                out.push(b'0');
            }
        } else {
            let point = int_len as usize;
            for &d in &kept[..point] {
                out.push_digit(d);
            }
            out.push(b'.');
            for &d in &kept[point..] {
                out.push_digit(d);
            }
        }
        out
    }
}
