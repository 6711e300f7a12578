// SPDX-License-Identifier: Apache-2.0

// Fixed-width integer accumulation for the streaming number readers

mod sealed {
    pub trait Sealed {}
}

/// Signed integer widths the decoder can accumulate JSON digits into.
///
/// Accumulation is a naive multiply-and-add in the target width. Overflow is not
/// detected: values wrap exactly like the type's wrapping arithmetic.
pub trait JsonInt: Copy + sealed::Sealed {
    /// The additive identity.
    const ZERO: Self;

    /// Returns `self * 10 + digit`, wrapping on overflow.
    fn push_digit(self, digit: u8) -> Self;

    /// Returns `-self`, wrapping on overflow.
    fn wrapping_negate(self) -> Self;
}

/// Implements [`JsonInt`] for a list of primitive signed integer types.
macro_rules! define_json_int {
    ($($int_ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $int_ty {}

            impl JsonInt for $int_ty {
                const ZERO: Self = 0;

                #[inline]
                fn push_digit(self, digit: u8) -> Self {
                    self.wrapping_mul(10).wrapping_add(digit as $int_ty)
                }

                #[inline]
                fn wrapping_negate(self) -> Self {
                    self.wrapping_neg()
                }
            }
        )*
    };
}

define_json_int!(i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    fn accumulate<T: JsonInt>(digits: &[u8]) -> T {
        digits
            .iter()
            .fold(T::ZERO, |acc, &d| acc.push_digit(d - b'0'))
    }

    #[test]
    fn test_accumulate_simple() {
        assert_eq!(accumulate::<i8>(b"42"), 42);
        assert_eq!(accumulate::<i16>(b"12345"), 12345);
        assert_eq!(accumulate::<i32>(b"1234567890"), 1234567890);
        assert_eq!(accumulate::<i64>(b"9223372036854775807"), i64::MAX);
    }

    #[test]
    fn test_accumulate_wraps() {
        assert_eq!(accumulate::<i8>(b"128"), i8::MIN);
        assert_eq!(accumulate::<i8>(b"200"), -56);
        assert_eq!(accumulate::<i16>(b"32768"), i16::MIN);
        assert_eq!(accumulate::<i32>(b"4294967296"), 0);
    }

    #[test]
    fn test_negate_min_stays_min() {
        assert_eq!(accumulate::<i8>(b"128").wrapping_negate(), i8::MIN);
        assert_eq!(accumulate::<i64>(b"9223372036854775808").wrapping_negate(), i64::MIN);
        assert_eq!(7i32.wrapping_negate(), -7);
    }
}
