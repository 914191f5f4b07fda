//! The compact mantissa accumulator (§4.B): up to ~19 significant decimal
//! digits packed into a `u64`, plus the decimal-point exponent that applies
//! to them.
//!
//! This is purely a fast/mid-path eligibility gate: once `truncated` is set
//! the accumulated `mantissa`/`dp_exp` no longer exactly represent the input,
//! and callers must fall back to re-walking the raw digit bytes in the
//! big-number path (§4.E) instead of trusting this struct.

/// Largest value `mantissa` can hold before a further digit would overflow a
/// `u64` multiply-by-ten-and-add, i.e. the threshold the lexer/accumulator
/// tests against before accepting one more digit. `2^63 / 10` rather than
/// `2^64 / 10`: the accumulator only ever needs to hold mantissas the fast
/// and mid paths can consume, both of which require the value to fit in 63
/// bits well before this struct is built, and the tighter bound keeps this
/// gate's `truncated` decision in lockstep with that downstream limit.
const MANTISSA_OVERFLOW_BOUND: u64 = (1u64 << 63) / 10;

/// A decimal mantissa accumulated from digit bytes, with its associated
/// decimal-point exponent.
///
/// Represents the value `(-1)^neg * mantissa * 10^dp_exp`, except when
/// `truncated` is set, in which case `mantissa` has dropped trailing
/// significant digits and is only a lower bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Number {
    pub mantissa: u64,
    pub dp_exp: i32,
    pub neg: bool,
    /// `true` if digits beyond the ~19th were discarded.
    pub truncated: bool,
}

impl Number {
    pub const fn zero(neg: bool) -> Self {
        Self {
            mantissa: 0,
            dp_exp: 0,
            neg,
            truncated: false,
        }
    }

    /// Accumulate the integer-part and fraction-part digit streams.
    ///
    /// `int_digits`/`frac_digits` are ASCII `'0'..='9'`. `exp_literal` is the
    /// already sign/range-saturated (see [`crate::lexer::parse_exponent`])
    /// value of the optional `e`/`E` exponent suffix.
    pub fn from_digits(neg: bool, int_digits: &[u8], frac_digits: &[u8], exp_literal: i32) -> Self {
        let mut mantissa: u64 = 0;
        let mut dp_exp: i32 = 0;
        let mut truncated = false;

        for &b in int_digits {
            let d = (b - b'0') as u64;
            if mantissa < MANTISSA_OVERFLOW_BOUND {
                mantissa = mantissa * 10 + d;
            } else {
                // Dropped leading digit: its place value is still a power of
                // ten the mantissa hasn't absorbed, so the decimal point
                // still moves one place for it, exactly as a dropped
                // fractional digit moves `dp_exp` the other way below.
                truncated = truncated || d != 0;
                dp_exp += 1;
            }
        }

        for &b in frac_digits {
            let d = (b - b'0') as u64;
            dp_exp -= 1;
            if mantissa < MANTISSA_OVERFLOW_BOUND {
                mantissa = mantissa * 10 + d;
            } else {
                truncated = truncated || d != 0;
            }
        }

        Self {
            mantissa,
            dp_exp: dp_exp.saturating_add(exp_literal),
            neg,
            truncated,
        }
    }
}
