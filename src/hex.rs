//! Component F: the hex-float parser.
//!
//! `0x1.8p1`-style literals carry their binary exponent explicitly, so
//! unlike the decimal grammar there is no power-of-ten approximation
//! anywhere in this path: every hex digit is worth exactly 4 bits, so the
//! mantissa this builds is always an *exact* integer multiple of a power of
//! two, and rounding it to a target width is the same exact
//! round-to-nearest-even bit-truncation [`crate::lemire`] and
//! [`crate::decimal`] both use — no big-number fallback is ever needed here.

use crate::float::{round_and_pack, RawFloat};
use crate::shared;

#[inline]
fn hex_digit_value(b: u8) -> u64 {
    match b {
        b'0'..=b'9' => (b - b'0') as u64,
        b'a'..=b'f' => (b - b'a' + 10) as u64,
        b'A'..=b'F' => (b - b'A' + 10) as u64,
        _ => unreachable!("lexer only emits ASCII hex digits"),
    }
}

/// Accumulate `int_digits`/`frac_digits` into a 64-bit mantissa and the
/// binary exponent `e` such that `value == mantissa * 2^e`, before folding
/// in the literal's own `p`-exponent. `truncated` is set if any nonzero hex
/// digit had to be dropped once the 64-bit mantissa filled up.
fn accumulate(int_digits: &[u8], frac_digits: &[u8]) -> (u64, i32, bool) {
    let mut mantissa: u64 = 0;
    let mut nbits: u32 = 0;
    let mut bit_exp: i32 = 0;
    let mut truncated = false;

    for &b in int_digits {
        let d = hex_digit_value(b);
        if nbits < 64 {
            mantissa = (mantissa << 4) | d;
            nbits += 4;
        } else {
            // A leading digit past our 64-bit capacity is more significant
            // than everything already captured: the whole mantissa is
            // effectively missing 4 low bits it would otherwise have had.
            truncated = truncated || d != 0;
            bit_exp += 4;
        }
    }
    for &b in frac_digits {
        let d = hex_digit_value(b);
        bit_exp -= 4;
        if nbits < 64 {
            mantissa = (mantissa << 4) | d;
            nbits += 4;
        } else {
            truncated = truncated || d != 0;
        }
    }

    (mantissa, bit_exp, truncated)
}

/// Parse a lexed hex-float payload into `F`, correctly rounded.
///
/// Returns `(value, range_error)`. `range_error` is `true` only on overflow
/// (`value` is then `+-Inf`, per spec.md §7 — overflow is always a range
/// error). Underflow to `+-0` and a literal zero mantissa are silent, as
/// spec.md §4.F requires.
pub fn parse_hex<F: RawFloat>(neg: bool, int_digits: &[u8], frac_digits: &[u8], bin_exp: i32) -> (F, bool) {
    let (mantissa, bit_exp, truncated) = accumulate(int_digits, frac_digits);
    if mantissa == 0 {
        return (if neg { -F::zero() } else { F::zero() }, false);
    }
    let total_exp = bit_exp.saturating_add(bin_exp);

    let ctlz = mantissa.leading_zeros();
    let am = mantissa << ctlz;
    // Leading bit of `am` has unbiased exponent `e`: am * 2^(total_exp -
    // ctlz) == mantissa * 2^total_exp, and am is in `[2^63, 2^64)`.
    let e = total_exp
        .saturating_sub(ctlz as i32)
        .saturating_add(63);

    match shared::biased_exponent::<F>(e) {
        None => (if neg { -F::zero() } else { F::zero() }, false),
        Some((shift, biased_exp)) => {
            let (mant, round_up) = shared::round_nearest_tie_even(am, shift, truncated);
            match round_and_pack::<F>(neg, mant, biased_exp, round_up) {
                Some(value) => (value, false),
                None => (if neg { -F::inf() } else { F::inf() }, true),
            }
        }
    }
}
