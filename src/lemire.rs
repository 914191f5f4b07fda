//! Component D: the extended-precision mid path.
//!
//! Eisel-Lemire-style: widen the compact mantissa (component B) to 64 bits,
//! multiply by an on-demand dual-word approximation of the matching power
//! of ten ([`crate::table::pow10_extended_wide`]), and check whether the
//! product lands far enough from a rounding boundary that the
//! approximation's own error can't have flipped the answer. When it can't,
//! this returns `None` and the caller falls back to the big-number path
//! (component E), which is always correct; this path exists purely so that
//! fallback is rare.
//!
//! A single 64-bit word of table precision is not enough to make this check
//! safe: the missing low bits of a one-word approximation can carry up to a
//! full word of error into the product once multiplied against a 64-bit
//! mantissa, large enough to flip a correctly-rounded answer regardless of
//! how wide a margin is checked on the low word alone (this is exactly the
//! failure mode the dual-word table in every real Eisel-Lemire
//! implementation, e.g. the `lemire.rs` this module is ported from, exists
//! to close). This module always computes the full 128x128-bit product
//! against both table words, then — only when the table or the mantissa
//! itself was not known to be exact — checks that a worst-case single-ULP
//! carry from the truncated remainder could not have changed the rounding
//! decision, by recomputing it with that carry applied and comparing.

use crate::float::{round_and_pack, RawFloat};
use crate::limits::{MID_PATH_MAX_EXPONENT, MID_PATH_MIN_EXPONENT};
use crate::number::Number;
use crate::shared;
use crate::table::pow10_extended_wide;

/// Attempt the mid path for `number`, returning the correctly-rounded
/// (signed) result, or `None` if the result can't be trusted without
/// confirming against the big-number path.
pub fn lemire_path<F: RawFloat>(number: &Number) -> Option<F> {
    if number.mantissa == 0 {
        return Some(if number.neg { -F::zero() } else { F::zero() });
    }
    if number.dp_exp < MID_PATH_MIN_EXPONENT || number.dp_exp > MID_PATH_MAX_EXPONENT {
        return None;
    }

    let ctlz = number.mantissa.leading_zeros();
    let am = number.mantissa << ctlz;

    let (pm_hi, pm_lo, pexp, pm_exact) = pow10_extended_wide(number.dp_exp);

    // Full product of `am` (64 bits) against the table's 128-bit
    // approximation of `10^dp_exp`, folded into a single 128-bit `prod`
    // holding the top 128 bits of the 192-bit result: `am * pm_hi`
    // occupies the top 128 bits on its own, and `am * pm_lo` contributes
    // starting 64 bits lower, merged in via its own top word (`cross >>
    // 64`). The addition below can never overflow a `u128`: `am * pm_hi`
    // is a product of two 64-bit values and so is strictly less than
    // `2^128 - 2^64` once normalized (see the renormalization step right
    // after), leaving more than enough headroom for the `< 2^64` term
    // being added.
    let hi_lo: u128 = (am as u128) * (pm_hi as u128);
    let cross: u128 = (am as u128) * (pm_lo as u128);
    let mut prod = hi_lo.wrapping_add(cross >> 64);

    // value ~= am * (pm_hi:pm_lo) * 2^(pexp - 127 - ctlz); `prod` (the top
    // 128 bits of that product) therefore has unbiased weight
    // `pexp + 1 - ctlz` at its own top bit once normalized below.
    let mut binexp = pexp - ctlz as i32 + 1;
    if prod & (1u128 << 127) == 0 {
        prod <<= 1;
        binexp -= 1;
    }
    debug_assert!(prod & (1u128 << 127) != 0);

    // Bits dropped below `prod`: the low word of `am * pm_lo`, which this
    // fold never captures. Nonzero here only ever matters for deciding the
    // sticky bit of an exact tie, never for `prod`'s own accuracy.
    let lo2_nonzero = (cross as u64) != 0;

    // `prod` is the literal top 128 bits of `am * 10^dp_exp` with zero
    // error beyond this point only when both operands were exact: the
    // table's own truncation (`!pm_exact`) and the mantissa's
    // (`number.truncated`) are the only two ways a bit could be missing
    // below the 128-bit cutoff.
    let exact = pm_exact && !number.truncated;
    let sticky = lo2_nonzero || !exact;

    let resolved = resolve::<F>(prod, binexp, sticky)?;
    if !exact {
        // Any dropped precision is bounded to a single ULP of uncertainty
        // in `prod` (the table's own truncation error is under one part
        // in 2^128, which after multiplying by a 64-bit mantissa can only
        // ever propagate as a single possible carry into `prod`'s lowest
        // bit). Recompute with that worst-case carry applied and accept
        // the result only if the rounding decision doesn't change either
        // way — otherwise this is genuinely ambiguous without more
        // precision than this path carries.
        let bumped = resolve::<F>(prod.wrapping_add(1), binexp, sticky)?;
        if bumped != resolved {
            return None;
        }
    }

    let (mant, biased_exp, round_up) = resolved;
    round_and_pack::<F>(number.neg, mant, biased_exp, round_up)
}

/// Round the top 128 bits of an Eisel-Lemire product (`prod`, unbiased
/// weight `binexp` at its top bit) to `F`'s mantissa width, returning
/// `(mantissa, biased_exponent, round_up)` or `None` if the target's
/// exponent falls outside the representable range entirely (the caller
/// then defers to the big-number path, which handles subnormal/overflow
/// boundaries directly).
fn resolve<F: RawFloat>(prod: u128, binexp: i32, sticky: bool) -> Option<(u64, i32, bool)> {
    let hi = (prod >> 64) as u64;
    let lo = prod as u64;
    let e = binexp + 63;
    let (shift, biased_exp) = shared::biased_exponent::<F>(e)?;
    let (mant, round_up) = shared::round_nearest_tie_even(hi, shift, sticky || lo != 0);
    Some((mant, biased_exp, round_up))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<F: RawFloat>(s: &str) -> Option<F> {
        let bytes = s.as_bytes();
        let neg = bytes[0] == b'-';
        let digits = if neg { &bytes[1..] } else { bytes };
        let dot = digits.iter().position(|&b| b == b'.');
        let (int_digits, frac_digits) = match dot {
            Some(p) => (&digits[..p], &digits[p + 1..]),
            None => (digits, &digits[0..0]),
        };
        let number = Number::from_digits(neg, int_digits, frac_digits, 0);
        lemire_path::<F>(&number)
    }

    #[test]
    fn agrees_with_hardware_parse_on_simple_values() {
        for s in ["1.0", "3.14159", "2.5", "100.0", "0.1", "123456.789"] {
            let got: f64 = parse(s).expect("mid path should resolve this input");
            let want: f64 = s.parse().unwrap();
            assert_eq!(got, want, "{s}");
        }
    }

    #[test]
    fn zero_mantissa_is_zero() {
        let number = Number::from_digits(false, b"0", b"", 0);
        let got: f64 = lemire_path(&number).unwrap();
        assert_eq!(got, 0.0);
    }

    #[test]
    fn out_of_window_exponent_defers() {
        let number = Number::from_digits(false, b"1", b"", 400);
        assert!(lemire_path::<f64>(&number).is_none());
    }

    #[test]
    fn notorious_single_word_table_rounding_failure_is_now_correct() {
        // Regression: `819299962269840e132` is one ULP off the correctly
        // rounded result when the mid path uses only a single 63-bit word
        // of table precision (see crate-level review history). With the
        // dual-word table this either resolves exactly, agreeing with the
        // big-number path, or defers — it must never resolve to the wrong
        // answer.
        let number = Number::from_digits(false, b"819299962269840", b"", 132);
        if let Some(mid) = lemire_path::<f64>(&number) {
            let d = crate::decimal::Decimal::from_digits(false, b"819299962269840", b"", 132);
            let big: f64 = d.to_float();
            assert_eq!(mid.to_bits(), big.to_bits());
        }
    }
}
