//! Rounding helpers shared between the mid path ([`crate::lemire`]) and the
//! big-number path ([`crate::decimal`]).
//!
//! Both paths eventually need to answer the same question: given the
//! unbiased exponent `e` of a value's leading bit, how many low bits of a
//! 64-bit-normalized significand must be shifted away to land on
//! `F::MANTISSA_SIZE + 1` significant bits (or fewer, for a subnormal
//! result), and what biased exponent does the caller hand to
//! [`crate::float::round_and_pack`] afterwards?

use crate::float::RawFloat;

/// For a value whose leading bit has unbiased exponent `e`, return
/// `(shift, biased_exp)`:
/// - `shift`: how many bits to discard from a 64-bit normalized significand
///   (hidden bit at bit 63) to reach the target width.
/// - `biased_exp`: the exponent to hand to [`crate::float::round_and_pack`]
///   — `0` if the result lands in the subnormal range, `e + EXPONENT_BIAS`
///   otherwise.
///
/// Returns `None` if `shift >= 64`, i.e. the value underflows to zero before
/// any bit of the 64-bit significand survives.
#[inline]
pub fn biased_exponent<F: RawFloat>(e: i32) -> Option<(u32, i32)> {
    let min_normal_e = 1 - F::EXPONENT_BIAS;
    let base_shift = 63 - F::MANTISSA_SIZE;
    if e >= min_normal_e {
        Some((base_shift as u32, e + F::EXPONENT_BIAS))
    } else {
        let extra = min_normal_e - e;
        let shift = base_shift + extra;
        if shift >= 64 {
            None
        } else {
            Some((shift as u32, 0))
        }
    }
}

/// Round-to-nearest, ties-to-even decision for a value truncated at `shift`
/// bits below a 64-bit normalized significand.
///
/// `mant` is the full 64-bit normalized significand (before truncation);
/// `shift` the bit count returned by [`biased_exponent`]; `sticky` is `true`
/// if any bits *beyond* `mant`'s own low 64 bits (e.g. from a wider
/// intermediate product or big-number remainder) are known to be nonzero.
#[inline]
pub fn round_nearest_tie_even(mant: u64, shift: u32, sticky: bool) -> (u64, bool) {
    if shift == 0 {
        return (mant, false);
    }
    let truncated = mant >> shift;
    let remainder = mant & ((1u64 << shift) - 1);
    let halfway = 1u64 << (shift - 1);
    let round_up = if remainder > halfway {
        true
    } else if remainder < halfway {
        false
    } else {
        // Exactly halfway among the bits we can see: ties go to even unless
        // truncated/sticky bits below prove we're actually above halfway.
        sticky || (truncated & 1) == 1
    };
    (truncated, round_up)
}
