//! Component C: the fast path.
//!
//! Applicable when the compact mantissa is untruncated, fits the type's
//! exact-mantissa width, and the decimal exponent lies in the type's
//! "easy" window (see [`crate::limits::FastPathLimits`]). The whole
//! computation is then one or two IEEE operations on operands that are
//! each individually exact, so (per Clinger's theorem) the single rounding
//! the hardware performs is already the correctly-rounded answer — no
//! extended-precision or big-number work needed.

use crate::float::RawFloat;
use crate::limits::FastPathLimits;
use crate::number::Number;

/// Attempt the fast path for `number`, returning the correctly-rounded
/// (signed) result, or `None` if `number` falls outside the fast path's
/// provably-exact window.
pub fn fast_path<F>(number: &Number) -> Option<F>
where
    F: RawFloat + FastPathLimits,
{
    if number.truncated {
        return None;
    }
    if number.mantissa > F::MAX_MANTISSA_FAST_PATH {
        return None;
    }
    if number.dp_exp < F::MIN_EXACT_EXPONENT || number.dp_exp > F::MAX_FAST_EXPONENT {
        return None;
    }

    let value = if number.dp_exp >= 0 {
        if number.dp_exp <= F::EXACT_POW10 {
            mantissa_as_float::<F>(number.mantissa) * F::int_pow_fast_path(number.dp_exp as usize)
        } else {
            // Extended window: pull `extra` decimal places into the integer
            // mantissa first (exact, since both operands are small integers),
            // landing the remaining exponent exactly at `EXACT_POW10`.
            let extra = number.dp_exp - F::EXACT_POW10;
            let scaled = scale_mantissa(number.mantissa, extra)?;
            if scaled > F::MAX_MANTISSA_FAST_PATH {
                return None;
            }
            mantissa_as_float::<F>(scaled) * F::int_pow_fast_path(F::EXACT_POW10 as usize)
        }
    } else {
        let neg_exp = -number.dp_exp;
        if neg_exp > F::EXACT_POW10 {
            return None;
        }
        mantissa_as_float::<F>(number.mantissa) / F::int_pow_fast_path(neg_exp as usize)
    };

    Some(if number.neg { -value } else { value })
}

#[inline]
fn scale_mantissa(mantissa: u64, extra: i32) -> Option<u64> {
    let mut m = mantissa;
    for _ in 0..extra {
        m = m.checked_mul(10)?;
    }
    Some(m)
}

#[inline]
fn mantissa_as_float<F: RawFloat>(mantissa: u64) -> F {
    // `mantissa` is at most `MAX_MANTISSA_FAST_PATH`, always exactly
    // representable, so this native cast never rounds.
    F::from_u64(mantissa)
}
