//! Shortest round-tripping decimal digit generation.
//!
//! Ported from the `roundShortest` half of Go's `strconv/ftoa.go`: starting
//! from the exact decimal expansion of a binary float (already built by
//! [`crate::decimal::Decimal::from_binary`]), compute the half-open interval
//! of decimal values that still round back to the same float, then walk the
//! exact digits only as far as needed to land inside that interval and
//! round to the nearest point within it. This reuses the same big-decimal
//! arithmetic the parser's authoritative path (component E) already has, the
//! same way `strconv`'s `ftoa.go` and `atof.go` share one `decimal` type.

use crate::decimal::Decimal;
use crate::float::RawFloat;

fn digit_at(d: &Decimal, i: usize) -> u8 {
    d.digits().get(i).copied().unwrap_or(0)
}

/// Round `d` (the exact decimal expansion of `mantissa * 2^(exp -
/// mantbits)`) down to the fewest digits that still round-trip back to the
/// original float. `mantissa` is the full significand (hidden bit included
/// for normal numbers), `exp` its unbiased binary exponent, `bias` and
/// `mantbits` the type's `EXPONENT_BIAS`/`MANTISSA_SIZE`.
pub fn round_shortest<F: RawFloat>(d: &mut Decimal, mantissa: u64, exp: i32) {
    if mantissa == 0 {
        return;
    }
    let mantbits = F::MANTISSA_SIZE;
    let minexp = 1 - F::EXPONENT_BIAS;

    // Quick reject: if the closest shorter decimal is already farther away
    // than either boundary can be, `d` is already shortest. `332/100 >
    // log2(10)` so this is a safe (conservative) integer approximation.
    let nd = d.digits().len() as i32;
    if exp > minexp && 332 * (d.decimal_point() - nd) >= 100 * (exp - mantbits) {
        return;
    }

    let mut upper = Decimal::from_u64(mantissa * 2 + 1);
    upper.shift(exp - mantbits - 1);

    let (mantlo, explo) = if mantissa > (1u64 << mantbits) || exp == minexp {
        (mantissa - 1, exp)
    } else {
        (mantissa * 2 - 1, exp - 1)
    };
    let mut lower = Decimal::from_u64(mantlo * 2 + 1);
    lower.shift(explo - mantbits - 1);

    // The boundaries are themselves valid outputs only when `mantissa` is
    // even, i.e. when round-to-even resolves a halfway case back to it.
    let inclusive = mantissa % 2 == 0;

    let nd = d.digits().len();
    for i in 0..nd {
        let l = digit_at(&lower, i);
        let m = d.digits()[i];
        let u = digit_at(&upper, i);

        let okdown = l != m || (inclusive && i + 1 == lower.digits().len());
        let okup = m != u && (inclusive || m + 1 < u || i + 1 < upper.digits().len());

        match (okdown, okup) {
            (true, true) => {
                d.round((i + 1) as i32);
                return;
            }
            (true, false) => {
                d.round_down((i + 1) as i32);
                return;
            }
            (false, true) => {
                d.round_up((i + 1) as i32);
                return;
            }
            (false, false) => {}
        }
    }
}
