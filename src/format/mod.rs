//! Component G: format `f32`/`f64` to bytes, shortest round-tripping or
//! fixed precision.
//!
//! `prec < 0` means "shortest decimal string that reads back to the exact
//! same bit pattern" (spec'd for `'b'`, `'e'`, `'E'`, `'f'`, `'g'`, `'G'`
//! alike, except `'b'` which has no concept of precision at all — it prints
//! the raw significand/exponent pair exactly). Otherwise `prec` is the verb's
//! own notion of precision: digits after the point for `'e'`/`'f'`,
//! significant digits for `'g'`.

mod fixed;
mod shortest;

use arrayvec::ArrayString;

use crate::decimal::Decimal;
use crate::float::RawFloat;

/// Upper bound on a formatted string's length. Shortest-mode output for
/// either float width is always well under a hundred bytes; this leaves
/// generous room for large explicit `'f'`-mode precisions too. A `'f'`
/// request whose digits would exceed this is truncated at capacity rather
/// than panicking — `ArrayVec`'s push calls are all fallible `try_push`.
pub const MAX_FORMAT_LEN: usize = 1536;

/// Fixed-capacity output buffer `append_float`/`format` write into.
pub type FormatBuf = ArrayString<MAX_FORMAT_LEN>;

/// Format `value` into a fresh buffer. See [`append_float`] for the verb/
/// precision contract.
pub fn format<F: RawFloat>(value: F, verb: u8, prec: i32) -> FormatBuf {
    let mut buf = FormatBuf::new();
    append_float(&mut buf, value, verb, prec);
    buf
}

/// Append the formatted `value` to `dst`, honoring:
/// - `verb`: one of `b'b'`, `b'e'`, `b'E'`, `b'f'`, `b'g'`, `b'G'`.
/// - `prec`: `< 0` for shortest round-tripping output, else the verb's own
///   digit count (see module docs).
pub fn append_float<F: RawFloat>(dst: &mut FormatBuf, value: F, verb: u8, mut prec: i32) {
    if value.is_nan() {
        let _ = dst.try_push_str("NaN");
        return;
    }
    let neg = value.is_sign_negative();
    if value.is_inf() {
        let _ = dst.try_push_str(if neg { "-Inf" } else { "+Inf" });
        return;
    }
    if verb == b'b' {
        append_raw_bits(dst, value, neg);
        return;
    }

    let (_, mantissa, biased_exp) = value.decompose();
    let exp = if biased_exp == 0 {
        1 - F::EXPONENT_BIAS
    } else {
        biased_exp - F::EXPONENT_BIAS
    };
    let mut d = Decimal::from_binary(false, mantissa, exp - F::MANTISSA_SIZE);

    let shortest = prec < 0;
    if shortest {
        shortest::round_shortest::<F>(&mut d, mantissa, exp);
        prec = match verb {
            b'e' | b'E' => d.digits().len() as i32 - 1,
            b'f' => (d.digits().len() as i32 - d.decimal_point()).max(0),
            _ => d.digits().len() as i32,
        };
    } else {
        match verb {
            b'e' | b'E' => d.round(prec + 1),
            b'f' => d.round(d.decimal_point() + prec),
            b'g' | b'G' => {
                let p = if prec == 0 { 1 } else { prec };
                d.round(p);
                prec = p;
            }
            _ => {}
        }
    }

    match verb {
        b'e' | b'E' => fixed::fmt_e(dst, neg, &d, prec, verb),
        b'f' => fixed::fmt_f(dst, neg, &d, prec),
        b'g' | b'G' => fixed::fmt_g(dst, neg, &d, prec, verb == b'G', shortest),
        _ => {
            // Unknown verb: fall back to shortest 'g'-style output rather
            // than silently dropping the value.
            fixed::fmt_g(dst, neg, &d, d.digits().len() as i32, false, true);
        }
    }
}

/// `'b'`: `mantissa "p" exponent`, exact, no rounding. `mantissa` is the
/// full `MANTISSA_SIZE + 1`-bit significand (implicit bit included) and
/// `exponent` is bias-corrected so `value == mantissa * 2^exponent` holds
/// with no approximation.
fn append_raw_bits<F: RawFloat>(dst: &mut FormatBuf, value: F, neg: bool) {
    if neg {
        let _ = dst.try_push('-');
    }
    let (_, mantissa, biased_exp) = value.decompose();
    let exp = if biased_exp == 0 {
        1 - F::EXPONENT_BIAS - F::MANTISSA_SIZE
    } else {
        biased_exp - F::EXPONENT_BIAS - F::MANTISSA_SIZE
    };
    let mut tmp = ArrayString::<24>::new();
    let _ = core::fmt::Write::write_fmt(&mut tmp, format_args!("{}p{}", mantissa, exp));
    let _ = dst.try_push_str(&tmp);
}

#[cfg(feature = "std")]
pub fn format_string<F: RawFloat>(value: F, verb: u8, prec: i32) -> std::string::String {
    use std::string::ToString;
    format(value, verb, prec).as_str().to_string()
}
