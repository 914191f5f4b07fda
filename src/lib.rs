//! Correctly rounded, bit-exact decimal/hexadecimal ⇄ binary floating-point
//! conversion, operating on byte slices rather than `str`.
//!
//! Two operations, each reentrant and allocation-free apart from the
//! returned buffer:
//!
//! - [`parse`] / [`parse_float_bits`]: decode a decimal or `0x`-prefixed hex
//!   float literal into `f32`/`f64`, rounded to nearest, ties to even.
//! - [`format::format`] / [`append_float`]: encode a float back into the
//!   shortest decimal string that round-trips through [`parse`], or a
//!   fixed-precision rendering (`'e'`, `'f'`, `'g'`, `'b'`).
//!
//! Parsing tries three progressively more expensive strategies and stops at
//! the first that can prove its result correct: the fast path
//! ([`fast`], one or two exact IEEE operations), the Eisel-Lemire mid path
//! ([`lemire`], extended-precision multiply with a rounding-boundary
//! check), and the arbitrary-precision decimal path ([`decimal`]), which is
//! always correct and is the formatter's foundation too.
//!
//! ```
//! assert_eq!(floatconv::parse::<f64>(b"625e-3"), Ok(0.625));
//! assert_eq!(floatconv::format::format(0.625f64, b'g', -1).as_str(), "0.625");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unused_must_use)]

#[cfg(feature = "std")]
extern crate std;

mod decimal;
mod error;
mod fast;
pub mod format;
mod hex;
mod lemire;
mod lexer;
mod limits;
mod number;
mod optimize;
mod shared;
mod table;

pub mod float;

pub use error::{Error, ErrorKind};
pub use float::RawFloat;
pub use format::FormatBuf;

use decimal::Decimal;
use fast::fast_path;
use lemire::lemire_path;
use lexer::Payload;
use limits::FastPathLimits;
use number::Number;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// The two IEEE-754 binary widths this crate converts: `f32` and `f64`.
///
/// Sealed — implemented only for `f32`/`f64`, mirroring the pattern
/// `lexical-parse-float`'s own `RawFloat` trait and `flt2dec2flt`'s
/// `FloatExt` trait both use to keep the conversion core closed to outside
/// implementations while still exposing it as a bound callers can write.
pub trait Float: sealed::Sealed + RawFloat + FastPathLimits + Copy {}
impl Float for f32 {}
impl Float for f64 {}

/// Decode `bytes` as a decimal or hex float literal, correctly rounded to
/// nearest (ties to even).
///
/// `Err` carries the classified [`Error`] (syntax or range); on a range
/// error (overflow) the caller who needs the saturated `+-Inf` value should
/// use [`parse_float_bits`] instead, which reports the value alongside the
/// error rather than discarding it.
pub fn parse<F: Float>(bytes: &[u8]) -> Result<F, Error<'_>> {
    let (value, err) = parse_with_value::<F>(bytes);
    match err {
        Some(e) => Err(e),
        None => Ok(value),
    }
}

/// Literal-signature entry point matching spec.md §6: always returns a
/// value (0 on syntax error, `+-Inf`/`+-0` on range error or underflow, the
/// parsed value otherwise) alongside an optional [`Error`].
///
/// `bit_size` must be `32` or `64`; any other value is treated as `64`. The
/// returned `f64` always satisfies `as_f32(result) as f64 == result` when
/// `bit_size == 32`, since the 32-bit path parses directly to `f32` and
/// widens afterwards rather than parsing as `f64` and narrowing.
pub fn parse_float_bits(bytes: &[u8], bit_size: u8) -> (f64, Option<Error<'_>>) {
    if bit_size == 32 {
        let (value, err) = parse_with_value::<f32>(bytes);
        (value as f64, err)
    } else {
        parse_with_value::<f64>(bytes)
    }
}

fn parse_with_value<F: Float>(bytes: &[u8]) -> (F, Option<Error<'_>>) {
    match lexer::lex(bytes) {
        Err(()) => (F::zero(), Some(Error::new("ParseFloat", bytes, ErrorKind::Syntax))),
        Ok(lexed) => parse_payload::<F>(bytes, lexed.neg, lexed.payload),
    }
}

fn parse_payload<'a, F: Float>(input: &'a [u8], neg: bool, payload: Payload<'a>) -> (F, Option<Error<'a>>) {
    match payload {
        Payload::Nan => (if neg { -F::nan() } else { F::nan() }, None),
        Payload::Inf => (if neg { -F::inf() } else { F::inf() }, None),
        Payload::Decimal {
            int_digits,
            frac_digits,
            exp,
        } => parse_decimal::<F>(input, neg, int_digits, frac_digits, exp),
        Payload::Hex {
            int_digits,
            frac_digits,
            bin_exp,
        } => {
            let (value, range_error) = hex::parse_hex::<F>(neg, int_digits, frac_digits, bin_exp);
            let err = range_error.then(|| Error::new("ParseFloat", input, ErrorKind::Range));
            (value, err)
        }
    }
}

fn parse_decimal<'a, F: Float>(
    input: &'a [u8],
    neg: bool,
    int_digits: &[u8],
    frac_digits: &[u8],
    exp: i32,
) -> (F, Option<Error<'a>>) {
    if optimize::enabled() {
        let number = Number::from_digits(neg, int_digits, frac_digits, exp);
        if let Some(value) = fast_path::<F>(&number) {
            return (value, None);
        }
        if let Some(value) = lemire_path::<F>(&number) {
            return (value, None);
        }
    }

    let d = Decimal::from_digits(neg, int_digits, frac_digits, exp);
    let value: F = d.to_float();
    let err = value.is_inf().then(|| Error::new("ParseFloat", input, ErrorKind::Range));
    (value, err)
}

/// Format `value` to bytes, matching the `format_float` operation of
/// spec.md §6 exactly (literal `f64` input, explicit `bit_size`).
///
/// `verb` is one of `b'b'`, `b'e'`, `b'E'`, `b'f'`, `b'g'`, `b'G'`; `prec <
/// 0` means shortest round-tripping output for every verb but `'b'` (which
/// ignores precision entirely — see spec.md §4.G). `bit_size` selects
/// whether `value` is treated as an `f32` (narrowed first) or `f64`.
pub fn format_float(value: f64, verb: u8, prec: i32, bit_size: u8) -> FormatBuf {
    if bit_size == 32 {
        format::format(value as f32, verb, prec)
    } else {
        format::format(value, verb, prec)
    }
}

/// Append `value`'s formatted representation to `dst`. See [`format_float`]
/// for the verb/precision/bit_size contract; this is its appending twin,
/// matching spec.md §6's `append_float` operation.
pub fn append_float(dst: &mut FormatBuf, value: f64, verb: u8, prec: i32, bit_size: u8) {
    if bit_size == 32 {
        format::append_float(dst, value as f32, verb, prec);
    } else {
        format::append_float(dst, value, verb, prec);
    }
}

/// Force (`true`) or release (`false`) the big-number-only testing mode,
/// returning the previous setting. Production code should never call this;
/// see spec.md §5, §9 and [`crate::optimize`]'s module docs.
pub fn set_optimize(enable: bool) -> bool {
    optimize::set(enable)
}

#[cfg(test)]
mod test_util {
    //! Bit-exact and near-equality assertion helpers for this crate's own
    //! tests, grounded on `lexical-core/src/util/test.rs`'s
    //! `assert_f32_eq!`/`assert_f64_eq!`/`assert_f64_near_eq!` family, with
    //! NaN handled by pattern (`is_nan()` on both sides) rather than bit
    //! pattern, since spec.md §8 tests NaN round-trip that way.

    macro_rules! assert_float_bits_eq {
        ($l:expr, $r:expr) => {{
            let (l, r) = ($l, $r);
            if l.is_nan() || r.is_nan() {
                assert!(l.is_nan() && r.is_nan(), "{:?} vs {:?}: exactly one is NaN", l, r);
            } else {
                assert_eq!(l.to_bits(), r.to_bits(), "{:?} != {:?} (bit patterns differ)", l, r);
            }
        }};
    }

    pub(crate) use assert_float_bits_eq;
}
