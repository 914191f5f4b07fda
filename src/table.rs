//! Powers-of-ten tables used by the fast and mid paths.
//!
//! The exact binary32/binary64 tables (`10^0..=10^EXACT_POW10`, each one
//! exactly representable) live on [`crate::float::RawFloat`] itself
//! (`F32_POW10`/`F64_POW10`) since they're part of each type's parameter
//! set. What lives here is the Eisel-Lemire-style extended-precision table:
//! rather than transcribing a literal dual-word `10^k` table for `k in
//! [-348, 347]` (two 64-bit words per entry, as `lexical-parse-float`'s own
//! table does), each entry is derived on demand from
//! [`crate::decimal::Decimal`] — which is itself a from-scratch,
//! hand-checkable implementation of exact decimal scaling. A `Decimal`
//! holding exactly `10^k` (trivially: digit `1` with the point shifted) is
//! scaled into the binary range and its leading 128 bits read off with
//! [`crate::decimal::Decimal::to_binary_words128`], giving the same
//! dual-word precision a literal Eisel-Lemire table entry would contain, at
//! the cost of doing that scaling work per call instead of once at compile
//! time.
//!
//! A single 64-bit word of precision here is not enough: the missing low
//! bits of a one-word table can carry up to a full word of error into the
//! product once multiplied against a 64-bit mantissa, which is large enough
//! to flip a correctly-rounded result. The dual word bounds that error to
//! under one part in `2^128` instead, which [`crate::lemire`] then
//! refines against directly rather than trusting a fixed safety margin.

use crate::decimal::Decimal;

/// Dual-word `(hi, lo, exponent, exact)` approximation of `10^k`: `hi` holds
/// the top 64 significant bits (top bit set), `lo` the next 64, and
/// `value ~= (hi * 2^64 + lo) * 2^(exponent - 127)`. `exact` is `true` when
/// `(hi, lo)` is the literal value of `10^k` at this scale rather than a
/// floor of it (true for the small range of `k` where `10^k` terminates
/// within 128 bits in binary).
pub fn pow10_extended_wide(k: i32) -> (u64, u64, i32, bool) {
    Decimal::pow10_exact(k).to_binary_words128()
}
