//! Per-type digit/exponent limits gating which conversion path is eligible.
//!
//! Narrowed to radix 10 from `lexical-parse-float/src/limits.rs`'s
//! per-(radix, type) limit tables: this crate only ever parses decimal or
//! hex literals, so there is a single fast-path window and a single
//! mid-path window per float type instead of a full radix matrix.

use crate::float::RawFloat;

/// Fast-path eligibility window for a decimal exponent (`dp_exp`), and the
/// extra power-of-ten multiplication budget used to extend it.
pub trait FastPathLimits: RawFloat {
    /// Largest decimal exponent the fast path handles directly with one
    /// division or multiplication (`EXACT_POW10`, already on `RawFloat`).
    const MIN_EXACT_EXPONENT: i32 = -Self::EXACT_POW10;
    /// Smallest leftover exponent after pre-multiplying by an extra exact
    /// power of ten (spec's "+15 extension" for f64, "+7" for f32).
    const FAST_PATH_EXTRA: i32;
    /// Inclusive upper bound of the extended fast-path window.
    const MAX_FAST_EXPONENT: i32 = Self::EXACT_POW10 + Self::FAST_PATH_EXTRA;
}

impl FastPathLimits for f32 {
    const FAST_PATH_EXTRA: i32 = 7;
}

impl FastPathLimits for f64 {
    const FAST_PATH_EXTRA: i32 = 15;
}

/// Decimal exponent window outside which the mid path can't possibly help
/// (mirrors the documented range of a literal Eisel-Lemire power table,
/// `k in [-348, 347]`, even though this crate derives `10^k` on demand
/// rather than reading it out of a fixed table).
pub const MID_PATH_MIN_EXPONENT: i32 = -348;
pub const MID_PATH_MAX_EXPONENT: i32 = 347;
