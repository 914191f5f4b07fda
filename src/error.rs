//! Error classification shared by `parse` and, indirectly, by the CLI/bench
//! harnesses that report malformed input.

use core::fmt;

/// The two ways a `parse` call can fail to produce the requested value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input did not match the float grammar (§4.A): unrecognized bytes,
    /// a missing mantissa digit, a dangling exponent sign, etc.
    Syntax,
    /// The input was syntactically valid but its magnitude over- or
    /// underflows the target type. Overflow (`±Inf`) is always reported this
    /// way; underflow to `±0` is not (see [`crate::error::Error`] docs).
    Range,
}

/// Error returned by [`crate::parse`] and [`crate::parse_float_bits`].
///
/// Carries the operation name, the full original input, and the error kind,
/// following the `{op, input, cause}` shape every parser in this crate's
/// lineage (`lexical_core`, `strconv`-style decoders) settles on so callers
/// can build a single diagnostic string without re-deriving context.
///
/// `input` borrows straight from the caller's byte slice rather than copying
/// it: there is no heap in this crate, and the input already outlives the
/// call, so there is no reason to bound or truncate the echo.
#[derive(Clone, Copy, Debug, Eq)]
pub struct Error<'a> {
    op: &'static str,
    input: &'a [u8],
    kind: ErrorKind,
}

impl<'a> Error<'a> {
    pub(crate) fn new(op: &'static str, input: &'a [u8], kind: ErrorKind) -> Self {
        Self { op, input, kind }
    }

    /// The name of the failing operation, e.g. `"ParseFloat"`.
    pub fn op(&self) -> &'static str {
        self.op
    }

    /// The full original input bytes.
    pub fn input(&self) -> &'a [u8] {
        self.input
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self.kind, ErrorKind::Syntax)
    }

    pub fn is_range(&self) -> bool {
        matches!(self.kind, ErrorKind::Range)
    }
}

/// Reflective equality: same operation, same kind, same input bytes.
///
/// This is the equality the property-test harness (spec'd test vectors, see
/// `tests/vectors.rs`) relies on, so it is defined explicitly rather than
/// left to a derive.
impl<'a> PartialEq for Error<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.kind == other.kind && self.input == other.input
    }
}

impl<'a> fmt::Display for Error<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cause = match self.kind {
            ErrorKind::Syntax => "invalid syntax",
            ErrorKind::Range => "value out of range",
        };
        write!(f, "{}: {} for input {:?}", self.op, cause, self.input)
    }
}

#[cfg(feature = "std")]
impl<'a> std::error::Error for Error<'a> {}
