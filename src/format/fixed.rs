//! Digit-array-to-ASCII assembly: scientific (`'e'`/`'E'`) and positional
//! (`'f'`) layout, plus the `'g'`/`'G'` magnitude-based choice between them.
//!
//! Ported from the `fmtE`/`fmtF`/`formatDigits` trio in Go's
//! `strconv/ftoa.go`, operating on the same [`Decimal`] digit array this
//! crate's parser already builds and rounds.

use arrayvec::ArrayString;

use crate::decimal::Decimal;

use super::FormatBuf;

fn push_digit(dst: &mut FormatBuf, d: u8) {
    let _ = dst.try_push((b'0' + d) as char);
}

/// `d[0].d[1..=prec]e±xx`. `prec < 0` is not valid here; callers resolve a
/// shortest-mode `prec` (digit count minus one) before calling in.
pub fn fmt_e(dst: &mut FormatBuf, neg: bool, d: &Decimal, prec: i32, e_char: u8) {
    if neg {
        let _ = dst.try_push('-');
    }
    let digits = d.digits();
    let nd = digits.len();

    push_digit(dst, if nd != 0 { digits[0] } else { 0 });

    if prec > 0 {
        let _ = dst.try_push('.');
        let m = (nd).min((prec + 1) as usize);
        for &b in &digits[1.min(nd)..m] {
            push_digit(dst, b);
        }
        for _ in (m as i32)..=prec {
            push_digit(dst, 0);
        }
    }

    let _ = dst.try_push(e_char as char);
    let mut exp = if nd == 0 { 0 } else { d.decimal_point() - 1 };
    let exp_neg = exp < 0;
    if exp_neg {
        exp = -exp;
    }
    let _ = dst.try_push(if exp_neg { '-' } else { '+' });

    let mut tmp = ArrayString::<16>::new();
    let _ = core::fmt::Write::write_fmt(&mut tmp, format_args!("{}", exp));
    if tmp.len() < 2 {
        let _ = dst.try_push('0');
    }
    let _ = dst.try_push_str(&tmp);
}

/// Plain positional `ddd.ddd`, `prec` fractional digits (`prec == 0` omits
/// the point entirely).
pub fn fmt_f(dst: &mut FormatBuf, neg: bool, d: &Decimal, prec: i32) {
    if neg {
        let _ = dst.try_push('-');
    }
    let digits = d.digits();
    let nd = digits.len() as i32;
    let dp = d.decimal_point();

    if dp > 0 {
        let m = nd.min(dp) as usize;
        for &b in &digits[..m] {
            push_digit(dst, b);
        }
        for _ in (m as i32)..dp {
            push_digit(dst, 0);
        }
    } else {
        push_digit(dst, 0);
    }

    if prec > 0 {
        let _ = dst.try_push('.');
        for i in 0..prec {
            let j = dp + i;
            let ch = if j >= 0 && j < nd {
                digits[j as usize]
            } else {
                0
            };
            push_digit(dst, ch);
        }
    }
}

/// `'g'`/`'G'`: choose `'e'` or `'f'` by the Go-compatible magnitude rule,
/// then assemble with whichever layout was chosen.
pub fn fmt_g(dst: &mut FormatBuf, neg: bool, d: &Decimal, prec: i32, upper: bool, shortest: bool) {
    let nd = d.digits().len() as i32;
    let mut eprec = prec;
    if eprec > nd && nd >= d.decimal_point() {
        eprec = nd;
    }
    if shortest {
        // Go's `formatDigits` uses the literal constant 6 here, not `nd` —
        // this is what makes `1000000.0` render as `"1e+06"` in shortest
        // mode regardless of how few significant digits it has.
        eprec = 6;
    }
    let exp = d.decimal_point() - 1;
    if exp < -4 || exp >= eprec {
        let p = if prec > nd { nd } else { prec };
        fmt_e(dst, neg, d, p - 1, if upper { b'E' } else { b'e' });
        return;
    }
    let p = if prec > d.decimal_point() { nd } else { prec };
    fmt_f(dst, neg, d, (p - d.decimal_point()).max(0));
}
