//! Demonstration/debugging CLI for the parse/format core.
//!
//! Not part of the library's public contract (spec.md §6: "no CLI ... this
//! is a library") — gated behind the `cli` feature purely so the crate can
//! be exercised by hand while developing the fast/mid/big-number paths,
//! mirroring the small standalone binaries `rust-lexical`'s own workspace
//! ships alongside its library crates for exactly that purpose.
//!
//! Usage:
//!   floatconv-cli parse <literal> [--bits 32|64]
//!   floatconv-cli format <value> [--verb b|e|E|f|g|G] [--prec N] [--bits 32|64]

use std::env;
use std::process::ExitCode;

fn usage() -> ExitCode {
    eprintln!("usage: floatconv-cli parse <literal> [--bits 32|64]");
    eprintln!("       floatconv-cli format <value> [--verb g] [--prec -1] [--bits 64]");
    ExitCode::FAILURE
}

fn flag_value(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(cmd) = args.first() else {
        return usage();
    };

    let bits: u8 = flag_value(&args, "--bits")
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);
    if bits != 32 && bits != 64 {
        log::error!("unsupported --bits {bits}, only 32 or 64 are accepted");
        return usage();
    }

    match cmd.as_str() {
        "parse" => {
            let Some(literal) = args.get(1) else {
                return usage();
            };
            let (value, err) = floatconv::parse_float_bits(literal.as_bytes(), bits);
            match err {
                Some(e) => {
                    log::warn!("{e}");
                    println!("{value} ({e})");
                }
                None => println!("{value}"),
            }
            ExitCode::SUCCESS
        }
        "format" => {
            let Some(raw) = args.get(1) else {
                return usage();
            };
            let Ok(value) = raw.parse::<f64>() else {
                log::error!("{raw} is not a valid native f64 literal");
                return usage();
            };
            let verb = flag_value(&args, "--verb")
                .and_then(|s| s.bytes().next())
                .unwrap_or(b'g');
            let prec: i32 = flag_value(&args, "--prec")
                .and_then(|s| s.parse().ok())
                .unwrap_or(-1);
            let out = floatconv::format_float(value, verb, prec, bits);
            println!("{}", out.as_str());
            ExitCode::SUCCESS
        }
        _ => usage(),
    }
}
