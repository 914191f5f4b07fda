//! Boundary-case and end-to-end scenario table from spec.md §8, one
//! `#[test]` per named scenario so a regression reports exactly which
//! input broke rather than one aggregate failure.

fn assert_bits_eq(l: f64, r: f64) {
    if l.is_nan() || r.is_nan() {
        assert!(l.is_nan() && r.is_nan(), "{l:?} vs {r:?}");
    } else {
        assert_eq!(l.to_bits(), r.to_bits(), "{l:?} != {r:?}");
    }
}

#[test]
fn max_finite_both_sides_of_the_last_representable_digit() {
    let a = floatconv::parse::<f64>(b"1.7976931348623158e308").unwrap();
    let b = floatconv::parse::<f64>(b"1.7976931348623157e308").unwrap();
    assert_eq!(a, f64::MAX);
    assert_eq!(b, f64::MAX);
}

#[test]
fn just_past_max_finite_overflows_to_infinity_with_range_error() {
    let err = floatconv::parse::<f64>(b"1.7976931348623159e308").unwrap_err();
    assert!(err.is_range());
}

#[test]
fn smallest_subnormal_and_its_silent_underflow_neighbor() {
    assert_eq!(
        floatconv::parse::<f64>(b"5e-324").unwrap(),
        f64::from_bits(1)
    );
    let (value, err) = floatconv::parse_float_bits(b"2e-324", 64);
    assert_eq!(value, 0.0);
    assert!(err.is_none(), "underflow must not be reported as an error");
}

#[test]
fn round_half_to_even_at_the_f64_lattice_midpoint() {
    let midpoint = floatconv::parse::<f64>(
        b"1.00000000000000011102230246251565404236316680908203125",
    )
    .unwrap();
    assert_eq!(floatconv::format::format(midpoint, b'g', -1).as_str(), "1");

    let mut above = String::from("1.");
    above.push_str(&"0".repeat(10000));
    above.push('1');
    let bumped = floatconv::parse::<f64>(above.as_bytes()).unwrap();
    assert_eq!(
        floatconv::format::format(bumped, b'g', -1).as_str(),
        "1.0000000000000002"
    );
}

#[test]
fn exponent_literal_overflow_saturates_instead_of_erroring_on_syntax() {
    let (value, err) = floatconv::parse_float_bits(b"1e+4294967296", 64);
    assert!(value.is_infinite() && value > 0.0);
    assert!(err.unwrap().is_range());

    let (value, err) = floatconv::parse_float_bits(b"1e-4294967296", 64);
    assert_eq!(value, 0.0);
    assert!(err.is_none());
}

#[test]
fn grammar_rejections_are_syntax_errors_with_zero_value() {
    let cases: &[&[u8]] = &[b"", b"1e", b"1e-", b".e-1", b"1\x00.2"];
    for &case in cases {
        let (value, err) = floatconv::parse_float_bits(case, 64);
        assert_eq!(value, 0.0, "{case:?}");
        assert!(err.unwrap().is_syntax(), "{case:?}");
    }
}

#[test]
fn scenario_625e_minus_3() {
    let v = floatconv::parse::<f64>(b"625e-3").unwrap();
    assert_eq!(floatconv::format::format(v, b'g', -1).as_str(), "0.625");
}

#[test]
fn scenario_1e23() {
    let v = floatconv::parse::<f64>(b"1e23").unwrap();
    assert_eq!(floatconv::format::format(v, b'g', -1).as_str(), "1e+23");
}

#[test]
fn scenario_negative_infinity_spelled_out() {
    let v = floatconv::parse::<f64>(b"-Infinity").unwrap();
    assert_eq!(floatconv::format::format(v, b'g', -1).as_str(), "-Inf");
}

#[test]
fn scenario_eisel_lemire_notorious_input_terminates_and_rounds_correctly() {
    let v = floatconv::parse::<f64>(b"2.2250738585072012e-308").unwrap();
    assert_bits_eq(v, 2.2250738585072014e-308);
    assert_eq!(
        floatconv::format::format(v, b'g', -1).as_str(),
        "2.2250738585072014e-308"
    );
}

#[test]
fn scenario_four_thousand_repeated_fraction_digits() {
    let mut input = String::from("2.");
    input.push_str(&"2".repeat(4000));
    input.push_str("e+1");
    let v = floatconv::parse::<f64>(input.as_bytes()).unwrap();
    assert_eq!(
        floatconv::format::format(v, b'g', -1).as_str(),
        "22.22222222222222"
    );
}

#[test]
fn scenario_large_integer_literal_narrowed_to_f32() {
    let (value, err) =
        floatconv::parse_float_bits(b"4951760157141521099596496896", 32);
    assert!(err.is_none());
    assert_eq!(
        floatconv::format_float(value, b'g', -1, 32).as_str(),
        "4.9517602e+27"
    );
}

#[test]
fn nan_is_compared_by_predicate_not_bit_pattern() {
    let v = floatconv::parse::<f64>(b"NaN").unwrap();
    assert!(v.is_nan());
    assert_eq!(floatconv::format::format(v, b'g', -1).as_str(), "NaN");
}

#[test]
fn hex_float_boundaries() {
    assert_eq!(floatconv::parse::<f64>(b"0x1p-1074").unwrap(), 5e-324);
    let err = floatconv::parse::<f64>(b"0x1p1024").unwrap_err();
    assert!(err.is_range());
}

#[test]
fn error_equality_is_reflective_on_op_kind_and_input() {
    let a = floatconv::parse::<f64>(b"1e").unwrap_err();
    let b = floatconv::parse::<f64>(b"1e").unwrap_err();
    assert_eq!(a, b);
    let c = floatconv::parse::<f64>(b"1e-").unwrap_err();
    assert_ne!(a, c);
}
