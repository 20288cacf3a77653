//! Type string decoding tests
//!
//! Covers the textual grammar in both modes:
//! - Scalar and parametric keywords (short and long forms)
//! - Comma splitting that respects nested brackets
//! - Placeholder and wildcard leaves
//! - Decode failures and their error codes

use pretty_assertions::assert_eq;
use qplan_diagnostics::{QP0001, QP0002, QP0003, QP0004, QP0005, QP0100};
use qplan_types::*;
use rstest::rstest;

// === Concrete Types ===

#[rstest]
#[case("boolean", Type::bool())]
#[case("bool", Type::bool())]
#[case("string", Type::string())]
#[case("str", Type::string())]
#[case("interval_year", Type::interval_year())]
#[case("i64?", Type::i64().with_nullable(true))]
#[case("varchar<25>", Type::varchar(25))]
#[case("FIXEDCHAR<3>", Type::fixed_char(3))]
#[case("fbin<16>", Type::fixed_binary(16))]
#[case("decimal<38,0>", Type::decimal(38, 0))]
#[case("dec?<10,2>", Type::decimal(10, 2).with_nullable(true))]
#[case("list<date>", Type::list(Type::date()))]
#[case("struct<>", Type::structure(vec![]))]
#[case("struct<i8,i16?>", Type::structure(vec![Type::i8(), Type::i16().with_nullable(true)]))]
fn test_decode_concrete(#[case] text: &str, #[case] expected: Type) {
    assert_eq!(decode_type(text).unwrap(), expected);
}

#[test]
fn test_comma_splitting_tracks_depth() {
    let ty = decode_type("map<i32,list<fp64>>").unwrap();
    match &ty {
        Type::Map { key, value, .. } => {
            assert_eq!(**key, Type::i32());
            assert_eq!(**value, Type::list(Type::fp64()));
        }
        other => panic!("expected a map, got {other}"),
    }

    let pattern = decode_parameterized("map<i32,list<fp64>>").unwrap();
    assert_eq!(pattern, ParameterizedType::from(&ty));
}

#[test]
fn test_deeply_nested_struct() {
    let ty = decode_type("struct<list<map<str,dec<5,1>>>,struct<>,uuid>").unwrap();
    assert_eq!(
        ty,
        Type::structure(vec![
            Type::list(Type::map(Type::string(), Type::decimal(5, 1))),
            Type::structure(vec![]),
            Type::uuid(),
        ])
    );
}

// === Parameterized Types ===

#[test]
fn test_decimal_with_placeholders() {
    let pattern = decode_parameterized("decimal<T,5>").unwrap();
    match pattern {
        ParameterizedType::Decimal {
            precision, scale, ..
        } => {
            assert!(precision.is_placeholder());
            assert_eq!(precision.value(), "T");
            assert!(scale.is_integer());
            assert_eq!(scale.as_integer(), Some(5));
        }
        other => panic!("expected a decimal pattern, got {other}"),
    }
}

#[rstest]
#[case("any1", true, false)]
#[case("ANY", true, false)]
#[case("T", false, true)]
#[case("L1", false, true)]
#[case("08", false, false)]
fn test_bare_token_classification(
    #[case] text: &str,
    #[case] wildcard: bool,
    #[case] placeholder: bool,
) {
    let pattern = decode_parameterized(text).unwrap();
    let literal = pattern.as_literal().expect("bare token");
    assert_eq!(literal.value(), text);
    assert_eq!(literal.is_wildcard(), wildcard);
    assert_eq!(literal.is_placeholder(), placeholder);
}

#[test]
fn test_generic_list_pattern() {
    let pattern = decode_parameterized("list?<any1>").unwrap();
    assert!(pattern.is_nullable());
    assert_eq!(pattern.signature(), "list?<any1>");
}

// === Failures ===

#[rstest]
#[case("decimal<T,5>", QP0004)]
#[case("varchar<L1>", QP0004)]
#[case("varchar<99999999999>", QP0004)]
#[case("any1", QP0005)]
#[case("list<T>", QP0005)]
#[case("decimal<-1,2>", QP0001)]
#[case("varchar<+5>", QP0001)]
#[case("list<i32", QP0001)]
#[case("list<i32>>", QP0001)]
#[case("", QP0001)]
#[case("foo<i32>", QP0002)]
#[case("decimal<10>", QP0003)]
#[case("map<i32>", QP0003)]
#[case("list<i32,i64>", QP0003)]
#[case("i32<4>", QP0100)]
fn test_decode_failures(#[case] text: &str, #[case] code: qplan_diagnostics::ErrorCode) {
    let err = decode_type(text).unwrap_err();
    assert_eq!(err.code(), code, "{err}");
}

#[test]
fn test_parameterized_mode_accepts_what_concrete_rejects() {
    assert!(decode("decimal<T,5>", true).is_ok());
    assert!(decode("decimal<T,5>", false).is_err());
}

#[test]
fn test_error_reports_input() {
    let err = decode_type("foo<i32>").unwrap_err();
    assert_eq!(err.to_string(), "QP0002: unrecognized type `foo` in `foo<i32>`");
}
