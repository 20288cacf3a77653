//! Overload resolution tests
//!
//! Registries are built from JSON declaration records, the way a catalog
//! loader would hand them over.

use pretty_assertions::assert_eq;
use qplan_diagnostics::{QP0003, QP0200};
use qplan_functions::*;
use qplan_types::{Type, decode_type};
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;

fn declarations(value: serde_json::Value) -> Vec<Declaration> {
    serde_json::from_value(value).unwrap()
}

fn registry() -> Registry {
    Registry::build(declarations(json!([
        {
            "category": "scalar",
            "name": "or",
            "uri": "functions_boolean",
            "args": [{ "value": "boolean?" }],
            "variadic": { "min": 1 },
            "return": "boolean?"
        },
        {
            "category": "scalar",
            "name": "and",
            "uri": "functions_boolean",
            "args": [{ "value": "boolean" }],
            "variadic": { "min": 1 },
            "return": "boolean"
        },
        {
            "category": "scalar",
            "name": "concat",
            "uri": "functions_string",
            "args": [{ "value": "string" }],
            "variadic": { "min": 2, "max": 3 },
            "return": "string"
        },
        {
            "category": "scalar",
            "name": "greatest",
            "uri": "first",
            "args": [{ "value": "any1" }, { "value": "any1" }],
            "return": "any1"
        },
        {
            "category": "scalar",
            "name": "greatest",
            "uri": "second",
            "args": [{ "value": "i32" }, { "value": "i32" }],
            "return": "i32"
        },
        {
            "category": "scalar",
            "name": "round",
            "uri": "functions_rounding",
            "args": [
                { "value": "fp64", "name": "x" },
                { "options": ["FLOOR", "CEILING"], "required": true, "name": "rounding" }
            ],
            "return": "fp64"
        },
        {
            "category": "aggregate",
            "name": "avg",
            "uri": "functions_arithmetic",
            "args": [{ "value": "fp32" }],
            "intermediate": "struct<fp64,i64>",
            "return": "fp32?"
        },
        {
            "category": "window",
            "name": "rank",
            "uri": "functions_window",
            "return": "i64?"
        }
    ])))
    .unwrap()
}

fn lookup() -> FunctionLookup {
    let mapping = StaticFunctionMapping::new()
        .scalar("max_of", "greatest")
        .aggregate("mean", "avg");
    FunctionLookup::new(Arc::new(registry()), Arc::new(mapping))
}

fn types(texts: &[&str]) -> Vec<Type> {
    texts.iter().map(|t| decode_type(t).unwrap()).collect()
}

// === Variadic ===

#[rstest]
#[case(&[], false)]
#[case(&["boolean"], true)]
#[case(&["boolean", "boolean"], true)]
#[case(&["boolean", "boolean?", "boolean"], true)]
#[case(&["boolean", "i32"], false)]
fn test_unbounded_variadic(#[case] actual: &[&str], #[case] found: bool) {
    let lookup = lookup();
    let variant = lookup.lookup_scalar("or", &types(actual));
    assert_eq!(variant.is_some(), found);
}

#[rstest]
#[case(&[], false)]
#[case(&["bool"], true)]
#[case(&["bool", "bool"], true)]
#[case(&["bool", "bool", "bool"], true)]
#[case(&["bool", "bool?"], false)]
#[case(&["bool?"], false)]
fn test_non_nullable_variadic(#[case] actual: &[&str], #[case] found: bool) {
    let lookup = lookup();
    let variant = lookup.lookup_scalar("and", &types(actual));
    assert_eq!(variant.map(FunctionVariant::signature).is_some(), found);
}

#[rstest]
#[case(1, false)]
#[case(2, true)]
#[case(3, true)]
#[case(4, false)]
fn test_bounded_variadic(#[case] count: usize, #[case] found: bool) {
    let lookup = lookup();
    let actual = vec![Type::string(); count];
    assert_eq!(lookup.lookup_scalar("concat", &actual).is_some(), found);
}

// === First Match ===

#[test]
fn test_first_registered_variant_wins() {
    let lookup = lookup();
    let variant = lookup
        .lookup_scalar("greatest", &[Type::i32(), Type::i32()])
        .unwrap();
    assert_eq!(variant.uri(), "first");
    assert_eq!(variant.signature(), "greatest:any1_any1");
}

#[test]
fn test_alias_and_direct_name_agree() {
    let lookup = lookup();
    let actual = [Type::fp64(), Type::fp64()];
    let direct = lookup.lookup_scalar("greatest", &actual).map(FunctionVariant::signature);
    let aliased = lookup.lookup_scalar("max_of", &actual).map(FunctionVariant::signature);
    assert_eq!(direct, aliased);
}

#[test]
fn test_enum_argument_is_not_positional() {
    let lookup = lookup();
    let variant = lookup.lookup_scalar("round", &[Type::fp64()]).unwrap();
    assert_eq!(variant.signature(), "round:fp64");
    assert_eq!(variant.arguments().len(), 2);
    assert_eq!(lookup.lookup_scalar("round", &[Type::fp64(), Type::fp64()]), None);
}

// === Aggregates ===

#[test]
fn test_intermediate_fallback() {
    let lookup = lookup();
    let partial = types(&["struct<fp64,i64>"]);

    let variant = lookup.lookup_aggregate("avg", &partial).unwrap();
    assert_eq!(variant.signature(), "avg:fp32");
    assert_eq!(lookup.lookup_aggregate("mean", &partial), Some(variant));
}

#[test]
fn test_intermediate_requires_exact_shape() {
    let lookup = lookup();
    assert_eq!(lookup.lookup_aggregate("avg", &types(&["struct<fp64,i32>"])), None);
    assert_eq!(lookup.lookup_aggregate("avg", &types(&["struct?<fp64,i64>"])), None);
    assert_eq!(
        lookup.lookup_aggregate("avg", &types(&["struct<fp64,i64>", "struct<fp64,i64>"])),
        None
    );
}

#[test]
fn test_aggregate_not_visible_as_scalar() {
    let lookup = lookup();
    assert_eq!(lookup.lookup_scalar("avg", &[Type::fp32()]), None);
    assert!(lookup.lookup_aggregate("avg", &[Type::fp32()]).is_some());
}

#[test]
fn test_window_lookup() {
    let lookup = lookup();
    let variant = lookup.lookup_window("rank", &[]).unwrap();
    assert_eq!(variant.signature(), "rank");
    assert_eq!(variant.return_type().signature(), "i64?");
}

// === Build Failures ===

#[test]
fn test_build_is_all_or_nothing() {
    let result = Registry::build(declarations(json!([
        {
            "category": "scalar",
            "name": "ok",
            "args": [{ "value": "i32" }],
            "return": "i32"
        },
        {
            "category": "scalar",
            "name": "broken",
            "uri": "functions_broken",
            "args": [{ "value": "decimal<10>" }],
            "return": "i32"
        }
    ])));

    let err = result.unwrap_err();
    assert_eq!(err.code(), QP0200);
    assert!(err.to_string().contains("`broken`"));
    let source = std::error::Error::source(&err).map(|s| s.to_string()).unwrap_or_default();
    assert!(source.starts_with(&QP0003.to_string()));
}

#[test]
fn test_builder_unchanged_after_failed_record() {
    let mut builder = Registry::builder();
    let bad: Declaration = serde_json::from_value(json!({
        "category": "scalar",
        "name": "bad",
        "return": "varchar<L1,L2>"
    }))
    .unwrap();
    let err = builder.add_declaration(bad).unwrap_err();
    assert_eq!(err.code(), QP0200);
    assert!(builder.build().is_empty());
}
