//! Integration tests for the drift type inference engine.
//!
//! These exercise pinned literal-output scenarios, driving the engine
//! through its public API only (`Engine`, `Environment`) against source
//! parsed by `drift-parser`.

use drift_infer::{Engine, Environment, TypeError};
use drift_parser::{parse_expr, parse_test_type};
use drift_types::Ty;

fn ty(source: &str) -> Ty {
    parse_test_type(source).expect("test type literal should parse")
}

/// Infer `source` under `env`, with a fresh engine (fresh counter at 0,
/// so printed unknowns stay deterministic between cases).
fn infer(env: &Environment, source: &str) -> Result<Ty, TypeError> {
    let expr = parse_expr(source).expect("test expression should parse");
    Engine::new().infer_expr(env, &expr)
}

fn assert_result_type(env: &Environment, source: &str, expected: Ty) {
    let actual = infer(env, source).unwrap_or_else(|e| panic!("unexpected error: {e}"));
    assert_eq!(actual, expected);
}

fn assert_fails_with_one_of(env: &Environment, source: &str, expected_messages: &[&str]) {
    let err = infer(env, source).expect_err("expected a type error");
    assert!(
        expected_messages.contains(&err.to_string().as_str()),
        "expected one of {expected_messages:?}, got `{err}`"
    );
}

#[test]
fn scenario_1_int_literal() {
    assert_result_type(&Environment::new(), "42", Ty::int());
}

#[test]
fn scenario_2_string_literal() {
    assert_result_type(&Environment::new(), "\"Hello :)\"", Ty::string());
}

#[test]
fn scenario_3_application_against_an_environment_binding() {
    let env = Environment::new().extend("myFunc", ty("Bool -> Int"));
    assert_result_type(&env, "myFunc true", Ty::int());
    assert_fails_with_one_of(
        &env,
        "myFunc 10",
        &["Can't match Bool with Int", "Can't match Int with Bool"],
    );
}

#[test]
fn scenario_4_nested_lambda_principal_types() {
    assert_result_type(&Environment::new(), "\\x -> (\\y -> x)", ty("u1 -> u2 -> u1"));
    assert_result_type(&Environment::new(), "\\x -> (\\x -> x)", ty("u1 -> u2 -> u2"));
}

#[test]
fn scenario_5_flip_const_composition() {
    let source = "let flip = \\f -> \\x -> \\y -> f y x in \
                   let const = \\x -> \\y -> x in \
                   flip const 5 true";
    assert_result_type(&Environment::new(), source, Ty::bool());
}

#[test]
fn scenario_6_if_requires_bool_predicate_and_matching_branches() {
    assert!(infer(&Environment::new(), "if 1 then 0 else 1").is_err());
    assert!(infer(&Environment::new(), "if true then 0 else \"Hello\"").is_err());
}

#[test]
fn scenario_7_recursive_let_sum() {
    let env = Environment::new()
        .extend("eq_int", ty("Int -> Int -> Bool"))
        .extend("add", ty("Int -> Int -> Int"))
        .extend("sub", ty("Int -> Int -> Int"));
    let source = "let sum = \\x -> if eq_int x 0 then 0 else add x (sum (sub x 1)) in sum 3";
    assert_result_type(&env, source, Ty::int());
}

#[test]
fn scenario_8_ill_typed_recursive_let() {
    let env = Environment::new().extend("add", ty("Int -> Int -> Int"));
    let source = "let fail = \\x -> add fail 10 in fail 3";
    assert_fails_with_one_of(
        &env,
        source,
        &[
            "Can't match u2 -> Int with Int",
            "Can't match Int with u2 -> Int",
        ],
    );
}

#[test]
fn scoping_let_binding_does_not_leak_past_its_body() {
    assert_fails_with_one_of(
        &Environment::new(),
        "let x = let y = 42 in y in y",
        &["Unknown variable y"],
    );
}

#[test]
fn shadowing_inner_binding_restored_to_outer_after_scope_exit() {
    // Within `\x -> ...`, an inner `let x = true in x` shadows the
    // lambda's own `x`; once that inner let's body returns, only the
    // shadow's type (Bool) feeds the lambda's result, but `x` itself
    // would resolve back to the lambda parameter outside the inner let.
    assert_result_type(&Environment::new(), "\\x -> let x = true in x", ty("u1 -> Bool"));
}

#[test]
fn monomorphic_let_identity_used_once() {
    assert_result_type(
        &Environment::new(),
        "let identity = \\x -> x in identity 5",
        Ty::int(),
    );
}

#[test]
fn determinism_with_fresh_counter_reset() {
    let a = infer(&Environment::new(), "\\x -> x").unwrap();
    let b = infer(&Environment::new(), "\\x -> x").unwrap();
    assert_eq!(a, b);
    assert_eq!(a, ty("u1 -> u1"));
}
