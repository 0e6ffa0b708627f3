use drift_parser::{parse_expr, parse_test_type, ExprKind};
use drift_types::Ty;

#[test]
fn recursive_let_program_parses() {
    let expr = parse_expr(
        "let sum = \\n -> if n then 0 else n in sum 5",
    )
    .unwrap();
    match expr.kind {
        ExprKind::Let { name, bound, body } => {
            assert_eq!(name, "sum");
            assert!(matches!(bound.kind, ExprKind::Lambda { .. }));
            assert!(matches!(body.kind, ExprKind::App { .. }));
        }
        other => panic!("expected Let, got {other:?}"),
    }
}

#[test]
fn nested_lambda_parses_as_curried_functions() {
    let expr = parse_expr("\\x -> \\y -> x").unwrap();
    match expr.kind {
        ExprKind::Lambda { param, body } => {
            assert_eq!(param, "x");
            match body.kind {
                ExprKind::Lambda { param, body } => {
                    assert_eq!(param, "y");
                    assert_eq!(body.kind, ExprKind::Var("x".to_string()));
                }
                other => panic!("expected nested Lambda, got {other:?}"),
            }
        }
        other => panic!("expected Lambda, got {other:?}"),
    }
}

#[test]
fn type_literal_surface_round_trips_with_expression_lexer() {
    // Same lexer vocabulary serves both grammars: identifiers, arrows and
    // parens tokenize identically whether read as expressions or types.
    let ty = parse_test_type("(u1 -> u2) -> u1 -> u2").unwrap();
    assert_eq!(
        ty,
        Ty::func(
            Ty::func(Ty::Unknown(1), Ty::Unknown(2)),
            Ty::func(Ty::Unknown(1), Ty::Unknown(2)),
        )
    );
}

#[test]
fn unterminated_string_is_a_parse_error() {
    assert!(parse_expr("\"oops").is_err());
}

#[test]
fn empty_input_is_a_parse_error() {
    assert!(parse_expr("").is_err());
}
