use super::*;
use crate::Literal;
use pretty_assertions::assert_eq;

#[test]
fn test_binary_dump() {
    let expr = Expr::binary(Expr::number(2.0), BinaryOp::Add, Expr::number(2.0), 1);
    assert_eq!(expr.to_string(), "(+ 2 2)");
}

#[test]
fn test_nested_dump() {
    let expr = Expr::logical(
        Expr::unary(UnaryOp::Not, Expr::bool(true), 1),
        LogicalOp::Or,
        Expr::call(Expr::variable("now", 1), vec![], 1),
    );
    assert_eq!(expr.to_string(), "(or (! true) (call now))");
}

#[test]
fn test_function_dump() {
    let stmt = Stmt::function(
        "id",
        vec!["a".into()],
        vec![Stmt::Return {
            value: Expr::variable("a", 1),
            line: 1,
        }],
        1,
    );
    assert_eq!(stmt.to_string(), "(fn id (a) (block (return a)))");
}

#[test]
fn test_if_else_dump() {
    let stmt = Stmt::if_else(
        Expr::bool(false),
        Stmt::Print(Expr::string("a")),
        Some(Stmt::Print(Expr::Literal(Literal::Nil))),
    );
    assert_eq!(stmt.to_string(), "(if false (print \"a\") (print nil))");
}

#[test]
fn test_assignment_target_peels_groupings() {
    let target = Expr::grouping(Expr::grouping(Expr::variable("x", 4)));
    assert_eq!(target.assignment_target(), Some(("x", 4)));

    let call = Expr::call(Expr::variable("f", 1), vec![], 1);
    assert_eq!(call.assignment_target(), None);
}

#[test]
fn test_operator_symbols() {
    assert_eq!(BinaryOp::GtEq.as_symbol(), ">=");
    assert!(BinaryOp::Lt.is_comparison());
    assert!(!BinaryOp::Eq.is_comparison());
    assert_eq!(LogicalOp::And.as_symbol(), "and");
    assert_eq!(UnaryOp::Neg.as_symbol(), "-");
}
