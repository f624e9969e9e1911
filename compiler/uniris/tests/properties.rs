//! Property tests for the `interpret` contract.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use uniris::{interpret, Session};

/// Side-effect-free arithmetic expressions over small integers.
fn arith_expr() -> impl Strategy<Value = String> {
    let leaf = (0u32..100).prop_map(|n| n.to_string());
    leaf.prop_recursive(4, 32, 2, |inner| {
        (inner.clone(), prop::sample::select(vec!["+", "-", "*"]), inner)
            .prop_map(|(l, op, r)| format!("({l} {op} {r})"))
    })
}

/// A short program of assignments and prints built from `arith_expr`.
fn program() -> impl Strategy<Value = String> {
    prop::collection::vec(arith_expr(), 1..6).prop_map(|exprs| {
        exprs
            .iter()
            .enumerate()
            .map(|(i, e)| format!("v{i} = {e}\nprint v{i} == {e}\nprint v{i}\n"))
            .collect()
    })
}

proptest! {
    #[test]
    fn interpret_is_idempotent_across_sessions(source in program()) {
        let first = Session::new().interpret(&source);
        let second = Session::new().interpret(&source);
        prop_assert!(first.is_ok());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn assigned_values_compare_equal(source in program()) {
        let out = interpret(&source, None).into_result().unwrap();
        for (i, line) in out.lines().enumerate() {
            if i % 2 == 0 {
                prop_assert_eq!(line, "true");
            }
        }
    }

    #[test]
    fn addition_is_commutative(a in -1000i64..1000, b in -1000i64..1000) {
        let left = interpret(&format!("print {a} + {b}"), None).output;
        let right = interpret(&format!("print {b} + {a}"), None).output;
        prop_assert_eq!(left, right);
    }
}
