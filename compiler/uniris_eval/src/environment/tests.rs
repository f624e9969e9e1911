#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_set_on_root_binds_locally() {
    let env = Environment::new();
    env.set("a", Value::Number(2.0));
    assert_eq!(env.get_local("a"), Some(Value::Number(2.0)));
}

#[test]
fn test_get_through_enclosing() {
    let outer = Environment::new();
    outer.set("a", Value::Number(2.0));
    let inner = Environment::with_enclosing(&outer);

    assert_eq!(inner.get_local("a"), None);
    assert_eq!(inner.get("a"), Ok(Value::Number(2.0)));
}

#[test]
fn test_set_updates_existing_outer_binding() {
    let outer = Environment::new();
    outer.set("a", Value::Number(2.0));
    let inner = Environment::with_enclosing(&outer);

    inner.set("a", Value::Number(5.0));
    assert_eq!(outer.get_local("a"), Some(Value::Number(5.0)));
    assert_eq!(inner.get_local("a"), None);
}

#[test]
fn test_set_unbound_name_stays_in_inner_scope() {
    let outer = Environment::new();
    let inner = Environment::with_enclosing(&outer);

    inner.set("b", Value::Number(10.0));
    assert_eq!(inner.get_local("b"), Some(Value::Number(10.0)));
    assert_eq!(outer.get_local("b"), None);
}

#[test]
fn test_set_reaches_outermost_binding() {
    let root = Environment::new();
    root.define("x", Value::Number(1.0));
    let middle = Environment::with_enclosing(&root);
    middle.define("x", Value::Number(2.0));
    let leaf = Environment::with_enclosing(&middle);

    leaf.set("x", Value::Number(3.0));
    assert_eq!(root.get_local("x"), Some(Value::Number(3.0)));
    assert_eq!(middle.get_local("x"), Some(Value::Number(2.0)));
    // Lookup still finds the nearest binding.
    assert_eq!(leaf.get("x"), Ok(Value::Number(2.0)));
}

#[test]
fn test_local_binding_does_not_block_outer_update() {
    let outer = Environment::new();
    outer.define("n", Value::Number(1.0));
    let inner = Environment::with_enclosing(&outer);
    inner.define("n", Value::Number(7.0));

    inner.set("n", Value::Number(9.0));
    assert_eq!(outer.get_local("n"), Some(Value::Number(9.0)));
    assert_eq!(inner.get_local("n"), Some(Value::Number(7.0)));
}

#[test]
fn test_get_undefined() {
    let env = Environment::new();
    let err = env.get("a").unwrap_err();
    assert_eq!(err.to_string(), "Undefined variable a");
}

#[test]
fn test_set_enclosing_reattaches_scope() {
    let session = Environment::new();
    session.set("x", Value::Number(1.0));

    let first_root = Environment::new();
    first_root.define("now", Value::Bool(true));
    session.set_enclosing(Some(first_root.clone()));
    assert_eq!(session.get("now"), Ok(Value::Bool(true)));

    let second_root = Environment::new();
    session.set_enclosing(Some(second_root.clone()));
    assert!(session.get("now").is_err());
    assert!(session.enclosing().is_some_and(|e| e.ptr_eq(&second_root)));
    assert_eq!(session.get("x"), Ok(Value::Number(1.0)));
}

#[test]
fn test_local_names_sorted() {
    let env = Environment::new();
    env.define("b", Value::Nil);
    env.define("a", Value::Nil);
    assert_eq!(env.local_names(), vec!["a".to_string(), "b".to_string()]);
}
