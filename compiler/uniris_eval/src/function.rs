//! Built-in functions and the root scope that carries them.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::errors::{native_error, EvalResult};
use crate::value::{Callable, NativeFunction};
use crate::{Environment, Value};

/// `now()`: whole seconds since the Unix epoch.
pub const NOW: NativeFunction = NativeFunction {
    name: "now",
    arity: 0,
    func: now,
};

/// Every built-in, in definition order.
pub const NATIVES: &[NativeFunction] = &[NOW];

#[expect(
    clippy::cast_precision_loss,
    reason = "seconds since the epoch fit exactly in an f64 mantissa"
)]
fn now(_args: &[Value]) -> EvalResult {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| native_error(format!("system clock is before the Unix epoch: {e}")))?;
    Ok(Value::Number(elapsed.as_secs() as f64))
}

/// A fresh root scope holding the built-ins.
///
/// Built once per top-level interpretation; program scopes hang below it.
pub fn native_environment() -> Environment {
    let env = Environment::new();
    for native in NATIVES {
        env.define(native.name, Value::Callable(Callable::Native(*native)));
    }
    env
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn test_now_is_whole_seconds() {
        let Value::Number(seconds) = (NOW.func)(&[]).unwrap() else {
            panic!("now() must return a number");
        };
        assert!(seconds > 1_600_000_000.0);
        assert!(seconds.fract().abs() < f64::EPSILON);
    }

    #[test]
    fn test_native_environment_defines_now() {
        let env = native_environment();
        let value = env.get_local("now").unwrap();
        assert_eq!(value.to_string(), "<native fn now>");
        assert!(env.enclosing().is_none());
    }

    #[test]
    fn test_native_environments_are_fresh() {
        let a = native_environment();
        let b = native_environment();
        a.define("x", Value::Nil);
        assert!(!a.ptr_eq(&b));
        assert!(b.get_local("x").is_none());
    }
}
