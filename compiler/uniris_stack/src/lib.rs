//! Stack safety for the recursive-descent parser and the tree walker.
//!
//! Both stages recurse once per nesting level of the source program, and the
//! evaluator additionally recurses once per user-level function call. Deep
//! programs (a recursive `fib`, long `else if` chains) would exhaust the
//! native stack, so the recursive entry points run through
//! [`ensure_sufficient_stack`], which grows the stack on demand.
//!
//! Growth only moves the limit: unbounded user recursion still ends when
//! memory runs out. Callers that need a hard bound configure a call-depth
//! limit on the interpreter.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack; just call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shallow_recursion() {
        fn sum_to(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { n + sum_to(n - 1) })
        }

        assert_eq!(sum_to(100), 5050);
    }

    #[test]
    fn test_deep_recursion() {
        fn depth(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
        }

        assert_eq!(depth(200_000), 200_000);
    }

    #[test]
    fn test_passes_result_through() {
        let result: Result<&str, u8> = ensure_sufficient_stack(|| Err(3));
        assert_eq!(result, Err(3));
    }
}
