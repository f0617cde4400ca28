#![cfg(feature = "compose")]
//! Unit tests for arity resolution.
//!
//! Tests cover:
//! - Inference from function pointer types of arity 0 through 6
//! - Explicit arity taking precedence, unvalidated
//! - Arity flowing into the curry engine

use funcomb::compose::{Curried, arity_of, resolve_arity};
use rstest::rstest;

// =============================================================================
// Inference from function pointer types
// =============================================================================

#[rstest]
fn arity_of_nullary() {
    fn nullary() -> &'static str {
        "nothing required"
    }
    let pointer: fn() -> &'static str = nullary;
    assert_eq!(arity_of(&pointer), 0);
}

#[rstest]
fn arity_of_unary_through_senary() {
    let unary: fn(i32) -> i32 = |a| a;
    let binary: fn(i32, i32) -> i32 = |a, b| a + b;
    let ternary: fn(i32, i32, i32) -> i32 = |a, b, c| a + b + c;
    let senary: fn(i32, i32, i32, i32, i32, i32) -> i32 = |a, b, c, d, e, f| a + b + c + d + e + f;

    assert_eq!(arity_of(&unary), 1);
    assert_eq!(arity_of(&binary), 2);
    assert_eq!(arity_of(&ternary), 3);
    assert_eq!(arity_of(&senary), 6);
}

#[rstest]
fn arity_of_mixed_parameter_types() {
    let heterogeneous: fn(&'static str, usize, bool) -> String =
        |text, count, upper| if upper { text.repeat(count).to_uppercase() } else { text.repeat(count) };
    assert_eq!(arity_of(&heterogeneous), 3);
}

// =============================================================================
// Explicit arity
// =============================================================================

#[rstest]
#[case(Some(0), 0)]
#[case(Some(5), 5)]
#[case(None, 2)]
fn resolve_arity_prefers_explicit(#[case] explicit: Option<usize>, #[case] expected: usize) {
    let binary: fn(i32, i32) -> i32 = |a, b| a + b;
    assert_eq!(resolve_arity(&binary, explicit), expected);
}

#[rstest]
fn resolve_arity_does_not_validate_explicit() {
    // The caller is trusted: an explicit count larger than the signature
    // is returned verbatim.
    let unary: fn(i32) -> i32 = |a| a;
    assert_eq!(resolve_arity(&unary, Some(9)), 9);
}

// =============================================================================
// Arity feeding the curry engine
// =============================================================================

#[rstest]
fn inferred_arity_drives_curried_completion() {
    let curried = Curried::from_fn2(|first: i32, second: i32| first - second);
    assert_eq!(curried.arity(), 2);

    let partial = curried.supply(10).partial().expect("one argument short");
    assert_eq!(partial.remaining(), 1);
    assert_eq!(partial.supply(4).complete(), Some(6));
}

#[rstest]
fn zero_arity_function_completes_without_arguments() {
    let curried = Curried::<i32, _>::from_fn0(|| "constant");
    assert_eq!(curried.arity(), 0);
    assert_eq!(curried.apply([]).complete(), Some("constant"));
}

#[rstest]
fn senary_constructor_requires_six_arguments() {
    fn total(a: i32, b: i32, c: i32, d: i32, e: i32, f: i32) -> i32 {
        a + b + c + d + e + f
    }

    let curried = Curried::from_fn6(total);
    assert_eq!(curried.arity(), 6);

    let partial = curried.apply([1, 2, 3, 4, 5]).partial().expect("one short");
    assert_eq!(partial.remaining(), 1);
    assert_eq!(partial.supply(6).complete(), Some(21));
}
