#![cfg(feature = "compose")]
//! Property-based tests for the sequencing and currying laws.
//!
//! ## Composition Laws (left-to-right order)
//! - **Order**: `compose!(f, g)(x) == g(f(x))`
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//!
//! ## Pipe Laws
//! - **Consistency with compose**: `pipe!(x, f, g) == compose!(f, g)(x)`
//! - **Identity**: `pipe!(x) == x`
//!
//! ## Curry Laws
//! - **Grouping**: any split of the argument list yields the same result
//! - **Truncation**: extras beyond the arity never change the result
//!
//! ## Flip Laws
//! - **Definition**: `flip(f)(a, b) == f(b, a)`
//! - **Double flip**: `flip(flip(f)) == f`

#![allow(unused_imports)]

use funcomb::compose::{curry, flip, identity};
use funcomb::{compose, pipe};
use proptest::prelude::*;

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// Order law: the first-listed function runs first.
    #[test]
    fn prop_compose_applies_left_to_right(x in any::<i32>()) {
        let first = |n: i32| n.wrapping_add(1);
        let second = |n: i32| n.wrapping_mul(2);

        let sequenced = compose!(first, second);

        prop_assert_eq!(sequenced(x), second(first(x)));
    }

    /// Left Identity Law: compose!(identity, f)(x) == f(x)
    #[test]
    fn prop_compose_left_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        let sequenced = compose!(identity, function);

        prop_assert_eq!(sequenced(x), function(x));
    }

    /// Right Identity Law: compose!(f, identity)(x) == f(x)
    #[test]
    fn prop_compose_right_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        let sequenced = compose!(function, identity);

        prop_assert_eq!(sequenced(x), function(x));
    }

    /// Associativity Law: nesting does not change the result.
    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        let inner_right = compose!(function2, function3);
        let left_nested = compose!(function1, inner_right);

        let inner_left = compose!(function1, function2);
        let right_nested = compose!(inner_left, function3);

        prop_assert_eq!(left_nested(x), right_nested(x));
    }
}

// =============================================================================
// Pipe Laws
// =============================================================================

proptest! {
    /// Pipe consistency: pipe!(x, f, g) == compose!(f, g)(x)
    #[test]
    fn prop_pipe_compose_consistency(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let pipe_result = pipe!(x, function1, function2);
        let compose_result = compose!(function1, function2)(x);

        prop_assert_eq!(pipe_result, compose_result);
    }

    /// Pipe identity: a bare value passes through unchanged.
    #[test]
    fn prop_pipe_identity(x in any::<i32>()) {
        prop_assert_eq!(pipe!(x), x);
        prop_assert_eq!(pipe!(x, identity), x);
    }
}

// =============================================================================
// Curry Laws
// =============================================================================

proptest! {
    /// Grouping law: splitting the argument list at any point yields the
    /// same result as supplying everything at once.
    #[test]
    fn prop_curry_grouping_is_irrelevant(
        arguments in proptest::collection::vec(any::<i32>(), 1..6),
        split in any::<proptest::sample::Index>(),
    ) {
        let arity = arguments.len();
        let curried = curry(arity, |batch: &[i32]| {
            batch.iter().fold(0i32, |total, value| total.wrapping_add(*value))
        });

        let split_at = split.index(arity);
        let (head, tail) = arguments.split_at(split_at);

        let split_result = curried
            .apply(head.iter().copied())
            .apply(tail.iter().copied())
            .complete();
        let direct_result = curried.apply(arguments.iter().copied()).complete();

        prop_assert_eq!(split_result, direct_result);
    }

    /// Truncation law: extras beyond the arity never change the result.
    #[test]
    fn prop_curry_truncates_extras(
        required in proptest::collection::vec(any::<i32>(), 1..4),
        extras in proptest::collection::vec(any::<i32>(), 0..4),
    ) {
        let arity = required.len();
        let curried = curry(arity, |batch: &[i32]| {
            batch.iter().fold(0i32, |total, value| total.wrapping_add(*value))
        });

        let exact = curried.apply(required.iter().copied()).complete();
        let padded = curried
            .apply(required.iter().copied().chain(extras.iter().copied()))
            .complete();

        prop_assert_eq!(exact, padded);
    }
}

// =============================================================================
// Flip Laws
// =============================================================================

proptest! {
    /// Flip definition: flip(f)(a, b) == f(b, a)
    #[test]
    fn prop_flip_definition(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |minuend: i32, subtrahend: i32| minuend.wrapping_sub(subtrahend);
        let flipped = flip(subtract);

        prop_assert_eq!(flipped(a, b), subtract(b, a));
    }

    /// Double flip identity: flip(flip(f)) == f
    #[test]
    fn prop_double_flip_identity(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |minuend: i32, subtrahend: i32| minuend.wrapping_sub(subtrahend);
        let twice_flipped = flip(flip(subtract));

        prop_assert_eq!(twice_flipped(a, b), subtract(a, b));
    }
}
