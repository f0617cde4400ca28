//! The `pipe!` macro for eager left-to-right value threading.
//!
//! This module provides the [`pipe!`] macro, which immediately folds a
//! value through a list of functions and returns the final value.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`. Unlike
/// [`compose!`](crate::compose!), which builds a function, `pipe!`
/// evaluates eagerly in place: no intermediate function object is
/// retained, only the accumulator value.
///
/// `pipe!(x)` with no functions returns `x` unchanged.
///
/// # Relationship with compose!
///
/// `pipe!(x, f, g)` equals `compose!(f, g)(x)` — both read left to right.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Type Requirements
///
/// Each function only needs to implement [`FnOnce`], since each is called
/// exactly once. This allows functions that consume their captured
/// environment.
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use funcomb::pipe;
///
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // double(5) = 10, add_one(10) = 11
/// assert_eq!(pipe!(5, double, add_one), 11);
/// ```
///
/// ## Bare value
///
/// ```
/// use funcomb::pipe;
///
/// assert_eq!(pipe!("untouched"), "untouched");
/// ```
///
/// ## Types change along the way
///
/// ```
/// use funcomb::pipe;
///
/// fn render(x: i32) -> String { x.to_string() }
/// fn measure(s: String) -> usize { s.len() }
///
/// assert_eq!(pipe!(12345, render, measure), 5);
/// ```
///
/// ## With consuming closures
///
/// ```
/// use funcomb::pipe;
///
/// let suffix = String::from("!");
/// let shout = move |s: String| s + &suffix;
///
/// let result = pipe!(String::from("go"), shout);
/// assert_eq!(result, "go!");
/// ```
///
/// ## Equivalence with compose!
///
/// ```
/// use funcomb::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(pipe!(10, f, g), compose!(f, g)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr) => {
        $value
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Multiple functions: fold left to right
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
