//! The `compose!` macro for left-to-right function sequencing.
//!
//! This module provides the [`compose!`] macro, which builds a function
//! applying the listed functions in the order they are written: the
//! first-listed function runs first.

/// Composes functions left to right.
///
/// `compose!(f, g, h)(x)` is equivalent to `h(g(f(x)))`: the first-listed
/// function is applied first and its output feeds the next. Note that this
/// is the data-flow order, deliberately the reverse of the mathematical
/// `(f . g)(x) = f(g(x))` convention.
///
/// At least one function is required; `compose!()` is a compile error
/// rather than a silent identity.
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `|x| g(f(x))`
/// - `compose!(f, g, h, ...)` - Sequences any number of functions
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Type Requirements
///
/// All functions must implement the [`Fn`] trait. The output type of each
/// function must match the input type of the next listed function.
///
/// # Examples
///
/// ## Basic sequencing
///
/// ```
/// use funcomb::compose;
///
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // double runs first: add_one(double(5)) = add_one(10) = 11
/// let sequenced = compose!(double, add_one);
/// assert_eq!(sequenced(5), 11);
/// ```
///
/// ## Types flow left to right
///
/// ```
/// use funcomb::compose;
///
/// fn measure(text: &str) -> usize { text.len() }
/// fn double(n: usize) -> usize { n * 2 }
///
/// let sequenced = compose!(measure, double);
/// assert_eq!(sequenced("hello"), 10);
/// ```
///
/// ## Single function
///
/// ```
/// use funcomb::compose;
///
/// fn negate(x: i32) -> i32 { -x }
///
/// // compose!(f) is behaviorally f itself.
/// let sequenced = compose!(negate);
/// assert_eq!(sequenced(3), -3);
/// ```
///
/// ## With closures capturing environment
///
/// ```
/// use funcomb::compose;
///
/// let factor = 3;
/// let scale = move |x: i32| x * factor;
/// let shift = |x: i32| x + 10;
///
/// let sequenced = compose!(scale, shift);
/// assert_eq!(sequenced(5), 25); // shift(scale(5)) = shift(15) = 25
/// ```
#[macro_export]
macro_rules! compose {
    // Empty composition is a precondition violation, not an identity
    () => {
        ::core::compile_error!("compose! requires at least one function")
    };

    // Single function: behaviorally identical to the function itself
    ($function:expr $(,)?) => {
        $function
    };

    // Two functions: the first-listed runs first
    // compose!(f, g)(x) = g(f(x))
    ($first_function:expr, $second_function:expr $(,)?) => {{
        let first = $first_function;
        let second = $second_function;
        move |input| second(first(input))
    }};

    // Three or more functions: peel the first, sequence the rest
    // compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let rest = $crate::compose!($($remaining_functions),+);
        move |input| rest(first(input))
    }};
}
