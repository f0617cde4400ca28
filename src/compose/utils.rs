//! Helper combinators for function sequencing.
//!
//! The classic building blocks: [`identity`] (I combinator), [`constant`]
//! (K combinator), and [`flip`] (C combinator).

/// Returns the value unchanged.
///
/// The identity function is the unit of sequencing:
/// `compose!(identity, f)` and `compose!(f, identity)` are both
/// behaviorally `f`.
///
/// # Examples
///
/// ```
/// use funcomb::compose::identity;
/// use funcomb::pipe;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(pipe!("pass-through", identity), "pass-through");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its
/// input.
///
/// # Examples
///
/// ```
/// use funcomb::compose::constant;
///
/// let always_zero = constant::<_, i32>(0);
/// assert_eq!(always_zero(100), 0);
///
/// // Replace every element with a default
/// let cleared: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(cleared, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(a, b) == f(b, a)`, and `flip(flip(f)) == f`. Useful for
/// fixing the second argument of a function via currying when only the
/// first can be fixed directly.
///
/// # Examples
///
/// ```
/// use funcomb::compose::flip;
/// use funcomb::curry2;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
///
/// // Fix the subtrahend instead of the minuend.
/// let minus_three = curry2!(flip(subtract))(3);
/// assert_eq!(minus_three(10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}
