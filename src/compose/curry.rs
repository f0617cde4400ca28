//! Arity-aware currying with argument batching.
//!
//! [`Curried`] wraps a function over a homogeneous argument type so that
//! its arguments can be supplied in batches across multiple calls. Each
//! application either completes the call (once enough arguments have been
//! gathered) or yields a new, independent partial application.
//!
//! # Design Decisions
//!
//! The wrapped function is shared behind `std::rc::Rc` so that sibling
//! partial applications stay cheap and independent: applying arguments
//! never consumes or mutates the partial it was called on, so the same
//! partial can be completed twice with different trailing arguments.
//!
//! Argument batches are accumulated in a `SmallVec`, keeping the common
//! low-arity case free of heap allocation.
//!
//! For call sites where argument types differ and the arity is fixed, use
//! the [`curry2!`](crate::curry2)/[`curry3!`](crate::curry3) macros
//! instead; this type trades heterogeneous arguments for batching,
//! truncation, and runtime arity.

use super::arity::StaticArity;
use smallvec::SmallVec;
use std::rc::Rc;

/// A function wrapped for progressive application.
///
/// A `Curried<A, R>` holds a target arity and an accumulator of previously
/// supplied arguments. Applying `k` further arguments where the combined
/// total is still below the arity yields a new `Curried`; once the total
/// reaches the arity, the underlying function is invoked with exactly the
/// first `arity` arguments and any trailing extras are silently dropped.
///
/// # Examples
///
/// ## One argument at a time
///
/// ```
/// use funcomb::compose::curry;
///
/// let add3 = curry(3, |arguments: &[i32]| {
///     arguments[0] + arguments[1] + arguments[2]
/// });
///
/// assert_eq!(add3.supply(1).supply(2).supply(3).complete(), Some(6));
/// ```
///
/// ## Batches, and truncation of extras
///
/// ```
/// use funcomb::compose::curry;
///
/// let add3 = curry(3, |arguments: &[i32]| {
///     arguments[0] + arguments[1] + arguments[2]
/// });
///
/// // Grouping does not matter.
/// assert_eq!(add3.apply([1, 2]).supply(3).complete(), Some(6));
/// // Extra trailing arguments are ignored.
/// assert_eq!(add3.apply([1, 2, 3, 999]).complete(), Some(6));
/// ```
///
/// ## Sibling partials are independent
///
/// ```
/// use funcomb::compose::curry;
///
/// let add2 = curry(2, |arguments: &[i32]| arguments[0] + arguments[1]);
/// let add_ten = add2.apply([10]).partial().expect("one argument short");
///
/// // The same partial can be completed any number of times.
/// assert_eq!(add_ten.supply(1).complete(), Some(11));
/// assert_eq!(add_ten.supply(5).complete(), Some(15));
/// ```
pub struct Curried<A, R> {
    function: Rc<dyn Fn(&[A]) -> R>,
    accumulated: SmallVec<[A; 4]>,
    arity: usize,
}

impl<A: Clone, R> Clone for Curried<A, R> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            accumulated: self.accumulated.clone(),
            arity: self.arity,
        }
    }
}

/// The outcome of applying arguments to a [`Curried`] function.
///
/// Either the call completed and produced a result, or more arguments are
/// still outstanding.
pub enum Applied<A, R> {
    /// Enough arguments were gathered; the underlying function ran.
    Complete(R),
    /// More arguments are required to reach the target arity.
    Partial(Curried<A, R>),
}

impl<A: Clone + 'static, R: 'static> Curried<A, R> {
    /// Wraps `function` with an explicit target arity.
    ///
    /// The arity is trusted verbatim: the function will be invoked with a
    /// slice of exactly `arity` arguments once that many have been
    /// gathered. An arity of zero completes on the first application,
    /// whatever is passed.
    pub fn new(arity: usize, function: impl Fn(&[A]) -> R + 'static) -> Self {
        Self {
            function: Rc::new(function),
            accumulated: SmallVec::new(),
            arity,
        }
    }

    /// The target arity this function must reach before it is invoked.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// The number of arguments still outstanding.
    pub fn remaining(&self) -> usize {
        self.arity.saturating_sub(self.accumulated.len())
    }

    /// The arguments accumulated so far, in call order.
    pub fn supplied(&self) -> &[A] {
        &self.accumulated
    }

    /// Applies a batch of arguments.
    ///
    /// The batch is concatenated onto the accumulated prefix in call
    /// order. If the combined count reaches the arity, the underlying
    /// function is invoked with exactly the first `arity` arguments
    /// (trailing extras are dropped) and its result is returned as
    /// [`Applied::Complete`]. Otherwise a new independent partial is
    /// returned; `self` is never mutated, so a completion whose result is
    /// an error can be retried from the same partial with fresh trailing
    /// arguments.
    pub fn apply<I>(&self, arguments: I) -> Applied<A, R>
    where
        I: IntoIterator<Item = A>,
    {
        let mut combined = self.accumulated.clone();
        combined.extend(arguments);

        if combined.len() >= self.arity {
            Applied::Complete((self.function)(&combined[..self.arity]))
        } else {
            Applied::Partial(Self {
                function: Rc::clone(&self.function),
                accumulated: combined,
                arity: self.arity,
            })
        }
    }

    /// Applies a single argument. Shorthand for [`apply`](Self::apply)
    /// with a one-element batch.
    pub fn supply(&self, argument: A) -> Applied<A, R> {
        self.apply(std::iter::once(argument))
    }
}

impl<A: Clone + 'static, R: 'static> Curried<A, R> {
    /// Wraps a zero-argument function; completes on the first application.
    pub fn from_fn0(function: fn() -> R) -> Self {
        Self::new(<fn() -> R as StaticArity>::ARITY, move |_: &[A]| {
            function()
        })
    }

    /// Wraps a one-argument function pointer, inferring arity 1.
    pub fn from_fn1(function: fn(A) -> R) -> Self {
        Self::new(
            <fn(A) -> R as StaticArity>::ARITY,
            move |arguments: &[A]| function(arguments[0].clone()),
        )
    }

    /// Wraps a two-argument function pointer, inferring arity 2.
    pub fn from_fn2(function: fn(A, A) -> R) -> Self {
        Self::new(
            <fn(A, A) -> R as StaticArity>::ARITY,
            move |arguments: &[A]| function(arguments[0].clone(), arguments[1].clone()),
        )
    }

    /// Wraps a three-argument function pointer, inferring arity 3.
    ///
    /// ```
    /// use funcomb::compose::Curried;
    ///
    /// fn add_three(a: i32, b: i32, c: i32) -> i32 { a + b + c }
    ///
    /// let curried = Curried::from_fn3(add_three);
    /// assert_eq!(curried.supply(1).supply(2).supply(3).complete(), Some(6));
    /// ```
    pub fn from_fn3(function: fn(A, A, A) -> R) -> Self {
        Self::new(
            <fn(A, A, A) -> R as StaticArity>::ARITY,
            move |arguments: &[A]| {
                function(
                    arguments[0].clone(),
                    arguments[1].clone(),
                    arguments[2].clone(),
                )
            },
        )
    }

    /// Wraps a four-argument function pointer, inferring arity 4.
    pub fn from_fn4(function: fn(A, A, A, A) -> R) -> Self {
        Self::new(
            <fn(A, A, A, A) -> R as StaticArity>::ARITY,
            move |arguments: &[A]| {
                function(
                    arguments[0].clone(),
                    arguments[1].clone(),
                    arguments[2].clone(),
                    arguments[3].clone(),
                )
            },
        )
    }

    /// Wraps a five-argument function pointer, inferring arity 5.
    pub fn from_fn5(function: fn(A, A, A, A, A) -> R) -> Self {
        Self::new(
            <fn(A, A, A, A, A) -> R as StaticArity>::ARITY,
            move |arguments: &[A]| {
                function(
                    arguments[0].clone(),
                    arguments[1].clone(),
                    arguments[2].clone(),
                    arguments[3].clone(),
                    arguments[4].clone(),
                )
            },
        )
    }

    /// Wraps a six-argument function pointer, inferring arity 6.
    pub fn from_fn6(function: fn(A, A, A, A, A, A) -> R) -> Self {
        Self::new(
            <fn(A, A, A, A, A, A) -> R as StaticArity>::ARITY,
            move |arguments: &[A]| {
                function(
                    arguments[0].clone(),
                    arguments[1].clone(),
                    arguments[2].clone(),
                    arguments[3].clone(),
                    arguments[4].clone(),
                    arguments[5].clone(),
                )
            },
        )
    }
}

/// Wraps `function` with an explicit target arity.
///
/// Free-function form of [`Curried::new`], matching the
/// `curry(fn, arity)` surface. Closures take this path; function pointers
/// of a single argument type can use the `Curried::from_fn*` constructors
/// to infer the arity instead.
///
/// # Examples
///
/// ```
/// use funcomb::compose::curry;
///
/// let join = curry(2, |parts: &[String]| parts.join("-"));
///
/// let prefixed = join.supply("left".to_string()).partial().expect("partial");
/// assert_eq!(
///     prefixed.supply("right".to_string()).complete(),
///     Some("left-right".to_string())
/// );
/// ```
pub fn curry<A, R, F>(arity: usize, function: F) -> Curried<A, R>
where
    A: Clone + 'static,
    R: 'static,
    F: Fn(&[A]) -> R + 'static,
{
    Curried::new(arity, function)
}

impl<A: Clone + 'static, R: 'static> Applied<A, R> {
    /// Applies a further batch of arguments.
    ///
    /// A `Complete` value is returned unchanged: once the call has
    /// completed, further arguments are dropped, consistent with the
    /// truncation rule.
    pub fn apply<I>(self, arguments: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        match self {
            Self::Complete(result) => Self::Complete(result),
            Self::Partial(curried) => curried.apply(arguments),
        }
    }

    /// Applies a single further argument.
    pub fn supply(self, argument: A) -> Self {
        self.apply(std::iter::once(argument))
    }

    /// Returns the result if the call completed.
    pub fn complete(self) -> Option<R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// Returns the partial application if arguments are still outstanding.
    pub fn partial(self) -> Option<Curried<A, R>> {
        match self {
            Self::Complete(_) => None,
            Self::Partial(curried) => Some(curried),
        }
    }

    /// Whether the call has completed.
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}
