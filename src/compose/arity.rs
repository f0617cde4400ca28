//! Arity resolution for callables.
//!
//! Rust has no runtime reflection, no optional parameters, and no variadic
//! functions, so the number of arguments a function requires is fully
//! determined by its type. This module exposes that count through the
//! [`StaticArity`] trait, implemented for function pointer types of zero
//! to six parameters, together with the [`resolve_arity`] entry point that
//! lets a caller override the inferred count with an explicit one.
//!
//! Closures do not implement [`StaticArity`] (a closure's type is opaque);
//! they take the explicit-arity path via [`curry`](crate::compose::curry).

use static_assertions::const_assert_eq;

/// The number of positional arguments a function requires, read from its
/// type.
///
/// Implemented for function pointer types `fn() -> R` through
/// `fn(A1, ..., A6) -> R`. A named function coerces to its pointer type:
///
/// ```
/// use funcomb::compose::{StaticArity, arity_of};
///
/// fn area(width: f64, height: f64) -> f64 { width * height }
///
/// let pointer: fn(f64, f64) -> f64 = area;
/// assert_eq!(arity_of(&pointer), 2);
/// assert_eq!(<fn(f64, f64) -> f64 as StaticArity>::ARITY, 2);
/// ```
pub trait StaticArity {
    /// The number of required positional arguments.
    const ARITY: usize;
}

macro_rules! impl_static_arity {
    ($arity:literal => $($parameter:ident),*) => {
        impl<$($parameter,)* Return> StaticArity for fn($($parameter),*) -> Return {
            const ARITY: usize = $arity;
        }
    };
}

impl_static_arity!(0 =>);
impl_static_arity!(1 => A1);
impl_static_arity!(2 => A1, A2);
impl_static_arity!(3 => A1, A2, A3);
impl_static_arity!(4 => A1, A2, A3, A4);
impl_static_arity!(5 => A1, A2, A3, A4, A5);
impl_static_arity!(6 => A1, A2, A3, A4, A5, A6);

// Compile-time check of the impl table.
const_assert_eq!(<fn() as StaticArity>::ARITY, 0);
const_assert_eq!(<fn(u8, u8, u8) -> u8 as StaticArity>::ARITY, 3);
const_assert_eq!(<fn(u8, u8, u8, u8, u8, u8) -> u8 as StaticArity>::ARITY, 6);

/// Returns the arity of a function pointer.
///
/// # Examples
///
/// ```
/// use funcomb::compose::arity_of;
///
/// fn greet(name: &str, punctuation: char) -> String {
///     format!("Hello, {name}{punctuation}")
/// }
///
/// let pointer: fn(&'static str, char) -> String = greet;
/// assert_eq!(arity_of(&pointer), 2);
/// ```
#[inline]
pub fn arity_of<F: StaticArity>(_function: &F) -> usize {
    F::ARITY
}

/// Resolves the arity of a function, preferring an explicit count.
///
/// When `explicit` is `Some`, it is returned verbatim: the caller is
/// trusted, and no validation against the function's actual signature is
/// performed. Otherwise the count is read from the function's type.
///
/// # Examples
///
/// ```
/// use funcomb::compose::resolve_arity;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
/// let pointer: fn(i32, i32) -> i32 = add;
///
/// assert_eq!(resolve_arity(&pointer, None), 2);
/// // An explicit count wins, even a nonsensical one.
/// assert_eq!(resolve_arity(&pointer, Some(5)), 5);
/// ```
#[inline]
pub fn resolve_arity<F: StaticArity>(_function: &F, explicit: Option<usize>) -> usize {
    explicit.unwrap_or(F::ARITY)
}
