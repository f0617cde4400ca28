//! Function sequencing, currying, and arity resolution.
//!
//! This module provides the combinators of the crate that are pure data
//! flow: no clocks, no stored timestamps, just functions wrapping
//! functions.
//!
//! # Overview
//!
//! - [`compose!`]: Build a function that applies a list of functions
//!   left-to-right (the first-listed function runs first)
//! - [`pipe!`]: Immediately thread a value through functions left-to-right
//! - [`Curried`]: Arity-aware currying with argument batching
//! - [`curry2!`], [`curry3!`]: Heterogeneous fixed-arity currying
//! - [`StaticArity`], [`resolve_arity`]: Determine how many arguments a
//!   function requires
//!
//! # Helper Functions
//!
//! - [`identity`]: Returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`flip`]: Swaps the arguments of a binary function
//!
//! # Examples
//!
//! ## Sequencing (left-to-right)
//!
//! ```
//! use funcomb::{compose, pipe};
//!
//! fn double(x: i32) -> i32 { x * 2 }
//! fn add_one(x: i32) -> i32 { x + 1 }
//!
//! // compose!(f, g)(x) = g(f(x)): the first-listed function runs first.
//! let sequenced = compose!(double, add_one);
//! assert_eq!(sequenced(5), 11);
//!
//! // pipe! evaluates eagerly instead of building a function.
//! assert_eq!(pipe!(5, double, add_one), 11);
//! ```
//!
//! ## Currying with argument batches
//!
//! ```
//! use funcomb::compose::curry;
//!
//! let add3 = curry(3, |arguments: &[i32]| {
//!     arguments[0] + arguments[1] + arguments[2]
//! });
//!
//! let step = add3.supply(1).supply(2);
//! assert_eq!(step.supply(3).complete(), Some(6));
//!
//! // Or all at once; trailing extras are silently dropped.
//! assert_eq!(add3.apply([1, 2, 3, 999]).complete(), Some(6));
//! ```
//!
//! # Composition Order
//!
//! Both [`compose!`] and [`pipe!`] read **left to right**: the first
//! function listed is applied first. This is the data-flow convention, not
//! the mathematical `(f . g)(x) = f(g(x))` convention. There is no
//! right-to-left variant in this crate.
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//! - **Pipe consistency**: `pipe!(x, f, g) == compose!(f, g)(x)`
//! - **Curry grouping**: `curried.apply([a, b]) == curried.supply(a)` then
//!   `.supply(b)` — argument grouping never changes the result

mod arity;
mod compose_macro;
mod curry;
mod curry_macro;
mod pipe_macro;
mod utils;

pub use arity::{StaticArity, arity_of, resolve_arity};
pub use curry::{Applied, Curried, curry};

// Re-export helper functions
pub use utils::{constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::pipe;
