//! Time-gated invocation wrappers.
//!
//! This module provides the stateful wrappers of the crate — the pieces
//! that observe a clock rather than just shuffling values:
//!
//! - [`throttle`]: rate-limits a function; while gated, calls return the
//!   cached result of the last execution without invoking the function
//! - [`debounce`]: delays every invocation by a fixed interval on the
//!   caller's thread, then executes
//! - [`Clock`]: the injectable clock/sleep seam ([`SystemClock`] for
//!   production, [`ManualClock`] for tests)
//!
//! All execution is synchronous on the caller's thread: there is no
//! background scheduler and no cancellation. A throttle gate never blocks;
//! it only compares timestamps. A debounce wrapper blocks the caller for
//! the configured delay, then runs.
//!
//! # Examples
//!
//! ## Throttling
//!
//! ```rust
//! use funcomb::control::{ManualClock, Throttle};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let wrapped = Throttle::with_clock(Duration::from_micros(50_000), clock.clone())
//!     .wrap(|x: i32| x * 2);
//!
//! assert_eq!(wrapped.call(1), 2);
//! // Still within the period: cached result, arguments discarded.
//! assert_eq!(wrapped.call(100), 2);
//!
//! clock.advance(Duration::from_micros(50_000));
//! // Gate reopened: fresh execution with fresh arguments.
//! assert_eq!(wrapped.call(100), 200);
//! ```
//!
//! ## Debouncing
//!
//! ```rust
//! use funcomb::control::debounce;
//! use std::time::Duration;
//!
//! let wrapped = debounce(Duration::from_micros(100)).wrap(|x: i32| x + 1);
//! // Blocks for 100µs, then executes. Every call executes exactly once.
//! assert_eq!(wrapped.call(1), 2);
//! assert_eq!(wrapped.call(2), 3);
//! ```

mod clock;
mod concurrent_throttle;
mod debounce;
mod throttle;

pub use clock::{Clock, ManualClock, SystemClock};
pub use concurrent_throttle::ConcurrentThrottled;
pub use debounce::{Debounce, Debounced, debounce};
pub use throttle::{Throttle, Throttled, throttle};
