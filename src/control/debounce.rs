//! Synchronous delay-then-execute invocation.
//!
//! Unlike the classical event-loop debounce, this variant neither cancels
//! nor coalesces: every call blocks the caller for the configured delay,
//! then executes the function with that call's arguments. Each call is
//! independent and executes exactly once.

use std::time::Duration;

use super::clock::{Clock, SystemClock};

/// Creates a debounce gate with the given delay, on the system clock.
///
/// Wrap a function with [`Debounce::wrap`] to obtain the delayed callable.
///
/// # Examples
///
/// ```rust
/// use funcomb::control::debounce;
/// use std::time::Duration;
///
/// let wrapped = debounce(Duration::from_micros(100)).wrap(|x: i32| x + 1);
/// assert_eq!(wrapped.call(41), 42);
/// ```
pub fn debounce(delay: Duration) -> Debounce<SystemClock> {
    Debounce::new(delay)
}

/// A debounce gate configuration: a delay and a clock.
#[derive(Clone, Copy, Debug)]
pub struct Debounce<C = SystemClock> {
    delay: Duration,
    clock: C,
}

impl Debounce<SystemClock> {
    /// Creates a gate configuration on the system clock.
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> Debounce<C> {
    /// Creates a gate configuration on a caller-supplied clock.
    pub const fn with_clock(delay: Duration, clock: C) -> Self {
        Self { delay, clock }
    }

    /// Wraps `function` into a delayed callable.
    pub fn wrap<F>(self, function: F) -> Debounced<F, C> {
        Debounced {
            function,
            delay: self.delay,
            clock: self.clock,
        }
    }
}

/// A function executed after a fixed delay on the caller's thread.
///
/// Every call sleeps for the configured delay (skipped when zero), then
/// invokes the function with that call's arguments and returns its result.
/// There is no cancellation and no background scheduling; an error from
/// the function belongs to the call that initiated it.
///
/// The wrapper holds no mutable state — only the delay captured at wrap
/// time — so it can be shared freely between threads when the wrapped
/// function is `Sync`.
pub struct Debounced<F, C = SystemClock> {
    function: F,
    delay: Duration,
    clock: C,
}

impl<F, C: Clock> Debounced<F, C> {
    /// Sleeps for the delay, then invokes the wrapped function.
    pub fn call<A, R>(&self, argument: A) -> R
    where
        F: Fn(A) -> R,
    {
        if !self.delay.is_zero() {
            self.clock.sleep(self.delay);
        }
        (self.function)(argument)
    }

    /// The configured delay.
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}
