//! Rate-limited invocation with cached-result replay.
//!
//! A throttled function executes at most once per period. While the gate
//! is closed, calls return a clone of the last result without invoking the
//! function; the gate reopens purely by clock elapse, never by a timer.

use std::cell::RefCell;
use std::time::{Duration, Instant};

use super::clock::{Clock, SystemClock};
use super::concurrent_throttle::ConcurrentThrottled;

/// Creates a throttle gate with the given period, on the system clock.
///
/// Wrap a function with [`Throttle::wrap`] to obtain the rate-limited
/// callable.
///
/// # Examples
///
/// ```rust
/// use funcomb::control::throttle;
/// use std::time::Duration;
///
/// let wrapped = throttle(Duration::from_secs(60)).wrap(|x: i32| x * 2);
/// assert_eq!(wrapped.call(21), 42);
/// // Within the period the first result is replayed; 7 is discarded.
/// assert_eq!(wrapped.call(7), 42);
/// ```
pub fn throttle(period: Duration) -> Throttle<SystemClock> {
    Throttle::new(period)
}

/// A throttle gate configuration: a period and a clock.
///
/// This is the intermediate step of `throttle(period).wrap(function)`;
/// it exists so the period can be captured before the function is known.
#[derive(Clone, Copy, Debug)]
pub struct Throttle<C = SystemClock> {
    period: Duration,
    clock: C,
}

impl Throttle<SystemClock> {
    /// Creates a gate configuration on the system clock.
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> Throttle<C> {
    /// Creates a gate configuration on a caller-supplied clock.
    pub const fn with_clock(period: Duration, clock: C) -> Self {
        Self { period, clock }
    }

    /// Wraps `function` into a rate-limited callable.
    ///
    /// Each call to `wrap` creates fresh gate state; two wrappers around
    /// the same function never share it.
    pub fn wrap<F, R>(self, function: F) -> Throttled<F, R, C> {
        Throttled {
            function,
            period: self.period,
            clock: self.clock,
            state: RefCell::new(None),
        }
    }

    /// Wraps `function` into a rate-limited callable that can be shared
    /// across threads. See [`ConcurrentThrottled`].
    pub fn wrap_shared<F, R: Clone>(self, function: F) -> ConcurrentThrottled<F, R, C> {
        ConcurrentThrottled::new(self.period, self.clock, function)
    }
}

/// A rate-limited function.
///
/// Per-wrapper state moves through three phases:
///
/// - **uninitialized** — no prior execution; the first call always
///   executes the function.
/// - **gated** — less than `period` has elapsed since the last execution;
///   calls return a clone of the cached result, the new arguments are
///   discarded, and the function is not invoked.
/// - **open** — at least `period` has elapsed; the next call executes
///   fresh with its own arguments, refreshes the timestamp and cache, and
///   the gate closes again.
///
/// A zero period collapses the gate: every call executes. The state is a
/// single `Option<(Instant, R)>` cell, so a cached value exists exactly
/// when a last-run timestamp does.
///
/// # Error Handling
///
/// Errors never touch gate state. For a function returning `Result`, use
/// [`try_call`](Self::try_call): only `Ok` values are cached and gate, so
/// a failed call — first or later — leaves the gate exactly as it was and
/// the next call attempts a fresh execution rather than replaying a
/// failure. (Calling such a function through [`call`](Self::call) instead
/// would cache the `Result` wholesale, `Err` included.) A panic in the
/// wrapped function likewise leaves the state untouched, because the cell
/// is only written after the function returns.
///
/// # Thread Safety
///
/// This type is NOT thread-safe; state lives in a `RefCell` and call
/// order is assumed sequential. For concurrent callers use
/// [`ConcurrentThrottled`] via [`Throttle::wrap_shared`].
///
/// # Examples
///
/// ```rust
/// use funcomb::control::{ManualClock, Throttle};
/// use std::cell::Cell;
/// use std::time::Duration;
///
/// let executions = Cell::new(0);
/// let clock = ManualClock::new();
/// let wrapped = Throttle::with_clock(Duration::from_micros(50_000), clock.clone())
///     .wrap(|x: i32| {
///         executions.set(executions.get() + 1);
///         x * 10
///     });
///
/// assert_eq!(wrapped.call(1), 10); // t = 0: executes
/// clock.advance(Duration::from_micros(10_000));
/// assert_eq!(wrapped.call(2), 10); // t = 10_000: gated, replays
/// clock.advance(Duration::from_micros(50_000));
/// assert_eq!(wrapped.call(3), 30); // t = 60_000: executes
/// assert_eq!(executions.get(), 2);
/// ```
pub struct Throttled<F, R, C = SystemClock> {
    function: F,
    period: Duration,
    clock: C,
    state: RefCell<Option<(Instant, R)>>,
}

impl<F, R: Clone, C: Clock> Throttled<F, R, C> {
    /// Invokes the wrapped function, or replays the cached result while
    /// the gate is closed.
    pub fn call<A>(&self, argument: A) -> R
    where
        F: Fn(A) -> R,
    {
        let now = self.clock.now();
        if let Some((last_run_at, cached)) = self.state.borrow().as_ref() {
            if now.duration_since(*last_run_at) < self.period {
                return cached.clone();
            }
        }

        let result = (self.function)(argument);
        *self.state.borrow_mut() = Some((now, result.clone()));
        result
    }

    /// Invokes a fallible wrapped function; only `Ok` results are cached
    /// and gate subsequent calls.
    ///
    /// # Errors
    ///
    /// Propagates the wrapped function's error unchanged. The failed call
    /// leaves gate state untouched, so the next call executes fresh.
    ///
    /// ```rust
    /// use funcomb::control::throttle;
    /// use std::time::Duration;
    ///
    /// let wrapped = throttle(Duration::from_secs(60))
    ///     .wrap(|text: &str| text.parse::<i32>());
    ///
    /// // A failed first call leaves the gate uninitialized...
    /// assert!(wrapped.try_call("not a number").is_err());
    /// // ...so the next call executes instead of replaying the failure.
    /// assert_eq!(wrapped.try_call("42"), Ok(42));
    /// // Now gated: the cached 42 is replayed.
    /// assert_eq!(wrapped.try_call("7"), Ok(42));
    /// ```
    pub fn try_call<A, E>(&self, argument: A) -> Result<R, E>
    where
        F: Fn(A) -> Result<R, E>,
    {
        let now = self.clock.now();
        if let Some((last_run_at, cached)) = self.state.borrow().as_ref() {
            if now.duration_since(*last_run_at) < self.period {
                return Ok(cached.clone());
            }
        }

        let result = (self.function)(argument)?;
        *self.state.borrow_mut() = Some((now, result.clone()));
        Ok(result)
    }

    /// The configured gating period.
    pub const fn period(&self) -> Duration {
        self.period
    }
}
