//! Thread-safe variant of the throttle gate.
//!
//! Same gating semantics as [`Throttled`](super::Throttled), with the
//! state behind a `parking_lot::Mutex` so the wrapper can be shared
//! across threads.

use parking_lot::Mutex;
use std::time::{Duration, Instant};

use super::clock::{Clock, SystemClock};

/// A rate-limited function shareable across threads.
///
/// Built via [`Throttle::wrap_shared`](super::Throttle::wrap_shared).
/// Gating follows the same rules as [`Throttled`](super::Throttled):
/// first call executes, calls within the period replay the cached result,
/// elapse of the period reopens the gate.
///
/// The lock is **not** held while the wrapped function runs, so the
/// single-execution-per-window guarantee is relaxed under contention:
/// threads that concurrently observe an open gate each execute, and the
/// last completion wins the cache. Holding the lock across the call would
/// instead serialize callers behind an arbitrarily slow function.
///
/// # Examples
///
/// ```rust
/// use funcomb::control::throttle;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let wrapped = Arc::new(
///     throttle(Duration::from_secs(60)).wrap_shared(|x: i32| x * 2),
/// );
///
/// let handle = {
///     let wrapped = Arc::clone(&wrapped);
///     std::thread::spawn(move || wrapped.call(21))
/// };
///
/// let from_thread = handle.join().unwrap();
/// // Whichever call ran first, both observe a result of an execution.
/// assert_eq!(from_thread, 42);
/// assert_eq!(wrapped.call(5), 42); // gated: replays the cache
/// ```
pub struct ConcurrentThrottled<F, R, C = SystemClock> {
    function: F,
    period: Duration,
    clock: C,
    state: Mutex<Option<(Instant, R)>>,
}

impl<F, R: Clone, C: Clock> ConcurrentThrottled<F, R, C> {
    pub(super) fn new(period: Duration, clock: C, function: F) -> Self {
        Self {
            function,
            period,
            clock,
            state: Mutex::new(None),
        }
    }

    /// Invokes the wrapped function, or replays the cached result while
    /// the gate is closed.
    pub fn call<A>(&self, argument: A) -> R
    where
        F: Fn(A) -> R,
    {
        let now = self.clock.now();
        {
            let state = self.state.lock();
            if let Some((last_run_at, cached)) = state.as_ref() {
                if now.duration_since(*last_run_at) < self.period {
                    return cached.clone();
                }
            }
        }

        let result = (self.function)(argument);
        *self.state.lock() = Some((now, result.clone()));
        result
    }

    /// The configured gating period.
    pub const fn period(&self) -> Duration {
        self.period
    }
}
