//! The clock/sleep seam used by the invocation gates.
//!
//! Gates never read the wall clock directly; they go through a [`Clock`]
//! so that tests can drive time by hand with [`ManualClock`] instead of
//! sleeping for real.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic clock paired with a blocking sleep primitive.
///
/// The two environmental dependencies of the gates: `throttle` only calls
/// [`now`](Self::now); `debounce` only calls [`sleep`](Self::sleep).
pub trait Clock {
    /// The current instant. Must be monotonic: never earlier than a
    /// previously returned instant.
    fn now(&self) -> Instant;

    /// Blocks the calling thread for `duration`.
    fn sleep(&self, duration: Duration);
}

/// The real clock: `Instant::now` and `thread::sleep`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// A hand-driven clock for tests.
///
/// Time stands still until [`advance`](Self::advance) is called; `sleep`
/// advances instead of blocking. Clones share the same underlying instant,
/// so a test can keep one handle while a gate owns another.
///
/// # Examples
///
/// ```rust
/// use funcomb::control::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let start = clock.now();
///
/// clock.advance(Duration::from_micros(250));
/// assert_eq!(clock.now() - start, Duration::from_micros(250));
/// ```
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    /// Creates a clock frozen at the current real instant.
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Moves the clock forward by `duration`.
    pub fn advance(&self, duration: Duration) {
        self.now.set(self.now.get() + duration);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}
