//! Time sources for Flake ID generation
//!
//! The generator never reads the system time directly; it asks a [`Clock`]. Tests plug in
//! scripted clocks to exercise drift and overflow without sleeping.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A source of wall-clock time in milliseconds since the Unix epoch.
///
/// # Example
///
/// ```
/// use flakeid::Clock;
///
/// struct FixedTime;
/// impl Clock for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// assert_eq!(FixedTime.current_millis(), 1234);
/// ```
pub trait Clock {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> u64;

    /// Blocks the calling thread until roughly `deadline`.
    ///
    /// May return early for any reason, including spuriously. Callers re-read
    /// [`current_millis`](Self::current_millis) after every call.
    fn park_until(&self, deadline: u64) {
        let now = self.current_millis();
        if deadline > now {
            thread::park_timeout(Duration::from_millis(deadline - now));
        }
    }
}

/// The system wall clock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline(always)]
    fn current_millis(&self) -> u64 {
        // A clock set before 1970 reads as 0 and is handled as backward drift
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline(always)]
    fn current_millis(&self) -> u64 {
        (**self).current_millis()
    }

    fn park_until(&self, deadline: u64) {
        (**self).park_until(deadline)
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    #[inline(always)]
    fn current_millis(&self) -> u64 {
        (**self).current_millis()
    }

    fn park_until(&self, deadline: u64) {
        (**self).park_until(deadline)
    }
}
