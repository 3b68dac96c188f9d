//! Wait strategy for clock catch-up and sequence exhaustion
//!
//! Timed waits may return early, so every wake re-reads the clock and checks the
//! condition again instead of trusting the wait to have lasted long enough.

use crate::clock::Clock;

/// Park until the clock reads at least `target`, starting from an already observed `now`.
///
/// Returns the first reading that satisfies the condition. There is no timeout.
#[inline]
pub(crate) fn wait_until<C>(clock: &C, mut now: u64, target: u64) -> u64
where
    C: Clock + ?Sized,
{
    while now < target {
        clock.park_until(target);
        now = clock.current_millis();
    }
    now
}

/// Park until the clock reads strictly later than `timestamp`
#[inline]
pub(crate) fn wait_past<C>(clock: &C, now: u64, timestamp: u64) -> u64
where
    C: Clock + ?Sized,
{
    wait_until(clock, now, timestamp.saturating_add(1))
}
