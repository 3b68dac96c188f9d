//! ID generation logic
//!
//! Both entry points hold the instance lock for their whole body, waits included.

use tracing::{debug, warn};

use super::state::State;
use super::wait::{wait_past, wait_until};
use super::FlakeId;
use crate::clock::Clock;
use crate::error::ClockDrift;

impl<C: Clock> FlakeId<C> {
    /// Generate a new Flake ID, failing if the clock moved backwards.
    ///
    /// On [`ClockDrift`] the generator state is unchanged; the error carries the Unix
    /// millisecond the clock must reach before generation can succeed again.
    ///
    /// # Example
    ///
    /// ```
    /// use flakeid::FlakeId;
    ///
    /// let generator = FlakeId::new(7).unwrap();
    /// let id = generator.generate_id().unwrap();
    /// assert_eq!(generator.extract.node(id), 7);
    /// ```
    pub fn generate_id(&self) -> Result<u64, ClockDrift> {
        let mut state = self.state.lock();
        let now = self.now_ms();

        if now < state.last_timestamp {
            return Err(ClockDrift {
                next_timestamp: state.last_timestamp,
            });
        }

        Ok(self.issue(&mut state, now))
    }

    /// Generate a new Flake ID, waiting out any backward clock drift.
    ///
    /// Never fails. The wait has no upper bound and blocks every other caller of this
    /// instance while it lasts.
    pub fn generate_id_safe(&self) -> u64 {
        let mut state = self.state.lock();
        let mut now = self.now_ms();

        if now < state.last_timestamp {
            let drift = state.last_timestamp - now;
            warn!(
                drift_ms = drift,
                last_timestamp = state.last_timestamp,
                now,
                "system clock has drifted backwards; waiting {}ms",
                drift
            );
            now = wait_until(&self.clock, now, state.last_timestamp);
        }

        self.issue(&mut state, now)
    }

    /// Shared step once `timestamp >= state.last_timestamp` is known
    fn issue(&self, state: &mut State, mut timestamp: u64) -> u64 {
        if timestamp == state.last_timestamp
            && state.increment_sequence(self.config.max_sequence())
        {
            debug!(timestamp, "sequence exhausted; waiting for next millisecond");
            let now = self.now_ms();
            timestamp = wait_past(&self.clock, now, state.last_timestamp);
        }

        state.last_timestamp = timestamp;
        self.assemble_id(timestamp, state.sequence)
    }
}
