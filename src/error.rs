use thiserror::Error;

use crate::clock::Clock;
use crate::config::ConfigError;
use crate::generator::wait::wait_until;

/// The clock reported a time earlier than the last timestamp an ID was issued for.
///
/// Returned by [`FlakeId::generate_id`](crate::FlakeId::generate_id); the generator state
/// is left untouched, so the caller may wait, retry or give up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("system clock is running backwards; wait until {next_timestamp} to continue generating IDs")]
pub struct ClockDrift {
    /// Unix millisecond the clock has to reach before IDs can be issued again
    pub next_timestamp: u64,
}

impl ClockDrift {
    /// Milliseconds left until `next_timestamp`, given the current clock reading
    #[inline]
    pub const fn remaining_millis(&self, now: u64) -> u64 {
        self.next_timestamp.saturating_sub(now)
    }

    /// Block until `clock` reaches `next_timestamp`, returning the observed time
    pub fn wait<C: Clock + ?Sized>(&self, clock: &C) -> u64 {
        wait_until(clock, clock.current_millis(), self.next_timestamp)
    }
}

/// Represents errors that can occur during Flake ID operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlakeIdError {
    /// Rejected builder parameters
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    /// Clock moved backwards during generation
    #[error(transparent)]
    ClockDrift(#[from] ClockDrift),
}
