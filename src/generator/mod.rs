//! Core Flake ID generator implementation
//!
//! Split into modules for testability:
//! - `state` - Last timestamp and sequence, guarded by the instance lock
//! - `wait` - Clock catch-up loops
//! - `generate` - ID generation logic

mod generate;
mod state;
pub(crate) mod wait;

use parking_lot::Mutex;

use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, FlakeIdBuilder, FlakeIdConfig};
use crate::extractor::FlakeIdExtractor;

use state::State;

/// Flake ID generator.
///
/// Every call runs inside one critical section per instance, including any wait for the
/// clock to catch up, so IDs from one instance are unique and never decrease. Separate
/// instances share nothing.
#[derive(Debug)]
pub struct FlakeId<C = SystemClock> {
    state: Mutex<State>,
    clock: C,
    node_prefix: u64,

    /// Configuration for this generator
    pub config: FlakeIdConfig,
    /// Extractor for decomposing IDs
    pub extract: FlakeIdExtractor,
}

impl FlakeId<SystemClock> {
    /// Create a new configuration builder
    pub fn builder() -> FlakeIdBuilder {
        FlakeIdBuilder::new()
    }

    /// Create with default layout and the given node value
    pub fn new(node: u16) -> Result<Self, ConfigError> {
        Ok(FlakeIdBuilder::new().node(node)?.build())
    }
}

impl<C: Clock> FlakeId<C> {
    /// Create from a frozen configuration and a clock
    pub fn with_config(config: FlakeIdConfig, clock: C) -> Self {
        Self {
            state: Mutex::new(State::new()),
            clock,
            node_prefix: Self::compute_node_prefix(&config),
            config,
            extract: FlakeIdExtractor::new(config),
        }
    }

    /// The clock this generator reads
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[inline(always)]
    fn compute_node_prefix(config: &FlakeIdConfig) -> u64 {
        config.compose(0, config.node(), 0)
    }

    #[inline(always)]
    pub(crate) fn now_ms(&self) -> u64 {
        self.clock.current_millis()
    }

    #[inline(always)]
    pub(crate) fn assemble_id(&self, timestamp: u64, sequence: u32) -> u64 {
        let offset = timestamp.wrapping_sub(self.config.epoch());
        ((offset & self.config.timestamp_mask()) << self.config.timestamp_shift())
            | self.node_prefix
            | u64::from(sequence)
    }
}
