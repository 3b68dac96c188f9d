//! FlakeIdConfig builder for constructing configuration

use super::{
    ConfigError, FlakeIdConfig, MAX_NODE_BITS, MAX_SEQUENCE_BITS, MIN_NODE_BITS,
    MIN_SEQUENCE_BITS, TOTAL_NODE_AND_SEQUENCE_BITS,
};
use crate::clock::{Clock, SystemClock};
use crate::generator::FlakeId;

/// Default configuration values
pub const DEFAULT_EPOCH: u64 = 1_480_291_200_000; // November 28, 2016 UTC
pub const DEFAULT_NODE_BITS: u8 = 10;
pub const DEFAULT_SEQUENCE_BITS: u8 = TOTAL_NODE_AND_SEQUENCE_BITS - DEFAULT_NODE_BITS;

/// Builder for FlakeIdConfig
///
/// Every setter validates immediately against the values configured so far, so a
/// builder that made it to [`build`](Self::build) always describes a valid layout.
#[derive(Debug, Clone, Copy)]
pub struct FlakeIdBuilder {
    pub(super) epoch: u64,
    pub(super) node: u16,
    pub(super) node_bits: u8,
    pub(super) sequence_bits: u8,
}

impl FlakeIdBuilder {
    /// Create a new FlakeIdBuilder with default values
    pub const fn new() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            node: 0,
            node_bits: DEFAULT_NODE_BITS,
            sequence_bits: DEFAULT_SEQUENCE_BITS,
        }
    }

    /// Set a custom epoch timestamp in milliseconds
    pub const fn epoch(mut self, epoch: u64) -> Self {
        self.epoch = epoch;
        self
    }

    /// Set the node value; it must fit in the current node length
    pub fn node(mut self, node: u16) -> Result<Self, ConfigError> {
        check_node(node, self.node_bits)?;
        self.node = node;
        Ok(self)
    }

    /// Set the number of bits for the node value (0-16)
    /// Sequence bits will be automatically set to (22 - node_bits)
    pub fn node_bits(mut self, bits: u8) -> Result<Self, ConfigError> {
        if !(MIN_NODE_BITS..=MAX_NODE_BITS).contains(&bits) {
            return Err(ConfigError::InvalidNodeBits { bits });
        }
        check_node(self.node, bits)?;
        self.node_bits = bits;
        self.sequence_bits = TOTAL_NODE_AND_SEQUENCE_BITS - bits;
        Ok(self)
    }

    /// Set the number of bits for the sequence (6-22)
    /// Node bits will be automatically set to (22 - sequence_bits)
    pub fn sequence_bits(mut self, bits: u8) -> Result<Self, ConfigError> {
        if !(MIN_SEQUENCE_BITS..=MAX_SEQUENCE_BITS).contains(&bits) {
            return Err(ConfigError::InvalidSequenceBits { bits });
        }
        let node_bits = TOTAL_NODE_AND_SEQUENCE_BITS - bits;
        check_node(self.node, node_bits)?;
        self.node_bits = node_bits;
        self.sequence_bits = bits;
        Ok(self)
    }

    /// Freeze the current values into a FlakeIdConfig
    pub fn build_config(self) -> FlakeIdConfig {
        FlakeIdConfig::from_builder(self)
    }

    /// Build a generator reading the system wall clock
    pub fn build(self) -> FlakeId<SystemClock> {
        self.build_with_clock(SystemClock)
    }

    /// Build a generator reading the given clock
    pub fn build_with_clock<C: Clock>(self, clock: C) -> FlakeId<C> {
        FlakeId::with_config(self.build_config(), clock)
    }
}

impl Default for FlakeIdBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn check_node(node: u16, bits: u8) -> Result<(), ConfigError> {
    if u32::from(node) > FlakeIdConfig::calculate_mask(bits) {
        return Err(ConfigError::NodeOverflow { node, bits });
    }
    Ok(())
}
