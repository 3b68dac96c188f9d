//! Configuration for Flake ID generator

mod builder;

use thiserror::Error;

pub use builder::FlakeIdBuilder;
pub use builder::{DEFAULT_EPOCH, DEFAULT_NODE_BITS, DEFAULT_SEQUENCE_BITS};

/// Width of the timestamp field (fixed)
pub const TIMESTAMP_BITS: u8 = 41;
/// Node + sequence width (fixed); together with the timestamp this leaves the sign bit clear
pub const TOTAL_NODE_AND_SEQUENCE_BITS: u8 = 22;

pub const MIN_NODE_BITS: u8 = 0;
pub const MAX_NODE_BITS: u8 = 16;
pub const MIN_SEQUENCE_BITS: u8 = TOTAL_NODE_AND_SEQUENCE_BITS - MAX_NODE_BITS;
pub const MAX_SEQUENCE_BITS: u8 = TOTAL_NODE_AND_SEQUENCE_BITS - MIN_NODE_BITS;

const TIMESTAMP_MASK: u64 = (1u64 << TIMESTAMP_BITS) - 1;

/// Errors raised by [`FlakeIdBuilder`] setters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Node length outside of [0, 16]
    #[error("node length {bits} must be between 0 and 16 bits")]
    InvalidNodeBits { bits: u8 },
    /// Sequence length outside of [6, 22]
    #[error("sequence length {bits} must be between 6 and 22 bits")]
    InvalidSequenceBits { bits: u8 },
    /// Node value does not fit within the node length
    #[error("node value {node} does not fit within desired node length of {bits} bit{}", plural(.bits))]
    NodeOverflow { node: u16, bits: u8 },
}

fn plural(bits: &u8) -> &'static str {
    if *bits == 1 {
        ""
    } else {
        "s"
    }
}

/// Immutable bit layout and node identity for a generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlakeIdConfig {
    epoch: u64,
    node: u16,
    node_bits: u8,
    sequence_bits: u8,
    node_mask: u16,
    sequence_mask: u32,
}

impl FlakeIdConfig {
    /// Calculate mask for given number of bits
    #[inline]
    pub(crate) const fn calculate_mask(bits: u8) -> u32 {
        (1u32 << bits) - 1
    }

    /// Create config from builder
    pub(crate) fn from_builder(b: FlakeIdBuilder) -> Self {
        Self {
            epoch: b.epoch,
            node: b.node,
            node_bits: b.node_bits,
            sequence_bits: b.sequence_bits,
            node_mask: Self::calculate_mask(b.node_bits) as u16,
            sequence_mask: Self::calculate_mask(b.sequence_bits),
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> FlakeIdBuilder {
        FlakeIdBuilder::new()
    }

    /// Reference point, in Unix milliseconds, subtracted from every timestamp
    #[inline(always)]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Node value encoded into every ID
    #[inline(always)]
    pub const fn node(&self) -> u16 {
        self.node
    }

    #[inline(always)]
    pub const fn node_bits(&self) -> u8 {
        self.node_bits
    }

    #[inline(always)]
    pub const fn sequence_bits(&self) -> u8 {
        self.sequence_bits
    }

    #[inline(always)]
    pub const fn max_node(&self) -> u16 {
        self.node_mask
    }

    /// Largest sequence value; `max_sequence() + 1` IDs fit in one millisecond
    #[inline(always)]
    pub const fn max_sequence(&self) -> u32 {
        self.sequence_mask
    }

    /// Last Unix millisecond the 41-bit timestamp field can represent for this epoch
    #[inline(always)]
    pub const fn max_timestamp(&self) -> u64 {
        self.epoch.saturating_add(TIMESTAMP_MASK)
    }

    /// Encode an epoch-relative timestamp, node value and sequence value into an ID.
    ///
    /// The offset is truncated to 41 bits, so the sign bit of the result is never set.
    #[inline(always)]
    pub const fn compose(&self, offset: u64, node: u16, sequence: u32) -> u64 {
        ((offset & TIMESTAMP_MASK) << self.timestamp_shift())
            | (((node & self.node_mask) as u64) << self.node_shift())
            | ((sequence & self.sequence_mask) as u64)
    }

    #[inline(always)]
    pub(crate) const fn timestamp_shift(&self) -> u8 {
        TOTAL_NODE_AND_SEQUENCE_BITS
    }

    #[inline(always)]
    pub(crate) const fn node_shift(&self) -> u8 {
        self.sequence_bits
    }

    #[inline(always)]
    pub(crate) const fn timestamp_mask(&self) -> u64 {
        TIMESTAMP_MASK
    }
}

impl Default for FlakeIdConfig {
    fn default() -> Self {
        FlakeIdBuilder::new().build_config()
    }
}
