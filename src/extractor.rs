use chrono::{DateTime, Utc};

use crate::config::FlakeIdConfig;

/// Flake ID component extractor
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FlakeIdExtractor {
    config: FlakeIdConfig,
}

impl FlakeIdExtractor {
    /// Create a new extractor for IDs laid out by the given configuration
    pub const fn new(config: FlakeIdConfig) -> Self {
        Self { config }
    }

    /// Extract the timestamp component (milliseconds since the configured epoch)
    #[inline(always)]
    pub fn timestamp(&self, id: u64) -> u64 {
        (id >> self.config.timestamp_shift()) & self.config.timestamp_mask()
    }

    /// Extract the timestamp as Unix milliseconds
    ///
    /// Wraps around `u64::MAX` the same way encoding wraps below the epoch.
    #[inline(always)]
    pub fn unix_millis(&self, id: u64) -> u64 {
        self.timestamp(id).wrapping_add(self.config.epoch())
    }

    /// Extract node component from a Flake ID
    #[inline(always)]
    pub fn node(&self, id: u64) -> u16 {
        ((id >> self.config.node_shift()) & u64::from(self.config.max_node())) as u16
    }

    /// Extract sequence component from a Flake ID
    #[inline(always)]
    pub fn sequence(&self, id: u64) -> u32 {
        (id & u64::from(self.config.max_sequence())) as u32
    }

    /// Decompose a Flake ID into its components: timestamp, node, and sequence
    #[inline]
    pub fn decompose(&self, id: u64) -> (u64, u16, u32) {
        (self.timestamp(id), self.node(id), self.sequence(id))
    }

    /// Creation time of a Flake ID, if it is representable as a UTC date
    pub fn datetime(&self, id: u64) -> Option<DateTime<Utc>> {
        let millis = self.timestamp(id).checked_add(self.config.epoch())?;
        let millis = i64::try_from(millis).ok()?;
        DateTime::<Utc>::from_timestamp_millis(millis)
    }
}
