//! # FlakeId
//!
//! A Rust implementation of a Snowflake-like ID generator with a 41-bit timestamp and a
//! configurable split of the remaining 22 bits between node and sequence.
//!
//! Generate 64-bit unique identifiers that are:
//! - 📈 Time-sorted
//! - 🔄 Monotonic per generator
//! - 🔒 Thread-safe
//! - 🌐 Coordination-free across nodes with distinct node values
//!
//! ```text
//! | 0 | 41 bits: ms since epoch | node_bits: node | sequence_bits: sequence |
//! ```
//!
//! ```
//! use flakeid::FlakeId;
//!
//! let generator = FlakeId::builder()
//!     .node_bits(12)?
//!     .node(42)?
//!     .build();
//!
//! let id = generator.generate_id_safe();
//! let (_ts, node, _seq) = generator.extract.decompose(id);
//! assert_eq!(node, 42);
//! # Ok::<(), flakeid::FlakeIdError>(())
//! ```

#![forbid(unsafe_code)]

mod clock;
mod config;
mod error;
mod extractor;
mod generator;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use clock::{Clock, SystemClock};
pub use config::{ConfigError, FlakeIdBuilder, FlakeIdConfig};
pub use config::{DEFAULT_EPOCH, DEFAULT_NODE_BITS, DEFAULT_SEQUENCE_BITS};
pub use config::{
    MAX_NODE_BITS, MAX_SEQUENCE_BITS, MIN_NODE_BITS, MIN_SEQUENCE_BITS, TIMESTAMP_BITS,
    TOTAL_NODE_AND_SEQUENCE_BITS,
};
pub use error::{ClockDrift, FlakeIdError};
pub use extractor::FlakeIdExtractor;
pub use generator::FlakeId;
