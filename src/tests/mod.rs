//! Crate-level test suites

pub mod test_utils;
