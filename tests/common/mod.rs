//! Common test utilities and helpers.

pub mod fixtures;
pub mod test_utils;
