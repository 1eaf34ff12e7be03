//! Integration tests for the magicsniff library.
//!
//! These tests build small but structurally faithful files in memory or on
//! disk and run them through the public classification operations.

mod common;
mod sniff;
