//! HSA Roster Library
//!
//! This module exposes the configuration, cache, data, rules, and server
//! modules for use by the binary and in integration tests.

pub mod cache;
pub mod cli;
pub mod data;
pub mod hsa;
pub mod server;
