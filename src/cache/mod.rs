//! Cache module for the fetched employee roster
//!
//! This module provides an in-memory, time-bounded cache holding the last
//! roster fetched from the roster API. It lives for the life of the process
//! and is shared between request handlers.

mod manager;

pub use manager::{CachedData, RosterCache, DEFAULT_TTL};
