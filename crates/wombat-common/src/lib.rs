//! Common utilities for the Wombat attribute conversion layer.
//!
//! This crate provides shared infrastructure used by the conversion crates:
//! - **Warning System** - colored terminal output when input is degraded
//!   instead of rejected

pub mod warning;
