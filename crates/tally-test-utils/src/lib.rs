#![deny(unsafe_code)]

//! Shared test utilities for the tally workspace.
//!
//! Provides reusable fixtures, config builders, and the key-script driver so
//! that individual crate tests stay concise and consistent.
//!
//! Add this crate as a `[dev-dependency]` in any workspace member:
//!
//! ```toml
//! [dev-dependencies]
//! tally-test-utils = { workspace = true }
//! ```

pub mod config;
pub mod script;
pub mod tracing_setup;
