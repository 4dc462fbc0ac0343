//! Rosette Core
//!
//! Shared plumbing for the Rosette crates: logging setup, configuration,
//! profiling scopes and the hash collections used across the workspace.

pub mod alloc;
pub mod config;
pub mod logging;
pub mod profiling;

pub use config::{Config, ProfilingMode};

/// Set up logging and profiling from `config`.
pub fn init(config: &Config) {
    logging::init_with(config);
    profiling::init_profiling(config.profiling);
}
