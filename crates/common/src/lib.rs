//! Shared types and configuration for the spritemark benchmark.
//!
//! # Invariants
//! - Every knob the benchmark loop depends on is a named `BenchConfig` field
//!   with a documented default; call sites never hardcode window or loop
//!   constants.

pub mod config;
pub mod types;

pub use config::{BenchConfig, ConfigError};
pub use types::Bounds;
