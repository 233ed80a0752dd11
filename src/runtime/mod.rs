//! Runtime setup for the demo binary.
//!
//! Currently this only holds the observability bootstrap ([`setup_tracing`]).
//! Configuration management would land here if the application grew settings.

pub mod tracing;

pub use tracing::*;
