#![forbid(unsafe_code)]

//! Core: geometry primitives and logging plumbing for the rowtui layout engine.

pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
