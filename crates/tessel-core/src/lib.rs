#![forbid(unsafe_code)]

//! Core: geometry, scoped state overrides, logging, and terminal capabilities.

pub mod auto_reset;
pub mod geometry;
pub mod logging;
pub mod terminal_capabilities;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace};
