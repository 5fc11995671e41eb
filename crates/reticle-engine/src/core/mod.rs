//! The engine instance and its frame lifecycle.
//!
//! [`Context`] is the primary API: one value owns all state for one stream of
//! frames. The `current` module adds an optional thread-local "current
//! context" for call sites that prefer free functions.

mod config;
mod context;
pub mod current;

pub use config::ContextConfig;
pub use context::Context;
