//! Input subsystem.
//!
//! The host fills a [`FrameInput`] snapshot every frame. The context keeps the
//! current and previous key snapshots in a [`KeyTable`] to derive press and
//! release edges.

mod state;
mod types;

pub use state::KeyTable;
pub use types::{FrameInput, Key};
