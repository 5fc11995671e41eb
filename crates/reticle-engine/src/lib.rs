//! Reticle engine crate.
//!
//! Immediate-mode debug geometry and manipulation gizmos. Callers stream
//! begin/vertex/end and gizmo calls once per frame; the engine keeps the
//! interaction state that has to survive between frames (which gizmo is being
//! dragged) and hands finished draw lists to the host for rasterization.

pub mod coords;
pub mod core;
pub mod gizmo;
pub mod id;
pub mod input;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod shapes;
pub mod state;

pub use crate::core::{Context, ContextConfig};
pub use gizmo::{GizmoConfig, GizmoMode};
pub use id::Id;
pub use input::{FrameInput, Key};
pub use paint::Color;
pub use scene::{DrawList, PrimitiveMode, PrimitiveType, Vertex};
