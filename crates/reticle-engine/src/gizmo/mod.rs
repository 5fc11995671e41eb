//! Manipulation gizmos.
//!
//! The low-level elements (axis, plane, ring) each hit-test the cursor ray,
//! compete for "hot" by depth, and drive a drag while "active". The composite
//! gizmos (`gizmo_translation`, `gizmo_rotation`, `gizmo_scale_local`, `gizmo`)
//! are built from those elements under a scoped id.

mod angle;
mod axis;
mod ops;
mod plane;
mod state;

pub use state::{DragState, GizmoState};

use glam::Mat4;

use crate::core::Context;
use crate::id::Id;
use crate::paint::Color;

/// Which manipulation the combined [`Context::gizmo`](crate::Context::gizmo) performs.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum GizmoMode {
    #[default]
    Translation,
    Rotation,
    Scale,
}

/// Gizmo sizing and look.
#[derive(Debug, Clone)]
pub struct GizmoConfig {
    /// Axis length / ring radius in screen pixels.
    pub height_pixels: f32,
    /// Line thickness and hit tolerance in screen pixels.
    pub size_pixels: f32,
    /// Color of hot and active elements.
    pub highlight_color: Color,
    /// Alpha of filled plane handles.
    pub plane_alpha: f32,
    /// Segments per rotation ring.
    pub ring_segments: usize,
}

impl Default for GizmoConfig {
    fn default() -> Self {
        Self {
            height_pixels: 64.0,
            size_pixels: 5.0,
            highlight_color: Color::from_rgba_u8(0xff, 0xc7, 0x45, 0xff),
            plane_alpha: 0.5,
            ring_segments: 32,
        }
    }
}

impl Context {
    /// Base color, or the highlight color when `id` is hot or active.
    pub(crate) fn gizmo_color(&self, id: Id, base: Color) -> Color {
        if self.gizmo.is_highlighted(id) {
            self.config.gizmo.highlight_color
        } else {
            base
        }
    }

    /// Runs `f` with world-space, unsorted, fully opaque draw state.
    pub(crate) fn with_gizmo_draw_state<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push_draw_state();
        self.push_matrix(Mat4::IDENTITY);
        self.set_sorting(false);
        self.set_alpha(1.0);
        let out = f(self);
        self.pop_matrix();
        self.pop_draw_state();
        out
    }
}
