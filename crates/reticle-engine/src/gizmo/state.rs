use glam::{Mat3, Vec3};

use crate::id::Id;
use crate::input::{Key, KeyTable};

use super::GizmoMode;

/// Reference values captured when a gizmo becomes active.
///
/// Each element decides what the fields mean; only one element is active at a
/// time so a single store is enough.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragState {
    pub vec3: Vec3,
    pub mat3: Mat3,
    pub scalar: f32,
}

impl Default for DragState {
    fn default() -> Self {
        Self { vec3: Vec3::ZERO, mat3: Mat3::IDENTITY, scalar: 0.0 }
    }
}

/// Outcome of [`GizmoState::interact`] for one element.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Interaction {
    /// Not active; may or may not have become hot.
    Passive,
    /// Became active this call; capture drag references now.
    Activated,
    /// Active from an earlier frame; recompute the output.
    Dragging,
}

/// Hot/active tracking that persists across frames.
///
/// States:
/// - idle: `active_id` and `hot_id` invalid
/// - hovering: `hot_id` valid, `active_id` invalid
/// - dragging: `active_id` valid (and equal to `hot_id`) until select is released
#[derive(Debug, Clone)]
pub struct GizmoState {
    pub(crate) hot_id: Id,
    pub(crate) hot_depth: f32,
    pub(crate) active_id: Id,
    /// Hot id resolved at the end of the previous frame.
    pub(crate) prev_hot_id: Id,
    pub(crate) drag: DragState,
    pub(crate) mode: GizmoMode,
}

impl Default for GizmoState {
    fn default() -> Self {
        Self {
            hot_id: Id::INVALID,
            hot_depth: f32::INFINITY,
            active_id: Id::INVALID,
            prev_hot_id: Id::INVALID,
            drag: DragState::default(),
            mode: GizmoMode::default(),
        }
    }
}

impl GizmoState {
    #[inline]
    pub fn hot_id(&self) -> Id {
        self.hot_id
    }

    #[inline]
    pub fn hot_depth(&self) -> f32 {
        self.hot_depth
    }

    #[inline]
    pub fn active_id(&self) -> Id {
        self.active_id
    }

    #[inline]
    pub fn mode(&self) -> GizmoMode {
        self.mode
    }

    #[inline]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Frame-start transition, run after the key table has advanced.
    pub(crate) fn begin_frame(&mut self, keys: &KeyTable) {
        if self.active_id.is_valid() && !keys.is_down(Key::SELECT) {
            log::debug!("gizmo {:?} released", self.active_id);
            self.active_id = Id::INVALID;
        }

        // An active drag keeps exclusive control; otherwise hover is re-evaluated.
        if !self.active_id.is_valid() {
            self.prev_hot_id = self.hot_id;
            self.hot_id = Id::INVALID;
            self.hot_depth = f32::INFINITY;

            let requested = if keys.was_pressed(Key::GIZMO_TRANSLATION) {
                Some(GizmoMode::Translation)
            } else if keys.was_pressed(Key::GIZMO_ROTATION) {
                Some(GizmoMode::Rotation)
            } else if keys.was_pressed(Key::GIZMO_SCALE) {
                Some(GizmoMode::Scale)
            } else {
                None
            };
            if let Some(mode) = requested {
                if mode != self.mode {
                    log::debug!("gizmo mode {:?} -> {:?}", self.mode, mode);
                    self.mode = mode;
                }
            }
        }
    }

    /// Makes `id` hot if nothing is active, it `intersects`, and it is nearer
    /// than the current hot candidate.
    pub fn make_hot(&mut self, id: Id, depth: f32, intersects: bool) -> bool {
        if !self.active_id.is_valid() && intersects && depth < self.hot_depth {
            self.hot_id = id;
            self.hot_depth = depth;
            return true;
        }
        false
    }

    /// Clears hot and active state outright.
    pub fn reset_id(&mut self) {
        self.active_id = Id::INVALID;
        self.hot_id = Id::INVALID;
        self.prev_hot_id = Id::INVALID;
        self.hot_depth = f32::INFINITY;
    }

    /// Whether `id` should draw highlighted.
    #[inline]
    pub(crate) fn is_highlighted(&self, id: Id) -> bool {
        if self.active_id.is_valid() {
            self.active_id == id
        } else {
            self.prev_hot_id == id
        }
    }

    /// Runs hover and activation for one element.
    ///
    /// `hit` is the element's depth along the cursor ray, `None` when the ray
    /// misses. Activation needs a select press while the element is both under
    /// the cursor and was the nearest candidate of the previous frame.
    pub(crate) fn interact(
        &mut self,
        id: Id,
        hit: Option<f32>,
        select_pressed: bool,
    ) -> Interaction {
        if self.active_id == id && id.is_valid() {
            return Interaction::Dragging;
        }
        if self.active_id.is_valid() {
            return Interaction::Passive;
        }

        let Some(depth) = hit else {
            return Interaction::Passive;
        };
        self.make_hot(id, depth, true);

        if select_pressed && self.prev_hot_id == id {
            log::debug!("gizmo {:?} activated at depth {}", id, depth);
            self.active_id = id;
            self.hot_id = id;
            self.hot_depth = depth;
            return Interaction::Activated;
        }

        Interaction::Passive
    }
}
