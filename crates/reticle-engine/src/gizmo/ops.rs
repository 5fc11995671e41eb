use glam::{Mat3, Mat4, Vec3};

use crate::core::Context;
use crate::paint::Color;

use super::GizmoMode;

const AXES: [(&str, Vec3, Color); 3] = [
    ("x", Vec3::X, Color::RED),
    ("y", Vec3::Y, Color::GREEN),
    ("z", Vec3::Z, Color::BLUE),
];

/// Plane handles: name, normal, the two in-plane axes, color.
const PLANES: [(&str, Vec3, Vec3, Vec3, Color); 3] = [
    ("yz", Vec3::X, Vec3::Y, Vec3::Z, Color::RED),
    ("zx", Vec3::Y, Vec3::Z, Vec3::X, Color::GREEN),
    ("xy", Vec3::Z, Vec3::X, Vec3::Y, Color::BLUE),
];

/// Plane handle half-extent and centre offset, as fractions of the gizmo height.
const PLANE_HALF_EXTENT: f32 = 0.15;
const PLANE_OFFSET: f32 = 0.4;

/// Splits a 3x3 into unit-column rotation and per-column scale.
/// Zero columns keep the corresponding identity axis.
fn split_rotation_scale(m: Mat3) -> (Mat3, Vec3) {
    let cols = [m.x_axis, m.y_axis, m.z_axis];
    let scale = Vec3::new(cols[0].length(), cols[1].length(), cols[2].length());
    let unit = |c: Vec3, fallback: Vec3| c.try_normalize().unwrap_or(fallback);
    let rotation = Mat3::from_cols(
        unit(cols[0], Vec3::X),
        unit(cols[1], Vec3::Y),
        unit(cols[2], Vec3::Z),
    );
    (rotation, scale)
}

impl Context {
    /// World-space translation gizmo: three axes and three plane handles.
    pub fn gizmo_translation(&mut self, name: &str, out: &mut Vec3) -> bool {
        self.push_id_named(name);

        let draw_at = *out;
        let height = self.pixels_to_world_size(draw_at, self.config.gizmo.height_pixels);
        let size = self.pixels_to_world_size(draw_at, self.config.gizmo.size_pixels);
        let mut changed = false;

        for (plane, normal, u, v, color) in PLANES {
            let id = self.make_id(plane);
            let center = draw_at + (u + v) * (PLANE_OFFSET * height);
            let half_extent = PLANE_HALF_EXTENT * height;
            changed |= self.gizmo_plane_translation(id, center, out, normal, color, half_extent);
        }
        for (axis_name, axis, color) in AXES {
            let id = self.make_id(axis_name);
            changed |= self.gizmo_axis_translation(id, draw_at, out, axis, color, height, size);
        }

        self.pop_id();
        changed
    }

    /// World-space rotation gizmo: one ring per axis around `draw_at`.
    ///
    /// While a ring is dragged, `out` is the rotation at activation pre-multiplied
    /// by the ring's angle delta.
    pub fn gizmo_rotation(&mut self, name: &str, draw_at: Vec3, out: &mut Mat3) -> bool {
        self.push_id_named(name);

        let radius = self.pixels_to_world_size(draw_at, self.config.gizmo.height_pixels);
        let size = self.pixels_to_world_size(draw_at, self.config.gizmo.size_pixels);
        let mut changed = false;

        for (axis_name, axis, color) in AXES {
            let id = self.make_id(axis_name);
            let was_active = self.gizmo.active_id == id;

            let mut angle = 0.0;
            if self.gizmo_axis_angle(id, draw_at, axis, &mut angle, color, radius, size) {
                *out = Mat3::from_axis_angle(axis, angle) * self.gizmo.drag.mat3;
                changed = true;
            }
            if !was_active && self.gizmo.active_id == id {
                self.gizmo.drag.mat3 = *out;
            }
        }

        self.pop_id();
        changed
    }

    /// Per-axis scale gizmo oriented and positioned by the current transform.
    pub fn gizmo_scale_local(&mut self, name: &str, out: &mut Vec3) -> bool {
        self.push_id_named(name);

        let m = self.matrix();
        let origin = m.w_axis.truncate();
        let (rotation, _) = split_rotation_scale(Mat3::from_mat4(m));
        let height = self.pixels_to_world_size(origin, self.config.gizmo.height_pixels);
        let size = self.pixels_to_world_size(origin, self.config.gizmo.size_pixels);
        let mut changed = false;

        for (i, (axis_name, _, color)) in AXES.into_iter().enumerate() {
            let id = self.make_id(axis_name);
            let axis = rotation.col(i);
            let mut value = out[i];
            if self.gizmo_axis_scale(id, origin, &mut value, axis, color, height, size) {
                out[i] = value;
                changed = true;
            }
        }

        self.pop_id();
        changed
    }

    /// Combined transform gizmo; the global [`GizmoMode`] picks the manipulation.
    ///
    /// `out` is decomposed into translation, rotation and per-axis scale; only
    /// the manipulated part is written back.
    pub fn gizmo(&mut self, name: &str, out: &mut Mat4) -> bool {
        let translation = out.w_axis.truncate();
        let (rotation, scale) = split_rotation_scale(Mat3::from_mat4(*out));

        match self.gizmo.mode {
            GizmoMode::Translation => {
                let mut t = translation;
                if !self.gizmo_translation(name, &mut t) {
                    return false;
                }
                out.w_axis = t.extend(1.0);
            }
            GizmoMode::Rotation => {
                let mut r = rotation;
                if !self.gizmo_rotation(name, translation, &mut r) {
                    return false;
                }
                *out = compose(translation, r, scale);
            }
            GizmoMode::Scale => {
                let mut s = scale;
                self.push_matrix(compose(translation, rotation, Vec3::ONE));
                let changed = self.gizmo_scale_local(name, &mut s);
                self.pop_matrix();
                if !changed {
                    return false;
                }
                *out = compose(translation, rotation, s);
            }
        }
        true
    }
}

fn compose(translation: Vec3, rotation: Mat3, scale: Vec3) -> Mat4 {
    Mat4::from_cols(
        (rotation.x_axis * scale.x).extend(0.0),
        (rotation.y_axis * scale.y).extend(0.0),
        (rotation.z_axis * scale.z).extend(0.0),
        translation.extend(1.0),
    )
}
