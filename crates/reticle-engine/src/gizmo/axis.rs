use glam::Vec3;

use crate::coords::{Line, Ray, Segment};
use crate::core::Context;
use crate::id::Id;
use crate::input::Key;
use crate::paint::Color;

use super::state::Interaction;

/// Fraction of the axis length left empty around the origin.
const AXIS_INSET: f32 = 0.2;

/// Hit depth of `ray` against the handle of `axis`, if within `tolerance`.
fn hit_axis(
    ray: &Ray,
    draw_at: Vec3,
    axis: Vec3,
    world_height: f32,
    tolerance: f32,
) -> Option<f32> {
    let segment = Segment::new(
        draw_at + axis * (AXIS_INSET * world_height),
        draw_at + axis * world_height,
    );
    ray.nearest_to_segment(&segment)
        .filter(|hit| hit.distance < tolerance)
        .map(|hit| hit.ray_t)
}

impl Context {
    /// Translation along `axis` through `draw_at`.
    ///
    /// While dragging, `out` is recomputed from its value at activation plus the
    /// cursor's travel along the axis. Returns true when `out` changed.
    pub fn gizmo_axis_translation(
        &mut self,
        id: Id,
        draw_at: Vec3,
        out: &mut Vec3,
        axis: Vec3,
        color: Color,
        world_height: f32,
        world_size: f32,
    ) -> bool {
        self.assert_recording("gizmo_axis_translation");
        let Some(axis) = axis.try_normalize() else {
            return false;
        };
        let ray = self.input.cursor_ray();
        let hit = hit_axis(&ray, draw_at, axis, world_height, world_size);

        let changed = match self.gizmo.interact(id, hit, self.keys.was_pressed(Key::SELECT)) {
            Interaction::Activated => {
                if let Some(h) = ray.nearest_to_line(&Line::new(*out, axis)) {
                    self.gizmo.drag.vec3 = *out;
                    self.gizmo.drag.scalar = h.line_t;
                }
                false
            }
            Interaction::Dragging => {
                let start = self.gizmo.drag.vec3;
                match ray.nearest_to_line(&Line::new(start, axis)) {
                    Some(h) => {
                        let next = start + axis * (h.line_t - self.gizmo.drag.scalar);
                        let changed = next != *out;
                        *out = next;
                        changed
                    }
                    None => false,
                }
            }
            Interaction::Passive => false,
        };

        self.draw_axis_handle(id, draw_at, axis, color, world_height, 2.0);
        changed
    }

    /// Scale along `axis` anchored at `draw_at`.
    ///
    /// The output is the value at activation multiplied by the ratio of the
    /// cursor's current to initial distance along the axis.
    pub fn gizmo_axis_scale(
        &mut self,
        id: Id,
        draw_at: Vec3,
        out: &mut f32,
        axis: Vec3,
        color: Color,
        world_height: f32,
        world_size: f32,
    ) -> bool {
        self.assert_recording("gizmo_axis_scale");
        let Some(axis) = axis.try_normalize() else {
            return false;
        };
        let ray = self.input.cursor_ray();
        let hit = hit_axis(&ray, draw_at, axis, world_height, world_size);
        let line = Line::new(draw_at, axis);

        let changed = match self.gizmo.interact(id, hit, self.keys.was_pressed(Key::SELECT)) {
            Interaction::Activated => {
                if let Some(h) = ray.nearest_to_line(&line) {
                    self.gizmo.drag.vec3 = line.at(h.line_t);
                    self.gizmo.drag.scalar = *out;
                }
                false
            }
            Interaction::Dragging => {
                let t0 = (self.gizmo.drag.vec3 - draw_at).dot(axis);
                match ray.nearest_to_line(&line) {
                    Some(h) if t0.abs() > f32::EPSILON => {
                        let next = self.gizmo.drag.scalar * (h.line_t / t0);
                        let changed = next != *out;
                        *out = next;
                        changed
                    }
                    _ => false,
                }
            }
            Interaction::Passive => false,
        };

        self.draw_axis_handle(id, draw_at, axis, color, world_height, 3.0);
        changed
    }

    /// Shaft plus a tip point `tip_scale` times the line thickness.
    fn draw_axis_handle(
        &mut self,
        id: Id,
        draw_at: Vec3,
        axis: Vec3,
        color: Color,
        world_height: f32,
        tip_scale: f32,
    ) {
        let color = self.gizmo_color(id, color);
        let thickness = self.config.gizmo.size_pixels;
        let start = draw_at + axis * (AXIS_INSET * world_height);
        let end = draw_at + axis * world_height;

        self.with_gizmo_draw_state(|ctx| {
            ctx.begin_lines();
            ctx.vertex_with(start, thickness, color);
            ctx.vertex_with(end, thickness, color);
            ctx.end();
            ctx.begin_points();
            ctx.vertex_with(end, thickness * tip_scale, color);
            ctx.end();
        });
    }
}
