use glam::Vec3;

use crate::coords::Plane;
use crate::core::Context;
use crate::id::Id;
use crate::input::Key;
use crate::paint::Color;

use super::state::Interaction;

impl Context {
    /// Rotation ring around `axis` through `draw_at`; `out` is an angle in radians.
    ///
    /// The ring is hit when the cursor ray crosses its plane within
    /// `world_size` of `world_radius`. While dragging, `out` is the value at
    /// activation plus the signed angle between the initial and current
    /// cursor directions around the axis.
    pub fn gizmo_axis_angle(
        &mut self,
        id: Id,
        draw_at: Vec3,
        axis: Vec3,
        out: &mut f32,
        color: Color,
        world_radius: f32,
        world_size: f32,
    ) -> bool {
        self.assert_recording("gizmo_axis_angle");
        let Some(axis) = axis.try_normalize() else {
            return false;
        };
        let ray = self.input.cursor_ray();
        let plane = Plane::from_point_normal(draw_at, axis);

        let crossing = ray.intersect_plane(&plane);
        let hit = crossing
            .filter(|&t| (ray.at(t).distance(draw_at) - world_radius).abs() < world_size);

        let changed = match self.gizmo.interact(id, hit, self.keys.was_pressed(Key::SELECT)) {
            Interaction::Activated => {
                if let Some(dir) = hit.and_then(|t| (ray.at(t) - draw_at).try_normalize()) {
                    self.gizmo.drag.vec3 = dir;
                    self.gizmo.drag.scalar = *out;
                }
                false
            }
            Interaction::Dragging => {
                match crossing.and_then(|t| (ray.at(t) - draw_at).try_normalize()) {
                    Some(dir) => {
                        let start = self.gizmo.drag.vec3;
                        let delta = axis.dot(start.cross(dir)).atan2(start.dot(dir));
                        let next = self.gizmo.drag.scalar + delta;
                        let changed = next != *out;
                        *out = next;
                        changed
                    }
                    None => false,
                }
            }
            Interaction::Passive => false,
        };

        let color = self.gizmo_color(id, color);
        let thickness = self.config.gizmo.size_pixels;
        let segments = self.config.gizmo.ring_segments;
        self.with_gizmo_draw_state(|ctx| {
            ctx.set_color(color);
            ctx.set_size(thickness);
            ctx.draw_circle(draw_at, axis, world_radius, segments);
        });

        changed
    }
}
