use glam::Vec3;

use crate::coords::Plane;
use crate::core::Context;
use crate::id::Id;
use crate::input::Key;
use crate::paint::Color;

use super::state::Interaction;

impl Context {
    /// Translation within the plane through `draw_at` with normal `normal`.
    ///
    /// The handle is a square of half-extent `world_size` centred on `draw_at`.
    /// While dragging, the plane stays where it was at activation and `out`
    /// follows the cursor's intersection with it, keeping the initial offset.
    pub fn gizmo_plane_translation(
        &mut self,
        id: Id,
        draw_at: Vec3,
        out: &mut Vec3,
        normal: Vec3,
        color: Color,
        world_size: f32,
    ) -> bool {
        self.assert_recording("gizmo_plane_translation");
        let Some(normal) = normal.try_normalize() else {
            return false;
        };
        let (u, v) = normal.any_orthonormal_pair();
        let ray = self.input.cursor_ray();

        let plane = Plane::from_point_normal(draw_at, normal);
        let hit = ray.intersect_plane(&plane).filter(|&t| {
            let local = ray.at(t) - draw_at;
            local.dot(u).abs() < world_size && local.dot(v).abs() < world_size
        });

        let changed = match self.gizmo.interact(id, hit, self.keys.was_pressed(Key::SELECT)) {
            Interaction::Activated => {
                if let Some(t) = hit {
                    let point = ray.at(t);
                    self.gizmo.drag.vec3 = point - *out;
                    self.gizmo.drag.scalar = normal.dot(point);
                }
                false
            }
            Interaction::Dragging => {
                let plane = Plane::new(normal, self.gizmo.drag.scalar);
                match ray.intersect_plane(&plane) {
                    Some(t) => {
                        let next = ray.at(t) - self.gizmo.drag.vec3;
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
        let alpha = self.config.gizmo.plane_alpha;
        let thickness = self.config.gizmo.size_pixels;
        let corners = [
            draw_at + (-u - v) * world_size,
            draw_at + (u - v) * world_size,
            draw_at + (u + v) * world_size,
            draw_at + (-u + v) * world_size,
        ];
        self.with_gizmo_draw_state(|ctx| {
            ctx.set_color(color);
            ctx.set_size(thickness);
            ctx.draw_quad(corners[0], corners[1], corners[2], corners[3]);
            ctx.set_alpha(alpha);
            ctx.draw_quad_filled(corners[0], corners[1], corners[2], corners[3]);
        });

        changed
    }
}
