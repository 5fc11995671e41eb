use glam::Vec3;

use crate::core::Context;
use crate::paint::Color;

impl Context {
    /// Unit X/Y/Z axes in red/green/blue, drawn in the current transform.
    pub fn draw_xyz_axes(&mut self) {
        self.push_color_top();
        self.begin_lines();
        let axes = [(Vec3::X, Color::RED), (Vec3::Y, Color::GREEN), (Vec3::Z, Color::BLUE)];
        for (axis, color) in axes {
            self.set_color(color);
            self.vertex(Vec3::ZERO);
            self.vertex(axis);
        }
        self.end();
        self.pop_color();
    }

    /// Line from `start` to `end` with a wire cone head of `head_length`.
    pub fn draw_arrow(&mut self, start: Vec3, end: Vec3, head_length: f32) {
        let Some(dir) = (end - start).try_normalize() else {
            return;
        };
        let (u, v) = dir.any_orthonormal_pair();
        let base = end - dir * head_length;
        let radius = head_length * 0.3;

        self.begin_lines();
        self.vertex(start);
        self.vertex(end);
        for side in [u, -u, v, -v] {
            self.vertex(end);
            self.vertex(base + side * radius);
        }
        self.end();
    }
}
