use std::f32::consts::TAU;

use glam::Vec3;

use crate::core::Context;

impl Context {
    /// Circle outline around `origin` in the plane with normal `normal`.
    ///
    /// A zero normal or fewer than 3 segments draws nothing.
    pub fn draw_circle(&mut self, origin: Vec3, normal: Vec3, radius: f32, segments: usize) {
        let Some(normal) = normal.try_normalize() else {
            return;
        };
        if segments < 3 {
            return;
        }

        let (u, v) = normal.any_orthonormal_pair();
        self.begin_line_loop();
        for i in 0..segments {
            let angle = TAU * i as f32 / segments as f32;
            self.vertex(origin + (u * angle.cos() + v * angle.sin()) * radius);
        }
        self.end();
    }
}
