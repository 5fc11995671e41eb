use std::f32::consts::PI;

use glam::Vec3;

use crate::core::Context;

impl Context {
    /// Wire cylinder between `start` and `end`: a ring at each end joined by
    /// four side lines.
    ///
    /// A zero-length axis or `detail < 3` draws nothing.
    pub fn draw_cylinder(&mut self, start: Vec3, end: Vec3, radius: f32, detail: usize) {
        let Some(dir) = (end - start).try_normalize() else {
            return;
        };
        if detail < 3 {
            return;
        }
        let (u, v) = dir.any_orthonormal_pair();

        self.draw_circle(start, dir, radius, detail);
        self.draw_circle(end, dir, radius, detail);
        self.draw_side_lines(start, end, u * radius, v * radius);
    }

    /// Wire capsule: a cylinder capped at both ends by hemispheres, each drawn
    /// as two perpendicular half-circle arcs of `detail` segments.
    ///
    /// A zero-length axis or `detail < 3` draws nothing.
    pub fn draw_capsule(&mut self, start: Vec3, end: Vec3, radius: f32, detail: usize) {
        let Some(dir) = (end - start).try_normalize() else {
            return;
        };
        if detail < 3 {
            return;
        }
        let (u, v) = dir.any_orthonormal_pair();

        self.draw_circle(start, dir, radius, detail);
        self.draw_circle(end, dir, radius, detail);
        self.draw_side_lines(start, end, u * radius, v * radius);

        for side in [u, v] {
            self.draw_half_arc(end, side * radius, dir * radius, detail);
            self.draw_half_arc(start, side * radius, -dir * radius, detail);
        }
    }

    fn draw_side_lines(&mut self, start: Vec3, end: Vec3, u: Vec3, v: Vec3) {
        self.begin_lines();
        for offset in [u, -u, v, -v] {
            self.vertex(start + offset);
            self.vertex(end + offset);
        }
        self.end();
    }

    /// Half circle from `center + side` over `center + apex` to `center - side`.
    fn draw_half_arc(&mut self, center: Vec3, side: Vec3, apex: Vec3, detail: usize) {
        self.begin_line_strip();
        for i in 0..=detail {
            let angle = PI * i as f32 / detail as f32;
            self.vertex(center + side * angle.cos() + apex * angle.sin());
        }
        self.end();
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Context;
    use crate::scene::PrimitiveType;
    use glam::Vec3;

    // ── cylinder ──────────────────────────────────────────────────────────

    #[test]
    fn cylinder_is_two_rings_and_four_sides() {
        let mut ctx = Context::new();
        ctx.reset_frame();
        ctx.draw_cylinder(Vec3::ZERO, Vec3::Y * 2.0, 0.5, 16);
        assert_eq!(ctx.primitive_count(PrimitiveType::Lines), 2 * 16 + 4);
    }

    #[test]
    fn zero_length_cylinder_draws_nothing() {
        let mut ctx = Context::new();
        ctx.reset_frame();
        ctx.draw_cylinder(Vec3::ONE, Vec3::ONE, 0.5, 16);
        ctx.draw_capsule(Vec3::ONE, Vec3::ONE, 0.5, 16);
        assert_eq!(ctx.primitive_count(PrimitiveType::Lines), 0);
    }

    // ── capsule ───────────────────────────────────────────────────────────

    #[test]
    fn capsule_adds_four_cap_arcs() {
        let mut ctx = Context::new();
        ctx.reset_frame();
        ctx.draw_capsule(Vec3::ZERO, Vec3::Z, 0.25, 12);
        assert_eq!(ctx.primitive_count(PrimitiveType::Lines), 2 * 12 + 4 + 4 * 12);
    }

    #[test]
    fn capsule_caps_bulge_past_the_ends() {
        let mut ctx = Context::new();
        ctx.reset_frame();
        ctx.draw_capsule(Vec3::ZERO, Vec3::Z, 0.25, 12);

        let mut zs = Vec::new();
        ctx.end_frame(|dl| zs.extend(dl.vertices.iter().map(|v| v.position.z)));
        let max = zs.iter().copied().fold(f32::MIN, f32::max);
        let min = zs.iter().copied().fold(f32::MAX, f32::min);
        assert!((max - 1.25).abs() < 1.0e-4, "max z = {max}");
        assert!((min + 0.25).abs() < 1.0e-4, "min z = {min}");
    }
}
