use glam::Vec3;

use crate::core::Context;

impl Context {
    /// Outline of the quad `a b c d` (in winding order).
    pub fn draw_quad(&mut self, a: Vec3, b: Vec3, c: Vec3, d: Vec3) {
        self.begin_line_loop();
        for p in [a, b, c, d] {
            self.vertex(p);
        }
        self.end();
    }

    /// Filled quad `a b c d` as two triangles.
    pub fn draw_quad_filled(&mut self, a: Vec3, b: Vec3, c: Vec3, d: Vec3) {
        self.begin_triangles();
        for p in [a, b, c, a, c, d] {
            self.vertex(p);
        }
        self.end();
    }

    /// Wireframe of the axis-aligned box spanning `min..max`.
    pub fn draw_aligned_box(&mut self, min: Vec3, max: Vec3) {
        let corner = |i: usize| {
            Vec3::new(
                if i & 1 == 0 { min.x } else { max.x },
                if i & 2 == 0 { min.y } else { max.y },
                if i & 4 == 0 { min.z } else { max.z },
            )
        };

        self.begin_lines();
        for i in 0..8 {
            // Each edge once: connect to the neighbour with one more bit set.
            for bit in [1, 2, 4] {
                if i & bit == 0 {
                    self.vertex(corner(i));
                    self.vertex(corner(i | bit));
                }
            }
        }
        self.end();
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Context;
    use crate::scene::PrimitiveType;
    use glam::Vec3;

    #[test]
    fn aligned_box_has_twelve_edges() {
        let mut ctx = Context::new();
        ctx.reset_frame();
        ctx.draw_aligned_box(Vec3::splat(-1.0), Vec3::splat(1.0));
        assert_eq!(ctx.primitive_count(PrimitiveType::Lines), 12);
    }

    #[test]
    fn filled_quad_is_two_triangles() {
        let mut ctx = Context::new();
        ctx.reset_frame();
        ctx.draw_quad_filled(Vec3::ZERO, Vec3::X, Vec3::X + Vec3::Y, Vec3::Y);
        ctx.draw_quad(Vec3::ZERO, Vec3::X, Vec3::X + Vec3::Y, Vec3::Y);
        assert_eq!(ctx.primitive_count(PrimitiveType::Triangles), 2);
        assert_eq!(ctx.primitive_count(PrimitiveType::Lines), 4);
    }
}
