use glam::Vec3;

use crate::core::Context;

impl Context {
    /// Wire sphere: one great circle around each world axis.
    ///
    /// `detail` is the number of segments per circle; fewer than 3 draws nothing.
    pub fn draw_sphere(&mut self, origin: Vec3, radius: f32, detail: usize) {
        for normal in [Vec3::X, Vec3::Y, Vec3::Z] {
            self.draw_circle(origin, normal, radius, detail);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Context;
    use crate::scene::PrimitiveType;
    use glam::Vec3;

    #[test]
    fn sphere_is_three_great_circles() {
        let mut ctx = Context::new();
        ctx.reset_frame();
        let origin = Vec3::new(1.0, 2.0, 3.0);
        ctx.draw_sphere(origin, 0.5, 12);
        assert_eq!(ctx.primitive_count(PrimitiveType::Lines), 36);

        let mut radii = Vec::new();
        ctx.end_frame(|dl| radii.extend(dl.vertices.iter().map(|v| v.position.distance(origin))));
        assert!(radii.iter().all(|r| (r - 0.5).abs() < 1.0e-4));
    }

    #[test]
    fn low_detail_sphere_draws_nothing() {
        let mut ctx = Context::new();
        ctx.reset_frame();
        ctx.draw_sphere(Vec3::ZERO, 1.0, 2);
        assert_eq!(ctx.primitive_count(PrimitiveType::Lines), 0);
    }
}
