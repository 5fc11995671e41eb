use glam::Vec3;

use super::DEGENERATE_EPSILON;

/// Half-line `origin + direction * t`, `t >= 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Infinite line `origin + direction * s`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Line segment between two points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
}

/// Plane `dot(normal, p) == distance`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
}

/// Closest approach between a ray and a line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RayLineHit {
    /// Parameter along the ray.
    pub ray_t: f32,
    /// Parameter along the line.
    pub line_t: f32,
    /// Distance between the two closest points.
    pub distance: f32,
}

impl Ray {
    #[inline]
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Parameters of the closest points between this ray and `line`.
    ///
    /// `None` when either direction is degenerate or the two are parallel.
    pub fn nearest_to_line(&self, line: &Line) -> Option<RayLineHit> {
        let a = self.direction.length_squared();
        let c = line.direction.length_squared();
        if a < DEGENERATE_EPSILON || c < DEGENERATE_EPSILON {
            return None;
        }

        let b = self.direction.dot(line.direction);
        let w = self.origin - line.origin;
        let d = self.direction.dot(w);
        let e = line.direction.dot(w);

        let denom = a * c - b * b;
        if denom.abs() < DEGENERATE_EPSILON * a * c {
            return None;
        }

        let ray_t = ((b * e - c * d) / denom).max(0.0);
        // Re-project so the line parameter matches the clamped ray point.
        let line_t = (self.at(ray_t) - line.origin).dot(line.direction) / c;
        let distance = self.at(ray_t).distance(line.at(line_t));

        Some(RayLineHit { ray_t, line_t, distance })
    }

    /// Closest approach between this ray and a finite segment.
    ///
    /// `line_t` is normalized to `[0, 1]` along the segment.
    pub fn nearest_to_segment(&self, segment: &Segment) -> Option<RayLineHit> {
        let line = Line::new(segment.start, segment.end - segment.start);
        let hit = self.nearest_to_line(&line)?;
        if (0.0..=1.0).contains(&hit.line_t) {
            return Some(hit);
        }

        let line_t = hit.line_t.clamp(0.0, 1.0);
        let point = line.at(line_t);
        let ray_t = ((point - self.origin).dot(self.direction) / self.direction.length_squared())
            .max(0.0);
        let distance = self.at(ray_t).distance(point);

        Some(RayLineHit { ray_t, line_t, distance })
    }

    /// Ray parameter where the ray crosses `plane`, if it does so in front of the origin.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<f32> {
        let denom = plane.normal.dot(self.direction);
        if denom.abs() < DEGENERATE_EPSILON.sqrt() {
            return None;
        }

        let t = (plane.distance - plane.normal.dot(self.origin)) / denom;
        (t >= 0.0).then_some(t)
    }
}

impl Line {
    #[inline]
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

impl Segment {
    #[inline]
    pub const fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }
}

impl Plane {
    /// Plane through `point` with the given (unit) `normal`.
    #[inline]
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        Self { normal, distance: normal.dot(point) }
    }

    #[inline]
    pub const fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1.0e-4
    }

    // ── nearest_to_line ───────────────────────────────────────────────────

    #[test]
    fn ray_crossing_line_has_zero_distance() {
        let ray = Ray::new(Vec3::new(2.0, 0.0, 5.0), Vec3::NEG_Z);
        let line = Line::new(Vec3::ZERO, Vec3::X);
        let hit = ray.nearest_to_line(&line).unwrap();
        assert!(approx(hit.ray_t, 5.0));
        assert!(approx(hit.line_t, 2.0));
        assert!(approx(hit.distance, 0.0));
    }

    #[test]
    fn ray_passing_above_line_reports_gap() {
        let ray = Ray::new(Vec3::new(1.0, 0.5, 5.0), Vec3::NEG_Z);
        let line = Line::new(Vec3::ZERO, Vec3::X);
        let hit = ray.nearest_to_line(&line).unwrap();
        assert!(approx(hit.distance, 0.5));
        assert!(approx(hit.line_t, 1.0));
    }

    #[test]
    fn parallel_ray_and_line_is_degenerate() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        let line = Line::new(Vec3::ZERO, Vec3::X);
        assert!(ray.nearest_to_line(&line).is_none());
    }

    #[test]
    fn zero_length_axis_is_degenerate() {
        let ray = Ray::new(Vec3::Z, Vec3::NEG_Z);
        let line = Line::new(Vec3::ZERO, Vec3::ZERO);
        assert!(ray.nearest_to_line(&line).is_none());
    }

    // ── nearest_to_segment ────────────────────────────────────────────────

    #[test]
    fn segment_clamps_to_endpoint() {
        let ray = Ray::new(Vec3::new(3.0, 0.0, 5.0), Vec3::NEG_Z);
        let seg = Segment::new(Vec3::ZERO, Vec3::X);
        let hit = ray.nearest_to_segment(&seg).unwrap();
        assert!(approx(hit.line_t, 1.0));
        assert!(approx(hit.distance, 2.0));
    }

    // ── intersect_plane ───────────────────────────────────────────────────

    #[test]
    fn plane_hit_in_front() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 4.0), Vec3::NEG_Z);
        let plane = Plane::from_point_normal(Vec3::ZERO, Vec3::Z);
        assert!(approx(ray.intersect_plane(&plane).unwrap(), 4.0));
    }

    #[test]
    fn plane_behind_ray_misses() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 4.0), Vec3::Z);
        let plane = Plane::from_point_normal(Vec3::ZERO, Vec3::Z);
        assert!(ray.intersect_plane(&plane).is_none());
    }

    #[test]
    fn plane_parallel_to_ray_misses() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        let plane = Plane::from_point_normal(Vec3::ZERO, Vec3::Y);
        assert!(ray.intersect_plane(&plane).is_none());
    }
}
