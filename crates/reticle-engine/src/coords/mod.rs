//! Geometry types and the ray queries used for gizmo hit-testing.
//!
//! World space conventions:
//! - right-handed, units are whatever the host uses
//! - matrices are column-major (`glam`)
//!
//! Every query here returns `None` for degenerate input (parallel ray and
//! plane, zero-length axis) rather than dividing by a near-zero value.

mod ray;

pub use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};
pub use ray::{Line, Plane, Ray, RayLineHit, Segment};

/// Squared length below which a direction is treated as degenerate.
pub(crate) const DEGENERATE_EPSILON: f32 = 1.0e-8;
