use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::paint::Color;

/// One emitted vertex.
///
/// `position` is already in world space (the transform stack was applied when
/// the vertex was pushed). `size` is in screen pixels: point radius or line width.
///
/// The layout is `#[repr(C)]` and `Pod` so hosts can upload a draw list with
/// `bytemuck::cast_slice`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub size: f32,
    pub color: Color,
}

impl Vertex {
    #[inline]
    pub const fn new(position: Vec3, size: f32, color: Color) -> Self {
        Self { position, size, color }
    }
}
