use super::{PrimitiveType, Vertex};

/// One contiguous, same-type batch of vertices handed to the host.
///
/// Borrowed from the context; valid for the duration of the draw callback.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawList<'a> {
    pub prim_type: PrimitiveType,
    pub vertices: &'a [Vertex],
}

impl<'a> DrawList<'a> {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn primitive_count(&self) -> usize {
        self.vertices.len() / self.prim_type.vertices_per_primitive()
    }

    /// Raw bytes for upload into a host vertex buffer.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.vertices)
    }
}

/// Run of consecutive sorted primitives of one type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct SortedRun {
    pub prim_type: PrimitiveType,
    pub first_primitive: usize,
    pub primitive_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use glam::Vec3;

    #[test]
    fn bytes_cover_every_vertex() {
        let verts = [
            Vertex::new(Vec3::ZERO, 1.0, Color::RED),
            Vertex::new(Vec3::X, 2.0, Color::BLUE),
        ];
        let dl = DrawList { prim_type: PrimitiveType::Lines, vertices: &verts };
        assert_eq!(dl.primitive_count(), 1);
        assert_eq!(dl.as_bytes().len(), 2 * std::mem::size_of::<Vertex>());
        assert_eq!(&dl.as_bytes()[..4], &0.0f32.to_ne_bytes());
    }
}
