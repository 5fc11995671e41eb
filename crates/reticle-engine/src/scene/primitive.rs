/// Primitive type as seen by the host renderer.
///
/// The discriminant order is also the draw order of unsorted buckets:
/// triangles first, then lines, then points.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PrimitiveType {
    Triangles,
    Lines,
    Points,
}

impl PrimitiveType {
    pub const COUNT: usize = 3;
    pub const ALL: [PrimitiveType; PrimitiveType::COUNT] =
        [PrimitiveType::Triangles, PrimitiveType::Lines, PrimitiveType::Points];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn vertices_per_primitive(self) -> usize {
        match self {
            PrimitiveType::Triangles => 3,
            PrimitiveType::Lines => 2,
            PrimitiveType::Points => 1,
        }
    }
}

/// Shape being built between `begin` and `end`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PrimitiveMode {
    Points,
    Lines,
    LineStrip,
    LineLoop,
    Triangles,
    TriangleStrip,
}

impl PrimitiveMode {
    #[inline]
    pub const fn primitive_type(self) -> PrimitiveType {
        match self {
            PrimitiveMode::Points => PrimitiveType::Points,
            PrimitiveMode::Lines | PrimitiveMode::LineStrip | PrimitiveMode::LineLoop => {
                PrimitiveType::Lines
            }
            PrimitiveMode::Triangles | PrimitiveMode::TriangleStrip => PrimitiveType::Triangles,
        }
    }

    /// Fewer source vertices than this and the primitive is dropped at `end`.
    #[inline]
    pub const fn min_vertices(self) -> u32 {
        match self {
            PrimitiveMode::Points => 1,
            PrimitiveMode::Lines | PrimitiveMode::LineStrip | PrimitiveMode::LineLoop => 2,
            PrimitiveMode::Triangles | PrimitiveMode::TriangleStrip => 3,
        }
    }
}
