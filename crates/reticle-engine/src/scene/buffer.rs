use bytemuck::Zeroable;

use super::list::SortedRun;
use super::{PrimitiveMode, PrimitiveType, Vertex};

/// Which of the two per-type vertex sequences a primitive lands in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Bucket {
    Unsorted,
    Sorted,
}

impl Bucket {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Bucket::Unsorted => 0,
            Bucket::Sorted => 1,
        }
    }

    #[inline]
    pub const fn from_sorting(enabled: bool) -> Self {
        if enabled { Bucket::Sorted } else { Bucket::Unsorted }
    }
}

/// Bookkeeping for the primitive between `begin` and `end`.
#[derive(Debug, Copy, Clone)]
struct OpenPrimitive {
    mode: PrimitiveMode,
    bucket: Bucket,
    /// Length of the target vertex sequence when `begin` was called.
    first_vertex: usize,
    /// Source vertices seen since `begin`.
    count: u32,
    first: Vertex,
    /// The last two source vertices, oldest first.
    recent: [Vertex; 2],
}

/// Per-frame vertex storage, one sequence per (primitive type, bucket).
///
/// Strip and loop input is expanded into flat lists as it arrives, so every
/// sequence always holds whole primitives once `end` has run.
///
/// Performance characteristics:
/// - `push_vertex()` is amortized O(1)
/// - `reset()` keeps allocated capacity for the next frame
#[derive(Debug, Default)]
pub struct PrimitiveBuffer {
    pub(super) vertices: [[Vec<Vertex>; 2]; PrimitiveType::COUNT],
    open: Option<OpenPrimitive>,

    pub(super) runs: Vec<SortedRun>,
    pub(super) sorted: bool,
    pub(super) scratch: Vec<Vertex>,
}

impl PrimitiveBuffer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer with `capacity` vertices reserved in every sequence.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buf = Self::default();
        for per_type in &mut buf.vertices {
            for seq in per_type.iter_mut() {
                seq.reserve(capacity);
            }
        }
        buf
    }

    /// Clears every sequence and the sorted-run metadata. Capacity is kept.
    ///
    /// # Panics
    /// Panics if a primitive is still open.
    pub fn reset(&mut self) {
        assert!(self.open.is_none(), "reset called between begin and end");
        for per_type in &mut self.vertices {
            for seq in per_type.iter_mut() {
                seq.clear();
            }
        }
        self.runs.clear();
        self.sorted = false;
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Opens a primitive of `mode` in the bucket chosen by `sorting`.
    ///
    /// # Panics
    /// Panics if a primitive is already open.
    pub fn begin(&mut self, mode: PrimitiveMode, sorting: bool) {
        assert!(
            self.open.is_none(),
            "begin called while a primitive is already open; call end first"
        );

        let bucket = Bucket::from_sorting(sorting);
        let seq = &self.vertices[mode.primitive_type().index()][bucket.index()];
        let zero = Vertex::zeroed();

        self.open = Some(OpenPrimitive {
            mode,
            bucket,
            first_vertex: seq.len(),
            count: 0,
            first: zero,
            recent: [zero; 2],
        });
    }

    /// Appends an already transformed vertex to the open primitive.
    ///
    /// # Panics
    /// Panics if no primitive is open.
    pub fn push_vertex(&mut self, v: Vertex) {
        let Some(open) = self.open.as_mut() else {
            panic!("vertex called outside begin/end");
        };
        let seq = &mut self.vertices[open.mode.primitive_type().index()][open.bucket.index()];

        match open.mode {
            PrimitiveMode::Points | PrimitiveMode::Lines | PrimitiveMode::Triangles => seq.push(v),

            PrimitiveMode::LineStrip | PrimitiveMode::LineLoop => {
                // Each vertex past the second starts a segment at the previous one.
                if open.count >= 2 {
                    seq.push(open.recent[1]);
                }
                seq.push(v);
            }

            PrimitiveMode::TriangleStrip => {
                if open.count >= 3 {
                    // Triangle k = count - 2; odd triangles swap the shared pair
                    // so every triangle keeps the winding of the first.
                    let [older, newer] = open.recent;
                    if (open.count - 2) % 2 == 0 {
                        seq.extend_from_slice(&[older, newer]);
                    } else {
                        seq.extend_from_slice(&[newer, older]);
                    }
                }
                seq.push(v);
            }
        }

        if open.count == 0 {
            open.first = v;
        }
        open.recent = [open.recent[1], v];
        open.count += 1;
    }

    /// Closes the open primitive.
    ///
    /// Primitives with fewer vertices than the mode needs are dropped.
    ///
    /// # Panics
    /// Panics if no primitive is open, or if a `Lines`/`Triangles` primitive
    /// has a vertex count that is not a whole number of primitives.
    pub fn end(&mut self) {
        let Some(open) = self.open.take() else {
            panic!("end called without a matching begin");
        };
        let seq = &mut self.vertices[open.mode.primitive_type().index()][open.bucket.index()];

        if open.count < open.mode.min_vertices() {
            seq.truncate(open.first_vertex);
            return;
        }

        match open.mode {
            PrimitiveMode::Lines => assert!(
                open.count % 2 == 0,
                "Lines primitive ended with {} vertices; expected a multiple of 2",
                open.count
            ),
            PrimitiveMode::Triangles => assert!(
                open.count % 3 == 0,
                "Triangles primitive ended with {} vertices; expected a multiple of 3",
                open.count
            ),
            PrimitiveMode::LineLoop if open.count >= 3 => {
                seq.extend_from_slice(&[open.recent[1], open.first]);
            }
            _ => {}
        }

        if open.bucket == Bucket::Sorted {
            self.sorted = false;
        }
    }

    /// Total primitives of `prim_type` across both buckets.
    pub fn primitive_count(&self, prim_type: PrimitiveType) -> usize {
        let [unsorted, sorted] = &self.vertices[prim_type.index()];
        (unsorted.len() + sorted.len()) / prim_type.vertices_per_primitive()
    }

    /// Raw vertex sequence for one (type, bucket) pair, in storage order.
    #[inline]
    pub fn vertices(&self, prim_type: PrimitiveType, bucket: Bucket) -> &[Vertex] {
        &self.vertices[prim_type.index()][bucket.index()]
    }
}
