use glam::Vec3;

use super::list::SortedRun;
use super::{Bucket, DrawList, PrimitiveBuffer, PrimitiveType, SortKey, Vertex};

impl PrimitiveBuffer {
    /// Orders the sortable primitives back-to-front relative to `view_origin`.
    ///
    /// Runs at most once until the next `reset` (or the next sortable primitive).
    ///
    /// # Panics
    /// Panics while a primitive is open; its partial vertices would be
    /// regrouped with the wrong neighbours.
    pub fn sort(&mut self, view_origin: Vec3) {
        assert!(!self.is_open(), "sort called between begin and end");
        if self.sorted {
            return;
        }

        let mut depths: [Vec<f32>; PrimitiveType::COUNT] = Default::default();

        for prim_type in PrimitiveType::ALL {
            let per = prim_type.vertices_per_primitive();
            let seq = &mut self.vertices[prim_type.index()][Bucket::Sorted.index()];

            let mut keys: Vec<SortKey> = seq
                .chunks_exact(per)
                .enumerate()
                .map(|(i, prim)| SortKey::new(centroid_depth(prim, view_origin), i as u32))
                .collect();
            keys.sort_unstable();

            self.scratch.clear();
            for key in &keys {
                let start = key.order as usize * per;
                self.scratch.extend_from_slice(&seq[start..start + per]);
            }
            std::mem::swap(seq, &mut self.scratch);

            depths[prim_type.index()] = keys.iter().map(|k| k.depth).collect();
        }

        self.runs.clear();
        merge_runs(&depths, &mut self.runs);
        self.sorted = true;
    }

    /// Number of draw lists the next emission produces.
    pub fn draw_list_count(&mut self, view_origin: Vec3) -> usize {
        self.sort(view_origin);
        let unsorted = PrimitiveType::ALL
            .iter()
            .filter(|t| !self.vertices(**t, Bucket::Unsorted).is_empty())
            .count();
        unsorted + self.runs.len()
    }

    /// Sorts if needed, then calls `f` once per draw list in paint order:
    /// unsorted triangles, lines, points, then the sorted runs.
    pub fn emit<F>(&mut self, view_origin: Vec3, mut f: F)
    where
        F: FnMut(&DrawList<'_>),
    {
        self.sort(view_origin);

        for prim_type in PrimitiveType::ALL {
            let vertices = self.vertices(prim_type, Bucket::Unsorted);
            if !vertices.is_empty() {
                f(&DrawList { prim_type, vertices });
            }
        }

        for run in &self.runs {
            let per = run.prim_type.vertices_per_primitive();
            let seq = &self.vertices[run.prim_type.index()][Bucket::Sorted.index()];
            let start = run.first_primitive * per;
            let end = start + run.primitive_count * per;
            f(&DrawList { prim_type: run.prim_type, vertices: &seq[start..end] });
        }
    }
}

/// Squared distance from `view_origin` to the centroid of one primitive.
fn centroid_depth(prim: &[Vertex], view_origin: Vec3) -> f32 {
    let sum: Vec3 = prim.iter().map(|v| v.position).sum();
    let centroid = sum / prim.len() as f32;
    centroid.distance_squared(view_origin)
}

/// Merges the per-type depth sequences (each already descending) into runs of
/// consecutive same-type primitives. Equal depths favor the lower type index.
fn merge_runs(depths: &[Vec<f32>; PrimitiveType::COUNT], runs: &mut Vec<SortedRun>) {
    let mut cursor = [0usize; PrimitiveType::COUNT];

    loop {
        let mut best: Option<(PrimitiveType, f32)> = None;
        for prim_type in PrimitiveType::ALL {
            let i = prim_type.index();
            let Some(&depth) = depths[i].get(cursor[i]) else {
                continue;
            };
            match best {
                Some((_, best_depth)) if depth <= best_depth => {}
                _ => best = Some((prim_type, depth)),
            }
        }

        let Some((prim_type, _)) = best else {
            break;
        };
        let i = prim_type.index();

        match runs.last_mut() {
            Some(run) if run.prim_type == prim_type => run.primitive_count += 1,
            _ => runs.push(SortedRun {
                prim_type,
                first_primitive: cursor[i],
                primitive_count: 1,
            }),
        }
        cursor[i] += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::scene::PrimitiveMode;

    fn vert(p: Vec3) -> Vertex {
        Vertex::new(p, 1.0, Color::WHITE)
    }

    /// Triangle centered on `(0, 0, z)`.
    fn push_triangle(buf: &mut PrimitiveBuffer, z: f32, sorting: bool) {
        buf.begin(PrimitiveMode::Triangles, sorting);
        buf.push_vertex(vert(Vec3::new(-1.0, 0.0, z)));
        buf.push_vertex(vert(Vec3::new(1.0, 0.0, z)));
        buf.push_vertex(vert(Vec3::new(0.0, 0.0, z)));
        buf.end();
    }

    fn push_point(buf: &mut PrimitiveBuffer, z: f32, sorting: bool) {
        buf.begin(PrimitiveMode::Points, sorting);
        buf.push_vertex(vert(Vec3::new(0.0, 0.0, z)));
        buf.end();
    }

    fn collect(buf: &mut PrimitiveBuffer) -> Vec<(PrimitiveType, Vec<f32>)> {
        let mut out = Vec::new();
        buf.emit(Vec3::ZERO, |dl| {
            out.push((dl.prim_type, dl.vertices.iter().map(|v| v.position.z).collect()));
        });
        out
    }

    #[test]
    fn sorted_triangles_come_out_farthest_first() {
        let mut buf = PrimitiveBuffer::new();
        push_triangle(&mut buf, 1.0, true);
        push_triangle(&mut buf, 5.0, true);
        push_triangle(&mut buf, 3.0, true);

        let lists = collect(&mut buf);
        assert_eq!(lists.len(), 1);
        let (t, zs) = &lists[0];
        assert_eq!(*t, PrimitiveType::Triangles);
        let per_prim: Vec<f32> = zs.chunks(3).map(|c| c[0]).collect();
        assert_eq!(per_prim, vec![5.0, 3.0, 1.0]);
    }

    #[test]
    fn equal_depth_preserves_insertion_order() {
        let mut buf = PrimitiveBuffer::new();
        buf.begin(PrimitiveMode::Points, true);
        buf.push_vertex(vert(Vec3::new(2.0, 0.0, 0.0)));
        buf.push_vertex(vert(Vec3::new(0.0, 2.0, 0.0)));
        buf.end();

        let mut xs = Vec::new();
        buf.emit(Vec3::ZERO, |dl| xs.extend(dl.vertices.iter().map(|v| v.position.x)));
        assert_eq!(xs, vec![2.0, 0.0]);
    }

    #[test]
    fn unsorted_buckets_come_first_in_type_order() {
        let mut buf = PrimitiveBuffer::new();
        push_point(&mut buf, 1.0, false);
        push_triangle(&mut buf, 1.0, false);
        push_triangle(&mut buf, 9.0, true);

        let types: Vec<PrimitiveType> = collect(&mut buf).into_iter().map(|(t, _)| t).collect();
        assert_eq!(
            types,
            vec![PrimitiveType::Triangles, PrimitiveType::Points, PrimitiveType::Triangles]
        );
    }

    #[test]
    fn mixed_sorted_types_interleave_into_runs() {
        let mut buf = PrimitiveBuffer::new();
        push_triangle(&mut buf, 9.0, true);
        push_triangle(&mut buf, 8.0, true);
        push_point(&mut buf, 5.0, true);
        push_triangle(&mut buf, 1.0, true);

        let lists = collect(&mut buf);
        let shape: Vec<(PrimitiveType, usize)> =
            lists.iter().map(|(t, zs)| (*t, zs.len() / t.vertices_per_primitive())).collect();
        assert_eq!(
            shape,
            vec![
                (PrimitiveType::Triangles, 2),
                (PrimitiveType::Points, 1),
                (PrimitiveType::Triangles, 1),
            ]
        );
        assert_eq!(buf.draw_list_count(Vec3::ZERO), 3);
    }

    #[test]
    fn repeated_emit_sorts_once() {
        let mut buf = PrimitiveBuffer::new();
        push_triangle(&mut buf, 1.0, true);
        push_triangle(&mut buf, 5.0, true);

        let first = collect(&mut buf);
        assert!(buf.sorted);
        let second = collect(&mut buf);
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic(expected = "sort called between begin and end")]
    fn sorting_an_open_primitive_panics() {
        let mut buf = PrimitiveBuffer::new();
        buf.begin(PrimitiveMode::Lines, true);
        buf.push_vertex(vert(Vec3::new(0.0, 0.0, -1.0)));
        buf.sort(Vec3::ZERO);
    }

    #[test]
    fn empty_buffer_emits_nothing() {
        let mut buf = PrimitiveBuffer::new();
        assert!(collect(&mut buf).is_empty());
    }
}
