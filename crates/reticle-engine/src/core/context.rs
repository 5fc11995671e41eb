use glam::{Mat4, Vec3};

use crate::gizmo::{GizmoMode, GizmoState};
use crate::id::Id;
use crate::input::{FrameInput, Key, KeyTable};
use crate::paint::Color;
use crate::scene::{DrawList, PrimitiveBuffer, PrimitiveMode, PrimitiveType, Vertex};
use crate::state::DrawState;

use super::ContextConfig;

/// Where the context is within the reset / record / draw cycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum FramePhase {
    /// Constructed, `reset_frame` not called yet.
    Idle,
    /// Between `reset_frame` and `end_frame`.
    Recording,
    /// `end_frame` ran; the next call must be `reset_frame`.
    Drawn,
}

/// One engine instance.
///
/// Per frame:
/// 1. fill [`input_mut`](Self::input_mut) and call [`reset_frame`](Self::reset_frame)
/// 2. issue primitives, draw-state changes and gizmos
/// 3. call [`end_frame`](Self::end_frame) with the host draw callback
///
/// Contract violations (unbalanced begin/end, popping a baseline, drawing twice)
/// panic at the offending call.
#[derive(Debug)]
pub struct Context {
    pub(crate) config: ContextConfig,
    pub(crate) input: FrameInput,
    pub(crate) keys: KeyTable,
    pub(crate) draw_state: DrawState,
    pub(crate) buffer: PrimitiveBuffer,
    pub(crate) gizmo: GizmoState,
    phase: FramePhase,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    pub fn new() -> Self {
        Self::with_config(ContextConfig::default())
    }

    pub fn with_config(config: ContextConfig) -> Self {
        Self {
            buffer: PrimitiveBuffer::with_capacity(config.vertex_capacity),
            config,
            input: FrameInput::default(),
            keys: KeyTable::default(),
            draw_state: DrawState::default(),
            gizmo: GizmoState::default(),
            phase: FramePhase::Idle,
        }
    }

    #[inline]
    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    #[inline]
    pub fn config_mut(&mut self) -> &mut ContextConfig {
        &mut self.config
    }

    /// Snapshot ingested by the next [`reset_frame`](Self::reset_frame).
    #[inline]
    pub fn input(&self) -> &FrameInput {
        &self.input
    }

    #[inline]
    pub fn input_mut(&mut self) -> &mut FrameInput {
        &mut self.input
    }

    // ── frame lifecycle ───────────────────────────────────────────────────

    /// Starts a frame: advances key edges, clears the vertex buffers and
    /// re-arms hover detection (unless a drag is in progress).
    ///
    /// # Panics
    /// Panics if a primitive is still open.
    pub fn reset_frame(&mut self) {
        assert!(!self.buffer.is_open(), "reset_frame called between begin and end");
        self.keys.advance(&self.input.key_down);

        let unbalanced = self.draw_state.restore_baseline();
        if !unbalanced.is_empty() {
            log::warn!("unbalanced draw state stacks at frame reset: {:?}", unbalanced);
        }

        self.buffer.reset();
        self.gizmo.begin_frame(&self.keys);
        self.phase = FramePhase::Recording;
    }

    /// Sorts and emits this frame's geometry to `draw`, once per draw list.
    ///
    /// # Panics
    /// Panics if called twice without an intervening `reset_frame`, before the
    /// first `reset_frame`, or while a primitive is open.
    pub fn end_frame<F>(&mut self, mut draw: F)
    where
        F: FnMut(&DrawList<'_>),
    {
        assert!(
            self.phase == FramePhase::Recording,
            "end_frame requires reset_frame first (phase: {:?})",
            self.phase
        );
        assert!(!self.buffer.is_open(), "end_frame called between begin and end");

        let mut lists = 0usize;
        let mut vertices = 0usize;
        self.buffer.emit(self.input.view_origin, |dl| {
            lists += 1;
            vertices += dl.vertex_count();
            draw(dl);
        });
        log::trace!("emitted {} draw lists ({} vertices)", lists, vertices);

        self.phase = FramePhase::Drawn;
    }

    /// Number of draw lists `end_frame` will produce for the current contents.
    ///
    /// # Panics
    /// Panics while a primitive is open.
    pub fn draw_list_count(&mut self) -> usize {
        assert!(!self.buffer.is_open(), "draw_list_count called between begin and end");
        self.buffer.draw_list_count(self.input.view_origin)
    }

    /// Primitives of `prim_type` recorded this frame (sorted and unsorted).
    pub fn primitive_count(&self, prim_type: PrimitiveType) -> usize {
        self.buffer.primitive_count(prim_type)
    }

    #[inline]
    pub(crate) fn assert_recording(&self, what: &str) {
        assert!(
            self.phase == FramePhase::Recording,
            "{} called outside reset_frame/end_frame (phase: {:?})",
            what,
            self.phase
        );
    }

    // ── primitives ────────────────────────────────────────────────────────

    /// Opens a primitive. Sorting is taken from the current sorting state.
    pub fn begin(&mut self, mode: PrimitiveMode) {
        self.assert_recording("begin");
        self.buffer.begin(mode, *self.draw_state.sorting.get());
    }

    #[inline]
    pub fn begin_points(&mut self) {
        self.begin(PrimitiveMode::Points);
    }

    #[inline]
    pub fn begin_lines(&mut self) {
        self.begin(PrimitiveMode::Lines);
    }

    #[inline]
    pub fn begin_line_strip(&mut self) {
        self.begin(PrimitiveMode::LineStrip);
    }

    #[inline]
    pub fn begin_line_loop(&mut self) {
        self.begin(PrimitiveMode::LineLoop);
    }

    #[inline]
    pub fn begin_triangles(&mut self) {
        self.begin(PrimitiveMode::Triangles);
    }

    #[inline]
    pub fn begin_triangle_strip(&mut self) {
        self.begin(PrimitiveMode::TriangleStrip);
    }

    pub fn end(&mut self) {
        self.buffer.end();
    }

    /// Vertex with the current size and color.
    #[inline]
    pub fn vertex(&mut self, position: Vec3) {
        let (size, color) = (*self.draw_state.size.get(), *self.draw_state.color.get());
        self.vertex_with(position, size, color);
    }

    #[inline]
    pub fn vertex_sized(&mut self, position: Vec3, size: f32) {
        let color = *self.draw_state.color.get();
        self.vertex_with(position, size, color);
    }

    #[inline]
    pub fn vertex_colored(&mut self, position: Vec3, color: Color) {
        let size = *self.draw_state.size.get();
        self.vertex_with(position, size, color);
    }

    /// Transforms `position` by the matrix on top of the stack, scales the
    /// color's alpha by the current alpha and appends the vertex.
    pub fn vertex_with(&mut self, position: Vec3, size: f32, color: Color) {
        let world = self.draw_state.matrix.get().transform_point3(position);
        let color = color.scale_alpha(*self.draw_state.alpha.get());
        self.buffer.push_vertex(Vertex::new(world, size, color));
    }

    // ── draw state ────────────────────────────────────────────────────────

    #[inline]
    pub fn draw_state(&self) -> &DrawState {
        &self.draw_state
    }

    #[inline]
    pub fn draw_state_mut(&mut self) -> &mut DrawState {
        &mut self.draw_state
    }

    /// Pushes color, alpha, size and sorting together.
    pub fn push_draw_state(&mut self) {
        self.draw_state.push_all();
    }

    pub fn pop_draw_state(&mut self) {
        self.draw_state.pop_all();
    }

    pub fn push_color(&mut self, color: Color) {
        self.draw_state.color.push(color);
    }

    pub fn push_color_top(&mut self) {
        self.draw_state.color.push_top();
    }

    pub fn pop_color(&mut self) {
        self.draw_state.color.pop();
    }

    pub fn set_color(&mut self, color: Color) {
        self.draw_state.color.set(color);
    }

    pub fn color(&self) -> Color {
        *self.draw_state.color.get()
    }

    pub fn push_alpha(&mut self, alpha: f32) {
        self.draw_state.alpha.push(alpha);
    }

    pub fn push_alpha_top(&mut self) {
        self.draw_state.alpha.push_top();
    }

    pub fn pop_alpha(&mut self) {
        self.draw_state.alpha.pop();
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.draw_state.alpha.set(alpha);
    }

    pub fn alpha(&self) -> f32 {
        *self.draw_state.alpha.get()
    }

    pub fn push_size(&mut self, size: f32) {
        self.draw_state.size.push(size);
    }

    /// Duplicates the current size (not the alpha).
    pub fn push_size_top(&mut self) {
        self.draw_state.size.push_top();
    }

    pub fn pop_size(&mut self) {
        self.draw_state.size.pop();
    }

    pub fn set_size(&mut self, size: f32) {
        self.draw_state.size.set(size);
    }

    pub fn size(&self) -> f32 {
        *self.draw_state.size.get()
    }

    pub fn push_sorting(&mut self, enabled: bool) {
        self.draw_state.sorting.push(enabled);
    }

    pub fn push_sorting_top(&mut self) {
        self.draw_state.sorting.push_top();
    }

    pub fn pop_sorting(&mut self) {
        self.draw_state.sorting.pop();
    }

    pub fn set_sorting(&mut self, enabled: bool) {
        self.draw_state.sorting.set(enabled);
    }

    pub fn sorting(&self) -> bool {
        *self.draw_state.sorting.get()
    }

    // ── transform ─────────────────────────────────────────────────────────

    pub fn push_matrix(&mut self, m: Mat4) {
        self.draw_state.matrix.push(m);
    }

    pub fn push_matrix_top(&mut self) {
        self.draw_state.matrix.push_top();
    }

    pub fn pop_matrix(&mut self) {
        self.draw_state.matrix.pop();
    }

    pub fn set_matrix(&mut self, m: Mat4) {
        self.draw_state.matrix.set(m);
    }

    pub fn set_identity(&mut self) {
        self.draw_state.matrix.set(Mat4::IDENTITY);
    }

    pub fn matrix(&self) -> Mat4 {
        *self.draw_state.matrix.get()
    }

    /// Post-multiplies the top matrix: `top = top * m`.
    pub fn mul_matrix(&mut self, m: Mat4) {
        let top = self.draw_state.matrix.top_mut();
        *top = *top * m;
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.mul_matrix(Mat4::from_translation(Vec3::new(x, y, z)));
    }

    /// Rotates about `axis` by `angle` radians. A zero axis is ignored.
    pub fn rotate(&mut self, axis: Vec3, angle: f32) {
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        self.mul_matrix(Mat4::from_axis_angle(axis, angle));
    }

    pub fn scale(&mut self, x: f32, y: f32, z: f32) {
        self.mul_matrix(Mat4::from_scale(Vec3::new(x, y, z)));
    }

    // ── ids ───────────────────────────────────────────────────────────────

    /// Hashes `name` under the current id scope.
    pub fn make_id(&self, name: &str) -> Id {
        Id::with_parent(*self.draw_state.id.get(), name)
    }

    pub fn push_id(&mut self, id: Id) {
        self.draw_state.id.push(id);
    }

    pub fn push_id_top(&mut self) {
        self.draw_state.id.push_top();
    }

    /// Pushes `make_id(name)`, opening a nested scope.
    pub fn push_id_named(&mut self, name: &str) {
        let id = self.make_id(name);
        self.draw_state.id.push(id);
    }

    pub fn pop_id(&mut self) {
        self.draw_state.id.pop();
    }

    pub fn id(&self) -> Id {
        *self.draw_state.id.get()
    }

    // ── gizmo state & input queries ───────────────────────────────────────

    /// `!= Id::INVALID` while a gizmo is being dragged.
    #[inline]
    pub fn active_id(&self) -> Id {
        self.gizmo.active_id()
    }

    #[inline]
    pub fn hot_id(&self) -> Id {
        self.gizmo.hot_id()
    }

    #[inline]
    pub fn gizmo_state(&self) -> &GizmoState {
        &self.gizmo
    }

    #[inline]
    pub fn gizmo_mode(&self) -> GizmoMode {
        self.gizmo.mode()
    }

    #[inline]
    pub fn set_gizmo_mode(&mut self, mode: GizmoMode) {
        self.gizmo.mode = mode;
    }

    /// See [`GizmoState::make_hot`].
    pub fn make_hot(&mut self, id: Id, depth: f32, intersects: bool) -> bool {
        self.gizmo.make_hot(id, depth, intersects)
    }

    pub fn reset_id(&mut self) {
        self.gizmo.reset_id();
    }

    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys.is_down(key)
    }

    #[inline]
    pub fn was_key_pressed(&self, key: Key) -> bool {
        self.keys.was_pressed(key)
    }

    #[inline]
    pub fn was_key_released(&self, key: Key) -> bool {
        self.keys.was_released(key)
    }

    /// World space size at `position` that covers `pixels` screen pixels.
    ///
    /// Returns 0 for a degenerate viewport.
    pub fn pixels_to_world_size(&self, position: Vec3, pixels: f32) -> f32 {
        let half_height = 0.5 * self.input.viewport_size.y;
        if !(half_height > f32::EPSILON) {
            return 0.0;
        }
        let distance = position.distance(self.input.view_origin);
        pixels * distance * self.input.tan_half_fov / half_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording() -> Context {
        let mut ctx = Context::new();
        ctx.reset_frame();
        ctx
    }

    fn drain(ctx: &mut Context) -> Vec<(PrimitiveType, Vec<Vertex>)> {
        let mut out = Vec::new();
        ctx.end_frame(|dl| out.push((dl.prim_type, dl.vertices.to_vec())));
        out
    }

    // ── end to end ────────────────────────────────────────────────────────

    #[test]
    fn red_triangle_with_size_two() {
        let mut ctx = recording();
        ctx.push_color(Color::RED);
        ctx.push_size(2.0);
        ctx.begin_triangles();
        ctx.vertex(Vec3::new(0.0, 0.0, 0.0));
        ctx.vertex(Vec3::new(1.0, 0.0, 0.0));
        ctx.vertex(Vec3::new(0.0, 1.0, 0.0));
        ctx.end();
        ctx.pop_size();
        ctx.pop_color();

        let lists = drain(&mut ctx);
        assert_eq!(lists.len(), 1);
        let (t, verts) = &lists[0];
        assert_eq!(*t, PrimitiveType::Triangles);
        assert_eq!(verts.len(), 3);
        for v in verts {
            assert_eq!(v.color, Color::RED);
            assert_eq!(v.size, 2.0);
        }
    }

    #[test]
    fn vertices_are_pre_transformed_and_alpha_scaled() {
        let mut ctx = recording();
        ctx.push_matrix_top();
        ctx.translate(10.0, 0.0, 0.0);
        ctx.push_alpha(0.5);
        ctx.begin_points();
        ctx.vertex_colored(Vec3::new(1.0, 2.0, 3.0), Color::WHITE);
        ctx.end();
        ctx.pop_alpha();
        ctx.pop_matrix();

        let lists = drain(&mut ctx);
        let v = lists[0].1[0];
        assert_eq!(v.position, Vec3::new(11.0, 2.0, 3.0));
        assert_eq!(v.color.0 & 0xff, 128);
    }

    #[test]
    fn sorted_triangles_emit_farthest_first() {
        let mut ctx = recording();
        ctx.push_sorting(true);
        for z in [1.0f32, 5.0, 3.0] {
            ctx.begin_triangles();
            ctx.vertex(Vec3::new(-1.0, 0.0, -z));
            ctx.vertex(Vec3::new(1.0, 0.0, -z));
            ctx.vertex(Vec3::new(0.0, 0.0, -z));
            ctx.end();
        }
        ctx.pop_sorting();

        let lists = drain(&mut ctx);
        let zs: Vec<f32> = lists[0].1.chunks(3).map(|c| -c[0].position.z).collect();
        assert_eq!(zs, vec![5.0, 3.0, 1.0]);
    }

    #[test]
    fn reset_twice_leaves_buffers_empty() {
        let mut ctx = recording();
        ctx.begin_points();
        ctx.vertex(Vec3::ZERO);
        ctx.end();
        ctx.reset_frame();
        assert_eq!(ctx.primitive_count(PrimitiveType::Points), 0);
        ctx.reset_frame();
        assert_eq!(ctx.primitive_count(PrimitiveType::Points), 0);
        assert!(drain(&mut ctx).is_empty());
    }

    #[test]
    fn primitive_counts_cover_both_buckets() {
        let mut ctx = recording();
        ctx.begin_line_loop();
        ctx.vertex(Vec3::ZERO);
        ctx.vertex(Vec3::X);
        ctx.vertex(Vec3::Y);
        ctx.end();
        ctx.set_sorting(true);
        ctx.begin_lines();
        ctx.vertex(Vec3::ZERO);
        ctx.vertex(Vec3::Z);
        ctx.end();
        assert_eq!(ctx.primitive_count(PrimitiveType::Lines), 4);
        assert_eq!(ctx.draw_list_count(), 2);
    }

    // ── contract violations ───────────────────────────────────────────────

    #[test]
    #[should_panic(expected = "requires reset_frame")]
    fn drawing_twice_panics() {
        let mut ctx = recording();
        ctx.end_frame(|_| {});
        ctx.end_frame(|_| {});
    }

    #[test]
    #[should_panic(expected = "draw_list_count called between begin and end")]
    fn draw_list_count_mid_primitive_panics() {
        let mut ctx = recording();
        ctx.set_sorting(true);
        ctx.begin_lines();
        ctx.vertex(Vec3::new(0.0, 0.0, -1.0));
        ctx.draw_list_count();
    }

    #[test]
    fn draw_list_count_between_primitives_keeps_vertices() {
        let mut ctx = recording();
        ctx.set_sorting(true);
        ctx.begin_lines();
        ctx.vertex(Vec3::new(0.0, 0.0, -1.0));
        ctx.vertex(Vec3::new(1.0, 0.0, -1.0));
        ctx.end();
        assert_eq!(ctx.draw_list_count(), 1);
        ctx.begin_lines();
        ctx.vertex(Vec3::new(0.0, 5.0, -9.0));
        ctx.vertex(Vec3::new(1.0, 5.0, -9.0));
        ctx.end();

        let lists = drain(&mut ctx);
        let positions: Vec<Vec3> = lists
            .iter()
            .flat_map(|(_, verts)| verts.iter().map(|v| v.position))
            .collect();
        assert_eq!(
            positions,
            vec![
                Vec3::new(0.0, 5.0, -9.0),
                Vec3::new(1.0, 5.0, -9.0),
                Vec3::new(0.0, 0.0, -1.0),
                Vec3::new(1.0, 0.0, -1.0),
            ]
        );
    }

    #[test]
    fn reset_mid_primitive_leaves_state_untouched() {
        let mut ctx = recording();
        ctx.push_color(Color::BLUE);
        ctx.input_mut().set_key(Key::SELECT, true);
        ctx.begin_points();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| ctx.reset_frame()));
        assert!(result.is_err());
        assert_eq!(ctx.color(), Color::BLUE);
        assert!(!ctx.is_key_down(Key::SELECT));
    }

    #[test]
    #[should_panic(expected = "outside reset_frame/end_frame")]
    fn begin_before_first_reset_panics() {
        Context::new().begin_points();
    }

    #[test]
    #[should_panic(expected = "baseline")]
    fn popping_baseline_color_panics() {
        Context::new().pop_color();
    }

    #[test]
    fn unbalanced_stacks_are_restored_at_reset() {
        let mut ctx = recording();
        ctx.push_color(Color::BLUE);
        ctx.push_id_named("leak");
        ctx.reset_frame();
        assert_eq!(ctx.color(), Color::WHITE);
        assert_eq!(ctx.id(), Id::INVALID);
    }

    // ── draw state ────────────────────────────────────────────────────────

    #[test]
    fn push_size_top_duplicates_size() {
        let mut ctx = Context::new();
        ctx.set_alpha(0.25);
        ctx.set_size(3.0);
        ctx.push_size_top();
        assert_eq!(ctx.size(), 3.0);
        ctx.pop_size();
    }

    #[test]
    fn make_id_is_scoped() {
        let mut ctx = Context::new();
        let outer = ctx.make_id("handle");
        ctx.push_id_named("parent");
        let inner = ctx.make_id("handle");
        ctx.pop_id();
        assert_ne!(outer, inner);
        assert_eq!(outer, Id::from_name("handle"));
    }

    // ── screen-space sizing ───────────────────────────────────────────────

    #[test]
    fn world_size_grows_with_distance() {
        let mut ctx = Context::new();
        ctx.input_mut().view_origin = Vec3::ZERO;
        ctx.input_mut().viewport_size = glam::Vec2::new(800.0, 600.0);
        ctx.input_mut().tan_half_fov = 1.0;

        let near = ctx.pixels_to_world_size(Vec3::new(0.0, 0.0, -5.0), 10.0);
        let far = ctx.pixels_to_world_size(Vec3::new(0.0, 0.0, -10.0), 10.0);
        assert!((near - 10.0 * 5.0 / 300.0).abs() < 1.0e-5);
        assert!((far - 2.0 * near).abs() < 1.0e-5);
    }

    #[test]
    fn degenerate_viewport_gives_zero_size() {
        let mut ctx = Context::new();
        ctx.input_mut().viewport_size = glam::Vec2::ZERO;
        assert_eq!(ctx.pixels_to_world_size(Vec3::new(0.0, 0.0, -5.0), 10.0), 0.0);
    }
}
