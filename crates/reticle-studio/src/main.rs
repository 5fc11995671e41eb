//! Headless host for the reticle engine.
//!
//! Plays a short scripted interaction (hover, press, drag, release) against a
//! translation gizmo and a few debug shapes, and "rasterizes" each draw list
//! by copying its bytes into a staging buffer the way a GPU upload would.

use anyhow::{ensure, Result};
use glam::{Mat4, Vec2, Vec3};
use reticle_engine::logging::{init_logging, LoggingConfig};
use reticle_engine::{Color, Context, DrawList, Id, Key, PrimitiveType};

/// Host-side stand-in for a GPU vertex buffer.
#[derive(Default)]
struct Staging {
    bytes: Vec<u8>,
    lists: usize,
    per_type: [usize; PrimitiveType::COUNT],
}

impl Staging {
    fn upload(&mut self, list: &DrawList<'_>) {
        self.bytes.extend_from_slice(list.as_bytes());
        self.lists += 1;
        self.per_type[list.prim_type.index()] += list.primitive_count();
    }

    fn clear(&mut self) {
        self.bytes.clear();
        self.lists = 0;
        self.per_type = [0; PrimitiveType::COUNT];
    }
}

/// One scripted frame: where the cursor points and whether select is held.
struct Step {
    target: Vec3,
    select: bool,
}

fn main() -> Result<()> {
    init_logging(LoggingConfig {
        default_level: log::LevelFilter::Debug,
        ..LoggingConfig::default()
    });

    let mut ctx = Context::new();
    {
        let input = ctx.input_mut();
        input.view_origin = Vec3::new(0.0, 2.0, 10.0);
        input.viewport_size = Vec2::new(1280.0, 720.0);
        input.tan_half_fov = (45.0f32.to_radians() * 0.5).tan();
        input.delta_time = 1.0 / 60.0;
    }

    let origin = Vec3::ZERO;
    let height = ctx.pixels_to_world_size(origin, ctx.config().gizmo.height_pixels);
    let grab = origin + Vec3::X * (0.6 * height);

    let script = [
        Step { target: grab, select: false },
        Step { target: grab, select: true },
        Step { target: grab + Vec3::X * 0.5, select: true },
        Step { target: grab + Vec3::X * 1.5, select: true },
        Step { target: grab + Vec3::X * 1.5, select: false },
    ];

    let mut position = origin;
    let mut staging = Staging::default();

    for (frame, step) in script.iter().enumerate() {
        {
            let input = ctx.input_mut();
            input.cursor_ray_origin = input.view_origin;
            input.cursor_ray_direction = (step.target - input.view_origin).normalize();
            input.set_key(Key::SELECT, step.select);
        }
        ctx.reset_frame();

        draw_scene(&mut ctx);
        let moved = ctx.gizmo_translation("crate", &mut position);

        staging.clear();
        ctx.end_frame(|list| staging.upload(list));

        log::info!(
            "frame {frame}: hot={:?} active={:?} moved={moved} position={position} lists={} bytes={} tris={} lines={} points={}",
            ctx.hot_id(),
            ctx.active_id(),
            staging.lists,
            staging.bytes.len(),
            staging.per_type[PrimitiveType::Triangles.index()],
            staging.per_type[PrimitiveType::Lines.index()],
            staging.per_type[PrimitiveType::Points.index()],
        );
    }

    ensure!(ctx.active_id() == Id::INVALID, "gizmo still active after release");
    ensure!(
        (position.x - 1.5).abs() < 1.0e-2 && position.y == 0.0 && position.z == 0.0,
        "unexpected gizmo result {position}"
    );

    log::info!("scripted drag finished at {position}");
    Ok(())
}

/// Debug geometry drawn every frame around the manipulated object.
fn draw_scene(ctx: &mut Context) {
    ctx.push_matrix(Mat4::from_translation(Vec3::new(0.0, -1.0, 0.0)));
    ctx.draw_xyz_axes();
    ctx.pop_matrix();

    ctx.push_color(Color::CYAN);
    ctx.draw_aligned_box(Vec3::splat(-0.5), Vec3::splat(0.5));
    ctx.pop_color();

    // Translucent ground quads, depth sorted.
    ctx.push_draw_state();
    ctx.set_sorting(true);
    ctx.set_color(Color::from_rgba(0.4, 0.4, 0.45, 1.0));
    ctx.set_alpha(0.35);
    for z in [-4.0f32, -2.0, 0.0, 2.0] {
        let y = -1.0;
        ctx.draw_quad_filled(
            Vec3::new(-1.0, y, z),
            Vec3::new(1.0, y, z),
            Vec3::new(1.0, y, z + 1.5),
            Vec3::new(-1.0, y, z + 1.5),
        );
    }
    ctx.pop_draw_state();

    ctx.push_size(6.0);
    ctx.push_color(Color::MAGENTA);
    ctx.draw_circle(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, 2.5, 48);
    ctx.pop_color();
    ctx.pop_size();
}
