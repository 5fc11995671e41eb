use std::any::Any;
use std::fmt;
use std::rc::Rc;

use glam::{Vec2, Vec3};

use crate::coords::Ray;

/// Keys the engine interprets.
///
/// The action aliases map the raw keys to what they do, which reads better
/// when the "key" is really a VR trigger or a gamepad button.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    MouseLeft,
    T,
    R,
    S,
}

impl Key {
    pub const COUNT: usize = 4;

    pub const SELECT: Key = Key::MouseLeft;
    pub const GIZMO_TRANSLATION: Key = Key::T;
    pub const GIZMO_ROTATION: Key = Key::R;
    pub const GIZMO_SCALE: Key = Key::S;

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Host-provided snapshot for one frame.
#[derive(Clone)]
pub struct FrameInput {
    /// Key "down" flags indexed by [`Key::index`].
    pub key_down: [bool; Key::COUNT],

    /// World space cursor ray origin.
    pub cursor_ray_origin: Vec3,
    /// World space cursor ray direction.
    pub cursor_ray_direction: Vec3,
    /// World space "up".
    pub world_up: Vec3,
    /// Camera position in world space.
    pub view_origin: Vec3,
    /// Viewport size in pixels.
    pub viewport_size: Vec2,
    /// `tan(fov / 2)` of the vertical field of view.
    pub tan_half_fov: f32,
    /// Seconds since the previous frame.
    pub delta_time: f32,

    /// Passed through untouched, e.g. for use inside the draw callback.
    pub user_data: Option<Rc<dyn Any>>,
}

impl FrameInput {
    #[inline]
    pub fn cursor_ray(&self) -> Ray {
        Ray::new(self.cursor_ray_origin, self.cursor_ray_direction)
    }

    #[inline]
    pub fn set_key(&mut self, key: Key, down: bool) {
        self.key_down[key.index()] = down;
    }

    /// Downcasts the pass-through handle.
    pub fn user_data<T: Any>(&self) -> Option<&T> {
        self.user_data.as_deref().and_then(|d| d.downcast_ref::<T>())
    }
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            key_down: [false; Key::COUNT],
            cursor_ray_origin: Vec3::ZERO,
            cursor_ray_direction: Vec3::NEG_Z,
            world_up: Vec3::Y,
            view_origin: Vec3::ZERO,
            viewport_size: Vec2::new(1280.0, 720.0),
            tan_half_fov: 0.5,
            delta_time: 0.0,
            user_data: None,
        }
    }
}

impl fmt::Debug for FrameInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameInput")
            .field("key_down", &self.key_down)
            .field("cursor_ray_origin", &self.cursor_ray_origin)
            .field("cursor_ray_direction", &self.cursor_ray_direction)
            .field("world_up", &self.world_up)
            .field("view_origin", &self.view_origin)
            .field("viewport_size", &self.viewport_size)
            .field("tan_half_fov", &self.tan_half_fov)
            .field("delta_time", &self.delta_time)
            .field("user_data", &self.user_data.is_some())
            .finish()
    }
}
