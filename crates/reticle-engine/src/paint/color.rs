use bytemuck::{Pod, Zeroable};
use glam::Vec4;

/// Packed 8-bit-per-channel RGBA color.
///
/// Layout (bit 31 on the left): `RRRRRRRR GGGGGGGG BBBBBBBB AAAAAAAA`.
/// Red lives in the most significant byte, alpha in the least significant one;
/// shaders unpacking vertex colors depend on this order.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x0000_00ff);
    pub const WHITE: Color = Color(0xffff_ffff);
    pub const RED: Color = Color(0xff00_00ff);
    pub const GREEN: Color = Color(0x00ff_00ff);
    pub const BLUE: Color = Color(0x0000_ffff);
    pub const MAGENTA: Color = Color(0xff00_ffff);
    pub const YELLOW: Color = Color(0xffff_00ff);
    pub const CYAN: Color = Color(0x00ff_ffff);

    const SHIFT_R: u32 = 24;
    const SHIFT_G: u32 = 16;
    const SHIFT_B: u32 = 8;
    const SHIFT_A: u32 = 0;

    #[inline]
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    /// Packs straight-alpha float components in `[0, 1]`. Out-of-range input is clamped.
    #[inline]
    pub fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_rgba_u8(to_u8(r), to_u8(g), to_u8(b), to_u8(a))
    }

    #[inline]
    pub fn from_vec4(v: Vec4) -> Self {
        Self::from_rgba(v.x, v.y, v.z, v.w)
    }

    #[inline]
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.r(), self.g(), self.b(), self.a())
    }

    #[inline]
    pub fn r(self) -> f32 {
        self.channel(Self::SHIFT_R)
    }

    #[inline]
    pub fn g(self) -> f32 {
        self.channel(Self::SHIFT_G)
    }

    #[inline]
    pub fn b(self) -> f32 {
        self.channel(Self::SHIFT_B)
    }

    #[inline]
    pub fn a(self) -> f32 {
        self.channel(Self::SHIFT_A)
    }

    #[inline]
    pub fn set_r(&mut self, v: f32) {
        self.set_channel(Self::SHIFT_R, v);
    }

    #[inline]
    pub fn set_g(&mut self, v: f32) {
        self.set_channel(Self::SHIFT_G, v);
    }

    #[inline]
    pub fn set_b(&mut self, v: f32) {
        self.set_channel(Self::SHIFT_B, v);
    }

    #[inline]
    pub fn set_a(&mut self, v: f32) {
        self.set_channel(Self::SHIFT_A, v);
    }

    /// Returns the color with alpha multiplied by `factor`.
    #[inline]
    pub fn scale_alpha(self, factor: f32) -> Self {
        let mut out = self;
        out.set_a(self.a() * factor);
        out
    }

    #[inline]
    fn channel(self, shift: u32) -> f32 {
        ((self.0 >> shift) & 0xff) as f32 / 255.0
    }

    #[inline]
    fn set_channel(&mut self, shift: u32, v: f32) {
        let mask = 0xff << shift;
        self.0 = (self.0 & !mask) | ((to_u8(v) as u32) << shift);
    }
}

impl From<u32> for Color {
    #[inline]
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl From<Color> for u32 {
    #[inline]
    fn from(c: Color) -> Self {
        c.0
    }
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_is_least_significant_byte() {
        let c = Color::from_rgba_u8(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.0, 0x1122_3344);
        assert_eq!(c.0 & 0xff, 0x44);
    }

    #[test]
    fn float_round_trip_through_channels() {
        let c = Color::from_rgba(1.0, 0.0, 0.5, 0.25);
        assert_eq!(c.r(), 1.0);
        assert_eq!(c.g(), 0.0);
        assert!((c.b() - 0.5).abs() < 1.0 / 255.0);
        assert!((c.a() - 0.25).abs() < 1.0 / 255.0);
    }

    #[test]
    fn setters_touch_only_their_channel() {
        let mut c = Color::RED;
        c.set_g(1.0);
        assert_eq!(c, Color::YELLOW);
        c.set_a(0.0);
        assert_eq!(c.0, 0xffff_0000);
    }

    #[test]
    fn scale_alpha_keeps_rgb() {
        let c = Color::WHITE.scale_alpha(0.5);
        assert_eq!(c.0 >> 8, 0x00ff_ffff);
        assert_eq!(c.0 & 0xff, 128);
    }

    #[test]
    fn out_of_range_floats_clamp() {
        assert_eq!(Color::from_rgba(2.0, -1.0, 0.0, 1.0), Color::RED);
    }
}
