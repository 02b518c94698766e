use image::{Rgba, RgbaImage};

use crate::math::{hex_rgb, Rgb};

pub const CHECKER_SIZE: u32 = 256;
pub const CHECKER_SQUARES: u32 = 8;
pub const CHECKER_DARK: Rgb = hex_rgb(0x222222);
pub const CHECKER_LIGHT: Rgb = hex_rgb(0x777777);
pub const CHECKER_REPEAT: [f32; 2] = [2.0, 2.0];

/// RGBA8 image sampled by materials
#[derive(Debug, Clone)]
pub struct Texture {
    pub label: String,
    pub image: RgbaImage,
    /// UV multiplier, wrapping is always repeat
    pub repeat: [f32; 2],
    /// Whether the texels are sRGB encoded
    pub srgb: bool,
}

impl Texture {
    pub fn new(label: impl Into<String>, image: RgbaImage) -> Self {
        Self {
            label: label.into(),
            image,
            repeat: [1.0, 1.0],
            srgb: true,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Two-tone checkerboard tile, built once per session
    pub fn checker() -> Self {
        Self::checker_with(CHECKER_SIZE, CHECKER_SQUARES, CHECKER_DARK, CHECKER_LIGHT)
    }

    pub fn checker_with(size: u32, squares: u32, dark: Rgb, light: Rgb) -> Self {
        let cell = (size / squares.max(1)).max(1);
        let to_px = |c: Rgb| Rgba([to_u8(c[0]), to_u8(c[1]), to_u8(c[2]), 255]);
        let (dark, light) = (to_px(dark), to_px(light));

        let image = RgbaImage::from_fn(size, size, |x, y| {
            if (x / cell + y / cell) % 2 == 0 {
                dark
            } else {
                light
            }
        });

        Self {
            label: "checker".to_string(),
            image,
            repeat: CHECKER_REPEAT,
            srgb: true,
        }
    }

    /// Wraps raw RGBA8 pixels, returns None if the buffer size is wrong
    pub fn from_rgba(label: impl Into<String>, width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        RgbaImage::from_raw(width, height, pixels).map(|image| Self::new(label, image))
    }
}

fn to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checker_dimensions() {
        let tex = Texture::checker();
        assert_eq!(tex.dimensions(), (256, 256));
        assert_eq!(tex.repeat, [2.0, 2.0]);
        assert!(tex.srgb);
    }

    #[test]
    fn test_checker_alternates() {
        let tex = Texture::checker();
        let cell = 256 / 8;
        assert_eq!(tex.image.get_pixel(0, 0).0, [0x22, 0x22, 0x22, 255]);
        assert_eq!(tex.image.get_pixel(cell, 0).0, [0x77, 0x77, 0x77, 255]);
        assert_eq!(tex.image.get_pixel(0, cell).0, [0x77, 0x77, 0x77, 255]);
        assert_eq!(tex.image.get_pixel(cell, cell).0, [0x22, 0x22, 0x22, 255]);
        assert_eq!(tex.image.get_pixel(cell - 1, cell - 1).0, [0x22, 0x22, 0x22, 255]);
    }

    #[test]
    fn test_checker_has_two_colors_only() {
        let tex = Texture::checker();
        let mut seen: Vec<[u8; 4]> = tex.image.pixels().map(|p| p.0).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_from_rgba_rejects_short_buffer() {
        assert!(Texture::from_rgba("bad", 2, 2, vec![0; 15]).is_none());
        assert!(Texture::from_rgba("ok", 2, 2, vec![0; 16]).is_some());
    }
}
