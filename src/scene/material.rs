use super::TextureId;
use crate::math::{hex_rgb, Rgb, BLACK};

/// Physically based surface description attached to a drawable
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub color: Rgb,
    pub metalness: f32,
    pub roughness: f32,
    pub texture: Option<TextureId>,
    pub emissive: Rgb,
}

impl Material {
    pub fn new(color: Rgb, metalness: f32, roughness: f32) -> Self {
        Self {
            color,
            metalness: metalness.clamp(0.0, 1.0),
            roughness: roughness.clamp(0.0, 1.0),
            texture: None,
            emissive: BLACK,
        }
    }

    pub fn with_emissive(mut self, emissive: Rgb) -> Self {
        self.emissive = emissive;
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(hex_rgb(0xffffff), 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_clamps_factors() {
        let m = Material::new([1.0, 1.0, 1.0], 1.5, -0.2);
        assert_eq!(m.metalness, 1.0);
        assert_eq!(m.roughness, 0.0);
    }

    #[test]
    fn test_material_defaults() {
        let m = Material::new(hex_rgb(0x888888), 0.2, 0.5);
        assert_eq!(m.texture, None);
        assert_eq!(m.emissive, BLACK);
    }
}
