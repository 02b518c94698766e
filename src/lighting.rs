use glam::Vec3;

use crate::math::{hex_rgb, Rgb};

pub const BACKGROUND: Rgb = hex_rgb(0x0b0f14);

pub const POINT_LIGHT_COLOR: Rgb = hex_rgb(0xffe9a6);
pub const POINT_LIGHT_POSITION: Vec3 = Vec3::new(0.6, 1.0, 0.7);
pub const POINT_LIGHT_RANGE: f32 = 10.0;
pub const POINT_LIGHT_ON_INTENSITY: f32 = 1.4;

pub const INDICATOR_ON_EMISSIVE: Rgb = hex_rgb(0xffcc66);

/// Scale applied before the filmic tone curve
pub const TONE_MAPPING_EXPOSURE: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HemisphereLight {
    pub sky: Rgb,
    pub ground: Rgb,
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Position the light shines from, towards the origin
    pub position: Vec3,
    pub color: Rgb,
    pub intensity: f32,
}

impl DirectionalLight {
    /// Unit vector pointing from the surface towards the light
    pub fn direction(&self) -> Vec3 {
        self.position.try_normalize().unwrap_or(Vec3::Y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Rgb,
    pub intensity: f32,
    pub range: f32,
}

impl PointLight {
    pub fn is_on(&self) -> bool {
        self.intensity > 0.0
    }
}

/// Neutral room-like surroundings reflected by glossy and metallic surfaces.
/// The shader blends `lower` to `upper` along the reflected view direction and
/// flattens the blend towards the average as roughness grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentLight {
    pub upper: Rgb,
    pub lower: Rgb,
    pub intensity: f32,
}

impl Default for EnvironmentLight {
    fn default() -> Self {
        Self {
            upper: hex_rgb(0xf2f2f2),
            lower: hex_rgb(0x5a5a5a),
            intensity: 1.0,
        }
    }
}

/// All lights in the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub hemisphere: HemisphereLight,
    pub key: DirectionalLight,
    pub point: PointLight,
    pub environment: EnvironmentLight,
    pub background: Rgb,
    pub exposure: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            hemisphere: HemisphereLight {
                sky: hex_rgb(0xffffff),
                ground: hex_rgb(0x202020),
                intensity: 0.6,
            },
            key: DirectionalLight {
                position: Vec3::new(4.0, 6.0, 5.0),
                color: hex_rgb(0xffffff),
                intensity: 2.2,
            },
            point: PointLight {
                position: POINT_LIGHT_POSITION,
                color: POINT_LIGHT_COLOR,
                intensity: 0.0,
                range: POINT_LIGHT_RANGE,
            },
            environment: EnvironmentLight::default(),
            background: BACKGROUND,
            exposure: TONE_MAPPING_EXPOSURE,
        }
    }
}
