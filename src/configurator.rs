//! Applies UI selections to the live product materials and lights.
//!
//! Every operation is synchronous and idempotent; its effect is visible on the
//! next rendered frame. None of them touch the animation state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::lighting::{PointLight, INDICATOR_ON_EMISSIVE, POINT_LIGHT_ON_INTENSITY};
use crate::math::{parse_color, Rgb, BLACK};
use crate::product::Product;
use crate::scene::{MaterialId, SceneGraph, TextureId};

/// Named metalness / roughness bundles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialPreset {
    Plastic,
    Metal,
    Matte,
}

impl MaterialPreset {
    pub const ALL: [MaterialPreset; 3] = [Self::Plastic, Self::Metal, Self::Matte];

    pub fn name(self) -> &'static str {
        match self {
            Self::Plastic => "plastic",
            Self::Metal => "metal",
            Self::Matte => "matte",
        }
    }

    pub fn metalness(self) -> f32 {
        match self {
            Self::Plastic => 0.1,
            Self::Metal => 1.0,
            Self::Matte => 0.0,
        }
    }

    pub fn roughness(self) -> f32 {
        match self {
            Self::Plastic => 0.6,
            Self::Metal => 0.2,
            Self::Matte => 0.95,
        }
    }
}

impl FromStr for MaterialPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for MaterialPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Surface decoration for body and door
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextureChoice {
    Checker,
    #[default]
    None,
}

impl TextureChoice {
    pub const ALL: [TextureChoice; 2] = [Self::None, Self::Checker];

    /// `"checker"` selects the checker tile, anything else means no texture
    pub fn from_selection(value: &str) -> Self {
        if value == "checker" {
            Self::Checker
        } else {
            Self::None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Checker => "checker",
            Self::None => "none",
        }
    }
}

impl fmt::Display for TextureChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The user's current choices, as last successfully applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub color: String,
    pub preset: MaterialPreset,
    pub texture: TextureChoice,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            color: "#888888".to_string(),
            preset: MaterialPreset::Plastic,
            texture: TextureChoice::None,
        }
    }
}

fn editable_materials(scene: &SceneGraph, product: &Product) -> Vec<MaterialId> {
    product
        .editable_parts()
        .into_iter()
        .flat_map(|part| scene.part_materials(part))
        .collect()
}

/// Sets body and door base color, returns the parsed value
pub fn set_base_color(
    scene: &mut SceneGraph,
    product: &Product,
    value: &str,
) -> Result<Rgb, ConfigError> {
    let color = parse_color(value)?;
    apply_color(scene, product, color);
    Ok(color)
}

pub fn apply_color(scene: &mut SceneGraph, product: &Product, color: Rgb) {
    for id in editable_materials(scene, product) {
        scene.material_mut(id).color = color;
    }
}

/// Looks up a preset by name and applies it to body and door
pub fn set_material_preset(
    scene: &mut SceneGraph,
    product: &Product,
    name: &str,
) -> Result<MaterialPreset, ConfigError> {
    let preset = name.parse::<MaterialPreset>()?;
    apply_preset(scene, product, preset);
    Ok(preset)
}

pub fn apply_preset(scene: &mut SceneGraph, product: &Product, preset: MaterialPreset) {
    for id in editable_materials(scene, product) {
        let material = scene.material_mut(id);
        material.metalness = preset.metalness();
        material.roughness = preset.roughness();
    }
}

/// Assigns the shared checker tile to body and door, or clears their texture
pub fn set_texture(
    scene: &mut SceneGraph,
    product: &Product,
    selection: &str,
    checker: TextureId,
) -> TextureChoice {
    let choice = TextureChoice::from_selection(selection);
    apply_texture(scene, product, choice, checker);
    choice
}

pub fn apply_texture(
    scene: &mut SceneGraph,
    product: &Product,
    choice: TextureChoice,
    checker: TextureId,
) {
    let texture = match choice {
        TextureChoice::Checker => Some(checker),
        TextureChoice::None => None,
    };
    for id in editable_materials(scene, product) {
        scene.material_mut(id).texture = texture;
    }
}

/// Switches the point light and the indicator glow together
pub fn set_light_on(scene: &mut SceneGraph, product: &Product, light: &mut PointLight, on: bool) {
    light.intensity = if on { POINT_LIGHT_ON_INTENSITY } else { 0.0 };
    let emissive = if on { INDICATOR_ON_EMISSIVE } else { BLACK };
    for id in scene.part_materials(product.indicator) {
        scene.material_mut(id).emissive = emissive;
    }
}
