use glam::{Quat, Vec3};
use std::f32::consts::PI;

use super::{Product, ProductSource};
use crate::math::{hex_rgb, BLACK};
use crate::scene::{Material, MeshData, SceneGraph};

/// Sizes and offsets of the built-in stand-in product
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderDimensions {
    pub body: Vec3,
    pub body_center_y: f32,
    pub door_pivot: Vec3,
    pub door_holder: Vec3,
    pub door: [f32; 2],
    pub indicator_radius: f32,
    pub indicator_height: f32,
    pub indicator_segments: u32,
    pub indicator: Vec3,
}

impl Default for PlaceholderDimensions {
    fn default() -> Self {
        Self {
            body: Vec3::new(1.6, 1.0, 1.0),
            body_center_y: 0.5,
            door_pivot: Vec3::new(-0.8, 0.6, 0.5),
            door_holder: Vec3::new(0.6, -0.1, 0.0),
            door: [1.2, 0.9],
            indicator_radius: 0.05,
            indicator_height: 0.02,
            indicator_segments: 24,
            indicator: Vec3::new(0.6, 1.0, 0.51),
        }
    }
}

/// Builds the stand-in product from primitives and binds its parts
///
/// The door hangs off a pivot at the body's front-left edge through a
/// holder offset, so rotating the pivot about Y swings it like a hinge.
pub fn build_placeholder(scene: &mut SceneGraph, dims: &PlaceholderDimensions) -> Product {
    let root = scene.add_group(scene.root(), Some("Product"));
    let base = Material::new(hex_rgb(0x888888), 0.2, 0.5);

    let body = scene.add_mesh(
        root,
        Some("Body"),
        MeshData::cuboid(dims.body.x, dims.body.y, dims.body.z),
        base.clone(),
    );
    scene.node_mut(body).translation = Vec3::new(0.0, dims.body_center_y, 0.0);

    let door_pivot = scene.add_group(root, Some("DoorPivot"));
    scene.node_mut(door_pivot).translation = dims.door_pivot;

    let holder = scene.add_group(door_pivot, None);
    scene.node_mut(holder).translation = dims.door_holder;
    let frame = scene.add_group(holder, None);

    let door = scene.add_mesh(frame, Some("Door"), MeshData::plane(dims.door[0], dims.door[1]), base);
    scene.node_mut(door).rotation = Quat::from_rotation_y(PI);

    let indicator_material = Material::new(hex_rgb(0x222222), 0.0, 0.3).with_emissive(BLACK);
    let indicator = scene.add_mesh(
        root,
        Some("Indicator"),
        MeshData::cylinder(dims.indicator_radius, dims.indicator_height, dims.indicator_segments),
        indicator_material,
    );
    scene.node_mut(indicator).rotation = Quat::from_rotation_x(PI / 2.0);
    scene.node_mut(indicator).translation = dims.indicator;

    Product {
        root,
        body,
        door_pivot,
        door,
        indicator,
        source: ProductSource::Placeholder,
    }
}
