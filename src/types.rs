use glam::Mat4;

use crate::camera::OrbitCamera;
use crate::lighting::Lighting;
use crate::math::{srgb_to_linear, Rgb};
use crate::scene::Material;

/// Interleaved vertex as uploaded to the GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Per-frame camera and light data, bind group 0
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniform {
    pub view_proj: [[f32; 4]; 4],
    pub camera_position: [f32; 3],
    pub exposure: f32,
    pub sky_color: [f32; 3],
    pub hemisphere_intensity: f32,
    pub ground_color: [f32; 3],
    pub environment_intensity: f32,
    pub key_direction: [f32; 3],
    pub key_intensity: f32,
    pub key_color: [f32; 3],
    pub _pad2: f32,
    pub point_position: [f32; 3],
    pub point_intensity: f32,
    pub point_color: [f32; 3],
    pub point_range: f32,
    pub environment_upper: [f32; 3],
    pub _pad3: f32,
    pub environment_lower: [f32; 3],
    pub _pad4: f32,
}

impl FrameUniform {
    pub fn new(camera: &OrbitCamera, lighting: &Lighting) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_position: camera.position().to_array(),
            exposure: lighting.exposure,
            sky_color: linear(lighting.hemisphere.sky),
            hemisphere_intensity: lighting.hemisphere.intensity,
            ground_color: linear(lighting.hemisphere.ground),
            environment_intensity: lighting.environment.intensity,
            key_direction: lighting.key.direction().to_array(),
            key_intensity: lighting.key.intensity,
            key_color: linear(lighting.key.color),
            _pad2: 0.0,
            point_position: lighting.point.position.to_array(),
            point_intensity: lighting.point.intensity,
            point_color: linear(lighting.point.color),
            point_range: lighting.point.range,
            environment_upper: linear(lighting.environment.upper),
            _pad3: 0.0,
            environment_lower: linear(lighting.environment.lower),
            _pad4: 0.0,
        }
    }
}

/// Per-draw transform and material, bind group 1
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniform {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 4],
    pub base_color: [f32; 3],
    pub metalness: f32,
    pub emissive: [f32; 3],
    pub roughness: f32,
    pub uv_repeat: [f32; 2],
    pub textured: f32,
    pub _pad: f32,
}

impl DrawUniform {
    pub fn new(model: Mat4, material: &Material, uv_repeat: [f32; 2]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            normal: model.inverse().transpose().to_cols_array_2d(),
            base_color: linear(material.color),
            metalness: material.metalness,
            emissive: linear(material.emissive),
            roughness: material.roughness,
            uv_repeat,
            textured: if material.texture.is_some() { 1.0 } else { 0.0 },
            _pad: 0.0,
        }
    }
}

fn linear(color: Rgb) -> [f32; 3] {
    color.map(srgb_to_linear)
}
