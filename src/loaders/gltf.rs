use anyhow::{Context, Result};
use glam::{Quat, Vec3};
use log::{debug, info, warn};
use std::path::Path;

use crate::math::{linear_to_srgb, Rgb};
use crate::product::PartNames;
use crate::scene::{Drawable, Material, MeshData, NodeId, SceneGraph, Texture};

/// A glTF scene flattened into plain data that can cross threads
#[derive(Debug, Clone, Default)]
pub struct ModelData {
    pub nodes: Vec<ModelNode>,
    pub roots: Vec<usize>,
    pub textures: Vec<Texture>,
}

#[derive(Debug, Clone)]
pub struct ModelNode {
    pub name: Option<String>,
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub primitives: Vec<ModelPrimitive>,
    pub children: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct ModelPrimitive {
    pub mesh: MeshData,
    pub material: Material,
    /// Index into `ModelData::textures`
    pub texture: Option<usize>,
}

impl ModelData {
    pub fn find_node(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.name.as_deref() == Some(name))
    }

    /// Whether the model names every part needed to replace the placeholder
    pub fn has_required_parts(&self) -> bool {
        PartNames::REQUIRED.iter().all(|name| self.find_node(name).is_some())
    }

    /// Adds the model under `parent` and returns the new model root
    ///
    /// Every primitive gets its own material instance so parts that shared a
    /// material in the file can still be edited independently.
    pub fn instantiate(&self, scene: &mut SceneGraph, parent: NodeId) -> NodeId {
        let texture_ids: Vec<_> = self
            .textures
            .iter()
            .map(|t| scene.add_texture(t.clone()))
            .collect();

        let root = scene.add_group(parent, Some("Model"));
        let mut stack: Vec<(usize, NodeId)> = self.roots.iter().rev().map(|&i| (i, root)).collect();

        while let Some((index, parent)) = stack.pop() {
            let Some(source) = self.nodes.get(index) else {
                warn!("model references missing node {}", index);
                continue;
            };

            let id = scene.add_group(parent, source.name.as_deref());
            {
                let node = scene.node_mut(id);
                node.translation = source.translation;
                node.rotation = source.rotation;
                node.scale = source.scale;
            }

            for primitive in &source.primitives {
                let mut material = primitive.material.clone();
                material.texture = primitive.texture.and_then(|t| texture_ids.get(t).copied());
                let mesh = scene.add_mesh_data(primitive.mesh.clone());
                let material = scene.add_material(material);
                scene.node_mut(id).drawables.push(Drawable { mesh, material });
            }

            stack.extend(source.children.iter().rev().map(|&c| (c, id)));
        }

        root
    }
}

/// Loads a glTF / GLB file from disk
pub fn load_model(path: impl AsRef<Path>) -> Result<ModelData> {
    let path = path.as_ref();
    info!("loading model {:?}", path);

    let (document, buffers, images) =
        gltf::import(path).context(format!("Failed to load glTF file: {:?}", path))?;

    convert(&document, &buffers, &images)
}

/// Loads a glTF / GLB document held in memory
pub fn load_model_from_slice(bytes: &[u8]) -> Result<ModelData> {
    let (document, buffers, images) =
        gltf::import_slice(bytes).context("Failed to parse glTF data")?;

    convert(&document, &buffers, &images)
}

fn convert(
    document: &gltf::Document,
    buffers: &[gltf::buffer::Data],
    images: &[gltf::image::Data],
) -> Result<ModelData> {
    debug!(
        "glTF: {} nodes, {} meshes, {} materials, {} images",
        document.nodes().count(),
        document.meshes().count(),
        document.materials().count(),
        images.len()
    );

    let textures = images
        .iter()
        .enumerate()
        .map(|(i, image)| convert_image(i, image))
        .collect();

    let nodes = document
        .nodes()
        .map(|node| convert_node(&node, buffers))
        .collect::<Result<Vec<_>>>()?;

    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .context("glTF file contains no scene")?;
    let roots = scene.nodes().map(|n| n.index()).collect();

    Ok(ModelData {
        nodes,
        roots,
        textures,
    })
}

fn convert_node(node: &gltf::Node, buffers: &[gltf::buffer::Data]) -> Result<ModelNode> {
    let (translation, rotation, scale) = node.transform().decomposed();

    let primitives = match node.mesh() {
        Some(mesh) => mesh
            .primitives()
            .map(|p| convert_primitive(&p, buffers))
            .collect::<Result<Vec<_>>>()
            .context(format!("Mesh of node {:?} is malformed", node.name()))?,
        None => Vec::new(),
    };

    Ok(ModelNode {
        name: node.name().map(str::to_string),
        translation: Vec3::from_array(translation),
        rotation: Quat::from_array(rotation),
        scale: Vec3::from_array(scale),
        primitives,
        children: node.children().map(|c| c.index()).collect(),
    })
}

fn convert_primitive(
    primitive: &gltf::Primitive,
    buffers: &[gltf::buffer::Data],
) -> Result<ModelPrimitive> {
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|d| &d.0[..]));

    let positions: Vec<[f32; 3]> = reader
        .read_positions()
        .context("Mesh primitive has no positions")?
        .collect();

    let indices: Vec<u32> = match reader.read_indices() {
        Some(indices) => indices.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };

    let normals = match reader.read_normals() {
        Some(normals) => normals.collect(),
        None => compute_normals(&positions, &indices),
    };

    let uvs = match reader.read_tex_coords(0) {
        Some(uvs) => uvs.into_f32().collect(),
        None => vec![[0.0, 0.0]; positions.len()],
    };

    let source = primitive.material();
    let pbr = source.pbr_metallic_roughness();
    let [r, g, b, _] = pbr.base_color_factor();
    let material = Material::new(to_srgb([r, g, b]), pbr.metallic_factor(), pbr.roughness_factor())
        .with_emissive(to_srgb(source.emissive_factor()));
    let texture = pbr.base_color_texture().map(|info| info.texture().source().index());

    Ok(ModelPrimitive {
        mesh: MeshData {
            positions,
            normals,
            uvs,
            indices,
        },
        material,
        texture,
    })
}

fn to_srgb(linear: Rgb) -> Rgb {
    linear.map(linear_to_srgb)
}

fn convert_image(index: usize, image: &gltf::image::Data) -> Texture {
    let pixels = match image.format {
        gltf::image::Format::R8G8B8A8 => image.pixels.clone(),
        gltf::image::Format::R8G8B8 => image
            .pixels
            .chunks(3)
            .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
            .collect(),
        gltf::image::Format::R8 => image.pixels.iter().flat_map(|&l| [l, l, l, 255]).collect(),
        gltf::image::Format::R8G8 => image
            .pixels
            .chunks(2)
            .flat_map(|rg| [rg[0], rg[1], 0, 255])
            .collect(),
        other => {
            warn!("unsupported texture format {:?}, using white", other);
            vec![255; (image.width * image.height * 4) as usize]
        }
    };

    let label = format!("model image {}", index);
    Texture::from_rgba(label.clone(), image.width, image.height, pixels).unwrap_or_else(|| {
        warn!("texture {} has inconsistent size, using white", index);
        Texture::checker_with(1, 1, [1.0; 3], [1.0; 3])
    })
}

/// Area-weighted smooth normals for meshes that ship without them
fn compute_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| i as usize);
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let (pa, pb, pc) = (
            Vec3::from_array(positions[a]),
            Vec3::from_array(positions[b]),
            Vec3::from_array(positions[c]),
        );
        let face = (pb - pa).cross(pc - pa);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    normals
        .into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::Y).to_array())
        .collect()
}
