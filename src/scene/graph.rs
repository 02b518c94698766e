use glam::{Mat4, Quat, Vec3};

use super::{Material, MaterialId, MeshData, MeshId, NodeId, Texture, TextureId};

/// A mesh drawn with a material, owned by a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drawable {
    pub mesh: MeshId,
    pub material: MaterialId,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub name: Option<String>,
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub visible: bool,
    pub drawables: Vec<Drawable>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(name: Option<String>, parent: Option<NodeId>) -> Self {
        Self {
            name,
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            visible: true,
            drawables: Vec::new(),
            parent,
            children: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// Arena-backed node hierarchy with shared mesh, material and texture pools
#[derive(Debug, Clone)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    meshes: Vec<MeshData>,
    materials: Vec<Material>,
    textures: Vec<Texture>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(Some("Scene".to_string()), None)],
            meshes: Vec::new(),
            materials: Vec::new(),
            textures: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Adds an empty transform node under `parent`
    pub fn add_group(&mut self, parent: NodeId, name: Option<&str>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name.map(str::to_string), Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Adds a node drawing `mesh` with its own copy of `material`
    pub fn add_mesh(
        &mut self,
        parent: NodeId,
        name: Option<&str>,
        mesh: MeshData,
        material: Material,
    ) -> NodeId {
        let id = self.add_group(parent, name);
        let mesh = self.add_mesh_data(mesh);
        let material = self.add_material(material);
        self.nodes[id.0].drawables.push(Drawable { mesh, material });
        id
    }

    pub fn add_mesh_data(&mut self, mesh: MeshData) -> MeshId {
        self.meshes.push(mesh);
        MeshId(self.meshes.len() - 1)
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    pub fn add_texture(&mut self, texture: Texture) -> TextureId {
        self.textures.push(texture);
        TextureId(self.textures.len() - 1)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn mesh(&self, id: MeshId) -> &MeshData {
        &self.meshes[id.0]
    }

    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.0]
    }

    pub fn material_mut(&mut self, id: MaterialId) -> &mut Material {
        &mut self.materials[id.0]
    }

    pub fn texture(&self, id: TextureId) -> &Texture {
        &self.textures[id.0]
    }

    /// Depth-first search for a named node in the subtree rooted at `from`
    pub fn find_by_name(&self, from: NodeId, name: &str) -> Option<NodeId> {
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            if node.name.as_deref() == Some(name) {
                return Some(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    /// Materials a part exposes for editing
    ///
    /// A node's own drawables win; a pure transform node exposes the
    /// materials of its descendants instead.
    pub fn part_materials(&self, id: NodeId) -> Vec<MaterialId> {
        let own: Vec<MaterialId> = self.nodes[id.0].drawables.iter().map(|d| d.material).collect();
        if !own.is_empty() {
            return own;
        }

        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[id.0].children.iter().rev().copied().collect();
        while let Some(child) = stack.pop() {
            let node = &self.nodes[child.0];
            found.extend(node.drawables.iter().map(|d| d.material));
            stack.extend(node.children.iter().rev().copied());
        }
        found
    }

    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let mut matrix = self.nodes[id.0].local_matrix();
        let mut current = self.nodes[id.0].parent;
        while let Some(parent) = current {
            matrix = self.nodes[parent.0].local_matrix() * matrix;
            current = self.nodes[parent.0].parent;
        }
        matrix
    }

    pub fn world_position(&self, id: NodeId) -> Vec3 {
        self.world_matrix(id).transform_point3(Vec3::ZERO)
    }

    /// A node is shown only if it and all its ancestors are visible
    pub fn is_effectively_visible(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if !self.nodes[node.0].visible {
                return false;
            }
            current = self.nodes[node.0].parent;
        }
        true
    }

    /// Every visible drawable with its world matrix, parents before children
    pub fn visible_drawables(&self) -> Vec<(NodeId, Mat4, Drawable)> {
        let mut out = Vec::new();
        let mut stack = vec![(self.root(), Mat4::IDENTITY)];
        while let Some((id, parent_matrix)) = stack.pop() {
            let node = &self.nodes[id.0];
            if !node.visible {
                continue;
            }
            let world = parent_matrix * node.local_matrix();
            out.extend(node.drawables.iter().map(|d| (id, world, *d)));
            stack.extend(node.children.iter().rev().map(|&c| (c, world)));
        }
        out
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> MeshData {
        MeshData::plane(1.0, 1.0)
    }

    #[test]
    fn test_new_graph_has_root() {
        let scene = SceneGraph::new();
        assert_eq!(scene.node_count(), 1);
        assert!(scene.node(scene.root()).parent().is_none());
    }

    #[test]
    fn test_add_group_links_parent() {
        let mut scene = SceneGraph::new();
        let a = scene.add_group(scene.root(), Some("A"));
        let b = scene.add_group(a, Some("B"));
        assert_eq!(scene.node(b).parent(), Some(a));
        assert_eq!(scene.node(a).children(), &[b]);
    }

    #[test]
    fn test_find_by_name_nested() {
        let mut scene = SceneGraph::new();
        let a = scene.add_group(scene.root(), Some("A"));
        let b = scene.add_group(a, Some("B"));
        let _ = scene.add_group(scene.root(), Some("C"));
        assert_eq!(scene.find_by_name(scene.root(), "B"), Some(b));
        assert_eq!(scene.find_by_name(a, "C"), None);
        assert_eq!(scene.find_by_name(scene.root(), "missing"), None);
    }

    #[test]
    fn test_world_matrix_composes_parents() {
        let mut scene = SceneGraph::new();
        let a = scene.add_group(scene.root(), None);
        scene.node_mut(a).translation = Vec3::new(1.0, 0.0, 0.0);
        let b = scene.add_group(a, None);
        scene.node_mut(b).translation = Vec3::new(0.0, 2.0, 0.0);
        let p = scene.world_position(b);
        assert!((p - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_world_matrix_applies_parent_rotation() {
        let mut scene = SceneGraph::new();
        let pivot = scene.add_group(scene.root(), None);
        scene.node_mut(pivot).rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let child = scene.add_group(pivot, None);
        scene.node_mut(child).translation = Vec3::X;
        let p = scene.world_position(child);
        assert!((p - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_hidden_parent_hides_subtree() {
        let mut scene = SceneGraph::new();
        let group = scene.add_group(scene.root(), None);
        let mesh = scene.add_mesh(group, None, quad(), Material::default());
        assert!(scene.is_effectively_visible(mesh));
        assert_eq!(scene.visible_drawables().len(), 1);

        scene.node_mut(group).visible = false;
        assert!(!scene.is_effectively_visible(mesh));
        assert!(scene.visible_drawables().is_empty());
    }

    #[test]
    fn test_add_mesh_gives_independent_materials() {
        let mut scene = SceneGraph::new();
        let base = Material::new([0.5, 0.5, 0.5], 0.2, 0.5);
        let a = scene.add_mesh(scene.root(), None, quad(), base.clone());
        let b = scene.add_mesh(scene.root(), None, quad(), base);
        let ma = scene.part_materials(a)[0];
        let mb = scene.part_materials(b)[0];
        assert_ne!(ma, mb);

        scene.material_mut(ma).metalness = 1.0;
        assert_eq!(scene.material(mb).metalness, 0.2);
    }

    #[test]
    fn test_part_materials_falls_back_to_descendants() {
        let mut scene = SceneGraph::new();
        let group = scene.add_group(scene.root(), Some("Body"));
        let inner = scene.add_group(group, None);
        scene.add_mesh(inner, None, quad(), Material::default());
        scene.add_mesh(group, None, quad(), Material::default());
        assert_eq!(scene.part_materials(group).len(), 2);
    }
}
