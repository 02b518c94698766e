//! Scene graph: nodes, meshes, materials and textures stored in arenas and
//! addressed through copyable handles.

mod graph;
mod material;
mod mesh;
mod texture;

pub use graph::{Drawable, Node, SceneGraph};
pub use material::Material;
pub use mesh::MeshData;
pub use texture::{Texture, CHECKER_REPEAT, CHECKER_SIZE, CHECKER_SQUARES};

macro_rules! handle {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub(crate) usize);

        impl $name {
            pub fn index(self) -> usize {
                self.0
            }
        }
    };
}

handle!(NodeId);
handle!(MeshId);
handle!(MaterialId);
handle!(TextureId);
