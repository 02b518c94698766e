mod background;
mod gltf;

pub use background::ModelRequest;
pub use self::gltf::{load_model, load_model_from_slice, ModelData, ModelNode, ModelPrimitive};
