use crate::camera::OrbitCamera;
use crate::lighting::Lighting;
use crate::scene::SceneGraph;

/// Draws the scene from a camera's point of view
pub trait SceneRenderer {
    fn render(
        &mut self,
        scene: &SceneGraph,
        camera: &OrbitCamera,
        lighting: &Lighting,
    ) -> Result<(), Box<dyn std::error::Error>>;
}
