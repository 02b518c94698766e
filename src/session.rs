//! Single owner of the configurator's live state.
//!
//! UI events, model-load completion, resizes and frame ticks all arrive on
//! the same thread and are applied to completion one at a time, so the frame
//! step always observes a consistent product.

use glam::Vec3;
use log::{info, warn};

use crate::animation::{AnimationState, DoorState};
use crate::camera::OrbitCamera;
use crate::configurator::{self, MaterialPreset, Selection, TextureChoice};
use crate::error::ConfigError;
use crate::lighting::Lighting;
use crate::loaders::ModelData;
use crate::math::{hex_rgb, parse_color, Rgb};
use crate::product::{self, PlaceholderDimensions, Product};
use crate::scene::{Material, MeshData, NodeId, SceneGraph, Texture, TextureId};
use crate::traits::{FrameScheduler, SceneRenderer};
use crate::ui::UiEvent;
use crate::viewport::Viewport;

pub const GROUND_RADIUS: f32 = 2.5;
pub const GROUND_HEIGHT: f32 = 0.05;
const GROUND_SEGMENTS: u32 = 64;

pub struct Session {
    scene: SceneGraph,
    product: Product,
    placeholder: Product,
    ground: NodeId,
    checker: TextureId,
    selection: Selection,
    color: Rgb,
    light_on: bool,
    lighting: Lighting,
    animation: AnimationState,
    camera: OrbitCamera,
    viewport: Viewport,
}

impl Session {
    /// Builds the scene with the placeholder product bound and default choices applied
    pub fn new(width: u32, height: u32) -> Self {
        let mut scene = SceneGraph::new();

        let ground = scene.add_mesh(
            scene.root(),
            Some("Ground"),
            MeshData::cylinder(GROUND_RADIUS, GROUND_HEIGHT, GROUND_SEGMENTS),
            Material::new(hex_rgb(0x1b2533), 0.0, 0.9),
        );
        scene.node_mut(ground).translation = Vec3::new(0.0, -GROUND_HEIGHT * 0.5, 0.0);

        let placeholder = product::build_placeholder(&mut scene, &PlaceholderDimensions::default());
        let checker = scene.add_texture(Texture::checker());

        let selection = Selection::default();
        let color = parse_color(&selection.color).unwrap_or([0.5, 0.5, 0.5]);

        let mut session = Self {
            scene,
            product: placeholder,
            placeholder,
            ground,
            checker,
            selection,
            color,
            light_on: false,
            lighting: Lighting::default(),
            animation: AnimationState::new(),
            camera: OrbitCamera::default(),
            viewport: Viewport::new(width, height),
        };
        session.reapply_selection();
        session.resize(width, height);
        session
    }

    /// Like `new`, then applies an initial selection the way UI defaults are applied
    pub fn with_selection(
        width: u32,
        height: u32,
        selection: &Selection,
        light_on: bool,
    ) -> Result<Self, ConfigError> {
        let mut session = Self::new(width, height);
        session.set_base_color(&selection.color)?;
        session.set_material_preset(selection.preset.name())?;
        session.set_texture(selection.texture.name());
        session.set_light_on(light_on);
        Ok(session)
    }

    /// Dispatches one UI event, a rejected event leaves all state untouched
    pub fn apply(&mut self, event: UiEvent) -> Result<(), ConfigError> {
        match event {
            UiEvent::BaseColor(value) => self.set_base_color(&value),
            UiEvent::MaterialPreset(name) => self.set_material_preset(&name),
            UiEvent::Texture(selection) => {
                self.set_texture(&selection);
                Ok(())
            }
            UiEvent::ToggleDoor => {
                self.toggle_door();
                Ok(())
            }
            UiEvent::Light(on) => {
                self.set_light_on(on);
                Ok(())
            }
        }
    }

    pub fn set_base_color(&mut self, value: &str) -> Result<(), ConfigError> {
        self.color = configurator::set_base_color(&mut self.scene, &self.product, value)?;
        self.selection.color = value.to_string();
        Ok(())
    }

    pub fn set_material_preset(&mut self, name: &str) -> Result<(), ConfigError> {
        self.selection.preset = configurator::set_material_preset(&mut self.scene, &self.product, name)?;
        Ok(())
    }

    pub fn set_texture(&mut self, selection: &str) {
        self.selection.texture =
            configurator::set_texture(&mut self.scene, &self.product, selection, self.checker);
    }

    pub fn set_light_on(&mut self, on: bool) {
        configurator::set_light_on(&mut self.scene, &self.product, &mut self.lighting.point, on);
        self.light_on = on;
    }

    pub fn toggle_door(&mut self) -> DoorState {
        self.animation.toggle_door()
    }

    /// Handles completion of the background model load
    ///
    /// Failures and models without the required parts keep the placeholder
    /// bound. Returns true if the product was rebound.
    pub fn on_model_loaded(&mut self, result: anyhow::Result<ModelData>) -> bool {
        let model = match result {
            Ok(model) => model,
            Err(e) => {
                info!("keeping placeholder product: {:#}", e);
                return false;
            }
        };

        if !self.product.is_placeholder() {
            warn!("a model is already bound, ignoring the new one");
            return false;
        }

        if !model.has_required_parts() {
            info!("model lacks Body/DoorPivot/Door, keeping placeholder product");
            return false;
        }

        let scene_root = self.scene.root();
        let root = model.instantiate(&mut self.scene, scene_root);
        match product::rebind(&mut self.scene, &self.product, root) {
            Some(bound) => {
                info!("bound loaded model parts ({:?})", bound.source);
                self.product = bound;
                self.reapply_selection();
                true
            }
            None => {
                self.scene.node_mut(root).visible = false;
                false
            }
        }
    }

    /// Re-derives render target size and camera aspect from the surface size
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport.resize(width, height);
        self.camera.set_aspect(self.viewport.aspect());
    }

    /// Camera damping, door smoothing and idle bob for one frame
    pub fn update(&mut self) {
        self.camera.update();
        self.animation.step(&mut self.scene, &self.product);
    }

    /// Runs one display frame: reschedule, advance, draw
    pub fn frame(
        &mut self,
        scheduler: &dyn FrameScheduler,
        renderer: &mut dyn SceneRenderer,
    ) -> Result<(), Box<dyn std::error::Error>> {
        scheduler.request_frame();
        self.update();
        renderer.render(&self.scene, &self.camera, &self.lighting)
    }

    fn reapply_selection(&mut self) {
        configurator::apply_color(&mut self.scene, &self.product, self.color);
        configurator::apply_preset(&mut self.scene, &self.product, self.selection.preset);
        configurator::apply_texture(&mut self.scene, &self.product, self.selection.texture, self.checker);
        self.set_light_on(self.light_on);
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn placeholder(&self) -> &Product {
        &self.placeholder
    }

    pub fn ground(&self) -> NodeId {
        self.ground
    }

    pub fn checker_texture(&self) -> TextureId {
        self.checker
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn preset(&self) -> MaterialPreset {
        self.selection.preset
    }

    pub fn texture(&self) -> TextureChoice {
        self.selection.texture
    }

    pub fn light_on(&self) -> bool {
        self.light_on
    }

    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}
