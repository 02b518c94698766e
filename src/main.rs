use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window as WinitWindow, WindowId},
};

use product_configurator::cli::Cli;
use product_configurator::config::AppConfig;
use product_configurator::core::{FrameClock, PointerAdapter};
use product_configurator::loaders::ModelRequest;
use product_configurator::renderer::Renderer;
use product_configurator::traits::FrameScheduler;
use product_configurator::ui::ControlPanel;
use product_configurator::window::Window;
use product_configurator::Session;

struct App {
    config: AppConfig,
    session: Session,
    panel: Option<ControlPanel>,
    window: Option<Window>,
    renderer: Option<Renderer>,
    model_request: Option<ModelRequest>,
    clock: FrameClock,
    pointer: PointerAdapter,
}

impl App {
    fn new(config: AppConfig) -> Result<Self> {
        let session = Session::with_selection(
            config.width,
            config.height,
            &config.selection,
            config.light_on,
        )?;
        let panel = config
            .show_ui
            .then(|| ControlPanel::from_selection(session.selection(), session.light_on()));

        info!("loading model from {}", config.model.display());
        let model_request = Some(ModelRequest::spawn(&config.model));

        Ok(Self {
            config,
            session,
            panel,
            window: None,
            renderer: None,
            model_request,
            clock: FrameClock::new(),
            pointer: PointerAdapter::new(),
        })
    }

    fn poll_model(&mut self) {
        let Some(request) = self.model_request.as_mut() else {
            return;
        };
        if let Some(result) = request.poll() {
            let bound = self.session.on_model_loaded(result);
            info!("model request for {} finished, bound: {}", request.path().display(), bound);
            self.model_request = None;
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Some(renderer) = &mut self.renderer {
            renderer.resize(width, height);
        }
        self.session.resize(width, height);
    }

    fn redraw(&mut self) {
        self.poll_model();
        self.clock.tick();

        let (Some(window), Some(renderer)) = (&self.window, &mut self.renderer) else {
            return;
        };

        if let Some(panel) = &mut self.panel {
            let fps = self.clock.fps();
            let events = renderer.run_ui(|ctx| panel.show(ctx, fps));
            for event in events {
                if let Err(e) = self.session.apply(event) {
                    warn!("ignoring control change: {}", e);
                }
            }
            panel.set_door(self.session.animation().door());
        }

        if let Err(e) = self.session.frame(window, renderer) {
            match e.downcast_ref::<wgpu::SurfaceError>() {
                Some(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (width, height) = window.surface_size();
                    renderer.resize(width, height);
                }
                _ => error!("Render error: {}", e),
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            WinitWindow::default_attributes()
                .with_title("Product Configurator")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.width,
                    self.config.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(window.clone())) {
            Ok(r) => r,
            Err(e) => {
                error!("Failed to initialize renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        let window = Window::new(window);
        let (width, height) = window.surface_size();
        self.renderer = Some(renderer);
        self.resize(width, height);
        window.request_frame();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let Some(renderer) = &mut self.renderer {
            if renderer.handle_event(&event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(_) => {
                if let Some(window) = &self.window {
                    let (width, height) = window.surface_size();
                    self.resize(width, height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            other => {
                let over_ui = self
                    .renderer
                    .as_ref()
                    .is_some_and(|r| r.wants_pointer_input());
                if let Some(action) = self.pointer.process_event(&other) {
                    if !over_ui {
                        let height = self.session.viewport().render_target().1 as f32;
                        action.apply(self.session.camera_mut(), height);
                    }
                }
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config)?;

    info!("Product Configurator - drag to orbit, right-drag to pan, scroll to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
