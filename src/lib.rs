pub mod animation;
pub mod camera;
pub mod cli;
pub mod config;
pub mod configurator;
pub mod core;
pub mod error;
pub mod lighting;
pub mod loaders;
pub mod math;
pub mod product;
pub mod renderer;
pub mod scene;
pub mod session;
pub mod traits;
pub mod types;
pub mod ui;
pub mod viewport;
pub mod window;

pub use configurator::{MaterialPreset, Selection, TextureChoice};
pub use error::ConfigError;
pub use session::Session;
pub use ui::UiEvent;
