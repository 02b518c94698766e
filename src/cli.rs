// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "product-configurator")]
#[command(about = "Interactive 3D product configurator", long_about = None)]
pub struct Cli {
    /// glTF/GLB model with Body, DoorPivot, Door and optional Indicator nodes
    /// [default: assets/model.glb]
    #[arg(long, env = "CONFIGURATOR_MODEL")]
    pub model: Option<PathBuf>,

    /// JSON file with startup settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    /// Initial base color, e.g. "#ff8800"
    #[arg(long)]
    pub color: Option<String>,

    /// Initial material preset: plastic, metal or matte
    #[arg(long)]
    pub preset: Option<String>,

    /// Initial texture: checker or none
    #[arg(long)]
    pub texture: Option<String>,

    /// Start with the indicator light switched on
    #[arg(long)]
    pub light: bool,

    /// Hide the control panel
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
