//! Startup settings: built-in defaults, then an optional JSON file, then
//! command-line flags.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::configurator::{MaterialPreset, Selection, TextureChoice};

pub const DEFAULT_MODEL_PATH: &str = "assets/model.glb";
pub const DEFAULT_WIDTH: u32 = 1280;
pub const DEFAULT_HEIGHT: u32 = 800;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub model: PathBuf,
    pub width: u32,
    pub height: u32,
    pub selection: Selection,
    pub light_on: bool,
    pub show_ui: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: PathBuf::from(DEFAULT_MODEL_PATH),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            selection: Selection::default(),
            light_on: false,
            show_ui: true,
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid configuration JSON")
    }

    /// Resolves the final settings for a parsed command line
    pub fn load(cli: &Cli) -> Result<Self> {
        let base = match &cli.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                Self::from_json(&text)
                    .with_context(|| format!("in config {}", path.display()))?
            }
            None => Self::default(),
        };
        base.merge_cli(cli)
    }

    /// Applies command-line overrides on top of `self`
    ///
    /// Preset names are validated here so a typo fails at startup instead of
    /// being silently replaced.
    pub fn merge_cli(mut self, cli: &Cli) -> Result<Self> {
        if let Some(model) = &cli.model {
            self.model = model.clone();
        }
        if let Some(width) = cli.width {
            self.width = width;
        }
        if let Some(height) = cli.height {
            self.height = height;
        }
        if let Some(color) = &cli.color {
            self.selection.color = color.clone();
        }
        if let Some(preset) = &cli.preset {
            self.selection.preset = preset.parse::<MaterialPreset>()?;
        }
        if let Some(texture) = &cli.texture {
            self.selection.texture = TextureChoice::from_selection(texture);
        }
        self.light_on |= cli.light;
        self.show_ui &= !cli.no_ui;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_overrides_defaults() {
        let config = AppConfig::from_json(
            r##"{ "width": 640, "selection": { "preset": "metal", "color": "#ff0000" } }"##,
        )
        .unwrap();
        assert_eq!(config.width, 640);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.selection.preset, MaterialPreset::Metal);
        assert_eq!(config.selection.color, "#ff0000");
        assert_eq!(config.selection.texture, TextureChoice::None);
    }

    #[test]
    fn test_cli_overrides_json() {
        let base = AppConfig::from_json(r#"{ "width": 640, "light_on": false }"#).unwrap();
        let cli = Cli {
            width: Some(1024),
            preset: Some("matte".into()),
            light: true,
            no_ui: true,
            ..Cli::default()
        };
        let config = base.merge_cli(&cli).unwrap();
        assert_eq!(config.width, 1024);
        assert_eq!(config.selection.preset, MaterialPreset::Matte);
        assert!(config.light_on);
        assert!(!config.show_ui);
    }

    #[test]
    fn test_unknown_cli_preset_rejected() {
        let cli = Cli {
            preset: Some("chrome".into()),
            ..Cli::default()
        };
        assert!(AppConfig::default().merge_cli(&cli).is_err());
    }

    #[test]
    fn test_explicit_default_model_overrides_json() {
        let base = AppConfig::from_json(r#"{ "model": "other/product.glb" }"#).unwrap();
        assert_eq!(base.model, PathBuf::from("other/product.glb"));

        let cli = Cli {
            model: Some(PathBuf::from(DEFAULT_MODEL_PATH)),
            ..Cli::default()
        };
        let config = base.clone().merge_cli(&cli).unwrap();
        assert_eq!(config.model, PathBuf::from(DEFAULT_MODEL_PATH));

        let config = base.merge_cli(&Cli::default()).unwrap();
        assert_eq!(config.model, PathBuf::from("other/product.glb"));
    }

    #[test]
    fn test_unknown_json_preset_rejected() {
        assert!(AppConfig::from_json(r#"{ "selection": { "preset": "gold" } }"#).is_err());
    }
}
