use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use tilekit_engine::coords::Vector2;
use tilekit_engine::grid::TileGridOptions;
use tilekit_engine::paint::Color;

use crate::scene::Palette;

/// Environment variables starting with this prefix override file values,
/// e.g. `TILEKIT_FPS=60` or `TILEKIT_SHAPE__X=20`.
const ENV_PREFIX: &str = "TILEKIT";

/// Demo configuration.
///
/// Every field is optional in the TOML file; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Output image size in pixels.
    pub surface: Vector2<u32>,
    /// Grid size in tiles.
    pub shape: Vector2<i32>,
    pub border_pad: Vector2<i32>,
    pub anchor_offset: Vector2<i32>,
    pub force_square: bool,
    pub force_integer_size: bool,

    pub fps: u32,
    pub frames: usize,
    /// Save every n-th frame; 0 saves only the final frame.
    pub save_every: usize,
    pub output_dir: PathBuf,
    /// Number of previous marker positions drawn behind it.
    pub trail_len: usize,

    pub background: Color,
    pub light: Color,
    pub dark: Color,
    pub marker: Color,
    pub trail: Color,

    /// `env_logger` filter; falls back to `RUST_LOG`.
    pub log_filter: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            surface: Vector2::new(640, 480),
            shape: Vector2::new(16, 12),
            border_pad: Vector2::new(8, 8),
            anchor_offset: Vector2::ZERO,
            force_square: true,
            force_integer_size: false,

            fps: 30,
            frames: 90,
            save_every: 0,
            output_dir: PathBuf::from("frames"),
            trail_len: 6,

            background: Color::from_rgb_hex(0x1e_1e_2e),
            light: Color::from_rgb_hex(0xcd_d6_f4),
            dark: Color::from_rgb_hex(0x58_5b_70),
            marker: Color::from_rgb_hex(0xf3_8b_a8),
            trail: Color::from_rgb_hex(0xfa_b3_87),

            log_filter: None,
        }
    }
}

impl DemoConfig {
    /// Loads defaults, then `path` (TOML) if given, then `TILEKIT_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Self::from_builder(builder).with_context(|| match path {
            Some(path) => format!("failed to load demo config from {}", path.display()),
            None => "failed to load demo config from the environment".to_string(),
        })
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn grid_options(&self) -> TileGridOptions {
        TileGridOptions::default()
            .border_pad(self.border_pad)
            .anchor_offset(self.anchor_offset)
            .force_square(self.force_square)
            .force_integer_size(self.force_integer_size)
    }

    pub fn palette(&self) -> Palette {
        Palette {
            light: self.light,
            dark: self.dark,
            marker: self.marker,
            trail: self.trail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> DemoConfig {
        let builder = Config::builder().add_source(File::from_str(toml, FileFormat::Toml));
        DemoConfig::from_builder(builder).unwrap()
    }

    #[test]
    fn empty_file_keeps_defaults() {
        assert_eq!(parse(""), DemoConfig::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let config = parse(
            r#"
            fps = 60
            frames = 10
            save_every = 5
            output_dir = "out"
            surface = { x = 320, y = 200 }
            shape = { x = 8, y = 5 }
            force_square = false
            marker = { r = 255, g = 0, b = 0 }
            "#,
        );
        assert_eq!(config.fps, 60);
        assert_eq!(config.frames, 10);
        assert_eq!(config.save_every, 5);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.surface, Vector2::new(320, 200));
        assert_eq!(config.shape, Vector2::new(8, 5));
        assert!(!config.force_square);
        assert_eq!(config.marker, Color::RED);
        assert_eq!(config.trail_len, DemoConfig::default().trail_len);
    }

    #[test]
    fn grid_options_mirror_config() {
        let config = DemoConfig {
            border_pad: Vector2::new(3, 4),
            force_integer_size: true,
            ..DemoConfig::default()
        };
        let options = config.grid_options();
        assert_eq!(options.border_pad, Vector2::new(3, 4));
        assert!(options.force_square);
        assert!(options.force_integer_size);
    }

    #[test]
    fn malformed_values_are_rejected() {
        let builder =
            Config::builder().add_source(File::from_str("fps = \"fast\"", FileFormat::Toml));
        assert!(DemoConfig::from_builder(builder).is_err());
    }
}
