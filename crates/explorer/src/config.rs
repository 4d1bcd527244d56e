//! Explorer configuration.

use anyhow::Context;
use quadtree::{Index, IndexError, Region};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "cityquad.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    /// Load configuration from `cityquad.toml` or use defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from `path`, writing the defaults there if it is missing.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Self::parse(&contents).with_context(|| format!("parsing {}", path.display()))
        } else {
            info!("No {} found, creating default config", path.display());
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)
                .with_context(|| format!("writing {}", path.display()))?;
            Ok(default_config)
        }
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Build an empty index for the configured world.
    pub fn build_index(&self) -> Result<Index, IndexError> {
        let w = &self.world;
        let region = Region::new(w.x_min, w.y_min, w.x_max, w.y_max)?;
        match self.index.max_depth {
            Some(depth) => Index::with_max_depth(region, self.index.capacity, depth),
            None => Index::new(region, self.index.capacity),
        }
    }
}

/// World region covered by the root node.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorldConfig {
    #[serde(default)]
    pub x_min: f64,
    #[serde(default)]
    pub y_min: f64,
    #[serde(default = "default_world_max")]
    pub x_max: f64,
    #[serde(default = "default_world_max")]
    pub y_max: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            x_min: 0.0,
            y_min: 0.0,
            x_max: default_world_max(),
            y_max: default_world_max(),
        }
    }
}

fn default_world_max() -> f64 {
    100.0
}

/// Tree shape settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexConfig {
    /// Entries a leaf holds before it splits.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Depth past which leaves grow instead of splitting. Unset means leaves
    /// split until `f64` can no longer halve them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            max_depth: None,
        }
    }
}

fn default_capacity() -> usize {
    1
}

/// SVG output settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderConfig {
    #[serde(default = "default_render_enabled")]
    pub enabled: bool,
    /// Where the picture is written.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Length of the longer canvas side, in pixels.
    #[serde(default = "default_canvas_size")]
    pub size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enabled: default_render_enabled(),
            output: default_output(),
            size: default_canvas_size(),
        }
    }
}

fn default_render_enabled() -> bool {
    true
}
fn default_output() -> PathBuf {
    PathBuf::from("quadtree.svg")
}
fn default_canvas_size() -> u32 {
    800
}
