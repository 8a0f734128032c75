use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Render settings, loadable from a TOML file. Missing fields fall back to
/// the defaults below; unknown keys are rejected.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    /// Progressive frames to accumulate, one sample per pixel each
    pub frames: u32,
    /// Recursion budget for the integrator
    pub max_ray_depth: u32,
    /// Name in the scene registry
    pub scene: String,
    /// Base seed for the per-worker generators
    pub seed: u64,
    pub output: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 960,
            height: 540,
            frames: 128,
            max_ray_depth: 8,
            scene: "cornell".to_string(),
            seed: 0,
            output: "output.png".to_string(),
        }
    }
}

impl Settings {
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Loads settings from `path`, or the defaults when no file exists there.
pub fn load(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let settings = toml::from_str(&raw)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(settings)
}
