use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::core::Canvas,
    foundation::error::{StrataError, StrataResult},
    style::palette::{BUILTIN_PALETTES, Palette},
};

pub const DEFAULT_WIDTH: u32 = 1280;
pub const DEFAULT_HEIGHT: u32 = 720;
pub const DEFAULT_CELL_SCALE: u32 = 20;

/// Sketch settings, loadable from JSON.
///
/// Every field is optional in the file; missing ones take the defaults below.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SketchConfig {
    pub width: u32,
    pub height: u32,
    /// Flow-field cell edge in pixels.
    pub cell_scale: u32,
    /// Fixed seed for reproducible runs; the clock is used when absent.
    pub seed: Option<u64>,
    /// Replaces the built-in palettes when set.
    pub palettes: Option<Vec<Palette>>,
    pub debug: bool,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_scale: DEFAULT_CELL_SCALE,
            seed: None,
            palettes: None,
            debug: false,
        }
    }
}

impl SketchConfig {
    pub fn from_path(path: &Path) -> StrataResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read sketch config from '{}'", path.display()))
            .map_err(StrataError::from)?;
        let config: Self = serde_json::from_slice(&bytes)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> StrataResult<()> {
        self.canvas()?;
        if self.cell_scale == 0 {
            return Err(StrataError::validation("cell_scale must be > 0"));
        }
        if let Some(palettes) = &self.palettes
            && palettes.is_empty()
        {
            return Err(StrataError::validation(
                "palettes must contain at least one palette",
            ));
        }
        Ok(())
    }

    pub fn canvas(&self) -> StrataResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    pub fn resolved_palettes(&self) -> Vec<Palette> {
        match &self.palettes {
            Some(p) => p.clone(),
            None => BUILTIN_PALETTES.to_vec(),
        }
    }

    /// Configured seed, or nanoseconds since the Unix epoch.
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
