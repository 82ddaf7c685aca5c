// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Editor configuration, loaded from a JSON file with defaults for every field.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::constant::{
    CONFIG_DIR, CONFIG_FILE, EDGE_THRESHOLD, HANDLE_SIZE, MIN_REGION_SIZE, PREVIEW_MAX_HEIGHT,
    PREVIEW_MAX_WIDTH,
};

/// Configuration for the crop editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum width of the preview surface in display pixels.
    pub max_preview_width: f32,
    /// Maximum height of the preview surface in display pixels.
    pub max_preview_height: f32,
    /// Half-extent of the square corner hit-box.
    pub handle_size: f32,
    /// Thickness of the edge hit-band.
    pub edge_threshold: f32,
    /// Smallest width/height a region can be resized to.
    pub min_region_size: f32,
    /// Whether the overlay includes rule-of-thirds grid lines.
    pub show_grid: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_preview_width: PREVIEW_MAX_WIDTH,
            max_preview_height: PREVIEW_MAX_HEIGHT,
            handle_size: HANDLE_SIZE,
            edge_threshold: EDGE_THRESHOLD,
            min_region_size: MIN_REGION_SIZE,
            show_grid: false,
        }
    }
}

impl EditorConfig {
    /// Default location: `<config dir>/clipcrop/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the config from `path`, or from [`Self::default_path`] when `None`.
    ///
    /// A missing file is not an error and yields the defaults; a file that
    /// exists but cannot be read or parsed is.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => {
                    log::debug!("No config directory available, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        if !path.exists() {
            log::debug!("Config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config.sanitized())
    }

    /// Replace non-positive or non-finite values with their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let fix = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                log::warn!("Ignoring invalid config value {value}, using {fallback}");
                fallback
            }
        };
        self.max_preview_width = fix(self.max_preview_width, defaults.max_preview_width);
        self.max_preview_height = fix(self.max_preview_height, defaults.max_preview_height);
        self.handle_size = fix(self.handle_size, defaults.handle_size);
        self.edge_threshold = fix(self.edge_threshold, defaults.edge_threshold);
        self.min_region_size = fix(self.min_region_size, defaults.min_region_size);
        self
    }
}
