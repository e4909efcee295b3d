// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Both tunables the engine exposes are external UI concerns rather than
//! gesture math: the double-tap detection window used by the input
//! translator, and the wheel zoom step.

pub mod defaults;

pub use defaults::{
    BUTTON_ZOOM_STEP, DEFAULT_DOUBLE_TAP_WINDOW_MS, DEFAULT_WHEEL_ZOOM_STEP,
    DOUBLE_TAP_SLOP_PX, DOUBLE_TAP_ZOOM_FACTOR, MAX_WHEEL_ZOOM_STEP, MAX_ZOOM_FACTOR,
    MIN_WHEEL_ZOOM_STEP, MIN_ZOOM_FACTOR, PAN_SLACK_PER_ZOOM,
};

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Lightbox";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Window in milliseconds within which two presses count as a double-tap.
    #[serde(default)]
    pub double_tap_window_ms: Option<u64>,
    /// Additive zoom step per wheel tick.
    #[serde(default)]
    pub wheel_zoom_step: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            double_tap_window_ms: Some(DEFAULT_DOUBLE_TAP_WINDOW_MS),
            wheel_zoom_step: Some(DEFAULT_WHEEL_ZOOM_STEP),
        }
    }
}

impl Config {
    /// Returns the double-tap window, falling back to the default.
    #[must_use]
    pub fn double_tap_window_ms(&self) -> u64 {
        self.double_tap_window_ms
            .unwrap_or(DEFAULT_DOUBLE_TAP_WINDOW_MS)
    }

    /// Returns the wheel zoom step clamped to the accepted range.
    #[must_use]
    pub fn wheel_zoom_step(&self) -> f32 {
        self.wheel_zoom_step
            .unwrap_or(DEFAULT_WHEEL_ZOOM_STEP)
            .clamp(MIN_WHEEL_ZOOM_STEP, MAX_WHEEL_ZOOM_STEP)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
