// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: optional overrides
//! for the splash timing schedule, loaded from and saved to a
//! `settings.toml` file.
//!
//! Every field is optional; an absent field keeps the reference schedule
//! value (see [`crate::sequence::Schedule`]). The overrides are validated
//! when the schedule is built, not here, so a hand-edited file can be
//! loaded and reported on instead of failing at parse time.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedSplash";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// One-shot delay before the badge row appears, in milliseconds.
    #[serde(default)]
    pub reveal_badges_ms: Option<u64>,
    /// One-shot delay before the text block appears, in milliseconds.
    #[serde(default)]
    pub reveal_text_ms: Option<u64>,
    /// One-shot delay before the logo appears, in milliseconds.
    #[serde(default)]
    pub reveal_logo_ms: Option<u64>,
    /// Period of the percentage ramp, in milliseconds.
    #[serde(default)]
    pub percent_period_ms: Option<u64>,
    /// Percentage added per ramp tick.
    #[serde(default)]
    pub percent_step: Option<f32>,
    /// Period of the bar-fill ramp, in milliseconds.
    #[serde(default)]
    pub bar_period_ms: Option<u64>,
    /// Bar fill added per ramp tick.
    #[serde(default)]
    pub bar_step: Option<f32>,
    /// Period of the indicator dot rotation, in milliseconds.
    #[serde(default)]
    pub dot_period_ms: Option<u64>,
    /// Period of the badge highlight rotation, in milliseconds.
    #[serde(default)]
    pub highlight_period_ms: Option<u64>,
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
