//! Text area configuration persistence
//!
//! Stores user preferences in `~/.config/taskpanel/config.yaml`

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::theme::{Color, TextAreaColors};

/// Text area configuration as written in YAML.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextAreaConfig {
    pub font: String,
    pub font_size: u32,
    /// Ignore Enter instead of inserting a newline
    pub single_line: bool,
    /// Wrap lines to the viewport width
    pub wrap: bool,
    /// Shown while the area is inactive and empty
    pub prompt: String,
    pub cursor_width: u32,
    pub color: String,
    pub color_cursor: String,
    pub color_prompt: String,
    pub color_selection: String,
    pub blink_on_ms: u64,
    pub blink_off_ms: u64,
    pub scroll_anim_ms: u64,
    /// Two clicks closer than this select everything
    pub double_click_ms: u64,
    /// Lines moved by Page Up / Page Down
    pub page_lines: u32,
    /// Maximum undo depth (0 = unlimited)
    pub undo_limit: usize,
}

impl Default for TextAreaConfig {
    fn default() -> Self {
        let colors = TextAreaColors::default();
        Self {
            font: "Arial".to_string(),
            font_size: 15,
            single_line: false,
            wrap: false,
            prompt: String::new(),
            cursor_width: 1,
            color: colors.text.to_hex(),
            color_cursor: colors.cursor.to_hex(),
            color_prompt: colors.prompt.to_hex(),
            color_selection: colors.selection.to_hex(),
            blink_on_ms: 530,
            blink_off_ms: 430,
            scroll_anim_ms: 30,
            double_click_ms: 220,
            page_lines: 10,
            undo_limit: 0,
        }
    }
}

impl TextAreaConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

/// Validated runtime settings of a text area
#[derive(Debug, Clone, PartialEq)]
pub struct TextAreaSettings {
    pub font: String,
    pub font_size: f32,
    pub single_line: bool,
    pub wrap: bool,
    pub prompt: String,
    pub cursor_width: f32,
    pub colors: TextAreaColors,
    pub blink_on: Duration,
    pub blink_off: Duration,
    pub scroll_anim: Duration,
    pub double_click: Duration,
    pub page_lines: i32,
    pub undo_limit: usize,
    /// Distance kept between the cursor and the viewport edge when scrolling
    pub scroll_margin: f32,
}

impl Default for TextAreaSettings {
    fn default() -> Self {
        Self::from_config(&TextAreaConfig::default())
    }
}

impl TextAreaSettings {
    /// Validate a config. Invalid colors fall back to their defaults and
    /// sizes are raised to at least one.
    pub fn from_config(config: &TextAreaConfig) -> Self {
        let defaults = TextAreaColors::default();
        let parse = |name: &str, value: &str, fallback: Color| match Color::from_hex(value) {
            Ok(color) => color,
            Err(e) => {
                tracing::warn!("Invalid {} {:?}: {}, using default", name, value, e);
                fallback
            }
        };

        let font_size = config.font_size.max(1) as f32;
        Self {
            font: config.font.clone(),
            font_size,
            single_line: config.single_line,
            wrap: config.wrap,
            prompt: config.prompt.clone(),
            cursor_width: config.cursor_width.max(1) as f32,
            colors: TextAreaColors {
                text: parse("color", &config.color, defaults.text),
                cursor: parse("color_cursor", &config.color_cursor, defaults.cursor),
                prompt: parse("color_prompt", &config.color_prompt, defaults.prompt),
                selection: parse("color_selection", &config.color_selection, defaults.selection),
            },
            blink_on: Duration::from_millis(config.blink_on_ms),
            blink_off: Duration::from_millis(config.blink_off_ms),
            scroll_anim: Duration::from_millis(config.scroll_anim_ms),
            double_click: Duration::from_millis(config.double_click_ms),
            page_lines: config.page_lines.clamp(1, i32::MAX as u32) as i32,
            undo_limit: config.undo_limit,
            scroll_margin: font_size * 3.0,
        }
    }
}
