//! Command-line argument parsing for the replay tool
//!
//! Supports:
//! - Loading a config file other than the user's
//! - Seeding the area with initial text
//! - Overriding wrap and single-line mode
//! - JSON output for scripting

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use taskpanel::config::TextAreaConfig;

/// Replay scripted input against a headless text area
#[derive(Parser, Debug)]
#[command(
    name = "textarea-replay",
    version,
    about = "Replay scripted input against a headless text area"
)]
pub struct CliArgs {
    /// YAML script of input steps
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Config file to use instead of the user's config
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Initial text of the area
    #[arg(short, long, default_value = "")]
    pub text: String,

    /// Wrap lines to the viewport width
    #[arg(long)]
    pub wrap: bool,

    /// Ignore Enter
    #[arg(long)]
    pub single_line: bool,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 300.0)]
    pub width: f32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 24.0)]
    pub height: f32,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Resolve the config: an explicit file must load, the user's config
    /// falls back to defaults. Flags override the file.
    pub fn load_config(&self) -> Result<TextAreaConfig> {
        let mut config = match &self.config {
            Some(path) => TextAreaConfig::load_from(path)?,
            None => TextAreaConfig::load(),
        };
        config.wrap |= self.wrap;
        config.single_line |= self.single_line;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = CliArgs::try_parse_from(["textarea-replay", "script.yaml"]).unwrap();
        assert_eq!(args.script, PathBuf::from("script.yaml"));
        assert_eq!(args.text, "");
        assert!(!args.wrap);
        assert!(!args.json);
        assert_eq!(args.width, 300.0);
    }

    #[test]
    fn test_flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "font_size: 20\n").unwrap();

        let args = CliArgs::try_parse_from([
            "textarea-replay",
            "--config",
            path.to_str().unwrap(),
            "--wrap",
            "--single-line",
            "s.yaml",
        ])
        .unwrap();
        let config = args.load_config().unwrap();
        assert_eq!(config.font_size, 20);
        assert!(config.wrap);
        assert!(config.single_line);
    }

    #[test]
    fn test_missing_script_is_error() {
        assert!(CliArgs::try_parse_from(["textarea-replay"]).is_err());
    }
}
