//! Scripted replay of input against a headless text area.
//!
//! A script is a YAML list of steps:
//!
//! ```yaml
//! - text: "hello world"
//! - key: ctrl+Left
//! - key: shift+End
//! - click: [30.0, 4.0]
//! - key: Backspace
//!   release: true
//! ```

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::editable::{HeadlessHost, PointerEvent, TextArea, TextShaper};
use crate::keymap::{parse_key_string, KeyEvent};

/// One scripted input
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReplayStep {
    /// Literal text input
    pub text: Option<String>,
    /// Key string such as `ctrl+shift+Left`
    pub key: Option<String>,
    /// Deliver the key as a release instead of a press
    pub release: bool,
    /// Click at viewport coordinates
    pub click: Option<[f32; 2]>,
    /// Shift held for the click
    pub shift: bool,
}

impl ReplayStep {
    /// The key event this step produces, if it is a keyboard step
    pub fn key_event(&self) -> Result<Option<KeyEvent>> {
        let event = match (&self.text, &self.key) {
            (Some(_), Some(_)) => bail!("step has both text and key"),
            (Some(text), None) => KeyEvent::text(text.clone()),
            (None, Some(key)) => {
                let (code, mods) = parse_key_string(key)
                    .map_err(|e| anyhow::anyhow!(e))
                    .with_context(|| format!("invalid key {:?}", key))?;
                KeyEvent::key(code, mods)
            }
            (None, None) => return Ok(None),
        };
        Ok(Some(if self.release {
            event.released()
        } else {
            event
        }))
    }
}

/// Final state of a replayed text area
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub text: String,
    pub cursor: usize,
    pub selection: Option<(usize, usize)>,
    pub scroll_x: f32,
    pub scroll_y: f32,
    pub undo_depth: usize,
    pub redo_depth: usize,
}

impl ReplayReport {
    pub fn from_area<S: TextShaper>(area: &TextArea<S>) -> Self {
        let state = area.state();
        Self {
            text: state.text().to_string(),
            cursor: state.cursor(),
            selection: state.selection_range(),
            scroll_x: area.viewport().scroll_x,
            scroll_y: area.viewport().scroll_y,
            undo_depth: state.history().undo_count(),
            redo_depth: state.history().redo_count(),
        }
    }
}

/// Parse a YAML replay script
pub fn parse_script(yaml: &str) -> Result<Vec<ReplayStep>> {
    serde_yaml::from_str(yaml).context("failed to parse replay script")
}

/// Feed every step to `area`, then let pending scroll animations finish
pub fn run<S: TextShaper>(
    area: &mut TextArea<S>,
    host: &mut HeadlessHost,
    steps: &[ReplayStep],
) -> Result<ReplayReport> {
    for (i, step) in steps.iter().enumerate() {
        if let Some([x, y]) = step.click {
            let event = PointerEvent::new(x, y).with_shift(step.shift);
            area.mouse_down(&event, host);
            area.clicked(&event, host);
        }
        if let Some(event) = step.key_event().with_context(|| format!("step {}", i + 1))? {
            area.handle_key(&event, host);
        }
    }
    host.settle(area);
    tracing::debug!(steps = steps.len(), "replay finished");
    Ok(ReplayReport::from_area(area))
}
