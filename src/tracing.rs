//! Debug tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=textarea=trace` - per-key state diffs
//! - `RUST_LOG=taskpanel::keymap=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/taskpanel/logs/taskpanel.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::TextState;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`).
/// File logging writes to `~/.config/taskpanel/logs/taskpanel.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "taskpanel.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of text area state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSnapshot {
    pub len: usize,
    pub cursor: usize,
    pub anchor: Option<usize>,
    pub undo_depth: usize,
    pub redo_depth: usize,
}

impl TextSnapshot {
    pub fn from_state(state: &TextState) -> Self {
        Self {
            len: state.len(),
            cursor: state.cursor(),
            anchor: state.selection_anchor(),
            undo_depth: state.history().undo_count(),
            redo_depth: state.history().redo_count(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &TextSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.len != other.len {
            changes.push(format!("len: {} → {}", self.len, other.len));
        }
        if self.cursor != other.cursor {
            changes.push(format!("cursor: {} → {}", self.cursor, other.cursor));
        }
        if self.anchor != other.anchor {
            match other.anchor {
                Some(anchor) => changes.push(format!("selection anchored at {}", anchor)),
                None => changes.push("selection cleared".to_string()),
            }
        }
        if self.undo_depth != other.undo_depth || self.redo_depth != other.redo_depth {
            changes.push(format!(
                "history: {}/{} → {}/{}",
                self.undo_depth, self.redo_depth, other.undo_depth, other.redo_depth
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
