//! Taskpanel - inline text-area editing engine
//!
//! This crate provides the editing core for single- and multi-line text
//! areas embedded in a taskbar panel: text with cursor and selection,
//! token-aware word motion, coalescing undo/redo, a scrolling viewport,
//! caret blink and drag autoscroll, all driven through a [`Host`] seam.

pub mod config;
pub mod config_paths;
pub mod editable;
pub mod keymap;
pub mod replay;
pub mod theme;
pub mod tracing;
pub mod util;
pub mod widget;

// Re-export commonly used types
pub use config::{TextAreaConfig, TextAreaSettings};
pub use editable::{HeadlessHost, Host, MonospaceShaper, TextArea, TextEditMsg, TextShaper, TextState};
pub use keymap::KeyEvent;
pub use theme::{Color, TextAreaColors};
pub use widget::{Clickable, Draggable, KeyHandler, Paintable};
