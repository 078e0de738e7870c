//! Keyboard input for text areas
//!
//! # Architecture
//!
//! ```text
//! window system key → KeyEvent → dispatch() → TextEditMsg → TextArea::apply()
//! ```

mod dispatch;
mod types;

pub use dispatch::dispatch;
pub use types::{parse_key_string, KeyCode, KeyDirection, KeyEvent, Modifiers};
