//! Text-area editing engine.
//!
//! # Architecture
//!
//! The core components, leaves first:
//!
//! - [`Seeker`]: token-aware word and line motion over the text
//! - [`UndoLog`] / [`UndoAction`]: undo and redo stacks with insert coalescing
//! - [`TextState`]: text, cursor, selection anchor and history
//! - [`Viewport`]: scroll offsets that keep the cursor visible
//! - [`TextArea`]: the widget tying them to a [`TextShaper`] and a [`Host`]
//!
//! # Example
//!
//! ```ignore
//! use taskpanel::editable::{HeadlessHost, MonospaceShaper, TextArea, TextEditMsg};
//!
//! let mut host = HeadlessHost::new();
//! let mut area = TextArea::new(MonospaceShaper::new(8.0, 16.0), Default::default(), 200.0, 20.0);
//! area.apply(TextEditMsg::InsertText("hello".into()), &mut host);
//! area.apply(TextEditMsg::Undo, &mut host);
//! assert_eq!(area.text(), "");
//! ```

mod history;
mod host;
mod messages;
mod paint;
mod seeker;
mod shaping;
mod state;
mod textarea;
mod viewport;

// Re-export main types
pub use history::{UndoAction, UndoLog};
pub use host::{
    Easing, HeadlessHost, Host, PendingTimer, ScrollAnimation, ScrollAxis, TimerHandle, TimerKind,
};
pub use messages::{MoveTarget, TextEditMsg};
pub use paint::{paint, PaintCmd};
pub use seeker::{line_end, line_start, seek_token, Motion, Seeker};
pub use shaping::{CursorRect, Extents, HitTest, MonospaceShaper, TextShaper};
pub use state::TextState;
pub use textarea::{InteractionState, PointerEvent, TextArea};
pub use viewport::{put_cursor_on_screen, update_bounds, update_preferred_x, vertical_target, Viewport};
