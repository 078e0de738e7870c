//! Widget capability traits.
//!
//! A panel hands events to widgets through these traits instead of per-widget
//! callback slots. A widget implements only the capabilities it has.

use crate::editable::{paint, Host, PaintCmd, PointerEvent, TextArea, TextShaper};
use crate::keymap::KeyEvent;

/// Produces a paint list
pub trait Paintable {
    fn paint(&self) -> Vec<PaintCmd>;
}

/// Receives button presses and clicks
pub trait Clickable {
    fn mouse_down(&mut self, event: &PointerEvent, host: &mut dyn Host);
    fn clicked(&mut self, event: &PointerEvent, host: &mut dyn Host);
}

/// Receives drag gestures
pub trait Draggable {
    fn drag_start(&mut self, event: &PointerEvent, host: &mut dyn Host);
    fn drag(&mut self, event: &PointerEvent, host: &mut dyn Host);
    fn drag_end(&mut self, event: &PointerEvent, host: &mut dyn Host);
}

/// Receives keyboard focus and key events
pub trait KeyHandler {
    /// Returns true if the event changed the widget
    fn key_event(&mut self, event: &KeyEvent, host: &mut dyn Host) -> bool;
    fn active_changed(&mut self, active: bool, host: &mut dyn Host);
}

impl<S: TextShaper> Paintable for TextArea<S> {
    fn paint(&self) -> Vec<PaintCmd> {
        paint(self)
    }
}

impl<S: TextShaper> Clickable for TextArea<S> {
    fn mouse_down(&mut self, event: &PointerEvent, host: &mut dyn Host) {
        TextArea::mouse_down(self, event, host);
    }

    fn clicked(&mut self, event: &PointerEvent, host: &mut dyn Host) {
        TextArea::clicked(self, event, host);
    }
}

impl<S: TextShaper> Draggable for TextArea<S> {
    fn drag_start(&mut self, event: &PointerEvent, host: &mut dyn Host) {
        TextArea::drag_start(self, event, host);
    }

    fn drag(&mut self, event: &PointerEvent, host: &mut dyn Host) {
        TextArea::drag(self, event, host);
    }

    fn drag_end(&mut self, event: &PointerEvent, host: &mut dyn Host) {
        TextArea::drag_end(self, event, host);
    }
}

impl<S: TextShaper> KeyHandler for TextArea<S> {
    fn key_event(&mut self, event: &KeyEvent, host: &mut dyn Host) -> bool {
        self.handle_key(event, host)
    }

    fn active_changed(&mut self, active: bool, host: &mut dyn Host) {
        self.set_active(active, host);
    }
}
