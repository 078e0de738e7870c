//! TextArea - an editable text widget with cursor, selection, undo and a
//! scrollable viewport.
//!
//! The widget owns its [`TextState`], its [`Viewport`] and the per-widget
//! [`InteractionState`]. Layout, painting, animation and timers are delegated
//! to a [`Host`]; glyph measurement to a [`TextShaper`].

use std::time::Instant;

use crate::config::TextAreaSettings;
use crate::keymap::{self, KeyEvent};
use crate::tracing::TextSnapshot;

use super::host::{Host, ScrollAxis, TimerHandle, TimerKind};
use super::messages::{MoveTarget, TextEditMsg};
use super::seeker::Motion;
use super::shaping::TextShaper;
use super::state::TextState;
use super::viewport::{self, Viewport};

/// A pointer event in viewport-relative coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    pub shift: bool,
    pub time: Instant,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            shift: false,
            time: Instant::now(),
        }
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    pub fn at(mut self, time: Instant) -> Self {
        self.time = time;
        self
    }
}

/// Input state owned by one text area
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    /// A mouse drag started inside this area is in progress
    pub dragging: bool,
    /// Last known pointer position (viewport-relative)
    pub pointer: (f32, f32),
    /// Time of the last single click, for double-click detection
    pub last_mouse_press: Option<Instant>,
    pub last_key_press: Option<Instant>,
    /// Caret is in the visible phase of its blink
    pub cursor_on: bool,
    pub blink_timer: Option<TimerHandle>,
    pub drag_timer: Option<TimerHandle>,
}

/// Editable text widget.
#[derive(Debug)]
pub struct TextArea<S: TextShaper> {
    state: TextState,
    viewport: Viewport,
    settings: TextAreaSettings,
    shaper: S,
    interaction: InteractionState,
    active: bool,
}

impl<S: TextShaper> TextArea<S> {
    /// Create an empty, inactive text area with a `width` x `height` viewport
    pub fn new(shaper: S, settings: TextAreaSettings, width: f32, height: f32) -> Self {
        let mut area = Self {
            state: TextState::with_undo_limit(settings.undo_limit),
            viewport: Viewport::new(width, height, settings.scroll_margin),
            settings,
            shaper,
            interaction: InteractionState::default(),
            active: false,
        };
        area.measure();
        area
    }

    /// Replace the text without recording history; the cursor moves to the end
    pub fn with_text(mut self, text: &str) -> Self {
        self.state.set_text(text);
        self.measure();
        let wrap_width = self.wrap_width();
        viewport::update_preferred_x(&mut self.state, &self.shaper, wrap_width);
        self
    }

    pub fn text(&self) -> &str {
        self.state.text()
    }

    pub fn state(&self) -> &TextState {
        &self.state
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn settings(&self) -> &TextAreaSettings {
        &self.settings
    }

    pub fn shaper(&self) -> &S {
        &self.shaper
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Caret should be drawn right now
    pub fn cursor_visible(&self) -> bool {
        self.active && self.interaction.cursor_on
    }

    /// Wrap width handed to the shaper
    pub fn wrap_width(&self) -> Option<f32> {
        self.viewport.wrap_width(self.settings.wrap)
    }

    /// Set the visual scroll offset of one axis (driven by host animations)
    pub fn set_visual_scroll(&mut self, axis: ScrollAxis, value: f32) {
        self.viewport.set_visual(axis, value);
    }

    /// Measure content without notifying a host
    fn measure(&mut self) {
        let extents = self.shaper.extents(self.state.text(), self.wrap_width());
        self.viewport.set_content_size(extents, self.settings.wrap);
    }

    /// Caret offset under a viewport-relative point
    fn offset_at(&self, x: f32, y: f32) -> usize {
        let (x, y) = self.viewport.to_content(x, y);
        self.shaper
            .hit_test(self.state.text(), x, y, self.wrap_width())
            .offset(self.state.text())
    }
}

// =============================================================================
// Editing Operations
// =============================================================================

impl<S: TextShaper> TextArea<S> {
    /// Apply an editing intent. Returns true if the text, cursor or
    /// selection changed.
    pub fn apply(&mut self, msg: TextEditMsg, host: &mut dyn Host) -> bool {
        if self.settings.single_line && msg.requires_multiline() {
            return false;
        }

        match msg {
            TextEditMsg::Move(target) => self.move_to(target, false, host),
            TextEditMsg::MoveWithSelection(target) => self.move_to(target, true, host),

            TextEditMsg::InsertText(text) => {
                let changed = self.state.insert_or_replace(&text);
                self.after_edit(host);
                changed
            }
            TextEditMsg::InsertNewline => {
                let changed = self.state.insert_or_replace("\n");
                self.after_edit(host);
                changed
            }
            TextEditMsg::InsertTab => {
                let changed = self.state.insert_or_replace("\t");
                self.after_edit(host);
                changed
            }

            TextEditMsg::DeleteBackward => self.delete_toward(-1, host),
            TextEditMsg::DeleteForward => self.delete_toward(1, host),
            TextEditMsg::DeleteWordBackward => {
                let target = self.state.word_target(Motion::Left);
                let distance = self.state.cursor().abs_diff(target) as isize;
                self.delete_toward(-distance, host)
            }
            TextEditMsg::DeleteWordForward => {
                let target = self.state.word_target(Motion::Right);
                let distance = self.state.cursor().abs_diff(target) as isize;
                self.delete_toward(distance, host)
            }

            TextEditMsg::SelectAll => {
                self.state.select_all();
                self.put_cursor_on_screen(host);
                true
            }
            TextEditMsg::CollapseSelection => {
                let had_selection = self.state.has_selection();
                self.state.clear_selection();
                had_selection
            }

            TextEditMsg::Undo => {
                let changed = self.state.undo();
                self.after_edit(host);
                changed
            }
            TextEditMsg::Redo => {
                let changed = self.state.redo();
                self.after_edit(host);
                changed
            }
        }
    }

    /// Delete `amount` bytes, or the selection if one is active
    fn delete_toward(&mut self, amount: isize, host: &mut dyn Host) -> bool {
        let changed = if self.state.has_selection() {
            self.state.replace("")
        } else if amount == 0 {
            false
        } else {
            self.state.delete(amount)
        };
        if changed {
            self.after_edit(host);
        }
        changed
    }

    fn move_to(&mut self, target: MoveTarget, extend_selection: bool, host: &mut dyn Host) -> bool {
        let before = (self.state.cursor(), self.state.selection_anchor());
        let wrap_width = self.wrap_width();

        let offset = match target {
            MoveTarget::Left => self.state.char_left_target(),
            MoveTarget::Right => self.state.char_right_target(),
            MoveTarget::WordLeft => self.state.word_target(Motion::Left),
            MoveTarget::WordRight => self.state.word_target(Motion::Right),
            MoveTarget::LineStart => self.state.line_start_target(),
            MoveTarget::LineEnd => self.state.line_end_target(),
            MoveTarget::Up => viewport::vertical_target(&self.state, &self.shaper, wrap_width, -1),
            MoveTarget::Down => viewport::vertical_target(&self.state, &self.shaper, wrap_width, 1),
            MoveTarget::PageUp => viewport::vertical_target(
                &self.state,
                &self.shaper,
                wrap_width,
                -self.settings.page_lines,
            ),
            MoveTarget::PageDown => viewport::vertical_target(
                &self.state,
                &self.shaper,
                wrap_width,
                self.settings.page_lines,
            ),
        };

        self.state.move_cursor(offset, extend_selection);
        if !target.is_vertical() {
            viewport::update_preferred_x(&mut self.state, &self.shaper, wrap_width);
        }
        self.put_cursor_on_screen(host);

        before != (self.state.cursor(), self.state.selection_anchor())
    }

    /// Refresh the preferred column, content bounds and scroll after a text change
    fn after_edit(&mut self, host: &mut dyn Host) {
        let wrap_width = self.wrap_width();
        viewport::update_preferred_x(&mut self.state, &self.shaper, wrap_width);
        viewport::update_bounds(
            &mut self.viewport,
            &self.state,
            &self.shaper,
            self.settings.wrap,
            host,
            self.settings.scroll_anim,
        );
        self.put_cursor_on_screen(host);
    }

    fn put_cursor_on_screen(&mut self, host: &mut dyn Host) {
        viewport::put_cursor_on_screen(
            &mut self.viewport,
            &self.state,
            &self.shaper,
            self.settings.wrap,
            host,
            self.settings.scroll_anim,
        );
    }
}

// =============================================================================
// Keyboard, Focus and Timers
// =============================================================================

impl<S: TextShaper> TextArea<S> {
    /// Handle a key event. Releases and events while inactive are ignored.
    /// Returns true if the text, cursor or selection changed.
    pub fn handle_key(&mut self, event: &KeyEvent, host: &mut dyn Host) -> bool {
        if !event.is_press() || !self.active {
            return false;
        }

        self.interaction.last_key_press = Some(Instant::now());
        self.blink_on(host);

        let Some(msg) = keymap::dispatch(event) else {
            return false;
        };

        let before = TextSnapshot::from_state(&self.state);
        let changed = self.apply(msg, host);
        let after = TextSnapshot::from_state(&self.state);
        if let Some(diff) = before.diff(&after) {
            tracing::trace!(target: "textarea", "{}: {}", event, diff);
        }
        changed
    }

    /// Show the caret and restart the blink cycle
    pub fn blink_on(&mut self, host: &mut dyn Host) {
        if let Some(handle) = self.interaction.blink_timer.take() {
            host.cancel_timer(handle);
        }
        self.interaction.blink_timer = Some(host.set_timer(self.settings.blink_on, TimerKind::Blink));
        self.interaction.cursor_on = true;
        host.request_refresh();
    }

    /// Called by the host when a timer armed by this area fires.
    /// Stale handles are ignored.
    pub fn on_timer(&mut self, handle: TimerHandle, host: &mut dyn Host) {
        if self.interaction.blink_timer == Some(handle) {
            self.interaction.blink_timer = None;
            self.blink_tick(host);
        } else if self.interaction.drag_timer == Some(handle) {
            self.interaction.drag_timer = None;
            self.drag_tick(host);
        }
    }

    fn blink_tick(&mut self, host: &mut dyn Host) {
        let delay = if self.interaction.cursor_on {
            self.settings.blink_off
        } else {
            self.settings.blink_on
        };
        self.interaction.blink_timer = Some(host.set_timer(delay, TimerKind::Blink));
        self.interaction.cursor_on = !self.interaction.cursor_on;
        host.request_refresh();
    }

    /// Focus change. Deactivating clears the selection and stops blinking
    /// but keeps the text; use [`TextArea::deactivate_and_reset`] when the
    /// owner discards the input on focus loss.
    pub fn set_active(&mut self, active: bool, host: &mut dyn Host) {
        if self.active == active {
            return;
        }
        self.active = active;
        tracing::debug!(target: "textarea", "active: {}", active);

        if active {
            self.blink_on(host);
        } else {
            self.state.clear_selection();
            self.interaction.cursor_on = false;
            if let Some(handle) = self.interaction.blink_timer.take() {
                host.cancel_timer(handle);
            }
            host.request_refresh();
        }
    }

    /// Focus loss that also starts the area over with empty text and history
    pub fn deactivate_and_reset(&mut self, host: &mut dyn Host) {
        self.set_active(false, host);
        self.reset(host);
    }

    /// Discard the text and both undo stacks
    pub fn reset(&mut self, host: &mut dyn Host) {
        self.state.reset();
        self.viewport.scroll_x = 0.0;
        self.viewport.scroll_y = 0.0;
        self.after_edit(host);
    }

    /// Resize the viewport, re-wrapping and re-scrolling as needed
    pub fn resize(&mut self, width: f32, height: f32, host: &mut dyn Host) {
        self.viewport.width = width;
        self.viewport.height = height;
        self.after_edit(host);
    }

    /// Tear the widget down, cancelling every timer it owns
    pub fn destroy(mut self, host: &mut dyn Host) {
        for handle in [
            self.interaction.blink_timer.take(),
            self.interaction.drag_timer.take(),
        ]
        .into_iter()
        .flatten()
        {
            host.cancel_timer(handle);
        }
        tracing::debug!(target: "textarea", "destroyed");
    }
}

// =============================================================================
// Mouse Input
// =============================================================================

impl<S: TextShaper> TextArea<S> {
    /// Button press: place the cursor (shift extends the selection)
    pub fn mouse_down(&mut self, event: &PointerEvent, host: &mut dyn Host) {
        self.interaction.pointer = (event.x, event.y);
        let offset = self.offset_at(event.x, event.y);
        self.state.move_cursor(offset, event.shift);
        host.request_refresh();
    }

    /// Click without drag. A second click within the double-click window
    /// selects everything.
    pub fn clicked(&mut self, event: &PointerEvent, host: &mut dyn Host) {
        self.interaction.pointer = (event.x, event.y);

        if let Some(last) = self.interaction.last_mouse_press {
            if event.time.saturating_duration_since(last) < self.settings.double_click {
                self.state.select_all();
                self.put_cursor_on_screen(host);
                return;
            }
        }
        self.interaction.last_mouse_press = Some(event.time);

        let offset = self.offset_at(event.x, event.y);
        self.state.move_cursor(offset, event.shift);
        let wrap_width = self.wrap_width();
        viewport::update_preferred_x(&mut self.state, &self.shaper, wrap_width);
        host.request_refresh();
    }

    /// Drag began: place the cursor and start the autoscroll timer
    pub fn drag_start(&mut self, event: &PointerEvent, host: &mut dyn Host) {
        self.interaction.pointer = (event.x, event.y);
        self.interaction.dragging = true;

        if let Some(handle) = self.interaction.drag_timer.take() {
            host.cancel_timer(handle);
        }
        self.interaction.drag_timer =
            Some(host.set_timer(std::time::Duration::ZERO, TimerKind::DragScroll));
        self.blink_on(host);

        let offset = self.offset_at(event.x, event.y);
        self.state.move_cursor(offset, event.shift);
    }

    /// Pointer moved during a drag: extend the selection to it
    pub fn drag(&mut self, event: &PointerEvent, host: &mut dyn Host) {
        self.interaction.pointer = (event.x, event.y);
        let offset = self.offset_at(event.x, event.y);
        self.state.move_cursor(offset, true);
        host.request_refresh();
    }

    /// Drag finished: extend the selection one last time and stop autoscrolling
    pub fn drag_end(&mut self, event: &PointerEvent, host: &mut dyn Host) {
        self.interaction.pointer = (event.x, event.y);
        let offset = self.offset_at(event.x, event.y);
        self.state.move_cursor(offset, true);
        let wrap_width = self.wrap_width();
        viewport::update_preferred_x(&mut self.state, &self.shaper, wrap_width);

        self.interaction.dragging = false;
        if let Some(handle) = self.interaction.drag_timer.take() {
            host.cancel_timer(handle);
        }
        host.request_refresh();
    }

    /// Autoscroll tick: nudge toward the pointer if it is outside the
    /// viewport, follow it with the cursor and re-arm
    fn drag_tick(&mut self, host: &mut dyn Host) {
        self.blink_on(host);

        if !self.interaction.dragging {
            host.request_refresh();
            return;
        }

        let (x, y) = self.interaction.pointer;
        let nudged = self.viewport.nudge_toward(x, y);
        if nudged.0 || nudged.1 {
            let offset = self.offset_at(x, y);
            self.state.move_cursor(offset, true);
        }

        host.request_relayout();
        self.viewport.animate(host, nudged, self.settings.scroll_anim);
        self.interaction.drag_timer =
            Some(host.set_timer(self.settings.scroll_anim, TimerKind::DragScroll));
    }
}
