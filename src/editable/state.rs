//! TextState - the mutable text, cursor, selection anchor and undo log of one text area.
//!
//! All offsets are byte offsets into the UTF-8 text. Every offset that enters
//! through the public API is clamped to the text and snapped to a char
//! boundary, so splicing can never fail.

use crate::util::text::{
    ceil_char_boundary, floor_char_boundary, next_char_boundary, prev_char_boundary,
};

use super::history::{UndoAction, UndoLog};
use super::seeker::{line_end, line_start, seek_token, Motion};

/// Text plus cursor, selection and history.
#[derive(Debug, Clone, Default)]
pub struct TextState {
    text: String,
    cursor: usize,
    /// Fixed end of the selection; the cursor is the moving end
    selection_anchor: Option<usize>,
    /// Remembered horizontal pixel column for vertical motion
    pub preferred_x: f32,
    history: UndoLog,
}

impl TextState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty state whose undo log keeps at most `undo_limit` actions (0 = unlimited)
    pub fn with_undo_limit(undo_limit: usize) -> Self {
        Self {
            history: UndoLog::with_max_size(undo_limit),
            ..Self::default()
        }
    }

    /// Create a state holding `text` with the cursor at the end and no history
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
            ..Self::default()
        }
    }

    /// Replace the whole text, moving the cursor to the end and dropping
    /// the selection and history
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = text.len();
        self.selection_anchor = None;
        self.history.clear();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection_anchor(&self) -> Option<usize> {
        self.selection_anchor
    }

    pub fn history(&self) -> &UndoLog {
        &self.history
    }

    /// Check if a selection anchor is set (the range may still be empty)
    pub fn has_selection(&self) -> bool {
        self.selection_anchor.is_some()
    }

    /// Selected byte range `[min(cursor, anchor), max(cursor, anchor))`
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        self.selection_anchor
            .map(|anchor| (anchor.min(self.cursor), anchor.max(self.cursor)))
    }

    /// Get the selected text (empty string if no selection)
    pub fn selected_text(&self) -> &str {
        match self.selection_range() {
            Some((start, end)) => &self.text[start..end],
            None => "",
        }
    }

    /// Clamp an offset into the text and onto a char boundary
    pub fn clamp_offset(&self, offset: usize) -> usize {
        floor_char_boundary(&self.text, offset)
    }

    /// Place the cursor without touching history.
    ///
    /// With `extend_selection` an anchor is dropped at the old cursor if none
    /// exists yet and only the cursor moves; otherwise the selection is cleared.
    pub fn move_cursor(&mut self, offset: usize, extend_selection: bool) {
        if extend_selection {
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.cursor);
            }
        } else {
            self.selection_anchor = None;
        }
        self.cursor = self.clamp_offset(offset);
    }

    /// Clear the selection, keeping the cursor
    pub fn clear_selection(&mut self) {
        self.selection_anchor = None;
    }

    /// Select the whole text (anchor at 0, cursor at the end)
    pub fn select_all(&mut self) {
        self.selection_anchor = Some(0);
        self.cursor = self.text.len();
    }

    /// Cursor target one char to the left
    pub fn char_left_target(&self) -> usize {
        prev_char_boundary(&self.text, self.cursor)
    }

    /// Cursor target one char to the right
    pub fn char_right_target(&self) -> usize {
        next_char_boundary(&self.text, self.cursor)
    }

    /// Word-jump target in `direction`
    pub fn word_target(&self, direction: Motion) -> usize {
        seek_token(&self.text, self.cursor, direction)
    }

    /// Start of the current line
    pub fn line_start_target(&self) -> usize {
        line_start(&self.text, self.cursor)
    }

    /// End of the current line
    pub fn line_end_target(&self) -> usize {
        line_end(&self.text, self.cursor)
    }
}

// =============================================================================
// Editing Operations
// =============================================================================

impl TextState {
    /// Splice `text` in at the cursor, coalescing with the previous insert
    /// where possible. Returns false for empty input.
    pub fn insert(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }

        self.history.record_insert(self.cursor, text);
        self.text.insert_str(self.cursor, text);
        let target = self.cursor + text.len();
        self.move_cursor(target, false);
        true
    }

    /// Delete `amount` bytes: positive deletes forward from the cursor,
    /// negative deletes backward ending at the cursor. The range is clamped to
    /// the text and widened to char boundaries. Returns false if nothing was
    /// removed.
    pub fn delete(&mut self, amount: isize) -> bool {
        let cursor = self.cursor;
        let (start, end) = if amount >= 0 {
            let end = cursor.saturating_add(amount as usize);
            (cursor, ceil_char_boundary(&self.text, end))
        } else {
            let start = cursor.saturating_sub(amount.unsigned_abs());
            (floor_char_boundary(&self.text, start), cursor)
        };
        if start >= end {
            return false;
        }

        let replaced_text = self.text[start..end].to_string();
        let cursor_end = if amount >= 0 { cursor } else { start };
        self.text.replace_range(start..end, "");
        self.history.push(UndoAction::Delete {
            cursor_start: cursor,
            cursor_end,
            replaced_text,
        });
        self.move_cursor(cursor_end, false);
        true
    }

    /// Replace the selected span with `new_text`; the cursor lands after the
    /// inserted text. Without an anchor this behaves as a replace of the empty
    /// span at the cursor.
    pub fn replace(&mut self, new_text: &str) -> bool {
        let anchor = self.selection_anchor.unwrap_or(self.cursor);
        let start = anchor.min(self.cursor);
        let end = anchor.max(self.cursor);

        let replaced_text = self.text[start..end].to_string();
        let cursor_end = start + new_text.len();
        self.history.push(UndoAction::Replace {
            cursor_start: self.cursor,
            cursor_end,
            inserted_text: new_text.to_string(),
            replaced_text,
            selection_start: anchor,
        });

        self.text.replace_range(start..end, new_text);
        self.move_cursor(cursor_end, false);
        true
    }

    /// Insert, or replace the selection if one is active
    pub fn insert_or_replace(&mut self, text: &str) -> bool {
        if self.has_selection() {
            self.replace(text)
        } else {
            self.insert(text)
        }
    }

    /// Revert the newest action. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(action) = self.history.pop_undo() else {
            return false;
        };

        match action {
            UndoAction::Insert {
                cursor_start,
                inserted_text,
                ..
            } => {
                self.remove_span(cursor_start, inserted_text.len());
                self.set_cursor_and_anchor(cursor_start, None);
            }
            UndoAction::Delete {
                cursor_start,
                cursor_end,
                replaced_text,
            } => {
                let at = cursor_start.min(cursor_end);
                self.insert_span(at, &replaced_text);
                self.set_cursor_and_anchor(cursor_start, None);
            }
            UndoAction::Replace {
                cursor_start,
                cursor_end,
                inserted_text,
                replaced_text,
                selection_start,
            } => {
                let at = cursor_end.saturating_sub(inserted_text.len());
                self.remove_span(at, inserted_text.len());
                self.insert_span(at, &replaced_text);
                self.set_cursor_and_anchor(cursor_start, Some(selection_start));
            }
            UndoAction::CursorMove { cursor_start, .. } => {
                self.set_cursor_and_anchor(cursor_start, None);
            }
        }
        true
    }

    /// Re-apply the newest undone action. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(action) = self.history.pop_redo() else {
            return false;
        };

        match action {
            UndoAction::Insert {
                cursor_start,
                cursor_end,
                inserted_text,
            } => {
                self.insert_span(cursor_start, &inserted_text);
                self.set_cursor_and_anchor(cursor_end, None);
            }
            UndoAction::Delete {
                cursor_start,
                cursor_end,
                replaced_text,
            } => {
                let at = cursor_start.min(cursor_end);
                self.remove_span(at, replaced_text.len());
                self.set_cursor_and_anchor(cursor_end, None);
            }
            UndoAction::Replace {
                cursor_start,
                cursor_end,
                inserted_text,
                selection_start,
                ..
            } => {
                let start = cursor_start.min(selection_start);
                let end = cursor_start.max(selection_start);
                self.remove_span(start, end - start);
                self.insert_span(start, &inserted_text);
                self.set_cursor_and_anchor(cursor_end, None);
            }
            UndoAction::CursorMove { cursor_end, .. } => {
                self.set_cursor_and_anchor(cursor_end, None);
            }
        }
        true
    }

    /// Drop the text, cursor, selection and both stacks
    pub fn reset(&mut self) {
        *self = Self::with_undo_limit(self.history.max_size());
    }

    fn remove_span(&mut self, at: usize, len: usize) {
        let start = floor_char_boundary(&self.text, at);
        let end = floor_char_boundary(&self.text, start.saturating_add(len));
        self.text.replace_range(start..end, "");
    }

    fn insert_span(&mut self, at: usize, text: &str) {
        let at = floor_char_boundary(&self.text, at);
        self.text.insert_str(at, text);
    }

    fn set_cursor_and_anchor(&mut self, cursor: usize, anchor: Option<usize>) {
        self.cursor = self.clamp_offset(cursor);
        self.selection_anchor = anchor.map(|a| self.clamp_offset(a));
    }
}
