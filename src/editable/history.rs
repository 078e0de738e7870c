//! Undo/redo action log for the text area.
//!
//! Actions are stored by value on two stacks, most recent last. Undo moves
//! the top action to the redo stack and redo moves it back; the action itself
//! is never rewritten, only replayed forwards or backwards by the owner of
//! the text.

/// A single reversible edit.
///
/// `cursor_start` and `cursor_end` are the cursor byte offsets before and
/// after the action was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoAction {
    /// `inserted_text` was spliced in at `cursor_start`
    Insert {
        cursor_start: usize,
        cursor_end: usize,
        inserted_text: String,
    },
    /// `replaced_text` was removed; it started at `min(cursor_start, cursor_end)`
    Delete {
        cursor_start: usize,
        cursor_end: usize,
        replaced_text: String,
    },
    /// The selection spanning `cursor_start`..`selection_start` (either order)
    /// was swapped for `inserted_text`
    Replace {
        cursor_start: usize,
        cursor_end: usize,
        inserted_text: String,
        replaced_text: String,
        selection_start: usize,
    },
    /// The cursor jumped without changing the text
    CursorMove {
        cursor_start: usize,
        cursor_end: usize,
    },
}

impl UndoAction {
    /// Cursor position before the action
    pub fn cursor_start(&self) -> usize {
        match self {
            UndoAction::Insert { cursor_start, .. }
            | UndoAction::Delete { cursor_start, .. }
            | UndoAction::Replace { cursor_start, .. }
            | UndoAction::CursorMove { cursor_start, .. } => *cursor_start,
        }
    }

    /// Cursor position after the action
    pub fn cursor_end(&self) -> usize {
        match self {
            UndoAction::Insert { cursor_end, .. }
            | UndoAction::Delete { cursor_end, .. }
            | UndoAction::Replace { cursor_end, .. }
            | UndoAction::CursorMove { cursor_end, .. } => *cursor_end,
        }
    }

    /// Check if this is an insert action
    pub fn is_insert(&self) -> bool {
        matches!(self, UndoAction::Insert { .. })
    }
}

/// Single-character inputs that only coalesce with a run of themselves
fn is_split_token(text: &str) -> bool {
    matches!(text, " " | "\n" | "\r")
}

/// Undo and redo stacks.
#[derive(Debug, Clone, Default)]
pub struct UndoLog {
    undo_stack: Vec<UndoAction>,
    redo_stack: Vec<UndoAction>,
    /// Maximum undo depth; 0 keeps everything
    max_size: usize,
}

impl UndoLog {
    /// Create an unbounded log
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log that drops its oldest actions beyond `max_size`
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            max_size,
            ..Self::default()
        }
    }

    /// Push a committed action (clears the redo stack)
    pub fn push(&mut self, action: UndoAction) {
        self.redo_stack.clear();
        self.undo_stack.push(action);

        if self.max_size > 0 && self.undo_stack.len() > self.max_size {
            let excess = self.undo_stack.len() - self.max_size;
            self.undo_stack.drain(..excess);
        }
    }

    /// Record `text` typed at `cursor`.
    ///
    /// Contiguous typing extends the previous insert. A space, newline or
    /// carriage return only extends a previous insert that ends with the same
    /// character, so each word and each run of identical blanks becomes its own
    /// undo step. When the cursor moved away from the end of the previous
    /// insert, a [`UndoAction::CursorMove`] is recorded first.
    pub fn record_insert(&mut self, cursor: usize, text: &str) {
        let mut jumped_from = None;

        if let Some(UndoAction::Insert {
            cursor_end,
            inserted_text,
            ..
        }) = self.undo_stack.last_mut()
        {
            if *cursor_end == cursor {
                let merge = if is_split_token(text) {
                    inserted_text.as_bytes().last() == text.as_bytes().last()
                } else {
                    true
                };
                if merge {
                    inserted_text.push_str(text);
                    *cursor_end += text.len();
                    self.redo_stack.clear();
                    return;
                }
            } else {
                jumped_from = Some(*cursor_end);
            }
        }

        if let Some(cursor_start) = jumped_from {
            self.push(UndoAction::CursorMove {
                cursor_start,
                cursor_end: cursor,
            });
        }
        self.push(UndoAction::Insert {
            cursor_start: cursor,
            cursor_end: cursor + text.len(),
            inserted_text: text.to_string(),
        });
    }

    /// Pop the newest action for undoing (moves it to the redo stack)
    pub fn pop_undo(&mut self) -> Option<UndoAction> {
        let action = self.undo_stack.pop()?;
        self.redo_stack.push(action.clone());
        Some(action)
    }

    /// Pop the newest undone action for redoing (moves it back to the undo stack)
    pub fn pop_redo(&mut self) -> Option<UndoAction> {
        let action = self.redo_stack.pop()?;
        self.undo_stack.push(action.clone());
        Some(action)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Maximum undo depth (0 = unlimited)
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Get the number of actions in the undo stack
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of actions in the redo stack
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Undo stack, oldest first
    pub fn undo_actions(&self) -> &[UndoAction] {
        &self.undo_stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inserted(log: &UndoLog) -> Vec<&str> {
        log.undo_actions()
            .iter()
            .filter_map(|a| match a {
                UndoAction::Insert { inserted_text, .. } => Some(inserted_text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_contiguous_typing_coalesces() {
        let mut log = UndoLog::new();
        for (i, ch) in ["h", "e", "l", "l", "o"].iter().enumerate() {
            log.record_insert(i, ch);
        }
        assert_eq!(log.undo_count(), 1);
        assert_eq!(inserted(&log), vec!["hello"]);
        assert_eq!(log.undo_actions()[0].cursor_end(), 5);
    }

    #[test]
    fn test_space_run_is_its_own_step() {
        let mut log = UndoLog::new();
        log.record_insert(0, "a");
        log.record_insert(1, " ");
        log.record_insert(2, " ");
        assert_eq!(inserted(&log), vec!["a", "  "]);
    }

    #[test]
    fn test_word_after_space_joins_space_step() {
        let mut log = UndoLog::new();
        log.record_insert(0, "a");
        log.record_insert(1, " ");
        log.record_insert(2, "b");
        assert_eq!(inserted(&log), vec!["a", " b"]);
    }

    #[test]
    fn test_newline_does_not_merge_with_space() {
        let mut log = UndoLog::new();
        log.record_insert(0, " ");
        log.record_insert(1, "\n");
        log.record_insert(2, "\n");
        assert_eq!(inserted(&log), vec![" ", "\n\n"]);
    }

    #[test]
    fn test_non_contiguous_insert_records_cursor_move() {
        let mut log = UndoLog::new();
        log.record_insert(0, "abc");
        log.record_insert(1, "x");

        assert_eq!(log.undo_count(), 3);
        assert_eq!(
            log.undo_actions()[1],
            UndoAction::CursorMove {
                cursor_start: 3,
                cursor_end: 1
            }
        );
        assert_eq!(log.undo_actions()[2].cursor_start(), 1);
    }

    #[test]
    fn test_insert_after_delete_does_not_merge() {
        let mut log = UndoLog::new();
        log.push(UndoAction::Delete {
            cursor_start: 2,
            cursor_end: 1,
            replaced_text: "b".to_string(),
        });
        log.record_insert(1, "x");
        assert_eq!(log.undo_count(), 2);
        assert!(log.undo_actions()[1].is_insert());
    }

    #[test]
    fn test_pop_moves_between_stacks() {
        let mut log = UndoLog::new();
        log.record_insert(0, "a");

        let action = log.pop_undo().unwrap();
        assert!(action.is_insert());
        assert!(!log.can_undo());
        assert!(log.can_redo());

        let action = log.pop_redo().unwrap();
        assert!(action.is_insert());
        assert!(log.can_undo());
        assert!(!log.can_redo());
    }

    #[test]
    fn test_push_clears_redo() {
        let mut log = UndoLog::new();
        log.record_insert(0, "a");
        log.pop_undo();
        assert!(log.can_redo());

        log.record_insert(0, "b");
        assert!(!log.can_redo());
        assert!(log.pop_redo().is_none());
    }

    #[test]
    fn test_merge_also_clears_redo() {
        let mut log = UndoLog::new();
        log.record_insert(0, "a");
        log.record_insert(1, "b");
        log.push(UndoAction::CursorMove {
            cursor_start: 2,
            cursor_end: 0,
        });
        log.pop_undo();
        assert!(log.can_redo());

        log.record_insert(2, "c");
        assert!(!log.can_redo());
        assert_eq!(inserted(&log), vec!["abc"]);
    }

    #[test]
    fn test_empty_stacks_are_noops() {
        let mut log = UndoLog::new();
        assert!(log.pop_undo().is_none());
        assert!(log.pop_redo().is_none());
    }

    #[test]
    fn test_max_size() {
        let mut log = UndoLog::with_max_size(3);
        for i in 0..5 {
            log.push(UndoAction::CursorMove {
                cursor_start: i,
                cursor_end: i + 1,
            });
        }
        assert_eq!(log.undo_count(), 3);
        assert_eq!(log.undo_actions()[0].cursor_start(), 2);
    }
}
