//! Resolved editing intents for a text area.

/// Target for cursor movement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// Move one character left
    Left,
    /// Move one character right
    Right,
    /// Move one line up
    Up,
    /// Move one line down
    Down,
    /// Move to start of line
    LineStart,
    /// Move to end of line
    LineEnd,
    /// Move one word left
    WordLeft,
    /// Move one word right
    WordRight,
    /// Move one page up
    PageUp,
    /// Move one page down
    PageDown,
}

impl MoveTarget {
    /// Check if this target moves between lines (keeps the preferred column)
    pub fn is_vertical(&self) -> bool {
        matches!(
            self,
            MoveTarget::Up | MoveTarget::Down | MoveTarget::PageUp | MoveTarget::PageDown
        )
    }
}

/// Message type for all text area editing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TextEditMsg {
    // === Movement ===
    /// Move cursor and clear the selection
    Move(MoveTarget),
    /// Move cursor and extend selection
    MoveWithSelection(MoveTarget),

    // === Insertion ===
    /// Insert literal text (replaces the selection if one is active)
    InsertText(String),
    /// Insert a newline (ignored in single-line mode)
    InsertNewline,
    /// Insert a tab
    InsertTab,

    // === Deletion ===
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Delete character after cursor (Delete)
    DeleteForward,
    /// Delete to the previous word start (Ctrl+Backspace)
    DeleteWordBackward,
    /// Delete to the next word end (Ctrl+Delete)
    DeleteWordForward,

    // === Selection ===
    /// Select all text
    SelectAll,
    /// Collapse selection to cursor position
    CollapseSelection,

    // === Undo/Redo ===
    /// Undo last edit
    Undo,
    /// Redo last undone edit
    Redo,
}

impl TextEditMsg {
    /// Check if this message requires multiline support
    pub fn requires_multiline(&self) -> bool {
        matches!(self, TextEditMsg::InsertNewline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_targets() {
        assert!(MoveTarget::Up.is_vertical());
        assert!(MoveTarget::PageDown.is_vertical());
        assert!(!MoveTarget::LineEnd.is_vertical());
        assert!(!MoveTarget::WordLeft.is_vertical());
    }

    #[test]
    fn test_requires_multiline() {
        assert!(TextEditMsg::InsertNewline.requires_multiline());
        assert!(!TextEditMsg::InsertTab.requires_multiline());
    }
}
