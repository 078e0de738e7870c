//! Key dispatch: resolves a key event into a text area editing intent.
//!
//! Only presses are resolved. Literal text wins over the symbolic key, and
//! shift turns every cursor motion into a selection-extending one.

use crate::editable::{MoveTarget, TextEditMsg};

use super::types::{KeyCode, KeyEvent};

/// Resolve `event` into a [`TextEditMsg`], or `None` if the key is unbound
pub fn dispatch(event: &KeyEvent) -> Option<TextEditMsg> {
    if !event.is_press() {
        return None;
    }

    if let Some(text) = &event.text {
        if !text.is_empty() {
            return Some(TextEditMsg::InsertText(text.clone()));
        }
    }

    let key = event.key?;
    let ctrl = event.mods.ctrl();
    let shift = event.mods.shift();

    let movement = |target: MoveTarget| {
        if shift {
            TextEditMsg::MoveWithSelection(target)
        } else {
            TextEditMsg::Move(target)
        }
    };

    let msg = match key {
        KeyCode::Backspace if ctrl => TextEditMsg::DeleteWordBackward,
        KeyCode::Backspace => TextEditMsg::DeleteBackward,
        KeyCode::Delete if ctrl => TextEditMsg::DeleteWordForward,
        KeyCode::Delete => TextEditMsg::DeleteForward,
        KeyCode::Escape => TextEditMsg::CollapseSelection,
        KeyCode::Enter => TextEditMsg::InsertNewline,
        KeyCode::Tab => TextEditMsg::InsertTab,

        KeyCode::Left if ctrl => movement(MoveTarget::WordLeft),
        KeyCode::Left => movement(MoveTarget::Left),
        KeyCode::Right if ctrl => movement(MoveTarget::WordRight),
        KeyCode::Right => movement(MoveTarget::Right),
        KeyCode::Up => movement(MoveTarget::Up),
        KeyCode::Down => movement(MoveTarget::Down),
        KeyCode::PageUp => movement(MoveTarget::PageUp),
        KeyCode::PageDown => movement(MoveTarget::PageDown),
        KeyCode::Home => movement(MoveTarget::LineStart),
        KeyCode::End => movement(MoveTarget::LineEnd),

        KeyCode::Char('a') if ctrl => TextEditMsg::SelectAll,
        KeyCode::Char('z') if ctrl && shift => TextEditMsg::Redo,
        KeyCode::Char('z') if ctrl => TextEditMsg::Undo,
        KeyCode::Char('Z') if ctrl => TextEditMsg::Redo,

        KeyCode::Char(_) => return None,
    };

    tracing::debug!("dispatch {} -> {:?}", event, msg);
    Some(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::Modifiers;

    fn key(code: KeyCode, mods: Modifiers) -> Option<TextEditMsg> {
        dispatch(&KeyEvent::key(code, mods))
    }

    #[test]
    fn test_literal_text_inserts() {
        assert_eq!(
            dispatch(&KeyEvent::text("é")),
            Some(TextEditMsg::InsertText("é".to_string()))
        );
        assert_eq!(dispatch(&KeyEvent::text("")), None);
    }

    #[test]
    fn test_release_is_ignored() {
        assert_eq!(dispatch(&KeyEvent::text("a").released()), None);
        assert_eq!(
            dispatch(&KeyEvent::key(KeyCode::Left, Modifiers::NONE).released()),
            None
        );
    }

    #[test]
    fn test_deletion_keys() {
        assert_eq!(
            key(KeyCode::Backspace, Modifiers::NONE),
            Some(TextEditMsg::DeleteBackward)
        );
        assert_eq!(
            key(KeyCode::Backspace, Modifiers::CTRL),
            Some(TextEditMsg::DeleteWordBackward)
        );
        assert_eq!(
            key(KeyCode::Delete, Modifiers::CTRL | Modifiers::SHIFT),
            Some(TextEditMsg::DeleteWordForward)
        );
    }

    #[test]
    fn test_shift_extends_selection() {
        assert_eq!(
            key(KeyCode::Left, Modifiers::SHIFT),
            Some(TextEditMsg::MoveWithSelection(MoveTarget::Left))
        );
        assert_eq!(
            key(KeyCode::Right, Modifiers::CTRL | Modifiers::SHIFT),
            Some(TextEditMsg::MoveWithSelection(MoveTarget::WordRight))
        );
        assert_eq!(
            key(KeyCode::End, Modifiers::NONE),
            Some(TextEditMsg::Move(MoveTarget::LineEnd))
        );
        assert_eq!(
            key(KeyCode::PageUp, Modifiers::SHIFT),
            Some(TextEditMsg::MoveWithSelection(MoveTarget::PageUp))
        );
    }

    #[test]
    fn test_control_shortcuts() {
        assert_eq!(
            key(KeyCode::Char('a'), Modifiers::CTRL),
            Some(TextEditMsg::SelectAll)
        );
        assert_eq!(
            key(KeyCode::Char('z'), Modifiers::CTRL),
            Some(TextEditMsg::Undo)
        );
        assert_eq!(
            key(KeyCode::Char('Z'), Modifiers::CTRL | Modifiers::SHIFT),
            Some(TextEditMsg::Redo)
        );
        assert_eq!(
            key(KeyCode::Char('z'), Modifiers::CTRL | Modifiers::SHIFT),
            Some(TextEditMsg::Redo)
        );
        assert_eq!(key(KeyCode::Char('z'), Modifiers::NONE), None);
        assert_eq!(key(KeyCode::Char('c'), Modifiers::CTRL), None);
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(
            key(KeyCode::Escape, Modifiers::NONE),
            Some(TextEditMsg::CollapseSelection)
        );
        assert_eq!(
            key(KeyCode::Enter, Modifiers::NONE),
            Some(TextEditMsg::InsertNewline)
        );
        assert_eq!(key(KeyCode::Tab, Modifiers::NONE), Some(TextEditMsg::InsertTab));
    }
}
