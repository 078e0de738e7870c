//! Core types for keyboard input: Modifiers, KeyCode, KeyEvent

use std::fmt;

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000);

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b0001;
        }
        if shift {
            bits |= 0b0010;
        }
        if alt {
            bits |= 0b0100;
        }
        if meta {
            bits |= 0b1000;
        }
        Modifiers(bits)
    }

    /// Check if ctrl is held
    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0001 != 0
    }

    /// Check if shift is held
    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0010 != 0
    }

    /// Check if alt is held
    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0100 != 0
    }

    /// Check if meta (super/win) is held
    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & 0b1000 != 0
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Check if this contains all modifiers in other
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl() {
            parts.push("Ctrl");
        }
        if self.shift() {
            parts.push("Shift");
        }
        if self.alt() {
            parts.push("Alt");
        }
        if self.meta() {
            parts.push("Super");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// Symbolic key delivered by the window system
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key, case as delivered
    Char(char),

    // Named keys
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    // Arrow keys
    Up,
    Down,
    Left,
    Right,

    // Navigation
    Home,
    End,
    PageUp,
    PageDown,
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Escape => write!(f, "Escape"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Up => write!(f, "Up"),
            KeyCode::Down => write!(f, "Down"),
            KeyCode::Left => write!(f, "Left"),
            KeyCode::Right => write!(f, "Right"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::PageUp => write!(f, "PageUp"),
            KeyCode::PageDown => write!(f, "PageDown"),
        }
    }
}

/// Whether a key went down or up
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyDirection {
    #[default]
    Press,
    Release,
}

/// A keyboard event as delivered to a focused widget.
///
/// Literal input carries `text`; everything else carries a symbolic `key`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyEvent {
    pub text: Option<String>,
    pub key: Option<KeyCode>,
    pub mods: Modifiers,
    pub direction: KeyDirection,
}

impl KeyEvent {
    /// Literal text input
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Symbolic key press
    pub fn key(key: KeyCode, mods: Modifiers) -> Self {
        Self {
            key: Some(key),
            mods,
            ..Self::default()
        }
    }

    /// The same event as a key release
    pub fn released(mut self) -> Self {
        self.direction = KeyDirection::Release;
        self
    }

    /// Check if this is a key press
    pub fn is_press(&self) -> bool {
        self.direction == KeyDirection::Press
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = &self.text {
            return write!(f, "{:?}", text);
        }
        match self.key {
            Some(key) if !self.mods.is_empty() => write!(f, "{}+{}", self.mods, key),
            Some(key) => write!(f, "{}", key),
            None => write!(f, "<empty>"),
        }
    }
}

/// Parse a key string like "ctrl+shift+Left" into a key and modifiers.
///
/// Named keys are case-insensitive; a single character keeps its case.
pub fn parse_key_string(key_str: &str) -> Result<(KeyCode, Modifiers), String> {
    let mut mods = Modifiers::NONE;
    let mut key_part = None;

    for part in key_str.split('+') {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => mods = mods | Modifiers::CTRL,
            "shift" => mods = mods | Modifiers::SHIFT,
            "alt" => mods = mods | Modifiers::ALT,
            "meta" | "super" | "win" => mods = mods | Modifiers::META,
            _ => {
                if key_part.is_some() {
                    return Err(format!("Multiple keys in binding: {}", key_str));
                }
                key_part = Some(parse_key_code(part)?);
            }
        }
    }

    let key = key_part.ok_or_else(|| format!("No key found in binding: {}", key_str))?;
    Ok((key, mods))
}

fn parse_key_code(key: &str) -> Result<KeyCode, String> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    match key.to_lowercase().as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "up" => Ok(KeyCode::Up),
        "down" => Ok(KeyCode::Down),
        "left" => Ok(KeyCode::Left),
        "right" => Ok(KeyCode::Right),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "page_up" => Ok(KeyCode::PageUp),
        "pagedown" | "page_down" => Ok(KeyCode::PageDown),
        _ => Err(format!("Unknown key: {}", key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_empty() {
        let mods = Modifiers::NONE;
        assert!(mods.is_empty());
        assert!(!mods.ctrl());
        assert!(!mods.shift());
        assert!(!mods.alt());
        assert!(!mods.meta());
    }

    #[test]
    fn test_modifiers_combined() {
        let mods = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(mods.ctrl());
        assert!(mods.shift());
        assert!(!mods.alt());
        assert!(mods.contains(Modifiers::CTRL));
        assert!(!Modifiers::CTRL.contains(mods));
        assert_eq!(mods, Modifiers::new(true, true, false, false));
    }

    #[test]
    fn test_key_event_display() {
        let event = KeyEvent::key(KeyCode::Left, Modifiers::CTRL | Modifiers::SHIFT);
        assert_eq!(event.to_string(), "Ctrl+Shift+Left");
        assert_eq!(KeyEvent::text("a").to_string(), "\"a\"");
    }

    #[test]
    fn test_released() {
        let event = KeyEvent::key(KeyCode::Home, Modifiers::NONE);
        assert!(event.is_press());
        assert!(!event.released().is_press());
    }

    #[test]
    fn test_parse_key_string() {
        assert_eq!(
            parse_key_string("ctrl+shift+Left"),
            Ok((KeyCode::Left, Modifiers::CTRL | Modifiers::SHIFT))
        );
        assert_eq!(
            parse_key_string("PageDown"),
            Ok((KeyCode::PageDown, Modifiers::NONE))
        );
        assert_eq!(
            parse_key_string("ctrl+Z"),
            Ok((KeyCode::Char('Z'), Modifiers::CTRL))
        );
        assert!(parse_key_string("ctrl+shift").is_err());
        assert!(parse_key_string("a+b").is_err());
        assert!(parse_key_string("hyper").is_err());
    }
}
