//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use taskpanel::config::TextAreaSettings;
use taskpanel::editable::{HeadlessHost, MonospaceShaper, TextArea, TextShaper};
use taskpanel::keymap::{KeyCode, KeyEvent, Modifiers};

/// Glyph cell of the test shaper
pub const CHAR_WIDTH: f32 = 10.0;
pub const LINE_HEIGHT: f32 = 20.0;

/// Settings used by most tests: 30px scroll margin
pub fn test_settings() -> TextAreaSettings {
    TextAreaSettings {
        scroll_margin: 30.0,
        ..TextAreaSettings::default()
    }
}

/// Active 200x40 text area holding `text` with the cursor at the end
pub fn test_area(text: &str) -> (TextArea<MonospaceShaper>, HeadlessHost) {
    test_area_with(test_settings(), 200.0, 40.0, text)
}

/// Active text area with explicit settings and viewport size
pub fn test_area_with(
    settings: TextAreaSettings,
    width: f32,
    height: f32,
    text: &str,
) -> (TextArea<MonospaceShaper>, HeadlessHost) {
    let mut host = HeadlessHost::new();
    let mut area = TextArea::new(
        MonospaceShaper::new(CHAR_WIDTH, LINE_HEIGHT),
        settings,
        width,
        height,
    )
    .with_text(text);
    area.set_active(true, &mut host);
    (area, host)
}

/// Active text area with the cursor moved to `cursor` using Left presses (ASCII text only)
pub fn test_area_at(text: &str, cursor: usize) -> (TextArea<MonospaceShaper>, HeadlessHost) {
    let (mut area, mut host) = test_area(text);
    for _ in cursor..text.len() {
        press(&mut area, &mut host, KeyCode::Left);
    }
    assert_eq!(area.state().cursor(), cursor);
    (area, host)
}

pub fn press<S: TextShaper>(area: &mut TextArea<S>, host: &mut HeadlessHost, key: KeyCode) -> bool {
    area.handle_key(&KeyEvent::key(key, Modifiers::NONE), host)
}

pub fn press_ctrl<S: TextShaper>(
    area: &mut TextArea<S>,
    host: &mut HeadlessHost,
    key: KeyCode,
) -> bool {
    area.handle_key(&KeyEvent::key(key, Modifiers::CTRL), host)
}

pub fn press_shift<S: TextShaper>(
    area: &mut TextArea<S>,
    host: &mut HeadlessHost,
    key: KeyCode,
) -> bool {
    area.handle_key(&KeyEvent::key(key, Modifiers::SHIFT), host)
}

pub fn press_with<S: TextShaper>(
    area: &mut TextArea<S>,
    host: &mut HeadlessHost,
    key: KeyCode,
    mods: Modifiers,
) -> bool {
    area.handle_key(&KeyEvent::key(key, mods), host)
}

/// Type `text` one character at a time
pub fn type_text<S: TextShaper>(area: &mut TextArea<S>, host: &mut HeadlessHost, text: &str) {
    for ch in text.chars() {
        area.handle_key(&KeyEvent::text(ch.to_string()), host);
    }
}

/// Finish scroll animations, then check the caret is inside the viewport
pub fn assert_cursor_visible<S: TextShaper>(area: &mut TextArea<S>, host: &mut HeadlessHost) {
    host.settle(area);
    let state = area.state();
    let rect = area
        .shaper()
        .cursor_rect(state.text(), state.cursor(), area.wrap_width());
    let viewport = area.viewport();
    assert!(
        viewport.contains(rect),
        "cursor {:?} outside viewport scroll=({}, {}) size=({}, {})",
        rect,
        viewport.scroll_x,
        viewport.scroll_y,
        viewport.width,
        viewport.height
    );
    assert_eq!(viewport.visual_x, viewport.scroll_x);
    assert_eq!(viewport.visual_y, viewport.scroll_y);
}
