//! Paint list for a text area.
//!
//! Painting produces backend-neutral commands in viewport coordinates
//! (already offset by the visual scroll). The host clips them to the
//! viewport and renders them in order.

use crate::theme::Color;

use super::shaping::TextShaper;
use super::textarea::TextArea;

/// A single drawing command
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCmd {
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    /// Text drawn with the area's font, wrapped at `wrap_width` if set
    Text {
        x: f32,
        y: f32,
        text: String,
        font: String,
        font_size: f32,
        wrap_width: Option<f32>,
        color: Color,
    },
}

impl PaintCmd {
    fn rect(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        PaintCmd::FillRect {
            x,
            y,
            width,
            height,
            color,
        }
    }
}

/// Build the paint list: selection background, text, prompt, caret
pub fn paint<S: TextShaper>(area: &TextArea<S>) -> Vec<PaintCmd> {
    let state = area.state();
    let viewport = area.viewport();
    let settings = area.settings();
    let colors = settings.colors;
    let shaper = area.shaper();
    let wrap_width = area.wrap_width();
    let (dx, dy) = (-viewport.visual_x, -viewport.visual_y);

    let mut cmds = Vec::new();
    let cursor = shaper.cursor_rect(state.text(), state.cursor(), wrap_width);

    if let Some(anchor) = state.selection_anchor().filter(|&a| a != state.cursor()) {
        let anchor = shaper.cursor_rect(state.text(), anchor, wrap_width);
        let h = anchor.height;
        let full_width = viewport.content_width.max(viewport.width);

        if cursor.y == anchor.y {
            let min_x = cursor.x.min(anchor.x);
            let max_x = cursor.x.max(anchor.x);
            cmds.push(PaintCmd::rect(min_x + dx, cursor.y + dy, max_x - min_x, h, colors.selection));
        } else {
            let (first, last) = if cursor.y < anchor.y {
                (cursor, anchor)
            } else {
                (anchor, cursor)
            };
            // Lines fully covered between the first and last
            if last.y - first.y > h {
                cmds.push(PaintCmd::rect(
                    dx,
                    first.y + h + dy,
                    full_width,
                    last.y - first.y - h,
                    colors.selection,
                ));
            }
            cmds.push(PaintCmd::rect(
                first.x + dx,
                first.y + dy,
                full_width,
                h,
                colors.selection,
            ));
            cmds.push(PaintCmd::rect(dx, last.y + dy, last.x, h, colors.selection));
        }
    }

    cmds.push(PaintCmd::Text {
        x: dx,
        y: dy,
        text: state.text().to_string(),
        font: settings.font.clone(),
        font_size: settings.font_size,
        wrap_width,
        color: colors.text,
    });

    if !area.is_active() && state.is_empty() && !settings.prompt.is_empty() {
        cmds.push(PaintCmd::Text {
            x: dx,
            y: dy,
            text: settings.prompt.clone(),
            font: settings.font.clone(),
            font_size: settings.font_size,
            wrap_width,
            color: colors.prompt,
        });
    }

    if area.cursor_visible() {
        // Sit one pixel inside the previous glyph unless at the left edge
        let nudge = if cursor.x != 0.0 { -1.0 } else { 0.0 };
        cmds.push(PaintCmd::rect(
            cursor.x + dx + nudge,
            cursor.y + dy,
            settings.cursor_width,
            cursor.height,
            colors.cursor,
        ));
    }

    cmds
}
