//! Text shaping collaborator.
//!
//! The text area never measures glyphs itself. It asks a [`TextShaper`] for
//! cursor geometry, text extents and hit tests; all answers are in pixels
//! relative to the top-left corner of the laid-out text. Implementations must
//! be deterministic for a given text and wrap width.

use crate::util::text::floor_char_boundary;

/// Caret rectangle at a byte offset (zero width)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorRect {
    pub x: f32,
    pub y: f32,
    pub height: f32,
}

/// Logical extents of laid-out text
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extents {
    pub width: f32,
    pub height: f32,
}

/// Result of mapping a point to the text.
///
/// `trailing` is the byte length to add to `index` when the point falls in
/// the trailing half of the glyph, so `index + trailing` is the caret offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitTest {
    pub index: usize,
    pub trailing: usize,
}

impl HitTest {
    /// Caret offset for this hit, clamped to the text and a char boundary
    pub fn offset(&self, text: &str) -> usize {
        floor_char_boundary(text, self.index.saturating_add(self.trailing))
    }
}

/// Text measurement for a single font.
///
/// `wrap_width` is `Some` when the text wraps to a fixed width.
pub trait TextShaper {
    /// Height of one line of text
    fn line_height(&self) -> f32;

    /// Caret geometry for the byte offset `index`
    fn cursor_rect(&self, text: &str, index: usize, wrap_width: Option<f32>) -> CursorRect;

    /// Logical size of the whole text
    fn extents(&self, text: &str, wrap_width: Option<f32>) -> Extents;

    /// Byte offset nearest to the point `(x, y)`
    fn hit_test(&self, text: &str, x: f32, y: f32, wrap_width: Option<f32>) -> HitTest;
}

/// Fixed-pitch shaper: every char is one cell wide.
///
/// Wrapping breaks visual lines at the last cell that fits. Used headless and
/// in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceShaper {
    pub char_width: f32,
    pub line_height: f32,
}

impl MonospaceShaper {
    pub fn new(char_width: f32, line_height: f32) -> Self {
        Self {
            char_width,
            line_height,
        }
    }

    /// Approximate metrics for a font size in pixels
    pub fn for_font_size(font_size: f32) -> Self {
        Self::new((font_size * 0.6).round().max(1.0), (font_size * 1.2).round().max(1.0))
    }

    /// Visual lines as byte ranges (line feeds excluded)
    fn lines(&self, text: &str, wrap_width: Option<f32>) -> Vec<(usize, usize)> {
        let max_cells = wrap_width
            .map(|w| ((w / self.char_width).floor() as usize).max(1))
            .unwrap_or(usize::MAX);

        let mut lines = Vec::new();
        let mut line_start = 0;
        for hard_line in text.split('\n') {
            let mut start = line_start;
            let mut cells = 0;
            for (i, _) in hard_line.char_indices() {
                if cells == max_cells {
                    lines.push((start, line_start + i));
                    start = line_start + i;
                    cells = 0;
                }
                cells += 1;
            }
            lines.push((start, line_start + hard_line.len()));
            line_start += hard_line.len() + 1;
        }
        lines
    }

    /// Index of the visual line holding the caret at `index`.
    /// An offset on a wrap point belongs to the following line.
    fn line_of(lines: &[(usize, usize)], index: usize) -> usize {
        lines
            .iter()
            .rposition(|&(start, _)| start <= index)
            .unwrap_or(0)
    }

    fn cells(text: &str, start: usize, end: usize) -> usize {
        text[start..end].chars().count()
    }
}

impl TextShaper for MonospaceShaper {
    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn cursor_rect(&self, text: &str, index: usize, wrap_width: Option<f32>) -> CursorRect {
        let index = floor_char_boundary(text, index);
        let lines = self.lines(text, wrap_width);
        let line = Self::line_of(&lines, index);
        let (start, end) = lines[line];
        let column = Self::cells(text, start, index.min(end));
        CursorRect {
            x: column as f32 * self.char_width,
            y: line as f32 * self.line_height,
            height: self.line_height,
        }
    }

    fn extents(&self, text: &str, wrap_width: Option<f32>) -> Extents {
        let lines = self.lines(text, wrap_width);
        let widest = lines
            .iter()
            .map(|&(start, end)| Self::cells(text, start, end))
            .max()
            .unwrap_or(0);
        Extents {
            width: widest as f32 * self.char_width,
            height: lines.len() as f32 * self.line_height,
        }
    }

    fn hit_test(&self, text: &str, x: f32, y: f32, wrap_width: Option<f32>) -> HitTest {
        let lines = self.lines(text, wrap_width);
        let last_line = lines.len() - 1;
        let row = if y < 0.0 {
            0
        } else {
            ((y / self.line_height).floor() as usize).min(last_line)
        };
        let (start, end) = lines[row];

        if x < 0.0 {
            return HitTest {
                index: start,
                trailing: 0,
            };
        }

        let cell = x / self.char_width;
        let column = cell.floor() as usize;
        match text[start..end].char_indices().nth(column) {
            Some((offset, ch)) => {
                let trailing = if cell - column as f32 >= 0.5 {
                    ch.len_utf8()
                } else {
                    0
                };
                HitTest {
                    index: start + offset,
                    trailing,
                }
            }
            None => HitTest {
                index: end,
                trailing: 0,
            },
        }
    }
}
