//! Viewport - scroll offsets of the visible window into the laid-out text.
//!
//! Logical scroll (`scroll_x`/`scroll_y`) is where the view should be; the
//! visual offsets trail behind it through host animations. Pointer positions
//! are relative to the top-left corner of the visible area.

use std::time::Duration;

use super::host::{Easing, Host, ScrollAnimation, ScrollAxis};
use super::shaping::{CursorRect, Extents, TextShaper};
use super::state::TextState;

/// Scrollable window over the text content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Visible area size
    pub width: f32,
    pub height: f32,
    /// Logical scroll offsets (content pixels hidden above/left)
    pub scroll_x: f32,
    pub scroll_y: f32,
    /// Offsets actually drawn, animated toward the logical ones
    pub visual_x: f32,
    pub visual_y: f32,
    /// Measured text size
    pub content_width: f32,
    pub content_height: f32,
    /// Distance kept between the cursor and the edge it scrolled past
    pub margin: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            scroll_x: 0.0,
            scroll_y: 0.0,
            visual_x: 0.0,
            visual_y: 0.0,
            content_width: 0.0,
            content_height: 0.0,
            margin,
        }
    }

    /// Wrap width handed to the shaper
    pub fn wrap_width(&self, wrap: bool) -> Option<f32> {
        wrap.then_some(self.width)
    }

    pub fn max_scroll_x(&self) -> f32 {
        (self.content_width - self.width).max(0.0)
    }

    pub fn max_scroll_y(&self) -> f32 {
        (self.content_height - self.height).max(0.0)
    }

    /// Keep logical scroll inside the content
    pub fn clamp_scroll(&mut self) {
        self.scroll_x = self.scroll_x.clamp(0.0, self.max_scroll_x());
        self.scroll_y = self.scroll_y.clamp(0.0, self.max_scroll_y());
    }

    pub fn scroll(&self, axis: ScrollAxis) -> f32 {
        match axis {
            ScrollAxis::Horizontal => self.scroll_x,
            ScrollAxis::Vertical => self.scroll_y,
        }
    }

    pub fn visual(&self, axis: ScrollAxis) -> f32 {
        match axis {
            ScrollAxis::Horizontal => self.visual_x,
            ScrollAxis::Vertical => self.visual_y,
        }
    }

    pub fn set_visual(&mut self, axis: ScrollAxis, value: f32) {
        match axis {
            ScrollAxis::Horizontal => self.visual_x = value,
            ScrollAxis::Vertical => self.visual_y = value,
        }
    }

    /// Convert a viewport-relative point to text coordinates
    pub fn to_content(&self, x: f32, y: f32) -> (f32, f32) {
        (x + self.scroll_x, y + self.scroll_y)
    }

    /// Check if the caret rectangle lies inside the visible window
    pub fn contains(&self, rect: CursorRect) -> bool {
        rect.x >= self.scroll_x
            && rect.x <= self.scroll_x + self.width
            && rect.y >= self.scroll_y
            && rect.y + rect.height <= self.scroll_y + self.height
    }

    /// Scroll just enough to bring the caret rectangle into view.
    ///
    /// Returns which axes changed.
    pub fn reveal(&mut self, rect: CursorRect) -> (bool, bool) {
        let (old_x, old_y) = (self.scroll_x, self.scroll_y);

        let margin_x = self.margin.min(self.width / 2.0).max(0.0);
        if rect.x < self.scroll_x {
            self.scroll_x = rect.x - margin_x;
        } else if rect.x > self.scroll_x + self.width {
            self.scroll_x = rect.x - self.width + margin_x;
        }

        let margin_y = self.margin.min(self.height - rect.height).max(0.0);
        if rect.y < self.scroll_y {
            self.scroll_y = rect.y - margin_y;
        } else if rect.y + rect.height > self.scroll_y + self.height {
            self.scroll_y = rect.y + rect.height - self.height;
        }

        self.clamp_scroll();
        (self.scroll_x != old_x, self.scroll_y != old_y)
    }

    /// Store new content extents. With wrapping the width is pinned to the
    /// viewport so only the height can change. Returns true if the size changed.
    pub fn set_content_size(&mut self, extents: Extents, wrap: bool) -> bool {
        let width = if wrap { self.width } else { extents.width };
        if width == self.content_width && extents.height == self.content_height {
            return false;
        }
        self.content_width = width;
        self.content_height = extents.height;
        self.clamp_scroll();
        true
    }

    /// Autoscroll toward a pointer that left the visible area.
    ///
    /// Each side the pointer is past nudges the scroll by the distance,
    /// capped at three margins. Returns which axes were nudged.
    pub fn nudge_toward(&mut self, x: f32, y: f32) -> (bool, bool) {
        let cap = self.margin * 3.0;
        let mut nudged = (false, false);

        if x < 0.0 {
            nudged.0 = true;
            self.scroll_x -= (-x).min(cap);
        }
        if x > self.width {
            nudged.0 = true;
            self.scroll_x += (x - self.width).min(cap);
        }
        if y < 0.0 {
            nudged.1 = true;
            self.scroll_y -= (-y).min(cap);
        }
        if y > self.height {
            nudged.1 = true;
            self.scroll_y += (y - self.height).min(cap);
        }

        self.clamp_scroll();
        nudged
    }

    /// Ask the host to animate the visual offsets of the given axes toward
    /// the logical ones
    pub fn animate(&self, host: &mut dyn Host, axes: (bool, bool), duration: Duration) {
        for (enabled, axis) in [(axes.0, ScrollAxis::Horizontal), (axes.1, ScrollAxis::Vertical)] {
            if enabled {
                host.animate(ScrollAnimation {
                    axis,
                    from: self.visual(axis),
                    to: self.scroll(axis),
                    duration,
                    easing: Easing::EaseOut,
                });
            }
        }
    }
}

// =============================================================================
// Cursor / Viewport Coordination
// =============================================================================

/// Remember the caret's pixel column for vertical motion
pub fn update_preferred_x(state: &mut TextState, shaper: &impl TextShaper, wrap_width: Option<f32>) {
    state.preferred_x = shaper.cursor_rect(state.text(), state.cursor(), wrap_width).x;
}

/// Scroll so the caret is visible, relayout and animate both axes
pub fn put_cursor_on_screen(
    viewport: &mut Viewport,
    state: &TextState,
    shaper: &impl TextShaper,
    wrap: bool,
    host: &mut dyn Host,
    duration: Duration,
) {
    let rect = shaper.cursor_rect(state.text(), state.cursor(), viewport.wrap_width(wrap));
    viewport.reveal(rect);
    host.request_relayout();
    viewport.animate(host, (true, true), duration);
}

/// Re-measure the text; on a size change relayout, animate and refresh.
/// Returns true if the content size changed.
pub fn update_bounds(
    viewport: &mut Viewport,
    state: &TextState,
    shaper: &impl TextShaper,
    wrap: bool,
    host: &mut dyn Host,
    duration: Duration,
) -> bool {
    let extents = shaper.extents(state.text(), viewport.wrap_width(wrap));
    if !viewport.set_content_size(extents, wrap) {
        return false;
    }
    host.request_relayout();
    viewport.animate(host, (true, true), duration);
    host.request_refresh();
    true
}

/// Byte offset `lines` visual lines above (negative) or below the caret at
/// the remembered preferred column
pub fn vertical_target(
    state: &TextState,
    shaper: &impl TextShaper,
    wrap_width: Option<f32>,
    lines: i32,
) -> usize {
    let rect = shaper.cursor_rect(state.text(), state.cursor(), wrap_width);
    let y = rect.y + shaper.line_height() * lines as f32;
    let hit = shaper.hit_test(state.text(), state.preferred_x, y, wrap_width);
    hit.offset(state.text())
}
