//! Host collaborator: layout, repaint, animation and timer services.
//!
//! A text area never owns an event loop. Everything asynchronous goes through
//! a [`Host`]: it schedules relayouts and repaints, interpolates the visual
//! scroll offsets and fires timers back into the widget via
//! [`TextArea::on_timer`](super::textarea::TextArea::on_timer).

use std::time::Duration;

use super::shaping::TextShaper;
use super::textarea::TextArea;

/// Scroll axis of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollAxis {
    Horizontal,
    Vertical,
}

/// Easing curve for scroll animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the curve
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) * 0.5)
                }
            }
        }
    }
}

/// Timers a text area can own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Cursor blink toggle
    Blink,
    /// Autoscroll tick while dragging outside the viewport
    DragScroll,
}

/// Opaque handle returned by [`Host::set_timer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Interpolation of one visual scroll offset toward its logical value.
///
/// Animations are fire-and-forget: a newer animation on the same axis
/// replaces an in-flight one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    pub axis: ScrollAxis,
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub easing: Easing,
}

impl ScrollAnimation {
    /// Interpolated value after `elapsed`
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        };
        self.from + (self.to - self.from) * self.easing.sample(progress)
    }
}

/// Services the embedding window system provides to a text area
pub trait Host {
    /// Widget bounds or scroll extents changed
    fn request_relayout(&mut self);

    /// Schedule a repaint
    fn request_refresh(&mut self);

    /// Start (or retarget) a visual scroll animation
    fn animate(&mut self, animation: ScrollAnimation);

    /// Arm a one-shot timer; the host calls back `on_timer` when it fires
    fn set_timer(&mut self, delay: Duration, kind: TimerKind) -> TimerHandle;

    /// Disarm a timer. Unknown or already-fired handles are ignored.
    fn cancel_timer(&mut self, handle: TimerHandle);
}

/// Timer armed on a [`HeadlessHost`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    pub handle: TimerHandle,
    pub delay: Duration,
    pub kind: TimerKind,
}

/// Host without a window: records every request so it can be inspected,
/// and lets the caller fire timers and settle animations explicitly.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    pub relayouts: usize,
    pub refreshes: usize,
    pub animations: Vec<ScrollAnimation>,
    pub timers: Vec<PendingTimer>,
    next_timer: u64,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// First armed timer of `kind`
    pub fn pending(&self, kind: TimerKind) -> Option<PendingTimer> {
        self.timers.iter().copied().find(|t| t.kind == kind)
    }

    /// Check if any timer is armed
    pub fn has_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Fire the first armed timer of `kind`. Returns false if none is armed.
    pub fn fire<S: TextShaper>(&mut self, kind: TimerKind, area: &mut TextArea<S>) -> bool {
        let Some(index) = self.timers.iter().position(|t| t.kind == kind) else {
            return false;
        };
        let timer = self.timers.remove(index);
        area.on_timer(timer.handle, self);
        true
    }

    /// Jump every pending animation to its end value
    pub fn settle<S: TextShaper>(&mut self, area: &mut TextArea<S>) {
        for animation in self.animations.drain(..) {
            area.set_visual_scroll(animation.axis, animation.to);
        }
    }
}

impl Host for HeadlessHost {
    fn request_relayout(&mut self) {
        self.relayouts += 1;
    }

    fn request_refresh(&mut self) {
        self.refreshes += 1;
    }

    fn animate(&mut self, animation: ScrollAnimation) {
        self.animations.retain(|a| a.axis != animation.axis);
        self.animations.push(animation);
    }

    fn set_timer(&mut self, delay: Duration, kind: TimerKind) -> TimerHandle {
        self.next_timer += 1;
        let handle = TimerHandle(self.next_timer);
        self.timers.push(PendingTimer {
            handle,
            delay,
            kind,
        });
        handle
    }

    fn cancel_timer(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }
}
