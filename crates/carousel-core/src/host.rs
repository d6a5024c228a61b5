//! Capabilities a carousel needs from whatever is hosting it.
//!
//! The browser front-end implements these on top of `web-sys`; tests use
//! `testing::FakeHost`. Every callback the host delivers
//! back (frame ticks, timer expiries, pointer events) arrives as a method call
//! on [`Carousel`](crate::Carousel), one at a time.

use crate::layout::{ItemPlacement, LayoutConfig};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Which timer expired. A carousel has at most one of each pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Relayout,
    TapGrace,
}

pub trait Viewport {
    /// Current layout viewport width in CSS pixels.
    fn viewport_width(&self) -> f64;
}

pub trait FrameScheduler {
    /// Asks for `Carousel::frame` before the next paint. `None` if the host
    /// could not schedule one.
    fn request_frame(&mut self) -> Option<FrameId>;
    /// Must be a no-op for ids that already fired or were cancelled.
    fn cancel_frame(&mut self, id: FrameId);
}

pub trait TimerScheduler {
    fn start_timer(&mut self, kind: TimerKind, delay: Duration) -> Option<TimerId>;
    /// Must be a no-op for ids that already fired or were cancelled.
    fn cancel_timer(&mut self, id: TimerId);
}

/// Move/end listeners that only exist while a drag session is open.
pub trait PointerSource {
    fn attach_drag_listeners(&mut self);
    fn detach_drag_listeners(&mut self);
}

/// The visual ring.
pub trait RingSurface {
    /// Destroys every item element and creates one per placement. Per-item
    /// listeners must be bound to the new elements.
    fn rebuild(&mut self, layout: &LayoutConfig, placements: &[ItemPlacement]);
    fn apply_rotation(&mut self, angle_degrees: f64);
    fn set_dragging(&mut self, dragging: bool);
    fn set_highlight(&mut self, index: usize, highlighted: bool);
}

pub trait Host: Viewport + FrameScheduler + TimerScheduler + PointerSource + RingSurface {}

impl<T> Host for T where
    T: Viewport + FrameScheduler + TimerScheduler + PointerSource + RingSurface
{
}
