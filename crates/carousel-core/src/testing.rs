//! Deterministic host for driving a [`Carousel`] without a browser.
//!
//! [`FakeHost`] records what the carousel asked of it and keeps frames and
//! timers in queues; [`Harness`] owns a carousel on top of it and advances a
//! virtual clock, delivering due timers and queued frames in order.

use crate::carousel::Carousel;
use crate::catalog::Catalog;
use crate::host::{
    FrameId, FrameScheduler, PointerSource, RingSurface, TimerId, TimerKind, TimerScheduler,
    Viewport,
};
use crate::layout::{ItemPlacement, LayoutConfig};
use crate::params::CarouselParams;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingTimer {
    id: TimerId,
    kind: TimerKind,
    due_ms: u64,
}

#[derive(Debug, Default)]
pub struct FakeHost {
    pub width: f64,
    pub now_ms: u64,
    next_id: u64,
    frames: Vec<FrameId>,
    timers: Vec<PendingTimer>,
    /// Every rotation the carousel rendered, in order.
    pub rotations: Vec<f64>,
    pub rebuilds: usize,
    pub last_layout: Option<LayoutConfig>,
    pub item_ids: Vec<String>,
    pub highlighted: Vec<bool>,
    pub dragging: bool,
    pub drag_listeners_attached: bool,
    pub drag_listener_attaches: usize,
    pub frames_cancelled: usize,
    /// Makes `request_frame` fail, as a host without rAF would.
    pub refuse_frames: bool,
    /// Makes `start_timer` fail.
    pub refuse_timers: bool,
}

impl FakeHost {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn pending_timers(&self, kind: TimerKind) -> usize {
        self.timers.iter().filter(|t| t.kind == kind).count()
    }

    pub fn last_rotation(&self) -> Option<f64> {
        self.rotations.last().copied()
    }

    fn take_frame(&mut self) -> Option<FrameId> {
        if self.frames.is_empty() {
            None
        } else {
            Some(self.frames.remove(0))
        }
    }

    fn take_due_timer(&mut self, until_ms: u64) -> Option<PendingTimer> {
        let (pos, _) = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.id.0))?;
        Some(self.timers.remove(pos))
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Viewport for FakeHost {
    fn viewport_width(&self) -> f64 {
        self.width
    }
}

impl FrameScheduler for FakeHost {
    fn request_frame(&mut self) -> Option<FrameId> {
        if self.refuse_frames {
            return None;
        }
        let id = FrameId(self.next_id());
        self.frames.push(id);
        Some(id)
    }

    fn cancel_frame(&mut self, id: FrameId) {
        let before = self.frames.len();
        self.frames.retain(|f| *f != id);
        if self.frames.len() != before {
            self.frames_cancelled += 1;
        }
    }
}

impl TimerScheduler for FakeHost {
    fn start_timer(&mut self, kind: TimerKind, delay: Duration) -> Option<TimerId> {
        if self.refuse_timers {
            return None;
        }
        let id = TimerId(self.next_id());
        self.timers.push(PendingTimer {
            id,
            kind,
            due_ms: self.now_ms + delay.as_millis() as u64,
        });
        Some(id)
    }

    fn cancel_timer(&mut self, id: TimerId) {
        self.timers.retain(|t| t.id != id);
    }
}

impl PointerSource for FakeHost {
    fn attach_drag_listeners(&mut self) {
        self.drag_listeners_attached = true;
        self.drag_listener_attaches += 1;
    }

    fn detach_drag_listeners(&mut self) {
        self.drag_listeners_attached = false;
    }
}

impl RingSurface for FakeHost {
    fn rebuild(&mut self, layout: &LayoutConfig, placements: &[ItemPlacement]) {
        self.rebuilds += 1;
        self.last_layout = Some(layout.clone());
        self.item_ids = placements
            .iter()
            .map(|p| p.entry.identifier.clone())
            .collect();
        self.highlighted = vec![false; placements.len()];
    }

    fn apply_rotation(&mut self, angle_degrees: f64) {
        self.rotations.push(angle_degrees);
    }

    fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    fn set_highlight(&mut self, index: usize, highlighted: bool) {
        if let Some(slot) = self.highlighted.get_mut(index) {
            *slot = highlighted;
        }
    }
}

pub struct Harness {
    pub carousel: Carousel<FakeHost>,
    selections: Rc<RefCell<Vec<String>>>,
}

impl Harness {
    pub fn new(width: f64) -> Self {
        Self::with_catalog(Catalog::default(), width)
    }

    pub fn with_catalog(catalog: Catalog, width: f64) -> Self {
        Self::with_params(catalog, CarouselParams::default(), width)
    }

    pub fn with_params(catalog: Catalog, params: CarouselParams, width: f64) -> Self {
        let selections = Rc::new(RefCell::new(Vec::new()));
        let sink = selections.clone();
        let carousel = Carousel::new(
            FakeHost::new(width),
            catalog,
            params,
            Box::new(move |id: &str| sink.borrow_mut().push(id.to_string())),
        );
        Self {
            carousel,
            selections,
        }
    }

    pub fn host(&self) -> &FakeHost {
        self.carousel.host()
    }

    pub fn host_mut(&mut self) -> &mut FakeHost {
        self.carousel.host_mut()
    }

    pub fn selections(&self) -> Vec<String> {
        self.selections.borrow().clone()
    }

    /// Pointer down at `xs[0]`, one move per remaining point, pointer up.
    pub fn drag(&mut self, xs: &[f64]) {
        let Some((first, rest)) = xs.split_first() else {
            return;
        };
        self.carousel.drag_start(*first);
        for x in rest {
            self.carousel.drag_move(*x);
        }
        self.carousel.drag_end();
    }

    /// A gesture over item `index` followed by the click the browser
    /// synthesises after pointer up.
    pub fn gesture_then_click(&mut self, xs: &[f64], index: usize) {
        self.drag(xs);
        self.carousel.item_activated(index);
    }

    pub fn tap(&mut self, index: usize) {
        self.gesture_then_click(&[100.0], index);
    }

    /// Delivers one queued animation frame. Returns `false` if none was queued.
    pub fn run_frame(&mut self) -> bool {
        match self.carousel.host_mut().take_frame() {
            Some(_) => {
                self.carousel.frame();
                true
            }
            None => false,
        }
    }

    /// Delivers frames until the queue drains or `limit` frames have run.
    pub fn run_frames(&mut self, limit: usize) -> usize {
        let mut ran = 0;
        while ran < limit && self.run_frame() {
            ran += 1;
        }
        ran
    }

    /// Moves the virtual clock forward, firing due timers in deadline order.
    pub fn advance(&mut self, ms: u64) {
        let until = self.host().now_ms + ms;
        while let Some(timer) = self.carousel.host_mut().take_due_timer(until) {
            self.carousel.host_mut().now_ms = timer.due_ms;
            self.carousel.timer_fired(timer.kind);
        }
        self.carousel.host_mut().now_ms = until;
    }

    pub fn resize(&mut self, width: f64) {
        self.carousel.host_mut().width = width;
        self.carousel.viewport_changed();
    }
}
