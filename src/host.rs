//! Browser implementation of the carousel host capabilities.

use crate::dom;
use crate::events::pointer::{wire_drag_listeners, wire_item_listeners, wire_ring_listeners};
use crate::events::viewport::wire_viewport_listeners;
use crate::events::{Listener, ListenerSet};
use crate::frame::Ticks;
use carousel_core::{
    ring_transform, Carousel, FrameId, FrameScheduler, ItemPlacement, LayoutConfig,
    PointerSource, RingSurface, TimerId, TimerKind, TimerScheduler, Viewport,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use web_sys as web;

pub type SharedCarousel = Rc<RefCell<Carousel<WebHost>>>;
pub type WeakCarousel = Weak<RefCell<Carousel<WebHost>>>;

/// Runs `f` against the carousel if it is still alive and not already busy.
///
/// DOM callbacks only hold a `Weak`; the `LanguageCarousel` handle owns the
/// carousel.
pub fn with_carousel(weak: &WeakCarousel, f: impl FnOnce(&mut Carousel<WebHost>)) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let Ok(mut carousel) = shared.try_borrow_mut() else {
        log::warn!("[carousel] event arrived while busy; dropped");
        return;
    };
    f(&mut carousel);
}

pub struct WebHost {
    window: web::Window,
    document: web::Document,
    world: web::HtmlElement,
    weak: WeakCarousel,
    ticks: Ticks,
    items: Vec<web::HtmlElement>,
    item_listeners: Vec<Listener>,
    drag_listeners: ListenerSet,
    root_listeners: ListenerSet,
}

impl WebHost {
    pub fn new(
        window: web::Window,
        document: web::Document,
        world: web::HtmlElement,
        weak: WeakCarousel,
    ) -> Self {
        let ticks = Ticks::new(&weak);
        Self {
            window,
            document,
            world,
            weak,
            ticks,
            items: Vec::new(),
            item_listeners: Vec::new(),
            drag_listeners: ListenerSet::default(),
            root_listeners: ListenerSet::default(),
        }
    }

    /// Drag-start on the ring plus viewport change notifications.
    pub fn attach_root_listeners(&mut self) -> anyhow::Result<()> {
        if self.root_listeners.is_attached() {
            return Ok(());
        }
        wire_ring_listeners(&self.world, &self.weak, &mut self.root_listeners)?;
        wire_viewport_listeners(&self.window, &self.weak, &mut self.root_listeners)?;
        Ok(())
    }

    pub fn detach_root_listeners(&mut self) {
        self.root_listeners.retire();
        self.root_listeners.purge();
    }

    fn build_items(
        &mut self,
        layout: &LayoutConfig,
        placements: &[ItemPlacement],
    ) -> anyhow::Result<()> {
        self.item_listeners.clear();
        self.items.clear();
        self.world.set_inner_html("");
        dom::apply_layout_vars(&self.document, layout)?;

        for (index, placement) in placements.iter().enumerate() {
            let item = dom::create_item(&self.document, layout, placement)?;
            wire_item_listeners(&item, index, &self.weak, &mut self.item_listeners)?;
            self.world.append_child(&item).map_err(dom::js_err)?;
            self.items.push(item);
        }
        dom::ensure_stylesheet(&self.document)
    }
}

impl Viewport for WebHost {
    fn viewport_width(&self) -> f64 {
        dom::viewport_width(&self.window)
    }
}

impl FrameScheduler for WebHost {
    fn request_frame(&mut self) -> Option<FrameId> {
        match self.window.request_animation_frame(self.ticks.frame()) {
            Ok(handle) => Some(FrameId(u64::from(handle as u32))),
            Err(e) => {
                log::error!("[inertia] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, id: FrameId) {
        _ = self.window.cancel_animation_frame(id.0 as i32);
    }
}

impl TimerScheduler for WebHost {
    fn start_timer(&mut self, kind: TimerKind, delay: Duration) -> Option<TimerId> {
        let ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(self.ticks.timer(kind), ms)
        {
            Ok(handle) => Some(TimerId(u64::from(handle as u32))),
            Err(e) => {
                log::error!("[timer] setTimeout for {:?} failed: {:?}", kind, e);
                None
            }
        }
    }

    fn cancel_timer(&mut self, id: TimerId) {
        self.window.clear_timeout_with_handle(id.0 as i32);
    }
}

impl PointerSource for WebHost {
    fn attach_drag_listeners(&mut self) {
        // The previous session's closures have finished running by now.
        self.drag_listeners.purge();
        if self.drag_listeners.is_attached() {
            return;
        }
        if let Err(e) = wire_drag_listeners(&self.window, &self.weak, &mut self.drag_listeners) {
            log::error!("[drag] could not register move/end listeners: {e:?}");
            self.drag_listeners.retire();
        }
    }

    fn detach_drag_listeners(&mut self) {
        self.drag_listeners.retire();
    }
}

impl RingSurface for WebHost {
    fn rebuild(&mut self, layout: &LayoutConfig, placements: &[ItemPlacement]) {
        let started = Instant::now();
        match self.build_items(layout, placements) {
            Ok(()) => log::debug!(
                "[layout] built {} items in {:?}",
                self.items.len(),
                started.elapsed()
            ),
            Err(e) => log::error!("[layout] rebuild failed: {e:?}"),
        }
    }

    fn apply_rotation(&mut self, angle_degrees: f64) {
        _ = self
            .world
            .style()
            .set_property("transform", &ring_transform(angle_degrees));
    }

    fn set_dragging(&mut self, dragging: bool) {
        _ = self
            .world
            .class_list()
            .toggle_with_force(crate::constants::DRAGGING_CLASS, dragging);
    }

    fn set_highlight(&mut self, index: usize, highlighted: bool) {
        if let Some(item) = self.items.get(index) {
            dom::set_item_colors(item, highlighted);
        }
    }
}
