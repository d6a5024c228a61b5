//! The carousel: one instance per mounted ring.
//!
//! Owns the rotation state, the current layout and every pending frame or
//! timer, and sequences them against the host. All entry points are plain
//! `&mut self` methods; the host calls them from its event, frame and timer
//! callbacks, strictly one at a time.
//!
//! Ordering rules:
//! - `drag_start` cancels any pending inertia frame, the tap grace timer and
//!   the relayout timer before opening the new session.
//! - A relayout never runs while a session is open or while the threshold
//!   flag of the last session is still live. One that comes due then is
//!   deferred: re-armed for a full window at `drag_end`, or run as soon as
//!   the tap grace window clears the flag.

use crate::catalog::Catalog;
use crate::constants::FULL_SCALE;
use crate::debounce::Debouncer;
use crate::gesture::{Interaction, RotationState};
use crate::host::{FrameId, Host, TimerKind};
use crate::inertia::{Coast, Inertia};
use crate::layout::{ItemPlacement, LayoutConfig};
use crate::params::CarouselParams;

/// Receives the identifier of a tapped item.
pub type SelectCallback = Box<dyn FnMut(&str)>;

pub struct Carousel<H: Host> {
    host: H,
    catalog: Catalog,
    params: CarouselParams,
    interaction: Interaction,
    inertia: Inertia,
    layout: LayoutConfig,
    placements: Vec<ItemPlacement>,
    pending_frame: Option<FrameId>,
    relayout: Debouncer,
    tap_grace: Debouncer,
    relayout_deferred: bool,
    rebuilds: u64,
    on_select: SelectCallback,
}

impl<H: Host> Carousel<H> {
    pub fn new(
        host: H,
        catalog: Catalog,
        params: CarouselParams,
        on_select: SelectCallback,
    ) -> Self {
        let interaction = Interaction::new(params.interaction.clone());
        let inertia = Inertia::from_params(&params.interaction);
        let relayout = Debouncer::new(TimerKind::Relayout, params.interaction.relayout_debounce);
        let tap_grace = Debouncer::new(TimerKind::TapGrace, params.interaction.tap_grace);
        let layout = params.layout.scaled(FULL_SCALE);
        let mut carousel = Self {
            host,
            catalog,
            params,
            interaction,
            inertia,
            layout,
            placements: Vec::new(),
            pending_frame: None,
            relayout,
            tap_grace,
            relayout_deferred: false,
            rebuilds: 0,
            on_select,
        };
        carousel.rebuild();
        carousel
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn placements(&self) -> &[ItemPlacement] {
        &self.placements
    }

    pub fn state(&self) -> &RotationState {
        self.interaction.state()
    }

    pub fn rotation(&self) -> f64 {
        self.interaction.state().current_angle
    }

    pub fn velocity(&self) -> f64 {
        self.interaction.state().velocity
    }

    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    pub fn is_coasting(&self) -> bool {
        self.pending_frame.is_some()
    }

    pub fn accepts_tap(&self) -> bool {
        self.interaction.accepts_tap()
    }

    pub fn relayout_pending(&self) -> bool {
        self.relayout.is_pending() || self.relayout_deferred
    }

    /// How many times the item elements have been built, including the first.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Recomputes the layout from the current viewport and replaces every
    /// item element. Rotation and any in-flight inertia are kept.
    pub fn rebuild(&mut self) {
        let width = self.host.viewport_width();
        let (layout, placements) = self.params.layout.compute(width, self.catalog.entries());
        self.layout = layout;
        self.placements = placements;
        self.host.rebuild(&self.layout, &self.placements);
        // Old elements are gone; a stale drag mark must not eat the first tap.
        self.interaction.clear_tap_guard();
        self.host.apply_rotation(self.rotation());
        self.rebuilds += 1;
        log::debug!(
            "[layout] rebuilt {} items at scale {} (width {}px)",
            self.placements.len(),
            self.layout.scale_factor,
            width
        );
    }

    // ---------------- Pointer input ----------------

    pub fn drag_start(&mut self, x: f64) {
        if self.interaction.is_dragging() {
            // A second start without an end: drop the old session's listeners.
            self.host.detach_drag_listeners();
        }
        self.cancel_inertia();
        self.tap_grace.cancel(&mut self.host);
        if self.relayout.cancel(&mut self.host) {
            self.relayout_deferred = true;
        }
        self.interaction.begin(x);
        self.host.set_dragging(true);
        self.host.attach_drag_listeners();
        log::debug!("[drag] start at x={x}");
    }

    pub fn drag_move(&mut self, x: f64) {
        if let Some(angle) = self.interaction.advance(x) {
            self.host.apply_rotation(angle);
        }
    }

    pub fn drag_end(&mut self) {
        let Some(release) = self.interaction.release() else {
            return;
        };
        self.host.detach_drag_listeners();
        self.host.set_dragging(false);
        log::debug!(
            "[drag] end velocity={:.3} dragged={}",
            release.velocity,
            release.dragged
        );

        if self.inertia.should_coast(release.velocity) {
            self.coast_step();
        } else {
            self.interaction.halt();
        }

        if !self.tap_grace.trigger(&mut self.host) {
            // The guard then holds until the next drag_start resets it.
            log::warn!("[drag] host refused the tap grace timer");
        }

        if self.relayout_deferred {
            self.relayout_deferred = false;
            self.schedule_relayout();
        }
    }

    /// Click on item `index`. Fires the selection callback only for a tap.
    pub fn item_activated(&mut self, index: usize) {
        if !self.interaction.accepts_tap() {
            log::debug!("[select] click on item {index} suppressed after drag");
            return;
        }
        let Some(entry) = self.placements.get(index).map(|p| &p.entry) else {
            log::warn!("[select] click on unknown item {index}");
            return;
        };
        log::info!("[select] {}", entry.identifier);
        (self.on_select)(&entry.identifier);
    }

    /// Pointer entered or left item `index`. Purely presentational.
    pub fn item_hovered(&mut self, index: usize, hovered: bool) {
        if index < self.placements.len() {
            self.host.set_highlight(index, hovered);
        }
    }

    // ---------------- Host callbacks ----------------

    /// Animation frame delivered by the host.
    pub fn frame(&mut self) {
        if self.pending_frame.take().is_none() {
            return;
        }
        if self.interaction.is_dragging() {
            return;
        }
        self.coast_step();
    }

    /// Viewport resized or changed orientation.
    pub fn viewport_changed(&mut self) {
        if self.interaction.is_dragging() {
            self.relayout_deferred = true;
            return;
        }
        self.schedule_relayout();
    }

    pub fn timer_fired(&mut self, kind: TimerKind) {
        match kind {
            TimerKind::TapGrace => {
                if !self.tap_grace.expire() {
                    return;
                }
                self.interaction.clear_tap_guard();
                if self.relayout_deferred && !self.interaction.is_dragging() {
                    self.relayout_deferred = false;
                    self.rebuild();
                }
            }
            TimerKind::Relayout => {
                if !self.relayout.expire() {
                    return;
                }
                if self.relayout_blocked() {
                    log::debug!("[viewport] relayout deferred until the gesture settles");
                    self.relayout_deferred = true;
                } else {
                    self.rebuild();
                }
            }
        }
    }

    /// Cancels every pending frame and timer and closes any open session.
    /// The carousel stays usable; the host decides whether to drop it.
    pub fn shutdown(&mut self) {
        if self.interaction.is_dragging() {
            self.interaction.release();
            self.host.detach_drag_listeners();
            self.host.set_dragging(false);
        }
        self.cancel_inertia();
        self.tap_grace.cancel(&mut self.host);
        self.relayout.cancel(&mut self.host);
        self.relayout_deferred = false;
        self.interaction.clear_tap_guard();
    }

    // ---------------- Internals ----------------

    fn coast_step(&mut self) {
        let coast = self.inertia.step(self.interaction.state_mut());
        self.host.apply_rotation(self.rotation());
        if coast == Coast::Settled {
            log::debug!("[inertia] settled at {:.2}deg", self.rotation());
            return;
        }
        self.pending_frame = self.host.request_frame();
        if self.pending_frame.is_none() {
            log::warn!("[inertia] host refused a frame; settling early");
            self.interaction.halt();
        }
    }

    fn cancel_inertia(&mut self) {
        if let Some(id) = self.pending_frame.take() {
            self.host.cancel_frame(id);
        }
        self.interaction.halt();
    }

    /// A rebuild clears the threshold flag, so it has to wait while one is live.
    fn relayout_blocked(&self) -> bool {
        self.interaction.is_dragging() || !self.interaction.accepts_tap()
    }

    fn schedule_relayout(&mut self) {
        if !self.relayout.trigger(&mut self.host) {
            if self.relayout_blocked() {
                self.relayout_deferred = true;
            } else {
                self.rebuild();
            }
        }
    }
}
