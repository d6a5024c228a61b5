//! Drag tracking and tap/drag classification.
//!
//! [`Interaction`] holds the ring's [`RotationState`] and, while a pointer is
//! down, the open [`GestureSession`]. It knows nothing about timers or the
//! DOM; the [`Carousel`](crate::Carousel) sequences those around it.

use crate::params::InteractionParams;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationState {
    /// Accumulated rotation in degrees. Never wrapped.
    pub current_angle: f64,
    /// Degrees applied per move event while dragging, per frame while coasting.
    pub velocity: f64,
    pub is_dragging: bool,
    /// Once set within a session it stays set until the next drag-start or
    /// until the tap grace window after release elapses.
    pub has_dragged_past_threshold: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    pub start_x: f64,
    pub last_x: f64,
}

/// What a release leaves behind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    pub velocity: f64,
    pub dragged: bool,
}

#[derive(Clone, Debug)]
pub struct Interaction {
    params: InteractionParams,
    state: RotationState,
    session: Option<GestureSession>,
}

impl Interaction {
    pub fn new(params: InteractionParams) -> Self {
        Self {
            params,
            state: RotationState::default(),
            session: None,
        }
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut RotationState {
        &mut self.state
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    /// A click counts as a selection only while this holds.
    pub fn accepts_tap(&self) -> bool {
        !self.state.has_dragged_past_threshold
    }

    /// Opens a fresh session at `x`. Any momentum is discarded.
    pub fn begin(&mut self, x: f64) {
        self.session = Some(GestureSession {
            start_x: x,
            last_x: x,
        });
        self.state.velocity = 0.0;
        self.state.is_dragging = true;
        self.state.has_dragged_past_threshold = false;
    }

    /// Applies one move event. Returns the new angle, or `None` when no
    /// session is open.
    pub fn advance(&mut self, x: f64) -> Option<f64> {
        if !self.state.is_dragging || !x.is_finite() {
            return None;
        }
        let session = self.session.as_mut()?;
        if (x - session.start_x).abs() > self.params.drag_threshold_px {
            self.state.has_dragged_past_threshold = true;
        }
        let delta_x = x - session.last_x;
        self.state.velocity = delta_x * self.params.rotation_sensitivity;
        self.state.current_angle += self.state.velocity;
        session.last_x = x;
        Some(self.state.current_angle)
    }

    /// Closes the session. `None` when nothing was being dragged.
    pub fn release(&mut self) -> Option<Release> {
        if !self.state.is_dragging {
            return None;
        }
        self.state.is_dragging = false;
        self.session = None;
        Some(Release {
            velocity: self.state.velocity,
            dragged: self.state.has_dragged_past_threshold,
        })
    }

    pub fn clear_tap_guard(&mut self) {
        self.state.has_dragged_past_threshold = false;
    }

    pub fn halt(&mut self) {
        self.state.velocity = 0.0;
    }
}
