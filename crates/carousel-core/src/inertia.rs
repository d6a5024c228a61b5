//! Post-release coasting with exponential velocity decay.

use crate::gesture::RotationState;
use crate::params::InteractionParams;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coast {
    /// Velocity is still visible; schedule another frame.
    Continue,
    /// Velocity dropped to the epsilon or below and was zeroed.
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inertia {
    pub friction: f64,
    pub epsilon: f64,
}

impl Inertia {
    pub fn from_params(params: &InteractionParams) -> Self {
        Self {
            friction: params.friction,
            epsilon: params.velocity_epsilon,
        }
    }

    /// Whether a release at `velocity` should coast at all.
    #[inline]
    pub fn should_coast(&self, velocity: f64) -> bool {
        velocity.abs() > self.epsilon
    }

    /// One frame: rotate by the current velocity, then decay it.
    ///
    /// A non-finite velocity settles on the spot without moving the ring.
    pub fn step(&self, state: &mut RotationState) -> Coast {
        if !state.velocity.is_finite() {
            state.velocity = 0.0;
            return Coast::Settled;
        }
        state.current_angle += state.velocity;
        state.velocity *= self.friction;
        if self.should_coast(state.velocity) {
            Coast::Continue
        } else {
            state.velocity = 0.0;
            Coast::Settled
        }
    }

    /// Number of frames a coast starting at `v0` runs before settling.
    ///
    /// Counts exactly the steps [`Inertia::step`] would take. Returns 0 when
    /// `v0` would not coast or is not finite, or when the friction is outside
    /// `[0, 1)` and the loop would never settle.
    pub fn steps_to_settle(&self, v0: f64) -> usize {
        if !v0.is_finite() || !self.should_coast(v0) || !(0.0..1.0).contains(&self.friction) {
            return 0;
        }
        let mut state = RotationState {
            velocity: v0,
            ..RotationState::default()
        };
        let mut steps = 1;
        while self.step(&mut state) == Coast::Continue {
            steps += 1;
        }
        steps
    }
}

impl Default for Inertia {
    fn default() -> Self {
        Self::from_params(&InteractionParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_at_3_2_settles_after_68_frames() {
        assert_eq!(Inertia::default().steps_to_settle(3.2), 68);
        assert_eq!(Inertia::default().steps_to_settle(-3.2), 68);
    }

    #[test]
    fn slow_release_does_not_coast() {
        let inertia = Inertia::default();
        assert!(!inertia.should_coast(0.1));
        assert!(!inertia.should_coast(-0.05));
        assert_eq!(inertia.steps_to_settle(0.1), 0);
    }

    #[test]
    fn step_applies_then_decays() {
        let inertia = Inertia::default();
        let mut state = RotationState {
            current_angle: 10.0,
            velocity: 2.0,
            ..RotationState::default()
        };
        assert_eq!(inertia.step(&mut state), Coast::Continue);
        assert!((state.current_angle - 12.0).abs() < 1e-12);
        assert!((state.velocity - 1.9).abs() < 1e-12);
    }

    #[test]
    fn non_finite_velocity_settles_at_once() {
        let inertia = Inertia::default();
        assert_eq!(inertia.steps_to_settle(f64::INFINITY), 0);
        assert_eq!(inertia.steps_to_settle(f64::NEG_INFINITY), 0);
        assert_eq!(inertia.steps_to_settle(f64::NAN), 0);

        let mut state = RotationState {
            current_angle: 30.0,
            velocity: f64::INFINITY,
            ..RotationState::default()
        };
        assert_eq!(inertia.step(&mut state), Coast::Settled);
        assert_eq!(state.velocity, 0.0);
        assert_eq!(state.current_angle, 30.0);
    }

    #[test]
    fn final_step_zeroes_velocity() {
        let inertia = Inertia::default();
        let mut state = RotationState {
            velocity: 0.105,
            ..RotationState::default()
        };
        assert_eq!(inertia.step(&mut state), Coast::Settled);
        assert_eq!(state.velocity, 0.0);
        assert!((state.current_angle - 0.105).abs() < 1e-12);
    }
}
