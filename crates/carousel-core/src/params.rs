//! Tunable parameters with defaults taken from `constants.rs`.
//!
//! Each carousel owns its own copy, so two rings on one page can be tuned
//! independently.

use crate::constants::*;
use std::time::Duration;

/// Full-scale ring dimensions plus the responsive breakpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutBase {
    pub scene_size: f64,
    pub perspective: f64,
    pub item_width: f64,
    pub item_height: f64,
    pub font_size: f64,
    pub icon_size: f64,
    pub gap: f64,
    pub ring_radius: f64,
    pub compact_breakpoint_px: f64,
    pub compact_scale: f64,
}

impl Default for LayoutBase {
    fn default() -> Self {
        Self {
            scene_size: BASE_SCENE_SIZE,
            perspective: BASE_PERSPECTIVE,
            item_width: BASE_ITEM_WIDTH,
            item_height: BASE_ITEM_HEIGHT,
            font_size: BASE_FONT_SIZE,
            icon_size: BASE_ICON_SIZE,
            gap: BASE_GAP,
            ring_radius: BASE_RING_RADIUS,
            compact_breakpoint_px: COMPACT_BREAKPOINT_PX,
            compact_scale: COMPACT_SCALE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InteractionParams {
    pub drag_threshold_px: f64,
    pub rotation_sensitivity: f64,
    pub friction: f64,
    pub velocity_epsilon: f64,
    pub tap_grace: Duration,
    pub relayout_debounce: Duration,
}

impl Default for InteractionParams {
    fn default() -> Self {
        Self {
            drag_threshold_px: DRAG_THRESHOLD_PX,
            rotation_sensitivity: ROTATION_SENSITIVITY,
            friction: FRICTION,
            velocity_epsilon: VELOCITY_EPSILON,
            tap_grace: Duration::from_millis(TAP_GRACE_MS),
            relayout_debounce: Duration::from_millis(RELAYOUT_DEBOUNCE_MS),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CarouselParams {
    pub layout: LayoutBase,
    pub interaction: InteractionParams,
}
