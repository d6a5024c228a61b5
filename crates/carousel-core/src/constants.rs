// Shared layout and interaction tuning constants for the selection ring.

// Ring geometry at full scale (CSS pixels)
pub const BASE_SCENE_SIZE: f64 = 250.0; // square scene box the ring sits in
pub const BASE_PERSPECTIVE: f64 = 1000.0; // CSS perspective depth
pub const BASE_ITEM_WIDTH: f64 = 90.0;
pub const BASE_ITEM_HEIGHT: f64 = 50.0;
pub const BASE_FONT_SIZE: f64 = 14.0;
pub const BASE_ICON_SIZE: f64 = 19.0;
pub const BASE_GAP: f64 = 7.0; // spacing between icon and label
pub const BASE_RING_RADIUS: f64 = 220.0; // translateZ distance of every item

// Responsive scaling (single breakpoint)
pub const COMPACT_BREAKPOINT_PX: f64 = 600.0; // widths <= this use the compact scale
pub const COMPACT_SCALE: f64 = 0.7;
pub const FULL_SCALE: f64 = 1.0;

// Interaction
pub const DRAG_THRESHOLD_PX: f64 = 5.0; // net displacement that turns a tap into a drag
pub const ROTATION_SENSITIVITY: f64 = 0.4; // degrees per pixel of pointer travel
pub const FRICTION: f64 = 0.95; // per-frame velocity multiplier while coasting
pub const VELOCITY_EPSILON: f64 = 0.1; // |velocity| at or below this settles the ring

// Timers (milliseconds)
pub const TAP_GRACE_MS: u64 = 50; // threshold flag stays readable this long after release
pub const RELAYOUT_DEBOUNCE_MS: u64 = 150; // quiet window before a resize rebuild

// Decorative icon resource, keyed by catalog identifier
pub const ICON_URL_PREFIX: &str = "https://hatscripts.github.io/circle-flags/flags/";
pub const ICON_URL_SUFFIX: &str = ".svg";
