// DOM hooks, colors and the stylesheet for the ring front-end.
// Sizes come from `carousel_core::LayoutConfig` and reach the stylesheet
// through CSS custom properties on the document root.

// Element ids and class names
pub const STYLE_ELEMENT_ID: &str = "carousel-styles";
pub const ITEM_CLASS: &str = "item";
pub const ICON_CLASS: &str = "flag-icon";
pub const DRAGGING_CLASS: &str = "is-dragging"; // grabbing cursor while a drag is open

// Item colors
pub const HIGHLIGHT_COLOR: &str = "#E57200";
pub const DEFAULT_BG: &str = "rgba(209, 213, 219, 0.2)";
pub const DEFAULT_BORDER: &str = "rgba(209, 213, 219, 0.4)";

// Used when the window cannot report its inner width.
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 1024.0;

pub const STYLESHEET: &str = "\
.scene { width: var(--scene-size); height: var(--scene-size); perspective: var(--perspective); }
.world { width: 100%; height: 100%; position: relative; transform-style: preserve-3d; cursor: grab; }
.world.is-dragging { cursor: grabbing; }
.item { color: #fff; position: absolute; top: calc(50% - (var(--item-height) / 2)); left: calc(50% - (var(--item-width) / 2)); width: var(--item-width); height: var(--item-height); display: flex; justify-content: center; align-items: center; gap: var(--gap); border: 1px solid; border-radius: 6px; font-size: var(--font-size); font-weight: bold; cursor: pointer; transition: transform 0.3s ease, background-color 0.3s ease, border-color 0.3s ease; backface-visibility: hidden; user-select: none; }
.flag-icon { width: var(--flag-size); height: var(--flag-size); border-radius: 50%; object-fit: cover; flex-shrink: 0; }
";
