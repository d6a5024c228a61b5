// Host-side tests for the front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use carousel_core::{compute_layout, Catalog};
use constants::*;

fn sample_layout() -> carousel_core::LayoutConfig {
    compute_layout(1280.0, Catalog::default().entries()).0
}

#[test]
fn stylesheet_reads_every_layout_variable() {
    for (name, _) in sample_layout().css_vars() {
        assert!(
            STYLESHEET.contains(&format!("var({name})")),
            "stylesheet never reads {name}"
        );
    }
}

#[test]
fn stylesheet_styles_the_classes_the_dom_uses() {
    for class in [ITEM_CLASS, ICON_CLASS, DRAGGING_CLASS] {
        assert!(STYLESHEET.contains(&format!(".{class}")), "missing rule for .{class}");
    }
    assert!(STYLESHEET.contains("cursor: grabbing"));
}

#[test]
fn highlight_differs_from_resting_colors() {
    assert_eq!(HIGHLIGHT_COLOR, "#E57200");
    assert_ne!(HIGHLIGHT_COLOR, DEFAULT_BG);
    assert_ne!(HIGHLIGHT_COLOR, DEFAULT_BORDER);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fallback_width_uses_full_scale() {
    assert!(FALLBACK_VIEWPORT_WIDTH > carousel_core::COMPACT_BREAKPOINT_PX);
}
