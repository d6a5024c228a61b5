// Property tests for ring placement and responsive scaling.

use carousel_core::{
    compute_layout, placement_angle, scale_for_viewport, CatalogEntry, LayoutBase,
};
use proptest::prelude::*;

fn entries(n: usize) -> Vec<CatalogEntry> {
    (0..n)
        .map(|i| CatalogEntry::new(format!("c{i}"), format!("Country {i}")))
        .collect()
}

proptest! {
    #[test]
    fn placements_partition_the_circle(n in 1usize..64, width in 0.0f64..4000.0) {
        let (_, placements) = compute_layout(width, &entries(n));
        prop_assert_eq!(placements.len(), n);
        let step = 360.0 / n as f64;
        for (i, p) in placements.iter().enumerate() {
            prop_assert_eq!(p.angle_degrees, step * i as f64);
            prop_assert_eq!(&p.entry.identifier, &format!("c{i}"));
            prop_assert!(p.angle_degrees < 360.0);
        }
        for pair in placements.windows(2) {
            prop_assert!(pair[0].angle_degrees < pair[1].angle_degrees);
        }
    }

    #[test]
    fn compact_below_breakpoint(width in 0.0f64..=600.0) {
        let (config, _) = compute_layout(width, &entries(3));
        prop_assert_eq!(config.scale_factor, 0.7);
    }

    #[test]
    fn full_scale_above_breakpoint(width in 600.001f64..10_000.0) {
        let (config, _) = compute_layout(width, &entries(3));
        prop_assert_eq!(config.scale_factor, 1.0);
    }

    #[test]
    fn pixel_fields_scale_linearly(scale in 0.1f64..3.0) {
        let base = LayoutBase::default();
        let config = base.scaled(scale);
        prop_assert!((config.ring_radius - base.ring_radius * scale).abs() < 1e-9);
        prop_assert!((config.perspective - base.perspective * scale).abs() < 1e-9);
        prop_assert!((config.font_size - base.font_size * scale).abs() < 1e-9);
        prop_assert!((config.gap - base.gap * scale).abs() < 1e-9);
        for (name, value) in config.css_vars() {
            prop_assert!(value > 0.0, "{} should be positive", name);
        }
    }
}

#[test]
fn layout_is_deterministic() {
    let list = entries(15);
    assert_eq!(compute_layout(800.0, &list), compute_layout(800.0, &list));
}

#[test]
fn custom_breakpoint_is_honoured() {
    let base = LayoutBase {
        compact_breakpoint_px: 900.0,
        compact_scale: 0.5,
        ..LayoutBase::default()
    };
    assert_eq!(scale_for_viewport(&base, 850.0), 0.5);
    assert_eq!(scale_for_viewport(&base, 901.0), 1.0);
    let (config, _) = base.compute(850.0, &entries(2));
    assert_eq!(config.ring_radius, 110.0);
}

#[test]
fn placement_angle_handles_empty_ring() {
    assert_eq!(placement_angle(0, 0), 0.0);
    assert_eq!(placement_angle(3, 4), 270.0);
}
