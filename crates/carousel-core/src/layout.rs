//! Ring geometry: a pure function of viewport width and item count.

use crate::catalog::CatalogEntry;
use crate::constants::FULL_SCALE;
use crate::params::LayoutBase;

/// Pixel sizes for one rebuild. Always replaced wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    pub scale_factor: f64,
    pub scene_size: f64,
    pub perspective: f64,
    pub ring_radius: f64,
    pub item_width: f64,
    pub item_height: f64,
    pub font_size: f64,
    pub icon_size: f64,
    pub gap: f64,
}

impl LayoutConfig {
    /// CSS custom properties the item stylesheet reads.
    pub fn css_vars(&self) -> [(&'static str, f64); 7] {
        [
            ("--scene-size", self.scene_size),
            ("--perspective", self.perspective),
            ("--item-width", self.item_width),
            ("--item-height", self.item_height),
            ("--font-size", self.font_size),
            ("--flag-size", self.icon_size),
            ("--gap", self.gap),
        ]
    }

    /// Places an item on the ring: turn to its angle, then push out by the radius.
    pub fn item_transform(&self, angle_degrees: f64) -> String {
        format!(
            "rotateY({}deg) translateZ({}px)",
            angle_degrees, self.ring_radius
        )
    }
}

/// Transform applied to the whole ring for the current rotation.
///
/// The angle is not normalised; `rotateY` is periodic.
pub fn ring_transform(angle_degrees: f64) -> String {
    format!("rotateY({angle_degrees}deg)")
}

#[derive(Clone, Debug, PartialEq)]
pub struct ItemPlacement {
    pub entry: CatalogEntry,
    pub angle_degrees: f64,
}

#[inline]
pub fn scale_for_viewport(base: &LayoutBase, viewport_width: f64) -> f64 {
    if viewport_width <= base.compact_breakpoint_px {
        base.compact_scale
    } else {
        FULL_SCALE
    }
}

/// Angle of item `index` when `count` items share the circle evenly.
#[inline]
pub fn placement_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (360.0 / count as f64) * index as f64
}

impl LayoutBase {
    pub fn scaled(&self, scale_factor: f64) -> LayoutConfig {
        LayoutConfig {
            scale_factor,
            scene_size: self.scene_size * scale_factor,
            perspective: self.perspective * scale_factor,
            ring_radius: self.ring_radius * scale_factor,
            item_width: self.item_width * scale_factor,
            item_height: self.item_height * scale_factor,
            font_size: self.font_size * scale_factor,
            icon_size: self.icon_size * scale_factor,
            gap: self.gap * scale_factor,
        }
    }

    pub fn compute(
        &self,
        viewport_width: f64,
        entries: &[CatalogEntry],
    ) -> (LayoutConfig, Vec<ItemPlacement>) {
        let config = self.scaled(scale_for_viewport(self, viewport_width));
        let count = entries.len();
        let placements = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| ItemPlacement {
                entry: entry.clone(),
                angle_degrees: placement_angle(i, count),
            })
            .collect();
        (config, placements)
    }
}

/// Layout with the default base dimensions.
pub fn compute_layout(
    viewport_width: f64,
    entries: &[CatalogEntry],
) -> (LayoutConfig, Vec<ItemPlacement>) {
    LayoutBase::default().compute(viewport_width, entries)
}
