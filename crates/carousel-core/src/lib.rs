//! Platform-independent engine for the rotating selection ring.
//!
//! The engine never touches a rendering surface directly; it talks to the
//! capabilities in [`host`], which the web front-end implements with
//! `web-sys` and tests implement with `testing::FakeHost`.

pub mod carousel;
pub mod catalog;
pub mod constants;
pub mod debounce;
pub mod error;
pub mod gesture;
pub mod host;
pub mod inertia;
pub mod layout;
pub mod params;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use carousel::{Carousel, SelectCallback};
pub use catalog::{Catalog, CatalogEntry};
pub use constants::*;
pub use debounce::Debouncer;
pub use error::CarouselError;
pub use gesture::{GestureSession, Interaction, Release, RotationState};
pub use host::{
    FrameId, FrameScheduler, Host, PointerSource, RingSurface, TimerId, TimerKind,
    TimerScheduler, Viewport,
};
pub use inertia::{Coast, Inertia};
pub use layout::{
    compute_layout, placement_angle, ring_transform, scale_for_viewport, ItemPlacement,
    LayoutConfig,
};
pub use params::{CarouselParams, InteractionParams, LayoutBase};
