use super::{Listener, ListenerSet};
use crate::host::{with_carousel, WeakCarousel};
use web_sys as web;

/// `resize` and `orientationchange` both feed the relayout debounce.
pub fn wire_viewport_listeners(
    window: &web::Window,
    weak: &WeakCarousel,
    set: &mut ListenerSet,
) -> anyhow::Result<()> {
    for event in ["resize", "orientationchange"] {
        let w = weak.clone();
        set.push(Listener::attach(window, event, None, move |_ev: web::Event| {
            with_carousel(&w, |c| c.viewport_changed());
        })?);
    }
    Ok(())
}
