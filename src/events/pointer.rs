use super::{Listener, ListenerSet};
use crate::dom;
use crate::host::{with_carousel, WeakCarousel};
use web_sys as web;

/// Drag-start on the ring itself. Lives as long as the carousel.
pub fn wire_ring_listeners(
    world: &web::HtmlElement,
    weak: &WeakCarousel,
    set: &mut ListenerSet,
) -> anyhow::Result<()> {
    let on_start = |weak: WeakCarousel| {
        move |ev: web::Event| {
            let Some(x) = dom::pointer_x(&ev) else {
                return;
            };
            // touchstart is registered passive; only mouse input can be cancelled.
            if !dom::is_touch(&ev) {
                ev.prevent_default();
            }
            with_carousel(&weak, |c| c.drag_start(x));
        }
    };
    set.push(Listener::attach(world, "mousedown", None, on_start(weak.clone()))?);
    set.push(Listener::attach(world, "touchstart", Some(true), on_start(weak.clone()))?);
    Ok(())
}

/// Move/end listeners on the window, registered for one drag session.
pub fn wire_drag_listeners(
    window: &web::Window,
    weak: &WeakCarousel,
    set: &mut ListenerSet,
) -> anyhow::Result<()> {
    let on_move = |weak: WeakCarousel| {
        move |ev: web::Event| {
            let Some(x) = dom::pointer_x(&ev) else {
                return;
            };
            ev.prevent_default();
            with_carousel(&weak, |c| c.drag_move(x));
        }
    };
    let on_end = |weak: WeakCarousel| move |_ev: web::Event| with_carousel(&weak, |c| c.drag_end());

    set.push(Listener::attach(window, "mousemove", None, on_move(weak.clone()))?);
    set.push(Listener::attach(window, "mouseup", None, on_end(weak.clone()))?);
    set.push(Listener::attach(window, "touchmove", Some(false), on_move(weak.clone()))?);
    set.push(Listener::attach(window, "touchend", None, on_end(weak.clone()))?);
    set.push(Listener::attach(window, "touchcancel", None, on_end(weak.clone()))?);
    Ok(())
}

/// Click and hover on one item element. `index` is its placement index.
pub fn wire_item_listeners(
    item: &web::HtmlElement,
    index: usize,
    weak: &WeakCarousel,
    out: &mut Vec<Listener>,
) -> anyhow::Result<()> {
    let w = weak.clone();
    out.push(Listener::attach(item, "click", None, move |_ev: web::Event| {
        with_carousel(&w, |c| c.item_activated(index));
    })?);
    let w = weak.clone();
    out.push(Listener::attach(item, "mouseenter", None, move |_ev: web::Event| {
        with_carousel(&w, |c| c.item_hovered(index, true));
    })?);
    let w = weak.clone();
    out.push(Listener::attach(item, "mouseleave", None, move |_ev: web::Event| {
        with_carousel(&w, |c| c.item_hovered(index, false));
    })?);
    Ok(())
}
