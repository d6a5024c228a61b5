use crate::host::{with_carousel, WeakCarousel, WebHost};
use carousel_core::{Carousel, TimerKind};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Persistent callbacks handed to `requestAnimationFrame` and `setTimeout`.
///
/// Created once per carousel and reused for every request, so cancelling a
/// frame or timer never strands a closure.
pub struct Ticks {
    frame: Closure<dyn FnMut()>,
    relayout: Closure<dyn FnMut()>,
    tap_grace: Closure<dyn FnMut()>,
}

fn tick(
    weak: &WeakCarousel,
    mut f: impl FnMut(&mut Carousel<WebHost>) + 'static,
) -> Closure<dyn FnMut()> {
    let weak = weak.clone();
    Closure::wrap(Box::new(move || with_carousel(&weak, &mut f)) as Box<dyn FnMut()>)
}

impl Ticks {
    pub fn new(weak: &WeakCarousel) -> Self {
        Self {
            frame: tick(weak, |c| c.frame()),
            relayout: tick(weak, |c| c.timer_fired(TimerKind::Relayout)),
            tap_grace: tick(weak, |c| c.timer_fired(TimerKind::TapGrace)),
        }
    }

    pub fn frame(&self) -> &js_sys::Function {
        self.frame.as_ref().unchecked_ref()
    }

    pub fn timer(&self, kind: TimerKind) -> &js_sys::Function {
        let closure = match kind {
            TimerKind::Relayout => &self.relayout,
            TimerKind::TapGrace => &self.tap_grace,
        };
        closure.as_ref().unchecked_ref()
    }
}
