pub mod pointer;
pub mod viewport;

use crate::dom::js_err;
use smallvec::SmallVec;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener. Unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        passive: Option<bool>,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let callback = closure.as_ref().unchecked_ref();
        match passive {
            Some(passive) => {
                let opts = web::AddEventListenerOptions::new();
                opts.set_passive(passive);
                target
                    .add_event_listener_with_callback_and_add_event_listener_options(
                        event, callback, &opts,
                    )
                    .map_err(js_err)?;
            }
            None => target
                .add_event_listener_with_callback(event, callback)
                .map_err(js_err)?,
        }
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    fn detach(&self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Listeners that are attached and detached as a group.
///
/// `retire` unregisters immediately but keeps the closures alive until the
/// next `purge`: a group is usually retired from inside one of its own
/// callbacks, and dropping a closure while it runs is not allowed.
#[derive(Default)]
pub struct ListenerSet {
    active: SmallVec<[Listener; 4]>,
    retired: SmallVec<[Listener; 4]>,
}

impl ListenerSet {
    pub fn is_attached(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn push(&mut self, listener: Listener) {
        self.active.push(listener);
    }

    pub fn retire(&mut self) {
        for listener in self.active.drain(..) {
            listener.detach();
            self.retired.push(listener);
        }
    }

    pub fn purge(&mut self) {
        self.retired.clear();
    }
}
