#![cfg(target_arch = "wasm32")]
use carousel_core::{Carousel, CarouselError, CarouselParams, Catalog};
use host::{SharedCarousel, WebHost};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod catalog;
mod constants;
mod dom;
mod events;
mod frame;
mod host;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("carousel-web loaded");
    Ok(())
}

/// A mounted ring, exported to JavaScript as `LanguageCarousel`.
///
/// Construction never throws: a bad mount point or catalog is logged once and
/// yields an inert handle.
#[wasm_bindgen(js_name = LanguageCarousel)]
pub struct CarouselHandle {
    inner: Option<SharedCarousel>,
}

#[wasm_bindgen(js_class = LanguageCarousel)]
impl CarouselHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(world: Option<web::Element>, on_select: js_sys::Function, catalog: JsValue) -> Self {
        let world = world.ok_or_else(|| CarouselError::MountPointMissing("world".into()));
        Self::from_result(world, on_select, &catalog)
    }

    /// Current ring angle in degrees. Unwrapped: may exceed ±360.
    pub fn rotation(&self) -> f64 {
        self.inner
            .as_ref()
            .and_then(|c| c.try_borrow().ok().map(|c| c.rotation()))
            .unwrap_or(0.0)
    }

    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }

    /// Cancels pending frames and timers and unregisters every listener.
    /// Calling it again is a no-op.
    pub fn destroy(&mut self) {
        let Some(shared) = self.inner.take() else {
            return;
        };
        let Ok(mut carousel) = shared.try_borrow_mut() else {
            log::warn!("[carousel] destroy called from inside a carousel callback; ignored");
            self.inner = Some(shared.clone());
            return;
        };
        carousel.shutdown();
        carousel.host_mut().detach_root_listeners();
        log::info!("[carousel] destroyed");
    }
}

impl CarouselHandle {
    fn from_result(
        world: Result<web::Element, CarouselError>,
        on_select: js_sys::Function,
        catalog: &JsValue,
    ) -> Self {
        let result = world.and_then(|world| {
            let catalog = catalog::catalog_from_js(catalog)?;
            Ok((world, catalog))
        });
        let inner = match result {
            Ok((world, catalog)) => match mount(world, on_select, catalog) {
                Ok(shared) => Some(shared),
                Err(e) => {
                    log::error!("[carousel] mount failed: {e:?}");
                    None
                }
            },
            Err(e) => {
                log::error!("[carousel] {e}");
                None
            }
        };
        Self { inner }
    }
}

/// Mounts a ring on the element with id `world_id`.
#[wasm_bindgen(js_name = mountLanguageCarousel)]
pub fn mount_language_carousel(
    world_id: &str,
    on_select: js_sys::Function,
    catalog: JsValue,
) -> CarouselHandle {
    let world = dom::window_document()
        .and_then(|d| d.get_element_by_id(world_id))
        .ok_or_else(|| CarouselError::MountPointMissing(world_id.to_string()));
    CarouselHandle::from_result(world, on_select, &catalog)
}

fn mount(
    world: web::Element,
    on_select: js_sys::Function,
    catalog: Catalog,
) -> anyhow::Result<SharedCarousel> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let world = world
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let select = Box::new(move |id: &str| {
        if let Err(e) = on_select.call1(&JsValue::NULL, &JsValue::from_str(id)) {
            log::error!("[select] onSelect threw: {:?}", e);
        }
    });

    let shared: SharedCarousel = Rc::new_cyclic(|weak| {
        let host = WebHost::new(window, document, world, weak.clone());
        RefCell::new(Carousel::new(host, catalog, CarouselParams::default(), select))
    });
    shared.borrow_mut().host_mut().attach_root_listeners()?;
    log::info!(
        "[carousel] mounted {} items",
        shared.borrow().catalog().len()
    );
    Ok(shared)
}
