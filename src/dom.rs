use crate::constants::*;
use carousel_core::{ItemPlacement, LayoutConfig};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn viewport_width(window: &web::Window) -> f64 {
    match window.inner_width().ok().and_then(|v| v.as_f64()) {
        Some(w) => w,
        None => {
            log::warn!("[viewport] innerWidth unavailable; assuming {FALLBACK_VIEWPORT_WIDTH}px");
            FALLBACK_VIEWPORT_WIDTH
        }
    }
}

// ---------------- Pointer helpers ----------------

#[inline]
pub fn is_touch(ev: &web::Event) -> bool {
    ev.type_().starts_with("touch")
}

/// Horizontal client coordinate of a mouse event or of the first active touch.
///
/// `None` for a touch event with no active touch points (e.g. `touchend`).
pub fn pointer_x(ev: &web::Event) -> Option<f64> {
    if is_touch(ev) {
        let touch_ev = ev.unchecked_ref::<web::TouchEvent>();
        return touch_ev.touches().get(0).map(|t| t.client_x() as f64);
    }
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| m.client_x() as f64)
}

// ---------------- Ring markup ----------------

/// Publishes the layout sizes as CSS custom properties on `<html>`.
pub fn apply_layout_vars(document: &web::Document, layout: &LayoutConfig) -> anyhow::Result<()> {
    let root = document
        .document_element()
        .ok_or_else(|| anyhow::anyhow!("no document element"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let style = root.style();
    for (name, px) in layout.css_vars() {
        style.set_property(name, &format!("{px}px")).map_err(js_err)?;
    }
    Ok(())
}

/// Injects the ring stylesheet once per document.
pub fn ensure_stylesheet(document: &web::Document) -> anyhow::Result<()> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("document has no <head>"))?;
    let sheet = document.create_element("style").map_err(js_err)?;
    sheet.set_id(STYLE_ELEMENT_ID);
    sheet.set_text_content(Some(STYLESHEET));
    head.append_child(&sheet).map_err(js_err)?;
    Ok(())
}

/// One ring item: icon plus upper-cased code, turned to its angle.
pub fn create_item(
    document: &web::Document,
    layout: &LayoutConfig,
    placement: &ItemPlacement,
) -> anyhow::Result<web::HtmlElement> {
    let item = document
        .create_element("div")
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    item.set_class_name(ITEM_CLASS);

    let icon = document
        .create_element("img")
        .map_err(js_err)?
        .dyn_into::<web::HtmlImageElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    icon.set_class_name(ICON_CLASS);
    icon.set_src(&placement.entry.icon_url());
    icon.set_alt("");
    icon.set_draggable(false);

    let code = document.create_element("span").map_err(js_err)?;
    code.set_text_content(Some(&placement.entry.label()));

    item.append_child(&icon).map_err(js_err)?;
    item.append_child(&code).map_err(js_err)?;
    _ = item.set_attribute("title", &placement.entry.display_name);

    let style = item.style();
    style
        .set_property("transform", &layout.item_transform(placement.angle_degrees))
        .map_err(js_err)?;
    set_item_colors(&item, false);
    Ok(item)
}

#[inline]
pub fn set_item_colors(item: &web::HtmlElement, highlighted: bool) {
    let (bg, border) = if highlighted {
        (HIGHLIGHT_COLOR, HIGHLIGHT_COLOR)
    } else {
        (DEFAULT_BG, DEFAULT_BORDER)
    };
    let style = item.style();
    _ = style.set_property("background-color", bg);
    _ = style.set_property("border-color", border);
}
