use carousel_core::{Catalog, CarouselError, CatalogEntry};
use wasm_bindgen::JsValue;

fn string_field(obj: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

/// Reads an optional JS array of `{ code, name }` objects.
///
/// `undefined`/`null` selects the built-in catalog. `name` falls back to the
/// code when missing.
pub fn catalog_from_js(value: &JsValue) -> Result<Catalog, CarouselError> {
    if value.is_undefined() || value.is_null() {
        return Ok(Catalog::default());
    }
    if !js_sys::Array::is_array(value) {
        return Err(CarouselError::CatalogNotArray);
    }
    let array = js_sys::Array::from(value);
    let mut entries = Vec::with_capacity(array.length() as usize);
    for (index, item) in array.iter().enumerate() {
        if !item.is_object() {
            return Err(CarouselError::InvalidCatalogEntry {
                index,
                reason: "not an object".into(),
            });
        }
        let Some(code) = string_field(&item, "code") else {
            return Err(CarouselError::InvalidCatalogEntry {
                index,
                reason: "missing string `code`".into(),
            });
        };
        let name = string_field(&item, "name").unwrap_or_else(|| code.clone());
        entries.push(CatalogEntry::new(code, name));
    }
    Catalog::new(entries)
}
