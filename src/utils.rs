use serde::Serialize;
use web_sys::{
    js_sys::{Function, Reflect},
    wasm_bindgen::{JsCast, JsValue},
    Element, HtmlCollection,
};

macro_rules! console_warn {
    ($($t:tt)*) => (web_sys::console::warn_1(&format!($($t)*).into()))
}

macro_rules! console_error {
    ($($t:tt)*) => (web_sys::console::error_1(&format!($($t)*).into()))
}

pub(crate) use console_error;

/// Names that match the custom element grammar but are reserved by SVG and MathML.
const RESERVED_CUSTOM_ELEMENT_NAMES: [&'static str; 8] = [
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// A valid custom element name starts with a lowercase ASCII letter, contains
/// a hyphen and no uppercase ASCII letters, and is not reserved.
pub fn is_valid_custom_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    first.is_ascii_lowercase()
        && name.contains('-')
        && !name.chars().any(|c| {
            c.is_ascii_uppercase() || c.is_ascii_whitespace() || matches!(c, '/' | '>' | '\0')
        })
        && !RESERVED_CUSTOM_ELEMENT_NAMES.contains(&name)
}

pub fn collection_to_vec(collection: &HtmlCollection) -> Vec<Element> {
    (0..collection.length())
        .filter_map(|index| collection.item(index))
        .collect()
}

pub fn js_method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

#[derive(Serialize)]
struct CheckVisibilityOptions {
    #[serde(rename = "checkVisibilityCSS")]
    check_visibility_css: bool,
}

/// `Element.checkVisibility({ checkVisibilityCSS: true })`, with a computed
/// style fallback for browsers that do not implement it.
pub fn check_visibility(element: &Element) -> bool {
    if let Some(check) = js_method(element, "checkVisibility") {
        let options = serde_wasm_bindgen::to_value(&CheckVisibilityOptions {
            check_visibility_css: true,
        })
        .unwrap_or(JsValue::UNDEFINED);

        return match check.call1(element, &options) {
            Ok(visible) => visible.is_truthy(),
            Err(err) => {
                console_warn!("checkVisibility failed: {:?}", err);
                true
            }
        };
    }

    !is_display_none(element) && !is_visibility_hidden(element)
}

fn is_display_none(element: &Element) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    let mut current = Some(element.clone());
    while let Some(el) = current {
        if let Ok(Some(style)) = window.get_computed_style(&el) {
            if style.get_property_value("display").as_deref() == Ok("none") {
                return true;
            }
        }
        current = el.parent_element();
    }

    false
}

fn is_visibility_hidden(element: &Element) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    match window.get_computed_style(element) {
        Ok(Some(style)) => matches!(
            style.get_property_value("visibility").as_deref(),
            Ok("hidden") | Ok("collapse")
        ),
        _ => false,
    }
}
