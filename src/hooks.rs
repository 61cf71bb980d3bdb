//! Page-provided JS functions: the accent color source and the UI hooks.

use crate::core::{Color, ColorSource, UiHooks};
use crate::dom;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Look up `window[name]` as a callable.
fn global_fn(name: &str) -> Option<js_sys::Function> {
    let window = web::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

/// Accepts numbers (`0xRRGGBB`) and CSS color strings.
pub fn color_from_js(value: &JsValue) -> Option<Color> {
    if let Some(n) = value.as_f64() {
        if n.is_finite() && (0.0..=16_777_215.0).contains(&n) {
            return Some(Color::from_hex(n as u32));
        }
        return None;
    }
    value.as_string().and_then(|s| Color::parse_css(&s))
}

/// Calls a page function every frame.
pub struct JsColorSource {
    function: js_sys::Function,
}

impl JsColorSource {
    pub fn lookup(name: &str) -> Option<Self> {
        global_fn(name).map(|function| Self { function })
    }
}

impl ColorSource for JsColorSource {
    fn current(&mut self) -> Option<Color> {
        match self.function.call0(&JsValue::NULL) {
            Ok(v) => color_from_js(&v),
            Err(e) => {
                log::debug!("[env] color source threw: {:?}", e);
                None
            }
        }
    }
}

/// Loader element plus the page's `tiles(bool)` / `enableMenu()` functions.
pub struct DomUiHooks {
    pub document: web::Document,
    pub loader_selector: String,
    pub tiles_fn: String,
    pub menu_fn: String,
}

impl DomUiHooks {
    fn call(&self, name: &str, args: &[JsValue]) {
        let Some(f) = global_fn(name) else {
            log::warn!("[ui] page function {}() not found", name);
            return;
        };
        let result = match args {
            [] => f.call0(&JsValue::NULL),
            [a] => f.call1(&JsValue::NULL, a),
            _ => f.apply(
                &JsValue::NULL,
                &args.iter().collect::<js_sys::Array>(),
            ),
        };
        if let Err(e) = result {
            log::error!("[ui] {}() failed: {:?}", name, e);
        }
    }
}

impl UiHooks for DomUiHooks {
    fn hide_loading_indicator(&mut self) {
        if !dom::hide(&self.document, &self.loader_selector) {
            log::warn!("[ui] loading indicator {} not found", self.loader_selector);
        }
    }

    fn set_tiles_visible(&mut self, visible: bool) {
        self.call(&self.tiles_fn, &[JsValue::from_bool(visible)]);
    }

    fn enable_menu(&mut self) {
        self.call(&self.menu_fn, &[]);
    }
}
