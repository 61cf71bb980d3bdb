use crate::core::DisplaySurface;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn query_canvas(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("bad selector {}: {:?}", selector, e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{} is not a canvas: {:?}", selector, e)))
}

/// `display: none` on the first element matching `selector`, if any.
pub fn hide(document: &web::Document, selector: &str) -> bool {
    match document.query_selector(selector) {
        Ok(Some(el)) => {
            if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
                _ = html.style().set_property("display", "none");
            } else {
                _ = el.set_attribute("style", "display:none");
            }
            true
        }
        _ => false,
    }
}

/// Inner window size in CSS pixels.
#[inline]
pub fn window_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    (w as f32, h as f32)
}

/// Canvas whose CSS layout size drives its backing-buffer size.
pub struct CanvasSurface {
    pub canvas: web::HtmlCanvasElement,
}

impl DisplaySurface for CanvasSurface {
    fn display_size(&self) -> (u32, u32) {
        (
            self.canvas.client_width().max(0) as u32,
            self.canvas.client_height().max(0) as u32,
        )
    }

    fn buffer_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn set_buffer_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}
