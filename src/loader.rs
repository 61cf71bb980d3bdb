use crate::core::{parse_obj, LoadError, LoadOutcome};
use instant::Instant;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(e: wasm_bindgen::JsValue) -> LoadError {
    LoadError::Fetch(format!("{:?}", e))
}

async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let window = web::window().ok_or_else(|| LoadError::Fetch("no window".into()))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !resp.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    let body = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    body.as_string()
        .ok_or_else(|| LoadError::Fetch("response body is not text".into()))
}

/// Fetch and parse an OBJ file.
pub async fn load_obj(url: &str) -> LoadOutcome {
    let started = Instant::now();
    let text = fetch_text(url).await?;
    let mesh = parse_obj(&text)?;
    log::info!(
        "[asset] {} loaded in {:?} ({} bytes, {} segments)",
        url,
        started.elapsed(),
        text.len(),
        mesh.children.len()
    );
    Ok(mesh)
}
