use crate::config::BackdropConfig;
use crate::core::{shared_pointer, CancelToken, ColorSource, FixedColor, RenderLoop};
use crate::dom::{self, CanvasSurface};
use crate::events::{self, InputWiring};
use crate::frame::{self, WebLoop};
use crate::hooks::{DomUiHooks, JsColorSource};
use crate::{loader, render};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

thread_local! {
    static CANCEL: RefCell<Option<CancelToken>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax-backdrop starting");

    spawn_local(async move {
        if let Err(e) = init(BackdropConfig::default()).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the render loop before its next frame. Safe to call at any time.
#[wasm_bindgen]
pub fn stop_background() {
    CANCEL.with(|c| match c.borrow().as_ref() {
        Some(token) => token.cancel(),
        None => log::warn!("stop_background called before the loop started"),
    });
}

fn color_source(config: &BackdropConfig) -> Box<dyn ColorSource> {
    match JsColorSource::lookup(&config.page.color_source_fn) {
        Some(s) => Box::new(s),
        None => {
            log::warn!(
                "[env] {}() not found; using a fixed background",
                config.page.color_source_fn
            );
            Box::new(FixedColor(config.fallback_color))
        }
    }
}

fn spawn_asset_load(config: &BackdropConfig, document: web::Document, render_loop: Rc<RefCell<WebLoop>>) {
    let hook = config.asset_hook();
    let mut ui = DomUiHooks {
        document,
        loader_selector: config.page.loader_selector.clone(),
        tiles_fn: config.page.tiles_fn.clone(),
        menu_fn: config.page.menu_fn.clone(),
    };
    let path = config.page.asset_path.clone();
    spawn_local(async move {
        match loader::load_obj(&path).await {
            Ok(mesh) => {
                let mut rl = render_loop.borrow_mut();
                hook.complete(&mut rl.scene, mesh, &mut ui);
            }
            Err(e) => log::error!("[asset] {} failed: {}", path, e),
        }
    });
}

async fn init(config: BackdropConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::query_canvas(&document, &config.page.canvas_selector)?;

    let pointer = shared_pointer();
    events::wire_input_handlers(InputWiring {
        pointer: pointer.clone(),
        touch_sensitivity: config.touch_sensitivity,
    });

    let mut rng = StdRng::from_entropy();
    let scene = config.build_scene(&mut rng);
    log::info!(
        "[scene] particles={} lights={}",
        scene.particles.len(),
        scene.lights.len()
    );

    let gpu = render::GpuState::new(&canvas).await?;
    let render_loop = Rc::new(RefCell::new(RenderLoop::new(
        CanvasSurface { canvas },
        gpu,
        scene,
        config.camera.clone(),
        pointer,
        color_source(&config),
        config.environment(),
        config.loop_params(),
    )));
    CANCEL.with(|c| *c.borrow_mut() = Some(render_loop.borrow().cancel_token()));

    spawn_asset_load(&config, document, render_loop.clone());
    frame::start_loop(render_loop);
    Ok(())
}
