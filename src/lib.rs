#![cfg(target_arch = "wasm32")]
use anyhow::Context;
use galaxy_core::{FrameClock, SceneComposer, SceneConfig, SceneNodes};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod state;
mod xr;

use constants::*;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("galaxy-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let config = SceneConfig::galaxy().context("loading galaxy preset")?;
    let composer = SceneComposer::from_config(&config);

    let state = Rc::new(RefCell::new(state::AppState::default()));
    events::wire_panel_buttons(&document, &state);
    events::wire_global_keydown(state.clone());
    xr::wire_session_ended(state.clone());
    if !xr::xr_available() {
        log::info!("[xr] navigator.xr not present; AR/VR buttons will be inert");
    }
    overlay::refresh(&document, &state.borrow());

    let gpu = frame::init_gpu(&canvas).await;

    let mut camera = camera::Camera::new(
        CAMERA_EYE,
        CAMERA_TARGET,
        CAMERA_FOVY_DEG,
        CAMERA_ZNEAR,
        CAMERA_ZFAR,
    );
    camera.set_viewport(canvas.width(), canvas.height());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        composer,
        nodes: SceneNodes::new(),
        clock: FrameClock::new(),
        canvas,
        camera,
        batch: render::InstanceBatch::default(),
        gpu,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
