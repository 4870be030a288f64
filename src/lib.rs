#![cfg(target_arch = "wasm32")]
use crate::camera::SceneCamera;
use crate::constants::{CAMERA_EYE, CAMERA_FOV_Y_DEG, CANVAS_ID, MUSIC_SRC, STAGE_ID};
use crate::core::{AnimatorParams, SceneAnimator, ScrollController};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod faces;
mod frame;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scroll-cube starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    // Guard against a second start (hot reload re-running the entry point).
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("scene already started; ignoring");
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    overlay::show_loading(&document);

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let camera = SceneCamera::new(CAMERA_EYE, CAMERA_FOV_Y_DEG);

    // DOM cube and input work without WebGPU, so wire them first.
    let mut faces = faces::CubeFaces::build(&document, STAGE_ID, camera)?;
    faces.layout_if_needed(dom::viewport_height());

    let controller = Rc::new(RefCell::new(ScrollController::default()));
    let mut listeners = vec![events::wire_wheel(controller.clone())?];
    listeners.extend(events::wire_hover(faces.cube())?);

    let music = match audio::wire_background_music(MUSIC_SRC) {
        Ok(m) => Some(m),
        Err(e) => {
            log::warn!("[audio] background music unavailable: {:?}", e);
            None
        }
    };

    let gpu = frame::init_gpu(&canvas, camera).await;
    overlay::hide_loading(&document);
    log::info!("[scene] ready (webgpu={})", gpu.is_some());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        animator: SceneAnimator::new(AnimatorParams::default()),
        faces,
        canvas,
        gpu,
        last_instant: Instant::now(),
        _listeners: listeners,
        _music: music,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
