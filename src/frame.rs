use crate::audio::BackgroundMusic;
use crate::camera::SceneCamera;
use crate::core::{SceneAnimator, ScrollController};
use crate::dom;
use crate::events::EventListener;
use crate::faces::CubeFaces;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame tick reads or writes.
///
/// Listener guards are parked here so they live exactly as long as the loop.
pub struct FrameContext<'a> {
    pub controller: Rc<RefCell<ScrollController>>,
    pub animator: SceneAnimator,
    pub faces: CubeFaces,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
    pub _listeners: Vec<EventListener>,
    pub _music: Option<BackgroundMusic>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f64();

        // Target is re-derived from the step every frame.
        let target = self.controller.borrow().target();
        let transforms = self.animator.tick(target, dt_sec);

        self.faces.layout_if_needed(dom::viewport_height());
        self.faces.apply(transforms.foreground);

        if let Some(g) = &mut self.gpu {
            g.set_sky_rotation(transforms.sky());
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render() {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    camera: SceneCamera,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, camera).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
