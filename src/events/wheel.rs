use super::listener::EventListener;
use crate::core::ScrollController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `deltaY` of a wheel event. Anything that is not a `WheelEvent` reads as
/// NaN, which the controller treats as a backward step.
#[inline]
fn wheel_delta_y(ev: &web::Event) -> f64 {
    ev.dyn_ref::<web::WheelEvent>()
        .map(|w| w.delta_y())
        .unwrap_or(f64::NAN)
}

/// Subscribe the controller to wheel events on the window for as long as the
/// returned guard lives.
pub fn wire_wheel(controller: Rc<RefCell<ScrollController>>) -> anyhow::Result<EventListener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    EventListener::with_passive(window.as_ref(), "wheel", true, move |ev: web::Event| {
        let mut ctl = controller.borrow_mut();
        if ctl.on_wheel(wheel_delta_y(&ev)) {
            let target = ctl.target();
            log::debug!(
                "[scroll] step={} target=({:.3},{:.3})",
                ctl.step(),
                target.pitch,
                target.yaw
            );
        }
    })
}
