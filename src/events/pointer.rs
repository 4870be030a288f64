use super::listener::EventListener;
use crate::constants::{HOVER_CLASS, HOVER_ENTER_EVENT, HOVER_LEAVE_EVENT};
use web_sys as web;

/// Toggle `hovered` on `cube` while the pointer is anywhere inside it.
pub fn wire_hover(cube: &web::HtmlElement) -> anyhow::Result<[EventListener; 2]> {
    let cube_enter = cube.clone();
    let enter = EventListener::new(cube.as_ref(), HOVER_ENTER_EVENT, move |_ev: web::Event| {
        _ = cube_enter.class_list().add_1(HOVER_CLASS);
    })?;
    let cube_leave = cube.clone();
    let leave = EventListener::new(cube.as_ref(), HOVER_LEAVE_EVENT, move |_ev: web::Event| {
        _ = cube_leave.class_list().remove_1(HOVER_CLASS);
    })?;
    Ok([enter, leave])
}
