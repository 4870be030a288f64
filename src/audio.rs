use crate::core::MusicGate;
use crate::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Looping background track plus the listeners that are still waiting for
/// the first interaction.
pub struct BackgroundMusic {
    _element: web::HtmlAudioElement,
    _pending: Rc<RefCell<Vec<EventListener>>>,
}

fn create_audio(src: &str) -> anyhow::Result<web::HtmlAudioElement> {
    let audio = web::HtmlAudioElement::new_with_src(src)
        .map_err(|e| anyhow::anyhow!("HtmlAudioElement error: {:?}", e))?;
    audio.set_loop(true);
    audio.set_preload("auto");
    Ok(audio)
}

// Resolve the play() promise off the event handler; a rejection is logged and
// otherwise ignored.
fn attempt_play(audio: &web::HtmlAudioElement) {
    match audio.play() {
        Ok(promise) => spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => log::info!("[audio] background music playing"),
                Err(e) => log::warn!("[audio] autoplay blocked: {:?}", e),
            }
        }),
        Err(e) => log::warn!("[audio] play() threw: {:?}", e),
    }
}

/// Create the track and arm it on the first `scroll` or `click` on the window.
///
/// Exactly one play attempt is made. Both listeners are released after it,
/// whether or not playback started.
pub fn wire_background_music(src: &str) -> anyhow::Result<BackgroundMusic> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let element = create_audio(src)?;
    let gate = Rc::new(RefCell::new(MusicGate::new()));
    let pending: Rc<RefCell<Vec<EventListener>>> = Rc::new(RefCell::new(Vec::new()));

    for event_type in ["scroll", "click"] {
        let gate = gate.clone();
        let pending_slot = pending.clone();
        let audio = element.clone();
        let listener = EventListener::new(window.as_ref(), event_type, move |_ev: web::Event| {
            if !gate.borrow_mut().on_interaction() {
                return;
            }
            log::info!("[audio] first interaction ({}), starting music", event_type);
            attempt_play(&audio);
            // This closure is one of the listeners being released, so the
            // guards are dropped after the handler returns.
            let released: Vec<EventListener> = pending_slot.borrow_mut().drain(..).collect();
            spawn_local(async move {
                drop(released);
            });
        })?;
        pending.borrow_mut().push(listener);
    }

    Ok(BackgroundMusic {
        _element: element,
        _pending: pending,
    })
}
