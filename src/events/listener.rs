use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A DOM event subscription that lasts as long as this value.
///
/// Dropping the guard detaches the listener and frees the closure.
pub struct EventListener {
    target: web::EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new<F>(
        target: &web::EventTarget,
        event_type: &'static str,
        handler: F,
    ) -> anyhow::Result<Self>
    where
        F: FnMut(web::Event) + 'static,
    {
        Self::with_passive(target, event_type, false, handler)
    }

    /// Passive listeners must not call `preventDefault`.
    pub fn with_passive<F>(
        target: &web::EventTarget,
        event_type: &'static str,
        passive: bool,
        handler: F,
    ) -> anyhow::Result<Self>
    where
        F: FnMut(web::Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event_type,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event_type, e))?;
        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref());
    }
}
