use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{Event, EventTarget};

use crate::BindError;

/// A DOM event listener that is removed from its target when dropped.
pub(crate) struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub(crate) fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, BindError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| listener_error(event, err))?;

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let callback: &js_sys::Function = self.callback.as_ref().unchecked_ref();
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, callback)
        {
            tracing::debug!(event = self.event, ?err, "failed to remove listener");
        }
    }
}

pub(crate) fn listener_error(event: &'static str, err: JsValue) -> BindError {
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"));
    BindError::Listener { event, message }
}
