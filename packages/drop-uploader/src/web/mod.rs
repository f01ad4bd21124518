//! Binding the uploader to a real page through web-sys.

use std::rc::Rc;

use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{AddEventListenerOptions, Document, EventTarget, HtmlElement, HtmlInputElement, Window};

use crate::{suppress_navigation, BindError, Config, DropUploader, ZoneState};

use host::{WebHost, WebZoneEvent};
use listener::{listener_error, EventListener};

mod host;
mod listener;

/// Events the page swallows so a stray drop doesn't replace the page with the file.
const GLOBAL_DRAG_EVENTS: [&str; 2] = ["dragover", "drop"];

/// An uploader bound to the page. Dropping the handle removes every listener it installed.
pub struct BoundUploader {
    uploader: Rc<DropUploader<WebHost>>,
    listeners: Vec<EventListener>,
}

impl BoundUploader {
    /// Whether something is currently being dragged over the zone.
    pub fn zone_state(&self) -> ZoneState {
        self.uploader.zone_state()
    }

    /// Keep the uploader bound for the rest of the page's lifetime.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

/// The window and document listeners that suppress stray drops. Dropping the guard removes them.
pub struct DropGuard {
    listeners: Vec<EventListener>,
}

impl DropGuard {
    /// Keep suppressing stray drops for the rest of the page's lifetime.
    pub fn forget(self) {
        std::mem::forget(self.listeners);
    }
}

/// Prevent the browser from navigating to files dropped anywhere on the page.
///
/// The drop zone stops its own events from bubbling, so this only ever sees drops that missed the zone.
pub fn suppress_stray_drops() -> Result<DropGuard, BindError> {
    let (window, document) = page()?;
    let targets: [&EventTarget; 2] = [&window, &document];

    let mut listeners = Vec::with_capacity(targets.len() * GLOBAL_DRAG_EVENTS.len());
    for target in targets {
        for event in GLOBAL_DRAG_EVENTS {
            listeners.push(EventListener::new(target, event, |event| {
                suppress_navigation(&WebZoneEvent::new(event))
            })?);
        }
    }

    Ok(DropGuard { listeners })
}

/// Bind the uploader to the elements named in `config`.
///
/// Fails if the page is missing any of the three elements. Unless disabled in the config, stray drops outside the
/// zone are suppressed for as long as the returned handle lives.
pub fn bind(config: &Config) -> Result<BoundUploader, BindError> {
    let mut bound = bind_zone(config)?;
    if config.suppress_global_drops {
        let guard = suppress_stray_drops()?;
        bound.listeners.extend(guard.listeners);
    }
    Ok(bound)
}

/// Launch the uploader on the current page.
///
/// Stray drops are suppressed right away. The zone itself is bound once the document has finished parsing, so this
/// can be called from a script in the `<head>`. A page without the expected elements is left alone.
pub fn launch(config: Config) {
    if config.suppress_global_drops {
        match suppress_stray_drops() {
            Ok(guard) => guard.forget(),
            Err(err) => tracing::debug!(%err, "stray drops are not suppressed"),
        }
    }

    let document = match page() {
        Ok((_, document)) => document,
        Err(err) => {
            tracing::debug!(%err, "drop uploader not launched");
            return;
        }
    };

    if document.ready_state() != "loading" {
        bind_for_page(&config);
        return;
    }

    let on_ready = Closure::once_into_js(move || bind_for_page(&config));
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    if let Err(err) = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        on_ready.unchecked_ref(),
        &options,
    ) {
        let err = listener_error("DOMContentLoaded", err);
        tracing::debug!(%err, "drop uploader not launched");
    }
}

fn bind_for_page(config: &Config) {
    match bind_zone(config) {
        Ok(bound) => {
            tracing::debug!(zone = %config.dropzone_id, "drop uploader bound");
            bound.forget();
        }
        Err(err) => tracing::debug!(%err, "drop uploader left unbound"),
    }
}

fn bind_zone(config: &Config) -> Result<BoundUploader, BindError> {
    let (_, document) = page()?;

    let zone: HtmlElement = find(&document, &config.dropzone_id, "HTMLElement")?;
    let input: HtmlInputElement = find(&document, &config.file_input_id, "HTMLInputElement")?;
    let label = document
        .get_element_by_id(&config.file_name_id)
        .ok_or_else(|| BindError::MissingElement {
            id: config.file_name_id.clone(),
        })?;

    let host = WebHost::new(zone.clone(), input.clone(), label, &config.highlight_class);
    let uploader = Rc::new(DropUploader::new(host, config));

    let listeners = vec![
        on_zone_event(&zone, "dragover", &uploader, DropUploader::on_drag_over)?,
        on_zone_event(&zone, "dragleave", &uploader, DropUploader::on_drag_leave)?,
        on_zone_event(&zone, "drop", &uploader, DropUploader::on_drop)?,
        EventListener::new(&zone, "click", {
            let uploader = uploader.clone();
            move |_| uploader.on_click()
        })?,
        EventListener::new(&input, "change", {
            let uploader = uploader.clone();
            move |_| uploader.on_input_change()
        })?,
    ];

    Ok(BoundUploader {
        uploader,
        listeners,
    })
}

fn on_zone_event(
    zone: &EventTarget,
    event: &'static str,
    uploader: &Rc<DropUploader<WebHost>>,
    reaction: fn(&DropUploader<WebHost>, &WebZoneEvent),
) -> Result<EventListener, BindError> {
    let uploader = uploader.clone();
    EventListener::new(zone, event, move |event| {
        reaction(&uploader, &WebZoneEvent::new(event))
    })
}

fn find<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T, BindError> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| BindError::MissingElement { id: id.to_string() })?;

    element
        .dyn_into::<T>()
        .map_err(|_| BindError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}

fn page() -> Result<(Window, Document), BindError> {
    let window = web_sys::window().ok_or(BindError::NoWindow)?;
    let document = window.document().ok_or(BindError::NoDocument)?;
    Ok((window, document))
}
