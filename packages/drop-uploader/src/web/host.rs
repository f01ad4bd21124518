use wasm_bindgen::JsCast;
use web_sys::{DataTransfer, DragEvent, Element, Event, FileList, HtmlElement, HtmlInputElement};

use crate::{DropEffect, SelectedFiles, UploaderHost, ZoneEvent};

impl SelectedFiles for FileList {
    fn len(&self) -> usize {
        self.length() as usize
    }

    fn name(&self, index: usize) -> Option<String> {
        self.item(index as u32).map(|file| file.name())
    }
}

/// The drop zone, file input and label of a real page.
pub(crate) struct WebHost {
    zone: HtmlElement,
    input: HtmlInputElement,
    label: Element,
    highlight_class: String,
}

impl WebHost {
    pub(crate) fn new(
        zone: HtmlElement,
        input: HtmlInputElement,
        label: Element,
        highlight_class: impl Into<String>,
    ) -> Self {
        Self {
            zone,
            input,
            label,
            highlight_class: highlight_class.into(),
        }
    }
}

impl UploaderHost for WebHost {
    type Files = FileList;

    fn set_highlighted(&self, highlighted: bool) {
        let classes = self.zone.class_list();
        let result = if highlighted {
            classes.add_1(&self.highlight_class)
        } else {
            classes.remove_1(&self.highlight_class)
        };

        // an empty or whitespace class name throws
        if let Err(err) = result {
            tracing::debug!(class = %self.highlight_class, ?err, "failed to toggle the highlight class");
        }
    }

    fn replace_files(&self, files: &FileList) {
        self.input.set_files(Some(files));
    }

    fn input_files(&self) -> Option<FileList> {
        self.input.files()
    }

    fn set_label(&self, text: &str) {
        self.label.set_text_content(Some(text));
    }

    fn open_chooser(&self) {
        self.input.click();
    }
}

/// Any event the zone or the page listens to. Drag events expose their data transfer, everything else has none.
pub(crate) struct WebZoneEvent {
    event: Event,
}

impl WebZoneEvent {
    pub(crate) fn new(event: Event) -> Self {
        Self { event }
    }

    fn data_transfer(&self) -> Option<DataTransfer> {
        self.event.dyn_ref::<DragEvent>()?.data_transfer()
    }
}

impl ZoneEvent for WebZoneEvent {
    type Files = FileList;

    fn prevent_default(&self) {
        self.event.prevent_default();
    }

    fn stop_propagation(&self) {
        self.event.stop_propagation();
    }

    fn set_drop_effect(&self, effect: DropEffect) -> bool {
        match self.data_transfer() {
            Some(data) => {
                data.set_drop_effect(effect.as_str());
                true
            }
            None => false,
        }
    }

    fn files(&self) -> Option<FileList> {
        self.data_transfer()?.files()
    }
}
