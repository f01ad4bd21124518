use std::cell::Cell;

use crate::{
    state::{Gesture, ZoneState},
    Config, DropEffect, SelectedFiles,
};

/// The three page elements the uploader drives.
///
/// On the web this is the drop zone, the `<input type="file">` and the label element. Everything the uploader does
/// to the page goes through this trait.
pub trait UploaderHost {
    /// The file collection the input holds, and the one a drop hands over.
    type Files: SelectedFiles;

    /// Show or hide the hover highlight on the drop zone.
    fn set_highlighted(&self, highlighted: bool);

    /// Replace the input's whole selection with `files`.
    fn replace_files(&self, files: &Self::Files);

    /// The input's current selection, if the input has one.
    fn input_files(&self) -> Option<Self::Files>;

    /// Set the text of the label element.
    fn set_label(&self, text: &str);

    /// Open the native file chooser of the input.
    fn open_chooser(&self);
}

/// A drag or drop event, together with the data-transfer payload it carries.
pub trait ZoneEvent {
    /// The file collection carried by the payload.
    type Files: SelectedFiles;

    /// Cancel the browser's default action, like navigating to a dropped file.
    fn prevent_default(&self);

    /// Keep the event from reaching listeners further up the tree.
    fn stop_propagation(&self);

    /// Advertise `effect` to the drag cursor. Returns `false` if the event carries no payload.
    fn set_drop_effect(&self, effect: DropEffect) -> bool;

    /// The files in the payload, if there is a payload.
    fn files(&self) -> Option<Self::Files>;
}

/// Keep the browser from opening a file that was dropped outside the zone.
///
/// Installed for `dragover` and `drop` on the window and the document. It never touches the file input.
pub fn suppress_navigation<E: ZoneEvent>(event: &E) {
    event.prevent_default();
}

/// A drop zone bound to a file input and a label.
///
/// Each `on_*` method is the reaction to one DOM event. They run synchronously and never fail: a drop or dialog
/// without files just leaves everything as it was.
pub struct DropUploader<H: UploaderHost> {
    host: H,
    label_prefix: String,
    drop_effect: DropEffect,
    state: Cell<ZoneState>,
}

impl<H: UploaderHost> DropUploader<H> {
    /// Create an uploader driving `host`, using the label and cursor settings from `config`.
    pub fn new(host: H, config: &Config) -> Self {
        Self {
            host,
            label_prefix: config.label_prefix.clone(),
            drop_effect: config.drop_effect,
            state: Cell::new(ZoneState::Idle),
        }
    }

    /// The elements this uploader drives.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Whether something is currently being dragged over the zone.
    pub fn zone_state(&self) -> ZoneState {
        self.state.get()
    }

    /// The label text shown for a file called `name`.
    pub fn label_for(&self, name: &str) -> String {
        format!("{}{}", self.label_prefix, name)
    }

    /// A drag moved over the zone.
    pub fn on_drag_over<E: ZoneEvent>(&self, event: &E) {
        event.prevent_default();
        event.stop_propagation();
        self.transition(Gesture::DragOver);
        event.set_drop_effect(self.drop_effect);
    }

    /// A drag left the zone.
    pub fn on_drag_leave<E: ZoneEvent>(&self, event: &E) {
        event.stop_propagation();
        self.transition(Gesture::DragLeave);
    }

    /// Something was dropped on the zone.
    ///
    /// If the payload has files they replace the input's selection outright, which is what lets a dropped file go
    /// out with an ordinary form submission.
    pub fn on_drop<E: ZoneEvent<Files = H::Files>>(&self, event: &E) {
        event.prevent_default();
        event.stop_propagation();
        self.transition(Gesture::Drop);

        let Some(files) = event.files() else {
            tracing::trace!("drop without a data transfer");
            return;
        };

        if self.show_first(&files) {
            self.host.replace_files(&files);
            tracing::trace!(count = files.len(), "dropped files attached to the input");
        }
    }

    /// The zone was clicked.
    pub fn on_click(&self) {
        tracing::trace!("opening the file chooser");
        self.host.open_chooser();
    }

    /// The input reported a new selection from its dialog.
    pub fn on_input_change(&self) {
        match self.host.input_files() {
            Some(files) => {
                self.show_first(&files);
            }
            None => tracing::trace!("file input has no file list"),
        }
    }

    fn transition(&self, gesture: Gesture) {
        let next = self.state.get().after(gesture);
        if self.state.replace(next) != next {
            tracing::trace!(?gesture, state = ?next, "drop zone state changed");
        }
        self.host.set_highlighted(next.is_hovering());
    }

    /// Label the first file. Returns `false` and leaves the label alone when there is none.
    fn show_first(&self, files: &H::Files) -> bool {
        match files.first_name() {
            Some(name) => {
                self.host.set_label(&self.label_for(&name));
                true
            }
            None => false,
        }
    }
}
