#![warn(missing_docs)]
//! Drag-and-drop file selection for plain HTML forms.
//!
//! ## Overview
//! ------------
//! This crate turns an ordinary element into a drop target for an `<input type="file">`. A file dropped on the zone
//! replaces the input's selection, so it goes out with a normal form submission, and a label element shows the name
//! of the file that was picked. Clicking the zone opens the input's file chooser, and picking a file there updates
//! the label the same way.
//!
//! While a drag hovers over the zone it gets a highlight class. Files dropped anywhere else on the page are
//! swallowed instead of making the browser navigate away to them.
//!
//! The page provides the markup:
//!
//! ```html
//! <div id="dropzone">Drop a file here or click to browse</div>
//! <input type="file" id="sessionFile" name="sessionFile" hidden>
//! <p id="file-name"></p>
//! ```
//!
//! and the wasm module launches the uploader:
//!
//! ```rust, ignore
//! drop_uploader::launch(drop_uploader::Config::new());
//! ```
//!
//! If any of the elements is missing, [`launch`] quietly does nothing. Use [`bind`] to find out why.
//!
//! ## Off the web
//! ------------
//! The reactions to each event live in [`DropUploader`], written against the [`UploaderHost`] and [`ZoneEvent`]
//! traits. Disable the default `web` feature to use them without web-sys, e.g. to drive the widget from tests.

mod config;
mod error;
mod files;
mod state;
mod uploader;

#[cfg(feature = "web")]
mod web;

pub use config::{Config, DropEffect};
pub use error::{BindError, ParseDropEffectError};
pub use files::SelectedFiles;
pub use state::ZoneState;
pub use uploader::{suppress_navigation, DropUploader, UploaderHost, ZoneEvent};

#[cfg(feature = "web")]
pub use web::{bind, launch, suppress_stray_drops, BoundUploader, DropGuard};
