//! The session upload form: a `#dropzone` wired to a hidden `#sessionFile` input, with the chosen name shown in
//! `#file-name`.
//!
//! Build for `wasm32-unknown-unknown` and load the module from a page containing those three elements.

fn main() {
    drop_uploader_logger::initialize_default();
    drop_uploader::launch(drop_uploader::Config::new());
}
