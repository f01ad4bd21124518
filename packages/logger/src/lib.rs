#![warn(missing_docs)]
//! Logging for drop-uploader pages.
//!
//! The uploader reports what it does through [`tracing`]. This crate installs a subscriber that sends those events
//! to the browser console on wasm, and to stdout everywhere else.
//!
//! ```rust, ignore
//! fn main() {
//!     drop_uploader_logger::initialize_default();
//!     drop_uploader::launch(drop_uploader::Config::new());
//! }
//! ```

pub use tracing;
use tracing::Level;

/// An error that occurs when the logger could not be installed.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Another global subscriber was installed first.
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Install the logger at `DEBUG` in debug builds and `INFO` in release builds, ignoring any failure.
pub fn initialize_default() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    if let Err(err) = init(level) {
        tracing::debug!(%err, "keeping the existing subscriber");
    }
}

/// Install a global subscriber that records events at `level` and above.
///
/// Fails if a global subscriber is already in place.
pub fn init(level: Level) -> Result<(), LoggerError> {
    #[cfg(target_arch = "wasm32")]
    {
        use tracing_subscriber::{layer::SubscriberExt, Registry};

        let mut layer_config = tracing_wasm::WASMLayerConfigBuilder::new();
        layer_config.set_max_level(level);
        let layer = tracing_wasm::WASMLayer::new(layer_config.build());
        let subscriber = Registry::default().with(layer);

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|_| LoggerError::AlreadyInitialized)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|_| LoggerError::AlreadyInitialized)
    }
}
