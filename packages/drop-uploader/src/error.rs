/// An error that can occur while binding the uploader to the page.
///
/// [`launch`](crate::launch) never surfaces these: a page without the expected elements simply gets an inert widget.
/// Call [`bind`](crate::bind) directly to inspect them.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// There is no global `window`, so we are not running inside a browser page.
    #[error("no global `window` is available")]
    NoWindow,

    /// The window has no document attached.
    #[error("the window has no document")]
    NoDocument,

    /// A required element is not on the page.
    #[error("no element with id `{id}` on the page")]
    MissingElement {
        /// The id that was looked up.
        id: String,
    },

    /// An element exists but is the wrong kind of node, like a file input id that points at a `<div>`.
    #[error("element `{id}` is not an {expected}")]
    WrongElementType {
        /// The id that was looked up.
        id: String,
        /// The DOM interface the element had to implement.
        expected: &'static str,
    },

    /// The browser refused to register an event listener.
    #[error("failed to listen for `{event}`: {message}")]
    Listener {
        /// The event type being listened for.
        event: &'static str,
        /// The exception the browser threw, rendered as text.
        message: String,
    },
}

/// An error returned when parsing a [`DropEffect`](crate::DropEffect) from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a drop effect, expected one of `none`, `copy`, `link` or `move`")]
pub struct ParseDropEffectError(pub(crate) String);
