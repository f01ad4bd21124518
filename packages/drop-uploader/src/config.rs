use std::{fmt, str::FromStr};

use crate::ParseDropEffectError;

/// The operation advertised to the browser's drag cursor while a payload hovers over the zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DropEffect {
    /// The drop is not allowed.
    None,
    /// The dragged files are copied into the form. This is what an upload does.
    #[default]
    Copy,
    /// A link to the dragged data is created.
    Link,
    /// The dragged data is moved.
    Move,
}

impl DropEffect {
    /// The keyword `DataTransfer.dropEffect` expects.
    pub fn as_str(self) -> &'static str {
        match self {
            DropEffect::None => "none",
            DropEffect::Copy => "copy",
            DropEffect::Link => "link",
            DropEffect::Move => "move",
        }
    }
}

impl fmt::Display for DropEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DropEffect {
    type Err = ParseDropEffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(DropEffect::None),
            "copy" => Ok(DropEffect::Copy),
            "link" => Ok(DropEffect::Link),
            "move" => Ok(DropEffect::Move),
            other => Err(ParseDropEffectError(other.to_string())),
        }
    }
}

/// Configuration for the drop uploader.
///
/// The defaults match the markup of the session upload form: a `#dropzone` container, a `#sessionFile` file input
/// and a `#file-name` element that shows what was picked.
///
/// # Example
///
/// ```rust, ignore
/// drop_uploader::launch(
///     drop_uploader::Config::new()
///         .file_input("attachment")
///         .highlight_class("is-dragging"),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) dropzone_id: String,
    pub(crate) file_input_id: String,
    pub(crate) file_name_id: String,
    pub(crate) highlight_class: String,
    pub(crate) label_prefix: String,
    pub(crate) drop_effect: DropEffect,
    pub(crate) suppress_global_drops: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dropzone_id: "dropzone".to_string(),
            file_input_id: "sessionFile".to_string(),
            file_name_id: "file-name".to_string(),
            highlight_class: "bg-light".to_string(),
            label_prefix: "Selected: ".to_string(),
            drop_effect: DropEffect::Copy,
            suppress_global_drops: true,
        }
    }
}

impl Config {
    /// Create a new config with the default element ids.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id of the element that acts as the drop target.
    pub fn dropzone(mut self, id: impl Into<String>) -> Self {
        self.dropzone_id = id.into();
        self
    }

    /// Set the id of the `<input type="file">` that receives dropped files.
    pub fn file_input(mut self, id: impl Into<String>) -> Self {
        self.file_input_id = id.into();
        self
    }

    /// Set the id of the element whose text shows the selected file.
    pub fn file_name(mut self, id: impl Into<String>) -> Self {
        self.file_name_id = id.into();
        self
    }

    /// Set the class added to the drop zone while something is dragged over it.
    pub fn highlight_class(mut self, class: impl Into<String>) -> Self {
        self.highlight_class = class.into();
        self
    }

    /// Set the text placed in front of the file name, `"Selected: "` by default.
    pub fn label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.label_prefix = prefix.into();
        self
    }

    /// Set the drop effect shown on the cursor while hovering the zone.
    pub fn drop_effect(mut self, effect: DropEffect) -> Self {
        self.drop_effect = effect;
        self
    }

    /// Prevent the browser from navigating to a file dropped anywhere outside the zone. Enabled by default.
    pub fn suppress_global_drops(mut self, suppress: bool) -> Self {
        self.suppress_global_drops = suppress;
        self
    }

    /// The id of the drop target.
    pub fn dropzone_id(&self) -> &str {
        &self.dropzone_id
    }

    /// The id of the file input.
    pub fn file_input_id(&self) -> &str {
        &self.file_input_id
    }

    /// The id of the file name display.
    pub fn file_name_id(&self) -> &str {
        &self.file_name_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_session_form() {
        let cfg = Config::new();
        assert_eq!(cfg.dropzone_id(), "dropzone");
        assert_eq!(cfg.file_input_id(), "sessionFile");
        assert_eq!(cfg.file_name_id(), "file-name");
        assert_eq!(cfg.highlight_class, "bg-light");
        assert_eq!(cfg.label_prefix, "Selected: ");
        assert_eq!(cfg.drop_effect, DropEffect::Copy);
        assert!(cfg.suppress_global_drops);
    }

    #[test]
    fn builder_overrides() {
        let cfg = Config::new()
            .dropzone("zone")
            .file_input("upload")
            .file_name("picked")
            .highlight_class("hot")
            .label_prefix("File: ")
            .drop_effect(DropEffect::Link)
            .suppress_global_drops(false);

        assert_eq!(cfg.dropzone_id(), "zone");
        assert_eq!(cfg.file_input_id(), "upload");
        assert_eq!(cfg.file_name_id(), "picked");
        assert_eq!(cfg.highlight_class, "hot");
        assert_eq!(cfg.label_prefix, "File: ");
        assert_eq!(cfg.drop_effect, DropEffect::Link);
        assert!(!cfg.suppress_global_drops);
    }

    #[test]
    fn drop_effect_keywords() {
        for effect in [
            DropEffect::None,
            DropEffect::Copy,
            DropEffect::Link,
            DropEffect::Move,
        ] {
            assert_eq!(effect.as_str().parse::<DropEffect>(), Ok(effect));
        }

        let err = "copyMove".parse::<DropEffect>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "`copyMove` is not a drop effect, expected one of `none`, `copy`, `link` or `move`"
        );
    }
}
