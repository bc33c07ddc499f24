//! Static tool descriptors
//!
//! Everything the host asks about the tool before (or without) creating a
//! block. None of it depends on block state.

use serde::Serialize;

use crate::models::{SanitizePolicy, ToolboxDescriptor};

/// Placeholder used when the config gives none
pub const DEFAULT_PLACEHOLDER: &str = "Enter HTML code";

/// Toolbox title
pub const TITLE: &str = "Raw HTML";

/// Toolbox icon (18x18 SVG)
pub const ICON: &str = include_str!("icon.svg");

/// Class on the block wrapper, next to the host's block class
pub const WRAPPER_CLASS: &str = "ce-rawtool";

/// Class on the text input, next to the host's input class
pub const TEXTAREA_CLASS: &str = "ce-rawtool__textarea";

/// Delay before the first resize after `render`, giving the host time to
/// mount the view so its height can be measured
pub const MOUNT_RESIZE_DELAY_MS: u32 = 100;

/// Quiet period after the last keystroke before resizing
pub const INPUT_DEBOUNCE_MS: u32 = 200;

/// The block can be shown in a non-editable mode
pub fn is_read_only_supported() -> bool {
    true
}

/// The block is offered in the host's toolbox
pub fn display_in_toolbox() -> bool {
    true
}

/// Enter inserts a line break instead of splitting the block
pub fn enable_line_breaks() -> bool {
    true
}

pub fn toolbox() -> ToolboxDescriptor {
    ToolboxDescriptor {
        icon: ICON.to_string(),
        title: TITLE.to_string(),
    }
}

/// The `html` field is stored unsanitized. Keeping raw markup is the
/// whole point of the tool.
pub fn sanitize() -> SanitizePolicy {
    SanitizePolicy::default().allow_markup("html")
}

/// All static descriptors in one value, for hosts that register tools
/// from data rather than by probing a class
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToolCapabilities {
    pub is_read_only_supported: bool,
    pub display_in_toolbox: bool,
    pub enable_line_breaks: bool,
    pub toolbox: ToolboxDescriptor,
    pub sanitize: SanitizePolicy,
    pub default_placeholder: &'static str,
}

pub fn capabilities() -> ToolCapabilities {
    ToolCapabilities {
        is_read_only_supported: is_read_only_supported(),
        display_in_toolbox: display_in_toolbox(),
        enable_line_breaks: enable_line_breaks(),
        toolbox: toolbox(),
        sanitize: sanitize(),
        default_placeholder: DEFAULT_PLACEHOLDER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        assert!(is_read_only_supported());
        assert!(display_in_toolbox());
        assert!(enable_line_breaks());
    }

    #[test]
    fn test_toolbox_icon_is_svg() {
        let toolbox = toolbox();
        assert_eq!(toolbox.title, "Raw HTML");
        assert!(toolbox.icon.starts_with("<svg"));
        assert!(toolbox.icon.ends_with("</svg>"));
        assert!(toolbox.icon.contains(r#"viewBox="0 0 512 512""#));
    }

    #[test]
    fn test_sanitize_keeps_html() {
        assert_eq!(sanitize().rule("html"), Some(true));
        assert_eq!(sanitize().fields().count(), 1);
    }

    #[test]
    fn test_capabilities_json() {
        let json = serde_json::to_value(capabilities()).unwrap();
        assert_eq!(json["isReadOnlySupported"], true);
        assert_eq!(json["displayInToolbox"], true);
        assert_eq!(json["enableLineBreaks"], true);
        assert_eq!(json["toolbox"]["title"], "Raw HTML");
        assert_eq!(json["sanitize"]["html"], true);
        assert_eq!(json["defaultPlaceholder"], "Enter HTML code");
    }
}
