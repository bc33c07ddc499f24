//! Construction parameters
//!
//! The host hands every block its saved data, the user's tool config, its
//! style class names and the read-only flag. `BlockParams` carries all of
//! them with defaults so a host only fills in what it has.

use serde::{Deserialize, Serialize};

use crate::models::block::BlockData;

/// User-supplied tool configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BlockConfig {
    /// Empty-state hint for the text input. Absent, `null` or empty
    /// falls back to [`crate::tool::DEFAULT_PLACEHOLDER`].
    pub placeholder: Option<String>,
}

impl BlockConfig {
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: Some(placeholder.into()),
        }
    }

    /// Placeholder to show, after applying the default
    pub fn resolved_placeholder(&self) -> &str {
        match self.placeholder.as_deref() {
            Some(placeholder) if !placeholder.is_empty() => placeholder,
            _ => crate::tool::DEFAULT_PLACEHOLDER,
        }
    }
}

/// Class names from the host's style API (`api.styles`)
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HostStyles {
    /// Class for any block wrapper
    pub block: String,
    /// Class for any text input
    pub input: String,
}

impl HostStyles {
    pub fn new(block: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            block: block.into(),
            input: input.into(),
        }
    }
}

/// Everything a block is constructed from
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockParams {
    /// Saved data; empty when the block is new
    pub data: BlockData,
    pub config: BlockConfig,
    pub styles: HostStyles,
    /// Render without allowing edits. Fixed for the block's lifetime.
    pub read_only: bool,
}

impl BlockParams {
    pub fn new(data: BlockData) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    pub fn config(mut self, config: BlockConfig) -> Self {
        self.config = config;
        self
    }

    pub fn styles(mut self, styles: HostStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }
}
