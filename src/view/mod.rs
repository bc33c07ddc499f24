//! View surface abstraction
//!
//! The block never touches the DOM directly. It builds and measures its view
//! through a `ViewSurface`, so the same logic runs against the browser
//! (`DomSurface`) and against an in-memory tree in tests (`MemorySurface`).

pub mod dom;
pub mod memory;

pub use dom::DomSurface;
pub use memory::{MemorySurface, NodeId};

use crate::errors::Result;

/// Explicit height of a node
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Height {
    /// Natural height (`height: auto`)
    Auto,
    /// Fixed height in CSS pixels
    Px(u32),
}

impl Height {
    /// CSS value for the `height` property
    pub fn to_css(self) -> String {
        match self {
            Height::Auto => "auto".to_string(),
            Height::Px(px) => format!("{}px", px),
        }
    }
}

/// How to build the multi-line text input
#[derive(Clone, Debug)]
pub struct TextInputSpec<'a> {
    pub classes: &'a [&'a str],
    /// Initial content
    pub text: &'a str,
    /// Empty-state hint
    pub placeholder: &'a str,
    /// Non-interactive (read-only mode)
    pub disabled: bool,
}

/// Input change listener
pub type InputListener = Box<dyn FnMut()>;

/// Node factory and layout access for one host view tree
pub trait ViewSurface {
    type Node: Clone;

    /// Create a container node carrying `classes`
    fn create_container(&self, classes: &[&str]) -> Result<Self::Node>;

    /// Create a multi-line text input
    fn create_text_input(&self, spec: &TextInputSpec<'_>) -> Result<Self::Node>;

    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<()>;

    /// Call `listener` whenever the user changes the node's content
    fn on_input(&self, node: &Self::Node, listener: InputListener) -> Result<()>;

    /// Detach every input listener attached to `node`
    fn remove_listeners(&self, node: &Self::Node) -> Result<()>;

    /// First text input inside `view` (or `view` itself)
    fn find_text_input(&self, view: &Self::Node) -> Option<Self::Node>;

    /// Current content of a text input
    fn text_value(&self, node: &Self::Node) -> String;

    fn set_height(&self, node: &Self::Node, height: Height) -> Result<()>;

    /// Height the node's content needs, as laid out right now
    fn scroll_height(&self, node: &Self::Node) -> u32;
}
