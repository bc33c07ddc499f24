//! In-memory view surface
//!
//! A tiny node arena with just enough layout to exercise auto-resize:
//! content height is one line-height per text line plus padding, and a node
//! with an explicit pixel height never reports less than that height when
//! measured (as a browser's `scrollHeight` behaves).

use std::cell::RefCell;

use crate::errors::{BlockError, Result};
use crate::view::{Height, InputListener, TextInputSpec, ViewSurface};

pub const DEFAULT_LINE_HEIGHT: u32 = 20;
pub const DEFAULT_PADDING: u32 = 10;

/// Handle to a node in a [`MemorySurface`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NodeKind {
    Container,
    TextInput,
}

struct NodeRecord {
    kind: NodeKind,
    classes: Vec<String>,
    value: String,
    placeholder: String,
    disabled: bool,
    children: Vec<NodeId>,
    height: Height,
    listeners: Vec<InputListener>,
    /// Bumped whenever listeners are removed
    listener_epoch: usize,
    measurements: usize,
}

impl NodeRecord {
    fn new(kind: NodeKind, classes: &[&str]) -> Self {
        Self {
            kind,
            classes: classes
                .iter()
                .filter(|c| !c.is_empty())
                .map(|c| c.to_string())
                .collect(),
            value: String::new(),
            placeholder: String::new(),
            disabled: false,
            children: Vec::new(),
            height: Height::Auto,
            listeners: Vec::new(),
            listener_epoch: 0,
            measurements: 0,
        }
    }
}

pub struct MemorySurface {
    nodes: RefCell<Vec<NodeRecord>>,
    line_height: u32,
    padding: u32,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::with_metrics(DEFAULT_LINE_HEIGHT, DEFAULT_PADDING)
    }

    pub fn with_metrics(line_height: u32, padding: u32) -> Self {
        Self {
            nodes: RefCell::new(Vec::new()),
            line_height,
            padding,
        }
    }

    /// Height `text` needs with no explicit height applied
    pub fn content_height(&self, text: &str) -> u32 {
        let lines = u32::try_from(text.split('\n').count()).unwrap_or(u32::MAX);
        lines
            .saturating_mul(self.line_height)
            .saturating_add(self.padding)
    }

    /// Replace the node's content as a user would, then fire its input listeners.
    /// Disabled nodes ignore typing.
    pub fn type_text(&self, node: NodeId, text: &str) {
        let (mut listeners, epoch) = {
            let mut nodes = self.nodes.borrow_mut();
            let record = &mut nodes[node.0];
            if record.disabled {
                return;
            }
            record.value = text.to_string();
            (std::mem::take(&mut record.listeners), record.listener_epoch)
        };

        for listener in listeners.iter_mut() {
            listener();
        }

        let mut nodes = self.nodes.borrow_mut();
        let record = &mut nodes[node.0];
        if record.listener_epoch != epoch {
            // a listener detached the node's listeners while they ran
            listeners.clear();
        }
        listeners.append(&mut record.listeners);
        record.listeners = listeners;
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.nodes.borrow()[node.0].classes.clone()
    }

    pub fn placeholder(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].placeholder.clone()
    }

    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.nodes.borrow()[node.0].disabled
    }

    pub fn is_text_input(&self, node: NodeId) -> bool {
        self.nodes.borrow()[node.0].kind == NodeKind::TextInput
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[node.0].children.clone()
    }

    pub fn height(&self, node: NodeId) -> Height {
        self.nodes.borrow()[node.0].height
    }

    pub fn listener_count(&self, node: NodeId) -> usize {
        self.nodes.borrow()[node.0].listeners.len()
    }

    /// How many times the node's content height has been measured
    pub fn measurements(&self, node: NodeId) -> usize {
        self.nodes.borrow()[node.0].measurements
    }

    fn push(&self, record: NodeRecord) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(record);
        NodeId(nodes.len() - 1)
    }

    fn check(&self, node: NodeId) -> Result<()> {
        if node.0 < self.nodes.borrow().len() {
            Ok(())
        } else {
            Err(BlockError::Surface(format!("unknown node {}", node.0)))
        }
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewSurface for MemorySurface {
    type Node = NodeId;

    fn create_container(&self, classes: &[&str]) -> Result<NodeId> {
        Ok(self.push(NodeRecord::new(NodeKind::Container, classes)))
    }

    fn create_text_input(&self, spec: &TextInputSpec<'_>) -> Result<NodeId> {
        let mut record = NodeRecord::new(NodeKind::TextInput, spec.classes);
        record.value = spec.text.to_string();
        record.placeholder = spec.placeholder.to_string();
        record.disabled = spec.disabled;
        Ok(self.push(record))
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<()> {
        self.check(*parent)?;
        self.check(*child)?;
        if parent == child {
            return Err(BlockError::Surface("cannot append a node to itself".to_string()));
        }
        self.nodes.borrow_mut()[parent.0].children.push(*child);
        Ok(())
    }

    fn on_input(&self, node: &NodeId, listener: InputListener) -> Result<()> {
        self.check(*node)?;
        self.nodes.borrow_mut()[node.0].listeners.push(listener);
        Ok(())
    }

    fn remove_listeners(&self, node: &NodeId) -> Result<()> {
        self.check(*node)?;
        let mut nodes = self.nodes.borrow_mut();
        let record = &mut nodes[node.0];
        record.listeners.clear();
        record.listener_epoch += 1;
        Ok(())
    }

    fn find_text_input(&self, view: &NodeId) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        let mut stack = vec![*view];
        while let Some(id) = stack.pop() {
            let record = nodes.get(id.0)?;
            if record.kind == NodeKind::TextInput {
                return Some(id);
            }
            stack.extend(record.children.iter().rev().copied());
        }
        None
    }

    fn text_value(&self, node: &NodeId) -> String {
        self.nodes
            .borrow()
            .get(node.0)
            .map(|record| record.value.clone())
            .unwrap_or_default()
    }

    fn set_height(&self, node: &NodeId, height: Height) -> Result<()> {
        self.check(*node)?;
        self.nodes.borrow_mut()[node.0].height = height;
        Ok(())
    }

    fn scroll_height(&self, node: &NodeId) -> u32 {
        let mut nodes = self.nodes.borrow_mut();
        let Some(record) = nodes.get_mut(node.0) else {
            return 0;
        };
        record.measurements += 1;

        let content = self.content_height(&record.value);
        match record.height {
            Height::Auto => content,
            Height::Px(px) => px.max(content),
        }
    }
}
