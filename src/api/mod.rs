//! Raw HTML tool WASM API
//!
//! The JavaScript-facing surface of the crate.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, serde-wasm-bindgen conversion, error conversion
//! - `tool`: the exported `RawTool` class

pub mod helpers;
pub mod tool;

pub use tool::{raw_tool_capabilities, RawTool};
