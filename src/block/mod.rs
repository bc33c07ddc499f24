//! Raw HTML block
//!
//! The per-block view-model the host creates for every raw HTML block.

pub mod raw_block;

pub use raw_block::{CssClasses, RawBlock};
