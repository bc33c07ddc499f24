//! Models module for the raw HTML block
//!
//! Plain data exchanged with the host editor.

pub mod block;
pub mod config;

// Re-export commonly used types
pub use block::*;
pub use config::*;
