//! Raw HTML Block WASM Module
//!
//! A block tool for a block-structured rich-text editor that stores whatever
//! markup the user types, verbatim. The block logic is host independent
//! (`block`, `view`, `scheduler`); `api` exports it to JavaScript.

pub mod api;
pub mod block;
pub mod errors;
pub mod models;
pub mod scheduler;
pub mod tool;
pub mod view;

// Re-export commonly used types
pub use block::{CssClasses, RawBlock};
pub use errors::BlockError;
pub use models::{
    BlockConfig, BlockData, BlockParams, HostStyles, SanitizePolicy, ToolboxDescriptor,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        wasm_error!("failed to initialize logger: {}", e);
    }

    log::info!("Raw HTML block WASM module initialized");
}
