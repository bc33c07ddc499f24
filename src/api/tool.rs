//! `RawTool`: the block tool class the host editor loads
//!
//! Mirrors the host's block-tool contract: static descriptors, a constructor
//! taking `{ data, config, api, readOnly }`, `render`, `save` and `destroy`.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::api::helpers::{block_error, deserialize_or_default, get_field, serialize};
use crate::block::RawBlock;
use crate::models::{BlockConfig, BlockData, BlockParams, HostStyles};
use crate::scheduler::BrowserScheduler;
use crate::tool;
use crate::view::DomSurface;
use crate::wasm_info;

#[wasm_bindgen]
pub struct RawTool {
    block: RawBlock<DomSurface, BrowserScheduler>,
}

/// Decode the host's constructor bundle
fn params_from_js(value: &JsValue) -> Result<BlockParams, JsValue> {
    let data: BlockData = deserialize_or_default(get_field(value, "data")?, "Invalid block data")?;
    let config: BlockConfig =
        deserialize_or_default(get_field(value, "config")?, "Invalid tool config")?;

    // `api` carries methods too; only its style names are needed
    let api = get_field(value, "api")?;
    let styles: HostStyles =
        deserialize_or_default(get_field(&api, "styles")?, "Invalid api.styles")?;

    // any truthy value means read-only, as the host passes it through untyped
    let read_only = get_field(value, "readOnly")?.is_truthy();

    Ok(BlockParams {
        data,
        config,
        styles,
        read_only,
    })
}

#[wasm_bindgen]
impl RawTool {
    #[wasm_bindgen(constructor)]
    pub fn new(params: JsValue) -> Result<RawTool, JsValue> {
        let params = params_from_js(&params)?;
        let surface = DomSurface::new().map_err(block_error)?;
        let scheduler = BrowserScheduler::new().map_err(block_error)?;

        wasm_info!(
            "RawTool created ({} bytes, read_only={})",
            params.data.html.len(),
            params.read_only
        );

        Ok(RawTool {
            block: RawBlock::new(params, Rc::new(surface), Rc::new(scheduler)),
        })
    }

    #[wasm_bindgen(getter = isReadOnlySupported)]
    pub fn is_read_only_supported() -> bool {
        tool::is_read_only_supported()
    }

    #[wasm_bindgen(getter = displayInToolbox)]
    pub fn display_in_toolbox() -> bool {
        tool::display_in_toolbox()
    }

    #[wasm_bindgen(getter = enableLineBreaks)]
    pub fn enable_line_breaks() -> bool {
        tool::enable_line_breaks()
    }

    #[wasm_bindgen(getter)]
    pub fn toolbox() -> Result<JsValue, JsValue> {
        serialize(&tool::toolbox(), "Failed to serialize toolbox")
    }

    #[wasm_bindgen(getter)]
    pub fn sanitize() -> Result<JsValue, JsValue> {
        serialize(&tool::sanitize(), "Failed to serialize sanitize config")
    }

    #[wasm_bindgen(getter = DEFAULT_PLACEHOLDER)]
    pub fn default_placeholder() -> String {
        tool::DEFAULT_PLACEHOLDER.to_string()
    }

    /// Build the block's wrapper element
    pub fn render(&self) -> Result<HtmlElement, JsValue> {
        self.block.render().map_err(block_error)
    }

    /// Extract `{ html }` from the wrapper returned by `render`
    pub fn save(&self, wrapper: HtmlElement) -> Result<JsValue, JsValue> {
        let data = self.block.save(&wrapper).map_err(block_error)?;
        serialize(&data, "Failed to serialize block data")
    }

    /// Called by the host when the block is removed
    pub fn destroy(&self) {
        self.block.dispose();
    }
}

/// All static descriptors as one plain object
#[wasm_bindgen(js_name = rawToolCapabilities)]
pub fn raw_tool_capabilities() -> Result<JsValue, JsValue> {
    serialize(&tool::capabilities(), "Failed to serialize capabilities")
}
