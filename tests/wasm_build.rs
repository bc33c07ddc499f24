//! WASM build test
//!
//! Exercises the browser surface and the exported tool class in a real DOM.
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use raw_block_wasm::api::RawTool;
use raw_block_wasm::scheduler::BrowserScheduler;
use raw_block_wasm::view::{DomSurface, Height, ViewSurface};
use raw_block_wasm::{BlockData, BlockParams, HostStyles, RawBlock};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlTextAreaElement};

wasm_bindgen_test_configure!(run_in_browser);

fn dom_block(params: BlockParams) -> (RawBlock<DomSurface, BrowserScheduler>, Rc<DomSurface>) {
    let surface = Rc::new(DomSurface::new().unwrap());
    let scheduler = Rc::new(BrowserScheduler::new().unwrap());
    (RawBlock::new(params, Rc::clone(&surface), scheduler), surface)
}

#[wasm_bindgen_test]
fn test_render_builds_wrapper_and_textarea() {
    let params = BlockParams::new(BlockData::new("<p>hi</p>"))
        .styles(HostStyles::new("cdx-block", "cdx-input"));
    let (block, surface) = dom_block(params);

    let wrapper = block.render().unwrap();
    assert_eq!(wrapper.tag_name(), "DIV");
    assert_eq!(wrapper.class_name(), "cdx-block ce-rawtool");

    let textarea = surface.find_text_input(&wrapper).unwrap();
    assert_eq!(textarea.class_name(), "ce-rawtool__textarea cdx-input");
    assert_eq!(surface.text_value(&textarea), "<p>hi</p>");

    assert_eq!(block.save(&wrapper).unwrap().html, "<p>hi</p>");
}

/// Resolve after `ms` milliseconds of browser time
async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
async fn test_input_event_resizes_after_pause() {
    let (block, surface) = dom_block(BlockParams::new(BlockData::new("<p>one</p>")));
    let wrapper = block.render().unwrap();
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    body.append_child(&wrapper).unwrap();
    let textarea = surface.find_text_input(&wrapper).unwrap();

    sleep(150).await;
    let style = textarea.style();
    assert!(style.get_property_value("height").unwrap().ends_with("px"));
    style.remove_property("height").unwrap();

    let typed = "<p>one</p>\n<p>two</p>\n<p>three</p>";
    textarea.unchecked_ref::<HtmlTextAreaElement>().set_value(typed);
    textarea.dispatch_event(&Event::new("input").unwrap()).unwrap();
    assert_eq!(block.html(), typed);

    sleep(100).await;
    assert_eq!(style.get_property_value("height").unwrap(), "");

    sleep(200).await;
    let height = style.get_property_value("height").unwrap();
    assert_eq!(height, format!("{}px", textarea.scroll_height()));

    block.dispose();
    body.remove_child(&wrapper).unwrap();
}

#[wasm_bindgen_test]
fn test_set_height_writes_style() {
    let (block, surface) = dom_block(BlockParams::default());
    let wrapper = block.render().unwrap();
    let textarea = surface.find_text_input(&wrapper).unwrap();

    surface.set_height(&textarea, Height::Px(42)).unwrap();
    assert_eq!(textarea.style().get_property_value("height").unwrap(), "42px");
}

#[wasm_bindgen_test]
fn test_save_without_textarea_fails() {
    let (block, surface) = dom_block(BlockParams::default());
    let stray = surface.create_container(&["stray"]).unwrap();
    assert!(block.save(&stray).is_err());
}

#[wasm_bindgen_test]
fn test_raw_tool_round_trip() {
    let params = js_sys::JSON::parse(
        r#"{"data":{"html":"<b>x</b>"},"config":{},"api":{"styles":{"block":"cdx-block","input":"cdx-input"}},"readOnly":true}"#,
    )
    .unwrap();
    let tool = RawTool::new(params).unwrap();

    let wrapper = tool.render().unwrap();
    let saved = tool.save(wrapper).unwrap();
    let html = js_sys::Reflect::get(&saved, &JsValue::from_str("html")).unwrap();
    assert_eq!(html.as_string().as_deref(), Some("<b>x</b>"));

    tool.destroy();
    assert!(tool.render().is_err());
}

#[wasm_bindgen_test]
fn test_raw_tool_truthy_read_only() {
    let params = js_sys::JSON::parse(r#"{"data":{"html":"x"},"readOnly":1}"#).unwrap();
    let tool = RawTool::new(params).unwrap();

    let wrapper = tool.render().unwrap();
    let textarea = wrapper.query_selector("textarea").unwrap().unwrap();
    assert!(textarea.unchecked_ref::<HtmlTextAreaElement>().disabled());
    tool.destroy();
}
