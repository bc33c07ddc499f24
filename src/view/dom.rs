//! Browser DOM view surface (web-sys)

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlTextAreaElement};

use crate::errors::{BlockError, Result};
use crate::view::{Height, InputListener, TextInputSpec, ViewSurface};

/// View surface backed by the page's `document`
///
/// Input listener closures are owned here, next to the element they are
/// attached to, until `remove_listeners` detaches them.
pub struct DomSurface {
    document: Document,
    listeners: RefCell<Vec<(HtmlElement, Closure<dyn FnMut()>)>>,
}

fn dom_error(context: &str, err: JsValue) -> BlockError {
    BlockError::Surface(format!("{}: {:?}", context, err))
}

fn add_classes(element: &Element, classes: &[&str]) -> Result<()> {
    let class_list = element.class_list();
    // DOMTokenList.add throws on empty tokens; a host may leave a style unset
    for class in classes.iter().filter(|class| !class.is_empty()) {
        class_list
            .add_1(class)
            .map_err(|e| dom_error("Failed to add class", e))?;
    }
    Ok(())
}

impl DomSurface {
    pub fn new() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| BlockError::Surface("No global document".to_string()))?;
        Ok(Self::with_document(document))
    }

    pub fn with_document(document: Document) -> Self {
        Self {
            document,
            listeners: RefCell::new(Vec::new()),
        }
    }

    fn create(&self, tag: &str) -> Result<Element> {
        self.document
            .create_element(tag)
            .map_err(|e| dom_error(&format!("Failed to create <{}>", tag), e))
    }
}

impl ViewSurface for DomSurface {
    type Node = HtmlElement;

    fn create_container(&self, classes: &[&str]) -> Result<HtmlElement> {
        let element = self.create("div")?;
        add_classes(&element, classes)?;
        element
            .dyn_into::<HtmlElement>()
            .map_err(|e| dom_error("Container is not an HtmlElement", e.into()))
    }

    fn create_text_input(&self, spec: &TextInputSpec<'_>) -> Result<HtmlElement> {
        let element = self.create("textarea")?;
        add_classes(&element, spec.classes)?;

        let textarea = element
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|e| dom_error("Text input is not a textarea", e.into()))?;
        textarea.set_text_content(Some(spec.text));
        textarea.set_placeholder(spec.placeholder);
        textarea.set_disabled(spec.disabled);

        Ok(textarea.unchecked_into::<HtmlElement>())
    }

    fn append_child(&self, parent: &HtmlElement, child: &HtmlElement) -> Result<()> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|e| dom_error("Failed to append child", e))
    }

    fn on_input(&self, node: &HtmlElement, listener: InputListener) -> Result<()> {
        let mut listener = listener;
        let closure = Closure::<dyn FnMut()>::new(move || listener());
        node.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
            .map_err(|e| dom_error("Failed to attach input listener", e))?;
        self.listeners.borrow_mut().push((node.clone(), closure));
        Ok(())
    }

    fn remove_listeners(&self, node: &HtmlElement) -> Result<()> {
        let target: &JsValue = node.as_ref();
        let detached: Vec<_> = {
            let mut listeners = self.listeners.borrow_mut();
            let (detached, kept): (Vec<_>, Vec<_>) = listeners
                .drain(..)
                .partition(|(element, _)| AsRef::<JsValue>::as_ref(element) == target);
            *listeners = kept;
            detached
        };

        for (element, closure) in &detached {
            element
                .remove_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
                .map_err(|e| dom_error("Failed to detach input listener", e))?;
        }
        Ok(())
    }

    fn find_text_input(&self, view: &HtmlElement) -> Option<HtmlElement> {
        if view.is_instance_of::<HtmlTextAreaElement>() {
            return Some(view.clone());
        }
        view.query_selector("textarea")
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    }

    fn text_value(&self, node: &HtmlElement) -> String {
        node.dyn_ref::<HtmlTextAreaElement>()
            .map(|textarea| textarea.value())
            .unwrap_or_default()
    }

    fn set_height(&self, node: &HtmlElement, height: Height) -> Result<()> {
        node.style()
            .set_property("height", &height.to_css())
            .map_err(|e| dom_error("Failed to set height", e))
    }

    fn scroll_height(&self, node: &HtmlElement) -> u32 {
        node.scroll_height().max(0) as u32
    }
}
