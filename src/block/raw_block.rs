//! The raw HTML block view-model
//!
//! One `RawBlock` backs one block in the host document. It renders a wrapper
//! with a single text input, keeps the input sized to its content, and hands
//! the typed markup back on save.
//!
//! State shared with deferred callbacks and the input listener lives in an
//! `Rc<Shared>`; the callbacks only hold a `Weak`, so once the block is gone
//! they do nothing.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::errors::{BlockError, Result};
use crate::models::{BlockData, BlockParams, HostStyles};
use crate::scheduler::{Scheduler, Task, TimerHandle};
use crate::tool::{INPUT_DEBOUNCE_MS, MOUNT_RESIZE_DELAY_MS, TEXTAREA_CLASS, WRAPPER_CLASS};
use crate::view::{Height, TextInputSpec, ViewSurface};

/// Resolved class names for the block's two nodes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssClasses {
    /// Host class shared by all blocks
    pub base: String,
    /// Host class shared by all text inputs
    pub input: String,
    pub wrapper: String,
    pub textarea: String,
}

impl CssClasses {
    pub fn resolve(styles: &HostStyles) -> Self {
        Self {
            base: styles.block.clone(),
            input: styles.input.clone(),
            wrapper: WRAPPER_CLASS.to_string(),
            textarea: TEXTAREA_CLASS.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Timer {
    Mount,
    Debounce,
}

struct Shared<S: ViewSurface, T: Scheduler> {
    surface: Rc<S>,
    scheduler: Rc<T>,
    html: RefCell<String>,
    textarea: RefCell<Option<S::Node>>,
    mount_timer: Cell<Option<TimerHandle>>,
    resize_debounce: Cell<Option<TimerHandle>>,
    disposed: Cell<bool>,
}

impl<S: ViewSurface + 'static, T: Scheduler + 'static> Shared<S, T> {
    fn timer(&self, timer: Timer) -> &Cell<Option<TimerHandle>> {
        match timer {
            Timer::Mount => &self.mount_timer,
            Timer::Debounce => &self.resize_debounce,
        }
    }

    fn cancel(&self, timer: Timer) {
        if let Some(handle) = self.timer(timer).take() {
            self.scheduler.cancel(handle);
        }
    }

    /// Task that resizes the input later, if the block still exists then
    fn deferred_resize(weak: Weak<Self>, timer: Timer) -> Task {
        Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.timer(timer).set(None);
                shared.resize();
            }
        })
    }

    fn schedule_resize(self: &Rc<Self>, timer: Timer, delay_ms: u32) -> Result<()> {
        self.cancel(timer);
        let task = Self::deferred_resize(Rc::downgrade(self), timer);
        let handle = self.scheduler.schedule(delay_ms, task)?;
        self.timer(timer).set(Some(handle));
        Ok(())
    }

    fn on_input(self: &Rc<Self>) {
        if self.disposed.get() {
            return;
        }
        let Some(textarea) = self.textarea.borrow().clone() else {
            return;
        };
        *self.html.borrow_mut() = self.surface.text_value(&textarea);

        if let Err(e) = self.schedule_resize(Timer::Debounce, INPUT_DEBOUNCE_MS) {
            log::warn!("Could not schedule raw block resize: {}", e);
        }
    }

    fn resize(&self) {
        if self.disposed.get() {
            return;
        }
        let Some(textarea) = self.textarea.borrow().clone() else {
            return;
        };

        match self.fit_to_content(&textarea) {
            Ok(height) => log::debug!("Raw block resized to {}px", height),
            Err(e) => log::warn!("Raw block resize failed: {}", e),
        }
    }

    /// Reset to auto first: with a stale explicit height the measurement
    /// never drops below it, so the input would grow but not shrink.
    fn fit_to_content(&self, textarea: &S::Node) -> Result<u32> {
        self.surface.set_height(textarea, Height::Auto)?;
        let height = self.surface.scroll_height(textarea);
        self.surface.set_height(textarea, Height::Px(height))?;
        Ok(height)
    }

    fn dispose(&self) {
        if self.disposed.replace(true) {
            return;
        }
        self.cancel(Timer::Mount);
        self.cancel(Timer::Debounce);
        self.detach_input();
    }

    /// Forget the tracked input and stop listening to it
    fn detach_input(&self) {
        let tracked = self.textarea.borrow_mut().take();
        let Some(textarea) = tracked else {
            return;
        };
        if let Err(e) = self.surface.remove_listeners(&textarea) {
            log::warn!("Could not detach raw block input listener: {}", e);
        }
    }
}

/// Raw HTML block bound to one view surface and scheduler
///
/// The mode (interactive or read-only) is fixed at construction.
pub struct RawBlock<S: ViewSurface + 'static, T: Scheduler + 'static> {
    shared: Rc<Shared<S, T>>,
    placeholder: String,
    css: CssClasses,
    read_only: bool,
}

impl<S: ViewSurface + 'static, T: Scheduler + 'static> RawBlock<S, T> {
    /// Create a block. Nothing is rendered or scheduled yet.
    pub fn new(params: BlockParams, surface: Rc<S>, scheduler: Rc<T>) -> Self {
        let placeholder = params.config.resolved_placeholder().to_string();
        let css = CssClasses::resolve(&params.styles);

        Self {
            shared: Rc::new(Shared {
                surface,
                scheduler,
                html: RefCell::new(params.data.html),
                textarea: RefCell::new(None),
                mount_timer: Cell::new(None),
                resize_debounce: Cell::new(None),
                disposed: Cell::new(false),
            }),
            placeholder,
            css,
            read_only: params.read_only,
        }
    }

    /// Build the block's view: a wrapper holding one text input preloaded
    /// with the current markup.
    ///
    /// The input is resized once shortly afterwards, when the host has had a
    /// chance to mount the view. Rendering again replaces the tracked input.
    pub fn render(&self) -> Result<S::Node> {
        let shared = &self.shared;
        if shared.disposed.get() {
            return Err(BlockError::Disposed);
        }
        shared.cancel(Timer::Mount);
        shared.cancel(Timer::Debounce);
        shared.detach_input();

        let surface = &shared.surface;
        let wrapper_classes = [self.css.base.as_str(), self.css.wrapper.as_str()];
        let wrapper = surface.create_container(&wrapper_classes)?;

        let html = shared.html.borrow().clone();
        let textarea = surface.create_text_input(&TextInputSpec {
            classes: &[self.css.textarea.as_str(), self.css.input.as_str()],
            text: &html,
            placeholder: &self.placeholder,
            disabled: self.read_only,
        })?;

        if !self.read_only {
            let weak = Rc::downgrade(shared);
            surface.on_input(
                &textarea,
                Box::new(move || {
                    if let Some(shared) = weak.upgrade() {
                        shared.on_input();
                    }
                }),
            )?;
        }

        surface.append_child(&wrapper, &textarea)?;
        *shared.textarea.borrow_mut() = Some(textarea);

        shared.schedule_resize(Timer::Mount, MOUNT_RESIZE_DELAY_MS)?;

        log::debug!(
            "Rendered raw block ({} bytes, read_only={})",
            html.len(),
            self.read_only
        );
        Ok(wrapper)
    }

    /// Read the markup back out of a rendered view
    ///
    /// Fails with [`BlockError::MissingInput`] when `view` has no text input,
    /// which only a broken host integration can cause.
    pub fn save(&self, view: &S::Node) -> Result<BlockData> {
        let surface = &self.shared.surface;
        let textarea = surface.find_text_input(view).ok_or_else(|| {
            log::error!("Raw block save called on a view without a text input");
            BlockError::MissingInput
        })?;

        Ok(BlockData::new(surface.text_value(&textarea)))
    }

    /// Cancel pending resizes and let go of the view. Idempotent.
    pub fn dispose(&self) {
        self.shared.dispose();
    }

    /// Markup as of the last input event (or as loaded)
    pub fn html(&self) -> String {
        self.shared.html.borrow().clone()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn css(&self) -> &CssClasses {
        &self.css
    }

    /// The text input from the last `render`
    pub fn text_input(&self) -> Option<S::Node> {
        self.shared.textarea.borrow().clone()
    }

    pub fn is_rendered(&self) -> bool {
        self.shared.textarea.borrow().is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.disposed.get()
    }

    /// Whether a mount or debounce resize is still waiting to run
    pub fn has_pending_resize(&self) -> bool {
        self.shared.mount_timer.get().is_some() || self.shared.resize_debounce.get().is_some()
    }
}

impl<S: ViewSurface + 'static, T: Scheduler + 'static> Drop for RawBlock<S, T> {
    fn drop(&mut self) {
        self.shared.dispose();
    }
}
