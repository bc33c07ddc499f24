//! `window.setTimeout` scheduler

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::errors::{BlockError, Result};
use crate::scheduler::{Scheduler, Task, TimerHandle};

/// Schedules tasks on the page's event loop
///
/// Timer closures stay owned here until they have fired or been cancelled.
/// A closure cannot be dropped while it runs, so fired ones are released on
/// the next `schedule`/`cancel` call.
pub struct BrowserScheduler {
    window: Window,
    live: RefCell<HashMap<i32, Closure<dyn FnMut()>>>,
    fired: Rc<RefCell<Vec<i32>>>,
}

impl BrowserScheduler {
    pub fn new() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| BlockError::Scheduler("No global window".to_string()))?;
        Ok(Self {
            window,
            live: RefCell::new(HashMap::new()),
            fired: Rc::new(RefCell::new(Vec::new())),
        })
    }

    fn release_fired(&self) {
        let fired: Vec<i32> = self.fired.borrow_mut().drain(..).collect();
        let mut live = self.live.borrow_mut();
        for id in fired {
            live.remove(&id);
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> Result<TimerHandle> {
        self.release_fired();

        let id_slot = Rc::new(Cell::new(0));
        let slot = Rc::clone(&id_slot);
        let fired = Rc::clone(&self.fired);
        let mut task = Some(task);

        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(task) = task.take() {
                task();
            }
            fired.borrow_mut().push(slot.get());
        });

        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                timeout,
            )
            .map_err(|e| BlockError::Scheduler(format!("setTimeout failed: {:?}", e)))?;

        id_slot.set(id);
        self.live.borrow_mut().insert(id, closure);
        Ok(TimerHandle(id))
    }

    fn cancel(&self, handle: TimerHandle) {
        self.window.clear_timeout_with_handle(handle.0);
        self.release_fired();
        self.live.borrow_mut().remove(&handle.0);
    }
}
