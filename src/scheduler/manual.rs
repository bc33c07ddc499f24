//! Virtual-clock scheduler
//!
//! Time only moves when `advance` is called, which makes debounce timing
//! fully deterministic.

use std::cell::{Cell, RefCell};

use crate::errors::Result;
use crate::scheduler::{Scheduler, Task, TimerHandle};

struct PendingTask {
    due: u64,
    handle: TimerHandle,
    task: Task,
}

pub struct ManualScheduler {
    now: Cell<u64>,
    next_id: Cell<i32>,
    pending: RefCell<Vec<PendingTask>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            now: Cell::new(0),
            next_id: Cell::new(1),
            pending: RefCell::new(Vec::new()),
        }
    }

    /// Current virtual time in milliseconds
    pub fn now(&self) -> u64 {
        self.now.get()
    }

    /// Number of actions waiting to fire
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Due time of the earliest pending action
    pub fn next_due(&self) -> Option<u64> {
        self.pending.borrow().iter().map(|p| p.due).min()
    }

    /// Move the clock forward, running every action that falls due on the
    /// way in due order. Actions scheduled while advancing run too if they
    /// fall inside the window.
    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;

        while let Some(next) = self.take_next_due(target) {
            self.now.set(next.due);
            (next.task)();
        }

        self.now.set(target);
    }

    fn take_next_due(&self, target: u64) -> Option<PendingTask> {
        let mut pending = self.pending.borrow_mut();
        let index = pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.handle))
            .map(|(index, _)| index)?;
        Some(pending.remove(index))
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> Result<TimerHandle> {
        let handle = TimerHandle(self.next_id.get());
        self.next_id.set(handle.0 + 1);

        self.pending.borrow_mut().push(PendingTask {
            due: self.now.get() + u64::from(delay_ms),
            handle,
            task,
        });
        Ok(handle)
    }

    fn cancel(&self, handle: TimerHandle) {
        self.pending.borrow_mut().retain(|p| p.handle != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let make = move |name: &'static str| -> Task {
            let sink = Rc::clone(&sink);
            Box::new(move || sink.borrow_mut().push(name))
        };
        (log, make)
    }

    #[test]
    fn test_runs_in_due_order() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        scheduler.schedule(200, task("late")).unwrap();
        scheduler.schedule(100, task("early")).unwrap();
        scheduler.schedule(100, task("early-second")).unwrap();

        scheduler.advance(99);
        assert!(log.borrow().is_empty());

        scheduler.advance(101);
        assert_eq!(*log.borrow(), vec!["early", "early-second", "late"]);
        assert_eq!(scheduler.now(), 200);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_cancel() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        let handle = scheduler.schedule(50, task("cancelled")).unwrap();
        scheduler.schedule(60, task("kept")).unwrap();
        scheduler.cancel(handle);
        scheduler.cancel(handle);

        scheduler.advance(100);
        assert_eq!(*log.borrow(), vec!["kept"]);
    }

    #[test]
    fn test_task_scheduled_while_advancing() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (log, task) = recorder();
        let inner = task("inner");

        let nested = Rc::clone(&scheduler);
        scheduler
            .schedule(
                10,
                Box::new(move || {
                    nested.schedule(10, inner).unwrap();
                }),
            )
            .unwrap();

        scheduler.advance(15);
        assert!(log.borrow().is_empty());
        assert_eq!(scheduler.next_due(), Some(20));

        scheduler.advance(5);
        assert_eq!(*log.borrow(), vec!["inner"]);
    }
}
