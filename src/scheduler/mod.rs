//! Deferred actions
//!
//! The block defers its resizes through a `Scheduler`: the browser build
//! uses `setTimeout`, tests use a virtual clock.

pub mod browser;
pub mod manual;

pub use browser::BrowserScheduler;
pub use manual::ManualScheduler;

use crate::errors::Result;

/// Identifies one scheduled action so it can be cancelled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub i32);

/// A one-shot deferred action
pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Run `task` once, `delay_ms` milliseconds from now
    fn schedule(&self, delay_ms: u32, task: Task) -> Result<TimerHandle>;

    /// Drop a pending action. Unknown or already fired handles are ignored.
    fn cancel(&self, handle: TimerHandle);
}
