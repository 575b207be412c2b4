//! Per-timer repeating tick tasks.
//!
//! The board asks a [`Scheduler`] for one task per running timer and keeps the
//! returned handle next to the timer. Dropping the handle must cancel the
//! repeating callback before `drop` returns.

use crate::collection::TimerId;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub trait Scheduler {
    type Task;

    /// Start calling back `id` every `period` until the task is dropped.
    fn schedule(&mut self, id: TimerId, period: Duration) -> Self::Task;
}

/// Scheduler whose "callbacks" are driven by the owner: the native loop and
/// the tests read [`ManualScheduler::active`] once per second and tick each id.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    active: Rc<RefCell<Vec<TimerId>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids with a live task, in scheduling order.
    pub fn active(&self) -> Vec<TimerId> {
        self.active.borrow().clone()
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.active.borrow().contains(&id)
    }
}

impl Scheduler for ManualScheduler {
    type Task = ManualTask;

    fn schedule(&mut self, id: TimerId, _period: Duration) -> ManualTask {
        self.active.borrow_mut().push(id);
        ManualTask {
            id,
            active: Rc::clone(&self.active),
        }
    }
}

#[derive(Debug)]
pub struct ManualTask {
    id: TimerId,
    active: Rc<RefCell<Vec<TimerId>>>,
}

impl Drop for ManualTask {
    fn drop(&mut self) {
        self.active.borrow_mut().retain(|&x| x != self.id);
    }
}
