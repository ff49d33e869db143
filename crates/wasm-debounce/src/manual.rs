//! Simulated-time scheduler
//!
//! Tasks only run when the owner calls [`ManualScheduler::advance`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::Scheduler;

struct Entry {
    id: u64,
    due: Duration,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    tasks: Vec<Entry>,
}

/// Scheduler driven by an explicit clock
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

/// Cancels its task on drop
pub struct ManualHandle {
    id: u64,
    clock: Weak<RefCell<Clock>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            clock.borrow_mut().tasks.retain(|entry| entry.id != self.id);
        }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since creation
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of tasks still waiting to fire
    pub fn pending(&self) -> usize {
        self.clock.borrow().tasks.len()
    }

    /// Move the clock forward, running every task that comes due in order.
    /// Tasks scheduled by a running task are picked up in the same pass.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let entry = {
                let mut clock = self.clock.borrow_mut();
                let next = clock
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due <= target)
                    .min_by_key(|(_, entry)| (entry.due, entry.id))
                    .map(|(index, _)| index);
                match next {
                    Some(index) => {
                        let entry = clock.tasks.remove(index);
                        clock.now = entry.due;
                        entry
                    }
                    None => {
                        clock.now = target;
                        break;
                    }
                }
            };
            // Clock borrow is released so the task may schedule or cancel.
            (entry.task)();
        }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ManualHandle {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.tasks.push(Entry { id, due, task });
        ManualHandle {
            id,
            clock: Rc::downgrade(&self.clock),
        }
    }
}
