//! WASM Debounce Utilities
//!
//! Trailing-edge debounce for input handlers.
//! Each call replaces the pending invocation, so only the last value of a
//! burst reaches the callback once the input has been idle for `delay`.
//! There is no leading-edge call and no max-wait.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

mod manual;

pub use manual::{ManualHandle, ManualScheduler};

/// Runs one-shot tasks after a delay.
///
/// Dropping the returned handle cancels the task if it has not fired yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser scheduler backed by `setTimeout`
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, task)
    }
}

/// Handle of a scheduled invocation plus whether it already ran
struct Pending<H> {
    _handle: H,
    fired: Rc<Cell<bool>>,
}

/// Trailing-edge debouncer
pub struct Debouncer<T, S: Scheduler> {
    scheduler: S,
    delay: Duration,
    callback: Rc<dyn Fn(T)>,
    pending: RefCell<Option<Pending<S::Handle>>>,
}

impl<T: 'static, S: Scheduler> Debouncer<T, S> {
    pub fn new(scheduler: S, delay: Duration, callback: impl Fn(T) + 'static) -> Self {
        Self {
            scheduler,
            delay,
            callback: Rc::new(callback),
            pending: RefCell::new(None),
        }
    }

    /// Schedule `value` for delivery, replacing whatever was pending
    pub fn call(&self, value: T) {
        self.cancel();
        let callback = Rc::clone(&self.callback);
        let fired = Rc::new(Cell::new(false));
        let task_fired = Rc::clone(&fired);
        let handle = self.scheduler.schedule(
            self.delay,
            Box::new(move || {
                task_fired.set(true);
                callback(value)
            }),
        );
        *self.pending.borrow_mut() = Some(Pending { _handle: handle, fired });
    }

    /// True while an invocation is scheduled and has not run yet
    pub fn is_pending(&self) -> bool {
        self.pending
            .borrow()
            .as_ref()
            .is_some_and(|pending| !pending.fired.get())
    }

    /// Drop the pending invocation, if any
    pub fn cancel(&self) {
        let previous = self.pending.borrow_mut().take();
        if let Some(pending) = previous {
            if !pending.fired.get() {
                log::trace!("[debounce] cancelled pending invocation");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(String) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |value: String| sink.borrow_mut().push(value))
    }

    #[test]
    fn test_burst_collapses_to_last_value() {
        let clock = ManualScheduler::new();
        let (seen, callback) = recorder();
        let debouncer = Debouncer::new(clock.clone(), Duration::from_millis(300), callback);

        for text in ["t", "to", "tof", "tofu", "tofu "] {
            debouncer.call(text.to_string());
            clock.advance(Duration::from_millis(10));
        }
        assert!(seen.borrow().is_empty());
        assert_eq!(clock.pending(), 1);

        clock.advance(Duration::from_millis(300));
        assert_eq!(*seen.borrow(), vec!["tofu ".to_string()]);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_no_leading_edge() {
        let clock = ManualScheduler::new();
        let (seen, callback) = recorder();
        let debouncer = Debouncer::new(clock.clone(), Duration::from_millis(300), callback);

        debouncer.call("a".to_string());
        clock.advance(Duration::from_millis(299));
        assert!(seen.borrow().is_empty());

        clock.advance(Duration::from_millis(1));
        assert_eq!(*seen.borrow(), vec!["a".to_string()]);
    }

    #[test]
    fn test_idle_gap_fires_each_value() {
        let clock = ManualScheduler::new();
        let (seen, callback) = recorder();
        let debouncer = Debouncer::new(clock.clone(), Duration::from_millis(300), callback);

        debouncer.call("first".to_string());
        clock.advance(Duration::from_millis(400));
        debouncer.call("second".to_string());
        clock.advance(Duration::from_millis(400));

        assert_eq!(*seen.borrow(), vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_keystroke_restarts_window() {
        let clock = ManualScheduler::new();
        let (seen, callback) = recorder();
        let debouncer = Debouncer::new(clock.clone(), Duration::from_millis(300), callback);

        debouncer.call("a".to_string());
        clock.advance(Duration::from_millis(250));
        debouncer.call("ab".to_string());
        clock.advance(Duration::from_millis(250));
        assert!(seen.borrow().is_empty());

        clock.advance(Duration::from_millis(50));
        assert_eq!(*seen.borrow(), vec!["ab".to_string()]);
    }

    #[test]
    fn test_cancel_drops_pending() {
        let clock = ManualScheduler::new();
        let (seen, callback) = recorder();
        let debouncer = Debouncer::new(clock.clone(), Duration::from_millis(300), callback);

        debouncer.call("gone".to_string());
        assert!(debouncer.is_pending());
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        clock.advance(Duration::from_secs(1));

        assert!(seen.borrow().is_empty());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_is_pending_clears_once_fired() {
        let clock = ManualScheduler::new();
        let (seen, callback) = recorder();
        let debouncer = Debouncer::new(clock.clone(), Duration::from_millis(300), callback);
        assert!(!debouncer.is_pending());

        debouncer.call("tofu".to_string());
        assert!(debouncer.is_pending());

        clock.advance(Duration::from_millis(300));
        assert_eq!(*seen.borrow(), vec!["tofu".to_string()]);
        assert!(!debouncer.is_pending());

        // Nothing left to cancel after the invocation ran
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert_eq!(*seen.borrow(), vec!["tofu".to_string()]);
    }
}
