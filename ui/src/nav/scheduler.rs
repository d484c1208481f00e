use gloo_timers::callback::Timeout;

/// Deferred-callback source for the dropdown's close delay. Injected into
/// the controller so tests can crank time by hand instead of waiting on
/// the browser clock.
pub trait Scheduler: 'static {
    type Handle: 'static;

    /// Runs `callback` once after `delay_ms` unless the returned handle is
    /// cancelled first.
    fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);
}

/// `setTimeout`-backed scheduler used in the browser.
#[derive(Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static) -> Timeout {
        Timeout::new(delay_ms, callback)
    }

    fn cancel(&self, handle: Timeout) {
        // dropping a Timeout clears the underlying browser timer
        drop(handle);
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use super::Scheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Task {
        id: u64,
        due: u32,
        callback: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Inner {
        now: u32,
        next_id: u64,
        tasks: Vec<Task>,
    }

    /// Hand-cranked clock. `advance` runs every task that comes due, in
    /// due order, before moving `now` the rest of the way.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        inner: Rc<RefCell<Inner>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of scheduled tasks that have neither fired nor been
        /// cancelled.
        pub fn pending(&self) -> usize {
            self.inner.borrow().tasks.len()
        }

        pub fn advance(&self, ms: u32) {
            let target = self.inner.borrow().now + ms;
            loop {
                // release the borrow before running the callback, which may
                // schedule or cancel through this same scheduler
                let callback = {
                    let mut inner = self.inner.borrow_mut();
                    let next = inner
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, task)| task.due <= target)
                        .min_by_key(|(_, task)| task.due)
                        .map(|(i, _)| i);
                    match next {
                        Some(i) => {
                            let task = inner.tasks.remove(i);
                            inner.now = task.due;
                            task.callback
                        }
                        None => {
                            inner.now = target;
                            break;
                        }
                    }
                };
                callback();
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = u64;

        fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static) -> u64 {
            let mut inner = self.inner.borrow_mut();
            inner.next_id += 1;
            let id = inner.next_id;
            let due = inner.now + delay_ms;
            inner.tasks.push(Task {
                id,
                due,
                callback: Box::new(callback),
            });
            id
        }

        fn cancel(&self, handle: u64) {
            self.inner.borrow_mut().tasks.retain(|task| task.id != handle);
        }
    }
}
