use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::Timeout;

// something that can run a task later, and forget about it again
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);
}

// wraps func so that a burst of calls produces a single call, wait_ms after the
// last one, with the last arguments
pub fn debounce<A, F, S>(func: F, wait_ms: u32, scheduler: S) -> impl Fn(A)
where
    A: 'static,
    F: Fn(A) + 'static,
    S: Scheduler,
{
    let func = Rc::new(func);
    let pending: RefCell<Option<S::Handle>> = RefCell::new(None);

    move |args: A| {
        if let Some(handle) = pending.borrow_mut().take() {
            scheduler.cancel(handle);
        }

        let func = func.clone();
        let handle = scheduler.schedule(wait_ms, Box::new(move || func(args)));

        *pending.borrow_mut() = Some(handle);
    }
}

// window.setTimeout, through gloo
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn cancel(&self, handle: Timeout) {
        // clearing an already fired timeout is harmless
        handle.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct Task {
        id: u64,
        due: u32,
        run: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct VirtualClock {
        now: Cell<u32>,
        next_id: Cell<u64>,
        tasks: RefCell<Vec<Task>>,
    }

    impl VirtualClock {
        fn advance_to(&self, t: u32) {
            loop {
                let next = {
                    let mut tasks = self.tasks.borrow_mut();
                    let idx = tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, task)| task.due <= t)
                        .min_by_key(|(_, task)| (task.due, task.id))
                        .map(|(idx, _)| idx);

                    idx.map(|idx| tasks.remove(idx))
                };

                match next {
                    Some(task) => {
                        self.now.set(task.due);
                        (task.run)();
                    }
                    None => break,
                }
            }

            self.now.set(t);
        }

        fn pending(&self) -> usize {
            self.tasks.borrow().len()
        }
    }

    impl Scheduler for Rc<VirtualClock> {
        type Handle = u64;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> u64 {
            let id = self.next_id.get();
            self.next_id.set(id + 1);

            self.tasks.borrow_mut().push(Task {
                id,
                due: self.now.get() + delay_ms,
                run: task,
            });

            id
        }

        fn cancel(&self, handle: u64) {
            self.tasks.borrow_mut().retain(|task| task.id != handle);
        }
    }

    type Calls = Rc<RefCell<Vec<(u32, &'static str)>>>;

    fn recorder(clock: &Rc<VirtualClock>) -> (Calls, impl Fn(&'static str) + 'static) {
        let calls: Calls = Rc::default();

        let record = {
            let calls = calls.clone();
            let clock = clock.clone();
            move |arg: &'static str| calls.borrow_mut().push((clock.now.get(), arg))
        };

        (calls, record)
    }

    #[test]
    fn burst_fires_once_with_last_arguments() {
        let clock = Rc::new(VirtualClock::default());
        let (calls, record) = recorder(&clock);

        let debounced = debounce(record, 50, clock.clone());

        debounced("first");
        clock.advance_to(10);
        debounced("second");
        clock.advance_to(20);
        debounced("third");

        clock.advance_to(69);
        assert!(calls.borrow().is_empty());

        clock.advance_to(1_000);
        assert_eq!(*calls.borrow(), vec![(70, "third")]);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn calls_separated_by_the_wait_each_fire() {
        let clock = Rc::new(VirtualClock::default());
        let (calls, record) = recorder(&clock);

        let debounced = debounce(record, 50, clock.clone());

        debounced("a");
        clock.advance_to(100);
        debounced("b");
        clock.advance_to(200);

        assert_eq!(*calls.borrow(), vec![(50, "a"), (150, "b")]);
    }

    #[test]
    fn only_one_timer_is_pending() {
        let clock = Rc::new(VirtualClock::default());
        let (_calls, record) = recorder(&clock);

        let debounced = debounce(record, 50, clock.clone());

        for t in 0..10 {
            clock.advance_to(t * 5);
            debounced("tick");
            assert_eq!(clock.pending(), 1);
        }
    }
}
