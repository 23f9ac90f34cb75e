use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Step<A> {
    pub at_ms: u32,
    pub action: A,
}

impl<A> Step<A> {
    pub fn new(at_ms: u32, action: A) -> Self {
        Self { at_ms, action }
    }
}

pub fn stagger_delays(count: usize, step_ms: u32) -> Vec<u32> {
    (0..count)
        .map(|i| u32::try_from(i).unwrap_or(u32::MAX).saturating_mul(step_ms))
        .collect()
}

/// Timer handles paired with a flag their callback sets once it has run.
/// Fired entries are dropped on the next push.
struct Pending<T> {
    entries: Vec<(Rc<Cell<bool>>, T)>,
}

impl<T> Default for Pending<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T> Pending<T> {
    fn push(&mut self, fired: Rc<Cell<bool>>, handle: T) {
        self.entries.retain(|(fired, _)| !fired.get());
        self.entries.push((fired, handle));
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn drain(&mut self) -> Vec<T> {
        self.entries.drain(..).map(|(_, handle)| handle).collect()
    }
}

#[derive(Default)]
struct Inner {
    cancelled: Cell<bool>,
    pending: RefCell<Pending<Timeout>>,
}

#[derive(Clone, Default)]
pub struct Schedule {
    inner: Rc<Inner>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    /// Runs `f` after `delay_ms` unless the schedule is cancelled first.
    pub fn after<F>(&self, delay_ms: u32, f: F)
    where
        F: FnOnce() + 'static,
    {
        if self.is_cancelled() {
            return;
        }
        let inner = Rc::downgrade(&self.inner);
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        let timeout = Timeout::new(delay_ms, move || {
            flag.set(true);
            match inner.upgrade() {
                Some(inner) if !inner.cancelled.get() => f(),
                _ => {}
            }
        });
        self.inner.pending.borrow_mut().push(fired, timeout);
    }

    pub fn run<A, F>(&self, steps: Vec<Step<A>>, apply: F)
    where
        A: 'static,
        F: Fn(A) + Clone + 'static,
    {
        for step in steps {
            let apply = apply.clone();
            self.after(step.at_ms, move || apply(step.action));
        }
    }

    /// Clears every pending timer. Later calls to `after` are ignored.
    pub fn cancel(&self) {
        if self.inner.cancelled.replace(true) {
            return;
        }
        let dropped = self.inner.pending.borrow_mut().drain();
        debug!("Cancelling {} scheduled steps", dropped.len());
        drop(dropped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_is_linear_in_document_order() {
        assert_eq!(stagger_delays(4, 150), vec![0, 150, 300, 450]);
        assert!(stagger_delays(0, 150).is_empty());
    }

    #[test]
    fn stagger_saturates_on_huge_steps() {
        assert_eq!(stagger_delays(3, u32::MAX), vec![0, u32::MAX, u32::MAX]);
    }

    #[test]
    fn fired_entries_are_dropped_on_push() {
        let mut pending = Pending::default();
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));
        pending.push(Rc::clone(&first), "first");
        pending.push(Rc::clone(&second), "second");
        assert_eq!(pending.len(), 2);

        first.set(true);
        pending.push(Rc::new(Cell::new(false)), "third");
        assert_eq!(pending.drain(), vec!["second", "third"]);
        assert!(pending.is_empty());
    }

    #[test]
    fn cancelled_schedule_accepts_nothing() {
        let schedule = Schedule::new();
        schedule.cancel();
        assert!(schedule.is_cancelled());
        // Returns before touching the timer API.
        schedule.after(10, || panic!("must not run"));
        assert!(schedule.inner.pending.borrow().is_empty());
    }

    #[test]
    fn clones_share_cancellation() {
        let schedule = Schedule::new();
        let other = schedule.clone();
        other.cancel();
        assert!(schedule.is_cancelled());
    }
}
