//! Change notification for the presentation shell.
//!
//! # Responsibility
//! - Count observable mutations with a monotonic revision.
//! - Fan out change events to registered observers.
//!
//! # Invariants
//! - Every `notify` bumps the revision by exactly one.
//! - Observers run synchronously, in registration order.

use std::fmt::{Debug, Formatter};

/// Boxed observer callback.
///
/// `Send` keeps owning sessions movable behind the FFI session lock.
pub type Observer<E> = Box<dyn FnMut(&E) + Send>;

/// Revision counter plus observer list for one state owner.
pub struct ChangeNotifier<E> {
    revision: u64,
    observers: Vec<Observer<E>>,
}

impl<E> Default for ChangeNotifier<E> {
    fn default() -> Self {
        Self {
            revision: 0,
            observers: Vec::new(),
        }
    }
}

impl<E> ChangeNotifier<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer invoked after each mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&E) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Records one mutation and forwards `event` to every observer.
    pub fn notify(&mut self, event: E) {
        self.revision += 1;
        for observer in &mut self.observers {
            observer(&event);
        }
    }

    /// Returns the number of mutations recorded so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl<E> Debug for ChangeNotifier<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("revision", &self.revision)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::ChangeNotifier;
    use std::sync::{Arc, Mutex};

    #[test]
    fn notify_bumps_revision_and_reaches_observers_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();

        let first = Arc::clone(&seen);
        notifier.subscribe(move |event: &u32| first.lock().unwrap().push(("a", *event)));
        let second = Arc::clone(&seen);
        notifier.subscribe(move |event: &u32| second.lock().unwrap().push(("b", *event)));

        notifier.notify(7);
        notifier.notify(8);

        assert_eq!(notifier.revision(), 2);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![("a", 7), ("b", 7), ("a", 8), ("b", 8)]
        );
    }
}
