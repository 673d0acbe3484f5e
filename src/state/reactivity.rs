// ============================================================================
// REACTIVITY - value + change subscribers
// ============================================================================

use std::cell::{Ref, RefCell};
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Shared value that calls its subscribers after every write.
/// Clones share both the value and the subscriber list.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.value.borrow()
    }

    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Write without waking subscribers (bookkeeping that never changes the rendering)
    pub fn replace_silently(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
    }

    /// Mutate in place, then notify
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        // Snapshot so a callback may subscribe or read the value
        let callbacks: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in callbacks {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<T: Default> Default for ReactiveState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(1);
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            state.subscribe(move || hits.set(hits.get() + 1));
        }

        let other = state.clone();
        other.set(5);
        other.update(|v| *v += 1);

        assert_eq!(state.get(), 6);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn subscriber_may_read_during_notify() {
        let state = ReactiveState::new(String::new());
        let seen = Rc::new(RefCell::new(String::new()));
        {
            let reader = state.clone();
            let seen = seen.clone();
            state.subscribe(move || *seen.borrow_mut() = reader.get());
        }
        state.set("hello".to_string());
        assert_eq!(seen.borrow().as_str(), "hello");
    }
}
