use crate::signal::{BoxedSignal, Listener, Signal};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Signal implementation based on [Arc] and [Mutex] to get/set a value from any thread and
/// notify listeners when it changes.
///
/// You can also mutate the inner value, but only in a set scope via [StateSignal::mutate].
pub struct StateSignal<T: 'static> {
    value: Arc<Mutex<T>>,
    listeners: Arc<Mutex<Vec<Arc<Listener<T>>>>>,
}

impl<T: Clone + Send + 'static> StateSignal<T> {
    /// Creates a new signal with the given value.
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(Mutex::new(value)),
            listeners: Arc::new(Mutex::new(Vec::with_capacity(1))),
        }
    }

    /// Mutate the inner value in a set scope. This scope is needed in order to notify listeners.
    pub fn mutate(&self, op: impl FnOnce(&mut T)) {
        let current = {
            let mut value = self.lock_value();
            op(&mut value);
            value.clone()
        };

        self.notify_with(&current);
    }

    fn lock_value(&self) -> MutexGuard<'_, T> {
        self.value.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // listeners run outside the value lock, so they may read the signal
    fn notify_with(&self, value: &T) {
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        for listener in listeners {
            listener(value);
        }
    }
}

impl<T: Clone + Send + 'static> Signal<T> for StateSignal<T> {
    fn get(&self) -> T {
        self.lock_value().clone()
    }

    fn set_value(&self, value: T) {
        self.mutate(move |old| *old = value);
    }

    fn listen(&self, listener: Listener<T>) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    fn notify(&self) {
        let current = self.get();
        self.notify_with(&current);
    }

    fn dyn_clone(&self) -> BoxedSignal<T> {
        Box::new(self.clone())
    }
}

impl<T: 'static> Clone for StateSignal<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            listeners: self.listeners.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_set_notifies_listeners() {
        let signal = StateSignal::new(1);
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));

        {
            let calls = calls.clone();
            let seen = seen.clone();
            signal.listen(Box::new(move |v: &i32| {
                calls.fetch_add(1, Ordering::SeqCst);
                seen.lock().unwrap().push(*v);
            }));
        }

        signal.set_value(7);
        signal.mutate(|v| *v += 1);

        assert_eq!(signal.get(), 8);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(*seen.lock().unwrap(), vec![7, 8]);
    }

    #[test]
    fn test_listener_can_read_signal() {
        let signal = StateSignal::new(0);
        let reader = signal.clone();
        let last = Arc::new(AtomicUsize::new(0));

        {
            let last = last.clone();
            signal.listen(Box::new(move |_| {
                last.store(reader.get() as usize, Ordering::SeqCst);
            }));
        }

        signal.set_value(3);
        assert_eq!(last.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_concurrent_sets() {
        let signal = StateSignal::new(0i32);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let signal = signal.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        signal.mutate(|v| *v += 1);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(signal.get(), 800);
    }
}
