/// Contains the [state::StateSignal].
pub mod state;

/// A listener called with the new value every time a signal changes.
pub type Listener<T> = Box<dyn Fn(&T) + Send + Sync>;

/// A boxed signal.
pub type BoxedSignal<T> = Box<dyn Signal<T>>;

/// Base trait for thread-safe reactive values.
///
/// Reads and writes are mutually exclusive. Writing notifies every listener
/// after the new value is stored.
pub trait Signal<T: 'static>: Send + Sync {
    /// Get a copy of the current value.
    fn get(&self) -> T;

    /// Store a new value and notify listeners.
    fn set_value(&self, value: T);

    /// Register a listener.
    fn listen(&self, listener: Listener<T>);

    /// Notify listeners with the current value.
    fn notify(&self);

    /// Clone this signal into a box. Clones share the same value.
    fn dyn_clone(&self) -> BoxedSignal<T>;
}
