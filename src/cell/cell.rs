use std::sync::{Arc, RwLock};

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct CellInner<T> {
    value: T,
    observers: Vec<(usize, Observer<T>)>,
    next_id: usize,
    closed: bool,
}

/// A thread-safe holder of a single value with replay-latest subscriptions.
///
/// The cell is mutable only through [`publish`](ReactiveCell::publish);
/// readers get clones or `&T` callbacks, never a mutable handle. New
/// subscribers immediately receive the current value, then every value
/// published afterwards, until their [`Subscription`] is dropped or the
/// cell is closed.
pub struct ReactiveCell<T> {
    inner: Arc<RwLock<CellInner<T>>>,
}

impl<T: Clone + Send + Sync + 'static> ReactiveCell<T> {
    /// Create a new cell with the given initial value.
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(CellInner {
                value: initial,
                observers: Vec::new(),
                next_id: 0,
                closed: false,
            })),
        }
    }

    /// Get a clone of the most recently published value.
    ///
    /// Works even after the cell has been closed; the last value stays
    /// readable.
    pub fn current(&self) -> T {
        self.inner.read().unwrap().value.clone()
    }

    /// Read the current value by reference without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let inner = self.inner.read().unwrap();
        f(&inner.value)
    }

    /// Replace the current value and notify all observers with it,
    /// in subscription order.
    ///
    /// Notification is synchronous and runs after the internal lock is
    /// released, so an observer may publish again from inside its callback;
    /// nested publishes complete in call-stack order. Returns `false`
    /// without doing anything once the cell is closed.
    pub fn publish(&self, value: T) -> bool {
        let observers = {
            let mut inner = self.inner.write().unwrap();
            if inner.closed {
                return false;
            }
            inner.value = value.clone();
            inner
                .observers
                .iter()
                .map(|(_, observer)| Arc::clone(observer))
                .collect::<Vec<_>>()
        };

        for observer in observers {
            observer(&value);
        }
        true
    }

    /// Subscribe to the cell.
    ///
    /// The observer is called immediately with the current value, then once
    /// per subsequent publish. Delivery stops when the returned guard is
    /// dropped or the cell is closed. Subscribing to a closed cell returns
    /// an inert guard and the observer is never called.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let observer: Observer<T> = Arc::new(observer);

        let (id, replay) = {
            let mut inner = self.inner.write().unwrap();
            if inner.closed {
                return Subscription { cancel: None };
            }
            let id = inner.next_id;
            inner.next_id += 1;
            inner.observers.push((id, Arc::clone(&observer)));
            (id, inner.value.clone())
        };

        // Replay the latest value outside the lock, for the same reentrancy
        // guarantee as publish.
        observer(&replay);

        let weak = Arc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    if let Ok(mut inner) = inner.write() {
                        inner.observers.retain(|(observer_id, _)| *observer_id != id);
                    }
                }
            })),
        }
    }

    /// Close the cell: no further values are delivered to current or future
    /// subscribers. The last value remains readable via
    /// [`current`](ReactiveCell::current).
    pub fn close(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.closed = true;
        inner.observers.clear();
    }

    /// Whether the cell has been closed.
    pub fn is_closed(&self) -> bool {
        self.inner.read().unwrap().closed
    }
}

impl<T> Clone for ReactiveCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// RAII guard for a cell subscription.
///
/// Dropping the guard unsubscribes the observer. The guard holds only a
/// weak handle to the cell, so it never keeps a dead cell alive.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Explicitly unsubscribe. Equivalent to dropping the guard.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
