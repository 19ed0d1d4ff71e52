use std::sync::{Arc, Mutex, RwLock};

use tracing::{debug, warn};

use crate::cell::{ReactiveCell, Subscription};
use crate::store::Merge;

type Sink<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A projection of the state, used by
/// [`listen_select_all`](Store::listen_select_all).
pub type Selector<T, R> = Box<dyn Fn(&T) -> R + Send + Sync>;

/// A thread-safe store for managing application state.
///
/// A store owns exactly one [`ReactiveCell`] holding the current state.
/// Consumers never get a mutable handle: every read is a snapshot clone or
/// a `&T` callback, and every mutation goes through one of the typed entry
/// points ([`set`](Store::set), [`change`](Store::change),
/// [`change_with`](Store::change_with)), each of which publishes the
/// resulting state to all subscribers before returning.
///
/// Cloning a `Store` produces another handle to the same state.
pub struct Store<T> {
    cell: ReactiveCell<T>,
    sink: Arc<RwLock<Option<Sink<T>>>>,
}

impl<T: Clone + Send + Sync + 'static> Store<T> {
    /// Create a new store with the given initial state.
    pub fn new(initial: T) -> Self {
        Self {
            cell: ReactiveCell::new(initial),
            sink: Arc::new(RwLock::new(None)),
        }
    }

    /// Get a clone of the current state.
    ///
    /// Still returns the last state after [`destroy`](Store::destroy).
    pub fn get(&self) -> T {
        self.cell.current()
    }

    /// Read the current state by reference without cloning.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.cell.with(f)
    }

    /// Replace the state with a new value and publish it.
    pub fn set(&self, next: T) {
        self.publish(next);
    }

    /// Apply a shallow partial merge and publish the result.
    ///
    /// Fields the patch carries overwrite the current state; fields it does
    /// not carry are preserved. The merge never descends into nested
    /// values; see [`Merge`].
    pub fn change(&self, patch: T::Patch)
    where
        T: Merge,
    {
        let next = self.cell.with(|state| state.merge(patch));
        self.publish(next);
    }

    /// Compute a full replacement state from the current one and publish it.
    ///
    /// The transform's return value becomes the new state verbatim, no
    /// merge. A panic inside the transform propagates to the caller and the
    /// state is left unchanged; the transform runs on a snapshot outside
    /// any lock, so a panicking transform cannot poison the store.
    pub fn change_with<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let current = self.cell.current();
        let next = f(&current);
        self.publish(next);
    }

    fn publish(&self, next: T) {
        if !self.cell.publish(next.clone()) {
            warn!("state change ignored: store has been destroyed");
            return;
        }
        // Clone the sink handle out of the lock so a sink that mutates the
        // store again cannot relock it.
        let sink = self.sink.read().unwrap().clone();
        if let Some(sink) = sink {
            sink(&next);
        }
    }

    /// Subscribe to the full state: one emission per publish, starting with
    /// the current state.
    pub fn listen<C>(&self, callback: C) -> Subscription
    where
        C: Fn(&T) + Send + Sync + 'static,
    {
        self.cell.subscribe(callback)
    }

    /// Subscribe to a projection of the state, without deduplication.
    ///
    /// The callback fires once per publish with the freshly computed
    /// projection, whether or not the projected value changed. Use
    /// [`listen_select`](Store::listen_select) when emissions should be
    /// suppressed for unchanged projections.
    pub fn listen_map<R, F, C>(&self, selector: F, callback: C) -> Subscription
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
        C: Fn(&R) + Send + Sync + 'static,
    {
        self.cell.subscribe(move |state| {
            callback(&selector(state));
        })
    }

    /// Subscribe to a projection of the state, with change-deduplication.
    ///
    /// An emission is suppressed when the newly computed projection equals
    /// the previous one. Select several fields by projecting a tuple of
    /// them; tuple equality gives field-wise shallow comparison. The
    /// comparison never recurses beyond the projected value's own
    /// `PartialEq`.
    ///
    /// The first emission (the replay of the current state) is always
    /// delivered.
    pub fn listen_select<R, F, C>(&self, selector: F, callback: C) -> Subscription
    where
        R: Clone + PartialEq + Send + Sync + 'static,
        F: Fn(&T) -> R + Send + Sync + 'static,
        C: Fn(&R) + Send + Sync + 'static,
    {
        let last = Mutex::new(None::<R>);
        self.cell.subscribe(move |state| {
            let next = selector(state);
            {
                let mut last = last.lock().unwrap();
                if last.as_ref() == Some(&next) {
                    return;
                }
                *last = Some(next.clone());
            }
            // The dedup guard is dropped before the callback runs, so the
            // callback may reenter change/set and re-notify this observer.
            callback(&next);
        })
    }

    /// Subscribe to an ordered sequence of projections, with
    /// position-by-position change-deduplication.
    ///
    /// The callback receives one value per selector, in input order. An
    /// emission is suppressed only when every position equals the previous
    /// emission's value at that position.
    pub fn listen_select_all<R, C>(
        &self,
        selectors: Vec<Selector<T, R>>,
        callback: C,
    ) -> Subscription
    where
        R: Clone + PartialEq + Send + Sync + 'static,
        C: Fn(&[R]) + Send + Sync + 'static,
    {
        let last = Mutex::new(None::<Vec<R>>);
        self.cell.subscribe(move |state| {
            let next: Vec<R> = selectors.iter().map(|selector| selector(state)).collect();
            {
                let mut last = last.lock().unwrap();
                if last.as_ref() == Some(&next) {
                    return;
                }
                *last = Some(next.clone());
            }
            // Same contract as listen_select: no lock held across the
            // callback, reentrant mutation is safe.
            callback(&next);
        })
    }

    /// Install an observability sink.
    ///
    /// The sink is called with the post-change snapshot after every
    /// successful publish. Fire-and-forget: it runs after subscribers and
    /// has no effect on the mutation's completion. Replaces any previously
    /// installed sink.
    pub fn set_sink<F>(&self, sink: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        *self.sink.write().unwrap() = Some(Arc::new(sink));
    }

    /// Destroy the store: the subscription stream ends for all current and
    /// future subscribers.
    ///
    /// After `destroy`, [`get`](Store::get) still returns the last state;
    /// `set`/`change`/`change_with` become no-ops that log a warning.
    pub fn destroy(&self) {
        self.cell.close();
    }

    /// Whether the store has been destroyed.
    pub fn is_destroyed(&self) -> bool {
        self.cell.is_closed()
    }
}

impl<T: Clone + Send + Sync + std::fmt::Debug + 'static> Store<T> {
    /// Install a sink that logs every post-change state at `DEBUG` level.
    pub fn log_changes(&self) {
        self.set_sink(|state| {
            debug!(state = ?state, "state changed");
        });
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
            sink: Arc::clone(&self.sink),
        }
    }
}
