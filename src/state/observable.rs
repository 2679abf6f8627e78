// src/state/observable.rs
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: Mutex<T>,
    hooks: Mutex<Vec<Callback<T>>>,
    subscribers: Mutex<Vec<(u64, Callback<T>)>>,
    next_id: AtomicU64,
}

/// A shared, observable value holder.
///
/// Clones share the same underlying value. `set` notifies synchronously:
/// write hooks first (in registration order), then subscribers (in
/// subscription order). Callbacks run after the value lock is released, so
/// they may call `get` on the holder they observe.
///
/// Writes from several threads are stored in lock order and a subscriber sees
/// its replay and every later write exactly once. Deliveries racing across
/// threads may interleave, so read `get` when the final value matters.
pub struct Observable<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &*lock(&self.inner.value))
            .finish()
    }
}

// A panicking listener must not wedge the holder for everyone else.
fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: Mutex::new(initial),
                hooks: Mutex::new(Vec::new()),
                subscribers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    pub fn get(&self) -> T {
        lock(&self.inner.value).clone()
    }

    pub fn set(&self, value: T) {
        let listeners = {
            let mut guard = lock(&self.inner.value);
            *guard = value.clone();
            self.listeners()
        };
        listeners.deliver(&value);
    }

    /// Replace the value with `f(current)` and notify
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let (next, listeners) = {
            let mut guard = lock(&self.inner.value);
            let next = f(&guard);
            *guard = next.clone();
            (next, self.listeners())
        };
        listeners.deliver(&next);
    }

    /// Register a callback that receives the current value immediately, then
    /// every subsequent write.
    pub fn subscribe<F>(&self, callback: F) -> Subscription<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let callback: Callback<T> = Arc::new(callback);
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        // Registering under the value lock puts the replay and the first
        // notification on opposite sides of any concurrent write.
        let current = {
            let guard = lock(&self.inner.value);
            lock(&self.inner.subscribers).push((id, Arc::clone(&callback)));
            guard.clone()
        };
        callback(&current);

        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Register a side effect that runs on every write. Unlike `subscribe`,
    /// the hook is not called with the current value on registration.
    pub fn on_write<F>(&self, hook: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        lock(&self.inner.hooks).push(Arc::new(hook));
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner.subscribers).len()
    }

    // Callers hold the value lock.
    fn listeners(&self) -> Listeners<T> {
        Listeners {
            hooks: lock(&self.inner.hooks).clone(),
            subscribers: lock(&self.inner.subscribers)
                .iter()
                .map(|(_, cb)| Arc::clone(cb))
                .collect(),
        }
    }
}

struct Listeners<T> {
    hooks: Vec<Callback<T>>,
    subscribers: Vec<Callback<T>>,
}

impl<T> Listeners<T> {
    fn deliver(self, value: &T) {
        for hook in self.hooks {
            hook(value);
        }
        for subscriber in self.subscribers {
            subscriber(value);
        }
    }
}

impl<T: Clone + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Handle returned by [`Observable::subscribe`]. Dropping it keeps the
/// subscription alive; call [`Subscription::unsubscribe`] to stop receiving
/// values.
pub struct Subscription<T> {
    id: u64,
    inner: std::sync::Weak<Inner<T>>,
}

impl<T> Subscription<T> {
    pub fn unsubscribe(self) {
        if let Some(inner) = self.inner.upgrade() {
            lock(&inner.subscribers).retain(|(id, _)| *id != self.id);
        }
    }
}
