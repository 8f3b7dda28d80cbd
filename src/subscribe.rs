//! Typed observer contract shared by all three stores.
//!
//! Listeners are invoked synchronously, in registration order, with the
//! store's current snapshot on every mutation. `subscribe` hands back a
//! [`Subscription`] whose `unsubscribe` removes the listener again.

use std::sync::{Arc, Mutex};

type Callback<T> = Box<dyn Fn(&T) + Send + Sync + 'static>;

struct Registry<T> {
    next_id: u64,
    entries: Vec<(u64, Callback<T>)>,
}

/// Registration-ordered list of listener callbacks.
pub struct Listeners<T> {
    registry: Arc<Mutex<Registry<T>>>,
}

impl<T> Listeners<T> {
    /// Create an empty listener list.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register a listener. Dropping the returned [`Subscription`] keeps the
    /// listener alive; call [`Subscription::unsubscribe`] to remove it.
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription<T> {
        let mut registry = self.registry.lock().expect("listener registry poisoned");
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, Box::new(listener)));

        Subscription {
            id,
            registry: Arc::clone(&self.registry),
        }
    }

    /// Invoke every registered listener with the given snapshot.
    pub fn notify(&self, snapshot: &T) {
        let registry = self.registry.lock().expect("listener registry poisoned");
        for (_, listener) in &registry.entries {
            listener(snapshot);
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.registry
            .lock()
            .expect("listener registry poisoned")
            .entries
            .len()
    }

    /// Whether no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for a registered listener.
pub struct Subscription<T> {
    id: u64,
    registry: Arc<Mutex<Registry<T>>>,
}

impl<T> Subscription<T> {
    /// Remove the listener from its store.
    pub fn unsubscribe(self) {
        let mut registry = self.registry.lock().expect("listener registry poisoned");
        registry.entries.retain(|(id, _)| *id != self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn listeners_are_notified_in_registration_order() {
        let listeners: Listeners<u32> = Listeners::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let first = Arc::clone(&order);
        let _a = listeners.subscribe(move |v| first.lock().unwrap().push(("a", *v)));
        let second = Arc::clone(&order);
        let _b = listeners.subscribe(move |v| second.lock().unwrap().push(("b", *v)));

        listeners.notify(&7);

        assert_eq!(*order.lock().unwrap(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let listeners: Listeners<u32> = Listeners::new();
        let count = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&count);
        let sub = listeners.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        listeners.notify(&1);
        sub.unsubscribe();
        listeners.notify(&2);

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(listeners.is_empty());
    }

    #[test]
    fn unsubscribe_leaves_other_listeners_untouched() {
        let listeners: Listeners<u32> = Listeners::new();
        let count = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&count);
        let kept = listeners.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let dropped = listeners.subscribe(|_| {});

        dropped.unsubscribe();
        listeners.notify(&1);

        assert_eq!(count.load(Ordering::SeqCst), 1);
        kept.unsubscribe();
    }
}
