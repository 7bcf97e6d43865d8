//! Single-threaded observable value with current-value replay.
//!
//! Subscribers are called synchronously, in subscription order, before
//! `set` returns. A new subscriber is immediately called with the current
//! value.

use std::cell::{Cell, RefCell};
use std::pin::Pin;
use std::rc::{Rc, Weak};
use std::task::{Context, Poll};

use futures_channel::mpsc;
use futures_util::Stream;

type Listener<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: RefCell<T>,
    listeners: RefCell<Vec<(u64, Listener<T>)>>,
    next_id: Cell<u64>,
}

/// A value that notifies listeners on every write.
pub struct Observable<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Current value snapshot
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Store a new value and notify every listener before returning.
    ///
    /// Listeners may read the observable or subscribe/unsubscribe while
    /// being notified; the listener list is snapshotted first.
    pub(crate) fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value.clone();
        let listeners: Vec<Listener<T>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(&value);
        }
    }

    /// Register a listener. It is called once with the current value,
    /// then on every change until the returned `Subscription` is dropped.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let listener: Listener<T> = Rc::new(listener);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, listener.clone()));

        let current = self.get();
        listener(&current);

        let weak: Weak<Inner<T>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
            }
        })
    }

    /// Changes as an async stream; the first item is the current value.
    pub fn stream(&self) -> SubscriptionStream<T> {
        let (tx, rx) = mpsc::unbounded();
        let subscription = self.subscribe(move |value| {
            let _ = tx.unbounded_send(value.clone());
        });
        SubscriptionStream {
            rx,
            _subscription: subscription,
        }
    }

    /// Number of live listeners
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

/// Handle that removes its listener when dropped
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Keep the listener registered for the life of the observable
    pub fn detach(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Stream of observable values; unsubscribes when dropped.
pub struct SubscriptionStream<T> {
    rx: mpsc::UnboundedReceiver<T>,
    _subscription: Subscription,
}

impl<T> Stream for SubscriptionStream<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        Pin::new(&mut self.get_mut().rx).poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[test]
    fn subscribe_replays_current_value() {
        let obs = Observable::new(7);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let _sub = obs.subscribe(move |v| seen_clone.borrow_mut().push(*v));
        assert_eq!(*seen.borrow(), vec![7]);
    }

    #[test]
    fn set_notifies_synchronously() {
        let obs = Observable::new(false);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let _sub = obs.subscribe(move |v| seen_clone.borrow_mut().push(*v));
        obs.set(true);
        assert_eq!(*seen.borrow(), vec![false, true]);
    }

    #[test]
    fn dropping_subscription_stops_notifications() {
        let obs = Observable::new(0);
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let sub = obs.subscribe(move |_| count_clone.set(count_clone.get() + 1));
        assert_eq!(obs.listener_count(), 1);
        drop(sub);
        assert_eq!(obs.listener_count(), 0);
        obs.set(1);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn detached_subscription_keeps_listening() {
        let obs = Observable::new(0);
        let last = Rc::new(Cell::new(0));
        let last_clone = last.clone();
        obs.subscribe(move |v| last_clone.set(*v)).detach();
        obs.set(5);
        assert_eq!(last.get(), 5);
    }

    #[test]
    fn listener_can_read_during_notification() {
        let obs = Observable::new(1);
        let reader = obs.clone();
        let seen = Rc::new(Cell::new(0));
        let seen_clone = seen.clone();
        let _sub = obs.subscribe(move |_| seen_clone.set(reader.get()));
        obs.set(2);
        assert_eq!(seen.get(), 2);
    }

    #[tokio::test]
    async fn stream_yields_current_then_changes() {
        let obs = Observable::new("a".to_string());
        let mut stream = obs.stream();
        obs.set("b".to_string());
        assert_eq!(stream.next().await.as_deref(), Some("a"));
        assert_eq!(stream.next().await.as_deref(), Some("b"));
        drop(stream);
        assert_eq!(obs.listener_count(), 0);
    }
}
