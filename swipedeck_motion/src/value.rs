// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observable value cell.
//!
//! ## Usage
//!
//! 1) Create an [`AnimatedValue`] owned by the widget that drives it.
//! 2) Let visual consumers [`subscribe`](AnimatedValue::subscribe) to changes.
//! 3) Write with [`set`](AnimatedValue::set) from exactly one mutator at a time (a gesture or an
//!    animation step); every subscriber observes the new value in subscription order.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use swipedeck_motion::value::AnimatedValue;
//!
//! let seen = Rc::new(Cell::new(0.0));
//! let mut v = AnimatedValue::new(0.0_f64);
//! let sink = Rc::clone(&seen);
//! let id = v.subscribe(move |x| sink.set(x));
//!
//! v.set(12.5);
//! assert_eq!(seen.get(), 12.5);
//!
//! assert!(v.unsubscribe(id));
//! v.set(99.0);
//! assert_eq!(seen.get(), 12.5);
//! ```

/// Handle returned by [`AnimatedValue::subscribe`], used to unsubscribe.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

struct Subscriber<T> {
    id: SubscriptionId,
    notify: Box<dyn FnMut(T)>,
}

/// A value with a subscribe-on-change contract.
///
/// Unlike a global animated node, ownership is scoped to one instance: dropping the cell drops
/// its subscribers.
pub struct AnimatedValue<T> {
    value: T,
    subscribers: Vec<Subscriber<T>>,
    next_id: u64,
}

impl<T: core::fmt::Debug> core::fmt::Debug for AnimatedValue<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AnimatedValue")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl<T: Default + Copy> Default for AnimatedValue<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Copy> AnimatedValue<T> {
    /// Create a cell holding `value` with no subscribers.
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current value.
    #[inline]
    pub fn get(&self) -> T {
        self.value
    }

    /// Replace the value and notify every subscriber.
    ///
    /// Subscribers are notified even if the new value equals the old one; a gesture that
    /// reports the same offset twice still counts as a frame.
    pub fn set(&mut self, value: T) {
        self.value = value;
        for s in &mut self.subscribers {
            (s.notify)(value);
        }
    }

    /// Register `notify` to be called with every new value.
    pub fn subscribe(&mut self, notify: impl FnMut(T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            notify: Box::new(notify),
        });
        id
    }

    /// Remove a subscriber. Returns `false` if `id` was not (or is no longer) subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;
    use std::cell::RefCell;
    use std::rc::Rc;

    // Subscribers fire in registration order with the written value.
    #[test]
    fn set_notifies_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut v = AnimatedValue::new(Vec2::ZERO);
        let a = Rc::clone(&log);
        v.subscribe(move |p: Vec2| a.borrow_mut().push(("a", p.x)));
        let b = Rc::clone(&log);
        v.subscribe(move |p: Vec2| b.borrow_mut().push(("b", p.x)));

        v.set(Vec2::new(3.0, 0.0));
        assert_eq!(*log.borrow(), vec![("a", 3.0), ("b", 3.0)]);
        assert_eq!(v.get(), Vec2::new(3.0, 0.0));
    }

    // Repeated writes of the same value still notify.
    #[test]
    fn equal_writes_still_notify() {
        let count = Rc::new(RefCell::new(0));
        let mut v = AnimatedValue::new(1.0_f64);
        let c = Rc::clone(&count);
        v.subscribe(move |_| *c.borrow_mut() += 1);
        v.set(1.0);
        v.set(1.0);
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn unsubscribe_is_exact_and_idempotent() {
        let mut v = AnimatedValue::new(0.0_f64);
        let a = v.subscribe(|_| {});
        let b = v.subscribe(|_| {});
        assert_ne!(a, b);
        assert_eq!(v.subscriber_count(), 2);
        assert!(v.unsubscribe(a));
        assert!(!v.unsubscribe(a));
        assert_eq!(v.subscriber_count(), 1);
        assert!(v.unsubscribe(b));
        assert_eq!(v.subscriber_count(), 0);
    }
}
