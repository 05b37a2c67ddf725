// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Refill seam: where new cards come from once the deck runs out.
//!
//! The deck never fetches anything itself. Hand [`Deck::refill_from`](crate::deck::Deck::refill_from)
//! any [`ItemSource`]; closures returning a `Vec` qualify.
//!
//! ```
//! use swipedeck::{Deck, DeckConfig, Item};
//! use swipedeck::source::IdSequence;
//!
//! let mut ids = IdSequence::new();
//! let mut source = move || {
//!     ids.batch(3, |id| Item {
//!         id,
//!         text: format!("Card #{}", id + 1),
//!         uri: format!("https://example.invalid/{id}.jpg"),
//!     })
//! };
//!
//! let mut deck: Deck<Item> = Deck::new(DeckConfig::default()).unwrap();
//! assert!(deck.is_exhausted());
//! assert!(deck.refill_from(&mut source));
//! assert_eq!(deck.items().len(), 3);
//! // Not exhausted: the source is left alone.
//! assert!(!deck.refill_from(&mut source));
//! ```

/// A producer of fresh item lists.
///
/// Every batch must use keys that are unique across all batches the deck has seen, ordered the
/// way the cards should be dealt.
pub trait ItemSource<T> {
    /// Produce the next list of items. An empty list leaves the deck exhausted.
    fn next_batch(&mut self) -> Vec<T>;
}

impl<T, F> ItemSource<T> for F
where
    F: FnMut() -> Vec<T>,
{
    fn next_batch(&mut self) -> Vec<T> {
        self()
    }
}

/// Monotonic id allocator shared by every batch of one session.
///
/// Keeps ids unique across refills, so a rendering surface keyed by id never confuses a new card
/// with a dismissed one.
#[derive(Clone, Debug, Default)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Start at id `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id that will be handed out.
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Allocate one id.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Build `len` items with consecutive ids, in id order.
    pub fn batch<T>(&mut self, len: usize, mut make: impl FnMut(u64) -> T) -> Vec<T> {
        (0..len).map(|_| make(self.next_id())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_continue_across_batches() {
        let mut ids = IdSequence::new();
        let a = ids.batch(3, |id| id);
        let b = ids.batch(2, |id| id);
        assert_eq!(a, vec![0, 1, 2]);
        assert_eq!(b, vec![3, 4]);
        assert_eq!(ids.peek(), 5);
    }

    #[test]
    fn closures_are_sources() {
        let mut calls = 0;
        let mut src = || {
            calls += 1;
            vec![calls]
        };
        assert_eq!(src.next_batch(), vec![1]);
        assert_eq!(src.next_batch(), vec![2]);
    }
}
