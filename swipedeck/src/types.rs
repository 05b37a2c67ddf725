// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the deck: items, keys, directions, phases, layering, and change flags.

/// A card's content.
///
/// Owned by the caller and never mutated by the deck. `id` is the stable rendering key and must be
/// unique across every list handed to a [`Deck`](crate::deck::Deck); the deck does not check this.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Unique, stable ordering key.
    pub id: u64,
    /// Caption shown under the image.
    pub text: String,
    /// Image location.
    pub uri: String,
}

/// Access to an item's stable rendering key.
///
/// Implement this for your own item type to use it with a [`Deck`](crate::deck::Deck).
pub trait Keyed {
    /// Key type; copied into layouts and events.
    type Key: Copy + Eq + core::fmt::Debug;
    /// Returns the item's key.
    fn key(&self) -> Self::Key;
}

impl Keyed for Item {
    type Key = u64;

    #[inline]
    fn key(&self) -> u64 {
        self.id
    }
}

/// Direction of a committed swipe.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Dismissed toward negative x.
    Left,
    /// Dismissed toward positive x.
    Right,
}

impl Direction {
    /// `-1.0` for [`Left`](Self::Left), `1.0` for [`Right`](Self::Right).
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Interaction phase of the top card.
///
/// Transitions:
/// - `Idle → Dragging` on [`begin`](crate::deck::Deck::begin).
/// - `Resetting → Dragging` on `begin` (the spring is interrupted).
/// - `Dragging → Committing(dir)` on a release past the threshold.
/// - `Dragging → Resetting` on a release within the threshold, or on cancel.
/// - `Committing(dir) → Idle` when the off-screen animation completes (index advances).
/// - `Resetting → Idle` when the spring settles.
/// - any → `Idle` when a new item list is supplied.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum Phase {
    /// Card at rest; no gesture or animation owns the position.
    #[default]
    Idle,
    /// A gesture owns the position.
    Dragging,
    /// The card is animating off-screen and will be dismissed.
    Committing(Direction),
    /// The card is springing back to rest.
    Resetting,
}

/// Outcome of [`Deck::release`](crate::deck::Deck::release).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Release {
    /// Past the threshold: the card is leaving in this direction.
    Commit(Direction),
    /// Within the threshold: the card springs back.
    Reset,
    /// No gesture was active (exhausted deck, detached gesture, or no `begin`).
    Ignored,
}

/// Notifications produced while advancing animations.
///
/// Returned by [`Deck::advance`](crate::deck::Deck::advance).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DeckEvent<K> {
    /// A card finished leaving the screen and was dismissed.
    Swiped {
        /// Swipe direction.
        direction: Direction,
        /// Key of the dismissed item.
        key: K,
        /// Position of the dismissed item in the list.
        index: usize,
    },
    /// The last card was dismissed; the terminal visual is now shown.
    Exhausted,
    /// A reset spring came to rest.
    Settled,
}

/// Abstract stacking order for a card. Higher is drawn on top.
///
/// Keys decrease strictly with the item's list position, so the top card always occludes the
/// rest of the stack. Rendering surfaces map the value onto their own mechanism (a z-index,
/// an elevation, or plain paint order).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct LayerKey(i32);

impl LayerKey {
    /// Layer for the item at `item_index` in the list.
    ///
    /// Strictly monotonic for every index representable as `i32`.
    pub fn for_index(item_index: usize) -> Self {
        Self(i32::try_from(item_index).map_or(i32::MIN, |i| -i))
    }

    /// Raw stacking value.
    #[inline]
    pub fn get(self) -> i32 {
        self.0
    }
}

bitflags::bitflags! {
    /// What changed since the host last called
    /// [`Deck::take_changes`](crate::deck::Deck::take_changes).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Changes: u8 {
        /// The top card's drag offset moved.
        const POSITION = 0b0000_0001;
        /// The top card changed (a card was dismissed).
        const INDEX    = 0b0000_0010;
        /// The item list was replaced.
        const ITEMS    = 0b0000_0100;
        /// The stack's settle offset moved.
        const STACK    = 0b0000_1000;
    }
}
