// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipedeck: a headless stack of swipeable cards.
//!
//! ## Overview
//!
//! This crate implements the interaction logic of a "swipe left / swipe right" card deck without
//! drawing anything. It turns a drag gesture on the top card into either a dismissal (the card
//! flies off-screen and the next one becomes interactive) or a reset (the card springs back), and
//! derives where every visible card sits, how it is rotated, and how the stack layers.
//!
//! Rendering, image loading, and input capture belong to the host toolkit. The deck consumes
//! gesture deltas and frame times; it produces [`CardLayout`](crate::layout::CardLayout)s and
//! [`DeckEvent`](crate::types::DeckEvent)s.
//!
//! ## Model
//!
//! - [`Deck`](crate::deck::Deck): the items, a cursor to the top card, and the drag offset.
//!   Items before the cursor are dismissed and never shown again; the item at the cursor is the
//!   only interactive card; later items form the inert stack.
//! - [`Phase`](crate::types::Phase): `Idle → Dragging → Committing(direction) | Resetting → Idle`.
//! - [`DeckConfig`](crate::config::DeckConfig): screen width, threshold, timing, and springs.
//!   The commit threshold is a fraction of the screen width (a quarter by default).
//! - [`LayerKey`](crate::types::LayerKey): abstract stacking order, strictly decreasing down the
//!   stack. Map it onto a z-index, an elevation, or paint order.
//!
//! ## Workflow
//!
//! 1) Build a deck with [`Deck::with_items`](crate::deck::Deck::with_items).
//! 2) Route pointer input on the top card to [`begin`](crate::deck::Deck::begin),
//!    [`update`](crate::deck::Deck::update), and [`release`](crate::deck::Deck::release).
//! 3) On every animation frame call [`advance`](crate::deck::Deck::advance), then draw from
//!    [`render`](crate::deck::Deck::render) or [`layout`](crate::deck::Deck::layout).
//! 4) When [`DeckEvent::Exhausted`](crate::types::DeckEvent::Exhausted) arrives, supply a new list
//!    with [`set_items`](crate::deck::Deck::set_items) or
//!    [`refill_from`](crate::deck::Deck::refill_from).
//!
//! ```
//! use core::time::Duration;
//! use swipedeck::{Deck, DeckConfig, DeckEvent, Frame, Item};
//!
//! let items: Vec<Item> = (0..2)
//!     .map(|id| Item { id, text: format!("Card #{}", id + 1), uri: String::new() })
//!     .collect();
//! let mut deck = Deck::with_items(DeckConfig::for_screen_width(400.0), items).unwrap();
//! deck.set_on_swipe_left(|item: &Item| println!("nope: {}", item.text));
//!
//! for _ in 0..2 {
//!     assert!(deck.begin());
//!     deck.update(-60.0, 0.0);
//!     deck.release(-180.0, 0.0);
//!     while deck.is_animating() {
//!         for event in deck.advance(Duration::from_millis(16)) {
//!             if event == DeckEvent::Exhausted {
//!                 println!("all done");
//!             }
//!         }
//!     }
//! }
//!
//! let frame = deck.render(|item, _layout| item.text.clone(), || String::from("All Done!"));
//! assert_eq!(frame, Frame::Exhausted(String::from("All Done!")));
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`Item`](crate::types::Item) and
//!   [`DeckConfig`](crate::config::DeckConfig).
//!
//! ## Logging
//!
//! State transitions are reported through [`tracing`] at `debug` level and per-frame drag updates
//! at `trace` level. The crate never installs a subscriber.

pub mod config;
pub mod deck;
pub mod layout;
pub mod source;
pub mod types;

pub use config::{ConfigError, DeckConfig};
pub use deck::{Deck, Frame};
pub use layout::{CardLayout, CardRole};
pub use source::{IdSequence, ItemSource};
pub use types::{Changes, DeckEvent, Direction, Item, Keyed, LayerKey, Phase, Release};
