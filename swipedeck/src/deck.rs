// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deck controller: the gesture → animation state machine.
//!
//! ## Overview
//!
//! A [`Deck`] owns an ordered item list, a cursor to the top card, and the top card's drag
//! offset (an [`AnimatedValue`]). The host feeds it three kinds of input, all on the UI thread:
//!
//! - Gesture events: [`begin`](Deck::begin), [`update`](Deck::update),
//!   [`release`](Deck::release), and [`cancel`](Deck::cancel).
//! - Animation frames: [`advance`](Deck::advance) with the time since the previous frame.
//! - Data: [`set_items`](Deck::set_items) or [`refill_from`](Deck::refill_from).
//!
//! It answers with per-card [`CardLayout`]s via [`layout`](Deck::layout) or
//! [`render`](Deck::render), and with [`DeckEvent`]s from `advance`.
//!
//! ## Commit transaction
//!
//! A release past the threshold starts the off-screen animation and nothing else. When a later
//! `advance` finishes that animation, one step runs the swipe callback with the dismissed item,
//! increments the cursor, and snaps the drag offset back to zero. No render can observe the old
//! cursor with the reset offset.
//!
//! ## Replacing items mid-flight
//!
//! [`set_items`](Deck::set_items) cancels whatever owns the drag offset: an in-flight commit or
//! reset animation is dropped without running callbacks, the offset snaps to zero, and the phase
//! returns to [`Phase::Idle`]. A gesture that was in progress is detached; its remaining
//! `update`/`release` calls are ignored until the next `begin`.

use core::time::Duration;

use kurbo::Vec2;
use swipedeck_motion::{AnimatedValue, Interpolation, Spring, SubscriptionId, Timing};
use tracing::{debug, trace};

use crate::config::{ConfigError, DeckConfig};
use crate::layout::{CardLayout, StackPose, card_layout};
use crate::source::ItemSource;
use crate::types::{Changes, DeckEvent, Direction, Keyed, Phase, Release};

type SwipeCallback<T> = Box<dyn FnMut(&T)>;

/// Owner of the drag offset.
#[derive(Debug)]
enum Motion {
    Idle,
    Dragging,
    Committing {
        direction: Direction,
        anim: Timing<Vec2>,
    },
    Resetting(Spring<Vec2>),
}

impl Motion {
    fn phase(&self) -> Phase {
        match self {
            Self::Idle => Phase::Idle,
            Self::Dragging => Phase::Dragging,
            Self::Committing { direction, .. } => Phase::Committing(*direction),
            Self::Resetting(_) => Phase::Resetting,
        }
    }
}

/// Animation that finished during a frame.
enum Finished {
    Commit(Direction),
    Reset,
}

/// Result of [`Deck::render`].
#[derive(Clone, Debug, PartialEq)]
pub enum Frame<K, V> {
    /// Visible cards in list order (top card first), each with its rendered visual.
    Cards(Vec<(CardLayout<K>, V)>),
    /// The deck is exhausted; the terminal visual.
    Exhausted(V),
}

/// A stack of swipeable cards.
///
/// ```
/// use core::time::Duration;
/// use swipedeck::{Deck, DeckConfig, DeckEvent, Direction, Item, Release};
///
/// let items = (0..3)
///     .map(|id| Item { id, text: String::new(), uri: String::new() })
///     .collect();
/// let mut deck = Deck::with_items(DeckConfig::for_screen_width(400.0), items).unwrap();
///
/// assert!(deck.begin());
/// deck.update(120.0, 4.0);
/// assert_eq!(deck.release(150.0, 4.0), Release::Commit(Direction::Right));
///
/// let mut events = Vec::new();
/// while deck.is_animating() {
///     events.extend(deck.advance(Duration::from_millis(16)));
/// }
/// assert_eq!(
///     events,
///     vec![DeckEvent::Swiped { direction: Direction::Right, key: 0, index: 0 }]
/// );
/// assert_eq!(deck.index(), 1);
/// ```
pub struct Deck<T> {
    config: DeckConfig,
    rotation: Interpolation<3>,
    items: Vec<T>,
    index: usize,
    position: AnimatedValue<Vec2>,
    motion: Motion,
    settle: Option<Spring<f64>>,
    settle_offset: f64,
    on_swipe_left: Option<SwipeCallback<T>>,
    on_swipe_right: Option<SwipeCallback<T>>,
    changes: Changes,
}

impl<T> core::fmt::Debug for Deck<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Deck")
            .field("items", &self.items.len())
            .field("index", &self.index)
            .field("phase", &self.motion.phase())
            .field("position", &self.position.get())
            .field("settle_offset", &self.settle_offset)
            .finish_non_exhaustive()
    }
}

impl<T: Keyed> Deck<T> {
    /// Create an empty (exhausted) deck.
    pub fn new(config: DeckConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rotation = config.rotation()?;
        Ok(Self {
            config,
            rotation,
            items: Vec::new(),
            index: 0,
            position: AnimatedValue::new(Vec2::ZERO),
            motion: Motion::Idle,
            settle: None,
            settle_offset: 0.0,
            on_swipe_left: None,
            on_swipe_right: None,
            changes: Changes::empty(),
        })
    }

    /// Create a deck dealing `items` from the first one.
    pub fn with_items(config: DeckConfig, items: Vec<T>) -> Result<Self, ConfigError> {
        let mut deck = Self::new(config)?;
        deck.items = items;
        deck.changes = Changes::ITEMS;
        Ok(deck)
    }

    /// Configuration the deck was built with.
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// The full item list, including dismissed items.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Cursor to the top card; equals `items().len()` once exhausted.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of cards not yet dismissed.
    pub fn remaining(&self) -> usize {
        self.items.len().saturating_sub(self.index)
    }

    /// True when no card is left to show.
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.items.len()
    }

    /// The interactive item, if any.
    pub fn top(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    /// Current interaction phase.
    pub fn phase(&self) -> Phase {
        self.motion.phase()
    }

    /// Current drag offset of the top card.
    pub fn position(&self) -> Vec2 {
        self.position.get()
    }

    /// True while a commit, reset, or stack settle animation still needs frames.
    pub fn is_animating(&self) -> bool {
        matches!(self.motion, Motion::Committing { .. } | Motion::Resetting(_))
            || self.settle.is_some()
    }

    /// Observe every change of the drag offset.
    pub fn subscribe_position(&mut self, notify: impl FnMut(Vec2) + 'static) -> SubscriptionId {
        self.position.subscribe(notify)
    }

    /// Stop observing the drag offset.
    pub fn unsubscribe_position(&mut self, id: SubscriptionId) -> bool {
        self.position.unsubscribe(id)
    }

    /// Called with each item dismissed to the left, after its animation completes.
    pub fn set_on_swipe_left(&mut self, callback: impl FnMut(&T) + 'static) {
        self.on_swipe_left = Some(Box::new(callback));
    }

    /// Called with each item dismissed to the right, after its animation completes.
    pub fn set_on_swipe_right(&mut self, callback: impl FnMut(&T) + 'static) {
        self.on_swipe_right = Some(Box::new(callback));
    }

    /// Return and clear the accumulated change flags.
    pub fn take_changes(&mut self) -> Changes {
        core::mem::replace(&mut self.changes, Changes::empty())
    }

    /// Replace the item list and deal from the first item.
    ///
    /// Any gesture or animation in flight is abandoned: no callback runs, the drag offset snaps
    /// to zero, and the phase becomes [`Phase::Idle`].
    pub fn set_items(&mut self, items: Vec<T>) {
        let interrupted = self.motion.phase();
        self.motion = Motion::Idle;
        self.items = items;
        self.index = 0;
        self.settle = None;
        self.settle_offset = 0.0;
        self.position.set(Vec2::ZERO);
        self.changes |= Changes::ITEMS | Changes::INDEX | Changes::POSITION | Changes::STACK;
        debug!(len = self.items.len(), ?interrupted, "item list replaced");
    }

    /// Pull a new list from `source` if the deck is exhausted.
    ///
    /// Returns `true` if a non-empty batch was installed. A deck that still has cards is left
    /// untouched, the source is not consulted, and the result is `false`.
    pub fn refill_from(&mut self, source: &mut impl ItemSource<T>) -> bool {
        if !self.is_exhausted() {
            return false;
        }
        let batch = source.next_batch();
        debug!(len = batch.len(), "refilling exhausted deck");
        self.set_items(batch);
        !self.is_exhausted()
    }

    /// A pointer went down on the top card.
    ///
    /// Returns whether the deck took ownership of the gesture. Rejected when the deck is
    /// exhausted or the top card is already leaving; a reset spring in progress is interrupted.
    pub fn begin(&mut self) -> bool {
        if self.is_exhausted() {
            trace!("gesture rejected: deck exhausted");
            return false;
        }
        match self.motion {
            Motion::Committing { .. } => {
                trace!("gesture rejected: commit in flight");
                return false;
            }
            Motion::Resetting(_) => debug!("reset interrupted by a new gesture"),
            Motion::Idle | Motion::Dragging => {}
        }
        self.motion = Motion::Dragging;
        true
    }

    /// The pointer moved; `(dx, dy)` is the displacement since the gesture began.
    ///
    /// Ignored unless a gesture owned by this deck is in progress.
    pub fn update(&mut self, dx: f64, dy: f64) {
        if !matches!(self.motion, Motion::Dragging) {
            return;
        }
        self.position.set(Vec2::new(dx, dy));
        self.changes |= Changes::POSITION;
        trace!(dx, dy, "drag");
    }

    /// The pointer lifted at `(dx, dy)`; decide between commit and reset.
    pub fn release(&mut self, dx: f64, dy: f64) -> Release {
        if !matches!(self.motion, Motion::Dragging) {
            trace!(dx, "release ignored: no gesture in progress");
            return Release::Ignored;
        }
        self.update(dx, dy);
        let threshold = self.config.swipe_threshold();
        let outcome = if dx > threshold {
            Release::Commit(Direction::Right)
        } else if dx < -threshold {
            Release::Commit(Direction::Left)
        } else {
            Release::Reset
        };
        match outcome {
            Release::Commit(direction) => self.start_commit(direction),
            Release::Reset | Release::Ignored => self.start_reset(),
        }
        outcome
    }

    /// The platform took the gesture away; treat it as an inconclusive release.
    ///
    /// Returns `false` if no gesture was in progress.
    pub fn cancel(&mut self) -> bool {
        if !matches!(self.motion, Motion::Dragging) {
            return false;
        }
        debug!("gesture cancelled");
        self.start_reset();
        true
    }

    /// Advance running animations by `dt` and report what completed.
    pub fn advance(&mut self, dt: Duration) -> Vec<DeckEvent<T::Key>> {
        let mut events = Vec::new();
        let finished = match &mut self.motion {
            Motion::Committing { direction, anim } => {
                let step = anim.step(dt);
                self.position.set(step.value);
                self.changes |= Changes::POSITION;
                step.finished.then_some(Finished::Commit(*direction))
            }
            Motion::Resetting(spring) => {
                let step = spring.step(dt);
                self.position.set(step.value);
                self.changes |= Changes::POSITION;
                step.finished.then_some(Finished::Reset)
            }
            Motion::Idle | Motion::Dragging => None,
        };
        match finished {
            Some(Finished::Commit(direction)) => self.complete_commit(direction, &mut events),
            Some(Finished::Reset) => {
                self.motion = Motion::Idle;
                debug!(index = self.index, "reset settled");
                events.push(DeckEvent::Settled);
            }
            None => {}
        }
        self.advance_settle(dt);
        events
    }

    /// Layouts of every visible card, top card first.
    ///
    /// Empty once the deck is exhausted.
    pub fn layout(&self) -> Vec<CardLayout<T::Key>> {
        let pose = self.pose();
        self.items
            .iter()
            .enumerate()
            .skip(self.index)
            .filter_map(|(i, item)| card_layout(&pose, i, item.key()))
            .collect()
    }

    /// Layout of the interactive card, if any.
    pub fn top_layout(&self) -> Option<CardLayout<T::Key>> {
        let item = self.top()?;
        card_layout(&self.pose(), self.index, item.key())
    }

    /// Render the visible cards with `card`, or the terminal visual with `terminal` once the
    /// deck is exhausted.
    ///
    /// `card` runs once per visible item, in list order.
    pub fn render<V>(
        &self,
        mut card: impl FnMut(&T, &CardLayout<T::Key>) -> V,
        terminal: impl FnOnce() -> V,
    ) -> Frame<T::Key, V> {
        if self.is_exhausted() {
            return Frame::Exhausted(terminal());
        }
        let pose = self.pose();
        let cards = self
            .items
            .iter()
            .enumerate()
            .skip(self.index)
            .filter_map(|(i, item)| {
                let layout = card_layout(&pose, i, item.key())?;
                let visual = card(item, &layout);
                Some((layout, visual))
            })
            .collect();
        Frame::Cards(cards)
    }

    fn pose(&self) -> StackPose<'_> {
        StackPose {
            top_index: self.index,
            position: self.position.get(),
            settle: self.settle_offset,
            stack_step: self.config.stack_step,
            rotation: &self.rotation,
        }
    }

    fn start_commit(&mut self, direction: Direction) {
        let from = self.position.get();
        let to = Vec2::new(self.config.off_screen_x(direction), from.y);
        let anim =
            Timing::new(from, to, self.config.swipe_duration).with_easing(self.config.swipe_easing);
        self.motion = Motion::Committing { direction, anim };
        debug!(index = self.index, ?direction, "commit started");
    }

    fn start_reset(&mut self) {
        let spring = Spring::new(self.position.get(), Vec2::ZERO, self.config.reset_spring);
        self.motion = Motion::Resetting(spring);
        debug!(index = self.index, "reset started");
    }

    fn complete_commit(&mut self, direction: Direction, events: &mut Vec<DeckEvent<T::Key>>) {
        let index = self.index;
        self.motion = Motion::Idle;
        let Some(item) = self.items.get(index) else {
            // Unreachable: replacing the list cancels the commit.
            self.position.set(Vec2::ZERO);
            return;
        };
        let key = item.key();
        let callback = match direction {
            Direction::Left => self.on_swipe_left.as_mut(),
            Direction::Right => self.on_swipe_right.as_mut(),
        };
        if let Some(callback) = callback {
            callback(item);
        }
        self.index += 1;
        self.position.set(Vec2::ZERO);
        self.changes |= Changes::INDEX | Changes::POSITION;
        debug!(index, ?direction, ?key, "card dismissed");
        events.push(DeckEvent::Swiped {
            direction,
            key,
            index,
        });
        if self.is_exhausted() {
            self.settle = None;
            self.settle_offset = 0.0;
            debug!(len = self.items.len(), "deck exhausted");
            events.push(DeckEvent::Exhausted);
        } else {
            self.start_settle();
        }
    }

    fn start_settle(&mut self) {
        let from = self.settle_offset + self.config.stack_step;
        self.settle_offset = from;
        self.settle = Some(Spring::new(from, 0.0, self.config.settle_spring));
        self.changes |= Changes::STACK;
    }

    fn advance_settle(&mut self, dt: Duration) {
        let Some(spring) = &mut self.settle else {
            return;
        };
        let step = spring.step(dt);
        self.settle_offset = step.value;
        self.changes |= Changes::STACK;
        if step.finished {
            self.settle = None;
        }
    }
}
