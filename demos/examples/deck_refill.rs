// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-refill: deal batches of eight cards and fetch more whenever the deck runs out.
//!
//! A frame loop redraws only when [`Changes`] says something moved, and a position subscriber
//! mirrors what a rotation binding on the top card would see.
//!
//! Run:
//! - `cargo run -p swipedeck_demos --example deck_refill`

use core::time::Duration;
use std::cell::Cell;
use std::rc::Rc;

use kurbo::Point;
use swipedeck::{Changes, Deck, DeckConfig, DeckEvent, IdSequence, Item};
use tracing::info;
use tracing_subscriber::EnvFilter;

const BATCH: usize = 8;
const FRAME: Duration = Duration::from_millis(16);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut ids = IdSequence::new();
    let mut fetch = move || {
        ids.batch(BATCH, |id| Item {
            id,
            text: format!("Card #{}", id + 1),
            uri: format!("https://picsum.photos/seed/{id}/1280/1024"),
        })
    };

    let config = DeckConfig::for_screen_width(375.0);
    let mut deck: Deck<Item> = Deck::new(config).expect("valid configuration");
    let mut batches = 0;
    if deck.refill_from(&mut fetch) {
        batches += 1;
    }

    let max_x = Rc::new(Cell::new(0.0_f64));
    let sink = Rc::clone(&max_x);
    deck.subscribe_position(move |p| sink.set(sink.get().max(p.x.abs())));

    let mut dismissed = 0;
    let mut redraws = 0;
    let card_center = Point::new(187.5, 150.0);

    // Alternate directions; every third gesture is too short to commit.
    for gesture in 0..30 {
        let dx = match gesture % 3 {
            0 => 200.0,
            1 => -200.0,
            _ => 50.0,
        };
        if !deck.begin() {
            break;
        }
        deck.update(dx * 0.5, 0.0);
        deck.update(dx, 0.0);
        deck.release(dx, 0.0);

        while deck.is_animating() {
            for event in deck.advance(FRAME) {
                match event {
                    DeckEvent::Swiped { key, direction, .. } => {
                        dismissed += 1;
                        info!(key, ?direction, "swiped");
                    }
                    DeckEvent::Exhausted => {
                        info!("no more cards, fetching more");
                        if deck.refill_from(&mut fetch) {
                            batches += 1;
                        }
                    }
                    DeckEvent::Settled => {}
                }
            }
            if !deck.take_changes().is_empty() {
                redraws += 1;
            }
        }

        if let Some(top) = deck.top_layout() {
            let corner = top.transform(card_center) * Point::ORIGIN;
            println!(
                "card #{:>2} on top, {} left, corner at ({:.1}, {:.1})",
                top.key + 1,
                deck.remaining(),
                corner.x,
                corner.y
            );
        }
    }

    println!("== Summary ==");
    println!("  dismissed={dismissed} batches={batches} redraws={redraws}");
    println!("  furthest drag offset observed: {:.1}", max_x.get());

    assert_eq!(dismissed, 20);
    assert_eq!(batches, 3);
    assert!(max_x.get() >= 375.0 + 100.0);
    assert_eq!(deck.take_changes(), Changes::empty());
}
