// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted gestures against a three-card deck.
//!
//! Swipes the first card right, lets the second spring back from a short drag, then dismisses the
//! rest and supplies a fresh list.
//!
//! Run:
//! - `cargo run -p swipedeck_demos --example deck_basics`
//! - `RUST_LOG=swipedeck=debug cargo run -p swipedeck_demos --example deck_basics`

use core::time::Duration;
use std::cell::RefCell;
use std::rc::Rc;

use swipedeck::{Deck, DeckConfig, DeckEvent, Direction, Frame, Item, Release};
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(16);

fn item(id: u64) -> Item {
    Item {
        id,
        text: format!("Card #{}", id + 1),
        uri: format!("https://picsum.photos/seed/{id}/1280/1024"),
    }
}

fn drag(deck: &mut Deck<Item>, dx: f64) -> Release {
    assert!(deck.begin(), "top card should accept the gesture");
    for i in 1..=10 {
        let t = f64::from(i) / 10.0;
        deck.update(dx * t, 4.0 * t);
    }
    deck.release(dx, 4.0)
}

fn settle(deck: &mut Deck<Item>) -> Vec<DeckEvent<u64>> {
    let mut events = Vec::new();
    while deck.is_animating() {
        events.extend(deck.advance(FRAME));
    }
    events
}

fn show(deck: &Deck<Item>) {
    match deck.render(|it, _| it.text.clone(), || String::from("All Done! (No more cards)")) {
        Frame::Cards(cards) => {
            for (layout, text) in cards {
                println!(
                    "  {text:<10} layer={:>3} offset=({:>6.1}, {:>5.1}) rot={:>6.1}°{}",
                    layout.layer.get(),
                    layout.offset().x,
                    layout.offset().y,
                    layout.rotation_degrees,
                    if layout.is_top() { "  <- top" } else { "" }
                );
            }
        }
        Frame::Exhausted(text) => println!("  {text}"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = DeckConfig::for_screen_width(400.0);
    let mut deck = Deck::with_items(config, (0..3).map(item).collect())
        .expect("default configuration is valid");

    let swiped = Rc::new(RefCell::new(Vec::new()));
    let right = Rc::clone(&swiped);
    deck.set_on_swipe_right(move |it: &Item| right.borrow_mut().push((Direction::Right, it.id)));
    let left = Rc::clone(&swiped);
    deck.set_on_swipe_left(move |it: &Item| left.borrow_mut().push((Direction::Left, it.id)));

    println!("== Initial ==");
    show(&deck);

    println!("== Drag card #1 to dx=150 mid-gesture ==");
    assert!(deck.begin());
    deck.update(150.0, 0.0);
    show(&deck);
    assert_eq!(deck.release(150.0, 0.0), Release::Commit(Direction::Right));
    let events = settle(&mut deck);
    println!("  events: {events:?}");
    assert_eq!(deck.index(), 1);

    println!("== Drag card #2 to dx=-40 and let go ==");
    assert_eq!(drag(&mut deck, -40.0), Release::Reset);
    let events = settle(&mut deck);
    println!("  events: {events:?}");
    assert_eq!(events, vec![DeckEvent::Settled]);
    assert_eq!(deck.index(), 1);
    show(&deck);

    println!("== Dismiss the rest ==");
    drag(&mut deck, -220.0);
    settle(&mut deck);
    drag(&mut deck, 260.0);
    let events = settle(&mut deck);
    println!("  events: {events:?}");
    assert_eq!(events.last(), Some(&DeckEvent::Exhausted));
    show(&deck);

    println!("== Fresh list ==");
    deck.set_items((3..8).map(item).collect());
    assert_eq!(deck.index(), 0);
    show(&deck);

    println!("== Callbacks ==\n  {:?}", swiped.borrow());
    assert_eq!(
        *swiped.borrow(),
        vec![
            (Direction::Right, 0),
            (Direction::Left, 1),
            (Direction::Right, 2)
        ]
    );
}
