// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Vec2;
use swipedeck::{Deck, DeckConfig, Item};
use swipedeck_motion::{Spring, SpringConfig};

fn gen_items(n: u64) -> Vec<Item> {
    (0..n)
        .map(|id| Item {
            id,
            text: format!("Card #{}", id + 1),
            uri: format!("https://example.invalid/{id}.jpg"),
        })
        .collect()
}

fn gen_deck(n: u64) -> Deck<Item> {
    Deck::with_items(DeckConfig::for_screen_width(400.0), gen_items(n)).unwrap()
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");
    for &subscribers in &[0usize, 4, 16] {
        group.throughput(Throughput::Elements(120));
        group.bench_function(format!("drag_120_events_s{subscribers}"), |b| {
            let mut deck = gen_deck(8);
            for _ in 0..subscribers {
                deck.subscribe_position(|p| {
                    black_box(p);
                });
            }
            assert!(deck.begin());
            b.iter(|| {
                for i in 0..120_u32 {
                    let dx = f64::from(i) * 2.5;
                    deck.update(black_box(dx), black_box(dx * 0.1));
                }
            });
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &n in &[8u64, 64, 512] {
        let mut deck = gen_deck(n);
        assert!(deck.begin());
        deck.update(130.0, -12.0);
        group.throughput(Throughput::Elements(n));
        group.bench_function(format!("visible_n{n}"), |b| {
            b.iter(|| black_box(deck.layout()));
        });
    }
    group.finish();
}

fn bench_commit_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("commit");
    group.bench_function("swipe_and_animate_16ms", |b| {
        b.iter_batched(
            || gen_deck(8),
            |mut deck| {
                assert!(deck.begin());
                deck.update(90.0, 0.0);
                deck.release(180.0, 0.0);
                while deck.is_animating() {
                    black_box(deck.advance(Duration::from_millis(16)));
                }
                black_box(deck.index());
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("reset_spring_to_rest", |b| {
        b.iter(|| {
            let mut s = Spring::new(Vec2::new(90.0, 30.0), Vec2::ZERO, SpringConfig::default());
            while !s.step(Duration::from_millis(16)).finished {}
            black_box(s.value());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_update, bench_layout, bench_commit_cycle);
criterion_main!(benches);
