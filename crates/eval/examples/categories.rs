// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example categories -- --jokers --samples 1000000
// ...
// Total hands      1000000
// Elapsed:         ...
// Hands/sec:       ...
// ```
use clap::Parser;
use rand::prelude::*;
use std::time::Instant;

use wildcard_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of 7 cards hands to sample.
    #[clap(long, short, default_value_t = 100_000)]
    samples: usize,
    /// Sample from a deck with the two jokers.
    #[clap(long, short)]
    jokers: bool,
    /// The random generator seed.
    #[clap(long)]
    seed: Option<u64>,
}

#[rustfmt::skip]
fn main() {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let deck = if cli.jokers { Deck::with_jokers() } else { Deck::default() };

    // Count the best hand category of each sampled hand.
    let now = Instant::now();
    let mut counts = [0usize; 9];

    deck.sample(&mut rng, cli.samples, 7, |hand| {
        if let Some((value, _)) = HandValue::eval_with_best_hand(hand) {
            counts[value.rank() as usize] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ALL {
        let count = counts[rank as usize];
        let pct = 100.0 * count as f64 / total.max(1) as f64;
        println!("{:<16} {count:>10} {pct:>6.2}%", format!("{rank}:"));
    }
}
