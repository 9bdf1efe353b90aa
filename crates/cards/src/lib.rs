// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildcard Poker cards types.
//!
//! This crate define types to create cards, including the two jokers:
//!
//! ```
//! # use wildcard_cards::{Card, Color, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let jb = Card::joker(Color::Black);
//! assert_eq!(ah.to_string(), "AH");
//! assert_eq!(jb.to_string(), "?B");
//! ```
//!
//! Cards can be parsed from their 2 characters tokens:
//!
//! ```
//! # use wildcard_cards::{parse_hand, Card, Rank, Suit};
//! let hand = parse_hand("TD TC 5H 5C 7C ?R ?B").unwrap();
//! assert_eq!(hand.len(), 7);
//! assert_eq!(hand[0], Card::new(Rank::Ten, Suit::Diamonds));
//! assert!(hand[6].is_joker());
//! ```
//!
//! and a [Deck] type for shuffling, sampling, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use wildcard_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! to sample 10 random 7-cards hands from a deck with jokers:
//!
//! ```
//! # use wildcard_cards::Deck;
//! let mut counter = 0;
//! Deck::with_jokers().sample(&mut rand::rng(), 10, 7, |hand| {
//!     assert_eq!(hand.len(), 7);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
//!
//! The [Combinations] iterator generates the k-subsets of any slice:
//!
//! ```
//! # use wildcard_cards::{nck, Combinations};
//! let hand = [1, 2, 3, 4, 5, 6, 7];
//! assert_eq!(Combinations::new(&hand, 5).count(), nck(7, 5));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Color, ParseCardError, Rank, Suit, card_ranks, flush, parse_hand};

mod combinations;
pub use combinations::{Combinations, nck};

mod deck;
pub use deck::Deck;
