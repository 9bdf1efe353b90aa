// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildcard Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands that may include the black
//! and red jokers. A black joker stands for any club or spade and a red joker
//! for any heart or diamond.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank:
//!
//! ```
//! # use wildcard_eval::*;
//! let flush = parse_hand("2H 5H 9H JH KH").unwrap();
//! let quads = parse_hand("TD TC 7C ?R ?B").unwrap();
//! let v1 = HandValue::eval(&flush);
//! let v2 = HandValue::eval(&quads);
//! assert_eq!(v1.rank(), HandRank::Flush);
//! assert_eq!(v2.rank(), HandRank::FourOfAKind);
//! assert!(v2 > v1);
//! ```
//!
//! or search the best 5 cards out of 7:
//!
//! ```
//! # use wildcard_eval::*;
//! let hand = parse_hand("6C 7C 8C 9C TC 5C ?B").unwrap();
//! let best = best_wild_hand(&hand).unwrap();
//! let resolved = resolve_jokers(&best);
//! assert!(best.contains(&Card::BLACK_JOKER));
//! assert!(resolved.contains(&Card::new(Rank::Jack, Suit::Clubs)));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue, best_hand, best_wild_hand, resolve_jokers};

// Reexport cards types.
pub use wildcard_cards::{Card, Color, Deck, ParseCardError, Rank, Suit, parse_hand};
