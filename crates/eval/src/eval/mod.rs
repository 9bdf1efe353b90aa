// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator with jokers.
//!
//! A 5 cards hand is ranked by [HandValue::eval] using the wild aware
//! [predicates], a joker counts as any rank and as any suit of its color. The
//! [best_hand] and [best_wild_hand] functions search all the 5 cards subsets
//! of a 7 cards hand for the best one, and [resolve_jokers] replaces the
//! jokers in a hand with the cards they stand for.

pub mod predicates;

mod value;
pub use value::{HandRank, HandValue};

mod best;
pub use best::{best_hand, best_wild_hand, resolve_jokers};
