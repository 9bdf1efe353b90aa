// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ranking and hand values.
use serde::{Deserialize, Serialize};
use std::{fmt, iter};

use super::predicates::*;
use wildcard_cards::{Card, Rank};

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// All the hand ranks from the lowest.
    pub const ALL: [HandRank; 9] = [
        HandRank::HighCard,
        HandRank::OnePair,
        HandRank::TwoPair,
        HandRank::ThreeOfAKind,
        HandRank::Straight,
        HandRank::Flush,
        HandRank::FullHouse,
        HandRank::FourOfAKind,
        HandRank::StraightFlush,
    ];
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{s}")
    }
}

/// The value of a 5 cards hand, a higher value is a stronger hand.
///
/// The value is packed in a u32 so that comparing values compares hands:
///
/// ```text
///   +--------+--------+--------+--------+
///   |cccc1111|22223333|44445555|66667777|
///   +--------+--------+--------+--------+
///   c = the hand category (HighCard=0,...,StraightFlush=8)
///   1..7 = tiebreak rank weights, most significant first, 0 if unused
/// ```
///
/// Jokers are replaced by the rank they stand for before packing, so the
/// joker weight never takes part in a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u32);

impl HandValue {
    const CATEGORY_SHIFT: u32 = 28;
    const MAX_TIEBREAKERS: usize = 7;

    fn new(rank: HandRank, tiebreak: impl IntoIterator<Item = Rank>) -> Self {
        let mut value = (rank as u32) << Self::CATEGORY_SHIFT;
        let mut shift = Self::CATEGORY_SHIFT;

        for rank in tiebreak.into_iter().take(Self::MAX_TIEBREAKERS) {
            debug_assert!(!rank.is_joker(), "Jokers must be resolved");
            shift -= 4;
            value |= u32::from(rank.weight()) << shift;
        }

        Self(value)
    }

    /// Evaluates a 5 cards hand that may contain jokers.
    ///
    /// Panics if the hand doesn't have 5 cards.
    pub fn eval(cards: &[Card]) -> Self {
        assert_eq!(cards.len(), 5, "A hand value needs 5 cards");

        let ranks = card_ranks(cards);
        let is_flush = flush(cards);
        let straight = straight_high(&ranks);

        if let (Some(high), true) = (straight, is_flush) {
            return Self::new(HandRank::StraightFlush, [high]);
        }

        if let Some(quads) = kind(4, &ranks) {
            // A joker left over after the quads is an ace kicker.
            let kicker = joker_free_hand(&ranks)
                .iter()
                .copied()
                .find(|&r| r != quads)
                .unwrap_or(Rank::Ace);
            return Self::new(HandRank::FourOfAKind, [quads, kicker]);
        }

        if let Some((trips, pair)) = full_house(&ranks) {
            return Self::new(HandRank::FullHouse, [trips, pair]);
        }

        if is_flush {
            // Jokers take the highest ranks missing from the hand.
            let missing = Rank::ranks().rev().filter(|r| !ranks.contains(r));
            return Self::new(HandRank::Flush, fill_jokers(&ranks, missing));
        }

        if let Some(high) = straight {
            return Self::new(HandRank::Straight, [high]);
        }

        if let Some(trips) = kind(3, &ranks) {
            let tiebreak = iter::once(trips).chain(fill_jokers(&ranks, iter::repeat(trips)));
            return Self::new(HandRank::ThreeOfAKind, tiebreak);
        }

        if let Some((high, low)) = two_pair(&ranks) {
            let promoted = [high, low]
                .into_iter()
                .filter(|&r| count(r, &ranks) < 2);
            let tiebreak = [high, low]
                .into_iter()
                .chain(fill_jokers(&ranks, promoted));
            return Self::new(HandRank::TwoPair, tiebreak);
        }

        if let Some(pair) = kind(2, &ranks) {
            let tiebreak = iter::once(pair).chain(fill_jokers(&ranks, iter::repeat(pair)));
            return Self::new(HandRank::OnePair, tiebreak);
        }

        Self::new(HandRank::HighCard, fill_jokers(&ranks, iter::empty()))
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        HandRank::ALL[(self.0 >> Self::CATEGORY_SHIFT) as usize]
    }

    /// The tiebreak ranks, most significant first.
    pub fn tiebreakers(&self) -> impl Iterator<Item = Rank> {
        let value = self.0;
        (0..Self::MAX_TIEBREAKERS as u32)
            .rev()
            .map(move |nibble| ((value >> (nibble * 4)) & 0xf) as u8)
            .take_while(|&weight| weight != 0)
            .filter_map(Rank::from_weight)
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank())
    }
}

/// Replaces the leading jokers with the given ranks and sorts the result
/// from highest to lowest, jokers with no rank to fill become aces.
fn fill_jokers(ranks: &[Rank], fills: impl IntoIterator<Item = Rank>) -> Vec<Rank> {
    let jokers = jokers(ranks);
    let mut filled = fills
        .into_iter()
        .chain(iter::repeat(Rank::Ace))
        .take(jokers)
        .chain(joker_free_hand(ranks).iter().copied())
        .collect::<Vec<_>>();
    filled.sort_unstable_by(|a, b| b.cmp(a));
    filled
}
