// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wild aware hand predicates.
//!
//! All predicates take ranks sorted from highest to lowest as returned by
//! [card_ranks], so that jokers come first. A joker can stand for any rank,
//! the predicates count jokers to fill n-of-a-kind shortfalls and straight
//! gaps, the joker rank itself is never reported as a found rank.
pub use wildcard_cards::{card_ranks, flush};

use wildcard_cards::Rank;

/// Returns the number of leading jokers.
pub fn jokers(ranks: &[Rank]) -> usize {
    ranks.iter().take_while(|r| r.is_joker()).count()
}

/// Drops the leading jokers.
pub fn joker_free_hand(ranks: &[Rank]) -> &[Rank] {
    &ranks[jokers(ranks)..]
}

/// Number of times a rank appears.
pub(crate) fn count(rank: Rank, ranks: &[Rank]) -> usize {
    ranks.iter().filter(|&&r| r == rank).count()
}

/// Groups the non joker ranks into (rank, count) pairs, highest rank first.
fn groups(ranks: &[Rank]) -> impl Iterator<Item = (Rank, usize)> + '_ {
    debug_assert!(ranks.is_sorted_by(|a, b| a >= b), "Ranks must be sorted");
    joker_free_hand(ranks)
        .chunk_by(|a, b| a == b)
        .map(|group| (group[0], group.len()))
}

/// Checks if the ranks contain five consecutive ranks.
pub fn straight(ranks: &[Rank]) -> bool {
    straight_high(ranks).is_some()
}

/// Returns the highest rank of the best straight, a five for the wheel.
///
/// Ranks can be 5 to 7, pairs don't block a straight and each joker fills one
/// gap or extends the run at either end.
pub fn straight_high(ranks: &[Rank]) -> Option<Rank> {
    let jokers = jokers(ranks);

    // Bit w is set if a rank with weight w is present, an ace also sets bit 1.
    let present = joker_free_hand(ranks).iter().fold(0u16, |bits, rank| {
        let bits = bits | 1 << rank.weight();
        if *rank == Rank::Ace { bits | 1 << 1 } else { bits }
    });

    (Rank::Five.weight()..=Rank::Ace.weight())
        .rev()
        .find(|&high| {
            let window = 0x1fu16 << (high - 4);
            (present & window).count_ones() as usize + jokers >= 5
        })
        .and_then(Rank::from_weight)
}

/// Returns the first rank that appears n times.
///
/// Jokers fill the shortfall for ranks that appear less than n times, ranks
/// are checked from highest to lowest so the highest qualifying rank wins.
pub fn kind(n: usize, ranks: &[Rank]) -> Option<Rank> {
    kind_with(n, ranks, jokers(ranks), None).map(|(rank, _)| rank)
}

/// Like [kind] with a given number of jokers and a rank to skip, returns the
/// rank and the number of jokers used.
fn kind_with(
    n: usize,
    ranks: &[Rank],
    jokers: usize,
    skip: Option<Rank>,
) -> Option<(Rank, usize)> {
    groups(ranks)
        .filter(|&(rank, _)| Some(rank) != skip)
        .find_map(|(rank, count)| {
            if count == n {
                Some((rank, 0))
            } else if count < n && count + jokers >= n {
                Some((rank, n - count))
            } else {
                None
            }
        })
}

/// Returns the (three of a kind, pair) ranks of a full house.
///
/// The pair must be a different rank and can only use the jokers left over
/// from the three of a kind.
pub fn full_house(ranks: &[Rank]) -> Option<(Rank, Rank)> {
    let jokers = jokers(ranks);
    let (trips, used) = kind_with(3, ranks, jokers, None)?;
    let (pair, _) = kind_with(2, ranks, jokers - used, Some(trips))?;
    Some((trips, pair))
}

/// Returns the two highest pairs ranks, highest first.
///
/// Jokers turn single cards into pairs starting from the highest rank.
pub fn two_pair(ranks: &[Rank]) -> Option<(Rank, Rank)> {
    let mut jokers = jokers(ranks);
    let mut pairs = groups(ranks)
        .filter(|&(_, count)| {
            if count >= 2 {
                true
            } else if jokers > 0 {
                jokers -= 1;
                true
            } else {
                false
            }
        })
        .map(|(rank, _)| rank);

    match (pairs.next(), pairs.next()) {
        (Some(high), Some(low)) => Some((high, low)),
        _ => None,
    }
}
