// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best 5 cards hand search.
use log::trace;

use super::HandValue;
use wildcard_cards::{Card, Combinations, Rank, Suit};

impl HandValue {
    /// Evaluates all the 5 cards hands in `hand` and returns the best value
    /// with its cards, returns `None` if the hand has less than 5 cards.
    ///
    /// Cards are returned in the same order as in `hand`, if more than one
    /// hand has the best value the first one found is returned.
    pub fn eval_with_best_hand(hand: &[Card]) -> Option<(HandValue, Vec<Card>)> {
        let mut best: Option<(HandValue, Vec<Card>)> = None;

        for cards in Combinations::new(hand, 5) {
            let value = HandValue::eval(&cards);
            if best.as_ref().is_none_or(|(v, _)| value > *v) {
                best = Some((value, cards));
            }
        }

        if let Some((value, cards)) = &best {
            trace!("Best hand {} {value:?}", format_cards(cards));
        }

        best
    }
}

/// Returns the best 5 cards hand out of a hand with no jokers.
///
/// Returns `None` if the hand has less than 5 cards, panics if the hand has
/// jokers, use [best_wild_hand] for hands with jokers.
pub fn best_hand(hand: &[Card]) -> Option<Vec<Card>> {
    assert!(
        !hand.iter().any(Card::is_joker),
        "Hand with jokers, use best_wild_hand"
    );

    HandValue::eval_with_best_hand(hand).map(|(_, cards)| cards)
}

/// Returns the best 5 cards hand out of a hand that may have jokers.
///
/// Jokers are kept in the returned hand, use [resolve_jokers] to replace them
/// with the cards they stand for. Returns `None` if the hand has less than 5
/// cards.
pub fn best_wild_hand(hand: &[Card]) -> Option<Vec<Card>> {
    HandValue::eval_with_best_hand(hand).map(|(_, cards)| cards)
}

/// Replaces the jokers in a 5 cards hand with the cards that give the best
/// hand value.
///
/// A joker is replaced by a card of its color that is not already in the
/// hand, so the result may rank lower than the wild hand when the joker stands
/// for a card that is already in the hand.
pub fn resolve_jokers(hand: &[Card]) -> Vec<Card> {
    let jokers = hand
        .iter()
        .enumerate()
        .filter_map(|(pos, card)| card.is_joker().then_some(pos))
        .collect::<Vec<_>>();

    if jokers.is_empty() {
        return hand.to_vec();
    }

    let mut best = None;
    substitute(&mut hand.to_vec(), &jokers, &mut best);

    match best {
        Some((value, cards)) => {
            trace!(
                "Resolved {} to {} {value:?}",
                format_cards(hand),
                format_cards(&cards)
            );
            cards
        }
        None => hand.to_vec(),
    }
}

/// Tries all the cards for the joker at the first position and recurses on
/// the others, keeps the best hand in `best`.
fn substitute(hand: &mut [Card], jokers: &[usize], best: &mut Option<(HandValue, Vec<Card>)>) {
    let Some((&pos, rest)) = jokers.split_first() else {
        let value = HandValue::eval(hand);
        if best.as_ref().is_none_or(|(v, _)| value > *v) {
            *best = Some((value, hand.to_vec()));
        }
        return;
    };

    let joker = hand[pos];
    for suit in Suit::of_color(joker.color()) {
        for rank in Rank::ranks().rev() {
            let card = Card::new(rank, suit);
            if !hand.contains(&card) {
                hand[pos] = card;
                substitute(hand, rest, best);
            }
        }
    }

    hand[pos] = joker;
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HandRank;
    use rand::prelude::*;
    use wildcard_cards::{Deck, parse_hand};

    fn hand(s: &str) -> Vec<Card> {
        parse_hand(s).unwrap()
    }

    /// Sorted card tokens for order independent comparisons.
    fn tokens(cards: &[Card]) -> Vec<String> {
        let mut tokens = cards.iter().map(Card::to_string).collect::<Vec<_>>();
        tokens.sort();
        tokens
    }

    fn best(s: &str) -> Vec<String> {
        tokens(&best_hand(&hand(s)).unwrap())
    }

    fn best_wild(s: &str) -> Vec<String> {
        tokens(&best_wild_hand(&hand(s)).unwrap())
    }

    fn best_resolved(s: &str) -> Vec<String> {
        tokens(&resolve_jokers(&best_wild_hand(&hand(s)).unwrap()))
    }

    #[test]
    fn test_best_hand() {
        assert_eq!(
            best("6C 7C 8C 9C TC 5C JS"),
            ["6C", "7C", "8C", "9C", "TC"]
        );
        assert_eq!(
            best("TD TC TH 7C 7D 8C 8S"),
            ["8C", "8S", "TC", "TD", "TH"]
        );
        assert_eq!(
            best("JD TC TH 7C 7D 7S 7H"),
            ["7C", "7D", "7H", "7S", "JD"]
        );
    }

    #[test]
    fn test_best_wild_hand() {
        assert_eq!(
            best_wild("6C 7C 8C 9C TC 5C ?B"),
            ["7C", "8C", "9C", "?B", "TC"]
        );
        assert_eq!(
            best_wild("TD TC 5H 5C 7C ?R ?B"),
            ["7C", "?B", "?R", "TC", "TD"]
        );
        assert_eq!(
            best_wild("JD TC TH 7C 7D 7S 7H"),
            ["7C", "7D", "7H", "7S", "JD"]
        );
        assert_eq!(
            best_wild("6C 7C ?R 9C TC 5C ?B"),
            ["6C", "7C", "9C", "?B", "TC"]
        );
        assert_eq!(
            best_wild("TC 7C 2C 2S ?R JC ?B"),
            ["2C", "2S", "?B", "?R", "JC"]
        );
    }

    #[test]
    fn test_best_resolved_hand() {
        assert_eq!(
            best_resolved("6C 7C 8C 9C TC 5C ?B"),
            ["7C", "8C", "9C", "JC", "TC"]
        );
        assert_eq!(
            best_resolved("TD TC 5H 5C 7C ?R ?B"),
            ["7C", "TC", "TD", "TH", "TS"]
        );
        assert_eq!(
            best_resolved("6C 7C ?R 9C TC 5C ?B"),
            ["6C", "7C", "8C", "9C", "TC"]
        );
        assert_eq!(
            best_resolved("JD TC TH 7C 7D 7S 7H"),
            ["7C", "7D", "7H", "7S", "JD"]
        );
    }

    #[test]
    fn resolved_jokers_are_distinct_cards() {
        // There is no black deuce left for the black joker.
        let resolved = resolve_jokers(&hand("2C 2S ?R ?B JC"));
        assert!(resolved.iter().all(|c| !c.is_joker()));

        let unique = tokens(&resolved);
        assert!(unique.windows(2).all(|w| w[0] != w[1]));
        assert_eq!(HandValue::eval(&resolved).rank(), HandRank::FullHouse);
    }

    #[test]
    fn best_hand_value() {
        let (value, cards) = HandValue::eval_with_best_hand(&hand("TC 7C 2C 2S ?R JC ?B")).unwrap();
        assert_eq!(value.rank(), HandRank::FourOfAKind);
        assert_eq!(value.tiebreakers().collect::<Vec<_>>(), [Rank::Deuce, Rank::Jack]);
        assert_eq!(cards.len(), 5);
    }

    #[test]
    fn short_hands() {
        assert_eq!(best_hand(&hand("AC KC")), None);
        assert_eq!(best_wild_hand(&[]), None);

        let five = hand("AC KC QC JC TC");
        assert_eq!(best_hand(&five), Some(five.clone()));
    }

    #[test]
    #[should_panic]
    fn best_hand_with_jokers() {
        best_hand(&hand("AC KC QC JC ?B 2D 3D"));
    }

    #[test]
    fn best_hand_is_permutation_invariant() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut shuffle_rng = SmallRng::seed_from_u64(43);

        Deck::default().sample(&mut rng, 200, 7, |sample| {
            let mut shuffled = sample.to_vec();
            shuffled.shuffle(&mut shuffle_rng);

            let (v1, _) = HandValue::eval_with_best_hand(sample).unwrap();
            let (v2, _) = HandValue::eval_with_best_hand(&shuffled).unwrap();
            assert_eq!(v1, v2);
        });
    }

    #[test]
    fn joker_never_weakens_hand() {
        let mut rng = SmallRng::seed_from_u64(7);

        Deck::default().sample(&mut rng, 200, 7, |sample| {
            let (plain, _) = HandValue::eval_with_best_hand(sample).unwrap();

            // A joker as the last card is at least as good as the six other
            // cards alone.
            let (six, _) = HandValue::eval_with_best_hand(&sample[..6]).unwrap();
            let mut wild = sample.to_vec();
            wild[6] = Card::BLACK_JOKER;
            let (value, _) = HandValue::eval_with_best_hand(&wild).unwrap();
            assert!(value >= six, "{wild:?}");
            assert!(plain >= six);
        });
    }
}
