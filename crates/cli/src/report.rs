// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand sources and best hand reports.
use anyhow::{Context, Result, bail};
use log::{debug, info};
use rand::prelude::*;
use serde::Serialize;
use std::fmt;

use wildcard_eval::{
    Card, Deck, HandRank, HandValue, best_hand, best_wild_hand, parse_hand, resolve_jokers,
};

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 7;

/// Where the hand to evaluate comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandSource {
    /// Whitespace separated card tokens.
    Tokens(String),
    /// A random hand dealt from a shuffled deck.
    Random {
        /// Deal from a deck with the two jokers.
        jokers: bool,
        /// The shuffle seed, uses OS entropy if not set.
        seed: Option<u64>,
    },
}

impl HandSource {
    /// Returns the hand cards.
    pub fn hand(&self) -> Result<Vec<Card>> {
        match self {
            HandSource::Tokens(tokens) => {
                let hand = parse_hand(tokens).with_context(|| format!("Invalid hand {tokens:?}"))?;
                if hand.len() != HAND_SIZE {
                    bail!("Expected {HAND_SIZE} cards got {}", hand.len());
                }

                Ok(hand)
            }
            HandSource::Random { jokers, seed } => {
                let mut rng = match seed {
                    Some(seed) => SmallRng::seed_from_u64(*seed),
                    None => SmallRng::from_os_rng(),
                };

                let mut deck = if *jokers {
                    Deck::with_jokers()
                } else {
                    Deck::default()
                };
                deck.shuffle(&mut rng);

                (0..HAND_SIZE)
                    .map(|_| deck.deal().context("Deck is empty"))
                    .collect()
            }
        }
    }
}

/// The best hand report.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// The evaluated hand.
    pub hand: Vec<Card>,
    /// The best 5 cards, jokers included.
    pub best: Vec<Card>,
    /// The best hand category.
    pub rank: HandRank,
    /// The best 5 cards with jokers replaced by concrete cards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<Vec<Card>>,
}

impl Report {
    /// Finds the best hand, jokers are resolved if `resolve` is set and the
    /// best hand has jokers.
    pub fn new(hand: &[Card], resolve: bool) -> Result<Self> {
        let wild = hand.iter().any(Card::is_joker);
        debug!("Evaluating {} cards wild={wild}", hand.len());

        let best = if wild {
            best_wild_hand(hand)
        } else {
            best_hand(hand)
        }
        .with_context(|| format!("A hand needs at least 5 cards got {}", hand.len()))?;

        let rank = HandValue::eval(&best).rank();
        let resolved = (resolve && best.iter().any(Card::is_joker)).then(|| resolve_jokers(&best));
        info!("Best hand {} {rank}", format_cards(&best));

        Ok(Self {
            hand: hand.to_vec(),
            best,
            rank,
            resolved,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hand:     {}", format_cards(&self.hand))?;
        writeln!(f, "Best:     {} ({})", format_cards(&self.best), self.rank)?;
        if let Some(resolved) = &self.resolved {
            writeln!(f, "Resolved: {}", format_cards(resolved))?;
        }

        Ok(())
    }
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

    fn report(tokens: &str, resolve: bool) -> Report {
        let hand = HandSource::Tokens(tokens.to_string()).hand().unwrap();
        Report::new(&hand, resolve).unwrap()
    }

    #[test]
    fn token_source() {
        let hand = HandSource::Tokens("TD TC 5H 5C 7C ?R ?B".into())
            .hand()
            .unwrap();
        assert_eq!(hand.len(), HAND_SIZE);
        assert_eq!(hand[6], Card::BLACK_JOKER);

        assert!(HandSource::Tokens("TD TC 5H".into()).hand().is_err());
        assert!(HandSource::Tokens("TD TC 5H 5C 7C ?R XX".into()).hand().is_err());
    }

    #[test]
    fn random_source() {
        let source = HandSource::Random {
            jokers: true,
            seed: Some(42),
        };

        let h1 = source.hand().unwrap();
        let h2 = source.hand().unwrap();
        assert_eq!(h1.len(), HAND_SIZE);
        assert_eq!(h1, h2);

        let report = Report::new(&h1, true).unwrap();
        assert_eq!(report.best.len(), 5);
        assert!(report.resolved.iter().flatten().all(|c| !c.is_joker()));
    }

    #[test]
    fn plain_report() {
        let report = report("TD TC TH 7C 7D 8C 8S", true);
        assert_eq!(report.rank, HandRank::FullHouse);
        assert_eq!(report.resolved, None);
        assert_eq!(
            report.to_string(),
            "Hand:     TD TC TH 7C 7D 8C 8S\nBest:     TD TC TH 8C 8S (Full House)\n"
        );
    }

    #[test]
    fn wild_report() {
        let report = report("6C 7C 8C 9C TC 5C ?B", true);
        assert_eq!(report.rank, HandRank::StraightFlush);
        assert!(report.to_string().ends_with("Resolved: 7C 8C 9C TC JC\n"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rank"], "StraightFlush");
        assert_eq!(json["best"][4], "?B");
        assert_eq!(json["resolved"][4], "JC");

        // No resolved cards unless asked.
        let report = Report::new(&report.hand, false).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("resolved").is_none());
    }
}
