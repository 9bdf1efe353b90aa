// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Rank symbols indexed by weight, lowest rank first.
///
/// The joker weight is above the ace so that jokers sort first in a
/// descending sort, it is never used to compare hands.
static RANKS: [(Rank, char); 14] = [
    (Rank::Deuce, '2'),
    (Rank::Trey, '3'),
    (Rank::Four, '4'),
    (Rank::Five, '5'),
    (Rank::Six, '6'),
    (Rank::Seven, '7'),
    (Rank::Eight, '8'),
    (Rank::Nine, '9'),
    (Rank::Ten, 'T'),
    (Rank::Jack, 'J'),
    (Rank::Queen, 'Q'),
    (Rank::King, 'K'),
    (Rank::Ace, 'A'),
    (Rank::Joker, '?'),
];

/// Card rank.
///
/// The enum discriminant is the rank weight used for sorting and for packing
/// hand values, from 2 for a deuce to 14 for an ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
    /// The rank shared by the black and red jokers.
    Joker,
}

impl Rank {
    /// Returns all ranks a standard card can have, deuce first.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        RANKS[..13].iter().map(|&(rank, _)| rank)
    }

    /// The rank weight, 2..=14 for deuce to ace and 15 for jokers.
    #[inline]
    pub fn weight(self) -> u8 {
        self as u8
    }

    /// Returns the rank with the given weight.
    pub fn from_weight(weight: u8) -> Option<Rank> {
        RANKS
            .get(usize::from(weight).checked_sub(2)?)
            .map(|&(rank, _)| rank)
    }

    /// Returns the rank for a token character.
    pub fn from_char(c: char) -> Option<Rank> {
        RANKS.iter().find(|&&(_, sym)| sym == c).map(|&(rank, _)| rank)
    }

    /// Checks if this is the joker rank.
    #[inline]
    pub fn is_joker(self) -> bool {
        self == Rank::Joker
    }

    fn symbol(self) -> char {
        RANKS[usize::from(self.weight()) - 2].1
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Suit color, jokers can stand for any suit of their color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Clubs and spades.
    Black,
    /// Hearts and diamonds.
    Red,
}

impl Color {
    /// Returns the color for a joker token character.
    pub fn from_char(c: char) -> Option<Color> {
        match c {
            'B' => Some(Color::Black),
            'R' => Some(Color::Red),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = match self {
            Color::Black => 'B',
            Color::Red => 'R',
        };

        write!(f, "{color}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Returns the two suits of the given color.
    pub fn of_color(color: Color) -> [Suit; 2] {
        match color {
            Color::Black => [Suit::Clubs, Suit::Spades],
            Color::Red => [Suit::Hearts, Suit::Diamonds],
        }
    }

    /// The suit color.
    pub fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Hearts | Suit::Diamonds => Color::Red,
        }
    }

    /// Returns the suit for a token character.
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

/// A Poker card.
///
/// A card is either a standard card with a rank and a suit or a joker of a
/// given color. Cards are encoded as 2 characters tokens, a rank followed by
/// a suit (`TC`, `AH`) or `?` followed by the joker color (`?B`, `?R`), and
/// are serialized using the same tokens.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Card {
    /// A standard card.
    Standard(Rank, Suit),
    /// A joker that can stand for any card of its color.
    Joker(Color),
}

impl Card {
    /// The black joker.
    pub const BLACK_JOKER: Card = Card::Joker(Color::Black);

    /// The red joker.
    pub const RED_JOKER: Card = Card::Joker(Color::Red);

    /// Create a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        debug_assert!(!rank.is_joker(), "Use Card::joker for jokers");
        Card::Standard(rank, suit)
    }

    /// Create a joker of the given color.
    pub fn joker(color: Color) -> Card {
        Card::Joker(color)
    }

    /// Returns the card rank, jokers have the [Rank::Joker] rank.
    pub fn rank(&self) -> Rank {
        match self {
            Card::Standard(rank, _) => *rank,
            Card::Joker(_) => Rank::Joker,
        }
    }

    /// Returns the card suit, jokers have no suit.
    pub fn suit(&self) -> Option<Suit> {
        match self {
            Card::Standard(_, suit) => Some(*suit),
            Card::Joker(_) => None,
        }
    }

    /// Returns the card color.
    pub fn color(&self) -> Color {
        match self {
            Card::Standard(_, suit) => suit.color(),
            Card::Joker(color) => *color,
        }
    }

    /// Checks if this card is a joker.
    pub fn is_joker(&self) -> bool {
        matches!(self, Card::Joker(_))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Standard(rank, suit) => write!(f, "{rank}{suit}"),
            Card::Joker(color) => write!(f, "?{color}"),
        }
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}

/// Error returned when parsing an invalid card token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The token is not 2 characters long.
    #[error("invalid card {0:?}, a card has a rank and a suit")]
    Length(String),
    /// Unknown rank character.
    #[error("invalid rank {0:?}")]
    Rank(char),
    /// Unknown suit character.
    #[error("invalid suit {0:?}")]
    Suit(char),
    /// Unknown joker color character.
    #[error("invalid joker color {0:?}")]
    Joker(char),
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::Length(s.to_string()));
        };

        if rank == '?' {
            let color = Color::from_char(suit).ok_or(ParseCardError::Joker(suit))?;
            return Ok(Card::Joker(color));
        }

        let rank = Rank::from_char(rank).ok_or(ParseCardError::Rank(rank))?;
        let suit = Suit::from_char(suit).ok_or(ParseCardError::Suit(suit))?;
        Ok(Card::Standard(rank, suit))
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Parses a whitespace separated list of card tokens.
pub fn parse_hand(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Returns the hand ranks sorted from highest to lowest, jokers first.
pub fn card_ranks(hand: &[Card]) -> Vec<Rank> {
    let mut ranks = hand.iter().map(Card::rank).collect::<Vec<_>>();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    ranks
}

/// Checks if at least five cards share a suit.
///
/// A joker counts once for each suit of its color, so a black joker counts
/// as a club and as a spade.
pub fn flush(hand: &[Card]) -> bool {
    let mut counts = AHashMap::<Suit, usize>::with_capacity(4);
    for card in hand {
        match card {
            Card::Standard(_, suit) => *counts.entry(*suit).or_default() += 1,
            Card::Joker(color) => {
                for suit in Suit::of_color(*color) {
                    *counts.entry(suit).or_default() += 1;
                }
            }
        }
    }

    counts.values().max().is_some_and(|&count| count >= 5)
}
