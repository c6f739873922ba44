use std::collections::VecDeque;
use std::fmt;

use rand::{seq::SliceRandom, Rng};
use serde::Serialize;

pub const DECK_SIZE: usize = 52;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Suit {
    Spade,
    Heart,
    Club,
    Diamond,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond];

    /// Tie-break order used by [`compare`](crate::hand::compare).
    pub fn value(&self) -> u8 {
        match self {
            Suit::Spade => 1,
            Suit::Heart => 2,
            Suit::Club => 3,
            Suit::Diamond => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Spade => "Spade",
            Suit::Heart => "Heart",
            Suit::Club => "Club",
            Suit::Diamond => "Diamond",
        }
    }
}

pub const RANKS: std::ops::RangeInclusive<u8> = 1..=13;

pub fn rank_label(rank: u8) -> &'static str {
    match rank {
        1 => "One",
        2 => "Two",
        3 => "Three",
        4 => "Four",
        5 => "Five",
        6 => "Six",
        7 => "Seven",
        8 => "Eight",
        9 => "Nine",
        10 => "Jack",
        11 => "Queen",
        12 => "King",
        13 => "Ace",
        _ => "Unknown",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
    pub rank_label: &'static str,
}

impl Card {
    /// Ranks outside 1..=13 are accepted and labelled "Unknown"; hand checks
    /// such as [`is_blackjack`](crate::hand::is_blackjack) test against them.
    pub fn new(suit: Suit, rank: u8) -> Self {
        Card {
            suit,
            rank,
            rank_label: rank_label(rank),
        }
    }

    pub fn suit_value(&self) -> u8 {
        self.suit.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.suit.name(), self.rank_label)
    }
}

/// Cards left to deal, front first.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// One card per (suit, rank), suits in value order, ranks ascending.
    pub fn build() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| RANKS.map(move |rank| Card::new(suit, rank)))
            .collect::<VecDeque<_>>();
        log::debug!("built deck of {} cards", cards.len());
        Deck { cards }
    }

    pub fn shuffled<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        let mut cards = Vec::from(self.cards);
        cards.shuffle(rng);
        log::debug!("shuffled {} cards", cards.len());
        Deck {
            cards: cards.into(),
        }
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    pub fn remaining_cards(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Deck {
            cards: cards.into(),
        }
    }
}
