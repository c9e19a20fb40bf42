//! Cards and decks.
//!
//! A deck is built from a named composition in the catalog: one or more
//! standard 52-card sets, optional special cards with explicit weights,
//! and two Jokers when the player has unlocked the card-sharp skill.
//! Drawing from an empty deck transparently rebuilds and reshuffles a
//! fresh copy rather than failing the hand.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::ContentCatalog;
use crate::core::constants::{JOKER_COUNT, JOKER_WEIGHT};
use crate::core::errors::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

impl Suit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    }
}

/// Ranks run 2..=14 (J=11, Q=12, K=13, A=14); special cards use rank 0
/// and carry an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub rank: u8,
    pub suit: Option<Suit>,
    pub weight: i32,
    pub id: Option<String>,
}

impl Card {
    pub fn standard(rank: u8, suit: Suit, weight: i32) -> Self {
        Self {
            rank,
            suit: Some(suit),
            weight,
            id: None,
        }
    }

    pub fn is_ace(&self) -> bool {
        self.rank == 14
    }

    pub fn label(&self) -> String {
        if let Some(id) = &self.id {
            return id.clone();
        }
        let rank = match self.rank {
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            14 => "A".to_string(),
            n => n.to_string(),
        };
        match self.suit {
            Some(suit) => format!("{}{}", rank, suit.symbol()),
            None => rank,
        }
    }
}

/// How standard card weights are assigned at deck build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightScheme {
    /// Faces are worth 10, aces start at 11.
    Blackjack,
    /// Weight mirrors rank ordering.
    Poker,
}

fn standard_weight(scheme: WeightScheme, rank: u8) -> i32 {
    match scheme {
        WeightScheme::Blackjack => match rank {
            14 => 11,
            11..=13 => 10,
            n => n as i32,
        },
        WeightScheme::Poker => rank as i32,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    /// Full composition, kept for transparent refills.
    template: Vec<Card>,
}

impl Deck {
    /// Builds and shuffles a deck from a catalog composition.
    pub fn build<R: Rng>(
        catalog: &ContentCatalog,
        deck_key: &str,
        scheme: WeightScheme,
        include_jokers: bool,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let def = catalog.deck(deck_key)?;
        let mut template = Vec::new();
        for _ in 0..def.copies.max(1) {
            for suit in ALL_SUITS {
                for rank in 2..=14u8 {
                    template.push(Card::standard(rank, suit, standard_weight(scheme, rank)));
                }
            }
        }
        for special in def.specials {
            template.push(Card {
                rank: 0,
                suit: None,
                weight: special.weight,
                id: Some(special.id.to_string()),
            });
        }
        if include_jokers {
            for _ in 0..JOKER_COUNT {
                template.push(Card {
                    rank: 0,
                    suit: None,
                    weight: JOKER_WEIGHT,
                    id: Some("joker".to_string()),
                });
            }
        }

        let mut cards = template.clone();
        cards.shuffle(rng);
        Ok(Self { cards, template })
    }

    /// Draws the top card, refilling and reshuffling from the template
    /// when the deck runs dry mid-hand.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Card {
        if self.cards.is_empty() {
            self.cards = self.template.clone();
            self.cards.shuffle(rng);
        }
        self.cards.pop().expect("template is never empty")
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
