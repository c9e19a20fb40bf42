//! Five-card-draw poker: hand evaluator, dealer AI, and showdown.

use rand::Rng;

use crate::catalog::ContentCatalog;
use crate::cards::deck::{Card, Deck, Suit, WeightScheme};
use crate::core::constants::{JOKER_SKILL_KEY, POKER_HAND_SIZE};
use crate::core::errors::EngineError;
use crate::core::events::Event;
use crate::entity::player::Player;

/// Hand ranks, low to high. The ace-low straight (A-2-3-4-5) is
/// recognized and compares as five-high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandRank {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandRank {
    pub fn name(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }
}

/// Tie-break order: rank, then the main grouping's weight, then the
/// second pair's weight (two pair) or the kicker (four of a kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandScore {
    pub rank: HandRank,
    pub primary: i32,
    pub secondary: i32,
}

/// (weight, count) pairs sorted by count desc, then weight desc.
fn grouped_weights(cards: &[Card]) -> Vec<(i32, u32)> {
    let mut groups: Vec<(i32, u32)> = Vec::new();
    for card in cards {
        match groups.iter_mut().find(|(w, _)| *w == card.weight) {
            Some((_, count)) => *count += 1,
            None => groups.push((card.weight, 1)),
        }
    }
    groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
    groups
}

/// Straight high card for 5 distinct weights, if they run consecutively.
fn straight_high(groups: &[(i32, u32)]) -> Option<i32> {
    if groups.len() != POKER_HAND_SIZE {
        return None;
    }
    let mut weights: Vec<i32> = groups.iter().map(|(w, _)| *w).collect();
    weights.sort_unstable();
    if weights[4] - weights[0] == 4 {
        return Some(weights[4]);
    }
    // Ace-low: A-2-3-4-5 counts as a five-high straight.
    if weights == [2, 3, 4, 5, 14] {
        return Some(5);
    }
    None
}

fn flush_suit(cards: &[Card]) -> Option<Suit> {
    let first = cards.first().and_then(|c| c.suit)?;
    if cards.iter().all(|c| c.suit == Some(first)) {
        Some(first)
    } else {
        None
    }
}

pub fn evaluate_hand(cards: &[Card]) -> HandScore {
    let groups = grouped_weights(cards);
    let is_flush = cards.len() == POKER_HAND_SIZE && flush_suit(cards).is_some();
    let straight = straight_high(&groups);

    if let Some(high) = straight {
        if is_flush {
            return HandScore {
                rank: if high == 14 {
                    HandRank::RoyalFlush
                } else {
                    HandRank::StraightFlush
                },
                primary: high,
                secondary: 0,
            };
        }
    }

    match groups.first().map(|g| g.1).unwrap_or(0) {
        4 => {
            return HandScore {
                rank: HandRank::FourOfAKind,
                primary: groups[0].0,
                secondary: groups[1].0,
            }
        }
        3 if groups[1].1 == 2 => {
            return HandScore {
                rank: HandRank::FullHouse,
                primary: groups[0].0,
                secondary: 0,
            }
        }
        _ => {}
    }

    if is_flush {
        return HandScore {
            rank: HandRank::Flush,
            primary: groups[0].0,
            secondary: 0,
        };
    }
    if let Some(high) = straight {
        return HandScore {
            rank: HandRank::Straight,
            primary: high,
            secondary: 0,
        };
    }

    match groups.first().map(|g| g.1).unwrap_or(0) {
        3 => HandScore {
            rank: HandRank::ThreeOfAKind,
            primary: groups[0].0,
            secondary: 0,
        },
        2 if groups[1].1 == 2 => HandScore {
            rank: HandRank::TwoPair,
            primary: groups[0].0,
            secondary: groups[1].0,
        },
        2 => HandScore {
            rank: HandRank::OnePair,
            primary: groups[0].0,
            secondary: 0,
        },
        _ => HandScore {
            rank: HandRank::HighCard,
            primary: groups.first().map(|g| g.0).unwrap_or(0),
            secondary: 0,
        },
    }
}

/// Deterministic dealer redraw heuristic: stand on a straight or better;
/// otherwise chase a four-card flush, then a four-card straight, then
/// keep every paired group, and as a last resort discard the three
/// lowest cards by weight.
pub fn dealer_draw_indices(hand: &[Card]) -> Vec<usize> {
    let score = evaluate_hand(hand);
    if score.rank >= HandRank::Straight {
        return Vec::new();
    }

    // Four to a flush: discard the one off-suit card.
    for suit in [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs] {
        let in_suit = hand.iter().filter(|c| c.suit == Some(suit)).count();
        if in_suit == 4 {
            return hand
                .iter()
                .enumerate()
                .filter(|(_, c)| c.suit != Some(suit))
                .map(|(i, _)| i)
                .collect();
        }
    }

    // Four to a straight: keep one card of each weight in the run.
    let mut distinct: Vec<i32> = hand.iter().map(|c| c.weight).collect();
    distinct.sort_unstable();
    distinct.dedup();
    for window in distinct.windows(4) {
        if window[3] - window[0] == 3 {
            let mut keep = Vec::new();
            for &w in window {
                if let Some(idx) = hand
                    .iter()
                    .enumerate()
                    .find(|(i, c)| c.weight == w && !keep.contains(i))
                    .map(|(i, _)| i)
                {
                    keep.push(idx);
                }
            }
            return (0..hand.len()).filter(|i| !keep.contains(i)).collect();
        }
    }

    // Keep pairs and better groupings.
    let groups = grouped_weights(hand);
    if groups.iter().any(|(_, count)| *count >= 2) {
        let kept_weights: Vec<i32> = groups
            .iter()
            .filter(|(_, count)| *count >= 2)
            .map(|(w, _)| *w)
            .collect();
        return hand
            .iter()
            .enumerate()
            .filter(|(_, c)| !kept_weights.contains(&c.weight))
            .map(|(i, _)| i)
            .collect();
    }

    // Nothing at all: pitch the three lowest by weight.
    let mut indexed: Vec<(usize, i32)> = hand.iter().map(|c| c.weight).enumerate().collect();
    indexed.sort_by_key(|(_, w)| *w);
    indexed.iter().take(3).map(|(i, _)| *i).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PokerResult {
    Win,
    Push,
    Loss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PokerPhase {
    Draw,
    Settled(PokerResult),
}

#[derive(Debug, Clone)]
pub struct PokerGame {
    pub deck: Deck,
    pub player_hand: Vec<Card>,
    pub dealer_hand: Vec<Card>,
    pub ante: u64,
    pub phase: PokerPhase,
}

fn describe_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Antes up and deals five cards each from one shuffled deck.
pub fn start_poker<R: Rng>(
    player: &mut Player,
    catalog: &ContentCatalog,
    deck_key: &str,
    ante: u64,
    rng: &mut R,
) -> Result<(PokerGame, Vec<Event>), EngineError> {
    let include_jokers = player.skills.contains(JOKER_SKILL_KEY);
    let mut deck = Deck::build(catalog, deck_key, WeightScheme::Poker, include_jokers, rng)?;
    player.spend_gold(ante)?;

    let mut player_hand = Vec::new();
    let mut dealer_hand = Vec::new();
    for _ in 0..POKER_HAND_SIZE {
        player_hand.push(deck.draw(rng));
        dealer_hand.push(deck.draw(rng));
    }
    let events = vec![Event::cards(format!(
        "You are dealt {}.",
        describe_hand(&player_hand)
    ))];
    Ok((
        PokerGame {
            deck,
            player_hand,
            dealer_hand,
            ante,
            phase: PokerPhase::Draw,
        },
        events,
    ))
}

/// The player discards 0-5 cards by index and redraws; the dealer then
/// redraws by its heuristic and the hands go straight to showdown.
pub fn player_draw<R: Rng>(
    game: &mut PokerGame,
    player: &mut Player,
    discard_indices: &[usize],
    rng: &mut R,
) -> Result<Vec<Event>, EngineError> {
    if game.phase != PokerPhase::Draw {
        return Err(EngineError::NotPlayersTurn);
    }
    if discard_indices.len() > POKER_HAND_SIZE {
        return Err(EngineError::InvalidTarget);
    }
    let mut seen = [false; POKER_HAND_SIZE];
    for &idx in discard_indices {
        if idx >= POKER_HAND_SIZE || seen[idx] {
            return Err(EngineError::InvalidTarget);
        }
        seen[idx] = true;
    }

    let mut events = Vec::new();
    for &idx in discard_indices {
        game.player_hand[idx] = game.deck.draw(rng);
    }
    if !discard_indices.is_empty() {
        events.push(Event::cards(format!(
            "You draw {} and now hold {}.",
            discard_indices.len(),
            describe_hand(&game.player_hand)
        )));
    }

    let dealer_discards = dealer_draw_indices(&game.dealer_hand);
    for &idx in &dealer_discards {
        game.dealer_hand[idx] = game.deck.draw(rng);
    }
    events.push(Event::cards(format!(
        "The dealer draws {}.",
        dealer_discards.len()
    )));

    events.extend(showdown(game, player));
    Ok(events)
}

fn showdown(game: &mut PokerGame, player: &mut Player) -> Vec<Event> {
    let player_score = evaluate_hand(&game.player_hand);
    let dealer_score = evaluate_hand(&game.dealer_hand);
    let mut events = vec![Event::cards(format!(
        "Showdown: your {} against the dealer's {} ({}).",
        player_score.rank.name(),
        dealer_score.rank.name(),
        describe_hand(&game.dealer_hand)
    ))];

    let result = match player_score.cmp(&dealer_score) {
        std::cmp::Ordering::Greater => {
            player.gold += game.ante * 2;
            events.push(Event::cards(format!(
                "You take the pot: {} gold!",
                game.ante * 2
            )));
            PokerResult::Win
        }
        std::cmp::Ordering::Equal => {
            player.gold += game.ante;
            events.push(Event::cards("Dead even. The ante comes back."));
            PokerResult::Push
        }
        std::cmp::Ordering::Less => {
            events.push(Event::cards("The dealer rakes in your ante."));
            PokerResult::Loss
        }
    };
    game.phase = PokerPhase::Settled(result);
    events
}
