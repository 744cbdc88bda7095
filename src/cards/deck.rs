//! Shuffled decks with draw-and-reshuffle-on-empty semantics.
//!
//! Drawn cards are never returned. When a deck runs out, it is rebuilt
//! from a fresh shuffled copy of its full card set before the draw
//! completes, so a draw always yields a card.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::card::{Card, CHANCE_CARDS, COMMUNITY_CHEST_CARDS};
use crate::core::GameRng;

/// Which end of the shuffled sequence is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckOrder {
    /// Last card placed is drawn first.
    Stack,
    /// First card placed is drawn first.
    Queue,
}

/// The two decks on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    CommunityChest,
    Chance,
}

impl DeckKind {
    #[must_use]
    pub fn order(self) -> DeckOrder {
        match self {
            DeckKind::CommunityChest => DeckOrder::Stack,
            DeckKind::Chance => DeckOrder::Queue,
        }
    }

    /// The full card set for this deck.
    #[must_use]
    pub fn card_texts(self) -> &'static [&'static str] {
        match self {
            DeckKind::CommunityChest => &COMMUNITY_CHEST_CARDS,
            DeckKind::Chance => &CHANCE_CARDS,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            DeckKind::CommunityChest => "Community Chest",
            DeckKind::Chance => "Chance",
        }
    }
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A shuffled deck.
#[derive(Clone, Debug)]
pub struct Deck {
    kind: DeckKind,
    /// Cards in placement order.
    cards: VecDeque<Card>,
    reshuffles: u32,
}

impl Deck {
    /// Create a deck holding one shuffled copy of its card set.
    pub fn new(kind: DeckKind, rng: &mut GameRng) -> Self {
        let mut deck = Self {
            kind,
            cards: VecDeque::new(),
            reshuffles: 0,
        };
        deck.refill(rng);
        deck
    }

    fn refill(&mut self, rng: &mut GameRng) {
        let mut fresh: Vec<Card> = self.kind.card_texts().iter().map(|&t| Card::new(t)).collect();
        rng.shuffle(&mut fresh);
        self.cards = fresh.into();
    }

    /// Draw the next card, rebuilding the deck first if it is empty.
    ///
    /// Returns the card and whether a reshuffle happened.
    pub fn draw(&mut self, rng: &mut GameRng) -> (Card, bool) {
        let reshuffled = self.cards.is_empty();
        if reshuffled {
            self.refill(rng);
            self.reshuffles += 1;
        }

        let card = match self.kind.order() {
            DeckOrder::Stack => self.cards.pop_back(),
            DeckOrder::Queue => self.cards.pop_front(),
        };
        // A refilled deck has the full card set
        let card = card.unwrap_or_else(|| unreachable!("{} deck empty after refill", self.kind));
        (card, reshuffled)
    }

    /// The card the next draw would return, without reshuffling.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        match self.kind.order() {
            DeckOrder::Stack => self.cards.back(),
            DeckOrder::Queue => self.cards.front(),
        }
    }

    /// Cards left before the next reshuffle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// How many times the deck has been rebuilt after running out.
    #[must_use]
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_deck_is_full() {
        let mut rng = GameRng::new(42);
        let deck = Deck::new(DeckKind::CommunityChest, &mut rng);

        assert_eq!(deck.len(), 13);
        assert_eq!(deck.reshuffles(), 0);
    }

    #[test]
    fn test_draws_each_card_once_per_cycle() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::new(DeckKind::Chance, &mut rng);

        let mut drawn: Vec<_> = (0..13).map(|_| deck.draw(&mut rng).0.text()).collect();
        drawn.sort();
        let mut expected = CHANCE_CARDS.to_vec();
        expected.sort();

        assert_eq!(drawn, expected);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_fourteenth_draw_reshuffles() {
        let mut rng = GameRng::new(5);
        let mut deck = Deck::new(DeckKind::CommunityChest, &mut rng);

        for _ in 0..13 {
            let (_, reshuffled) = deck.draw(&mut rng);
            assert!(!reshuffled);
        }

        let (_, reshuffled) = deck.draw(&mut rng);
        assert!(reshuffled);
        assert_eq!(deck.reshuffles(), 1);
        assert_eq!(deck.len(), 12);
    }

    #[test]
    fn test_stack_draws_from_back() {
        let mut rng = GameRng::new(9);
        let mut deck = Deck::new(DeckKind::CommunityChest, &mut rng);
        let last = *deck.cards.back().unwrap();

        assert_eq!(deck.peek(), Some(&last));
        assert_eq!(deck.draw(&mut rng).0, last);
    }

    #[test]
    fn test_queue_draws_from_front() {
        let mut rng = GameRng::new(9);
        let mut deck = Deck::new(DeckKind::Chance, &mut rng);
        let first = *deck.cards.front().unwrap();

        assert_eq!(deck.peek(), Some(&first));
        assert_eq!(deck.draw(&mut rng).0, first);
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut rng1 = GameRng::new(77);
        let mut rng2 = GameRng::new(77);
        let mut deck1 = Deck::new(DeckKind::CommunityChest, &mut rng1);
        let mut deck2 = Deck::new(DeckKind::CommunityChest, &mut rng2);

        for _ in 0..30 {
            assert_eq!(deck1.draw(&mut rng1).0, deck2.draw(&mut rng2).0);
        }
    }
}
