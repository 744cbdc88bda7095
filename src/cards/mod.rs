//! Cards and decks.
//!
//! - `Card`: immutable text with an effect classified from that text
//! - `Deck`: a shuffled community chest (stack) or chance (queue) deck

pub mod card;
pub mod deck;

pub use card::{Card, CardEffect, CHANCE_CARDS, COMMUNITY_CHEST_CARDS};
pub use deck::{Deck, DeckKind, DeckOrder};
