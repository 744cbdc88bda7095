//! # monopoly-sim
//!
//! Turn resolution and economic state machine for a simplified
//! property-trading board game.
//!
//! ## Design Principles
//!
//! 1. **One owner of state**: [`Game`] holds the roster, the property
//!    registry, both card decks and the single shared RNG.
//!
//! 2. **Stable identities**: participants are addressed by [`ParticipantId`],
//!    never by live references, so bankruptcy and removal cannot dangle.
//!
//! 3. **Injected decisions**: every choice goes through a [`Policy`].
//!    Automated policies consume the RNG; interactive ones ask the
//!    [`Frontend`]. The engine never branches on who is deciding.
//!
//! 4. **Deterministic replay**: the same seed and the same answers produce
//!    the same game, draw for draw.
//!
//! ## Modules
//!
//! - `core`: participants, jail state, RNG, configuration, errors
//! - `board`: layout constants and the property registry
//! - `cards`: card texts, effect classification, decks
//! - `engine`: turns, auctions, bankruptcy, player actions
//! - `frontend`: prompts, notifications and board rendering
//! - `policy`: automated and interactive decision making

pub mod board;
pub mod cards;
pub mod core;
pub mod engine;
pub mod frontend;
pub mod policy;

// Re-export commonly used types
pub use crate::core::{
    ActionResult, GameConfig, GameError, GameRng, GameRngState, JailStatus, JailTurn,
    Participant, ParticipantId, Roster,
};

pub use crate::board::{PropertyId, PropertyRegistry, Space, SpecialSpace};

pub use crate::cards::{Card, CardEffect, Deck, DeckKind};

pub use crate::engine::{Bid, Game, ParticipantStatus};

pub use crate::frontend::{BoardSnapshot, Frontend, GameEvent, Headless, Scripted};

pub use crate::policy::{Automated, BidRequest, DecisionContext, Interactive, Policy, PurchaseOffer, UpgradeOffer};
