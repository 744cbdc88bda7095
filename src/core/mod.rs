//! Core types: participants, jail state, RNG, configuration and errors.
//!
//! Everything here is independent of turn flow. The engine composes
//! these pieces; nothing in `core` calls back into it.

pub mod config;
pub mod error;
pub mod jail;
pub mod participant;
pub mod rng;

pub use config::{GameConfig, DEFAULT_STARTING_BALANCE};
pub use error::{ActionResult, GameError};
pub use jail::{JailStatus, JailTurn, JAIL_TURN_CAP};
pub use participant::{Participant, ParticipantId, Roster};
pub use rng::{GameRng, GameRngState};
