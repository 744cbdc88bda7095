//! Rejected selections.
//!
//! Nothing in the core is fatal. Every error here aborts one sub-action
//! (a mortgage, trade, upgrade or registration) and leaves state untouched.
//! Running out of money is not an error: it is resolved by bankruptcy.

use thiserror::Error;

/// A selection that failed a lookup or a precondition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no property named {0:?}")]
    UnknownProperty(String),

    #[error("no participant named {0:?}")]
    UnknownParticipant(String),

    #[error("a participant named {0:?} already exists")]
    DuplicateParticipant(String),

    #[error("the table is full ({max} participants)")]
    RosterFull { max: usize },

    #[error("{participant} does not own {property}")]
    NotOwner { participant: String, property: String },

    #[error("{0} is already mortgaged")]
    AlreadyMortgaged(String),

    #[error("{0} is mortgaged")]
    Mortgaged(String),

    #[error("upgrading costs {cost} but only {balance} is available")]
    UpgradeUnaffordable { cost: i64, balance: i64 },

    #[error("{0} is bankrupt")]
    Bankrupt(String),

    #[error("{0} cannot trade with themselves")]
    SelfTrade(String),
}

/// Result alias for player actions.
pub type ActionResult<T> = std::result::Result<T, GameError>;
