//! Turn resolution and the economic state machine.
//!
//! [`Game`] owns all mutable state. Its behaviour is split by concern:
//!
//! - `game`: setup, accessors, snapshots and shared helpers
//! - `turn`: one participant's turn, special spaces, rent and cards
//! - `auction`: floor-raising single-pass auctions
//! - `bankruptcy`: liquidation and removal of bankrupt participants
//! - `actions`: mortgage, upgrade, trade and chance draws

pub mod actions;
pub mod auction;
pub mod bankruptcy;
pub mod game;
pub mod turn;

pub use actions::{MORTGAGE_PAYOUT, UPGRADE_COST};
pub use auction::{Bid, BidBook, DEFAULT_BID_INCREMENT, DEFAULT_STARTING_BID};
pub use game::{Game, ParticipantStatus};
pub use turn::{income_tax, rent_for_level, GO_BONUS, INCOME_TAX_CAP, LUXURY_TAX, RENT_MULTIPLIER};
