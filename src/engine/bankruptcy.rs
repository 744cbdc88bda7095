//! Bankruptcy and liquidation.
//!
//! A bankrupt participant's balance drops to zero and every property they
//! owned is auctioned off in board order. A buyer overpaying at one of those
//! auctions goes bankrupt in turn, so liquidation can cascade.

use tracing::info;

use super::auction::{DEFAULT_BID_INCREMENT, DEFAULT_STARTING_BID};
use super::Game;
use crate::core::ParticipantId;
use crate::frontend::{Frontend, GameEvent};

impl<F: Frontend> Game<F> {
    /// Mark `id` bankrupt and liquidate their holdings.
    ///
    /// Calling this again for the same participant finds nothing left to sell.
    pub fn declare_bankrupt(&mut self, id: ParticipantId) {
        let participant = &mut self.roster[id];
        participant.bankrupt = true;
        participant.balance = 0;

        let name = self.name_of(id);
        info!(participant = %name, "bankrupt");
        self.emit(GameEvent::Bankrupt { participant: name });

        let forfeited = self.registry.release_all(&mut self.roster, id);
        for property in forfeited {
            self.auction(property, DEFAULT_STARTING_BID, DEFAULT_BID_INCREMENT);
        }
    }

    /// Drop bankrupt participants from the game, returning their names.
    pub fn remove_bankrupt(&mut self) -> Vec<String> {
        let removed = self.roster.remove_bankrupt();
        let mut names = Vec::with_capacity(removed.len());
        for participant in removed {
            self.forget_policy(participant.id);
            self.emit(GameEvent::Removed {
                participant: participant.name.clone(),
            });
            names.push(participant.name);
        }
        names
    }
}
