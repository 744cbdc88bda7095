//! Player actions requested by the collaborator outside the turn flow.
//!
//! Each action validates its selection first and leaves state untouched when
//! it returns an error.

use tracing::info;

use super::Game;
use crate::board::PropertyId;
use crate::cards::{Card, DeckKind};
use crate::core::{ActionResult, GameError, ParticipantId};
use crate::frontend::{Frontend, GameEvent};

/// Price of one upgrade level.
pub const UPGRADE_COST: i64 = 100;

/// Paid out once per property when it is mortgaged.
pub const MORTGAGE_PAYOUT: i64 = 50;

fn lookup_property(name: &str) -> ActionResult<PropertyId> {
    PropertyId::from_name(name).ok_or_else(|| GameError::UnknownProperty(name.to_string()))
}

impl<F: Frontend> Game<F> {
    fn solvent(&self, id: ParticipantId) -> ActionResult<&str> {
        let participant = self
            .roster
            .get(id)
            .ok_or_else(|| GameError::UnknownParticipant(id.to_string()))?;
        if participant.bankrupt {
            return Err(GameError::Bankrupt(participant.name.clone()));
        }
        Ok(participant.name.as_str())
    }

    fn owned_by(&self, id: ParticipantId, name: &str) -> ActionResult<PropertyId> {
        let property = lookup_property(name)?;
        let participant = &self.roster[id];
        if !participant.owns(property) {
            return Err(GameError::NotOwner {
                participant: participant.name.clone(),
                property: property.name().to_string(),
            });
        }
        Ok(property)
    }

    /// Mortgage an owned property for a one-off payout of 50.
    ///
    /// A mortgaged property collects no rent for the rest of the game.
    pub fn mortgage(&mut self, id: ParticipantId, property: &str) -> ActionResult<i64> {
        self.solvent(id)?;
        let property = self.owned_by(id, property)?;
        if !self.registry.mortgage(property) {
            return Err(GameError::AlreadyMortgaged(property.name().to_string()));
        }

        self.credit(id, MORTGAGE_PAYOUT);
        self.emit(GameEvent::Mortgaged {
            participant: self.name_of(id),
            property,
            payout: MORTGAGE_PAYOUT,
        });
        Ok(MORTGAGE_PAYOUT)
    }

    /// Buy one upgrade level on an owned, unmortgaged property.
    ///
    /// There is no level cap. Returns the new level.
    pub fn upgrade(&mut self, id: ParticipantId, property: &str) -> ActionResult<u32> {
        self.solvent(id)?;
        let property = self.owned_by(id, property)?;
        if self.registry.is_mortgaged(property) {
            return Err(GameError::Mortgaged(property.name().to_string()));
        }
        let balance = self.roster[id].balance;
        if balance < UPGRADE_COST {
            return Err(GameError::UpgradeUnaffordable {
                cost: UPGRADE_COST,
                balance,
            });
        }

        let participant = &mut self.roster[id];
        participant.balance -= UPGRADE_COST;
        let level = participant.upgrades.entry(property).or_insert(0);
        *level += 1;
        let level = *level;

        info!(participant = %participant.name, %property, level, "property upgraded");
        self.emit(GameEvent::Upgraded {
            participant: self.name_of(id),
            property,
            level,
        });
        Ok(level)
    }

    /// Swap one property for one of the counterparty's.
    ///
    /// Mortgage flags travel with the properties; upgrade records stay with
    /// their former owners.
    pub fn trade(
        &mut self,
        id: ParticipantId,
        counterparty: &str,
        give: &str,
        receive: &str,
    ) -> ActionResult<()> {
        let initiator = self.solvent(id)?.to_string();
        let other = self
            .roster
            .find_by_name(counterparty)
            .ok_or_else(|| GameError::UnknownParticipant(counterparty.to_string()))?;
        if other == id {
            return Err(GameError::SelfTrade(initiator));
        }
        self.solvent(other)?;

        let given = self.owned_by(id, give)?;
        let received = self.owned_by(other, receive)?;

        self.registry
            .swap(&mut self.roster, (id, given), (other, received));
        info!(%initiator, %counterparty, %given, %received, "trade completed");
        self.emit(GameEvent::Traded {
            initiator,
            counterparty: self.name_of(other),
            given,
            received,
        });
        Ok(())
    }

    /// Draw a chance card and apply it to `id`.
    ///
    /// Returns `None` for unknown or bankrupt participants.
    pub fn draw_chance(&mut self, id: ParticipantId) -> Option<Card> {
        self.solvent(id).ok()?;
        Some(self.draw_card(id, DeckKind::Chance))
    }
}
