//! Turn engine.
//!
//! One call to [`Game::play_turn`] resolves a participant's whole turn:
//!
//! 1. Bankrupt: nothing happens. Jailed: the jail sub-machine runs instead of moving.
//! 2. Roll one die and move `(position + roll) mod 40`.
//! 3. Special space: apply its effect and end the turn.
//! 4. Property: offer purchase, charge rent, or nothing if self-owned.
//! 5. Roll again; a 1 draws a community chest card.
//! 6. Offer an upgrade through the participant's policy.
//!
//! The turn ends early as soon as the participant goes bankrupt.

use tracing::{debug, info, warn};

use super::actions::UPGRADE_COST;
use super::auction::{DEFAULT_BID_INCREMENT, DEFAULT_STARTING_BID};
use super::Game;
use crate::board::{advance, PropertyId, Space, SpecialSpace, BASE_RENT, BOARD_SIZE, JAIL_POSITION, PROPERTY_PRICE};
use crate::cards::{Card, CardEffect, DeckKind};
use crate::core::{JailStatus, ParticipantId};
use crate::frontend::{Frontend, GameEvent};
use crate::policy::{PurchaseOffer, UpgradeOffer};

/// Collected for landing on Go, or passing it via a card that says so.
pub const GO_BONUS: i64 = 200;

/// Income tax ceiling.
pub const INCOME_TAX_CAP: i64 = 200;

pub const LUXURY_TAX: i64 = 100;

/// Rent grows by this many base rents per upgrade level.
pub const RENT_MULTIPLIER: i64 = 2;

/// The community chest roll that draws a card.
const CARD_DRAW_FACE: u8 = 1;

/// Rent for a property at `level` upgrades: level 0 is 1x, 1 is 3x, 2 is 5x.
#[must_use]
pub fn rent_for_level(level: u32) -> i64 {
    BASE_RENT * (1 + level as i64 * RENT_MULTIPLIER)
}

/// Income tax: a tenth of the balance, truncated, capped at 200.
#[must_use]
pub fn income_tax(balance: i64) -> i64 {
    (balance / 10).min(INCOME_TAX_CAP)
}

impl<F: Frontend> Game<F> {
    /// Resolve one turn for `id`. Unknown or bankrupt participants are skipped.
    pub fn play_turn(&mut self, id: ParticipantId) {
        let Some(participant) = self.roster.get(id) else {
            return;
        };
        if participant.bankrupt {
            return;
        }
        if participant.is_jailed() {
            self.serve_jail_turn(id);
            return;
        }

        let roll = self.rng.roll_die();
        let position = advance(participant.position, roll);
        self.roster[id].position = position;
        debug!(participant = %id, roll, position, "moved");
        self.emit(GameEvent::Moved {
            participant: self.name_of(id),
            roll,
            position,
        });
        self.render_board();

        match Space::at(position) {
            Space::Special(space) => {
                self.resolve_special(id, space);
                return;
            }
            Space::Property(property) => self.resolve_property(id, property),
            Space::Empty => self.emit(GameEvent::LandedOnEmpty {
                participant: self.name_of(id),
            }),
        }
        if self.roster[id].bankrupt {
            return;
        }

        if self.rng.roll_die() == CARD_DRAW_FACE {
            self.draw_card(id, DeckKind::CommunityChest);
            if self.roster[id].bankrupt {
                return;
            }
        }

        self.offer_upgrade(id);
    }

    /// Rent `payer` would owe on `property` right now, or `None` if no rent is due.
    #[must_use]
    pub fn rent_due(&self, payer: ParticipantId, property: PropertyId) -> Option<i64> {
        let owner = self.registry.owner(property)?;
        if owner == payer || self.registry.is_mortgaged(property) {
            return None;
        }
        let owner = self.roster.get(owner)?;
        if owner.bankrupt {
            return None;
        }
        Some(rent_for_level(owner.upgrade_level(property)))
    }

    fn serve_jail_turn(&mut self, id: ParticipantId) {
        let (status, turn) = self.roster[id].jail.serve_turn(&mut self.rng);
        self.roster[id].jail = status;
        if let Some(turn) = turn {
            self.emit(GameEvent::Jail {
                participant: self.name_of(id),
                turn,
            });
        }
    }

    /// Move to the jail space and restart the jail counter.
    pub(crate) fn send_to_jail(&mut self, id: ParticipantId) {
        let participant = &mut self.roster[id];
        participant.position = JAIL_POSITION;
        participant.jail = JailStatus::imprisoned();
        self.emit(GameEvent::SentToJail {
            participant: self.name_of(id),
        });
    }

    fn resolve_special(&mut self, id: ParticipantId, space: SpecialSpace) {
        let participant = self.name_of(id);
        self.emit(GameEvent::LandedOnSpecial {
            participant: participant.clone(),
            space,
        });

        match space {
            SpecialSpace::Go => {
                self.credit(id, GO_BONUS);
                self.emit(GameEvent::CollectedGo {
                    participant,
                    amount: GO_BONUS,
                });
            }
            SpecialSpace::IncomeTax => {
                let amount = income_tax(self.roster[id].balance);
                self.pay_tax(id, space, amount);
            }
            SpecialSpace::LuxuryTax => self.pay_tax(id, space, LUXURY_TAX),
            SpecialSpace::GoToJail => self.send_to_jail(id),
            SpecialSpace::FreeParking | SpecialSpace::Jail => {}
        }
    }

    fn pay_tax(&mut self, id: ParticipantId, space: SpecialSpace, amount: i64) {
        self.emit(GameEvent::TaxPaid {
            participant: self.name_of(id),
            space,
            amount,
        });
        self.charge(id, amount);
    }

    fn resolve_property(&mut self, id: ParticipantId, property: PropertyId) {
        self.emit(GameEvent::LandedOnProperty {
            participant: self.name_of(id),
            property,
        });

        match self.registry.owner(property) {
            None => self.offer_purchase(id, property),
            Some(owner) if owner == id => self.emit(GameEvent::AlreadyOwned {
                participant: self.name_of(id),
                property,
            }),
            Some(owner) => self.collect_rent(id, owner, property),
        }
    }

    fn offer_purchase(&mut self, id: ParticipantId, property: PropertyId) {
        let offer = PurchaseOffer {
            participant: self.name_of(id),
            property,
            price: PROPERTY_PRICE,
            balance: self.roster[id].balance,
        };

        if self.decide(id, |policy, ctx| policy.buy_property(&offer, ctx)) {
            self.registry.assign(&mut self.roster, property, id);
            info!(participant = %offer.participant, %property, "property bought");
            self.emit(GameEvent::PropertyBought {
                participant: offer.participant,
                property,
                price: PROPERTY_PRICE,
            });
            self.charge(id, PROPERTY_PRICE);
        } else {
            self.emit(GameEvent::PurchaseDeclined {
                participant: offer.participant,
                property,
            });
            if self.auctions_on_decline(id) {
                self.auction(property, DEFAULT_STARTING_BID, DEFAULT_BID_INCREMENT);
            }
        }
    }

    fn collect_rent(&mut self, payer: ParticipantId, owner: ParticipantId, property: PropertyId) {
        if self.registry.is_mortgaged(property) {
            self.emit(GameEvent::RentWaived { property });
            return;
        }
        let Some(rent) = self.rent_due(payer, property) else {
            return;
        };

        // A payer who goes under pays nobody
        if self.charge(payer, rent) {
            return;
        }
        self.credit(owner, rent);
        self.emit(GameEvent::RentPaid {
            payer: self.name_of(payer),
            owner: self.name_of(owner),
            property,
            amount: rent,
        });
    }

    /// Draw from `kind` and apply the card to `id`.
    pub(crate) fn draw_card(&mut self, id: ParticipantId, kind: DeckKind) -> Card {
        let deck = match kind {
            DeckKind::CommunityChest => &mut self.community_chest,
            DeckKind::Chance => &mut self.chance,
        };
        let (card, reshuffled) = deck.draw(&mut self.rng);

        if reshuffled {
            self.emit(GameEvent::DeckReshuffled { deck: kind });
        }
        self.emit(GameEvent::CardDrawn {
            participant: self.name_of(id),
            deck: kind,
            text: card.text(),
        });
        self.apply_card(id, card.effect());
        card
    }

    fn apply_card(&mut self, id: ParticipantId, effect: CardEffect) {
        self.emit(GameEvent::CardApplied {
            participant: self.name_of(id),
            effect,
        });

        match effect {
            CardEffect::Collect(amount) => self.credit(id, amount),
            CardEffect::Pay(amount) => {
                self.charge(id, amount);
            }
            CardEffect::GoToJail => self.send_to_jail(id),
            CardEffect::GetOutOfJailFree | CardEffect::NoEffect => {}
            CardEffect::AdvanceTo { position, collect_go } => {
                let from = self.roster[id].position;
                self.roster[id].position = position;
                if collect_go && position <= from {
                    self.credit(id, GO_BONUS);
                    self.emit(GameEvent::CollectedGo {
                        participant: self.name_of(id),
                        amount: GO_BONUS,
                    });
                }
            }
            CardEffect::MoveBack(steps) => {
                let participant = &mut self.roster[id];
                participant.position = advance(participant.position, BOARD_SIZE - steps % BOARD_SIZE);
            }
            CardEffect::PayEachPlayer(amount) => {
                let others: Vec<_> = self
                    .roster
                    .solvent_ids()
                    .into_iter()
                    .filter(|&other| other != id)
                    .collect();
                if self.charge(id, amount * others.len() as i64) {
                    return;
                }
                for other in others {
                    self.credit(other, amount);
                }
            }
            CardEffect::PayPerUpgrade(amount) => {
                let participant = &self.roster[id];
                let levels: i64 = participant
                    .properties()
                    .map(|p| participant.upgrade_level(p) as i64)
                    .sum();
                if levels > 0 {
                    self.charge(id, amount * levels);
                }
            }
        }
    }

    fn offer_upgrade(&mut self, id: ParticipantId) {
        let participant = &self.roster[id];
        let offer = UpgradeOffer {
            participant: participant.name.clone(),
            candidates: participant
                .properties()
                .filter(|&p| !self.registry.is_mortgaged(p))
                .map(|p| (p, participant.upgrade_level(p)))
                .collect(),
            cost: UPGRADE_COST,
            balance: participant.balance,
        };

        let Some(choice) = self.decide(id, |policy, ctx| policy.choose_upgrade(&offer, ctx)) else {
            return;
        };
        if let Err(reason) = self.upgrade(id, choice.trim()) {
            warn!(participant = %offer.participant, %reason, "upgrade rejected");
            self.emit(GameEvent::SelectionRejected {
                participant: offer.participant,
                reason,
            });
        }
    }
}
