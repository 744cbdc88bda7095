//! Decision policies.
//!
//! Every point where a participant must decide something goes through a
//! [`Policy`]. Automated participants resolve decisions with the shared
//! game RNG; interactive participants are asked through the [`Frontend`].
//! The policy is fixed when the participant sits down.

use crate::board::PropertyId;
use crate::core::GameRng;
use crate::frontend::Frontend;

/// Automated participants never buy below this balance.
pub const AUTOMATED_BALANCE_FLOOR: i64 = 150;

/// What a policy may use to reach a decision.
pub struct DecisionContext<'a> {
    pub rng: &'a mut GameRng,
    pub frontend: &'a mut dyn Frontend,
}

/// An unowned property the participant landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurchaseOffer {
    pub participant: String,
    pub property: PropertyId,
    pub price: i64,
    pub balance: i64,
}

/// A call for one bid in an auction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BidRequest {
    pub bidder: String,
    pub property: PropertyId,
    /// Minimum acceptable bid.
    pub floor: i64,
}

/// End-of-turn chance to upgrade one property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpgradeOffer {
    pub participant: String,
    /// Unmortgaged owned properties with their current level.
    pub candidates: Vec<(PropertyId, u32)>,
    pub cost: i64,
    pub balance: i64,
}

/// How a participant makes decisions.
pub trait Policy {
    /// Reported in status snapshots.
    fn is_automated(&self) -> bool;

    /// Buy the property at its fixed price?
    fn buy_property(&mut self, offer: &PurchaseOffer, ctx: &mut DecisionContext<'_>) -> bool;

    /// Does declining a purchase put the property up for auction?
    fn auction_on_decline(&self) -> bool {
        false
    }

    /// Amount to bid; anything below the floor counts as a pass.
    fn bid(&mut self, request: &BidRequest, ctx: &mut DecisionContext<'_>) -> i64;

    /// Name of the property to upgrade, or `None` to skip.
    ///
    /// The name is free text and is validated by the engine.
    fn choose_upgrade(&mut self, offer: &UpgradeOffer, ctx: &mut DecisionContext<'_>) -> Option<String>;
}

/// Computer-controlled participant.
#[derive(Clone, Copy, Debug, Default)]
pub struct Automated;

impl Policy for Automated {
    fn is_automated(&self) -> bool {
        true
    }

    /// Below the floor: never. Premium: always. Otherwise a coin flip.
    fn buy_property(&mut self, offer: &PurchaseOffer, ctx: &mut DecisionContext<'_>) -> bool {
        if offer.balance < AUTOMATED_BALANCE_FLOOR {
            return false;
        }
        if offer.property.is_premium() {
            return true;
        }
        ctx.rng.coin_flip()
    }

    /// Bids exactly the floor or passes, 50/50.
    fn bid(&mut self, request: &BidRequest, ctx: &mut DecisionContext<'_>) -> i64 {
        if ctx.rng.coin_flip() {
            request.floor
        } else {
            0
        }
    }

    fn choose_upgrade(&mut self, _offer: &UpgradeOffer, _ctx: &mut DecisionContext<'_>) -> Option<String> {
        None
    }
}

/// Human participant answering through the frontend.
#[derive(Clone, Copy, Debug, Default)]
pub struct Interactive;

impl Policy for Interactive {
    fn is_automated(&self) -> bool {
        false
    }

    fn auction_on_decline(&self) -> bool {
        true
    }

    fn buy_property(&mut self, offer: &PurchaseOffer, ctx: &mut DecisionContext<'_>) -> bool {
        ctx.frontend.prompt_yes_no(&format!(
            "{} is available for purchase for ${}. Do you want to buy it?",
            offer.property, offer.price
        ))
    }

    fn bid(&mut self, request: &BidRequest, ctx: &mut DecisionContext<'_>) -> i64 {
        ctx.frontend.prompt_integer(&format!(
            "{}, enter your bid for {} (or 0 to pass, must be at least ${})",
            request.bidder, request.property, request.floor
        ))
    }

    fn choose_upgrade(&mut self, offer: &UpgradeOffer, ctx: &mut DecisionContext<'_>) -> Option<String> {
        if !ctx.frontend.prompt_yes_no("Do you want to upgrade a property?") {
            return None;
        }

        let listing: Vec<String> = offer
            .candidates
            .iter()
            .map(|(property, level)| format!("{} (Current Upgrades: {})", property, level))
            .collect();
        Some(ctx.frontend.prompt_text(&format!(
            "Properties you can upgrade:\n{}\nEnter the property you want to upgrade:",
            listing.join("\n")
        )))
    }
}
