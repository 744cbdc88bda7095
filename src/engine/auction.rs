//! Auctions.
//!
//! Every solvent participant is asked once, in game order. A bid at or above
//! the current floor is accepted and lifts the floor to `bid + increment` for
//! everyone after. The highest accepted bid wins; among equal bids the one
//! submitted first wins.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{info, warn};

use super::Game;
use crate::board::PropertyId;
use crate::core::ParticipantId;
use crate::frontend::{Frontend, GameEvent};
use crate::policy::BidRequest;

pub const DEFAULT_STARTING_BID: i64 = 10;
pub const DEFAULT_BID_INCREMENT: i64 = 5;

/// An accepted bid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bid {
    pub amount: i64,
    pub bidder: ParticipantId,
    /// Submission order within the auction.
    pub seq: u32,
}

impl Ord for Bid {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher amount first, then earlier submission
        self.amount
            .cmp(&other.amount)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Bid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Accepted bids for one auction, with the running floor.
#[derive(Clone, Debug)]
pub struct BidBook {
    bids: BinaryHeap<Bid>,
    floor: i64,
    increment: i64,
    submitted: u32,
}

impl BidBook {
    #[must_use]
    pub fn new(starting_bid: i64, increment: i64) -> Self {
        Self {
            bids: BinaryHeap::new(),
            floor: starting_bid,
            increment,
            submitted: 0,
        }
    }

    /// Minimum the next bidder must offer.
    #[must_use]
    pub fn floor(&self) -> i64 {
        self.floor
    }

    /// Record `amount` from `bidder`. Returns `false` if it is below the floor.
    pub fn submit(&mut self, bidder: ParticipantId, amount: i64) -> bool {
        if amount < self.floor {
            return false;
        }
        self.bids.push(Bid {
            amount,
            bidder,
            seq: self.submitted,
        });
        self.submitted += 1;
        self.floor = amount.saturating_add(self.increment);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty()
    }

    /// The winning bid, if any was accepted.
    #[must_use]
    pub fn winner(&self) -> Option<Bid> {
        self.bids.peek().copied()
    }
}

impl<F: Frontend> Game<F> {
    /// Auction an unowned property among all solvent participants.
    ///
    /// The winner takes ownership at level 0 and is then charged, which may
    /// bankrupt them and start further auctions. Returns the winning bid, or
    /// `None` if nobody bid or the property is already owned.
    pub fn auction(&mut self, property: PropertyId, starting_bid: i64, increment: i64) -> Option<Bid> {
        if let Some(owner) = self.registry.owner(property) {
            warn!(%property, %owner, "auction for an owned property skipped");
            return None;
        }

        self.emit(GameEvent::AuctionStarted {
            property,
            starting_bid,
            increment,
        });

        let mut book = BidBook::new(starting_bid, increment);
        for bidder in self.roster.solvent_ids() {
            let request = BidRequest {
                bidder: self.name_of(bidder),
                property,
                floor: book.floor(),
            };
            let amount = self.decide(bidder, |policy, ctx| policy.bid(&request, ctx));
            let accepted = book.submit(bidder, amount);
            self.emit(GameEvent::BidSubmitted {
                bidder: request.bidder,
                amount: accepted.then_some(amount),
            });
        }

        let Some(winning) = book.winner() else {
            self.emit(GameEvent::AuctionUnsold { property });
            return None;
        };

        let winner = self.name_of(winning.bidder);
        info!(participant = %winner, %property, amount = winning.amount, "auction won");
        self.registry.assign(&mut self.roster, property, winning.bidder);
        self.emit(GameEvent::AuctionWon {
            winner,
            property,
            amount: winning.amount,
        });
        self.charge(winning.bidder, winning.amount);
        Some(winning)
    }
}
