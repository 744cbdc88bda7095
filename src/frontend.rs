//! The collaborator seam: prompts, notifications and board rendering.
//!
//! The core never reads input or prints. It asks a [`Frontend`] for
//! decisions and hands it [`GameEvent`]s and [`BoardSnapshot`]s. A console
//! frontend lives outside this crate; [`Headless`] and [`Scripted`] cover
//! self-play and deterministic replays.

use std::collections::VecDeque;

use crate::board::{PropertyId, SpecialSpace, BOARD_SIZE};
use crate::cards::{CardEffect, DeckKind};
use crate::core::{GameError, JailTurn};

/// Something that happened, reported to the frontend.
///
/// Notifications never influence state. `Display` gives the status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Moved { participant: String, roll: u8, position: u8 },
    LandedOnSpecial { participant: String, space: SpecialSpace },
    LandedOnProperty { participant: String, property: PropertyId },
    LandedOnEmpty { participant: String },
    CollectedGo { participant: String, amount: i64 },
    TaxPaid { participant: String, space: SpecialSpace, amount: i64 },
    SentToJail { participant: String },
    Jail { participant: String, turn: JailTurn },
    PropertyBought { participant: String, property: PropertyId, price: i64 },
    PurchaseDeclined { participant: String, property: PropertyId },
    AlreadyOwned { participant: String, property: PropertyId },
    RentPaid { payer: String, owner: String, property: PropertyId, amount: i64 },
    RentWaived { property: PropertyId },
    AuctionStarted { property: PropertyId, starting_bid: i64, increment: i64 },
    BidSubmitted { bidder: String, amount: Option<i64> },
    AuctionWon { winner: String, property: PropertyId, amount: i64 },
    AuctionUnsold { property: PropertyId },
    DeckReshuffled { deck: DeckKind },
    CardDrawn { participant: String, deck: DeckKind, text: &'static str },
    CardApplied { participant: String, effect: CardEffect },
    Mortgaged { participant: String, property: PropertyId, payout: i64 },
    Upgraded { participant: String, property: PropertyId, level: u32 },
    Traded { initiator: String, counterparty: String, given: PropertyId, received: PropertyId },
    Bankrupt { participant: String },
    Removed { participant: String },
    SelectionRejected { participant: String, reason: GameError },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use GameEvent::*;
        match self {
            Moved { participant, roll, position } => {
                write!(f, "{} rolled a {} and moved to {}", participant, roll, position)
            }
            LandedOnSpecial { participant, space } => write!(f, "{} landed on {}", participant, space),
            LandedOnProperty { participant, property } => {
                write!(f, "{} landed on {}", participant, property)
            }
            LandedOnEmpty { participant } => write!(f, "{} landed on an empty space", participant),
            CollectedGo { participant, amount } => {
                write!(f, "{} collects ${} for Go", participant, amount)
            }
            TaxPaid { participant, space, amount } => {
                write!(f, "{} pays {} of ${}", participant, space, amount)
            }
            SentToJail { participant } => write!(f, "{} is sent to Jail!", participant),
            Jail { participant, turn } => match turn {
                JailTurn::RolledDoubles { dice } => write!(
                    f,
                    "{} rolled {} and {}, a double, and is free from jail",
                    participant, dice.0, dice.1
                ),
                JailTurn::Stayed { dice, turns_served } => write!(
                    f,
                    "{} rolled {} and {} and stays in jail ({} turns served)",
                    participant, dice.0, dice.1, turns_served
                ),
                JailTurn::Released => {
                    write!(f, "{} has served 3 turns in jail and is now free", participant)
                }
            },
            PropertyBought { participant, property, price } => {
                write!(f, "{} bought {} for ${}", participant, property, price)
            }
            PurchaseDeclined { participant, property } => {
                write!(f, "{} decided not to buy {}", participant, property)
            }
            AlreadyOwned { participant, property } => {
                write!(f, "{} is already owned by {}", property, participant)
            }
            RentPaid { payer, owner, property, amount } => {
                write!(f, "{} paid ${} in rent to {} for {}", payer, amount, owner, property)
            }
            RentWaived { property } => write!(f, "{} is mortgaged. No rent is due", property),
            AuctionStarted { property, starting_bid, increment } => write!(
                f,
                "Starting auction for {}! Starting bid is ${} with bid increment of ${}",
                property, starting_bid, increment
            ),
            BidSubmitted { bidder, amount: Some(amount) } => write!(f, "{} bids ${}", bidder, amount),
            BidSubmitted { bidder, amount: None } => write!(f, "{} passes", bidder),
            AuctionWon { winner, property, amount } => write!(
                f,
                "{} wins the auction for {} with a bid of ${}",
                winner, property, amount
            ),
            AuctionUnsold { property } => write!(f, "No bids were placed for {}", property),
            DeckReshuffled { deck } => write!(f, "No {} cards left. Reshuffling...", deck),
            CardDrawn { participant, deck, text } => write!(f, "{} draws {}: {}", participant, deck, text),
            CardApplied { participant, effect } => write!(f, "{}: {:?}", participant, effect),
            Mortgaged { participant, property, payout } => write!(
                f,
                "{} mortgaged {} and received ${}",
                participant, property, payout
            ),
            Upgraded { participant, property, level } => write!(
                f,
                "{} upgraded {}. Total upgrades: {}",
                participant, property, level
            ),
            Traded { initiator, counterparty, given, received } => write!(
                f,
                "Trade successful! {} traded {} for {} with {}",
                initiator, given, received, counterparty
            ),
            Bankrupt { participant } => write!(
                f,
                "{} is bankrupt! All properties are now up for auction",
                participant
            ),
            Removed { participant } => write!(f, "{} leaves the game", participant),
            SelectionRejected { participant, reason } => {
                write!(f, "{}: invalid selection ({})", participant, reason)
            }
        }
    }
}

/// Read-only snapshot of token positions for rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// (name, position) of every solvent participant, in game order.
    pub tokens: Vec<(String, u8)>,
}

impl std::fmt::Display for BoardSnapshot {
    /// 40 cells, ten per row, each `[ ]` or `[X]` with the token's initial.
    /// Later participants on the same cell overwrite earlier ones.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cells = vec![' '; BOARD_SIZE as usize];
        for (name, position) in &self.tokens {
            if let Some(initial) = name.chars().next() {
                cells[*position as usize] = initial;
            }
        }

        for (i, cell) in cells.iter().enumerate() {
            write!(f, "[{}]", cell)?;
            if (i + 1) % 10 == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// The excluded collaborator: asks humans for decisions and displays state.
pub trait Frontend {
    fn prompt_yes_no(&mut self, message: &str) -> bool;

    fn prompt_text(&mut self, message: &str) -> String;

    fn prompt_integer(&mut self, message: &str) -> i64;

    fn notify(&mut self, _event: &GameEvent) {}

    fn render_board(&mut self, _board: &BoardSnapshot) {}
}

/// Frontend with nobody behind it: declines, answers empty, bids nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl Frontend for Headless {
    fn prompt_yes_no(&mut self, _message: &str) -> bool {
        false
    }

    fn prompt_text(&mut self, _message: &str) -> String {
        String::new()
    }

    fn prompt_integer(&mut self, _message: &str) -> i64 {
        0
    }
}

/// Frontend that replays queued answers and records what it was shown.
///
/// Once a queue runs dry it answers like [`Headless`].
///
/// ```
/// use monopoly_sim::frontend::{Frontend, Scripted};
///
/// let mut script = Scripted::new().yes(true).integer(25);
/// assert!(script.prompt_yes_no("Buy?"));
/// assert_eq!(script.prompt_integer("Bid?"), 25);
/// assert!(!script.prompt_yes_no("Again?"));
/// assert_eq!(script.prompts().len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    yes_no: VecDeque<bool>,
    texts: VecDeque<String>,
    integers: VecDeque<i64>,
    prompts: Vec<String>,
    events: Vec<GameEvent>,
    renders: usize,
}

impl Scripted {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a yes/no answer.
    #[must_use]
    pub fn yes(mut self, answer: bool) -> Self {
        self.yes_no.push_back(answer);
        self
    }

    /// Queue a text answer.
    #[must_use]
    pub fn text(mut self, answer: impl Into<String>) -> Self {
        self.texts.push_back(answer.into());
        self
    }

    /// Queue an integer answer.
    #[must_use]
    pub fn integer(mut self, answer: i64) -> Self {
        self.integers.push_back(answer);
        self
    }

    /// Every prompt shown, in order.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every notification received, in order.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// How many times the board was rendered.
    #[must_use]
    pub fn renders(&self) -> usize {
        self.renders
    }

    /// True when every queued answer has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.yes_no.is_empty() && self.texts.is_empty() && self.integers.is_empty()
    }
}

impl Frontend for Scripted {
    fn prompt_yes_no(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.yes_no.pop_front().unwrap_or(false)
    }

    fn prompt_text(&mut self, message: &str) -> String {
        self.prompts.push(message.to_string());
        self.texts.pop_front().unwrap_or_default()
    }

    fn prompt_integer(&mut self, message: &str) -> i64 {
        self.prompts.push(message.to_string());
        self.integers.pop_front().unwrap_or(0)
    }

    fn notify(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }

    fn render_board(&mut self, _board: &BoardSnapshot) {
        self.renders += 1;
    }
}
