//! Card text and effect classification.
//!
//! Cards are immutable text. The effect is read from the text once, when
//! the card is created, by matching the phrasing used on the printed cards.

use serde::{Deserialize, Serialize};

use crate::board::PropertyId;

/// Community chest card texts.
pub const COMMUNITY_CHEST_CARDS: [&str; 13] = [
    "Bank error in your favor. Collect $200.",
    "Doctor's fees. Pay $50.",
    "From sale of stock you get $50.",
    "Get Out of Jail Free.",
    "Go to Jail. Go directly to jail, do not pass Go, do not collect $200.",
    "Holiday Fund matures. Receive $100.",
    "Income tax refund. Collect $20.",
    "Life insurance matures. Collect $100.",
    "Pay hospital fees of $100.",
    "Pay school fees of $150.",
    "Receive $25 consultancy fee.",
    "You have won second prize in a beauty contest. Collect $10.",
    "You inherit $100.",
];

/// Chance card texts.
pub const CHANCE_CARDS: [&str; 13] = [
    "Advance to Go (Collect $200).",
    "Advance to Illinois Ave. If you pass Go, collect $200.",
    "Advance to St. Charles Place. If you pass Go, collect $200.",
    "Bank pays you dividend of $50.",
    "Get out of Jail Free.",
    "Go Back 3 Spaces.",
    "Go directly to Jail. Do not pass Go, do not collect $200.",
    "Make general repairs on all your property. For each house pay $25.",
    "Pay poor tax of $15.",
    "Take a trip to Reading Railroad. If you pass Go, collect $200.",
    "Take a walk on the Boardwalk. Advance token to Boardwalk.",
    "You have been elected Chairman of the Board. Pay each player $50.",
    "Your building loan matures. Collect $150.",
];

/// What a card does to the participant who draws it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    /// Receive money from the bank.
    Collect(i64),
    /// Pay money to the bank.
    Pay(i64),
    GoToJail,
    /// Announced only; the card is not kept.
    GetOutOfJailFree,
    /// Move the token to `position`; `collect_go` pays 200 when Go is reached or passed.
    AdvanceTo { position: u8, collect_go: bool },
    MoveBack(u8),
    /// Pay this amount to every other solvent participant.
    PayEachPlayer(i64),
    /// Pay this amount per upgrade level on owned properties.
    PayPerUpgrade(i64),
    /// Text with no recognised effect.
    NoEffect,
}

/// An immutable card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    text: &'static str,
    effect: CardEffect,
}

impl Card {
    /// Create a card, classifying its effect from the text.
    #[must_use]
    pub fn new(text: &'static str) -> Self {
        Self {
            text,
            effect: classify(text),
        }
    }

    #[must_use]
    pub fn text(&self) -> &'static str {
        self.text
    }

    #[must_use]
    pub fn effect(&self) -> CardEffect {
        self.effect
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)
    }
}

/// First `$N` amount in the text.
fn dollar_amount(text: &str) -> Option<i64> {
    let start = text.find('$')? + 1;
    let digits: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Leading integer of `text`, e.g. "3 spaces" -> 3.
fn leading_number(text: &str) -> Option<u8> {
    let digits: String = text.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

fn advance_target(text: &str, lower: &str) -> Option<u8> {
    if let Some(rest) = lower.strip_prefix("advance to go") {
        if !rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Some(0);
        }
    }
    PropertyId::all()
        .find(|p| text.contains(p.name().trim_end_matches(" Avenue")))
        .map(PropertyId::position)
}

fn classify(text: &str) -> CardEffect {
    let lower = text.to_ascii_lowercase();

    if lower.starts_with("go to jail") || lower.starts_with("go directly to jail") {
        return CardEffect::GoToJail;
    }
    if lower.starts_with("get out of jail free") {
        return CardEffect::GetOutOfJailFree;
    }
    if let Some(rest) = lower.strip_prefix("go back ") {
        if let Some(steps) = leading_number(rest) {
            return CardEffect::MoveBack(steps);
        }
    }
    if lower.starts_with("advance") || lower.starts_with("take a") {
        if let Some(position) = advance_target(text, &lower) {
            return CardEffect::AdvanceTo {
                position,
                collect_go: lower.contains("collect $200"),
            };
        }
    }

    let Some(amount) = dollar_amount(text) else {
        return CardEffect::NoEffect;
    };

    // Money only moves on the literal "Collect $" / "Pay $" phrasing;
    // "Receive $25", "you inherit $100" and "fees of $100" are flavour text
    if lower.contains("each player") {
        CardEffect::PayEachPlayer(amount)
    } else if lower.contains("each house") {
        CardEffect::PayPerUpgrade(amount)
    } else if text.contains("Collect $") {
        CardEffect::Collect(amount)
    } else if text.contains("Pay $") {
        CardEffect::Pay(amount)
    } else {
        CardEffect::NoEffect
    }
}
