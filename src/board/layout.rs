//! Static board layout.
//!
//! The board is 40 spaces. Each position is exactly one of:
//! - a special space (Go, taxes, jail, free parking, go-to-jail)
//! - a property, identified by a [`PropertyId`]
//! - an empty space with no effect
//!
//! Every property shares the same price and base rent.

use serde::{Deserialize, Serialize};

/// Number of spaces on the board.
pub const BOARD_SIZE: u8 = 40;

/// Position of the jail space.
pub const JAIL_POSITION: u8 = 10;

/// Purchase price of every property.
pub const PROPERTY_PRICE: i64 = 100;

/// Base rent of every property.
pub const BASE_RENT: i64 = 50;

/// (position, name) for every property, in board order.
const PROPERTIES: [(u8, &str); 23] = [
    (1, "Mediterranean Avenue"),
    (3, "Baltic Avenue"),
    (5, "Reading Railroad"),
    (6, "Oriental Avenue"),
    (8, "Vermont Avenue"),
    (9, "Connecticut Avenue"),
    (11, "St. Charles Place"),
    (13, "States Avenue"),
    (14, "Virginia Avenue"),
    (16, "St. James Place"),
    (18, "Tennessee Avenue"),
    (19, "New York Avenue"),
    (21, "Kentucky Avenue"),
    (23, "Indiana Avenue"),
    (24, "Illinois Avenue"),
    (26, "Atlantic Avenue"),
    (27, "Ventnor Avenue"),
    (29, "Marvin Gardens"),
    (31, "Pacific Avenue"),
    (32, "North Carolina Avenue"),
    (34, "Pennsylvania Avenue"),
    (37, "Park Place"),
    (39, "Boardwalk"),
];

/// Identifier of a property on the board.
///
/// Ordered by board position, so iterating a set of ids walks the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PropertyId(u8);

impl PropertyId {
    /// Look up a property by its exact name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        PROPERTIES
            .iter()
            .position(|&(_, n)| n == name)
            .map(|i| Self(i as u8))
    }

    /// Look up the property at a board position.
    #[must_use]
    pub fn at_position(position: u8) -> Option<Self> {
        PROPERTIES
            .iter()
            .position(|&(p, _)| p == position)
            .map(|i| Self(i as u8))
    }

    /// Iterate over every property in board order.
    pub fn all() -> impl Iterator<Item = PropertyId> {
        (0..PROPERTIES.len() as u8).map(PropertyId)
    }

    /// The property's name.
    #[must_use]
    pub fn name(self) -> &'static str {
        PROPERTIES[self.0 as usize].1
    }

    /// The property's board position.
    #[must_use]
    pub fn position(self) -> u8 {
        PROPERTIES[self.0 as usize].0
    }

    /// Premium properties are always bought by automated participants who can afford them.
    #[must_use]
    pub fn is_premium(self) -> bool {
        matches!(self.name(), "Boardwalk" | "Park Place")
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Spaces with a fixed effect instead of a property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialSpace {
    Go,
    IncomeTax,
    Jail,
    FreeParking,
    GoToJail,
    LuxuryTax,
}

impl SpecialSpace {
    /// The special space at a board position, if any.
    #[must_use]
    pub fn at_position(position: u8) -> Option<Self> {
        match position {
            0 => Some(Self::Go),
            4 => Some(Self::IncomeTax),
            JAIL_POSITION => Some(Self::Jail),
            20 => Some(Self::FreeParking),
            30 => Some(Self::GoToJail),
            38 => Some(Self::LuxuryTax),
            _ => None,
        }
    }

    /// Display name of the space.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Go => "Go",
            Self::IncomeTax => "Income Tax",
            Self::Jail => "Jail",
            Self::FreeParking => "Free Parking",
            Self::GoToJail => "Go to Jail",
            Self::LuxuryTax => "Luxury Tax",
        }
    }
}

impl std::fmt::Display for SpecialSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What occupies a board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Space {
    Special(SpecialSpace),
    Property(PropertyId),
    Empty,
}

impl Space {
    /// Classify a board position.
    #[must_use]
    pub fn at(position: u8) -> Self {
        if let Some(special) = SpecialSpace::at_position(position) {
            Space::Special(special)
        } else if let Some(property) = PropertyId::at_position(position) {
            Space::Property(property)
        } else {
            Space::Empty
        }
    }
}

/// Advance a position by `steps`, wrapping around the board.
#[must_use]
pub fn advance(position: u8, steps: u8) -> u8 {
    ((position as u16 + steps as u16) % BOARD_SIZE as u16) as u8
}
