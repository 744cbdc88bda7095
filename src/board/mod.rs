//! The board: static layout plus mutable ownership state.
//!
//! - `layout`: positions, properties, special spaces, fixed prices
//! - `registry`: who owns which property and what is mortgaged

pub mod layout;
pub mod registry;

pub use layout::{
    advance, PropertyId, Space, SpecialSpace, BASE_RENT, BOARD_SIZE, JAIL_POSITION,
    PROPERTY_PRICE,
};
pub use registry::{PropertyList, PropertyRegistry};
