//! Jail sub-machine.
//!
//! States: `Free` or `Jailed { turns_served }`. A jailed turn either releases
//! the participant (doubles, or the cap was already reached) or adds one to the
//! counter. No movement happens on a jailed turn.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Turns served after which the next jailed turn releases without rolling.
pub const JAIL_TURN_CAP: u8 = 3;

/// Jail status of a participant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JailStatus {
    #[default]
    Free,
    Jailed { turns_served: u8 },
}

/// What happened on a jailed turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JailTurn {
    /// Rolled doubles and walked out.
    RolledDoubles { dice: (u8, u8) },
    /// Missed doubles; still jailed.
    Stayed { dice: (u8, u8), turns_served: u8 },
    /// Cap reached; released without rolling.
    Released,
}

impl JailStatus {
    /// Entering jail always restarts the counter, even if already jailed.
    #[must_use]
    pub fn imprisoned() -> Self {
        JailStatus::Jailed { turns_served: 0 }
    }

    #[must_use]
    pub fn is_jailed(self) -> bool {
        matches!(self, JailStatus::Jailed { .. })
    }

    /// Play one jailed turn, returning the new status and what happened.
    ///
    /// A free participant stays free and draws nothing. The cap check comes
    /// before any roll, so the forced release consumes no randomness.
    pub fn serve_turn(self, rng: &mut GameRng) -> (JailStatus, Option<JailTurn>) {
        let turns_served = match self {
            JailStatus::Free => return (self, None),
            JailStatus::Jailed { turns_served } => turns_served,
        };

        if turns_served >= JAIL_TURN_CAP {
            return (JailStatus::Free, Some(JailTurn::Released));
        }

        let dice = (rng.roll_die(), rng.roll_die());
        if dice.0 == dice.1 {
            (JailStatus::Free, Some(JailTurn::RolledDoubles { dice }))
        } else {
            let turns_served = turns_served + 1;
            (
                JailStatus::Jailed { turns_served },
                Some(JailTurn::Stayed { dice, turns_served }),
            )
        }
    }
}
