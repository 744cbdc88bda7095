//! Participant identification and the roster that owns them.
//!
//! ## ParticipantId
//!
//! Stable identity key. Ids are never reused, so removing bankrupt
//! participants does not invalidate the ids held by the property registry.
//!
//! ## Roster
//!
//! Participants in game order, looked up by id or by name. Lookups return
//! `Option` rather than a live alias into the collection.

use im::OrdSet;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::jail::JailStatus;
use crate::board::PropertyId;

/// Participant identifier, stable for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub u32);

impl ParticipantId {
    /// Create a new participant ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Participant({})", self.0)
    }
}

/// One seat at the table.
///
/// The owned-property set is only changed through the property registry,
/// which keeps it consistent with the global owner map.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,

    /// May go negative transiently; bankruptcy resolves it to zero.
    pub balance: i64,

    /// Board position, 0..40.
    pub position: u8,

    pub jail: JailStatus,

    /// Terminal: never clears once set.
    pub bankrupt: bool,

    /// Reported in snapshots only; decisions go through the participant's policy.
    pub automated: bool,

    pub(crate) properties: OrdSet<PropertyId>,

    /// Upgrade level per property. Entries may outlive ownership after a trade.
    pub(crate) upgrades: FxHashMap<PropertyId, u32>,
}

impl Participant {
    /// Create a participant at Go with the given starting balance.
    pub fn new(id: ParticipantId, name: impl Into<String>, balance: i64, automated: bool) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
            position: 0,
            jail: JailStatus::Free,
            bankrupt: false,
            automated,
            properties: OrdSet::new(),
            upgrades: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn is_jailed(&self) -> bool {
        self.jail.is_jailed()
    }

    #[must_use]
    pub fn owns(&self, property: PropertyId) -> bool {
        self.properties.contains(&property)
    }

    /// Owned properties in board order.
    pub fn properties(&self) -> impl Iterator<Item = PropertyId> + '_ {
        self.properties.iter().copied()
    }

    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Upgrade level recorded for a property (0 if none).
    #[must_use]
    pub fn upgrade_level(&self, property: PropertyId) -> u32 {
        self.upgrades.get(&property).copied().unwrap_or(0)
    }

    /// Sum of every recorded upgrade level, including stale entries.
    #[must_use]
    pub fn total_upgrades(&self) -> u32 {
        self.upgrades.values().sum()
    }
}

/// Participants in game order.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    participants: Vec<Participant>,
    next_id: u32,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a participant and return its id.
    pub fn add(&mut self, name: impl Into<String>, balance: i64, automated: bool) -> ParticipantId {
        let id = ParticipantId::new(self.next_id);
        self.next_id += 1;
        self.participants.push(Participant::new(id, name, balance, automated));
        id
    }

    #[must_use]
    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: ParticipantId) -> Option<&mut Participant> {
        self.participants.iter_mut().find(|p| p.id == id)
    }

    /// Find a participant by exact name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<ParticipantId> {
        self.participants.iter().find(|p| p.name == name).map(|p| p.id)
    }

    /// Ids in game order.
    #[must_use]
    pub fn ids(&self) -> Vec<ParticipantId> {
        self.participants.iter().map(|p| p.id).collect()
    }

    /// Ids of participants that are not bankrupt, in game order.
    #[must_use]
    pub fn solvent_ids(&self) -> Vec<ParticipantId> {
        self.participants
            .iter()
            .filter(|p| !p.bankrupt)
            .map(|p| p.id)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Drop bankrupt participants, returning them in game order.
    pub fn remove_bankrupt(&mut self) -> Vec<Participant> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.participants)
            .into_iter()
            .partition(|p| p.bankrupt);
        self.participants = kept;
        removed
    }
}

impl Index<ParticipantId> for Roster {
    type Output = Participant;

    fn index(&self, id: ParticipantId) -> &Self::Output {
        self.get(id)
            .unwrap_or_else(|| panic!("{} is not on the roster", id))
    }
}

impl IndexMut<ParticipantId> for Roster {
    fn index_mut(&mut self, id: ParticipantId) -> &mut Self::Output {
        self.get_mut(id)
            .unwrap_or_else(|| panic!("{} is not on the roster", id))
    }
}
