//! Property registry: ownership and mortgage state.
//!
//! The registry is the only place that changes who owns what. Every
//! mutation updates the global owner map and the affected participants'
//! owned sets together, so the two views cannot drift apart.
//!
//! ## Example
//!
//! ```
//! use monopoly_sim::board::{PropertyId, PropertyRegistry};
//! use monopoly_sim::core::Roster;
//!
//! let mut roster = Roster::new();
//! let ada = roster.add("Ada", 1500, false);
//! let mut registry = PropertyRegistry::new();
//!
//! let boardwalk = PropertyId::from_name("Boardwalk").unwrap();
//! registry.assign(&mut roster, boardwalk, ada);
//!
//! assert_eq!(registry.owner(boardwalk), Some(ada));
//! assert!(roster[ada].owns(boardwalk));
//! assert!(registry.is_consistent(&roster));
//! ```

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use super::layout::PropertyId;
use crate::core::{ParticipantId, Roster};

/// Properties released in one liquidation.
pub type PropertyList = SmallVec<[PropertyId; 8]>;

/// Global ownership and mortgage state.
#[derive(Clone, Debug, Default)]
pub struct PropertyRegistry {
    owners: FxHashMap<PropertyId, ParticipantId>,
    /// Mortgage is one-way: there is no operation that clears a flag.
    mortgaged: FxHashSet<PropertyId>,
}

impl PropertyRegistry {
    /// Create an empty registry (nothing owned, nothing mortgaged).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn owner(&self, property: PropertyId) -> Option<ParticipantId> {
        self.owners.get(&property).copied()
    }

    #[must_use]
    pub fn is_owned(&self, property: PropertyId) -> bool {
        self.owners.contains_key(&property)
    }

    #[must_use]
    pub fn is_mortgaged(&self, property: PropertyId) -> bool {
        self.mortgaged.contains(&property)
    }

    /// Number of owned properties across all participants.
    #[must_use]
    pub fn owned_count(&self) -> usize {
        self.owners.len()
    }

    /// Give an unowned property to `owner` with upgrade level 0.
    ///
    /// Panics if the property is already owned.
    pub fn assign(&mut self, roster: &mut Roster, property: PropertyId, owner: ParticipantId) {
        if let Some(current) = self.owner(property) {
            panic!("{} is already owned by {}", property, current);
        }

        let participant = &mut roster[owner];
        participant.properties.insert(property);
        participant.upgrades.insert(property, 0);
        self.owners.insert(property, owner);
    }

    /// Return a property to the bank. The mortgage flag stays with the property.
    ///
    /// Returns the former owner, or `None` if it was unowned.
    pub fn release(&mut self, roster: &mut Roster, property: PropertyId) -> Option<ParticipantId> {
        let owner = self.owners.remove(&property)?;
        if let Some(participant) = roster.get_mut(owner) {
            participant.properties.remove(&property);
        }
        Some(owner)
    }

    /// Release everything `owner` holds, in board order.
    pub fn release_all(&mut self, roster: &mut Roster, owner: ParticipantId) -> PropertyList {
        let held: PropertyList = roster[owner].properties().collect();
        for &property in &held {
            self.release(roster, property);
        }
        held
    }

    /// Exchange two properties between their owners.
    ///
    /// Callers check ownership first; upgrade records are left where they are.
    pub fn swap(
        &mut self,
        roster: &mut Roster,
        (first_owner, first): (ParticipantId, PropertyId),
        (second_owner, second): (ParticipantId, PropertyId),
    ) {
        debug_assert_eq!(self.owner(first), Some(first_owner));
        debug_assert_eq!(self.owner(second), Some(second_owner));

        {
            let a = &mut roster[first_owner];
            a.properties.remove(&first);
            a.properties.insert(second);
        }
        {
            let b = &mut roster[second_owner];
            b.properties.remove(&second);
            b.properties.insert(first);
        }
        self.owners.insert(first, second_owner);
        self.owners.insert(second, first_owner);
    }

    /// Set the mortgage flag. Returns `false` if it was already set.
    pub fn mortgage(&mut self, property: PropertyId) -> bool {
        self.mortgaged.insert(property)
    }

    /// Check that the owner map and every owned set agree exactly.
    #[must_use]
    pub fn is_consistent(&self, roster: &Roster) -> bool {
        let local_total: usize = roster.iter().map(|p| p.property_count()).sum();
        if local_total != self.owners.len() {
            return false;
        }

        roster.iter().all(|participant| {
            participant
                .properties()
                .all(|property| self.owner(property) == Some(participant.id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop(name: &str) -> PropertyId {
        PropertyId::from_name(name).unwrap()
    }

    fn two_player_roster() -> (Roster, ParticipantId, ParticipantId) {
        let mut roster = Roster::new();
        let a = roster.add("A", 1500, false);
        let b = roster.add("B", 1500, false);
        (roster, a, b)
    }

    #[test]
    fn test_assign_and_release() {
        let (mut roster, a, _) = two_player_roster();
        let mut registry = PropertyRegistry::new();
        let baltic = prop("Baltic Avenue");

        registry.assign(&mut roster, baltic, a);
        assert_eq!(registry.owned_count(), 1);
        assert_eq!(roster[a].upgrade_level(baltic), 0);
        assert!(registry.is_consistent(&roster));

        assert_eq!(registry.release(&mut roster, baltic), Some(a));
        assert!(!registry.is_owned(baltic));
        assert!(!roster[a].owns(baltic));
        assert!(registry.is_consistent(&roster));

        assert_eq!(registry.release(&mut roster, baltic), None);
    }

    #[test]
    #[should_panic(expected = "already owned")]
    fn test_double_assign_panics() {
        let (mut roster, a, b) = two_player_roster();
        let mut registry = PropertyRegistry::new();
        let baltic = prop("Baltic Avenue");

        registry.assign(&mut roster, baltic, a);
        registry.assign(&mut roster, baltic, b);
    }

    #[test]
    fn test_assign_resets_upgrade_level() {
        let (mut roster, a, _) = two_player_roster();
        let mut registry = PropertyRegistry::new();
        let baltic = prop("Baltic Avenue");

        roster[a].upgrades.insert(baltic, 4);
        registry.assign(&mut roster, baltic, a);

        assert_eq!(roster[a].upgrade_level(baltic), 0);
    }

    #[test]
    fn test_release_all_board_order() {
        let (mut roster, a, _) = two_player_roster();
        let mut registry = PropertyRegistry::new();

        registry.assign(&mut roster, prop("Boardwalk"), a);
        registry.assign(&mut roster, prop("Mediterranean Avenue"), a);
        registry.assign(&mut roster, prop("Illinois Avenue"), a);

        let released = registry.release_all(&mut roster, a);

        assert_eq!(
            released.as_slice(),
            &[prop("Mediterranean Avenue"), prop("Illinois Avenue"), prop("Boardwalk")]
        );
        assert_eq!(roster[a].property_count(), 0);
        assert_eq!(registry.owned_count(), 0);
        assert!(registry.is_consistent(&roster));
    }

    #[test]
    fn test_swap_keeps_upgrades_in_place() {
        let (mut roster, a, b) = two_player_roster();
        let mut registry = PropertyRegistry::new();
        let park = prop("Park Place");
        let vermont = prop("Vermont Avenue");

        registry.assign(&mut roster, park, a);
        registry.assign(&mut roster, vermont, b);
        roster[a].upgrades.insert(park, 2);

        registry.swap(&mut roster, (a, park), (b, vermont));

        assert_eq!(registry.owner(park), Some(b));
        assert_eq!(registry.owner(vermont), Some(a));
        assert!(roster[a].owns(vermont));
        assert!(roster[b].owns(park));
        // Stale record stays with the former owner
        assert_eq!(roster[a].upgrade_level(park), 2);
        assert_eq!(roster[b].upgrade_level(park), 0);
        assert!(registry.is_consistent(&roster));
    }

    #[test]
    fn test_mortgage_is_one_way() {
        let (mut roster, a, _) = two_player_roster();
        let mut registry = PropertyRegistry::new();
        let baltic = prop("Baltic Avenue");

        registry.assign(&mut roster, baltic, a);
        assert!(registry.mortgage(baltic));
        assert!(!registry.mortgage(baltic));

        registry.release(&mut roster, baltic);
        assert!(registry.is_mortgaged(baltic));
    }

    #[test]
    fn test_inconsistency_detected() {
        let (mut roster, a, _) = two_player_roster();
        let registry = PropertyRegistry::new();

        roster[a].properties.insert(prop("Baltic Avenue"));

        assert!(!registry.is_consistent(&roster));
    }
}
