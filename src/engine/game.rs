//! The game: all mutable state for one table, plus collaborator queries.

use im::OrdSet;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{PropertyId, PropertyRegistry, PROPERTY_PRICE};
use crate::cards::{Deck, DeckKind};
use crate::core::{
    ActionResult, GameConfig, GameError, GameRng, GameRngState, Participant, ParticipantId, Roster,
};
use crate::frontend::{BoardSnapshot, Frontend, GameEvent, Headless};
use crate::policy::{Automated, DecisionContext, Interactive, Policy};

/// One game in progress.
///
/// Owns the roster, the property registry, both decks and the single RNG.
/// Decisions are delegated to each participant's [`Policy`]; prompts and
/// notifications go to the frontend `F`.
///
/// ## Example
///
/// ```
/// use monopoly_sim::{Game, GameConfig};
///
/// let mut game = Game::headless(GameConfig::default().with_seed(7));
/// let a = game.add_participant("Ada", true).unwrap();
/// let b = game.add_participant("Bo", true).unwrap();
///
/// for _ in 0..20 {
///     game.play_round();
///     assert!(game.check_invariants());
/// }
/// assert!(game.participant(a).is_some() && game.participant(b).is_some());
/// ```
pub struct Game<F: Frontend = Headless> {
    config: GameConfig,
    pub(crate) rng: GameRng,
    pub(crate) roster: Roster,
    pub(crate) registry: PropertyRegistry,
    pub(crate) community_chest: Deck,
    pub(crate) chance: Deck,
    policies: FxHashMap<ParticipantId, Box<dyn Policy>>,
    pub(crate) frontend: F,
}

/// Status line for one participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantStatus {
    pub id: ParticipantId,
    pub name: String,
    pub balance: i64,
    pub position: u8,
    pub jailed: bool,
    pub bankrupt: bool,
    pub automated: bool,
    pub properties: OrdSet<PropertyId>,
    pub total_upgrades: u32,
}

impl ParticipantStatus {
    /// Owned property names in board order.
    pub fn property_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.properties.iter().map(|p| p.name())
    }

    /// Balance plus the fixed value of every owned property.
    #[must_use]
    pub fn wealth(&self) -> i64 {
        self.balance + PROPERTY_PRICE * self.properties.len() as i64
    }
}

impl From<&Participant> for ParticipantStatus {
    fn from(p: &Participant) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            balance: p.balance,
            position: p.position,
            jailed: p.is_jailed(),
            bankrupt: p.bankrupt,
            automated: p.automated,
            // O(1): shares structure with the participant's set
            properties: p.properties.clone(),
            total_upgrades: p.total_upgrades(),
        }
    }
}

impl Game<Headless> {
    /// A game nobody is watching; interactive participants decline everything.
    #[must_use]
    pub fn headless(config: GameConfig) -> Self {
        Self::new(config, Headless)
    }
}

impl<F: Frontend> Game<F> {
    /// Set up the board and shuffle both decks (community chest first).
    pub fn new(config: GameConfig, frontend: F) -> Self {
        let mut rng = GameRng::new(config.seed);
        let community_chest = Deck::new(DeckKind::CommunityChest, &mut rng);
        let chance = Deck::new(DeckKind::Chance, &mut rng);

        Self {
            config,
            rng,
            roster: Roster::new(),
            registry: PropertyRegistry::new(),
            community_chest,
            chance,
            policies: FxHashMap::default(),
            frontend,
        }
    }

    // === Setup ===

    /// Seat a participant at Go with the starting balance.
    ///
    /// Automated participants decide with the RNG; others are asked
    /// through the frontend.
    pub fn add_participant(&mut self, name: &str, automated: bool) -> ActionResult<ParticipantId> {
        let policy: Box<dyn Policy> = if automated {
            Box::new(Automated)
        } else {
            Box::new(Interactive)
        };
        self.add_with_policy(name, policy)
    }

    /// Seat a participant with a custom decision policy.
    pub fn add_with_policy(&mut self, name: &str, policy: Box<dyn Policy>) -> ActionResult<ParticipantId> {
        if self.roster.find_by_name(name).is_some() {
            return Err(GameError::DuplicateParticipant(name.to_string()));
        }
        if self.roster.len() >= self.config.max_participants {
            return Err(GameError::RosterFull {
                max: self.config.max_participants,
            });
        }

        let id = self
            .roster
            .add(name, self.config.starting_balance, policy.is_automated());
        self.policies.insert(id, policy);
        info!(participant = name, automated = self.roster[id].automated, "participant added");
        Ok(id)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.roster.get(id)
    }

    #[must_use]
    pub fn find_participant(&self, name: &str) -> Option<ParticipantId> {
        self.roster.find_by_name(name)
    }

    /// Participant ids in game order.
    #[must_use]
    pub fn participant_ids(&self) -> Vec<ParticipantId> {
        self.roster.ids()
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn registry(&self) -> &PropertyRegistry {
        &self.registry
    }

    #[must_use]
    pub fn deck(&self, kind: DeckKind) -> &Deck {
        match kind {
            DeckKind::CommunityChest => &self.community_chest,
            DeckKind::Chance => &self.chance,
        }
    }

    /// RNG checkpoint, for replay comparisons.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    // === Collaborator queries ===

    /// Status of every participant in game order.
    #[must_use]
    pub fn status(&self) -> Vec<ParticipantStatus> {
        self.roster.iter().map(ParticipantStatus::from).collect()
    }

    /// (name, balance + 100 per owned property) for every participant.
    #[must_use]
    pub fn wealth(&self) -> Vec<(String, i64)> {
        self.status()
            .into_iter()
            .map(|s| {
                let wealth = s.wealth();
                (s.name, wealth)
            })
            .collect()
    }

    /// Token positions of solvent participants.
    #[must_use]
    pub fn board_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            tokens: self
                .roster
                .iter()
                .filter(|p| !p.bankrupt)
                .map(|p| (p.name.clone(), p.position))
                .collect(),
        }
    }

    /// The last solvent participant, once everyone else is bankrupt.
    #[must_use]
    pub fn winner(&self) -> Option<&Participant> {
        let mut solvent = self.roster.iter().filter(|p| !p.bankrupt);
        match (solvent.next(), solvent.next()) {
            (Some(last), None) => Some(last),
            _ => None,
        }
    }

    /// Play one turn for every participant, in game order.
    pub fn play_round(&mut self) {
        for id in self.roster.ids() {
            self.play_turn(id);
        }
    }

    /// Ownership agrees everywhere, and bankrupt participants hold nothing.
    #[must_use]
    pub fn check_invariants(&self) -> bool {
        self.registry.is_consistent(&self.roster)
            && self
                .roster
                .iter()
                .filter(|p| p.bankrupt)
                .all(|p| p.balance == 0 && p.property_count() == 0)
    }

    // === Internal helpers ===

    pub(crate) fn name_of(&self, id: ParticipantId) -> String {
        self.roster[id].name.clone()
    }

    pub(crate) fn auctions_on_decline(&self, id: ParticipantId) -> bool {
        self.policies.get(&id).is_some_and(|p| p.auction_on_decline())
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        debug!(%event, "game event");
        self.frontend.notify(&event);
    }

    pub(crate) fn render_board(&mut self) {
        let snapshot = self.board_snapshot();
        self.frontend.render_board(&snapshot);
    }

    /// Ask `id`'s policy for a decision.
    pub(crate) fn decide<R>(
        &mut self,
        id: ParticipantId,
        ask: impl FnOnce(&mut dyn Policy, &mut DecisionContext<'_>) -> R,
    ) -> R {
        let policy = self
            .policies
            .get_mut(&id)
            .unwrap_or_else(|| panic!("{} has no policy", id));
        let mut ctx = DecisionContext {
            rng: &mut self.rng,
            frontend: &mut self.frontend,
        };
        ask(policy.as_mut(), &mut ctx)
    }

    pub(crate) fn credit(&mut self, id: ParticipantId, amount: i64) {
        let balance = &mut self.roster[id].balance;
        *balance = balance.saturating_add(amount);
    }

    /// Deduct `amount`; a negative result bankrupts the participant.
    ///
    /// Returns `true` if the participant went bankrupt.
    pub(crate) fn charge(&mut self, id: ParticipantId, amount: i64) -> bool {
        let participant = &mut self.roster[id];
        participant.balance = participant.balance.saturating_sub(amount);
        if participant.balance < 0 {
            self.declare_bankrupt(id);
            true
        } else {
            false
        }
    }

    pub(crate) fn forget_policy(&mut self, id: ParticipantId) {
        self.policies.remove(&id);
    }
}
