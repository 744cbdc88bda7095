//! Property tests over random self-play.
//!
//! Movement, rent and ownership invariants must hold for any seed and any
//! table size.

use proptest::prelude::*;

use monopoly_sim::board::{PropertyId, BOARD_SIZE};
use monopoly_sim::core::GameConfig;
use monopoly_sim::engine::rent_for_level;
use monopoly_sim::frontend::{GameEvent, Scripted};
use monopoly_sim::Game;

// =============================================================================
// Helpers
// =============================================================================

fn automated_table(seed: u64, players: usize) -> Game<Scripted> {
    let mut game = Game::new(GameConfig::default().with_seed(seed), Scripted::new());
    for n in 0..players {
        game.add_participant(&format!("Bot {}", n), true).unwrap();
    }
    game
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every move lands on (old position + roll) mod 40 with a roll in 1..=6.
    #[test]
    fn prop_movement_wraps(seed in any::<u64>(), players in 2usize..=6) {
        let mut game = automated_table(seed, players);

        for _ in 0..30 {
            for id in game.participant_ids() {
                let Some(before) = game.participant(id).map(|p| p.position) else {
                    continue;
                };
                let seen = game.frontend().events().len();
                game.play_turn(id);

                let moved = game.frontend().events()[seen..].iter().find_map(|e| match e {
                    GameEvent::Moved { roll, position, .. } => Some((*roll, *position)),
                    _ => None,
                });
                if let Some((roll, position)) = moved {
                    prop_assert!((1..=6).contains(&roll));
                    prop_assert_eq!(position, (before + roll) % BOARD_SIZE);
                }
            }
        }
    }

    /// Ownership stays consistent and bankrupt participants hold nothing.
    #[test]
    fn prop_self_play_invariants(seed in any::<u64>(), players in 2usize..=6) {
        let mut game = automated_table(seed, players);

        for _ in 0..60 {
            for id in game.participant_ids() {
                game.play_turn(id);
                prop_assert!(game.check_invariants());
            }
            for participant in game.roster().iter() {
                prop_assert!(participant.position < BOARD_SIZE);
                if !participant.bankrupt {
                    prop_assert!(participant.balance >= 0);
                }
            }
            game.remove_bankrupt();
        }

        let owned: usize = game.status().iter().map(|s| s.properties.len()).sum();
        prop_assert_eq!(owned, game.registry().owned_count());
    }

    /// Rent is base * (1 + 2 * level) for however many upgrades were bought.
    #[test]
    fn prop_rent_tracks_upgrades(levels in 0u32..10, index in 0usize..23) {
        let property = PropertyId::all().nth(index).unwrap();
        let mut game = Game::new(GameConfig::default(), Scripted::new().integer(10));
        let owner = game.add_participant("Owner", false).unwrap();
        let visitor = game.add_participant("Visitor", false).unwrap();
        game.auction(property, 10, 5).unwrap();

        for _ in 0..levels {
            game.upgrade(owner, property.name()).unwrap();
        }

        prop_assert_eq!(game.rent_due(visitor, property), Some(rent_for_level(levels)));
        prop_assert_eq!(rent_for_level(levels), 50 + 100 * i64::from(levels));
    }
}
