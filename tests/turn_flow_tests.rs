//! Turn engine tests.
//!
//! Seeds are chosen by replaying the game's RNG ahead of time, so each test
//! knows exactly which dice the turn will see.

use monopoly_sim::board::PropertyId;
use monopoly_sim::cards::{CardEffect, Deck, DeckKind};
use monopoly_sim::core::{GameConfig, GameRng, JailStatus, JailTurn};
use monopoly_sim::frontend::{GameEvent, Scripted};
use monopoly_sim::Game;

// =============================================================================
// Helpers
// =============================================================================

/// RNG as it stands right after game setup (both decks shuffled).
fn setup_rng(seed: u64) -> GameRng {
    let mut rng = GameRng::new(seed);
    Deck::new(DeckKind::CommunityChest, &mut rng);
    Deck::new(DeckKind::Chance, &mut rng);
    rng
}

/// First seed whose post-setup RNG satisfies `pred`.
fn seed_where(pred: impl Fn(&mut GameRng) -> bool) -> u64 {
    (0..10_000)
        .find(|&seed| pred(&mut setup_rng(seed)))
        .expect("no seed in range satisfies the predicate")
}

// =============================================================================
// Purchases
// =============================================================================

/// Human declines a property; the other participant wins it at the opening bid.
#[test]
fn test_declined_purchase_goes_to_auction() {
    // First roll 3 (Baltic Avenue), no community chest draw afterwards
    let seed = seed_where(|rng| rng.roll_die() == 3 && rng.roll_die() != 1);
    let frontend = Scripted::new().yes(false).integer(0).integer(10);
    let mut game = Game::new(GameConfig::default().with_seed(seed), frontend);
    let ada = game.add_participant("Ada", false).unwrap();
    let bo = game.add_participant("Bo", false).unwrap();
    let baltic = PropertyId::from_name("Baltic Avenue").unwrap();

    game.play_turn(ada);

    let ada_state = game.participant(ada).unwrap();
    assert_eq!(ada_state.position, 3);
    assert_eq!(ada_state.balance, 1500);
    assert!(!ada_state.owns(baltic));

    let bo_state = game.participant(bo).unwrap();
    assert_eq!(bo_state.balance, 1490);
    assert!(bo_state.owns(baltic));
    assert_eq!(bo_state.upgrade_level(baltic), 0);
    assert_eq!(game.registry().owner(baltic), Some(bo));

    let events = game.frontend().events();
    assert!(events.contains(&GameEvent::AuctionStarted {
        property: baltic,
        starting_bid: 10,
        increment: 5,
    }));
    assert!(events.contains(&GameEvent::AuctionWon {
        winner: "Bo".into(),
        property: baltic,
        amount: 10,
    }));
    assert!(game.frontend().is_exhausted());
}

/// Buying charges the fixed price and records ownership at level 0.
#[test]
fn test_accepted_purchase() {
    let seed = seed_where(|rng| rng.roll_die() == 1 && rng.roll_die() != 1);
    let frontend = Scripted::new().yes(true);
    let mut game = Game::new(GameConfig::default().with_seed(seed), frontend);
    let ada = game.add_participant("Ada", false).unwrap();
    let mediterranean = PropertyId::at_position(1).unwrap();

    game.play_turn(ada);

    let ada_state = game.participant(ada).unwrap();
    assert_eq!(ada_state.balance, 1400);
    assert!(ada_state.owns(mediterranean));
    assert!(game.check_invariants());
}

// =============================================================================
// Spaces and cards
// =============================================================================

/// Special spaces end the turn: no card roll and no upgrade offer.
#[test]
fn test_income_tax_ends_turn() {
    let seed = seed_where(|rng| rng.roll_die() == 4);
    let mut game = Game::new(GameConfig::default().with_seed(seed), Scripted::new());
    let ada = game.add_participant("Ada", false).unwrap();

    let mut replay = GameRng::from_state(&game.rng_state());
    replay.roll_die();

    game.play_turn(ada);

    assert_eq!(game.participant(ada).unwrap().balance, 1350);
    assert_eq!(game.rng_state(), replay.state(), "only the movement roll was drawn");
    assert!(game.frontend().prompts().is_empty());
}

/// Landing on an empty space still offers the upgrade.
#[test]
fn test_empty_space_then_upgrade_offer() {
    let seed = seed_where(|rng| rng.roll_die() == 2 && rng.roll_die() != 1);
    let mut game = Game::new(GameConfig::default().with_seed(seed), Scripted::new());
    let ada = game.add_participant("Ada", false).unwrap();

    game.play_turn(ada);

    assert_eq!(game.participant(ada).unwrap().position, 2);
    assert_eq!(
        game.frontend().prompts(),
        &["Do you want to upgrade a property?".to_string()]
    );
    assert!(game
        .frontend()
        .events()
        .contains(&GameEvent::LandedOnEmpty { participant: "Ada".into() }));
}

/// A rejected upgrade choice is reported and changes nothing.
#[test]
fn test_invalid_upgrade_selection_is_reported() {
    let seed = seed_where(|rng| rng.roll_die() == 2 && rng.roll_die() != 1);
    let frontend = Scripted::new().yes(true).text("Atlantis");
    let mut game = Game::new(GameConfig::default().with_seed(seed), frontend);
    let ada = game.add_participant("Ada", false).unwrap();

    game.play_turn(ada);

    assert_eq!(game.participant(ada).unwrap().balance, 1500);
    assert!(game.frontend().events().iter().any(|e| matches!(
        e,
        GameEvent::SelectionRejected { participant, .. } if participant == "Ada"
    )));
}

/// A second roll of 1 draws the top community chest card; anything else draws nothing.
#[test]
fn test_chest_draw_on_second_roll_of_one() {
    // First roll 2 lands on an empty space either way
    for draws in [true, false] {
        let seed = seed_where(|rng| rng.roll_die() == 2 && (rng.roll_die() == 1) == draws);
        let mut game = Game::new(GameConfig::default().with_seed(seed), Scripted::new());
        let ada = game.add_participant("Ada", false).unwrap();
        let top = *game.deck(DeckKind::CommunityChest).peek().unwrap();

        game.play_turn(ada);

        let drawn = game.frontend().events().iter().any(|e| {
            matches!(e, GameEvent::CardDrawn { deck: DeckKind::CommunityChest, text, .. } if *text == top.text())
        });
        assert_eq!(drawn, draws);
        let left = if draws { 12 } else { 13 };
        assert_eq!(game.deck(DeckKind::CommunityChest).len(), left);
        assert_eq!(game.deck(DeckKind::Chance).len(), 13, "turns never draw chance");
    }
}

// =============================================================================
// Rent
// =============================================================================

/// Rent flows from the visitor to the owner; mortgaging stops it.
#[test]
fn test_rent_and_mortgage() {
    let mut game = Game::new(GameConfig::default(), Scripted::new().integer(10));
    let owner = game.add_participant("Owner", false).unwrap();
    let visitor = game.add_participant("Visitor", false).unwrap();
    let oriental = PropertyId::from_name("Oriental Avenue").unwrap();

    // Visitor passes, owner takes it at the opening bid
    game.auction(oriental, 10, 5);
    assert_eq!(game.registry().owner(oriental), Some(owner));

    assert_eq!(game.rent_due(visitor, oriental), Some(50));
    game.upgrade(owner, "Oriental Avenue").unwrap();
    assert_eq!(game.rent_due(visitor, oriental), Some(150));
    game.upgrade(owner, "Oriental Avenue").unwrap();
    assert_eq!(game.rent_due(visitor, oriental), Some(250));

    let before = game.participant(owner).unwrap().balance;
    assert_eq!(game.mortgage(owner, "Oriental Avenue"), Ok(50));
    assert_eq!(game.participant(owner).unwrap().balance, before + 50);
    assert_eq!(game.rent_due(visitor, oriental), None);
}

/// Landing on a mortgaged property collects nothing.
#[test]
fn test_no_rent_on_mortgaged_landing() {
    // Owner rolls onto a property and buys it; visitor then rolls the same number
    let mut found = None;
    for seed in 0..10_000 {
        let first = setup_rng(seed).roll_die();
        if ![1, 3, 5, 6].contains(&first) {
            continue;
        }
        let mut game = Game::new(GameConfig::default().with_seed(seed), Scripted::new().yes(true));
        let owner = game.add_participant("Owner", false).unwrap();
        let visitor = game.add_participant("Visitor", false).unwrap();
        game.play_turn(owner);
        if game.participant(owner).unwrap().property_count() != 1 {
            continue;
        }
        if GameRng::from_state(&game.rng_state()).roll_die() == first {
            found = Some((game, owner, visitor, first));
            break;
        }
    }
    let (mut game, owner, visitor, position) = found.expect("no seed found");
    let property = PropertyId::at_position(position).unwrap();

    game.mortgage(owner, property.name()).unwrap();
    game.play_turn(visitor);

    let events = game.frontend().events();
    assert!(events.contains(&GameEvent::RentWaived { property }));
    assert!(!events.iter().any(|e| matches!(e, GameEvent::RentPaid { .. })));
}

// =============================================================================
// Jail and bankruptcy
// =============================================================================

/// A participant sent to jail is out again by their fourth jailed turn.
#[test]
fn test_jail_release_by_fourth_turn() {
    let seed = (0..10_000)
        .find(|&seed| {
            let game = Game::headless(GameConfig::default().with_seed(seed));
            game.deck(DeckKind::Chance).peek().map(|c| c.effect()) == Some(CardEffect::GoToJail)
        })
        .expect("no seed with a jail card on top");
    let mut game = Game::new(GameConfig::default().with_seed(seed), Scripted::new());
    let ada = game.add_participant("Ada", true).unwrap();

    game.draw_chance(ada).unwrap();
    assert_eq!(game.participant(ada).unwrap().jail, JailStatus::Jailed { turns_served: 0 });
    assert_eq!(game.participant(ada).unwrap().position, 10);

    let mut jailed_turns = 0;
    while game.participant(ada).unwrap().is_jailed() {
        game.play_turn(ada);
        jailed_turns += 1;
        assert_eq!(game.participant(ada).unwrap().position, 10, "no movement while jailed");
        assert!(jailed_turns <= 4);
    }

    let last = game
        .frontend()
        .events()
        .iter()
        .rev()
        .find_map(|e| match e {
            GameEvent::Jail { turn, .. } => Some(*turn),
            _ => None,
        })
        .unwrap();
    match last {
        JailTurn::Released => assert_eq!(jailed_turns, 4),
        JailTurn::RolledDoubles { dice } => assert_eq!(dice.0, dice.1),
        JailTurn::Stayed { .. } => panic!("left jail on a failed roll"),
    }
}

/// Bankrupt participants never take another turn.
#[test]
fn test_bankrupt_participant_is_inert() {
    let mut game = Game::new(GameConfig::default(), Scripted::new());
    let ada = game.add_participant("Ada", true).unwrap();
    game.add_participant("Bo", true).unwrap();
    game.declare_bankrupt(ada);
    let before = game.rng_state();

    for _ in 0..5 {
        game.play_turn(ada);
    }

    assert_eq!(game.rng_state(), before);
    assert!(game.participant(ada).unwrap().bankrupt);
}
