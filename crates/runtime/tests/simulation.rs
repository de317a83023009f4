use game_content::ActorCatalog;
use game_core::{
    ActionResult, ActorTemplate, AttackOutcome, Capabilities, Direction, EntityId, Faction,
    GameConfig, GameError, Position, SequenceRng,
};
use runtime::{RuntimeConfig, RuntimeError, SessionSnapshot, Simulation};

/// 5x3 map with a single interior row: (1,1), (2,1), (3,1).
///
/// With every scripted draw equal to 20, the grid is all floor inside the
/// border, the player lands on (1,1), and the lone zombie ends up on (2,1).
fn corridor(player_max_hp: u32) -> Simulation {
    let game_config = GameConfig::default()
        .with_map_size(5, 3)
        .with_player_spawn(Position::new(1, 1))
        .with_enemy_count(1);

    let mut catalog = ActorCatalog::builtin();
    catalog.insert(
        "player",
        ActorTemplate::builder("Player")
            .faction(Faction::Player)
            .capabilities(Capabilities::COMBATANT)
            .stats(player_max_hp, 10, 3, 1)
            .build(),
    );

    let mut sim = Simulation::builder()
        .config(RuntimeConfig::default().with_game_config(game_config))
        .actors(catalog)
        .build()
        .unwrap();
    sim.reset_with_rng(Box::new(SequenceRng::new([20]))).unwrap();
    sim
}

fn positions(sim: &Simulation) -> Vec<(EntityId, Position)> {
    sim.state()
        .unwrap()
        .entities()
        .iter()
        .map(|entity| (entity.id, entity.position))
        .collect()
}

#[test]
fn test_calls_before_reset_are_rejected() {
    let mut sim = Simulation::builder().build().unwrap();

    assert_eq!(sim.tick(Direction::Up).unwrap_err(), RuntimeError::NotStarted);
    assert_eq!(sim.state().unwrap_err(), RuntimeError::NotStarted);
    assert_eq!(sim.snapshot().unwrap_err(), RuntimeError::NotStarted);
    assert!(!sim.is_over());
}

#[test]
fn test_reset_builds_the_reference_dungeon() {
    let mut sim = Simulation::builder().build().unwrap();
    let state = sim.reset(7).unwrap();

    assert_eq!((state.grid().width(), state.grid().height()), (80, 45));
    assert_eq!(state.npcs().count(), 30);
    assert!(state.npcs().all(|npc| npc.name == "Zombie"));
    assert_eq!(state.player().and_then(|p| p.hp()), Some(50));
    assert!(state.log().is_empty());
    assert!(sim.audit().is_ok());
}

#[test]
fn test_same_seed_same_session() {
    let mut first = Simulation::builder().build().unwrap();
    let mut second = Simulation::builder().build().unwrap();
    first.reset(99).unwrap();
    second.reset(99).unwrap();

    let intents = [Direction::Right, Direction::Up, Direction::Left, Direction::Down];
    for intent in intents.iter().cycle().take(40) {
        if first.is_over() {
            break;
        }
        let a = first.tick(*intent).unwrap();
        let b = second.tick(*intent).unwrap();
        assert_eq!(a, b);
    }
    assert_eq!(first.snapshot().unwrap(), second.snapshot().unwrap());
}

#[test]
fn test_no_intent_freezes_enemies() {
    let mut sim = Simulation::builder().build().unwrap();
    sim.reset(3).unwrap();
    let before = positions(&sim);

    let report = sim.tick(Direction::None).unwrap();

    assert_eq!(report.player, None);
    assert!(report.npc_actions.is_empty());
    assert_eq!(positions(&sim), before);
}

#[test]
fn test_blocked_player_freezes_enemies() {
    let mut sim = corridor(50);
    let before = positions(&sim);

    let report = sim.tick(Direction::Left).unwrap();

    assert_eq!(report.player, Some(ActionResult::Blocked));
    assert!(!report.took_action);
    assert!(report.npc_actions.is_empty());
    assert_eq!(positions(&sim), before);
}

#[test]
fn test_player_attack_then_enemy_reply() {
    let mut sim = corridor(50);
    assert_eq!(positions(&sim)[1], (EntityId(1), Position::new(2, 1)));

    let report = sim.tick(Direction::Right).unwrap();

    assert_eq!(
        report.player,
        Some(ActionResult::Attacked(AttackOutcome::Hit {
            damage: 4,
            critical: true
        }))
    );
    assert_eq!(report.npc_actions.len(), 1);
    assert_eq!(report.npc_actions[0].direction, Some(Direction::Left));
    assert_eq!(report.events_logged, 2);

    let state = sim.state().unwrap();
    let events: Vec<&str> = state.log().iter().collect();
    assert_eq!(
        events,
        vec![
            "CRIT! Zombie hit Player for 2 damage",
            "CRIT! Player hit Zombie for 4 damage",
        ]
    );
    assert_eq!(state.entity(EntityId(1)).and_then(|z| z.hp()), Some(6));
    assert_eq!(state.player().and_then(|p| p.hp()), Some(48));
}

#[test]
fn test_defeat_ends_the_session() {
    let mut sim = corridor(2);

    let report = sim.tick(Direction::Right).unwrap();
    assert!(report.player_defeated);
    assert!(sim.is_over());
    assert!(sim.audit().is_ok());

    let err = sim.tick(Direction::Right).unwrap_err();
    assert_eq!(err, RuntimeError::PlayerDefeated);
    assert_eq!(err.error_code(), "RUNTIME_PLAYER_DEFEATED");

    // A fresh reset starts over with an empty log.
    sim.reset_with_rng(Box::new(SequenceRng::new([20]))).unwrap();
    assert!(!sim.is_over());
    assert!(sim.state().unwrap().log().is_empty());
}

#[test]
fn test_tick_command_parses_intents() {
    let mut sim = corridor(50);

    let report = sim.tick_command(" LEFT ").unwrap();
    assert_eq!(report.intent, Direction::Left);

    let err = sim.tick_command("north").unwrap_err();
    assert_eq!(
        err,
        RuntimeError::MalformedIntent {
            input: "north".into()
        }
    );
}

#[test]
fn test_unknown_enemy_template() {
    let mut game_config = GameConfig::default();
    game_config.enemy_template = "dragon".into();
    let mut sim = Simulation::builder()
        .config(RuntimeConfig::default().with_game_config(game_config))
        .build()
        .unwrap();

    assert_eq!(
        sim.reset(1).unwrap_err(),
        RuntimeError::UnknownTemplate {
            key: "dragon".into()
        }
    );
    assert_eq!(sim.state().unwrap_err(), RuntimeError::NotStarted);
}

#[test]
fn test_invalid_config_is_rejected_at_build() {
    let game_config = GameConfig::default().with_view(0, 720);
    let result = Simulation::builder()
        .config(RuntimeConfig::default().with_game_config(game_config))
        .build();

    assert!(matches!(result, Err(RuntimeError::Config(_))));
}

#[test]
fn test_oversized_tiles_are_rejected_before_play() {
    let mut game_config = GameConfig::default().with_enemy_count(0);
    game_config.tile_size = 100_000_000;
    let result = Simulation::builder()
        .config(RuntimeConfig::default().with_game_config(game_config))
        .build();

    let err = result.err().unwrap();
    assert_eq!(err.error_code(), "CONFIG_EXTENT_OVERFLOW");
}

#[test]
fn test_occupancy_holds_across_seeds() {
    let intents = [
        Direction::Up,
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::None,
    ];

    for seed in 0..8 {
        let mut sim = Simulation::builder().build().unwrap();
        sim.reset(seed).unwrap();

        for (step, intent) in intents.iter().cycle().take(150).enumerate() {
            if sim.is_over() {
                break;
            }
            let report = sim.tick(*intent).unwrap();
            assert!(
                sim.audit().is_ok(),
                "seed {seed}: occupancy broke at tick {step}"
            );

            let state = sim.state().unwrap();
            assert!(state.entities().iter().all(|entity| entity.alive));
            for removed in &report.removed {
                assert!(state.entity(*removed).is_none());
            }
        }
    }
}

#[test]
fn test_snapshot_serializes() {
    let mut sim = corridor(50);
    sim.tick(Direction::Right).unwrap();

    let snapshot = sim.snapshot().unwrap();
    assert_eq!(snapshot.terrain, vec!["#####", "#...#", "#####"]);
    assert_eq!(snapshot.events.len(), 2);
    assert!(snapshot.events_changed);
    assert_eq!(snapshot.player().map(|p| p.hp), Some(Some(48)));
    assert_eq!(snapshot.seed, None);

    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded: SessionSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, snapshot);
}

#[test]
fn test_event_window_limits_snapshot() {
    let game_config = GameConfig::default()
        .with_map_size(5, 3)
        .with_player_spawn(Position::new(1, 1))
        .with_enemy_count(1);
    let mut sim = Simulation::builder()
        .config(
            RuntimeConfig::default()
                .with_game_config(game_config)
                .with_event_window(1),
        )
        .build()
        .unwrap();
    sim.reset_with_rng(Box::new(SequenceRng::new([20]))).unwrap();
    sim.tick(Direction::Right).unwrap();

    let snapshot = sim.snapshot().unwrap();
    assert_eq!(snapshot.events, vec!["CRIT! Zombie hit Player for 2 damage"]);
    assert_eq!(sim.state().unwrap().log().len(), 2);
}
