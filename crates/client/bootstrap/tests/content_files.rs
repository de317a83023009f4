use std::fs;

use client_bootstrap::{BootstrapConfig, SessionBuilder};
use tempfile::TempDir;

const SMALL_CONFIG: &str = r#"
map_width = 20
map_height = 12
player_spawn = { x = 3, y = 3 }
enemy_count = 4
enemy_template = "enemy"
"#;

const ACTORS: &str = r#"[
    ("player", (
        name: "Hero",
        faction: Player,
        capabilities: "OCCUPANT | ATTACKER | DEFENDER",
        stats: Some((hp: 20, max_hp: 20, defense: 12, attack: 2, crit_bonus: 2)),
    )),
    ("enemy", (
        name: "Rat",
        faction: Enemy,
        capabilities: "OCCUPANT | ATTACKER | DEFENDER",
        stats: Some((hp: 3, max_hp: 3, defense: 0, attack: 1, crit_bonus: 0)),
        ai: Some((visible_range: 160)),
    )),
]"#;

fn write_content(dir: &TempDir) -> BootstrapConfig {
    let config_path = dir.path().join("config.toml");
    let actors_path = dir.path().join("actors.ron");
    fs::write(&config_path, SMALL_CONFIG).unwrap();
    fs::write(&actors_path, ACTORS).unwrap();

    BootstrapConfig {
        config_path: Some(config_path),
        actors_path: Some(actors_path),
        ..BootstrapConfig::default().with_seed(11)
    }
}

#[test]
fn test_session_from_content_files() {
    let dir = TempDir::new().unwrap();
    let setup = SessionBuilder::new(write_content(&dir)).build().unwrap();
    let state = setup.state().unwrap();

    assert_eq!((state.grid().width(), state.grid().height()), (20, 12));
    assert_eq!(state.player().map(|p| p.name.as_str()), Some("Hero"));
    assert_eq!(state.npcs().count(), 4);
    assert!(state.npcs().all(|npc| npc.name == "Rat"));
}

#[test]
fn test_same_seed_replays_identically() {
    let dir = TempDir::new().unwrap();
    let script = "up up right right down left none up right down";

    let mut first = SessionBuilder::new(write_content(&dir)).build().unwrap();
    let mut second = SessionBuilder::new(write_content(&dir)).build().unwrap();

    assert_eq!(first.replay(script).unwrap(), second.replay(script).unwrap());
    assert_eq!(
        first.simulation.snapshot().unwrap(),
        second.simulation.snapshot().unwrap()
    );
}

#[test]
fn test_missing_files_are_reported() {
    let dir = TempDir::new().unwrap();
    let config = BootstrapConfig {
        config_path: Some(dir.path().join("missing.toml")),
        ..BootstrapConfig::default()
    };

    let err = SessionBuilder::new(config).build().err().unwrap();
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn test_catalog_without_configured_enemy_fails() {
    let dir = TempDir::new().unwrap();
    let mut config = write_content(&dir);
    fs::write(
        config.config_path.as_ref().unwrap(),
        "enemy_template = \"dragon\"\n",
    )
    .unwrap();
    config.enemy_count = Some(2);

    assert!(SessionBuilder::new(config).build().is_err());
}
