//! Owned, serialisable views of a running session for hosts.

use serde::{Deserialize, Serialize};

use game_core::{EntityId, Faction, GameState, Position, TerrainKind, Tick, Viewport};

/// Everything a host needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub seed: Option<u64>,
    pub tick: Tick,
    pub width: u32,
    pub height: u32,
    /// One string per row, `terrain[y]`, with `#` for wall and `.` for floor.
    pub terrain: Vec<String>,
    pub entities: Vec<EntityView>,
    pub camera: Viewport,
    /// Most recent log lines, newest first.
    pub events: Vec<String>,
    /// True if a line was logged during the last tick.
    pub events_changed: bool,
}

/// Read-only projection of one entity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub name: String,
    pub position: Position,
    pub faction: Faction,
    pub alive: bool,
    pub hp: Option<u32>,
    pub max_hp: Option<u32>,
    pub took_damage: bool,
}

impl SessionSnapshot {
    pub fn capture(state: &GameState, seed: Option<u64>, event_window: usize) -> Self {
        let grid = state.grid();
        let terrain = grid
            .terrain_rows()
            .into_iter()
            .map(|row| row.into_iter().map(terrain_glyph).collect())
            .collect();

        let entities = state
            .entities()
            .iter()
            .map(|entity| EntityView {
                id: entity.id,
                name: entity.name.clone(),
                position: entity.position,
                faction: entity.faction,
                alive: entity.alive,
                hp: entity.hp(),
                max_hp: entity.defender_stats().map(|stats| stats.max_hp),
                took_damage: entity.took_damage,
            })
            .collect();

        Self {
            seed,
            tick: state.tick(),
            width: grid.width(),
            height: grid.height(),
            terrain,
            entities,
            camera: state.camera(),
            events: state.log().recent(event_window).map(str::to_owned).collect(),
            events_changed: state.log().logged_this_tick(),
        }
    }

    pub fn player(&self) -> Option<&EntityView> {
        self.entities.iter().find(|entity| entity.id.is_player())
    }
}

fn terrain_glyph(terrain: TerrainKind) -> char {
    match terrain {
        TerrainKind::Wall => '#',
        TerrainKind::Floor => '.',
    }
}
