//! Authoritative game state representation.
//!
//! [`GameState`] owns the grid, the entity list, the event log, and the
//! camera. Hosts read it through shared references; every mutation goes
//! through the engine, the movement arbiter, or the spawn helpers here.
pub mod types;

pub use types::{
    Capabilities, CombatStats, Direction, Entity, EntityId, EventLog, Faction, Position, Tick,
    WorldPoint,
};

use crate::config::GameConfig;
use crate::env::{ActorTemplate, RngSource};
use crate::map::Grid;
use crate::occupancy::{self, OccupancyError};
use crate::spawn::{SpawnError, random_tile, spawn_near};
use crate::viewport::Viewport;

/// Canonical snapshot of one running session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) grid: Grid,
    /// Player and enemies in insertion order. Enemies act in this order.
    pub(crate) entities: Vec<Entity>,
    pub(crate) log: EventLog,
    pub(crate) camera: Viewport,
    pub(crate) tick: Tick,

    /// Sequential entity ID allocator (monotonically increasing).
    ///
    /// Never reused. ID 0 is reserved for the player.
    next_entity_id: u32,
}

impl GameState {
    /// Creates a state over `grid` with no entities.
    pub fn empty(config: GameConfig, grid: Grid) -> Self {
        Self {
            config,
            grid,
            entities: Vec::new(),
            log: EventLog::new(),
            camera: Viewport::default(),
            tick: Tick::ZERO,
            next_entity_id: 1,
        }
    }

    /// Generates a fresh map and populates it.
    ///
    /// The player is placed at the configured spawn tile (or the nearest free
    /// tile), then `enemy_count` enemies are placed near uniformly random
    /// tiles.
    ///
    /// # Errors
    ///
    /// [`SpawnError::Exhausted`] if the map has no room for someone.
    pub fn generate(
        config: GameConfig,
        player: &ActorTemplate,
        enemy: &ActorTemplate,
        rng: &mut dyn RngSource,
    ) -> Result<Self, SpawnError> {
        let grid = Grid::generate(
            config.map_width,
            config.map_height,
            config.wall_one_in,
            rng,
        );
        let mut state = Self::empty(config, grid);

        let player_spawn = state.config.player_spawn;
        state.spawn_player(player, player_spawn, rng)?;

        for _ in 0..state.config.enemy_count {
            let nominal = random_tile(&state.grid, rng);
            state.spawn(enemy, nominal, rng)?;
        }

        Ok(state)
    }

    /// Places the player at or near `nominal`.
    pub fn spawn_player(
        &mut self,
        template: &ActorTemplate,
        nominal: Position,
        rng: &mut dyn RngSource,
    ) -> Result<EntityId, SpawnError> {
        let position = spawn_near(&self.grid, nominal, rng, self.config.max_spawn_radius)?;
        Ok(self.place_player_at(template, position)?)
    }

    /// Places a new non-player entity at or near `nominal`.
    pub fn spawn(
        &mut self,
        template: &ActorTemplate,
        nominal: Position,
        rng: &mut dyn RngSource,
    ) -> Result<EntityId, SpawnError> {
        let position = spawn_near(&self.grid, nominal, rng, self.config.max_spawn_radius)?;
        Ok(self.place_at(template, position)?)
    }

    /// Places the player exactly at `position`.
    pub fn place_player_at(
        &mut self,
        template: &ActorTemplate,
        position: Position,
    ) -> Result<EntityId, OccupancyError> {
        if self.player().is_some() {
            return Err(OccupancyError::Duplicate {
                entity: EntityId::PLAYER,
            });
        }
        self.insert(template.to_entity(EntityId::PLAYER, position))
    }

    /// Places a new non-player entity exactly at `position`.
    pub fn place_at(
        &mut self,
        template: &ActorTemplate,
        position: Position,
    ) -> Result<EntityId, OccupancyError> {
        let id = EntityId(self.next_entity_id);
        let id = self.insert(template.to_entity(id, position))?;
        self.next_entity_id += 1;
        Ok(id)
    }

    fn insert(&mut self, mut entity: Entity) -> Result<EntityId, OccupancyError> {
        if entity.can_occupy() {
            let position = entity.position;
            occupancy::bind(&mut self.grid, &mut entity, position)?;
        }
        let id = entity.id;
        self.entities.push(entity);
        Ok(id)
    }

    // ===== queries =====

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    pub(crate) fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|entity| entity.id == id)
    }

    pub fn player(&self) -> Option<&Entity> {
        self.entity(EntityId::PLAYER)
    }

    /// Every entity other than the player, in action order.
    pub fn npcs(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.iter().filter(|entity| !entity.id.is_player())
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn camera(&self) -> Viewport {
        self.camera
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn occupant_at(&self, position: Position) -> Option<&Entity> {
        occupancy::occupant_at(&self.grid, position).and_then(|id| self.entity(id))
    }

    /// Verifies that tiles and entities agree on every binding.
    pub fn audit(&self) -> Result<(), OccupancyError> {
        occupancy::audit(&self.grid, &self.entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::AiProfile;
    use crate::env::{PcgRng, SequenceRng};

    fn player() -> ActorTemplate {
        ActorTemplate::builder("Player")
            .faction(Faction::Player)
            .capabilities(Capabilities::COMBATANT)
            .stats(50, 10, 3, 1)
            .build()
    }

    fn zombie() -> ActorTemplate {
        ActorTemplate::builder("Zombie")
            .faction(Faction::Enemy)
            .capabilities(Capabilities::COMBATANT)
            .stats(10, 4, 1, 1)
            .ai(AiProfile::default())
            .build()
    }

    #[test]
    fn generate_populates_the_map() {
        let config = GameConfig::default();
        let state = GameState::generate(config, &player(), &zombie(), &mut PcgRng::new(1)).unwrap();

        assert_eq!(state.grid().width(), 80);
        assert_eq!(state.grid().height(), 45);
        assert_eq!(state.entities().len(), 31);
        assert_eq!(state.npcs().count(), 30);
        assert!(state.player().is_some());
        assert!(state.audit().is_ok());
        assert!(state.log().is_empty());
        assert_eq!(state.camera(), Viewport::default());
    }

    #[test]
    fn player_lands_on_the_nominal_tile_when_free() {
        // Script of ones keeps every interior tile floor.
        let config = GameConfig::default().with_enemy_count(0);
        let state =
            GameState::generate(config, &player(), &zombie(), &mut SequenceRng::new([1])).unwrap();
        assert_eq!(
            state.player().map(|p| p.position),
            Some(Position::new(10, 11))
        );
    }

    #[test]
    fn ids_are_unique_and_never_reused() {
        let config = GameConfig::default().with_enemy_count(5);
        let state = GameState::generate(config, &player(), &zombie(), &mut PcgRng::new(4)).unwrap();
        let mut ids: Vec<u32> = state.entities().iter().map(|e| e.id.0).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn second_player_is_rejected() {
        let grid = Grid::generate(6, 6, 9, &mut SequenceRng::new([1]));
        let mut state = GameState::empty(GameConfig::default(), grid);
        state.place_player_at(&player(), Position::new(1, 1)).unwrap();
        assert_eq!(
            state.place_player_at(&player(), Position::new(2, 2)),
            Err(OccupancyError::Duplicate {
                entity: EntityId::PLAYER
            })
        );
    }

    #[test]
    fn exact_placement_refuses_taken_tiles() {
        let grid = Grid::generate(6, 6, 9, &mut SequenceRng::new([1]));
        let mut state = GameState::empty(GameConfig::default(), grid);
        let first = state.place_at(&zombie(), Position::new(2, 2)).unwrap();
        assert!(state.place_at(&zombie(), Position::new(2, 2)).is_err());

        let second = state.place_at(&zombie(), Position::new(3, 2)).unwrap();
        assert_eq!(first, EntityId(1));
        assert_eq!(second, EntityId(2));
        assert_eq!(state.occupant_at(Position::new(3, 2)).map(|e| e.id), Some(second));
    }

    #[test]
    fn crowded_map_is_exhausted() {
        // 3x3 has a single interior floor tile: room for the player only.
        let config = GameConfig::default()
            .with_map_size(3, 3)
            .with_player_spawn(Position::new(1, 1))
            .with_enemy_count(1);
        let err = GameState::generate(config, &player(), &zombie(), &mut SequenceRng::new([1]))
            .unwrap_err();
        assert!(matches!(err, SpawnError::Exhausted { .. }));
    }
}
