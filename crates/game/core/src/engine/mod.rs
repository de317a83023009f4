//! Turn scheduling.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. One
//! call to [`GameEngine::tick`] fully resolves a turn:
//!
//! 1. prologue: per-tick flags cleared, tick counter advanced
//! 2. player phase: at most one attempt for the player's intent
//! 3. enemy phase: only if the player moved or attacked, every living enemy
//!    picks a direction and attempts it, in list order
//! 4. sweep: the dead are removed from the grid and the entity list
//! 5. camera: the viewport follows the player

mod cleanup;

use crate::action::{ActionResult, attempt};
use crate::ai::choose_direction;
use crate::env::RngSource;
use crate::state::{Direction, EntityId, GameState, Position, Tick};
use crate::viewport::Viewport;

/// One enemy's part in a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcAction {
    pub entity: EntityId,
    /// Direction picked by the policy; `None` means no attempt was made.
    pub direction: Option<Direction>,
    pub result: ActionResult,
}

/// Summary of everything a tick did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    pub tick: Tick,
    pub intent: Direction,
    /// `None` when the intent was `Direction::None` and nothing was attempted.
    pub player: Option<ActionResult>,
    pub took_action: bool,
    pub npc_actions: Vec<NpcAction>,
    /// Entities removed by the sweep, in list order.
    pub removed: Vec<EntityId>,
    pub camera: Viewport,
    /// Lines appended to the event log during this tick.
    pub events_logged: usize,
    /// The player died this tick.
    pub player_defeated: bool,
}

/// Game engine that owns turn sequencing for a borrowed state.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Resolves one full turn for `intent`.
    pub fn tick(&mut self, intent: Direction, rng: &mut dyn RngSource) -> TickReport {
        self.begin_tick();
        let logged_before = self.state.log.len();

        let player = self.player_phase(intent, rng);
        let took_action = player.is_some_and(|result| result.took_action());

        let npc_actions = if took_action {
            self.npc_phase(rng)
        } else {
            Vec::new()
        };

        let removed = cleanup::sweep(self.state);
        let player_defeated = removed.contains(&EntityId::PLAYER);

        if let Some(position) = self.player_position() {
            let world = position.to_world(self.state.config.tile_size_i32());
            self.state.camera.recenter(world, &self.state.config);
        }

        TickReport {
            tick: self.state.tick,
            intent,
            player,
            took_action,
            npc_actions,
            removed,
            camera: self.state.camera,
            events_logged: self.state.log.len() - logged_before,
            player_defeated,
        }
    }

    fn begin_tick(&mut self) {
        for entity in &mut self.state.entities {
            entity.took_damage = false;
        }
        self.state.log.begin_tick();
        self.state.tick = self.state.tick.next();
    }

    fn player_position(&self) -> Option<Position> {
        self.state.player().map(|player| player.position)
    }

    fn player_phase(&mut self, intent: Direction, rng: &mut dyn RngSource) -> Option<ActionResult> {
        if intent.is_none() {
            return None;
        }
        let target = self.player_position()?.step(intent);
        let result = attempt(self.state, EntityId::PLAYER, target, rng);
        cleanup::release_dead(self.state);
        Some(result)
    }

    fn npc_phase(&mut self, rng: &mut dyn RngSource) -> Vec<NpcAction> {
        let order: Vec<EntityId> = self
            .state
            .npcs()
            .filter(|entity| entity.ai.is_some())
            .map(|entity| entity.id)
            .collect();

        let mut actions = Vec::with_capacity(order.len());
        for id in order {
            let Some(npc) = self.state.entity(id).filter(|npc| npc.alive) else {
                continue;
            };
            let Some(profile) = npc.ai else {
                continue;
            };
            let origin = npc.position;
            // The player stays listed until the sweep, so enemies acting
            // after a killing blow still see its last position.
            let Some(player) = self.player_position() else {
                break;
            };

            let tile_size = self.state.config.tile_size_i32();
            let direction = choose_direction(origin, player, &profile, tile_size, rng);
            let result = match direction {
                Some(direction) => {
                    let result = attempt(self.state, id, origin.step(direction), rng);
                    cleanup::release_dead(self.state);
                    result
                }
                None => ActionResult::Blocked,
            };

            actions.push(NpcAction {
                entity: id,
                direction,
                result,
            });
        }
        actions
    }
}
