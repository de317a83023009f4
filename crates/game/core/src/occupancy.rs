//! Bidirectional tile ↔ entity bindings.
//!
//! A floor tile records at most one occupant, and an occupant's `position`
//! always names the tile that records it. These functions are the only code
//! that writes tile occupants; everything else goes through them.

use crate::error::{ErrorSeverity, GameError};
use crate::map::{Grid, Occupancy};
use crate::state::{Entity, EntityId, Position};

/// Violations of the one-occupant-per-tile binding rules.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OccupancyError {
    #[error("tile {position} is already held by {occupant}")]
    TileTaken {
        position: Position,
        occupant: EntityId,
    },

    #[error("entity {entity} cannot occupy tiles")]
    NotOccupant { entity: EntityId },

    #[error("tile {position} is outside the map")]
    OutOfBounds { position: Position },

    #[error("tile {position} is not walkable")]
    NotWalkable { position: Position },

    #[error("tile {position} records {entity}, which does not exist")]
    Dangling { position: Position, entity: EntityId },

    #[error("tile {tile} records {entity}, but the entity is at {recorded}")]
    Desync {
        entity: EntityId,
        recorded: Position,
        tile: Position,
    },

    #[error("entity {entity} at {position} is not recorded by its tile")]
    Unbound { entity: EntityId, position: Position },

    #[error("entity {entity} is already placed")]
    Duplicate { entity: EntityId },
}

impl GameError for OccupancyError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TileTaken { .. } => "OCCUPANCY_TILE_TAKEN",
            Self::NotOccupant { .. } => "OCCUPANCY_NOT_OCCUPANT",
            Self::OutOfBounds { .. } => "OCCUPANCY_OUT_OF_BOUNDS",
            Self::NotWalkable { .. } => "OCCUPANCY_NOT_WALKABLE",
            Self::Dangling { .. } => "OCCUPANCY_DANGLING",
            Self::Desync { .. } => "OCCUPANCY_DESYNC",
            Self::Unbound { .. } => "OCCUPANCY_UNBOUND",
            Self::Duplicate { .. } => "OCCUPANCY_DUPLICATE",
        }
    }
}

/// Binds `entity` to `target`, releasing its previous tile first.
///
/// # Errors
///
/// Rejects non-occupants, targets outside the map, walls, and tiles already
/// held by a different entity. Nothing is changed on error.
pub fn bind(grid: &mut Grid, entity: &mut Entity, target: Position) -> Result<(), OccupancyError> {
    if !entity.can_occupy() {
        return Err(OccupancyError::NotOccupant { entity: entity.id });
    }

    let tile = grid
        .tile(target)
        .ok_or(OccupancyError::OutOfBounds { position: target })?;
    if !tile.terrain().is_passable() {
        return Err(OccupancyError::NotWalkable { position: target });
    }
    if let Some(current) = tile.occupant()
        && current.entity != entity.id
    {
        return Err(OccupancyError::TileTaken {
            position: target,
            occupant: current.entity,
        });
    }

    if entity.position != target {
        unbind(grid, entity);
    }

    if let Some(tile) = grid.tile_mut(target) {
        tile.set_occupant(Some(Occupancy {
            entity: entity.id,
            blocking: entity.is_blocking(),
        }));
    }
    entity.position = target;
    Ok(())
}

/// Clears the entity's tile if that tile still records this entity.
pub fn unbind(grid: &mut Grid, entity: &Entity) {
    if let Some(tile) = grid.tile_mut(entity.position)
        && tile.occupant().is_some_and(|occupancy| occupancy.entity == entity.id)
    {
        tile.set_occupant(None);
    }
}

/// The entity recorded at `position`, if any.
pub fn occupant_at(grid: &Grid, position: Position) -> Option<EntityId> {
    grid.tile(position)
        .and_then(|tile| tile.occupant())
        .map(|occupancy| occupancy.entity)
}

/// Verifies the binding invariant over the whole grid and entity set.
///
/// # Errors
///
/// Returns the first violation found: tiles recording unknown entities or
/// entities elsewhere, and living occupants their tile does not record.
pub fn audit(grid: &Grid, entities: &[Entity]) -> Result<(), OccupancyError> {
    for tile in grid.tiles() {
        let Some(occupancy) = tile.occupant() else {
            continue;
        };
        let entity = entities
            .iter()
            .find(|entity| entity.id == occupancy.entity)
            .ok_or(OccupancyError::Dangling {
                position: tile.position(),
                entity: occupancy.entity,
            })?;
        if entity.position != tile.position() {
            return Err(OccupancyError::Desync {
                entity: entity.id,
                recorded: entity.position,
                tile: tile.position(),
            });
        }
    }

    for entity in entities.iter().filter(|e| e.alive && e.can_occupy()) {
        if occupant_at(grid, entity.position) != Some(entity.id) {
            return Err(OccupancyError::Unbound {
                entity: entity.id,
                position: entity.position,
            });
        }
    }

    Ok(())
}
