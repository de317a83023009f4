//! Free-tile search around a nominal spawn point.

use crate::env::{RngSource, pick};
use crate::error::{ErrorSeverity, GameError};
use crate::map::Grid;
use crate::occupancy::OccupancyError;
use crate::state::Position;

/// Errors raised while placing entities on a fresh map.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    #[error("no free tile within {max_radius} tiles of {nominal}")]
    Exhausted { nominal: Position, max_radius: u32 },

    #[error(transparent)]
    Occupancy(#[from] OccupancyError),
}

impl GameError for SpawnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Exhausted { .. } => ErrorSeverity::Recoverable,
            Self::Occupancy(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Exhausted { .. } => "SPAWN_EXHAUSTED",
            Self::Occupancy(err) => err.error_code(),
        }
    }
}

/// Finds a free tile at or near `nominal`.
///
/// The nominal tile wins if it is free. Otherwise the search widens one ring
/// at a time and picks uniformly among the free tiles inside the square
/// `[x - r, x + r] × [y - r, y + r]` of the first radius that has any.
///
/// # Errors
///
/// [`SpawnError::Exhausted`] if no free tile lies within `max_radius`.
pub fn spawn_near(
    grid: &Grid,
    nominal: Position,
    rng: &mut dyn RngSource,
    max_radius: u32,
) -> Result<Position, SpawnError> {
    if !grid.blocked(nominal) {
        return Ok(nominal);
    }

    for radius in 1..=useful_radius(grid, nominal, max_radius) as i32 {
        let mut free = Vec::new();
        for x in nominal.x.saturating_sub(radius)..=nominal.x.saturating_add(radius) {
            for y in nominal.y.saturating_sub(radius)..=nominal.y.saturating_add(radius) {
                let candidate = Position::new(x, y);
                if !grid.blocked(candidate) {
                    free.push(candidate);
                }
            }
        }
        if let Some(&found) = pick(rng, &free) {
            return Ok(found);
        }
    }

    Err(SpawnError::Exhausted {
        nominal,
        max_radius,
    })
}

/// Caps the search where a wider square could not reach any new tile.
fn useful_radius(grid: &Grid, nominal: Position, max_radius: u32) -> u32 {
    let outside = |at: i32, len: u32| -> u32 {
        if at < 0 {
            at.unsigned_abs()
        } else {
            (at as u32).saturating_sub(len.saturating_sub(1))
        }
    };
    let span = grid
        .width()
        .max(grid.height())
        .saturating_add(outside(nominal.x, grid.width()))
        .saturating_add(outside(nominal.y, grid.height()));
    max_radius.min(span).min(i32::MAX as u32)
}

/// Uniformly random tile anywhere on the grid, walls included.
pub fn random_tile(grid: &Grid, rng: &mut dyn RngSource) -> Position {
    let x = rng.below(grid.width()) as i32;
    let y = rng.below(grid.height()) as i32;
    Position::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, SequenceRng};
    use crate::map::TerrainKind;

    const W: TerrainKind = TerrainKind::Wall;
    const F: TerrainKind = TerrainKind::Floor;

    #[test]
    fn free_nominal_tile_wins() {
        let grid = Grid::generate(10, 10, 9, &mut SequenceRng::new([1]));
        let found = spawn_near(&grid, Position::new(4, 4), &mut PcgRng::new(0), 5).unwrap();
        assert_eq!(found, Position::new(4, 4));
    }

    #[test]
    fn widens_until_a_free_tile_appears() {
        let grid = Grid::from_rows(&[
            vec![W, W, W, W, W],
            vec![W, W, W, W, W],
            vec![W, W, W, W, F],
            vec![W, W, W, W, W],
        ]);
        let found = spawn_near(&grid, Position::new(1, 1), &mut PcgRng::new(0), 5).unwrap();
        assert_eq!(found, Position::new(4, 2));
    }

    #[test]
    fn picks_among_the_nearest_ring() {
        let grid = Grid::from_rows(&[
            vec![W, W, W, W, W],
            vec![W, F, W, F, W],
            vec![W, W, W, W, W],
            vec![W, W, W, W, F],
        ]);
        // Both (1, 1) and (3, 1) are one step from (2, 1); (4, 3) is not.
        let mut rng = PcgRng::new(9);
        for _ in 0..50 {
            let found = spawn_near(&grid, Position::new(2, 1), &mut rng, 5).unwrap();
            assert!(found == Position::new(1, 1) || found == Position::new(3, 1));
        }
    }

    #[test]
    fn full_map_is_exhausted() {
        let grid = Grid::from_rows(&[vec![W, W, W], vec![W, W, W], vec![W, W, W]]);
        let err = spawn_near(&grid, Position::new(1, 1), &mut PcgRng::new(0), 4).unwrap_err();
        assert_eq!(
            err,
            SpawnError::Exhausted {
                nominal: Position::new(1, 1),
                max_radius: 4
            }
        );
        assert!(err.severity().is_recoverable());
    }

    #[test]
    fn huge_radius_gives_up_once_the_map_is_covered() {
        let grid = Grid::from_rows(&[vec![W, W, W], vec![W, W, W], vec![W, W, W]]);
        let err = spawn_near(&grid, Position::new(1, 1), &mut PcgRng::new(0), u32::MAX).unwrap_err();
        assert_eq!(
            err,
            SpawnError::Exhausted {
                nominal: Position::new(1, 1),
                max_radius: u32::MAX
            }
        );
    }

    #[test]
    fn far_nominal_still_reaches_the_map() {
        let grid = Grid::from_rows(&[vec![W, W, W], vec![W, F, W], vec![W, W, W]]);
        let found = spawn_near(&grid, Position::new(-20, 1), &mut PcgRng::new(0), 100).unwrap();
        assert_eq!(found, Position::new(1, 1));
    }

    #[test]
    fn random_tiles_stay_in_bounds() {
        let grid = Grid::generate(7, 5, 9, &mut PcgRng::new(1));
        let mut rng = PcgRng::new(2);
        for _ in 0..200 {
            assert!(grid.in_bounds(random_tile(&grid, &mut rng)));
        }
    }
}
