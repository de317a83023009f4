//! Tile grid generation and blocking queries.

use crate::env::RngSource;
use crate::state::{EntityId, Position};

/// Base terrain of a tile. Fixed for the lifetime of a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TerrainKind {
    Floor,
    Wall,
}

impl TerrainKind {
    pub fn is_passable(self) -> bool {
        matches!(self, TerrainKind::Floor)
    }
}

/// Binding from a floor tile to the entity standing on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occupancy {
    pub entity: EntityId,
    /// Blocking bit of the occupant, captured at bind time.
    pub blocking: bool,
}

/// One cell of the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    position: Position,
    terrain: TerrainKind,
    occupant: Option<Occupancy>,
}

impl Tile {
    pub const fn new(position: Position, terrain: TerrainKind) -> Self {
        Self {
            position,
            terrain,
            occupant: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn terrain(&self) -> TerrainKind {
        self.terrain
    }

    pub fn occupant(&self) -> Option<Occupancy> {
        self.occupant
    }

    /// Walls always block. Floors block while a blocking occupant stands there.
    pub fn blocking(&self) -> bool {
        match self.terrain {
            TerrainKind::Wall => true,
            TerrainKind::Floor => self.occupant.is_some_and(|occupancy| occupancy.blocking),
        }
    }

    pub(crate) fn set_occupant(&mut self, occupant: Option<Occupancy>) {
        self.occupant = occupant;
    }
}

/// Fixed-size map of tiles, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Generates a walled map with randomly scattered interior walls.
    ///
    /// The border is always wall. Each interior tile is a wall with
    /// probability `1 / wall_one_in`. Tiles are drawn column by column
    /// (x outer, y inner) so a seed always yields the same layout.
    pub fn generate(width: u32, height: u32, wall_one_in: u32, rng: &mut dyn RngSource) -> Self {
        let mut tiles = vec![Tile::new(Position::ORIGIN, TerrainKind::Wall); (width * height) as usize];

        for x in 0..width {
            for y in 0..height {
                let border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                let terrain = if border || rng.one_in(wall_one_in) {
                    TerrainKind::Wall
                } else {
                    TerrainKind::Floor
                };
                let index = (y * width + x) as usize;
                tiles[index] = Tile::new(Position::new(x as i32, y as i32), terrain);
            }
        }

        Self {
            width,
            height,
            tiles,
        }
    }

    /// Builds a grid from explicit terrain rows, `rows[y][x]`.
    ///
    /// Rows shorter than the first are padded with walls.
    pub fn from_rows(rows: &[Vec<TerrainKind>]) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |row| row.len() as u32);
        let mut tiles = Vec::with_capacity((width * height) as usize);

        for (y, row) in rows.iter().enumerate() {
            for x in 0..width as usize {
                let terrain = row.get(x).copied().unwrap_or(TerrainKind::Wall);
                tiles.push(Tile::new(Position::new(x as i32, y as i32), terrain));
            }
        }

        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    fn index(&self, position: Position) -> Option<usize> {
        if self.in_bounds(position) {
            Some((position.y as u32 * self.width + position.x as u32) as usize)
        } else {
            None
        }
    }

    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.index(position).map(|index| &self.tiles[index])
    }

    pub(crate) fn tile_mut(&mut self, position: Position) -> Option<&mut Tile> {
        self.index(position).map(|index| &mut self.tiles[index])
    }

    /// Out-of-bounds coordinates are always blocked.
    pub fn blocked(&self, position: Position) -> bool {
        self.tile(position).is_none_or(Tile::blocking)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }

    /// Terrain laid out as `rows[y][x]`.
    pub fn terrain_rows(&self) -> Vec<Vec<TerrainKind>> {
        self.tiles
            .chunks(self.width.max(1) as usize)
            .map(|row| row.iter().map(Tile::terrain).collect())
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn clear_occupants(&mut self) {
        for tile in &mut self.tiles {
            tile.set_occupant(None);
        }
    }
}
