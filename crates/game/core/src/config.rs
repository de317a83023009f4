use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

/// Game configuration constants and tunable parameters.
///
/// Every field has a default matching the reference dungeon: an 80×45 map of
/// 32-unit tiles viewed through an 832×720 play area.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Map width in tiles.
    pub map_width: u32,
    /// Map height in tiles.
    pub map_height: u32,
    /// Side length of one tile in world units.
    pub tile_size: u32,
    /// Each interior tile becomes a wall with probability `1 / wall_one_in`.
    pub wall_one_in: u32,
    /// Nominal player spawn tile.
    pub player_spawn: Position,
    /// Number of enemies spawned on reset.
    pub enemy_count: u32,
    /// Catalog key of the template used for spawned enemies.
    pub enemy_template: String,
    /// Largest radius searched around a nominal spawn tile before giving up.
    pub max_spawn_radius: u32,
    /// Visible play area width in world units.
    pub view_width: u32,
    /// Visible play area height in world units.
    pub view_height: u32,
    /// Horizontal camera buffer, in tiles.
    pub buffer_tiles_x: u32,
    /// Vertical camera buffer, in tiles.
    pub buffer_tiles_y: u32,
    /// Sides on the attack die. A roll equal to this value is a critical.
    pub attack_die_sides: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAP_WIDTH: u32 = 80;
    pub const DEFAULT_MAP_HEIGHT: u32 = 45;
    pub const DEFAULT_TILE_SIZE: u32 = 32;
    pub const DEFAULT_WALL_ONE_IN: u32 = 9;
    pub const DEFAULT_PLAYER_SPAWN: Position = Position::new(10, 11);
    pub const DEFAULT_ENEMY_COUNT: u32 = 30;
    pub const DEFAULT_ENEMY_TEMPLATE: &'static str = "zombie";
    pub const DEFAULT_MAX_SPAWN_RADIUS: u32 = 80;
    pub const DEFAULT_VIEW_WIDTH: u32 = 832;
    pub const DEFAULT_VIEW_HEIGHT: u32 = 720;
    pub const DEFAULT_BUFFER_TILES_X: u32 = 8;
    pub const DEFAULT_BUFFER_TILES_Y: u32 = 6;
    pub const DEFAULT_ATTACK_DIE_SIDES: u32 = 20;

    /// Smallest map that still has an interior.
    pub const MIN_MAP_SIDE: u32 = 3;

    pub fn new() -> Self {
        Self {
            map_width: Self::DEFAULT_MAP_WIDTH,
            map_height: Self::DEFAULT_MAP_HEIGHT,
            tile_size: Self::DEFAULT_TILE_SIZE,
            wall_one_in: Self::DEFAULT_WALL_ONE_IN,
            player_spawn: Self::DEFAULT_PLAYER_SPAWN,
            enemy_count: Self::DEFAULT_ENEMY_COUNT,
            enemy_template: Self::DEFAULT_ENEMY_TEMPLATE.to_string(),
            max_spawn_radius: Self::DEFAULT_MAX_SPAWN_RADIUS,
            view_width: Self::DEFAULT_VIEW_WIDTH,
            view_height: Self::DEFAULT_VIEW_HEIGHT,
            buffer_tiles_x: Self::DEFAULT_BUFFER_TILES_X,
            buffer_tiles_y: Self::DEFAULT_BUFFER_TILES_Y,
            attack_die_sides: Self::DEFAULT_ATTACK_DIE_SIDES,
        }
    }

    pub fn with_map_size(mut self, width: u32, height: u32) -> Self {
        self.map_width = width;
        self.map_height = height;
        self
    }

    pub fn with_enemy_count(mut self, enemy_count: u32) -> Self {
        self.enemy_count = enemy_count;
        self
    }

    pub fn with_player_spawn(mut self, player_spawn: Position) -> Self {
        self.player_spawn = player_spawn;
        self
    }

    pub fn with_view(mut self, width: u32, height: u32) -> Self {
        self.view_width = width;
        self.view_height = height;
        self
    }

    pub fn tile_size_i32(&self) -> i32 {
        self.tile_size as i32
    }

    /// Map extent in world units along x and y.
    pub fn map_extent(&self) -> (i32, i32) {
        (
            (self.map_width * self.tile_size) as i32,
            (self.map_height * self.tile_size) as i32,
        )
    }

    /// Checks that the configuration describes a playable session.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map_width < Self::MIN_MAP_SIDE || self.map_height < Self::MIN_MAP_SIDE {
            return Err(ConfigError::MapTooSmall {
                width: self.map_width,
                height: self.map_height,
            });
        }
        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if self.wall_one_in == 0 {
            return Err(ConfigError::ZeroWallRatio);
        }
        if self.view_width == 0 || self.view_height == 0 {
            return Err(ConfigError::EmptyView);
        }
        if self.attack_die_sides == 0 {
            return Err(ConfigError::ZeroDieSides);
        }
        if self.enemy_count > 0 && self.enemy_template.is_empty() {
            return Err(ConfigError::MissingEnemyTemplate);
        }
        self.check_extents()
    }

    /// Every world-unit quantity the rules compute in `i32` must fit there.
    fn check_extents(&self) -> Result<(), ConfigError> {
        let fits = |a: u32, b: u32| a.checked_mul(b).is_some_and(|n| i32::try_from(n).is_ok());
        let oversized = !fits(self.map_width, self.map_height)
            || !fits(self.map_width, self.tile_size)
            || !fits(self.map_height, self.tile_size)
            || !fits(self.buffer_tiles_x, self.tile_size)
            || !fits(self.buffer_tiles_y, self.tile_size)
            || !fits(self.view_width, 1)
            || !fits(self.view_height, 1);
        if oversized {
            return Err(ConfigError::ExtentOverflow {
                width: self.map_width,
                height: self.map_height,
                tile_size: self.tile_size,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejected configuration values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("map {width}x{height} is too small (minimum side is {min})", min = GameConfig::MIN_MAP_SIDE)]
    MapTooSmall { width: u32, height: u32 },

    #[error("tile size must be positive")]
    ZeroTileSize,

    #[error("wall ratio denominator must be positive")]
    ZeroWallRatio,

    #[error("view width and height must be positive")]
    EmptyView,

    #[error("attack die must have at least one side")]
    ZeroDieSides,

    #[error("enemies requested but no enemy template configured")]
    MissingEnemyTemplate,

    #[error("map {width}x{height} with {tile_size}-unit tiles exceeds the world coordinate range")]
    ExtentOverflow {
        width: u32,
        height: u32,
        tile_size: u32,
    },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MapTooSmall { .. } => "CONFIG_MAP_TOO_SMALL",
            Self::ZeroTileSize => "CONFIG_ZERO_TILE_SIZE",
            Self::ZeroWallRatio => "CONFIG_ZERO_WALL_RATIO",
            Self::EmptyView => "CONFIG_EMPTY_VIEW",
            Self::ZeroDieSides => "CONFIG_ZERO_DIE_SIDES",
            Self::MissingEnemyTemplate => "CONFIG_MISSING_ENEMY_TEMPLATE",
            Self::ExtentOverflow { .. } => "CONFIG_EXTENT_OVERFLOW",
        }
    }
}
