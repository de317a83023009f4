//! Scrolling camera over the map.

use crate::config::GameConfig;
use crate::state::WorldPoint;

/// Camera offset in world units.
///
/// Always within `[0, map_extent - view_extent]` on each axis, or 0 when the
/// view is larger than the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
}

impl Viewport {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Scrolls one tile toward `player` when it leaves the inner zone, then
    /// clamps to the map.
    pub fn recenter(&mut self, player: WorldPoint, config: &GameConfig) {
        let tile = config.tile_size_i32();
        let (extent_x, extent_y) = config.map_extent();

        self.x = scroll_axis(
            self.x,
            player.x - self.x,
            config.view_width as i32,
            config.buffer_tiles_x as i32 * tile,
            tile,
            extent_x,
        );
        self.y = scroll_axis(
            self.y,
            player.y - self.y,
            config.view_height as i32,
            config.buffer_tiles_y as i32 * tile,
            tile,
            extent_y,
        );
    }

    /// Largest legal offset on each axis.
    pub fn max_offset(config: &GameConfig) -> (i32, i32) {
        let (extent_x, extent_y) = config.map_extent();
        (
            (extent_x - config.view_width as i32).max(0),
            (extent_y - config.view_height as i32).max(0),
        )
    }
}

fn scroll_axis(camera: i32, offset: i32, view: i32, buffer: i32, step: i32, extent: i32) -> i32 {
    let shifted = if offset < buffer {
        camera - step
    } else if offset > view - buffer {
        camera + step
    } else {
        camera
    };
    shifted.clamp(0, (extent - view).max(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Position;

    fn world(x: i32, y: i32) -> WorldPoint {
        Position::new(x, y).to_world(32)
    }

    #[test]
    fn stays_put_inside_the_zone() {
        let config = GameConfig::default();
        let mut camera = Viewport::new(320, 320);
        // 15 tiles right and 12 up of the camera: inside both buffers.
        camera.recenter(world(25, 22), &config);
        assert_eq!(camera, Viewport::new(320, 320));
    }

    #[test]
    fn scrolls_one_tile_toward_the_player() {
        let config = GameConfig::default();
        let mut camera = Viewport::new(320, 320);
        camera.recenter(world(12, 12), &config);
        assert_eq!(camera, Viewport::new(288, 288));

        let mut camera = Viewport::new(320, 320);
        camera.recenter(world(40, 40), &config);
        assert_eq!(camera, Viewport::new(352, 352));
    }

    #[test]
    fn clamps_at_the_map_edges() {
        let config = GameConfig::default();
        let (max_x, max_y) = Viewport::max_offset(&config);
        assert_eq!((max_x, max_y), (2560 - 832, 1440 - 720));

        let mut camera = Viewport::default();
        camera.recenter(world(1, 1), &config);
        assert_eq!(camera, Viewport::default());

        let mut camera = Viewport::new(max_x, max_y);
        camera.recenter(world(79, 44), &config);
        assert_eq!(camera, Viewport::new(max_x, max_y));
    }

    #[test]
    fn view_larger_than_map_pins_to_zero() {
        let config = GameConfig::default().with_map_size(10, 10);
        let mut camera = Viewport::new(64, 64);
        camera.recenter(world(8, 8), &config);
        assert_eq!(camera, Viewport::default());
    }

    #[test]
    fn every_reachable_position_stays_clamped() {
        let config = GameConfig::default();
        let (max_x, max_y) = Viewport::max_offset(&config);
        let mut camera = Viewport::default();
        for x in 0..80 {
            for y in 0..45 {
                camera.recenter(world(x, y), &config);
                assert!((0..=max_x).contains(&camera.x));
                assert!((0..=max_y).contains(&camera.y));
            }
        }
    }
}
