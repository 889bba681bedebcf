//! Dead-zone follow camera with map clamping and scroll push.
//!
//! The camera owns world-bounds clamping of the player: it clamps the
//! position into the map before reading it, so the scroll target is never
//! computed from an out-of-map position.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CAMERA_BOUNDS_BOTTOM, CAMERA_BOUNDS_RIGHT, CAMERA_BOUNDS_TOP, CAMERA_FAR_VSCROLL_LIMIT,
    CAMERA_PARALLAX_SHIFT, PLAYER_SPRITE_HEIGHT, PLAYER_SPRITE_WIDTH,
};
use crate::fixed::Fix32;
use crate::player::Player;
use crate::stage::{Plane, Stage};
use crate::zone::ZoneBounds;

/// Current scroll position in pixels. Always inside
/// `[0, map − viewport]` on each axis after an update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    pub x: i32,
    pub y: i32,
}

impl Camera {
    pub const fn new() -> Camera {
        Camera { x: 0, y: 0 }
    }

    /// One frame of camera tracking. Reads the player's already-ticked
    /// position, writes scroll values only when the clamped target moved.
    pub fn update(&mut self, player: &mut Player, bounds: &ZoneBounds, stage: &mut impl Stage) {
        self.clamp_player_to_map(player, bounds);

        let map_x = player.pos.x.to_int();
        let map_y = player.pos.y.to_int();
        let screen_x = map_x - self.x;
        let screen_y = map_y - self.y;

        // Horizontal: the low threshold is expressed as resolution minus the
        // right margin. Kept as-is; do not fold the two conventions together.
        let target_x = if screen_x > CAMERA_BOUNDS_RIGHT {
            map_x - CAMERA_BOUNDS_RIGHT
        } else if screen_x < bounds.viewport_width - CAMERA_BOUNDS_RIGHT {
            map_x - (bounds.viewport_width - CAMERA_BOUNDS_RIGHT)
        } else {
            self.x
        };

        // Vertical: absolute top and bottom margins.
        let target_y = if screen_y > CAMERA_BOUNDS_BOTTOM {
            map_y - CAMERA_BOUNDS_BOTTOM
        } else if screen_y < CAMERA_BOUNDS_TOP {
            map_y - CAMERA_BOUNDS_TOP
        } else {
            self.y
        };

        let target_x = target_x.clamp(0, bounds.max_camera_x());
        let target_y = target_y.clamp(0, bounds.max_camera_y());

        if target_x != self.x || target_y != self.y {
            // Instant snap follow.
            self.x = target_x;
            self.y = target_y;

            let far_h = (0 - self.x) >> CAMERA_PARALLAX_SHIFT;
            let far_v = if self.y > CAMERA_FAR_VSCROLL_LIMIT {
                0
            } else {
                self.y
            };
            stage.set_plane_scroll(Plane::Far, far_h, far_v);
            stage.set_plane_scroll(Plane::Near, -self.x, self.y);
        }
    }

    fn clamp_player_to_map(&self, player: &mut Player, bounds: &ZoneBounds) {
        let max_x = Fix32::from_int(bounds.map_width - PLAYER_SPRITE_WIDTH);
        let max_y = Fix32::from_int(bounds.map_height - PLAYER_SPRITE_HEIGHT);

        if player.pos.x < Fix32::ZERO {
            player.pos.x = Fix32::ZERO;
        } else if player.pos.x > max_x {
            player.pos.x = max_x;
        }

        if player.pos.y < Fix32::ZERO {
            player.pos.y = Fix32::ZERO;
        } else if player.pos.y > max_y {
            player.pos.y = max_y;
        }
    }
}
