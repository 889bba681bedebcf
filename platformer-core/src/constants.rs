//! Simulation tuning constants.
//!
//! All timers are frame counts at the fixed 60 Hz tick; all speeds are
//! Q16.16 pixels per frame.

use crate::fixed::Fix32;

// Screen dimensions
pub const SCREEN_WIDTH: i32 = 320;
pub const SCREEN_HEIGHT: i32 = 224;

// Player sprite footprint in pixels
pub const PLAYER_SPRITE_WIDTH: i32 = 16;
pub const PLAYER_SPRITE_HEIGHT: i32 = 16;

// Physics (Q16.16)
pub const GRAVITY: Fix32 = Fix32::from_fraction(1, 2);
pub const MAX_FALL_SPEED: Fix32 = Fix32::from_int(8);
pub const GROUND_FRICTION_PCT: i32 = 85;
pub const AIR_FRICTION_PCT: i32 = 95;
/// Below this magnitude horizontal velocity snaps to zero, otherwise the
/// percent friction decays forever without reaching it.
pub const VELOCITY_REST_EPSILON: Fix32 = Fix32::from_fraction(1, 10);

// Player movement (Q16.16)
pub const PLAYER_WALK_SPEED: Fix32 = Fix32::from_int(2);
pub const PLAYER_JUMP_VELOCITY: Fix32 = Fix32::from_int(-8);
pub const PLAYER_DASH_SPEED: Fix32 = Fix32::from_int(8);

// Player timers (frames)
pub const PLAYER_DASH_DURATION_FRAMES: u16 = 8;
pub const PLAYER_DASH_COOLDOWN_FRAMES: u16 = 30; // 0.5s at 60fps
pub const PLAYER_PARRY_WINDOW_FRAMES: u16 = 20;

// Stats
pub const PLAYER_MAX_HEALTH: u16 = 100;
pub const PLAYER_MAX_STAMINA: u16 = 100;
pub const DASH_STAMINA_COST: u16 = 20;
pub const ATTACK_STAMINA_COST: u16 = 10;
pub const STAMINA_REGEN_PER_FRAME: u16 = 1; // 60 per second

// Spawn point (pixels)
pub const PLAYER_SPAWN_X: i32 = 160;
pub const PLAYER_SPAWN_Y: i32 = 100;

// Flat ground line until tile collision exists (pixels)
pub const GROUND_Y: i32 = 180;

// Camera dead-zone margins in screen coordinates (pixels)
pub const CAMERA_BOUNDS_RIGHT: i32 = 152;
pub const CAMERA_BOUNDS_TOP: i32 = 115;
pub const CAMERA_BOUNDS_BOTTOM: i32 = 115;

// Far-plane parallax: horizontal scroll is divided by 2^3
pub const CAMERA_PARALLAX_SHIFT: u32 = 3;
/// The far plane's vertical strip is 32 pixels tall; anything past it wraps
/// back to zero.
pub const CAMERA_FAR_VSCROLL_LIMIT: i32 = 32;

pub const TARGET_FPS: u32 = 60;
