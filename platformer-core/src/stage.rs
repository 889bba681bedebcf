//! The rendering surface the core talks to.
//!
//! The simulation never draws. It pushes the player's visual position and
//! flip, and per-plane scroll offsets, through this trait; the real VDP glue
//! lives outside the core.

/// Independently scrolling background planes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plane {
    /// Parallax backdrop, scrolled at a fraction of camera speed.
    Far,
    /// Playfield plane, scrolled 1:1 with the camera.
    Near,
}

pub trait Stage {
    fn set_sprite_position(&mut self, x: i32, y: i32);
    fn set_sprite_hflip(&mut self, flipped: bool);
    fn set_plane_scroll(&mut self, plane: Plane, h: i32, v: i32);
}

/// Absent renderer: every push is a safe no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullStage;

impl Stage for NullStage {
    fn set_sprite_position(&mut self, _x: i32, _y: i32) {}

    fn set_sprite_hflip(&mut self, _flipped: bool) {}

    fn set_plane_scroll(&mut self, _plane: Plane, _h: i32, _v: i32) {}
}
