//! Zone identity and the map/viewport bounds the camera clamps against.

use serde::{Deserialize, Serialize};

use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// The playable zones of the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneId {
    Cpu,
    Gpu,
    Ram,
    Storage,
    Hub,
    Bios,
}

impl ZoneId {
    pub fn parse(name: &str) -> Option<ZoneId> {
        match name {
            "cpu" => Some(ZoneId::Cpu),
            "gpu" => Some(ZoneId::Gpu),
            "ram" => Some(ZoneId::Ram),
            "storage" => Some(ZoneId::Storage),
            "hub" => Some(ZoneId::Hub),
            "bios" => Some(ZoneId::Bios),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ZoneId::Cpu => "cpu",
            ZoneId::Gpu => "gpu",
            ZoneId::Ram => "ram",
            ZoneId::Storage => "storage",
            ZoneId::Hub => "hub",
            ZoneId::Bios => "bios",
        }
    }
}

/// Map and viewport dimensions in pixels. Supplied by the world loader;
/// only the camera consumes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneBounds {
    pub map_width: i32,
    pub map_height: i32,
    pub viewport_width: i32,
    pub viewport_height: i32,
}

impl ZoneBounds {
    pub const fn new(map_width: i32, map_height: i32) -> ZoneBounds {
        ZoneBounds {
            map_width,
            map_height,
            viewport_width: SCREEN_WIDTH,
            viewport_height: SCREEN_HEIGHT,
        }
    }

    /// Largest legal camera X. Maps narrower than the viewport pin the
    /// camera at zero.
    #[inline]
    pub fn max_camera_x(&self) -> i32 {
        (self.map_width - self.viewport_width).max(0)
    }

    #[inline]
    pub fn max_camera_y(&self) -> i32 {
        (self.map_height - self.viewport_height).max(0)
    }
}

impl Default for ZoneBounds {
    fn default() -> ZoneBounds {
        // Two screens wide, two tall.
        ZoneBounds::new(SCREEN_WIDTH * 2, SCREEN_HEIGHT * 2)
    }
}

/// Per-zone map sizes, pending real zone content.
pub fn zone_bounds(id: ZoneId) -> ZoneBounds {
    match id {
        ZoneId::Cpu => ZoneBounds::new(640, 448),
        ZoneId::Gpu => ZoneBounds::new(960, 448),
        ZoneId::Ram => ZoneBounds::new(640, 672),
        ZoneId::Storage => ZoneBounds::new(1280, 448),
        ZoneId::Hub => ZoneBounds::new(320, 224),
        ZoneId::Bios => ZoneBounds::new(640, 224),
    }
}
