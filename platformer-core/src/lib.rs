#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod animation;
pub mod camera;
pub mod collision;
pub mod constants;
pub mod error;
pub mod fixed;
pub mod input;
pub mod physics;
pub mod player;
pub mod replay;
pub mod session;
pub mod stage;
pub mod stats;
pub mod zone;

pub use error::RuleCode;
pub use fixed::{Fix32, Vec2};
pub use input::PadState;
pub use player::{ActionOutcome, Player, PlayerState};
pub use replay::{replay, replay_strict, replay_with_checkpoints, Checkpoint, ReplayViolation};
pub use session::Session;
pub use stage::{NullStage, Plane, Stage};
pub use zone::{ZoneBounds, ZoneId};
