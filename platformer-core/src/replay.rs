//! Input tape replay.
//!
//! A tape is one pad byte per frame (see [`crate::input`]). Replaying the
//! same tape from the same zone always lands on the same [`Checkpoint`];
//! that is the determinism contract everything downstream leans on.

use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RuleCode;
use crate::input::decode_pad_byte;
use crate::player::PlayerState;
use crate::session::Session;
use crate::stage::NullStage;
use crate::zone::ZoneBounds;

/// Flat snapshot of everything observable about a frame. Positions and
/// velocities are raw Q16.16 bits so comparison is exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub frame_count: u32,
    pub state: PlayerState,
    pub pos_x: i32,
    pub pos_y: i32,
    pub vel_x: i32,
    pub vel_y: i32,
    pub health: u16,
    pub stamina: u16,
    pub on_ground: bool,
    pub facing_right: bool,
    pub dash_timer: u16,
    pub dash_cooldown: u16,
    pub dash_ready: bool,
    pub parry_window: u16,
    pub double_jump_armed: bool,
    pub camera_x: i32,
    pub camera_y: i32,
}

/// An invariant broke during a strict replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayViolation {
    pub frame_count: u32,
    pub rule: RuleCode,
}

impl fmt::Display for ReplayViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule {} violated at frame {}", self.rule, self.frame_count)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReplayViolation {}

/// Run a tape to the end and return the final checkpoint.
pub fn replay(inputs: &[u8], zone: ZoneBounds) -> Checkpoint {
    let mut session = Session::new(zone);
    let mut stage = NullStage;
    for &byte in inputs {
        session.tick(decode_pad_byte(byte), &mut stage);
    }
    session.checkpoint()
}

/// Like [`replay`], but validates every frame and stops at the first
/// broken invariant.
pub fn replay_strict(inputs: &[u8], zone: ZoneBounds) -> Result<Checkpoint, ReplayViolation> {
    let mut session = Session::new(zone);
    let mut stage = NullStage;
    for &byte in inputs {
        session.tick(decode_pad_byte(byte), &mut stage);
        if let Err(rule) = session.validate_invariants() {
            return Err(ReplayViolation {
                frame_count: session.frame_count(),
                rule,
            });
        }
    }
    Ok(session.checkpoint())
}

/// Replay with periodic sampling. The initial state and the final state are
/// always included; a stride of zero is treated as one.
pub fn replay_with_checkpoints(
    inputs: &[u8],
    zone: ZoneBounds,
    sample_every: u32,
) -> Vec<Checkpoint> {
    let stride = sample_every.max(1);
    let mut session = Session::new(zone);
    let mut stage = NullStage;

    let mut checkpoints = Vec::new();
    checkpoints.push(session.checkpoint());

    for &byte in inputs {
        session.tick(decode_pad_byte(byte), &mut stage);
        if session.frame_count() % stride == 0 {
            checkpoints.push(session.checkpoint());
        }
    }

    if session.frame_count() % stride != 0 {
        checkpoints.push(session.checkpoint());
    }

    checkpoints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{PAD_JUMP, PAD_LEFT, PAD_RIGHT};

    fn walk_and_hop_tape() -> Vec<u8> {
        let mut tape = Vec::new();
        tape.extend(core::iter::repeat(PAD_RIGHT).take(30));
        tape.extend(core::iter::repeat(PAD_RIGHT | PAD_JUMP).take(10));
        tape.extend(core::iter::repeat(0).take(40));
        tape.extend(core::iter::repeat(PAD_LEFT).take(20));
        tape
    }

    #[test]
    fn identical_tapes_land_on_identical_checkpoints() {
        let tape = walk_and_hop_tape();
        let first = replay(&tape, ZoneBounds::default());
        let second = replay(&tape, ZoneBounds::default());
        assert_eq!(first, second);
        assert_eq!(first.frame_count, tape.len() as u32);
    }

    #[test]
    fn strict_replay_accepts_a_clean_tape() {
        let tape = walk_and_hop_tape();
        let strict = replay_strict(&tape, ZoneBounds::default());
        assert_eq!(strict, Ok(replay(&tape, ZoneBounds::default())));
    }

    #[test]
    fn empty_tape_yields_the_initial_checkpoint() {
        let checkpoint = replay(&[], ZoneBounds::default());
        assert_eq!(checkpoint.frame_count, 0);
        assert_eq!(checkpoint.state, PlayerState::Idle);
        assert_eq!(checkpoint.health, 100);
    }

    #[test]
    fn checkpoint_sampling_brackets_the_tape() {
        let tape = walk_and_hop_tape(); // 100 frames
        let checkpoints = replay_with_checkpoints(&tape, ZoneBounds::default(), 30);

        assert_eq!(checkpoints[0].frame_count, 0);
        let last = checkpoints[checkpoints.len() - 1];
        assert_eq!(last.frame_count, tape.len() as u32);
        // 0, 30, 60, 90, then the tail frame.
        assert_eq!(checkpoints.len(), 5);
        assert_eq!(last, replay(&tape, ZoneBounds::default()));
    }

    #[test]
    fn zero_stride_samples_every_frame() {
        let tape = [0u8; 7];
        let checkpoints = replay_with_checkpoints(&tape, ZoneBounds::default(), 0);
        assert_eq!(checkpoints.len(), 8);
        for (index, checkpoint) in checkpoints.iter().enumerate() {
            assert_eq!(checkpoint.frame_count, index as u32);
        }
    }

    #[test]
    fn sampled_checkpoints_match_a_fresh_replay_prefix() {
        let tape = walk_and_hop_tape();
        let checkpoints = replay_with_checkpoints(&tape, ZoneBounds::default(), 25);
        for checkpoint in &checkpoints {
            let prefix = &tape[..checkpoint.frame_count as usize];
            assert_eq!(replay(prefix, ZoneBounds::default()), *checkpoint);
        }
    }
}
