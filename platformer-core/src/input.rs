//! Pad input encoding and edge detection.
//!
//! One byte per frame: bit 0 left, bit 1 right, bit 2 jump, bit 3 dash,
//! bit 4 parry, bit 5 attack. Bits 6-7 are reserved and must stay zero in
//! recorded tapes.

use serde::{Deserialize, Serialize};

pub const PAD_LEFT: u8 = 0x01;
pub const PAD_RIGHT: u8 = 0x02;
pub const PAD_JUMP: u8 = 0x04;
pub const PAD_DASH: u8 = 0x08;
pub const PAD_PARRY: u8 = 0x10;
pub const PAD_ATTACK: u8 = 0x20;
pub const PAD_RESERVED_MASK: u8 = 0xC0;

/// Buttons held during one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PadState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub dash: bool,
    pub parry: bool,
    pub attack: bool,
}

#[inline]
pub fn encode_pad_byte(pad: PadState) -> u8 {
    (if pad.left { PAD_LEFT } else { 0 })
        | (if pad.right { PAD_RIGHT } else { 0 })
        | (if pad.jump { PAD_JUMP } else { 0 })
        | (if pad.dash { PAD_DASH } else { 0 })
        | (if pad.parry { PAD_PARRY } else { 0 })
        | (if pad.attack { PAD_ATTACK } else { 0 })
}

#[inline]
pub fn decode_pad_byte(byte: u8) -> PadState {
    PadState {
        left: (byte & PAD_LEFT) != 0,
        right: (byte & PAD_RIGHT) != 0,
        jump: (byte & PAD_JUMP) != 0,
        dash: (byte & PAD_DASH) != 0,
        parry: (byte & PAD_PARRY) != 0,
        attack: (byte & PAD_ATTACK) != 0,
    }
}

/// Buttons that transitioned to pressed this frame: `changed & pressed`.
/// Edge-triggered actions fire on these, never on holds.
#[inline]
pub fn newly_pressed(previous: PadState, current: PadState) -> PadState {
    let prev = encode_pad_byte(previous);
    let cur = encode_pad_byte(current);
    decode_pad_byte((prev ^ cur) & cur)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_byte_roundtrip_for_all_valid_patterns() {
        for byte in 0u8..=0x3F {
            assert_eq!(encode_pad_byte(decode_pad_byte(byte)), byte);
        }
    }

    #[test]
    fn decode_ignores_reserved_bits() {
        assert_eq!(decode_pad_byte(0x80), PadState::default());
        assert!(decode_pad_byte(0xC0 | PAD_JUMP).jump);
    }

    #[test]
    fn press_fires_only_on_the_transition_frame() {
        let released = PadState::default();
        let held = PadState {
            jump: true,
            ..PadState::default()
        };

        assert!(newly_pressed(released, held).jump);
        assert!(!newly_pressed(held, held).jump);
        assert!(!newly_pressed(held, released).jump);
    }

    #[test]
    fn release_edges_never_fire() {
        let all = decode_pad_byte(0x3F);
        let none = PadState::default();
        assert_eq!(newly_pressed(all, none), none);
    }

    #[test]
    fn independent_buttons_edge_independently() {
        let prev = PadState {
            left: true,
            ..PadState::default()
        };
        let cur = PadState {
            left: true,
            dash: true,
            ..PadState::default()
        };
        let pressed = newly_pressed(prev, cur);
        assert!(pressed.dash);
        assert!(!pressed.left);
    }
}
