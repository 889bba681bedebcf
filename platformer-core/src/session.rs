//! One running simulation: player, camera, zone bounds, frame counter.
//!
//! `tick` is the only way time advances. Callers feed one [`PadState`] per
//! frame; edge detection against the previous frame's pad happens here, so
//! the pad a caller hands in is always the raw held state.

use crate::camera::Camera;
use crate::constants::{
    PLAYER_DASH_COOLDOWN_FRAMES, PLAYER_DASH_DURATION_FRAMES, PLAYER_PARRY_WINDOW_FRAMES,
    PLAYER_SPRITE_WIDTH, SCREEN_WIDTH,
};
use crate::error::RuleCode;
use crate::input::{self, PadState};
use crate::player::{Player, PlayerState};
use crate::replay::Checkpoint;
use crate::stage::Stage;
use crate::zone::ZoneBounds;

#[derive(Clone, Copy, Debug)]
pub struct Session {
    pub player: Player,
    pub camera: Camera,
    pub zone: ZoneBounds,
    previous_pad: PadState,
    frame_count: u32,
}

impl Session {
    pub fn new(zone: ZoneBounds) -> Session {
        Session {
            player: Player::new(),
            camera: Camera::new(),
            zone,
            previous_pad: PadState::default(),
            frame_count: 0,
        }
    }

    #[inline]
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Advance one frame. Edge-triggered actions fire first, then held
    /// movement, then the player tick, then the camera.
    pub fn tick(&mut self, pad: PadState, stage: &mut impl Stage) {
        let pressed = input::newly_pressed(self.previous_pad, pad);
        self.player.dispatch_presses(pressed);
        self.player.handle_input(pad);
        self.player.tick(stage);
        self.camera.update(&mut self.player, &self.zone, stage);

        self.previous_pad = pad;
        self.frame_count += 1;
    }

    /// Snapshot the observable state for replay comparison.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            frame_count: self.frame_count,
            state: self.player.state(),
            pos_x: self.player.pos.x.raw(),
            pos_y: self.player.pos.y.raw(),
            vel_x: self.player.vel.x.raw(),
            vel_y: self.player.vel.y.raw(),
            health: self.player.stats.health,
            stamina: self.player.stats.stamina,
            on_ground: self.player.on_ground,
            facing_right: self.player.facing_right,
            dash_timer: self.player.dash_timer(),
            dash_cooldown: self.player.dash_cooldown(),
            dash_ready: self.player.dash_ready(),
            parry_window: self.player.parry_window(),
            double_jump_armed: self.player.double_jump_armed(),
            camera_x: self.camera.x,
            camera_y: self.camera.y,
        }
    }

    /// Check every frame-invariant. Strict replays call this after each
    /// tick and abort on the first violated rule.
    pub fn validate_invariants(&self) -> Result<(), RuleCode> {
        let stats = &self.player.stats;
        if stats.health > stats.max_health {
            return Err(RuleCode::HealthRange);
        }
        if stats.stamina > stats.max_stamina {
            return Err(RuleCode::StaminaRange);
        }

        if self.player.dash_timer() > PLAYER_DASH_DURATION_FRAMES {
            return Err(RuleCode::DashTimerRange);
        }
        if self.player.dash_cooldown() > PLAYER_DASH_COOLDOWN_FRAMES {
            return Err(RuleCode::DashCooldownRange);
        }
        // A lethal hit mid-dash leaves the timer behind, so Dead is exempt.
        if self.player.dash_timer() > 0
            && !matches!(self.player.state(), PlayerState::Dashing | PlayerState::Dead)
        {
            return Err(RuleCode::DashTimerOutsideDash);
        }
        if self.player.parry_window() > PLAYER_PARRY_WINDOW_FRAMES {
            return Err(RuleCode::ParryWindowRange);
        }

        let px = self.player.pos.x.to_int();
        if px < 0 || px > SCREEN_WIDTH - PLAYER_SPRITE_WIDTH {
            return Err(RuleCode::PlayerScreenBounds);
        }

        if self.camera.x < 0
            || self.camera.x > self.zone.max_camera_x()
            || self.camera.y < 0
            || self.camera.y > self.zone.max_camera_y()
        {
            return Err(RuleCode::CameraBounds);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GROUND_Y;
    use crate::fixed::Fix32;
    use crate::stage::NullStage;

    fn grounded_session() -> Session {
        let mut session = Session::new(ZoneBounds::default());
        session.player.pos.y = Fix32::from_int(GROUND_Y);
        session.tick(PadState::default(), &mut NullStage);
        assert!(session.player.on_ground);
        session
    }

    #[test]
    fn frame_count_advances_once_per_tick() {
        let mut session = Session::new(ZoneBounds::default());
        let mut stage = NullStage;
        for expected in 1..=5 {
            session.tick(PadState::default(), &mut stage);
            assert_eq!(session.frame_count(), expected);
        }
    }

    #[test]
    fn held_jump_fires_only_on_the_first_frame() {
        let mut session = grounded_session();
        let held = PadState {
            jump: true,
            ..PadState::default()
        };
        let mut stage = NullStage;

        session.tick(held, &mut stage);
        let y_velocity_after_press = session.player.vel.y;
        assert!(y_velocity_after_press < Fix32::ZERO);

        // Still held on later frames: the edge is gone, no second impulse
        // even after the player lands again.
        for _ in 0..60 {
            session.tick(held, &mut stage);
        }
        assert!(session.player.on_ground);
        assert_eq!(session.player.vel.y, Fix32::ZERO);
    }

    #[test]
    fn held_direction_moves_every_frame() {
        let mut session = grounded_session();
        let held = PadState {
            right: true,
            ..PadState::default()
        };
        let mut stage = NullStage;
        let start_x = session.player.pos.x;

        for _ in 0..10 {
            session.tick(held, &mut stage);
        }
        assert!(session.player.pos.x > start_x);
        assert_eq!(session.player.state(), PlayerState::Running);
    }

    #[test]
    fn fresh_session_passes_validation() {
        let mut session = Session::new(ZoneBounds::default());
        assert_eq!(session.validate_invariants(), Ok(()));
        let mut stage = NullStage;
        for _ in 0..120 {
            session.tick(PadState::default(), &mut stage);
            assert_eq!(session.validate_invariants(), Ok(()));
        }
    }

    #[test]
    fn validation_flags_an_out_of_range_counter() {
        let mut session = grounded_session();
        session.player.abilities.dash = true;
        let dash = PadState {
            dash: true,
            ..PadState::default()
        };
        session.tick(dash, &mut NullStage);
        assert_eq!(session.validate_invariants(), Ok(()));

        session.player.stats.stamina = session.player.stats.max_stamina + 1;
        assert_eq!(session.validate_invariants(), Err(RuleCode::StaminaRange));
    }

    #[test]
    fn checkpoint_mirrors_the_session() {
        let mut session = grounded_session();
        let held = PadState {
            left: true,
            ..PadState::default()
        };
        session.tick(held, &mut NullStage);

        let checkpoint = session.checkpoint();
        assert_eq!(checkpoint.frame_count, session.frame_count());
        assert_eq!(checkpoint.pos_x, session.player.pos.x.raw());
        assert_eq!(checkpoint.state, session.player.state());
        assert!(!checkpoint.facing_right);
        assert_eq!(checkpoint.camera_x, session.camera.x);
    }
}
