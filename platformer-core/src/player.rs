//! The player entity: state machine, guarded action commands, per-frame tick.

use serde::{Deserialize, Serialize};

use crate::collision;
use crate::constants::{
    ATTACK_STAMINA_COST, DASH_STAMINA_COST, PLAYER_DASH_COOLDOWN_FRAMES,
    PLAYER_DASH_DURATION_FRAMES, PLAYER_DASH_SPEED, PLAYER_JUMP_VELOCITY,
    PLAYER_PARRY_WINDOW_FRAMES, PLAYER_SPAWN_X, PLAYER_SPAWN_Y, PLAYER_SPRITE_WIDTH,
    PLAYER_WALK_SPEED, SCREEN_WIDTH,
};
use crate::fixed::{Fix32, Vec2};
use crate::input::PadState;
use crate::physics;
use crate::stage::Stage;
use crate::stats::Stats;

/// Mutually exclusive player states. `Dashing` and `Hurt` are
/// uninterruptible; `Dead` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    Idle,
    Running,
    Jumping,
    Falling,
    Dashing,
    Attacking,
    Parrying,
    Blocking,
    Hurt,
    Dead,
}

/// Why an action command did or did not take effect. Blocked commands leave
/// the player untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied,
    BlockedByState,
    AbilityLocked,
    OnCooldown,
    OutOfStamina,
}

impl ActionOutcome {
    #[inline]
    pub fn applied(self) -> bool {
        self == ActionOutcome::Applied
    }
}

/// Unlockable abilities. All locked on a fresh player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Abilities {
    pub dash: bool,
    pub double_jump: bool,
    pub parry: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub stats: Stats,
    pub on_ground: bool,
    pub facing_right: bool,
    pub abilities: Abilities,
    state: PlayerState,
    dash_ready: bool,
    dash_cooldown: u16,
    dash_timer: u16,
    double_jump_armed: bool,
    parry_window: u16,
}

impl Default for Player {
    fn default() -> Player {
        Player::new()
    }
}

impl Player {
    pub fn new() -> Player {
        Player {
            pos: Vec2::from_ints(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            vel: Vec2::ZERO,
            stats: Stats::new(),
            on_ground: false,
            facing_right: true,
            abilities: Abilities::default(),
            state: PlayerState::Idle,
            dash_ready: false,
            dash_cooldown: 0,
            dash_timer: 0,
            double_jump_armed: false,
            parry_window: PLAYER_PARRY_WINDOW_FRAMES,
        }
    }

    #[inline]
    pub fn state(&self) -> PlayerState {
        self.state
    }

    #[inline]
    pub fn dash_ready(&self) -> bool {
        self.dash_ready
    }

    #[inline]
    pub fn dash_timer(&self) -> u16 {
        self.dash_timer
    }

    #[inline]
    pub fn dash_cooldown(&self) -> u16 {
        self.dash_cooldown
    }

    #[inline]
    pub fn parry_window(&self) -> u16 {
        self.parry_window
    }

    #[inline]
    pub fn double_jump_armed(&self) -> bool {
        self.double_jump_armed
    }

    /// Request a state transition. Returns `false` without touching anything
    /// when the current state rejects it: a running dash, `Hurt`, and the
    /// terminal `Dead` state cannot be interrupted.
    ///
    /// Entering `Idle` zeroes horizontal velocity. That side effect is part
    /// of this contract; every dash end and landing relies on it.
    pub fn set_state(&mut self, next: PlayerState) -> bool {
        if self.state == PlayerState::Dashing && self.dash_timer > 0 {
            return false;
        }
        if self.state == PlayerState::Hurt {
            return false;
        }
        if self.state == PlayerState::Dead {
            return false;
        }

        self.state = next;

        if next == PlayerState::Idle {
            self.vel.x = Fix32::ZERO;
        }

        true
    }

    pub fn move_right(&mut self) -> ActionOutcome {
        if matches!(
            self.state,
            PlayerState::Dashing | PlayerState::Hurt | PlayerState::Dead
        ) {
            return ActionOutcome::BlockedByState;
        }

        self.vel.x = PLAYER_WALK_SPEED;
        self.facing_right = true;

        if self.on_ground {
            self.set_state(PlayerState::Running);
        }

        ActionOutcome::Applied
    }

    pub fn move_left(&mut self) -> ActionOutcome {
        if matches!(
            self.state,
            PlayerState::Dashing | PlayerState::Hurt | PlayerState::Dead
        ) {
            return ActionOutcome::BlockedByState;
        }

        self.vel.x = -PLAYER_WALK_SPEED;
        self.facing_right = false;

        if self.on_ground {
            self.set_state(PlayerState::Running);
        }

        ActionOutcome::Applied
    }

    /// Grounded jump, or the one double jump per airborne phase once the
    /// ability is unlocked. A grounded jump re-arms the double jump.
    pub fn jump(&mut self) -> ActionOutcome {
        if matches!(
            self.state,
            PlayerState::Dashing | PlayerState::Hurt | PlayerState::Dead
        ) {
            return ActionOutcome::BlockedByState;
        }

        if self.on_ground {
            self.vel.y = PLAYER_JUMP_VELOCITY;
            self.set_state(PlayerState::Jumping);
            self.double_jump_armed = self.abilities.double_jump;
            ActionOutcome::Applied
        } else if self.double_jump_armed && self.abilities.double_jump {
            self.vel.y = PLAYER_JUMP_VELOCITY;
            self.double_jump_armed = false;
            ActionOutcome::Applied
        } else if !self.abilities.double_jump {
            ActionOutcome::AbilityLocked
        } else {
            ActionOutcome::BlockedByState
        }
    }

    /// Burst in the facing direction. Costs stamina, starts the dash timer
    /// and cooldown, and zeroes vertical velocity for the duration.
    pub fn dash(&mut self) -> ActionOutcome {
        if matches!(
            self.state,
            PlayerState::Dashing | PlayerState::Hurt | PlayerState::Dead
        ) {
            return ActionOutcome::BlockedByState;
        }
        if !self.abilities.dash {
            return ActionOutcome::AbilityLocked;
        }
        if !self.dash_ready {
            return ActionOutcome::OnCooldown;
        }
        if !self.stats.use_stamina(DASH_STAMINA_COST) {
            return ActionOutcome::OutOfStamina;
        }

        self.set_state(PlayerState::Dashing);
        self.dash_timer = PLAYER_DASH_DURATION_FRAMES;
        self.dash_cooldown = PLAYER_DASH_COOLDOWN_FRAMES;

        self.vel.x = if self.facing_right {
            PLAYER_DASH_SPEED
        } else {
            -PLAYER_DASH_SPEED
        };
        self.vel.y = Fix32::ZERO;

        ActionOutcome::Applied
    }

    /// Open the parry window and plant the feet.
    pub fn parry(&mut self) -> ActionOutcome {
        if !self.abilities.parry {
            return ActionOutcome::AbilityLocked;
        }
        if matches!(
            self.state,
            PlayerState::Dashing | PlayerState::Hurt | PlayerState::Dead
        ) {
            return ActionOutcome::BlockedByState;
        }

        self.set_state(PlayerState::Parrying);
        self.parry_window = PLAYER_PARRY_WINDOW_FRAMES;
        self.vel.x = Fix32::ZERO;

        ActionOutcome::Applied
    }

    pub fn attack(&mut self) -> ActionOutcome {
        if !self.stats.has_stamina(ATTACK_STAMINA_COST) {
            return ActionOutcome::OutOfStamina;
        }
        if matches!(
            self.state,
            PlayerState::Dashing | PlayerState::Parrying | PlayerState::Hurt | PlayerState::Dead
        ) {
            return ActionOutcome::BlockedByState;
        }

        self.stats.use_stamina(ATTACK_STAMINA_COST);
        self.set_state(PlayerState::Attacking);

        ActionOutcome::Applied
    }

    /// Apply damage. A lethal hit zeroes health and forces `Dead`; this is
    /// the one path that overrides the uninterruptible-state rule. Returns
    /// `true` while still alive.
    pub fn take_damage(&mut self, amount: u16) -> bool {
        let alive = self.stats.apply_damage(amount);
        if !alive {
            self.state = PlayerState::Dead;
        }
        alive
    }

    pub fn heal(&mut self, amount: u16) {
        self.stats.heal(amount);
    }

    /// Held-direction input, polled every frame. Opposing directions cancel;
    /// no direction settles a grounded, non-jumping player into `Idle`.
    pub fn handle_input(&mut self, pad: PadState) {
        if pad.left && pad.right {
            if self.on_ground && self.state != PlayerState::Jumping {
                self.set_state(PlayerState::Idle);
            }
            return;
        }

        if pad.right {
            self.move_right();
        } else if pad.left {
            self.move_left();
        } else if self.on_ground && self.state != PlayerState::Jumping {
            self.set_state(PlayerState::Idle);
        }
    }

    /// Edge-triggered actions, fired once per press.
    pub fn dispatch_presses(&mut self, pressed: PadState) {
        if pressed.jump {
            self.jump();
        }
        if pressed.dash {
            self.dash();
        }
        if pressed.parry {
            self.parry();
        }
        if pressed.attack {
            self.attack();
        }
    }

    /// One 60 Hz frame: ground probe, physics (skipped while dashing),
    /// state countdowns, cooldown and stamina bookkeeping, screen clamp,
    /// sprite push.
    pub fn tick(&mut self, stage: &mut impl Stage) {
        self.on_ground = collision::on_ground(self.pos.y);

        if self.state != PlayerState::Dashing {
            if !self.on_ground {
                self.vel.y = physics::apply_gravity(self.vel.y);
            } else {
                // Grounded: never keep falling.
                if self.vel.y > Fix32::ZERO {
                    self.vel.y = Fix32::ZERO;
                }

                if matches!(self.state, PlayerState::Jumping | PlayerState::Falling) {
                    if self.vel.x.to_int() == 0 {
                        self.set_state(PlayerState::Idle);
                    } else {
                        self.set_state(PlayerState::Running);
                    }
                }
            }

            self.vel.x = physics::apply_friction(self.vel.x, self.on_ground);
            self.pos = physics::integrate_velocity(self.pos, self.vel);
        }

        match self.state {
            PlayerState::Dashing => {
                if self.dash_timer > 0 {
                    self.dash_timer -= 1;
                }
                if self.dash_timer == 0 {
                    self.set_state(PlayerState::Idle);
                    self.dash_ready = false;
                }
            }
            PlayerState::Parrying => {
                if self.parry_window > 0 {
                    self.parry_window -= 1;
                } else {
                    self.set_state(PlayerState::Idle);
                }
            }
            PlayerState::Jumping => {
                if self.vel.y > Fix32::ZERO {
                    self.set_state(PlayerState::Falling);
                }
            }
            _ => {}
        }

        if self.dash_cooldown > 0 {
            self.dash_cooldown -= 1;
        }
        if self.dash_cooldown == 0 {
            self.dash_ready = true;
        }

        self.stats.regen_stamina();

        // Keep the sprite on screen; kill momentum at the wall.
        let max_x = Fix32::from_int(SCREEN_WIDTH - PLAYER_SPRITE_WIDTH);
        if self.pos.x < Fix32::ZERO {
            self.pos.x = Fix32::ZERO;
            self.vel.x = Fix32::ZERO;
        }
        if self.pos.x > max_x {
            self.pos.x = max_x;
            self.vel.x = Fix32::ZERO;
        }

        stage.set_sprite_position(self.pos.x.to_int(), self.pos.y.to_int());
        stage.set_sprite_hflip(!self.facing_right);
    }
}
