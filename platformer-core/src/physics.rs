//! Per-frame physics steps: gravity, friction, Euler integration, clamping.
//!
//! Every function is value-in/value-out so callers compose them explicitly
//! and each step is testable in isolation.

use crate::constants::{
    AIR_FRICTION_PCT, GRAVITY, GROUND_FRICTION_PCT, MAX_FALL_SPEED, VELOCITY_REST_EPSILON,
};
use crate::fixed::{Fix32, Vec2};

/// Add one frame of gravity, clamped to terminal fall speed.
#[inline]
pub fn apply_gravity(vel_y: Fix32) -> Fix32 {
    let accelerated = vel_y + GRAVITY;
    if accelerated > MAX_FALL_SPEED {
        MAX_FALL_SPEED
    } else {
        accelerated
    }
}

/// Decay horizontal velocity by the ground or air friction rate, snapping to
/// exactly zero once it falls inside the rest epsilon.
pub fn apply_friction(vel_x: Fix32, on_ground: bool) -> Fix32 {
    let pct = if on_ground {
        GROUND_FRICTION_PCT
    } else {
        AIR_FRICTION_PCT
    };
    let decayed = vel_x.scale_by_percent(pct);

    if decayed < VELOCITY_REST_EPSILON && decayed > -VELOCITY_REST_EPSILON {
        Fix32::ZERO
    } else {
        decayed
    }
}

/// Explicit Euler step: one frame of velocity onto position.
#[inline]
pub fn integrate_velocity(pos: Vec2, vel: Vec2) -> Vec2 {
    Vec2::new(pos.x + vel.x, pos.y + vel.y)
}

/// Symmetric clamp of both axes to `[-max, max]`. Defensive limit for
/// velocities set from outside the integrator.
#[inline]
pub fn clamp_velocity(vel: Vec2, max_x: Fix32, max_y: Fix32) -> Vec2 {
    Vec2::new(vel.x.clamp(-max_x, max_x), vel.y.clamp(-max_y, max_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_accumulates_half_pixel_per_frame() {
        let mut vel_y = Fix32::ZERO;
        for _ in 0..4 {
            vel_y = apply_gravity(vel_y);
        }
        assert_eq!(vel_y, Fix32::from_int(2));
    }

    #[test]
    fn gravity_clamps_at_terminal_speed() {
        let mut vel_y = Fix32::ZERO;
        for _ in 0..100 {
            vel_y = apply_gravity(vel_y);
        }
        assert_eq!(vel_y, MAX_FALL_SPEED);
    }

    #[test]
    fn ground_friction_is_stronger_than_air() {
        let vel = Fix32::from_int(2);
        let grounded = apply_friction(vel, true);
        let airborne = apply_friction(vel, false);
        assert!(grounded < airborne);
        assert_eq!(grounded, vel.scale_by_percent(85));
        assert_eq!(airborne, vel.scale_by_percent(95));
    }

    #[test]
    fn friction_snaps_small_velocities_to_rest() {
        let creeping = Fix32::from_fraction(1, 12);
        assert_eq!(apply_friction(creeping, true), Fix32::ZERO);
        assert_eq!(apply_friction(-creeping, true), Fix32::ZERO);
        // Just above the epsilon keeps decaying instead of snapping.
        let moving = Fix32::from_fraction(1, 4);
        assert!(apply_friction(moving, true) > Fix32::ZERO);
    }

    #[test]
    fn friction_eventually_stops_a_walk() {
        let mut vel = Fix32::from_int(2);
        let mut frames = 0;
        while !vel.is_zero() {
            vel = apply_friction(vel, true);
            frames += 1;
            assert!(frames < 120, "friction never reached rest");
        }
    }

    #[test]
    fn integration_adds_velocity_once() {
        let pos = Vec2::from_ints(160, 100);
        let vel = Vec2::new(Fix32::from_int(2), Fix32::from_fraction(1, 2));
        let moved = integrate_velocity(pos, vel);
        assert_eq!(moved.x, Fix32::from_int(162));
        assert_eq!(moved.y.raw(), (100 << 16) + (1 << 15));
    }

    #[test]
    fn velocity_clamp_is_symmetric() {
        let vel = Vec2::from_ints(12, -20);
        let clamped = clamp_velocity(vel, Fix32::from_int(8), Fix32::from_int(8));
        assert_eq!(clamped, Vec2::from_ints(8, -8));
    }
}
