//! Field-edge policies
//!
//! Two per-axis policies cover the whole family: toroidal wraparound
//! (Asteroids) and reflecting walls (Pong). Both act on each coordinate
//! axis independently. The wraparound shares its clip with angle wrapping
//! via [`cycle_clip`].

use glam::Vec2;

use super::store::Pool;
use crate::{FieldUnits, clip, cycle_clip};

/// Wrap a position onto the torus `[-half, half]²`.
pub fn wrap_point(pos: &mut Vec2, half: FieldUnits) {
    pos.x = cycle_clip(pos.x, half, -half);
    pos.y = cycle_clip(pos.y, half, -half);
}

/// Wrap every active slot of a pool.
pub fn wrap_pool(pool: &mut Pool, half: FieldUnits) {
    for i in 0..pool.capacity() {
        if pool.active[i] {
            wrap_point(&mut pool.pos[i], half);
        }
    }
}

/// Reflecting wall on one axis: pin the coordinate to the violated bound and
/// bounce the matching velocity component.
pub fn reflect_axis(pos: &mut f32, vel: &mut f32, upper: FieldUnits, lower: FieldUnits) {
    if *pos > upper {
        *pos = upper;
        *vel = -*vel;
    } else if *pos < lower {
        *pos = lower;
        *vel = -*vel;
    }
}

/// Plain positional clamp on one axis, for entities whose velocity should
/// survive the wall contact (Pong paddles push against the wall, they do not
/// bounce off it).
pub fn clamp_axis(pos: &mut f32, upper: FieldUnits, lower: FieldUnits) {
    *pos = clip(*pos, upper, lower);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn wrapped_positions_stay_in_field(
            x in -3.0f32..3.0, y in -3.0f32..3.0,
            half in 0.1f32..1.0,
        ) {
            let mut pos = Vec2::new(x, y);
            wrap_point(&mut pos, half);
            prop_assert!(pos.x >= -half && pos.x <= half);
            prop_assert!(pos.y >= -half && pos.y <= half);
        }
    }

    #[test]
    fn wrap_keeps_overshoot() {
        let mut pos = Vec2::new(0.6, -0.55);
        wrap_point(&mut pos, 0.5);
        assert!((pos.x - (-0.4)).abs() < 1e-6);
        assert!((pos.y - 0.45).abs() < 1e-6);
    }

    #[test]
    fn wrap_pool_skips_inactive_slots() {
        let mut pool = Pool::new(2);
        pool.pos[0] = Vec2::new(2.0, 2.0); // stale, inactive
        pool.active[1] = true;
        pool.pos[1] = Vec2::new(0.7, 0.0);
        wrap_pool(&mut pool, 0.5);
        assert_eq!(pool.pos[0], Vec2::new(2.0, 2.0));
        assert!((pool.pos[1].x - (-0.3)).abs() < 1e-6);
    }

    #[test]
    fn reflect_pins_and_bounces() {
        let mut y = 0.25;
        let mut vy = 0.1;
        reflect_axis(&mut y, &mut vy, 0.21, -0.21);
        assert_eq!(y, 0.21);
        assert_eq!(vy, -0.1);

        let mut y = -0.3;
        let mut vy = -0.1;
        reflect_axis(&mut y, &mut vy, 0.21, -0.21);
        assert_eq!(y, -0.21);
        assert_eq!(vy, 0.1);
    }

    #[test]
    fn reflect_inside_bounds_is_a_no_op() {
        let mut y = 0.1;
        let mut vy = 0.2;
        reflect_axis(&mut y, &mut vy, 0.21, -0.21);
        assert_eq!(y, 0.1);
        assert_eq!(vy, 0.2);
    }

    #[test]
    fn clamp_leaves_velocity_alone() {
        let mut y = 0.5;
        clamp_axis(&mut y, 0.21, -0.21);
        assert_eq!(y, 0.21);
    }
}
