//! Forward-Euler integration
//!
//! The integration order is part of the tuned behavior and is preserved
//! exactly: a body's position moves with the velocity it entered the tick
//! with, and only then is the velocity updated from this tick's acceleration
//! input and clamped component-wise. Headings are in turns, so directional
//! motion goes through [`cos_turns`]/[`sin_turns`].

use glam::Vec2;

use super::store::{Player, Pool};
use crate::{clip_angle, clip_velocity, cos_turns, sin_turns};

/// Tuning shared by thrust-style player integration.
#[derive(Debug, Clone, Copy)]
pub struct PlayerKinematics {
    /// Acceleration applied while thrust is held.
    pub acceleration: f32,
    /// Turn rate in turns per second.
    pub rotation_speed: f32,
    /// Component-wise speed limit.
    pub max_speed: f32,
}

/// Advance a free-flying player one tick.
///
/// `turn` and `thrust` are the tick's input levels (-1/0/+1 style). The
/// heading rotates and wraps first so thrust acts along the new heading.
pub fn integrate_player(p: &mut Player, k: &PlayerKinematics, turn: f32, thrust: f32, dt: f32) {
    p.angle = clip_angle(p.angle + turn * k.rotation_speed * dt);

    p.pos += p.vel * dt;
    p.vel.x += cos_turns(p.angle) * thrust * k.acceleration * dt;
    p.vel.y += sin_turns(p.angle) * thrust * k.acceleration * dt;
    p.vel.x = clip_velocity(p.vel.x, k.max_speed);
    p.vel.y = clip_velocity(p.vel.y, k.max_speed);
}

/// Move every active slot along its heading at a fixed speed.
pub fn drift_pool(pool: &mut Pool, speed: f32, dt: f32) {
    for i in 0..pool.capacity() {
        if !pool.active[i] {
            continue;
        }
        let dir = Vec2::new(cos_turns(pool.angle[i]), sin_turns(pool.angle[i]));
        pool.pos[i] += dir * speed * dt;
    }
}

/// Age active slots and drift the live ones along their headings.
///
/// A slot whose lifetime has run out is deactivated without moving: the age
/// check comes before the move.
pub fn age_and_drift_pool(pool: &mut Pool, speed: f32, dt: f32) {
    for i in 0..pool.capacity() {
        if !pool.active[i] {
            continue;
        }
        if pool.age[i] > 0.0 {
            pool.age[i] -= dt;
            let dir = Vec2::new(cos_turns(pool.angle[i]), sin_turns(pool.angle[i]));
            pool.pos[i] += dir * speed * dt;
        } else {
            pool.active[i] = false;
        }
    }
}
