//! Pairwise proximity tests and hit responses
//!
//! Everything here is circle-circle: entity counts are small (at most ~10
//! per class), so the per-tick O(N*M) sweep in entity-index order is fine
//! and keeps resolution deterministic.

use glam::Vec2;

use super::store::Pool;

/// True when two circles with the given combined radius overlap.
///
/// Compares squared distances, so two exactly coincident centers count as a
/// hit instead of reaching a zero-length normalization anywhere downstream.
#[inline]
pub fn circle_hit(a: Vec2, b: Vec2, combined_radius: f32) -> bool {
    let d2 = a.distance_squared(b);
    if d2 == 0.0 {
        return true;
    }
    d2 < combined_radius * combined_radius
}

/// Sweep projectiles against obstacles, deactivating both members of every
/// hit pair. Returns the number of hits.
///
/// Pairs resolve in ascending index order. Once a projectile hits, its inner
/// sweep stops: a projectile takes out at most one obstacle per tick, and a
/// deactivated slot can never match a second time.
pub fn resolve_projectile_hits(
    projectiles: &mut Pool,
    obstacles: &mut Pool,
    combined_radius: f32,
) -> u32 {
    let mut hits = 0;
    for i in 0..projectiles.capacity() {
        if !projectiles.active[i] {
            continue;
        }
        for j in 0..obstacles.capacity() {
            if !obstacles.active[j] {
                continue;
            }
            if circle_hit(projectiles.pos[i], obstacles.pos[j], combined_radius) {
                projectiles.deactivate(i);
                projectiles.age[i] = -1.0;
                obstacles.deactivate(j);
                hits += 1;
                break;
            }
        }
    }
    hits
}

/// Pong-style paddle bounce with capped English.
///
/// The horizontal component always sign-flips. The vertical response adds
/// the paddle's own vertical speed, but the reflected magnitude is capped at
/// `cap` when the combined approach speed exceeds it - a spin-limited bounce.
pub fn paddle_bounce(ball_vel: &mut Vec2, paddle_vy: f32, cap: f32) {
    let combined = ball_vel.y + paddle_vy;
    ball_vel.y = if combined < cap { -combined } else { -cap };
    ball_vel.x = -ball_vel.x;
}
