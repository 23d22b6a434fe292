//! Scope Arcade - headless simulation core for vector-display arcade games
//!
//! The games in this family (Asteroids, Pong, Flappy Bird, a small
//! platformer) were originally drawn by steering an analog X/Y beam, so the
//! coordinate conventions are unusual and deliberately preserved:
//!
//! - Positions live in *field units*: a square domain spanning
//!   `[-field_size, +field_size]` on each axis (originally volts on the DACs).
//! - Angles are stored in *turns*, fractions of a full revolution, wrapped
//!   into `[-0.5, 0.5]`. All trigonometry multiplies by `2π` first.
//!
//! Core modules:
//! - `sim`: deterministic fixed-timestep simulation (pools, physics,
//!   collisions, boundaries, game loop)
//! - `games`: per-game rule variants plugged into the shared loop
//! - `config`: tuning constants for each game variant
//! - `input`: abstract polled input boundary
//! - `render`: abstract draw-call boundary

pub mod config;
pub mod games;
pub mod input;
pub mod render;
pub mod sim;

pub use render::Renderer;
pub use sim::{GameRules, Outcome, Simulation};

use std::f32::consts::TAU;

/// Angle in turns: 1.0 is a full revolution. Kept in `[-0.5, 0.5]`.
pub type Turns = f32;

/// Position/length in field units (originally volts driving the beam).
pub type FieldUnits = f32;

/// Cosine of an angle given in turns.
#[inline]
pub fn cos_turns(a: Turns) -> f32 {
    (TAU * a).cos()
}

/// Sine of an angle given in turns.
#[inline]
pub fn sin_turns(a: Turns) -> f32 {
    (TAU * a).sin()
}

/// Wraparound clip: values past one bound re-enter from the other, keeping
/// the overshoot.
///
/// Used both for toroidal position wraparound and for angle wrapping, so
/// `cycle_clip(0.51, 0.5, -0.5) == -0.49`. Values exactly at a bound are
/// left alone.
#[inline]
pub fn cycle_clip(mut x: f32, upper: f32, lower: f32) -> f32 {
    let span = upper - lower;
    while x > upper {
        x -= span;
    }
    while x < lower {
        x += span;
    }
    x
}

/// Saturating clip to `[lower, upper]`.
#[inline]
pub fn clip(x: f32, upper: f32, lower: f32) -> f32 {
    if x > upper {
        upper
    } else if x < lower {
        lower
    } else {
        x
    }
}

/// Wrap an angle into `[-0.5, 0.5]` turns.
#[inline]
pub fn clip_angle(a: Turns) -> Turns {
    cycle_clip(a, 0.5, -0.5)
}

/// Clamp a velocity component to `[-max_speed, max_speed]`.
#[inline]
pub fn clip_velocity(v: f32, max_speed: f32) -> f32 {
    clip(v, max_speed, -max_speed)
}
