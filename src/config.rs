//! Tuning constants for each game variant
//!
//! Every gameplay number lives here, so the engine itself carries no
//! hard-coded literals. Defaults carry the tuned values each game shipped
//! with; a JSON tuning file can override them at startup.

use serde::{Deserialize, Serialize};

use crate::FieldUnits;

/// Asteroids: free-flying ship, pooled rays, drifting rocks, toroidal field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidsConfig {
    /// Half-width of the square field.
    pub field_size: FieldUnits,
    /// Ray pool capacity.
    pub n_rays: usize,
    /// Ray speed along its heading.
    pub v_ray: f32,
    /// Ray time-to-live in seconds.
    pub max_ray_age: f32,
    /// Minimum simulated time between ray spawns.
    pub ray_spawn_delay: f32,
    /// Number of asteroids placed at startup.
    pub n_asteroids: usize,
    /// Asteroid radius (also the ray/asteroid hit threshold).
    pub r_asteroid: FieldUnits,
    /// Asteroid drift speed.
    pub v_asteroid: f32,
    /// Thrust acceleration while the forward button is held.
    pub ship_acceleration: f32,
    /// Component-wise speed limit for the ship.
    pub max_speed: f32,
    /// Ship turn rate in turns per second.
    pub ship_rotation_speed: f32,
    /// Simulated seconds per tick.
    pub time_step_size: f32,
}

impl Default for AsteroidsConfig {
    fn default() -> Self {
        let field_size = 0.5;
        Self {
            field_size,
            n_rays: 10,
            v_ray: 1.5,
            max_ray_age: 2.0,
            ray_spawn_delay: 0.1,
            n_asteroids: 10,
            r_asteroid: field_size * 0.075,
            v_asteroid: 0.2,
            ship_acceleration: 1.0,
            max_speed: 1.0,
            ship_rotation_speed: 2.0,
            time_step_size: 0.01,
        }
    }
}

/// Pong: two vertically accelerating paddles and a bouncing ball.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PongConfig {
    pub field_size: FieldUnits,
    /// Vertical acceleration while a paddle button is held.
    pub paddle_acceleration: f32,
    /// Component-wise paddle speed limit.
    pub max_speed: f32,
    /// Ball/paddle hit threshold.
    pub ball_radius: FieldUnits,
    /// Initial ball velocity components.
    pub ball_speed: f32,
    /// Cap on the reflected vertical speed when paddle motion adds English.
    pub bounce_cap: f32,
    /// Walls and goal lines sit at `play_area * field_size`.
    pub play_area: f32,
    /// Paddles sit at `±paddle_inset * field_size` on the x axis.
    pub paddle_inset: f32,
    pub time_step_size: f32,
}

impl Default for PongConfig {
    fn default() -> Self {
        let field_size = 0.3;
        Self {
            field_size,
            paddle_acceleration: 1.0,
            max_speed: 1.0,
            ball_radius: field_size * 0.125,
            ball_speed: 0.2,
            bounce_cap: 0.25,
            play_area: 0.7,
            paddle_inset: 0.5,
            time_step_size: 0.01,
        }
    }
}

/// Flappy Bird: gravity, flap impulses, leftward-scrolling pillars.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlappyConfig {
    pub field_size: FieldUnits,
    /// Downward acceleration on the bird.
    pub gravity: f32,
    /// Vertical velocity set by a flap.
    pub flap_impulse: f32,
    /// Component-wise bird speed limit.
    pub max_speed: f32,
    /// Ceiling for the bird.
    pub bird_y_max: FieldUnits,
    /// Pillar pool capacity.
    pub n_pillars: usize,
    /// Bird/pillar hit threshold.
    pub r_pillar: FieldUnits,
    /// Leftward pillar scroll speed.
    pub pillar_speed: f32,
    /// Minimum simulated time between pillar spawns.
    pub pillar_spawn_delay: f32,
    /// Vertical placement of spawned pillars.
    pub pillar_y: FieldUnits,
    pub time_step_size: f32,
}

impl Default for FlappyConfig {
    fn default() -> Self {
        let field_size = 0.3;
        Self {
            field_size,
            gravity: 0.01,
            flap_impulse: 0.2,
            max_speed: 0.2,
            bird_y_max: field_size - 0.1,
            n_pillars: 4,
            r_pillar: field_size * 0.075,
            pillar_speed: 0.05,
            pillar_spawn_delay: 5.0,
            pillar_y: -0.2,
            time_step_size: 0.01,
        }
    }
}

/// Platformer: direct horizontal movement, jump impulse, ground clamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformerConfig {
    pub field_size: FieldUnits,
    /// Downward acceleration while airborne.
    pub gravity: f32,
    /// Vertical velocity set by a jump from the ground.
    pub jump_force: f32,
    /// Horizontal movement speed while a direction is held.
    pub move_speed: f32,
    /// Height of the ground plane.
    pub ground_level: FieldUnits,
    pub time_step_size: f32,
}

impl Default for PlatformerConfig {
    fn default() -> Self {
        Self {
            field_size: 0.5,
            gravity: 0.05,
            jump_force: 0.3,
            move_speed: 0.15,
            ground_level: -0.1,
            time_step_size: 0.01,
        }
    }
}
