//! Asteroids: free-flying ship, pooled rays, drifting rocks
//!
//! Controls (movement line / action line): 1 thrust, 3 turn left, 4 turn
//! right; 5 fire, 10 quit. The field is toroidal for every entity class.
//! Rays live for a fixed time, recycle the oldest pool slot, and take out
//! one asteroid each. Clearing every asteroid wins the run.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::AsteroidsConfig;
use crate::input::{Action, ControlMap, InputState};
use crate::render::Renderer;
use crate::sim::{
    GameClock, GameRules, Outcome, Player, PlayerKinematics, Pool, SpawnTimer, age_and_drift_pool,
    drift_pool, integrate_player, resolve_projectile_hits, wrap_point, wrap_pool,
};

pub struct Asteroids {
    cfg: AsteroidsConfig,
    controls: ControlMap,
    ship: Player,
    rays: Pool,
    asteroids: Pool,
    ray_timer: SpawnTimer,
    // this tick's input levels, rebuilt every poll
    turn: f32,
    thrust: f32,
    fire: bool,
    score: u32,
}

impl Asteroids {
    /// Set up a run. Asteroid placement and headings come from the seeded
    /// RNG, so equal seeds give identical runs.
    pub fn new(cfg: AsteroidsConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut asteroids = Pool::new(cfg.n_asteroids);
        for i in 0..cfg.n_asteroids {
            asteroids.active[i] = true;
            asteroids.pos[i] = Vec2::new(
                rng.random_range(-cfg.field_size..cfg.field_size),
                rng.random_range(-cfg.field_size..cfg.field_size),
            );
            asteroids.angle[i] = rng.random_range(-0.5..0.5);
        }

        let ray_timer = SpawnTimer::new(cfg.ray_spawn_delay);
        Self {
            controls: ControlMap::new(
                &[(1, Action::Thrust), (3, Action::Left), (4, Action::Right)],
                &[(5, Action::Fire), (10, Action::Quit)],
            ),
            ship: Player::at(Vec2::ZERO),
            rays: Pool::new(cfg.n_rays),
            asteroids,
            ray_timer,
            turn: 0.0,
            thrust: 0.0,
            fire: false,
            score: 0,
            cfg,
        }
    }

    fn kinematics(&self) -> PlayerKinematics {
        PlayerKinematics {
            acceleration: self.cfg.ship_acceleration,
            rotation_speed: self.cfg.ship_rotation_speed,
            max_speed: self.cfg.max_speed,
        }
    }

    pub fn ship(&self) -> &Player {
        &self.ship
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn asteroids_remaining(&self) -> usize {
        self.asteroids.active_count()
    }
}

impl GameRules for Asteroids {
    fn controls(&self) -> &ControlMap {
        &self.controls
    }

    fn apply_input(&mut self, input: &InputState) {
        self.turn = match input.movement {
            Action::Left => -1.0,
            Action::Right => 1.0,
            _ => 0.0,
        };
        self.thrust = if input.movement == Action::Thrust {
            1.0
        } else {
            0.0
        };
        self.fire = input.action == Action::Fire;
    }

    fn spawn(&mut self, clock: &GameClock) {
        if !self.fire || !self.ray_timer.ready(clock.now()) {
            return;
        }
        // refused when every slot still has lifetime; the cooldown makes
        // that rare
        if let Some(i) = self.rays.spawn() {
            self.rays.age[i] = self.cfg.max_ray_age;
            self.rays.pos[i] = self.ship.pos;
            self.rays.angle[i] = self.ship.angle;
            self.ray_timer.fire(clock.now());
        }
    }

    fn physics(&mut self, dt: f32) {
        let kinematics = self.kinematics();
        integrate_player(&mut self.ship, &kinematics, self.turn, self.thrust, dt);
        age_and_drift_pool(&mut self.rays, self.cfg.v_ray, dt);
        drift_pool(&mut self.asteroids, self.cfg.v_asteroid, dt);
    }

    fn collide(&mut self) {
        self.score +=
            resolve_projectile_hits(&mut self.rays, &mut self.asteroids, self.cfg.r_asteroid);
    }

    fn boundary(&mut self) {
        wrap_point(&mut self.ship.pos, self.cfg.field_size);
        wrap_pool(&mut self.rays, self.cfg.field_size);
        wrap_pool(&mut self.asteroids, self.cfg.field_size);
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw("border", Vec2::ZERO);
        for i in self.rays.active_indices() {
            renderer.draw_rotated("ray", self.rays.pos[i], self.rays.angle[i]);
        }
        for i in self.asteroids.active_indices() {
            renderer.draw_rotated("asteroid", self.asteroids.pos[i], self.asteroids.angle[i]);
        }
        renderer.draw_rotated("ship", self.ship.pos, self.ship.angle);
    }

    fn status(&self) -> Option<Outcome> {
        if self.asteroids.active_count() == 0 {
            Some(Outcome::Cleared { score: self.score })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputFrame;
    use crate::render::RecordingRenderer;
    use crate::sim::Simulation;

    fn small_cfg() -> AsteroidsConfig {
        AsteroidsConfig {
            n_asteroids: 1,
            ..AsteroidsConfig::default()
        }
    }

    #[test]
    fn placement_is_deterministic_per_seed() {
        let a = Asteroids::new(AsteroidsConfig::default(), 1234);
        let b = Asteroids::new(AsteroidsConfig::default(), 1234);
        let c = Asteroids::new(AsteroidsConfig::default(), 99);
        assert_eq!(a.asteroids.pos, b.asteroids.pos);
        assert_ne!(a.asteroids.pos, c.asteroids.pos);
        for i in 0..a.asteroids.capacity() {
            assert!(a.asteroids.pos[i].x.abs() <= a.cfg.field_size);
            assert!(a.asteroids.pos[i].y.abs() <= a.cfg.field_size);
        }
    }

    #[test]
    fn fire_spawns_one_ray_with_ship_pose() {
        let cfg = AsteroidsConfig::default();
        let step = cfg.time_step_size;
        let mut sim = Simulation::new(Asteroids::new(cfg, 1), step);
        let mut renderer = RecordingRenderer::new();

        // first tick has dt = 0, so the fresh ray still carries the ship pose
        sim.tick(InputFrame::new(0, 5), &mut renderer);
        assert_eq!(sim.rules().rays.active_count(), 1);
        assert_eq!(sim.rules().rays.pos[0], sim.rules().ship.pos);
        assert_eq!(sim.rules().rays.angle[0], sim.rules().ship.angle);

        // holding fire into the second tick hits the cooldown
        sim.tick(InputFrame::new(0, 5), &mut renderer);
        assert_eq!(sim.rules().rays.active_count(), 1);
    }

    #[test]
    fn cooldown_reopens_after_delay() {
        let cfg = AsteroidsConfig::default();
        let step = cfg.time_step_size;
        let ticks_per_window = (cfg.ray_spawn_delay / step) as usize + 2;
        let mut sim = Simulation::new(Asteroids::new(cfg, 1), step);
        let mut renderer = RecordingRenderer::new();
        for _ in 0..ticks_per_window {
            sim.tick(InputFrame::new(0, 5), &mut renderer);
        }
        assert_eq!(sim.rules().rays.active_count(), 2);
    }

    #[test]
    fn clearing_the_field_wins() {
        let mut game = Asteroids::new(small_cfg(), 7);
        // park the lone asteroid on the ship and fire point-blank
        game.asteroids.pos[0] = Vec2::ZERO;
        let step = game.cfg.time_step_size;
        let mut sim = Simulation::new(game, step);
        let mut renderer = RecordingRenderer::new();

        let mut outcome = None;
        for _ in 0..10 {
            outcome = sim.tick(InputFrame::new(0, 5), &mut renderer);
            if outcome.is_some() {
                break;
            }
        }
        assert_eq!(outcome, Some(Outcome::Cleared { score: 1 }));
    }

    #[test]
    fn ship_sprite_is_drawn_last() {
        let cfg = AsteroidsConfig::default();
        let step = cfg.time_step_size;
        let mut sim = Simulation::new(Asteroids::new(cfg, 1), step);
        let mut renderer = RecordingRenderer::new();
        sim.tick(InputFrame::NEUTRAL, &mut renderer);

        let frame = renderer.last_frame().unwrap();
        assert_eq!(frame.first().unwrap().sprite, "border");
        assert_eq!(frame.last().unwrap().sprite, "ship");
    }

    #[test]
    fn everything_stays_in_the_field() {
        let cfg = AsteroidsConfig::default();
        let step = cfg.time_step_size;
        let half = cfg.field_size;
        let mut sim = Simulation::new(Asteroids::new(cfg, 42), step);
        let mut renderer = RecordingRenderer::new();

        // thrust hard and keep firing for a while
        for _ in 0..2000 {
            if sim.tick(InputFrame::new(1, 5), &mut renderer).is_some() {
                break;
            }
        }
        let game = sim.rules();
        assert!(game.ship.pos.x.abs() <= half && game.ship.pos.y.abs() <= half);
        for i in game.asteroids.active_indices() {
            assert!(game.asteroids.pos[i].x.abs() <= half);
            assert!(game.asteroids.pos[i].y.abs() <= half);
        }
        for i in game.rays.active_indices() {
            assert!(game.rays.pos[i].x.abs() <= half);
            assert!(game.rays.pos[i].y.abs() <= half);
        }
    }
}
