//! Pong: two vertically accelerating paddles, one bouncing ball
//!
//! Player 1 reads the movement line (1 up, 2 down), player 2 the action
//! line (3 up, 4 down; 10 quits). Walls and goal lines sit inset from the
//! field edge. A paddle hit sign-flips the ball's horizontal velocity and
//! reflects the vertical one with the paddle's own motion added, capped -
//! the spin-limited bounce. A ball past either goal line ends the game.

use glam::Vec2;

use crate::clip_velocity;
use crate::config::PongConfig;
use crate::input::{Action, ControlMap, InputState};
use crate::render::Renderer;
use crate::sim::{
    GameClock, GameRules, Outcome, Player, circle_hit, clamp_axis, paddle_bounce, reflect_axis,
};

pub struct Pong {
    cfg: PongConfig,
    controls: ControlMap,
    p1: Player,
    p2: Player,
    ball: Player,
    // this tick's paddle input levels
    p1_accel: f32,
    p2_accel: f32,
    over: bool,
}

impl Pong {
    pub fn new(cfg: PongConfig) -> Self {
        let inset = cfg.paddle_inset * cfg.field_size;
        let mut ball = Player::at(Vec2::ZERO);
        ball.vel = Vec2::splat(cfg.ball_speed);
        Self {
            controls: ControlMap::new(
                &[(1, Action::Up), (2, Action::Down)],
                &[(3, Action::Up), (4, Action::Down), (10, Action::Quit)],
            ),
            p1: Player::at(Vec2::new(-inset, 0.0)),
            p2: Player::at(Vec2::new(inset, 0.0)),
            ball,
            p1_accel: 0.0,
            p2_accel: 0.0,
            over: false,
            cfg,
        }
    }

    /// Walls and goal lines, inset from the field edge.
    fn wall(&self) -> f32 {
        self.cfg.play_area * self.cfg.field_size
    }

    pub fn ball(&self) -> &Player {
        &self.ball
    }

    fn integrate_paddle(p: &mut Player, accel_input: f32, cfg: &PongConfig, dt: f32) {
        p.pos.y += p.vel.y * dt;
        p.vel.y += accel_input * cfg.paddle_acceleration * dt;
        p.vel.y = clip_velocity(p.vel.y, cfg.max_speed);
    }
}

impl GameRules for Pong {
    fn controls(&self) -> &ControlMap {
        &self.controls
    }

    fn apply_input(&mut self, input: &InputState) {
        self.p1_accel = match input.movement {
            Action::Up => 1.0,
            Action::Down => -1.0,
            _ => 0.0,
        };
        self.p2_accel = match input.action {
            Action::Up => 1.0,
            Action::Down => -1.0,
            _ => 0.0,
        };
    }

    fn spawn(&mut self, _clock: &GameClock) {
        // nothing pooled in this game; the ball is spawned once at setup
    }

    fn physics(&mut self, dt: f32) {
        Self::integrate_paddle(&mut self.p1, self.p1_accel, &self.cfg, dt);
        Self::integrate_paddle(&mut self.p2, self.p2_accel, &self.cfg, dt);
        self.ball.pos += self.ball.vel * dt;
    }

    fn collide(&mut self) {
        if circle_hit(self.ball.pos, self.p1.pos, self.cfg.ball_radius) {
            paddle_bounce(&mut self.ball.vel, self.p1.vel.y, self.cfg.bounce_cap);
        }
        if circle_hit(self.ball.pos, self.p2.pos, self.cfg.ball_radius) {
            paddle_bounce(&mut self.ball.vel, self.p2.vel.y, self.cfg.bounce_cap);
        }
    }

    fn boundary(&mut self) {
        let wall = self.wall();
        if self.ball.pos.x.abs() > wall {
            self.over = true;
        }
        reflect_axis(&mut self.ball.pos.y, &mut self.ball.vel.y, wall, -wall);
        // paddles push against the walls without bouncing
        clamp_axis(&mut self.p1.pos.y, wall, -wall);
        clamp_axis(&mut self.p2.pos.y, wall, -wall);
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw("border", Vec2::ZERO);
        renderer.draw("paddle", self.p2.pos);
        renderer.draw("paddle", self.p1.pos);
        renderer.draw("ball", self.ball.pos);
    }

    fn status(&self) -> Option<Outcome> {
        if self.over {
            Some(Outcome::GameOver { score: 0 })
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

    fn run_until<F: Fn(&Pong) -> bool>(
        sim: &mut Simulation<Pong>,
        frame: InputFrame,
        max_ticks: usize,
        done: F,
    ) -> bool {
        let mut renderer = RecordingRenderer::new();
        for _ in 0..max_ticks {
            sim.tick(frame, &mut renderer);
            if done(sim.rules()) {
                return true;
            }
        }
        false
    }

    #[test]
    fn paddle_hit_flips_horizontal_velocity() {
        let cfg = PongConfig::default();
        let step = cfg.time_step_size;
        let mut game = Pong::new(cfg);
        // send the ball straight at the resting p2 paddle
        game.ball.vel = Vec2::new(0.2, 0.0);
        let mut sim = Simulation::new(game, step);

        let hit = run_until(&mut sim, InputFrame::NEUTRAL, 200, |g| g.ball.vel.x < 0.0);
        assert!(hit, "ball never reached the paddle");
        assert!((sim.rules().ball.vel.x - (-0.2)).abs() < 1e-6);
        // resting paddle, zero vertical approach: nothing to reflect
        assert!(sim.rules().ball.vel.y.abs() < 1e-6);
    }

    #[test]
    fn bounce_reflects_combined_speed_below_cap() {
        let cfg = PongConfig::default();
        let step = cfg.time_step_size;
        let mut game = Pong::new(cfg);
        game.ball.pos = Vec2::new(0.12, 0.0);
        game.ball.vel = Vec2::new(0.2, 0.2);
        let mut sim = Simulation::new(game, step);

        let hit = run_until(&mut sim, InputFrame::NEUTRAL, 50, |g| g.ball.vel.x < 0.0);
        assert!(hit);
        // 0.2 + 0 < 0.25, so the full combined speed reflects
        assert!((sim.rules().ball.vel.y - (-0.2)).abs() < 1e-6);
    }

    #[test]
    fn bounce_above_cap_is_limited() {
        let cfg = PongConfig::default();
        let step = cfg.time_step_size;
        let mut game = Pong::new(cfg);
        game.ball.pos = Vec2::new(0.12, -0.05);
        game.ball.vel = Vec2::new(0.2, 0.3);
        let mut sim = Simulation::new(game, step);

        let hit = run_until(&mut sim, InputFrame::NEUTRAL, 50, |g| g.ball.vel.x < 0.0);
        assert!(hit);
        assert!((sim.rules().ball.vel.y - (-0.25)).abs() < 1e-6);
    }

    #[test]
    fn ball_bounces_off_top_wall() {
        let cfg = PongConfig::default();
        let wall = cfg.play_area * cfg.field_size;
        let step = cfg.time_step_size;
        let mut game = Pong::new(cfg);
        game.ball.vel = Vec2::new(0.0, 0.2);
        let mut sim = Simulation::new(game, step);

        let bounced = run_until(&mut sim, InputFrame::NEUTRAL, 300, |g| g.ball.vel.y < 0.0);
        assert!(bounced);
        assert!(sim.rules().ball.pos.y <= wall);
    }

    #[test]
    fn escaped_ball_ends_the_game() {
        let cfg = PongConfig::default();
        let step = cfg.time_step_size;
        let mut game = Pong::new(cfg);
        // aim between the paddle rows so nothing intercepts
        game.ball.pos = Vec2::new(0.0, 0.15);
        game.ball.vel = Vec2::new(0.2, 0.0);
        let mut sim = Simulation::new(game, step);
        let mut renderer = RecordingRenderer::new();

        let mut outcome = None;
        for _ in 0..300 {
            outcome = sim.tick(InputFrame::NEUTRAL, &mut renderer);
            if outcome.is_some() {
                break;
            }
        }
        assert_eq!(outcome, Some(Outcome::GameOver { score: 0 }));
    }

    #[test]
    fn paddles_accelerate_and_clamp_at_walls() {
        let cfg = PongConfig::default();
        let wall = cfg.play_area * cfg.field_size;
        let step = cfg.time_step_size;
        let mut sim = Simulation::new(Pong::new(cfg), step);
        let mut renderer = RecordingRenderer::new();

        // p1 up, p2 down, long enough to slam both into the walls
        for _ in 0..400 {
            sim.tick(InputFrame::new(1, 4), &mut renderer);
        }
        assert_eq!(sim.rules().p1.pos.y, wall);
        assert_eq!(sim.rules().p2.pos.y, -wall);
        // clamp does not bounce the paddle
        assert!(sim.rules().p1.vel.y > 0.0);
    }
}
