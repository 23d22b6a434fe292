//! Flappy Bird: gravity, flap impulses, scrolling pillars
//!
//! Action code 5 flaps, 10 quits; the movement line is unused. Pillars
//! spawn at the right edge on a cooldown, scroll left, and retire past the
//! left edge. Passing a pillar scores once; touching one ends the run.

use glam::Vec2;

use crate::clip_velocity;
use crate::config::FlappyConfig;
use crate::input::{Action, ControlMap, InputState};
use crate::render::Renderer;
use crate::sim::{
    GameClock, GameRules, Outcome, Player, Pool, SpawnTimer, circle_hit, clamp_axis,
};

pub struct Flappy {
    cfg: FlappyConfig,
    controls: ControlMap,
    bird: Player,
    pillars: Pool,
    /// Per-slot "already scored" flags, reset on respawn.
    scored: Vec<bool>,
    pillar_timer: SpawnTimer,
    flap: bool,
    crashed: bool,
    score: u32,
}

impl Flappy {
    pub fn new(cfg: FlappyConfig) -> Self {
        let pillar_timer = SpawnTimer::new(cfg.pillar_spawn_delay);
        Self {
            controls: ControlMap::new(&[], &[(5, Action::Jump), (10, Action::Quit)]),
            bird: Player::at(Vec2::ZERO),
            pillars: Pool::new(cfg.n_pillars),
            scored: vec![false; cfg.n_pillars],
            pillar_timer,
            flap: false,
            crashed: false,
            score: 0,
            cfg,
        }
    }

    /// Lifetime budget for a pillar slot: time to cross the whole field.
    fn pillar_lifetime(&self) -> f32 {
        2.0 * self.cfg.field_size / self.cfg.pillar_speed
    }

    pub fn bird(&self) -> &Player {
        &self.bird
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

impl GameRules for Flappy {
    fn controls(&self) -> &ControlMap {
        &self.controls
    }

    fn apply_input(&mut self, input: &InputState) {
        self.flap = input.action == Action::Jump;
    }

    fn spawn(&mut self, clock: &GameClock) {
        if !self.pillar_timer.ready(clock.now()) {
            return;
        }
        if let Some(i) = self.pillars.spawn() {
            self.pillars.pos[i] = Vec2::new(self.cfg.field_size, self.cfg.pillar_y);
            self.pillars.vel[i] = Vec2::new(-self.cfg.pillar_speed, 0.0);
            self.pillars.age[i] = self.pillar_lifetime();
            self.scored[i] = false;
            self.pillar_timer.fire(clock.now());
        }
    }

    fn physics(&mut self, dt: f32) {
        // gravity first, then the move, then the flap override - the flap
        // replaces the fall speed outright rather than adding to it
        self.bird.vel.y -= self.cfg.gravity * dt;
        self.bird.pos.y += self.bird.vel.y * dt;
        if self.flap {
            self.bird.vel.y = self.cfg.flap_impulse;
        }
        self.bird.vel.y = clip_velocity(self.bird.vel.y, self.cfg.max_speed);

        for i in 0..self.pillars.capacity() {
            if self.pillars.active[i] {
                self.pillars.age[i] -= dt;
                self.pillars.pos[i] += self.pillars.vel[i] * dt;
            }
        }
    }

    fn collide(&mut self) {
        for i in self.pillars.active_indices() {
            if circle_hit(self.bird.pos, self.pillars.pos[i], self.cfg.r_pillar) {
                self.crashed = true;
            }
        }
        // score each pillar once, the tick it falls behind the bird
        for i in 0..self.pillars.capacity() {
            if self.pillars.active[i] && !self.scored[i] && self.pillars.pos[i].x < self.bird.pos.x
            {
                self.scored[i] = true;
                self.score += 1;
            }
        }
    }

    fn boundary(&mut self) {
        clamp_axis(
            &mut self.bird.pos.y,
            self.cfg.bird_y_max,
            -self.cfg.field_size,
        );
        for i in 0..self.pillars.capacity() {
            if self.pillars.active[i] && self.pillars.pos[i].x < -self.cfg.field_size {
                self.pillars.deactivate(i);
                self.pillars.age[i] = -1.0;
            }
        }
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw("border", Vec2::ZERO);
        for i in self.pillars.active_indices() {
            renderer.draw("pillar", self.pillars.pos[i]);
        }
        renderer.draw_rotated("bird", self.bird.pos, self.bird.angle);
    }

    fn status(&self) -> Option<Outcome> {
        if self.crashed {
            Some(Outcome::GameOver { score: self.score })
        } else {
            None
        }
    }
}
