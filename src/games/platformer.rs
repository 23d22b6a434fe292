//! Side-view platformer: walk, jump, gravity, hard ground
//!
//! Movement line 1 walks left, 2 walks right; action code 5 jumps, 10
//! quits. Walking moves at a constant speed with no inertia. A jump is
//! only granted from the ground, and landing zeroes the fall speed rather
//! than bouncing. There is no scoring and no losing; the run ends on quit.

use glam::Vec2;

use crate::config::PlatformerConfig;
use crate::input::{Action, ControlMap, InputState};
use crate::render::Renderer;
use crate::sim::{GameClock, GameRules, Outcome, Player, clamp_axis};

pub struct Platformer {
    cfg: PlatformerConfig,
    controls: ControlMap,
    player: Player,
    // this tick's input levels
    move_dir: f32,
    jump: bool,
}

impl Platformer {
    pub fn new(cfg: PlatformerConfig) -> Self {
        Self {
            controls: ControlMap::new(
                &[(1, Action::Left), (2, Action::Right)],
                &[(5, Action::Jump), (10, Action::Quit)],
            ),
            player: Player::at(Vec2::new(0.0, cfg.ground_level)),
            move_dir: 0.0,
            jump: false,
            cfg,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    fn on_ground(&self) -> bool {
        self.player.pos.y <= self.cfg.ground_level
    }
}

impl GameRules for Platformer {
    fn controls(&self) -> &ControlMap {
        &self.controls
    }

    fn apply_input(&mut self, input: &InputState) {
        self.move_dir = match input.movement {
            Action::Left => -1.0,
            Action::Right => 1.0,
            _ => 0.0,
        };
        self.jump = input.action == Action::Jump;
    }

    fn spawn(&mut self, _clock: &GameClock) {}

    fn physics(&mut self, dt: f32) {
        self.player.pos.x += self.move_dir * self.cfg.move_speed * dt;
        if self.jump && self.on_ground() {
            self.player.vel.y = self.cfg.jump_force;
        }
        self.player.pos.y += self.player.vel.y * dt;
        self.player.vel.y -= self.cfg.gravity * dt;
    }

    fn collide(&mut self) {
        // nothing to collide with; the ground is handled as a boundary
    }

    fn boundary(&mut self) {
        if self.player.pos.y < self.cfg.ground_level {
            self.player.pos.y = self.cfg.ground_level;
            self.player.vel.y = 0.0;
        }
        clamp_axis(&mut self.player.pos.x, self.cfg.field_size, -self.cfg.field_size);
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw("border", Vec2::ZERO);
        renderer.draw("ground", Vec2::new(0.0, self.cfg.ground_level));
        renderer.draw_rotated("player", self.player.pos, self.player.angle);
    }

    fn status(&self) -> Option<Outcome> {
        None
    }
}
