//! Fixed-timestep game loop
//!
//! One loop serves every game in the family. Each tick runs the same phase
//! sequence: derive `dt`, poll and decode input, cooldown-gated spawning,
//! physics in fixed entity-class order (player first, then projectiles, then
//! obstacles), collision, boundary, then the draw handoff. The phase order
//! matters for numeric reproducibility and is owned here, not by the games;
//! the games fill in what each phase does.

use std::fmt;

use crate::input::{ControlMap, InputError, InputFrame, InputSource, InputState};
use crate::render::Renderer;
use super::clock::GameClock;

/// Loop state. The only transition is `Running -> Terminated`, triggered by
/// the quit input code or by the game reporting an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player sent the quit code.
    Quit,
    /// The game's lose condition fired.
    GameOver { score: u32 },
    /// The game's win condition fired.
    Cleared { score: u32 },
}

/// Fatal loop failure. The only variant is an input-source failure; there
/// is no recovery path for a real-time loop, so the run dies with it.
#[derive(Debug)]
pub enum EngineError {
    Input(InputError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Input(e) => write!(f, "input source failed: {e}"),
        }
    }
}

impl std::error::Error for EngineError {}

/// Per-game rule plug-in.
///
/// The loop calls these hooks in a fixed order every tick; implementations
/// mutate their own entity state and nothing else. Input flags handed to
/// [`apply_input`](GameRules::apply_input) are transient - they describe
/// this tick only and are rebuilt from the next poll.
pub trait GameRules {
    /// Code-to-action table for this game.
    fn controls(&self) -> &ControlMap;

    /// Consume the tick's decoded input.
    fn apply_input(&mut self, input: &InputState);

    /// Cooldown-gated spawning against the simulated clock.
    fn spawn(&mut self, clock: &GameClock);

    /// Integrate all entity classes: player first, then projectiles, then
    /// obstacles.
    fn physics(&mut self, dt: f32);

    /// Pairwise hit tests and responses.
    fn collide(&mut self);

    /// Field-edge policy for every active entity.
    fn boundary(&mut self);

    /// Emit draw calls in entity-class order; the player-class sprite goes
    /// last so it lands on top.
    fn draw(&self, renderer: &mut dyn Renderer);

    /// Win/lose check, evaluated after the tick's phases.
    fn status(&self) -> Option<Outcome>;
}

/// Owns the clock and loop state for one run of one game.
#[derive(Debug)]
pub struct Simulation<R> {
    rules: R,
    clock: GameClock,
    state: LoopState,
}

impl<R: GameRules> Simulation<R> {
    pub fn new(rules: R, time_step_size: f32) -> Self {
        Self {
            rules,
            clock: GameClock::new(time_step_size),
            state: LoopState::Running,
        }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Run one tick from an already-polled input frame.
    ///
    /// Returns the outcome once the loop terminates. Useful directly in
    /// tests; [`run`](Simulation::run) wraps it with polling and the
    /// end-of-frame wait.
    pub fn tick(&mut self, frame: InputFrame, renderer: &mut dyn Renderer) -> Option<Outcome> {
        if self.state == LoopState::Terminated {
            return None;
        }

        let dt = self.clock.begin_tick();

        let input = self.rules.controls().decode(frame);
        if input.wants_quit() {
            self.state = LoopState::Terminated;
            return Some(Outcome::Quit);
        }

        self.rules.apply_input(&input);
        self.rules.spawn(&self.clock);
        self.rules.physics(dt);
        self.rules.collide();
        self.rules.boundary();
        self.rules.draw(renderer);
        renderer.present();

        self.clock.advance();

        if let Some(outcome) = self.rules.status() {
            self.state = LoopState::Terminated;
            return Some(outcome);
        }
        None
    }

    /// Drive the loop to completion.
    ///
    /// Polls the source once per tick; a poll failure is fatal and ends the
    /// run with an error.
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
    ) -> Result<Outcome, EngineError> {
        loop {
            let frame = input.poll().map_err(EngineError::Input)?;
            if let Some(outcome) = self.tick(frame, renderer) {
                log::info!(
                    "run ended after {:.2}s simulated: {:?}",
                    self.clock.now(),
                    outcome
                );
                return Ok(outcome);
            }
            renderer.wait();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Action, ScriptedInput};
    use crate::render::RecordingRenderer;
    use glam::Vec2;

    /// Minimal rules: counts phase calls, ends after a fixed tick budget.
    struct Countdown {
        controls: ControlMap,
        ticks_left: u32,
        phases: Vec<&'static str>,
    }

    impl Countdown {
        fn new(ticks: u32) -> Self {
            Self {
                controls: ControlMap::new(&[], &[(10, Action::Quit)]),
                ticks_left: ticks,
                phases: Vec::new(),
            }
        }
    }

    impl GameRules for Countdown {
        fn controls(&self) -> &ControlMap {
            &self.controls
        }
        fn apply_input(&mut self, _input: &InputState) {
            self.phases.push("input");
        }
        fn spawn(&mut self, _clock: &GameClock) {
            self.phases.push("spawn");
        }
        fn physics(&mut self, _dt: f32) {
            self.phases.push("physics");
        }
        fn collide(&mut self) {
            self.phases.push("collide");
        }
        fn boundary(&mut self) {
            self.phases.push("boundary");
        }
        fn draw(&self, renderer: &mut dyn Renderer) {
            renderer.draw("stub", Vec2::ZERO);
        }
        fn status(&self) -> Option<Outcome> {
            if self.ticks_left == 0 {
                Some(Outcome::Cleared { score: 0 })
            } else {
                None
            }
        }
    }

    #[test]
    fn phases_run_in_fixed_order() {
        let mut sim = Simulation::new(Countdown::new(5), 0.01);
        let mut renderer = RecordingRenderer::new();
        sim.rules.ticks_left = 1;
        assert!(sim.tick(InputFrame::NEUTRAL, &mut renderer).is_none());
        assert_eq!(
            sim.rules.phases,
            vec!["input", "spawn", "physics", "collide", "boundary"]
        );
        assert_eq!(renderer.frames.len(), 1);
    }

    #[test]
    fn quit_code_terminates_before_any_phase() {
        let mut sim = Simulation::new(Countdown::new(5), 0.01);
        let mut renderer = RecordingRenderer::new();
        let outcome = sim.tick(InputFrame::new(0, 10), &mut renderer);
        assert_eq!(outcome, Some(Outcome::Quit));
        assert_eq!(sim.state(), LoopState::Terminated);
        assert!(sim.rules.phases.is_empty());
        // ticking a terminated loop does nothing
        assert!(sim.tick(InputFrame::NEUTRAL, &mut renderer).is_none());
        assert_eq!(renderer.frames.len(), 0);
    }

    #[test]
    fn run_polls_until_outcome() {
        struct TwoTicks(Countdown);
        impl GameRules for TwoTicks {
            fn controls(&self) -> &ControlMap {
                self.0.controls()
            }
            fn apply_input(&mut self, i: &InputState) {
                self.0.apply_input(i);
            }
            fn spawn(&mut self, c: &GameClock) {
                self.0.spawn(c);
            }
            fn physics(&mut self, dt: f32) {
                self.0.ticks_left = self.0.ticks_left.saturating_sub(1);
                self.0.physics(dt);
            }
            fn collide(&mut self) {
                self.0.collide();
            }
            fn boundary(&mut self) {
                self.0.boundary();
            }
            fn draw(&self, r: &mut dyn Renderer) {
                self.0.draw(r);
            }
            fn status(&self) -> Option<Outcome> {
                self.0.status()
            }
        }

        let mut sim = Simulation::new(TwoTicks(Countdown::new(2)), 0.01);
        let mut input = ScriptedInput::default();
        let mut renderer = RecordingRenderer::new();
        let outcome = sim.run(&mut input, &mut renderer).unwrap();
        assert_eq!(outcome, Outcome::Cleared { score: 0 });
        assert_eq!(renderer.frames.len(), 2);
    }
}
