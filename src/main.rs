//! Scope Arcade entry point
//!
//! Runs one game variant against a scripted demo input, standing in for the
//! keyboard-listener hardware lines of the instrument rig. Usage:
//!
//! ```text
//! scope-arcade <asteroids|pong|flappy|platformer> [--seed N] [--tuning FILE] [--wait-ms N]
//! ```
//!
//! `--tuning` points at a JSON file overriding that game's config fields;
//! omitted fields keep their defaults. `--wait-ms` inserts a real-time wait
//! between frames (simulated time is unaffected).

use std::fs;
use std::process::ExitCode;
use std::time::Duration;

use scope_arcade::config::{AsteroidsConfig, FlappyConfig, PlatformerConfig, PongConfig};
use scope_arcade::games::{Asteroids, Flappy, Platformer, Pong};
use scope_arcade::input::ScriptedInput;
use scope_arcade::render::LogRenderer;
use scope_arcade::sim::{GameRules, Outcome, Simulation};

struct Args {
    game: String,
    seed: u64,
    tuning: Option<String>,
    wait: Option<Duration>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = std::env::args().skip(1);
    let game = args.next().ok_or_else(usage)?;
    let mut parsed = Args {
        game,
        seed: 0,
        tuning: None,
        wait: None,
    };
    while let Some(flag) = args.next() {
        let value = args
            .next()
            .ok_or_else(|| format!("{flag} needs a value"))?;
        match flag.as_str() {
            "--seed" => {
                parsed.seed = value.parse().map_err(|e| format!("bad --seed: {e}"))?;
            }
            "--tuning" => parsed.tuning = Some(value),
            "--wait-ms" => {
                let ms: u64 = value.parse().map_err(|e| format!("bad --wait-ms: {e}"))?;
                parsed.wait = Some(Duration::from_millis(ms));
            }
            other => return Err(format!("unknown flag {other}\n{}", usage())),
        }
    }
    Ok(parsed)
}

fn usage() -> String {
    "usage: scope-arcade <asteroids|pong|flappy|platformer> \
     [--seed N] [--tuning FILE] [--wait-ms N]"
        .to_owned()
}

/// Load a game config from the tuning file, or fall back to defaults.
fn load_config<C>(tuning: Option<&str>) -> Result<C, String>
where
    C: Default + serde::de::DeserializeOwned,
{
    match tuning {
        None => Ok(C::default()),
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| format!("read {path}: {e}"))?;
            serde_json::from_str(&text).map_err(|e| format!("parse {path}: {e}"))
        }
    }
}

/// Quit code on the action line, recognized by every game.
const QUIT: i32 = 10;

fn asteroids_demo() -> ScriptedInput {
    // sweep the ship around while firing, then give up
    ScriptedInput::default()
        .hold(4, 0, 60)
        .hold(1, 5, 400)
        .hold(3, 0, 120)
        .hold(1, 5, 400)
        .hold(4, 0, 60)
        .hold(1, 5, 400)
        .hold(0, QUIT, 1)
}

fn pong_demo() -> ScriptedInput {
    // chase the ball upward on both sides until it escapes
    ScriptedInput::default()
        .hold(1, 3, 150)
        .hold(2, 4, 150)
        .hold(1, 3, 150)
        .hold(2, 4, 150)
        .hold(0, QUIT, 1)
}

fn flappy_demo() -> ScriptedInput {
    let mut input = ScriptedInput::default();
    for _ in 0..40 {
        input = input.hold(0, 5, 1).hold(0, 0, 29);
    }
    input.hold(0, QUIT, 1)
}

fn platformer_demo() -> ScriptedInput {
    ScriptedInput::default()
        .hold(2, 0, 200)
        .hold(2, 5, 1)
        .hold(2, 0, 300)
        .hold(1, 0, 200)
        .hold(1, 5, 1)
        .hold(1, 0, 300)
        .hold(0, QUIT, 1)
}

fn run_game<R: GameRules>(
    rules: R,
    time_step_size: f32,
    mut input: ScriptedInput,
    wait: Option<Duration>,
) -> Result<Outcome, String> {
    let mut sim = Simulation::new(rules, time_step_size);
    let mut renderer = LogRenderer::new(wait);
    sim.run(&mut input, &mut renderer).map_err(|e| e.to_string())
}

fn run(args: &Args) -> Result<Outcome, String> {
    match args.game.as_str() {
        "asteroids" => {
            let cfg: AsteroidsConfig = load_config(args.tuning.as_deref())?;
            let step = cfg.time_step_size;
            run_game(Asteroids::new(cfg, args.seed), step, asteroids_demo(), args.wait)
        }
        "pong" => {
            let cfg: PongConfig = load_config(args.tuning.as_deref())?;
            let step = cfg.time_step_size;
            run_game(Pong::new(cfg), step, pong_demo(), args.wait)
        }
        "flappy" => {
            let cfg: FlappyConfig = load_config(args.tuning.as_deref())?;
            let step = cfg.time_step_size;
            run_game(Flappy::new(cfg), step, flappy_demo(), args.wait)
        }
        "platformer" => {
            let cfg: PlatformerConfig = load_config(args.tuning.as_deref())?;
            let step = cfg.time_step_size;
            run_game(Platformer::new(cfg), step, platformer_demo(), args.wait)
        }
        other => Err(format!("unknown game {other:?}\n{}", usage())),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(outcome) => {
            match outcome {
                Outcome::Quit => log::info!("{}: quit", args.game),
                Outcome::GameOver { score } => {
                    log::info!("{}: game over, score {score}", args.game)
                }
                Outcome::Cleared { score } => log::info!("{}: cleared, score {score}", args.game),
            }
            ExitCode::SUCCESS
        }
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}
