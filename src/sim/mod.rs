//! Deterministic simulation module
//!
//! All gameplay-neutral logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed virtual timestep only, no wall-clock reads
//! - Seeded RNG only (and only at setup, in the game variants)
//! - Stable iteration order (ascending slot index)
//! - No rendering or platform dependencies beyond the trait boundaries

pub mod boundary;
pub mod clock;
pub mod collision;
pub mod engine;
pub mod physics;
pub mod store;

pub use boundary::{clamp_axis, reflect_axis, wrap_point, wrap_pool};
pub use clock::{GameClock, SpawnTimer};
pub use collision::{circle_hit, paddle_bounce, resolve_projectile_hits};
pub use engine::{EngineError, GameRules, LoopState, Outcome, Simulation};
pub use physics::{PlayerKinematics, age_and_drift_pool, drift_pool, integrate_player};
pub use store::{Player, Pool};
