//! Per-game rule variants
//!
//! Each game is a [`GameRules`](crate::sim::GameRules) implementation that
//! owns its entities and plugs spawn policy, collision response, boundary
//! policy, scoring, and win/lose conditions into the shared loop. Everything
//! the games have in common lives in `sim`; only the genuinely
//! game-specific parts are here.

pub mod asteroids;
pub mod flappy;
pub mod platformer;
pub mod pong;

pub use asteroids::Asteroids;
pub use flappy::Flappy;
pub use platformer::Platformer;
pub use pong::Pong;
