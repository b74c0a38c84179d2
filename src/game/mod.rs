//! Core game logic for snake
//!
//! Everything in here is pure state and rules, with no terminal or
//! rendering dependencies.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, TickOutcome};
pub use state::{CollisionType, GameState, Position, RunState, Snake};
