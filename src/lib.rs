//! Classic single-player snake for the terminal
//!
//! - Core game rules (game module): fixed-tick update loop, apple
//!   consumption, collision detection
//! - Keyboard input mapping (input module)
//! - ratatui rendering (render module)
//! - Session-only stats such as the high score (stats module)
//! - The interactive event loop tying it together (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod render;
pub mod stats;
