use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Points awarded per apple eaten
    pub points_per_apple: u32,
    /// Milliseconds between game ticks
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 24,
            grid_height: 24,
            initial_snake_length: 6,
            points_per_apple: 10,
            tick_interval_ms: 75,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Reject configurations the game cannot start from: empty grids,
    /// a zero tick interval, or a grid too narrow to hold the initial
    /// snake behind its centered head.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_width > 0 && self.grid_height > 0,
            "grid must be at least 1x1, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        ensure!(
            self.tick_interval_ms > 0,
            "tick interval must be non-zero"
        );
        ensure!(self.initial_snake_length > 0, "snake must have a head");

        // The snake spawns with its head at grid_width / 2 and its body
        // trailing left; every segment must land on the grid.
        let center_x = self.grid_width / 2;
        ensure!(
            center_x + 1 >= self.initial_snake_length,
            "grid width {} cannot hold a snake of length {}",
            self.grid_width,
            self.initial_snake_length
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 24);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.initial_snake_length, 6);
        assert_eq!(config.points_per_apple, 10);
        assert_eq!(config.tick_interval_ms, 75);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 15);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 15);
        assert_eq!(config.initial_snake_length, 6);
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert!(GameConfig::new(0, 0).validate().is_err());
        assert!(GameConfig::new(0, 10).validate().is_err());
        assert!(GameConfig::new(10, 0).validate().is_err());
    }

    #[test]
    fn test_zero_tick_interval_rejected() {
        let config = GameConfig {
            tick_interval_ms: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_grid_too_narrow_for_snake_rejected() {
        // Width 8 centers the head at x=4; a 6-segment snake would need
        // body cells down to x=-1
        assert!(GameConfig::new(8, 10).validate().is_err());

        // Width 10 centers the head at x=5, tail exactly at x=0
        assert!(GameConfig::new(10, 10).validate().is_ok());
    }
}
