use super::{
    action::{Action, Direction},
    config::GameConfig,
    state::{CollisionType, GameState, Position, RunState, Snake},
};
use rand::Rng;

/// What happened during a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the snake ate the apple this tick
    pub ate_apple: bool,
    /// Set when this tick ended the game
    pub collision: Option<CollisionType>,
}

impl TickOutcome {
    fn nothing() -> Self {
        Self {
            ate_apple: false,
            collision: None,
        }
    }
}

/// The update loop: advances GameState one fixed tick at a time
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset the game to initial state: snake centered, heading right
    pub fn reset(&mut self) -> GameState {
        let center_x = (self.config.grid_width / 2) as i32;
        let center_y = (self.config.grid_height / 2) as i32;

        let snake = Snake::new(
            Position::new(center_x, center_y),
            Direction::Right,
            self.config.initial_snake_length,
        );

        let apple = self.spawn_apple();

        GameState::new(snake, apple, self.config.grid_width, self.config.grid_height)
    }

    /// Execute one tick: commit direction, move, check apple, check collision.
    /// Only mutates the state while it is Running; Paused and GameOver ticks
    /// are no-ops.
    pub fn step(&mut self, state: &mut GameState, action: Action) -> TickOutcome {
        if state.run_state != RunState::Running {
            return TickOutcome::nothing();
        }

        // Commit the requested direction unless it reverses the current one
        if let Action::Turn(new_direction) = action {
            if !state.snake.direction.is_opposite(new_direction) {
                state.snake.direction = new_direction;
            }
        }

        let new_head = state.snake.head().moved_in_direction(state.snake.direction);

        // The apple is checked against the cell the head lands on this tick
        let ate_apple = new_head == state.apple;

        state.snake.advance(ate_apple);

        if ate_apple {
            state.score += self.config.points_per_apple;
            state.apples_eaten += 1;
            state.apple = self.spawn_apple();
        }

        // Collisions are judged on the moved snake, so stepping into the
        // cell the tail just vacated is legal
        let collision = self.check_collision(state);
        if collision.is_some() {
            state.run_state = RunState::GameOver;
        }

        state.steps += 1;

        TickOutcome {
            ate_apple,
            collision,
        }
    }

    fn check_collision(&self, state: &GameState) -> Option<CollisionType> {
        let head = state.snake.head();

        if !state.is_in_bounds(head) {
            return Some(CollisionType::Wall);
        }

        if state.snake.collides_with_body(head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Place the apple at a uniformly random cell. Deliberately does not
    /// avoid snake-occupied cells.
    fn spawn_apple(&mut self) -> Position {
        let x = self.rng.gen_range(0..self.config.grid_width) as i32;
        let y = self.rng.gen_range(0..self.config.grid_height) as i32;
        Position::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new(GameConfig::default());
        let state = engine.reset();

        assert_eq!(state.run_state, RunState::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.steps, 0);
        assert_eq!(state.apples_eaten, 0);
        assert_eq!(state.snake.len(), 6);
        assert_eq!(state.snake.direction, Direction::Right);
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();
        state.apple = Position::new(0, 0);
        let initial_head = state.snake.head();

        let outcome = engine.step(&mut state, Action::Continue);

        assert_eq!(outcome.collision, None);
        assert_eq!(state.steps, 1);
        assert_eq!(state.snake.head(), initial_head.moved_by(1, 0));
    }

    #[test]
    fn test_apple_consumption() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();

        // Place the apple directly in front of the head
        let head = state.snake.head();
        state.apple = head.moved_in_direction(state.snake.direction);
        let initial_length = state.snake.len();

        let outcome = engine.step(&mut state, Action::Continue);

        assert!(outcome.ate_apple);
        assert_eq!(state.score, 10);
        assert_eq!(state.apples_eaten, 1);
        assert_eq!(state.snake.len(), initial_length + 1);
    }

    #[test]
    fn test_apple_respawns_in_bounds() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();

        for _ in 0..50 {
            let head = state.snake.head();
            let old_apple = head.moved_in_direction(state.snake.direction);
            state.apple = old_apple;
            engine.step(&mut state, Action::Continue);

            assert!(state.is_in_bounds(state.apple));
            if state.is_game_over() {
                break;
            }
        }
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = GameState::new(
            Snake::new(Position::new(0, 5), Direction::Left, 3),
            Position::new(5, 5),
            10,
            10,
        );

        let outcome = engine.step(&mut state, Action::Continue);

        assert_eq!(outcome.collision, Some(CollisionType::Wall));
        assert_eq!(state.run_state, RunState::GameOver);
        assert_eq!(state.snake.head(), Position::new(-1, 5));
    }

    #[test]
    fn test_self_collision() {
        let mut engine = GameEngine::new(GameConfig::small());

        // Snake at (5, 5) going Right with length 5
        // Body: (5,5), (4,5), (3,5), (2,5), (1,5)
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 5);
        let mut state = GameState::new(snake, Position::new(8, 8), 10, 10);

        // Turn a tight loop back into the body:
        // Down: (5,6), (5,5), (4,5), (3,5), (2,5)
        engine.step(&mut state, Action::Turn(Direction::Down));
        // Left: (4,6), (5,6), (5,5), (4,5), (3,5)
        engine.step(&mut state, Action::Turn(Direction::Left));
        // Up: (4,5) - collides with body
        let outcome = engine.step(&mut state, Action::Turn(Direction::Up));

        assert_eq!(outcome.collision, Some(CollisionType::SelfCollision));
        assert_eq!(state.run_state, RunState::GameOver);
    }

    #[test]
    fn test_tail_chase_is_legal() {
        let mut engine = GameEngine::new(GameConfig::small());

        // A 2x2 loop: head at (5,5), tail at (5,6). Turning up moves the
        // head into the cell the tail vacates on the same tick.
        let snake = Snake {
            body: vec![
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(4, 6),
                Position::new(5, 6),
            ],
            direction: Direction::Right,
        };
        let mut state = GameState::new(snake, Position::new(8, 8), 10, 10);

        let outcome = engine.step(&mut state, Action::Turn(Direction::Down));

        assert_eq!(outcome.collision, None);
        assert_eq!(state.run_state, RunState::Running);
    }

    #[test]
    fn test_prevent_180_degree_turn() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();
        state.apple = Position::new(0, 0);
        assert_eq!(state.snake.direction, Direction::Right);
        let head = state.snake.head();

        // Try to turn 180 degrees (should be dropped)
        engine.step(&mut state, Action::Turn(Direction::Left));

        assert_eq!(state.snake.direction, Direction::Right);
        assert_eq!(state.snake.head(), head.moved_by(1, 0));
    }

    #[test]
    fn test_game_over_tick_is_noop() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();
        state.run_state = RunState::GameOver;
        let before = state.clone();

        let outcome = engine.step(&mut state, Action::Continue);

        assert_eq!(outcome, TickOutcome::nothing());
        assert_eq!(state, before);
    }

    #[test]
    fn test_paused_tick_is_noop() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();
        state.run_state = RunState::Paused;
        let before = state.clone();

        engine.step(&mut state, Action::Turn(Direction::Up));

        assert_eq!(state, before);
    }
}
