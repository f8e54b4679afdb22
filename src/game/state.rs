use super::direction::Direction;
use super::grid::{Grid, Position};
use super::snake::Snake;

/// Lifecycle of one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundState {
    #[default]
    NotStarted,
    Running,
    Over,
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub high_score: u32,
    pub steps: u32,
    pub round: RoundState,
}

impl GameState {
    /// Create a running round with a zero score
    pub fn new(grid: Grid, snake: Snake, food: Position, high_score: u32) -> Self {
        Self {
            grid,
            snake,
            food,
            score: 0,
            high_score,
            steps: 0,
            round: RoundState::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.round == RoundState::Running
    }

    /// Forward a direction intent to the snake. Ignored unless the round is running.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if !self.is_running() {
            return false;
        }
        self.snake.set_pending_direction(direction)
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }
}
