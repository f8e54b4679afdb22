use rand::Rng;
use rand::rngs::ThreadRng;

use super::{
    config::GameConfig,
    food::place_food,
    grid::Position,
    state::{CollisionType, GameState, RoundState},
};

/// What a single step did to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Snake moved, length unchanged
    Continue,
    /// Snake ate food and grew by one segment
    Ate,
    /// Snake hit a wall or itself; the round is over
    GameOver,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub outcome: TickOutcome,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// Set when this step raised the high score
    pub new_high_score: Option<u32>,
}

impl StepResult {
    fn outcome(outcome: TickOutcome) -> Self {
        Self {
            outcome,
            collision_type: None,
            new_high_score: None,
        }
    }

    fn collision(collision_type: CollisionType) -> Self {
        Self {
            outcome: TickOutcome::GameOver,
            collision_type: Some(collision_type),
            new_high_score: None,
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine<R = ThreadRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing food positions from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh running round
    pub fn reset(&mut self, high_score: u32) -> GameState {
        let grid = self.config.grid();
        let snake = self.config.spawn_snake();
        let food = place_food(&mut self.rng, &grid, snake.body());

        GameState::new(grid, snake, food, high_score)
    }

    /// Execute one step of the game
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        if !state.is_running() {
            return StepResult::outcome(TickOutcome::GameOver);
        }

        let new_head = state.snake.advance();
        state.steps += 1;

        if let Some(collision_type) = self.check_collision(state, new_head) {
            state.round = RoundState::Over;
            return StepResult::collision(collision_type);
        }

        state.snake.push_head(new_head);

        if new_head != state.food {
            state.snake.drop_tail();
            return StepResult::outcome(TickOutcome::Continue);
        }

        state.score += self.config.food_reward;
        let mut result = StepResult::outcome(TickOutcome::Ate);
        if state.score > state.high_score {
            state.high_score = state.score;
            result.new_high_score = Some(state.score);
        }
        state.food = place_food(&mut self.rng, &state.grid, state.snake.body());

        result
    }

    /// Check if the new head position causes a collision.
    ///
    /// Runs against the body before it moves, so the cell the tail is about to leave
    /// still counts as occupied.
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        if !state.grid.in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if state.snake.occupies(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }
}
