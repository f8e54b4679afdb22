use rand::Rng;
use rand::rngs::ThreadRng;
use std::time::Duration;

use super::{
    config::GameConfig,
    direction::Direction,
    engine::{GameEngine, StepResult, TickOutcome},
    grid::{Grid, Position},
    state::{GameState, RoundState},
};
use crate::persistence::HighScoreStore;

/// Notifications for whoever shows the start and game-over overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A round began; hide any overlay
    Started,
    /// The round ended with this score
    Over { final_score: u32 },
}

/// Read-only view of the round for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<'a> {
    pub grid: Grid,
    pub score: u32,
    pub high_score: u32,
    pub body: &'a [Position],
    pub food: Position,
    pub round: RoundState,
}

/// Fixed-rate driver around the engine.
///
/// The host calls [`GameLoop::tick`] once per frame with the time since the previous
/// frame. Simulation steps happen at most once per call, whenever a full tick interval
/// has accumulated; leftover time is discarded rather than replayed.
pub struct GameLoop<S, R = ThreadRng> {
    engine: GameEngine<R>,
    state: GameState,
    store: S,
    tick_interval: Duration,
    accumulator: Duration,
    events: Vec<GameEvent>,
}

impl<S: HighScoreStore> GameLoop<S> {
    pub fn new(config: GameConfig, store: S) -> Self {
        Self::with_engine(GameEngine::new(config), store)
    }
}

impl<S: HighScoreStore, R: Rng> GameLoop<S, R> {
    /// Wrap an engine. The round stays `NotStarted` until [`GameLoop::start`].
    pub fn with_engine(mut engine: GameEngine<R>, store: S) -> Self {
        let high_score = store.load();
        let tick_interval = engine.config().tick_interval();

        let mut state = engine.reset(high_score);
        state.round = RoundState::NotStarted;

        Self {
            engine,
            state,
            store,
            tick_interval,
            accumulator: Duration::ZERO,
            events: Vec::new(),
        }
    }

    /// Begin a fresh round: zero score, spawn snake, new food.
    pub fn start(&mut self) {
        self.state = self.engine.reset(self.state.high_score);
        self.accumulator = Duration::ZERO;
        self.events.push(GameEvent::Started);

        tracing::info!(high_score = self.state.high_score, "Round started");
    }

    /// Same as [`GameLoop::start`]; valid from any round state.
    pub fn restart(&mut self) {
        self.start();
    }

    /// Buffer a direction for the next step. Ignored unless a round is running.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        self.state.set_pending_direction(direction)
    }

    /// Advance the clock by `elapsed`, stepping the simulation at most once.
    pub fn tick(&mut self, elapsed: Duration) -> Option<StepResult> {
        if !self.state.is_running() {
            return None;
        }

        self.accumulator += elapsed;
        if self.accumulator < self.tick_interval {
            return None;
        }
        self.accumulator = Duration::ZERO;

        let result = self.engine.step(&mut self.state);

        if let Some(high_score) = result.new_high_score {
            tracing::debug!(high_score, "New high score");
            if let Err(e) = self.store.save(high_score) {
                tracing::warn!(error = %e, "Failed to persist high score");
            }
        }

        match result.outcome {
            TickOutcome::Ate => {
                tracing::debug!(
                    score = self.state.score,
                    length = self.state.snake.len(),
                    "Food eaten"
                );
            }
            TickOutcome::GameOver => {
                let final_score = self.state.score;
                tracing::info!(
                    final_score,
                    steps = self.state.steps,
                    collision = ?result.collision_type,
                    "Round over"
                );
                self.events.push(GameEvent::Over { final_score });
            }
            TickOutcome::Continue => {}
        }

        Some(result)
    }

    pub fn round(&self) -> RoundState {
        self.state.round
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.state.grid,
            score: self.state.score,
            high_score: self.state.high_score,
            body: self.state.snake.body(),
            food: self.state.food,
            round: self.state.round,
        }
    }

    /// Take the overlay events queued since the last call
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    #[cfg(test)]
    fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
