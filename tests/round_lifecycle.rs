//! Full rounds through the public API: a greedy pilot plays several rounds against a
//! file-backed high score store.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

use grid_snake::game::{
    Direction, GameConfig, GameEngine, GameEvent, GameLoop, Position, RoundState, Snapshot,
    TickOutcome,
};
use grid_snake::persistence::{HighScoreStore, JsonFileStore};

const TICK: Duration = Duration::from_millis(100);
const MAX_TICKS_PER_ROUND: usize = 2_000;

/// Steer toward the food, skipping moves that would end the round right away
fn pilot(snapshot: &Snapshot<'_>, current: Direction) -> Direction {
    let head = snapshot.body[0];
    let food = snapshot.food;

    let mut preferred = Vec::new();
    if food.x > head.x {
        preferred.push(Direction::Right);
    } else if food.x < head.x {
        preferred.push(Direction::Left);
    }
    if food.y > head.y {
        preferred.push(Direction::Down);
    } else if food.y < head.y {
        preferred.push(Direction::Up);
    }
    preferred.extend([
        current,
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ]);

    let safe = |dir: &Direction| {
        let next: Position = head.moved_in_direction(*dir);
        !current.is_opposite(*dir) && snapshot.grid.in_bounds(next) && !snapshot.body.contains(&next)
    };

    preferred.into_iter().find(safe).unwrap_or(current)
}

#[test]
fn high_score_survives_rounds_and_is_persisted() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("high_score.json");

    let engine = GameEngine::with_rng(GameConfig::default(), StdRng::seed_from_u64(11));
    let mut game = GameLoop::with_engine(engine, JsonFileStore::new(&path));
    assert_eq!(game.snapshot().high_score, 0);

    let mut best_seen = 0;
    let mut finals = Vec::new();

    for _ in 0..5 {
        game.start();
        assert_eq!(game.snapshot().score, 0);
        assert_eq!(game.snapshot().body.len(), 3);

        for _ in 0..MAX_TICKS_PER_ROUND {
            let direction = pilot(&game.snapshot(), game.state().snake.current_direction());
            game.set_direction(direction);

            let length_before = game.snapshot().body.len();
            let high_before = game.snapshot().high_score;
            let Some(result) = game.tick(TICK) else {
                continue;
            };

            let snapshot = game.snapshot();
            assert!(snapshot.high_score >= high_before);
            assert!(snapshot.high_score >= snapshot.score);
            assert!(!snapshot.body.contains(&snapshot.food));

            match result.outcome {
                TickOutcome::Continue => assert_eq!(snapshot.body.len(), length_before),
                TickOutcome::Ate => assert_eq!(snapshot.body.len(), length_before + 1),
                TickOutcome::GameOver => break,
            }
        }

        best_seen = best_seen.max(game.snapshot().score);
        assert_eq!(game.snapshot().high_score, best_seen);

        for event in game.drain_events() {
            if let GameEvent::Over { final_score } = event {
                finals.push(final_score);
            }
        }
    }

    assert!(!finals.is_empty());
    assert!(best_seen > 0, "pilot never ate anything");
    assert_eq!(JsonFileStore::new(&path).load(), best_seen);
}

#[test]
fn stored_high_score_is_loaded_and_only_raised() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("high_score.json");
    let mut seed_store = JsonFileStore::new(&path);
    seed_store.save(10_000).unwrap();

    let engine = GameEngine::with_rng(GameConfig::default(), StdRng::seed_from_u64(5));
    let mut game = GameLoop::with_engine(engine, JsonFileStore::new(&path));
    assert_eq!(game.snapshot().high_score, 10_000);

    game.start();
    while game.round() == RoundState::Running {
        game.tick(TICK);
    }

    assert_eq!(game.snapshot().high_score, 10_000);
    assert_eq!(JsonFileStore::new(&path).load(), 10_000);
}
