use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::grid::{Grid, Position};
use super::snake::Snake;

/// Environment variable naming a TOML config file
pub const CONFIG_ENV: &str = "GRID_SNAKE_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/snake.toml";
/// Largest supported grid side
pub const MAX_TILE_COUNT: usize = 1024;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of tiles along each side of the square grid
    pub tile_count: usize,
    /// Terminal columns used to draw one tile
    pub cell_size: u16,
    /// Head position of a freshly spawned snake
    pub spawn_x: i32,
    pub spawn_y: i32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Points awarded per food eaten
    pub food_reward: u32,
    /// Time between simulation steps
    pub tick_interval_ms: u64,
    /// Time between rendered frames
    pub frame_interval_ms: u64,
    /// Where the high score is kept
    pub high_score_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: 25,
            cell_size: 2,
            spawn_x: 10,
            spawn_y: 10,
            initial_snake_length: 3,
            food_reward: 10,
            tick_interval_ms: 100,
            frame_interval_ms: 16,
            high_score_path: PathBuf::from("grid-snake-high-score.json"),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size
    pub fn new(tile_count: usize) -> Self {
        Self {
            tile_count,
            ..Default::default()
        }
    }

    /// Read a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse config {:?}", path))
    }

    /// Load config from an explicit path, or from `$GRID_SNAKE_CONFIG`, or from
    /// `config/snake.toml`, falling back to defaults.
    ///
    /// An explicit path that cannot be read is an error; the implicit locations are
    /// optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::from_file(Path::new(&path));
        }
        let default_path = Path::new(DEFAULT_CONFIG_PATH);
        if default_path.exists() {
            return Self::from_file(default_path);
        }
        Ok(Self::default())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.tile_count, self.cell_size)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// The snake every round starts with, heading right
    pub fn spawn_snake(&self) -> Snake {
        Snake::new(
            Position::new(self.spawn_x, self.spawn_y),
            Direction::Right,
            self.initial_snake_length,
        )
    }

    /// Check the configuration describes a playable round
    pub fn validate(&self) -> Result<(), String> {
        if self.tile_count == 0 {
            return Err("tile_count must be at least 1".to_string());
        }

        if self.tile_count > MAX_TILE_COUNT {
            return Err(format!(
                "tile_count must be at most {MAX_TILE_COUNT}, got {}",
                self.tile_count
            ));
        }

        if self.cell_size == 0 {
            return Err("cell_size must be at least 1".to_string());
        }

        if self.initial_snake_length == 0 {
            return Err("initial_snake_length must be at least 1".to_string());
        }

        let grid = self.grid();
        let snake = self.spawn_snake();
        if let Some(pos) = snake.body().iter().find(|p| !grid.in_bounds(**p)) {
            return Err(format!(
                "spawn snake segment ({}, {}) lies outside the {}x{} grid",
                pos.x, pos.y, self.tile_count, self.tile_count
            ));
        }

        if snake.len() >= grid.cell_count() {
            return Err(format!(
                "initial_snake_length ({}) leaves no room for food",
                self.initial_snake_length
            ));
        }

        if self.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be positive".to_string());
        }

        if self.frame_interval_ms == 0 {
            return Err("frame_interval_ms must be positive".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.tile_count, 25);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.food_reward, 10);
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_spawn_snake_matches_classic_start() {
        let snake = GameConfig::default().spawn_snake();
        assert_eq!(
            snake.body(),
            &[
                Position::new(10, 10),
                Position::new(9, 10),
                Position::new(8, 10)
            ]
        );
        assert_eq!(snake.current_direction(), Direction::Right);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: GameConfig = toml::from_str("tile_count = 30\ntick_interval_ms = 80").unwrap();
        assert_eq!(config.tile_count, 30);
        assert_eq!(config.tick_interval_ms, 80);
        assert_eq!(config.food_reward, 10);
        assert_eq!(config.spawn_x, 10);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("snake.toml");
        std::fs::write(&path, "tile_count = 15\nfood_reward = 5\n").unwrap();

        let config = GameConfig::load(Some(&path)).unwrap();
        assert_eq!(config.tile_count, 15);
        assert_eq!(config.food_reward, 5);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(GameConfig::load(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn test_validate_rejects_spawn_off_grid() {
        let config = GameConfig::new(10);
        let err = config.validate().unwrap_err();
        assert!(err.contains("outside"), "{err}");

        let config = GameConfig {
            spawn_x: 5,
            spawn_y: 5,
            ..GameConfig::new(10)
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_grid() {
        let config = GameConfig::new(i32::MAX as usize + 25);
        let err = config.validate().unwrap_err();
        assert!(err.contains("at most"), "{err}");

        let config = GameConfig::new(usize::MAX);
        assert!(config.validate().unwrap_err().contains("at most"));

        assert!(GameConfig::new(MAX_TILE_COUNT).validate().is_ok());
        assert!(GameConfig::new(MAX_TILE_COUNT + 1).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let mut config = GameConfig::default();
        config.tick_interval_ms = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.tile_count = 0;
        assert!(config.validate().is_err());
    }
}
