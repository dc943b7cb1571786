use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Items on the board at any time while orbitals are visible: three orbitals
/// and four electrons.
const MAX_FOOD_ITEMS: usize = 7;

/// Smallest board side accepted. A flawless game ends with the snake 137
/// segments longer than it started, so 16x16 leaves room for that run plus
/// a good number of mistakes before free cells run out.
pub const MIN_GRID_SIDE: usize = 16;

/// Largest board side accepted; the renderer draws two columns per cell.
pub const MAX_GRID_SIDE: usize = 100;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Simulation steps per second
    pub ticks_per_second: u32,

    // Scoring
    /// Points lost for a decoy orbital, an out-of-phase electron or a pairing error
    pub penalty: i32,
    /// Points gained for completely filling an orbital
    pub fill_bonus: i32,

    /// How many ticks a flash message stays on screen
    pub flash_ticks: u32,
    /// Fixed seed for item placement; random when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 24,
            grid_height: 24,
            initial_snake_length: 3,
            ticks_per_second: 10,
            penalty: 10,
            fill_bonus: 15,
            flash_ticks: 5,
            seed: None,
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

    /// Create a small grid for engine tests; below the minimum `validate` accepts
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Same configuration with a fixed placement seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load a configuration from a JSON file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to deserialize config")?;
        Ok(config)
    }

    /// Number of cells on the board
    pub fn cell_count(&self) -> usize {
        self.grid_width * self.grid_height
    }

    /// Wall-clock time between two simulation steps
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.ticks_per_second.max(1)))
    }

    /// Reject configurations the engine cannot run
    pub fn validate(&self) -> Result<()> {
        ensure!(self.ticks_per_second > 0, "tick rate must be positive");
        for (name, side) in [("width", self.grid_width), ("height", self.grid_height)] {
            ensure!(
                (MIN_GRID_SIDE..=MAX_GRID_SIDE).contains(&side),
                "grid {name} must be between {MIN_GRID_SIDE} and {MAX_GRID_SIDE} cells, got {side}"
            );
        }
        ensure!(
            self.initial_snake_length > 0,
            "snake needs at least one segment"
        );
        if self.initial_snake_length > self.grid_width / 2 {
            bail!(
                "snake of length {} does not fit in a grid {} cells wide",
                self.initial_snake_length,
                self.grid_width
            );
        }
        ensure!(
            self.cell_count() > self.initial_snake_length + MAX_FOOD_ITEMS,
            "grid of {}x{} is too small for the snake and its food",
            self.grid_width,
            self.grid_height
        );
        Ok(())
    }
}
