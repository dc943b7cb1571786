//! Core game logic for Orbital Snake
//!
//! This module contains all the game rules without any I/O or rendering
//! dependencies, so a whole game can be driven headlessly through
//! [`GameEngine::step`].

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod orbital;
pub mod rules;
pub mod spawner;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use food::{ElectronFood, FoodSlot, OrbitalFood, OrbitalKind, Spin};
pub use grid::{SpawnError, random_free_cell};
pub use orbital::{ORBITAL_ORDER, OrbitalLabel, Subshell, SubshellCapacity};
pub use rules::{FillOutcome, FillState, FlashMessage, Phase, ProgressState, RuleEvent, Tone};
pub use spawner::Spawner;
pub use state::{CollisionType, GameState, Position, Snake};
