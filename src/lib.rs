//! Orbital Snake - a Snake game that teaches electron configuration
//!
//! The snake has to eat orbitals in Aufbau order and then fill each one with
//! spin-up and spin-down electrons following Pauli exclusion and Hund's rule.
//!
//! This library provides:
//! - Core game rules and simulation (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
