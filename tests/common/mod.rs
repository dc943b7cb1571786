#![allow(dead_code)]

use orbital_snake::game::{
    Action, Direction, FillState, GameConfig, GameEngine, GameState, OrbitalLabel, Phase,
    Position, Snake, StepResult,
};

/// Engine on the default 24x24 board with a fixed seed
pub fn engine(seed: u64) -> GameEngine {
    GameEngine::new(GameConfig::default().with_seed(seed))
}

/// Fresh game with every item moved to the top and bottom rows, away from
/// the snake at (12,12), (11,12), (10,12) heading right
pub fn parked_game(engine: &mut GameEngine) -> GameState {
    let mut state = engine.reset().unwrap();
    park_items(&mut state);
    state
}

/// Move orbitals to the top row and electrons to the bottom row
pub fn park_items(state: &mut GameState) {
    if let Phase::Seeking { orbitals } = &mut state.phase {
        for (i, orbital) in orbitals.iter_mut().enumerate() {
            orbital.position = Position::new(i as i32, 0);
        }
    }
    for (i, electron) in state.electrons.iter_mut().enumerate() {
        electron.position = Position::new(i as i32, 23);
    }
}

/// Put a short snake back at (5,5) heading right
pub fn reset_snake(state: &mut GameState) {
    state.snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
}

/// Cell the snake head enters on the next straight step
pub fn ahead(state: &GameState) -> Position {
    state.snake.next_head()
}

pub fn label(name: &str) -> OrbitalLabel {
    OrbitalLabel::parse(name).unwrap()
}

/// Switch the board to filling `name` with the given progress
pub fn filling(state: &mut GameState, name: &str, filled_up: u8, filled_down: u8) {
    let mut fill = FillState::new(label(name));
    fill.filled_up = filled_up;
    fill.filled_down = filled_down;
    state.phase = Phase::Filling(fill);
    state.progress.current_orbital_index = label(name).index();
}

/// Put the electron in `slot` right in front of the head and step onto it.
/// The eaten electron must come back somewhere off the snake.
pub fn eat_electron(engine: &mut GameEngine, state: &mut GameState, slot: usize) -> StepResult {
    park_items(state);
    state.electrons[slot].position = ahead(state);
    let result = engine.step(state, Action::Continue).unwrap();
    assert_respawned_off_snake(state, slot);
    result
}

pub fn assert_respawned_off_snake(state: &GameState, slot: usize) {
    let position = state.electrons[slot].position;
    assert!(
        !state.snake.occupies(position),
        "electron {slot} left under the snake at {position:?}"
    );
    assert!(state.is_in_bounds(position));
}

/// Put the orbital in `slot` right in front of the head and step onto it
pub fn eat_orbital(engine: &mut GameEngine, state: &mut GameState, slot: usize) -> StepResult {
    park_items(state);
    let cell = ahead(state);
    if let Phase::Seeking { orbitals } = &mut state.phase {
        orbitals[slot].position = cell;
    }
    engine.step(state, Action::Continue).unwrap()
}
