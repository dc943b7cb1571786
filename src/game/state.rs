use super::action::Direction;
use super::food::{ElectronSet, FoodSlot, OrbitalFood, OrbitalSet};
use super::rules::{FillState, FlashMessage, Phase, ProgressState};

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.reversed().delta();
        let body = (0..length.max(1) as i32)
            .map(|i| head.moved_by(dx * i, dy * i))
            .collect();

        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Turn unless the new heading would reverse into the neck
    pub fn turn(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.direction = direction;
        }
    }

    /// Cell the head moves into on the next step
    pub fn next_head(&self) -> Position {
        self.head().moved_in_direction(self.direction)
    }

    /// Check if a position is covered by any segment, tail included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Move snake in current direction, growing if should_grow is true
    pub fn move_snake(&mut self, should_grow: bool) {
        let new_head = self.next_head();
        self.body.insert(0, new_head);

        if !should_grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Complete game state, mutated only by the engine's step
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub phase: Phase,
    pub electrons: ElectronSet,
    pub progress: ProgressState,
    pub flash: Option<FlashMessage>,
    pub grid_width: usize,
    pub grid_height: usize,
    pub steps: u32,
}

impl GameState {
    /// Create a new game state in the seeking phase for the first orbital
    pub fn new(
        snake: Snake,
        orbitals: OrbitalSet,
        electrons: ElectronSet,
        grid_width: usize,
        grid_height: usize,
    ) -> Self {
        Self {
            snake,
            phase: Phase::Seeking { orbitals },
            electrons,
            progress: ProgressState::default(),
            flash: None,
            grid_width,
            grid_height,
            steps: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.progress.game_over
    }

    pub fn is_filling(&self) -> bool {
        self.phase.is_filling()
    }

    /// Orbitals on the board; empty while filling
    pub fn orbitals(&self) -> &[OrbitalFood] {
        self.phase.orbitals()
    }

    pub fn fill(&self) -> Option<&FillState> {
        self.phase.fill()
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }

    /// Snake cells plus every visible food item except `skip`.
    ///
    /// Items are excluded by slot, so two decoys sharing a label are still
    /// told apart.
    pub fn occupied_except(&self, skip: Option<FoodSlot>) -> Vec<Position> {
        let orbitals = self
            .orbitals()
            .iter()
            .enumerate()
            .filter(|(i, _)| skip != Some(FoodSlot::Orbital(*i)))
            .map(|(_, orbital)| orbital.position);
        let electrons = self
            .electrons
            .iter()
            .enumerate()
            .filter(|(i, _)| skip != Some(FoodSlot::Electron(*i)))
            .map(|(_, electron)| electron.position);

        self.snake
            .body
            .iter()
            .copied()
            .chain(orbitals)
            .chain(electrons)
            .collect()
    }

    /// Food slot whose item sits on `pos`; orbitals only count while seeking
    pub fn food_at(&self, pos: Position) -> (Option<usize>, Option<usize>) {
        let orbital = self.orbitals().iter().position(|o| o.position == pos);
        let electron = self.electrons.iter().position(|e| e.position == pos);
        (orbital, electron)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::food::{ElectronFood, OrbitalKind, Spin};
    use crate::game::orbital::OrbitalLabel;

    fn label(index: usize) -> OrbitalLabel {
        OrbitalLabel::from_index(index).unwrap()
    }

    fn sample_state() -> GameState {
        let orbitals = [
            OrbitalFood {
                position: Position::new(0, 0),
                label: label(0),
                kind: OrbitalKind::Correct,
            },
            OrbitalFood {
                position: Position::new(1, 0),
                label: label(4),
                kind: OrbitalKind::Decoy,
            },
            OrbitalFood {
                position: Position::new(2, 0),
                label: label(4),
                kind: OrbitalKind::Decoy,
            },
        ];
        let electrons = [Spin::Up, Spin::Down, Spin::Up, Spin::Down]
            .into_iter()
            .enumerate()
            .map(|(i, spin)| ElectronFood {
                position: Position::new(i as i32, 9),
                spin,
            })
            .collect::<Vec<_>>()
            .try_into()
            .unwrap();

        GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 3),
            orbitals,
            electrons,
            20,
            20,
        )
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.body[1], Position::new(4, 5));
        assert_eq!(snake.body[2], Position::new(3, 5));
    }

    #[test]
    fn test_snake_movement() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        snake.move_snake(false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));

        snake.move_snake(true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(7, 5));
    }

    #[test]
    fn test_snake_ignores_reverse_turn() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        snake.turn(Direction::Left);
        assert_eq!(snake.direction, Direction::Right);
        snake.turn(Direction::Up);
        assert_eq!(snake.direction, Direction::Up);
    }

    #[test]
    fn test_occupies_includes_tail() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(3, 5)));
        assert!(!snake.occupies(Position::new(10, 10)));
    }

    #[test]
    fn test_bounds_checking() {
        let state = sample_state();

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 19)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 20)));
    }

    #[test]
    fn test_occupied_except_skips_by_slot() {
        let state = sample_state();

        let all = state.occupied_except(None);
        assert_eq!(all.len(), 3 + 3 + 4);

        // Both decoys share a label; only the skipped slot disappears
        let without = state.occupied_except(Some(FoodSlot::Orbital(1)));
        assert_eq!(without.len(), 9);
        assert!(!without.contains(&Position::new(1, 0)));
        assert!(without.contains(&Position::new(2, 0)));

        let without = state.occupied_except(Some(FoodSlot::Electron(3)));
        assert!(!without.contains(&Position::new(3, 9)));
    }

    #[test]
    fn test_food_lookup() {
        let state = sample_state();
        assert_eq!(state.food_at(Position::new(2, 0)), (Some(2), None));
        assert_eq!(state.food_at(Position::new(1, 9)), (None, Some(1)));
        assert_eq!(state.food_at(Position::new(7, 7)), (None, None));
    }
}
