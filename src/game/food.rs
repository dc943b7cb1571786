use super::orbital::OrbitalLabel;
use super::state::Position;

/// Spin of an electron pellet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Up,
    Down,
}

impl Spin {
    pub fn arrow(&self) -> &'static str {
        match self {
            Spin::Up => "↑",
            Spin::Down => "↓",
        }
    }
}

/// Whether an orbital on the board is the one the player is looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitalKind {
    Correct,
    Decoy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitalFood {
    pub position: Position,
    pub label: OrbitalLabel,
    pub kind: OrbitalKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElectronFood {
    pub position: Position,
    pub spin: Spin,
}

/// The three orbitals shown while seeking; slot 0 holds the correct one
pub type OrbitalSet = [OrbitalFood; 3];

/// The four electrons that are always on the board
pub type ElectronSet = [ElectronFood; 4];

/// Addresses a single food item on the board by slot index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodSlot {
    Orbital(usize),
    Electron(usize),
}
