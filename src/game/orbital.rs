//! Orbital labels and subshell capacities
//!
//! The board only ever deals with the 19 orbitals of the Aufbau filling order,
//! so labels are indices into [`ORBITAL_ORDER`] rather than strings.

use std::fmt;

/// Subshell type of an orbital
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subshell {
    S,
    P,
    D,
    F,
}

/// Maximum spin-up and spin-down electrons a subshell holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubshellCapacity {
    pub max_up: u8,
    pub max_down: u8,
}

impl Subshell {
    /// Pauli exclusion: one up and one down electron per orbital of the subshell
    pub fn capacity(&self) -> SubshellCapacity {
        let slots = match self {
            Subshell::S => 1,
            Subshell::P => 3,
            Subshell::D => 5,
            Subshell::F => 7,
        };
        SubshellCapacity {
            max_up: slots,
            max_down: slots,
        }
    }

    /// Hund's rule applies to every subshell with more than one orbital
    pub fn requires_up_first(&self) -> bool {
        !matches!(self, Subshell::S)
    }

    pub fn symbol(&self) -> char {
        match self {
            Subshell::S => 's',
            Subshell::P => 'p',
            Subshell::D => 'd',
            Subshell::F => 'f',
        }
    }
}

/// Aufbau filling order as (principal level, subshell)
pub const ORBITAL_ORDER: [(u8, Subshell); 19] = [
    (1, Subshell::S),
    (2, Subshell::S),
    (2, Subshell::P),
    (3, Subshell::S),
    (3, Subshell::P),
    (4, Subshell::S),
    (3, Subshell::D),
    (4, Subshell::P),
    (5, Subshell::S),
    (4, Subshell::D),
    (5, Subshell::P),
    (6, Subshell::S),
    (4, Subshell::F),
    (5, Subshell::D),
    (6, Subshell::P),
    (7, Subshell::S),
    (5, Subshell::F),
    (6, Subshell::D),
    (7, Subshell::P),
];

/// One entry of [`ORBITAL_ORDER`], e.g. "3d"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrbitalLabel(usize);

impl OrbitalLabel {
    /// Number of labels in the filling order
    pub const COUNT: usize = ORBITAL_ORDER.len();

    /// "1s", where every game starts
    pub const FIRST: OrbitalLabel = OrbitalLabel(0);

    /// Label at a position of the filling order, if in range
    pub fn from_index(index: usize) -> Option<Self> {
        (index < Self::COUNT).then_some(Self(index))
    }

    /// Position of this label in the filling order
    pub fn index(&self) -> usize {
        self.0
    }

    pub fn level(&self) -> u8 {
        ORBITAL_ORDER[self.0].0
    }

    pub fn subshell(&self) -> Subshell {
        ORBITAL_ORDER[self.0].1
    }

    pub fn capacity(&self) -> SubshellCapacity {
        self.subshell().capacity()
    }

    /// Look up a label by its name, e.g. "4f"
    pub fn parse(name: &str) -> Option<Self> {
        Self::all().find(|label| label.to_string() == name)
    }

    /// Every label in filling order
    pub fn all() -> impl Iterator<Item = OrbitalLabel> {
        (0..Self::COUNT).map(OrbitalLabel)
    }
}

impl fmt::Display for OrbitalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.level(), self.subshell().symbol())
    }
}
