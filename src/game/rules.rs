//! Filling rules for the orbital progression
//!
//! The board alternates between two phases. While [`Phase::Seeking`] the
//! player hunts for the next orbital of the Aufbau order among two decoys.
//! Eating it switches to [`Phase::Filling`], where electrons have to be placed
//! according to Pauli exclusion and Hund's rule until the orbital is full.

use super::food::{OrbitalFood, OrbitalKind, OrbitalSet, Spin};
use super::orbital::OrbitalLabel;

/// Progress of the orbital currently being filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillState {
    pub active: OrbitalLabel,
    pub max_up: u8,
    pub max_down: u8,
    pub filled_up: u8,
    pub filled_down: u8,
}

/// What happened to an electron placed into a [`FillState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// Slot taken, orbital not full yet
    Accepted,
    /// Slot taken and every up and down slot is now occupied
    Full,
    /// Placement broke Pauli or Hund; all progress on the orbital was dropped
    PairingError,
}

impl FillState {
    pub fn new(active: OrbitalLabel) -> Self {
        let capacity = active.capacity();
        Self {
            active,
            max_up: capacity.max_up,
            max_down: capacity.max_down,
            filled_up: 0,
            filled_down: 0,
        }
    }

    /// Whether an electron of `spin` may go in next.
    ///
    /// `s` orbitals only check capacity. For `p`, `d` and `f` every up slot
    /// must be taken before the first down electron.
    pub fn accepts(&self, spin: Spin) -> bool {
        match spin {
            Spin::Up => self.filled_up < self.max_up,
            Spin::Down => {
                let up_done =
                    !self.active.subshell().requires_up_first() || self.filled_up == self.max_up;
                up_done && self.filled_down < self.max_down
            }
        }
    }

    pub fn place(&mut self, spin: Spin) -> FillOutcome {
        if !self.accepts(spin) {
            self.reset();
            return FillOutcome::PairingError;
        }

        match spin {
            Spin::Up => self.filled_up += 1,
            Spin::Down => self.filled_down += 1,
        }

        if self.is_full() {
            FillOutcome::Full
        } else {
            FillOutcome::Accepted
        }
    }

    pub fn is_full(&self) -> bool {
        self.filled_up == self.max_up && self.filled_down == self.max_down
    }

    pub fn reset(&mut self) {
        self.filled_up = 0;
        self.filled_down = 0;
    }
}

/// Rule phase of the board
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Orbitals visible, waiting for the correct one to be eaten
    Seeking { orbitals: OrbitalSet },
    /// Orbitals hidden, electrons go into the active orbital
    Filling(FillState),
    /// Every orbital of the order has been filled
    Complete,
}

impl Phase {
    pub fn is_filling(&self) -> bool {
        matches!(self, Phase::Filling(_))
    }

    /// Orbitals currently on the board, empty unless seeking
    pub fn orbitals(&self) -> &[OrbitalFood] {
        match self {
            Phase::Seeking { orbitals } => orbitals.as_slice(),
            _ => &[],
        }
    }

    pub fn fill(&self) -> Option<&FillState> {
        match self {
            Phase::Filling(fill) => Some(fill),
            _ => None,
        }
    }

    /// The correct orbital on the board, if seeking
    pub fn target(&self) -> Option<OrbitalLabel> {
        self.orbitals()
            .iter()
            .find(|orbital| orbital.kind == OrbitalKind::Correct)
            .map(|orbital| orbital.label)
    }
}

/// Score and position in the orbital order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressState {
    /// Index into the filling order of the orbital to find or fill next
    pub current_orbital_index: usize,
    pub score: i32,
    /// Orbitals eaten, decoys included
    pub orbitals_eaten: u32,
    pub game_over: bool,
    pub win: bool,
}

impl ProgressState {
    /// Orbital the player is working towards, `None` once the order is done
    pub fn target(&self) -> Option<OrbitalLabel> {
        OrbitalLabel::from_index(self.current_orbital_index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Reward,
    Penalty,
}

/// Short-lived feedback shown in the side panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub text: String,
    pub tone: Tone,
    pub remaining_ticks: u32,
}

impl FlashMessage {
    pub fn new(text: impl Into<String>, tone: Tone, ticks: u32) -> Self {
        Self {
            text: text.into(),
            tone,
            remaining_ticks: ticks,
        }
    }

    /// Count down one tick; returns false once the message has expired
    pub fn tick(&mut self) -> bool {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.remaining_ticks > 0
    }
}

/// Gameplay event produced by a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleEvent {
    /// The correct orbital was eaten, filling starts
    OrbitalFound(OrbitalLabel),
    /// A decoy was eaten
    WrongOrbital(OrbitalLabel),
    /// An electron was eaten while no orbital was being filled
    ElectronTooEarly(Spin),
    /// An electron went into the active orbital
    ElectronPlaced(Spin),
    /// An electron broke the pairing rules and the fill was discarded
    PairingError(Spin),
    /// The active orbital is full and the order advanced
    OrbitalFull(OrbitalLabel),
    /// The last orbital of the order was filled
    Won,
}
