use rand::Rng;
use std::collections::HashSet;
use std::fmt;

use super::state::Position;

/// Raised when an item has to be placed on a board with no free cell left.
/// The item counts are tiny compared to the grid, so this signals a broken
/// configuration or a logic bug rather than a gameplay situation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpawnError {
    GridFull { occupied: usize, cells: usize },
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridFull { occupied, cells } => {
                write!(f, "no free cell left ({occupied} of {cells} occupied)")
            }
        }
    }
}

impl std::error::Error for SpawnError {}

/// Draw a cell uniformly from the `width` x `height` grid, skipping `occupied`.
///
/// Retries until it hits a free cell, so it only returns an error when every
/// cell is taken.
pub fn random_free_cell<R: Rng>(
    rng: &mut R,
    width: usize,
    height: usize,
    occupied: &[Position],
) -> Result<Position, SpawnError> {
    let cells = width * height;
    let taken: HashSet<Position> = occupied
        .iter()
        .copied()
        .filter(|pos| {
            pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < width && (pos.y as usize) < height
        })
        .collect();

    debug_assert!(taken.len() < cells, "free-cell search on a full grid");
    if taken.len() >= cells {
        return Err(SpawnError::GridFull {
            occupied: taken.len(),
            cells,
        });
    }

    loop {
        let x = rng.gen_range(0..width) as i32;
        let y = rng.gen_range(0..height) as i32;
        let pos = Position::new(x, y);

        if !taken.contains(&pos) {
            return Ok(pos);
        }
    }
}
