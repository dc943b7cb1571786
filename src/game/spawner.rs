use rand::Rng;
use rand::rngs::StdRng;

use super::food::{ElectronFood, ElectronSet, OrbitalFood, OrbitalKind, OrbitalSet, Spin};
use super::grid::{SpawnError, random_free_cell};
use super::orbital::OrbitalLabel;
use super::state::Position;

/// Places orbitals and electrons on free cells of the grid
pub struct Spawner {
    rng: StdRng,
    grid_width: usize,
    grid_height: usize,
}

impl Spawner {
    pub fn new(rng: StdRng, grid_width: usize, grid_height: usize) -> Self {
        Self {
            rng,
            grid_width,
            grid_height,
        }
    }

    /// Random cell not in `occupied`
    pub fn free_cell(&mut self, occupied: &[Position]) -> Result<Position, SpawnError> {
        random_free_cell(&mut self.rng, self.grid_width, self.grid_height, occupied)
    }

    /// Uniform pick among every label except `target`
    pub fn decoy_label(&mut self, target: OrbitalLabel) -> OrbitalLabel {
        let mut index = self.rng.gen_range(0..OrbitalLabel::COUNT - 1);
        if index >= target.index() {
            index += 1;
        }
        OrbitalLabel::from_index(index).unwrap_or(target)
    }

    /// The correct orbital for `target` in slot 0, followed by two decoys.
    ///
    /// Each placed item joins the exclusion set before the next one is placed,
    /// so the three never overlap each other or `occupied`.
    pub fn spawn_orbital_set(
        &mut self,
        target: OrbitalLabel,
        occupied: &[Position],
    ) -> Result<OrbitalSet, SpawnError> {
        let mut taken = occupied.to_vec();
        let first = self.decoy_label(target);
        let second = self.decoy_label(target);
        let mut orbitals = [
            (target, OrbitalKind::Correct),
            (first, OrbitalKind::Decoy),
            (second, OrbitalKind::Decoy),
        ]
        .map(|(label, kind)| OrbitalFood {
            position: Position::new(-1, -1),
            label,
            kind,
        });

        for orbital in orbitals.iter_mut() {
            orbital.position = self.free_cell(&taken)?;
            taken.push(orbital.position);
        }

        Ok(orbitals)
    }

    /// Two up and two down electrons, alternating, none overlapping
    pub fn spawn_electron_set(&mut self, occupied: &[Position]) -> Result<ElectronSet, SpawnError> {
        let mut taken = occupied.to_vec();
        let mut electrons = [Spin::Up, Spin::Down, Spin::Up, Spin::Down].map(|spin| ElectronFood {
            position: Position::new(-1, -1),
            spin,
        });

        for electron in electrons.iter_mut() {
            electron.position = self.free_cell(&taken)?;
            taken.push(electron.position);
        }

        Ok(electrons)
    }

    /// Move an eaten electron to a free cell; its spin stays the same
    pub fn respawn_electron(
        &mut self,
        electron: &mut ElectronFood,
        occupied: &[Position],
    ) -> Result<(), SpawnError> {
        electron.position = self.free_cell(occupied)?;
        Ok(())
    }

    /// Give an eaten decoy a fresh label other than `target` and a free cell
    pub fn respawn_decoy(
        &mut self,
        decoy: &mut OrbitalFood,
        target: OrbitalLabel,
        occupied: &[Position],
    ) -> Result<(), SpawnError> {
        decoy.label = self.decoy_label(target);
        decoy.position = self.free_cell(occupied)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn spawner(seed: u64) -> Spawner {
        Spawner::new(StdRng::seed_from_u64(seed), 24, 24)
    }

    fn snake_cells() -> Vec<Position> {
        vec![
            Position::new(12, 12),
            Position::new(11, 12),
            Position::new(10, 12),
        ]
    }

    #[test]
    fn test_decoy_label_never_matches_target() {
        let mut spawner = spawner(7);
        for target in OrbitalLabel::all() {
            for _ in 0..50 {
                assert_ne!(spawner.decoy_label(target), target);
            }
        }
    }

    #[test]
    fn test_decoy_label_covers_all_others() {
        let mut spawner = spawner(8);
        let target = OrbitalLabel::from_index(0).unwrap();
        let seen: HashSet<_> = (0..2000).map(|_| spawner.decoy_label(target)).collect();
        assert_eq!(seen.len(), OrbitalLabel::COUNT - 1);
    }

    #[test]
    fn test_orbital_set_layout() {
        let mut spawner = spawner(9);
        let target = OrbitalLabel::from_index(2).unwrap();
        let occupied = snake_cells();

        for _ in 0..100 {
            let set = spawner.spawn_orbital_set(target, &occupied).unwrap();
            assert_eq!(set[0].kind, OrbitalKind::Correct);
            assert_eq!(set[0].label, target);
            for decoy in &set[1..] {
                assert_eq!(decoy.kind, OrbitalKind::Decoy);
                assert_ne!(decoy.label, target);
            }

            let cells: HashSet<_> = set.iter().map(|o| o.position).collect();
            assert_eq!(cells.len(), 3);
            assert!(cells.iter().all(|c| !occupied.contains(c)));
        }
    }

    #[test]
    fn test_electron_set_layout() {
        let mut spawner = spawner(10);
        let occupied = snake_cells();

        for _ in 0..100 {
            let set = spawner.spawn_electron_set(&occupied).unwrap();
            let spins: Vec<_> = set.iter().map(|e| e.spin).collect();
            assert_eq!(spins, [Spin::Up, Spin::Down, Spin::Up, Spin::Down]);

            let cells: HashSet<_> = set.iter().map(|e| e.position).collect();
            assert_eq!(cells.len(), 4);
            assert!(cells.iter().all(|c| !occupied.contains(c)));
        }
    }

    #[test]
    fn test_respawn_decoy_rerolls_label() {
        let mut spawner = spawner(11);
        let target = OrbitalLabel::from_index(5).unwrap();
        let mut decoy = OrbitalFood {
            position: Position::new(0, 0),
            label: OrbitalLabel::from_index(6).unwrap(),
            kind: OrbitalKind::Decoy,
        };
        let occupied = snake_cells();

        for _ in 0..50 {
            spawner.respawn_decoy(&mut decoy, target, &occupied).unwrap();
            assert_ne!(decoy.label, target);
            assert!(!occupied.contains(&decoy.position));
            assert_eq!(decoy.kind, OrbitalKind::Decoy);
        }
    }

    #[test]
    fn test_orbital_set_fills_last_free_cells() {
        let mut spawner = Spawner::new(StdRng::seed_from_u64(12), 2, 2);
        let occupied = [Position::new(0, 0)];
        let target = OrbitalLabel::from_index(0).unwrap();

        let set = spawner.spawn_orbital_set(target, &occupied).unwrap();
        let cells: HashSet<_> = set.iter().map(|o| o.position).collect();
        let expected: HashSet<_> = [
            Position::new(1, 0),
            Position::new(0, 1),
            Position::new(1, 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(cells, expected);
    }
}
