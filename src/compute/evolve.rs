//! Generation transitions.
//!
//! Two evaluation strategies produce the same successor grid:
//!
//! - **Full**: every cell is evaluated. This is the reference model.
//! - **Frontier**: only live cells and their dead neighbors are evaluated. A cell with no
//!   live neighbor and no life of its own cannot change state, so everything outside
//!   the frontier stays dead.
//!
//! Both write into a caller-provided `next` buffer so the engine can double-buffer without
//! allocating per generation.

use serde::{Deserialize, Serialize};

use super::{Grid, next_state};

/// Which cells are evaluated each generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStrategy {
    /// Evaluate every cell of the grid.
    Full,
    /// Evaluate live cells and their dead neighbors only.
    #[default]
    Frontier,
}

/// Reusable scratch state for frontier evaluation.
///
/// `marked` deduplicates dead candidates; it is cleared again after every pass so the
/// buffer can be reused without a full fill.
#[derive(Debug, Clone)]
pub struct Frontier {
    marked: Vec<bool>,
    candidates: Vec<usize>,
}

impl Frontier {
    /// Allocate scratch for a grid with `len` cells.
    pub fn new(len: usize) -> Self {
        Self {
            marked: vec![false; len],
            candidates: Vec::new(),
        }
    }

    /// Number of dead candidates collected by the last pass.
    pub fn last_candidates(&self) -> usize {
        self.candidates.len()
    }

    fn reset(&mut self) {
        for &idx in &self.candidates {
            self.marked[idx] = false;
        }
        self.candidates.clear();
    }
}

/// Compute the successor of `current` into `next` by evaluating every cell.
pub fn evolve_full(current: &Grid, next: &mut Grid) {
    debug_assert_eq!(current.len(), next.len());

    for idx in 0..current.len() {
        let alive = current.is_alive(idx);
        next.set_idx(idx, next_state(alive, current.live_neighbors(idx)));
    }
}

/// Compute the successor of `current` into `next` by evaluating only the frontier.
pub fn evolve_frontier(current: &Grid, next: &mut Grid, frontier: &mut Frontier) {
    debug_assert_eq!(current.len(), next.len());
    debug_assert_eq!(current.len(), frontier.marked.len());

    next.clear();
    frontier.reset();

    // Live cells: apply survival, collect dead neighbors as birth candidates.
    for idx in current.live_indices() {
        let mut live = 0u8;
        for n in current.neighbors(idx) {
            if current.is_alive(n) {
                live += 1;
            } else if !frontier.marked[n] {
                frontier.marked[n] = true;
                frontier.candidates.push(n);
            }
        }
        if next_state(true, live) {
            next.set_idx(idx, true);
        }
    }

    // Dead candidates: apply birth.
    for &idx in &frontier.candidates {
        if next_state(false, current.live_neighbors(idx)) {
            next.set_idx(idx, true);
        }
    }
}

/// Compute the successor of `grid` into a freshly allocated grid.
pub fn next_generation(grid: &Grid, strategy: UpdateStrategy) -> Grid {
    let mut next = grid.clone();
    match strategy {
        UpdateStrategy::Full => evolve_full(grid, &mut next),
        UpdateStrategy::Frontier => {
            let mut frontier = Frontier::new(grid.len());
            evolve_frontier(grid, &mut next, &mut frontier);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid_with(width: usize, height: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(r, c) in live {
            grid.set(r, c, true).unwrap();
        }
        grid
    }

    fn both(grid: &Grid) -> (Grid, Grid) {
        (
            next_generation(grid, UpdateStrategy::Full),
            next_generation(grid, UpdateStrategy::Frontier),
        )
    }

    #[test]
    fn test_dead_grid_stays_dead() {
        let grid = Grid::new(6, 4).unwrap();
        let (full, frontier) = both(&grid);
        assert!(full.is_all_dead());
        assert!(frontier.is_all_dead());
    }

    #[test]
    fn test_birth_from_three_neighbors() {
        let grid = grid_with(5, 5, &[(1, 1), (1, 3), (3, 2)]);
        let (full, frontier) = both(&grid);
        assert_eq!(full.get(2, 2), Ok(true));
        assert_eq!(full, frontier);
    }

    #[test]
    fn test_blinker_in_corner_clipped_by_edge() {
        // Horizontal blinker on the top row: the cells above do not exist.
        let grid = grid_with(5, 5, &[(0, 1), (0, 2), (0, 3)]);
        let (full, frontier) = both(&grid);
        let expected = grid_with(5, 5, &[(0, 2), (1, 2)]);
        assert_eq!(full, expected);
        assert_eq!(frontier, expected);
    }

    #[test]
    fn test_corner_block_is_stable() {
        let grid = grid_with(4, 4, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        let (full, frontier) = both(&grid);
        assert_eq!(full, grid);
        assert_eq!(frontier, grid);
    }

    #[test]
    fn test_frontier_scratch_reused_across_passes() {
        let mut frontier = Frontier::new(25);
        let mut a = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let mut b = Grid::new(5, 5).unwrap();

        for _ in 0..6 {
            evolve_frontier(&a, &mut b, &mut frontier);
            assert_eq!(b, next_generation(&a, UpdateStrategy::Full));
            std::mem::swap(&mut a, &mut b);
        }
        assert!(frontier.last_candidates() > 0);
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1usize..24, 1usize..24).prop_flat_map(|(w, h)| {
            proptest::collection::vec(proptest::bool::weighted(0.35), w * h).prop_map(
                move |cells| {
                    let mut grid = Grid::new(w, h).unwrap();
                    for (i, alive) in cells.into_iter().enumerate() {
                        grid.set_idx(i, alive);
                    }
                    grid
                },
            )
        })
    }

    proptest! {
        #[test]
        fn prop_frontier_matches_full(grid in arb_grid()) {
            let (full, frontier) = both(&grid);
            prop_assert_eq!(full, frontier);
        }

        #[test]
        fn prop_frontier_matches_full_over_generations(grid in arb_grid(), steps in 1usize..8) {
            let mut full = grid.clone();
            let mut fast = grid;
            for _ in 0..steps {
                full = next_generation(&full, UpdateStrategy::Full);
                fast = next_generation(&fast, UpdateStrategy::Frontier);
                prop_assert_eq!(&full, &fast);
            }
        }
    }
}
