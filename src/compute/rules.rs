//! Transition rule for Conway's Game of Life (B3/S23).
//!
//! The rule decides a cell's next state from its current state and its live Moore neighbors.

/// Live-neighbor count at which a dead cell is born.
pub const BIRTH: u8 = 3;

/// Live-neighbor counts at which a live cell survives.
pub const SURVIVAL: [u8; 2] = [2, 3];

/// Compute next state: B3/S23.
///
/// - A live cell survives with exactly 2 or 3 live neighbors.
/// - A dead cell becomes alive with exactly 3 live neighbors.
#[inline]
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    if alive {
        SURVIVAL.contains(&live_neighbors)
    } else {
        live_neighbors == BIRTH
    }
}
