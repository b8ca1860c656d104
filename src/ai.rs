// Hunt/target shot selection for the computer player.
// Stateless: every decision is recomputed from a scan of the opponent grid.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::common::Coordinate;
use crate::grid::{CellStatus, Grid};
use crate::ship::Orientation;

/// Strength of the computer player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Uniform random over unfired cells.
    Easy,
    /// Finishes damaged ships, hunts uniformly.
    #[default]
    Medium,
    /// Finishes damaged ships, hunts on a checkerboard.
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err("difficulty must be one of easy, medium, hard"),
        }
    }
}

/// Choose the next cell to fire at on `grid`.
///
/// The grid is the opponent's true grid, but `empty` and `ship` cells are
/// treated alike: the choice never depends on where undiscovered ships are.
/// Returns `None` only once every cell has been fired upon.
pub fn calculate_ai_move<R: Rng + ?Sized>(
    grid: &Grid,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Coordinate> {
    if difficulty == Difficulty::Easy {
        return hunt_candidates(grid, false).choose(rng).copied();
    }

    let targets = target_candidates(grid);
    if !targets.is_empty() {
        return targets.choose(rng).copied();
    }

    let pool = hunt_candidates(grid, difficulty == Difficulty::Hard);
    if let Some(c) = pool.choose(rng) {
        return Some(*c);
    }
    // parity pool can run dry late in the game
    hunt_candidates(grid, false).choose(rng).copied()
}

/// Unfired cells, optionally restricted to the (x + y) even checkerboard.
/// Every ship is at least two long, so each one covers an even cell.
pub fn hunt_candidates(grid: &Grid, parity: bool) -> Vec<Coordinate> {
    grid.cells()
        .filter(|cell| cell.status.is_unfired())
        .filter(|cell| !parity || (cell.x + cell.y) % 2 == 0)
        .map(|cell| cell.coordinate())
        .collect()
}

/// Cells worth firing at to finish off damaged ships. Empty when nothing is damaged.
///
/// Two adjacent `hit` cells fix an axis; the candidates are then the first
/// unfired cell past each end of the run. Without any usable line, the
/// unfired orthogonal neighbours of the first damaged cell that has some.
pub fn target_candidates(grid: &Grid) -> Vec<Coordinate> {
    let damaged: Vec<Coordinate> = grid
        .cells()
        .filter(|cell| cell.status == CellStatus::Hit)
        .map(|cell| cell.coordinate())
        .collect();

    for &cell in &damaged {
        if let Some((neighbor, axis)) = hit_neighbor(grid, cell) {
            let ends = line_ends(grid, cell, neighbor, axis);
            if !ends.is_empty() {
                return ends;
            }
        }
    }

    for &cell in &damaged {
        let open: Vec<Coordinate> = cell.neighbors().filter(|c| grid.is_unfired(*c)).collect();
        if !open.is_empty() {
            return open;
        }
    }

    Vec::new()
}

/// First damaged orthogonal neighbour (up, down, left, right) and the axis it implies.
fn hit_neighbor(grid: &Grid, cell: Coordinate) -> Option<(Coordinate, Orientation)> {
    cell.neighbors()
        .find(|n| grid.status(*n) == Some(CellStatus::Hit))
        .map(|n| {
            let axis = if n.x == cell.x {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            (n, axis)
        })
}

fn line_ends(grid: &Grid, a: Coordinate, b: Coordinate, axis: Orientation) -> Vec<Coordinate> {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    let (dx, dy) = match axis {
        Orientation::Horizontal => (1, 0),
        Orientation::Vertical => (0, 1),
    };
    [walk_past_hits(grid, low, -dx, -dy), walk_past_hits(grid, high, dx, dy)]
        .into_iter()
        .flatten()
        .collect()
}

/// Step from `start` over consecutive `hit` cells; the first other cell counts
/// only if it can still be fired upon.
fn walk_past_hits(grid: &Grid, start: Coordinate, dx: isize, dy: isize) -> Option<Coordinate> {
    let mut cur = start.offset(dx, dy);
    while let Some(c) = cur {
        if grid.status(c) != Some(CellStatus::Hit) {
            break;
        }
        cur = c.offset(dx, dy);
    }
    cur.filter(|c| grid.is_unfired(*c))
}
