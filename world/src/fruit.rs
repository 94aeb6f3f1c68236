//! Fruit placement over the free cells of the grid.

use log::warn;
use rand::Rng;
use sidewinder_core::{GridBounds, GridPoint};

use crate::snake::Snake;

/// Random samples tried before falling back to exhaustive enumeration.
const PLACEMENT_SAMPLE_LIMIT: u32 = 64;

/// A single grid cell the snake grows by reaching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fruit {
    cell: GridPoint,
}

impl Fruit {
    /// Creates a fruit at the provided cell.
    #[must_use]
    pub const fn at(cell: GridPoint) -> Self {
        Self { cell }
    }

    /// Cell the fruit currently occupies.
    #[must_use]
    pub const fn cell(&self) -> GridPoint {
        self.cell
    }

    /// Moves the fruit to a new cell.
    pub fn move_to(&mut self, cell: GridPoint) {
        self.cell = cell;
    }
}

/// Picks a uniformly random cell that no live snake cell occupies.
///
/// Rejection-samples random cells first; after [`PLACEMENT_SAMPLE_LIMIT`]
/// misses it enumerates every free cell and picks one of those, so the
/// search always terminates. Returns `None` only when the snake covers the
/// whole grid, in which case callers keep the previous fruit.
pub fn place_fruit<R>(rng: &mut R, snake: &Snake, bounds: GridBounds) -> Option<GridPoint>
where
    R: Rng + ?Sized,
{
    if bounds.columns() <= 0 || bounds.rows() <= 0 {
        warn!("fruit placement requested on an empty grid");
        return None;
    }

    for _ in 0..PLACEMENT_SAMPLE_LIMIT {
        let candidate = GridPoint::new(
            rng.gen_range(0..bounds.columns()),
            rng.gen_range(0..bounds.rows()),
        );
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    let free: Vec<GridPoint> = (0..bounds.rows())
        .flat_map(|y| (0..bounds.columns()).map(move |x| GridPoint::new(x, y)))
        .filter(|cell| !snake.occupies(*cell))
        .collect();
    if free.is_empty() {
        warn!("no free cell left for the fruit; keeping the previous one");
        return None;
    }
    Some(free[rng.gen_range(0..free.len())])
}
