#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative game state for Sidewinder.
//!
//! Everything here is deterministic data: the snake's bounded body buffer,
//! the fruit and its placement search, the collision rules, and the
//! [`GameState`] aggregate the session threads through each frame. Randomness
//! enters only through caller-supplied [`rand::Rng`] state, so replays with a
//! fixed seed reproduce byte-identical sessions.

mod fruit;
mod snake;

pub mod rules;

pub use fruit::{place_fruit, Fruit};
pub use snake::{Snake, BODY_CAPACITY};

use sidewinder_core::{GridPoint, Screen};

/// Complete state of one play session.
///
/// Owned by the session loop and threaded explicitly through every update
/// and listener call; nothing in the game reads hidden global state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// The snake.
    pub snake: Snake,
    /// The fruit.
    pub fruit: Fruit,
    /// Current score, recomputed whenever the snake eats.
    pub score: u32,
    /// Set once the session has ended in a death.
    pub game_over: bool,
    /// Screen the next frame dispatches on.
    pub screen: Screen,
}

impl GameState {
    /// Creates a fresh state on the [`Screen::Init`] screen.
    ///
    /// The fruit starts on the invalid sentinel cell; the session's boot
    /// step places it before the first playing frame.
    #[must_use]
    pub fn new(initial_snake_cell: GridPoint) -> Self {
        Self {
            snake: Snake::new(initial_snake_cell),
            fruit: Fruit::at(GridPoint::INVALID),
            score: 0,
            game_over: false,
            screen: Screen::Init,
        }
    }
}
