//! Sampled key flags to steering intent.

use sidewinder_core::{Direction, FrameInput};

/// Derives the frame's steering intent from the sampled key flags.
///
/// The up and down keys are deliberately swapped relative to their labels;
/// together with the row-major movement table this steers the snake
/// conventionally on screen. When several direction keys land in the same
/// frame, the later entry of the fixed order left, right, down, up wins.
#[must_use]
pub fn direction_intent(input: FrameInput) -> Option<Direction> {
    let mut intent = None;
    if input.left {
        intent = Some(Direction::Left);
    }
    if input.right {
        intent = Some(Direction::Right);
    }
    if input.down {
        intent = Some(Direction::Up);
    }
    if input.up {
        intent = Some(Direction::Down);
    }
    intent
}
