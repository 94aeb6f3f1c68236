//! Snake body buffer and movement model.

use log::error;
use sidewinder_core::{Direction, GridPoint};

/// Maximum number of body cells a snake can occupy.
pub const BODY_CAPACITY: usize = 128;

/// A bounded body buffer with the head at index 0.
///
/// The buffer never reallocates; `len` tracks the live prefix. During
/// [`Snake::advance`] the slot one past the tail is pre-staged with the old
/// tail cell, so a following [`Snake::eat`] grows the body exactly where the
/// tail used to be.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: [GridPoint; BODY_CAPACITY],
    len: usize,
    direction: Option<Direction>,
}

impl Snake {
    /// Creates a one-cell snake at `initial` with no movement direction.
    #[must_use]
    pub fn new(initial: GridPoint) -> Self {
        let mut snake = Self {
            body: [GridPoint::INVALID; BODY_CAPACITY],
            len: 0,
            direction: None,
        };
        snake.reset(initial);
        snake
    }

    /// Resets the snake to a single cell at `initial` for a new session.
    pub fn reset(&mut self, initial: GridPoint) {
        self.body = [GridPoint::INVALID; BODY_CAPACITY];
        self.body[0] = initial;
        self.len = 1;
        self.direction = None;
    }

    /// Applies a steering intent.
    ///
    /// `None` keeps the current direction; an exact 180-degree reversal of
    /// the current direction is silently dropped; any other intent becomes
    /// the new direction.
    pub fn set_direction(&mut self, intent: Option<Direction>) {
        let Some(requested) = intent else { return };
        if let Some(current) = self.direction {
            if current.is_opposite_of(requested) {
                return;
            }
        }
        self.direction = Some(requested);
    }

    /// Advances the body one cell in the current direction.
    ///
    /// Every body cell shifts one slot toward the tail, then the head moves
    /// by the direction's unit vector (no direction yet means a zero
    /// vector). The slot one past the tail keeps the old tail cell as the
    /// growth position for [`Snake::eat`].
    pub fn advance(&mut self) {
        if self.len == 0 {
            debug_assert!(false, "advance on a zero-length snake");
            error!("snake advance requested with no body cells");
            return;
        }
        let staged = self.len.min(BODY_CAPACITY - 1);
        for index in (1..=staged).rev() {
            self.body[index] = self.body[index - 1];
        }
        let (dx, dy) = match self.direction {
            Some(direction) => direction.delta(),
            None => (0, 0),
        };
        self.body[0] = self.body[0].translated(dx, dy);
    }

    /// Grows the body by one cell, clamping silently at [`BODY_CAPACITY`].
    pub fn eat(&mut self) {
        if self.len < BODY_CAPACITY {
            self.len += 1;
        }
    }

    /// Number of live body cells.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Reports whether the snake has no live cells.
    ///
    /// Never true after construction; provided as the companion of
    /// [`Snake::len`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Body cell at `index`, head first.
    ///
    /// Out-of-range lookups return [`GridPoint::INVALID`] instead of
    /// panicking.
    #[must_use]
    pub fn position(&self, index: usize) -> GridPoint {
        if index < self.len {
            self.body[index]
        } else {
            GridPoint::INVALID
        }
    }

    /// Head cell (index 0).
    #[must_use]
    pub fn head(&self) -> GridPoint {
        self.body[0]
    }

    /// Live body cells, head first.
    #[must_use]
    pub fn cells(&self) -> &[GridPoint] {
        &self.body[..self.len]
    }

    /// Reports whether any live body cell occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: GridPoint) -> bool {
        self.cells().contains(&cell)
    }

    /// Current movement direction, `None` until the first accepted steer.
    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::{Snake, BODY_CAPACITY};
    use sidewinder_core::{Direction, GridPoint};

    fn snake_with_cells(expected: &[(i32, i32)]) -> Snake {
        // Builds a vertical snake by advancing upward and growing, then
        // checks the construction matches the requested layout.
        let (tail_x, tail_y) = expected[expected.len() - 1];
        let mut snake = Snake::new(GridPoint::new(tail_x, tail_y));
        snake.set_direction(Some(Direction::Up));
        for _ in 1..expected.len() {
            snake.advance();
            snake.eat();
        }
        let cells: Vec<(i32, i32)> = snake.cells().iter().map(|c| (c.x(), c.y())).collect();
        assert_eq!(cells, expected);
        snake
    }

    #[test]
    fn new_snake_has_one_cell_and_no_direction() {
        let snake = Snake::new(GridPoint::new(10, 10));
        assert_eq!(snake.len(), 1);
        assert!(!snake.is_empty());
        assert_eq!(snake.head(), GridPoint::new(10, 10));
        assert_eq!(snake.direction(), None);
        assert_eq!(snake.position(1), GridPoint::INVALID);
        assert_eq!(snake.position(usize::MAX), GridPoint::INVALID);
    }

    #[test]
    fn none_intent_keeps_current_direction() {
        let mut snake = Snake::new(GridPoint::new(5, 5));
        snake.set_direction(Some(Direction::Right));
        snake.set_direction(None);
        assert_eq!(snake.direction(), Some(Direction::Right));
    }

    #[test]
    fn reversal_intent_is_dropped() {
        let mut snake = Snake::new(GridPoint::new(5, 5));
        snake.set_direction(Some(Direction::Up));
        snake.set_direction(Some(Direction::Down));
        assert_eq!(snake.direction(), Some(Direction::Up));
    }

    #[test]
    fn perpendicular_intent_is_accepted() {
        let mut snake = Snake::new(GridPoint::new(5, 5));
        snake.set_direction(Some(Direction::Up));
        snake.set_direction(Some(Direction::Left));
        assert_eq!(snake.direction(), Some(Direction::Left));
    }

    #[test]
    fn first_intent_is_accepted_from_any_direction() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let mut snake = Snake::new(GridPoint::new(5, 5));
            snake.set_direction(Some(direction));
            assert_eq!(snake.direction(), Some(direction));
        }
    }

    #[test]
    fn advance_moves_single_cell_by_unit_vector() {
        let mut snake = Snake::new(GridPoint::new(10, 10));
        snake.set_direction(Some(Direction::Right));
        snake.advance();
        assert_eq!(snake.head(), GridPoint::new(11, 10));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn advance_shifts_body_toward_the_tail() {
        let mut snake = snake_with_cells(&[(5, 5), (5, 4), (5, 3)]);
        let old_head = snake.head();
        snake.advance();
        let cells: Vec<(i32, i32)> = snake.cells().iter().map(|c| (c.x(), c.y())).collect();
        assert_eq!(cells, [(5, 6), (5, 5), (5, 4)]);
        assert_eq!(snake.position(1), old_head);
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn advance_without_direction_stays_in_place() {
        let mut snake = Snake::new(GridPoint::new(7, 7));
        snake.advance();
        assert_eq!(snake.head(), GridPoint::new(7, 7));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn eat_grows_at_the_old_tail_cell() {
        let mut snake = snake_with_cells(&[(5, 5), (5, 4)]);
        snake.advance();
        snake.eat();
        let cells: Vec<(i32, i32)> = snake.cells().iter().map(|c| (c.x(), c.y())).collect();
        assert_eq!(cells, [(5, 6), (5, 5), (5, 4)]);
    }

    #[test]
    fn eat_clamps_silently_at_capacity() {
        let mut snake = Snake::new(GridPoint::new(0, 0));
        for _ in 0..BODY_CAPACITY + 10 {
            snake.eat();
        }
        assert_eq!(snake.len(), BODY_CAPACITY);
    }

    #[test]
    fn advance_at_capacity_keeps_length_and_moves_head() {
        let mut snake = Snake::new(GridPoint::new(0, 0));
        snake.set_direction(Some(Direction::Up));
        for _ in 0..BODY_CAPACITY {
            snake.eat();
        }
        snake.advance();
        assert_eq!(snake.len(), BODY_CAPACITY);
        assert_eq!(snake.head(), GridPoint::new(0, 1));
    }

    #[test]
    fn reset_returns_to_a_fresh_single_cell() {
        let mut snake = snake_with_cells(&[(5, 7), (5, 6), (5, 5)]);
        snake.reset(GridPoint::new(2, 2));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), GridPoint::new(2, 2));
        assert_eq!(snake.direction(), None);
        assert_eq!(snake.position(1), GridPoint::INVALID);
    }

    #[test]
    fn occupies_covers_only_live_cells() {
        let snake = snake_with_cells(&[(5, 5), (5, 4)]);
        assert!(snake.occupies(GridPoint::new(5, 5)));
        assert!(snake.occupies(GridPoint::new(5, 4)));
        assert!(!snake.occupies(GridPoint::new(5, 3)));
    }
}
