//! Collision, death, and eating predicates.
//!
//! Pure read-only checks over the live state; the session decides what to
//! publish based on these answers.

use sidewinder_core::{GridBounds, GridPoint};

use crate::{fruit::Fruit, snake::Snake};

/// Reports whether `head` lies outside the play area.
#[must_use]
pub fn is_out_of_bounds(head: GridPoint, bounds: GridBounds) -> bool {
    !bounds.contains(head)
}

/// Reports whether any body segment behind the head occupies the head cell.
#[must_use]
pub fn is_self_colliding(snake: &Snake) -> bool {
    let head = snake.head();
    snake.cells().iter().skip(1).any(|cell| *cell == head)
}

/// Reports whether the snake died this frame.
#[must_use]
pub fn is_dead(snake: &Snake, bounds: GridBounds) -> bool {
    is_out_of_bounds(snake.head(), bounds) || is_self_colliding(snake)
}

/// Reports whether the head landed on the fruit.
#[must_use]
pub fn is_eating(snake: &Snake, fruit: &Fruit) -> bool {
    snake.head() == fruit.cell()
}

#[cfg(test)]
mod tests {
    use super::{is_dead, is_eating, is_out_of_bounds, is_self_colliding};
    use crate::{fruit::Fruit, snake::Snake};
    use sidewinder_core::{Direction, GridBounds, GridPoint};

    fn line_snake(length: usize) -> Snake {
        let mut snake = Snake::new(GridPoint::new(5, 5));
        snake.set_direction(Some(Direction::Right));
        for _ in 1..length {
            snake.advance();
            snake.eat();
        }
        snake
    }

    #[test]
    fn bounds_check_is_half_open_on_both_axes() {
        let bounds = GridBounds::new(20, 15);
        assert!(!is_out_of_bounds(GridPoint::new(0, 0), bounds));
        assert!(!is_out_of_bounds(GridPoint::new(19, 14), bounds));
        assert!(is_out_of_bounds(GridPoint::new(20, 0), bounds));
        assert!(is_out_of_bounds(GridPoint::new(0, 15), bounds));
        assert!(is_out_of_bounds(GridPoint::new(-1, 7), bounds));
    }

    #[test]
    fn walking_off_the_right_edge_dies() {
        let bounds = GridBounds::new(20, 15);
        let mut snake = Snake::new(GridPoint::new(19, 10));
        snake.set_direction(Some(Direction::Right));
        assert!(!is_dead(&snake, bounds));
        snake.advance();
        assert!(is_dead(&snake, bounds));
    }

    #[test]
    fn hook_turn_into_the_own_body_collides() {
        // Head (9,5) with a straight body back to (5,5); a hook through
        // Up, Left, Down re-enters the snake's own body.
        let bounds = GridBounds::new(20, 15);
        let mut snake = line_snake(5);
        for direction in [Direction::Up, Direction::Left, Direction::Down] {
            assert!(!is_self_colliding(&snake));
            assert!(!is_dead(&snake, bounds));
            snake.set_direction(Some(direction));
            snake.advance();
        }
        assert!(is_self_colliding(&snake));
        assert!(is_dead(&snake, bounds));
    }

    #[test]
    fn single_cell_snake_never_self_collides() {
        let snake = Snake::new(GridPoint::new(3, 3));
        assert!(!is_self_colliding(&snake));
    }

    #[test]
    fn eating_requires_exact_head_overlap() {
        let snake = line_snake(3);
        let on_head = Fruit::at(snake.head());
        let on_body = Fruit::at(snake.position(1));
        let elsewhere = Fruit::at(GridPoint::new(0, 0));
        assert!(is_eating(&snake, &on_head));
        assert!(!is_eating(&snake, &on_body));
        assert!(!is_eating(&snake, &elsewhere));
    }
}
