//! Reactive listeners the session registers at startup.

use log::debug;
use sidewinder_core::{AudioDirective, GameEvent, Screen, SoundEffect};
use sidewinder_world::place_fruit;

use crate::bus::{EventContext, EventListener};

/// Ends the session when the snake dies.
#[derive(Clone, Copy, Debug)]
pub struct GameOverListener {
    jingle: SoundEffect,
}

impl GameOverListener {
    /// Creates the listener with the jingle played on death.
    #[must_use]
    pub const fn new(jingle: SoundEffect) -> Self {
        Self { jingle }
    }
}

impl EventListener for GameOverListener {
    fn handle(&mut self, _event: GameEvent, ctx: &mut EventContext<'_>) {
        ctx.state.screen = Screen::GameOver;
        ctx.state.game_over = true;
        ctx.audio.push(AudioDirective::StopMusic);
        ctx.audio.push(AudioDirective::PlaySound {
            effect: self.jingle,
        });
        debug!("session over at score {}", ctx.state.score);
    }
}

/// Grows the snake and refreshes fruit and score on every bite.
#[derive(Clone, Copy, Debug)]
pub struct SnakeAteListener {
    bite: SoundEffect,
    food_score_value: u32,
}

impl SnakeAteListener {
    /// Creates the listener with its bite sound and per-fruit score value.
    #[must_use]
    pub const fn new(bite: SoundEffect, food_score_value: u32) -> Self {
        Self {
            bite,
            food_score_value,
        }
    }
}

impl EventListener for SnakeAteListener {
    fn handle(&mut self, _event: GameEvent, ctx: &mut EventContext<'_>) {
        ctx.audio.push(AudioDirective::PlaySound { effect: self.bite });
        ctx.state.snake.eat();
        if let Some(cell) = place_fruit(&mut *ctx.rng, &ctx.state.snake, ctx.bounds) {
            ctx.state.fruit.move_to(cell);
        }
        let length = ctx.state.snake.len() as u32;
        ctx.state.score = self.food_score_value * length.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{GameOverListener, SnakeAteListener};
    use crate::bus::{EventContext, EventListener};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use sidewinder_core::{
        AudioDirective, Direction, GameEvent, GridBounds, GridPoint, Screen, SoundEffect,
    };
    use sidewinder_world::{GameState, BODY_CAPACITY};

    fn playing_state(snake_length: usize) -> GameState {
        let mut state = GameState::new(GridPoint::new(5, 5));
        state.screen = Screen::Playing;
        state.snake.set_direction(Some(Direction::Right));
        for _ in 1..snake_length {
            state.snake.advance();
            state.snake.eat();
        }
        state
    }

    #[test]
    fn game_over_listener_ends_the_session_with_audio() {
        let mut state = playing_state(3);
        state.score = 20;
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut audio = Vec::new();
        let mut ctx = EventContext {
            state: &mut state,
            bounds: GridBounds::new(40, 30),
            rng: &mut rng,
            audio: &mut audio,
        };

        GameOverListener::new(SoundEffect::GameOverJingle).handle(GameEvent::GameOver, &mut ctx);

        assert_eq!(state.screen, Screen::GameOver);
        assert!(state.game_over);
        assert_eq!(
            audio,
            [
                AudioDirective::StopMusic,
                AudioDirective::PlaySound {
                    effect: SoundEffect::GameOverJingle,
                },
            ]
        );
    }

    #[test]
    fn snake_ate_listener_grows_scores_and_moves_the_fruit() {
        let mut state = playing_state(3);
        state.fruit.move_to(state.snake.head());
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut audio = Vec::new();
        let mut ctx = EventContext {
            state: &mut state,
            bounds: GridBounds::new(40, 30),
            rng: &mut rng,
            audio: &mut audio,
        };

        SnakeAteListener::new(SoundEffect::Bite, 10).handle(GameEvent::SnakeAte, &mut ctx);

        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.score, 30);
        assert!(!state.snake.occupies(state.fruit.cell()));
        assert_eq!(
            audio,
            [AudioDirective::PlaySound {
                effect: SoundEffect::Bite,
            }]
        );
    }

    #[test]
    fn eating_at_capacity_keeps_length_and_score_stable() {
        let mut state = playing_state(3);
        for _ in 0..BODY_CAPACITY {
            state.snake.eat();
        }
        assert_eq!(state.snake.len(), BODY_CAPACITY);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut audio = Vec::new();
        let mut ctx = EventContext {
            state: &mut state,
            bounds: GridBounds::new(40, 30),
            rng: &mut rng,
            audio: &mut audio,
        };

        SnakeAteListener::new(SoundEffect::Bite, 10).handle(GameEvent::SnakeAte, &mut ctx);

        assert_eq!(state.snake.len(), BODY_CAPACITY);
        assert_eq!(state.score, 10 * (BODY_CAPACITY as u32 - 1));
    }
}
