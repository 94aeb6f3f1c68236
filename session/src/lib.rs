#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Session orchestration for Sidewinder.
//!
//! A [`Session`] owns the authoritative [`GameState`], the event bus with
//! its two gameplay listeners, the movement throttle, and a seeded RNG for
//! fruit placement. Each frame the backend hands it sampled input; the
//! session dispatches on the current screen, mutates state, and answers
//! with a loop verdict plus the audio directives the backend should
//! execute. Running the same seed against the same input script reproduces
//! a session exactly.

mod bus;
mod input;
mod listeners;
mod throttle;

pub use bus::{EventBus, EventContext, EventListener, SubscribeError, LISTENER_CAPACITY};
pub use input::direction_intent;
pub use listeners::{GameOverListener, SnakeAteListener};
pub use throttle::MoveThrottle;

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sidewinder_core::{
    AudioDirective, FrameControl, FrameInput, GameConfig, GameEvent, GridBounds, GridPoint,
    Screen, SoundEffect,
};
use sidewinder_world::{place_fruit, rules, GameState};

/// One playthrough loop: state, listeners, cadence, and randomness.
pub struct Session {
    state: GameState,
    bus: EventBus,
    throttle: MoveThrottle,
    rng: ChaCha8Rng,
    bounds: GridBounds,
    start_cell: GridPoint,
}

impl Session {
    /// Builds a session from a validated configuration and an RNG seed.
    ///
    /// Registers the two gameplay listeners; the fixed-capacity registry
    /// makes registration fallible and the error should abort startup.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, SubscribeError> {
        let mut bus = EventBus::new();
        bus.subscribe(
            GameEvent::SnakeAte,
            Box::new(SnakeAteListener::new(
                SoundEffect::Bite,
                config.food_score_value,
            )),
        )?;
        bus.subscribe(
            GameEvent::GameOver,
            Box::new(GameOverListener::new(SoundEffect::GameOverJingle)),
        )?;

        let start_cell = config.initial_snake_cell();
        Ok(Self {
            state: GameState::new(start_cell),
            bus,
            throttle: MoveThrottle::new(config.move_period_frames()),
            rng: ChaCha8Rng::seed_from_u64(seed),
            bounds: config.play_bounds(),
            start_cell,
        })
    }

    /// Processes one frame of sampled input and returns the loop verdict.
    ///
    /// Audio directives requested during the frame are appended to `audio`;
    /// the caller executes them after this returns. Quit input ends the
    /// loop from any screen without touching state.
    pub fn advance_frame(
        &mut self,
        input: FrameInput,
        audio: &mut Vec<AudioDirective>,
    ) -> FrameControl {
        if input.quit || input.close_requested {
            debug!("quit requested");
            return FrameControl::Quit;
        }

        match self.state.screen {
            Screen::Init => self.boot_frame(audio),
            Screen::Playing => self.playing_frame(input, audio),
            Screen::GameOver => self.game_over_frame(input, audio),
        }
        FrameControl::Continue
    }

    /// Authoritative state, for scene building and assertions.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play area the session runs in.
    #[must_use]
    pub const fn bounds(&self) -> GridBounds {
        self.bounds
    }

    fn boot_frame(&mut self, audio: &mut Vec<AudioDirective>) {
        self.state.snake.reset(self.start_cell);
        if let Some(cell) = place_fruit(&mut self.rng, &self.state.snake, self.bounds) {
            self.state.fruit.move_to(cell);
        }
        self.state.score = 0;
        self.state.game_over = false;
        self.state.screen = Screen::Playing;
        self.throttle.reset();
        audio.push(AudioDirective::StartMusic);
        debug!(
            "session started: snake at {:?}, fruit at {:?}",
            self.start_cell,
            self.state.fruit.cell()
        );
    }

    fn playing_frame(&mut self, input: FrameInput, audio: &mut Vec<AudioDirective>) {
        self.state.snake.set_direction(direction_intent(input));
        if self.throttle.tick() {
            self.state.snake.advance();
        }
        if rules::is_eating(&self.state.snake, &self.state.fruit) {
            self.publish(GameEvent::SnakeAte, audio);
        }
        if rules::is_dead(&self.state.snake, self.bounds) {
            self.publish(GameEvent::GameOver, audio);
        }
    }

    fn game_over_frame(&mut self, input: FrameInput, audio: &mut Vec<AudioDirective>) {
        if input.confirm {
            audio.push(AudioDirective::StopSound {
                effect: SoundEffect::GameOverJingle,
            });
            self.state.screen = Screen::Init;
        }
    }

    fn publish(&mut self, event: GameEvent, audio: &mut Vec<AudioDirective>) {
        let mut ctx = EventContext {
            state: &mut self.state,
            bounds: self.bounds,
            rng: &mut self.rng,
            audio,
        };
        self.bus.publish(event, &mut ctx);
    }
}
