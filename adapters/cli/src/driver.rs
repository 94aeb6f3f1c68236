//! Fixed-timestep driver bridging the render loop and the simulation.

use sidewinder_core::{AudioDirective, FrameControl, FrameInput};
use sidewinder_rendering::{FrameDirectives, Scene, Theme};
use sidewinder_session::Session;
use std::{mem, time::Duration};

/// Longest stretch of simulated time replayed after a stall, so a dragged
/// window or a debugger pause does not fast-forward the snake.
const MAX_FRAME_DEBT: Duration = Duration::from_millis(250);

/// Steps the session at its fixed rate regardless of the display refresh rate.
///
/// Render frames rarely line up with simulation frames, so elapsed time is
/// banked as debt and paid off in whole steps. Key presses seen between steps
/// are latched until the next step consumes them, which keeps taps registered
/// even on displays refreshing faster than the simulation runs.
pub(crate) struct GameDriver {
    session: Session,
    theme: Theme,
    step: Duration,
    debt: Duration,
    pending: FrameInput,
}

impl GameDriver {
    /// Creates a driver stepping `session` at `fps` frames per second.
    pub(crate) fn new(session: Session, theme: Theme, fps: u32) -> Self {
        Self {
            session,
            theme,
            step: Duration::from_secs(1) / fps.max(1),
            debt: Duration::ZERO,
            pending: FrameInput::default(),
        }
    }

    /// Advances the session by every elapsed whole step and repaints the scene.
    pub(crate) fn frame(
        &mut self,
        dt: Duration,
        input: FrameInput,
        scene: &mut Scene,
    ) -> FrameDirectives {
        self.pending = self.pending.merged(input);
        self.debt = (self.debt + dt).min(MAX_FRAME_DEBT);

        let mut audio: Vec<AudioDirective> = Vec::new();
        let mut control = FrameControl::Continue;

        while self.debt >= self.step {
            self.debt -= self.step;
            let frame = mem::take(&mut self.pending);
            if self.session.advance_frame(frame, &mut audio) == FrameControl::Quit {
                control = FrameControl::Quit;
                break;
            }
        }

        crate::scene::populate(scene, self.session.state(), &self.theme);

        FrameDirectives::new(control, audio)
    }

    /// Read-only view of the simulation, for assertions.
    #[cfg(test)]
    fn state(&self) -> &sidewinder_world::GameState {
        self.session.state()
    }
}
