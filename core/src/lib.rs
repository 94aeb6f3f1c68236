#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Sidewinder game.
//!
//! This crate defines the vocabulary that connects the authoritative world
//! state, the session loop, and the adapters. The session consumes
//! [`FrameInput`] sampled by the rendering backend, mutates world state, and
//! answers with a [`FrameControl`] verdict plus a batch of [`AudioDirective`]
//! values the backend executes after the update returns. Nothing in this
//! crate touches a device; everything is plain data.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Location of a single grid cell expressed as column and row coordinates.
///
/// All gameplay positions are measured in grid cells, not pixels. Rows grow
/// toward the bottom edge of the window, matching the renderer's pixel axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPoint {
    x: i32,
    y: i32,
}

impl GridPoint {
    /// Sentinel returned by out-of-range body lookups.
    pub const INVALID: Self = Self { x: -1, y: -1 };

    /// Creates a new grid point at the provided column and row.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Returns the point displaced by the provided column and row deltas.
    #[must_use]
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Movement directions available to the snake.
///
/// The unit vectors mirror the original control scheme: `Up` advances toward
/// increasing row indices and `Down` toward decreasing ones. Paired with the
/// session's swapped up/down key mapping this steers conventionally on
/// screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Movement toward increasing row indices.
    Up,
    /// Movement toward decreasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
}

impl Direction {
    /// Unit step applied to the head for one movement tick.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, 1),
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Returns the exact 180-degree reversal of this direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Reports whether `other` is the exact reversal of this direction.
    #[must_use]
    pub fn is_opposite_of(self, other: Self) -> bool {
        self.opposite() == other
    }
}

/// Rectangular play area measured in whole grid cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridBounds {
    columns: i32,
    rows: i32,
}

impl GridBounds {
    /// Creates bounds spanning `columns x rows` cells anchored at the origin.
    #[must_use]
    pub const fn new(columns: i32, rows: i32) -> Self {
        Self { columns, rows }
    }

    /// Number of columns contained in the play area.
    #[must_use]
    pub const fn columns(&self) -> i32 {
        self.columns
    }

    /// Number of rows contained in the play area.
    #[must_use]
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    /// Total number of cells contained in the play area.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        if self.columns <= 0 || self.rows <= 0 {
            return 0;
        }
        self.columns as usize * self.rows as usize
    }

    /// Reports whether the point lies inside `[0, columns) x [0, rows)`.
    #[must_use]
    pub const fn contains(&self, point: GridPoint) -> bool {
        point.x() >= 0 && point.x() < self.columns && point.y() >= 0 && point.y() < self.rows
    }

    /// Cell at the center of the play area.
    #[must_use]
    pub const fn center(&self) -> GridPoint {
        GridPoint::new(self.columns / 2, self.rows / 2)
    }
}

/// Screens the session loop dispatches on each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    /// One-frame session boot: reset state, place the fruit, start music.
    Init,
    /// Active play: steer, advance, check eating and death.
    Playing,
    /// Post-death screen awaiting the continue or quit key.
    GameOver,
}

/// Gameplay events published through the session's notification bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// The snake's head landed on the fruit this frame.
    SnakeAte,
    /// The snake left the play area or bit itself this frame.
    GameOver,
}

/// Identifiers for the two one-shot sound effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Short blip played when the snake eats.
    Bite,
    /// Descending jingle played when the session ends.
    GameOverJingle,
}

/// Audio side effects requested by the session and executed by the backend.
///
/// Listeners push these into a per-frame buffer instead of touching the
/// audio device, which keeps the whole session testable headlessly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioDirective {
    /// Starts one playback of the addressed effect.
    PlaySound {
        /// Effect to play.
        effect: SoundEffect,
    },
    /// Halts any in-flight playback of the addressed effect.
    StopSound {
        /// Effect to stop.
        effect: SoundEffect,
    },
    /// Starts the looping background melody.
    StartMusic,
    /// Halts the looping background melody.
    StopMusic,
}

/// Verdict returned by the session after processing one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameControl {
    /// Keep running; the backend should present the scene and loop.
    Continue,
    /// Tear down the window and end the process.
    Quit,
}

/// Input sampled by the backend once per frame.
///
/// Every flag uses pressed-this-frame semantics, not held-down semantics.
/// The direction flags report the physical keys; the deliberate up/down
/// swap happens later, in the session's intent mapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Up arrow (or W) was pressed this frame.
    pub up: bool,
    /// Down arrow (or S) was pressed this frame.
    pub down: bool,
    /// Left arrow (or A) was pressed this frame.
    pub left: bool,
    /// Right arrow (or D) was pressed this frame.
    pub right: bool,
    /// Quit key (Q or Escape) was pressed this frame.
    pub quit: bool,
    /// Confirm key (Enter) was pressed this frame.
    pub confirm: bool,
    /// The window manager asked the window to close.
    pub close_requested: bool,
}

impl FrameInput {
    /// Input frame with no keys pressed and no close request.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            up: false,
            down: false,
            left: false,
            right: false,
            quit: false,
            confirm: false,
            close_requested: false,
        }
    }

    /// Combines two sampled frames, keeping every flag either frame raised.
    ///
    /// Backends rendering faster than the simulation steps merge each
    /// rendered frame's input into a pending frame, so a tap between two
    /// steps still reaches the step that consumes it.
    #[must_use]
    pub const fn merged(self, other: Self) -> Self {
        Self {
            up: self.up || other.up,
            down: self.down || other.down,
            left: self.left || other.left,
            right: self.right || other.right,
            quit: self.quit || other.quit,
            confirm: self.confirm || other.confirm,
            close_requested: self.close_requested || other.close_requested,
        }
    }
}

/// Tunable parameters for one game, all in one place.
///
/// The launcher layers an optional config file and command-line flags over
/// [`GameConfig::default`], then validates the result once at startup.
/// When deserializing a partial document, missing keys fall back to the
/// same defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: i32,
    /// Window height in pixels.
    pub window_height: i32,
    /// Target frames per second the backend runs at.
    pub fps: u32,
    /// Side length of one square grid cell in pixels.
    pub cell_size: i32,
    /// Snake speed in cells per second; see [`GameConfig::move_period_frames`].
    pub snake_speed: u32,
    /// Score awarded per eaten fruit, multiplied by the body length.
    pub food_score_value: u32,
}

impl GameConfig {
    /// Creates a configuration with explicit values for every parameter.
    #[must_use]
    pub const fn new(
        window_width: i32,
        window_height: i32,
        fps: u32,
        cell_size: i32,
        snake_speed: u32,
        food_score_value: u32,
    ) -> Self {
        Self {
            window_width,
            window_height,
            fps,
            cell_size,
            snake_speed,
            food_score_value,
        }
    }

    /// Checks the configuration for values the game cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size <= 0 {
            return Err(ConfigError::NonPositiveCellSize {
                cell_size: self.cell_size,
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        if self.snake_speed == 0 {
            return Err(ConfigError::ZeroSnakeSpeed);
        }
        if self.window_width < self.cell_size || self.window_height < self.cell_size {
            return Err(ConfigError::WindowTooSmall {
                width: self.window_width,
                height: self.window_height,
                cell_size: self.cell_size,
            });
        }
        Ok(())
    }

    /// Play area in grid cells, derived from the window and cell sizes.
    #[must_use]
    pub const fn play_bounds(&self) -> GridBounds {
        GridBounds::new(
            self.window_width / self.cell_size,
            self.window_height / self.cell_size,
        )
    }

    /// Cell the snake starts on at the beginning of every session.
    #[must_use]
    pub const fn initial_snake_cell(&self) -> GridPoint {
        self.play_bounds().center()
    }

    /// Number of frames between successive snake advances.
    ///
    /// Direction intents are applied every frame; the body only moves when
    /// this many frames have elapsed. Speeds above the frame rate clamp to
    /// one advance per frame.
    #[must_use]
    pub const fn move_period_frames(&self) -> u32 {
        let period = self.fps / self.snake_speed;
        if period == 0 {
            1
        } else {
            period
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(800, 600, 60, 20, 20, 10)
    }
}

/// Reasons a [`GameConfig`] is rejected at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The grid cell size is zero or negative.
    #[error("cell size must be positive, got {cell_size}")]
    NonPositiveCellSize {
        /// Rejected cell size in pixels.
        cell_size: i32,
    },
    /// The target frame rate is zero.
    #[error("frame rate must be positive")]
    ZeroFps,
    /// The snake speed is zero.
    #[error("snake speed must be positive")]
    ZeroSnakeSpeed,
    /// The window cannot fit a single grid cell.
    #[error("window {width}x{height} px does not fit a single {cell_size} px cell")]
    WindowTooSmall {
        /// Configured window width in pixels.
        width: i32,
        /// Configured window height in pixels.
        height: i32,
        /// Configured cell size in pixels.
        cell_size: i32,
    },
}
