#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Sidewinder adapters.

use anyhow::Result as AnyResult;
use sidewinder_core::{AudioDirective, FrameControl, FrameInput, GridBounds, GridPoint};
use std::{error::Error, fmt, time::Duration};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Returns a new color lightened towards white by the provided amount.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);

        Self {
            red: lighten_channel(self.red, amount),
            green: lighten_channel(self.green, amount),
            blue: lighten_channel(self.blue, amount),
            alpha: self.alpha,
        }
    }
}

fn lighten_channel(channel: f32, amount: f32) -> f32 {
    channel + (1.0 - channel) * amount
}

/// Palette and typography shared by scene builders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Solid color used to clear each frame.
    pub clear: Color,
    /// Color used when drawing grid lines.
    pub grid_line: Color,
    /// Fill color of the snake's body segments.
    pub snake_body: Color,
    /// Fill color of the snake's head segment.
    pub snake_head: Color,
    /// Fill color of the fruit.
    pub fruit: Color,
    /// Color of the score readout.
    pub hud_text: Color,
    /// Color of the game-over headline.
    pub overlay_headline: Color,
    /// Color of the game-over restart hint.
    pub overlay_hint: Color,
    /// Font size of the score readout in pixels.
    pub hud_font_px: f32,
    /// Font size of the game-over headline in pixels.
    pub headline_font_px: f32,
    /// Font size of the game-over restart hint in pixels.
    pub hint_font_px: f32,
}

impl Theme {
    /// Amount by which the head segment is lightened relative to the body.
    pub const HEAD_LIGHTENING: f32 = 0.35;

    /// Returns the head fill derived from the provided body fill.
    #[must_use]
    pub fn head_for_body(body: Color) -> Color {
        body.lighten(Self::HEAD_LIGHTENING)
    }
}

impl Default for Theme {
    fn default() -> Self {
        let snake_body = Color::from_rgb_u8(0, 158, 47);

        Self {
            clear: Color::from_rgb_u8(245, 245, 245),
            grid_line: Color::from_rgb_u8(200, 200, 200),
            snake_head: Self::head_for_body(snake_body),
            snake_body,
            fruit: Color::from_rgb_u8(230, 41, 55),
            hud_text: Color::from_rgb_u8(130, 130, 130),
            overlay_headline: Color::from_rgb_u8(230, 41, 55),
            overlay_hint: Color::from_rgb_u8(130, 130, 130),
            hud_font_px: 20.0,
            headline_font_px: 60.0,
            hint_font_px: 20.0,
        }
    }
}

/// Describes the square cell grid that composes the play field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPresentation {
    /// Playable bounds measured in cells.
    pub bounds: GridBounds,
    /// Side length of a single cell expressed in pixels.
    pub cell_px: i32,
    /// Color used when drawing grid lines.
    pub line_color: Color,
}

impl GridPresentation {
    /// Creates a new grid descriptor.
    ///
    /// Returns an error when the cell length is not positive or the bounds
    /// enclose no cells.
    pub fn new(
        bounds: GridBounds,
        cell_px: i32,
        line_color: Color,
    ) -> Result<Self, RenderingError> {
        if cell_px <= 0 {
            return Err(RenderingError::InvalidCellLength { cell_px });
        }
        if bounds.columns() <= 0 || bounds.rows() <= 0 {
            return Err(RenderingError::EmptyGrid {
                columns: bounds.columns(),
                rows: bounds.rows(),
            });
        }

        Ok(Self {
            bounds,
            cell_px,
            line_color,
        })
    }

    /// Total width of the grid in pixels.
    #[must_use]
    pub const fn width_px(&self) -> i32 {
        self.bounds.columns() * self.cell_px
    }

    /// Total height of the grid in pixels.
    #[must_use]
    pub const fn height_px(&self) -> i32 {
        self.bounds.rows() * self.cell_px
    }

    /// Pixel coordinates of the top-left corner of the provided cell.
    #[must_use]
    pub const fn cell_origin(&self, cell: GridPoint) -> (f32, f32) {
        (
            (cell.x() * self.cell_px) as f32,
            (cell.y() * self.cell_px) as f32,
        )
    }
}

/// Snake rendered as filled cells, head first.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakePresentation {
    /// Cells occupied by the snake, ordered head to tail.
    pub cells: Vec<GridPoint>,
    /// Fill color of the body segments.
    pub body_color: Color,
    /// Fill color of the head segment.
    pub head_color: Color,
}

impl SnakePresentation {
    /// Creates a new snake descriptor.
    #[must_use]
    pub fn new(cells: Vec<GridPoint>, body_color: Color, head_color: Color) -> Self {
        Self {
            cells,
            body_color,
            head_color,
        }
    }
}

/// Fruit rendered as a single filled cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FruitPresentation {
    /// Cell occupied by the fruit.
    pub cell: GridPoint,
    /// Fill color of the fruit.
    pub color: Color,
}

impl FruitPresentation {
    /// Creates a new fruit descriptor.
    #[must_use]
    pub const fn new(cell: GridPoint, color: Color) -> Self {
        Self { cell, color }
    }
}

/// Score readout drawn in a screen corner while a run is live.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HudPresentation {
    /// Score accumulated by the current run.
    pub score: u32,
    /// Font size of the readout in pixels.
    pub font_px: f32,
    /// Color of the readout.
    pub color: Color,
}

impl HudPresentation {
    /// Creates a new score readout descriptor.
    #[must_use]
    pub const fn new(score: u32, font_px: f32, color: Color) -> Self {
        Self {
            score,
            font_px,
            color,
        }
    }
}

/// Centered message layer shown when no run is live.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayPresentation {
    /// Headline drawn at the center of the window.
    pub headline: String,
    /// Font size of the headline in pixels.
    pub headline_font_px: f32,
    /// Color of the headline.
    pub headline_color: Color,
    /// Hint drawn beneath the headline.
    pub hint: String,
    /// Font size of the hint in pixels.
    pub hint_font_px: f32,
    /// Color of the hint.
    pub hint_color: Color,
}

impl OverlayPresentation {
    /// Creates a new overlay descriptor.
    #[must_use]
    pub fn new<H, T>(
        headline: H,
        headline_font_px: f32,
        headline_color: Color,
        hint: T,
        hint_font_px: f32,
        hint_color: Color,
    ) -> Self
    where
        H: Into<String>,
        T: Into<String>,
    {
        Self {
            headline: headline.into(),
            headline_font_px,
            headline_color,
            hint: hint.into(),
            hint_font_px,
            hint_color,
        }
    }
}

/// Scene description combining the grid and its inhabitants.
///
/// Layers set to `None` are skipped by backends, so scene builders control
/// what is visible each frame by populating only the relevant layers.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Cell grid that composes the play field.
    pub grid: GridPresentation,
    /// Snake currently visible within the grid.
    pub snake: Option<SnakePresentation>,
    /// Fruit currently visible within the grid.
    pub fruit: Option<FruitPresentation>,
    /// Score readout drawn above the play field.
    pub hud: Option<HudPresentation>,
    /// Blinking message layer drawn over the play field.
    pub overlay: Option<OverlayPresentation>,
}

impl Scene {
    /// Creates a new scene descriptor.
    #[must_use]
    pub fn new(
        grid: GridPresentation,
        snake: Option<SnakePresentation>,
        fruit: Option<FruitPresentation>,
        hud: Option<HudPresentation>,
        overlay: Option<OverlayPresentation>,
    ) -> Self {
        Self {
            grid,
            snake,
            fruit,
            hud,
            overlay,
        }
    }

    /// Creates a scene containing only the grid.
    #[must_use]
    pub fn empty(grid: GridPresentation) -> Self {
        Self::new(grid, None, None, None, None)
    }
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Width of the created window in pixels.
    pub window_width: i32,
    /// Height of the created window in pixels.
    pub window_height: i32,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(
        window_title: T,
        window_width: i32,
        window_height: i32,
        clear_color: Color,
        scene: Scene,
    ) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            window_width,
            window_height,
            clear_color,
            scene,
        }
    }
}

/// Per-frame instructions returned to the backend by the update closure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameDirectives {
    /// Whether the backend should keep running or tear down.
    pub control: FrameControl,
    /// Sound playback requests emitted during the frame.
    pub audio: Vec<AudioDirective>,
}

impl FrameDirectives {
    /// Creates a new set of frame directives.
    #[must_use]
    pub fn new(control: FrameControl, audio: Vec<AudioDirective>) -> Self {
        Self { control, audio }
    }
}

/// Rendering backend capable of presenting Sidewinder scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The provided `update_scene` closure receives the simulated frame delta
    /// and per-frame input captured by the adapter, and may mutate the scene
    /// before it is rendered. The directives it returns tell the backend which
    /// sounds to start or stop and when to tear down.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) -> FrameDirectives + 'static;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq, Eq)]
pub enum RenderingError {
    /// Cell side length must be positive to avoid a zero-sized grid.
    InvalidCellLength {
        /// Provided cell length that failed validation.
        cell_px: i32,
    },
    /// Grid bounds must enclose at least one cell.
    EmptyGrid {
        /// Provided column count.
        columns: i32,
        /// Provided row count.
        rows: i32,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellLength { cell_px } => {
                write!(f, "cell length must be positive (received {cell_px})")
            }
            Self::EmptyGrid { columns, rows } => {
                write!(
                    f,
                    "grid bounds must enclose at least one cell (received {columns}x{rows})"
                )
            }
        }
    }
}

impl Error for RenderingError {}
