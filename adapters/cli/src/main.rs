#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Desktop launcher for the Sidewinder snake game.
//!
//! Resolves the game configuration from built-in defaults, an optional TOML
//! config file, and command-line flags, then drives one fixed-timestep
//! session through the macroquad rendering backend until the player quits.

mod config;
mod driver;
mod logging;
mod scene;

use anyhow::Result;
use clap::Parser;
use config::ConfigFile;
use driver::GameDriver;
use sidewinder_core::GameConfig;
use sidewinder_rendering::{GridPresentation, Presentation, RenderingBackend, Scene, Theme};
use sidewinder_rendering_macroquad::MacroquadBackend;
use sidewinder_session::Session;
use std::path::PathBuf;

/// Title of the created game window.
const WINDOW_TITLE: &str = "Sidewinder";

/// Command-line interface of the `sidewinder` binary.
#[derive(Debug, Parser)]
#[command(name = "sidewinder", version, about = "Classic snake for the desktop")]
struct Args {
    /// TOML configuration file layered over the built-in defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long, value_name = "PIXELS")]
    width: Option<i32>,

    /// Window height in pixels
    #[arg(long, value_name = "PIXELS")]
    height: Option<i32>,

    /// Simulation rate in frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Side length of one square grid cell in pixels
    #[arg(long, value_name = "PIXELS")]
    cell_size: Option<i32>,

    /// Snake speed in cells per second
    #[arg(long)]
    snake_speed: Option<u32>,

    /// Score awarded per eaten fruit, multiplied by the body length
    #[arg(long)]
    food_score: Option<u32>,

    /// Seed for fruit placement; drawn from the OS when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Playback volume between 0.0 and 1.0
    #[arg(long)]
    volume: Option<f32>,

    /// Synchronize presentation with the display refresh rate
    #[arg(long)]
    vsync: bool,

    /// Print frame statistics to stdout once per second
    #[arg(long)]
    show_fps: bool,

    /// Log at debug level instead of info
    #[arg(long)]
    debug: bool,
}

impl Args {
    /// Resolves the effective configuration and theme.
    ///
    /// Precedence, lowest to highest: built-in defaults, the file named by
    /// `--config`, individual command-line flags. The merged configuration
    /// is validated once here so every later stage can trust it.
    fn resolve_config(&self) -> Result<(GameConfig, Theme)> {
        let mut game = GameConfig::default();
        let mut theme = Theme::default();

        if let Some(path) = &self.config {
            let file = ConfigFile::load(path)?;
            file.apply(&mut game);
            theme = config::theme_from_section(file.theme.as_ref());
        }

        if let Some(width) = self.width {
            game.window_width = width;
        }
        if let Some(height) = self.height {
            game.window_height = height;
        }
        if let Some(fps) = self.fps {
            game.fps = fps;
        }
        if let Some(cell_size) = self.cell_size {
            game.cell_size = cell_size;
        }
        if let Some(snake_speed) = self.snake_speed {
            game.snake_speed = snake_speed;
        }
        if let Some(food_score) = self.food_score {
            game.food_score_value = food_score;
        }

        game.validate()?;
        Ok((game, theme))
    }
}

/// Entry point for the Sidewinder desktop build.
fn main() -> Result<()> {
    let args = Args::parse();
    logging::setup(args.debug)?;

    let (config, theme) = args.resolve_config()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    let bounds = config.play_bounds();
    log::info!(
        "starting {}x{} grid at {} fps with seed {seed:#018x}",
        bounds.columns(),
        bounds.rows(),
        config.fps,
    );

    let session = Session::new(config, seed)?;
    let grid = GridPresentation::new(bounds, config.cell_size, theme.grid_line)?;
    let presentation = Presentation::new(
        WINDOW_TITLE,
        config.window_width,
        config.window_height,
        theme.clear,
        Scene::empty(grid),
    );

    let mut driver = GameDriver::new(session, theme, config.fps);
    let backend = MacroquadBackend::new()
        .with_vsync(args.vsync)
        .with_show_fps(args.show_fps)
        .with_volume(args.volume.unwrap_or(MacroquadBackend::DEFAULT_VOLUME));

    backend.run(presentation, move |dt, input, scene| {
        driver.frame(dt, input, scene)
    })
}
