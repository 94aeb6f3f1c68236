#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for Sidewinder.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, which are unavailable in containerised CI environments. To keep
//! `cargo test` usable everywhere we depend on macroquad without its default
//! `audio` feature and render silently. Consumers that want the synthesized
//! soundtrack opt back in through this crate's `audio` feature, which
//! re-enables `macroquad/audio` and swaps the silent player for a real one.

mod audio;
pub mod tone;

use anyhow::Result;
use glam::Vec2;
use macroquad::input::{is_key_pressed, is_quit_requested, prevent_quit, KeyCode};
use sidewinder_core::{FrameControl, FrameInput};
use sidewinder_rendering::{
    Color, FrameDirectives, FruitPresentation, GridPresentation, HudPresentation,
    OverlayPresentation, Presentation, RenderingBackend, Scene, SnakePresentation,
};
use std::{
    sync::mpsc,
    time::{Duration, Instant},
};

use self::audio::AudioPlayer;

/// Rendering backend implemented on top of macroquad.
#[derive(Clone, Copy, Debug)]
pub struct MacroquadBackend {
    swap_interval: Option<i32>,
    show_fps: bool,
    volume: f32,
}

impl Default for MacroquadBackend {
    fn default() -> Self {
        Self {
            swap_interval: None,
            show_fps: false,
            volume: Self::DEFAULT_VOLUME,
        }
    }
}

impl MacroquadBackend {
    /// Master volume applied when none is configured explicitly.
    pub const DEFAULT_VOLUME: f32 = 0.5;

    /// Returns a backend that requests the platform's default swap interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the backend to request a specific swap interval from the platform.
    #[must_use]
    pub fn with_swap_interval(mut self, swap_interval: Option<i32>) -> Self {
        self.swap_interval = swap_interval;
        self
    }

    /// Configures the backend to either synchronise presentation with the display refresh rate
    /// or render as fast as possible.
    #[must_use]
    pub fn with_vsync(self, enabled: bool) -> Self {
        let swap_interval = if enabled { Some(1) } else { Some(0) };
        self.with_swap_interval(swap_interval)
    }

    /// Configures whether the backend prints frame timing metrics once per second.
    #[must_use]
    pub fn with_show_fps(mut self, show: bool) -> Self {
        self.show_fps = show;
        self
    }

    /// Configures the master volume used for effect and music playback.
    #[must_use]
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume.clamp(0.0, 1.0);
        self
    }
}

/// Collects the edge-triggered key presses observed during a single frame.
///
/// Arrow keys and their WASD aliases steer, `Enter` confirms, and `Q` or
/// `Escape` requests a quit. Window close requests arrive separately through
/// [`FrameInput::close_requested`] so the simulation can decide how to wind
/// down.
fn gather_frame_input() -> FrameInput {
    FrameInput {
        up: is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W),
        down: is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S),
        left: is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A),
        right: is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D),
        quit: is_key_pressed(KeyCode::Q) || is_key_pressed(KeyCode::Escape),
        confirm: is_key_pressed(KeyCode::Enter),
        close_requested: is_quit_requested(),
    }
}

/// Tracks the average frames-per-second produced by the render loop.
#[derive(Debug, Default)]
struct FpsCounter {
    elapsed: Duration,
    frames: u32,
    render_accum: Duration,
}

#[derive(Clone, Copy, Debug)]
struct FpsMetrics {
    per_second: f32,
    avg_render: Duration,
}

impl FpsCounter {
    /// Records a rendered frame and returns the averages once one second has elapsed.
    fn record_frame(&mut self, frame: Duration, render: Duration) -> Option<FpsMetrics> {
        self.elapsed += frame;
        self.frames = self.frames.saturating_add(1);
        self.render_accum += render;

        if self.elapsed < Duration::from_secs(1) {
            return None;
        }

        let seconds = self.elapsed.as_secs_f32();
        let frames = self.frames;
        let metrics = if seconds <= f32::EPSILON || frames == 0 {
            None
        } else {
            Some(FpsMetrics {
                per_second: frames as f32 / seconds,
                avg_render: self.render_accum / frames,
            })
        };

        self.elapsed = Duration::ZERO;
        self.frames = 0;
        self.render_accum = Duration::ZERO;

        metrics
    }
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) -> FrameDirectives + 'static,
    {
        let Self {
            swap_interval,
            show_fps,
            volume,
        } = self;

        let Presentation {
            window_title,
            window_width,
            window_height,
            clear_color,
            scene,
        } = presentation;

        let mut config = macroquad::window::Conf {
            window_title,
            window_width,
            window_height,
            window_resizable: false,
            ..macroquad::window::Conf::default()
        };
        if let Some(swap_interval) = swap_interval {
            config.platform.swap_interval = Some(swap_interval);
        }

        let (audio_init_sender, audio_init_receiver) = mpsc::channel::<Result<()>>();

        macroquad::Window::from_config(config, async move {
            let mut init_sender = Some(audio_init_sender);
            let mut scene = scene;

            let player = match AudioPlayer::load(volume).await {
                Ok(player) => player,
                Err(error) => {
                    if let Some(sender) = init_sender.take() {
                        let _ = sender.send(Err(error));
                    }
                    return;
                }
            };

            if let Some(sender) = init_sender.take() {
                let _ = sender.send(Ok(()));
            }

            prevent_quit();

            let background = to_macroquad_color(clear_color);
            let mut fps_counter = FpsCounter::default();
            let mut blink_clock = Duration::ZERO;

            loop {
                let frame_input = gather_frame_input();

                macroquad::window::clear_background(background);

                let dt_seconds = macroquad::time::get_frame_time();
                let frame_dt = Duration::from_secs_f32(dt_seconds.max(0.0));

                let directives = update_scene(frame_dt, frame_input, &mut scene);
                player.execute(&directives.audio);
                if directives.control == FrameControl::Quit {
                    break;
                }

                // The blink phase restarts whenever the overlay appears so the
                // headline is visible the moment a run ends.
                blink_clock = if scene.overlay.is_some() {
                    blink_clock.saturating_add(frame_dt)
                } else {
                    Duration::ZERO
                };

                let render_start = Instant::now();
                draw_scene(&scene, blink_clock);
                let render_duration = render_start.elapsed();

                let fps_metrics = fps_counter.record_frame(frame_dt, render_duration);
                if show_fps {
                    if let Some(FpsMetrics {
                        per_second,
                        avg_render,
                    }) = fps_metrics
                    {
                        println!(
                            "FPS: {:.2} | render: {:>6.2}ms",
                            per_second,
                            avg_render.as_secs_f64() * 1_000.0,
                        );
                    }
                }

                macroquad::window::next_frame().await;
            }
        });

        audio_init_receiver.recv().unwrap_or_else(|_| Ok(()))?;

        Ok(())
    }
}

fn draw_scene(scene: &Scene, blink_clock: Duration) {
    let screen_width = macroquad::window::screen_width();
    let screen_height = macroquad::window::screen_height();
    let origin = centered_origin(screen_width, screen_height, &scene.grid);

    draw_grid_lines(&scene.grid, origin);

    if let Some(fruit) = &scene.fruit {
        draw_fruit(fruit, &scene.grid, origin);
    }
    if let Some(snake) = &scene.snake {
        draw_snake(snake, &scene.grid, origin);
    }
    if let Some(hud) = &scene.hud {
        draw_hud(hud, screen_height);
    }
    if let Some(overlay) = &scene.overlay {
        draw_overlay(overlay, screen_width, screen_height, blink_clock);
    }
}

/// Top-left corner of the grid, centered in the window at a fixed cell scale.
fn centered_origin(screen_width: f32, screen_height: f32, grid: &GridPresentation) -> Vec2 {
    Vec2::new(
        ((screen_width - grid.width_px() as f32) * 0.5).max(0.0),
        ((screen_height - grid.height_px() as f32) * 0.5).max(0.0),
    )
}

fn draw_grid_lines(grid: &GridPresentation, origin: Vec2) {
    let color = to_macroquad_color(grid.line_color);
    let width = grid.width_px() as f32;
    let height = grid.height_px() as f32;
    let cell = grid.cell_px as f32;

    for column in 0..=grid.bounds.columns() {
        let x = origin.x + column as f32 * cell;
        macroquad::shapes::draw_line(x, origin.y, x, origin.y + height, 1.0, color);
    }

    for row in 0..=grid.bounds.rows() {
        let y = origin.y + row as f32 * cell;
        macroquad::shapes::draw_line(origin.x, y, origin.x + width, y, 1.0, color);
    }
}

fn draw_snake(snake: &SnakePresentation, grid: &GridPresentation, origin: Vec2) {
    let cell = grid.cell_px as f32;

    for (index, segment) in snake.cells.iter().enumerate() {
        let (x, y) = grid.cell_origin(*segment);
        let color = if index == 0 {
            snake.head_color
        } else {
            snake.body_color
        };
        macroquad::shapes::draw_rectangle(
            origin.x + x,
            origin.y + y,
            cell,
            cell,
            to_macroquad_color(color),
        );
    }
}

fn draw_fruit(fruit: &FruitPresentation, grid: &GridPresentation, origin: Vec2) {
    let cell = grid.cell_px as f32;
    let (x, y) = grid.cell_origin(fruit.cell);

    macroquad::shapes::draw_rectangle(
        origin.x + x,
        origin.y + y,
        cell,
        cell,
        to_macroquad_color(fruit.color),
    );
}

/// Score readout in the lower-left window corner, one line above the edge.
fn draw_hud(hud: &HudPresentation, screen_height: f32) {
    let text = format!("Score: {}", hud.score);
    macroquad::text::draw_text(
        &text,
        hud.font_px,
        screen_height - hud.font_px,
        hud.font_px,
        to_macroquad_color(hud.color),
    );
}

/// Headline vertically centered in the window, hint line hanging below it.
fn draw_overlay(
    overlay: &OverlayPresentation,
    screen_width: f32,
    screen_height: f32,
    blink_clock: Duration,
) {
    if overlay_visible(blink_clock) {
        draw_centered_text(
            &overlay.headline,
            screen_width,
            (screen_height + overlay.headline_font_px) * 0.5,
            overlay.headline_font_px,
            overlay.headline_color,
        );
    }

    let hint_baseline =
        (screen_height + 1.4 * overlay.headline_font_px) * 0.5 + overlay.hint_font_px;
    draw_centered_text(
        &overlay.hint,
        screen_width,
        hint_baseline,
        overlay.hint_font_px,
        overlay.hint_color,
    );
}

/// Overlay text blinks on a one second cycle and is visible during the first half.
fn overlay_visible(elapsed: Duration) -> bool {
    elapsed.as_secs_f64().fract() < 0.5
}

fn draw_centered_text(text: &str, screen_width: f32, baseline_y: f32, font_px: f32, color: Color) {
    let dimensions = macroquad::text::measure_text(text, None, font_px as u16, 1.0);
    let x = ((screen_width - dimensions.width) * 0.5).max(0.0);

    macroquad::text::draw_text(text, x, baseline_y, font_px, to_macroquad_color(color));
}

fn to_macroquad_color(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}
