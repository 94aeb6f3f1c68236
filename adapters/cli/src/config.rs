//! Optional TOML configuration file layered between the built-in defaults
//! and the command-line flags.

use serde::Deserialize;
use sidewinder_core::GameConfig;
use sidewinder_rendering::{Color, Theme};
use std::{
    error::Error,
    fmt, fs, io,
    path::{Path, PathBuf},
};

/// On-disk configuration document.
///
/// Every key is optional; keys left out inherit the built-in defaults. Game
/// keys live at the document root, palette overrides under a `[theme]` table.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct ConfigFile {
    /// Window width in pixels.
    pub(crate) window_width: Option<i32>,
    /// Window height in pixels.
    pub(crate) window_height: Option<i32>,
    /// Fixed simulation rate in frames per second.
    pub(crate) fps: Option<u32>,
    /// Side length of a grid cell in pixels.
    pub(crate) cell_size: Option<i32>,
    /// Snake speed in cells per second.
    pub(crate) snake_speed: Option<u32>,
    /// Score awarded for each fruit eaten.
    pub(crate) food_score_value: Option<u32>,
    /// Palette overrides.
    pub(crate) theme: Option<ThemeSection>,
}

impl ConfigFile {
    /// Parses a TOML document.
    pub(crate) fn parse(text: &str) -> Result<Self, ConfigFileError> {
        toml::from_str(text).map_err(ConfigFileError::Malformed)
    }

    /// Reads and parses the file at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self, ConfigFileError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigFileError::Unreadable {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Overwrites every field of `config` for which the file provides a key.
    pub(crate) fn apply(&self, config: &mut GameConfig) {
        if let Some(window_width) = self.window_width {
            config.window_width = window_width;
        }
        if let Some(window_height) = self.window_height {
            config.window_height = window_height;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(snake_speed) = self.snake_speed {
            config.snake_speed = snake_speed;
        }
        if let Some(food_score_value) = self.food_score_value {
            config.food_score_value = food_score_value;
        }
    }
}

/// Palette override table of the configuration file.
///
/// Colors are written as `[red, green, blue]` byte triples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct ThemeSection {
    /// Fill of the snake's body; the head tint is derived from it.
    pub(crate) snake: Option<[u8; 3]>,
    /// Fill of the fruit.
    pub(crate) fruit: Option<[u8; 3]>,
    /// Solid color used to clear each frame.
    pub(crate) background: Option<[u8; 3]>,
    /// Color of the grid lines.
    pub(crate) grid_lines: Option<[u8; 3]>,
    /// Color of the score readout and the restart hint.
    pub(crate) text: Option<[u8; 3]>,
}

/// Builds the presented theme from the optional palette overrides.
pub(crate) fn theme_from_section(section: Option<&ThemeSection>) -> Theme {
    let mut theme = Theme::default();
    let Some(section) = section else {
        return theme;
    };

    if let Some([red, green, blue]) = section.background {
        theme.clear = Color::from_rgb_u8(red, green, blue);
    }
    if let Some([red, green, blue]) = section.grid_lines {
        theme.grid_line = Color::from_rgb_u8(red, green, blue);
    }
    if let Some([red, green, blue]) = section.snake {
        let body = Color::from_rgb_u8(red, green, blue);
        theme.snake_body = body;
        theme.snake_head = Theme::head_for_body(body);
    }
    if let Some([red, green, blue]) = section.fruit {
        theme.fruit = Color::from_rgb_u8(red, green, blue);
    }
    if let Some([red, green, blue]) = section.text {
        let text = Color::from_rgb_u8(red, green, blue);
        theme.hud_text = text;
        theme.overlay_hint = text;
    }

    theme
}

/// Errors that can occur while loading a configuration file.
#[derive(Debug)]
pub(crate) enum ConfigFileError {
    /// The file could not be read from disk.
    Unreadable {
        /// Path that was requested.
        path: PathBuf,
        /// Error reported by the filesystem.
        source: io::Error,
    },
    /// The file contents were not valid TOML for the expected document.
    Malformed(toml::de::Error),
}

impl fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, source } => {
                write!(
                    f,
                    "could not read configuration file '{}': {source}",
                    path.display()
                )
            }
            Self::Malformed(error) => write!(f, "could not parse configuration file: {error}"),
        }
    }
}

impl Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            Self::Malformed(error) => Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_leaves_the_defaults_untouched() {
        let file = ConfigFile::parse("").expect("empty document parses");
        let mut config = GameConfig::default();

        file.apply(&mut config);

        assert_eq!(config, GameConfig::default());
        assert!(file.theme.is_none());
    }

    #[test]
    fn partial_document_overrides_only_the_present_keys() {
        let file = ConfigFile::parse("fps = 30\nsnake_speed = 10\n").expect("document parses");
        let mut config = GameConfig::default();

        file.apply(&mut config);

        assert_eq!(config.fps, 30);
        assert_eq!(config.snake_speed, 10);
        assert_eq!(config.window_width, GameConfig::default().window_width);
        assert_eq!(config.cell_size, GameConfig::default().cell_size);
    }

    #[test]
    fn full_document_replaces_every_game_key() {
        let text = "\
window_width = 640
window_height = 480
fps = 30
cell_size = 16
snake_speed = 15
food_score_value = 25
";
        let file = ConfigFile::parse(text).expect("document parses");
        let mut config = GameConfig::default();

        file.apply(&mut config);

        assert_eq!(config, GameConfig::new(640, 480, 30, 16, 15, 25));
    }

    #[test]
    fn malformed_documents_are_rejected() {
        assert!(ConfigFile::parse("fps = ").is_err());
        assert!(ConfigFile::parse("fps = -1").is_err());
        assert!(ConfigFile::parse("[theme]\nsnake = [1, 2]").is_err());
    }

    #[test]
    fn theme_section_recolors_the_palette_and_rederives_the_head() {
        let text = "\
[theme]
snake = [10, 20, 200]
fruit = [1, 2, 3]
background = [0, 0, 0]
grid_lines = [30, 30, 30]
text = [250, 250, 250]
";
        let file = ConfigFile::parse(text).expect("document parses");
        let theme = theme_from_section(file.theme.as_ref());

        assert_eq!(theme.snake_body, Color::from_rgb_u8(10, 20, 200));
        assert_eq!(
            theme.snake_head,
            Theme::head_for_body(Color::from_rgb_u8(10, 20, 200))
        );
        assert_eq!(theme.fruit, Color::from_rgb_u8(1, 2, 3));
        assert_eq!(theme.clear, Color::from_rgb_u8(0, 0, 0));
        assert_eq!(theme.grid_line, Color::from_rgb_u8(30, 30, 30));
        assert_eq!(theme.hud_text, Color::from_rgb_u8(250, 250, 250));
        assert_eq!(theme.overlay_hint, Color::from_rgb_u8(250, 250, 250));
    }

    #[test]
    fn partial_theme_section_keeps_the_remaining_defaults() {
        let file = ConfigFile::parse("[theme]\nfruit = [9, 9, 9]\n").expect("document parses");
        let theme = theme_from_section(file.theme.as_ref());

        assert_eq!(theme.fruit, Color::from_rgb_u8(9, 9, 9));
        assert_eq!(theme.snake_body, Theme::default().snake_body);
        assert_eq!(theme.clear, Theme::default().clear);
    }

    #[test]
    fn missing_section_falls_back_to_the_default_theme() {
        assert_eq!(theme_from_section(None), Theme::default());
    }

    #[test]
    fn unreadable_files_report_the_path() {
        let error = ConfigFile::load(Path::new("/nonexistent/sidewinder.toml"))
            .expect_err("missing file must be reported");

        assert!(error.to_string().contains("/nonexistent/sidewinder.toml"));
        assert!(matches!(error, ConfigFileError::Unreadable { .. }));
    }
}
