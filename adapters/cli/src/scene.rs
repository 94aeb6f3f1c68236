//! Builds the presented scene from the authoritative game state.

use sidewinder_core::Screen;
use sidewinder_rendering::{
    FruitPresentation, HudPresentation, OverlayPresentation, Scene, SnakePresentation, Theme,
};
use sidewinder_world::GameState;

/// Headline shown while the game-over overlay is up.
const GAME_OVER_HEADLINE: &str = "Game Over...";
/// Restart hint shown beneath the headline.
const GAME_OVER_HINT: &str = "Press Q to quit. Press Enter to play again.";

/// Repaints `scene` to match `state`.
///
/// The grid layer is static and left untouched; every dynamic layer is
/// rebuilt from scratch so stale content never leaks between screens.
pub(crate) fn populate(scene: &mut Scene, state: &GameState, theme: &Theme) {
    scene.snake = None;
    scene.fruit = None;
    scene.hud = None;
    scene.overlay = None;

    match state.screen {
        Screen::Init => {}
        Screen::Playing => {
            scene.snake = Some(SnakePresentation::new(
                state.snake.cells().to_vec(),
                theme.snake_body,
                theme.snake_head,
            ));
            scene.fruit = Some(FruitPresentation::new(state.fruit.cell(), theme.fruit));
            scene.hud = Some(HudPresentation::new(
                state.score,
                theme.hud_font_px,
                theme.hud_text,
            ));
        }
        Screen::GameOver => {
            scene.overlay = Some(OverlayPresentation::new(
                GAME_OVER_HEADLINE,
                theme.headline_font_px,
                theme.overlay_headline,
                GAME_OVER_HINT,
                theme.hint_font_px,
                theme.overlay_hint,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidewinder_core::{GridBounds, GridPoint};
    use sidewinder_rendering::{Color, GridPresentation};

    fn empty_scene() -> Scene {
        let grid = GridPresentation::new(GridBounds::new(40, 30), 20, Color::from_rgb_u8(0, 0, 0))
            .expect("valid grid");
        Scene::empty(grid)
    }

    #[test]
    fn boot_screen_shows_only_the_grid() {
        let state = GameState::new(GridPoint::new(20, 15));
        let mut scene = empty_scene();

        populate(&mut scene, &state, &Theme::default());

        assert!(scene.snake.is_none());
        assert!(scene.fruit.is_none());
        assert!(scene.hud.is_none());
        assert!(scene.overlay.is_none());
    }

    #[test]
    fn live_run_paints_snake_fruit_and_score() {
        let mut state = GameState::new(GridPoint::new(20, 15));
        state.screen = Screen::Playing;
        state.fruit.move_to(GridPoint::new(4, 9));
        state.score = 30;
        let theme = Theme::default();
        let mut scene = empty_scene();

        populate(&mut scene, &state, &theme);

        let snake = scene.snake.expect("snake layer is painted");
        assert_eq!(snake.cells, vec![GridPoint::new(20, 15)]);
        assert_eq!(snake.body_color, theme.snake_body);
        assert_eq!(snake.head_color, theme.snake_head);

        let fruit = scene.fruit.expect("fruit layer is painted");
        assert_eq!(fruit.cell, GridPoint::new(4, 9));

        let hud = scene.hud.expect("score readout is painted");
        assert_eq!(hud.score, 30);

        assert!(scene.overlay.is_none());
    }

    #[test]
    fn ended_run_swaps_the_play_field_for_the_overlay() {
        let mut state = GameState::new(GridPoint::new(20, 15));
        state.screen = Screen::GameOver;
        let mut scene = empty_scene();

        populate(&mut scene, &state, &Theme::default());

        let overlay = scene.overlay.expect("overlay layer is painted");
        assert_eq!(overlay.headline, "Game Over...");
        assert_eq!(overlay.hint, "Press Q to quit. Press Enter to play again.");
        assert!(scene.snake.is_none());
        assert!(scene.fruit.is_none());
        assert!(scene.hud.is_none());
    }

    #[test]
    fn repainting_clears_layers_from_the_previous_screen() {
        let mut state = GameState::new(GridPoint::new(20, 15));
        state.screen = Screen::Playing;
        state.fruit.move_to(GridPoint::new(4, 9));
        let mut scene = empty_scene();

        populate(&mut scene, &state, &Theme::default());
        assert!(scene.snake.is_some());

        state.screen = Screen::GameOver;
        populate(&mut scene, &state, &Theme::default());

        assert!(scene.snake.is_none());
        assert!(scene.fruit.is_none());
        assert!(scene.hud.is_none());
        assert!(scene.overlay.is_some());
    }
}
