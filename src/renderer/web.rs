//! Browser presenter: WebGPU canvas plus DOM score and game-over readouts

use web_sys::{Document, Element};

use super::Presenter;
use super::pipeline::RenderState;
use super::scene::Scene;
use crate::config::GameConfig;
use crate::sim::GameState;

pub struct WebPresenter {
    render_state: Option<RenderState>,
    score_display: Option<Element>,
    game_over_display: Option<Element>,
    /// Last values written to the DOM, to skip redundant writes
    shown_score: String,
    shown_game_over: Option<bool>,
}

impl WebPresenter {
    /// Look up `#score-display` and `#game-over`; either may be missing
    pub fn new(document: &Document, render_state: Option<RenderState>) -> Self {
        let score_display = document.get_element_by_id("score-display");
        let game_over_display = document.get_element_by_id("game-over");
        if score_display.is_none() {
            log::warn!("#score-display not found, score will not be shown");
        }
        if game_over_display.is_none() {
            log::warn!("#game-over not found, game over will not be shown");
        }

        Self {
            render_state,
            score_display,
            game_over_display,
            shown_score: String::new(),
            shown_game_over: None,
        }
    }

    fn update_hud(&mut self, scene: &Scene) {
        if scene.score_text != self.shown_score {
            if let Some(el) = &self.score_display {
                el.set_text_content(Some(&scene.score_text));
            }
            self.shown_score = scene.score_text.clone();
        }

        if self.shown_game_over != Some(scene.game_over) {
            if let Some(el) = &self.game_over_display {
                let _ = el.class_list().toggle_with_force("hidden", !scene.game_over);
            }
            self.shown_game_over = Some(scene.game_over);
        }
    }
}

impl Presenter for WebPresenter {
    fn present(&mut self, state: &GameState, config: &GameConfig) {
        let scene = Scene::build(state, config);

        if let Some(ref mut render_state) = self.render_state {
            match render_state.render(&scene) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        self.update_hud(&scene);
    }
}
