//! Browser bindings
//!
//! `WebGame` is what the page's script holds. The page owns the canvas, the
//! buttons and the result dialog; it forwards clicks as commands, calls
//! `tick` from its animation-frame callback and reports every frame id it
//! requests so the engine can cancel it.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::dial::DialGeometry;
use crate::sim::{FrameLoop, Game, RoundPhase, TickInput, tick};

#[wasm_bindgen]
pub struct WebGame {
    game: Game,
    frames: FrameLoop<i32>,
}

#[wasm_bindgen]
impl WebGame {
    /// Build from a preset name ("classic", "duo")
    #[wasm_bindgen(constructor)]
    pub fn new(preset: &str) -> Result<WebGame, JsValue> {
        crate::platform::init_logging();
        let config =
            GameConfig::from_preset_name(preset).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::with_config(&config)
    }

    /// Build from a JSON config
    pub fn from_json(json: &str) -> Result<WebGame, JsValue> {
        crate::platform::init_logging();
        let config = GameConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::with_config(&config)
    }

    /// Returns true when a round began; the page should then request a frame
    pub fn start(&mut self) -> bool {
        self.game.start().is_some()
    }

    /// Returns true when the pointer was stopped and a result is ready
    pub fn stop(&mut self) -> bool {
        let stopped = self.game.stop().is_some();
        if stopped {
            self.cancel_frame();
        }
        stopped
    }

    /// "Try again" button
    pub fn dismiss_result(&mut self) -> bool {
        self.game.dismiss_result().is_some()
    }

    /// "Reset game" button
    pub fn reset_game(&mut self) {
        self.cancel_frame();
        self.game.reset_game();
    }

    /// Animation-frame callback. Returns whether to request another frame.
    pub fn tick(&mut self, surface_ready: bool) -> bool {
        self.frames.fired();
        let outcome = tick(&mut self.game, &TickInput { surface_ready });
        let again = outcome.wants_next_frame();
        if !again {
            self.cancel_frame();
        }
        again
    }

    /// Record the id returned by `requestAnimationFrame`
    pub fn frame_requested(&mut self, handle: i32) {
        if let Some(stale) = self.frames.subscribe(handle) {
            cancel_animation_frame(stale);
        }
    }

    pub fn angle(&self) -> f64 {
        self.game.angle()
    }

    /// Pointer knob position `[x, y]` on a canvas of the given size
    pub fn pointer_position(&self, width: f64, height: f64) -> Vec<f64> {
        let tip = DialGeometry::centered(width, height).pointer_tip(self.game.angle());
        vec![tip.x, tip.y]
    }

    /// Zone sectors for drawing: JSON list of `{ label, fill, stroke, points }`
    pub fn zone_layout_json(&self, width: f64, height: f64) -> String {
        let dial = DialGeometry::centered(width, height);
        let table = self.game.zones();
        let layout: Vec<serde_json::Value> = table
            .zones()
            .iter()
            .zip(dial.table_outlines(table, 32))
            .map(|(zone, outline)| {
                let (fill, stroke) = zone.label.colors();
                let points: Vec<[f64; 2]> = outline.iter().map(|p| [p.x, p.y]).collect();
                serde_json::json!({
                    "label": zone.label.as_str(),
                    "fill": fill,
                    "stroke": stroke,
                    "points": points,
                })
            })
            .collect();
        serde_json::Value::Array(layout).to_string()
    }

    pub fn is_running(&self) -> bool {
        self.game.round().is_running()
    }

    pub fn tries_label(&self) -> String {
        format!(
            "Tries {} / {}",
            self.game.round().tries_remaining,
            self.game.max_tries()
        )
    }

    /// Dialog text while a result is presented
    pub fn result_message(&self) -> Option<String> {
        let round = self.game.round();
        match (round.phase, round.last_result) {
            (RoundPhase::Stopped, Some(category)) => Some(format!("Your color is {category}")),
            _ => None,
        }
    }

    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.game.snapshot()).unwrap_or_default()
    }
}

impl WebGame {
    fn with_config(config: &GameConfig) -> Result<WebGame, JsValue> {
        let game = Game::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            game,
            frames: FrameLoop::new(),
        })
    }

    fn cancel_frame(&mut self) {
        if let Some(handle) = self.frames.cancel() {
            cancel_animation_frame(handle);
        }
    }
}

impl Drop for WebGame {
    fn drop(&mut self) {
        self.cancel_frame();
    }
}

fn cancel_animation_frame(handle: i32) {
    if let Some(window) = web_sys::window() {
        let _ = window.cancel_animation_frame(handle);
    }
}
