//! Seeded autoplayer
//!
//! Plays a whole game without a display: for each try it starts a round,
//! ticks a randomly chosen number of frames and stops. Same seed, same game.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Category, Game, RoundEvent, TickInput, tick};

/// One scored try
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TryResult {
    pub frames: u64,
    pub angle: f64,
    pub category: Category,
    pub tries_remaining: u32,
}

pub struct AutoPlayer {
    rng: Pcg32,
    /// Upper bound on frames held before stopping
    pub max_hold_frames: u64,
}

impl AutoPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            max_hold_frames: 1_000,
        }
    }

    /// Play one try; `None` once the game is out of tries
    pub fn play_round(&mut self, game: &mut Game) -> Option<TryResult> {
        if game.round().is_exhausted() {
            return None;
        }
        game.dismiss_result();
        game.start()?;

        let hold = self.rng.random_range(0..=self.max_hold_frames);
        let input = TickInput::default();
        for _ in 0..hold {
            if !tick(game, &input).wants_next_frame() {
                break;
            }
        }

        match game.stop()? {
            RoundEvent::Stopped {
                angle,
                category,
                tries_remaining,
            } => Some(TryResult {
                frames: game.round().frame_count,
                angle,
                category,
                tries_remaining,
            }),
            _ => None,
        }
    }

    /// Play until the try counter runs out
    pub fn play_game(&mut self, game: &mut Game) -> Vec<TryResult> {
        let mut results = Vec::with_capacity(game.max_tries() as usize);
        while !game.round().is_exhausted() {
            match self.play_round(game) {
                Some(result) => results.push(result),
                None => break,
            }
        }
        results
    }
}
