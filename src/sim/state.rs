//! Round state and the commands that drive it
//!
//! `Game` owns the configuration and the single `RoundState`. Hosts call the
//! four commands in response to button presses and `tick` once per frame;
//! nothing else mutates the round.

use serde::{Deserialize, Serialize};

use super::oscillator::Oscillator;
use super::zone::{Category, ZoneTable};
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Waiting for start, no result shown
    #[default]
    Idle,
    /// Pointer swinging, frame counter advancing
    Running,
    /// Pointer stopped, result presented
    Stopped,
}

/// Everything that changes during play
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    pub phase: RoundPhase,
    /// Frames since the current round started
    pub frame_count: u64,
    pub tries_remaining: u32,
    pub last_result: Option<Category>,
}

impl RoundState {
    pub fn new(max_tries: u32) -> Self {
        Self {
            phase: RoundPhase::Idle,
            frame_count: 0,
            tries_remaining: max_tries,
            last_result: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == RoundPhase::Running
    }

    pub fn is_exhausted(&self) -> bool {
        self.tries_remaining == 0
    }
}

/// Emitted by each accepted command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundEvent {
    Started,
    /// Pointer stopped and scored; hosts present the result on this event
    Stopped {
        angle: f64,
        category: Category,
        tries_remaining: u32,
    },
    ResultDismissed,
    Reset,
}

/// Read-only view for hosts (counter label, result dialog)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub phase: RoundPhase,
    pub is_running: bool,
    pub tries_remaining: u32,
    pub max_tries: u32,
    pub last_result: Option<Category>,
    pub angle: f64,
}

/// A configured game and its round state
#[derive(Debug, Clone)]
pub struct Game {
    oscillator: Oscillator,
    table: ZoneTable,
    max_tries: u32,
    pub(crate) round: RoundState,
}

impl Game {
    /// Validate `config` and build a game in the `Idle` phase
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let table = config.build_table()?;
        log::info!(
            "Game configured: {} zones, speed {}, {} tries",
            table.zones().len(),
            config.speed,
            config.max_tries
        );
        Ok(Self {
            oscillator: Oscillator::new(config.speed),
            table,
            max_tries: config.max_tries,
            round: RoundState::new(config.max_tries),
        })
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn zones(&self) -> &ZoneTable {
        &self.table
    }

    pub fn oscillator(&self) -> Oscillator {
        self.oscillator
    }

    pub fn max_tries(&self) -> u32 {
        self.max_tries
    }

    /// Current pointer angle (radians, `[0, π]`)
    pub fn angle(&self) -> f64 {
        self.oscillator.angle_at(self.round.frame_count)
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            phase: self.round.phase,
            is_running: self.round.is_running(),
            tries_remaining: self.round.tries_remaining,
            max_tries: self.max_tries,
            last_result: self.round.last_result,
            angle: self.angle(),
        }
    }

    /// Begin a round from `Idle` or `Stopped`
    pub fn start(&mut self) -> Option<RoundEvent> {
        if self.round.is_running() {
            log::trace!("start ignored: already running");
            return None;
        }
        self.round.frame_count = 0;
        self.round.phase = RoundPhase::Running;
        if self.round.is_exhausted() {
            log::info!("Round started with no tries left; pointer stays frozen");
        } else {
            log::info!("Round started ({} tries left)", self.round.tries_remaining);
        }
        Some(RoundEvent::Started)
    }

    /// Stop the pointer and score it
    pub fn stop(&mut self) -> Option<RoundEvent> {
        if !self.round.is_running() {
            log::trace!("stop ignored: phase {:?}", self.round.phase);
            return None;
        }
        let angle = self.angle();
        let category = self.table.classify(angle.abs());

        self.round.last_result = Some(category);
        self.round.phase = RoundPhase::Stopped;
        self.round.tries_remaining = self.round.tries_remaining.saturating_sub(1);

        log::info!(
            "Stopped at frame {} ({:.3} rad): {} ({} tries left)",
            self.round.frame_count,
            angle,
            category,
            self.round.tries_remaining
        );
        Some(RoundEvent::Stopped {
            angle,
            category,
            tries_remaining: self.round.tries_remaining,
        })
    }

    /// "Try again": close the result without touching the try counter
    pub fn dismiss_result(&mut self) -> Option<RoundEvent> {
        if self.round.phase != RoundPhase::Stopped {
            log::trace!("dismiss ignored: phase {:?}", self.round.phase);
            return None;
        }
        self.round.phase = RoundPhase::Idle;
        Some(RoundEvent::ResultDismissed)
    }

    /// Restore a fresh game from any phase
    pub fn reset_game(&mut self) -> Option<RoundEvent> {
        self.round = RoundState::new(self.max_tries);
        log::info!("Game reset ({} tries)", self.max_tries);
        Some(RoundEvent::Reset)
    }
}
