//! Per-frame advance
//!
//! The host calls `tick` once per display frame. A tick advances the frame
//! counter by exactly one and recomputes the pointer angle, or does nothing.

use super::state::{Game, RoundPhase};

/// Host-provided conditions for a single frame
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    /// Drawing surface can receive this frame
    pub surface_ready: bool,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            surface_ready: true,
        }
    }
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Frame counter advanced; draw the pointer at `angle`
    Advanced { frame: u64, angle: f64 },
    /// Render target unavailable; nothing advanced
    Skipped,
    /// Running but out of tries; pointer frozen
    Suspended,
    /// Not running
    Idle,
}

impl TickOutcome {
    /// Whether the host should request another frame
    pub fn wants_next_frame(&self) -> bool {
        matches!(self, TickOutcome::Advanced { .. } | TickOutcome::Skipped)
    }
}

/// Advance the game by one display frame
pub fn tick(game: &mut Game, input: &TickInput) -> TickOutcome {
    if game.round.phase != RoundPhase::Running {
        return TickOutcome::Idle;
    }
    if game.round.tries_remaining == 0 {
        return TickOutcome::Suspended;
    }
    if !input.surface_ready {
        log::trace!("tick skipped at frame {}: surface not ready", game.round.frame_count);
        return TickOutcome::Skipped;
    }

    game.round.frame_count += 1;
    TickOutcome::Advanced {
        frame: game.round.frame_count,
        angle: game.angle(),
    }
}

/// The host's frame subscription
///
/// Holds at most one pending request handle (e.g. an animation-frame id).
/// Cancelling is idempotent.
#[derive(Debug)]
pub struct FrameLoop<H> {
    pending: Option<H>,
}

impl<H> Default for FrameLoop<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> FrameLoop<H> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a freshly requested frame, returning any handle it replaces
    pub fn subscribe(&mut self, handle: H) -> Option<H> {
        self.pending.replace(handle)
    }

    /// Handle fired; the loop is inactive until resubscribed
    pub fn fired(&mut self) {
        self.pending = None;
    }

    /// Drop the pending request; returns the handle the first time only
    pub fn cancel(&mut self) -> Option<H> {
        self.pending.take()
    }
}
