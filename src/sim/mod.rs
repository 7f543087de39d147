//! Deterministic game engine
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Angle derived only from the frame counter and speed
//! - One frame per tick, no wall-clock time
//! - No rendering or platform dependencies

pub mod oscillator;
pub mod state;
pub mod tick;
pub mod zone;

pub use oscillator::{Oscillator, angle_at, period_frames};
pub use state::{Game, RoundEvent, RoundPhase, RoundSnapshot, RoundState};
pub use tick::{FrameLoop, TickInput, TickOutcome, tick};
pub use zone::{Category, Zone, ZoneTable};
