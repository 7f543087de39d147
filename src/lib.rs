//! Dial Stop - A half-circle reflex game
//!
//! Core modules:
//! - `sim`: Deterministic engine (oscillator, zone scoring, round state)
//! - `config`: Startup configuration and presets
//! - `dial`: Screen-space geometry for hosts that draw the dial
//! - `demo`: Seeded autoplayer used by the headless binary
//! - `platform`: Browser host bindings

pub mod config;
pub mod demo;
pub mod dial;
pub mod error;
pub mod platform;
pub mod sim;

pub use config::{GameConfig, Preset, ZoneConfig};
pub use error::ConfigError;
pub use sim::{Category, Game, RoundEvent, RoundPhase, TickInput, TickOutcome, ZoneTable};

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Radians of oscillator progress per frame at speed 1.0
    pub const TICK_SCALE: f64 = 0.01;

    /// Default number of tries per game
    pub const MAX_TRIES: u32 = 3;

    /// Default angular speed multiplier
    pub const DEFAULT_SPEED: f64 = 1.0;

    /// Tolerance when checking that neighbouring zones share a boundary
    pub const ANGLE_EPSILON: f64 = 1e-9;

    /// Default dial radius (pixels)
    pub const DIAL_RADIUS: f64 = 150.0;
}

/// Convert a dial angle to a screen-space point
///
/// Screen y grows downward, so angle 0 lies to the right of `center` and
/// angle π to the left, sweeping through the top of the dial.
#[inline]
pub fn polar_to_screen(center: DVec2, r: f64, theta: f64) -> DVec2 {
    center + DVec2::new(r * theta.cos(), -r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_polar_to_screen() {
        let c = DVec2::new(300.0, 300.0);
        let right = polar_to_screen(c, 150.0, 0.0);
        assert!((right - DVec2::new(450.0, 300.0)).length() < 1e-9);

        let top = polar_to_screen(c, 150.0, FRAC_PI_2);
        assert!((top - DVec2::new(300.0, 150.0)).length() < 1e-9);

        let left = polar_to_screen(c, 150.0, PI);
        assert!((left - DVec2::new(150.0, 300.0)).length() < 1e-9);
    }
}
