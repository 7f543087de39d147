//! Frame counter to pointer angle
//!
//! The pointer swings over the dial as a triangle wave: progress grows
//! linearly with frames, wraps every full turn, and is folded back so the
//! angle climbs from 0 to π and then returns to 0.

use std::f64::consts::{PI, TAU};

use crate::consts::TICK_SCALE;

/// Pointer angle (radians, in `[0, π]`) after `frame_count` frames
#[inline]
pub fn angle_at(frame_count: u64, speed: f64) -> f64 {
    let progress = (frame_count as f64 * TICK_SCALE * speed).rem_euclid(TAU);
    if progress <= PI { progress } else { TAU - progress }
}

/// Frames for one full swing out and back
#[inline]
pub fn period_frames(speed: f64) -> f64 {
    TAU / (TICK_SCALE * speed)
}

/// Oscillator bound to a configured speed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    pub speed: f64,
}

impl Oscillator {
    pub fn new(speed: f64) -> Self {
        Self { speed }
    }

    pub fn angle_at(&self, frame_count: u64) -> f64 {
        angle_at(frame_count, self.speed)
    }

    pub fn period_frames(&self) -> f64 {
        period_frames(self.speed)
    }
}
