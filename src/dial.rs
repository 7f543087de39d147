//! Screen-space dial geometry
//!
//! Hosts draw the dial themselves; this module only answers where things are.
//! The dial is the upper half of a circle around `center`, angle 0 on the
//! right, π on the left.

use glam::DVec2;

use crate::consts::DIAL_RADIUS;
use crate::polar_to_screen;
use crate::sim::{Zone, ZoneTable};

/// Dial placement on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialGeometry {
    pub center: DVec2,
    pub radius: f64,
}

impl DialGeometry {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Dial centered on a `width` x `height` surface, default radius
    pub fn centered(width: f64, height: f64) -> Self {
        Self::new(DVec2::new(width / 2.0, height / 2.0), DIAL_RADIUS)
    }

    /// Where the pointer's knob sits for a given angle
    pub fn pointer_tip(&self, angle: f64) -> DVec2 {
        polar_to_screen(self.center, self.radius, angle)
    }

    /// Closed outline of a zone's sector: center, arc samples, back to center
    pub fn zone_outline(&self, zone: &Zone, num_points: usize) -> Vec<DVec2> {
        let span = zone.angular_span();
        let steps = (num_points.max(2) - 1) as f64;

        let mut points = Vec::with_capacity(num_points.max(2) + 2);
        points.push(self.center);
        points.extend((0..=steps as usize).map(|i| {
            let theta = zone.start + span * (i as f64 / steps);
            polar_to_screen(self.center, self.radius, theta)
        }));
        points.push(self.center);
        points
    }

    /// Outlines for every zone in table order
    pub fn table_outlines(&self, table: &ZoneTable, points_per_zone: usize) -> Vec<Vec<DVec2>> {
        table
            .zones()
            .iter()
            .map(|z| self.zone_outline(z, points_per_zone))
            .collect()
    }
}
