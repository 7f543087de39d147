//! Scored zones on the dial
//!
//! A zone is an angular slice of the half-circle `[0, π]`:
//! - start, end: angular extent in radians, both inclusive
//! - label: the category reported when the pointer stops inside it
//!
//! A table is an ordered, contiguous list of zones covering the whole dial.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::consts::ANGLE_EPSILON;
use crate::error::ConfigError;

/// Result category, ordered by severity (lowest first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Green,
    Blue,
    Yellow,
    Orange,
    Red,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Green,
        Category::Blue,
        Category::Yellow,
        Category::Orange,
        Category::Red,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Green => "Green",
            Category::Blue => "Blue",
            Category::Yellow => "Yellow",
            Category::Orange => "Orange",
            Category::Red => "Red",
        }
    }

    /// Sector fill and stroke colors (RGBA)
    pub fn colors(&self) -> ([u8; 4], [u8; 4]) {
        match self {
            Category::Green => ([0, 255, 0, 77], [0, 200, 0, 204]),
            Category::Blue => ([0, 120, 255, 77], [0, 90, 200, 204]),
            Category::Yellow => ([255, 255, 0, 77], [200, 200, 0, 204]),
            Category::Orange => ([255, 165, 0, 77], [200, 140, 0, 204]),
            Category::Red => ([255, 0, 0, 77], [200, 0, 0, 204]),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An angular slice of the dial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    /// Start angle (radians)
    pub start: f64,
    /// End angle (radians)
    pub end: f64,
    pub label: Category,
}

impl Zone {
    pub fn new(start: f64, end: f64, label: Category) -> Self {
        Self { start, end, label }
    }

    /// Zone with bounds given as fractions of π
    pub fn from_pi_fractions(from: f64, to: f64, label: Category) -> Self {
        Self::new(PI * from, PI * to, label)
    }

    /// Both bounds inclusive
    #[inline]
    pub fn contains_angle(&self, theta: f64) -> bool {
        theta >= self.start && theta <= self.end
    }

    pub fn angular_span(&self) -> f64 {
        self.end - self.start
    }

    pub fn mid_angle(&self) -> f64 {
        self.start + self.angular_span() / 2.0
    }
}

/// Validated, immutable zone table
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneTable {
    zones: Vec<Zone>,
    fallback: Category,
}

impl ZoneTable {
    /// Build a table, rejecting anything that does not tile `[0, π]`
    ///
    /// Bounds within `ANGLE_EPSILON` of the dial edges or of their neighbour
    /// are snapped, so an accepted table is exactly contiguous.
    pub fn new(mut zones: Vec<Zone>) -> Result<Self, ConfigError> {
        let (first, last) = match (zones.first(), zones.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(ConfigError::EmptyZones),
        };

        check_bounds(&zones)?;

        if first.start.abs() > ANGLE_EPSILON {
            return Err(ConfigError::Coverage {
                edge: "start",
                value: first.start,
            });
        }
        if (last.end - PI).abs() > ANGLE_EPSILON {
            return Err(ConfigError::Coverage {
                edge: "end",
                value: last.end,
            });
        }

        for (index, pair) in zones.windows(2).enumerate() {
            if (pair[1].start - pair[0].end).abs() > ANGLE_EPSILON {
                return Err(ConfigError::NotContiguous {
                    index: index + 1,
                    previous_end: pair[0].end,
                    start: pair[1].start,
                });
            }
        }

        for i in 1..zones.len() {
            zones[i].start = zones[i - 1].end;
        }
        let last_index = zones.len() - 1;
        zones[0].start = 0.0;
        zones[last_index].end = PI;
        check_bounds(&zones)?;

        let fallback = zones
            .iter()
            .map(|z| z.label)
            .min()
            .unwrap_or(Category::Green);

        Ok(Self { zones, fallback })
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Category reported when no zone matches
    pub fn fallback(&self) -> Category {
        self.fallback
    }

    /// First zone (in start order) containing `angle`
    pub fn zone_at(&self, angle: f64) -> Option<&Zone> {
        self.zones.iter().find(|z| z.contains_angle(angle))
    }

    /// Score a stopped pointer
    ///
    /// Shared boundaries belong to the earlier zone. Angles outside every
    /// zone (NaN, or float noise past π) score as the fallback category.
    pub fn classify(&self, angle: f64) -> Category {
        match self.zone_at(angle) {
            Some(zone) => {
                log::debug!(
                    "zone={} start={:.4} end={:.4} angle={:.4}",
                    zone.label,
                    zone.start,
                    zone.end,
                    angle
                );
                zone.label
            }
            None => {
                log::debug!("angle={angle:.4} outside all zones, using {}", self.fallback);
                self.fallback
            }
        }
    }
}

fn check_bounds(zones: &[Zone]) -> Result<(), ConfigError> {
    for (index, zone) in zones.iter().enumerate() {
        if !zone.start.is_finite() || !zone.end.is_finite() || zone.start >= zone.end {
            return Err(ConfigError::InvalidZone {
                index,
                start: zone.start,
                end: zone.end,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, Preset};
    use proptest::prelude::*;

    fn classic() -> ZoneTable {
        GameConfig::from_preset(Preset::Classic).build_table().unwrap()
    }

    #[test]
    fn test_zone_contains_angle_inclusive() {
        let zone = Zone::new(0.5, 1.0, Category::Red);
        assert!(zone.contains_angle(0.5));
        assert!(zone.contains_angle(0.75));
        assert!(zone.contains_angle(1.0));
        assert!(!zone.contains_angle(0.49));
        assert!(!zone.contains_angle(1.01));
        assert!((zone.mid_angle() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_category_order_and_colors() {
        assert!(Category::Green < Category::Red);
        assert_eq!(Category::ALL.iter().min(), Some(&Category::Green));
        let (fill, stroke) = Category::Orange.colors();
        assert_eq!(fill, [255, 165, 0, 77]);
        assert_eq!(stroke, [200, 140, 0, 204]);
        assert_eq!(Category::Yellow.to_string(), "Yellow");
    }

    #[test]
    fn test_classify_classic_zones() {
        let table = classic();
        assert_eq!(table.classify(0.0), Category::Green);
        assert_eq!(table.classify(0.5), Category::Green);
        assert_eq!(table.classify(PI * 0.3), Category::Yellow);
        assert_eq!(table.classify(PI * 0.4), Category::Orange);
        assert_eq!(table.classify(PI * 0.5), Category::Red);
        assert_eq!(table.classify(PI * 0.6), Category::Orange);
        assert_eq!(table.classify(PI * 0.7), Category::Yellow);
        assert_eq!(table.classify(PI * 0.9), Category::Green);
        assert_eq!(table.classify(PI), Category::Green);
    }

    #[test]
    fn test_shared_boundary_goes_to_earlier_zone() {
        let table = classic();
        // 0.25π ends Green and starts Yellow
        assert_eq!(table.classify(PI * 0.25), Category::Green);
        // 0.45π ends Orange and starts Red
        assert_eq!(table.classify(PI * 0.45), Category::Orange);
        // 0.55π ends Red and starts Orange
        assert_eq!(table.classify(PI * 0.55), Category::Red);
    }

    #[test]
    fn test_unmatched_angle_uses_fallback() {
        let table = ZoneTable::new(vec![
            Zone::from_pi_fractions(0.0, 0.5, Category::Red),
            Zone::from_pi_fractions(0.5, 1.0, Category::Yellow),
        ])
        .unwrap();
        assert_eq!(table.fallback(), Category::Yellow);
        assert_eq!(table.classify(f64::NAN), Category::Yellow);
        assert_eq!(table.classify(PI + 1e-6), Category::Yellow);
        assert!(table.zone_at(-0.1).is_none());
    }

    #[test]
    fn test_near_miss_bounds_are_snapped() {
        let table = ZoneTable::new(vec![
            Zone::new(5e-10, 1.0, Category::Red),
            Zone::new(1.0 + 5e-10, PI - 5e-10, Category::Yellow),
        ])
        .unwrap();

        assert_eq!(table.zones()[0].start, 0.0);
        assert_eq!(table.zones()[1].start, 1.0);
        assert_eq!(table.zones()[1].end, PI);

        assert_eq!(table.classify(0.0), Category::Red);
        assert_eq!(table.zone_at(1.0 + 2e-10).map(|z| z.label), Some(Category::Yellow));
        assert_eq!(table.zone_at(PI).map(|z| z.label), Some(Category::Yellow));
    }

    #[test]
    fn test_rejects_empty_table() {
        assert!(matches!(ZoneTable::new(vec![]), Err(ConfigError::EmptyZones)));
    }

    #[test]
    fn test_rejects_gap() {
        let err = ZoneTable::new(vec![
            Zone::from_pi_fractions(0.0, 0.4, Category::Green),
            Zone::from_pi_fractions(0.5, 1.0, Category::Red),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::NotContiguous { index: 1, .. }));
    }

    #[test]
    fn test_rejects_overlap() {
        let err = ZoneTable::new(vec![
            Zone::from_pi_fractions(0.0, 0.6, Category::Green),
            Zone::from_pi_fractions(0.5, 1.0, Category::Red),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::NotContiguous { .. }));
    }

    #[test]
    fn test_rejects_partial_coverage() {
        let err = ZoneTable::new(vec![Zone::from_pi_fractions(0.1, 1.0, Category::Green)])
            .unwrap_err();
        assert!(matches!(err, ConfigError::Coverage { edge: "start", .. }));

        let err = ZoneTable::new(vec![Zone::from_pi_fractions(0.0, 0.9, Category::Green)])
            .unwrap_err();
        assert!(matches!(err, ConfigError::Coverage { edge: "end", .. }));
    }

    #[test]
    fn test_rejects_inverted_zone() {
        let err = ZoneTable::new(vec![
            Zone::from_pi_fractions(0.0, 0.5, Category::Green),
            Zone::new(PI * 0.5, PI * 0.5, Category::Red),
            Zone::from_pi_fractions(0.5, 1.0, Category::Green),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidZone { index: 1, .. }));
    }

    proptest! {
        #[test]
        fn prop_every_dial_angle_hits_a_zone(t in 0.0f64..=1.0) {
            let table = classic();
            prop_assert!(table.zone_at(t * PI).is_some());
        }
    }
}
