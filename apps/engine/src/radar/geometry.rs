//! Radar Geometry Projector.
//!
//! Category `i` of `N` sits at angle `θᵢ = i · 2π/N − π/2`: category 0 points straight up
//! and the rest follow clockwise in screen coordinates (y grows downwards). A percentage
//! `p` lands at radius `p/100 · outer_radius` along its axis.
//!
//! Geometry is recomputed on every call; nothing is cached between vectors.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::normalizer::{clamp_percent, MAX_PERCENT};

// ────────────────────────────────────────────────────────────────────────────
// Configuration
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Chart dimensions in presentation units (typically device-independent pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarConfig {
    pub outer_radius: f64,
    pub ring_count: usize,
    pub center: Point,
    /// Extra distance past `outer_radius` at which axis labels are anchored.
    pub label_offset: f64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            outer_radius: 120.0,
            ring_count: 5,
            center: Point::new(150.0, 150.0),
            label_offset: 18.0,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// Background grid circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarRing {
    pub radius: f64,
    pub percent: f64,
}

/// Full-length spoke from the centre to `outer_radius`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarAxis {
    pub angle: f64, // radians
    pub end: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelAnchor {
    pub label: String,
    pub value: f64,
    pub point: Point,
}

/// Everything needed to draw one radar chart.
///
/// `polygon`, `axes` and `labels` are index-aligned with the input vector, so the
/// presentation layer can connect consecutive polygon points directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadarGeometry {
    pub polygon: Vec<Point>,
    pub rings: Vec<RadarRing>,
    pub axes: Vec<RadarAxis>,
    pub labels: Vec<LabelAnchor>,
}

impl RadarGeometry {
    pub fn ring_radii(&self) -> Vec<f64> {
        self.rings.iter().map(|r| r.radius).collect()
    }

    /// True when there is nothing to plot (no categories).
    pub fn is_empty(&self) -> bool {
        self.polygon.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Projection
// ────────────────────────────────────────────────────────────────────────────

/// Angle of category `index` out of `count`, in radians.
pub fn axis_angle(index: usize, count: usize) -> f64 {
    index as f64 * (TAU / count as f64) - FRAC_PI_2
}

fn polar(center: &Point, radius: f64, angle: f64) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// Projects an ordered `(label, percentage)` vector onto radar coordinates.
///
/// Percentages are clamped to `[0, 100]` (NaN → 0). An empty vector yields no polygon,
/// axes or labels; rings depend only on the config and are always produced.
pub fn project<L: AsRef<str>>(vector: &[(L, f64)], config: &RadarConfig) -> RadarGeometry {
    let count = vector.len();
    let center = config.center;

    let rings = (1..=config.ring_count)
        .map(|k| {
            let fraction = k as f64 / config.ring_count as f64;
            RadarRing {
                radius: config.outer_radius * fraction,
                percent: fraction * MAX_PERCENT,
            }
        })
        .collect();

    let mut polygon = Vec::with_capacity(count);
    let mut axes = Vec::with_capacity(count);
    let mut labels = Vec::with_capacity(count);

    for (i, (label, value)) in vector.iter().enumerate() {
        let angle = axis_angle(i, count);
        let value = clamp_percent(*value);

        polygon.push(polar(&center, value / MAX_PERCENT * config.outer_radius, angle));
        axes.push(RadarAxis {
            angle,
            end: polar(&center, config.outer_radius, angle),
        });
        labels.push(LabelAnchor {
            label: label.as_ref().to_string(),
            value,
            point: polar(&center, config.outer_radius + config.label_offset, angle),
        });
    }

    debug!(categories = count, rings = config.ring_count, "radar geometry projected");

    RadarGeometry {
        polygon,
        rings,
        axes,
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_point(actual: &Point, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < EPS && (actual.y - y).abs() < EPS,
            "expected ({x}, {y}), got ({}, {})",
            actual.x,
            actual.y
        );
    }

    fn config(outer_radius: f64, ring_count: usize) -> RadarConfig {
        RadarConfig {
            outer_radius,
            ring_count,
            center: Point::new(150.0, 150.0),
            label_offset: 18.0,
        }
    }

    #[test]
    fn test_one_point_per_category_and_ring_count_rings() {
        let vector = [("a", 10.0), ("b", 20.0), ("c", 30.0), ("d", 40.0), ("e", 50.0)];
        let geometry = project(&vector, &config(120.0, 4));
        assert_eq!(geometry.polygon.len(), 5);
        assert_eq!(geometry.axes.len(), 5);
        assert_eq!(geometry.labels.len(), 5);
        assert_eq!(geometry.ring_radii(), vec![30.0, 60.0, 90.0, 120.0]);
        let percents: Vec<f64> = geometry.rings.iter().map(|r| r.percent).collect();
        assert_eq!(percents, vec![25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_first_category_points_up_then_clockwise() {
        let vector = [("top", 100.0), ("right", 100.0), ("bottom", 100.0), ("left", 100.0)];
        let geometry = project(&vector, &config(100.0, 1));
        assert_point(&geometry.polygon[0], 150.0, 50.0);
        assert_point(&geometry.polygon[1], 250.0, 150.0);
        assert_point(&geometry.polygon[2], 150.0, 250.0);
        assert_point(&geometry.polygon[3], 50.0, 150.0);
    }

    #[test]
    fn test_all_hundred_sits_on_outer_radius() {
        let vector: Vec<(String, f64)> = (0..7).map(|i| (format!("c{i}"), 100.0)).collect();
        let cfg = config(120.0, 5);
        let geometry = project(&vector, &cfg);
        for point in &geometry.polygon {
            assert!((point.distance_to(&cfg.center) - 120.0).abs() < EPS);
        }
        for axis in &geometry.axes {
            assert!((axis.end.distance_to(&cfg.center) - 120.0).abs() < EPS);
        }
    }

    #[test]
    fn test_all_zero_collapses_to_center() {
        let vector = [("a", 0.0), ("b", 0.0), ("c", 0.0)];
        let geometry = project(&vector, &config(120.0, 5));
        assert_eq!(geometry.polygon.len(), 3);
        for point in &geometry.polygon {
            assert_point(point, 150.0, 150.0);
        }
    }

    #[test]
    fn test_empty_vector_has_no_polygon_or_axes() {
        let vector: [(&str, f64); 0] = [];
        let geometry = project(&vector, &config(120.0, 5));
        assert!(geometry.is_empty());
        assert!(geometry.axes.is_empty());
        assert!(geometry.labels.is_empty());
        assert_eq!(geometry.rings.len(), 5);
    }

    #[test]
    fn test_knowledge_scenario_six_categories() {
        let vector = [
            ("Matemáticas", 100.0),
            ("Médico-Biológicas", 0.0),
            ("Ingeniería y Tecnología", 50.0),
            ("Sociales y Humanísticas", 0.0),
            ("Artes y Diseño", 0.0),
            ("Económicas y Administrativas", 0.0),
        ];
        let geometry = project(&vector, &config(120.0, 5));
        assert_point(&geometry.polygon[0], 150.0, 30.0);
        assert_point(&geometry.polygon[1], 150.0, 150.0);
        // axis 2 at 2·60° − 90° = 30°
        let angle = std::f64::consts::FRAC_PI_6;
        assert_point(
            &geometry.polygon[2],
            150.0 + 60.0 * angle.cos(),
            150.0 + 60.0 * angle.sin(),
        );
    }

    #[test]
    fn test_values_outside_range_are_clamped() {
        let vector = [("a", 250.0), ("b", -10.0), ("c", f64::NAN)];
        let cfg = config(80.0, 2);
        let geometry = project(&vector, &cfg);
        assert!((geometry.polygon[0].distance_to(&cfg.center) - 80.0).abs() < EPS);
        assert_point(&geometry.polygon[1], 150.0, 150.0);
        assert_point(&geometry.polygon[2], 150.0, 150.0);
        assert_eq!(geometry.labels[0].value, 100.0);
    }

    #[test]
    fn test_labels_anchor_past_outer_radius() {
        let vector = [("Salud", 40.0), ("Social", 60.0), ("Científico", 10.0)];
        let cfg = config(120.0, 5);
        let geometry = project(&vector, &cfg);
        assert_eq!(geometry.labels[0].label, "Salud");
        assert_point(&geometry.labels[0].point, 150.0, 150.0 - 138.0);
        for anchor in &geometry.labels {
            assert!((anchor.point.distance_to(&cfg.center) - 138.0).abs() < EPS);
        }
    }

    #[test]
    fn test_zero_rings() {
        let geometry = project(&[("a", 1.0), ("b", 2.0), ("c", 3.0)], &config(120.0, 0));
        assert!(geometry.rings.is_empty());
    }
}
