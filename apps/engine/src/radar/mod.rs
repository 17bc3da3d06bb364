// Radar chart geometry: percentage vectors → polygon, rings, axes and label anchors.
// The presentation layer owns colours, fonts and animation; only numbers come from here.

pub mod geometry;

pub use geometry::{project, LabelAnchor, Point, RadarAxis, RadarConfig, RadarGeometry, RadarRing};
