//! Freehand stroke element.

use super::{ElementId, Position};
use crate::geometry::{on_segment, PATH_TOLERANCE};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A freehand stroke: an ordered sequence of sampled pointer positions.
///
/// Points are append-only while the stroke is being drawn and are replaced
/// wholesale when the stroke is moved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Freehand {
    pub id: ElementId,
    pub points: Vec<Point>,
}

impl Freehand {
    /// Create a new stroke seeded with its first sampled point.
    pub fn new(id: ElementId, x: f64, y: f64) -> Self {
        Self {
            id,
            points: vec![Point::new(x, y)],
        }
    }

    /// Create from existing points.
    pub fn from_points(id: ElementId, points: Vec<Point>) -> Self {
        Self { id, points }
    }

    /// Append a sampled point to the stroke.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A stroke is hit when the point lies on any of the segments between
    /// consecutive sampled points. Strokes have no resize handles.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<Position> {
        self.points
            .windows(2)
            .any(|w| on_segment(w[0].x, w[0].y, w[1].x, w[1].y, x, y, PATH_TOLERANCE))
            .then_some(Position::Inside)
    }
}
