//! Rectangle element.

use super::{Coordinates, ElementId, Position};
use crate::geometry::near_point;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
///
/// After normalization `x1 <= x2` and `y1 <= y2`; while a rectangle is
/// being actively drawn the endpoints may be in any order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rectangle {
    pub id: ElementId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rectangle {
    /// Create a new rectangle. A freshly placed rectangle is zero-extent
    /// until drawing extends it.
    pub fn new(id: ElementId, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { id, x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f64 {
        (self.x2 - self.x1).abs()
    }

    pub fn height(&self) -> f64 {
        (self.y2 - self.y1).abs()
    }

    /// Corner handles take priority over the body. The corners are
    /// computed from the per-axis min/max, so hit-testing works even on
    /// an un-normalized in-progress rectangle.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<Position> {
        let min_x = self.x1.min(self.x2);
        let max_x = self.x1.max(self.x2);
        let min_y = self.y1.min(self.y2);
        let max_y = self.y1.max(self.y2);

        if near_point(x, y, min_x, min_y) {
            return Some(Position::TopLeft);
        }
        if near_point(x, y, max_x, min_y) {
            return Some(Position::TopRight);
        }
        if near_point(x, y, min_x, max_y) {
            return Some(Position::BottomLeft);
        }
        if near_point(x, y, max_x, max_y) {
            return Some(Position::BottomRight);
        }
        (x >= min_x && x <= max_x && y >= min_y && y <= max_y).then_some(Position::Inside)
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            x1: self.x1,
            y1: self.y1,
            x2: self.x2,
            y2: self.y2,
        }
    }

    pub fn set_coordinates(&mut self, c: Coordinates) {
        self.x1 = c.x1;
        self.y1 = c.y1;
        self.x2 = c.x2;
        self.y2 = c.y2;
    }

    /// Sort the endpoints per axis so (x1, y1) is the top-left corner.
    pub fn normalize(&mut self) {
        let (min_x, max_x) = (self.x1.min(self.x2), self.x1.max(self.x2));
        let (min_y, max_y) = (self.y1.min(self.y2), self.y1.max(self.y2));
        self.x1 = min_x;
        self.y1 = min_y;
        self.x2 = max_x;
        self.y2 = max_y;
    }
}
