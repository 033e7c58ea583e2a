//! Line element.

use super::{Coordinates, ElementId, Position};
use crate::geometry::{distance, near_point, on_segment, LINE_TOLERANCE};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A straight line segment between two endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    pub id: ElementId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Line {
    /// Create a new line. A freshly placed line is zero-extent (both
    /// endpoints at the pointer) until drawing extends it.
    pub fn new(id: ElementId, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { id, x1, y1, x2, y2 }
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        distance(Point::new(self.x1, self.y1), Point::new(self.x2, self.y2))
    }

    /// Endpoint handles take priority over the body.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<Position> {
        if near_point(x, y, self.x1, self.y1) {
            return Some(Position::Start);
        }
        if near_point(x, y, self.x2, self.y2) {
            return Some(Position::End);
        }
        on_segment(self.x1, self.y1, self.x2, self.y2, x, y, LINE_TOLERANCE)
            .then_some(Position::Inside)
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

    /// Put the endpoints into canonical downward order (ties broken
    /// rightward) by swapping them wholesale. A line drawn bottom-to-top
    /// is always fully swapped, even when its x-order was already correct,
    /// so `Start` consistently names the upper endpoint.
    pub fn normalize(&mut self) {
        let keep = self.y1 < self.y2 || (self.y1 == self.y2 && self.x1 <= self.x2);
        if !keep {
            std::mem::swap(&mut self.x1, &mut self.x2);
            std::mem::swap(&mut self.y1, &mut self.y2);
        }
    }
}
