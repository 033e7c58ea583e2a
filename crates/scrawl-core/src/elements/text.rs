//! Text element.

use super::{Coordinates, ElementId, Position};
use serde::{Deserialize, Serialize};

/// Fixed line height for text elements, in canvas units.
pub const LINE_HEIGHT: f64 = 24.0;

/// Text width measurement collaborator.
///
/// Measuring rendered text needs font metrics the core does not own, so
/// the committed bounding box is computed through this trait.
pub trait TextMeasure {
    /// Width of `content` when rendered, in canvas units.
    fn width(&self, content: &str) -> f64;
}

/// A single-position text label.
///
/// `x2`/`y2` are derived from the measured content width and the fixed
/// line height on commit; they are never set independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    pub id: ElementId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub content: String,
}

impl Text {
    /// Create a new empty text element at the pointer position.
    pub fn new(id: ElementId, x: f64, y: f64) -> Self {
        Self {
            id,
            x1: x,
            y1: y,
            x2: x,
            y2: y,
            content: String::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Text has no resize handles; a hit anywhere in the bounding box is
    /// a body hit.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<Position> {
        (x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2).then_some(Position::Inside)
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

    /// Replace the content and recompute the bounding box from the
    /// measured width and the fixed line height.
    pub fn set_content(&mut self, content: String, measure: &dyn TextMeasure) {
        self.x2 = self.x1 + measure.width(&content);
        self.y2 = self.y1 + LINE_HEIGHT;
        self.content = content;
    }
}
