//! Element definitions for the sketch canvas.

mod freehand;
mod line;
mod rectangle;
mod text;

pub use freehand::Freehand;
pub use line::Line;
pub use rectangle::Rectangle;
pub use text::{Text, TextMeasure, LINE_HEIGHT};

use serde::{Deserialize, Serialize};

/// Element identifier.
///
/// Ids are small integers assigned at creation (the length of the element
/// list at that moment, or one past the highest surviving id after a
/// delete). They are stable for the lifetime of the element: deletion never
/// renumbers the remaining elements, and lookups always resolve an id by
/// search rather than by indexing into the list.
pub type ElementId = usize;

/// The named hit region of an element returned by hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    /// Top-left corner handle of a rectangle.
    TopLeft,
    /// Top-right corner handle of a rectangle.
    TopRight,
    /// Bottom-left corner handle of a rectangle.
    BottomLeft,
    /// Bottom-right corner handle of a rectangle.
    BottomRight,
    /// First endpoint of a line.
    Start,
    /// Second endpoint of a line.
    End,
    /// Body of the element (move target, no resize handle).
    Inside,
}

/// Cursor feedback for hovering over an element region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Diagonal NW/SE resize.
    NwseResize,
    /// Diagonal NE/SW resize.
    NeswResize,
    /// Body of an element under the selection tool.
    Move,
    /// Hovering a deletable element under the delete tool.
    NotAllowed,
}

/// Endpoint coordinates shared by line, rectangle and text elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Enum wrapper for all element kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Element {
    Line(Line),
    Rectangle(Rectangle),
    Freehand(Freehand),
    Text(Text),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Line(e) => e.id,
            Element::Rectangle(e) => e.id,
            Element::Freehand(e) => e.id,
            Element::Text(e) => e.id,
        }
    }

    /// Human-readable kind name, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Line(_) => "line",
            Element::Rectangle(_) => "rectangle",
            Element::Freehand(_) => "freehand",
            Element::Text(_) => "text",
        }
    }

    /// Check where (x, y) falls with respect to this element.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<Position> {
        match self {
            Element::Line(e) => e.hit_test(x, y),
            Element::Rectangle(e) => e.hit_test(x, y),
            Element::Freehand(e) => e.hit_test(x, y),
            Element::Text(e) => e.hit_test(x, y),
        }
    }

    /// Endpoint coordinates, for kinds that have them.
    /// Freehand strokes are point lists and return `None`.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            Element::Line(e) => Some(e.coordinates()),
            Element::Rectangle(e) => Some(e.coordinates()),
            Element::Text(e) => Some(e.coordinates()),
            Element::Freehand(_) => None,
        }
    }

    /// Replace the endpoint coordinates. No-op for freehand strokes.
    pub fn set_coordinates(&mut self, coordinates: Coordinates) {
        match self {
            Element::Line(e) => e.set_coordinates(coordinates),
            Element::Rectangle(e) => e.set_coordinates(coordinates),
            Element::Text(e) => e.set_coordinates(coordinates),
            Element::Freehand(_) => {}
        }
    }

    /// Whether this kind needs coordinate normalization after drawing or
    /// resizing. Only kinds whose handle semantics depend on endpoint
    /// order qualify.
    pub fn adjustment_required(&self) -> bool {
        matches!(self, Element::Line(_) | Element::Rectangle(_))
    }

    /// Put the endpoints into canonical order. The normalization is
    /// idempotent; freehand and text elements are left untouched.
    pub fn normalize(&mut self) {
        match self {
            Element::Line(e) => e.normalize(),
            Element::Rectangle(e) => e.normalize(),
            Element::Freehand(_) | Element::Text(_) => {}
        }
    }
}

/// Find the first element hit at (x, y), scanning in creation order.
/// On overlap the earliest-created element wins; there is no z-order
/// beyond creation order.
pub fn find_element_at(x: f64, y: f64, elements: &[Element]) -> Option<(&Element, Position)> {
    elements
        .iter()
        .find_map(|element| element.hit_test(x, y).map(|position| (element, position)))
}

/// The id to assign to the next created element.
///
/// One past the highest live id, so a delete in the middle of the list can
/// never hand out an id that is still in use.
pub fn next_element_id(elements: &[Element]) -> ElementId {
    elements
        .iter()
        .map(Element::id)
        .max()
        .map_or(0, |max| max + 1)
}

/// Recompute endpoint coordinates for a drag on the given handle.
/// Returns `None` when the position carries no resize handle (a body hit),
/// in which case no resize is performed.
pub fn apply_resize(x: f64, y: f64, position: Position, c: Coordinates) -> Option<Coordinates> {
    match position {
        Position::TopLeft | Position::Start => Some(Coordinates { x1: x, y1: y, ..c }),
        Position::TopRight => Some(Coordinates { y1: y, x2: x, ..c }),
        Position::BottomLeft => Some(Coordinates { x1: x, y2: y, ..c }),
        Position::BottomRight | Position::End => Some(Coordinates { x2: x, y2: y, ..c }),
        Position::Inside => None,
    }
}

/// Cursor to show while hovering the given hit region.
pub fn cursor_for_position(position: Position) -> Cursor {
    match position {
        Position::TopLeft | Position::BottomRight | Position::Start | Position::End => {
            Cursor::NwseResize
        }
        Position::TopRight | Position::BottomLeft => Cursor::NeswResize,
        Position::Inside => Cursor::Move,
    }
}
