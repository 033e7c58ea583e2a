//! Scrawl Core Library
//!
//! Platform-agnostic element model, hit testing, undo/redo history and the
//! pointer-driven interaction state machine for the Scrawl canvas.

pub mod editor;
pub mod elements;
pub mod geometry;
pub mod history;
pub mod input;

pub use editor::{Action, BoardError, Editor, Tool};
pub use elements::{
    apply_resize, cursor_for_position, find_element_at, next_element_id, Coordinates, Cursor,
    Element, ElementId, Freehand, Line, Position, Rectangle, Text, TextMeasure, LINE_HEIGHT,
};
pub use history::History;
pub use input::{KeyEvent, Modifiers, PointerEvent};
