//! Backend-neutral display list renderer.

use crate::outline::{RibbonOutliner, StrokeOutliner};
use crate::renderer::{RenderContext, RenderResult, Renderer};
use kurbo::{Point, Rect};
use scrawl_core::Element;
use serde::{Deserialize, Serialize};

/// A single backend-neutral drawing command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// A straight stroke between two points.
    Segment { from: Point, to: Point },
    /// An axis-aligned rectangle outline.
    Rect(Rect),
    /// A filled closed polygon.
    FillPolygon(Vec<Point>),
    /// A text run anchored at its top-left corner.
    Text { origin: Point, content: String },
}

/// Renderer that lowers the element list into a [`DrawCommand`] buffer.
///
/// Backends replay the buffer in order; command order follows element
/// creation order.
pub struct DisplayListRenderer {
    commands: Vec<DrawCommand>,
    outliner: RibbonOutliner,
}

impl Default for DisplayListRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayListRenderer {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            outliner: RibbonOutliner::default(),
        }
    }

    pub fn with_outliner(outliner: RibbonOutliner) -> Self {
        Self {
            commands: Vec::new(),
            outliner,
        }
    }

    /// The commands produced by the last [`Renderer::build_scene`] call.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    fn lower(&self, element: &Element) -> DrawCommand {
        match element {
            Element::Line(line) => DrawCommand::Segment {
                from: Point::new(line.x1, line.y1),
                to: Point::new(line.x2, line.y2),
            },
            // from_points sorts the corners, so an in-progress rectangle
            // dragged leftwards or upwards still lowers correctly
            Element::Rectangle(rect) => {
                DrawCommand::Rect(Rect::from_points((rect.x1, rect.y1), (rect.x2, rect.y2)))
            }
            Element::Freehand(stroke) => {
                DrawCommand::FillPolygon(self.outliner.outline(&stroke.points))
            }
            Element::Text(text) => DrawCommand::Text {
                origin: Point::new(text.x1, text.y1),
                content: text.content.clone(),
            },
        }
    }
}

impl Renderer for DisplayListRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        self.commands.clear();
        for element in ctx.elements {
            if ctx.editing_element == Some(element.id()) {
                continue;
            }
            self.commands.push(self.lower(element));
        }
        Ok(())
    }
}
