//! The pointer-driven interaction state machine.

use crate::elements::{
    apply_resize, cursor_for_position, find_element_at, next_element_id, Coordinates, Cursor,
    Element, ElementId, Freehand, Line, Position, Rectangle, Text, TextMeasure,
};
use crate::history::History;
use crate::input::{KeyEvent, Modifiers, PointerEvent};
use kurbo::Point;
use thiserror::Error;
use uuid::Uuid;

/// Board errors.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("invalid board document: {0}")]
    Document(#[from] serde_json::Error),
}

/// User-chosen creation/selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Selection,
    Line,
    Rectangle,
    Pencil,
    Text,
    Delete,
}

/// The machine's current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Idle,
    Drawing,
    Moving,
    Resizing,
    Writing,
}

/// Pointer offsets captured at the start of a drag so the grabbed element
/// tracks the pointer without jumping.
#[derive(Debug, Clone)]
enum Grab {
    /// Single offset from the element's first coordinate pair.
    Offset { dx: f64, dy: f64 },
    /// One offset per sampled point, so a moved stroke keeps its shape.
    PointOffsets { xs: Vec<f64>, ys: Vec<f64> },
}

/// Transient reference to the element under manipulation. Never stored in
/// history; cleared whenever the machine returns to idle.
#[derive(Debug, Clone)]
struct SelectedElement {
    id: ElementId,
    /// Hit region that started the interaction (`None` for a freshly
    /// created element).
    position: Option<Position>,
    grab: Grab,
    /// The element's first coordinate pair at grab time, used to tell a
    /// click from a drag on release.
    origin: Point,
}

/// An editing session over one board: the element list behind a versioned
/// history, the active tool and the interaction state.
///
/// All mutations happen synchronously inside a pointer or keyboard event
/// handler; the editor exclusively owns its history and element list.
#[derive(Debug, Clone)]
pub struct Editor {
    /// Unique board identifier.
    pub id: Uuid,
    /// Board name.
    pub name: String,
    history: History,
    tool: Tool,
    action: Action,
    selection: Option<SelectedElement>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Create an editor over an empty board.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: "Untitled".to_string(),
            history: History::new(),
            tool: Tool::default(),
            action: Action::default(),
            selection: None,
        }
    }

    /// Create an editor whose initial snapshot is the given element list.
    pub fn with_elements(elements: Vec<Element>) -> Self {
        Self {
            history: History::with_elements(elements),
            ..Self::new()
        }
    }

    /// The active element list.
    pub fn elements(&self) -> &[Element] {
        self.history.current()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Set the active tool. Callers must only switch tools while the
    /// machine is idle; switching mid-gesture is unsupported.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.action != Action::Idle {
            log::warn!("tool changed to {tool:?} while {:?}", self.action);
        }
        self.tool = tool;
    }

    /// Id of the currently selected element, if any.
    pub fn selected_element(&self) -> Option<ElementId> {
        self.selection.as_ref().map(|s| s.id)
    }

    /// Id of the element open for text editing, to be excluded from
    /// rendering while the edit widget covers it.
    pub fn editing_element(&self) -> Option<ElementId> {
        match self.action {
            Action::Writing => self.selected_element(),
            _ => None,
        }
    }

    /// Dispatch a pointer event to the down/move/up handlers.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position } => self.pointer_up(position),
        }
    }

    /// Undo/redo keyboard shortcuts: Ctrl/Cmd+Z undoes, Ctrl/Cmd+Y or
    /// Ctrl/Cmd+Shift+Z redoes. The caller scopes the listener to the
    /// canvas so keystrokes typed into the text widget never land here.
    pub fn handle_key_event(&mut self, event: &KeyEvent, modifiers: Modifiers) {
        let KeyEvent::Pressed(key) = event else {
            return;
        };
        if !modifiers.action_mod() {
            return;
        }
        match key.as_str() {
            "z" | "Z" => {
                if modifiers.shift {
                    self.redo();
                } else {
                    self.undo();
                }
            }
            "y" | "Y" => {
                self.redo();
            }
            _ => {}
        }
    }

    pub fn pointer_down(&mut self, p: Point) {
        // Must blur out of an open text edit first
        if self.action == Action::Writing {
            return;
        }

        match self.tool {
            Tool::Selection => self.begin_manipulation(p),
            Tool::Line | Tool::Rectangle | Tool::Pencil | Tool::Text => self.begin_drawing(p),
            Tool::Delete => self.delete_at(p),
        }
    }

    fn begin_manipulation(&mut self, p: Point) {
        let Some((element, position)) = find_element_at(p.x, p.y, self.history.current()) else {
            return;
        };
        let id = element.id();
        let (grab, origin) = match element {
            Element::Freehand(stroke) => {
                let grab = Grab::PointOffsets {
                    xs: stroke.points.iter().map(|pt| p.x - pt.x).collect(),
                    ys: stroke.points.iter().map(|pt| p.y - pt.y).collect(),
                };
                (grab, stroke.points[0])
            }
            _ => {
                // coordinates() is Some for every non-freehand kind
                let c = element.coordinates().unwrap_or(Coordinates {
                    x1: p.x,
                    y1: p.y,
                    x2: p.x,
                    y2: p.y,
                });
                let grab = Grab::Offset {
                    dx: p.x - c.x1,
                    dy: p.y - c.y1,
                };
                (grab, Point::new(c.x1, c.y1))
            }
        };
        self.selection = Some(SelectedElement {
            id,
            position: Some(position),
            grab,
            origin,
        });

        // A no-op copy of the current state, so the upcoming drag
        // overwrites its own history entry instead of the previous one
        self.history.append(self.history.current().to_vec());

        self.action = if position == Position::Inside {
            Action::Moving
        } else {
            Action::Resizing
        };
        log::debug!("element {id} grabbed at {position:?}, action {:?}", self.action);
    }

    fn begin_drawing(&mut self, p: Point) {
        let mut elements = self.history.current().to_vec();
        let id = next_element_id(&elements);
        let element = match self.tool {
            Tool::Line => Element::Line(Line::new(id, p.x, p.y, p.x, p.y)),
            Tool::Rectangle => Element::Rectangle(Rectangle::new(id, p.x, p.y, p.x, p.y)),
            Tool::Pencil => Element::Freehand(Freehand::new(id, p.x, p.y)),
            Tool::Text => Element::Text(Text::new(id, p.x, p.y)),
            Tool::Selection | Tool::Delete => return,
        };
        log::debug!("created {} element {id} at ({}, {})", element.kind(), p.x, p.y);
        elements.push(element);
        self.history.append(elements);

        self.selection = Some(SelectedElement {
            id,
            position: None,
            grab: Grab::Offset { dx: 0.0, dy: 0.0 },
            origin: p,
        });
        self.action = if self.tool == Tool::Text {
            Action::Writing
        } else {
            Action::Drawing
        };
    }

    fn delete_at(&mut self, p: Point) {
        let Some((element, _)) = find_element_at(p.x, p.y, self.history.current()) else {
            return;
        };
        let id = element.id();
        let elements: Vec<Element> = self
            .history
            .current()
            .iter()
            .filter(|e| e.id() != id)
            .cloned()
            .collect();
        self.history.append(elements);
        log::debug!("deleted element {id}");
    }

    pub fn pointer_move(&mut self, p: Point) {
        match self.action {
            Action::Drawing => self.extend_drawing(p),
            Action::Moving => self.move_selected(p),
            Action::Resizing => self.resize_selected(p),
            Action::Idle | Action::Writing => {}
        }
    }

    fn extend_drawing(&mut self, p: Point) {
        let Some(id) = self.selected_element() else {
            return;
        };
        let mut elements = self.history.current().to_vec();
        let Some(element) = elements.iter_mut().find(|e| e.id() == id) else {
            return;
        };
        match element {
            Element::Line(line) => {
                line.x2 = p.x;
                line.y2 = p.y;
            }
            Element::Rectangle(rect) => {
                rect.x2 = p.x;
                rect.y2 = p.y;
            }
            Element::Freehand(stroke) => stroke.add_point(p),
            // Text is placed by a click and edited in the writing state
            Element::Text(_) => return,
        }
        self.history.overwrite(elements);
    }

    fn move_selected(&mut self, p: Point) {
        let Some(sel) = self.selection.clone() else {
            return;
        };
        let mut elements = self.history.current().to_vec();
        let Some(element) = elements.iter_mut().find(|e| e.id() == sel.id) else {
            return;
        };
        match &sel.grab {
            Grab::PointOffsets { xs, ys } => {
                if let Element::Freehand(stroke) = element {
                    stroke.points = xs
                        .iter()
                        .zip(ys)
                        .map(|(dx, dy)| Point::new(p.x - dx, p.y - dy))
                        .collect();
                }
            }
            Grab::Offset { dx, dy } => {
                if let Some(c) = element.coordinates() {
                    let width = c.x2 - c.x1;
                    let height = c.y2 - c.y1;
                    let x1 = p.x - dx;
                    let y1 = p.y - dy;
                    element.set_coordinates(Coordinates {
                        x1,
                        y1,
                        x2: x1 + width,
                        y2: y1 + height,
                    });
                }
            }
        }
        self.history.overwrite(elements);
    }

    fn resize_selected(&mut self, p: Point) {
        let Some(sel) = &self.selection else {
            return;
        };
        let Some(position) = sel.position else {
            return;
        };
        let id = sel.id;
        let mut elements = self.history.current().to_vec();
        let Some(element) = elements.iter_mut().find(|e| e.id() == id) else {
            return;
        };
        let Some(c) = element.coordinates() else {
            return;
        };
        // A body hit yields no handle: no resize is performed
        let Some(resized) = apply_resize(p.x, p.y, position, c) else {
            return;
        };
        element.set_coordinates(resized);
        self.history.overwrite(elements);
    }

    /// Hover feedback for the pointer position. Never mutates state.
    pub fn cursor_hint(&self, p: Point) -> Cursor {
        match self.tool {
            Tool::Selection => find_element_at(p.x, p.y, self.history.current())
                .map(|(_, position)| cursor_for_position(position))
                .unwrap_or_default(),
            Tool::Delete => {
                if find_element_at(p.x, p.y, self.history.current()).is_some() {
                    Cursor::NotAllowed
                } else {
                    Cursor::Default
                }
            }
            _ => Cursor::Default,
        }
    }

    pub fn pointer_up(&mut self, p: Point) {
        if let Some(sel) = &self.selection {
            // A click (zero drag delta) on a text element opens the text
            // editor instead of idling. Compared against the grab origin,
            // since a drag keeps the offset invariant on the live element.
            if let Grab::Offset { dx, dy } = sel.grab {
                if matches!(self.find_element(sel.id), Some(Element::Text(_)))
                    && p.x - dx == sel.origin.x
                    && p.y - dy == sel.origin.y
                {
                    self.action = Action::Writing;
                    log::debug!("element {} opened for text editing", sel.id);
                    return;
                }
            }

            if matches!(self.action, Action::Drawing | Action::Resizing) {
                let id = sel.id;
                let mut elements = self.history.current().to_vec();
                if let Some(element) = elements.iter_mut().find(|e| e.id() == id) {
                    if element.adjustment_required() {
                        element.normalize();
                        self.history.overwrite(elements);
                    }
                }
            }
        }

        // The text widget stays focused until its blur event
        if self.action == Action::Writing {
            return;
        }

        self.action = Action::Idle;
        self.selection = None;
    }

    /// Commit the edited string on text-widget blur: store the content,
    /// rederive the bounding box and leave the writing state.
    pub fn commit_text(&mut self, content: &str, measure: &dyn TextMeasure) {
        let Some(sel) = self.selection.take() else {
            return;
        };
        let mut elements = self.history.current().to_vec();
        if let Some(Element::Text(text)) = elements.iter_mut().find(|e| e.id() == sel.id) {
            text.set_content(content.to_string(), measure);
            self.history.overwrite(elements);
            log::debug!("element {} text committed ({} chars)", sel.id, content.len());
        }
        self.action = Action::Idle;
    }

    pub fn undo(&mut self) {
        if self.history.undo() {
            log::debug!("undo to snapshot {}", self.history.index());
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo() {
            log::debug!("redo to snapshot {}", self.history.index());
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Clear the board as a single undoable edit.
    pub fn clear(&mut self) {
        self.history.append(Vec::new());
        self.selection = None;
        self.action = Action::Idle;
    }

    /// Serialize the active element list to JSON.
    pub fn to_json(&self) -> Result<String, BoardError> {
        Ok(serde_json::to_string_pretty(self.elements())?)
    }

    /// Create an editor from a JSON element list. History starts fresh at
    /// the loaded snapshot.
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        let elements: Vec<Element> = serde_json::from_str(json)?;
        Ok(Self::with_elements(elements))
    }

    fn find_element(&self, id: ElementId) -> Option<&Element> {
        self.history.current().iter().find(|e| e.id() == id)
    }

    #[cfg(test)]
    fn history_len(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::LINE_HEIGHT;

    struct TenPerChar;

    impl TextMeasure for TenPerChar {
        fn width(&self, content: &str) -> f64 {
            content.chars().count() as f64 * 10.0
        }
    }

    fn draw(editor: &mut Editor, tool: Tool, from: (f64, f64), to: (f64, f64)) {
        editor.set_tool(tool);
        editor.pointer_down(Point::new(from.0, from.1));
        editor.pointer_move(Point::new(to.0, to.1));
        editor.pointer_up(Point::new(to.0, to.1));
    }

    #[test]
    fn test_drawing_creates_single_history_entry() {
        let mut editor = Editor::new();
        editor.set_tool(Tool::Rectangle);
        editor.pointer_down(Point::new(10.0, 10.0));
        let len = editor.history_len();

        // Every intermediate pointer-move coalesces into the same entry
        for i in 1..=20 {
            editor.pointer_move(Point::new(10.0 + 5.0 * i as f64, 10.0 + 2.0 * i as f64));
        }
        editor.pointer_up(Point::new(110.0, 60.0));

        assert_eq!(editor.history_len(), len);
        assert_eq!(editor.elements().len(), 1);
        assert_eq!(editor.action(), Action::Idle);
        assert_eq!(editor.selected_element(), None);
    }

    #[test]
    fn test_undo_redo_inverse_law() {
        let mut editor = Editor::new();
        draw(&mut editor, Tool::Rectangle, (0.0, 0.0), (50.0, 50.0));
        draw(&mut editor, Tool::Line, (100.0, 0.0), (200.0, 50.0));
        draw(&mut editor, Tool::Pencil, (300.0, 0.0), (320.0, 10.0));
        assert_eq!(editor.elements().len(), 3);

        editor.undo();
        editor.undo();
        editor.undo();
        assert!(editor.elements().is_empty());
        // Undo at the origin is a silent no-op
        editor.undo();
        assert!(editor.elements().is_empty());

        editor.redo();
        editor.redo();
        editor.redo();
        assert_eq!(editor.elements().len(), 3);
        editor.redo();
        assert_eq!(editor.elements().len(), 3);
    }

    #[test]
    fn test_new_edit_truncates_redo_branch() {
        let mut editor = Editor::new();
        draw(&mut editor, Tool::Rectangle, (0.0, 0.0), (50.0, 50.0));
        draw(&mut editor, Tool::Rectangle, (100.0, 0.0), (150.0, 50.0));
        editor.undo();
        assert!(editor.can_redo());

        draw(&mut editor, Tool::Line, (0.0, 100.0), (50.0, 150.0));
        assert!(!editor.can_redo());
    }

    #[test]
    fn test_drawn_rectangle_is_normalized_on_release() {
        let mut editor = Editor::new();
        // Drawn from bottom-right to top-left
        draw(&mut editor, Tool::Rectangle, (110.0, 60.0), (10.0, 10.0));

        let Element::Rectangle(rect) = &editor.elements()[0] else {
            panic!("expected rectangle");
        };
        assert_eq!((rect.x1, rect.y1, rect.x2, rect.y2), (10.0, 10.0, 110.0, 60.0));
    }

    #[test]
    fn test_move_rectangle_by_delta() {
        let mut editor = Editor::new();
        draw(&mut editor, Tool::Rectangle, (10.0, 10.0), (110.0, 60.0));

        editor.set_tool(Tool::Selection);
        editor.pointer_down(Point::new(50.0, 30.0));
        assert_eq!(editor.action(), Action::Moving);
        editor.pointer_move(Point::new(70.0, 45.0));
        editor.pointer_up(Point::new(70.0, 45.0));

        let Element::Rectangle(rect) = &editor.elements()[0] else {
            panic!("expected rectangle");
        };
        assert_eq!((rect.x1, rect.y1, rect.x2, rect.y2), (30.0, 25.0, 130.0, 75.0));

        // The move is one undoable step
        editor.undo();
        let Element::Rectangle(rect) = &editor.elements()[0] else {
            panic!("expected rectangle");
        };
        assert_eq!((rect.x1, rect.y1), (10.0, 10.0));
    }

    #[test]
    fn test_freehand_move_preserves_shape() {
        let mut editor = Editor::new();
        editor.set_tool(Tool::Pencil);
        editor.pointer_down(Point::new(0.0, 0.0));
        editor.pointer_move(Point::new(10.0, 5.0));
        editor.pointer_move(Point::new(20.0, -5.0));
        editor.pointer_up(Point::new(20.0, -5.0));

        let Element::Freehand(before) = editor.elements()[0].clone() else {
            panic!("expected freehand");
        };

        editor.set_tool(Tool::Selection);
        editor.pointer_down(Point::new(5.0, 2.5));
        assert_eq!(editor.action(), Action::Moving);
        editor.pointer_move(Point::new(35.0, 42.5));
        editor.pointer_up(Point::new(35.0, 42.5));

        let Element::Freehand(after) = &editor.elements()[0] else {
            panic!("expected freehand");
        };
        assert_eq!(after.points.len(), before.points.len());
        for (a, b) in after.points.iter().zip(&before.points) {
            assert!((a.x - (b.x + 30.0)).abs() < 1e-9);
            assert!((a.y - (b.y + 40.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_resize_from_corner_handle() {
        let mut editor = Editor::new();
        draw(&mut editor, Tool::Rectangle, (10.0, 10.0), (110.0, 60.0));

        editor.set_tool(Tool::Selection);
        editor.pointer_down(Point::new(110.0, 60.0));
        assert_eq!(editor.action(), Action::Resizing);
        editor.pointer_move(Point::new(200.0, 150.0));
        editor.pointer_up(Point::new(200.0, 150.0));

        let Element::Rectangle(rect) = &editor.elements()[0] else {
            panic!("expected rectangle");
        };
        assert_eq!((rect.x1, rect.y1, rect.x2, rect.y2), (10.0, 10.0, 200.0, 150.0));
    }

    #[test]
    fn test_resize_past_opposite_corner_renormalizes() {
        let mut editor = Editor::new();
        draw(&mut editor, Tool::Rectangle, (10.0, 10.0), (110.0, 60.0));

        // Drag the bottom-right handle above and left of the top-left corner
        editor.set_tool(Tool::Selection);
        editor.pointer_down(Point::new(110.0, 60.0));
        editor.pointer_move(Point::new(0.0, 0.0));
        editor.pointer_up(Point::new(0.0, 0.0));

        let Element::Rectangle(rect) = &editor.elements()[0] else {
            panic!("expected rectangle");
        };
        assert!(rect.x1 <= rect.x2 && rect.y1 <= rect.y2);
        assert_eq!((rect.x1, rect.y1, rect.x2, rect.y2), (0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_selection_miss_is_a_noop() {
        let mut editor = Editor::new();
        draw(&mut editor, Tool::Rectangle, (10.0, 10.0), (110.0, 60.0));
        let len = editor.history_len();

        editor.set_tool(Tool::Selection);
        editor.pointer_down(Point::new(500.0, 500.0));
        assert_eq!(editor.action(), Action::Idle);
        assert_eq!(editor.history_len(), len);
    }

    #[test]
    fn test_overlap_selects_earliest_created() {
        let mut editor = Editor::new();
        draw(&mut editor, Tool::Rectangle, (0.0, 0.0), (100.0, 100.0));
        draw(&mut editor, Tool::Rectangle, (50.0, 50.0), (150.0, 150.0));

        editor.set_tool(Tool::Selection);
        editor.pointer_down(Point::new(60.0, 60.0));
        assert_eq!(editor.selected_element(), Some(0));
        editor.pointer_up(Point::new(60.0, 60.0));
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut editor = Editor::new();
        for i in 0..5 {
            let x = 100.0 * i as f64;
            draw(&mut editor, Tool::Rectangle, (x, 0.0), (x + 50.0, 50.0));
        }

        editor.set_tool(Tool::Delete);
        editor.pointer_down(Point::new(320.0, 20.0)); // body of id 3
        editor.pointer_up(Point::new(320.0, 20.0));

        let ids: Vec<_> = editor.elements().iter().map(Element::id).collect();
        assert_eq!(ids, vec![0, 1, 2, 4]);
    }

    #[test]
    fn test_create_after_delete_does_not_reuse_live_id() {
        let mut editor = Editor::new();
        draw(&mut editor, Tool::Rectangle, (0.0, 0.0), (50.0, 50.0));
        draw(&mut editor, Tool::Rectangle, (100.0, 0.0), (150.0, 50.0));
        draw(&mut editor, Tool::Rectangle, (200.0, 0.0), (250.0, 50.0));

        editor.set_tool(Tool::Delete);
        editor.pointer_down(Point::new(120.0, 20.0)); // id 1
        editor.pointer_up(Point::new(120.0, 20.0));

        draw(&mut editor, Tool::Rectangle, (300.0, 0.0), (350.0, 50.0));
        let ids: Vec<_> = editor.elements().iter().map(Element::id).collect();
        assert_eq!(ids, vec![0, 2, 3]);
    }

    #[test]
    fn test_delete_miss_leaves_history_untouched() {
        let mut editor = Editor::new();
        draw(&mut editor, Tool::Rectangle, (0.0, 0.0), (50.0, 50.0));
        let len = editor.history_len();

        editor.set_tool(Tool::Delete);
        editor.pointer_down(Point::new(500.0, 500.0));
        assert_eq!(editor.history_len(), len);
        assert_eq!(editor.elements().len(), 1);
    }

    #[test]
    fn test_text_click_enters_writing() {
        let mut editor = Editor::new();
        editor.set_tool(Tool::Text);
        editor.pointer_down(Point::new(40.0, 40.0));
        assert_eq!(editor.action(), Action::Writing);

        editor.pointer_up(Point::new(40.0, 40.0));
        assert_eq!(editor.action(), Action::Writing);
        assert_eq!(editor.editing_element(), Some(0));

        // Pointer-down is ignored until the widget blurs
        editor.pointer_down(Point::new(200.0, 200.0));
        assert_eq!(editor.elements().len(), 1);
        assert_eq!(editor.action(), Action::Writing);

        editor.commit_text("hello", &TenPerChar);
        assert_eq!(editor.action(), Action::Idle);
        assert_eq!(editor.editing_element(), None);

        let Element::Text(text) = &editor.elements()[0] else {
            panic!("expected text");
        };
        assert_eq!(text.content, "hello");
        assert!((text.x2 - 90.0).abs() < f64::EPSILON);
        assert!((text.y2 - (40.0 + LINE_HEIGHT)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_text_click_vs_drag() {
        let mut editor = Editor::new();
        editor.set_tool(Tool::Text);
        editor.pointer_down(Point::new(40.0, 40.0));
        editor.pointer_up(Point::new(40.0, 40.0));
        editor.commit_text("label", &TenPerChar);

        // Zero-delta click on the committed text reopens the editor
        editor.set_tool(Tool::Selection);
        editor.pointer_down(Point::new(45.0, 45.0));
        editor.pointer_up(Point::new(45.0, 45.0));
        assert_eq!(editor.action(), Action::Writing);
        editor.commit_text("label", &TenPerChar);

        // Any nonzero movement is a move, not an edit
        editor.pointer_down(Point::new(45.0, 45.0));
        editor.pointer_move(Point::new(55.0, 45.0));
        editor.pointer_up(Point::new(55.0, 45.0));
        assert_eq!(editor.action(), Action::Idle);

        let Element::Text(text) = &editor.elements()[0] else {
            panic!("expected text");
        };
        assert!((text.x1 - 50.0).abs() < f64::EPSILON);
        assert_eq!(text.content, "label");
    }

    #[test]
    fn test_moving_text_preserves_measured_bounds() {
        let mut editor = Editor::new();
        editor.set_tool(Tool::Text);
        editor.pointer_down(Point::new(0.0, 0.0));
        editor.pointer_up(Point::new(0.0, 0.0));
        editor.commit_text("abcd", &TenPerChar);

        editor.set_tool(Tool::Selection);
        editor.pointer_down(Point::new(10.0, 10.0));
        editor.pointer_move(Point::new(110.0, 60.0));
        editor.pointer_up(Point::new(110.0, 60.0));

        let Element::Text(text) = &editor.elements()[0] else {
            panic!("expected text");
        };
        assert!((text.width() - 40.0).abs() < f64::EPSILON);
        assert!((text.height() - LINE_HEIGHT).abs() < f64::EPSILON);
    }

    #[test]
    fn test_keyboard_shortcuts() {
        let mut editor = Editor::new();
        draw(&mut editor, Tool::Rectangle, (0.0, 0.0), (50.0, 50.0));

        let ctrl = Modifiers {
            ctrl: true,
            ..Default::default()
        };
        let cmd = Modifiers {
            meta: true,
            ..Default::default()
        };
        let action = if cfg!(target_os = "macos") { cmd } else { ctrl };

        editor.handle_key_event(&KeyEvent::Pressed("z".to_string()), action);
        assert!(editor.elements().is_empty());

        editor.handle_key_event(&KeyEvent::Pressed("y".to_string()), action);
        assert_eq!(editor.elements().len(), 1);

        let shifted = Modifiers {
            shift: true,
            ..action
        };
        editor.handle_key_event(&KeyEvent::Pressed("z".to_string()), action);
        editor.handle_key_event(&KeyEvent::Pressed("Z".to_string()), shifted);
        assert_eq!(editor.elements().len(), 1);

        // Without the action modifier nothing fires
        editor.handle_key_event(&KeyEvent::Pressed("z".to_string()), Modifiers::default());
        assert_eq!(editor.elements().len(), 1);
    }

    #[test]
    fn test_pointer_event_dispatch() {
        let mut editor = Editor::new();
        editor.set_tool(Tool::Line);
        editor.handle_pointer_event(PointerEvent::Down {
            position: Point::new(0.0, 0.0),
        });
        editor.handle_pointer_event(PointerEvent::Move {
            position: Point::new(100.0, 50.0),
        });
        editor.handle_pointer_event(PointerEvent::Up {
            position: Point::new(100.0, 50.0),
        });

        let Element::Line(line) = &editor.elements()[0] else {
            panic!("expected line");
        };
        assert_eq!((line.x2, line.y2), (100.0, 50.0));
    }

    #[test]
    fn test_cursor_hints() {
        let mut editor = Editor::new();
        draw(&mut editor, Tool::Rectangle, (10.0, 10.0), (110.0, 60.0));

        editor.set_tool(Tool::Selection);
        assert_eq!(editor.cursor_hint(Point::new(50.0, 30.0)), Cursor::Move);
        assert_eq!(editor.cursor_hint(Point::new(10.0, 10.0)), Cursor::NwseResize);
        assert_eq!(editor.cursor_hint(Point::new(110.0, 10.0)), Cursor::NeswResize);
        assert_eq!(editor.cursor_hint(Point::new(500.0, 500.0)), Cursor::Default);

        editor.set_tool(Tool::Delete);
        assert_eq!(editor.cursor_hint(Point::new(50.0, 30.0)), Cursor::NotAllowed);
        assert_eq!(editor.cursor_hint(Point::new(500.0, 500.0)), Cursor::Default);
    }

    #[test]
    fn test_clear_is_undoable() {
        let mut editor = Editor::new();
        draw(&mut editor, Tool::Rectangle, (0.0, 0.0), (50.0, 50.0));
        draw(&mut editor, Tool::Line, (100.0, 0.0), (150.0, 50.0));

        editor.clear();
        assert!(editor.elements().is_empty());

        editor.undo();
        assert_eq!(editor.elements().len(), 2);
    }

    #[test]
    fn test_json_round_trip() {
        let mut editor = Editor::new();
        draw(&mut editor, Tool::Rectangle, (10.0, 10.0), (110.0, 60.0));
        draw(&mut editor, Tool::Pencil, (0.0, 0.0), (20.0, 20.0));

        let json = editor.to_json().unwrap();
        let restored = Editor::from_json(&json).unwrap();
        assert_eq!(restored.elements().len(), 2);
        assert_eq!(restored.elements()[0].kind(), "rectangle");
        assert_eq!(restored.elements()[1].kind(), "freehand");
        assert!(!restored.can_undo());
    }
}
