//! Transient text editing session for a text element.

use scrawl_core::{ElementId, TextMeasure};

/// Keyboard key for text editing.
#[derive(Debug, Clone, PartialEq)]
pub enum TextKey {
    Character(String),
    Backspace,
    Enter,
    Escape,
}

/// Result of handling a text editing event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Event was handled, text may have changed.
    Handled,
    /// Event was handled, the session should be committed.
    ExitEdit,
    /// Event was not handled (pass to other handlers).
    NotHandled,
}

/// Edit buffer for a single text element while the machine is in the
/// writing state.
///
/// The buffer lives outside the element list and outside history; nothing
/// is recorded until the session blurs and the text is committed through
/// `Editor::commit_text`.
#[derive(Debug, Clone)]
pub struct TextEditSession {
    element_id: ElementId,
    buffer: String,
}

impl TextEditSession {
    /// Open a session over an element, seeded with its current content.
    pub fn new(element_id: ElementId, content: &str) -> Self {
        Self {
            element_id,
            buffer: content.to_string(),
        }
    }

    pub fn element_id(&self) -> ElementId {
        self.element_id
    }

    /// The edited text so far.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Apply a keystroke to the buffer.
    pub fn handle_key(&mut self, key: &TextKey) -> TextEditResult {
        match key {
            TextKey::Character(s) => {
                self.buffer.push_str(s);
                TextEditResult::Handled
            }
            TextKey::Backspace => {
                self.buffer.pop();
                TextEditResult::Handled
            }
            TextKey::Enter | TextKey::Escape => TextEditResult::ExitEdit,
        }
    }

    /// Close the session, yielding the final string for commit.
    pub fn commit(self) -> String {
        self.buffer
    }
}

/// Fixed-advance text measurement.
///
/// Stands in for real font metrics: every character is `advance` canvas
/// units wide. Good enough for a monospace rendering backend and for
/// driving the editor in tests.
#[derive(Debug, Clone, Copy)]
pub struct CharWidthMeasurer {
    pub advance: f64,
}

impl Default for CharWidthMeasurer {
    fn default() -> Self {
        Self { advance: 12.0 }
    }
}

impl TextMeasure for CharWidthMeasurer {
    fn width(&self, content: &str) -> f64 {
        content.chars().count() as f64 * self.advance
    }
}
