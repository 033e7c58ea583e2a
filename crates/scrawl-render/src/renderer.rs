//! Renderer trait abstraction.

use kurbo::Size;
use scrawl_core::{Element, ElementId};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("initialization failed: {0}")]
    InitFailed(String),
    #[error("render failed: {0}")]
    RenderFailed(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// Elements to render, in creation order.
    pub elements: &'a [Element],
    /// Viewport size in logical units.
    pub viewport_size: Size,
    /// Device pixel ratio.
    pub scale_factor: f64,
    /// Element currently open in the text editor; skipped while the edit
    /// widget covers it.
    pub editing_element: Option<ElementId>,
}

impl<'a> RenderContext<'a> {
    pub fn new(elements: &'a [Element], viewport_size: Size) -> Self {
        Self {
            elements,
            viewport_size,
            scale_factor: 1.0,
            editing_element: None,
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the element being edited (skipped in build_scene).
    pub fn with_editing_element(mut self, id: Option<ElementId>) -> Self {
        self.editing_element = id;
        self
    }
}

/// Trait for rendering backends.
pub trait Renderer: Send + Sync {
    /// Build the scene/command buffer for a frame.
    ///
    /// Called once per frame with the full element list; the entire frame
    /// is redrawn from scratch, there is no incremental invalidation.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;
}
