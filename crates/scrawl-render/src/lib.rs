//! Scrawl Render Library
//!
//! Renderer abstraction for the Scrawl canvas. The reference implementation
//! lowers the element list into a backend-neutral display list; rasterizing
//! backends plug in behind the same trait.

pub mod display_list;
pub mod outline;
mod renderer;
pub mod text_editor;

pub use display_list::{DisplayListRenderer, DrawCommand};
pub use outline::{RibbonOutliner, StrokeOutliner, BRUSH_RADIUS};
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};
pub use text_editor::{CharWidthMeasurer, TextEditResult, TextEditSession, TextKey};
