//! DOM layer - materializes the grid into the page and wires events
//!
//! Immediate-mode: every `WidgetCore` mutation is painted straight onto the
//! mounted elements, no diffing. The renderer maps cells to elements by
//! row-major index; cell state never lives on the DOM node itself.

mod events;
mod renderer;
mod status;

pub use events::mount;
pub use renderer::DomRenderer;
pub use status::StatusLine;
