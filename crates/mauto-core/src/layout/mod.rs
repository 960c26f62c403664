//! Pointer-driven panel layout.
//!
//! [`DragTracker`] turns the global pointer stream into samples for the one
//! handle being dragged; [`PanelLayoutController`] turns those samples into
//! bounded panel widths.

mod drag;
mod panels;

pub use drag::{CursorStyle, DragError, DragSample, DragState, DragTracker};
pub use panels::{
    LIST_BOUNDS, NAV_BOUNDS, PanelBounds, PanelEdge, PanelLayoutController, SIDEBAR_BOUNDS,
};
