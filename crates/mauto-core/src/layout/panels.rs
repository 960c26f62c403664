//! Resizable panel widths.

use std::fmt;

use super::drag::{CursorStyle, DragError, DragSample, DragTracker};
use crate::config::LayoutConfig;

/// A draggable panel boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelEdge {
    /// Right edge of the navigation rail.
    Nav,
    /// Right edge of the email list column.
    List,
    /// Left edge of the right-anchored attachment sidebar.
    Sidebar,
}

impl fmt::Display for PanelEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Nav => "nav rail",
            Self::List => "list column",
            Self::Sidebar => "attachment sidebar",
        })
    }
}

/// Width limits of a panel. Both ends are exclusive for drag samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelBounds {
    /// Lower limit.
    pub min: f32,
    /// Upper limit.
    pub max: f32,
}

impl PanelBounds {
    /// Creates bounds.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Whether a sampled width may be applied. Values on or past a limit are
    /// rejected rather than clamped, so the edge does not jitter at the limit.
    #[must_use]
    pub fn admits(self, width: f32) -> bool {
        width > self.min && width < self.max
    }

    /// Clamps a configured width into range.
    #[must_use]
    pub fn clamp(self, width: f32) -> f32 {
        if width.is_finite() {
            width.clamp(self.min, self.max)
        } else {
            self.min
        }
    }

    /// Whether `width` lies in the closed range.
    #[must_use]
    pub fn contains(self, width: f32) -> bool {
        (self.min..=self.max).contains(&width)
    }
}

/// Navigation rail width limits.
pub const NAV_BOUNDS: PanelBounds = PanelBounds::new(150.0, 400.0);
/// Email list column width limits.
pub const LIST_BOUNDS: PanelBounds = PanelBounds::new(250.0, 600.0);
/// Attachment sidebar width limits.
pub const SIDEBAR_BOUNDS: PanelBounds = PanelBounds::new(300.0, 800.0);

/// Owns the widths of the three resizable panels.
///
/// Widths change only through drag samples; nothing else writes them.
#[derive(Debug, Clone)]
pub struct PanelLayoutController {
    nav_width: f32,
    list_width: f32,
    sidebar_width: f32,
    viewport_width: f32,
    tracker: DragTracker<PanelEdge>,
}

impl PanelLayoutController {
    /// Creates a controller with initial widths, clamped into bounds.
    #[must_use]
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            nav_width: NAV_BOUNDS.clamp(config.nav_width),
            list_width: LIST_BOUNDS.clamp(config.list_width),
            sidebar_width: SIDEBAR_BOUNDS.clamp(config.sidebar_width),
            viewport_width: config.viewport_width,
            tracker: DragTracker::new(),
        }
    }

    /// Starts dragging a panel edge.
    ///
    /// # Errors
    ///
    /// Returns [`DragError`] if another edge is already being dragged.
    pub fn begin_drag(&mut self, edge: PanelEdge) -> Result<(), DragError<PanelEdge>> {
        self.tracker.begin(edge)
    }

    /// Feeds a pointer-move event. Returns whether a width changed.
    pub fn pointer_moved(&mut self, pointer_x: f32) -> bool {
        self.tracker
            .pointer_moved(pointer_x)
            .is_some_and(|sample| self.apply(sample))
    }

    /// Ends any active drag on pointer release.
    pub fn pointer_released(&mut self) -> Option<PanelEdge> {
        self.tracker.end()
    }

    /// Records the viewport width, needed for the right-anchored sidebar.
    pub const fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    fn apply(&mut self, sample: DragSample<PanelEdge>) -> bool {
        let (width, bounds, slot) = match sample.target {
            PanelEdge::Nav => (sample.pointer_x, NAV_BOUNDS, &mut self.nav_width),
            // The list boundary follows the pointer in viewport space, so the
            // current nav width is subtracted at sample time.
            PanelEdge::List => (
                sample.pointer_x - self.nav_width,
                LIST_BOUNDS,
                &mut self.list_width,
            ),
            PanelEdge::Sidebar => (
                self.viewport_width - sample.pointer_x,
                SIDEBAR_BOUNDS,
                &mut self.sidebar_width,
            ),
        };
        if !bounds.admits(width) {
            return false;
        }
        *slot = width;
        true
    }

    /// Navigation rail width.
    #[must_use]
    pub const fn nav_width(&self) -> f32 {
        self.nav_width
    }

    /// Email list column width.
    #[must_use]
    pub const fn list_width(&self) -> f32 {
        self.list_width
    }

    /// Attachment sidebar width.
    #[must_use]
    pub const fn sidebar_width(&self) -> f32 {
        self.sidebar_width
    }

    /// Last known viewport width.
    #[must_use]
    pub const fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Edge currently being dragged.
    #[must_use]
    pub fn active_drag(&self) -> Option<PanelEdge> {
        self.tracker.active()
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Viewport-wide cursor to show.
    #[must_use]
    pub const fn cursor(&self) -> CursorStyle {
        self.tracker.cursor()
    }
}
