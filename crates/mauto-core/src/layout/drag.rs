//! Pointer drag state machine.
//!
//! A [`DragTracker`] is either idle or dragging exactly one target. Pointer
//! motion is only consumed while dragging; releasing the pointer always
//! returns the tracker to idle, wherever the pointer is.

use std::fmt;

/// Rejected attempt to start a second concurrent drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("a drag on {active} is already in progress")]
pub struct DragError<T: fmt::Debug + fmt::Display> {
    /// Target of the drag that is already active.
    pub active: T,
}

/// Current state of a tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState<T> {
    /// No drag; pointer motion is ignored.
    #[default]
    Idle,
    /// A resize handle is held down.
    Dragging(T),
}

/// Cursor affordance to apply to the whole viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    /// Platform default cursor.
    #[default]
    Default,
    /// Horizontal resize indicator, held for the duration of a drag.
    ColumnResize,
}

/// One pointer-move observation attributed to the active target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample<T> {
    /// Target being dragged.
    pub target: T,
    /// Absolute horizontal pointer position in viewport coordinates.
    pub pointer_x: f32,
}

/// Converts a global pointer stream into samples for a single drag target.
#[derive(Debug, Clone)]
pub struct DragTracker<T> {
    state: DragState<T>,
}

impl<T> DragTracker<T>
where
    T: Copy + PartialEq + fmt::Debug + fmt::Display,
{
    /// Creates an idle tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Starts dragging `target`.
    ///
    /// # Errors
    ///
    /// Returns [`DragError`] if a drag is already active; the active drag is
    /// left untouched.
    pub fn begin(&mut self, target: T) -> Result<(), DragError<T>> {
        if let DragState::Dragging(active) = self.state {
            return Err(DragError { active });
        }
        tracing::trace!("drag started on {}", target);
        self.state = DragState::Dragging(target);
        Ok(())
    }

    /// Feeds a pointer-move event. Yields a sample only while dragging.
    #[must_use]
    pub fn pointer_moved(&self, pointer_x: f32) -> Option<DragSample<T>> {
        match self.state {
            DragState::Dragging(target) => Some(DragSample { target, pointer_x }),
            DragState::Idle => None,
        }
    }

    /// Ends the drag on pointer release. Returns the target that was active.
    pub fn end(&mut self) -> Option<T> {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Dragging(target) => {
                tracing::trace!("drag ended on {}", target);
                Some(target)
            }
            DragState::Idle => None,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> DragState<T> {
        self.state
    }

    /// Target of the active drag, if any.
    #[must_use]
    pub fn active(&self) -> Option<T> {
        match self.state {
            DragState::Dragging(target) => Some(target),
            DragState::Idle => None,
        }
    }

    /// Whether the pointer stream should currently be subscribed to.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Viewport-wide cursor to show.
    #[must_use]
    pub const fn cursor(&self) -> CursorStyle {
        if self.is_dragging() {
            CursorStyle::ColumnResize
        } else {
            CursorStyle::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Edge {
        Left,
        Right,
    }

    impl fmt::Display for Edge {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{self:?}")
        }
    }

    #[test]
    fn test_idle_tracker_ignores_motion() {
        let tracker = DragTracker::<Edge>::new();
        assert_eq!(tracker.pointer_moved(120.0), None);
        assert_eq!(tracker.cursor(), CursorStyle::Default);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_samples_carry_absolute_position() {
        let mut tracker = DragTracker::new();
        tracker.begin(Edge::Left).unwrap();

        let sample = tracker.pointer_moved(321.5).unwrap();
        assert_eq!(sample.target, Edge::Left);
        assert!((sample.pointer_x - 321.5).abs() < f32::EPSILON);
        assert_eq!(tracker.cursor(), CursorStyle::ColumnResize);
    }

    #[test]
    fn test_second_begin_is_rejected() {
        let mut tracker = DragTracker::new();
        tracker.begin(Edge::Left).unwrap();

        let err = tracker.begin(Edge::Right).unwrap_err();
        assert_eq!(err.active, Edge::Left);
        assert_eq!(tracker.active(), Some(Edge::Left));
    }

    #[test]
    fn test_end_returns_to_idle() {
        let mut tracker = DragTracker::new();
        tracker.begin(Edge::Right).unwrap();

        assert_eq!(tracker.end(), Some(Edge::Right));
        assert_eq!(tracker.state(), DragState::Idle);
        assert_eq!(tracker.end(), None);
        assert_eq!(tracker.pointer_moved(10.0), None);

        tracker.begin(Edge::Left).unwrap();
        assert_eq!(tracker.active(), Some(Edge::Left));
    }
}
