//! Attachment preview panel.

use std::fmt;

use crate::api::attachment_url;
use crate::layout::{CursorStyle, DragError, DragTracker, PanelBounds};
use crate::model::{Attachment, EmailId};

/// Preview panel width limits.
pub const PREVIEW_BOUNDS: PanelBounds = PanelBounds::new(320.0, 960.0);

/// How an attachment is presented, by MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    /// Rendered inline as an image.
    Image,
    /// Rendered in an inline document viewer.
    Pdf,
    /// Offered for download only.
    Download,
}

impl PreviewKind {
    /// Chooses the preview variant for a MIME type.
    #[must_use]
    pub fn from_mime(mime_type: &str) -> Self {
        let essence = mime_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        if essence.starts_with("image/") {
            Self::Image
        } else if essence == "application/pdf" {
            Self::Pdf
        } else {
            Self::Download
        }
    }
}

/// The attachment currently shown in the preview panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePreview {
    /// Message owning the attachment.
    pub message_id: EmailId,
    /// Attachment metadata.
    pub attachment: Attachment,
    /// Content URL handed to the viewer.
    pub url: String,
    /// Presentation variant.
    pub kind: PreviewKind,
}

/// Handle of the preview panel's own resize track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewEdge;

impl fmt::Display for PreviewEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("attachment preview")
    }
}

/// Open/closed state, selection and width of the attachment preview panel.
///
/// The panel is anchored to the right edge and resizes on its own track,
/// independent of the main panel layout.
#[derive(Debug, Clone)]
pub struct AttachmentPreviewController {
    base_url: String,
    active: Option<ActivePreview>,
    width: f32,
    viewport_width: f32,
    tracker: DragTracker<PreviewEdge>,
}

impl AttachmentPreviewController {
    /// Creates a closed preview panel for attachments served under `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, width: f32, viewport_width: f32) -> Self {
        Self {
            base_url: base_url.into(),
            active: None,
            width: PREVIEW_BOUNDS.clamp(width),
            viewport_width,
            tracker: DragTracker::new(),
        }
    }

    /// Shows `attachment` of `message_id`.
    pub fn open(&mut self, message_id: EmailId, attachment: Attachment) {
        let url = attachment_url(&self.base_url, &message_id, &attachment.id);
        let kind = PreviewKind::from_mime(&attachment.mime_type);
        tracing::debug!("previewing {} as {:?}", attachment.filename, kind);
        self.active = Some(ActivePreview {
            message_id,
            attachment,
            url,
            kind,
        });
    }

    /// Hides the panel. Any drag on its edge ends with it.
    pub fn close(&mut self) {
        self.active = None;
        self.tracker.end();
    }

    /// The attachment being previewed.
    #[must_use]
    pub const fn active(&self) -> Option<&ActivePreview> {
        self.active.as_ref()
    }

    /// Whether the panel is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Starts dragging the panel edge.
    ///
    /// # Errors
    ///
    /// Returns [`DragError`] if the edge is already being dragged.
    pub fn begin_drag(&mut self) -> Result<(), DragError<PreviewEdge>> {
        self.tracker.begin(PreviewEdge)
    }

    /// Feeds a pointer-move event. Returns whether the width changed.
    pub fn pointer_moved(&mut self, pointer_x: f32) -> bool {
        let Some(sample) = self.tracker.pointer_moved(pointer_x) else {
            return false;
        };
        let width = self.viewport_width - sample.pointer_x;
        if !PREVIEW_BOUNDS.admits(width) {
            return false;
        }
        self.width = width;
        true
    }

    /// Ends the drag on pointer release.
    pub fn pointer_released(&mut self) -> bool {
        self.tracker.end().is_some()
    }

    /// Records the viewport width.
    pub const fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    /// Panel width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Whether the edge is being dragged.
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
