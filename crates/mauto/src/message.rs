//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use mauto_core::layout::PanelEdge;
use mauto_core::{Attachment, Category, EmailId, Outcome};

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    /// Show a category (re-selecting refreshes it).
    SelectCategory(Category),
    /// Trigger the sync pipeline.
    Sync,

    // Email list
    /// Select an email to view its thread.
    SelectEmail(EmailId),
    /// Search box text changed.
    SearchChanged(String),
    /// Search box committed (Enter).
    SearchCommit,
    /// Clear the search and show the unfiltered list.
    SearchReset,

    // Draft
    /// Draft context text changed.
    DraftContextChanged(String),
    /// Generate a reply draft for the selected email.
    GenerateDraft,
    /// Copy the current draft to the clipboard.
    CopyDraft,

    // Remote results
    /// A remote request finished.
    Outcome(Outcome),

    // Layout
    /// Pointer pressed on a panel divider.
    StartPanelDrag(PanelEdge),
    /// Pointer pressed on the preview panel divider.
    StartPreviewDrag,
    /// Pointer moved anywhere in the window while dragging.
    PointerMoved(f32),
    /// Pointer released anywhere in the window.
    PointerReleased,
    /// Window resized to the given width.
    WindowResized(f32),

    // Attachments
    /// Open an attachment in the preview panel.
    OpenAttachment {
        /// Message owning the attachment.
        message_id: EmailId,
        /// Attachment metadata.
        attachment: Attachment,
    },
    /// Close the preview panel.
    ClosePreview,
    /// Open a URL with the system handler.
    OpenExternally(String),

    // Keyboard
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
}

/// Keyboard shortcut actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Close the preview, else clear the selection (Escape).
    Cancel,
    /// Refetch the active category (F5).
    Refresh,
    /// Trigger a sync (Ctrl+Shift+S).
    Sync,
}
