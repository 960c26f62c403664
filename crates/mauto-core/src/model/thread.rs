//! Conversation threads and attachment metadata.

use serde::{Deserialize, Serialize};

use super::{Email, EmailId, Recipients, Timestamp};

/// Identifier of an attachment, scoped to its owning message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttachmentId(String);

impl AttachmentId {
    /// Wraps a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Raw identifier as sent over the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Attachment metadata. Content is fetched on demand, never held here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Identifier within the owning message.
    pub id: AttachmentId,
    /// Original filename.
    pub filename: String,
    /// MIME type reported by the sync pipeline.
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
}

impl Attachment {
    /// Human-readable size, e.g. "12.4 KB".
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Display only
    pub fn size_label(&self) -> String {
        const KB: f64 = 1024.0;
        const MB: f64 = KB * 1024.0;
        let bytes = self.size as f64;
        if bytes >= MB {
            format!("{:.1} MB", bytes / MB)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes / KB)
        } else {
            format!("{} B", self.size)
        }
    }
}

/// One message in a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadMessage {
    /// Message identifier (also the attachment scope).
    pub id: EmailId,
    /// Sender as a display string.
    pub sender: String,
    /// Date sent.
    pub date: Timestamp,
    /// Short preview, used when no body is available.
    pub snippet: String,
    /// Plain-text body.
    pub body_text: String,
    /// HTML body, if the message had one.
    pub body_html: Option<String>,
    /// Attachments, in MIME part order.
    pub attachments: Vec<Attachment>,
    /// Recipient lists.
    pub recipients: Recipients,
}

impl ThreadMessage {
    /// Body to display: plain text, else the HTML rendered as text, else the snippet.
    #[must_use]
    pub fn display_body(&self) -> String {
        if !self.body_text.trim().is_empty() {
            return self.body_text.clone();
        }
        if let Some(html) = self.body_html.as_deref()
            && !html.trim().is_empty()
        {
            match htmd::convert(html) {
                Ok(text) if !text.trim().is_empty() => return text,
                Ok(_) => {}
                Err(e) => tracing::debug!("HTML body conversion failed for {}: {}", self.id, e),
            }
        }
        self.snippet.clone()
    }

    /// Uppercased first character of the sender, for avatar badges.
    #[must_use]
    pub fn sender_initial(&self) -> Option<char> {
        self.sender
            .trim()
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
    }
}

/// An email together with its full thread, oldest message first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDetail {
    /// The selected email.
    pub email: Email,
    /// Every message in the conversation, in chronological order.
    pub thread: Vec<ThreadMessage>,
}
