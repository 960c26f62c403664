//! Email summaries and their classification.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier of an email, assigned by the sync pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailId(String);

impl EmailId {
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

impl fmt::Display for EmailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classification bucket assigned to an email by the external pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Job opportunities.
    #[default]
    Jobs,
    /// Everything the classifier considered irrelevant.
    Others,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Self; 2] = [Self::Jobs, Self::Others];

    /// Value of the `is_job` query flag for this category.
    #[must_use]
    pub const fn is_job(self) -> bool {
        matches!(self, Self::Jobs)
    }

    /// Category for an `is_job` flag.
    #[must_use]
    pub const fn from_is_job(is_job: bool) -> Self {
        if is_job { Self::Jobs } else { Self::Others }
    }

    /// Convert to configuration string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jobs => "jobs",
            Self::Others => "others",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Jobs => "Job Opportunities",
            Self::Others => "Other Mail",
        }
    }
}

/// A point in time as delivered by the server.
///
/// The raw string is kept so unparseable dates can still be shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Timestamp {
    /// Raw value from the payload.
    pub raw: String,
    /// Parsed instant, if the raw value was understood.
    pub parsed: Option<DateTime<Utc>>,
}

impl Timestamp {
    /// Short list-style label, e.g. "Mar 4".
    #[must_use]
    pub fn short_label(&self) -> String {
        self.parsed
            .map_or_else(|| self.raw.clone(), |dt| dt.format("%b %-d").to_string())
    }

    /// Full label with time of day.
    #[must_use]
    pub fn long_label(&self) -> String {
        self.parsed.map_or_else(
            || self.raw.clone(),
            |dt| dt.format("%a, %d %b %Y %H:%M").to_string(),
        )
    }
}

/// Recipient address lists, in header order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Recipients {
    /// To recipients.
    pub to: Vec<String>,
    /// Cc recipients.
    pub cc: Vec<String>,
    /// Bcc recipients.
    pub bcc: Vec<String>,
}

impl Recipients {
    /// One-line summary for list rows: To addresses plus a Bcc count.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut display = if self.to.is_empty() {
            "Me/Undisclosed".to_string()
        } else {
            self.to.join(", ")
        };
        if !self.bcc.is_empty() {
            display.push_str(&format!(" (+{} Bcc)", self.bcc.len()));
        }
        display
    }

    /// `Cc: a, b` line for thread messages, or `None` without Cc recipients.
    #[must_use]
    pub fn cc_line(&self) -> Option<String> {
        (!self.cc.is_empty()).then(|| format!("Cc: {}", self.cc.join(", ")))
    }
}

/// Summary of a classified email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    /// Unique identifier.
    pub id: EmailId,
    /// Conversation this email belongs to.
    pub thread_id: Option<String>,
    /// Subject line (may be empty).
    pub subject: String,
    /// Sender as a display string.
    pub sender: String,
    /// Short body preview.
    pub snippet: String,
    /// Date of the email.
    pub date: Timestamp,
    /// Recipient lists.
    pub recipients: Recipients,
    /// Classification.
    pub category: Category,
}

impl Email {
    /// Subject for display, substituting a placeholder when empty.
    #[must_use]
    pub fn display_subject(&self) -> &str {
        if self.subject.trim().is_empty() {
            "(No Subject)"
        } else {
            &self.subject
        }
    }
}
