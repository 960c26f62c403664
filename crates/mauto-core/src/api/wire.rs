//! Wire representations of the triage API payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::decode::{
    decode_address_list, decode_attachments, decode_category_flag, decode_timestamp,
};
use crate::model::{Category, Email, EmailDetail, EmailId, Recipients, ThreadMessage};

/// A row of the `emails` table as served by the API.
///
/// Loosely typed fields stay as [`Value`] and go through the total decoders,
/// so a bad recipient or attachment column never fails the whole payload.
#[derive(Debug, Deserialize)]
pub(crate) struct EmailRecord {
    id: String,
    #[serde(default)]
    thread_id: Option<String>,
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    sender: Option<String>,
    #[serde(default)]
    snippet: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    recipients_to: Value,
    #[serde(default)]
    recipients_cc: Value,
    #[serde(default)]
    recipients_bcc: Value,
    #[serde(default)]
    is_job_related: Value,
    #[serde(default)]
    body_text: Option<String>,
    #[serde(default)]
    body_html: Option<String>,
    #[serde(default)]
    attachments: Value,
}

impl EmailRecord {
    fn recipients(&self) -> Recipients {
        Recipients {
            to: decode_address_list(&self.recipients_to),
            cc: decode_address_list(&self.recipients_cc),
            bcc: decode_address_list(&self.recipients_bcc),
        }
    }

    /// Converts to an email summary. Rows without a category flag take `fallback`.
    pub(crate) fn into_email(self, fallback: Category) -> Email {
        let recipients = self.recipients();
        Email {
            category: decode_category_flag(&self.is_job_related).unwrap_or(fallback),
            date: decode_timestamp(self.date.as_deref()),
            id: EmailId::new(self.id),
            thread_id: self.thread_id,
            subject: self.subject.unwrap_or_default(),
            sender: self.sender.unwrap_or_default(),
            snippet: self.snippet.unwrap_or_default(),
            recipients,
        }
    }

    /// Converts to a thread message.
    pub(crate) fn into_thread_message(self) -> ThreadMessage {
        let recipients = self.recipients();
        ThreadMessage {
            date: decode_timestamp(self.date.as_deref()),
            attachments: decode_attachments(&self.attachments),
            id: EmailId::new(self.id),
            sender: self.sender.unwrap_or_default(),
            snippet: self.snippet.unwrap_or_default(),
            body_text: self.body_text.unwrap_or_default(),
            body_html: self.body_html.filter(|html| !html.trim().is_empty()),
            recipients,
        }
    }
}

/// Response of `GET /emails/{id}`.
#[derive(Debug, Deserialize)]
pub(crate) struct DetailResponse {
    email: EmailRecord,
    #[serde(default)]
    thread: Vec<EmailRecord>,
}

impl DetailResponse {
    /// Converts to the domain detail, keeping the server's thread order.
    pub(crate) fn into_detail(self) -> EmailDetail {
        EmailDetail {
            email: self.email.into_email(Category::default()),
            thread: self
                .thread
                .into_iter()
                .map(EmailRecord::into_thread_message)
                .collect(),
        }
    }
}

/// Body of `POST /filter`.
#[derive(Debug, Serialize)]
pub(crate) struct FilterRequest<'a> {
    pub prompt: &'a str,
}

/// Response of `POST /filter`.
#[derive(Debug, Deserialize)]
pub(crate) struct FilterResponse {
    #[serde(default)]
    pub matching_ids: Vec<EmailId>,
}

/// Body of `POST /generate`.
#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub email_id: &'a str,
    pub context: &'a str,
}

/// Response of `POST /generate`.
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    pub draft: String,
}
