//! Remote triage API.
//!
//! [`MailApi`] is the seam between the orchestrator and the network. The
//! production implementation is [`HttpMailApi`]; tests substitute an
//! in-memory fake.

mod http;
mod wire;

use std::future::Future;

use crate::error::ApiResult;
use crate::model::{AttachmentId, Category, Email, EmailDetail, EmailId};

pub use http::HttpMailApi;

/// Operations offered by the triage backend.
///
/// Implementations are cheap to clone; the orchestrator clones one into
/// every request future so requests can outlive the call that issued them.
pub trait MailApi: Clone + Send + Sync + 'static {
    /// Lists the emails classified into `category`, newest first.
    fn list_emails(&self, category: Category)
    -> impl Future<Output = ApiResult<Vec<Email>>> + Send;

    /// Loads an email and its full thread.
    fn email_detail(&self, id: &EmailId) -> impl Future<Output = ApiResult<EmailDetail>> + Send;

    /// Starts the sync/classification pipeline. Returns once the pipeline
    /// has been triggered, not when it finishes.
    fn trigger_sync(&self) -> impl Future<Output = ApiResult<()>> + Send;

    /// Asks the filter engine which emails match a natural-language prompt.
    fn filter(&self, prompt: &str) -> impl Future<Output = ApiResult<Vec<EmailId>>> + Send;

    /// Generates a reply draft (markdown) for an email and a context hint.
    fn generate_draft(
        &self,
        email_id: &EmailId,
        context: &str,
    ) -> impl Future<Output = ApiResult<String>> + Send;
}

/// Content URL of an attachment. The client only ever hands this URL to a
/// viewer; attachment bytes are never buffered.
#[must_use]
pub fn attachment_url(base_url: &str, message_id: &EmailId, attachment_id: &AttachmentId) -> String {
    format!(
        "{}/attachments/{}/{}",
        base_url.trim_end_matches('/'),
        message_id.as_str(),
        attachment_id.as_str()
    )
}
