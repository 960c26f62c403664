//! Selected thread and reply draft state.

use super::sequence::{RequestSequence, Ticket};
use crate::model::{EmailDetail, EmailId};

/// Shown in the draft area when generation fails.
pub const DRAFT_ERROR_PLACEHOLDER: &str = "Error generating draft.";

/// A draft request ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRequest {
    /// Ticket of the draft request.
    pub ticket: Ticket,
    /// Email the draft replies to.
    pub email_id: EmailId,
    /// Context hint sent with the request.
    pub context: String,
}

/// Detail of the selected email, its thread, and the reply draft.
#[derive(Debug, Clone)]
pub struct ThreadDetailStore {
    email_id: Option<EmailId>,
    detail: Option<EmailDetail>,
    is_loading: bool,
    draft: Option<String>,
    draft_context: String,
    is_generating: bool,
    thread_seq: RequestSequence,
    draft_seq: RequestSequence,
}

impl ThreadDetailStore {
    /// Creates an empty store with an initial draft context.
    #[must_use]
    pub fn new(draft_context: impl Into<String>) -> Self {
        Self {
            email_id: None,
            detail: None,
            is_loading: false,
            draft: None,
            draft_context: draft_context.into(),
            is_generating: false,
            thread_seq: RequestSequence::new(),
            draft_seq: RequestSequence::new(),
        }
    }

    /// Selects `id`. Returns the ticket for a thread load, or `None` if the
    /// email was already selected.
    ///
    /// Switching emails drops the previous draft and discards any draft
    /// still being generated for it.
    pub fn select(&mut self, id: EmailId) -> Option<Ticket> {
        if self.email_id.as_ref() == Some(&id) {
            return None;
        }
        self.email_id = Some(id);
        self.detail = None;
        self.is_loading = true;
        self.drop_draft();
        Some(self.thread_seq.issue())
    }

    /// Deselects. Every outstanding response for the old selection is
    /// discarded on arrival.
    pub fn clear(&mut self) {
        self.email_id = None;
        self.detail = None;
        self.is_loading = false;
        self.thread_seq.invalidate();
        self.drop_draft();
    }

    fn drop_draft(&mut self) {
        self.draft = None;
        self.is_generating = false;
        self.draft_seq.invalidate();
    }

    /// Applies a loaded thread. Returns `false` if the response is stale.
    pub fn apply_thread(&mut self, ticket: Ticket, detail: EmailDetail) -> bool {
        if !self.thread_seq.is_current(ticket) {
            return false;
        }
        self.detail = Some(detail);
        self.is_loading = false;
        true
    }

    /// Records a failed thread load: the detail stays empty.
    pub fn fail_thread(&mut self, ticket: Ticket) -> bool {
        if !self.thread_seq.is_current(ticket) {
            return false;
        }
        self.detail = None;
        self.is_loading = false;
        true
    }

    /// Updates the context hint for the next draft.
    pub fn set_draft_context(&mut self, context: impl Into<String>) {
        self.draft_context = context.into();
    }

    /// Starts generating a draft for the selected email. Returns `None`
    /// when nothing is selected. A new request supersedes an earlier one.
    pub fn begin_draft(&mut self) -> Option<DraftRequest> {
        let email_id = self.email_id.clone()?;
        self.is_generating = true;
        Some(DraftRequest {
            ticket: self.draft_seq.issue(),
            email_id,
            context: self.draft_context.clone(),
        })
    }

    /// Applies a generated draft if it is current and still belongs to the
    /// selected email.
    pub fn apply_draft(&mut self, ticket: Ticket, email_id: &EmailId, draft: String) -> bool {
        if !self.accepts_draft(ticket, email_id) {
            return false;
        }
        self.draft = Some(draft);
        self.is_generating = false;
        true
    }

    /// Records a failed draft by showing [`DRAFT_ERROR_PLACEHOLDER`].
    pub fn fail_draft(&mut self, ticket: Ticket, email_id: &EmailId) -> bool {
        if !self.accepts_draft(ticket, email_id) {
            return false;
        }
        self.draft = Some(DRAFT_ERROR_PLACEHOLDER.to_string());
        self.is_generating = false;
        true
    }

    fn accepts_draft(&self, ticket: Ticket, email_id: &EmailId) -> bool {
        self.draft_seq.is_current(ticket) && self.email_id.as_ref() == Some(email_id)
    }

    /// Selected email id.
    #[must_use]
    pub const fn email_id(&self) -> Option<&EmailId> {
        self.email_id.as_ref()
    }

    /// Loaded detail of the selected email.
    #[must_use]
    pub const fn detail(&self) -> Option<&EmailDetail> {
        self.detail.as_ref()
    }

    /// Whether a thread load is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Current draft text (markdown), if any.
    #[must_use]
    pub fn draft(&self) -> Option<&str> {
        self.draft.as_deref()
    }

    /// Context hint for the next draft.
    #[must_use]
    pub fn draft_context(&self) -> &str {
        &self.draft_context
    }

    /// Whether a draft is being generated.
    #[must_use]
    pub const fn is_generating(&self) -> bool {
        self.is_generating
    }
}
