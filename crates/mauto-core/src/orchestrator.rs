//! Issues remote operations and reconciles their results into the stores.
//!
//! Every user action returns at most one [`Request`], a future the host
//! runtime drives to completion. Its [`Outcome`] is fed back through
//! [`ActionOrchestrator::apply`], which checks the outcome's ticket before
//! touching any state. Requests never mutate state themselves.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::api::MailApi;
use crate::config::ClientConfig;
use crate::error::ApiResult;
use crate::model::{Category, Email, EmailDetail, EmailId};
use crate::store::{CategoryListStore, SearchCommit, ThreadDetailStore, Ticket};

/// An issued remote operation, resolving to its [`Outcome`].
pub type Request = Pin<Box<dyn Future<Output = Outcome> + Send + 'static>>;

/// Result of a remote operation, tagged with what it was issued for.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Category listing finished.
    EmailsFetched {
        /// Fetch ticket.
        ticket: Ticket,
        /// Category that was requested.
        category: Category,
        /// Listed emails.
        result: ApiResult<Vec<Email>>,
    },
    /// Thread load finished.
    ThreadLoaded {
        /// Thread ticket.
        ticket: Ticket,
        /// Email whose thread was requested.
        email_id: EmailId,
        /// Email and thread.
        result: ApiResult<EmailDetail>,
    },
    /// Sync was triggered and, on success, the settle delay has elapsed.
    SyncSettled {
        /// Trigger result.
        result: ApiResult<()>,
    },
    /// Filter finished.
    FilterApplied {
        /// Filter ticket.
        ticket: Ticket,
        /// Prompt that was sent.
        prompt: String,
        /// Matching email ids.
        result: ApiResult<Vec<EmailId>>,
    },
    /// Draft generation finished.
    DraftGenerated {
        /// Draft ticket.
        ticket: Ticket,
        /// Email the draft replies to.
        email_id: EmailId,
        /// Draft markdown.
        result: ApiResult<String>,
    },
}

/// Coordinates the list and detail stores with the triage API.
#[derive(Debug)]
pub struct ActionOrchestrator<A> {
    api: A,
    list: CategoryListStore,
    detail: ThreadDetailStore,
    is_syncing: bool,
    settle_delay: Duration,
}

impl<A: MailApi> ActionOrchestrator<A> {
    /// Creates an orchestrator showing the configured default category.
    /// Nothing is fetched until [`Self::select_category`] or
    /// [`Self::refresh`] is called.
    #[must_use]
    pub fn new(api: A, config: &ClientConfig) -> Self {
        Self {
            api,
            list: CategoryListStore::new(config.default_category),
            detail: ThreadDetailStore::new(config.default_draft_context.clone()),
            is_syncing: false,
            settle_delay: config.sync_settle_delay(),
        }
    }

    /// Shows `category`, clearing the selection. Re-selecting the active
    /// category refetches it.
    pub fn select_category(&mut self, category: Category) -> Request {
        let ticket = self.list.select_category(category);
        self.detail.clear();
        tracing::debug!("Fetching {} emails (ticket {})", category.as_str(), ticket.get());
        self.fetch(ticket)
    }

    /// Refetches the active category, keeping the selection.
    pub fn refresh(&mut self) -> Request {
        let ticket = self.list.begin_fetch();
        tracing::debug!(
            "Refreshing {} emails (ticket {})",
            self.list.category().as_str(),
            ticket.get()
        );
        self.fetch(ticket)
    }

    fn fetch(&self, ticket: Ticket) -> Request {
        let api = self.api.clone();
        let category = self.list.category();
        Box::pin(async move {
            let result = api.list_emails(category).await;
            Outcome::EmailsFetched {
                ticket,
                category,
                result,
            }
        })
    }

    /// Selects an email. Returns the thread load, or `None` if the email was
    /// already selected.
    pub fn select_email(&mut self, id: EmailId) -> Option<Request> {
        self.list.select_email(id.clone());
        let ticket = self.detail.select(id.clone())?;
        tracing::debug!("Loading thread for {} (ticket {})", id, ticket.get());
        let api = self.api.clone();
        Some(Box::pin(async move {
            let result = api.email_detail(&id).await;
            Outcome::ThreadLoaded {
                ticket,
                email_id: id,
                result,
            }
        }))
    }

    /// Deselects the current email.
    pub fn clear_selection(&mut self) {
        self.list.clear_selection();
        self.detail.clear();
    }

    /// Updates the search box text.
    pub fn set_search_prompt(&mut self, prompt: impl Into<String>) {
        self.list.set_search_prompt(prompt);
    }

    /// Commits the search box. An empty prompt restores the unfiltered
    /// collection locally and issues nothing. While a fetch is in flight the
    /// filter is issued by [`Self::apply`] once the fetch lands.
    pub fn commit_search(&mut self) -> Option<Request> {
        let commit = self.list.commit_search();
        self.filter(commit)
    }

    fn filter(&self, commit: SearchCommit) -> Option<Request> {
        match commit {
            SearchCommit::Reset => {
                tracing::debug!("Search cleared, showing unfiltered collection");
                None
            }
            SearchCommit::Deferred { prompt } => {
                tracing::debug!("Filter {:?} waits for the in-flight fetch", prompt);
                None
            }
            SearchCommit::Filter { ticket, prompt } => {
                tracing::debug!("Filtering by {:?} (ticket {})", prompt, ticket.get());
                let api = self.api.clone();
                Some(Box::pin(async move {
                    let result = api.filter(&prompt).await;
                    Outcome::FilterApplied {
                        ticket,
                        prompt,
                        result,
                    }
                }))
            }
        }
    }

    /// Clears the search box and restores the unfiltered collection.
    pub fn reset_search(&mut self) {
        self.list.reset_filter();
    }

    /// Triggers a sync. Returns `None` while a sync is already in flight.
    ///
    /// The request resolves after the trigger call and, if it succeeded, a
    /// fixed settle delay. The backend has no completion signal, so the
    /// delay approximates the time the pipeline needs.
    pub fn trigger_sync(&mut self) -> Option<Request> {
        if self.is_syncing {
            tracing::debug!("Sync already in flight");
            return None;
        }
        self.is_syncing = true;
        tracing::info!("Triggering sync");
        let api = self.api.clone();
        let delay = self.settle_delay;
        Some(Box::pin(async move {
            let result = api.trigger_sync().await;
            if result.is_ok() {
                tokio::time::sleep(delay).await;
            }
            Outcome::SyncSettled { result }
        }))
    }

    /// Updates the context hint for the next draft.
    pub fn set_draft_context(&mut self, context: impl Into<String>) {
        self.detail.set_draft_context(context);
    }

    /// Generates a draft for the selected email. Returns `None` when nothing
    /// is selected.
    pub fn generate_draft(&mut self) -> Option<Request> {
        let request = self.detail.begin_draft()?;
        tracing::debug!(
            "Generating draft for {} (ticket {})",
            request.email_id,
            request.ticket.get()
        );
        let api = self.api.clone();
        Some(Box::pin(async move {
            let result = api
                .generate_draft(&request.email_id, &request.context)
                .await;
            Outcome::DraftGenerated {
                ticket: request.ticket,
                email_id: request.email_id,
                result,
            }
        }))
    }

    /// Applies a finished request. Returns a follow-up request when the
    /// outcome calls for one: the refetch after a settled sync, or a filter
    /// deferred behind a fetch.
    pub fn apply(&mut self, outcome: Outcome) -> Option<Request> {
        match outcome {
            Outcome::EmailsFetched {
                ticket,
                category,
                result,
            } => {
                let applied = match result {
                    Ok(emails) => {
                        let count = emails.len();
                        let applied = self.list.apply_fetch(ticket, emails);
                        if applied {
                            tracing::info!("Loaded {} {} emails", count, category.as_str());
                        }
                        applied
                    }
                    Err(e) => {
                        let applied = self.list.fail_fetch(ticket);
                        if applied {
                            tracing::warn!("Failed to fetch {} emails: {}", category.as_str(), e);
                        }
                        applied
                    }
                };
                if !applied {
                    tracing::debug!("Discarding stale fetch (ticket {})", ticket.get());
                    return None;
                }
                let deferred = self.list.take_deferred_filter()?;
                self.filter(deferred)
            }
            Outcome::ThreadLoaded {
                ticket,
                email_id,
                result,
            } => {
                let applied = match result {
                    Ok(detail) => self.detail.apply_thread(ticket, detail),
                    Err(e) => {
                        let applied = self.detail.fail_thread(ticket);
                        if applied {
                            tracing::warn!("Failed to load thread {}: {}", email_id, e);
                        }
                        applied
                    }
                };
                if !applied {
                    tracing::debug!("Discarding stale thread for {}", email_id);
                }
                None
            }
            Outcome::SyncSettled { result } => {
                self.is_syncing = false;
                match result {
                    Ok(()) => {
                        tracing::info!("Sync settled, refetching");
                        Some(self.refresh())
                    }
                    Err(e) => {
                        tracing::warn!("Sync failed: {}", e);
                        None
                    }
                }
            }
            Outcome::FilterApplied {
                ticket,
                prompt,
                result,
            } => {
                let applied = match result {
                    Ok(ids) => self.list.apply_filter(ticket, prompt, &ids),
                    Err(e) => {
                        let applied = self.list.fail_filter(ticket);
                        if applied {
                            tracing::warn!("Filter {:?} failed: {}", prompt, e);
                        }
                        applied
                    }
                };
                if !applied {
                    tracing::debug!("Discarding stale filter (ticket {})", ticket.get());
                }
                None
            }
            Outcome::DraftGenerated {
                ticket,
                email_id,
                result,
            } => {
                let applied = match result {
                    Ok(draft) => self.detail.apply_draft(ticket, &email_id, draft),
                    Err(e) => {
                        let applied = self.detail.fail_draft(ticket, &email_id);
                        if applied {
                            tracing::warn!("Draft generation for {} failed: {}", email_id, e);
                        }
                        applied
                    }
                };
                if !applied {
                    tracing::debug!("Discarding stale draft for {}", email_id);
                }
                None
            }
        }
    }

    /// Category list state.
    #[must_use]
    pub const fn list(&self) -> &CategoryListStore {
        &self.list
    }

    /// Selected thread state.
    #[must_use]
    pub const fn detail(&self) -> &ThreadDetailStore {
        &self.detail
    }

    /// Whether a sync is in flight (trigger disabled).
    #[must_use]
    pub const fn is_syncing(&self) -> bool {
        self.is_syncing
    }
}
