//! Category list state.

use std::collections::HashSet;

use super::sequence::{RequestSequence, Ticket};
use crate::model::{Category, Email, EmailId};

/// What committing the search box asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCommit {
    /// The prompt was empty: the unfiltered collection has been restored.
    Reset,
    /// A filter request should be issued for `prompt`.
    Filter {
        /// Ticket of the filter request.
        ticket: Ticket,
        /// Trimmed prompt text.
        prompt: String,
    },
    /// A fetch is in flight: the filter runs once it lands.
    Deferred {
        /// Trimmed prompt text.
        prompt: String,
    },
}

/// Current category, its email collection and list-level UI state.
///
/// Mutated only through its entry points, which keep the loading flags and
/// the collections consistent as a unit.
#[derive(Debug, Clone)]
pub struct CategoryListStore {
    category: Category,
    /// Collection as the last applied fetch returned it.
    all_emails: Vec<Email>,
    /// Visible collection (possibly filtered).
    emails: Vec<Email>,
    selected: Option<EmailId>,
    search_prompt: String,
    applied_prompt: Option<String>,
    /// Prompt of the filter request in flight.
    filtering: Option<String>,
    /// Prompt to filter by once the in-flight fetch lands.
    deferred_filter: Option<String>,
    is_loading: bool,
    fetch_seq: RequestSequence,
    filter_seq: RequestSequence,
}

impl CategoryListStore {
    /// Creates an empty store showing `category`.
    #[must_use]
    pub const fn new(category: Category) -> Self {
        Self {
            category,
            all_emails: Vec::new(),
            emails: Vec::new(),
            selected: None,
            search_prompt: String::new(),
            applied_prompt: None,
            filtering: None,
            deferred_filter: None,
            is_loading: false,
            fetch_seq: RequestSequence::new(),
            filter_seq: RequestSequence::new(),
        }
    }

    /// Switches to `category` (or re-selects it), clearing the selection and
    /// any filter. Always returns a fresh fetch ticket.
    pub fn select_category(&mut self, category: Category) -> Ticket {
        self.category = category;
        self.selected = None;
        self.reset_filter();
        self.begin_fetch()
    }

    /// Marks a fetch of the active category as in flight.
    ///
    /// An in-flight filter is superseded, since it was computed for the old
    /// collection. Its prompt, or else the applied one, is deferred and runs
    /// again against the fetched collection (see [`Self::take_deferred_filter`]).
    pub fn begin_fetch(&mut self) -> Ticket {
        self.is_loading = true;
        self.filter_seq.invalidate();
        let in_flight = self.filtering.take();
        self.deferred_filter = self
            .deferred_filter
            .take()
            .or(in_flight)
            .or_else(|| self.applied_prompt.clone());
        self.fetch_seq.issue()
    }

    /// Applies a fetch result. Returns `false` if the response is stale.
    pub fn apply_fetch(&mut self, ticket: Ticket, emails: Vec<Email>) -> bool {
        if !self.fetch_seq.is_current(ticket) {
            return false;
        }
        self.is_loading = false;
        self.emails.clone_from(&emails);
        self.all_emails = emails;
        self.applied_prompt = None;
        true
    }

    /// Records a failed fetch. The collection is left as it was.
    pub fn fail_fetch(&mut self, ticket: Ticket) -> bool {
        if !self.fetch_seq.is_current(ticket) {
            return false;
        }
        self.is_loading = false;
        true
    }

    /// Updates the search box text. Nothing is requested until a commit.
    pub fn set_search_prompt(&mut self, prompt: impl Into<String>) {
        self.search_prompt = prompt.into();
    }

    /// Commits the search box. While a fetch is in flight the filter is
    /// deferred until the fetched collection lands.
    pub fn commit_search(&mut self) -> SearchCommit {
        let prompt = self.search_prompt.trim().to_string();
        if prompt.is_empty() {
            self.reset_filter();
            return SearchCommit::Reset;
        }
        if self.is_loading {
            self.deferred_filter = Some(prompt.clone());
            return SearchCommit::Deferred { prompt };
        }
        self.issue_filter(prompt)
    }

    /// Issues the deferred filter, if any, once no fetch is in flight.
    pub fn take_deferred_filter(&mut self) -> Option<SearchCommit> {
        if self.is_loading {
            return None;
        }
        let prompt = self.deferred_filter.take()?;
        Some(self.issue_filter(prompt))
    }

    fn issue_filter(&mut self, prompt: String) -> SearchCommit {
        self.filtering = Some(prompt.clone());
        SearchCommit::Filter {
            ticket: self.filter_seq.issue(),
            prompt,
        }
    }

    /// Restores the unfiltered collection and discards any in-flight or
    /// deferred filter.
    pub fn reset_filter(&mut self) {
        self.filter_seq.invalidate();
        self.search_prompt.clear();
        self.filtering = None;
        self.deferred_filter = None;
        self.applied_prompt = None;
        self.emails.clone_from(&self.all_emails);
    }

    /// Applies a filter result: the visible collection becomes the members of
    /// the unfiltered collection whose ids matched, in their original order.
    pub fn apply_filter(&mut self, ticket: Ticket, prompt: String, matching: &[EmailId]) -> bool {
        if !self.filter_seq.is_current(ticket) {
            return false;
        }
        let matching: HashSet<&EmailId> = matching.iter().collect();
        self.emails = self
            .all_emails
            .iter()
            .filter(|email| matching.contains(&email.id))
            .cloned()
            .collect();
        self.applied_prompt = Some(prompt);
        self.filtering = None;
        true
    }

    /// Records a failed filter. The visible collection is left as it was.
    pub fn fail_filter(&mut self, ticket: Ticket) -> bool {
        if !self.filter_seq.is_current(ticket) {
            return false;
        }
        self.filtering = None;
        true
    }

    /// Records a user selection.
    pub fn select_email(&mut self, id: EmailId) {
        self.selected = Some(id);
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Active category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Visible emails.
    #[must_use]
    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    /// Emails as the last fetch returned them, ignoring any filter.
    #[must_use]
    pub fn unfiltered_emails(&self) -> &[Email] {
        &self.all_emails
    }

    /// Selected email id.
    #[must_use]
    pub const fn selected(&self) -> Option<&EmailId> {
        self.selected.as_ref()
    }

    /// Search box text.
    #[must_use]
    pub fn search_prompt(&self) -> &str {
        &self.search_prompt
    }

    /// Prompt of the filter currently applied to the visible collection.
    #[must_use]
    pub fn applied_prompt(&self) -> Option<&str> {
        self.applied_prompt.as_deref()
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether a filter request is in flight or waiting on a fetch.
    #[must_use]
    pub const fn is_filtering(&self) -> bool {
        self.filtering.is_some() || self.deferred_filter.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Recipients, Timestamp};

    fn email(id: &str) -> Email {
        Email {
            id: EmailId::new(id),
            thread_id: None,
            subject: format!("subject {id}"),
            sender: "sender@example.com".into(),
            snippet: String::new(),
            date: Timestamp::default(),
            recipients: Recipients::default(),
            category: Category::Jobs,
        }
    }

    fn loaded(ids: &[&str]) -> CategoryListStore {
        let mut store = CategoryListStore::new(Category::Jobs);
        let ticket = store.begin_fetch();
        assert!(store.apply_fetch(ticket, ids.iter().map(|id| email(id)).collect()));
        store
    }

    fn visible_ids(store: &CategoryListStore) -> Vec<&str> {
        store.emails().iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_select_category_clears_selection_and_sets_loading() {
        let mut store = loaded(&["e1"]);
        store.select_email(EmailId::new("e1"));
        store.set_search_prompt("recruiters");

        store.select_category(Category::Others);

        assert_eq!(store.category(), Category::Others);
        assert_eq!(store.selected(), None);
        assert!(store.is_loading());
        assert_eq!(store.search_prompt(), "");
    }

    #[test]
    fn test_reselecting_same_category_issues_new_ticket() {
        let mut store = CategoryListStore::new(Category::Jobs);
        let first = store.select_category(Category::Jobs);
        let second = store.select_category(Category::Jobs);

        assert_ne!(first, second);
        assert!(!store.apply_fetch(first, vec![email("old")]));
        assert!(store.apply_fetch(second, vec![email("new")]));
        assert_eq!(visible_ids(&store), vec!["new"]);
    }

    #[test]
    fn test_failed_fetch_keeps_collection() {
        let mut store = loaded(&["e1", "e2"]);
        let ticket = store.begin_fetch();

        assert!(store.fail_fetch(ticket));
        assert!(!store.is_loading());
        assert_eq!(visible_ids(&store), vec!["e1", "e2"]);
    }

    #[test]
    fn test_stale_failure_does_not_clear_loading() {
        let mut store = CategoryListStore::new(Category::Jobs);
        let stale = store.begin_fetch();
        let _current = store.begin_fetch();

        assert!(!store.fail_fetch(stale));
        assert!(store.is_loading());
    }

    #[test]
    fn test_filter_keeps_original_order() {
        let mut store = loaded(&["e1", "e2", "e3"]);
        store.set_search_prompt("  older ones ");
        let SearchCommit::Filter { ticket, prompt } = store.commit_search() else {
            panic!("expected a filter request");
        };
        assert_eq!(prompt, "older ones");
        assert!(store.is_filtering());

        let matching = [EmailId::new("e3"), EmailId::new("e1"), EmailId::new("zz")];
        assert!(store.apply_filter(ticket, prompt, &matching));

        assert_eq!(visible_ids(&store), vec!["e1", "e3"]);
        assert_eq!(store.applied_prompt(), Some("older ones"));
        assert!(!store.is_filtering());
    }

    #[test]
    fn test_failed_filter_leaves_visible_collection() {
        let mut store = loaded(&["e1", "e2"]);
        store.set_search_prompt("anything");
        let SearchCommit::Filter { ticket, .. } = store.commit_search() else {
            panic!("expected a filter request");
        };

        assert!(store.fail_filter(ticket));
        assert_eq!(visible_ids(&store), vec!["e1", "e2"]);
        assert!(!store.is_filtering());
    }

    #[test]
    fn test_empty_commit_restores_unfiltered_collection() {
        let mut store = loaded(&["e1", "e2"]);
        store.set_search_prompt("first only");
        let SearchCommit::Filter { ticket, prompt } = store.commit_search() else {
            panic!("expected a filter request");
        };
        store.apply_filter(ticket, prompt, &[EmailId::new("e1")]);
        assert_eq!(visible_ids(&store), vec!["e1"]);

        store.set_search_prompt("   ");
        assert_eq!(store.commit_search(), SearchCommit::Reset);

        assert_eq!(visible_ids(&store), vec!["e1", "e2"]);
        assert_eq!(store.emails(), store.unfiltered_emails());
        assert_eq!(store.applied_prompt(), None);
    }

    #[test]
    fn test_reset_discards_in_flight_filter() {
        let mut store = loaded(&["e1", "e2"]);
        store.set_search_prompt("first only");
        let SearchCommit::Filter { ticket, prompt } = store.commit_search() else {
            panic!("expected a filter request");
        };

        store.reset_filter();

        assert!(!store.apply_filter(ticket, prompt, &[EmailId::new("e1")]));
        assert_eq!(visible_ids(&store), vec!["e1", "e2"]);
    }

    #[test]
    fn test_fetch_supersedes_in_flight_filter() {
        let mut store = loaded(&["e1", "e2"]);
        store.set_search_prompt("first only");
        let SearchCommit::Filter { ticket, prompt } = store.commit_search() else {
            panic!("expected a filter request");
        };

        let fetch = store.begin_fetch();
        assert!(!store.apply_filter(ticket, prompt, &[EmailId::new("e1")]));
        assert_eq!(store.take_deferred_filter(), None);

        assert!(store.apply_fetch(fetch, vec![email("e1"), email("e2"), email("e3")]));
        assert_eq!(visible_ids(&store), vec!["e1", "e2", "e3"]);

        let Some(SearchCommit::Filter { ticket, prompt }) = store.take_deferred_filter() else {
            panic!("expected the filter to run again");
        };
        assert_eq!(prompt, "first only");
        assert!(store.apply_filter(ticket, prompt, &[EmailId::new("e3")]));
        assert_eq!(visible_ids(&store), vec!["e3"]);
    }

    #[test]
    fn test_commit_while_loading_is_deferred() {
        let mut store = CategoryListStore::new(Category::Jobs);
        let fetch = store.select_category(Category::Others);
        store.set_search_prompt("recent");

        assert_eq!(
            store.commit_search(),
            SearchCommit::Deferred {
                prompt: "recent".into()
            }
        );
        assert!(store.is_filtering());
        assert_eq!(store.applied_prompt(), None);

        assert!(store.apply_fetch(fetch, vec![email("o1"), email("o2")]));
        assert!(matches!(
            store.take_deferred_filter(),
            Some(SearchCommit::Filter { prompt, .. }) if prompt == "recent"
        ));
        assert_eq!(store.take_deferred_filter(), None);
    }

    #[test]
    fn test_refetch_reapplies_applied_filter() {
        let mut store = loaded(&["e1", "e2"]);
        store.set_search_prompt("first only");
        let SearchCommit::Filter { ticket, prompt } = store.commit_search() else {
            panic!("expected a filter request");
        };
        assert!(store.apply_filter(ticket, prompt, &[EmailId::new("e1")]));

        let fetch = store.begin_fetch();
        assert!(store.apply_fetch(fetch, vec![email("e1"), email("e2")]));

        assert!(matches!(
            store.take_deferred_filter(),
            Some(SearchCommit::Filter { prompt, .. }) if prompt == "first only"
        ));
    }

    #[test]
    fn test_category_switch_drops_filter() {
        let mut store = loaded(&["e1", "e2"]);
        store.set_search_prompt("first only");
        let SearchCommit::Filter { ticket, prompt } = store.commit_search() else {
            panic!("expected a filter request");
        };
        assert!(store.apply_filter(ticket, prompt, &[EmailId::new("e1")]));

        let fetch = store.select_category(Category::Others);
        assert!(!store.is_filtering());
        assert!(store.apply_fetch(fetch, vec![email("o1")]));
        assert_eq!(store.take_deferred_filter(), None);
    }
}
