//! Integration tests for the action orchestrator.
//!
//! These tests drive the orchestrator against an in-memory API so request
//! futures can be completed in any order, simulating out-of-order network
//! responses.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio_test::{assert_pending, assert_ready, task};

use mauto_core::model::{Recipients, Timestamp};
use mauto_core::{
    ActionOrchestrator, ApiError, ApiResult, Category, ClientConfig, Email, EmailDetail, EmailId,
    MailApi, Outcome,
};

/// Calls recorded by the fake API.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    List(Category),
    Detail(EmailId),
    Sync,
    Filter(String),
    Generate(EmailId, String),
}

#[derive(Debug, Default)]
struct FakeState {
    /// Emails returned per category.
    emails: HashMap<Category, Vec<Email>>,
    /// Ids returned for a filter prompt.
    filters: HashMap<String, Vec<EmailId>>,
    list_fails: bool,
    sync_fails: bool,
    generate_fails: bool,
    calls: Vec<Call>,
}

/// In-memory API with scripted responses.
#[derive(Debug, Clone, Default)]
struct FakeApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeApi {
    fn with_emails(self, category: Category, emails: Vec<Email>) -> Self {
        self.state.lock().unwrap().emails.insert(category, emails);
        self
    }

    fn with_filter(self, prompt: &str, ids: &[&str]) -> Self {
        self.state
            .lock()
            .unwrap()
            .filters
            .insert(prompt.to_string(), ids.iter().map(|id| EmailId::new(*id)).collect());
        self
    }

    fn set_list_fails(&self, fails: bool) {
        self.state.lock().unwrap().list_fails = fails;
    }

    fn failing_sync(self) -> Self {
        self.state.lock().unwrap().sync_fails = true;
        self
    }

    fn failing_generate(self) -> Self {
        self.state.lock().unwrap().generate_fails = true;
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }
}

impl MailApi for FakeApi {
    async fn list_emails(&self, category: Category) -> ApiResult<Vec<Email>> {
        self.record(Call::List(category));
        if self.state.lock().unwrap().list_fails {
            return Err(ApiError::Transport("connection refused".into()));
        }
        Ok(self
            .state
            .lock()
            .unwrap()
            .emails
            .get(&category)
            .cloned()
            .unwrap_or_default())
    }

    async fn email_detail(&self, id: &EmailId) -> ApiResult<EmailDetail> {
        self.record(Call::Detail(id.clone()));
        Ok(EmailDetail {
            email: email(id.as_str(), Category::Jobs),
            thread: Vec::new(),
        })
    }

    async fn trigger_sync(&self) -> ApiResult<()> {
        self.record(Call::Sync);
        if self.state.lock().unwrap().sync_fails {
            return Err(ApiError::Status {
                endpoint: "/sync".into(),
                status: 500,
            });
        }
        Ok(())
    }

    async fn filter(&self, prompt: &str) -> ApiResult<Vec<EmailId>> {
        self.record(Call::Filter(prompt.to_string()));
        Ok(self
            .state
            .lock()
            .unwrap()
            .filters
            .get(prompt)
            .cloned()
            .unwrap_or_default())
    }

    async fn generate_draft(&self, email_id: &EmailId, context: &str) -> ApiResult<String> {
        self.record(Call::Generate(email_id.clone(), context.to_string()));
        if self.state.lock().unwrap().generate_fails {
            return Err(ApiError::Transport("connection reset".into()));
        }
        Ok(format!("Draft for {email_id}"))
    }
}

fn email(id: &str, category: Category) -> Email {
    Email {
        id: EmailId::new(id),
        thread_id: None,
        subject: format!("Subject {id}"),
        sender: "recruiter@example.com".into(),
        snippet: String::new(),
        date: Timestamp::default(),
        recipients: Recipients::default(),
        category,
    }
}

fn orchestrator(api: FakeApi) -> ActionOrchestrator<FakeApi> {
    ActionOrchestrator::new(api, &ClientConfig::default())
}

fn count_calls(api: &FakeApi, pred: impl Fn(&Call) -> bool) -> usize {
    api.calls().iter().filter(|call| pred(call)).count()
}

fn visible_ids(orch: &ActionOrchestrator<FakeApi>) -> Vec<String> {
    orch.list()
        .emails()
        .iter()
        .map(|e| e.id.as_str().to_string())
        .collect()
}

/// Loads the jobs category with E1 and E2.
async fn loaded_jobs(api: FakeApi) -> ActionOrchestrator<FakeApi> {
    let api = api.with_emails(
        Category::Jobs,
        vec![email("E1", Category::Jobs), email("E2", Category::Jobs)],
    );
    let mut orch = orchestrator(api);
    let outcome = orch.select_category(Category::Jobs).await;
    assert!(orch.apply(outcome).is_none());
    orch
}

#[tokio::test]
async fn test_later_fetch_wins_when_it_arrives_last() {
    let api = FakeApi::default()
        .with_emails(Category::Jobs, vec![email("A1", Category::Jobs)])
        .with_emails(Category::Others, vec![email("B1", Category::Others)]);
    let mut orch = orchestrator(api);

    let a = orch.select_category(Category::Jobs);
    let b = orch.select_category(Category::Others);

    let a = a.await;
    orch.apply(a);
    assert!(orch.list().is_loading());
    assert!(orch.list().emails().is_empty());

    let b = b.await;
    orch.apply(b);
    assert_eq!(visible_ids(&orch), vec!["B1"]);
    assert!(!orch.list().is_loading());
}

#[tokio::test]
async fn test_later_fetch_wins_when_it_arrives_first() {
    let api = FakeApi::default()
        .with_emails(Category::Jobs, vec![email("A1", Category::Jobs)])
        .with_emails(Category::Others, vec![email("B1", Category::Others)]);
    let mut orch = orchestrator(api);

    let a = orch.select_category(Category::Jobs);
    let b = orch.select_category(Category::Others);

    let b = b.await;
    let a = a.await;
    orch.apply(b);
    orch.apply(a);

    assert_eq!(visible_ids(&orch), vec!["B1"]);
    assert_eq!(orch.list().category(), Category::Others);
}

#[tokio::test]
async fn test_select_category_clears_selection_and_fetches_once() {
    let api = FakeApi::default();
    let mut orch = loaded_jobs(api.clone()).await;
    let thread = orch.select_email(EmailId::new("E1")).unwrap().await;
    orch.apply(thread);
    assert!(orch.detail().detail().is_some());

    let request = orch.select_category(Category::Jobs);
    assert!(orch.list().selected().is_none());
    assert!(orch.detail().email_id().is_none());
    assert!(orch.list().is_loading());

    orch.apply(request.await);
    let fetches = api
        .calls()
        .into_iter()
        .filter(|call| matches!(call, Call::List(_)))
        .count();
    // initial load plus the re-selection
    assert_eq!(fetches, 2);
    assert_eq!(visible_ids(&orch), vec!["E1", "E2"]);
}

#[tokio::test]
async fn test_switching_to_others_end_to_end() {
    let api = FakeApi::default().with_emails(
        Category::Others,
        vec![email("O1", Category::Others), email("O2", Category::Others)],
    );
    let mut orch = loaded_jobs(api.clone()).await;
    orch.select_email(EmailId::new("E2"));

    let request = orch.select_category(Category::Others);
    assert!(orch.list().selected().is_none());
    assert_eq!(visible_ids(&orch), vec!["E1", "E2"]);

    orch.apply(request.await);

    assert_eq!(api.calls().last(), Some(&Call::List(Category::Others)));
    assert_eq!(visible_ids(&orch), vec!["O1", "O2"]);
}

#[tokio::test]
async fn test_filter_narrows_visible_collection() {
    let api = FakeApi::default().with_filter("more than 7 days ago", &["E1"]);
    let mut orch = loaded_jobs(api.clone()).await;

    orch.set_search_prompt("more than 7 days ago");
    let request = orch.commit_search().unwrap();
    assert!(orch.list().is_filtering());
    orch.apply(request.await);

    assert_eq!(visible_ids(&orch), vec!["E1"]);
    assert_eq!(
        api.calls().last(),
        Some(&Call::Filter("more than 7 days ago".into()))
    );
}

#[tokio::test]
async fn test_empty_commit_restores_last_fetch() {
    let api = FakeApi::default().with_filter("first", &["E1"]);
    let mut orch = loaded_jobs(api.clone()).await;
    orch.set_search_prompt("first");
    let request = orch.commit_search().unwrap();
    orch.apply(request.await);
    assert_eq!(visible_ids(&orch), vec!["E1"]);

    orch.set_search_prompt("");
    assert!(orch.commit_search().is_none());

    assert_eq!(visible_ids(&orch), vec!["E1", "E2"]);
    let filters = api
        .calls()
        .into_iter()
        .filter(|call| matches!(call, Call::Filter(_)))
        .count();
    assert_eq!(filters, 1);
}

#[tokio::test]
async fn test_draft_for_previous_email_not_shown() {
    let mut orch = loaded_jobs(FakeApi::default()).await;
    orch.select_email(EmailId::new("X"));
    let draft = orch.generate_draft().unwrap();

    let thread = orch.select_email(EmailId::new("Y")).unwrap();
    orch.apply(draft.await);
    orch.apply(thread.await);

    assert_eq!(orch.detail().email_id(), Some(&EmailId::new("Y")));
    assert_eq!(orch.detail().draft(), None);
    assert!(!orch.detail().is_generating());
}

#[tokio::test]
async fn test_draft_sends_context_and_applies() {
    let api = FakeApi::default();
    let mut orch = loaded_jobs(api.clone()).await;
    orch.select_email(EmailId::new("E1"));
    orch.set_draft_context("ask about the timeline");

    let draft = orch.generate_draft().unwrap();
    assert!(orch.detail().is_generating());
    orch.apply(draft.await);

    assert_eq!(orch.detail().draft(), Some("Draft for E1"));
    assert_eq!(
        api.calls().last(),
        Some(&Call::Generate(
            EmailId::new("E1"),
            "ask about the timeline".into()
        ))
    );
}

#[tokio::test]
async fn test_failed_draft_shows_placeholder() {
    let mut orch = loaded_jobs(FakeApi::default().failing_generate()).await;
    orch.select_email(EmailId::new("E1"));

    let draft = orch.generate_draft().unwrap();
    orch.apply(draft.await);

    assert_eq!(
        orch.detail().draft(),
        Some(mauto_core::store::DRAFT_ERROR_PLACEHOLDER)
    );
}

#[tokio::test]
async fn test_reselecting_email_does_not_reload() {
    let api = FakeApi::default();
    let mut orch = loaded_jobs(api.clone()).await;

    assert!(orch.select_email(EmailId::new("E1")).is_some());
    assert!(orch.select_email(EmailId::new("E1")).is_none());
    assert_eq!(orch.list().selected(), Some(&EmailId::new("E1")));
}

#[tokio::test(start_paused = true)]
async fn test_sync_waits_settle_delay_then_refetches() {
    let api = FakeApi::default();
    let mut orch = loaded_jobs(api.clone()).await;

    let request = orch.trigger_sync().unwrap();
    assert!(orch.is_syncing());
    assert!(orch.trigger_sync().is_none());

    let mut sync = task::spawn(request);
    assert_pending!(sync.poll());
    assert_eq!(api.calls().last(), Some(&Call::Sync));

    tokio::time::advance(Duration::from_millis(1999)).await;
    assert_pending!(sync.poll());

    tokio::time::advance(Duration::from_millis(1)).await;
    let outcome = assert_ready!(sync.poll());
    assert!(matches!(outcome, Outcome::SyncSettled { result: Ok(()) }));

    let refetch = orch.apply(outcome).unwrap();
    assert!(!orch.is_syncing());
    assert!(orch.list().is_loading());
    orch.apply(refetch.await);
    assert_eq!(api.calls().last(), Some(&Call::List(Category::Jobs)));
    assert!(!orch.list().is_loading());
}

#[tokio::test(start_paused = true)]
async fn test_failed_sync_skips_delay_and_refetch() {
    let api = FakeApi::default().failing_sync();
    let mut orch = loaded_jobs(api.clone()).await;

    let mut sync = task::spawn(orch.trigger_sync().unwrap());
    let outcome = assert_ready!(sync.poll());

    assert!(orch.apply(outcome).is_none());
    assert!(!orch.is_syncing());
    assert_eq!(visible_ids(&orch), vec!["E1", "E2"]);
    assert!(orch.trigger_sync().is_some());
}

#[tokio::test]
async fn test_failed_fetch_keeps_collection() {
    let api = FakeApi::default();
    let mut orch = loaded_jobs(api.clone()).await;
    api.set_list_fails(true);

    let request = orch.refresh();
    assert!(orch.list().is_loading());
    assert!(orch.apply(request.await).is_none());

    assert!(!orch.list().is_loading());
    assert_eq!(visible_ids(&orch), vec!["E1", "E2"]);
}

#[tokio::test]
async fn test_later_thread_load_wins() {
    let mut orch = loaded_jobs(FakeApi::default()).await;

    let first = orch.select_email(EmailId::new("E1")).unwrap();
    let second = orch.select_email(EmailId::new("E2")).unwrap();

    orch.apply(second.await);
    orch.apply(first.await);

    let loaded = orch.detail().detail().unwrap();
    assert_eq!(loaded.email.id, EmailId::new("E2"));
    assert_eq!(orch.detail().email_id(), Some(&EmailId::new("E2")));
    assert!(!orch.detail().is_loading());
}

#[tokio::test]
async fn test_later_filter_wins_out_of_order() {
    let api = FakeApi::default()
        .with_filter("first", &["E1"])
        .with_filter("second", &["E2"]);
    let mut orch = loaded_jobs(api).await;

    orch.set_search_prompt("first");
    let first = orch.commit_search().unwrap();
    orch.set_search_prompt("second");
    let second = orch.commit_search().unwrap();

    let second = second.await;
    let first = first.await;
    orch.apply(second);
    orch.apply(first);

    assert_eq!(visible_ids(&orch), vec!["E2"]);
    assert_eq!(orch.list().applied_prompt(), Some("second"));
    assert!(!orch.list().is_filtering());
}

#[tokio::test]
async fn test_filter_and_draft_in_flight_together() {
    let api = FakeApi::default().with_filter("recent", &["E2"]);
    let mut orch = loaded_jobs(api).await;
    let thread = orch.select_email(EmailId::new("E1")).unwrap();
    orch.apply(thread.await);

    orch.set_search_prompt("recent");
    let filter = orch.commit_search().unwrap();
    let draft = orch.generate_draft().unwrap();

    orch.apply(draft.await);
    orch.apply(filter.await);

    assert_eq!(visible_ids(&orch), vec!["E2"]);
    assert_eq!(orch.detail().draft(), Some("Draft for E1"));
}

#[tokio::test]
async fn test_filter_committed_during_fetch_runs_on_new_category() {
    let api = FakeApi::default()
        .with_emails(
            Category::Others,
            vec![email("O1", Category::Others), email("O2", Category::Others)],
        )
        .with_filter("recent", &["E1", "O2"]);
    let mut orch = loaded_jobs(api.clone()).await;

    let fetch = orch.select_category(Category::Others);
    orch.set_search_prompt("recent");
    assert!(orch.commit_search().is_none());
    assert!(orch.list().is_filtering());
    assert_eq!(count_calls(&api, |c| matches!(c, Call::Filter(_))), 0);

    let filter = orch.apply(fetch.await).unwrap();
    assert_eq!(visible_ids(&orch), vec!["O1", "O2"]);
    orch.apply(filter.await);

    assert_eq!(visible_ids(&orch), vec!["O2"]);
    assert_eq!(orch.list().applied_prompt(), Some("recent"));
    assert_eq!(orch.list().search_prompt(), "recent");
    assert!(!orch.list().is_filtering());
}

#[tokio::test]
async fn test_refresh_reapplies_filter() {
    let api = FakeApi::default().with_filter("first", &["E1"]);
    let mut orch = loaded_jobs(api.clone()).await;
    orch.set_search_prompt("first");
    let filter = orch.commit_search().unwrap();
    orch.apply(filter.await);

    let refetch = orch.refresh();
    let filter = orch.apply(refetch.await).unwrap();
    orch.apply(filter.await);

    assert_eq!(visible_ids(&orch), vec!["E1"]);
    assert_eq!(orch.list().applied_prompt(), Some("first"));
    assert_eq!(count_calls(&api, |c| matches!(c, Call::Filter(_))), 2);
}
