//! Lookup flows end to end: reducer -> effect driver -> provider -> result action

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use opsdeck::api::{ApiError, CredentialProvider, ListQuery};
use opsdeck::app::{reducer, Action, AppEffects, AppState};
use opsdeck::lookup::{lookup_reducer, LookupAction, LookupDriver, LookupEffect, LookupState};
use opsdeck::{Credential, Page};
use opsdeck_core::testing::TestHarness;
use opsdeck_core::{assert_emitted, assert_not_emitted, count_emitted, EffectContext, TaskManager};

enum Reply {
    Page(Page<Credential>),
    Status(u16),
}

/// Answers by `credential_type` filter and records every query.
#[derive(Default)]
struct MockProvider {
    replies: HashMap<String, Reply>,
    delays: HashMap<String, Duration>,
    queries: Mutex<Vec<ListQuery>>,
}

impl MockProvider {
    /// Exactly one match for `type_id`.
    fn single(type_id: &str, record: Credential) -> Self {
        Self::default().with_page(type_id, vec![record], 1)
    }

    fn with_page(mut self, type_id: &str, results: Vec<Credential>, count: u64) -> Self {
        self.replies
            .insert(type_id.to_string(), Reply::Page(Page::new(results, count)));
        self
    }

    fn with_status(mut self, type_id: &str, status: u16) -> Self {
        self.replies.insert(type_id.to_string(), Reply::Status(status));
        self
    }

    fn with_delay(mut self, type_id: &str, delay: Duration) -> Self {
        self.delays.insert(type_id.to_string(), delay);
        self
    }

    fn queries(&self) -> Vec<ListQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl CredentialProvider for MockProvider {
    async fn read(&self, query: &ListQuery) -> Result<Page<Credential>, ApiError> {
        self.queries.lock().unwrap().push(query.clone());
        let type_id = query
            .filter("credential_type")
            .unwrap_or_default()
            .to_string();

        if let Some(delay) = self.delays.get(&type_id) {
            tokio::time::sleep(*delay).await;
        }

        match self.replies.get(&type_id) {
            Some(Reply::Page(page)) => Ok(page.clone()),
            Some(Reply::Status(status)) => Err(ApiError::Status {
                status: *status,
                url: "http://mock/api/v2/credentials/".into(),
            }),
            None => Ok(Page::empty()),
        }
    }
}

/// App state, task manager and effect driver wired the way the binary wires them.
struct Flow {
    harness: TestHarness<AppState, Action>,
    tasks: TaskManager<Action>,
    effects: AppEffects,
}

impl Flow {
    fn new(provider: Arc<MockProvider>, auto_populate: bool) -> Self {
        let state = AppState {
            lookup: LookupState::new("Credential").with_auto_populate(auto_populate),
            ..Default::default()
        };
        let harness = TestHarness::new(state);
        let tasks = TaskManager::new(harness.sender());
        Self {
            harness,
            tasks,
            effects: AppEffects::new(provider),
        }
    }

    fn dispatch(&mut self, action: Action) {
        let result = reducer(&mut self.harness.state, action);
        let tx = self.harness.sender();
        let mut ctx = EffectContext::new(&tx, &mut self.tasks);
        for effect in result.effects {
            self.effects.handle(effect, &mut ctx);
        }
    }

    /// Wait for the next emitted action and dispatch it.
    async fn pump(&mut self) -> Action {
        let action = tokio::time::timeout(Duration::from_secs(2), self.harness.next_emitted())
            .await
            .expect("timed out waiting for an action")
            .expect("action channel closed");
        self.dispatch(action.clone());
        action
    }

    /// Nothing else arrives within a short window.
    async fn assert_quiet(&mut self) {
        let next =
            tokio::time::timeout(Duration::from_millis(50), self.harness.next_emitted()).await;
        assert!(next.is_err(), "unexpected action: {:?}", next);
    }

    fn mount(&mut self, type_id: u64) {
        self.dispatch(Action::Lookup(LookupAction::LookupTypeChange(type_id.into())));
    }
}

fn cred(id: u64, name: &str) -> Credential {
    Credential::new(id, name)
}

#[tokio::test]
async fn test_auto_populates_single_result_once() {
    let provider = Arc::new(MockProvider::single("1", cred(1, "Cred 1")));
    let mut flow = Flow::new(provider, true);

    flow.mount(1);
    let loaded = flow.pump().await;
    assert!(matches!(
        loaded,
        Action::Lookup(LookupAction::LookupDidLoad { request: 1, .. })
    ));

    let changed = flow.pump().await;
    assert_eq!(changed, Action::CredentialChange(Some(cred(1, "Cred 1"))));
    assert_eq!(flow.harness.state.credential, Some(cred(1, "Cred 1")));

    flow.assert_quiet().await;
}

#[tokio::test]
async fn test_two_results_never_auto_select() {
    let two = vec![Credential::new(1, ""), Credential::new(2, "")];
    let provider = Arc::new(MockProvider::default().with_page("1", two, 2));
    let mut flow = Flow::new(provider, true);

    flow.mount(1);
    flow.pump().await;

    let emitted = flow.harness.drain_emitted();
    assert_not_emitted!(emitted, Action::CredentialChange(_));
    assert_eq!(flow.harness.state.lookup.options.len(), 2);
    assert!(flow.harness.state.credential.is_none());
    flow.assert_quiet().await;
}

#[tokio::test]
async fn test_auto_populate_off_never_selects() {
    let provider = Arc::new(MockProvider::single("1", cred(1, "Cred 1")));
    let mut flow = Flow::new(provider, false);

    flow.mount(1);
    flow.pump().await;

    flow.assert_quiet().await;
    assert!(flow.harness.state.credential.is_none());
    assert_eq!(flow.harness.state.lookup.options, vec![cred(1, "Cred 1")]);
}

#[tokio::test]
async fn test_query_carries_fixed_params() {
    let provider = Arc::new(MockProvider::default());
    let mut flow = Flow::new(provider.clone(), false);

    flow.mount(1);
    flow.pump().await;

    let queries = provider.queries();
    assert_eq!(queries.len(), 1);
    let params = queries[0].to_params();
    let expected = [
        ("credential_type", "1"),
        ("order_by", "name"),
        ("page", "1"),
        ("page_size", "5"),
    ];
    for (name, value) in expected {
        assert!(
            params.contains(&(name.to_string(), value.to_string())),
            "missing {name}={value} in {params:?}"
        );
    }
}

#[tokio::test]
async fn test_newer_type_supersedes_slow_fetch() {
    let provider = Arc::new(
        MockProvider::default()
            .with_page("1", vec![cred(1, "Old")], 1)
            .with_delay("1", Duration::from_millis(20))
            .with_page("2", vec![cred(2, "New")], 1),
    );
    let mut flow = Flow::new(provider, true);

    flow.mount(1);
    flow.mount(2);

    let loaded = flow.pump().await;
    assert!(matches!(
        loaded,
        Action::Lookup(LookupAction::LookupDidLoad { request: 2, .. })
    ));
    assert_eq!(
        flow.pump().await,
        Action::CredentialChange(Some(cred(2, "New")))
    );

    flow.assert_quiet().await;
    assert_eq!(flow.harness.state.lookup.options, vec![cred(2, "New")]);
    assert_eq!(flow.harness.state.credential, Some(cred(2, "New")));
}

#[tokio::test]
async fn test_fetch_failure_sets_error() {
    let provider = Arc::new(MockProvider::default().with_status("1", 500));
    let mut flow = Flow::new(provider, true);

    flow.mount(1);
    let failed = flow.pump().await;
    assert!(matches!(
        failed,
        Action::Lookup(LookupAction::LookupDidError { request: 1, .. })
    ));

    let lookup = &flow.harness.state.lookup;
    assert!(!lookup.is_loading);
    assert!(lookup.error.as_deref().unwrap_or_default().contains("500"));
    assert!(flow.harness.state.credential.is_none());
    flow.assert_quiet().await;
}

#[tokio::test]
async fn test_refresh_with_same_record_does_not_refire() {
    let provider = Arc::new(MockProvider::single("1", cred(1, "Cred 1")));
    let mut flow = Flow::new(provider, true);

    flow.mount(1);
    flow.pump().await;
    flow.pump().await;

    flow.dispatch(Action::Lookup(LookupAction::LookupRefresh));
    flow.pump().await;

    let emitted = flow.harness.drain_emitted();
    assert_eq!(count_emitted!(emitted, Action::CredentialChange(_)), 0);
    flow.assert_quiet().await;
}

#[tokio::test]
async fn test_blur_reaches_host() {
    let provider = Arc::new(MockProvider::default());
    let mut flow = Flow::new(provider, false);

    flow.dispatch(Action::Lookup(LookupAction::LookupBlur));
    let emitted = flow.harness.drain_emitted();
    assert_emitted!(emitted, Action::CredentialBlur);
}

#[tokio::test]
async fn test_default_blur_is_noop() {
    let provider: Arc<dyn CredentialProvider> = Arc::new(MockProvider::default());
    let driver: LookupDriver<Action> =
        LookupDriver::new(provider, Action::Lookup, Action::CredentialChange);

    let mut harness = TestHarness::<LookupState, Action>::new(LookupState::new("Credential"));
    let mut tasks = TaskManager::new(harness.sender());
    let tx = harness.sender();

    let result = lookup_reducer(&mut harness.state, LookupAction::LookupBlur);
    let mut ctx = EffectContext::new(&tx, &mut tasks);
    for effect in result.effects {
        assert_eq!(effect, LookupEffect::Blurred);
        driver.handle(effect, &mut ctx);
    }

    assert!(harness.drain_emitted().is_empty());
}

#[tokio::test]
async fn test_separate_task_keys_do_not_cancel_each_other() {
    let provider = Arc::new(
        MockProvider::default()
            .with_page("1", vec![cred(1, "Machine")], 1)
            .with_page("2", vec![cred(2, "Vault")], 1)
            .with_delay("1", Duration::from_millis(20))
            .with_delay("2", Duration::from_millis(20)),
    );
    let machine: LookupDriver<Action> =
        LookupDriver::new(provider.clone(), Action::Lookup, Action::CredentialChange);
    let vault: LookupDriver<Action> =
        LookupDriver::new(provider.clone(), Action::Lookup, Action::CredentialChange)
            .with_task_key("vault_lookup");
    assert_eq!(machine.task_key().name(), "credential_lookup");
    assert_eq!(vault.task_key().name(), "vault_lookup");

    let mut harness = TestHarness::<LookupState, Action>::new(LookupState::new("Credential"));
    let mut tasks = TaskManager::new(harness.sender());
    let tx = harness.sender();
    let mut ctx = EffectContext::new(&tx, &mut tasks);
    machine.handle(
        LookupEffect::FetchCredentials {
            request: 1,
            query: ListQuery::lookup("credential_type", "1"),
        },
        &mut ctx,
    );
    vault.handle(
        LookupEffect::FetchCredentials {
            request: 1,
            query: ListQuery::lookup("credential_type", "2"),
        },
        &mut ctx,
    );

    let mut loaded = Vec::new();
    for _ in 0..2 {
        let action = tokio::time::timeout(Duration::from_secs(2), harness.next_emitted())
            .await
            .expect("timed out waiting for a fetch result")
            .expect("action channel closed");
        if let Action::Lookup(LookupAction::LookupDidLoad { page, .. }) = action {
            loaded.extend(page.results.into_iter().map(|c| c.name));
        }
    }
    loaded.sort();
    assert_eq!(loaded, vec!["Machine".to_string(), "Vault".to_string()]);
    assert_eq!(provider.queries().len(), 2);
}
