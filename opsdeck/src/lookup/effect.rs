//! Lookup effects and the driver that executes them

use std::sync::Arc;

use opsdeck_core::{Action, EffectContext, TaskKey};

use super::LookupAction;
use crate::api::{CredentialProvider, ListQuery};
use crate::credential::Credential;

/// Side effects declared by the lookup reducer
#[derive(Debug, Clone, PartialEq)]
pub enum LookupEffect {
    /// Run `query`; answer with `LookupDidLoad`/`LookupDidError` tagged `request`
    FetchCredentials { request: u64, query: ListQuery },
    /// Selection changed, by the user or by auto-select
    SelectionChanged(Option<Credential>),
    Blurred,
}

/// Default blur callback: does nothing.
pub fn no_blur<A>() -> Option<A> {
    None
}

/// Executes [`LookupEffect`]s for a host whose action type is `A`
///
/// Fetches all run under one task key, so starting a fetch aborts the
/// previous one. Selection and blur become the host's actions through
/// `on_change` and `on_blur`.
pub struct LookupDriver<A> {
    provider: Arc<dyn CredentialProvider>,
    task_key: TaskKey,
    wrap: fn(LookupAction) -> A,
    on_change: fn(Option<Credential>) -> A,
    on_blur: fn() -> Option<A>,
}

impl<A: Action> LookupDriver<A> {
    pub fn new(
        provider: Arc<dyn CredentialProvider>,
        wrap: fn(LookupAction) -> A,
        on_change: fn(Option<Credential>) -> A,
    ) -> Self {
        Self {
            provider,
            task_key: TaskKey::new("credential_lookup"),
            wrap,
            on_change,
            on_blur: no_blur::<A>,
        }
    }

    pub fn with_on_blur(mut self, on_blur: fn() -> Option<A>) -> Self {
        self.on_blur = on_blur;
        self
    }

    /// Use a separate task slot (several lookups on one screen).
    pub fn with_task_key(mut self, key: impl Into<TaskKey>) -> Self {
        self.task_key = key.into();
        self
    }

    pub fn task_key(&self) -> &TaskKey {
        &self.task_key
    }

    pub fn handle(&self, effect: LookupEffect, ctx: &mut EffectContext<'_, A>) {
        match effect {
            LookupEffect::FetchCredentials { request, query } => {
                let provider = Arc::clone(&self.provider);
                let wrap = self.wrap;
                ctx.tasks().spawn(self.task_key.clone(), async move {
                    let action = match provider.read(&query).await {
                        Ok(page) => LookupAction::LookupDidLoad { request, page },
                        Err(e) => {
                            tracing::warn!(request, error = %e, "credential fetch failed");
                            LookupAction::LookupDidError {
                                request,
                                error: e.to_string(),
                            }
                        }
                    };
                    wrap(action)
                });
            }
            LookupEffect::SelectionChanged(value) => ctx.emit((self.on_change)(value)),
            LookupEffect::Blurred => {
                if let Some(action) = (self.on_blur)() {
                    ctx.emit(action);
                }
            }
        }
    }
}
