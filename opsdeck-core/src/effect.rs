//! Effect-based state management
//!
//! Reducers stay pure by returning declarative effects next to the
//! state-changed flag. The runtime (or a test) executes the effects.
//!
//! ```ignore
//! enum Effect {
//!     FetchCredentials { request: u64, query: ListQuery },
//! }
//!
//! fn reducer(state: &mut LookupState, action: LookupAction) -> DispatchResult<Effect> {
//!     match action {
//!         LookupAction::LookupRefresh => {
//!             state.request += 1;
//!             state.is_loading = true;
//!             DispatchResult::changed_with(Effect::FetchCredentials {
//!                 request: state.request,
//!                 query: state.query(),
//!             })
//!         }
//!         // ...
//!     }
//! }
//! ```

use std::marker::PhantomData;

use crate::action::Action;
use crate::middleware::Middleware;

/// Outcome of a dispatch: whether state changed, plus effects to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    /// Whether the state was modified (a re-render is needed).
    pub changed: bool,
    /// Effects to execute after the dispatch.
    pub effects: Vec<E>,
}

impl<E> Default for DispatchResult<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> DispatchResult<E> {
    /// Nothing changed, nothing to do.
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// A single effect without a state change.
    #[inline]
    pub fn effect(effect: E) -> Self {
        Self {
            changed: false,
            effects: vec![effect],
        }
    }

    /// State changed and one effect.
    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// Append an effect.
    #[inline]
    pub fn with(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    /// Whether there is anything for the runtime to execute.
    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    /// Convert effects into a parent's effect type.
    ///
    /// Used when a feature reducer is embedded in an application reducer.
    pub fn map_effects<F, T>(self, f: F) -> DispatchResult<T>
    where
        F: FnMut(E) -> T,
    {
        DispatchResult {
            changed: self.changed,
            effects: self.effects.into_iter().map(f).collect(),
        }
    }
}

/// A reducer that can emit effects.
pub type EffectReducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// A store whose reducer returns [`DispatchResult`].
pub struct EffectStore<S, A, E> {
    state: S,
    reducer: EffectReducer<S, A, E>,
    _marker: PhantomData<(A, E)>,
}

impl<S, A, E> EffectStore<S, A, E>
where
    A: Action,
{
    pub fn new(state: S, reducer: EffectReducer<S, A, E>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Direct state access, meant for initialization only.
    #[inline]
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    #[inline]
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        (self.reducer)(&mut self.state, action)
    }
}

/// An [`EffectStore`] that runs middleware around every dispatch.
///
/// Middleware sees the action and the changed flag, never the effects.
pub struct EffectStoreWithMiddleware<S, A, E, M>
where
    A: Action,
    M: Middleware<A>,
{
    store: EffectStore<S, A, E>,
    middleware: M,
}

impl<S, A, E, M> EffectStoreWithMiddleware<S, A, E, M>
where
    A: Action,
    M: Middleware<A>,
{
    pub fn new(state: S, reducer: EffectReducer<S, A, E>, middleware: M) -> Self {
        Self {
            store: EffectStore::new(state, reducer),
            middleware,
        }
    }

    #[inline]
    pub fn state(&self) -> &S {
        self.store.state()
    }

    #[inline]
    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        self.middleware.before(&action);
        let result = self.store.dispatch(action.clone());
        self.middleware.after(&action, result.changed);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    enum TestAction {
        Load(u32),
        DidLoad { request: u32, rows: usize },
        Ping,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Load(_) => "Load",
                TestAction::DidLoad { .. } => "DidLoad",
                TestAction::Ping => "Ping",
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum TestEffect {
        Fetch(u32),
        Notify,
    }

    #[derive(Default)]
    struct TestState {
        request: u32,
        rows: usize,
    }

    fn test_reducer(state: &mut TestState, action: TestAction) -> DispatchResult<TestEffect> {
        match action {
            TestAction::Load(request) => {
                state.request = request;
                DispatchResult::changed_with(TestEffect::Fetch(request))
            }
            TestAction::DidLoad { request, rows } if request == state.request => {
                state.rows = rows;
                DispatchResult::changed()
            }
            TestAction::DidLoad { .. } => DispatchResult::unchanged(),
            TestAction::Ping => DispatchResult::effect(TestEffect::Notify),
        }
    }

    #[test]
    fn test_dispatch_result_builders() {
        let r: DispatchResult<TestEffect> = DispatchResult::unchanged();
        assert!(!r.changed);
        assert!(!r.has_effects());

        let r = DispatchResult::effect(TestEffect::Notify);
        assert!(!r.changed);
        assert_eq!(r.effects, vec![TestEffect::Notify]);

        let r = DispatchResult::changed_with(TestEffect::Fetch(1)).with(TestEffect::Notify);
        assert!(r.changed);
        assert_eq!(r.effects, vec![TestEffect::Fetch(1), TestEffect::Notify]);
    }

    #[test]
    fn test_map_effects_keeps_changed_flag() {
        let r = DispatchResult::changed_with(TestEffect::Fetch(7));
        let mapped: DispatchResult<String> = r.map_effects(|e| format!("{:?}", e));
        assert!(mapped.changed);
        assert_eq!(mapped.effects, vec!["Fetch(7)".to_string()]);
    }

    #[test]
    fn test_effect_store_ignores_stale_result() {
        let mut store = EffectStore::new(TestState::default(), test_reducer);

        let result = store.dispatch(TestAction::Load(1));
        assert_eq!(result.effects, vec![TestEffect::Fetch(1)]);
        store.dispatch(TestAction::Load(2));

        let result = store.dispatch(TestAction::DidLoad {
            request: 1,
            rows: 5,
        });
        assert!(!result.changed);
        assert_eq!(store.state().rows, 0);

        let result = store.dispatch(TestAction::DidLoad {
            request: 2,
            rows: 3,
        });
        assert!(result.changed);
        assert_eq!(store.state().rows, 3);
    }

    #[derive(Default)]
    struct CountingMiddleware {
        before: usize,
        changed: usize,
    }

    impl<A: Action> Middleware<A> for CountingMiddleware {
        fn before(&mut self, _action: &A) {
            self.before += 1;
        }

        fn after(&mut self, _action: &A, state_changed: bool) {
            if state_changed {
                self.changed += 1;
            }
        }
    }

    #[test]
    fn test_store_with_middleware() {
        let mut store = EffectStoreWithMiddleware::new(
            TestState::default(),
            test_reducer,
            CountingMiddleware::default(),
        );

        let result = store.dispatch(TestAction::Ping);
        assert_eq!(result.effects, vec![TestEffect::Notify]);
        store.dispatch(TestAction::Load(3));

        assert_eq!(store.middleware().before, 2);
        assert_eq!(store.middleware().changed, 1);
        assert_eq!(store.state().request, 3);
    }
}
