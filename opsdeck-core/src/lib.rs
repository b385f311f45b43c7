//! Core traits and runtime for opsdeck
//!
//! opsdeck screens follow a Redux/Elm-style architecture:
//!
//! - **Action**: something that happened (`LookupTypeChange`, `LookupDidLoad`)
//! - **Reducer**: `fn(&mut S, A) -> DispatchResult<E>`, the only place state changes
//! - **Effect**: declarative side effect returned by the reducer (fetch a page,
//!   notify a parent), executed by the runtime
//! - **Component**: renders from props and maps events to actions
//!
//! # Async results
//!
//! Fetches use a two-phase action pattern. An intent action makes the reducer
//! emit an effect; the effect handler spawns a task on the [`TaskManager`];
//! the task sends a `Did*` action back. Result actions carry the request
//! number they answer, so the reducer can drop anything superseded:
//!
//! ```ignore
//! fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>) {
//!     match effect {
//!         Effect::FetchCredentials { request, query } => {
//!             let provider = provider.clone();
//!             ctx.tasks().spawn("credentials", async move {
//!                 match provider.read(&query).await {
//!                     Ok(page) => Action::LookupDidLoad { request, page },
//!                     Err(e) => Action::LookupDidError { request, error: e.to_string() },
//!                 }
//!             });
//!         }
//!     }
//! }
//! ```

pub mod action;
pub mod component;
pub mod effect;
pub mod event;
pub mod keys;
pub mod middleware;
pub mod runtime;
pub mod tasks;
pub mod testing;

pub use action::{Action, ActionSummary};
pub use component::Component;
pub use effect::{DispatchResult, EffectReducer, EffectStore, EffectStoreWithMiddleware};
pub use event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
pub use keys::parse_key_string;
pub use middleware::{LoggingMiddleware, Middleware, NoopMiddleware};
pub use runtime::{EffectContext, EffectRuntime, EffectStoreLike, EventOutcome, PollerConfig};
pub use tasks::{TaskKey, TaskManager};
pub use testing::{buffer_to_string_plain, key, key_event, RenderHarness, TestHarness};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::action::{Action, ActionSummary};
    pub use crate::component::Component;
    pub use crate::effect::{DispatchResult, EffectStore, EffectStoreWithMiddleware};
    pub use crate::event::EventKind;
    pub use crate::middleware::{LoggingMiddleware, Middleware, NoopMiddleware};
    pub use crate::runtime::{EffectContext, EffectRuntime, EventOutcome};
    pub use crate::tasks::{TaskKey, TaskManager};

    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
