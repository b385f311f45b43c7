//! Action traits for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to the store
///
/// Actions describe something that happened (a key press mapped to an intent,
/// a fetch that completed). They must be:
/// - Clone: middleware sees a copy before the reducer consumes the original
/// - Debug: for logging
/// - Send + 'static: results come back from spawned tasks
pub trait Action: Clone + Debug + Send + 'static {
    /// Stable action name for logging and filtering
    fn name(&self) -> &'static str;
}

/// Short, log-friendly rendering of an action.
///
/// The default falls back to `Debug`. Override it for actions that carry
/// large payloads (fetched pages, survey definitions).
pub trait ActionSummary: Action {
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}
