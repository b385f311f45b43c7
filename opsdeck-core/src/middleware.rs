//! Middleware hooks around store dispatch

use crate::action::{Action, ActionSummary};

/// Intercepts actions before and after the reducer runs
pub trait Middleware<A: Action> {
    /// Called before the action reaches the reducer
    fn before(&mut self, action: &A);

    /// Called after the reducer with its changed flag
    fn after(&mut self, action: &A, state_changed: bool);
}

/// Middleware that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Logs every dispatched action through `tracing` at debug level
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    /// Also log before the reducer runs
    pub log_before: bool,
}

impl LoggingMiddleware {
    /// Log after dispatch only
    pub fn new() -> Self {
        Self { log_before: false }
    }

    /// Log both before and after dispatch
    pub fn verbose() -> Self {
        Self { log_before: true }
    }
}

impl<A: ActionSummary> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.log_before {
            tracing::debug!(action = %action.name(), "dispatching");
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        tracing::debug!(
            action = %action.name(),
            summary = %action.summary(),
            state_changed,
            "action processed"
        );
    }
}
