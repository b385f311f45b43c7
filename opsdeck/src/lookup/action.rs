use opsdeck_core::{Action, ActionSummary};

use crate::credential::{Credential, CredentialTypeId, Page};

/// Lookup actions
///
/// `LookupTypeChange` and `LookupRefresh` are intents that start a fetch;
/// `LookupDid*` carry the result back, tagged with the request they answer.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupAction {
    /// Mount, or the credential type filter changed
    LookupTypeChange(CredentialTypeId),
    /// Fetch again for the current filter
    LookupRefresh,
    LookupDidLoad { request: u64, page: Page<Credential> },
    LookupDidError { request: u64, error: String },
    LookupHighlight(usize),
    /// User picked the option at this index
    LookupSelect(usize),
    LookupClear,
    LookupBlur,
}

impl Action for LookupAction {
    fn name(&self) -> &'static str {
        match self {
            LookupAction::LookupTypeChange(_) => "LookupTypeChange",
            LookupAction::LookupRefresh => "LookupRefresh",
            LookupAction::LookupDidLoad { .. } => "LookupDidLoad",
            LookupAction::LookupDidError { .. } => "LookupDidError",
            LookupAction::LookupHighlight(_) => "LookupHighlight",
            LookupAction::LookupSelect(_) => "LookupSelect",
            LookupAction::LookupClear => "LookupClear",
            LookupAction::LookupBlur => "LookupBlur",
        }
    }
}

impl ActionSummary for LookupAction {
    fn summary(&self) -> String {
        match self {
            LookupAction::LookupDidLoad { request, page } => format!(
                "LookupDidLoad {{ request: {}, results: {}, count: {} }}",
                request,
                page.results.len(),
                page.count
            ),
            LookupAction::LookupDidError { request, error } => {
                let msg = if error.chars().count() > 40 {
                    format!("{}...", error.chars().take(37).collect::<String>())
                } else {
                    error.clone()
                };
                format!("LookupDidError {{ request: {}, error: {:?} }}", request, msg)
            }
            _ => format!("{:?}", self),
        }
    }
}
