use opsdeck_core::{Action as ActionTrait, ActionSummary};

use crate::credential::Credential;
use crate::lookup::LookupAction;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Lookup(LookupAction),
    /// The lookup's `on_change`: new form value for the credential field
    CredentialChange(Option<Credential>),
    /// The lookup's `on_blur`
    CredentialBlur,
    PreviewToggle(bool),
    PreviewScroll(usize),
    /// Switch the lookup to the next configured credential type
    CredentialTypeCycle,
    FocusNext,
    Quit,
}

impl ActionTrait for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::Lookup(action) => action.name(),
            Action::CredentialChange(_) => "CredentialChange",
            Action::CredentialBlur => "CredentialBlur",
            Action::PreviewToggle(_) => "PreviewToggle",
            Action::PreviewScroll(_) => "PreviewScroll",
            Action::CredentialTypeCycle => "CredentialTypeCycle",
            Action::FocusNext => "FocusNext",
            Action::Quit => "Quit",
        }
    }
}

impl ActionSummary for Action {
    fn summary(&self) -> String {
        match self {
            Action::Lookup(action) => action.summary(),
            Action::CredentialChange(Some(credential)) => {
                format!("CredentialChange({}: {:?})", credential.id, credential.name)
            }
            _ => format!("{:?}", self),
        }
    }
}
