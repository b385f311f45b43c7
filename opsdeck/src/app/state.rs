use crate::config::ConsoleConfig;
use crate::credential::{Credential, CredentialTypeId};
use crate::lookup::LookupState;
use crate::survey::SurveySpec;

/// Which panel receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Lookup,
    Survey,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Lookup => Focus::Survey,
            Focus::Survey => Focus::Lookup,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub lookup: LookupState,
    /// Form value of the credential field, set through `on_change`
    pub credential: Option<Credential>,
    /// The credential field has been blurred at least once
    pub touched: bool,
    pub survey: SurveySpec,
    pub preview_open: bool,
    pub preview_scroll: usize,
    pub focus: Focus,
    pub credential_types: Vec<CredentialTypeId>,
    pub type_index: usize,
}

impl AppState {
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self {
            lookup: LookupState::new(config.label.clone())
                .with_auto_populate(config.auto_populate)
                .with_required(config.required),
            survey: config.survey.clone(),
            credential_types: config.credential_types.clone(),
            ..Default::default()
        }
    }

    pub fn current_type(&self) -> Option<&CredentialTypeId> {
        self.credential_types.get(self.type_index)
    }

    /// Required, left, and still empty.
    pub fn is_missing_required(&self) -> bool {
        self.lookup.required && self.touched && self.credential.is_none()
    }
}
