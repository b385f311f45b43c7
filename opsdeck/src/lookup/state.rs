use crate::credential::{Credential, CredentialTypeId};

/// State of one credential lookup field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupState {
    /// Field label, shown verbatim
    pub label: String,
    pub required: bool,
    /// Select a lone result without user action
    pub auto_populate: bool,
    /// Filter the current options were (or are being) fetched for
    pub credential_type_id: Option<CredentialTypeId>,
    /// First page of matches, in server order
    pub options: Vec<Credential>,
    /// Server-side total for the current filter
    pub count: u64,
    /// Current selection
    pub value: Option<Credential>,
    pub highlighted: usize,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Number of the latest fetch; results for older numbers are dropped
    pub request: u64,
}

impl LookupState {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_auto_populate(mut self, auto_populate: bool) -> Self {
        self.auto_populate = auto_populate;
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Index of the selected record among `options`, if present.
    pub fn selected_index(&self) -> Option<usize> {
        let value = self.value.as_ref()?;
        self.options.iter().position(|o| o.same_record(value))
    }

    pub fn option_names(&self) -> Vec<String> {
        self.options.iter().map(|o| o.name.clone()).collect()
    }

    /// More records match than the page holds.
    pub fn is_truncated(&self) -> bool {
        self.count > self.options.len() as u64
    }

    pub(crate) fn next_request(&mut self) -> u64 {
        self.request += 1;
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_index_by_id() {
        let mut state = LookupState::new("Credential");
        state.options = vec![Credential::new(1, "a"), Credential::new(2, "b")];
        assert_eq!(state.selected_index(), None);

        state.value = Some(Credential::new(2, "renamed"));
        assert_eq!(state.selected_index(), Some(1));

        state.value = Some(Credential::new(9, "elsewhere"));
        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn test_truncated() {
        let mut state = LookupState::new("Credential");
        state.options = vec![Credential::new(1, "a")];
        state.count = 1;
        assert!(!state.is_truncated());
        state.count = 12;
        assert!(state.is_truncated());
    }
}
