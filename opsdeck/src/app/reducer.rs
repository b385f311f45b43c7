use opsdeck_core::DispatchResult;

use super::{Action, AppState, Effect};
use crate::lookup::{lookup_reducer, LookupAction};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Lookup(action) => {
            lookup_reducer(&mut state.lookup, action).map_effects(Effect::Lookup)
        }

        Action::CredentialChange(value) => {
            if state.credential == value {
                return DispatchResult::unchanged();
            }
            state.credential = value;
            DispatchResult::changed()
        }

        Action::CredentialBlur => {
            state.touched = true;
            state.focus = state.focus.next();
            DispatchResult::changed()
        }

        Action::PreviewToggle(open) => {
            if state.preview_open == open {
                return DispatchResult::unchanged();
            }
            state.preview_open = open;
            state.preview_scroll = 0;
            DispatchResult::changed()
        }

        Action::PreviewScroll(scroll) => {
            if state.preview_scroll == scroll {
                return DispatchResult::unchanged();
            }
            state.preview_scroll = scroll;
            DispatchResult::changed()
        }

        Action::CredentialTypeCycle => {
            if state.credential_types.len() < 2 {
                return DispatchResult::unchanged();
            }
            state.type_index = (state.type_index + 1) % state.credential_types.len();
            let Some(id) = state.current_type().cloned() else {
                return DispatchResult::unchanged();
            };
            let mut result = lookup_reducer(&mut state.lookup, LookupAction::LookupTypeChange(id))
                .map_effects(Effect::Lookup);
            result.changed = true;
            result
        }

        Action::FocusNext => {
            state.focus = state.focus.next();
            DispatchResult::changed()
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Focus;
    use crate::credential::{Credential, CredentialTypeId, Page};
    use crate::lookup::LookupEffect;

    fn state_with_types(types: &[u64]) -> AppState {
        AppState {
            credential_types: types.iter().copied().map(CredentialTypeId::from).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_lookup_effects_are_wrapped() {
        let mut state = state_with_types(&[1]);
        let result = reducer(
            &mut state,
            Action::Lookup(LookupAction::LookupTypeChange(1u64.into())),
        );
        assert!(matches!(
            result.effects.as_slice(),
            [Effect::Lookup(LookupEffect::FetchCredentials { request: 1, .. })]
        ));
    }

    #[test]
    fn test_credential_change() {
        let mut state = AppState::default();
        let cred = Some(Credential::new(1, "Cred 1"));
        assert!(reducer(&mut state, Action::CredentialChange(cred.clone())).changed);
        assert!(!reducer(&mut state, Action::CredentialChange(cred)).changed);
        assert!(reducer(&mut state, Action::CredentialChange(None)).changed);
        assert!(state.credential.is_none());
    }

    #[test]
    fn test_blur_marks_touched() {
        let mut state = AppState::default();
        state.lookup.required = true;
        reducer(&mut state, Action::CredentialBlur);
        assert!(state.touched);
        assert_eq!(state.focus, Focus::Survey);
        assert!(state.is_missing_required());
    }

    #[test]
    fn test_preview_toggle_resets_scroll() {
        let mut state = AppState::default();
        assert!(reducer(&mut state, Action::PreviewToggle(true)).changed);
        reducer(&mut state, Action::PreviewScroll(3));
        assert_eq!(state.preview_scroll, 3);

        assert!(!reducer(&mut state, Action::PreviewToggle(true)).changed);
        assert!(reducer(&mut state, Action::PreviewToggle(false)).changed);
        assert!(!state.preview_open);
        assert_eq!(state.preview_scroll, 0);
    }

    #[test]
    fn test_type_cycle_refetches() {
        let mut state = state_with_types(&[1, 18]);
        reducer(
            &mut state,
            Action::Lookup(LookupAction::LookupTypeChange(1u64.into())),
        );

        let result = reducer(&mut state, Action::CredentialTypeCycle);
        assert_eq!(state.type_index, 1);
        match result.effects.as_slice() {
            [Effect::Lookup(LookupEffect::FetchCredentials { request, query })] => {
                assert_eq!(*request, 2);
                assert_eq!(query.filter("credential_type"), Some("18"));
            }
            other => panic!("unexpected effects {other:?}"),
        }

        reducer(&mut state, Action::CredentialTypeCycle);
        assert_eq!(state.type_index, 0);
        assert_eq!(state.current_type(), Some(&CredentialTypeId::from(1u64)));
    }

    #[test]
    fn test_single_type_does_not_cycle() {
        let mut state = state_with_types(&[1]);
        let result = reducer(&mut state, Action::CredentialTypeCycle);
        assert!(!result.changed);
        assert!(!result.has_effects());
    }

    #[test]
    fn test_auto_selected_credential_flows_through() {
        let mut state = state_with_types(&[1]);
        state.lookup.auto_populate = true;
        reducer(
            &mut state,
            Action::Lookup(LookupAction::LookupTypeChange(1u64.into())),
        );
        let result = reducer(
            &mut state,
            Action::Lookup(LookupAction::LookupDidLoad {
                request: 1,
                page: Page::new(vec![Credential::new(1, "Cred 1")], 1),
            }),
        );
        assert!(matches!(
            result.effects.as_slice(),
            [Effect::Lookup(LookupEffect::SelectionChanged(Some(c)))] if c.id == 1
        ));
    }
}
