//! Lookup reducer: fetch bookkeeping, auto-select and user selection

use opsdeck_core::DispatchResult;

use super::{LookupAction, LookupEffect, LookupState};
use crate::api::ListQuery;
use crate::credential::{Credential, CredentialTypeId};

/// Filter field the lookup queries by
pub const CREDENTIAL_TYPE_FIELD: &str = "credential_type";

pub fn lookup_reducer(
    state: &mut LookupState,
    action: LookupAction,
) -> DispatchResult<LookupEffect> {
    match action {
        LookupAction::LookupTypeChange(id) => {
            if state.credential_type_id.as_ref() == Some(&id) {
                return DispatchResult::unchanged();
            }
            start_fetch(state, id)
        }

        LookupAction::LookupRefresh => match state.credential_type_id.clone() {
            Some(id) => start_fetch(state, id),
            None => DispatchResult::unchanged(),
        },

        LookupAction::LookupDidLoad { request, page } => {
            if request != state.request {
                tracing::debug!(
                    request,
                    latest = state.request,
                    "dropping stale credential page"
                );
                return DispatchResult::unchanged();
            }

            let auto_select = state.auto_populate && page.is_singleton();
            state.options = page.results;
            state.count = page.count;
            state.is_loading = false;
            state.error = None;
            let last = state.options.len().saturating_sub(1);
            state.highlighted = state.highlighted.min(last);

            if let Some(record) = state.options.first().filter(|_| auto_select).cloned() {
                if !is_selected(state, &record) {
                    tracing::debug!(id = record.id, "auto-selecting lone credential");
                    state.highlighted = 0;
                    state.value = Some(record.clone());
                    let effect = LookupEffect::SelectionChanged(Some(record));
                    return DispatchResult::changed_with(effect);
                }
            }
            DispatchResult::changed()
        }

        LookupAction::LookupDidError { request, error } => {
            if request != state.request {
                tracing::debug!(
                    request,
                    latest = state.request,
                    "dropping stale credential error"
                );
                return DispatchResult::unchanged();
            }
            state.is_loading = false;
            state.error = Some(error);
            DispatchResult::changed()
        }

        LookupAction::LookupHighlight(index) => {
            if index >= state.options.len() || index == state.highlighted {
                return DispatchResult::unchanged();
            }
            state.highlighted = index;
            DispatchResult::changed()
        }

        LookupAction::LookupSelect(index) => {
            let Some(record) = state.options.get(index).cloned() else {
                return DispatchResult::unchanged();
            };
            let moved = state.highlighted != index;
            state.highlighted = index;
            if is_selected(state, &record) {
                return if moved {
                    DispatchResult::changed()
                } else {
                    DispatchResult::unchanged()
                };
            }
            state.value = Some(record.clone());
            DispatchResult::changed_with(LookupEffect::SelectionChanged(Some(record)))
        }

        LookupAction::LookupClear => {
            if state.value.take().is_none() {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed_with(LookupEffect::SelectionChanged(None))
        }

        LookupAction::LookupBlur => DispatchResult::effect(LookupEffect::Blurred),
    }
}

fn start_fetch(state: &mut LookupState, id: CredentialTypeId) -> DispatchResult<LookupEffect> {
    let request = state.next_request();
    let query = ListQuery::lookup(CREDENTIAL_TYPE_FIELD, id.as_str());
    state.credential_type_id = Some(id);
    state.is_loading = true;
    state.error = None;
    DispatchResult::changed_with(LookupEffect::FetchCredentials { request, query })
}

fn is_selected(state: &LookupState, record: &Credential) -> bool {
    state.value.as_ref().is_some_and(|v| v.same_record(record))
}
