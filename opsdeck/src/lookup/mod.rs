//! Credential lookup
//!
//! Fetches the first page of credentials for a credential type, lists them
//! for single selection and, when `auto_populate` is set, selects a lone
//! match on its own.
//!
//! The flow per filter change:
//!
//! 1. `LookupTypeChange(id)` bumps the request number and emits
//!    [`LookupEffect::FetchCredentials`]
//! 2. [`LookupDriver`] runs the query on the task manager
//! 3. `LookupDidLoad { request, .. }` comes back; anything but the latest
//!    request number is dropped
//! 4. A qualifying singleton page emits one [`LookupEffect::SelectionChanged`]

mod action;
mod effect;
mod reducer;
mod state;
mod view;

pub use action::LookupAction;
pub use effect::{no_blur, LookupDriver, LookupEffect};
pub use reducer::{lookup_reducer, CREDENTIAL_TYPE_FIELD};
pub use state::LookupState;
pub use view::{CredentialLookupView, CredentialLookupViewProps};
