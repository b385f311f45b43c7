//! Screen composition: the credential field plus the survey panel

mod action;
mod effect;
mod reducer;
mod state;
mod ui;

pub use action::Action;
pub use effect::{AppEffects, Effect};
pub use reducer::reducer;
pub use state::{AppState, Focus};
pub use ui::AppUi;
