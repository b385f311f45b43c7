use std::sync::Arc;

use opsdeck_core::EffectContext;

use super::Action;
use crate::api::CredentialProvider;
use crate::lookup::{LookupDriver, LookupEffect};

/// Side effects of the whole app
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Lookup(LookupEffect),
}

/// Runs [`Effect`]s; the lookup's `on_change`/`on_blur` land back as app actions.
pub struct AppEffects {
    lookup: LookupDriver<Action>,
}

impl AppEffects {
    pub fn new(provider: Arc<dyn CredentialProvider>) -> Self {
        let lookup = LookupDriver::new(provider, Action::Lookup, Action::CredentialChange)
            .with_on_blur(|| Some(Action::CredentialBlur));
        Self { lookup }
    }

    pub fn handle(&self, effect: Effect, ctx: &mut EffectContext<'_, Action>) {
        match effect {
            Effect::Lookup(effect) => self.lookup.handle(effect, ctx),
        }
    }
}
