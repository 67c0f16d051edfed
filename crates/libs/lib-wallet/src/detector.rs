//! Provider availability detection
//!
//! A [`Detector`] wraps a plain `Fn(ProviderKind) -> bool` so tests can swap
//! the real environment probe for a fake. It is consulted on every connect
//! attempt; an extension installed mid-session is picked up on the next click.

use std::rc::Rc;

use crate::provider::ProviderSet;
use crate::state::ProviderKind;

#[derive(Clone)]
pub struct Detector {
    probe: Rc<dyn Fn(ProviderKind) -> bool>,
}

impl Detector {
    pub fn new(probe: impl Fn(ProviderKind) -> bool + 'static) -> Self {
        Self { probe: Rc::new(probe) }
    }

    /// Ask each registered provider; kinds without a handle are unavailable
    pub fn from_providers(providers: &ProviderSet) -> Self {
        let providers = providers.clone();
        Self::new(move |kind| providers.get(kind).is_some_and(|handle| handle.is_available()))
    }

    pub fn is_available(&self, kind: ProviderKind) -> bool {
        (self.probe)(kind)
    }

    pub fn available(&self) -> Vec<ProviderKind> {
        ProviderKind::ALL
            .into_iter()
            .filter(|kind| self.is_available(*kind))
            .collect()
    }
}
