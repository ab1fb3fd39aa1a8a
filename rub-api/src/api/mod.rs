// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module and provider surface shared by API consumers.
//!
//! ```text
//! ApiModule ---- loader(): NamespacedId
//!     |          span():   tracing span "module" { loader }
//!     v
//! ApiRegistry
//!   TypeId --> Arc<P: ApiProvider>     EventBus, SettingProvider, ...
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::Span;

use crate::config::setting::SettingProvider;
use crate::event::EventBus;
use crate::id::NamespacedId;

/// A loaded module identified by its loader id.
pub trait ApiModule {
    fn loader(&self) -> &NamespacedId;

    /// Logging span tagged with this module's loader id.
    ///
    /// Enter it (or `instrument` futures with it) so that every event logged
    /// by the module carries the loader.
    fn span(&self) -> Span {
        tracing::info_span!("module", loader = %self.loader())
    }
}

/// Marker for services exposed through an [`ApiRegistry`].
pub trait ApiProvider: Any + Send + Sync {}

impl ApiProvider for EventBus {}

impl ApiProvider for SettingProvider {}

/// Type-keyed store of shared providers.
#[derive(Default)]
pub struct ApiRegistry {
    providers: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ApiRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider, returning the one it replaced.
    pub fn register<P: ApiProvider>(&self, provider: Arc<P>) -> Option<Arc<P>> {
        tracing::debug!(provider = std::any::type_name::<P>(), "Registered provider");
        self.providers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TypeId::of::<P>(), provider)
            .and_then(|old| old.downcast::<P>().ok())
    }

    #[must_use]
    pub fn get<P: ApiProvider>(&self) -> Option<Arc<P>> {
        let erased = self
            .providers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<P>())
            .cloned()?;
        erased.downcast::<P>().ok()
    }

    #[must_use]
    pub fn contains<P: ApiProvider>(&self) -> bool {
        self.providers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<P>())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.providers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ApiRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiRegistry")
            .field("providers", &self.len())
            .finish()
    }
}
