//! Explicit registration table.
//!
//! [`Registry`] is the in-process [`Discovery`] implementation: implementations
//! are registered under the `TypeId` of the capability they provide and are
//! enumerated back out on every resolution. Nothing here chooses between
//! candidates.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::{Capability, Discovery};

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

type Entry = Box<dyn Any + Send + Sync>;

#[derive(Default)]
pub struct Registry {
    entries: RwLock<HashMap<TypeId, Vec<Entry>>>,
}

impl Registry {
    pub fn new() -> Self { Self::default() }

    /// Process-wide registry used by [`ServiceProvider::load`](crate::ServiceProvider::load).
    pub fn global() -> &'static Registry { &GLOBAL }

    /// Register `implementation` as a candidate for capability `T`.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use svc_provider::Registry;
    ///
    /// trait Greeter: Send + Sync {}
    /// struct English;
    /// impl Greeter for English {}
    ///
    /// let registry = Registry::new();
    /// registry.register::<dyn Greeter>(Arc::new(English));
    /// assert_eq!(registry.len::<dyn Greeter>(), 1);
    /// ```
    pub fn register<T>(&self, implementation: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries
            .entry(TypeId::of::<T>())
            .or_default()
            .push(Box::new(implementation));
    }

    /// Remove every candidate for `T`, returning how many entries were dropped.
    pub fn unregister_all<T>(&self) -> usize
    where
        T: ?Sized + 'static,
    {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries
            .remove(&TypeId::of::<T>())
            .map_or(0, |removed| removed.len())
    }

    /// Registered entries for `T`, duplicates included.
    pub fn len<T>(&self) -> usize
    where
        T: ?Sized + 'static,
    {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(&TypeId::of::<T>()).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.values().all(Vec::is_empty)
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Discovery for Registry {
    fn enumerate<T>(&self, capability: &Capability<T>) -> Vec<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&capability.contract_id())
            .into_iter()
            .flatten()
            .filter_map(|entry| entry.downcast_ref::<Arc<T>>())
            .cloned()
            .collect()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("Registry")
            .field("capabilities", &entries.len())
            .field("entries", &entries.values().map(Vec::len).sum::<usize>())
            .finish()
    }
}
