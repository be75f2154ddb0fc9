//! Discovery abstraction.
//!
//! This module defines the `Discovery` trait - the only contract between the
//! resolver and whatever registers implementations. Discovery is a mechanism
//! for enumerating candidates; choosing one of them is the resolver's job.

use std::collections::HashSet;
use std::sync::Arc;

use crate::Capability;

pub trait Discovery {
    /// Every implementation currently registered for `capability`.
    ///
    /// Order is irrelevant. Returning the same `Arc` more than once is allowed;
    /// the resolver collapses duplicates by identity.
    fn enumerate<T>(&self, capability: &Capability<T>) -> Vec<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static;
}

impl<D: Discovery> Discovery for &D {
    fn enumerate<T>(&self, capability: &Capability<T>) -> Vec<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        (**self).enumerate(capability)
    }
}

impl<D: Discovery> Discovery for Arc<D> {
    fn enumerate<T>(&self, capability: &Capability<T>) -> Vec<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        (**self).enumerate(capability)
    }
}

impl<D: Discovery> Discovery for Box<D> {
    fn enumerate<T>(&self, capability: &Capability<T>) -> Vec<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        (**self).enumerate(capability)
    }
}

/// Collapse candidates that share an allocation, keeping first-seen order.
pub(crate) fn dedup<T: ?Sized>(candidates: Vec<Arc<T>>) -> Vec<Arc<T>> {
    let mut seen = HashSet::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|candidate| seen.insert(Arc::as_ptr(candidate) as *const ()))
        .collect()
}
