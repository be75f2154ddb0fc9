use std::sync::Arc;

use crate::{Capability, Registry, Resolver, Result};

/// A handle that knows which capability it gives access to.
///
/// Implementors name the capability; [`load`](ServiceProvider::load) resolves
/// it against [`Registry::global`] and reports failures through `tracing`.
pub trait ServiceProvider {
    type Service: ?Sized + Send + Sync + 'static;

    fn capability(&self) -> Capability<Self::Service>;

    fn fail_with_exception(&self) -> bool { false }

    fn load(&self) -> Result<Arc<Self::Service>> {
        Resolver::new(Registry::global())
            .fail_with_exception(self.fail_with_exception())
            .resolve(&self.capability())
    }
}
