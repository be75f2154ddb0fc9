//! Cardinality policy over discovered candidates.
//!
//! The resolver owns no candidates. Each call asks the [`Discovery`] service
//! again, collapses duplicates by identity and succeeds only when exactly one
//! implementation is left.

use std::sync::Arc;

use crate::diagnostic::{DiagnosticSink, TracingSink};
use crate::discovery::{self, Discovery};
use crate::{Capability, Error, Result, ResolverOptions};

#[derive(Clone, Debug)]
pub struct Resolver<D, S = TracingSink> {
    discovery: D,
    sink:      S,
    options:   ResolverOptions,
}

impl<D: Discovery> Resolver<D> {
    pub fn new(discovery: D) -> Self {
        Self {
            discovery,
            sink: TracingSink,
            options: ResolverOptions::default(),
        }
    }
}

impl<D, S> Resolver<D, S>
where
    D: Discovery,
    S: DiagnosticSink,
{
    pub fn with_sink<S2: DiagnosticSink>(self, sink: S2) -> Resolver<D, S2> {
        Resolver {
            discovery: self.discovery,
            sink,
            options: self.options,
        }
    }

    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn fail_with_exception(mut self, fail_with_exception: bool) -> Self {
        self.options.fail_with_exception = fail_with_exception;
        self
    }

    pub fn options(&self) -> &ResolverOptions { &self.options }

    /// Resolve the single implementation registered for `capability`.
    ///
    /// Zero or several candidates write one diagnostic to the sink, then
    /// return the error, or panic with its message when
    /// `fail_with_exception` is set.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use svc_provider::{Capability, Registry, Resolver};
    ///
    /// trait Greeter: Send + Sync {
    ///     fn greet(&self) -> String;
    /// }
    ///
    /// struct English;
    /// impl Greeter for English {
    ///     fn greet(&self) -> String { "hello".into() }
    /// }
    ///
    /// let registry = Registry::new();
    /// let resolver = Resolver::new(&registry);
    /// let greeter = Capability::<dyn Greeter>::named("Greeter");
    ///
    /// let err = resolver.resolve(&greeter).err().unwrap();
    /// assert_eq!(err.to_string(), "no implementation found for interface Greeter");
    ///
    /// registry.register::<dyn Greeter>(Arc::new(English));
    /// assert_eq!(resolver.resolve(&greeter).unwrap().greet(), "hello");
    /// ```
    pub fn resolve<T>(&self, capability: &Capability<T>) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let mut candidates = discovery::dedup(self.discovery.enumerate(capability));

        let error = match candidates.len() {
            1 => {
                tracing::debug!(capability = %capability, "resolved implementation");
                return Ok(candidates.swap_remove(0));
            }
            0 => Error::NotFound {
                capability: capability.name().to_string(),
            },
            count => Error::Ambiguous {
                capability: capability.name().to_string(),
                count,
            },
        };

        let message = error.to_string();
        self.sink.warn(capability.name(), &message);

        if self.options.fail_with_exception {
            panic!("{message}");
        }
        Err(error)
    }
}
