//! Single-implementation resolution for pluggable capabilities.
//!
//! # Architecture
//!
//! Resolution is a mechanism with one policy: a capability resolves only when
//! exactly one implementation is discovered for it.
//!
//! - [`Discovery`] enumerates candidates. [`Registry`] is the in-process table.
//! - [`DiagnosticSink`] records why a resolution failed. [`TracingSink`] is the
//!   default.
//! - [`Resolver`] ties them together and never caches what it resolved.
//!
//! Failures come back as [`Error::NotFound`] or [`Error::Ambiguous`]. With
//! `fail_with_exception` set in [`ResolverOptions`] they panic instead.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use svc_provider::{Capability, ErrorKind, Registry, Resolver};
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self) -> &'static str;
//! }
//!
//! struct EnglishGreeter;
//! impl Greeter for EnglishGreeter {
//!     fn greet(&self) -> &'static str { "hello" }
//! }
//!
//! struct FrenchGreeter;
//! impl Greeter for FrenchGreeter {
//!     fn greet(&self) -> &'static str { "bonjour" }
//! }
//!
//! let registry = Registry::new();
//! let resolver = Resolver::new(&registry);
//! let greeter = Capability::<dyn Greeter>::named("Greeter");
//!
//! registry.register::<dyn Greeter>(Arc::new(EnglishGreeter));
//! assert_eq!(resolver.resolve(&greeter).unwrap().greet(), "hello");
//!
//! registry.register::<dyn Greeter>(Arc::new(FrenchGreeter));
//! let err = resolver.resolve(&greeter).err().unwrap();
//! assert_eq!(err.kind(), ErrorKind::Ambiguous);
//! ```

pub use capability::Capability;
pub use diagnostic::{DiagnosticSink, TracingSink};
pub use discovery::Discovery;
pub use error::{ConfigError, Error, ErrorKind, Result};
pub use options::ResolverOptions;
pub use provider::ServiceProvider;
pub use registry::Registry;
pub use resolver::Resolver;

mod capability;
mod diagnostic;
mod discovery;
mod error;
mod options;
mod provider;
mod registry;
mod resolver;
