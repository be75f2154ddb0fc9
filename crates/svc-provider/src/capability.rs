//! Capability descriptors.

use std::any::{TypeId, type_name};
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

/// Type token naming the contract `T` a caller wants an implementation of.
///
/// `T` is usually a trait object such as `dyn Greeter`. The [`TypeId`] keys
/// discovery; the name only appears in diagnostics.
///
/// ```
/// use svc_provider::Capability;
///
/// trait Greeter {
///     fn greet(&self) -> String;
/// }
///
/// let capability = Capability::<dyn Greeter>::named("Greeter");
/// assert_eq!(capability.name(), "Greeter");
/// ```
pub struct Capability<T: ?Sized> {
    name:   Cow<'static, str>,
    marker: PhantomData<fn() -> Box<T>>,
}

impl<T: ?Sized + 'static> Capability<T> {
    /// Descriptor named after the Rust type, e.g. `dyn my_crate::Greeter`.
    pub fn of() -> Self { Self::named(type_name::<T>()) }

    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name:   name.into(),
            marker: PhantomData,
        }
    }

    pub fn contract_id(&self) -> TypeId { TypeId::of::<T>() }
}

impl<T: ?Sized> Capability<T> {
    pub fn name(&self) -> &str { &self.name }
}

impl<T: ?Sized + 'static> Default for Capability<T> {
    fn default() -> Self { Self::of() }
}

impl<T: ?Sized> Clone for Capability<T> {
    fn clone(&self) -> Self {
        Self {
            name:   self.name.clone(),
            marker: PhantomData,
        }
    }
}

impl<T: ?Sized> fmt::Debug for Capability<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Capability").field(&self.name).finish()
    }
}

impl<T: ?Sized> fmt::Display for Capability<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.name) }
}
