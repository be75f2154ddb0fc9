//! Error types for capability resolution.

use thiserror::Error;

/// Cardinality violation found while resolving a capability.
///
/// The `Display` output is the diagnostic message that was written to the
/// sink before the error was returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no implementation found for interface {capability}")]
    NotFound { capability: String },

    #[error("to many implementations found for interface {capability}")]
    Ambiguous { capability: String, count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    Ambiguous,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Ambiguous { .. } => ErrorKind::Ambiguous,
        }
    }

    /// Name of the capability that failed to resolve.
    pub fn capability(&self) -> &str {
        match self {
            Self::NotFound { capability } | Self::Ambiguous { capability, .. } => capability,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Figment(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self { ConfigError::Figment(Box::new(e)) }
}
