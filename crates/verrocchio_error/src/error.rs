//! Top-level error wrapper types.

use crate::ConfigError;

/// Foundation error enum. Crates that own richer error types (the
/// harness, the Discord transport) keep them local and convert at the
/// boundary via the `Other` variant.
///
/// # Examples
///
/// ```
/// use verrocchio_error::{VerrocchioError, ConfigError};
///
/// let cfg_err = ConfigError::new("missing token");
/// let err: VerrocchioError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VerrocchioErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Error raised by another workspace crate, stringified at the boundary.
    #[display("{}", _0)]
    #[from(skip)]
    Other(#[error(not(source))] String),
}

/// Verrocchio error with kind discrimination.
///
/// # Examples
///
/// ```
/// use verrocchio_error::{VerrocchioResult, ConfigError};
///
/// fn might_fail() -> VerrocchioResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Verrocchio Error: {}", _0)]
pub struct VerrocchioError(Box<VerrocchioErrorKind>);

impl VerrocchioError {
    /// Create a new error from a kind.
    pub fn new(kind: VerrocchioErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Wrap an arbitrary error from another crate.
    pub fn other(err: impl std::fmt::Display) -> Self {
        Self::new(VerrocchioErrorKind::Other(err.to_string()))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VerrocchioErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to VerrocchioErrorKind
impl<T> From<T> for VerrocchioError
where
    T: Into<VerrocchioErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Verrocchio operations.
pub type VerrocchioResult<T> = std::result::Result<T, VerrocchioError>;
