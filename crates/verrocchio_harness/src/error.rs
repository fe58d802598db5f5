//! Harness-specific error types.
//!
//! These cover infrastructure failures only: everything that originates
//! from the *evaluated snippet* is classified into an
//! [`verrocchio_core::ExecutionOutcome`] instead and never surfaces as
//! an error.

/// Harness error variants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum HarnessErrorKind {
    /// Building the execution context failed (a harness bug, not a
    /// snippet failure).
    #[display("Context setup failed: {_0}")]
    ContextSetup(String),

    /// The blocking evaluation task could not be joined.
    #[display("Evaluation task join failed: {_0}")]
    TaskJoin(String),
}

/// Harness error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Harness Error: {} at line {} in {}", kind, line, file)]
pub struct HarnessError {
    /// The error kind.
    pub kind: HarnessErrorKind,
    /// Line number where the error occurred.
    pub line: u32,
    /// File where the error occurred.
    pub file: &'static str,
}

impl HarnessError {
    /// Create a new HarnessError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: HarnessErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;
