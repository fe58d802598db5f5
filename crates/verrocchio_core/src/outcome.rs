//! Tagged outcome of one evaluation.

use crate::HostAction;
use serde::{Deserialize, Serialize};

/// The classified result of running one snippet.
///
/// Exactly one outcome is produced per authorized command; the variant
/// drives report selection, making the three report shapes exhaustive
/// and testable independent of the execution mechanism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExecutionOutcome {
    /// The unit's invocation returned (possibly `undefined`) without raising.
    Success {
        /// Textual form of the returned value.
        value: String,
        /// Everything the snippet printed during its single invocation.
        output: String,
        /// Outbound effects queued by the snippet through the
        /// capability table, flushed by the transport after reporting.
        actions: Vec<HostAction>,
    },
    /// The define step failed: the snippet never parsed, so its body
    /// never ran.
    CompileFailure {
        /// The engine error's string form.
        error: String,
        /// Full rendered error, including position information.
        trace: String,
        /// The error's kind name (e.g. `SyntaxError`).
        kind: String,
    },
    /// The unit's invocation raised.
    RuntimeFailure {
        /// The thrown value's string form.
        error: String,
        /// Full rendered error.
        trace: String,
        /// Output captured up to the point of the raise.
        output: String,
    },
}

impl ExecutionOutcome {
    /// Whether this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Captured output, if this outcome carries any.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Success { output, .. } | Self::RuntimeFailure { output, .. } => Some(output),
            Self::CompileFailure { .. } => None,
        }
    }
}
