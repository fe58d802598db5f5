//! Discord-specific error types.
//!
//! These cover the transport only: connection and delivery failures.
//! Snippet failures never appear here; the harness classifies those
//! into outcomes long before the transport sees them.

use derive_getters::Getters;

/// Discord error variants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum DiscordErrorKind {
    /// Serenity API error (e.g., HTTP error, gateway error, rate limit).
    #[display("Serenity API error: {_0}")]
    SerenityError(String),

    /// Connection to the Discord gateway failed.
    #[display("Connection failed: {_0}")]
    ConnectionFailed(String),

    /// Bot token is invalid or expired.
    #[display("Invalid or expired bot token")]
    InvalidToken,

    /// The embed reply for a finished evaluation failed to send.
    #[display("Report delivery failed: {_0}")]
    ReportDeliveryFailed(String),

    /// The outcome reaction failed to land on the originating message.
    #[display("Reaction delivery failed: {_0}")]
    ReactionFailed(String),
}

/// Discord error with source location tracking.
///
/// Captures the error kind along with the file and line where the error
/// occurred.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Discord Error: {} at line {} in {}", kind, line, file)]
pub struct DiscordError {
    kind: DiscordErrorKind,
    line: u32,
    file: &'static str,
}

impl DiscordError {
    /// Create a new DiscordError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use verrocchio_discord::{DiscordError, DiscordErrorKind};
    ///
    /// let err = DiscordError::new(DiscordErrorKind::InvalidToken);
    /// ```
    #[track_caller]
    pub fn new(kind: DiscordErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for Discord operations.
pub type DiscordResult<T> = Result<T, DiscordError>;

impl From<serenity::Error> for DiscordError {
    #[track_caller]
    fn from(err: serenity::Error) -> Self {
        DiscordError::new(DiscordErrorKind::SerenityError(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_location() {
        let err = DiscordError::new(DiscordErrorKind::InvalidToken);
        let rendered = err.to_string();
        assert!(rendered.contains("Invalid or expired bot token"));
        assert!(rendered.contains("error.rs"));
    }

    #[test]
    fn kind_is_accessible() {
        let err = DiscordError::new(DiscordErrorKind::ConnectionFailed("down".to_string()));
        assert_eq!(
            err.kind(),
            &DiscordErrorKind::ConnectionFailed("down".to_string())
        );
    }
}
