//! Rendered report types.

use serde::{Deserialize, Serialize};

/// Reaction glyph attached to the originating message alongside the
/// report: exactly one per completed evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reaction {
    /// The evaluation succeeded.
    Success,
    /// The evaluation failed (compile or runtime).
    Failure,
}

impl Reaction {
    /// The Unicode glyph for this reaction.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Failure => "❌",
        }
    }
}

/// A rendered, bounded evaluation report ready for delivery.
///
/// The transport turns this into an embed reply (title, colour,
/// description) plus the reaction glyph on the originating message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalReport {
    /// Report title (`Success!` or `Failed to execute.`).
    pub title: String,
    /// Embed colour, distinct for success and failure.
    pub colour: (u8, u8, u8),
    /// Bounded body text with fenced code blocks for value/output/trace.
    pub description: String,
    /// Reaction glyph to attach.
    pub reaction: Reaction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs() {
        assert_eq!(Reaction::Success.glyph(), "✅");
        assert_eq!(Reaction::Failure.glyph(), "❌");
    }
}
