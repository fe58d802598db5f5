//! Command extraction: raw message text to bare code payload.

use serde::{Deserialize, Serialize};

/// The extracted snippet with invocation token and fence markup removed.
///
/// Derived from an [`crate::EvalCommand`]'s raw text, never persisted.
/// Extraction never fails once the invocation token matches: any
/// remainder reduces to *some* payload, including the empty string,
/// which simply evaluates to `undefined` downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("{}", _0)]
pub struct CodePayload(String);

impl CodePayload {
    /// Extract a payload from raw message text.
    ///
    /// Returns `None` when the text does not start with
    /// `<prefix><command>` — the silent-exit path: a non-matching
    /// message must not reveal that an eval command exists, so the
    /// caller produces no reply and no reaction.
    ///
    /// The remainder after the invocation token is de-fenced: a
    /// triple-backtick block (optionally with a language tag on the
    /// opening line) keeps only its interior lines; anything else is
    /// trimmed of surrounding backticks, spaces and newlines.
    ///
    /// # Examples
    ///
    /// ```
    /// use verrocchio_core::CodePayload;
    ///
    /// let payload = CodePayload::extract(".eval 1+1", ".", "eval").unwrap();
    /// assert_eq!(payload.as_str(), "1+1");
    ///
    /// assert!(CodePayload::extract("hello", ".", "eval").is_none());
    /// ```
    pub fn extract(raw: &str, prefix: &str, command: &str) -> Option<Self> {
        let token = format!("{prefix}{command}");
        let rest = raw.strip_prefix(&token)?;
        // `.evaluate` must not match `.eval`; the token ends at a
        // whitespace boundary or the end of the message.
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some(Self(strip_fences(rest)))
    }

    /// Construct a payload directly from already-extracted code.
    pub fn from_code(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Construct a payload from loose snippet text, de-fencing it the
    /// same way inbound message text is. Used by the local `eval` CLI
    /// path, which has no invocation token to strip.
    pub fn from_snippet(text: &str) -> Self {
        Self(strip_fences(text))
    }

    /// The bare snippet text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the payload is empty (forwarded anyway; evaluates to
    /// `undefined`).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Strip code-fence markup from a snippet.
///
/// Mirrors the inbound command surface: a ```` ``` ````-delimited block
/// drops its fence lines (and any language tag on the opening fence);
/// otherwise surrounding backticks and whitespace are trimmed.
/// Idempotent: stripping already-bare code is a no-op.
fn strip_fences(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.starts_with("```") && trimmed.ends_with("```") && trimmed.contains('\n') {
        // Drop the opening fence line (with its language tag) and the
        // closing fence line; keep the interior verbatim.
        let lines: Vec<&str> = trimmed.split('\n').collect();
        return lines[1..lines.len() - 1].join("\n");
    }
    // Single-line fences and inline code reduce to a backtick trim.
    trimmed
        .trim_matches(|c: char| c == '`' || c.is_whitespace())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_bare_snippet() {
        let p = CodePayload::extract(".eval 1+1", ".", "eval").unwrap();
        assert_eq!(p.as_str(), "1+1");
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(CodePayload::extract("eval 1+1", ".", "eval").is_none());
        assert!(CodePayload::extract("hello there", ".", "eval").is_none());
    }

    #[test]
    fn rejects_longer_command_word() {
        assert!(CodePayload::extract(".evaluate 1+1", ".", "eval").is_none());
    }

    #[test]
    fn strips_fence_with_language_tag() {
        let raw = ".eval ```js\nprint(1)\n```";
        let p = CodePayload::extract(raw, ".", "eval").unwrap();
        assert_eq!(p.as_str(), "print(1)");
    }

    #[test]
    fn strips_fence_without_language_tag() {
        let raw = ".eval ```\nreturn 5\n```";
        let p = CodePayload::extract(raw, ".", "eval").unwrap();
        assert_eq!(p.as_str(), "return 5");
    }

    #[test]
    fn fence_stripping_matches_bare_extraction() {
        let fenced = CodePayload::extract(".eval ```js\nprint(1)\n```", ".", "eval").unwrap();
        let bare = CodePayload::extract(".eval print(1)", ".", "eval").unwrap();
        assert_eq!(fenced, bare);
    }

    #[test]
    fn strips_inline_backticks() {
        let p = CodePayload::extract(".eval `1+1`", ".", "eval").unwrap();
        assert_eq!(p.as_str(), "1+1");
    }

    #[test]
    fn preserves_multiline_interior() {
        let raw = ".eval ```js\nlet x = 1;\nreturn x + 1;\n```";
        let p = CodePayload::extract(raw, ".", "eval").unwrap();
        assert_eq!(p.as_str(), "let x = 1;\nreturn x + 1;");
    }

    #[test]
    fn empty_payload_is_forwarded() {
        let p = CodePayload::extract(".eval", ".", "eval").unwrap();
        assert!(p.is_empty());
        let p = CodePayload::extract(".eval   ", ".", "eval").unwrap();
        assert!(p.is_empty());
    }

    #[test]
    fn custom_prefix_and_command() {
        let p = CodePayload::extract("!run 2*3", "!", "run").unwrap();
        assert_eq!(p.as_str(), "2*3");
    }
}
