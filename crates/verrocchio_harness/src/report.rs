//! Bounded, truncation-safe report rendering.
//!
//! Turns an [`ExecutionOutcome`] into the embed-shaped report the
//! transport delivers: title, colour, fenced body sections, reaction
//! glyph. Every section is clipped with a visible marker and the whole
//! description stays within the embed description limit.

use verrocchio_core::{EvalReport, ExecutionOutcome, Reaction};

/// Success embed colour, matching the console's green indicator.
const SUCCESS_COLOUR: (u8, u8, u8) = (5, 255, 70);
/// Failure embed colour, matching the console's red indicator.
const FAILURE_COLOUR: (u8, u8, u8) = (255, 10, 40);

/// Marker appended to clipped sections.
const TRUNCATION_MARKER: &str = "… (truncated)";

/// Bounds applied while rendering a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLimits {
    /// Maximum characters per fenced section.
    pub section: usize,
    /// Maximum characters for the whole description (the Discord embed
    /// description limit).
    pub total: usize,
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            section: 1000,
            total: 4096,
        }
    }
}

/// One body section: leading markup, the variable text, and whether the
/// text sits inside a code fence.
struct Section<'a> {
    lead: &'a str,
    text: &'a str,
    fenced: bool,
}

/// Characters a fence adds around its section (` ```js\n … \n``` `).
const FENCE_OVERHEAD: usize = 10;

/// Render one outcome into its report shape.
///
/// The three shapes are exhaustive over the outcome variants:
/// - Success: returned value + captured output, green, ✅
/// - CompileFailure: error + trace + error kind, red, ❌
/// - RuntimeFailure: error + trace + partial captured output, red, ❌
pub fn render(outcome: &ExecutionOutcome, limits: &ReportLimits) -> EvalReport {
    match outcome {
        ExecutionOutcome::Success { value, output, .. } => EvalReport {
            title: "Success!".to_string(),
            colour: SUCCESS_COLOUR,
            description: assemble(
                &[
                    Section { lead: "Returned value: ", text: value, fenced: true },
                    Section { lead: "\nStandard Output: ", text: output, fenced: true },
                ],
                limits,
            ),
            reaction: Reaction::Success,
        },
        ExecutionOutcome::CompileFailure { error, trace, kind } => EvalReport {
            title: "Failed to execute.".to_string(),
            colour: FAILURE_COLOUR,
            description: assemble(
                &[
                    Section { lead: "", text: error, fenced: false },
                    Section { lead: " ", text: trace, fenced: true },
                    Section { lead: "\n", text: kind, fenced: true },
                ],
                limits,
            ),
            reaction: Reaction::Failure,
        },
        ExecutionOutcome::RuntimeFailure { error, trace, output } => EvalReport {
            title: "Failed to execute.".to_string(),
            colour: FAILURE_COLOUR,
            description: assemble(
                &[
                    Section { lead: "", text: error, fenced: false },
                    Section { lead: " ", text: trace, fenced: true },
                    Section { lead: "\n", text: output, fenced: true },
                ],
                limits,
            ),
            reaction: Reaction::Failure,
        },
    }
}

/// Assemble the body sections under both bounds.
///
/// The total budget is distributed across the sections before anything
/// is formatted, so the scaffold (leads and fences) always survives
/// intact; the description is never cut after assembly, which could
/// split a closing fence.
fn assemble(sections: &[Section], limits: &ReportLimits) -> String {
    let scaffold: usize = sections
        .iter()
        .map(|s| s.lead.chars().count() + if s.fenced { FENCE_OVERHEAD } else { 0 })
        .sum();
    let share = limits.total.saturating_sub(scaffold) / sections.len().max(1);
    let per_section = limits.section.min(share);

    sections
        .iter()
        .map(|s| {
            let body = clip(s.text, per_section);
            if s.fenced {
                format!("{}```js\n{}\n```", s.lead, body)
            } else {
                format!("{}{}", s.lead, body)
            }
        })
        .collect()
}

/// Clip text to a character bound, appending the truncation marker when
/// anything was dropped. Character-based, never splits a code point.
fn clip(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let kept = limit.saturating_sub(TRUNCATION_MARKER.chars().count());
    let mut clipped: String = text.chars().take(kept).collect();
    clipped.push_str(TRUNCATION_MARKER);
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success(value: &str, output: &str) -> ExecutionOutcome {
        ExecutionOutcome::Success {
            value: value.to_string(),
            output: output.to_string(),
            actions: Vec::new(),
        }
    }

    #[test]
    fn success_report_shape() {
        let report = render(&success("2", ""), &ReportLimits::default());
        assert_eq!(report.title, "Success!");
        assert_eq!(report.colour, SUCCESS_COLOUR);
        assert_eq!(report.reaction, Reaction::Success);
        assert!(report.description.contains("Returned value: ```js\n2\n```"));
        assert!(report.description.contains("Standard Output:"));
    }

    #[test]
    fn compile_failure_report_shape() {
        let outcome = ExecutionOutcome::CompileFailure {
            error: "SyntaxError: unexpected token".to_string(),
            trace: "SyntaxError: unexpected token at line 1, col 5".to_string(),
            kind: "SyntaxError".to_string(),
        };
        let report = render(&outcome, &ReportLimits::default());
        assert_eq!(report.title, "Failed to execute.");
        assert_eq!(report.colour, FAILURE_COLOUR);
        assert_eq!(report.reaction, Reaction::Failure);
        assert!(report.description.contains("SyntaxError"));
        assert!(report.description.contains("```js\nSyntaxError\n```"));
    }

    #[test]
    fn runtime_failure_carries_partial_output() {
        let outcome = ExecutionOutcome::RuntimeFailure {
            error: "Error: boom".to_string(),
            trace: "Error: boom".to_string(),
            output: "before\n".to_string(),
        };
        let report = render(&outcome, &ReportLimits::default());
        assert!(report.description.contains("boom"));
        assert!(report.description.contains("before"));
    }

    #[test]
    fn oversized_sections_are_clipped_with_marker() {
        let big = "x".repeat(5_000);
        let report = render(&success(&big, ""), &ReportLimits::default());
        assert!(report.description.contains(TRUNCATION_MARKER));
        assert!(report.description.chars().count() <= 4096);
    }

    #[test]
    fn total_bound_holds_even_with_many_sections() {
        let big = "y".repeat(3_000);
        let limits = ReportLimits { section: 3_000, total: 4096 };
        let outcome = ExecutionOutcome::RuntimeFailure {
            error: big.clone(),
            trace: big.clone(),
            output: big,
        };
        let report = render(&outcome, &limits);
        assert!(report.description.chars().count() <= 4096);
    }

    #[test]
    fn fences_survive_the_total_bound() {
        // Oversized content shrinks the section bodies, never the
        // markup: every opening fence keeps its closing fence.
        let big = "z".repeat(3_000);
        let limits = ReportLimits { section: 3_000, total: 2_000 };
        let outcome = ExecutionOutcome::RuntimeFailure {
            error: big.clone(),
            trace: big.clone(),
            output: big,
        };
        let report = render(&outcome, &limits);
        assert!(report.description.chars().count() <= 2_000);
        assert!(report.description.ends_with("\n```"));
        assert_eq!(report.description.matches("```").count() % 2, 0);
    }

    #[test]
    fn small_text_is_untouched() {
        assert_eq!(clip("hello", 10), "hello");
        assert_eq!(clip("", 10), "");
    }
}
