//! Harness orchestration.
//!
//! One evaluation walks `Binding → Compiling → Invoking → Reporting`;
//! authorization and extraction happen upstream in the transport. Every
//! failure originating from the snippet is classified into an
//! [`ExecutionOutcome`] here and never propagates; only infrastructure
//! failures surface as [`HarnessError`].

use crate::error::{HarnessError, HarnessErrorKind, HarnessResult};
use crate::report::{ReportLimits, render};
use crate::unit::{DeferredUnit, Invocation, error_kind, render_thrown, render_value};
use crate::{binder, capture};
use boa_engine::Context;
use tracing::{debug, instrument};
use verrocchio_core::{CodePayload, EvalCommand, EvalReport, ExecutionOutcome};

/// The evaluation harness.
///
/// Holds the host identity bound into every context and the report
/// bounds. Cheap to clone; one instance is shared by the transport and
/// the CLI.
///
/// The interpreter context is `!Send`, so each evaluation runs on a
/// blocking worker; a snippet that never finishes occupies that worker
/// but never the gateway loop. Overlapping evaluations each own a
/// private context, so there is no shared capture state to race on.
#[derive(Debug, Clone)]
pub struct EvalHarness {
    identity: binder::HostIdentity,
    limits: ReportLimits,
}

impl EvalHarness {
    /// Create a harness for the given host identity with default
    /// report bounds.
    pub fn new(identity: binder::HostIdentity) -> Self {
        Self {
            identity,
            limits: ReportLimits::default(),
        }
    }

    /// Override the report bounds.
    pub fn with_limits(mut self, limits: ReportLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Evaluate one payload against its command's live context.
    ///
    /// Exactly one outcome comes back per call; compile and runtime
    /// failures of the snippet are outcomes, not errors.
    #[instrument(
        skip(self, command, payload),
        fields(
            author_id = command.author_id,
            channel_id = command.channel_id,
            payload_len = payload.as_str().len(),
        )
    )]
    pub async fn evaluate(
        &self,
        command: EvalCommand,
        payload: CodePayload,
    ) -> HarnessResult<ExecutionOutcome> {
        let identity = self.identity.clone();
        let outcome = tokio::task::spawn_blocking(move || {
            evaluate_sync(&command, &payload, &identity)
        })
        .await
        .map_err(|e| HarnessError::new(HarnessErrorKind::TaskJoin(e.to_string())))??;

        debug!(success = outcome.is_success(), "evaluation classified");
        Ok(outcome)
    }

    /// Render an outcome with this harness's report bounds.
    pub fn render(&self, outcome: &ExecutionOutcome) -> EvalReport {
        render(outcome, &self.limits)
    }
}

/// Run one evaluation on the current (blocking) thread.
fn evaluate_sync(
    command: &EvalCommand,
    payload: &CodePayload,
    identity: &binder::HostIdentity,
) -> HarnessResult<ExecutionOutcome> {
    // Binding: fresh context per invocation, never shared.
    let mut context = Context::default();
    binder::bind(&mut context, command, identity)
        .map_err(|e| HarnessError::new(HarnessErrorKind::ContextSetup(e.to_string())))?;
    debug!("context bound");

    // Compiling: the define step binds the unit's name, nothing more.
    let unit = match DeferredUnit::define(payload, &mut context) {
        Ok(unit) => unit,
        Err(err) => {
            let rendered = err.to_string();
            let error = rendered.lines().next().unwrap_or(&rendered).to_string();
            let kind = error_kind(&rendered);
            debug!(%kind, "define step failed");
            return Ok(ExecutionOutcome::CompileFailure {
                error,
                trace: rendered,
                kind,
            });
        }
    };
    debug!(unit = unit.name(), "unit defined");

    // Invoking: one call, job queue driven to quiescence.
    let outcome = match unit.invoke(&mut context) {
        Invocation::Fulfilled(value) => ExecutionOutcome::Success {
            value: render_value(&value, &mut context),
            output: capture::drain_output(&mut context),
            actions: capture::drain_actions(&mut context),
        },
        Invocation::Rejected(value) => {
            let rendered = render_thrown(&value, &mut context);
            ExecutionOutcome::RuntimeFailure {
                error: rendered.clone(),
                trace: rendered,
                output: capture::drain_output(&mut context),
            }
        }
        Invocation::Stalled => ExecutionOutcome::RuntimeFailure {
            error: "evaluation suspended on a promise that never settles".to_string(),
            trace: "the job queue drained with the unit still pending; \
                    nothing in the context can resolve it"
                .to_string(),
            output: capture::drain_output(&mut context),
        },
    };
    Ok(outcome)
}
