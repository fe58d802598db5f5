//! Deferred execution wrapper: define, then invoke.
//!
//! The payload is textually indented into the body of a uniquely-named
//! zero-argument `async function`. The define step evaluates that
//! definition once; its only effect is to bind the unit's name inside
//! the context — no body statement runs until the explicit invocation.
//! This lets multi-statement snippets with top-level `await` read as if
//! written at top level while running as a single logical unit of work
//! on the engine's cooperative job queue.

use boa_engine::builtins::promise::PromiseState;
use boa_engine::object::builtins::JsPromise;
use boa_engine::{Context, JsError, JsValue, Source};
use uuid::Uuid;
use verrocchio_core::CodePayload;

/// The result of invoking a defined unit.
pub(crate) enum Invocation {
    /// The unit's promise fulfilled with a value.
    Fulfilled(JsValue),
    /// The unit's promise rejected with a thrown value.
    Rejected(JsValue),
    /// The promise is still pending after the job queue drained: the
    /// engine has no host timers, so it can never settle.
    Stalled,
}

/// A snippet compiled into a named, asynchronously-invocable unit bound
/// inside one invocation's context.
pub(crate) struct DeferredUnit {
    name: String,
}

impl DeferredUnit {
    /// Compile the payload as a unit definition and bind its name.
    ///
    /// Tries the single-expression form first (`return ( <payload> );`)
    /// so a bare expression like `1+1` evaluates to its value; payloads
    /// that do not parse as one expression fall back to the plain
    /// statement body. If both forms fail, returns the statement form's
    /// error — that is the form the operator wrote.
    pub(crate) fn define(payload: &CodePayload, context: &mut Context) -> Result<Self, JsError> {
        let name = format!("__eval_unit_{}", Uuid::new_v4().simple());

        let expression_form = format!(
            "async function {name}() {{\n    return (\n{}\n    );\n}}",
            indent(payload.as_str()),
        );
        if context.eval(Source::from_bytes(&expression_form)).is_ok() {
            return Ok(Self { name });
        }

        let statement_form =
            format!("async function {name}() {{\n{}\n}}", indent(payload.as_str()));
        context.eval(Source::from_bytes(&statement_form))?;
        Ok(Self { name })
    }

    /// The unit's unique name.
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the unit once and drive the job queue to quiescence.
    pub(crate) fn invoke(&self, context: &mut Context) -> Invocation {
        let call = format!("{}()", self.name);
        let result = match context.eval(Source::from_bytes(&call)) {
            Ok(value) => value,
            // An async call site rejects rather than throws, but guard
            // the impossible path anyway.
            Err(err) => return Invocation::Rejected(err.to_opaque(context)),
        };

        let _ = context.run_jobs();

        let Some(object) = result.as_object() else {
            // Not a promise: the unit name was rebound by the snippet's
            // own define-step side effects. Report the raw value.
            return Invocation::Fulfilled(result.clone());
        };
        match JsPromise::from_object(object.clone()) {
            Ok(promise) => match promise.state() {
                PromiseState::Fulfilled(value) => Invocation::Fulfilled(value),
                PromiseState::Rejected(value) => Invocation::Rejected(value),
                PromiseState::Pending => Invocation::Stalled,
            },
            Err(_) => Invocation::Fulfilled(result.clone()),
        }
    }
}

/// Indent every payload line into the unit body.
fn indent(code: &str) -> String {
    code.lines()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Textual form of a returned value: strings raw, `undefined` spelled
/// out, everything else through the engine's display.
pub(crate) fn render_value(value: &JsValue, context: &mut Context) -> String {
    if value.is_undefined() {
        return "undefined".to_string();
    }
    if let Some(s) = value.as_string() {
        return s.to_std_string_escaped();
    }
    value
        .to_string(context)
        .map(|s| s.to_std_string_escaped())
        .unwrap_or_else(|_| value.display().to_string())
}

/// Textual form of a thrown value (`Error: boom` for error objects).
pub(crate) fn render_thrown(value: &JsValue, context: &mut Context) -> String {
    value
        .to_string(context)
        .map(|s| s.to_std_string_escaped())
        .unwrap_or_else(|_| value.display().to_string())
}

/// The leading `Name:` token of a rendered engine error.
pub(crate) fn error_kind(rendered: &str) -> String {
    rendered
        .split(':')
        .next()
        .unwrap_or("Error")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn define(code: &str, context: &mut Context) -> Result<DeferredUnit, JsError> {
        DeferredUnit::define(&CodePayload::from_code(code), context)
    }

    #[test]
    fn bare_expression_returns_its_value() {
        let mut context = Context::default();
        let unit = define("1+1", &mut context).unwrap();
        match unit.invoke(&mut context) {
            Invocation::Fulfilled(value) => {
                assert_eq!(render_value(&value, &mut context), "2");
            }
            _ => panic!("expected fulfilled"),
        }
    }

    #[test]
    fn statement_body_with_explicit_return() {
        let mut context = Context::default();
        let unit = define("let x = 2;\nreturn x * 3;", &mut context).unwrap();
        match unit.invoke(&mut context) {
            Invocation::Fulfilled(value) => {
                assert_eq!(render_value(&value, &mut context), "6");
            }
            _ => panic!("expected fulfilled"),
        }
    }

    #[test]
    fn define_does_not_run_the_body() {
        let mut context = Context::default();
        context
            .eval(Source::from_bytes("var ran = false;"))
            .unwrap();
        let _unit = define("ran = true; return 1;", &mut context).unwrap();
        let ran = context.eval(Source::from_bytes("ran")).unwrap();
        assert!(!ran.to_boolean());
    }

    #[test]
    fn unbalanced_syntax_fails_to_define() {
        let mut context = Context::default();
        assert!(define("function (", &mut context).is_err());
        assert!(define("1 +", &mut context).is_err());
    }

    #[test]
    fn thrown_error_rejects() {
        let mut context = Context::default();
        let unit = define(r#"throw new Error("boom")"#, &mut context).unwrap();
        match unit.invoke(&mut context) {
            Invocation::Rejected(value) => {
                let rendered = render_thrown(&value, &mut context);
                assert!(rendered.contains("boom"), "{rendered}");
            }
            _ => panic!("expected rejected"),
        }
    }

    #[test]
    fn awaited_promise_resolves() {
        let mut context = Context::default();
        let unit = define("return await Promise.resolve(7);", &mut context).unwrap();
        match unit.invoke(&mut context) {
            Invocation::Fulfilled(value) => {
                assert_eq!(render_value(&value, &mut context), "7");
            }
            _ => panic!("expected fulfilled"),
        }
    }

    #[test]
    fn forever_pending_promise_stalls() {
        let mut context = Context::default();
        let unit = define("await new Promise(function () {});", &mut context).unwrap();
        assert!(matches!(unit.invoke(&mut context), Invocation::Stalled));
    }

    #[test]
    fn empty_payload_returns_undefined() {
        // An empty statement body parses, so the empty payload is
        // forwarded and comes back as undefined rather than an error.
        let mut context = Context::default();
        let unit = define("", &mut context).unwrap();
        match unit.invoke(&mut context) {
            Invocation::Fulfilled(value) => assert!(value.is_undefined()),
            _ => panic!("expected fulfilled undefined"),
        }
    }

    #[test]
    fn error_kind_extraction() {
        assert_eq!(error_kind("SyntaxError: unexpected token"), "SyntaxError");
        assert_eq!(error_kind("TypeError: x is not a function"), "TypeError");
        assert_eq!(error_kind("weird"), "weird");
    }

    #[test]
    fn string_values_render_raw() {
        let mut context = Context::default();
        let unit = define(r#"return "hi";"#, &mut context).unwrap();
        match unit.invoke(&mut context) {
            Invocation::Fulfilled(value) => {
                assert_eq!(render_value(&value, &mut context), "hi");
            }
            _ => panic!("expected fulfilled"),
        }
    }
}
