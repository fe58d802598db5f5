//! Output capture and the diagnostic print function.
//!
//! `print` (and the `console.*` aliases) append to a capture buffer
//! that lives inside the invocation's private interpreter context;
//! `eprint` bypasses capture entirely and writes to the host process
//! stderr, so operator diagnostics stay on the console regardless of
//! what the report carries.
//!
//! Each invocation owns its context, so two concurrent evaluations
//! never share a capture buffer.

use boa_engine::object::FunctionObjectBuilder;
use boa_engine::property::Attribute;
use boa_engine::{Context, JsResult, JsValue, NativeFunction, Source, js_string};
use verrocchio_core::HostAction;

/// Ambient layer installed before any request-scoped binding: the
/// capture buffer, the action queue, and `print`/`console`.
const PRELUDE: &str = r#"
var __capture = [];
var __actions = [];
function print() {
    var parts = [];
    for (var i = 0; i < arguments.length; i++) {
        var a = arguments[i];
        if (typeof a === 'object' && a !== null) {
            try { parts.push(JSON.stringify(a)); } catch (e) { parts.push(String(a)); }
        } else {
            parts.push(String(a));
        }
    }
    __capture.push(parts.join(' ') + '\n');
}
var console = { log: print, info: print, warn: print, error: print };
"#;

/// Install the capture prelude and the native `eprint` into a fresh
/// context.
pub(crate) fn install(context: &mut Context) -> JsResult<()> {
    context.eval(Source::from_bytes(PRELUDE))?;

    let eprint = FunctionObjectBuilder::new(context.realm(), NativeFunction::from_fn_ptr(eprint_native))
        .name(js_string!("eprint"))
        .length(1)
        .constructor(false)
        .build();
    context.register_global_property(js_string!("eprint"), eprint, Attribute::all())?;
    Ok(())
}

/// Diagnostic print bound to the host error stream. Never captured.
fn eprint_native(_this: &JsValue, args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    let parts: Vec<String> = args
        .iter()
        .map(|a| {
            a.to_string(ctx)
                .map(|s| s.to_std_string_escaped())
                .unwrap_or_else(|_| a.display().to_string())
        })
        .collect();
    eprintln!("{}", parts.join(" "));
    Ok(JsValue::undefined())
}

/// Drain everything the snippet printed. Reading is side-effect free
/// and works on every exit path, including after a mid-body raise.
pub(crate) fn drain_output(context: &mut Context) -> String {
    match context.eval(Source::from_bytes("JSON.stringify(__capture)")) {
        Ok(value) => value
            .as_string()
            .map(|s| s.to_std_string_escaped())
            .and_then(|s| serde_json::from_str::<Vec<String>>(&s).ok())
            .map(|lines| lines.concat())
            .unwrap_or_default(),
        Err(_) => String::new(),
    }
}

/// Drain the outbound action queue. Malformed entries (an operator can
/// push anything onto `__actions`) are skipped.
pub(crate) fn drain_actions(context: &mut Context) -> Vec<HostAction> {
    let Ok(value) = context.eval(Source::from_bytes("JSON.stringify(__actions)")) else {
        return Vec::new();
    };
    let Some(json) = value.as_string().map(|s| s.to_std_string_escaped()) else {
        return Vec::new();
    };
    serde_json::from_str::<Vec<serde_json::Value>>(&json)
        .map(|entries| {
            entries
                .into_iter()
                .filter_map(|entry| serde_json::from_value::<HostAction>(entry).ok())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_appends_to_capture() {
        let mut context = Context::default();
        install(&mut context).unwrap();
        context
            .eval(Source::from_bytes(r#"print("hi"); print("a", 1);"#))
            .unwrap();
        assert_eq!(drain_output(&mut context), "hi\na 1\n");
    }

    #[test]
    fn console_aliases_print() {
        let mut context = Context::default();
        install(&mut context).unwrap();
        context
            .eval(Source::from_bytes(r#"console.log("via console");"#))
            .unwrap();
        assert_eq!(drain_output(&mut context), "via console\n");
    }

    #[test]
    fn objects_print_as_json() {
        let mut context = Context::default();
        install(&mut context).unwrap();
        context
            .eval(Source::from_bytes(r#"print({a: 1});"#))
            .unwrap();
        assert_eq!(drain_output(&mut context), "{\"a\":1}\n");
    }

    #[test]
    fn empty_capture_drains_empty() {
        let mut context = Context::default();
        install(&mut context).unwrap();
        assert_eq!(drain_output(&mut context), "");
        assert!(drain_actions(&mut context).is_empty());
    }

    #[test]
    fn eprint_is_not_captured() {
        let mut context = Context::default();
        install(&mut context).unwrap();
        context
            .eval(Source::from_bytes(r#"eprint("diagnostic");"#))
            .unwrap();
        assert_eq!(drain_output(&mut context), "");
    }

    #[test]
    fn mangled_capture_drains_empty() {
        let mut context = Context::default();
        install(&mut context).unwrap();
        context
            .eval(Source::from_bytes("__capture = 5;"))
            .unwrap();
        assert_eq!(drain_output(&mut context), "");
    }

    #[test]
    fn malformed_actions_are_skipped() {
        let mut context = Context::default();
        install(&mut context).unwrap();
        context
            .eval(Source::from_bytes(
                r#"__actions.push({action: "say", content: "ok"}); __actions.push(42);"#,
            ))
            .unwrap();
        let actions = drain_actions(&mut context);
        assert_eq!(actions, vec![HostAction::Say { content: "ok".to_string() }]);
    }
}
