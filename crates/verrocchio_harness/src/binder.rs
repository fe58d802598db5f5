//! Context binder: the enumerated capability table.
//!
//! Every invocation gets a fresh interpreter context populated in two
//! layers: the ambient layer (engine defaults plus the capture prelude)
//! first, then the request-scoped capability table last, so the
//! request-scoped bindings always win over any ambient name. Nothing
//! else from the host process is visible to the snippet.

use crate::capture;
use boa_engine::object::ObjectInitializer;
use boa_engine::property::Attribute;
use boa_engine::{Context, JsResult, JsValue, Source, js_string};
use verrocchio_core::EvalCommand;

/// Every name the capability table binds, enumerated exactly.
///
/// - `bot` / `client` — the host handle (identity plus `say`/`react`)
/// - `msg` / `message` — the originating message
/// - `channel_id`, `guild_id`, `author` — request identifiers
/// - `print` / `console` — captured output
/// - `eprint` — diagnostic print on the host error stream
pub const BOUND_NAMES: [&str; 10] = [
    "bot",
    "client",
    "msg",
    "message",
    "channel_id",
    "guild_id",
    "author",
    "print",
    "console",
    "eprint",
];

/// The host bot's own identity, bound into the snippet context as
/// `bot` / `client`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostIdentity {
    /// The bot's user ID.
    pub user_id: u64,
    /// The bot's display name.
    pub user_name: String,
}

impl HostIdentity {
    /// Create an identity from the connected bot user.
    pub fn new(user_id: u64, user_name: impl Into<String>) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
        }
    }

    /// Placeholder identity for local (non-Discord) evaluation.
    pub fn local() -> Self {
        Self::new(0, "verrocchio")
    }
}

/// Populate a fresh context for one invocation.
pub(crate) fn bind(
    context: &mut Context,
    command: &EvalCommand,
    identity: &HostIdentity,
) -> JsResult<()> {
    // Ambient layer first.
    capture::install(context)?;

    // Request-scoped bindings last so they always win.
    let author = {
        let mut initializer = ObjectInitializer::new(context);
        initializer
            .property(
                js_string!("id"),
                JsValue::from(js_string!(command.author_id.to_string())),
                Attribute::all(),
            )
            .property(
                js_string!("name"),
                JsValue::from(js_string!(command.author_name.clone())),
                Attribute::all(),
            );
        initializer.build()
    };

    let guild_id = match command.guild_id {
        Some(id) => JsValue::from(js_string!(id.to_string())),
        None => JsValue::null(),
    };

    let msg = {
        let mut initializer = ObjectInitializer::new(context);
        initializer
            .property(
                js_string!("id"),
                JsValue::from(js_string!(command.message_id.to_string())),
                Attribute::all(),
            )
            .property(
                js_string!("content"),
                JsValue::from(js_string!(command.raw_text.clone())),
                Attribute::all(),
            )
            .property(
                js_string!("channel_id"),
                JsValue::from(js_string!(command.channel_id.to_string())),
                Attribute::all(),
            )
            .property(js_string!("guild_id"), guild_id.clone(), Attribute::all())
            .property(js_string!("author"), author.clone(), Attribute::all());
        initializer.build()
    };

    // The originating message and the request identifiers, message
    // under both of its aliases. Assignment, not definition: a `var`
    // binding is a non-configurable global property, so defining over
    // it throws while a plain set overwrites it.
    let global = context.global_object();
    global.set(js_string!("msg"), msg.clone(), true, context)?;
    global.set(js_string!("message"), msg, true, context)?;
    global.set(js_string!("author"), author, true, context)?;
    global.set(
        js_string!("channel_id"),
        JsValue::from(js_string!(command.channel_id.to_string())),
        true,
        context,
    )?;
    global.set(js_string!("guild_id"), guild_id, true, context)?;

    // The host handle under both of its aliases. Capability calls queue
    // actions for the transport to flush after the evaluation completes.
    let handle_src = format!(
        r#"
var bot = {{
    user_id: {user_id},
    user_name: {user_name},
    say: function (text) {{ __actions.push({{ action: "say", content: String(text) }}); }},
    react: function (glyph) {{ __actions.push({{ action: "react", glyph: String(glyph) }}); }}
}};
var client = bot;
"#,
        user_id = js_literal(&identity.user_id.to_string()),
        user_name = js_literal(&identity.user_name),
    );
    context.eval(Source::from_bytes(&handle_src))?;

    Ok(())
}

/// Render a Rust string as a quoted, escaped JS string literal.
fn js_literal(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| String::from("\"\""))
}
