//! Post-decode reviver: recognizes tagged scalars in the parsed tree and
//! restores their extended type.
//!
//! The only tag the wire format owns is the big-integer form
//! `"<decimal-digits>n"`. Maps and sets encode as plain objects/arrays and
//! therefore decode as plain objects/arrays; a tag that never meets the
//! reviver (raw codec decode) stays an ordinary string. Both are documented
//! degradations, not errors.

use num_bigint::BigInt;
use serde_json::Value;

use crate::error::ParseError;
use crate::types::{Field, JsValue};

/// Caller-supplied revival hook. Invoked with the already-converted value;
/// `Some(replacement)` takes precedence, `None` keeps the converted value.
pub type UserReviver<'a> = &'a dyn Fn(&str, &JsValue) -> Option<JsValue>;

fn bigint_tag_regex() -> &'static regex::Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    // Mirrors the upstream tag pattern: an optional fractional part is
    // matched but fails big-integer conversion; negative digits do not
    // match and degrade to a plain string.
    RE.get_or_init(|| regex::Regex::new(r"^[0-9]+(\.[0-9]+)?n$").unwrap())
}

/// Single per-node revival step.
///
/// Strips the `n` suffix off a tagged big-integer string and converts it,
/// then gives the user hook the converted value.
pub fn revive(
    key: &str,
    value: JsValue,
    reviver: Option<UserReviver<'_>>,
) -> Result<JsValue, ParseError> {
    let converted = match value {
        JsValue::Str(s) if bigint_tag_regex().is_match(&s) => {
            let digits = &s[..s.len() - 1];
            match digits.parse::<BigInt>() {
                Ok(n) => JsValue::BigInt(n),
                Err(_) => return Err(ParseError::BigInt { literal: s }),
            }
        }
        other => other,
    };
    if let Some(hook) = reviver {
        if let Some(replacement) = hook(key, &converted) {
            return Ok(replacement);
        }
    }
    Ok(converted)
}

/// Revive a whole decoded tree bottom-up, innermost values first, the root
/// last under the empty key. Array elements are keyed by their decimal
/// index, object members by their name.
pub fn revive_tree(tree: Value, reviver: Option<UserReviver<'_>>) -> Result<JsValue, ParseError> {
    walk("", tree, reviver)
}

fn walk(key: &str, value: Value, reviver: Option<UserReviver<'_>>) -> Result<JsValue, ParseError> {
    let converted = match value {
        Value::Null => JsValue::Null,
        Value::Bool(b) => JsValue::Bool(b),
        Value::Number(n) => JsValue::Number(n.as_f64().unwrap_or(0.0)),
        Value::String(s) => JsValue::Str(s),
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.into_iter().enumerate() {
                out.push(walk(&i.to_string(), item, reviver)?);
            }
            JsValue::array(out)
        }
        Value::Object(map) => {
            let mut fields = Vec::with_capacity(map.len());
            for (name, val) in map {
                let revived = walk(name.as_str(), val, reviver)?;
                fields.push(Field::new(name, revived));
            }
            JsValue::object(fields)
        }
    };
    revive(key, converted, reviver)
}
