//! Adapter over the `serde_json` text codec.
//!
//! Pass-through configuration lives here and only here: the replacer forms
//! of the standard pair and the indentation width. The core never interprets
//! either; it hands the intermediate tree to this module unchanged.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

use crate::error::ParseError;

/// The standard pair's replacer argument.
pub enum Replacer {
    /// Allow-list of object member names; arrays are unaffected.
    Keys(Vec<String>),
    /// Per-node mapper, called with the member key (`""` at the root) and
    /// the current value. `None` elides the node like the standard codec
    /// elides an undefined replacer result.
    Func(Box<dyn Fn(&str, &Value) -> Option<Value>>),
}

/// Encode an intermediate tree to text. `None` when the replacer elides the
/// root. `space == 0` renders compact; larger widths indent, clamped to 10
/// like the standard codec.
pub fn encode(tree: Value, replacer: Option<&Replacer>, space: usize) -> Option<String> {
    let tree = apply_replacer("", tree, replacer)?;
    Some(render(&tree, space))
}

/// Decode text to an intermediate tree, surfacing codec errors unchanged.
pub fn decode(text: &str) -> Result<Value, ParseError> {
    Ok(serde_json::from_str(text)?)
}

fn apply_replacer(key: &str, value: Value, replacer: Option<&Replacer>) -> Option<Value> {
    let value = match replacer {
        Some(Replacer::Func(mapper)) => mapper(key, &value)?,
        _ => value,
    };
    Some(match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    apply_replacer(&i.to_string(), item, replacer).unwrap_or(Value::Null)
                })
                .collect(),
        ),
        Value::Object(map) => {
            let mut out = Map::new();
            for (name, val) in map {
                if let Some(Replacer::Keys(keys)) = replacer {
                    if !keys.iter().any(|k| k == &name) {
                        continue;
                    }
                }
                if let Some(v) = apply_replacer(name.as_str(), val, replacer) {
                    out.insert(name, v);
                }
            }
            Value::Object(out)
        }
        other => other,
    })
}

fn render(tree: &Value, space: usize) -> String {
    if space == 0 {
        return tree.to_string();
    }
    let indent = vec![b' '; space.min(10)];
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(&indent);
    let mut ser = Serializer::with_formatter(&mut out, formatter);
    // A Value written into an in-memory buffer cannot fail to serialize.
    tree.serialize(&mut ser)
        .expect("serializing a JSON value to a buffer");
    String::from_utf8(out).expect("serde_json emits UTF-8")
}
