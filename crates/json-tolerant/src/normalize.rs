//! Pre-encode normalizer: arbitrary value graph → codec-safe intermediate tree.
//!
//! The output contains only scalars, arrays and string-keyed objects, no
//! reference cycles and no extended types (big integers are string-tagged).
//! Cycle detection uses an ancestor stack of handle identities, pruned
//! against the current parent on every descent, so a value shared by two
//! siblings is normalized twice while a value reachable from one of its own
//! ancestors is replaced by [`CIRCULAR_MARKER`].

use serde_json::{Map, Number, Value};

use crate::types::{JsValue, NodeId};

/// Substitute emitted in place of a value that is its own ancestor.
///
/// Lossy by design: the marker retains no structural information.
pub const CIRCULAR_MARKER: &str = "[Circular]";

/// Convert `value` into the intermediate tree.
///
/// `None` means the value is elided entirely (undefined, function), the
/// "no value" outcome of the standard codec. Inside containers the elision
/// is positional: an elided array or set element renders as `null`, an
/// elided object or map member is dropped.
///
/// The input graph is only read, never mutated; the ancestor stack lives
/// and dies with this one call.
pub fn normalize(value: &JsValue) -> Option<Value> {
    let mut ancestors: Vec<NodeId> = Vec::new();
    convert(value, None, &mut ancestors)
}

fn convert(value: &JsValue, parent: Option<NodeId>, ancestors: &mut Vec<NodeId>) -> Option<Value> {
    match value {
        JsValue::Null => Some(Value::Null),
        JsValue::Undefined | JsValue::Function => None,
        JsValue::Bool(b) => Some(Value::Bool(*b)),
        JsValue::Number(n) => Some(number_value(*n)),
        JsValue::BigInt(n) => Some(Value::String(format!("{n}n"))),
        JsValue::Str(s) => Some(Value::String(s.clone())),
        JsValue::Array(items) | JsValue::Set(items) => {
            let id = NodeId::of(items);
            if !enter(id, parent, ancestors) {
                return Some(marker());
            }
            let items = items.borrow();
            let mut out = Vec::with_capacity(items.len());
            for item in items.iter() {
                // Array rule of the codec: an elided element becomes null.
                out.push(convert(item, Some(id), ancestors).unwrap_or(Value::Null));
            }
            Some(Value::Array(out))
        }
        JsValue::Map(entries) => {
            let id = NodeId::of(entries);
            if !enter(id, parent, ancestors) {
                return Some(marker());
            }
            let entries = entries.borrow();
            let mut out = Map::new();
            for (key, val) in entries.iter() {
                if let Some(v) = convert(val, Some(id), ancestors) {
                    // Duplicate string forms keep the first position, last value.
                    out.insert(key.to_key_string(), v);
                }
            }
            Some(Value::Object(out))
        }
        JsValue::Object(obj) => {
            let id = NodeId::of(obj);
            if !enter(id, parent, ancestors) {
                return Some(marker());
            }
            let obj = obj.borrow();
            let mut out = Map::new();
            // All declared fields, hidden ones included. The standard codec
            // only serializes enumerable fields; callers of the tolerant
            // pair rely on full-fidelity snapshots.
            for field in &obj.fields {
                if let Some(v) = convert(&field.value, Some(id), ancestors) {
                    out.insert(field.name.clone(), v);
                }
            }
            Some(Value::Object(out))
        }
        JsValue::Custom(hook) => {
            let id = NodeId::of(hook);
            if !enter(id, parent, ancestors) {
                return Some(marker());
            }
            // The hook's result is final; it is not normalized further.
            Some(hook.to_json())
        }
    }
}

/// Prune the ancestor stack back to `parent`, then admit `id` unless it is
/// already an ancestor. Returns `false` on a cycle.
fn enter(id: NodeId, parent: Option<NodeId>, ancestors: &mut Vec<NodeId>) -> bool {
    while !ancestors.is_empty() && ancestors.last().copied() != parent {
        ancestors.pop();
    }
    if ancestors.contains(&id) {
        return false;
    }
    ancestors.push(id);
    true
}

fn marker() -> Value {
    Value::String(CIRCULAR_MARKER.to_owned())
}

// Codec number conventions, applied here because `serde_json::Number`
// cannot hold non-finite values: non-finite → null, integral → no
// fractional part in the rendered text.
fn number_value(n: f64) -> Value {
    if !n.is_finite() {
        return Value::Null;
    }
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        return Value::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
}
