//! Runtime value model for the tolerant JSON pair.
//!
//! [`JsValue`] is the polymorphic input of `stringify` and the fully revived
//! output of `parse`. Containers hold shared handles (`Rc<RefCell<..>>`) so
//! that reference cycles and sibling sharing are constructible; the
//! normalizer only ever reads through them.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use num_bigint::BigInt;

/// Capability for domain types that provide their own JSON form.
///
/// When the normalizer reaches a [`JsValue::Custom`] it uses the hook's
/// result instead of structural traversal; the result is taken as final and
/// not normalized further. Returning a codec-level `serde_json::Value` keeps
/// the hook output representable by construction.
pub trait SerializeHook {
    fn to_json(&self) -> serde_json::Value;
}

/// Key of a map-like container: string or number, stringified on encode.
#[derive(Debug, Clone, PartialEq)]
pub enum MapKey {
    Str(String),
    Num(f64),
}

impl MapKey {
    /// The key's string form, as used for the encoded object member name.
    pub fn to_key_string(&self) -> String {
        match self {
            MapKey::Str(s) => s.clone(),
            MapKey::Num(n) => number_string(*n),
        }
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_key_string())
    }
}

impl From<&str> for MapKey {
    fn from(s: &str) -> Self {
        MapKey::Str(s.to_owned())
    }
}

// Number-to-string following the standard codec's convention: integral
// values print without a fractional part.
fn number_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        return (n as i64).to_string();
    }
    n.to_string()
}

/// A named field of an opaque object, with its visibility descriptor.
///
/// `enumerable: false` marks a field the standard codec would skip; the
/// normalizer includes it anyway (full-fidelity snapshots).
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: JsValue,
    pub enumerable: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, value: JsValue) -> Self {
        Field {
            name: name.into(),
            value,
            enumerable: true,
        }
    }

    /// A field excluded from ordinary enumeration.
    pub fn hidden(name: impl Into<String>, value: JsValue) -> Self {
        Field {
            name: name.into(),
            value,
            enumerable: false,
        }
    }
}

/// An opaque object: its explicit serialization descriptor is the ordered
/// field list, hidden fields included.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsObject {
    pub fields: Vec<Field>,
}

/// Universal runtime value, spanning everything the tolerant pair accepts.
///
/// - scalars: null, undefined, bool, number, big integer, string;
/// - `Function`, which (like undefined) vanishes on encode;
/// - containers behind shared handles: array, set, map, object;
/// - `Custom`, an object exposing the [`SerializeHook`] capability.
#[derive(Clone)]
pub enum JsValue {
    Null,
    Undefined,
    /// Not serializable; elided exactly like `Undefined`.
    Function,
    Bool(bool),
    Number(f64),
    /// Arbitrary-precision integer; encoded as the `"<digits>n"` tag.
    BigInt(BigInt),
    Str(String),
    Array(Rc<RefCell<Vec<JsValue>>>),
    /// Unique-value container; encodes as an array in iteration order.
    Set(Rc<RefCell<Vec<JsValue>>>),
    /// Arbitrary-keyed container; encodes as an object via key stringification.
    Map(Rc<RefCell<Vec<(MapKey, JsValue)>>>),
    Object(Rc<RefCell<JsObject>>),
    Custom(Rc<dyn SerializeHook>),
}

impl JsValue {
    pub fn array(items: Vec<JsValue>) -> Self {
        JsValue::Array(Rc::new(RefCell::new(items)))
    }

    pub fn set(items: Vec<JsValue>) -> Self {
        JsValue::Set(Rc::new(RefCell::new(items)))
    }

    pub fn map(entries: Vec<(MapKey, JsValue)>) -> Self {
        JsValue::Map(Rc::new(RefCell::new(entries)))
    }

    pub fn object(fields: Vec<Field>) -> Self {
        JsValue::Object(Rc::new(RefCell::new(JsObject { fields })))
    }

    pub fn custom<H: SerializeHook + 'static>(hook: H) -> Self {
        JsValue::Custom(Rc::new(hook))
    }
}

impl From<bool> for JsValue {
    fn from(b: bool) -> Self {
        JsValue::Bool(b)
    }
}

impl From<f64> for JsValue {
    fn from(n: f64) -> Self {
        JsValue::Number(n)
    }
}

impl From<i64> for JsValue {
    fn from(n: i64) -> Self {
        JsValue::Number(n as f64)
    }
}

impl From<&str> for JsValue {
    fn from(s: &str) -> Self {
        JsValue::Str(s.to_owned())
    }
}

impl From<String> for JsValue {
    fn from(s: String) -> Self {
        JsValue::Str(s)
    }
}

impl From<BigInt> for JsValue {
    fn from(n: BigInt) -> Self {
        JsValue::BigInt(n)
    }
}

// Structural equality for scalars and container contents; `Custom` compares
// by handle identity. Comparing two cyclic graphs does not terminate, same
// as any other recursive equality over shared handles.
impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsValue::Null, JsValue::Null)
            | (JsValue::Undefined, JsValue::Undefined)
            | (JsValue::Function, JsValue::Function) => true,
            (JsValue::Bool(a), JsValue::Bool(b)) => a == b,
            (JsValue::Number(a), JsValue::Number(b)) => a == b,
            (JsValue::BigInt(a), JsValue::BigInt(b)) => a == b,
            (JsValue::Str(a), JsValue::Str(b)) => a == b,
            (JsValue::Array(a), JsValue::Array(b)) | (JsValue::Set(a), JsValue::Set(b)) => {
                *a.borrow() == *b.borrow()
            }
            (JsValue::Map(a), JsValue::Map(b)) => *a.borrow() == *b.borrow(),
            (JsValue::Object(a), JsValue::Object(b)) => *a.borrow() == *b.borrow(),
            (JsValue::Custom(a), JsValue::Custom(b)) => {
                Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
            }
            _ => false,
        }
    }
}

impl fmt::Debug for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Null => f.write_str("Null"),
            JsValue::Undefined => f.write_str("Undefined"),
            JsValue::Function => f.write_str("Function"),
            JsValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            JsValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            JsValue::BigInt(n) => f.debug_tuple("BigInt").field(n).finish(),
            JsValue::Str(s) => f.debug_tuple("Str").field(s).finish(),
            JsValue::Array(items) => f.debug_tuple("Array").field(&items.borrow()).finish(),
            JsValue::Set(items) => f.debug_tuple("Set").field(&items.borrow()).finish(),
            JsValue::Map(entries) => f.debug_tuple("Map").field(&entries.borrow()).finish(),
            JsValue::Object(obj) => f.debug_tuple("Object").field(&obj.borrow()).finish(),
            JsValue::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Reference identity of a container/object handle.
///
/// Distinct from `PartialEq`: two structurally equal containers have
/// different `NodeId`s unless they are the same allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(*const ());

impl NodeId {
    pub(crate) fn of<T: ?Sized>(handle: &Rc<T>) -> NodeId {
        NodeId(Rc::as_ptr(handle) as *const ())
    }
}
