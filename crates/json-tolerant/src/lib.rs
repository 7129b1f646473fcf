//! json-tolerant — drop-in replacement for the standard JSON
//! stringify/parse pair.
//!
//! Tolerates two things the standard pair rejects or mishandles:
//!
//! - values not natively representable in JSON: arbitrary-precision
//!   integers (round-tripped through the `"<digits>n"` string tag),
//!   map-like and set-like containers (flattened to plain objects and
//!   arrays);
//! - object graphs with reference cycles, truncated with the
//!   `"[Circular]"` marker instead of recursing forever.
//!
//! The text codec itself is `serde_json`; this crate only transforms values
//! on either side of it. Replacer and indentation width are forwarded to
//! the codec adapter untouched.
//!
//! # Example
//!
//! ```
//! use json_tolerant::{parse, stringify_with, JsValue, MapKey};
//!
//! let map = JsValue::map(vec![(MapKey::from("key"), JsValue::from("value"))]);
//! assert_eq!(
//!     stringify_with(&map, None, 0).as_deref(),
//!     Some(r#"{"key":"value"}"#)
//! );
//!
//! let big = JsValue::BigInt(123.into());
//! assert_eq!(stringify_with(&big, None, 0).as_deref(), Some(r#""123n""#));
//! assert_eq!(parse(r#""123n""#).unwrap(), big);
//! ```

pub mod codec;
pub mod error;
pub mod normalize;
pub mod revive;
pub mod types;

// Re-export the core public API
pub use codec::Replacer;
pub use error::ParseError;
pub use normalize::{normalize, CIRCULAR_MARKER};
pub use revive::{revive, revive_tree, UserReviver};
pub use types::{Field, JsObject, JsValue, MapKey, SerializeHook};

/// Indentation width used by [`stringify`], matching the upstream default.
pub const DEFAULT_SPACE: usize = 4;

/// Encode a value to JSON text with the default four-space indentation.
///
/// `None` is the "no value" result: the input (or the whole tree after
/// replacer application) was elided, exactly as the standard codec returns
/// undefined for a bare function or undefined input.
pub fn stringify(value: &JsValue) -> Option<String> {
    stringify_with(value, None, DEFAULT_SPACE)
}

/// Encode a value to JSON text with an explicit replacer and indent width.
///
/// Both are forwarded verbatim to the codec adapter; the core does not
/// interpret them.
pub fn stringify_with(
    value: &JsValue,
    replacer: Option<&Replacer>,
    space: usize,
) -> Option<String> {
    let tree = normalize::normalize(value)?;
    codec::encode(tree, replacer, space)
}

/// Decode JSON text, restoring tagged big integers.
pub fn parse(text: &str) -> Result<JsValue, ParseError> {
    let tree = codec::decode(text)?;
    revive::revive_tree(tree, None)
}

/// Decode JSON text with a caller reviver hook.
///
/// The hook runs once per decoded node, bottom-up, after tag conversion; a
/// `Some` result replaces the converted value, `None` keeps it.
pub fn parse_with(text: &str, reviver: UserReviver<'_>) -> Result<JsValue, ParseError> {
    let tree = codec::decode(text)?;
    revive::revive_tree(tree, Some(reviver))
}
