use thiserror::Error;

/// Errors surfaced by `parse`.
///
/// `stringify` never fails: cycles become markers and non-serializable
/// values are elided where the standard codec elides them.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Malformed text, straight from the underlying codec.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A tagged big-integer literal whose digits cannot be converted
    /// (a fractional tag such as `"1.5n"`).
    #[error("cannot convert tagged literal `{literal}` to a big integer")]
    BigInt { literal: String },
}
