//! Decode and scan errors.

use thiserror::Error;

/// Error returned by every decoding path of a nullable scalar.
///
/// Encoding never fails. After any of these errors the receiver that was
/// being decoded into is invalid and holds its kind's zero value.
#[derive(Debug, Error)]
pub enum Error {
    /// The structured input is not well-formed JSON.
    ///
    /// The wrapped [`serde_json::Error`] is returned from
    /// [`std::error::Error::source`] and keeps its
    /// [`classify`](serde_json::Error::classify) category.
    #[error("null: malformed JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// A well-formed token of the wrong shape for the kind.
    #[error("null: cannot decode JSON {found} into {kind}")]
    TypeMismatch {
        kind: &'static str,
        found: &'static str,
    },

    /// An integral literal outside the range of the kind.
    #[error("null: {literal} overflows {kind}")]
    Range { kind: &'static str, literal: String },

    /// A literal with a fractional part where only integers are accepted.
    #[error("null: {literal} is not an integer, cannot decode into {kind}")]
    Precision { kind: &'static str, literal: String },

    /// Text that does not follow the kind's grammar.
    #[error("null: cannot parse {input:?} as {kind}: {reason}")]
    Parse {
        kind: &'static str,
        input: String,
        reason: String,
    },

    /// A scanned value whose type cannot be coerced into the kind.
    #[error("null: cannot scan {from} into {kind}")]
    Conversion {
        kind: &'static str,
        from: &'static str,
    },
}

impl Error {
    pub(crate) fn parse(kind: &'static str, input: &str, reason: impl ToString) -> Self {
        Error::Parse {
            kind,
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True for [`Error::Syntax`].
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax(_))
    }
}
