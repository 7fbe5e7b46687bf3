//! Error types for the IR crate.
//!
//! The schema itself recognizes a single invalid-input condition (a symbol
//! without a name). Everything else here comes from the layers built on top
//! of it: the exchange codec, the signature parser and the emitters.

use thiserror::Error;

/// Result type alias for IR operations.
pub type IrResult<T> = Result<T, IrError>;

/// Main error type for IR operations.
#[derive(Debug, Error)]
pub enum IrError {
    /// A symbol was constructed with an empty name.
    #[error("symbol name must not be empty")]
    EmptyName,

    /// The exchange document could not be encoded or decoded.
    #[error("invalid IR document: {0}")]
    Codec(#[from] serde_json::Error),

    /// IO error while reading or writing an exchange document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A signature string could not be parsed.
    #[error("invalid signature: {0}")]
    Signature(#[from] SignatureError),

    /// An emitter failed to render a module.
    #[error("emitter '{emitter}' failed: {message}")]
    Emit { emitter: String, message: String },
}

impl IrError {
    /// Create an emitter error.
    pub fn emit(emitter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Emit {
            emitter: emitter.into(),
            message: message.into(),
        }
    }
}

/// Error raised while parsing a textual signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The signature does not start with `(`.
    #[error("expected '(' at the start of '{0}'")]
    MissingParen(String),

    /// Brackets or quotes do not balance.
    #[error("unbalanced brackets or quotes in '{0}'")]
    Unbalanced(String),

    /// A parameter slot between commas is empty.
    #[error("empty parameter at position {position}")]
    EmptyParameter { position: usize },

    /// A `/` marker appears where positional-only parameters are not allowed.
    #[error("misplaced '/' marker at position {position}")]
    MisplacedSlash { position: usize },

    /// A parameter or marker follows `**kwargs`.
    #[error("parameter after '**' at position {position}")]
    AfterVarKeyword { position: usize },

    /// Text after the closing parenthesis is not a return annotation.
    #[error("unexpected trailing text '{0}'")]
    TrailingText(String),
}
