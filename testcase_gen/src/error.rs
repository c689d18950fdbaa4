//! Error types for symbol-table, signature and fixture processing.

use std::num::ParseIntError;

/// Error type for signature value files.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    /// A line is not a 32-bit hexadecimal word.
    #[error("invalid signature value '{text}' on line {line}")]
    InvalidValue {
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },
}

/// Error type for deriving the signature region layout from symbols.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A required boundary symbol is absent from `.data`.
    #[error("symbol '{0}' not found in .data")]
    MissingSymbol(&'static str),
    /// A closing boundary lies below the running segment start.
    #[error("boundary '{name}' at {addr:#010x} precedes segment start {start:#010x}")]
    ReversedBoundary {
        name: String,
        addr: u32,
        start: u32,
    },
}

/// Error type for rendering the expected-result file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixtureError {
    /// The signature dump holds fewer words than the symbol layout requires.
    #[error("signature has {got} values but the symbol layout requires {required}")]
    NotEnoughValues { required: usize, got: usize },
}
