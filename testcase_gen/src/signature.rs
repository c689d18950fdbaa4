//! Parsing of architectural signature dumps.

use crate::error::SignatureError;

/// Parse a `.signature.output` dump: one 32-bit hex word per line, no `0x`
/// prefix. Line numbers in errors are 1-based.
pub fn parse_signature_values(text: &str) -> Result<Vec<u32>, SignatureError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            u32::from_str_radix(line, 16).map_err(|source| SignatureError::InvalidValue {
                line: i + 1,
                text: line.to_string(),
                source,
            })
        })
        .collect()
}
