//! Partitioning of the signature region into per-subtest segments.

use crate::error::LayoutError;
use crate::symtab::SymbolTable;

/// Symbol marking the start of the signature region.
pub const BEGIN_SIGNATURE: &str = "begin_signature";

/// Symbol marking the end of the signature region.
pub const END_SIGNATURE: &str = "end_signature";

/// Bytes per signature word.
pub const WORD_BYTES: u32 = 4;

/// Name of the symbol closing subtest `index`'s result segment.
pub fn test_result_symbol(index: u32) -> String {
    format!("test_{index}_res")
}

/// Per-subtest partition of the signature region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureLayout {
    /// Address of `begin_signature`.
    pub base: u32,
    /// Word count of each subtest's result segment, in subtest order.
    pub counts: Vec<usize>,
}

impl SignatureLayout {
    /// Derive the layout from a test binary's symbol table.
    ///
    /// Segments run from `begin_signature` through the ascending
    /// `test_<i>_res` symbols; the first missing index closes the final
    /// segment at `end_signature`. Both region boundaries must be present.
    pub fn from_symbols(symbols: &SymbolTable) -> Result<Self, LayoutError> {
        let base = symbols
            .get(BEGIN_SIGNATURE)
            .ok_or(LayoutError::MissingSymbol(BEGIN_SIGNATURE))?;
        let end = symbols
            .get(END_SIGNATURE)
            .ok_or(LayoutError::MissingSymbol(END_SIGNATURE))?;

        let mut counts = Vec::new();
        let mut start = base;
        for index in 1.. {
            let name = test_result_symbol(index);
            match symbols.get(&name) {
                Some(bound) => {
                    counts.push(segment_words(start, bound, name)?);
                    start = bound;
                }
                None => {
                    counts.push(segment_words(start, end, END_SIGNATURE.to_string())?);
                    break;
                }
            }
        }
        Ok(Self { base, counts })
    }

    /// Total number of signature words the layout expects.
    pub fn total_words(&self) -> usize {
        self.counts.iter().sum()
    }
}

fn segment_words(start: u32, end: u32, name: String) -> Result<usize, LayoutError> {
    let span = end.checked_sub(start).ok_or(LayoutError::ReversedBoundary {
        name,
        addr: end,
        start,
    })?;
    Ok((span / WORD_BYTES) as usize)
}
