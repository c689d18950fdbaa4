//! Per-test-case fixture generation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;
use testcase_gen::{SignatureLayout, parse_signature_values, parse_symbol_table, render_expected};

use crate::tools::Toolchain;

/// Generate the `.bin`/`.want` fixture pair for one test binary.
///
/// Returns the signature base address under which the case is registered.
pub(crate) fn generate_case(
    toolchain: &Toolchain,
    elf_path: &Path,
    sig_path: &Path,
    bin_path: &Path,
    want_path: &Path,
) -> Result<u32> {
    toolchain.extract_binary(elf_path, bin_path).with_context(|| {
        format!(
            "failed to generate '{}' from '{}'",
            bin_path.display(),
            elf_path.display()
        )
    })?;

    let dump = toolchain
        .dump_symbols(elf_path)
        .with_context(|| format!("failed to gather symbols from '{}'", elf_path.display()))?;
    let symbols = parse_symbol_table(&dump);
    let layout = SignatureLayout::from_symbols(&symbols)
        .with_context(|| format!("bad signature layout in '{}'", elf_path.display()))?;

    let sig_text = fs::read_to_string(sig_path)
        .with_context(|| format!("failed to read signature file '{}'", sig_path.display()))?;
    let values = parse_signature_values(&sig_text)
        .with_context(|| format!("failed to gather result values from '{}'", sig_path.display()))?;
    if values.len() > layout.total_words() {
        warn!(
            "'{}' holds {} values but only {} are laid out, ignoring the surplus",
            sig_path.display(),
            values.len(),
            layout.total_words()
        );
    }

    let expected = render_expected(&layout, &values).with_context(|| {
        format!(
            "failed to render expected results for '{}'",
            elf_path.display()
        )
    })?;
    fs::write(want_path, expected)
        .with_context(|| format!("failed to write '{}'", want_path.display()))?;

    Ok(layout.base)
}
