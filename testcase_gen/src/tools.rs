//! Cross-toolchain process wrappers.

use std::path::Path;
use std::process::{Command, Output};

use anyhow::{Context, Result, anyhow};

/// Locates the cross toolchain's objcopy and objdump by name prefix.
pub(crate) struct Toolchain {
    prefix: String,
}

impl Toolchain {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    /// Flatten an ELF into a raw binary image with `objcopy -O binary`.
    pub fn extract_binary(&self, elf_path: &Path, bin_path: &Path) -> Result<()> {
        let program = format!("{}objcopy", self.prefix);
        let output = Command::new(&program)
            .arg("-O")
            .arg("binary")
            .arg(elf_path)
            .arg(bin_path)
            .output()
            .with_context(|| format!("failed to run '{program}'"))?;
        check_status(&program, &output)?;
        Ok(())
    }

    /// Dump an ELF's symbol table with `objdump -t`, returning its stdout.
    pub fn dump_symbols(&self, elf_path: &Path) -> Result<String> {
        let program = format!("{}objdump", self.prefix);
        let output = Command::new(&program)
            .arg("-t")
            .arg(elf_path)
            .output()
            .with_context(|| format!("failed to run '{program}'"))?;
        check_status(&program, &output)?;
        String::from_utf8(output.stdout)
            .with_context(|| format!("'{program}' produced non-UTF-8 output"))
    }
}

/// Turn a non-zero exit into an error carrying the tool's stderr.
fn check_status(program: &str, output: &Output) -> Result<()> {
    if output.status.success() {
        return Ok(());
    }
    Err(anyhow!(
        "'{program}' exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr).trim()
    ))
}
