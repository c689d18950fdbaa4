//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use testcase_gen::DEFAULT_TOOL_PREFIX;

/// Generate emulator test fixtures from compiled RISC-V test binaries.
#[derive(Parser, Debug)]
pub(crate) struct Args {
    /// Directory holding `<name>.elf` binaries and `<name>.signature.output` dumps.
    pub input_dir: PathBuf,

    /// Directory receiving the generated `.bin` and `.want` fixture files.
    pub output_dir: PathBuf,

    /// Name prefix of the cross toolchain's objcopy and objdump binaries.
    #[arg(long, default_value = DEFAULT_TOOL_PREFIX)]
    pub tool_prefix: String,

    /// Registration snippet file. If not specified, writes to stdout.
    #[arg(long)]
    pub cases: Option<PathBuf>,
}
