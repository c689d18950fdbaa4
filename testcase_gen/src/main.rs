use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use testcase_gen::{ELF_EXTENSION, SIGNATURE_SUFFIX, render_registrations};

use crate::cli::Args;
use crate::tools::Toolchain;

mod cli;
mod generate;
mod tools;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    info!(
        "gathering test programs from '{}' to generate test inputs in '{}'",
        args.input_dir.display(),
        args.output_dir.display()
    );

    let toolchain = Toolchain::new(&args.tool_prefix);
    let mut cases = BTreeMap::new();

    let entries = fs::read_dir(&args.input_dir)
        .with_context(|| format!("failed to read '{}'", args.input_dir.display()))?;
    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to read entry in '{}'", args.input_dir.display()))?;
        let elf_path = entry.path();
        if !elf_path.is_file() || elf_path.extension().is_none_or(|ext| ext != ELF_EXTENSION) {
            continue;
        }
        let Some(stem) = elf_path.file_stem().and_then(|s| s.to_str()) else {
            warn!("skipping '{}': non-UTF-8 file name", elf_path.display());
            continue;
        };
        info!("working on {stem} from '{}'", elf_path.display());

        // The signature dump sits next to the ELF under the original stem;
        // output files use the sanitized case name.
        let sig_path = args.input_dir.join(format!("{stem}{SIGNATURE_SUFFIX}"));
        let name = stem.replace('-', "_");
        let bin_path = args.output_dir.join(format!("{name}.bin"));
        let want_path = args.output_dir.join(format!("{name}.want"));

        match generate::generate_case(&toolchain, &elf_path, &sig_path, &bin_path, &want_path) {
            Ok(sig_base) => {
                cases.insert(name, sig_base);
            }
            Err(e) => warn!("skipping {stem}: {e:#}"),
        }
    }

    let registrations = render_registrations(&cases);
    match &args.cases {
        Some(path) => fs::write(path, &registrations)
            .with_context(|| format!("failed to write cases file '{}'", path.display()))?,
        None => io::stdout()
            .write_all(registrations.as_bytes())
            .context("failed to write to stdout")?,
    }

    Ok(())
}
