// not every test binary uses every helper here
#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Name prefix under which the stub toolchain is installed.
pub const STUB_PREFIX: &str = "rv32-stub-";

pub struct TestSetup {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub tool_prefix: String,
    pub test_dir: TempDir,
}

/// Build a sandbox with input/output directories and a stub toolchain.
///
/// The stub objcopy copies the ELF verbatim; the stub objdump prints the
/// `<elf>.symtab` sidecar file written next to the ELF by the test.
pub fn setup() -> TestSetup {
    let test_dir = TempDir::new().unwrap();
    let input_dir = test_dir.path().join("input");
    let output_dir = test_dir.path().join("output");
    fs::create_dir(&input_dir).unwrap();
    fs::create_dir(&output_dir).unwrap();

    let stub_dir = test_dir.path().join("toolchain");
    fs::create_dir(&stub_dir).unwrap();
    write_script(
        &stub_dir.join(format!("{STUB_PREFIX}objcopy")),
        "#!/bin/sh\n# invoked as: objcopy -O binary <elf> <bin>\nexec cp \"$3\" \"$4\"\n",
    );
    write_script(
        &stub_dir.join(format!("{STUB_PREFIX}objdump")),
        "#!/bin/sh\n# invoked as: objdump -t <elf>\nexec cat \"$2.symtab\"\n",
    );

    TestSetup {
        tool_prefix: stub_dir.join(STUB_PREFIX).to_str().unwrap().to_string(),
        input_dir,
        output_dir,
        test_dir,
    }
}

/// Write an executable shell script.
pub fn write_script(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}

/// Write a fake test binary plus its symbol-table sidecar and signature dump.
pub fn write_test_program(setup: &TestSetup, stem: &str, symtab: &str, signature: &str) {
    let elf_path = setup.input_dir.join(format!("{stem}.elf"));
    fs::write(&elf_path, format!("ELF-IMAGE-{stem}")).unwrap();
    fs::write(setup.input_dir.join(format!("{stem}.elf.symtab")), symtab).unwrap();
    fs::write(
        setup.input_dir.join(format!("{stem}.signature.output")),
        signature,
    )
    .unwrap();
}

/// Symbol-table sidecar text in `objdump -t` shape for the given `.data` symbols.
pub fn symtab_text(symbols: &[(&str, u32)]) -> String {
    let mut text = String::from("SYMBOL TABLE:\n80000000 g       .text\t00000000 _start\n");
    for &(name, addr) in symbols {
        text.push_str(&format!("{addr:08x} g       .data\t00000000 {name}\n"));
    }
    text
}

/// Command for the generator binary, pointed at the sandbox's stub toolchain.
pub fn generator_command(setup: &TestSetup) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_testcase_gen"));
    command
        .arg(&setup.input_dir)
        .arg(&setup.output_dir)
        .arg("--tool-prefix")
        .arg(&setup.tool_prefix);
    command
}
