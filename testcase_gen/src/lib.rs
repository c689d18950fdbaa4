//! Fixture generation for RISC-V architectural test binaries.
//!
//! # Fixture Format
//!
//! Each `<name>.elf` test binary in the input directory yields a fixture
//! pair in the output directory:
//!
//! ```text
//! <name>.bin    flat memory image (objcopy -O binary)
//! <name>.want   expected signature words, one segment per subtest
//! ```
//!
//! A `.want` file holds one 8-digit lower-case hex word per line; every
//! subtest segment ends with a `---` separator line. Segment boundaries come
//! from the `begin_signature` / `test_<i>_res` / `end_signature` symbols the
//! RISC-V test macros place in `.data`.
//!
//! After all fixtures are written, the generator emits one registration line
//! per test case for inclusion in the emulator's test suite:
//!
//! ```text
//! rv32case!(add, 0x80002000);
//! ```

mod error;
mod fixture;
mod layout;
mod signature;
mod symtab;

pub use error::{FixtureError, LayoutError, SignatureError};
pub use fixture::{SEGMENT_SEPARATOR, render_expected, render_registrations};
pub use layout::{
    BEGIN_SIGNATURE, END_SIGNATURE, SignatureLayout, WORD_BYTES, test_result_symbol,
};
pub use signature::parse_signature_values;
pub use symtab::{DATA_SECTION, SymbolTable, parse_symbol_table};

/// File extension selecting test binaries in the input directory.
pub const ELF_EXTENSION: &str = "elf";

/// Suffix of the architectural signature dump accompanying each test binary.
pub const SIGNATURE_SUFFIX: &str = ".signature.output";

/// Default name prefix of the cross toolchain's binaries.
pub const DEFAULT_TOOL_PREFIX: &str = "riscv32-unknown-elf-";
