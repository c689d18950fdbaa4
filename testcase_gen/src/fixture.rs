//! Rendering of expected-result files and case-registration snippets.

use std::collections::BTreeMap;

use crate::error::FixtureError;
use crate::layout::SignatureLayout;

/// Separator line closing each subtest segment in a `.want` file.
pub const SEGMENT_SEPARATOR: &str = "---";

/// Render the expected-result (`.want`) contents for one test case.
///
/// Values are consumed in layout order, one segment per subtest, each word
/// on its own line as 8 lower-case hex digits; every segment, including an
/// empty one, is closed by a separator line. Surplus values are ignored.
pub fn render_expected(layout: &SignatureLayout, values: &[u32]) -> Result<String, FixtureError> {
    let required = layout.total_words();
    if values.len() < required {
        return Err(FixtureError::NotEnoughValues {
            required,
            got: values.len(),
        });
    }

    let mut out = String::new();
    let mut remaining = values;
    for &count in &layout.counts {
        let (segment, rest) = remaining.split_at(count);
        remaining = rest;
        for value in segment {
            out.push_str(&format!("{value:08x}\n"));
        }
        out.push_str(SEGMENT_SEPARATOR);
        out.push('\n');
    }
    Ok(out)
}

/// Render the registration lines for all generated cases, sorted by name.
pub fn render_registrations(cases: &BTreeMap<String, u32>) -> String {
    let mut out = String::new();
    for (name, base) in cases {
        out.push_str(&format!("rv32case!({name}, {base:#010x});\n"));
    }
    out
}
