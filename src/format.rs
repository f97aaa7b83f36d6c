//! Textual listing of a code table.

use crate::codes::CodeTable;

/// Line terminator of the host platform.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator of the host platform.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Render `codes` as one `character=code` line per entry, in ascending
/// character order. Every line, including the last, ends with
/// [`LINE_ENDING`].
pub fn format_codes(codes: &CodeTable) -> String {
    let mut out = String::new();
    for (symbol, code) in codes.iter() {
        out.push(symbol);
        out.push('=');
        out.push_str(code);
        out.push_str(LINE_ENDING);
    }
    out
}
