//! Text presentation helpers
//!
//! Column-aligned `label: value` lines, fixed-width string trimming and the
//! two byte-string renderings (compact hex and 16-byte-row dump).

use pcf_types::trim_fixed;

/// Default column of the `:` separator
pub const DEFAULT_COLON_COLUMN: usize = 32;

/// Spaces per indent level
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Bytes per row in a hex dump
pub const DUMP_ROW_BYTES: usize = 16;

/// Line geometry for rendered output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub colon_column: usize,
    pub indent_width: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            colon_column: DEFAULT_COLON_COLUMN,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl Layout {
    pub fn indent(&self, level: usize) -> String {
        " ".repeat(level * self.indent_width)
    }

    /// `label: value` with the colon at `colon_column` whatever the indent.
    ///
    /// Indentation eats into the label budget; a label that does not fit
    /// pushes the colon right instead of being truncated.
    pub fn line(&self, level: usize, label: &str, value: &str) -> String {
        let mut out = self.indent(level);
        out.push_str(label);
        while out.len() < self.colon_column {
            out.push(' ');
        }
        out.push_str(": ");
        out.push_str(value);
        out
    }

    /// A bare label line, used ahead of multi-line values
    pub fn heading(&self, level: usize, label: &str) -> String {
        let mut out = self.indent(level);
        out.push_str(label);
        out.push(':');
        out
    }
}

/// Trimmed text of a fixed-width character field, lossily decoded
pub fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(trim_fixed(bytes)).into_owned()
}

/// `'trimmed'`, or `''` for an all-blank field
pub fn quoted(bytes: &[u8]) -> String {
    format!("'{}'", text(bytes))
}

/// Contiguous upper-case hex, two characters per byte
pub fn hex_compact(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Printable ASCII shown literally, everything else as `.`
fn ascii_column(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
        .collect()
}

/// 16 bytes per row: hex offset, space-separated byte pairs, ASCII column
pub fn hex_dump(bytes: &[u8]) -> Vec<String> {
    let hex_width = DUMP_ROW_BYTES * 3 - 1;
    bytes
        .chunks(DUMP_ROW_BYTES)
        .enumerate()
        .map(|(row, chunk)| {
            let pairs = chunk
                .iter()
                .map(|b| format!("{:02X}", b))
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                "{:08X}  {:<width$}  |{}|",
                row * DUMP_ROW_BYTES,
                pairs,
                ascii_column(chunk),
                width = hex_width
            )
        })
        .collect()
}

/// `[a, b, c]`
pub fn list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}
